use chrono::{TimeZone, Utc};
use nanotai::{DateSystem, ErrorKind, Instant, Timescale, INVALID_NSECS, NSECS_PER_SEC};

#[test]
fn mjd_of_2000_tai_midnight() {
    let t = Instant::from_calendar(2000, 1, 1, 0, 0, 0, Timescale::TAI).unwrap();
    assert_eq!(t.get(DateSystem::MJD, Timescale::TAI).unwrap(), 51_544.0);
}

#[test]
fn iso_string_roundtrips_through_every_scale() {
    let inputs = [
        ("1972-06-30T23:59:59.999999999Z", Timescale::UTC),
        ("1965-03-15T08:30:00.25Z", Timescale::UTC),
        ("2261-12-31T23:58:00.000000001", Timescale::TAI),
        ("19020101T000100", Timescale::TT),
    ];
    for (text, scale) in inputs {
        let t = Instant::parse(text, scale).unwrap();
        for out in [Timescale::TAI, Timescale::UTC, Timescale::TT] {
            if out == Timescale::UTC && t.nsecs(Timescale::UTC).is_err() {
                continue;
            }
            let iso = t.to_iso_string(out).unwrap();
            assert_eq!(Instant::parse(&iso, out).unwrap(), t, "{text} via {out}: {iso}");
        }
    }
}

#[test]
fn leap_second_is_visible_in_tai() {
    let before = Instant::parse("2016-12-31T23:59:59Z", Timescale::UTC).unwrap();
    let after = Instant::parse("2017-01-01T00:00:00Z", Timescale::UTC).unwrap();
    let gap = after.nsecs(Timescale::TAI).unwrap() - before.nsecs(Timescale::TAI).unwrap();
    assert_eq!(gap, 2 * NSECS_PER_SEC);

    let utc_gap = after.nsecs(Timescale::UTC).unwrap() - before.nsecs(Timescale::UTC).unwrap();
    assert_eq!(utc_gap, NSECS_PER_SEC);
}

#[test]
fn utc_undefined_before_1961() {
    let t = Instant::from_calendar(1960, 12, 31, 23, 59, 59, Timescale::TT).unwrap();
    for scale in [Timescale::TAI, Timescale::TT] {
        assert!(t.get(DateSystem::JD, scale).is_ok());
        assert!(t.to_timespec(scale).is_ok());
    }
    let err = t.to_timeval(Timescale::UTC).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);

    let first = Instant::parse("1961-01-01T00:00:00Z", Timescale::UTC).unwrap();
    assert_eq!(
        first.get(DateSystem::MJD, Timescale::UTC).unwrap(),
        37_300.0
    );
}

#[test]
fn invalid_instant_contract() {
    let t = Instant::default();
    assert!(!t.is_valid());
    assert_eq!(t.nsecs(Timescale::UTC).unwrap(), INVALID_NSECS);
    assert_eq!(
        t.get(DateSystem::Epoch, Timescale::TT).unwrap_err().kind(),
        ErrorKind::State
    );
    assert_eq!(t.to_iso_string(Timescale::TAI).unwrap_err().kind(), ErrorKind::State);
    assert_eq!(t, Instant::from_nsecs(INVALID_NSECS, Timescale::UTC).unwrap());
}

#[test]
fn calendar_boundaries() {
    let err = Instant::from_calendar(1901, 12, 31, 0, 0, 0, Timescale::TAI).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
    assert!(Instant::from_calendar(1902, 1, 1, 0, 0, 0, Timescale::TAI).is_ok());
    assert!(Instant::from_calendar(2261, 1, 1, 0, 0, 0, Timescale::TAI).is_ok());
    let err = Instant::from_calendar(2262, 1, 1, 0, 0, 0, Timescale::TAI).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Domain);
}

#[test]
fn chrono_interop() {
    let dt = Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap();
    let t = Instant::from_utc_datetime(dt).unwrap();
    assert_eq!(t.to_datetime(Timescale::UTC).unwrap(), dt);
    let tai = t.to_datetime(Timescale::TAI).unwrap();
    assert_eq!((tai - dt).num_seconds(), 37);
}

#[test]
fn epoch_year_of_j2000() {
    let t = Instant::from_value(2000.0, DateSystem::Epoch, Timescale::TT).unwrap();
    assert_eq!(
        t.to_iso_string(Timescale::TT).unwrap(),
        "2000-01-01T12:00:00.000000000"
    );
    assert!((t.get(DateSystem::JD, Timescale::TT).unwrap() - 2_451_545.0).abs() < 1e-9);
}

#[cfg(feature = "serde")]
#[test]
fn serde_uses_tai_nanoseconds() {
    let t = Instant::from_nsecs(42, Timescale::TAI).unwrap();
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "42");
    let back: Instant = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);
}
