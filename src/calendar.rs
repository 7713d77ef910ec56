// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Broken-down calendar time and ISO 8601 text.
//!
//! All functions here work on nanosecond counts that are already expressed
//! in the caller's time scale; scale conversion happens in
//! [`Instant`](crate::Instant).

use crate::error::{TimeError, TimeResult};
use crate::scales::NSECS_PER_SEC;
use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Earliest year accepted by calendar construction.
pub const MIN_YEAR: i32 = 1902;

/// Latest year accepted by calendar construction.
pub const MAX_YEAR: i32 = 2261;

static ISO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^([0-9]{4})-?([0-9]{2})-?([0-9]{2})T([0-9]{2}):?([0-9]{2}):?([0-9]{2})(?:[.,]([0-9]*))?(Z)?$",
    )
    .expect("valid ISO 8601 regex")
});

/// Gregorian calendar breakdown with whole seconds (fraction truncated).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct CalendarTime {
    pub year: i32,
    /// January = 1.
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Days since Sunday (0–6).
    pub weekday: u32,
    /// Days since January 1 (0–365).
    pub day_of_year: u32,
}

impl CalendarTime {
    fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            weekday: dt.weekday().num_days_from_sunday(),
            day_of_year: dt.ordinal0(),
        }
    }
}

/// Seconds and nanoseconds since the epoch; `nanoseconds` is always in `0..1e9`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Timespec {
    pub seconds: i64,
    pub nanoseconds: u32,
}

impl Timespec {
    pub(crate) fn from_nsecs(nsecs: i64) -> Self {
        Self {
            seconds: nsecs.div_euclid(NSECS_PER_SEC),
            nanoseconds: nsecs.rem_euclid(NSECS_PER_SEC) as u32,
        }
    }
}

/// Seconds and microseconds since the epoch; sub-microsecond digits are truncated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Timeval {
    pub seconds: i64,
    pub microseconds: u32,
}

impl From<Timespec> for Timeval {
    fn from(ts: Timespec) -> Self {
        Self {
            seconds: ts.seconds,
            microseconds: ts.nanoseconds / 1_000,
        }
    }
}

/// Interpret a nanosecond count as a clock reading (no scale semantics).
pub(crate) fn nsecs_to_datetime(nsecs: i64) -> TimeResult<DateTime<Utc>> {
    let ts = Timespec::from_nsecs(nsecs);
    DateTime::<Utc>::from_timestamp(ts.seconds, ts.nanoseconds)
        .ok_or_else(|| TimeError::out_of_range(format!("{nsecs} ns")))
}

pub(crate) fn nsecs_to_calendar(nsecs: i64) -> TimeResult<CalendarTime> {
    nsecs_to_datetime(nsecs).map(|dt| CalendarTime::from_datetime(&dt))
}

/// Nanoseconds since the epoch for calendar fields.
///
/// `second` may be 60 and is then carried into the next minute.
pub(crate) fn calendar_to_nsecs(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
) -> TimeResult<i64> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(TimeError::YearOutOfRange {
            year,
            min: MIN_YEAR,
            max: MAX_YEAR,
        });
    }
    let invalid = || TimeError::InvalidCalendar {
        year,
        month,
        day,
        hour,
        minute,
        second,
    };
    let (clock_second, carry) = if second == 60 { (59, 1) } else { (second, 0) };
    let time = NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, clock_second))
        .ok_or_else(invalid)?;
    (time.and_utc().timestamp() + carry)
        .checked_mul(NSECS_PER_SEC)
        .ok_or_else(|| TimeError::out_of_range(format!("year {year}")))
}

/// Parse `yyyy-mm-ddThh:mm:ss[.fff][Z]` into nanoseconds since the epoch.
///
/// The `-` and `:` separators are optional, the decimal point may be a
/// comma, and digits past nanoseconds are dropped. The trailing `Z` must be
/// present exactly when `utc` is set.
pub(crate) fn parse_iso8601(text: &str, utc: bool) -> TimeResult<i64> {
    let caps = ISO_RE
        .captures(text)
        .ok_or_else(|| TimeError::malformed_iso(text, "expected yyyy-mm-ddThh:mm:ss[.f][Z]"))?;
    match (utc, caps.get(8).is_some()) {
        (true, false) => return Err(TimeError::malformed_iso(text, "UTC requires a trailing 'Z'")),
        (false, true) => {
            return Err(TimeError::malformed_iso(
                text,
                "trailing 'Z' is only allowed for UTC",
            ))
        }
        _ => {}
    }

    let field = |i: usize| -> TimeResult<u32> {
        caps[i]
            .parse::<u32>()
            .map_err(|_| TimeError::malformed_iso(text, "bad numeric field"))
    };
    let year = caps[1]
        .parse::<i32>()
        .map_err(|_| TimeError::malformed_iso(text, "bad year"))?;
    let whole = calendar_to_nsecs(year, field(2)?, field(3)?, field(4)?, field(5)?, field(6)?)?;

    let fraction = caps.get(7).map_or("", |m| m.as_str());
    let digits: String = fraction
        .chars()
        .chain(std::iter::repeat('0'))
        .take(9)
        .collect();
    let frac_nsecs = digits
        .parse::<i64>()
        .map_err(|_| TimeError::malformed_iso(text, "bad fractional seconds"))?;

    whole
        .checked_add(frac_nsecs)
        .ok_or_else(|| TimeError::out_of_range(text.to_string()))
}

/// Format nanoseconds since the epoch as `yyyy-mm-ddThh:mm:ss.sssssssss`,
/// followed by `Z` when `utc` is set.
pub(crate) fn format_iso8601(nsecs: i64, utc: bool) -> TimeResult<String> {
    let dt = nsecs_to_datetime(nsecs)?;
    Ok(format!(
        "{}{}",
        dt.format("%Y-%m-%dT%H:%M:%S%.9f"),
        if utc { "Z" } else { "" }
    ))
}
