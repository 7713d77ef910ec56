// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Leap-second table — UTC↔TAI correction layer
//!
//! The offset **TAI − UTC** in effect at a UTC instant is read from an
//! ordered table of entries. Each entry takes effect at 00:00:00 UTC on its
//! start MJD and stays in effect until the next entry:
//!
//! ```text
//! TAI − UTC = offset + (MJD_utc − reference_mjd) × drift
//! ```
//!
//! From 1972-01-01 on the drift is zero and the offset is a whole number of
//! seconds. Between 1961 and 1972 UTC was steered by fractional steps plus a
//! linear drift, which the same formula captures.
//!
//! ## Process-wide table
//!
//! A built-in copy of the USNO `tai-utc.dat` table (through 2017-01-01,
//! TAI − UTC = 37 s) is installed lazily on first use. It may be replaced by
//! [`initialize_leap_seconds`] or [`load_leap_seconds_file`]. Replacement is
//! an atomic swap of an `Arc` snapshot: every conversion sees either the old
//! or the new table, never a mixture. Replace the table once at start-up,
//! before concurrent conversions begin; lookups racing a reload are not
//! ordered with respect to it.
//!
//! ## Text format
//!
//! One entry per line. Blank lines and lines starting with `#` are skipped.
//! Three record shapes are accepted:
//!
//! ```text
//!  1961 JAN  1 =JD 2437300.5  TAI-UTC=   1.4228180 S + (MJD - 37300.) X 0.001296 S
//! 41317 10.0
//! 37300 1.4228180 37300 0.001296
//! ```
//!
//! i.e. a USNO record, `MJD offset`, or `MJD offset reference_mjd drift`.
//! Start MJDs must be strictly ascending.

use crate::error::{TimeError, TimeResult};
use crate::scales::{mjd_to_nsecs, nsecs_to_mjd, MJD_EPOCH, NSECS_PER_SEC};
use log::{debug, error, info};
use once_cell::sync::Lazy;
use qtty::{Days, Seconds};
use regex::Regex;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

static USNO_RECORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"=JD\s*(?P<jd>[0-9]+(?:\.[0-9]*)?)\s+TAI-UTC=\s*(?P<offset>[0-9]+(?:\.[0-9]*)?)\s*S\s*\+\s*\(\s*MJD\s*-\s*(?P<reference>[0-9]+(?:\.[0-9]*)?)\s*\)\s*X\s*(?P<drift>[0-9]+(?:\.[0-9]*)?)\s*S",
    )
    .expect("valid USNO record regex")
});

static CURRENT: Lazy<RwLock<Arc<LeapSecondTable>>> = Lazy::new(|| {
    let table = LeapSecondTable::builtin();
    debug!(
        "event=leap_table_install module=leap_seconds status=ok source=builtin entries={}",
        table.len()
    );
    RwLock::new(Arc::new(table))
});

/// Built-in table: (start MJD, TAI−UTC offset s, reference MJD, drift s/day).
/// Source: USNO `tai-utc.dat`.
#[rustfmt::skip]
const BUILTIN: [(f64, f64, f64, f64); 41] = [
    (37_300.0,  1.422_818_0, 37_300.0, 0.001_296),  // 1961-01-01
    (37_512.0,  1.372_818_0, 37_300.0, 0.001_296),  // 1961-08-01
    (37_665.0,  1.845_858_0, 37_665.0, 0.001_123_2), // 1962-01-01
    (38_334.0,  1.945_858_0, 37_665.0, 0.001_123_2), // 1963-11-01
    (38_395.0,  3.240_130_0, 38_761.0, 0.001_296),  // 1964-01-01
    (38_486.0,  3.340_130_0, 38_761.0, 0.001_296),  // 1964-04-01
    (38_639.0,  3.440_130_0, 38_761.0, 0.001_296),  // 1964-09-01
    (38_761.0,  3.540_130_0, 38_761.0, 0.001_296),  // 1965-01-01
    (38_820.0,  3.640_130_0, 38_761.0, 0.001_296),  // 1965-03-01
    (38_942.0,  3.740_130_0, 38_761.0, 0.001_296),  // 1965-07-01
    (39_004.0,  3.840_130_0, 38_761.0, 0.001_296),  // 1965-09-01
    (39_126.0,  4.313_170_0, 39_126.0, 0.002_592),  // 1966-01-01
    (39_887.0,  4.213_170_0, 39_126.0, 0.002_592),  // 1968-02-01
    (41_317.0, 10.0, 41_317.0, 0.0), // 1972-01-01
    (41_499.0, 11.0, 41_317.0, 0.0), // 1972-07-01
    (41_683.0, 12.0, 41_317.0, 0.0), // 1973-01-01
    (42_048.0, 13.0, 41_317.0, 0.0), // 1974-01-01
    (42_413.0, 14.0, 41_317.0, 0.0), // 1975-01-01
    (42_778.0, 15.0, 41_317.0, 0.0), // 1976-01-01
    (43_144.0, 16.0, 41_317.0, 0.0), // 1977-01-01
    (43_509.0, 17.0, 41_317.0, 0.0), // 1978-01-01
    (43_874.0, 18.0, 41_317.0, 0.0), // 1979-01-01
    (44_239.0, 19.0, 41_317.0, 0.0), // 1980-01-01
    (44_786.0, 20.0, 41_317.0, 0.0), // 1981-07-01
    (45_151.0, 21.0, 41_317.0, 0.0), // 1982-07-01
    (45_516.0, 22.0, 41_317.0, 0.0), // 1983-07-01
    (46_247.0, 23.0, 41_317.0, 0.0), // 1985-07-01
    (47_161.0, 24.0, 41_317.0, 0.0), // 1988-01-01
    (47_892.0, 25.0, 41_317.0, 0.0), // 1990-01-01
    (48_257.0, 26.0, 41_317.0, 0.0), // 1991-01-01
    (48_804.0, 27.0, 41_317.0, 0.0), // 1992-07-01
    (49_169.0, 28.0, 41_317.0, 0.0), // 1993-07-01
    (49_534.0, 29.0, 41_317.0, 0.0), // 1994-07-01
    (50_083.0, 30.0, 41_317.0, 0.0), // 1996-01-01
    (50_630.0, 31.0, 41_317.0, 0.0), // 1997-07-01
    (51_179.0, 32.0, 41_317.0, 0.0), // 1999-01-01
    (53_736.0, 33.0, 41_317.0, 0.0), // 2006-01-01
    (54_832.0, 34.0, 41_317.0, 0.0), // 2009-01-01
    (56_109.0, 35.0, 41_317.0, 0.0), // 2012-07-01
    (57_204.0, 36.0, 41_317.0, 0.0), // 2015-07-01
    (57_754.0, 37.0, 41_317.0, 0.0), // 2017-01-01
];

#[inline]
fn seconds_to_nsecs(seconds: Seconds) -> i64 {
    (seconds.value() * NSECS_PER_SEC as f64).round() as i64
}

// ═══════════════════════════════════════════════════════════════════════════
// LeapEntry
// ═══════════════════════════════════════════════════════════════════════════

/// One row of the leap-second table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LeapEntry {
    start_mjd: Days,
    offset: Seconds,
    reference_mjd: Days,
    drift: f64,
    utc_start: i64,
    tai_start: i64,
}

impl LeapEntry {
    /// Build an entry taking effect at 00:00 UTC on `start_mjd`.
    ///
    /// `drift` is in seconds per day. Fails if any value is non-finite or
    /// the start lies outside the 64-bit nanosecond range.
    pub fn new(
        start_mjd: Days,
        offset: Seconds,
        reference_mjd: Days,
        drift: f64,
    ) -> TimeResult<Self> {
        if !offset.value().is_finite() || !reference_mjd.value().is_finite() || !drift.is_finite()
        {
            return Err(TimeError::out_of_range("leap-second entry"));
        }
        let utc_start = mjd_to_nsecs(start_mjd)?;
        let mut entry = Self {
            start_mjd,
            offset,
            reference_mjd,
            drift,
            utc_start,
            tai_start: utc_start,
        };
        entry.tai_start = utc_start
            .checked_add(seconds_to_nsecs(entry.tai_minus_utc_at(start_mjd)))
            .ok_or_else(|| TimeError::out_of_range("leap-second entry"))?;
        Ok(entry)
    }

    /// UTC MJD at which the entry takes effect.
    pub fn start_mjd(&self) -> Days {
        self.start_mjd
    }

    /// Base TAI − UTC offset.
    pub fn offset(&self) -> Seconds {
        self.offset
    }

    /// Reference MJD of the drift term.
    pub fn reference_mjd(&self) -> Days {
        self.reference_mjd
    }

    /// Drift of the offset in seconds per day (zero since 1972).
    pub fn drift(&self) -> f64 {
        self.drift
    }

    /// TAI − UTC under this entry at a UTC MJD.
    #[inline]
    pub fn tai_minus_utc_at(&self, utc_mjd: Days) -> Seconds {
        self.offset + Seconds::new((utc_mjd - self.reference_mjd).value() * self.drift)
    }

    /// TAI − UTC under this entry, solved from a TAI MJD.
    ///
    /// With `m_utc = m_tai − L/86400`, `L = offset + (m_utc − ref)·drift`
    /// gives `L = (offset + (m_tai − ref)·drift) / (1 + drift/86400)`.
    #[inline]
    fn tai_minus_utc_from_tai(&self, tai_mjd: Days) -> Seconds {
        let raw = self.tai_minus_utc_at(tai_mjd);
        Seconds::new(raw.value() / (1.0 + self.drift / 86_400.0))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// LeapSecondTable
// ═══════════════════════════════════════════════════════════════════════════

/// Ordered, non-empty table of [`LeapEntry`] rows.
#[derive(Debug, Clone, PartialEq)]
pub struct LeapSecondTable {
    entries: Vec<LeapEntry>,
}

impl LeapSecondTable {
    /// The built-in USNO table through 2017-01-01.
    pub fn builtin() -> Self {
        let entries: Vec<LeapEntry> = BUILTIN
            .iter()
            .filter_map(|&(start, offset, reference, drift)| {
                LeapEntry::new(
                    Days::new(start),
                    Seconds::new(offset),
                    Days::new(reference),
                    drift,
                )
                .ok()
            })
            .collect();
        debug_assert_eq!(entries.len(), BUILTIN.len(), "built-in leap row rejected");
        Self { entries }
    }

    /// Build a table from entries, which must be non-empty and strictly
    /// ascending in start MJD.
    pub fn from_entries(entries: Vec<LeapEntry>) -> TimeResult<Self> {
        if entries.is_empty() {
            return Err(TimeError::malformed_table(0, "table has no entries"));
        }
        for (i, pair) in entries.windows(2).enumerate() {
            check_ascending(&pair[0], &pair[1], i + 2)?;
        }
        Ok(Self { entries })
    }

    /// Parse table text (see the module docs for the accepted format).
    ///
    /// Fails on the first malformed line; nothing is returned on failure.
    pub fn parse(text: &str) -> TimeResult<Self> {
        let mut entries: Vec<LeapEntry> = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let entry = parse_line(line, line_no)?;
            if let Some(prev) = entries.last() {
                check_ascending(prev, &entry, line_no)?;
            }
            entries.push(entry);
        }
        if entries.is_empty() {
            return Err(TimeError::malformed_table(0, "table has no entries"));
        }
        Ok(Self { entries })
    }

    /// Table rows in ascending order.
    pub fn entries(&self) -> &[LeapEntry] {
        &self.entries
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: a table has at least one row.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// UTC MJD of the first row; UTC is undefined before it.
    pub fn first_mjd(&self) -> Days {
        self.entries
            .first()
            .map_or(Days::new(f64::INFINITY), |e| e.start_mjd)
    }

    fn before_era(&self, nsecs: i64) -> TimeError {
        TimeError::BeforeUtcEra {
            mjd: nsecs_to_mjd(nsecs).value(),
            first_mjd: self.first_mjd().value(),
        }
    }

    /// Latest row whose UTC start is at or before `utc_nsecs`.
    fn entry_for_utc(&self, utc_nsecs: i64) -> Option<&LeapEntry> {
        let idx = self.entries.partition_point(|e| e.utc_start <= utc_nsecs);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }

    /// Latest row whose TAI start is at or before `tai_nsecs`.
    fn entry_for_tai(&self, tai_nsecs: i64) -> Option<&LeapEntry> {
        let idx = self.entries.partition_point(|e| e.tai_start <= tai_nsecs);
        idx.checked_sub(1).map(|i| &self.entries[i])
    }

    /// TAI − UTC in effect at a UTC instant (nanoseconds since the epoch).
    pub fn tai_minus_utc(&self, utc_nsecs: i64) -> TimeResult<Seconds> {
        let entry = self
            .entry_for_utc(utc_nsecs)
            .ok_or_else(|| self.before_era(utc_nsecs))?;
        Ok(entry.tai_minus_utc_at(nsecs_to_mjd(utc_nsecs)))
    }

    /// Convert UTC nanoseconds since the epoch to TAI nanoseconds.
    pub fn utc_to_tai(&self, utc_nsecs: i64) -> TimeResult<i64> {
        let leap = self.tai_minus_utc(utc_nsecs)?;
        utc_nsecs
            .checked_add(seconds_to_nsecs(leap))
            .ok_or_else(|| TimeError::out_of_range("UTC instant"))
    }

    /// Convert TAI nanoseconds since the epoch to UTC nanoseconds.
    ///
    /// The row is located by its TAI start, i.e. the row whose range holds
    /// the UTC result. TAI instants inside an inserted leap second map onto
    /// the first second of the following UTC day.
    pub fn tai_to_utc(&self, tai_nsecs: i64) -> TimeResult<i64> {
        let entry = self
            .entry_for_tai(tai_nsecs)
            .ok_or_else(|| self.before_era(tai_nsecs))?;
        let leap = entry.tai_minus_utc_from_tai(nsecs_to_mjd(tai_nsecs));
        let mut utc = tai_nsecs
            .checked_sub(seconds_to_nsecs(leap))
            .ok_or_else(|| TimeError::out_of_range("TAI instant"))?;
        if entry.drift != 0.0 {
            // Settle nanosecond rounding on the fixed point of utc + L(utc) = tai.
            for _ in 0..2 {
                let leap = entry.tai_minus_utc_at(nsecs_to_mjd(utc));
                utc = tai_nsecs.saturating_sub(seconds_to_nsecs(leap));
            }
        }
        Ok(utc)
    }
}

impl Default for LeapSecondTable {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Start MJDs must be strictly ascending.
fn check_ascending(prev: &LeapEntry, next: &LeapEntry, line_no: usize) -> TimeResult<()> {
    if next.start_mjd <= prev.start_mjd {
        return Err(TimeError::malformed_table(
            line_no,
            format!(
                "start MJD {} does not follow {}",
                next.start_mjd.value(),
                prev.start_mjd.value()
            ),
        ));
    }
    Ok(())
}

fn parse_number(field: &str, what: &str, line_no: usize) -> TimeResult<f64> {
    field
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| TimeError::malformed_table(line_no, format!("bad {what} {field:?}")))
}

fn parse_line(line: &str, line_no: usize) -> TimeResult<LeapEntry> {
    let (start, offset, reference, drift) = if line.contains("=JD") {
        let caps = USNO_RECORD_RE
            .captures(line)
            .ok_or_else(|| TimeError::malformed_table(line_no, "unrecognised USNO record"))?;
        let jd = parse_number(&caps["jd"], "Julian date", line_no)?;
        (
            (Days::new(jd) - MJD_EPOCH).value(),
            parse_number(&caps["offset"], "offset", line_no)?,
            parse_number(&caps["reference"], "reference MJD", line_no)?,
            parse_number(&caps["drift"], "drift", line_no)?,
        )
    } else {
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            [mjd, offset] => {
                let mjd = parse_number(mjd, "MJD", line_no)?;
                (mjd, parse_number(offset, "offset", line_no)?, mjd, 0.0)
            }
            [mjd, offset, reference, drift] => (
                parse_number(mjd, "MJD", line_no)?,
                parse_number(offset, "offset", line_no)?,
                parse_number(reference, "reference MJD", line_no)?,
                parse_number(drift, "drift", line_no)?,
            ),
            _ => {
                return Err(TimeError::malformed_table(
                    line_no,
                    format!("expected 2 or 4 fields, found {}", fields.len()),
                ))
            }
        }
    };
    LeapEntry::new(
        Days::new(start),
        Seconds::new(offset),
        Days::new(reference),
        drift,
    )
    .map_err(|err| TimeError::malformed_table(line_no, err.to_string()))
}

// ═══════════════════════════════════════════════════════════════════════════
// Process-wide table
// ═══════════════════════════════════════════════════════════════════════════

/// Snapshot of the process-wide table.
pub fn current_table() -> Arc<LeapSecondTable> {
    CURRENT
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Replace the process-wide table.
pub fn set_leap_second_table(table: LeapSecondTable) {
    let table = Arc::new(table);
    *CURRENT.write().unwrap_or_else(PoisonError::into_inner) = table;
}

/// Restore the built-in table.
pub fn reset_leap_seconds() {
    set_leap_second_table(LeapSecondTable::builtin());
    debug!("event=leap_table_install module=leap_seconds status=ok source=builtin");
}

/// Parse `text` and install it as the process-wide table.
///
/// On error the previous table stays in place.
pub fn initialize_leap_seconds(text: &str) -> TimeResult<()> {
    match LeapSecondTable::parse(text) {
        Ok(table) => {
            info!(
                "event=leap_table_load module=leap_seconds status=ok entries={} first_mjd={}",
                table.len(),
                table.first_mjd().value()
            );
            set_leap_second_table(table);
            Ok(())
        }
        Err(err) => {
            error!(
                "event=leap_table_load module=leap_seconds status=error error={}",
                err
            );
            Err(err)
        }
    }
}

/// Read a table file and install it as the process-wide table.
pub fn load_leap_seconds_file(path: impl AsRef<Path>) -> TimeResult<()> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|err| {
        error!(
            "event=leap_table_read module=leap_seconds status=error path={} error={}",
            path.display(),
            err
        );
        TimeError::LeapTableIo {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    })?;
    initialize_leap_seconds(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::NSECS_PER_DAY;

    const USNO_EXCERPT: &str = "\
 1961 JAN  1 =JD 2437300.5  TAI-UTC=   1.4228180 S + (MJD - 37300.) X 0.001296 S
 1962 JAN  1 =JD 2437665.5  TAI-UTC=   1.8458580 S + (MJD - 37665.) X 0.0011232S
 1972 JAN  1 =JD 2441317.5  TAI-UTC=  10.0       S + (MJD - 41317.) X 0.0      S
 2017 JAN  1 =JD 2457754.5  TAI-UTC=  37.0       S + (MJD - 41317.) X 0.0      S
";

    fn utc_nsecs_of_mjd(mjd: f64) -> i64 {
        mjd_to_nsecs(Days::new(mjd)).unwrap()
    }

    #[test]
    fn builtin_has_all_rows() {
        let table = LeapSecondTable::builtin();
        assert_eq!(table.len(), 41);
        assert_eq!(table.first_mjd(), Days::new(37_300.0));
    }

    #[test]
    fn builtin_keeps_every_row_in_order() {
        let table = LeapSecondTable::builtin();
        assert_eq!(table.len(), BUILTIN.len());
        let rows = table.entries().iter().zip(BUILTIN.iter());
        for (entry, &(start, offset, reference, drift)) in rows {
            assert_eq!(entry.start_mjd(), Days::new(start));
            assert_eq!(entry.offset(), Seconds::new(offset));
            assert_eq!(entry.reference_mjd(), Days::new(reference));
            assert_eq!(entry.drift(), drift);
        }
        assert_eq!(LeapSecondTable::from_entries(table.entries().to_vec()), Ok(table));
    }

    #[test]
    fn offset_at_1970_includes_drift() {
        let table = LeapSecondTable::builtin();
        let offset = table.tai_minus_utc(0).unwrap();
        assert!((offset - Seconds::new(8.000_082)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn offset_steps_at_2017() {
        let table = LeapSecondTable::builtin();
        let start = utc_nsecs_of_mjd(57_754.0);
        assert_eq!(table.tai_minus_utc(start - 1).unwrap(), Seconds::new(36.0));
        assert_eq!(table.tai_minus_utc(start).unwrap(), Seconds::new(37.0));
    }

    #[test]
    fn before_first_entry_fails() {
        let table = LeapSecondTable::builtin();
        let start = utc_nsecs_of_mjd(37_300.0);
        assert!(table.tai_minus_utc(start).is_ok());
        let err = table.tai_minus_utc(start - 1).unwrap_err();
        assert!(matches!(err, TimeError::BeforeUtcEra { .. }));
    }

    #[test]
    fn tai_before_first_utc_result_fails() {
        // 1961-01-01T00:00:00 TAI up to the first offset (1.4228180 s) maps
        // to UTC before 1961.
        let table = LeapSecondTable::builtin();
        let start = utc_nsecs_of_mjd(37_300.0);
        for tai in [start, start + NSECS_PER_SEC, start + 1_422_817_999] {
            let err = table.tai_to_utc(tai).unwrap_err();
            assert!(matches!(err, TimeError::BeforeUtcEra { .. }), "tai = {tai}");
        }
        assert_eq!(table.tai_to_utc(start + 1_422_818_000), Ok(start));
    }

    #[test]
    fn utc_tai_roundtrip_modern() {
        let table = LeapSecondTable::builtin();
        let utc = utc_nsecs_of_mjd(58_849.0) + 123_456_789;
        let tai = table.utc_to_tai(utc).unwrap();
        assert_eq!(tai - utc, 37 * NSECS_PER_SEC);
        assert_eq!(table.tai_to_utc(tai).unwrap(), utc);
    }

    #[test]
    fn utc_tai_roundtrip_drift_era() {
        let table = LeapSecondTable::builtin();
        for utc in [0, 1_234_567_890_123, -86_400 * NSECS_PER_SEC * 2000] {
            let tai = table.utc_to_tai(utc).unwrap();
            assert_eq!(table.tai_to_utc(tai).unwrap(), utc, "utc = {utc}");
        }
    }

    #[test]
    fn tai_lookup_uses_result_range() {
        // TAI just after the 2017 step: UTC result is 2017-01-01T00:00:00.
        let table = LeapSecondTable::builtin();
        let utc_start = utc_nsecs_of_mjd(57_754.0);
        let tai = utc_start + 37 * NSECS_PER_SEC;
        assert_eq!(table.tai_to_utc(tai).unwrap(), utc_start);
        // One nanosecond earlier is still under the 36 s row.
        assert_eq!(table.tai_to_utc(tai - 1).unwrap(), tai - 1 - 36 * NSECS_PER_SEC);
    }

    #[test]
    fn parse_usno_records() {
        let table = LeapSecondTable::parse(USNO_EXCERPT).unwrap();
        assert_eq!(table.len(), 4);
        let builtin = LeapSecondTable::builtin();
        assert_eq!(table.entries()[0], builtin.entries()[0]);
        assert_eq!(table.entries()[1], builtin.entries()[2]);
        assert_eq!(table.entries()[3], builtin.entries()[40]);
        assert!((table.entries()[1].drift() - 0.001_123_2).abs() < 1e-12);
    }

    #[test]
    fn parse_plain_columns() {
        let text = "# mjd offset\n\n41317 10\n41499 11.0\n37300 1.4 37300 0.001\n";
        // Third row is out of order.
        let err = LeapSecondTable::parse(text).unwrap_err();
        assert_eq!(
            err,
            TimeError::malformed_table(5, "start MJD 37300 does not follow 41499")
        );
        let rows = LeapSecondTable::parse("41317 10\n41499 11.0\n").unwrap();
        let mut reversed = rows.entries().to_vec();
        reversed.reverse();
        assert_eq!(
            LeapSecondTable::from_entries(reversed).unwrap_err(),
            TimeError::malformed_table(2, "start MJD 41317 does not follow 41499")
        );

        let table = LeapSecondTable::parse("41317 10\n41499 11.0\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[1].offset(), Seconds::new(11.0));
        assert_eq!(table.entries()[1].reference_mjd(), Days::new(41_499.0));
    }

    #[test]
    fn parse_rejects_bad_lines() {
        for text in ["41317", "41317 ten", "41317 10 1", " 1972 JAN  1 =JD 2441317.5 garbage", ""] {
            let err = LeapSecondTable::parse(text).unwrap_err();
            assert!(
                matches!(err, TimeError::MalformedLeapTable { .. }),
                "{text:?} -> {err:?}"
            );
        }
    }

    #[test]
    fn from_entries_rejects_empty() {
        assert!(LeapSecondTable::from_entries(Vec::new()).is_err());
    }
}
