// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The nanosecond TAI instant.
//!
//! [`Instant`] stores a single `i64` count of nanoseconds since
//! 1970-01-01T00:00:00 **TAI**. Every other representation (UTC, TT, JD,
//! MJD, Julian epoch, calendar fields, ISO 8601 text) is computed on demand.
//! UTC conversions consult the process-wide
//! [`LeapSecondTable`](crate::LeapSecondTable); the `*_with` variants take an
//! explicit table instead.
//!
//! The reserved count [`INVALID_NSECS`] marks the invalid instant produced by
//! [`Instant::default`]. Representation accessors fail on it with
//! [`TimeError::InvalidInstant`]; [`Instant::nsecs`] hands the sentinel back
//! instead.

use crate::calendar::{self, CalendarTime, Timespec, Timeval};
use crate::error::{TimeError, TimeResult};
use crate::leap_seconds::{current_table, LeapSecondTable};
use crate::scales::{mjd_to_nsecs, nsecs_to_mjd, DateSystem, Timescale};
use chrono::{DateTime, Utc};
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Nanosecond count reserved for the invalid instant.
pub const INVALID_NSECS: i64 = i64::MIN;

/// A point in time, stored as TAI nanoseconds since the Unix epoch.
///
/// Two instants are equal iff their TAI counts are equal; all invalid
/// instants compare equal to each other.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Instant {
    nsecs_tai: i64,
}

impl Default for Instant {
    /// The invalid instant.
    #[inline]
    fn default() -> Self {
        Self::INVALID
    }
}

impl Instant {
    /// The invalid instant.
    pub const INVALID: Self = Self {
        nsecs_tai: INVALID_NSECS,
    };

    // ── constructors ──────────────────────────────────────────────────

    /// Create from TAI nanoseconds since the epoch without any conversion.
    #[inline]
    pub const fn from_tai_nsecs(nsecs_tai: i64) -> Self {
        Self { nsecs_tai }
    }

    /// Create from nanoseconds since the epoch on `scale`.
    ///
    /// [`INVALID_NSECS`] yields the invalid instant whatever the scale.
    pub fn from_nsecs(nsecs: i64, scale: Timescale) -> TimeResult<Self> {
        Self::from_nsecs_with(nsecs, scale, &current_table())
    }

    /// [`from_nsecs`](Self::from_nsecs) against an explicit leap-second table.
    pub fn from_nsecs_with(
        nsecs: i64,
        scale: Timescale,
        table: &LeapSecondTable,
    ) -> TimeResult<Self> {
        if nsecs == INVALID_NSECS {
            return Ok(Self::INVALID);
        }
        match scale.to_tai_nsecs(nsecs, table)? {
            INVALID_NSECS => Err(TimeError::out_of_range(format!("{scale} instant"))),
            tai => Ok(Self::from_tai_nsecs(tai)),
        }
    }

    /// Create from a date `value` in `system` on `scale`.
    ///
    /// ```
    /// use nanotai::{DateSystem, Instant, Timescale};
    ///
    /// let t = Instant::from_value(51_544.0, DateSystem::MJD, Timescale::TAI).unwrap();
    /// assert_eq!(t.to_iso_string(Timescale::TAI).unwrap(), "2000-01-01T00:00:00.000000000");
    /// ```
    pub fn from_value(value: f64, system: DateSystem, scale: Timescale) -> TimeResult<Self> {
        let nsecs = mjd_to_nsecs(system.to_mjd(value))?;
        Self::from_nsecs(nsecs, scale)
    }

    /// Create from Gregorian calendar fields on `scale`.
    ///
    /// `year` must lie in [1902, 2261]. `second` may be 60.
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        scale: Timescale,
    ) -> TimeResult<Self> {
        let nsecs = calendar::calendar_to_nsecs(year, month, day, hour, minute, second)?;
        Self::from_nsecs(nsecs, scale)
    }

    /// Parse `yyyy-mm-ddThh:mm:ss[.fff][Z]` on `scale`.
    ///
    /// The trailing `Z` is required for UTC and rejected for TAI and TT.
    pub fn parse(text: &str, scale: Timescale) -> TimeResult<Self> {
        let nsecs = calendar::parse_iso8601(text, scale == Timescale::UTC)?;
        Self::from_nsecs(nsecs, scale)
    }

    /// Create from a `chrono` UTC timestamp (leap seconds applied).
    pub fn from_utc_datetime(datetime: DateTime<Utc>) -> TimeResult<Self> {
        let nsecs = datetime
            .timestamp_nanos_opt()
            .ok_or_else(|| TimeError::out_of_range(datetime.to_rfc3339()))?;
        Self::from_nsecs(nsecs, Timescale::UTC)
    }

    /// Current time, read from the system clock (assumed to keep UTC).
    pub fn now() -> TimeResult<Self> {
        let now = Utc::now();
        debug!(
            "event=clock_read module=instant unix_nsecs={:?}",
            now.timestamp_nanos_opt()
        );
        Self::from_utc_datetime(now)
    }

    // ── accessors ─────────────────────────────────────────────────────

    /// `false` only for the invalid instant.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.nsecs_tai != INVALID_NSECS
    }

    /// Nanoseconds since the epoch on `scale`.
    ///
    /// Returns `Ok(INVALID_NSECS)` for the invalid instant. UTC before the
    /// first leap-table entry fails with a domain error.
    pub fn nsecs(&self, scale: Timescale) -> TimeResult<i64> {
        self.nsecs_with(scale, &current_table())
    }

    /// [`nsecs`](Self::nsecs) against an explicit leap-second table.
    pub fn nsecs_with(&self, scale: Timescale, table: &LeapSecondTable) -> TimeResult<i64> {
        if !self.is_valid() {
            return Ok(INVALID_NSECS);
        }
        scale.nsecs_from_tai(self.nsecs_tai, table)
    }

    fn checked_nsecs(&self, scale: Timescale) -> TimeResult<i64> {
        if !self.is_valid() {
            return Err(TimeError::InvalidInstant);
        }
        scale.nsecs_from_tai(self.nsecs_tai, &current_table())
    }

    /// Date as a JD, MJD or Julian epoch year on `scale`.
    pub fn get(&self, system: DateSystem, scale: Timescale) -> TimeResult<f64> {
        let nsecs = self.checked_nsecs(scale)?;
        Ok(system.value_at(nsecs_to_mjd(nsecs)))
    }

    /// `yyyy-mm-ddThh:mm:ss.sssssssss`, with a trailing `Z` iff `scale` is UTC.
    pub fn to_iso_string(&self, scale: Timescale) -> TimeResult<String> {
        let nsecs = self.checked_nsecs(scale)?;
        calendar::format_iso8601(nsecs, scale == Timescale::UTC)
    }

    /// Calendar breakdown on `scale`, fractional seconds truncated.
    pub fn to_calendar(&self, scale: Timescale) -> TimeResult<CalendarTime> {
        calendar::nsecs_to_calendar(self.checked_nsecs(scale)?)
    }

    /// Whole seconds and nanoseconds on `scale`.
    pub fn to_timespec(&self, scale: Timescale) -> TimeResult<Timespec> {
        self.checked_nsecs(scale).map(Timespec::from_nsecs)
    }

    /// Whole seconds and microseconds on `scale` (truncated).
    pub fn to_timeval(&self, scale: Timescale) -> TimeResult<Timeval> {
        self.to_timespec(scale).map(Timeval::from)
    }

    /// The clock reading on `scale` as a `chrono` timestamp.
    ///
    /// The result is a broken-down reading only; for TAI and TT its
    /// `Utc` zone tag carries no UTC meaning.
    pub fn to_datetime(&self, scale: Timescale) -> TimeResult<DateTime<Utc>> {
        calendar::nsecs_to_datetime(self.checked_nsecs(scale)?)
    }

    /// Hash of the TAI count, stable across processes and releases.
    ///
    /// This is the count's bit pattern; use the `Hash` impl for hash maps.
    #[inline]
    pub const fn hash_value(&self) -> u64 {
        self.nsecs_tai as u64
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.is_valid() {
            return f.write_str("invalid");
        }
        match calendar::format_iso8601(self.nsecs_tai, false) {
            Ok(text) => write!(f, "{} {}", Timescale::TAI, text),
            Err(_) => write!(f, "{} {} ns", Timescale::TAI, self.nsecs_tai),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Instant {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        serializer.serialize_i64(self.nsecs_tai)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = i64::deserialize(deserializer)?;
        Ok(Self::from_tai_nsecs(v))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
