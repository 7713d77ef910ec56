// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time scales and date systems.
//!
//! An [`Instant`](crate::Instant) always stores TAI nanoseconds since the Unix
//! epoch. This module defines how other representations relate to that
//! canonical count.
//!
//! # Time scales
//!
//! | Variant | Description | Relation to TAI |
//! |---------|-------------|-----------------|
//! | [`Timescale::TAI`] | International Atomic Time | identity |
//! | [`Timescale::TT`]  | Terrestrial Time | `TT = TAI + 32.184 s` |
//! | [`Timescale::UTC`] | Coordinated Universal Time | `TAI = UTC + (TAI − UTC)` from the leap-second table |
//!
//! # Date systems
//!
//! | Variant | Description | Epoch |
//! |---------|-------------|-------|
//! | [`DateSystem::JD`] | Julian Date | JD 0.0 |
//! | [`DateSystem::MJD`] | Modified Julian Date | JD 2 400 000.5 |
//! | [`DateSystem::Epoch`] | Julian epoch year | J2000.0 = MJD 51 544.5, 365.25 days per year |

use crate::error::{TimeError, TimeResult};
use crate::leap_seconds::LeapSecondTable;
use qtty::{Days, Seconds, Simplify};
use std::fmt;
use std::str::FromStr;

/// Nanoseconds in one SI second.
pub const NSECS_PER_SEC: i64 = 1_000_000_000;

/// Nanoseconds in one day of 86 400 s.
pub const NSECS_PER_DAY: i64 = 86_400 * NSECS_PER_SEC;

/// MJD of the Unix epoch (1970-01-01T00:00:00).
pub const UNIX_EPOCH_MJD: Days = Days::new(40_587.0);

/// The constant offset between JD and MJD: `JD = MJD + MJD_EPOCH`.
pub const MJD_EPOCH: Days = Days::new(2_400_000.5);

/// J2000.0 epoch (2000-01-01T12:00:00) as an MJD.
pub const J2000_MJD: Days = Days::new(51_544.5);

/// One Julian year expressed in days.
pub const JULIAN_YEAR: Days = Days::new(365.25);

/// `TT = TAI + 32.184 s`.
pub const TT_MINUS_TAI: Seconds = Seconds::new(32.184);

const TT_MINUS_TAI_NSECS: i64 = 32_184_000_000;

/// Largest distance from the Unix epoch, in days, that fits in `i64` nanoseconds.
const MAX_DAYS_FROM_EPOCH: f64 = 106_751.99;

// ---------------------------------------------------------------------------
// Timescale
// ---------------------------------------------------------------------------

/// Physical time scale of a nanosecond count or date value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Timescale {
    /// International Atomic Time.
    TAI,
    /// Coordinated Universal Time.
    UTC,
    /// Terrestrial Time.
    TT,
}

impl Timescale {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::TAI => "TAI",
            Self::UTC => "UTC",
            Self::TT => "TT",
        }
    }

    /// Convert nanoseconds since the epoch on this scale to TAI nanoseconds.
    ///
    /// UTC input before the first table entry fails with
    /// [`TimeError::BeforeUtcEra`].
    pub fn to_tai_nsecs(self, nsecs: i64, table: &LeapSecondTable) -> TimeResult<i64> {
        match self {
            Self::TAI => Ok(nsecs),
            Self::TT => nsecs
                .checked_sub(TT_MINUS_TAI_NSECS)
                .ok_or_else(|| TimeError::out_of_range("TT instant")),
            Self::UTC => table.utc_to_tai(nsecs),
        }
    }

    /// Convert TAI nanoseconds since the epoch to nanoseconds on this scale.
    pub fn nsecs_from_tai(self, tai_nsecs: i64, table: &LeapSecondTable) -> TimeResult<i64> {
        match self {
            Self::TAI => Ok(tai_nsecs),
            Self::TT => tai_nsecs
                .checked_add(TT_MINUS_TAI_NSECS)
                .ok_or_else(|| TimeError::out_of_range("TT instant")),
            Self::UTC => table.tai_to_utc(tai_nsecs),
        }
    }
}

impl fmt::Display for Timescale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Timescale {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "TAI" => Ok(Self::TAI),
            "UTC" => Ok(Self::UTC),
            "TT" => Ok(Self::TT),
            _ => Err(TimeError::UnknownName {
                what: "time scale",
                name: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// DateSystem
// ---------------------------------------------------------------------------

/// Floating-point representation of a date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DateSystem {
    /// Julian Date.
    JD,
    /// Modified Julian Date, `JD − 2 400 000.5`.
    MJD,
    /// Julian epoch year, e.g. `2000.0` for J2000.
    Epoch,
}

impl DateSystem {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::JD => "JD",
            Self::MJD => "MJD",
            Self::Epoch => "EPOCH",
        }
    }

    /// Express a value in this system as an MJD.
    #[inline]
    pub fn to_mjd(self, value: f64) -> Days {
        match self {
            Self::JD => Days::new(value) - MJD_EPOCH,
            Self::MJD => Days::new(value),
            Self::Epoch => J2000_MJD + JULIAN_YEAR * (value - 2000.0),
        }
    }

    /// Express an MJD as a value in this system.
    #[inline]
    pub fn value_at(self, mjd: Days) -> f64 {
        match self {
            Self::JD => (mjd + MJD_EPOCH).value(),
            Self::MJD => mjd.value(),
            Self::Epoch => 2000.0 + ((mjd - J2000_MJD) / JULIAN_YEAR).simplify().value(),
        }
    }
}

impl fmt::Display for DateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateSystem {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "JD" => Ok(Self::JD),
            "MJD" => Ok(Self::MJD),
            "EPOCH" => Ok(Self::Epoch),
            _ => Err(TimeError::UnknownName {
                what: "date system",
                name: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Nanoseconds <-> MJD
// ---------------------------------------------------------------------------

/// MJD of a nanosecond count since the Unix epoch (scale-agnostic).
///
/// Whole days and the day fraction are combined separately so the integer
/// part stays exact.
#[inline]
pub(crate) fn nsecs_to_mjd(nsecs: i64) -> Days {
    let days = nsecs.div_euclid(NSECS_PER_DAY);
    let rem = nsecs.rem_euclid(NSECS_PER_DAY);
    UNIX_EPOCH_MJD + Days::new(days as f64) + Days::new(rem as f64 / NSECS_PER_DAY as f64)
}

/// Nanosecond count since the Unix epoch of an MJD (scale-agnostic).
pub(crate) fn mjd_to_nsecs(mjd: Days) -> TimeResult<i64> {
    let days = (mjd - UNIX_EPOCH_MJD).value();
    if !days.is_finite() || days.abs() > MAX_DAYS_FROM_EPOCH {
        return Err(TimeError::out_of_range(format!("MJD {}", mjd.value())));
    }
    let whole = days.floor();
    let frac_nsecs = ((days - whole) * NSECS_PER_DAY as f64).round() as i64;
    (whole as i64)
        .checked_mul(NSECS_PER_DAY)
        .and_then(|n| n.checked_add(frac_nsecs))
        .ok_or_else(|| TimeError::out_of_range(format!("MJD {}", mjd.value())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_mjd_epoch_roundtrip() {
        let mjd = Days::new(51_544.5);
        assert!((DateSystem::JD.value_at(mjd) - 2_451_545.0).abs() < 1e-9);
        assert!((DateSystem::Epoch.value_at(mjd) - 2000.0).abs() < 1e-12);
        assert!((DateSystem::JD.to_mjd(2_451_545.0) - mjd).abs() < Days::new(1e-9));
        assert!((DateSystem::Epoch.to_mjd(2000.0) - mjd).abs() < Days::new(1e-12));
    }

    #[test]
    fn epoch_year_is_julian() {
        let mjd = DateSystem::Epoch.to_mjd(2001.0);
        assert!((mjd - Days::new(51_544.5 + 365.25)).abs() < Days::new(1e-9));
    }

    #[test]
    fn unix_epoch_is_mjd_40587() {
        assert_eq!(nsecs_to_mjd(0), Days::new(40_587.0));
        assert_eq!(mjd_to_nsecs(Days::new(40_587.0)), Ok(0));
    }

    #[test]
    fn nsecs_mjd_negative_and_fractional() {
        // 1969-12-31T12:00:00
        let nsecs = -NSECS_PER_DAY / 2;
        assert!((nsecs_to_mjd(nsecs) - Days::new(40_586.5)).abs() < Days::new(1e-12));
        assert_eq!(mjd_to_nsecs(Days::new(40_586.5)), Ok(nsecs));
    }

    #[test]
    fn mjd_outside_i64_range_fails() {
        assert!(mjd_to_nsecs(Days::new(40_587.0 + 106_752.0)).is_err());
        assert!(mjd_to_nsecs(Days::new(40_587.0 - 106_752.0)).is_err());
        assert!(mjd_to_nsecs(Days::new(f64::NAN)).is_err());
    }

    #[test]
    fn tt_offset_is_fixed() {
        let table = LeapSecondTable::builtin();
        assert_eq!(Timescale::TT.to_tai_nsecs(32_184_000_000, &table), Ok(0));
        assert_eq!(Timescale::TT.nsecs_from_tai(0, &table), Ok(32_184_000_000));
        assert_eq!(Timescale::TAI.to_tai_nsecs(-5, &table), Ok(-5));
        // TT never consults the table, even long before 1961.
        let early = -100 * 365 * NSECS_PER_DAY;
        assert!(Timescale::TT.nsecs_from_tai(early, &table).is_ok());
    }

    #[test]
    fn utc_before_1961_fails() {
        let table = LeapSecondTable::builtin();
        let early = -10 * 365 * NSECS_PER_DAY;
        let err = Timescale::UTC.nsecs_from_tai(early, &table).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn names_parse_case_insensitively() {
        assert_eq!("utc".parse::<Timescale>(), Ok(Timescale::UTC));
        assert_eq!("Epoch".parse::<DateSystem>(), Ok(DateSystem::Epoch));
        assert!("GPS".parse::<Timescale>().is_err());
        assert_eq!(Timescale::TT.to_string(), "TT");
        assert_eq!(DateSystem::MJD.to_string(), "MJD");
    }
}
