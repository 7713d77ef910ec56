// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Nanosecond TAI instants
//!
//! This crate provides a date/time value type for astronomical bookkeeping:
//! one `i64` of TAI nanoseconds since the Unix epoch, with conversions to
//! UTC, TT, Julian dates, calendar fields and ISO 8601 text.
//!
//! # Core types
//!
//! - [`Instant`] — the TAI nanosecond instant (value type, `Copy`, `Eq`, `Hash`).
//! - [`Timescale`] — TAI, UTC or TT.
//! - [`DateSystem`] — JD, MJD or Julian epoch year.
//! - [`LeapSecondTable`] — TAI − UTC offsets from 1961-01-01 on.
//! - [`CalendarTime`], [`Timespec`], [`Timeval`] — broken-down readings.
//! - [`TimeError`] — domain, state and I/O failures.
//!
//! # Quick example
//!
//! ```rust
//! use nanotai::{DateSystem, Instant, Timescale};
//!
//! let t = Instant::parse("2017-01-01T00:00:00Z", Timescale::UTC).unwrap();
//! assert_eq!(
//!     t.to_iso_string(Timescale::TAI).unwrap(),
//!     "2017-01-01T00:00:37.000000000"
//! );
//! assert_eq!(t.get(DateSystem::MJD, Timescale::UTC).unwrap(), 57_754.0);
//! ```
//!
//! # Leap seconds
//!
//! UTC conversions read the process-wide table, which starts as a built-in
//! copy of the USNO `tai-utc.dat` data. Replace it once at start-up with
//! [`initialize_leap_seconds`] or [`load_leap_seconds_file`], or pass a table
//! explicitly to [`Instant::from_nsecs_with`] / [`Instant::nsecs_with`].

mod calendar;
mod error;
pub(crate) mod instant;
mod leap_seconds;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendar::{CalendarTime, Timespec, Timeval, MAX_YEAR, MIN_YEAR};
pub use error::{ErrorKind, TimeError, TimeResult};
pub use instant::{Instant, INVALID_NSECS};
pub use leap_seconds::{
    current_table, initialize_leap_seconds, load_leap_seconds_file, reset_leap_seconds,
    set_leap_second_table, LeapEntry, LeapSecondTable,
};
pub use scales::{
    DateSystem, Timescale, J2000_MJD, JULIAN_YEAR, MJD_EPOCH, NSECS_PER_DAY, NSECS_PER_SEC,
    TT_MINUS_TAI, UNIX_EPOCH_MJD,
};
