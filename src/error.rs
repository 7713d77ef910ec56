// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for instant construction and conversion.
//!
//! Every fallible operation in the crate returns [`TimeResult<T>`]. The
//! variants of [`TimeError`] fall into three [`ErrorKind`]s:
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | [`Domain`](ErrorKind::Domain) | UTC requested before 1961-01-01, year outside [1902, 2261], malformed ISO 8601 text or leap-second table, value outside the 64-bit nanosecond range, unknown scale name |
//! | [`State`](ErrorKind::State) | a representation is requested from an invalid [`Instant`](crate::Instant) |
//! | [`Io`](ErrorKind::Io) | a leap-second table file cannot be read |

use thiserror::Error;

/// Coarse classification of a [`TimeError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input or instant lies outside the domain of the requested operation.
    Domain,
    /// The operation is undefined for an invalid instant.
    State,
    /// Reading external table data failed.
    Io,
}

/// Unified error type for the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    /// UTC is only defined from the first leap-table entry (1961-01-01) on.
    #[error("UTC is not defined before the first leap-second table entry (MJD {first_mjd}); got MJD {mjd:.6}")]
    BeforeUtcEra { mjd: f64, first_mjd: f64 },

    /// Calendar construction outside the supported year range.
    #[error("year {year} outside supported range [{min}, {max}]")]
    YearOutOfRange { year: i32, min: i32, max: i32 },

    /// Calendar fields that do not name a real date or time of day.
    #[error("invalid calendar fields {year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}")]
    InvalidCalendar {
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },

    /// Result does not fit in signed 64-bit nanoseconds since the Unix epoch.
    #[error("{context} is outside the representable nanosecond range")]
    OutOfRange { context: String },

    /// Text that does not match the accepted ISO 8601 subset.
    #[error("malformed ISO 8601 string {input:?}: {reason}")]
    MalformedIso { input: String, reason: String },

    /// Leap-second table text that could not be parsed.
    #[error("malformed leap-second table at line {line}: {reason}")]
    MalformedLeapTable { line: usize, reason: String },

    /// Leap-second table file that could not be read.
    #[error("cannot read leap-second table {path}: {message}")]
    LeapTableIo { path: String, message: String },

    /// Unrecognised time-scale or date-system name.
    #[error("unknown {what} {name:?}")]
    UnknownName { what: &'static str, name: String },

    /// A representation was requested from the invalid instant.
    #[error("DateTime not valid")]
    InvalidInstant,
}

/// Convenience alias for `Result<T, TimeError>`.
pub type TimeResult<T> = Result<T, TimeError>;

impl TimeError {
    pub(crate) fn out_of_range(context: impl Into<String>) -> Self {
        Self::OutOfRange {
            context: context.into(),
        }
    }

    pub(crate) fn malformed_iso(input: &str, reason: &str) -> Self {
        Self::MalformedIso {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed_table(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLeapTable {
            line,
            reason: reason.into(),
        }
    }

    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInstant => ErrorKind::State,
            Self::LeapTableIo { .. } => ErrorKind::Io,
            Self::BeforeUtcEra { .. }
            | Self::YearOutOfRange { .. }
            | Self::InvalidCalendar { .. }
            | Self::OutOfRange { .. }
            | Self::MalformedIso { .. }
            | Self::MalformedLeapTable { .. }
            | Self::UnknownName { .. } => ErrorKind::Domain,
        }
    }

    /// `true` for [`ErrorKind::Domain`] errors.
    pub fn is_domain(&self) -> bool {
        self.kind() == ErrorKind::Domain
    }

    /// `true` for [`ErrorKind::State`] errors.
    pub fn is_state(&self) -> bool {
        self.kind() == ErrorKind::State
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_instant_is_state_error() {
        let err = TimeError::InvalidInstant;
        assert_eq!(err.kind(), ErrorKind::State);
        assert!(err.is_state());
        assert!(!err.is_domain());
        assert_eq!(err.to_string(), "DateTime not valid");
    }

    #[test]
    fn year_error_message() {
        let err = TimeError::YearOutOfRange {
            year: 1901,
            min: 1902,
            max: 2261,
        };
        assert!(err.is_domain());
        assert_eq!(
            err.to_string(),
            "year 1901 outside supported range [1902, 2261]"
        );
    }

    #[test]
    fn table_errors_report_line() {
        let err = TimeError::malformed_table(3, "expected MJD and offset");
        assert!(err.is_domain());
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn io_error_kind() {
        let err = TimeError::LeapTableIo {
            path: "/nonexistent".into(),
            message: "not found".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
