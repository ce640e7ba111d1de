//! Error types for the date shifting engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while shifting dates.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the date shifting engine.
///
/// Every operation in the engine returns this error type. All variants are
/// terminal for the computation they occurred in; no partial result is
/// ever produced.
///
/// # Example
///
/// ```
/// use date_shifter::error::ShiftError;
///
/// let error = ShiftError::InvalidArgument {
///     field: "alignment".to_string(),
///     message: "expected START, END or SAME, got 'X'".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid argument 'alignment': expected START, END or SAME, got 'X'"
/// );
/// ```
#[derive(Debug, Error)]
pub enum ShiftError {
    /// A request parameter was malformed or missing.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The parameter that was rejected.
        field: String,
        /// A description of why it was rejected.
        message: String,
    },

    /// The business-day walk exhausted its iteration bound.
    #[error("Could not find {requested} business day(s) within {iterations} iterations")]
    NotFound {
        /// The number of business days requested.
        requested: u64,
        /// The iteration bound that was exhausted.
        iterations: u32,
    },

    /// The holiday provider cannot resolve the jurisdiction.
    #[error("Unsupported jurisdiction: country '{country}', subdivision '{}'", .subdivision.as_deref().unwrap_or("-"))]
    UnsupportedJurisdiction {
        /// The country code that was requested.
        country: String,
        /// The subdivision code that was requested, if any.
        subdivision: Option<String>,
    },

    /// The holiday provider has no data for the year being looked up.
    #[error("No holiday data for country '{country}' in {year}")]
    NoHolidayCoverage {
        /// The country code that was requested.
        country: String,
        /// The calendar year the lookup fell in.
        year: i32,
    },

    /// Date arithmetic left the representable date range.
    #[error("Date out of range: {message}")]
    DateOutOfRange {
        /// A description of the overflowing operation.
        message: String,
    },

    /// No fiscal year span contained the date.
    #[error("Could not resolve fiscal period for {date}")]
    FiscalResolution {
        /// The date that could not be placed in a fiscal period.
        date: NaiveDate,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl ShiftError {
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        ShiftError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn out_of_range(message: impl Into<String>) -> Self {
        ShiftError::DateOutOfRange {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return ShiftError.
pub type ShiftResult<T> = Result<T, ShiftError>;
