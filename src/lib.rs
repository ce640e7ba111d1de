//! Date shifting engine for Gregorian and 4-4-5 fiscal calendars.
//!
//! This crate computes a new calendar date by applying a signed increment of
//! years, months, calendar days or business days to a reference date, under
//! either the standard Gregorian calendar or a 4-4-5 fiscal calendar.
//!
//! # Example
//!
//! ```
//! use date_shifter::calculation::DateShifter;
//! use date_shifter::models::{Alignment, IntervalKind, ShiftRequest};
//! use chrono::NaiveDate;
//!
//! let shifter = DateShifter::calendar_only();
//! let request = ShiftRequest::new(
//!     IntervalKind::Month,
//!     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
//!     1,
//!     Alignment::Same,
//! );
//!
//! let date = shifter.compute_date(&request).unwrap();
//! assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
