//! Alignment and day-clamping.
//!
//! This module provides the month-level building blocks shared by every
//! arithmetic path: days-in-month, alignment of a (year, month) pair to a
//! concrete date, and overflow-checked day and month stepping.

use chrono::{Days, NaiveDate};

use crate::error::{ShiftError, ShiftResult};
use crate::models::Alignment;

/// Returns the number of days in a Gregorian month, honouring leap years.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::days_in_month;
///
/// assert_eq!(days_in_month(2024, 2).unwrap(), 29);
/// assert_eq!(days_in_month(2023, 2).unwrap(), 28);
/// assert_eq!(days_in_month(2024, 12).unwrap(), 31);
/// ```
pub fn days_in_month(year: i32, month: u32) -> ShiftResult<u32> {
    let first = ymd(year, month, 1)?;
    let next = if month == 12 {
        ymd(year + 1, 1, 1)
    } else {
        ymd(year, month + 1, 1)
    };

    match next {
        Ok(next) => Ok((next - first).num_days() as u32),
        // December of the last representable year.
        Err(_) if month == 12 => Ok(31),
        Err(e) => Err(e),
    }
}

/// Resolves a (year, month) pair and a preferred day to a concrete date.
///
/// - [`Alignment::Start`] returns the first of the month.
/// - [`Alignment::End`] returns the last day of the month.
/// - [`Alignment::Same`] returns `min(preferred_day, days_in_month)`, so a
///   preferred day of 31 in February lands on the 28th or 29th.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::align_day;
/// use date_shifter::models::Alignment;
/// use chrono::NaiveDate;
///
/// let date = align_day(2024, 2, 31, Alignment::Same).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// let date = align_day(2024, 2, 31, Alignment::Start).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// ```
pub fn align_day(
    year: i32,
    month: u32,
    preferred_day: u32,
    alignment: Alignment,
) -> ShiftResult<NaiveDate> {
    let day = match alignment {
        Alignment::Start => 1,
        Alignment::End => days_in_month(year, month)?,
        Alignment::Same => preferred_day.clamp(1, days_in_month(year, month)?),
    };
    ymd(year, month, day)
}

/// Adds a signed number of calendar days to a date.
pub fn add_days(date: NaiveDate, days: i64) -> ShiftResult<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(magnitude)
    } else {
        date.checked_sub_days(magnitude)
    };
    shifted.ok_or_else(|| ShiftError::out_of_range(format!("{} {:+} days", date, days)))
}

/// Steps a (year, month) pair by a signed number of months.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::add_months;
///
/// assert_eq!(add_months(2024, 11, 3).unwrap(), (2025, 2));
/// assert_eq!(add_months(2024, 1, -1).unwrap(), (2023, 12));
/// ```
pub fn add_months(year: i32, month: u32, months: i64) -> ShiftResult<(i32, u32)> {
    let overflow = || ShiftError::out_of_range(format!("{}-{:02} {:+} months", year, month, months));

    let index = i64::from(year)
        .checked_mul(12)
        .and_then(|i| i.checked_add(i64::from(month) - 1))
        .and_then(|i| i.checked_add(months))
        .ok_or_else(overflow)?;

    let target_year = i32::try_from(index.div_euclid(12)).map_err(|_| overflow())?;
    let target_month = index.rem_euclid(12) as u32 + 1;
    Ok((target_year, target_month))
}

/// Builds a date, mapping invalid or unrepresentable components to an error.
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> ShiftResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ShiftError::out_of_range(format!("{}-{:02}-{:02}", year, month, day)))
}
