//! Gregorian year, month and day arithmetic.
//!
//! These functions implement the standard calendar model. Day shifting is
//! shared by both calendar models and by the business-day walk.

use chrono::{Datelike, NaiveDate};

use crate::error::{ShiftError, ShiftResult};
use crate::models::Alignment;

use super::alignment::{add_days, add_months, align_day, ymd};

/// Shifts a date by whole Gregorian years.
///
/// [`Alignment::Start`] pins the result to January 1 and [`Alignment::End`]
/// to December 31 of the resulting year. [`Alignment::Same`] keeps the
/// reference month and day, clamping February 29 to the 28th in common
/// years.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::shift_years;
/// use date_shifter::models::Alignment;
/// use chrono::NaiveDate;
///
/// let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
/// assert_eq!(
///     shift_years(leap_day, 1, Alignment::Same).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
/// );
/// assert_eq!(
///     shift_years(leap_day, 0, Alignment::End).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
/// );
/// ```
pub fn shift_years(reference: NaiveDate, increment: i64, alignment: Alignment) -> ShiftResult<NaiveDate> {
    let year = i64::from(reference.year())
        .checked_add(increment)
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| ShiftError::out_of_range(format!("{} {:+} years", reference, increment)))?;

    match alignment {
        Alignment::Start => ymd(year, 1, 1),
        Alignment::End => ymd(year, 12, 31),
        Alignment::Same => align_day(year, reference.month(), reference.day(), Alignment::Same),
    }
}

/// Shifts a date by whole Gregorian months.
///
/// The resulting (year, month) is aligned with the reference day-of-month
/// as the preferred day, so `2024-01-31 + 1 month` with
/// [`Alignment::Same`] yields `2024-02-29`.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::shift_months;
/// use date_shifter::models::Alignment;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// assert_eq!(
///     shift_months(date, 1, Alignment::Same).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
/// );
/// assert_eq!(
///     shift_months(date, -2, Alignment::Start).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 11, 1).unwrap()
/// );
/// ```
pub fn shift_months(reference: NaiveDate, increment: i64, alignment: Alignment) -> ShiftResult<NaiveDate> {
    let (year, month) = add_months(reference.year(), reference.month(), increment)?;
    align_day(year, month, reference.day(), alignment)
}

/// Shifts a date by calendar days.
///
/// [`Alignment::Same`] returns the shifted date unchanged. Start and end
/// alignment snap to the first or last day of the shifted date's month.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::shift_days;
/// use date_shifter::models::Alignment;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
/// assert_eq!(
///     shift_days(date, 3, Alignment::Same).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 2).unwrap()
/// );
/// assert_eq!(
///     shift_days(date, 3, Alignment::End).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
/// );
/// ```
pub fn shift_days(reference: NaiveDate, increment: i64, alignment: Alignment) -> ShiftResult<NaiveDate> {
    let shifted = add_days(reference, increment)?;
    match alignment {
        Alignment::Same => Ok(shifted),
        _ => align_day(shifted.year(), shifted.month(), shifted.day(), alignment),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // Years
    // ==========================================================================
    #[test]
    fn test_year_start_and_end() {
        let date = make_date("2024-01-15");
        assert_eq!(shift_years(date, 0, Alignment::Start).unwrap(), make_date("2024-01-01"));
        assert_eq!(shift_years(date, 0, Alignment::End).unwrap(), make_date("2024-12-31"));
        assert_eq!(shift_years(date, -3, Alignment::Start).unwrap(), make_date("2021-01-01"));
    }

    #[test]
    fn test_year_same_keeps_month_and_day() {
        assert_eq!(
            shift_years(make_date("2024-07-04"), 2, Alignment::Same).unwrap(),
            make_date("2026-07-04")
        );
    }

    #[test]
    fn test_year_same_clamps_leap_day() {
        assert_eq!(
            shift_years(make_date("2024-02-29"), -1, Alignment::Same).unwrap(),
            make_date("2023-02-28")
        );
        assert_eq!(
            shift_years(make_date("2024-02-29"), 4, Alignment::Same).unwrap(),
            make_date("2028-02-29")
        );
    }

    #[test]
    fn test_year_overflow_is_error() {
        let result = shift_years(make_date("2024-01-01"), i64::MAX, Alignment::Same);
        assert!(matches!(result, Err(ShiftError::DateOutOfRange { .. })));

        let result = shift_years(make_date("2024-01-01"), 1_000_000, Alignment::Start);
        assert!(matches!(result, Err(ShiftError::DateOutOfRange { .. })));
    }

    // ==========================================================================
    // Months
    // ==========================================================================
    #[test]
    fn test_month_same_clamps_end_of_month() {
        assert_eq!(
            shift_months(make_date("2024-01-31"), 1, Alignment::Same).unwrap(),
            make_date("2024-02-29")
        );
        assert_eq!(
            shift_months(make_date("2023-01-31"), 1, Alignment::Same).unwrap(),
            make_date("2023-02-28")
        );
        assert_eq!(
            shift_months(make_date("2024-05-31"), -1, Alignment::Same).unwrap(),
            make_date("2024-04-30")
        );
    }

    #[test]
    fn test_month_carries_year() {
        assert_eq!(
            shift_months(make_date("2024-11-15"), 3, Alignment::Same).unwrap(),
            make_date("2025-02-15")
        );
        assert_eq!(
            shift_months(make_date("2024-02-15"), -14, Alignment::Same).unwrap(),
            make_date("2022-12-15")
        );
    }

    #[test]
    fn test_month_start_and_end() {
        let date = make_date("2024-01-15");
        assert_eq!(shift_months(date, 1, Alignment::Start).unwrap(), make_date("2024-02-01"));
        assert_eq!(shift_months(date, 1, Alignment::End).unwrap(), make_date("2024-02-29"));
        assert_eq!(shift_months(date, 0, Alignment::End).unwrap(), make_date("2024-01-31"));
    }

    // ==========================================================================
    // Days
    // ==========================================================================
    #[test]
    fn test_day_zero_same_is_identity() {
        let date = make_date("2024-02-29");
        assert_eq!(shift_days(date, 0, Alignment::Same).unwrap(), date);
    }

    #[test]
    fn test_day_negative_crosses_month() {
        assert_eq!(
            shift_days(make_date("2024-03-02"), -2, Alignment::Same).unwrap(),
            make_date("2024-02-29")
        );
    }

    #[test]
    fn test_day_alignment_uses_shifted_month() {
        let date = make_date("2024-01-30");
        assert_eq!(shift_days(date, 5, Alignment::Start).unwrap(), make_date("2024-02-01"));
        assert_eq!(shift_days(date, 0, Alignment::Start).unwrap(), make_date("2024-01-01"));
        assert_eq!(shift_days(date, 0, Alignment::End).unwrap(), make_date("2024-01-31"));
    }
}
