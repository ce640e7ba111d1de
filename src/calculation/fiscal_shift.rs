//! Year and month arithmetic under the 4-4-5 fiscal calendar.

use chrono::NaiveDate;

use crate::error::{ShiftError, ShiftResult};
use crate::models::{Alignment, FiscalPeriod};

use super::alignment::add_days;
use super::fiscal_calendar::{FISCAL_MONTHS, fiscal_period, fiscal_period_of, fiscal_year_start};

/// Shifts a date by whole fiscal years.
///
/// - [`Alignment::Start`] returns the first day of the target fiscal year.
/// - [`Alignment::End`] returns the last day of the target year's period 12.
/// - [`Alignment::Same`] keeps the fiscal month and the day offset within it,
///   clamped to the end of the target period.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::shift_fiscal_years;
/// use date_shifter::models::Alignment;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// assert_eq!(
///     shift_fiscal_years(date, 0, Alignment::Start).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 11, 20).unwrap()
/// );
/// assert_eq!(
///     shift_fiscal_years(date, 1, Alignment::Same).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
/// );
/// ```
pub fn shift_fiscal_years(
    reference: NaiveDate,
    increment: i64,
    alignment: Alignment,
) -> ShiftResult<NaiveDate> {
    let current = fiscal_period_of(reference)?;
    let target_year = i64::from(current.fiscal_year)
        .checked_add(increment)
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(|| {
            ShiftError::out_of_range(format!(
                "fiscal year {} {:+} years",
                current.fiscal_year, increment
            ))
        })?;

    match alignment {
        Alignment::Start => fiscal_year_start(target_year),
        Alignment::End => Ok(fiscal_period(target_year, FISCAL_MONTHS)?.end_date),
        Alignment::Same => {
            let target = fiscal_period(target_year, current.fiscal_month)?;
            transfer_offset(&current, reference, &target)
        }
    }
}

/// Shifts a date by whole fiscal months, carrying the fiscal year.
///
/// Start and end alignment return the target period's boundaries;
/// [`Alignment::Same`] keeps the day offset within the period, clamped to
/// the target period's end.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::shift_fiscal_months;
/// use date_shifter::models::Alignment;
/// use chrono::NaiveDate;
///
/// // Fiscal 2024 period 3 runs 2024-02-26..=2024-03-31 and period 4
/// // runs 2024-03-25..=2024-04-28.
/// let date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
/// assert_eq!(
///     shift_fiscal_months(date, 1, Alignment::Same).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 28).unwrap()
/// );
/// assert_eq!(
///     shift_fiscal_months(date, 1, Alignment::Start).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 3, 25).unwrap()
/// );
/// ```
pub fn shift_fiscal_months(
    reference: NaiveDate,
    increment: i64,
    alignment: Alignment,
) -> ShiftResult<NaiveDate> {
    let current = fiscal_period_of(reference)?;
    let (target_year, target_month) =
        add_fiscal_months(current.fiscal_year, current.fiscal_month, increment)?;
    let target = fiscal_period(target_year, target_month)?;

    match alignment {
        Alignment::Start => Ok(target.start_date),
        Alignment::End => Ok(target.end_date),
        Alignment::Same => transfer_offset(&current, reference, &target),
    }
}

/// Steps a fiscal (year, month) pair, wrapping months into `1..=12`.
pub fn add_fiscal_months(
    fiscal_year: i32,
    fiscal_month: u32,
    months: i64,
) -> ShiftResult<(i32, u32)> {
    let overflow = || {
        ShiftError::out_of_range(format!(
            "fiscal {}-{:02} {:+} months",
            fiscal_year, fiscal_month, months
        ))
    };

    let zero_based = (i64::from(fiscal_month) - 1)
        .checked_add(months)
        .ok_or_else(overflow)?;
    let periods = i64::from(FISCAL_MONTHS);

    let year = i64::from(fiscal_year)
        .checked_add(zero_based.div_euclid(periods))
        .and_then(|y| i32::try_from(y).ok())
        .ok_or_else(overflow)?;
    let month = zero_based.rem_euclid(periods) as u32 + 1;
    Ok((year, month))
}

/// Moves `reference` from `current` into `target`, keeping its day offset
/// from the period start and never passing the target period's end.
fn transfer_offset(
    current: &FiscalPeriod,
    reference: NaiveDate,
    target: &FiscalPeriod,
) -> ShiftResult<NaiveDate> {
    let moved = add_days(target.start_date, current.offset_of(reference))?;
    Ok(moved.min(target.end_date))
}
