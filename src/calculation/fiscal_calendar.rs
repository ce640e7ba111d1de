//! 4-4-5 fiscal calendar resolution.
//!
//! Fiscal year `Y` begins on the last Monday of November of `Y - 1` whose
//! week (Monday through Sunday) still ends in November. The year is split
//! into twelve periods that each start on a Monday and end on a Sunday:
//!
//! - Period 1 starts on the last Monday of December of `Y - 1` when that
//!   Monday is the 28th or later, otherwise on the first Monday of January
//!   (or on January 1 itself when it is a Monday). It ends on the Sunday
//!   closing the last complete week of January.
//! - Periods 2 through 11 start on the last Monday of calendar month
//!   `period - 1` and end on the Sunday closing the last complete week of
//!   the following month.
//! - Period 12 starts on the same Monday that opens fiscal year `Y + 1` and
//!   ends on the first Sunday of January `Y + 1` that closes a whole number
//!   of weeks.
//!
//! Neighbouring periods may share a week; lookups by date always resolve to
//! the earliest candidate.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::warn;

use crate::error::{ShiftError, ShiftResult};
use crate::models::FiscalPeriod;

use super::alignment::{add_days, days_in_month, ymd};

/// Number of periods in a fiscal year.
pub const FISCAL_MONTHS: u32 = 12;

/// Returns the first day of fiscal year `fiscal_year`.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::fiscal_year_start;
/// use chrono::NaiveDate;
///
/// // November 27, 2023 is the last Monday of November, but its Sunday is
/// // December 3, so the fiscal year starts one week earlier.
/// assert_eq!(
///     fiscal_year_start(2024).unwrap(),
///     NaiveDate::from_ymd_opt(2023, 11, 20).unwrap()
/// );
/// ```
pub fn fiscal_year_start(fiscal_year: i32) -> ShiftResult<NaiveDate> {
    last_complete_week_monday(previous_year(fiscal_year)?, 11)
}

/// Returns the boundaries of period `fiscal_month` of `fiscal_year`.
///
/// Fails with [`ShiftError::InvalidArgument`] when `fiscal_month` is not in
/// `1..=12`.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::fiscal_period;
/// use chrono::NaiveDate;
///
/// let period = fiscal_period(2024, 3).unwrap();
/// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
/// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 3, 31).unwrap());
/// assert_eq!(period.len_days(), 35);
/// ```
pub fn fiscal_period(fiscal_year: i32, fiscal_month: u32) -> ShiftResult<FiscalPeriod> {
    let (start_date, end_date) = match fiscal_month {
        1 => first_period_bounds(fiscal_year)?,
        12 => last_period_bounds(fiscal_year)?,
        2..=11 => middle_period_bounds(fiscal_year, fiscal_month)?,
        _ => {
            return Err(ShiftError::invalid(
                "fiscal_month",
                format!("expected 1..=12, got {}", fiscal_month),
            ));
        }
    };

    Ok(FiscalPeriod {
        fiscal_year,
        fiscal_month,
        start_date,
        end_date,
    })
}

/// Resolves the fiscal period containing `date`.
///
/// Candidate fiscal years are the date's calendar year and its two
/// neighbours, tried earliest first. The first year whose span (its start
/// through the end of period 12) contains the date wins, and its periods
/// are scanned in order.
///
/// Every calendar year `Y` lies inside fiscal year `Y`'s span, so the
/// search always succeeds for representable dates;
/// [`ShiftError::FiscalResolution`] is reported if it ever does not.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::fiscal_period_of;
/// use chrono::NaiveDate;
///
/// let period = fiscal_period_of(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()).unwrap();
/// assert_eq!((period.fiscal_year, period.fiscal_month), (2024, 6));
///
/// // Late December belongs to period 12 of the current fiscal year.
/// let period = fiscal_period_of(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()).unwrap();
/// assert_eq!((period.fiscal_year, period.fiscal_month), (2024, 12));
/// ```
pub fn fiscal_period_of(date: NaiveDate) -> ShiftResult<FiscalPeriod> {
    let year = date.year();

    for candidate in [year - 1, year, year + 1] {
        let (Ok(start), Ok(last)) = (fiscal_year_start(candidate), fiscal_period(candidate, 12))
        else {
            continue;
        };
        if date < start || date > last.end_date {
            continue;
        }

        for fiscal_month in 1..FISCAL_MONTHS {
            let period = fiscal_period(candidate, fiscal_month)?;
            if period.contains(date) {
                return Ok(period);
            }
        }
        return Ok(last);
    }

    warn!(date = %date, "Date outside every candidate fiscal year");
    Err(ShiftError::FiscalResolution { date })
}

fn first_period_bounds(fiscal_year: i32) -> ShiftResult<(NaiveDate, NaiveDate)> {
    let jan_first = ymd(fiscal_year, 1, 1)?;
    let start = if jan_first.weekday() == Weekday::Mon {
        jan_first
    } else {
        let dec_last_monday = last_monday_of_month(previous_year(fiscal_year)?, 12)?;
        if dec_last_monday.day() >= 28 {
            dec_last_monday
        } else {
            first_on_or_after(jan_first, Weekday::Mon)?
        }
    };

    Ok((start, last_complete_week_sunday(fiscal_year, 1)?))
}

fn middle_period_bounds(fiscal_year: i32, fiscal_month: u32) -> ShiftResult<(NaiveDate, NaiveDate)> {
    let calendar_month = fiscal_month - 1;
    let start = last_monday_of_month(fiscal_year, calendar_month)?;

    // calendar_month is 1..=10, so both following months stay in the same year.
    let end_month = calendar_month + 1;
    let mut end = last_complete_week_sunday(fiscal_year, end_month)?;

    if !closes_whole_weeks(start, end) {
        end = closing_sunday(start, ymd(fiscal_year, end_month + 1, 1)?)?;
    }

    Ok((start, end))
}

fn last_period_bounds(fiscal_year: i32) -> ShiftResult<(NaiveDate, NaiveDate)> {
    let start = last_complete_week_monday(fiscal_year, 11)?;
    let next_year = fiscal_year
        .checked_add(1)
        .ok_or_else(|| ShiftError::out_of_range(format!("fiscal year {} + 1", fiscal_year)))?;
    let end = closing_sunday(start, ymd(next_year, 1, 1)?)?;
    Ok((start, end))
}

/// First Sunday on or after `from` that closes whole weeks from `start`,
/// advancing at most one extra week.
fn closing_sunday(start: NaiveDate, from: NaiveDate) -> ShiftResult<NaiveDate> {
    let sunday = first_on_or_after(from, Weekday::Sun)?;
    if closes_whole_weeks(start, sunday) {
        Ok(sunday)
    } else {
        add_days(sunday, 7)
    }
}

fn closes_whole_weeks(start: NaiveDate, end: NaiveDate) -> bool {
    ((end - start).num_days() + 1) % 7 == 0
}

fn last_monday_of_month(year: i32, month: u32) -> ShiftResult<NaiveDate> {
    let last_day = ymd(year, month, days_in_month(year, month)?)?;
    add_days(
        last_day,
        -i64::from(last_day.weekday().num_days_from_monday()),
    )
}

/// Last Monday of the month whose Sunday is still inside the month.
fn last_complete_week_monday(year: i32, month: u32) -> ShiftResult<NaiveDate> {
    let monday = last_monday_of_month(year, month)?;
    let sunday = add_days(monday, 6)?;
    if sunday.month() != month || sunday.year() != year {
        add_days(monday, -7)
    } else {
        Ok(monday)
    }
}

fn last_complete_week_sunday(year: i32, month: u32) -> ShiftResult<NaiveDate> {
    add_days(last_complete_week_monday(year, month)?, 6)
}

fn first_on_or_after(date: NaiveDate, weekday: Weekday) -> ShiftResult<NaiveDate> {
    let ahead = (7 + weekday.num_days_from_monday() - date.weekday().num_days_from_monday()) % 7;
    add_days(date, i64::from(ahead))
}

fn previous_year(year: i32) -> ShiftResult<i32> {
    year.checked_sub(1)
        .ok_or_else(|| ShiftError::out_of_range(format!("year {} - 1", year)))
}
