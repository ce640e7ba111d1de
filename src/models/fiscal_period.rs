//! Fiscal period model.
//!
//! A [`FiscalPeriod`] is a derived value: it is computed on demand from a
//! calendar date or from a fiscal (year, month) pair and never stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One period of the 4-4-5 fiscal calendar.
///
/// # Example
///
/// ```
/// use date_shifter::models::FiscalPeriod;
/// use chrono::NaiveDate;
///
/// let period = FiscalPeriod {
///     fiscal_year: 2024,
///     fiscal_month: 3,
///     start_date: NaiveDate::from_ymd_opt(2024, 2, 26).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// };
///
/// assert!(period.contains(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
/// assert_eq!(period.len_days(), 35);
/// assert_eq!(period.year_month(), 202403);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FiscalPeriod {
    /// The fiscal year the period belongs to.
    pub fiscal_year: i32,
    /// The fiscal month, 1 through 12.
    pub fiscal_month: u32,
    /// First day of the period (inclusive).
    pub start_date: NaiveDate,
    /// Last day of the period (inclusive).
    pub end_date: NaiveDate,
}

impl FiscalPeriod {
    /// Checks if a date falls within the period, inclusive of both ends.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Number of days in the period, counting both ends.
    pub fn len_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Number of days from the period start to `date`.
    pub fn offset_of(&self, date: NaiveDate) -> i64 {
        (date - self.start_date).num_days()
    }

    /// The fiscal year and month encoded as `YYYYMM`.
    pub fn year_month(&self) -> i64 {
        i64::from(self.fiscal_year) * 100 + i64::from(self.fiscal_month)
    }

    /// Whether the period spans a whole number of weeks.
    pub fn is_whole_weeks(&self) -> bool {
        self.len_days() % 7 == 0
    }
}
