//! The date shifting front door.
//!
//! [`DateShifter`] validates a [`ShiftRequest`], dispatches it to the
//! arithmetic path for its interval and calendar model, and formats the
//! result.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::config::ShifterSettings;
use crate::error::{ShiftError, ShiftResult};
use crate::models::{CalendarModel, HolidayProvider, IntervalKind, NoHolidayData, ShiftRequest};

use super::business_day::{BusinessDayRules, DEFAULT_MAX_BUSINESS_DAY_ITERATIONS, walk_business_days};
use super::calendar_shift::{shift_days, shift_months, shift_years};
use super::fiscal_shift::{shift_fiscal_months, shift_fiscal_years};

/// Computes shifted dates for [`ShiftRequest`]s.
///
/// A shifter owns the holiday provider consulted by business-day requests
/// and the iteration bound of the business-day walk. It holds no state
/// that changes between calls, so one shifter can serve any number of
/// requests, including from several threads when the provider allows it.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::DateShifter;
/// use date_shifter::models::{Alignment, CalendarModel, IntervalKind, ShiftRequest};
/// use chrono::NaiveDate;
///
/// let shifter = DateShifter::calendar_only();
/// let request = ShiftRequest::new(
///     IntervalKind::Year,
///     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///     0,
///     Alignment::End,
/// );
///
/// assert_eq!(
///     shifter.compute_date(&request).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
/// );
/// assert_eq!(shifter.compute_year_month(&request).unwrap(), 202412);
///
/// let fiscal = request.with_calendar_model(CalendarModel::Fiscal);
/// assert_eq!(
///     shifter.compute_date(&fiscal).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
/// );
/// ```
#[derive(Debug, Clone)]
pub struct DateShifter<H = NoHolidayData> {
    holidays: H,
    max_business_day_iterations: u32,
}

impl DateShifter<NoHolidayData> {
    /// Creates a shifter without holiday data.
    ///
    /// Year, month and day requests work as usual; business-day requests
    /// fail with [`ShiftError::UnsupportedJurisdiction`].
    pub fn calendar_only() -> Self {
        Self::new(NoHolidayData)
    }
}

impl Default for DateShifter<NoHolidayData> {
    fn default() -> Self {
        Self::calendar_only()
    }
}

impl<H: HolidayProvider> DateShifter<H> {
    /// Creates a shifter over a holiday provider with the default
    /// business-day iteration bound.
    pub fn new(holidays: H) -> Self {
        Self {
            holidays,
            max_business_day_iterations: DEFAULT_MAX_BUSINESS_DAY_ITERATIONS,
        }
    }

    /// Overrides the business-day iteration bound.
    pub fn with_max_business_day_iterations(mut self, max_iterations: u32) -> Self {
        self.max_business_day_iterations = max_iterations;
        self
    }

    /// Applies loaded settings.
    pub fn with_settings(self, settings: &ShifterSettings) -> Self {
        self.with_max_business_day_iterations(settings.max_business_day_iterations)
    }

    /// Returns the holiday provider.
    pub fn holidays(&self) -> &H {
        &self.holidays
    }

    /// Returns the business-day iteration bound.
    pub fn max_business_day_iterations(&self) -> u32 {
        self.max_business_day_iterations
    }

    /// Computes the shifted date for a request.
    ///
    /// The request is validated first; an invalid request fails with
    /// [`ShiftError::InvalidArgument`] before any arithmetic runs.
    pub fn compute_date(&self, request: &ShiftRequest) -> ShiftResult<NaiveDate> {
        request.validate()?;
        debug!(
            interval = %request.interval,
            calendar_model = %request.calendar_model,
            alignment = %request.alignment,
            reference_date = %request.reference_date,
            increment = request.increment,
            "Computing shifted date"
        );

        let reference = request.reference_date;
        let increment = request.increment;
        let alignment = request.alignment;

        match (request.interval, request.calendar_model) {
            (IntervalKind::Year, CalendarModel::Standard) => shift_years(reference, increment, alignment),
            (IntervalKind::Year, CalendarModel::Fiscal) => {
                shift_fiscal_years(reference, increment, alignment)
            }
            (IntervalKind::Month, CalendarModel::Standard) => {
                shift_months(reference, increment, alignment)
            }
            (IntervalKind::Month, CalendarModel::Fiscal) => {
                shift_fiscal_months(reference, increment, alignment)
            }
            (IntervalKind::Day, _) => shift_days(reference, increment, alignment),
            (IntervalKind::BusinessDay, _) => {
                let country = request
                    .country_code()
                    .ok_or_else(|| ShiftError::invalid("country", "required for BUSINESS_DAY intervals"))?;
                let rules = BusinessDayRules::new(
                    &self.holidays,
                    country,
                    request.subdivision_code(),
                    request.saturday_is_business_day,
                );
                walk_business_days(
                    &rules,
                    reference,
                    increment,
                    alignment,
                    self.max_business_day_iterations,
                )
            }
        }
    }

    /// Computes the shifted date and encodes it as `YYYY * 100 + MM`.
    pub fn compute_year_month(&self, request: &ShiftRequest) -> ShiftResult<i64> {
        let date = self.compute_date(request)?;
        Ok(year_month(date))
    }
}

/// Encodes a date's year and month as `YYYY * 100 + MM`.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::year_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(year_month(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()), 202401);
/// ```
pub fn year_month(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 100 + i64::from(date.month())
}
