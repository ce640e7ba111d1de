//! Business-day classification and the bounded business-day walk.
//!
//! A business day is a date that is neither a weekend day nor a public
//! holiday in the requested jurisdiction. The walk is a linear scan because
//! holiday sets are irregular; it is capped by an iteration bound so a
//! provider that marks every day as a holiday cannot loop forever.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::{trace, warn};

use crate::error::{ShiftError, ShiftResult};
use crate::models::{Alignment, HolidayProvider};

use super::calendar_shift::shift_days;

/// Default cap on candidate dates examined by one business-day walk.
pub const DEFAULT_MAX_BUSINESS_DAY_ITERATIONS: u32 = 1000;

/// Returns whether `date` falls on a weekend.
///
/// Sunday is always a weekend day; Saturday is one unless
/// `saturday_is_business_day` is set.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
/// assert!(is_weekend(saturday, false));
/// assert!(!is_weekend(saturday, true));
/// ```
pub fn is_weekend(date: NaiveDate, saturday_is_business_day: bool) -> bool {
    match date.weekday() {
        Weekday::Sun => true,
        Weekday::Sat => !saturday_is_business_day,
        _ => false,
    }
}

/// The jurisdiction and weekend rules a business-day walk runs under.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::BusinessDayRules;
/// use date_shifter::models::NoHolidayData;
/// use chrono::NaiveDate;
///
/// let rules = BusinessDayRules::new(&NoHolidayData, "US", None, false);
/// let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
///
/// // The provider cannot resolve "US", so classification fails.
/// assert!(rules.is_business_day(monday).is_err());
/// ```
#[derive(Debug)]
pub struct BusinessDayRules<'a, H: ?Sized> {
    provider: &'a H,
    country: &'a str,
    subdivision: Option<&'a str>,
    saturday_is_business_day: bool,
}

impl<'a, H: HolidayProvider + ?Sized> BusinessDayRules<'a, H> {
    /// Creates rules for one jurisdiction.
    pub fn new(
        provider: &'a H,
        country: &'a str,
        subdivision: Option<&'a str>,
        saturday_is_business_day: bool,
    ) -> Self {
        Self {
            provider,
            country,
            subdivision,
            saturday_is_business_day,
        }
    }

    /// Returns whether `date` is a business day.
    ///
    /// The holiday lookup runs first, so an unresolvable jurisdiction is
    /// reported even for weekend dates.
    pub fn is_business_day(&self, date: NaiveDate) -> ShiftResult<bool> {
        let holiday = self
            .provider
            .is_holiday(date, self.country, self.subdivision)?;
        Ok(!holiday && !is_weekend(date, self.saturday_is_business_day))
    }
}

/// Walks `increment` business days from `reference`.
///
/// Each candidate is the reference date shifted by a running day offset
/// with [`shift_days`] under `alignment`. For a zero increment the reference
/// itself is returned when it is a business day, otherwise the scan moves
/// forward to the next one. For a non-zero increment the offset steps one
/// day at a time in the increment's direction and the `|increment|`-th
/// business day found is returned.
///
/// Fails with [`ShiftError::NotFound`] when `max_iterations` candidates
/// are examined without satisfying the request.
///
/// # Example
///
/// ```
/// use date_shifter::calculation::{BusinessDayRules, walk_business_days};
/// use date_shifter::error::ShiftError;
/// use date_shifter::models::Alignment;
/// use chrono::NaiveDate;
///
/// let no_holidays = |_: NaiveDate, _: &str, _: Option<&str>| Ok::<_, ShiftError>(false);
/// let rules = BusinessDayRules::new(&no_holidays, "US", None, false);
///
/// // Friday + 1 business day = Monday
/// let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
/// let result = walk_business_days(&rules, friday, 1, Alignment::Same, 1000).unwrap();
/// assert_eq!(result, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
/// ```
pub fn walk_business_days<H: HolidayProvider + ?Sized>(
    rules: &BusinessDayRules<'_, H>,
    reference: NaiveDate,
    increment: i64,
    alignment: Alignment,
    max_iterations: u32,
) -> ShiftResult<NaiveDate> {
    let needed = increment.unsigned_abs();

    if increment == 0 {
        let candidate = shift_days(reference, 0, alignment)?;
        if rules.is_business_day(candidate)? {
            return Ok(candidate);
        }
    }

    let step: i64 = if increment < 0 { -1 } else { 1 };
    let mut offset: i64 = 0;
    let mut found: u64 = 0;
    let mut last_found = None;

    for _ in 0..max_iterations {
        offset += step;
        let candidate = shift_days(reference, offset, alignment)?;
        let business = rules.is_business_day(candidate)?;
        trace!(candidate = %candidate, business, "Business-day candidate");

        if business {
            found += 1;
            last_found = Some(candidate);
            if found >= needed {
                break;
            }
        }
    }

    match last_found {
        Some(date) if found >= needed => Ok(date),
        _ => {
            warn!(
                reference = %reference,
                increment,
                found,
                max_iterations,
                "Business-day search exhausted its iteration bound"
            );
            Err(ShiftError::NotFound {
                requested: needed.max(1),
                iterations: max_iterations,
            })
        }
    }
}
