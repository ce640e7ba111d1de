//! Date arithmetic for the date shifting engine.
//!
//! This module contains the pure calculation functions: alignment and
//! day-clamping, Gregorian year/month/day shifting, 4-4-5 fiscal period
//! resolution and fiscal shifting, the bounded business-day walk, and the
//! [`DateShifter`] that dispatches a request to the right path.

mod alignment;
mod business_day;
mod calendar_shift;
mod fiscal_calendar;
mod fiscal_shift;
mod shifter;

pub use alignment::{add_days, add_months, align_day, days_in_month};
pub use business_day::{
    BusinessDayRules, DEFAULT_MAX_BUSINESS_DAY_ITERATIONS, is_weekend, walk_business_days,
};
pub use calendar_shift::{shift_days, shift_months, shift_years};
pub use fiscal_calendar::{FISCAL_MONTHS, fiscal_period, fiscal_period_of, fiscal_year_start};
pub use fiscal_shift::{add_fiscal_months, shift_fiscal_months, shift_fiscal_years};
pub use shifter::{DateShifter, year_month};
