//! Core data models for the date shifting engine.
//!
//! This module contains the value types that describe a computation and the
//! holiday lookup capability it consumes.

mod fiscal_period;
mod holiday;
mod shift_request;

pub use fiscal_period::FiscalPeriod;
pub use holiday::{HolidayCalendar, HolidayProvider, NoHolidayData, PublicHoliday};
pub use shift_request::{
    Alignment, CalendarModel, IntervalKind, ShiftRequest, parse_reference_date,
};
