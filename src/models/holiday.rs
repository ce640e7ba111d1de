//! Public holiday models and the holiday lookup capability.
//!
//! Holiday data is external to the engine. It is consumed through the
//! [`HolidayProvider`] trait; [`HolidayCalendar`] is an in-memory provider
//! (typically loaded from YAML by [`crate::config::ConfigLoader`]) and
//! [`NoHolidayData`] is the provider used when no jurisdiction is known.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{ShiftError, ShiftResult};

/// Answers whether a date is a public holiday in a jurisdiction.
///
/// Implementations must fail with [`ShiftError::UnsupportedJurisdiction`]
/// for a country or subdivision they cannot resolve, rather than reporting
/// every date as a regular day.
///
/// Closures with the matching signature are providers too:
///
/// ```
/// use date_shifter::models::HolidayProvider;
/// use chrono::{Datelike, NaiveDate};
///
/// let christmas_only = |date: NaiveDate, _country: &str, _subdivision: Option<&str>| {
///     Ok::<_, date_shifter::error::ShiftError>(date.month() == 12 && date.day() == 25)
/// };
///
/// let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert!(christmas_only.is_holiday(date, "US", None).unwrap());
/// ```
pub trait HolidayProvider {
    /// Returns whether `date` is a public holiday in `country` / `subdivision`.
    fn is_holiday(
        &self,
        date: NaiveDate,
        country: &str,
        subdivision: Option<&str>,
    ) -> ShiftResult<bool>;
}

impl<F: ?Sized> HolidayProvider for F
where
    F: Fn(NaiveDate, &str, Option<&str>) -> ShiftResult<bool>,
{
    fn is_holiday(
        &self,
        date: NaiveDate,
        country: &str,
        subdivision: Option<&str>,
    ) -> ShiftResult<bool> {
        self(date, country, subdivision)
    }
}

/// A provider with no jurisdictions.
///
/// Every lookup fails with [`ShiftError::UnsupportedJurisdiction`]. Used by
/// shifters that only perform calendar arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidayData;

impl HolidayProvider for NoHolidayData {
    fn is_holiday(
        &self,
        _date: NaiveDate,
        country: &str,
        subdivision: Option<&str>,
    ) -> ShiftResult<bool> {
        Err(unsupported(country, subdivision))
    }
}

/// A single public holiday.
///
/// A holiday without a subdivision is national and applies to every
/// subdivision of its country.
///
/// # Example
///
/// ```
/// use date_shifter::models::PublicHoliday;
/// use chrono::NaiveDate;
///
/// let holiday = PublicHoliday {
///     date: NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
///     name: "Sao Paulo Anniversary".to_string(),
///     subdivision: Some("SP".to_string()),
/// };
/// assert!(!holiday.is_national());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicHoliday {
    /// The date of the public holiday.
    pub date: NaiveDate,
    /// The name of the public holiday.
    pub name: String,
    /// The subdivision the holiday is restricted to, if any.
    #[serde(default)]
    pub subdivision: Option<String>,
}

impl PublicHoliday {
    /// Whether the holiday applies to the whole country.
    pub fn is_national(&self) -> bool {
        self.subdivision.is_none()
    }

    fn applies_to(&self, subdivision: Option<&str>) -> bool {
        match (&self.subdivision, subdivision) {
            (None, _) => true,
            (Some(own), Some(requested)) => own.eq_ignore_ascii_case(requested),
            (Some(_), None) => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct CountryHolidays {
    subdivisions: HashSet<String>,
    years: BTreeSet<i32>,
    by_date: HashMap<NaiveDate, Vec<PublicHoliday>>,
}

/// An in-memory holiday provider keyed by country code.
///
/// Country and subdivision codes are matched case-insensitively. Lookups
/// for a country that was never registered, or for a subdivision not
/// declared for its country, fail with
/// [`ShiftError::UnsupportedJurisdiction`].
///
/// Each country covers the calendar years it has holidays in, plus any
/// years added with [`HolidayCalendar::insert_coverage`]. A lookup outside
/// those years fails with [`ShiftError::NoHolidayCoverage`] instead of
/// reporting a regular day.
///
/// # Example
///
/// ```
/// use date_shifter::models::{HolidayCalendar, HolidayProvider, PublicHoliday};
/// use chrono::NaiveDate;
///
/// let mut calendar = HolidayCalendar::new();
/// calendar.insert_jurisdiction("BR", &["SP", "RJ"]);
/// calendar
///     .insert_holiday("BR", PublicHoliday {
///         date: NaiveDate::from_ymd_opt(2024, 1, 25).unwrap(),
///         name: "Sao Paulo Anniversary".to_string(),
///         subdivision: Some("SP".to_string()),
///     })
///     .unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();
/// assert!(calendar.is_holiday(date, "BR", Some("SP")).unwrap());
/// assert!(!calendar.is_holiday(date, "BR", Some("RJ")).unwrap());
/// assert!(calendar.is_holiday(date, "AR", None).is_err());
///
/// // Nothing is known about 2025 yet
/// let next_year = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
/// assert!(calendar.is_holiday(next_year, "BR", Some("SP")).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    countries: HashMap<String, CountryHolidays>,
}

impl HolidayCalendar {
    /// Creates an empty calendar with no jurisdictions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a country and the subdivisions it supports.
    ///
    /// Registering the same country again adds to its subdivisions.
    pub fn insert_jurisdiction(&mut self, country: &str, subdivisions: &[&str]) {
        let entry = self.countries.entry(normalize(country)).or_default();
        entry
            .subdivisions
            .extend(subdivisions.iter().map(|s| normalize(s)));
    }

    /// Adds a holiday to a registered country.
    ///
    /// Fails when the country is not registered or the holiday names a
    /// subdivision the country does not declare.
    pub fn insert_holiday(&mut self, country: &str, holiday: PublicHoliday) -> ShiftResult<()> {
        let subdivision = holiday.subdivision.as_deref();
        let entry = self
            .countries
            .get_mut(&normalize(country))
            .ok_or_else(|| unsupported(country, subdivision))?;

        if let Some(code) = subdivision {
            if !entry.subdivisions.contains(&normalize(code)) {
                return Err(unsupported(country, subdivision));
            }
        }

        entry.years.insert(holiday.date.year());
        entry.by_date.entry(holiday.date).or_default().push(holiday);
        Ok(())
    }

    /// Marks calendar years as fully described for a registered country,
    /// including years without any holiday.
    pub fn insert_coverage(&mut self, country: &str, years: &[i32]) -> ShiftResult<()> {
        let entry = self
            .countries
            .get_mut(&normalize(country))
            .ok_or_else(|| unsupported(country, None))?;
        entry.years.extend(years.iter().copied());
        Ok(())
    }

    /// Returns true when the country has holiday data for `year`.
    pub fn covers(&self, country: &str, year: i32) -> bool {
        self.countries
            .get(&normalize(country))
            .is_some_and(|entry| entry.years.contains(&year))
    }

    /// Returns true when the country is registered.
    pub fn supports_country(&self, country: &str) -> bool {
        self.countries.contains_key(&normalize(country))
    }

    /// Number of registered countries.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Returns the holidays observed on `date` in the jurisdiction.
    pub fn holidays_on(
        &self,
        date: NaiveDate,
        country: &str,
        subdivision: Option<&str>,
    ) -> ShiftResult<Vec<&PublicHoliday>> {
        let entry = self.resolve(country, subdivision)?;
        if !entry.years.contains(&date.year()) {
            return Err(ShiftError::NoHolidayCoverage {
                country: country.to_string(),
                year: date.year(),
            });
        }
        Ok(entry
            .by_date
            .get(&date)
            .map(|holidays| {
                holidays
                    .iter()
                    .filter(|h| h.applies_to(subdivision))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn resolve(&self, country: &str, subdivision: Option<&str>) -> ShiftResult<&CountryHolidays> {
        let entry = self
            .countries
            .get(&normalize(country))
            .ok_or_else(|| unsupported(country, subdivision))?;

        match subdivision {
            Some(code) if !entry.subdivisions.contains(&normalize(code)) => {
                Err(unsupported(country, subdivision))
            }
            _ => Ok(entry),
        }
    }
}

impl HolidayProvider for HolidayCalendar {
    fn is_holiday(
        &self,
        date: NaiveDate,
        country: &str,
        subdivision: Option<&str>,
    ) -> ShiftResult<bool> {
        Ok(!self.holidays_on(date, country, subdivision)?.is_empty())
    }
}

fn normalize(code: &str) -> String {
    code.trim().to_uppercase()
}

fn unsupported(country: &str, subdivision: Option<&str>) -> ShiftError {
    ShiftError::UnsupportedJurisdiction {
        country: country.to_string(),
        subdivision: subdivision.map(str::to_string),
    }
}
