//! Shift request model and its enumerations.
//!
//! This module defines the [`ShiftRequest`] record that fully describes one
//! date computation, along with the closed enumerations that select the
//! arithmetic path ([`IntervalKind`]), the snapping policy ([`Alignment`])
//! and the calendar model ([`CalendarModel`]).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::error::{ShiftError, ShiftResult};

/// The unit in which a shift increment is expressed.
///
/// # Example
///
/// ```
/// use date_shifter::models::IntervalKind;
///
/// let kind: IntervalKind = "bday".parse().unwrap();
/// assert_eq!(kind, IntervalKind::BusinessDay);
/// assert_eq!(kind.to_string(), "BUSINESS_DAY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntervalKind {
    /// Whole years (calendar or fiscal).
    Year,
    /// Whole months (calendar or fiscal periods).
    Month,
    /// Calendar days.
    Day,
    /// Business days, skipping weekends and public holidays.
    BusinessDay,
}

impl fmt::Display for IntervalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalKind::Year => write!(f, "YEAR"),
            IntervalKind::Month => write!(f, "MONTH"),
            IntervalKind::Day => write!(f, "DAY"),
            IntervalKind::BusinessDay => write!(f, "BUSINESS_DAY"),
        }
    }
}

impl FromStr for IntervalKind {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "YEAR" => Ok(IntervalKind::Year),
            "MONTH" => Ok(IntervalKind::Month),
            "DAY" => Ok(IntervalKind::Day),
            "BDAY" | "BUSINESS_DAY" => Ok(IntervalKind::BusinessDay),
            _ => Err(ShiftError::invalid(
                "interval",
                format!("expected YEAR, MONTH, DAY or BUSINESS_DAY, got '{}'", s),
            )),
        }
    }
}

/// Where the result is pinned within its resulting period.
///
/// The single-letter codes `B` (beginning), `E` (end) and `S` (same) are
/// accepted when parsing and deserializing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Alignment {
    /// First day of the resulting period.
    Start,
    /// Last day of the resulting period.
    End,
    /// Same day-of-month (clamped) or same offset within the fiscal period.
    Same,
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alignment::Start => write!(f, "START"),
            Alignment::End => write!(f, "END"),
            Alignment::Same => write!(f, "SAME"),
        }
    }
}

impl FromStr for Alignment {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "B" | "START" => Ok(Alignment::Start),
            "E" | "END" => Ok(Alignment::End),
            "S" | "SAME" => Ok(Alignment::Same),
            _ => Err(ShiftError::invalid(
                "alignment",
                format!("expected START, END or SAME, got '{}'", s),
            )),
        }
    }
}

/// The calendar model that defines what a "year" and a "month" are.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalendarModel {
    /// Gregorian months and years.
    #[default]
    Standard,
    /// 4-4-5 fiscal periods, each spanning Monday through Sunday.
    Fiscal,
}

impl fmt::Display for CalendarModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalendarModel::Standard => write!(f, "STANDARD"),
            CalendarModel::Fiscal => write!(f, "FISCAL"),
        }
    }
}

impl FromStr for CalendarModel {
    type Err = ShiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "NORMAL" | "STANDARD" => Ok(CalendarModel::Standard),
            "FISCAL" => Ok(CalendarModel::Fiscal),
            _ => Err(ShiftError::invalid(
                "calendar_model",
                format!("expected STANDARD or FISCAL, got '{}'", s),
            )),
        }
    }
}

/// Deserializes an enumeration through its case-insensitive `FromStr`.
fn deserialize_from_str<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = ShiftError>,
{
    let value = String::deserialize(deserializer)?;
    value.parse().map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for IntervalKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for Alignment {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for CalendarModel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

/// Parses a reference date in strict `YYYY-MM-DD` form.
///
/// # Example
///
/// ```
/// use date_shifter::models::parse_reference_date;
/// use chrono::NaiveDate;
///
/// let date = parse_reference_date("2024-02-29").unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
///
/// assert!(parse_reference_date("2023-02-29").is_err());
/// assert!(parse_reference_date("29/02/2024").is_err());
/// ```
pub fn parse_reference_date(s: &str) -> ShiftResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|e| {
        ShiftError::invalid(
            "reference_date",
            format!("expected YYYY-MM-DD, got '{}': {}", s, e),
        )
    })
}

/// A complete, immutable description of one date computation.
///
/// Requests are built with [`ShiftRequest::new`] (typed inputs) or
/// [`ShiftRequest::parse`] (string inputs) and refined with the `with_*`
/// builders. [`ShiftRequest::validate`] checks the cross-field rule that a
/// business-day request names a country.
///
/// # Example
///
/// ```
/// use date_shifter::models::{Alignment, CalendarModel, IntervalKind, ShiftRequest};
///
/// let request = ShiftRequest::parse("BDAY", "2024-01-15", 5, "S")
///     .unwrap()
///     .with_jurisdiction("BR", Some("SP"));
///
/// assert_eq!(request.interval, IntervalKind::BusinessDay);
/// assert_eq!(request.alignment, Alignment::Same);
/// assert_eq!(request.calendar_model, CalendarModel::Standard);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Which arithmetic path runs.
    pub interval: IntervalKind,
    /// The date the increment is applied to.
    pub reference_date: NaiveDate,
    /// Signed number of intervals; zero is allowed.
    pub increment: i64,
    /// How the result is pinned within its period.
    pub alignment: Alignment,
    /// Gregorian or 4-4-5 fiscal semantics.
    #[serde(default)]
    pub calendar_model: CalendarModel,
    /// Country code for holiday lookups; required for business days.
    #[serde(default)]
    pub country: Option<String>,
    /// Subdivision (state, province) code for holiday lookups.
    #[serde(default)]
    pub subdivision: Option<String>,
    /// When true, only Sunday is a weekend day.
    #[serde(default)]
    pub saturday_is_business_day: bool,
}

impl ShiftRequest {
    /// Creates a standard-calendar request with no jurisdiction.
    pub fn new(
        interval: IntervalKind,
        reference_date: NaiveDate,
        increment: i64,
        alignment: Alignment,
    ) -> Self {
        Self {
            interval,
            reference_date,
            increment,
            alignment,
            calendar_model: CalendarModel::Standard,
            country: None,
            subdivision: None,
            saturday_is_business_day: false,
        }
    }

    /// Creates a request from string inputs.
    ///
    /// Fails with [`ShiftError::InvalidArgument`] when the interval, date or
    /// alignment cannot be parsed.
    pub fn parse(
        interval: &str,
        reference_date: &str,
        increment: i64,
        alignment: &str,
    ) -> ShiftResult<Self> {
        Ok(Self::new(
            interval.parse()?,
            parse_reference_date(reference_date)?,
            increment,
            alignment.parse()?,
        ))
    }

    /// Sets the calendar model.
    pub fn with_calendar_model(mut self, calendar_model: CalendarModel) -> Self {
        self.calendar_model = calendar_model;
        self
    }

    /// Sets the holiday jurisdiction.
    pub fn with_jurisdiction(mut self, country: &str, subdivision: Option<&str>) -> Self {
        self.country = Some(country.to_string());
        self.subdivision = subdivision.map(str::to_string);
        self
    }

    /// Treats Saturday as a working day, leaving only Sunday as weekend.
    pub fn with_saturday_business_days(mut self, saturday_is_business_day: bool) -> Self {
        self.saturday_is_business_day = saturday_is_business_day;
        self
    }

    /// Returns the country code when it is present and non-blank.
    pub fn country_code(&self) -> Option<&str> {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Returns the subdivision code when it is present and non-blank.
    pub fn subdivision_code(&self) -> Option<&str> {
        self.subdivision
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    /// Checks the request before any computation runs.
    ///
    /// A [`IntervalKind::BusinessDay`] request must carry a non-empty
    /// country code.
    pub fn validate(&self) -> ShiftResult<()> {
        if self.interval == IntervalKind::BusinessDay && self.country_code().is_none() {
            return Err(ShiftError::invalid(
                "country",
                "required for BUSINESS_DAY intervals",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // Enumeration parsing
    // ==========================================================================
    #[test]
    fn test_interval_parses_long_and_short_names() {
        assert_eq!("YEAR".parse::<IntervalKind>().unwrap(), IntervalKind::Year);
        assert_eq!("month".parse::<IntervalKind>().unwrap(), IntervalKind::Month);
        assert_eq!(" Day ".parse::<IntervalKind>().unwrap(), IntervalKind::Day);
        assert_eq!(
            "BDAY".parse::<IntervalKind>().unwrap(),
            IntervalKind::BusinessDay
        );
        assert_eq!(
            "business_day".parse::<IntervalKind>().unwrap(),
            IntervalKind::BusinessDay
        );
    }

    #[test]
    fn test_interval_rejects_unknown_value() {
        match "WEEK".parse::<IntervalKind>() {
            Err(ShiftError::InvalidArgument { field, message }) => {
                assert_eq!(field, "interval");
                assert!(message.contains("WEEK"));
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_alignment_parses_codes() {
        assert_eq!("B".parse::<Alignment>().unwrap(), Alignment::Start);
        assert_eq!("e".parse::<Alignment>().unwrap(), Alignment::End);
        assert_eq!("same".parse::<Alignment>().unwrap(), Alignment::Same);
        assert!("X".parse::<Alignment>().is_err());
    }

    #[test]
    fn test_calendar_model_parses_normal_alias() {
        assert_eq!(
            "NORMAL".parse::<CalendarModel>().unwrap(),
            CalendarModel::Standard
        );
        assert_eq!(
            "fiscal".parse::<CalendarModel>().unwrap(),
            CalendarModel::Fiscal
        );
        assert!("LUNAR".parse::<CalendarModel>().is_err());
    }

    #[test]
    fn test_display_matches_canonical_names() {
        assert_eq!(IntervalKind::BusinessDay.to_string(), "BUSINESS_DAY");
        assert_eq!(Alignment::End.to_string(), "END");
        assert_eq!(CalendarModel::Fiscal.to_string(), "FISCAL");
    }

    // ==========================================================================
    // Reference date parsing
    // ==========================================================================
    #[test]
    fn test_parse_reference_date_valid() {
        assert_eq!(parse_reference_date("2024-01-15").unwrap(), make_date("2024-01-15"));
    }

    #[test]
    fn test_parse_reference_date_malformed() {
        for input in ["2024/01/15", "2024-13-01", "2023-02-29", "", "yesterday"] {
            match parse_reference_date(input) {
                Err(ShiftError::InvalidArgument { field, .. }) => {
                    assert_eq!(field, "reference_date")
                }
                other => panic!("Expected InvalidArgument for '{}', got {:?}", input, other),
            }
        }
    }

    // ==========================================================================
    // Request construction and validation
    // ==========================================================================
    #[test]
    fn test_new_request_defaults() {
        let request = ShiftRequest::new(
            IntervalKind::Day,
            make_date("2024-01-15"),
            0,
            Alignment::Same,
        );
        assert_eq!(request.calendar_model, CalendarModel::Standard);
        assert_eq!(request.country, None);
        assert!(!request.saturday_is_business_day);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_parse_propagates_bad_alignment() {
        let result = ShiftRequest::parse("MONTH", "2024-01-15", 1, "Q");
        assert!(matches!(
            result,
            Err(ShiftError::InvalidArgument { ref field, .. }) if field == "alignment"
        ));
    }

    #[test]
    fn test_business_day_without_country_fails_validation() {
        let request = ShiftRequest::new(
            IntervalKind::BusinessDay,
            make_date("2024-01-15"),
            1,
            Alignment::Same,
        );
        match request.validate() {
            Err(ShiftError::InvalidArgument { field, .. }) => assert_eq!(field, "country"),
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_business_day_with_blank_country_fails_validation() {
        let request = ShiftRequest::new(
            IntervalKind::BusinessDay,
            make_date("2024-01-15"),
            1,
            Alignment::Same,
        )
        .with_jurisdiction("  ", None);
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_blank_subdivision_is_treated_as_absent() {
        let request = ShiftRequest::new(
            IntervalKind::BusinessDay,
            make_date("2024-01-15"),
            1,
            Alignment::Same,
        )
        .with_jurisdiction("US", Some(""));
        assert_eq!(request.country_code(), Some("US"));
        assert_eq!(request.subdivision_code(), None);
    }

    #[test]
    fn test_request_deserializes_legacy_codes() {
        let json = r#"{
            "interval": "BDAY",
            "reference_date": "2024-01-15",
            "increment": -3,
            "alignment": "S",
            "calendar_model": "NORMAL",
            "country": "BR"
        }"#;
        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.interval, IntervalKind::BusinessDay);
        assert_eq!(request.increment, -3);
        assert_eq!(request.alignment, Alignment::Same);
        assert_eq!(request.calendar_model, CalendarModel::Standard);
        assert_eq!(request.subdivision, None);
    }

    #[test]
    fn test_request_deserializes_lowercase_codes() {
        let json = r#"{
            "interval": "bday",
            "reference_date": "2024-01-15",
            "increment": 2,
            "alignment": "s",
            "calendar_model": "fiscal",
            "country": "BR"
        }"#;
        let request: ShiftRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.interval, IntervalKind::BusinessDay);
        assert_eq!(request.alignment, Alignment::Same);
        assert_eq!(request.calendar_model, CalendarModel::Fiscal);
    }

    #[test]
    fn test_request_rejects_unknown_code_with_parse_message() {
        let json = r#"{
            "interval": "WEEK",
            "reference_date": "2024-01-15",
            "increment": 1,
            "alignment": "SAME"
        }"#;
        let error = serde_json::from_str::<ShiftRequest>(json).unwrap_err();
        assert!(error.to_string().contains("expected YEAR, MONTH, DAY or BUSINESS_DAY"));
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let request = ShiftRequest::new(
            IntervalKind::Month,
            make_date("2024-01-31"),
            -1,
            Alignment::End,
        )
        .with_calendar_model(CalendarModel::Fiscal);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(serde_json::from_str::<ShiftRequest>(&json).unwrap(), request);
    }

    #[test]
    fn test_request_rejects_fractional_increment() {
        let json = r#"{
            "interval": "DAY",
            "reference_date": "2024-01-15",
            "increment": 1.5,
            "alignment": "SAME"
        }"#;
        assert!(serde_json::from_str::<ShiftRequest>(json).is_err());
    }

    #[test]
    fn test_request_serializes_canonical_names() {
        let request = ShiftRequest::new(
            IntervalKind::BusinessDay,
            make_date("2024-01-15"),
            2,
            Alignment::End,
        )
        .with_calendar_model(CalendarModel::Fiscal);
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"interval\":\"BUSINESS_DAY\""));
        assert!(json.contains("\"alignment\":\"END\""));
        assert!(json.contains("\"calendar_model\":\"FISCAL\""));
    }
}
