//! Configuration types for the date shifting engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;

use crate::calculation::DEFAULT_MAX_BUSINESS_DAY_ITERATIONS;
use crate::models::PublicHoliday;

/// Engine settings from `settings.yaml`.
///
/// Every field has a default, so an empty file (or no file at all) yields
/// the default settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ShifterSettings {
    /// Cap on candidate dates examined by one business-day walk.
    #[serde(default = "default_max_business_day_iterations")]
    pub max_business_day_iterations: u32,
}

impl Default for ShifterSettings {
    fn default() -> Self {
        Self {
            max_business_day_iterations: DEFAULT_MAX_BUSINESS_DAY_ITERATIONS,
        }
    }
}

fn default_max_business_day_iterations() -> u32 {
    DEFAULT_MAX_BUSINESS_DAY_ITERATIONS
}

/// One country's holidays, as stored in `holidays/<name>.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayFile {
    /// The country code (e.g., "BR").
    pub country: String,
    /// Subdivision codes the country supports (e.g., "SP", "RJ").
    #[serde(default)]
    pub subdivisions: Vec<String>,
    /// Calendar years the file fully describes. Years that hold at least
    /// one holiday are covered even when not listed.
    #[serde(default)]
    pub years: Vec<i32>,
    /// The holidays; entries without a subdivision are national.
    #[serde(default)]
    pub holidays: Vec<PublicHoliday>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_bound() {
        assert_eq!(
            ShifterSettings::default().max_business_day_iterations,
            DEFAULT_MAX_BUSINESS_DAY_ITERATIONS
        );
    }

    #[test]
    fn test_settings_missing_field_uses_default() {
        let settings: ShifterSettings = serde_yaml::from_str("{}").unwrap();
        assert_eq!(settings, ShifterSettings::default());
    }

    #[test]
    fn test_settings_override() {
        let settings: ShifterSettings =
            serde_yaml::from_str("max_business_day_iterations: 5000").unwrap();
        assert_eq!(settings.max_business_day_iterations, 5000);
    }

    #[test]
    fn test_holiday_file_parses() {
        let yaml = r#"
country: BR
subdivisions: [SP, RJ]
years: [2024, 2025]
holidays:
  - date: 2024-01-01
    name: New Year's Day
  - date: 2024-01-25
    name: Sao Paulo Anniversary
    subdivision: SP
"#;
        let file: HolidayFile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(file.country, "BR");
        assert_eq!(file.subdivisions, vec!["SP", "RJ"]);
        assert_eq!(file.years, vec![2024, 2025]);
        assert_eq!(file.holidays.len(), 2);
        assert!(file.holidays[0].is_national());
        assert_eq!(file.holidays[1].subdivision.as_deref(), Some("SP"));
    }

    #[test]
    fn test_holiday_file_without_holidays() {
        let file: HolidayFile = serde_yaml::from_str("country: AU\n").unwrap();
        assert!(file.subdivisions.is_empty());
        assert!(file.years.is_empty());
        assert!(file.holidays.is_empty());
    }
}
