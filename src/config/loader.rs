//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! settings and holiday calendars from YAML files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::calculation::DateShifter;
use crate::error::{ShiftError, ShiftResult};
use crate::models::HolidayCalendar;

use super::types::{HolidayFile, ShifterSettings};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/sample/
/// ├── settings.yaml   # Optional engine settings
/// └── holidays/
///     ├── br.yaml     # One file per country
///     └── us.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use date_shifter::config::ConfigLoader;
/// use date_shifter::models::ShiftRequest;
///
/// let loader = ConfigLoader::load("./config/sample")?;
/// let shifter = loader.shifter();
///
/// let request = ShiftRequest::parse("BDAY", "2024-01-15", 5, "S")?
///     .with_jurisdiction("BR", Some("SP"));
/// println!("{}", shifter.compute_date(&request)?);
/// # Ok::<(), date_shifter::error::ShiftError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    settings: ShifterSettings,
    calendar: HolidayCalendar,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if:
    /// - The `holidays` directory is missing or holds no YAML files
    /// - Any file contains invalid YAML or misses a required field
    /// - A holiday names a subdivision its file does not declare
    ///
    /// A missing `settings.yaml` yields [`ShifterSettings::default`].
    pub fn load<P: AsRef<Path>>(path: P) -> ShiftResult<Self> {
        let path = path.as_ref();

        let settings_path = path.join("settings.yaml");
        let settings = if settings_path.exists() {
            Self::load_settings(&settings_path)?
        } else {
            ShifterSettings::default()
        };

        let holidays_dir = path.join("holidays");
        let mut calendar = HolidayCalendar::new();
        for file_path in Self::holiday_files(&holidays_dir)? {
            let file = Self::load_yaml::<HolidayFile>(&file_path)?;
            Self::register(&mut calendar, file).map_err(|e| ShiftError::ConfigParseError {
                path: file_path.display().to_string(),
                message: e.to_string(),
            })?;
        }

        info!(
            path = %path.display(),
            countries = calendar.country_count(),
            max_business_day_iterations = settings.max_business_day_iterations,
            "Loaded date shifter configuration"
        );

        Ok(Self { settings, calendar })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ShiftResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ShiftError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ShiftError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn load_settings(path: &Path) -> ShiftResult<ShifterSettings> {
        let content = fs::read_to_string(path).map_err(|_| ShiftError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        if content.trim().is_empty() {
            return Ok(ShifterSettings::default());
        }
        Self::load_yaml(path)
    }

    /// Lists the YAML files in the holidays directory, sorted by name.
    fn holiday_files(holidays_dir: &Path) -> ShiftResult<Vec<PathBuf>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(ShiftError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| ShiftError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| ShiftError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                files.push(path);
            }
        }

        if files.is_empty() {
            return Err(ShiftError::ConfigNotFound {
                path: format!("{} (no holiday files found)", holidays_dir_str),
            });
        }

        files.sort();
        Ok(files)
    }

    fn register(calendar: &mut HolidayCalendar, file: HolidayFile) -> ShiftResult<()> {
        let subdivisions: Vec<&str> = file.subdivisions.iter().map(String::as_str).collect();
        calendar.insert_jurisdiction(&file.country, &subdivisions);
        calendar.insert_coverage(&file.country, &file.years)?;
        for holiday in file.holidays {
            calendar.insert_holiday(&file.country, holiday)?;
        }
        Ok(())
    }

    /// Returns the engine settings.
    pub fn settings(&self) -> &ShifterSettings {
        &self.settings
    }

    /// Returns the loaded holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// Builds a shifter over a copy of the loaded calendar.
    pub fn shifter(&self) -> DateShifter<HolidayCalendar> {
        DateShifter::new(self.calendar.clone()).with_settings(&self.settings)
    }

    /// Builds a shifter, handing over the loaded calendar.
    pub fn into_shifter(self) -> DateShifter<HolidayCalendar> {
        DateShifter::new(self.calendar).with_settings(&self.settings)
    }
}
