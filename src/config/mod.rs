//! Configuration loading for the date shifting engine.
//!
//! This module loads engine settings and holiday calendars from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use date_shifter::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/sample").unwrap();
//! println!("Countries: {}", config.calendar().country_count());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{HolidayFile, ShifterSettings};
