//! Configuration file support for the date picker binary.
//!
//! Configuration is loaded from `~/.config/wheel-datepicker/config.toml` with
//! the following precedence:
//! 1. CLI arguments (highest priority)
//! 2. Environment variables (`WHEEL_DATEPICKER_YEARS=2010..2100`)
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/wheel-datepicker/config.toml
//! title = "Pick a day"
//! year_start = 1990
//! year_end = 2050
//! ok_label = "Done"
//! cancel_label = "Back"
//!
//! # Wheel feel
//! item_height = 48.0
//! scroll_step = 48.0
//! snap_duration_ms = 180
//! scroll_idle_ms = 150
//! ```

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::dialog::DatePickerOptions;
use crate::error::{PickerError, Result};
use crate::picker::WheelMetrics;

/// Environment variable holding a `START..END` year range
pub const YEARS_ENV: &str = "WHEEL_DATEPICKER_YEARS";

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Dialog title
    pub title: Option<String>,

    /// First selectable year
    pub year_start: Option<i32>,

    /// Last selectable year (inclusive)
    pub year_end: Option<i32>,

    /// Confirm button label
    pub ok_label: Option<String>,

    /// Cancel button label
    pub cancel_label: Option<String>,

    /// Logical height of one wheel item
    pub item_height: Option<f32>,

    /// Pixels scrolled per mouse wheel notch. Must exceed half an item,
    /// otherwise a single notch snaps back to the item it started on.
    pub scroll_step: Option<f32>,

    /// Snap animation length
    pub snap_duration_ms: Option<u64>,

    /// Quiet period that ends a scroll gesture
    pub scroll_idle_ms: Option<u64>,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if file doesn't exist or can't be parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("wheel-datepicker")
    }

    /// Apply the year range from the environment, if set and valid.
    pub fn with_env(self) -> Self {
        match std::env::var(YEARS_ENV) {
            Ok(value) => match parse_year_range(&value) {
                Ok(years) => self.with_years(years),
                Err(e) => {
                    eprintln!("Warning: Ignoring {}: {}", YEARS_ENV, e);
                    self
                }
            },
            Err(_) => self,
        }
    }

    /// Merge with CLI overrides.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn with_overrides(
        mut self,
        title: Option<String>,
        years: Option<RangeInclusive<i32>>,
        ok_label: Option<String>,
        cancel_label: Option<String>,
    ) -> Self {
        if title.is_some() {
            self.title = title;
        }
        if let Some(years) = years {
            self = self.with_years(years);
        }
        if ok_label.is_some() {
            self.ok_label = ok_label;
        }
        if cancel_label.is_some() {
            self.cancel_label = cancel_label;
        }
        self
    }

    fn with_years(mut self, years: RangeInclusive<i32>) -> Self {
        self.year_start = Some(*years.start());
        self.year_end = Some(*years.end());
        self
    }

    /// Wheel geometry and timing, falling back to defaults.
    pub fn metrics(&self) -> WheelMetrics {
        let defaults = WheelMetrics::default();
        let item_height = self.item_height.filter(|h| *h > 0.0).unwrap_or(defaults.item_height);
        WheelMetrics {
            item_height,
            scroll_step: self
                .scroll_step
                .filter(|s| *s > item_height / 2.0)
                .unwrap_or(item_height),
            snap_duration: self
                .snap_duration_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.snap_duration),
            scroll_idle_ms: self.scroll_idle_ms.unwrap_or(defaults.scroll_idle_ms),
        }
    }

    /// Build dialog options, falling back to defaults.
    pub fn picker_options(&self) -> DatePickerOptions {
        let defaults = DatePickerOptions::default();
        let start = self.year_start.unwrap_or(*defaults.years.start());
        let end = self.year_end.unwrap_or(*defaults.years.end());
        DatePickerOptions {
            title: self.title.clone().unwrap_or(defaults.title),
            years: start..=end,
            ok_label: self.ok_label.clone().unwrap_or(defaults.ok_label),
            cancel_label: self.cancel_label.clone().unwrap_or(defaults.cancel_label),
            metrics: self.metrics(),
        }
    }
}

/// Parse `START..END`, `START..=END`, or `START-END` as an inclusive range.
pub fn parse_year_range(value: &str) -> Result<RangeInclusive<i32>> {
    let value = value.trim();
    let (start, end) = value
        .split_once("..=")
        .or_else(|| value.split_once(".."))
        .or_else(|| value.split_once('-'))
        .ok_or_else(|| PickerError::Config(format!("expected START..END, got '{}'", value)))?;

    let parse = |s: &str| {
        s.trim()
            .parse::<i32>()
            .map_err(|e| PickerError::Config(format!("invalid year '{}': {}", s.trim(), e)))
    };
    let (start, end) = (parse(start)?, parse(end)?);
    if start > end {
        return Err(PickerError::EmptyRange("year"));
    }
    Ok(start..=end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.title.is_none());
        assert!(config.year_start.is_none());

        let options = config.picker_options();
        assert_eq!(options.title, "Select Date");
        assert_eq!(options.years, 2010..=2100);
        assert_eq!(options.ok_label, "OK");
        assert_eq!(options.cancel_label, "Cancel");
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            title = "Pick a day"
            year_start = 1990
            year_end = 2050
            ok_label = "Done"
            snap_duration_ms = 90
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        let options = config.picker_options();
        assert_eq!(options.title, "Pick a day");
        assert_eq!(options.years, 1990..=2050);
        assert_eq!(options.ok_label, "Done");
        assert_eq!(options.cancel_label, "Cancel");
        assert_eq!(options.metrics.snap_duration, Duration::from_millis(90));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = Config {
            title: Some("From file".to_string()),
            year_start: Some(1990),
            year_end: Some(2000),
            ..Default::default()
        }
        .with_overrides(Some("From CLI".to_string()), Some(2020..=2030), None, None);

        let options = config.picker_options();
        assert_eq!(options.title, "From CLI");
        assert_eq!(options.years, 2020..=2030);
    }

    #[test]
    fn test_invalid_metrics_fall_back() {
        let config = Config { item_height: Some(0.0), ..Default::default() };
        assert_eq!(config.metrics().item_height, WheelMetrics::default().item_height);
    }

    #[test]
    fn test_short_scroll_step_falls_back_to_item_height() {
        let config = Config { item_height: Some(30.0), scroll_step: Some(10.0), ..Default::default() };
        assert_eq!(config.metrics().scroll_step, 30.0);

        let config = Config { scroll_step: Some(15.0), ..Default::default() };
        assert_eq!(config.metrics().scroll_step, WheelMetrics::default().item_height);

        let config = Config { item_height: Some(30.0), scroll_step: Some(20.0), ..Default::default() };
        assert_eq!(config.metrics().scroll_step, 20.0);
    }

    #[test]
    fn test_parse_year_range() {
        assert_eq!(parse_year_range("2010..2100").unwrap(), 2010..=2100);
        assert_eq!(parse_year_range("2010..=2100").unwrap(), 2010..=2100);
        assert_eq!(parse_year_range(" 1999-2001 ").unwrap(), 1999..=2001);
        assert!(matches!(parse_year_range("2100..2010"), Err(PickerError::EmptyRange(_))));
        assert!(matches!(parse_year_range("soon"), Err(PickerError::Config(_))));
        assert!(matches!(parse_year_range("20x0..2100"), Err(PickerError::Config(_))));
    }
}
