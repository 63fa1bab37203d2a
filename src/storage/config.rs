use std::fmt::Write;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::availability::SlotScope;
use crate::ui::theme::Theme;

pub const APP_DIR: &str = "availability-board";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub availability: AvailabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub theme: String,
    pub first_day_of_week: String,
    pub title_date_format: String,
    pub month_title_format: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AvailabilityConfig {
    pub slot_scope: SlotScope,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            first_day_of_week: "Sunday".to_string(),
            title_date_format: "%Y-%m-%d".to_string(),
            month_title_format: "%B %Y".to_string(),
        }
    }
}

impl UiConfig {
    pub fn week_start(&self) -> Result<Weekday, ConfigError> {
        match self.first_day_of_week.to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(Weekday::Sun),
            "monday" | "mon" => Ok(Weekday::Mon),
            _ => Err(ConfigError::InvalidValue {
                field: "ui.first_day_of_week",
                value: self.first_day_of_week.clone(),
            }),
        }
    }
}

impl Config {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_or_create() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            tracing::info!("Wrote default config to {}", config_path.display());
            Ok(config)
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !Theme::is_known(&self.ui.theme) {
            return Err(ConfigError::InvalidValue {
                field: "ui.theme",
                value: self.ui.theme.clone(),
            });
        }
        self.ui.week_start()?;
        check_date_format("ui.title_date_format", &self.ui.title_date_format)?;
        check_date_format("ui.month_title_format", &self.ui.month_title_format)?;
        Ok(())
    }
}

/// Patterns are applied to plain dates, so time fields fail to render just
/// like unknown specifiers do.
fn check_date_format(field: &'static str, pattern: &str) -> Result<(), ConfigError> {
    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveDate::MIN.format(pattern)).is_err() {
        return Err(ConfigError::InvalidValue {
            field,
            value: pattern.to_string(),
        });
    }
    Ok(())
}
