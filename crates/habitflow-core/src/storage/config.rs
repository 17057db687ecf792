//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - The default progress period
//! - Dashboard history length and calendar week offset
//! - An optional fixed "today" for reproducible output
//!
//! Configuration is stored at `~/.config/habitflow/config.toml`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::dashboard::{MAX_HISTORY_DAYS, MAX_WEEK_OFFSET};
use crate::dates::parse_iso_date;
use crate::engine::{Period, ScheduleEngine};
use crate::error::ConfigError;

/// Progress-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressConfig {
    #[serde(default)]
    pub default_period: Period,
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_history_days")]
    pub history_days: u32,
    #[serde(default)]
    pub week_offset: i64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/habitflow/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fixed reference date used instead of the local calendar date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today_override: Option<NaiveDate>,
    #[serde(default)]
    pub progress: ProgressConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

fn default_history_days() -> u32 {
    7
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            default_period: Period::Week,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            history_days: default_history_days(),
            week_offset: 0,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            today_override: None,
            progress: ProgressConfig::default(),
            dashboard: DashboardConfig::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, writing defaults there when the file is missing.
    ///
    /// # Errors
    ///
    /// See [`Config::load`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                tracing::debug!(path = %path.display(), "wrote default config");
                Ok(cfg)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config cannot be serialized or written to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    /// Persist to `path`.
    ///
    /// # Errors
    ///
    /// See [`Config::save`].
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let save_err = |message: String| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| save_err(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_err(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key.
    ///
    /// `today_override` accepts a `YYYY-MM-DD` date, or `none` to clear it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] for keys that do not exist and
    /// [`ConfigError::InvalidValue`] when the value does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        match key {
            "progress.default_period" => {
                self.progress.default_period = value
                    .parse::<Period>()
                    .map_err(|e| invalid(e.to_string()))?;
            }
            "dashboard.history_days" => {
                let days: u32 = value
                    .parse()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                if !(1..=MAX_HISTORY_DAYS).contains(&days) {
                    return Err(invalid(format!("must be between 1 and {MAX_HISTORY_DAYS}")));
                }
                self.dashboard.history_days = days;
            }
            "dashboard.week_offset" => {
                let offset: i64 = value
                    .parse()
                    .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?;
                if !(-MAX_WEEK_OFFSET..=MAX_WEEK_OFFSET).contains(&offset) {
                    return Err(invalid(format!(
                        "must be between -{MAX_WEEK_OFFSET} and {MAX_WEEK_OFFSET}"
                    )));
                }
                self.dashboard.week_offset = offset;
            }
            "today_override" => {
                self.today_override = if value.eq_ignore_ascii_case("none") || value.is_empty() {
                    None
                } else {
                    Some(parse_iso_date(value).map_err(|e| invalid(e.to_string()))?)
                };
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Set a value and persist it.
    ///
    /// # Errors
    ///
    /// See [`Config::set`] and [`Config::save`].
    pub fn set_and_save(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        self.set(key, value)?;
        self.save()
    }

    /// Reference date: the override when set, otherwise the local date.
    pub fn today(&self) -> NaiveDate {
        self.today_override
            .unwrap_or_else(|| ScheduleEngine::local_today().today())
    }
}
