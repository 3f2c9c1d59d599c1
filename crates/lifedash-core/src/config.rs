//! TOML-based profile configuration.
//!
//! Stores the sticky dashboard inputs so the CLI does not need every flag
//! on every run:
//! - identity (date of birth, expected age)
//! - daily hours for the six built-in activities
//! - custom categories
//! - display preferences
//!
//! The profile is stored at `~/.config/lifedash/config.toml`.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::{check_hours, CustomCategory, DailyHours};
use crate::dashboard::DashboardRequest;
use crate::error::ConfigError;
use crate::unit::DisplayUnit;

/// Returns `~/.config/lifedash[-dev]/` based on LIFEDASH_ENV.
///
/// Set LIFEDASH_ENV=dev to use a development data directory.
///
/// # Errors
///
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("LIFEDASH_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("lifedash-dev")
    } else {
        base_dir.join("lifedash")
    };

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::SaveFailed {
        path: dir.clone(),
        message: e.to_string(),
    })?;
    Ok(dir)
}

/// Identity section: who the dashboard is about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdentityConfig {
    #[serde(default = "default_date_of_birth")]
    pub date_of_birth: NaiveDate,
    #[serde(default = "default_expected_age")]
    pub expected_age_years: f64,
}

/// Display section.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub unit: DisplayUnit,
}

fn default_date_of_birth() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date")
}
fn default_expected_age() -> f64 {
    63.0
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            date_of_birth: default_date_of_birth(),
            expected_age_years: default_expected_age(),
        }
    }
}

/// User profile.
///
/// Serialized to/from TOML at `~/.config/lifedash/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub identity: IdentityConfig,
    #[serde(default)]
    pub hours: DailyHours,
    #[serde(default)]
    pub custom: Vec<CustomCategory>,
    #[serde(default)]
    pub display: DisplayConfig,
}

impl Profile {
    /// Path of the profile file.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be created.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing a default profile on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                toml::from_str(&content).map_err(|e| ConfigError::ParseFailed(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let profile = Self::default();
                profile.save_to(path)?;
                Ok(profile)
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Persist to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::path()?)
    }

    fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load from disk, returning the default profile on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Get a profile value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a known scalar key and persist. Custom categories are managed
    /// with [`Profile::add_category`] and [`Profile::remove_category`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key is unknown, the value cannot be parsed,
    /// or the profile cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "identity.date_of_birth" => {
                self.identity.date_of_birth = value
                    .parse()
                    .map_err(|_| invalid(key, "expected a date as YYYY-MM-DD"))?;
            }
            "identity.expected_age_years" => {
                self.identity.expected_age_years = parse_f64(key, value)?;
            }
            "hours.job" => self.hours.job = parse_hours(key, value)?,
            "hours.eating" => self.hours.eating = parse_hours(key, value)?,
            "hours.travel" => self.hours.travel = parse_hours(key, value)?,
            "hours.sleep" => self.hours.sleep = parse_hours(key, value)?,
            "hours.exercise" => self.hours.exercise = parse_hours(key, value)?,
            "hours.family" => self.hours.family = parse_hours(key, value)?,
            "display.unit" => {
                self.display.unit = value
                    .parse()
                    .map_err(|_| invalid(key, "expected Hours, Days, Weeks, Months or Years"))?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }

    /// Add or update a custom category and persist (last-write-wins by name).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, the hours are outside
    /// [0, 24], or the profile cannot be saved.
    pub fn add_category(&mut self, name: &str, hours_per_day: f64) -> Result<(), ConfigError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(invalid("custom", "category name must not be empty"));
        }
        check_hours(name, hours_per_day)
            .map_err(|e| invalid("custom", &e.to_string()))?;
        self.upsert_custom(name, hours_per_day);
        self.save()
    }

    fn upsert_custom(&mut self, name: &str, hours_per_day: f64) {
        match self.custom.iter_mut().find(|c| c.name == name) {
            Some(existing) => existing.hours_per_day = hours_per_day,
            None => self.custom.push(CustomCategory {
                name: name.to_string(),
                hours_per_day,
            }),
        }
    }

    /// Remove a custom category by name and persist.
    ///
    /// Returns whether an entry was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the profile cannot be saved.
    pub fn remove_category(&mut self, name: &str) -> Result<bool, ConfigError> {
        let before = self.custom.len();
        self.custom.retain(|c| c.name != name);
        let removed = self.custom.len() != before;
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    /// Build a computation request from this profile and a reference date.
    pub fn request(&self, reference_date: NaiveDate) -> DashboardRequest {
        DashboardRequest {
            date_of_birth: self.identity.date_of_birth,
            expected_age_years: self.identity.expected_age_years,
            daily_hours: self.hours,
            custom_categories: self.custom.clone(),
            reference_date,
            display_unit: self.display.unit,
        }
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn parse_f64(key: &str, value: &str) -> Result<f64, ConfigError> {
    value
        .parse::<f64>()
        .map_err(|_| invalid(key, "expected a number"))
}

fn parse_hours(key: &str, value: &str) -> Result<f64, ConfigError> {
    let hours = parse_f64(key, value)?;
    check_hours(key, hours).map_err(|_| invalid(key, "hours must be within [0, 24]"))?;
    Ok(hours)
}
