//! TOML-based application configuration.
//!
//! Stores planning preferences: stay timing (check-in window) and packing
//! defaults (venue duration). Times are kept as `HH:MM` strings in the file
//! and parsed at use.
//!
//! Configuration is stored at `~/.config/wayplan/config.toml`.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::hotel::StayTimes;

/// Stay timing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StayConfig {
    #[serde(default = "default_check_in")]
    pub check_in: String,
    #[serde(default = "default_window_minutes")]
    pub window_minutes: i64,
}

/// Packing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackingConfig {
    /// Duration assumed for a venue whose catalog entry carries none.
    #[serde(default = "default_venue_minutes")]
    pub default_venue_minutes: i64,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/wayplan/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub stay: StayConfig,
    #[serde(default)]
    pub packing: PackingConfig,
}

fn default_check_in() -> String {
    "09:00".to_string()
}
fn default_window_minutes() -> i64 {
    60
}
fn default_venue_minutes() -> i64 {
    60
}

impl Default for StayConfig {
    fn default() -> Self {
        Self {
            check_in: default_check_in(),
            window_minutes: default_window_minutes(),
        }
    }
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self {
            default_venue_minutes: default_venue_minutes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stay: StayConfig::default(),
            packing: PackingConfig::default(),
        }
    }
}

impl Config {
    /// Path of the config file inside the data directory.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = super::data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config/wayplan"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load the configuration, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Load the configuration from disk.
    ///
    /// # Errors
    /// Fails when the file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        let raw = std::fs::read_to_string(&path).map_err(|e| ConfigError::LoadFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        toml::from_str(&raw).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Save the configuration to disk.
    ///
    /// # Errors
    /// Fails when serialization or the write fails.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let raw = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, raw).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Stay timing with the `HH:MM` string parsed; malformed values fall
    /// back to the default check-in time.
    pub fn stay_times(&self) -> StayTimes {
        let check_in = parse_hhmm(&self.stay.check_in)
            .unwrap_or_else(|| StayTimes::default().check_in);
        StayTimes {
            check_in,
            window_minutes: self.stay.window_minutes,
        }
    }
}

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour: u32 = parts[0].parse().ok()?;
    let minute: u32 = parts[1].parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = Config::default();
        let raw = toml::to_string_pretty(&config).unwrap();
        let decoded: Config = toml::from_str(&raw).unwrap();
        assert_eq!(decoded.stay.check_in, "09:00");
        assert_eq!(decoded.packing.default_venue_minutes, 60);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let decoded: Config = toml::from_str("").unwrap();
        assert_eq!(decoded.stay.window_minutes, 60);
    }

    #[test]
    fn stay_times_parse_and_fall_back() {
        let mut config = Config::default();
        config.stay.check_in = "10:30".to_string();
        assert_eq!(
            config.stay_times().check_in,
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );

        config.stay.check_in = "not a time".to_string();
        assert_eq!(config.stay_times().check_in, StayTimes::default().check_in);
    }

    #[test]
    fn save_and_load_use_the_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::env::set_var("HOME", dir.path());
        std::env::set_var("WAYPLAN_ENV", "dev");

        let mut config = Config::default();
        config.stay.window_minutes = 45;
        config.save().unwrap();

        let loaded = Config::load().unwrap();
        assert_eq!(loaded.stay.window_minutes, 45);

        std::env::remove_var("WAYPLAN_ENV");
    }
}
