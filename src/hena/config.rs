use crate::error::{HenaError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

pub const KEY_ENABLED: &str = "notification_enabled";
pub const KEY_INTERVAL: &str = "interval_hours";
pub const KEY_START_HOUR: &str = "active_start_hour";
pub const KEY_END_HOUR: &str = "active_end_hour";

pub const KEYS: [&str; 4] = [KEY_ENABLED, KEY_INTERVAL, KEY_START_HOUR, KEY_END_HOUR];

const INTERVAL_RANGE: (u32, u32) = (1, 24);
const HOUR_RANGE: (u32, u32) = (0, 23);

const DEFAULT_ENABLED: bool = true;
const DEFAULT_INTERVAL_HOURS: u32 = 3;
const DEFAULT_START_HOUR: u32 = 8;
const DEFAULT_END_HOUR: u32 = 21;

/// Reminder schedule settings, stored in `<data dir>/config.json`.
///
/// Every key is independent and falls back to its default when missing. Ranges
/// are checked on [`ScheduleConfig::set`] and again on [`ScheduleConfig::load`]
/// for hand-edited files; the trigger calculator trusts whatever values it is
/// handed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleConfig {
    #[serde(rename = "notification_enabled", default = "default_enabled")]
    pub enabled: bool,

    #[serde(default = "default_interval_hours")]
    pub interval_hours: u32,

    #[serde(default = "default_start_hour")]
    pub active_start_hour: u32,

    #[serde(default = "default_end_hour")]
    pub active_end_hour: u32,
}

fn default_enabled() -> bool {
    DEFAULT_ENABLED
}

fn default_interval_hours() -> u32 {
    DEFAULT_INTERVAL_HOURS
}

fn default_start_hour() -> u32 {
    DEFAULT_START_HOUR
}

fn default_end_hour() -> u32 {
    DEFAULT_END_HOUR
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ENABLED,
            interval_hours: DEFAULT_INTERVAL_HOURS,
            active_start_hour: DEFAULT_START_HOUR,
            active_end_hour: DEFAULT_END_HOUR,
        }
    }
}

impl ScheduleConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config = Self::load_unchecked(config_dir)?;
        config.validate().map_err(HenaError::Config)?;
        Ok(config)
    }

    /// Like [`ScheduleConfig::load`] but without range checks, so a bad file
    /// can still be repaired one key at a time.
    pub fn load_unchecked<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HenaError::Io)?;
        let config: ScheduleConfig =
            serde_json::from_str(&content).map_err(HenaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HenaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HenaError::Serialization)?;
        fs::write(config_path, content).map_err(HenaError::Io)?;
        Ok(())
    }

    /// Check every numeric key against its allowed range.
    pub fn validate(&self) -> std::result::Result<(), String> {
        check_range(KEY_INTERVAL, self.interval_hours, INTERVAL_RANGE)?;
        check_range(KEY_START_HOUR, self.active_start_hour, HOUR_RANGE)?;
        check_range(KEY_END_HOUR, self.active_end_hour, HOUR_RANGE)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_ENABLED => Some(self.enabled.to_string()),
            KEY_INTERVAL => Some(self.interval_hours.to_string()),
            KEY_START_HOUR => Some(self.active_start_hour.to_string()),
            KEY_END_HOUR => Some(self.active_end_hour.to_string()),
            _ => None,
        }
    }

    /// Set a single key from its textual form, rejecting out-of-range values.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            KEY_ENABLED => {
                self.enabled = parse_flag(value)?;
            }
            KEY_INTERVAL => {
                self.interval_hours = parse_in_range(key, value, INTERVAL_RANGE)?;
            }
            KEY_START_HOUR => {
                self.active_start_hour = parse_in_range(key, value, HOUR_RANGE)?;
            }
            KEY_END_HOUR => {
                self.active_end_hour = parse_in_range(key, value, HOUR_RANGE)?;
            }
            _ => {
                return Err(format!(
                    "Unknown config key: {} (expected one of: {})",
                    key,
                    KEYS.join(", ")
                ))
            }
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(format!("Expected true or false, got: {}", other)),
    }
}

fn parse_in_range(key: &str, value: &str, range: (u32, u32)) -> std::result::Result<u32, String> {
    let parsed: u32 = value
        .trim()
        .parse()
        .map_err(|_| format!("{} must be a whole number, got: {}", key, value))?;
    check_range(key, parsed, range)?;
    Ok(parsed)
}

fn check_range(key: &str, value: u32, (min, max): (u32, u32)) -> std::result::Result<(), String> {
    if value < min || value > max {
        return Err(format!(
            "{} must be between {} and {}, got: {}",
            key, min, max, value
        ));
    }
    Ok(())
}
