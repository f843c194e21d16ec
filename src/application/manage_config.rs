//! Config management use case

use crate::error::{MoodjourError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Keys accepted by `get` and `set`
pub const CONFIG_KEYS: [&str; 11] = [
    "editor",
    "created",
    "top_themes",
    "min_entries",
    "sleep_threshold_hours",
    "sleep_min_difference",
    "sleep_strong_difference",
    "habit_min_difference",
    "habit_strong_difference",
    "habit_min_bucket_entries",
    "habits",
];

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;
        value_of(&config, key)
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        let thresholds = &mut config.correlation;

        match key {
            "editor" => config.editor = value.to_string(),
            "top_themes" => config.top_themes = parse(key, value)?,
            "min_entries" => thresholds.min_entries = parse(key, value)?,
            "sleep_threshold_hours" => {
                let hours: f64 = parse(key, value)?;
                if !(0.0..=24.0).contains(&hours) {
                    return Err(MoodjourError::Config(format!(
                        "sleep_threshold_hours must be between 0 and 24, got {}",
                        value
                    )));
                }
                thresholds.sleep_threshold_hours = hours;
            }
            "sleep_min_difference" => thresholds.sleep_min_difference = percent(key, value)?,
            "sleep_strong_difference" => thresholds.sleep_strong_difference = percent(key, value)?,
            "habit_min_difference" => thresholds.habit_min_difference = percent(key, value)?,
            "habit_strong_difference" => thresholds.habit_strong_difference = percent(key, value)?,
            "habit_min_bucket_entries" => thresholds.habit_min_bucket_entries = parse(key, value)?,
            "created" | "habits" => {
                let hint = if key == "habits" {
                    " Use 'moodjour habits add|remove' instead."
                } else {
                    ""
                };
                return Err(MoodjourError::Config(format!(
                    "Cannot modify '{}' field (read-only).{}",
                    key, hint
                )));
            }
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Vec<(&'static str, String)>> {
        let config = self.repository.load_config()?;
        CONFIG_KEYS
            .iter()
            .map(|key| value_of(&config, key).map(|v| (*key, v)))
            .collect()
    }
}

fn value_of(config: &Config, key: &str) -> Result<String> {
    let t = &config.correlation;
    let value = match key {
        "editor" => config.editor.clone(),
        "created" => config.created.to_rfc3339(),
        "top_themes" => config.top_themes.to_string(),
        "min_entries" => t.min_entries.to_string(),
        "sleep_threshold_hours" => t.sleep_threshold_hours.to_string(),
        "sleep_min_difference" => t.sleep_min_difference.to_string(),
        "sleep_strong_difference" => t.sleep_strong_difference.to_string(),
        "habit_min_difference" => t.habit_min_difference.to_string(),
        "habit_strong_difference" => t.habit_strong_difference.to_string(),
        "habit_min_bucket_entries" => t.habit_min_bucket_entries.to_string(),
        "habits" => config
            .habits
            .iter()
            .map(|h| h.id.as_str())
            .collect::<Vec<_>>()
            .join(","),
        _ => return Err(unknown_key(key)),
    };
    Ok(value)
}

fn unknown_key(key: &str) -> MoodjourError {
    MoodjourError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key,
        CONFIG_KEYS.join(", ")
    ))
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| MoodjourError::Config(format!("Invalid value for {}: '{}'", key, value)))
}

fn percent(key: &str, value: &str) -> Result<f64> {
    let points: f64 = parse(key, value)?;
    if !(0.0..=100.0).contains(&points) {
        return Err(MoodjourError::Config(format!(
            "{} is in percentage points and must be between 0 and 100, got {}",
            key, value
        )));
    }
    Ok(points)
}
