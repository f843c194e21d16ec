//! Configuration management

use crate::domain::insights::{CorrelationThresholds, DEFAULT_TOP_THEMES};
use crate::domain::Habit;
use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the marker directory holding journal metadata
pub const META_DIR: &str = ".moodjour";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub editor: String,
    pub created: DateTime<Utc>,
    #[serde(default = "default_top_themes")]
    pub top_themes: usize,
    #[serde(default)]
    pub correlation: CorrelationThresholds,
    #[serde(default)]
    pub habits: Vec<Habit>,
}

fn default_top_themes() -> usize {
    DEFAULT_TOP_THEMES
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            created: Utc::now(),
            top_themes: DEFAULT_TOP_THEMES,
            correlation: CorrelationThresholds::default(),
            habits: Vec::new(),
        }
    }

    /// Load config from .moodjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodjourError::NotJournalDirectory(path.to_path_buf())
            } else {
                MoodjourError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodjourError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);
        let config_path = meta_dir.join("config.toml");

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| MoodjourError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the editor command, checking environment variables first
    pub fn get_editor(&self) -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| self.editor.clone())
    }

    /// Look up a tracked habit by id
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    fn detect_default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(windows) {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_config_defaults() {
        let config = Config::new();
        assert!(!config.editor.is_empty());
        assert_eq!(config.top_themes, 5);
        assert_eq!(config.correlation, CorrelationThresholds::default());
        assert!(config.habits.is_empty());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::new();
        config.top_themes = 3;
        config.correlation.sleep_threshold_hours = 6.5;
        config.habits.push(Habit::new("walk", "Go for a walk").unwrap());

        config.save_to_dir(temp.path()).unwrap();
        assert!(temp.path().join(".moodjour/config.toml").exists());

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_fills_missing_sections() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodjour")).unwrap();
        fs::write(
            temp.path().join(".moodjour/config.toml"),
            "editor = \"vim\"\ncreated = \"2025-01-17T10:00:00Z\"\n\n[correlation]\nmin_entries = 5\n",
        )
        .unwrap();

        let loaded = Config::load_from_dir(temp.path()).unwrap();
        assert_eq!(loaded.top_themes, 5);
        assert_eq!(loaded.correlation.min_entries, 5);
        assert_eq!(loaded.correlation.habit_min_bucket_entries, 2);
        assert!(loaded.habits.is_empty());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load_from_dir(temp.path());

        match result.unwrap_err() {
            MoodjourError::NotJournalDirectory(_) => {}
            other => panic!("Expected NotJournalDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".moodjour")).unwrap();
        fs::write(temp.path().join(".moodjour/config.toml"), "top_themes = [").unwrap();

        assert!(matches!(
            Config::load_from_dir(temp.path()),
            Err(MoodjourError::Config(_))
        ));
    }

    #[test]
    fn test_habit_lookup() {
        let mut config = Config::new();
        config.habits.push(Habit::new("read", "Read").unwrap());
        assert!(config.habit("read").is_some());
        assert!(config.habit("walk").is_none());
    }
}
