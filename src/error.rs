//! Error types for moodjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for moodjour application
#[derive(Debug, Error)]
pub enum MoodjourError {
    #[error("Not a moodjour directory: {0}")]
    NotJournalDirectory(PathBuf),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No entry found for {0}")]
    EntryNotFound(String),

    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Unknown mood: {0}")]
    UnknownMood(String),

    #[error("Unknown habit: {0}")]
    UnknownHabit(String),

    #[error("No goal with id {0}")]
    GoalNotFound(u32),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoodjourError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodjourError::NotJournalDirectory(_) => 2,
            MoodjourError::InvalidDate(_) => 3,
            MoodjourError::EntryNotFound(_) | MoodjourError::GoalNotFound(_) => 4,
            MoodjourError::InvalidEntry(_)
            | MoodjourError::UnknownMood(_)
            | MoodjourError::UnknownHabit(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodjourError::NotJournalDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to create a new journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodjourError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Valid dates:\n\
                    • today, yesterday, 3 days ago\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    moodjour log yesterday --mood Calm\n\
                    moodjour list --from 2025-01-01",
                    input
                )
            }
            MoodjourError::EntryNotFound(date) => {
                format!(
                    "No entry found for {}\n\n\
                    Suggestions:\n\
                    • Use 'moodjour list' to see existing entries\n\
                    • Write one with 'moodjour log {} --text \"...\" --mood Calm'",
                    date, date
                )
            }
            MoodjourError::UnknownMood(mood) => {
                format!(
                    "Unknown mood: '{}'\n\n\
                    Run 'moodjour moods' to see the available moods.\n\
                    Example: moodjour log --mood Peaceful",
                    mood
                )
            }
            MoodjourError::UnknownHabit(id) => {
                format!(
                    "Unknown habit: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'moodjour habits list' to see tracked habits\n\
                    • Track it first: moodjour habits add {} \"<label>\"",
                    id, id
                )
            }
            MoodjourError::GoalNotFound(id) => {
                format!(
                    "No goal with id {}\n\n\
                    Suggestions:\n\
                    • Use 'moodjour goals list --all' to see goal ids",
                    id
                )
            }
            MoodjourError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: moodjour config editor 'vim'\n\
                    • Skip the editor: moodjour log --text \"...\"",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodjourError
pub type Result<T> = std::result::Result<T, MoodjourError>;
