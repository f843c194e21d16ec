//! Journal entry model

use crate::domain::mood::{categorize, MoodCategory};
use crate::error::{MoodjourError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Maximum entry text length in characters
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Upper bound for recorded sleep hours
pub const MAX_SLEEP_HOURS: f64 = 12.0;

/// Daily habit completion: habit id -> completed
pub type Habits = BTreeMap<String, bool>;

/// A single day's journal entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: NaiveDate,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_suggested: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood_manual: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub habits: Option<Habits>,
}

impl JournalEntry {
    /// Create an entry for a date; the id is the ISO date
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        JournalEntry {
            id: date.format("%Y-%m-%d").to_string(),
            date,
            text: text.into(),
            mood_suggested: None,
            mood_manual: None,
            sleep_hours: None,
            habits: None,
        }
    }

    /// Manual override if set, else the suggested mood.
    ///
    /// Empty strings count as unset.
    pub fn effective_mood(&self) -> Option<&str> {
        non_empty(&self.mood_manual).or_else(|| non_empty(&self.mood_suggested))
    }

    /// Category of the effective mood, if there is one
    pub fn mood_category(&self) -> Option<MoodCategory> {
        self.effective_mood().map(categorize)
    }

    /// Habits map, only when it records at least one habit
    pub fn tracked_habits(&self) -> Option<&Habits> {
        self.habits.as_ref().filter(|h| !h.is_empty())
    }

    /// True when any tracked habit was completed
    pub fn completed_any_habit(&self) -> bool {
        self.habits
            .as_ref()
            .is_some_and(|h| h.values().any(|done| *done))
    }

    /// Check the bounds the entry producer is responsible for
    pub fn validate(&self) -> Result<()> {
        let length = self.text.trim().chars().count();
        if length == 0 {
            return Err(MoodjourError::InvalidEntry(
                "Entry text cannot be empty".to_string(),
            ));
        }
        if length > MAX_TEXT_LENGTH {
            return Err(MoodjourError::InvalidEntry(format!(
                "Entry text is {} characters; the limit is {}",
                length, MAX_TEXT_LENGTH
            )));
        }

        if let Some(hours) = self.sleep_hours {
            if !(0.0..=MAX_SLEEP_HOURS).contains(&hours) {
                return Err(MoodjourError::InvalidEntry(format!(
                    "Sleep hours must be between 0 and {}, got {}",
                    MAX_SLEEP_HOURS, hours
                )));
            }
        }

        Ok(())
    }

    /// First `max_chars` characters of the text on one line
    pub fn preview(&self, max_chars: usize) -> String {
        let flat = self.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if flat.chars().count() <= max_chars {
            return flat;
        }
        let truncated: String = flat.chars().take(max_chars).collect();
        format!("{}...", truncated.trim_end())
    }
}

fn non_empty(mood: &Option<String>) -> Option<&str> {
    mood.as_deref().filter(|s| !s.is_empty())
}
