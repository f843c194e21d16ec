//! User-defined habits

use crate::domain::entry::Habits;
use crate::error::{MoodjourError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn habit_id_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").unwrap())
}

/// A habit the user wants to track daily
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: String,
    pub label: String,
}

impl Habit {
    /// Create a habit, normalizing the id to lowercase
    pub fn new(id: &str, label: &str) -> Result<Self> {
        let id = id.trim().to_lowercase();
        if !habit_id_regex().is_match(&id) {
            return Err(MoodjourError::Config(format!(
                "Invalid habit id: '{}'. Use lowercase letters, digits, '-' or '_'",
                id
            )));
        }

        let label = label.trim();
        if label.is_empty() {
            return Err(MoodjourError::Config(
                "Habit label cannot be empty".to_string(),
            ));
        }

        Ok(Habit {
            id,
            label: label.to_string(),
        })
    }
}

/// Update a day's completion map.
///
/// Values already stored in `current` are kept. Tracked habits missing from
/// it start incomplete, then ids in `done` are set and ids in `undone` are
/// cleared. Returns `current` untouched when no habits are tracked.
pub fn update_completions(
    current: Option<Habits>,
    tracked: &[Habit],
    done: &[String],
    undone: &[String],
) -> Result<Option<Habits>> {
    if tracked.is_empty() {
        if let Some(first) = done.iter().chain(undone).next() {
            return Err(MoodjourError::UnknownHabit(first.clone()));
        }
        return Ok(current);
    }

    let mut map = current.unwrap_or_default();
    for habit in tracked {
        map.entry(habit.id.clone()).or_insert(false);
    }

    let marks = done.iter().map(|id| (id, true)).chain(undone.iter().map(|id| (id, false)));
    for (id, completed) in marks {
        let key = id.trim().to_lowercase();
        if !tracked.iter().any(|h| h.id == key) {
            return Err(MoodjourError::UnknownHabit(id.clone()));
        }
        map.insert(key, completed);
    }

    Ok(Some(map))
}
