//! Log entry use case: create or update the entry for a day

use crate::domain::entry_date::resolve_date;
use crate::domain::habit::update_completions;
use crate::domain::mood::canonical_mood;
use crate::domain::JournalEntry;
use crate::error::{MoodjourError, Result};
use crate::infrastructure::editor::draft_template;
use crate::infrastructure::{Config, EditorSession, FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use tracing::info;

/// Fields to set on a day's entry; `None` leaves the current value alone
#[derive(Debug, Clone, Default)]
pub struct LogRequest {
    pub date: Option<String>,
    pub text: Option<String>,
    pub mood: Option<String>,
    pub mood_override: Option<String>,
    pub clear_override: bool,
    pub sleep_hours: Option<f64>,
    pub done: Vec<String>,
    pub undone: Vec<String>,
    /// Reopen the text of an existing entry in the editor
    pub edit: bool,
}

/// Result of logging
#[derive(Debug, Clone)]
pub struct LogOutcome {
    pub entry: JournalEntry,
    pub created: bool,
}

/// Service for writing entries
pub struct LogEntryService {
    repository: FileSystemRepository,
}

impl LogEntryService {
    /// Create a new log entry service
    pub fn new(repository: FileSystemRepository) -> Self {
        LogEntryService { repository }
    }

    /// Apply `request` to the entry for its date, creating it if needed
    pub fn execute(&self, request: LogRequest, today: NaiveDate) -> Result<LogOutcome> {
        let config = self.repository.load_config()?;

        let date = resolve_date(request.date.as_deref().unwrap_or("today"), today)?;
        if date > today {
            return Err(MoodjourError::InvalidDate(format!(
                "{} is in the future",
                date.format("%Y-%m-%d")
            )));
        }

        let existing = self.repository.load_entry(date)?;
        let created = existing.is_none();
        let mut entry = existing.unwrap_or_else(|| JournalEntry::new(date, ""));

        match request.text {
            Some(text) => entry.text = text.trim().to_string(),
            None if created || request.edit => {
                entry.text = self.compose_text(&config, &entry)?;
            }
            None => {}
        }

        if let Some(mood) = request.mood.as_deref() {
            entry.mood_suggested = Some(require_mood(mood)?.to_string());
        }
        if request.clear_override {
            entry.mood_manual = None;
        }
        if let Some(mood) = request.mood_override.as_deref() {
            entry.mood_manual = Some(require_mood(mood)?.to_string());
        }
        if let Some(hours) = request.sleep_hours {
            entry.sleep_hours = Some(hours);
        }
        if created || !request.done.is_empty() || !request.undone.is_empty() {
            entry.habits = update_completions(
                entry.habits.take(),
                &config.habits,
                &request.done,
                &request.undone,
            )?;
        }

        entry.validate()?;
        self.repository.save_entry(&entry)?;

        info!(date = %entry.id, created, "logged entry");
        Ok(LogOutcome { entry, created })
    }

    fn compose_text(&self, config: &Config, entry: &JournalEntry) -> Result<String> {
        let editor = EditorSession::new(config.get_editor());
        editor.compose(
            &self.repository.draft_path(),
            &draft_template(&entry.id, &entry.text),
        )
    }
}

fn require_mood(input: &str) -> Result<&'static str> {
    canonical_mood(input).ok_or_else(|| MoodjourError::UnknownMood(input.to_string()))
}
