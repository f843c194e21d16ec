//! List and show entries use case

use crate::domain::JournalEntry;
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;

/// Service for reading entries back
pub struct EntriesService {
    repository: FileSystemRepository,
}

impl EntriesService {
    /// Create a new entries service
    pub fn new(repository: FileSystemRepository) -> Self {
        EntriesService { repository }
    }

    /// Entries in an inclusive date range, newest first
    pub fn list(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        limit: Option<usize>,
    ) -> Result<Vec<JournalEntry>> {
        self.repository.list_entries(from, to, limit)
    }

    /// The entry for a single day
    pub fn show(&self, date: NaiveDate) -> Result<JournalEntry> {
        self.repository
            .load_entry(date)?
            .ok_or_else(|| MoodjourError::EntryNotFound(date.format("%Y-%m-%d").to_string()))
    }
}
