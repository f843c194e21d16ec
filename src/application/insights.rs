//! Insights use case

use crate::domain::entry_date::days_before;
use crate::domain::insights::InsightsReport;
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::NaiveDate;
use tracing::info;

/// Which entries to analyze and how many themes to report
#[derive(Debug, Clone, Default)]
pub struct InsightsQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// Only the last N days, today included
    pub days: Option<u32>,
    /// Overrides the configured theme limit
    pub themes: Option<usize>,
}

/// Service for computing insights over the journal
pub struct InsightsService {
    repository: FileSystemRepository,
}

impl InsightsService {
    /// Create a new insights service
    pub fn new(repository: FileSystemRepository) -> Self {
        InsightsService { repository }
    }

    /// Load the matching entries and run every analyzer over them
    pub fn execute(&self, query: &InsightsQuery, today: NaiveDate) -> Result<InsightsReport> {
        let config = self.repository.load_config()?;

        let from = match query.days {
            Some(0) => {
                return Err(MoodjourError::Config(
                    "--days must be at least 1".to_string(),
                ))
            }
            Some(days) => {
                let start = days_before(today, i64::from(days) - 1)
                    .ok_or_else(|| MoodjourError::InvalidDate(format!("{} days ago", days)))?;
                Some(start)
            }
            None => query.from,
        };

        let entries = self.repository.list_entries(from, query.to, None)?;
        let limit = query.themes.unwrap_or(config.top_themes);
        let report = InsightsReport::build(&entries, &config.correlation, limit);

        info!(
            entries = report.entry_count,
            categories = report.mood_trends.len(),
            patterns = report.patterns().len(),
            "computed insights"
        );
        Ok(report)
    }
}
