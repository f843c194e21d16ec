//! Goal management use case

use crate::domain::{Goal, GoalPeriod};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::Utc;
use tracing::info;

/// Service for managing weekly and monthly goals
pub struct GoalsService {
    repository: FileSystemRepository,
}

impl GoalsService {
    /// Create a new goals service
    pub fn new(repository: FileSystemRepository) -> Self {
        GoalsService { repository }
    }

    /// Goals newest first; completed ones only with `include_completed`
    pub fn list(&self, period: Option<GoalPeriod>, include_completed: bool) -> Result<Vec<Goal>> {
        let book = self.repository.load_goals()?;
        Ok(book
            .visible(period, include_completed)
            .into_iter()
            .cloned()
            .collect())
    }

    /// Add an open goal
    pub fn add(&self, period: GoalPeriod, text: &str) -> Result<Goal> {
        let mut book = self.repository.load_goals()?;
        let goal = book.add(period, text, Utc::now())?;
        self.repository.save_goals(&book)?;
        info!(goal = goal.id, %period, "added goal");
        Ok(goal)
    }

    /// Mark a goal completed, or open again when `completed` is false
    pub fn set_completed(&self, id: u32, completed: bool) -> Result<Goal> {
        let mut book = self.repository.load_goals()?;
        let goal = book.find_mut(id)?;
        goal.set_completed(completed, Utc::now());
        let goal = goal.clone();
        self.repository.save_goals(&book)?;
        info!(goal = id, completed, "updated goal");
        Ok(goal)
    }

    /// Remove a goal; it stays on disk marked as deleted
    pub fn remove(&self, id: u32) -> Result<Goal> {
        let mut book = self.repository.load_goals()?;
        let goal = book.find_mut(id)?;
        goal.delete(Utc::now());
        let goal = goal.clone();
        self.repository.save_goals(&book)?;
        info!(goal = id, "removed goal");
        Ok(goal)
    }
}
