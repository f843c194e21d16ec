//! Habit management use case

use crate::domain::Habit;
use crate::error::{MoodjourError, Result};
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use tracing::info;

/// Service for managing the tracked habit list
pub struct HabitsService {
    repository: FileSystemRepository,
}

impl HabitsService {
    /// Create a new habits service
    pub fn new(repository: FileSystemRepository) -> Self {
        HabitsService { repository }
    }

    /// Tracked habits in the order they were added
    pub fn list(&self) -> Result<Vec<Habit>> {
        Ok(self.repository.load_config()?.habits)
    }

    /// Start tracking a habit
    pub fn add(&self, id: &str, label: &str) -> Result<Habit> {
        let habit = Habit::new(id, label)?;
        let mut config = self.repository.load_config()?;

        if config.habit(&habit.id).is_some() {
            return Err(MoodjourError::Config(format!(
                "Habit '{}' is already tracked",
                habit.id
            )));
        }

        config.habits.push(habit.clone());
        self.repository.save_config(&config)?;
        info!(habit = %habit.id, "added habit");
        Ok(habit)
    }

    /// Stop tracking a habit; past entries keep their recorded completion
    pub fn remove(&self, id: &str) -> Result<Habit> {
        let id = id.trim().to_lowercase();
        let mut config = self.repository.load_config()?;

        let Some(index) = config.habits.iter().position(|h| h.id == id) else {
            return Err(MoodjourError::UnknownHabit(id));
        };

        let removed = config.habits.remove(index);
        self.repository.save_config(&config)?;
        info!(habit = %removed.id, "removed habit");
        Ok(removed)
    }
}
