//! Domain layer - Entries, moods, habits, goals and insights

pub mod entry;
pub mod entry_date;
pub mod goal;
pub mod habit;
pub mod insights;
pub mod mood;

pub use entry::{Habits, JournalEntry};
pub use entry_date::EntryDate;
pub use goal::{Goal, GoalBook, GoalPeriod};
pub use habit::Habit;
pub use mood::{MoodCategory, MOOD_OPTIONS};
