//! Application layer - Use cases and orchestration

pub mod init;
pub mod insights;
pub mod list_entries;
pub mod log_entry;
pub mod manage_config;
pub mod manage_goals;
pub mod manage_habits;

pub use insights::{InsightsQuery, InsightsService};
pub use list_entries::EntriesService;
pub use log_entry::{LogEntryService, LogOutcome, LogRequest};
pub use manage_config::ConfigService;
pub use manage_goals::GoalsService;
pub use manage_habits::HabitsService;
