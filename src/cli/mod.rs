//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, GoalAction, HabitAction};
pub use output::{
    format_entry, format_entry_list, format_goal_list, format_habit_list, format_insights,
    format_mood_table,
};
