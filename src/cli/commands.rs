//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Terminal mood journal with local insights", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Write or update the entry for a day
    Log {
        /// Day of the entry (today, yesterday, 3 days ago, last monday, 2025-01-17)
        #[arg(value_name = "DATE")]
        date: Option<String>,

        /// Entry text; opens the editor when omitted for a new entry
        #[arg(short, long)]
        text: Option<String>,

        /// Mood for the day (see 'moodjour moods')
        #[arg(short, long)]
        mood: Option<String>,

        /// Manual mood that overrides --mood in insights
        #[arg(long = "override", value_name = "MOOD")]
        mood_override: Option<String>,

        /// Remove a previously set override
        #[arg(long, conflicts_with = "mood_override")]
        clear_override: bool,

        /// Hours slept the night before (0-12)
        #[arg(short, long, value_name = "HOURS")]
        sleep: Option<f64>,

        /// Habit completed today (repeatable)
        #[arg(short, long = "done", value_name = "HABIT")]
        done: Vec<String>,

        /// Habit to mark as not completed (repeatable)
        #[arg(short, long = "undone", value_name = "HABIT")]
        undone: Vec<String>,

        /// Reopen the existing text in the editor
        #[arg(short, long, conflicts_with = "text")]
        edit: bool,
    },

    /// List entries (newest first)
    List {
        /// Start date (inclusive)
        #[arg(long)]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of entries to show
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Show a single entry
    Show {
        /// Day of the entry
        #[arg(default_value = "today")]
        date: String,
    },

    /// Mood trends, themes and patterns across entries
    Insights {
        /// Start date (inclusive)
        #[arg(long, conflicts_with = "days")]
        from: Option<String>,

        /// End date (inclusive)
        #[arg(long)]
        to: Option<String>,

        /// Only the last N days, today included
        #[arg(long)]
        days: Option<u32>,

        /// Number of themes to show
        #[arg(long)]
        themes: Option<usize>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available moods and their categories
    Moods,

    /// Manage tracked habits
    Habits {
        #[command(subcommand)]
        action: Option<HabitAction>,
    },

    /// Manage weekly and monthly goals
    Goals {
        #[command(subcommand)]
        action: Option<GoalAction>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum HabitAction {
    /// List tracked habits
    List,

    /// Start tracking a habit
    Add {
        /// Short id used with 'log --done' (e.g., walk)
        id: String,

        /// Display label
        label: String,
    },

    /// Stop tracking a habit
    Remove {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum GoalAction {
    /// List open goals (newest first)
    List {
        /// Only goals of one period (weekly, monthly)
        #[arg(short, long)]
        period: Option<String>,

        /// Include completed goals
        #[arg(short, long)]
        all: bool,
    },

    /// Add a goal
    Add {
        /// What you want to focus on
        text: String,

        /// Goal period (weekly, monthly)
        #[arg(short, long, default_value = "weekly")]
        period: String,
    },

    /// Mark a goal as completed
    Complete {
        id: u32,
    },

    /// Mark a completed goal as open again
    Reopen {
        id: u32,
    },

    /// Remove a goal
    Remove {
        id: u32,
    },
}
