//! moodjour - Terminal mood journal
//!
//! A command-line journal that stores one entry per day with a mood, sleep
//! hours and habit completion, and derives local insights from them: mood
//! trends, recurring themes and sleep/habit patterns.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjourError;
