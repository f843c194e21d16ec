//! Local insights over a journal's entries
//!
//! Every analyzer is a pure function over a borrowed snapshot of entries.
//! Nothing is cached between calls and no I/O happens here.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use moodjour::domain::insights::{analyze_trends, describe_trend};
//! use moodjour::domain::JournalEntry;
//!
//! let mut entry = JournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap(), "Quiet day");
//! entry.mood_suggested = Some("Peaceful".to_string());
//!
//! let trends = analyze_trends(&[entry]);
//! assert_eq!(describe_trend(&trends), "Mostly calm days");
//! ```

pub mod correlations;
pub mod report;
pub mod themes;
pub mod trends;

pub use correlations::{
    analyze_habit_mood_correlation, analyze_sleep_mood_correlation, Correlation,
    CorrelationStrength, CorrelationThresholds,
};
pub use report::{InsightsReport, ThemeCount, DEFAULT_TOP_THEMES};
pub use themes::{count_theme_occurrences, detect_themes, top_themes, Theme};
pub use trends::{analyze_trends, describe_trend, MoodTrend, NOT_ENOUGH_DATA};
