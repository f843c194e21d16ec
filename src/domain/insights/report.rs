//! Combined insights over an entry snapshot

use super::correlations::{
    analyze_habit_mood_correlation, analyze_sleep_mood_correlation, Correlation,
    CorrelationThresholds,
};
use super::themes::{top_themes, Theme};
use super::trends::{analyze_trends, describe_trend, MoodTrend};
use crate::domain::entry::JournalEntry;
use serde::Serialize;

/// Default number of themes in a report
pub const DEFAULT_TOP_THEMES: usize = 5;

/// A theme with how many entries mentioned it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeCount {
    pub theme: Theme,
    pub label: &'static str,
    pub count: usize,
}

/// Everything the insights view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InsightsReport {
    pub entry_count: usize,
    pub mood_trends: Vec<MoodTrend>,
    pub trend_summary: String,
    pub top_themes: Vec<ThemeCount>,
    pub sleep_correlation: Option<Correlation>,
    pub habit_correlations: Vec<Correlation>,
}

impl InsightsReport {
    /// Run every analyzer over `entries`
    pub fn build(
        entries: &[JournalEntry],
        thresholds: &CorrelationThresholds,
        theme_limit: usize,
    ) -> Self {
        let mood_trends = analyze_trends(entries);
        let trend_summary = describe_trend(&mood_trends);
        let top_themes = top_themes(entries, theme_limit)
            .into_iter()
            .map(|(theme, count)| ThemeCount {
                theme,
                label: theme.label(),
                count,
            })
            .collect();

        InsightsReport {
            entry_count: entries.len(),
            mood_trends,
            trend_summary,
            top_themes,
            sleep_correlation: analyze_sleep_mood_correlation(entries, thresholds),
            habit_correlations: analyze_habit_mood_correlation(entries, thresholds),
        }
    }

    /// Sleep and habit statements together
    pub fn patterns(&self) -> Vec<&Correlation> {
        self.sleep_correlation
            .iter()
            .chain(self.habit_correlations.iter())
            .collect()
    }
}
