//! Mood trend analysis

use crate::domain::entry::JournalEntry;
use crate::domain::mood::MoodCategory;
use serde::Serialize;

/// Summary shown when no entry has a mood
pub const NOT_ENOUGH_DATA: &str = "Not enough data yet.";

/// Share of entries that fell into one mood category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodTrend {
    pub category: MoodCategory,
    pub label: &'static str,
    pub count: usize,
    pub percentage: u32,
}

/// Tally entries per mood category.
///
/// Entries without an effective mood are skipped and do not count towards
/// the total. Only non-empty categories are returned, most frequent first;
/// ties keep the declared category order.
pub fn analyze_trends(entries: &[JournalEntry]) -> Vec<MoodTrend> {
    let mut counts = [0usize; MoodCategory::ALL.len()];
    for category in entries.iter().filter_map(JournalEntry::mood_category) {
        counts[category as usize] += 1;
    }

    let total: usize = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut trends: Vec<MoodTrend> = MoodCategory::ALL
        .into_iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(category, count)| MoodTrend {
            category,
            label: category.label(),
            count,
            percentage: ((count as f64 / total as f64) * 100.0).round() as u32,
        })
        .collect();

    // Stable: equal counts stay in category order
    trends.sort_by(|a, b| b.count.cmp(&a.count));
    trends
}

/// One-line description of a set of trends
pub fn describe_trend(trends: &[MoodTrend]) -> String {
    let Some(top) = trends.first() else {
        return NOT_ENOUGH_DATA.to_string();
    };

    let total: usize = trends.iter().map(|t| t.count).sum();
    if top.count == total {
        return format!("Mostly {} days", top.label.to_lowercase());
    }

    if let Some(second) = trends.get(1) {
        if second.count == top.count {
            return format!(
                "Mix of {} and {} days",
                top.label.to_lowercase(),
                second.label.to_lowercase()
            );
        }
    }

    format!("More {} days", top.label.to_lowercase())
}
