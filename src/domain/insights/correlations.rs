//! Sleep and habit correlations with mood
//!
//! Both analyses compare two cohorts of entries by the share of entries in a
//! set of mood categories. "Strength" is a coarse label for the percentage
//! point gap, not a statistical coefficient.

use crate::domain::entry::JournalEntry;
use crate::domain::mood::MoodCategory;
use serde::{Deserialize, Serialize};

pub const SLEEP_STATEMENT: &str = "Less sleep often aligned with tired or anxious moods";
pub const HABIT_STATEMENT: &str = "Completed habits often appeared on calmer days";

/// Tunable thresholds for correlation detection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationThresholds {
    /// Minimum qualifying entries before any analysis runs
    pub min_entries: usize,
    /// Nights below this count as low sleep
    pub sleep_threshold_hours: f64,
    /// Percentage points low sleep must exceed high sleep by
    pub sleep_min_difference: f64,
    /// Gap above which a sleep correlation is strong
    pub sleep_strong_difference: f64,
    /// Percentage points habit days must exceed other days by
    pub habit_min_difference: f64,
    /// Gap above which a habit correlation is strong
    pub habit_strong_difference: f64,
    /// Minimum entries in each habit cohort
    pub habit_min_bucket_entries: usize,
}

impl Default for CorrelationThresholds {
    fn default() -> Self {
        Self {
            min_entries: 3,
            sleep_threshold_hours: 7.0,
            sleep_min_difference: 20.0,
            sleep_strong_difference: 30.0,
            habit_min_difference: 15.0,
            habit_strong_difference: 25.0,
            habit_min_bucket_entries: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    Strong,
    Moderate,
}

/// A detected pattern between a tracked input and mood
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Correlation {
    pub statement: &'static str,
    pub strength: CorrelationStrength,
}

/// Share of `cohort` whose mood category is one of `categories`, in percent
fn share_in(cohort: &[&JournalEntry], categories: &[MoodCategory]) -> f64 {
    if cohort.is_empty() {
        return 0.0;
    }
    let hits = cohort
        .iter()
        .filter(|e| e.mood_category().is_some_and(|c| categories.contains(&c)))
        .count();
    hits as f64 / cohort.len() as f64 * 100.0
}

/// Compare two percentages; `None` unless `a` beats `b` by more than `min_gap`
fn compare(a: f64, b: f64, min_gap: f64, strong_gap: f64) -> Option<CorrelationStrength> {
    if a > b + min_gap {
        Some(if a > b + strong_gap {
            CorrelationStrength::Strong
        } else {
            CorrelationStrength::Moderate
        })
    } else {
        None
    }
}

/// Check whether short nights line up with tired or anxious moods.
///
/// Only the low-sleep direction is tested. Returns `None` when there are too
/// few entries with both sleep and mood, when either cohort is empty, or when
/// the gap is below the threshold.
pub fn analyze_sleep_mood_correlation(
    entries: &[JournalEntry],
    thresholds: &CorrelationThresholds,
) -> Option<Correlation> {
    let qualifying: Vec<&JournalEntry> = entries
        .iter()
        .filter(|e| e.sleep_hours.is_some() && e.effective_mood().is_some())
        .collect();
    if qualifying.len() < thresholds.min_entries {
        return None;
    }

    let (low, high): (Vec<&JournalEntry>, Vec<&JournalEntry>) = qualifying
        .into_iter()
        .partition(|e| e.sleep_hours.unwrap_or(0.0) < thresholds.sleep_threshold_hours);
    if low.is_empty() || high.is_empty() {
        return None;
    }

    let drained = [MoodCategory::Tired, MoodCategory::Anxious];
    let low_pct = share_in(&low, &drained);
    let high_pct = share_in(&high, &drained);

    compare(
        low_pct,
        high_pct,
        thresholds.sleep_min_difference,
        thresholds.sleep_strong_difference,
    )
    .map(|strength| Correlation {
        statement: SLEEP_STATEMENT,
        strength,
    })
}

/// Check whether days with a completed habit were calmer.
///
/// Returns an empty list rather than `None` when there is not enough data;
/// each cohort needs `habit_min_bucket_entries` entries.
pub fn analyze_habit_mood_correlation(
    entries: &[JournalEntry],
    thresholds: &CorrelationThresholds,
) -> Vec<Correlation> {
    let mut correlations = Vec::new();

    let qualifying: Vec<&JournalEntry> = entries
        .iter()
        .filter(|e| e.tracked_habits().is_some() && e.effective_mood().is_some())
        .collect();
    if qualifying.len() < thresholds.min_entries {
        return correlations;
    }

    let (with_habit, without_habit): (Vec<&JournalEntry>, Vec<&JournalEntry>) =
        qualifying.into_iter().partition(|e| e.completed_any_habit());
    if with_habit.len() < thresholds.habit_min_bucket_entries
        || without_habit.len() < thresholds.habit_min_bucket_entries
    {
        return correlations;
    }

    let settled = [MoodCategory::Calm, MoodCategory::Happy];
    let with_pct = share_in(&with_habit, &settled);
    let without_pct = share_in(&without_habit, &settled);

    if let Some(strength) = compare(
        with_pct,
        without_pct,
        thresholds.habit_min_difference,
        thresholds.habit_strong_difference,
    ) {
        correlations.push(Correlation {
            statement: HABIT_STATEMENT,
            strength,
        });
    }

    correlations
}
