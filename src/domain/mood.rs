//! Mood vocabulary and mood categories
//!
//! Every entry carries one of twelve fixed mood labels. For aggregation and
//! coloring, moods are grouped into five coarse categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The twelve moods an entry can be tagged with
pub const MOOD_OPTIONS: [&str; 12] = [
    "Calm",
    "Stressed",
    "Hopeful",
    "Reflective",
    "Anxious",
    "Content",
    "Grateful",
    "Overwhelmed",
    "Peaceful",
    "Tired",
    "Excited",
    "Worried",
];

/// Color used when a mood or category cannot be resolved
pub const NEUTRAL_COLOR: &str = "#E5E7EB";

/// Coarse emotional bucket used for trends and colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodCategory {
    Happy,
    Calm,
    Anxious,
    Tired,
    Sad,
}

impl MoodCategory {
    /// All categories in declared order
    pub const ALL: [MoodCategory; 5] = [
        MoodCategory::Happy,
        MoodCategory::Calm,
        MoodCategory::Anxious,
        MoodCategory::Tired,
        MoodCategory::Sad,
    ];

    /// Fallback for moods outside every member list
    pub const DEFAULT: MoodCategory = MoodCategory::Calm;

    pub fn id(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "happy",
            MoodCategory::Calm => "calm",
            MoodCategory::Anxious => "anxious",
            MoodCategory::Tired => "tired",
            MoodCategory::Sad => "sad",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "Happy",
            MoodCategory::Calm => "Calm",
            MoodCategory::Anxious => "Anxious",
            MoodCategory::Tired => "Tired",
            MoodCategory::Sad => "Sad",
        }
    }

    /// Display color as a hex string
    pub fn color(&self) -> &'static str {
        match self {
            MoodCategory::Happy => "#A7F3D0",
            MoodCategory::Calm => "#BFDBFE",
            MoodCategory::Anxious => "#FDE68A",
            MoodCategory::Tired => "#E5E7EB",
            MoodCategory::Sad => "#E9D5FF",
        }
    }

    /// Moods that belong to this category
    ///
    /// `Sad` has no members, so no mood is ever categorized as sad.
    pub fn moods(&self) -> &'static [&'static str] {
        match self {
            MoodCategory::Happy => &["Hopeful", "Content", "Grateful", "Excited"],
            MoodCategory::Calm => &["Calm", "Peaceful", "Reflective"],
            MoodCategory::Anxious => &["Stressed", "Anxious", "Overwhelmed", "Worried"],
            MoodCategory::Tired => &["Tired"],
            MoodCategory::Sad => &[],
        }
    }

    fn contains(&self, mood: &str) -> bool {
        self.moods().iter().any(|m| m.eq_ignore_ascii_case(mood))
    }
}

impl fmt::Display for MoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MoodCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        MoodCategory::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| format!("Invalid mood category: {}", s))
    }
}

fn find_category(mood: &str) -> Option<MoodCategory> {
    let normalized = mood.trim();
    MoodCategory::ALL.into_iter().find(|c| c.contains(normalized))
}

/// Map a mood label to its category.
///
/// Matching ignores case and surrounding whitespace. Moods outside every
/// member list fall back to [`MoodCategory::DEFAULT`].
///
/// # Examples
///
/// ```
/// use moodjour::domain::mood::{categorize, MoodCategory};
///
/// assert_eq!(categorize(" grateful "), MoodCategory::Happy);
/// assert_eq!(categorize("bewildered"), MoodCategory::Calm);
/// ```
pub fn categorize(mood: &str) -> MoodCategory {
    find_category(mood).unwrap_or(MoodCategory::DEFAULT)
}

/// Resolve a mood label or a category id to its display color.
///
/// Category ids take precedence. Strings that are neither resolve to
/// [`NEUTRAL_COLOR`].
pub fn color_of(mood_or_category: &str) -> &'static str {
    if let Ok(category) = MoodCategory::from_str(mood_or_category) {
        return category.color();
    }
    find_category(mood_or_category)
        .map(|c| c.color())
        .unwrap_or(NEUTRAL_COLOR)
}

/// Canonical spelling of a mood from the vocabulary, if it is one
pub fn canonical_mood(input: &str) -> Option<&'static str> {
    let normalized = input.trim();
    MOOD_OPTIONS
        .iter()
        .copied()
        .find(|m| m.eq_ignore_ascii_case(normalized))
}
