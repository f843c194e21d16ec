//! Theme detection by keyword matching
//!
//! Keywords are matched as plain substrings of the lowercased text, so
//! "emotion" also matches inside "emotionally".

use crate::domain::entry::JournalEntry;
use serde::Serialize;

/// Topics recognized in entry text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Work,
    Family,
    Health,
    Relationships,
    #[serde(rename = "self")]
    SelfCare,
    Routine,
}

impl Theme {
    /// All themes in declared order
    pub const ALL: [Theme; 6] = [
        Theme::Work,
        Theme::Family,
        Theme::Health,
        Theme::Relationships,
        Theme::SelfCare,
        Theme::Routine,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Theme::Work => "work",
            Theme::Family => "family",
            Theme::Health => "health",
            Theme::Relationships => "relationships",
            Theme::SelfCare => "self",
            Theme::Routine => "routine",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Work => "Work",
            Theme::Family => "Family",
            Theme::Health => "Health",
            Theme::Relationships => "Relationships",
            Theme::SelfCare => "Self",
            Theme::Routine => "Routine",
        }
    }

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Theme::Work => &[
                "work", "office", "meeting", "deadline", "project", "manager", "boss",
                "colleague", "presentation", "task", "assignment", "career", "job",
                "workplace", "client", "email", "report", "conference", "team", "workload",
            ],
            Theme::Family => &[
                "family", "mom", "dad", "mother", "father", "parent", "sibling", "brother",
                "sister", "home", "household", "relative", "grandma", "grandpa", "aunt",
                "uncle", "cousin",
            ],
            Theme::Health => &[
                "health", "sleep", "tired", "exhausted", "headache", "pain", "exercise",
                "walk", "run", "workout", "gym", "doctor", "medication", "illness", "sick",
                "wellness", "energy", "fatigue", "rest", "recovery",
            ],
            Theme::Relationships => &[
                "friend", "friendship", "partner", "relationship", "dating", "love",
                "conversation", "talk", "discussion", "connection", "social", "party",
                "gathering", "support", "understanding", "conflict", "argument",
                "reconciliation",
            ],
            Theme::SelfCare => &[
                "reflection", "growth", "learning", "insight", "awareness", "mindfulness",
                "meditation", "journal", "thought", "feeling", "emotion", "mood",
                "self-care", "personal", "development", "goals", "aspiration", "dream",
            ],
            Theme::Routine => &[
                "routine", "habit", "schedule", "morning", "evening", "daily", "regular",
                "pattern", "ritual", "consistency", "discipline", "practice",
            ],
        }
    }
}

/// Themes whose keywords appear in `text`, in declared order
pub fn detect_themes(text: &str) -> Vec<Theme> {
    let lower = text.to_lowercase();
    Theme::ALL
        .into_iter()
        .filter(|theme| theme.keywords().iter().any(|kw| lower.contains(kw)))
        .collect()
}

/// Number of entries mentioning each theme, indexed by `theme as usize`
pub fn count_theme_occurrences(entries: &[JournalEntry]) -> [usize; Theme::ALL.len()] {
    let mut counts = [0usize; Theme::ALL.len()];
    for entry in entries {
        for theme in detect_themes(&entry.text) {
            counts[theme as usize] += 1;
        }
    }
    counts
}

/// Most frequent themes, at most `limit`, never including unseen themes
pub fn top_themes(entries: &[JournalEntry], limit: usize) -> Vec<(Theme, usize)> {
    let mut ranked: Vec<(Theme, usize)> = Theme::ALL
        .into_iter()
        .zip(count_theme_occurrences(entries))
        .filter(|(_, count)| *count > 0)
        .collect();
    // Stable: equal counts stay in theme order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}
