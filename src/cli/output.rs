//! Output formatting utilities

use crate::domain::insights::{CorrelationStrength, InsightsReport};
use crate::domain::mood::{categorize, color_of, MoodCategory};
use crate::domain::{Goal, GoalPeriod, Habit, JournalEntry};

/// Characters of entry text shown in lists
pub const TEXT_PREVIEW_LENGTH: usize = 120;

/// Width of the longest mood bar
const BAR_WIDTH: usize = 20;

pub const EMPTY_JOURNAL_MESSAGE: &str = "Write a few entries to see your patterns and trends.";

/// Format a list of entries for display
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{}  {:<11}  {}\n",
            entry.date.format("%Y-%m-%d"),
            entry.effective_mood().unwrap_or("-"),
            entry.preview(TEXT_PREVIEW_LENGTH)
        ));
    }
    output
}

/// Format a single entry with all recorded fields
pub fn format_entry(entry: &JournalEntry) -> String {
    let mut output = format!("{}\n", entry.date.format("%A, %B %-d, %Y"));

    if let Some(mood) = entry.effective_mood() {
        let category = categorize(mood);
        output.push_str(&format!("Mood: {} ({})", mood, category.label()));
        if entry.mood_manual.is_some() {
            if let Some(suggested) = entry.mood_suggested.as_deref().filter(|s| !s.is_empty()) {
                output.push_str(&format!(", originally {}", suggested));
            }
        }
        output.push('\n');
    }
    if let Some(hours) = entry.sleep_hours {
        output.push_str(&format!("Sleep: {}h\n", hours));
    }
    if let Some(habits) = entry.tracked_habits() {
        let marks: Vec<String> = habits
            .iter()
            .map(|(id, done)| format!("[{}] {}", if *done { "x" } else { " " }, id))
            .collect();
        output.push_str(&format!("Habits: {}\n", marks.join("  ")));
    }

    output.push('\n');
    output.push_str(entry.text.trim_end());
    output.push('\n');
    output
}

/// Format the insights report as plain text
pub fn format_insights(report: &InsightsReport) -> String {
    if report.entry_count == 0 {
        return EMPTY_JOURNAL_MESSAGE.to_string();
    }

    let mut output = format!(
        "Insights from {} {}\n\nMood trends\n",
        report.entry_count,
        if report.entry_count == 1 { "entry" } else { "entries" }
    );

    let max_count = report.mood_trends.first().map(|t| t.count).unwrap_or(0);
    for trend in &report.mood_trends {
        let width = if max_count > 0 {
            ((trend.count as f64 / max_count as f64) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        output.push_str(&format!(
            "  {:<8} {:<bar$}  {:>3}  {:>3}%  {}\n",
            trend.label,
            "█".repeat(width),
            trend.count,
            trend.percentage,
            color_of(trend.category.id()),
            bar = BAR_WIDTH
        ));
    }
    output.push_str(&format!("  {}\n", report.trend_summary));

    output.push_str("\nThemes\n");
    if report.top_themes.is_empty() {
        output.push_str("  No recurring themes yet\n");
    } else {
        let themes: Vec<String> = report
            .top_themes
            .iter()
            .map(|t| format!("{} ({})", t.label, t.count))
            .collect();
        output.push_str(&format!("  {}\n", themes.join(", ")));
    }

    let patterns = report.patterns();
    if !patterns.is_empty() {
        output.push_str("\nPatterns\n");
        for pattern in patterns {
            let strength = match pattern.strength {
                CorrelationStrength::Strong => "strong",
                CorrelationStrength::Moderate => "moderate",
            };
            output.push_str(&format!("  • {} ({})\n", pattern.statement, strength));
        }
    }

    output
}

/// Format the mood vocabulary grouped by category
pub fn format_mood_table() -> String {
    let mut output = String::new();
    for category in MoodCategory::ALL {
        let moods = category.moods();
        output.push_str(&format!(
            "{:<8} {}  {}\n",
            category.label(),
            category.color(),
            if moods.is_empty() {
                "-".to_string()
            } else {
                moods.join(", ")
            }
        ));
    }
    output
}

/// Format the tracked habit list
pub fn format_habit_list(habits: &[Habit]) -> String {
    if habits.is_empty() {
        return "No habits tracked".to_string();
    }

    let mut output = String::new();
    for habit in habits {
        output.push_str(&format!("{:<12} {}\n", habit.id, habit.label));
    }
    output
}

/// Format goals grouped by period, weekly first
pub fn format_goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals yet".to_string();
    }

    let mut output = String::new();
    for period in [GoalPeriod::Weekly, GoalPeriod::Monthly] {
        let section: Vec<&Goal> = goals.iter().filter(|g| g.period == period).collect();
        if section.is_empty() {
            continue;
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&format!("{}\n", period.heading()));
        for goal in section {
            output.push_str(&format!(
                "  {:>3}  [{}] {}\n",
                goal.id,
                if goal.completed { "x" } else { " " },
                goal.text
            ));
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::insights::CorrelationThresholds;
    use crate::domain::Habits;
    use chrono::NaiveDate;

    fn entry(day: u32, mood: &str, text: &str) -> JournalEntry {
        let mut e = JournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, day).unwrap(), text);
        e.mood_suggested = Some(mood.to_string());
        e
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_entry_list(&[]), "No entries found");
    }

    #[test]
    fn test_format_entry_list() {
        let output = format_entry_list(&[
            entry(17, "Calm", "Walked by the lake"),
            JournalEntry::new(NaiveDate::from_ymd_opt(2025, 1, 16).unwrap(), "No mood"),
        ]);
        assert!(output.contains("2025-01-17  Calm         Walked by the lake"));
        assert!(output.contains("2025-01-16  -            No mood"));
    }

    #[test]
    fn test_format_entry_list_truncates_text() {
        let output = format_entry_list(&[entry(17, "Calm", &"word ".repeat(60))]);
        assert!(output.trim_end().ends_with("..."));
    }

    #[test]
    fn test_format_entry_details() {
        let mut e = entry(17, "Calm", "Slept badly.");
        e.mood_manual = Some("Tired".to_string());
        e.sleep_hours = Some(5.5);
        let mut habits = Habits::new();
        habits.insert("walk".to_string(), true);
        habits.insert("read".to_string(), false);
        e.habits = Some(habits);

        let output = format_entry(&e);
        assert!(output.starts_with("Friday, January 17, 2025\n"));
        assert!(output.contains("Mood: Tired (Tired), originally Calm"));
        assert!(output.contains("Sleep: 5.5h"));
        assert!(output.contains("[ ] read  [x] walk"));
        assert!(output.ends_with("Slept badly.\n"));
    }

    #[test]
    fn test_format_insights_empty() {
        let report = InsightsReport::build(&[], &CorrelationThresholds::default(), 5);
        assert_eq!(format_insights(&report), EMPTY_JOURNAL_MESSAGE);
    }

    #[test]
    fn test_format_insights_sections() {
        let entries = vec![
            entry(15, "Grateful", "Team meeting went well"),
            entry(16, "Grateful", "Dinner with my sister"),
            entry(17, "Calm", "Project deadline moved"),
        ];
        let report = InsightsReport::build(&entries, &CorrelationThresholds::default(), 5);
        let output = format_insights(&report);

        assert!(output.starts_with("Insights from 3 entries"));
        assert!(output.contains(&format!("  Happy    {}", "█".repeat(20))));
        assert!(output.contains("67%  #A7F3D0"));
        assert!(output.contains("More happy days"));
        assert!(output.contains("Work (2), Family (1)"));
        assert!(!output.contains("Patterns"));
        assert!(output.ends_with("More happy days\n\nThemes\n  Work (2), Family (1)\n"));
    }

    #[test]
    fn test_format_mood_table() {
        let output = format_mood_table();
        assert!(output.contains("Happy    #A7F3D0  Hopeful, Content, Grateful, Excited"));
        assert!(output.contains("Sad      #E9D5FF  -"));
    }

    #[test]
    fn test_format_habit_list() {
        assert_eq!(format_habit_list(&[]), "No habits tracked");
        let habits = vec![Habit::new("walk", "Go for a walk").unwrap()];
        assert_eq!(format_habit_list(&habits), "walk         Go for a walk\n");
    }

    #[test]
    fn test_format_goal_list() {
        assert_eq!(format_goal_list(&[]), "No goals yet");

        let now = chrono::Utc::now();
        let mut done = Goal::new(2, GoalPeriod::Weekly, "Stretch", now).unwrap();
        done.set_completed(true, now);
        let goals = vec![
            Goal::new(3, GoalPeriod::Monthly, "Read a book", now).unwrap(),
            done,
            Goal::new(1, GoalPeriod::Weekly, "Walk", now).unwrap(),
        ];

        assert_eq!(
            format_goal_list(&goals),
            "This week\n    2  [x] Stretch\n    1  [ ] Walk\n\nThis month\n    3  [ ] Read a book\n"
        );
    }
}
