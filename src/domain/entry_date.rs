//! Entry date parsing and resolution

use crate::error::{MoodjourError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date given on the command line, resolved against "today"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDate {
    Today,
    Yesterday,
    /// `N days ago`
    DaysAgo(u32),
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Previous occurrence of a weekday, strictly before today
    LastWeekday(Weekday),
    /// ISO date (YYYY-MM-DD)
    Specific(NaiveDate),
}

impl EntryDate {
    /// Parse a date reference
    ///
    /// # Examples
    ///
    /// ```
    /// use moodjour::domain::EntryDate;
    /// use chrono::Weekday;
    ///
    /// assert_eq!(EntryDate::parse("3 days ago").unwrap(), EntryDate::DaysAgo(3));
    /// assert_eq!(EntryDate::parse("last friday").unwrap(), EntryDate::LastWeekday(Weekday::Fri));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || MoodjourError::InvalidDate(input.to_string());

        match normalized.as_str() {
            "today" => return Ok(EntryDate::Today),
            "yesterday" => return Ok(EntryDate::Yesterday),
            _ => {}
        }

        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(EntryDate::Weekday(weekday));
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return parse_weekday(rest.trim())
                .map(EntryDate::LastWeekday)
                .ok_or_else(invalid);
        }

        if let Some(count) = normalized
            .strip_suffix(" days ago")
            .or_else(|| normalized.strip_suffix(" day ago"))
        {
            return count
                .trim()
                .parse::<u32>()
                .map(EntryDate::DaysAgo)
                .map_err(|_| invalid());
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .map(EntryDate::Specific)
            .map_err(|_| invalid())
    }

    /// Resolve to a calendar date relative to `today`
    ///
    /// Returns `None` when the result falls outside the supported calendar.
    pub fn resolve(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            EntryDate::Today => Some(today),
            EntryDate::Yesterday => days_before(today, 1),
            EntryDate::DaysAgo(n) => days_before(today, i64::from(*n)),
            EntryDate::Weekday(target) => days_before(today, days_since(today, *target)),
            EntryDate::LastWeekday(target) => {
                let days = match days_since(today, *target) {
                    0 => 7,
                    d => d,
                };
                days_before(today, days)
            }
            EntryDate::Specific(date) => Some(*date),
        }
    }
}

/// Parse and resolve in one step against the local calendar
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    EntryDate::parse(input)?
        .resolve(today)
        .ok_or_else(|| MoodjourError::InvalidDate(input.to_string()))
}

/// The date `days` before `today`, if it exists
pub fn days_before(today: NaiveDate, days: i64) -> Option<NaiveDate> {
    today.checked_sub_signed(Duration::days(days))
}

fn days_since(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday();
    let target = target.num_days_from_monday();
    i64::from((current + 7 - target) % 7)
}

fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}
