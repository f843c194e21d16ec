//! Weekly and monthly goals

use crate::error::{MoodjourError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How long a goal is meant to stay in focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Weekly,
    Monthly,
}

impl GoalPeriod {
    pub fn heading(&self) -> &'static str {
        match self {
            GoalPeriod::Weekly => "This week",
            GoalPeriod::Monthly => "This month",
        }
    }
}

impl fmt::Display for GoalPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalPeriod::Weekly => write!(f, "weekly"),
            GoalPeriod::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for GoalPeriod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" => Ok(GoalPeriod::Weekly),
            "monthly" | "month" => Ok(GoalPeriod::Monthly),
            _ => Err(format!(
                "Invalid goal period: '{}'. Use weekly or monthly",
                s
            )),
        }
    }
}

/// A single goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: u32,
    pub period: GoalPeriod,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Removed goals stay on disk so their ids are never reused
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
}

impl Goal {
    /// Create an open goal; the text is trimmed and must not be empty
    pub fn new(id: u32, period: GoalPeriod, text: &str, now: DateTime<Utc>) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(MoodjourError::InvalidEntry(
                "Goal text cannot be empty".to_string(),
            ));
        }

        Ok(Goal {
            id,
            period,
            text: text.to_string(),
            completed: false,
            created_at: now,
            updated_at: now,
            completed_at: None,
            deleted: false,
        })
    }

    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        self.completed = completed;
        self.completed_at = completed.then_some(now);
        self.updated_at = now;
    }

    pub fn delete(&mut self, now: DateTime<Utc>) {
        self.deleted = true;
        self.updated_at = now;
    }
}

/// Every goal stored for a journal
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalBook {
    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl GoalBook {
    fn next_id(&self) -> u32 {
        self.goals.iter().map(|g| g.id).max().unwrap_or(0) + 1
    }

    /// Add an open goal and return it
    pub fn add(&mut self, period: GoalPeriod, text: &str, now: DateTime<Utc>) -> Result<Goal> {
        let goal = Goal::new(self.next_id(), period, text, now)?;
        self.goals.push(goal.clone());
        Ok(goal)
    }

    /// Goals that were not removed, newest first.
    ///
    /// Completed goals are left out unless `include_completed` is set.
    pub fn visible(&self, period: Option<GoalPeriod>, include_completed: bool) -> Vec<&Goal> {
        let mut goals: Vec<&Goal> = self
            .goals
            .iter()
            .filter(|g| !g.deleted)
            .filter(|g| period.map_or(true, |p| g.period == p))
            .filter(|g| include_completed || !g.completed)
            .collect();
        goals.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        goals
    }

    /// Look up a goal that was not removed
    pub fn find_mut(&mut self, id: u32) -> Result<&mut Goal> {
        self.goals
            .iter_mut()
            .find(|g| g.id == id && !g.deleted)
            .ok_or(MoodjourError::GoalNotFound(id))
    }
}
