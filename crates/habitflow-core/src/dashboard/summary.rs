//! Today's completion summary for the habit list header.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::ScheduleEngine;
use crate::habit::{completed_dates, Completion, Habit};

/// How many habits are due today and how many of those are done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodaySummary {
    pub date: NaiveDate,
    /// Due habits with a completed record for today
    pub completed: usize,
    /// Habits due today
    pub expected: usize,
    /// completed / expected as a percentage, 0 when nothing is due
    pub percent: f64,
}

/// Summarise today's progress across all habits.
///
/// A habit is expected when today is a scheduled day for it, so weekly or
/// monthly habits without a schedule are never expected. Completions on
/// days that are not due are not counted.
pub fn today_summary(habits: &[Habit], completions: &[Completion], today: NaiveDate) -> TodaySummary {
    let engine = ScheduleEngine::new(today);

    let (completed, expected) = habits
        .iter()
        .filter(|habit| engine.is_due_today(habit))
        .fold((0usize, 0usize), |(completed, expected), habit| {
            let done = completed_dates(&habit.id, completions).contains(&today);
            (completed + usize::from(done), expected + 1)
        });

    let percent = if expected == 0 {
        0.0
    } else {
        completed as f64 / expected as f64 * 100.0
    };

    TodaySummary {
        date: today,
        completed,
        expected,
        percent,
    }
}
