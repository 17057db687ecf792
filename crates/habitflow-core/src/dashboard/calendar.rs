//! Week calendar cells.
//!
//! Builds the seven Monday-first cells of the calendar view, either for a
//! single focused habit or aggregated over all habits.

use chrono::{NaiveDate, TimeDelta};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::dates::week_start;
use crate::engine::ScheduleEngine;
use crate::error::ValidationError;
use crate::habit::{Completion, Habit, HabitId, WeekdayToken};

/// Aggregate completion state of a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    /// Nothing completed
    None,
    /// Some but not all considered habits completed
    Some,
    /// Every considered habit completed
    All,
}

/// One day of the calendar view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub weekday: WeekdayToken,
    pub is_today: bool,
    /// Due for the focused habit; always true without a focus
    pub scheduled: bool,
    pub status: DayStatus,
    pub completed_habits: Vec<HabitId>,
    /// The user may toggle completion on this day
    pub editable: bool,
}

/// Calendar cells for the week `week_offset` weeks away from the current
/// one (negative offsets go back in time).
///
/// With `focus` naming a known habit, only that habit is considered and
/// cells carry its schedule. An unknown focus id behaves like no focus.
///
/// # Errors
/// Returns [`ValidationError::InvalidValue`] when the shifted week falls
/// outside the representable date range.
pub fn week_calendar(
    habits: &[Habit],
    completions: &[Completion],
    today: NaiveDate,
    week_offset: i64,
    focus: Option<&HabitId>,
) -> Result<Vec<CalendarDay>, ValidationError> {
    let monday = TimeDelta::try_weeks(week_offset)
        .and_then(|shift| week_start(today).checked_add_signed(shift))
        .filter(|monday| monday.checked_add_days(chrono::Days::new(6)).is_some())
        .ok_or_else(|| ValidationError::InvalidValue {
            field: "week_offset".into(),
            message: format!("week offset {week_offset} is out of range"),
        })?;

    let engine = ScheduleEngine::new(today);
    let focused = focus.and_then(|id| habits.iter().find(|h| &h.id == id));
    let considered: BTreeSet<&HabitId> = match focused {
        Some(habit) => BTreeSet::from([&habit.id]),
        None => habits.iter().map(|h| &h.id).collect(),
    };

    Ok(monday
        .iter_days()
        .take(7)
        .map(|date| {
            let completed_habits: Vec<HabitId> = completions
                .iter()
                .filter(|c| c.completed && c.date == date && considered.contains(&c.habit_id))
                .map(|c| &c.habit_id)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .cloned()
                .collect();

            let status = if completed_habits.is_empty() {
                DayStatus::None
            } else if completed_habits.len() == considered.len() {
                DayStatus::All
            } else {
                DayStatus::Some
            };

            let scheduled = focused.map_or(true, |habit| engine.is_scheduled_day(habit, date));

            CalendarDay {
                date,
                weekday: WeekdayToken::of(date),
                is_today: date == today,
                scheduled,
                status,
                completed_habits,
                editable: date <= today && scheduled,
            }
        })
        .collect())
}
