//! Rolling daily completion rates for the dashboard chart.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};

use super::MAX_HISTORY_DAYS;
use crate::error::ValidationError;
use crate::habit::{Completion, Habit, HabitId};

/// Share of habits completed on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRate {
    pub date: NaiveDate,
    /// Distinct habits with a completed record that day
    pub completed: usize,
    /// completed / habit count as a percentage
    pub rate: f64,
}

/// Completion rate for each of the last `days` dates ending at `today`,
/// oldest first.
///
/// Every habit counts in the denominator regardless of its schedule. An
/// empty habit list is treated as one habit so the rate stays finite.
/// Completions for habits not in `habits` are ignored.
///
/// # Errors
/// Returns [`ValidationError::InvalidValue`] when `days` exceeds
/// [`MAX_HISTORY_DAYS`] or the window starts before the earliest
/// representable date.
pub fn completion_history(
    habits: &[Habit],
    completions: &[Completion],
    today: NaiveDate,
    days: u32,
) -> Result<Vec<DailyRate>, ValidationError> {
    if days == 0 {
        return Ok(Vec::new());
    }

    let out_of_range = || ValidationError::InvalidValue {
        field: "days".into(),
        message: format!("{days} days of history is out of range (1..={MAX_HISTORY_DAYS})"),
    };
    if days > MAX_HISTORY_DAYS {
        return Err(out_of_range());
    }
    let first = today
        .checked_sub_days(Days::new(u64::from(days - 1)))
        .ok_or_else(out_of_range)?;

    let known: HashSet<&HabitId> = habits.iter().map(|h| &h.id).collect();
    let total = habits.len().max(1);

    let mut by_date: BTreeMap<NaiveDate, BTreeSet<&HabitId>> = BTreeMap::new();
    for c in completions {
        if c.completed && c.date >= first && c.date <= today && known.contains(&c.habit_id) {
            by_date.entry(c.date).or_default().insert(&c.habit_id);
        }
    }

    Ok(first
        .iter_days()
        .take(days as usize)
        .map(|date| {
            let completed = by_date.get(&date).map_or(0, BTreeSet::len);
            DailyRate {
                date,
                completed,
                rate: completed as f64 / total as f64 * 100.0,
            }
        })
        .collect())
}
