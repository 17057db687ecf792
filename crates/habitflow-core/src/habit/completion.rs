//! Completion records and boundary normalisation.
//!
//! The API returns completions in several shapes depending on the endpoint:
//! flat rows (`habitId`/`HabitId`, `date`, `completed`), rows nesting the
//! habit (`Habit: {id}` or `habit: {id}`), and join rows whose date and flag
//! live under `HabitCompletion`. [`CompletionPayload`] accepts all of them
//! and [`CompletionPayload::into_completion`] produces the one canonical
//! [`Completion`] the engine works with.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::model::HabitId;
use crate::dates::parse_iso_date;
use crate::error::ValidationError;

/// A record asserting a habit was (or was not) done on a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    pub habit_id: HabitId,
    pub date: NaiveDate,
    #[serde(default)]
    pub completed: bool,
}

impl Completion {
    pub fn new(habit_id: impl Into<HabitId>, date: NaiveDate, completed: bool) -> Self {
        Self {
            habit_id: habit_id.into(),
            date,
            completed,
        }
    }

    /// A completed record.
    pub fn done(habit_id: impl Into<HabitId>, date: NaiveDate) -> Self {
        Self::new(habit_id, date, true)
    }
}

/// Habit reference nested inside a completion row.
#[derive(Debug, Clone, Deserialize)]
pub struct HabitRef {
    pub id: HabitId,
    #[serde(default)]
    pub name: Option<String>,
}

/// Completion fields carried by a habit/completion join row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionJoin {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Any completion shape the API layer emits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompletionPayload {
    #[serde(default, rename = "habitId", alias = "HabitId", alias = "habit_id")]
    pub habit_id: Option<HabitId>,
    #[serde(default, rename = "Habit")]
    pub habit_upper: Option<HabitRef>,
    #[serde(default, rename = "habit")]
    pub habit_lower: Option<HabitRef>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default, rename = "HabitCompletion")]
    pub join: Option<CompletionJoin>,
}

impl CompletionPayload {
    /// Resolve the payload into a canonical record.
    ///
    /// Lookup order: `Habit.id`, then `habitId`, then `habit.id` for the
    /// habit; top-level `date` before `HabitCompletion.date`. The row counts
    /// as completed if either `completed` flag is true.
    ///
    /// # Errors
    /// Returns [`ValidationError::MissingField`] when no habit id or date can
    /// be found, and [`ValidationError::InvalidDate`] for a malformed date.
    pub fn into_completion(self) -> Result<Completion, ValidationError> {
        let join = self.join.unwrap_or_default();

        let habit_id = self
            .habit_upper
            .map(|h| h.id)
            .or(self.habit_id)
            .or(self.habit_lower.map(|h| h.id))
            .ok_or_else(|| ValidationError::MissingField {
                field: "habitId".into(),
                context: "completion payload".into(),
            })?;

        let raw_date = self
            .date
            .filter(|s| !s.is_empty())
            .or(join.date)
            .ok_or_else(|| ValidationError::MissingField {
                field: "date".into(),
                context: format!("completion payload for habit {habit_id}"),
            })?;
        let date = parse_iso_date(&raw_date)?;

        let completed = self.completed == Some(true) || join.completed == Some(true);

        Ok(Completion {
            habit_id,
            date,
            completed,
        })
    }
}

/// Normalise a batch of payloads, dropping rows that cannot be resolved.
pub fn normalize_completions<I>(payloads: I) -> Vec<Completion>
where
    I: IntoIterator<Item = CompletionPayload>,
{
    payloads
        .into_iter()
        .filter_map(|payload| match payload.into_completion() {
            Ok(completion) => Some(completion),
            Err(e) => {
                tracing::debug!(error = %e, "dropping completion payload");
                None
            }
        })
        .collect()
}

/// Distinct dates on which `habit_id` has at least one completed record.
pub fn completed_dates<'a, I>(habit_id: &HabitId, completions: I) -> BTreeSet<NaiveDate>
where
    I: IntoIterator<Item = &'a Completion>,
{
    completions
        .into_iter()
        .filter(|c| c.completed && &c.habit_id == habit_id)
        .map(|c| c.date)
        .collect()
}
