//! Parsing of the JSON arrays served by the habits API.

use super::completion::{normalize_completions, Completion, CompletionPayload};
use super::model::Habit;
use crate::error::Result;

/// Parse a JSON array of habits. Rows that do not describe a habit (no id,
/// unknown weekday tokens, wrong field types) are skipped.
///
/// # Errors
/// Returns [`CoreError::Json`](crate::CoreError::Json) when the input is not
/// a JSON array.
pub fn habits_from_json(json: &str) -> Result<Vec<Habit>> {
    let rows: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let total = rows.len();
    let habits: Vec<Habit> = rows
        .into_iter()
        .enumerate()
        .filter_map(|(row, value)| match serde_json::from_value(value) {
            Ok(habit) => Some(habit),
            Err(e) => {
                tracing::warn!(row, error = %e, "skipping habit row");
                None
            }
        })
        .collect();
    if habits.len() < total {
        tracing::warn!(skipped = total - habits.len(), "some habit rows could not be parsed");
    }
    Ok(habits)
}

/// Parse a JSON array of completion payloads in any API shape and
/// normalise it. Rows without a habit id or a valid date are dropped.
///
/// # Errors
/// Returns [`CoreError::Json`](crate::CoreError::Json) when the input is not
/// an array of objects.
pub fn completions_from_json(json: &str) -> Result<Vec<Completion>> {
    let payloads: Vec<CompletionPayload> = serde_json::from_str(json)?;
    let total = payloads.len();
    let completions = normalize_completions(payloads);
    if completions.len() < total {
        tracing::warn!(
            skipped = total - completions.len(),
            "some completion rows could not be normalised"
        );
    }
    Ok(completions)
}
