//! Shared input handling: JSON data files and the reference date.

use chrono::NaiveDate;
use habitflow_core::dates::parse_iso_date;
use habitflow_core::{completions_from_json, habits_from_json, Completion, Config, Habit};
use std::path::Path;

pub type CliResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

fn read(path: &Path, what: &str) -> CliResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {what} file {}: {e}", path.display()).into())
}

/// Read a JSON array of habits.
pub fn load_habits(path: &Path) -> CliResult<Vec<Habit>> {
    let habits = habits_from_json(&read(path, "habits")?)?;
    tracing::debug!(count = habits.len(), path = %path.display(), "loaded habits");
    Ok(habits)
}

/// Read a JSON array of completion payloads in any API shape.
pub fn load_completions(path: &Path) -> CliResult<Vec<Completion>> {
    let completions = completions_from_json(&read(path, "completions")?)?;
    tracing::debug!(count = completions.len(), path = %path.display(), "loaded completions");
    Ok(completions)
}

/// Reference date: `--today`, then the config override, then the local date.
pub fn resolve_today(flag: Option<&str>, config: &Config) -> CliResult<NaiveDate> {
    match flag {
        Some(value) => Ok(parse_iso_date(value)?),
        None => Ok(config.today()),
    }
}

/// Config from disk, falling back to defaults when it cannot be read.
pub fn load_config() -> Config {
    Config::load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "using default config");
        Config::default()
    })
}
