use clap::Args;
use habitflow_core::dates::parse_iso_date;
use habitflow_core::{format_frequency, HabitId, ScheduleEngine};
use serde::Serialize;
use std::path::PathBuf;

use super::input::{load_config, load_habits, resolve_today, CliResult};

#[derive(Args)]
pub struct ScheduledArgs {
    /// JSON file with an array of habits
    #[arg(long)]
    habits: PathBuf,
    /// Date to check as YYYY-MM-DD (defaults to today)
    #[arg(long)]
    date: Option<String>,
}

#[derive(Serialize)]
struct HabitScheduled {
    habit_id: HabitId,
    label: String,
    scheduled: bool,
}

pub fn run(args: ScheduledArgs) -> CliResult {
    let date = match args.date.as_deref() {
        Some(value) => parse_iso_date(value)?,
        None => resolve_today(None, &load_config())?,
    };
    let engine = ScheduleEngine::new(date);
    let habits = load_habits(&args.habits)?;

    let rows: Vec<HabitScheduled> = habits
        .iter()
        .map(|habit| HabitScheduled {
            habit_id: habit.id.clone(),
            label: format_frequency(Some(habit)),
            scheduled: engine.is_due_today(habit),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
