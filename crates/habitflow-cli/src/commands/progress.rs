use clap::Args;
use habitflow_core::{format_frequency, HabitId, Period, ScheduleEngine};
use serde::Serialize;
use std::path::PathBuf;

use super::input::{load_completions, load_config, load_habits, resolve_today, CliResult};

#[derive(Args)]
pub struct ProgressArgs {
    /// JSON file with an array of habits
    #[arg(long)]
    habits: PathBuf,
    /// JSON file with an array of completion records
    #[arg(long)]
    completions: PathBuf,
    /// today, week or month (defaults to progress.default_period)
    #[arg(long)]
    period: Option<Period>,
    /// Reference date as YYYY-MM-DD
    #[arg(long)]
    today: Option<String>,
}

#[derive(Serialize)]
struct HabitProgress {
    habit_id: HabitId,
    label: String,
    period: Period,
    progress: f64,
}

pub fn run(args: ProgressArgs) -> CliResult {
    let config = load_config();
    let engine = ScheduleEngine::new(resolve_today(args.today.as_deref(), &config)?);
    let period = args.period.unwrap_or(config.progress.default_period);

    let habits = load_habits(&args.habits)?;
    let completions = load_completions(&args.completions)?;

    let rows: Vec<HabitProgress> = habits
        .iter()
        .map(|habit| HabitProgress {
            habit_id: habit.id.clone(),
            label: format_frequency(Some(habit)),
            period,
            progress: engine.progress(habit, &completions, period),
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
