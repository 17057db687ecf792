use clap::Args;
use habitflow_core::{
    completion_history, today_summary, DailyRate, TodaySummary, MAX_HISTORY_DAYS,
};
use serde::Serialize;
use std::path::PathBuf;

use super::input::{load_completions, load_config, load_habits, resolve_today, CliResult};

#[derive(Args)]
pub struct SummaryArgs {
    /// JSON file with an array of habits
    #[arg(long)]
    habits: PathBuf,
    /// JSON file with an array of completion records
    #[arg(long)]
    completions: PathBuf,
    /// Reference date as YYYY-MM-DD
    #[arg(long)]
    today: Option<String>,
    /// History length in days (defaults to dashboard.history_days)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_HISTORY_DAYS)))]
    days: Option<u32>,
}

#[derive(Serialize)]
struct SummaryReport {
    today: TodaySummary,
    history: Vec<DailyRate>,
}

pub fn run(args: SummaryArgs) -> CliResult {
    let config = load_config();
    let today = resolve_today(args.today.as_deref(), &config)?;
    let days = args.days.unwrap_or(config.dashboard.history_days);

    let habits = load_habits(&args.habits)?;
    let completions = load_completions(&args.completions)?;

    let report = SummaryReport {
        today: today_summary(&habits, &completions, today),
        history: completion_history(&habits, &completions, today, days)?,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
