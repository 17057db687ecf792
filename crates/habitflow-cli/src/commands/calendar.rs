use clap::Args;
use habitflow_core::{week_calendar, HabitId, MAX_WEEK_OFFSET};
use std::path::PathBuf;

use super::input::{load_completions, load_config, load_habits, resolve_today, CliResult};

#[derive(Args)]
pub struct CalendarArgs {
    /// JSON file with an array of habits
    #[arg(long)]
    habits: PathBuf,
    /// JSON file with an array of completion records
    #[arg(long)]
    completions: PathBuf,
    /// Show a single habit instead of the aggregate
    #[arg(long)]
    habit: Option<String>,
    /// Weeks away from the current one (defaults to dashboard.week_offset)
    #[arg(
        long,
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i64).range(-MAX_WEEK_OFFSET..=MAX_WEEK_OFFSET)
    )]
    week_offset: Option<i64>,
    /// Reference date as YYYY-MM-DD
    #[arg(long)]
    today: Option<String>,
}

pub fn run(args: CalendarArgs) -> CliResult {
    let config = load_config();
    let today = resolve_today(args.today.as_deref(), &config)?;
    let week_offset = args.week_offset.unwrap_or(config.dashboard.week_offset);

    let habits = load_habits(&args.habits)?;
    let completions = load_completions(&args.completions)?;

    let focus = args.habit.map(HabitId::new);
    if let Some(id) = &focus {
        if !habits.iter().any(|h| &h.id == id) {
            tracing::warn!(habit = %id, "unknown habit, showing all habits");
        }
    }

    let days = week_calendar(&habits, &completions, today, week_offset, focus.as_ref())?;
    println!("{}", serde_json::to_string_pretty(&days)?);
    Ok(())
}
