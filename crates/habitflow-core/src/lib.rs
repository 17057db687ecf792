//! # Habitflow Core Library
//!
//! This library provides the habit scheduling logic behind the Habitflow
//! tracker. The web client and the standalone CLI are both thin layers over
//! the same functions.
//!
//! ## Architecture
//!
//! - **Habit model**: habit definitions, completion records, and
//!   normalisation of the API's heterogeneous completion payloads
//! - **Engine**: pure schedule membership, period progress and frequency
//!   labels; the reference date is always an explicit argument
//! - **Dashboard**: cross-habit aggregates (today summary, history, week
//!   calendar) built on the engine
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`ScheduleEngine`]: engine bound to a reference date
//! - [`calculate_habit_progress`]: completion percentage over a period
//! - [`is_scheduled_day`]: whether a date is due for a habit
//! - [`Config`]: Application configuration management

pub mod dashboard;
pub mod dates;
pub mod engine;
pub mod error;
pub mod habit;
pub mod storage;

pub use dashboard::{
    completion_history, today_summary, week_calendar, CalendarDay, DailyRate, DayStatus,
    TodaySummary, MAX_HISTORY_DAYS, MAX_WEEK_OFFSET,
};
pub use engine::{
    calculate_habit_progress, format_frequency, is_scheduled_day, is_scheduled_iso, Period,
    PeriodWindow, ScheduleEngine,
};
pub use error::{ConfigError, CoreError, ValidationError};
pub use habit::{
    completions_from_json, habits_from_json, normalize_completions, Completion,
    CompletionPayload, Frequency, Habit, HabitId, Schedule, WeekdayToken,
};
pub use storage::Config;
