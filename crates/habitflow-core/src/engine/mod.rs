//! Habit schedule engine.
//!
//! Pure, synchronous functions over [`Habit`](crate::Habit) definitions and
//! [`Completion`](crate::Completion) records:
//! - schedule membership ([`is_scheduled_day`])
//! - period progress ([`calculate_habit_progress`])
//! - frequency labels ([`format_frequency`])

mod format;
mod period;
mod schedule;

pub use format::format_frequency;
pub use period::{Period, PeriodWindow};
pub use schedule::{
    calculate_habit_progress, is_scheduled_day, is_scheduled_iso, ScheduleEngine, MAX_MONTH_DAY,
};
