//! Dashboard aggregates built on the schedule engine.
//!
//! This module provides the cross-habit views the client renders next to
//! the per-habit progress rings: today's due/done summary, a rolling
//! completion-rate history, and the week calendar cells.

mod calendar;
mod history;
mod summary;

pub use calendar::{week_calendar, CalendarDay, DayStatus};
pub use history::{completion_history, DailyRate};
pub use summary::{today_summary, TodaySummary};

/// Longest completion history the dashboard will build.
pub const MAX_HISTORY_DAYS: u32 = 3660;

/// Furthest the week calendar may move from the current week.
pub const MAX_WEEK_OFFSET: i64 = 5200;
