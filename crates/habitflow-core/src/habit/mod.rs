//! Habit and completion data model.
//!
//! These are the shapes supplied by the persistence/API layer. The engine
//! only reads them.

mod completion;
mod feed;
mod model;
mod weekday;

pub use completion::{
    completed_dates, normalize_completions, Completion, CompletionJoin, CompletionPayload,
    HabitRef,
};
pub use feed::{completions_from_json, habits_from_json};
pub use model::{Frequency, Habit, HabitId, Schedule};
pub use weekday::{WeekdayEntry, WeekdayToken, WEEKDAYS};
