//! Schedule membership and period progress.
//!
//! Everything here is a pure function of its arguments. The reference date
//! ("today") is always passed in explicitly, either directly or through a
//! [`ScheduleEngine`] value, so results never depend on a hidden clock.
//!
//! Empty schedules are treated differently by the two operations:
//! - [`is_scheduled_day`] says a weekly/monthly habit with no schedule is
//!   never due.
//! - [`calculate_habit_progress`] falls back to daily rules for the same
//!   habit, counting every elapsed day.
//!
//! Both behaviours are relied upon by the client views.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::period::{Period, PeriodWindow};
use crate::dates::parse_iso_date;
use crate::error::ValidationError;
use crate::habit::{completed_dates, Completion, Frequency, Habit, Schedule, WeekdayToken};

/// Highest day-of-month a monthly schedule can name.
pub const MAX_MONTH_DAY: u32 = 31;

/// Decide whether `date` is a due occurrence of `habit`.
///
/// A missing habit is never scheduled.
pub fn is_scheduled_day(habit: Option<&Habit>, date: NaiveDate) -> bool {
    habit.is_some_and(|h| scheduled_on(h, date))
}

/// [`is_scheduled_day`] for a `YYYY-MM-DD` string.
///
/// # Errors
/// Returns [`ValidationError::InvalidDate`] when `date_iso` does not parse.
pub fn is_scheduled_iso(habit: Option<&Habit>, date_iso: &str) -> Result<bool, ValidationError> {
    Ok(is_scheduled_day(habit, parse_iso_date(date_iso)?))
}

/// Percentage (0..=100) of due occurrences within `period` that were
/// completed, as of `today`.
///
/// A missing habit yields 0.
pub fn calculate_habit_progress(
    habit: Option<&Habit>,
    completions: &[Completion],
    period: Period,
    today: NaiveDate,
) -> f64 {
    habit.map_or(0.0, |h| progress(h, completions, period, today))
}

fn scheduled_on(habit: &Habit, date: NaiveDate) -> bool {
    match (&habit.frequency, &habit.schedule) {
        (Frequency::Daily, _) => true,
        (Frequency::Weekly, Some(schedule)) if !schedule.is_empty() => {
            schedule.contains_weekday(WeekdayToken::of(date))
        }
        (Frequency::Monthly, Some(schedule)) if !schedule.is_empty() => {
            schedule.contains_month_day(date.day())
        }
        _ => false,
    }
}

fn progress(habit: &Habit, completions: &[Completion], period: Period, today: NaiveDate) -> f64 {
    let done = completed_dates(&habit.id, completions);

    let schedule = match (&habit.frequency, &habit.schedule) {
        (Frequency::Daily, _) => return daily_progress(&done, period, today),
        (Frequency::Unknown(raw), _) => {
            tracing::debug!(habit = %habit.id, frequency = %raw, "unknown frequency, progress is 0");
            return 0.0;
        }
        (_, Some(schedule)) if !schedule.is_empty() => schedule,
        _ => {
            tracing::debug!(
                habit = %habit.id,
                frequency = %habit.frequency,
                "empty schedule, falling back to daily progress"
            );
            return daily_progress(&done, period, today);
        }
    };

    match habit.frequency {
        Frequency::Weekly => weekly_progress(schedule, &done, period, today),
        Frequency::Monthly => monthly_progress(schedule, &done, today),
        _ => 0.0,
    }
}

fn daily_progress(done: &BTreeSet<NaiveDate>, period: Period, today: NaiveDate) -> f64 {
    if period == Period::Today {
        return if done.contains(&today) { 100.0 } else { 0.0 };
    }

    let window = PeriodWindow::for_period(period, today).clipped(today);
    if window.is_empty() {
        return 0.0;
    }
    let hits = done.range(window.start..=window.end).count();
    percentage(hits, window.len())
}

fn weekly_progress(
    schedule: &Schedule,
    done: &BTreeSet<NaiveDate>,
    period: Period,
    today: NaiveDate,
) -> f64 {
    let window = PeriodWindow::for_period(period, today).clipped(today);
    let scheduled: Vec<NaiveDate> = window
        .days()
        .filter(|date| schedule.contains_weekday(WeekdayToken::of(*date)))
        .collect();
    let hits = scheduled.iter().filter(|date| done.contains(date)).count();
    percentage(hits, scheduled.len())
}

/// Monthly habits are always measured over the current month up to today.
fn monthly_progress(schedule: &Schedule, done: &BTreeSet<NaiveDate>, today: NaiveDate) -> f64 {
    let scheduled = scheduled_month_dates(schedule, today);
    let hits = scheduled.iter().filter(|date| done.contains(date)).count();
    percentage(hits, scheduled.len())
}

/// Dates in `today`'s month named by a monthly schedule, up to `today`.
/// Day numbers the month does not have are skipped.
fn scheduled_month_dates(schedule: &Schedule, today: NaiveDate) -> BTreeSet<NaiveDate> {
    let Schedule::MonthDays(days) = schedule else {
        return BTreeSet::new();
    };
    days.iter()
        .filter_map(|&n| u32::try_from(n).ok())
        .filter(|n| (1..=MAX_MONTH_DAY).contains(n))
        .filter_map(|n| today.with_day(n))
        .filter(|date| *date <= today)
        .collect()
}

fn percentage(hits: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (hits as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
}

/// Engine bound to a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEngine {
    today: NaiveDate,
}

impl ScheduleEngine {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Engine anchored on the local calendar date.
    pub fn local_today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn is_scheduled_day(&self, habit: &Habit, date: NaiveDate) -> bool {
        scheduled_on(habit, date)
    }

    /// Whether `habit` is due on the reference date.
    pub fn is_due_today(&self, habit: &Habit) -> bool {
        scheduled_on(habit, self.today)
    }

    pub fn progress(&self, habit: &Habit, completions: &[Completion], period: Period) -> f64 {
        progress(habit, completions, period, self.today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::WeekdayToken::*;

    fn d(s: &str) -> NaiveDate {
        parse_iso_date(s).unwrap()
    }

    fn done(id: &str, date: &str) -> Completion {
        Completion::done(id, d(date))
    }

    #[test]
    fn test_daily_is_always_scheduled() {
        let habit = Habit::daily("h");
        for date in ["2024-02-29", "2024-03-17", "2023-12-31"] {
            assert!(is_scheduled_day(Some(&habit), d(date)));
        }
    }

    #[test]
    fn test_missing_habit() {
        assert!(!is_scheduled_day(None, d("2024-03-15")));
        assert_eq!(calculate_habit_progress(None, &[], Period::Week, d("2024-03-15")), 0.0);
    }

    #[test]
    fn test_weekly_membership() {
        let habit = Habit::weekly("h", vec![Mon, Wed, Fri]);
        assert!(is_scheduled_day(Some(&habit), d("2024-03-11")));
        assert!(!is_scheduled_day(Some(&habit), d("2024-03-12")));
        assert!(is_scheduled_day(Some(&habit), d("2024-03-13")));
        assert!(is_scheduled_day(Some(&habit), d("2024-03-15")));
        assert!(!is_scheduled_day(Some(&habit), d("2024-03-17")));
    }

    #[test]
    fn test_weekly_sunday_token() {
        let habit = Habit::weekly("h", vec![Sun]);
        assert!(is_scheduled_day(Some(&habit), d("2024-03-17")));
        assert!(!is_scheduled_day(Some(&habit), d("2024-03-16")));
    }

    #[test]
    fn test_monthly_membership_skips_missing_days() {
        let habit = Habit::monthly("h", vec![1, 15, 31]);
        assert!(is_scheduled_day(Some(&habit), d("2024-04-15")));
        assert!(!is_scheduled_day(Some(&habit), d("2024-04-30")));
        assert!(is_scheduled_day(Some(&habit), d("2024-05-31")));
        // 31 never rolls over into the next month
        let last_only = Habit::monthly("h", vec![31]);
        assert!(!is_scheduled_day(Some(&last_only), d("2024-05-01")));
        assert!(!is_scheduled_day(Some(&last_only), d("2024-02-29")));
    }

    #[test]
    fn test_empty_schedule_is_never_scheduled() {
        let weekly = Habit::weekly("h", vec![]);
        let monthly = Habit::monthly("h", vec![]);
        let mut absent = Habit::weekly("h", vec![]);
        absent.schedule = None;
        for date in ["2024-03-11", "2024-03-15"] {
            assert!(!is_scheduled_day(Some(&weekly), d(date)));
            assert!(!is_scheduled_day(Some(&monthly), d(date)));
            assert!(!is_scheduled_day(Some(&absent), d(date)));
        }
    }

    #[test]
    fn test_unknown_frequency() {
        let mut habit = Habit::daily("h");
        habit.frequency = Frequency::Unknown("yearly".into());
        assert!(!is_scheduled_day(Some(&habit), d("2024-03-15")));
        assert_eq!(
            calculate_habit_progress(Some(&habit), &[done("h", "2024-03-15")], Period::Week, d("2024-03-15")),
            0.0
        );
    }

    #[test]
    fn test_is_scheduled_iso() {
        let habit = Habit::weekly("h", vec![Fri]);
        assert_eq!(is_scheduled_iso(Some(&habit), "2024-03-15"), Ok(true));
        assert!(is_scheduled_iso(Some(&habit), "2024-3-15x").is_err());
    }

    #[test]
    fn test_daily_week_counts_elapsed_days_only() {
        let habit = Habit::daily("h");
        let completions = vec![done("h", "2024-03-11"), done("h", "2024-03-12")];
        let p = calculate_habit_progress(Some(&habit), &completions, Period::Week, d("2024-03-15"));
        assert!((p - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_ignores_future_and_previous_window() {
        let habit = Habit::daily("h");
        let completions = vec![
            done("h", "2024-03-10"), // previous week
            done("h", "2024-03-16"), // after today
            done("h", "2024-03-13"),
        ];
        let p = calculate_habit_progress(Some(&habit), &completions, Period::Week, d("2024-03-15"));
        assert!((p - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_daily_today() {
        let habit = Habit::daily("h");
        let completions = vec![done("h", "2024-03-15")];
        assert_eq!(
            calculate_habit_progress(Some(&habit), &completions, Period::Today, d("2024-03-15")),
            100.0
        );
        assert_eq!(
            calculate_habit_progress(Some(&habit), &completions, Period::Today, d("2024-03-16")),
            0.0
        );
    }

    #[test]
    fn test_daily_month_on_first_day() {
        let habit = Habit::daily("h");
        let completions = vec![done("h", "2024-03-01")];
        assert_eq!(
            calculate_habit_progress(Some(&habit), &completions, Period::Month, d("2024-03-01")),
            100.0
        );
    }

    #[test]
    fn test_weekly_progress() {
        let habit = Habit::weekly("h", vec![Mon, Wed, Fri]);
        let completions = vec![done("h", "2024-03-11"), done("h", "2024-03-13")];
        let p = calculate_habit_progress(Some(&habit), &completions, Period::Week, d("2024-03-15"));
        assert!((p - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_completion_on_unscheduled_day_is_ignored() {
        let habit = Habit::weekly("h", vec![Mon]);
        let completions = vec![done("h", "2024-03-12")];
        let p = calculate_habit_progress(Some(&habit), &completions, Period::Week, d("2024-03-15"));
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_weekly_nothing_due_yet_is_zero() {
        let habit = Habit::weekly("h", vec![Sat, Sun]);
        let p = calculate_habit_progress(Some(&habit), &[], Period::Week, d("2024-03-13"));
        assert_eq!(p, 0.0);
    }

    #[test]
    fn test_weekly_with_month_day_schedule_is_zero() {
        let mut habit = Habit::monthly("h", vec![11]);
        habit.frequency = Frequency::Weekly;
        let completions = vec![done("h", "2024-03-11")];
        assert!(!is_scheduled_day(Some(&habit), d("2024-03-11")));
        assert_eq!(
            calculate_habit_progress(Some(&habit), &completions, Period::Week, d("2024-03-15")),
            0.0
        );
    }

    #[test]
    fn test_empty_schedule_falls_back_to_daily() {
        let completions = vec![done("h", "2024-03-11"), done("h", "2024-03-12")];
        let today = d("2024-03-15");
        let daily = calculate_habit_progress(Some(&Habit::daily("h")), &completions, Period::Week, today);
        for habit in [Habit::weekly("h", vec![]), Habit::monthly("h", vec![])] {
            for period in [Period::Today, Period::Week, Period::Month] {
                let expected = calculate_habit_progress(Some(&Habit::daily("h")), &completions, period, today);
                assert_eq!(calculate_habit_progress(Some(&habit), &completions, period, today), expected);
            }
        }
        assert!((daily - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_excludes_days_missing_from_month() {
        let habit = Habit::monthly("h", vec![1, 15, 31]);
        let completions = vec![done("h", "2024-02-01")];
        let p = calculate_habit_progress(Some(&habit), &completions, Period::Month, d("2024-02-29"));
        assert!((p - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_monthly_only_counts_elapsed_days() {
        let habit = Habit::monthly("h", vec![1, 15, 31]);
        let completions = vec![done("h", "2024-03-01")];
        let p = calculate_habit_progress(Some(&habit), &completions, Period::Month, d("2024-03-10"));
        assert_eq!(p, 100.0);
    }

    #[test]
    fn test_monthly_ignores_period_argument() {
        let habit = Habit::monthly("h", vec![1, 15]);
        let completions = vec![done("h", "2024-03-01")];
        let today = d("2024-03-20");
        let month = calculate_habit_progress(Some(&habit), &completions, Period::Month, today);
        assert_eq!(calculate_habit_progress(Some(&habit), &completions, Period::Week, today), month);
        assert_eq!(calculate_habit_progress(Some(&habit), &completions, Period::Today, today), month);
    }

    #[test]
    fn test_monthly_out_of_range_days_are_ignored() {
        let habit = Habit::monthly("h", vec![0, -3, 40, 5]);
        let completions = vec![done("h", "2024-03-05")];
        let p = calculate_habit_progress(Some(&habit), &completions, Period::Month, d("2024-03-31"));
        assert_eq!(p, 100.0);
    }

    #[test]
    fn test_duplicate_completions_do_not_double_count() {
        let habit = Habit::weekly("h", vec![Mon, Wed, Fri]);
        let once = vec![done("h", "2024-03-11")];
        let twice = vec![done("h", "2024-03-11"), done("h", "2024-03-11"), done("h", "2024-03-11")];
        let today = d("2024-03-15");
        assert_eq!(
            calculate_habit_progress(Some(&habit), &once, Period::Week, today),
            calculate_habit_progress(Some(&habit), &twice, Period::Week, today)
        );
    }

    #[test]
    fn test_other_habits_and_uncompleted_records_are_ignored() {
        let habit = Habit::daily("h");
        let completions = vec![
            done("other", "2024-03-15"),
            Completion::new("h", d("2024-03-15"), false),
        ];
        assert_eq!(
            calculate_habit_progress(Some(&habit), &completions, Period::Today, d("2024-03-15")),
            0.0
        );
    }

    #[test]
    fn test_engine_wraps_free_functions() {
        let engine = ScheduleEngine::new(d("2024-03-15"));
        let habit = Habit::weekly("h", vec![Fri]);
        assert!(engine.is_due_today(&habit));
        assert!(!engine.is_scheduled_day(&habit, d("2024-03-14")));
        assert_eq!(engine.progress(&habit, &[done("h", "2024-03-15")], Period::Week), 100.0);
        assert_eq!(engine.today(), d("2024-03-15"));
    }
}
