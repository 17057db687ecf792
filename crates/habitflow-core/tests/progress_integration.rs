//! Integration tests for habit progress.
//!
//! Covers the full path from API-shaped JSON payloads through
//! normalisation into schedule membership and period progress.

use chrono::NaiveDate;
use habitflow_core::{
    calculate_habit_progress, format_frequency, is_scheduled_day, normalize_completions,
    CompletionPayload, Habit, Period, ScheduleEngine,
};

fn d(s: &str) -> NaiveDate {
    habitflow_core::dates::parse_iso_date(s).unwrap()
}

fn habit(json: &str) -> Habit {
    serde_json::from_str(json).unwrap()
}

fn completions(json: &str) -> Vec<habitflow_core::Completion> {
    let payloads: Vec<CompletionPayload> = serde_json::from_str(json).unwrap();
    normalize_completions(payloads)
}

#[test]
fn test_daily_week_progress_counts_elapsed_days() {
    let habit = habit(r#"{"id": 1, "name": "Read", "frequency": "daily"}"#);
    let records = completions(
        r#"[
            {"HabitId": 1, "date": "2024-03-11", "completed": true},
            {"HabitId": 1, "date": "2024-03-12", "completed": true}
        ]"#,
    );

    let progress = calculate_habit_progress(Some(&habit), &records, Period::Week, d("2024-03-15"));
    assert!((progress - 40.0).abs() < 1e-9, "got {progress}");
}

#[test]
fn test_weekly_scheduled_days_progress() {
    let habit = habit(r#"{"id": 2, "frequency": "weekly", "schedule": ["mon", "wed", "fri"]}"#);
    let records = completions(
        r#"[
            {"Habit": {"id": 2, "name": "Gym"}, "date": "2024-03-11", "completed": true},
            {"Habit": {"id": 2, "name": "Gym"}, "date": "2024-03-13", "completed": true}
        ]"#,
    );

    let progress = calculate_habit_progress(Some(&habit), &records, Period::Week, d("2024-03-15"));
    assert!((progress - 66.666_666_666).abs() < 1e-6, "got {progress}");
    assert_eq!(format_frequency(Some(&habit)), "3×/week (Mon, Wed, Fri)");
}

#[test]
fn test_monthly_february_excludes_day_31() {
    let habit = habit(r#"{"id": 3, "frequency": "monthly", "schedule": [1, 15, 31]}"#);
    let records = completions(
        r#"[
            {"Habit": {"id": 3}, "HabitCompletion": {"date": "2023-02-01", "completed": true}},
            {"Habit": {"id": 3}, "HabitCompletion": {"date": "2023-02-15", "completed": true}}
        ]"#,
    );

    let engine = ScheduleEngine::new(d("2023-02-28"));
    assert_eq!(engine.progress(&habit, &records, Period::Month), 100.0);
    assert!(!is_scheduled_day(Some(&habit), d("2023-03-03")));
    assert!(is_scheduled_day(Some(&habit), d("2023-03-31")));
    assert_eq!(format_frequency(Some(&habit)), "3×/month (1, 15, 31)");
}

#[test]
fn test_day_31_never_scheduled_in_thirty_day_months() {
    let habit = Habit::monthly("h", vec![31]);
    for date in ["2024-04-30", "2024-06-30", "2024-09-30", "2024-11-30"] {
        let date = d(date);
        assert!(!is_scheduled_day(Some(&habit), date));
        assert_eq!(
            calculate_habit_progress(Some(&habit), &[], Period::Month, date),
            0.0
        );
    }
}

#[test]
fn test_empty_weekly_schedule_inconsistency() {
    let weekly = habit(r#"{"id": 4, "frequency": "weekly", "schedule": []}"#);
    let daily = habit(r#"{"id": 4, "frequency": "daily"}"#);
    let records = completions(
        r#"[
            {"habitId": 4, "date": "2024-03-11", "completed": true},
            {"habitId": 4, "date": "2024-03-14", "completed": true}
        ]"#,
    );
    let today = d("2024-03-15");

    for period in [Period::Today, Period::Week, Period::Month] {
        assert_eq!(
            calculate_habit_progress(Some(&weekly), &records, period, today),
            calculate_habit_progress(Some(&daily), &records, period, today),
        );
    }
    assert!(!is_scheduled_day(Some(&weekly), today));
    assert_eq!(format_frequency(Some(&weekly)), "Weekly (no schedule)");
}

#[test]
fn test_mixed_payload_shapes_for_same_day_count_once() {
    let habit = habit(r#"{"id": 5, "frequency": "daily"}"#);
    let records = completions(
        r#"[
            {"habitId": 5, "date": "2024-03-15", "completed": true},
            {"HabitId": "5", "date": "2024-03-15", "completed": true},
            {"habit": {"id": 5}, "HabitCompletion": {"date": "2024-03-15", "completed": true}},
            {"habitId": 5, "date": "2024-03-14", "completed": false}
        ]"#,
    );
    assert_eq!(records.len(), 4);

    let progress = calculate_habit_progress(Some(&habit), &records, Period::Week, d("2024-03-15"));
    assert!((progress - 20.0).abs() < 1e-9);
}

#[test]
fn test_month_progress_across_year_boundary() {
    let habit = Habit::daily("h");
    let records = vec![
        habitflow_core::Completion::done("h", d("2023-12-31")),
        habitflow_core::Completion::done("h", d("2024-01-01")),
    ];
    let progress = calculate_habit_progress(Some(&habit), &records, Period::Month, d("2024-01-02"));
    assert_eq!(progress, 50.0);

    // The ISO week of 2024-01-02 started on Monday 2024-01-01
    let progress = calculate_habit_progress(Some(&habit), &records, Period::Week, d("2024-01-02"));
    assert_eq!(progress, 50.0);
}
