//! Human-readable frequency labels.

use crate::habit::{Frequency, Habit, Schedule};

/// Render a habit's cadence, e.g. `Daily`, `3×/week (Mon, Wed, Fri)` or
/// `2×/month (1, 15)`. A missing habit renders as an empty string.
pub fn format_frequency(habit: Option<&Habit>) -> String {
    let Some(habit) = habit else {
        return String::new();
    };

    let schedule = habit.schedule.as_ref().filter(|s| !s.is_empty());
    match (&habit.frequency, schedule) {
        (Frequency::Daily, _) => "Daily".to_string(),
        (Frequency::Weekly, None) => "Weekly (no schedule)".to_string(),
        (Frequency::Monthly, None) => "Monthly (no schedule)".to_string(),
        (Frequency::Weekly, Some(schedule)) => {
            format!("{}×/week ({})", schedule.len(), schedule_labels(schedule))
        }
        (Frequency::Monthly, Some(schedule)) => {
            format!("{}×/month ({})", schedule.len(), schedule_labels(schedule))
        }
        (Frequency::Unknown(raw), _) => raw.clone(),
    }
}

/// Weekday labels keep the stored order; month days are listed ascending.
fn schedule_labels(schedule: &Schedule) -> String {
    match schedule {
        Schedule::Weekdays(days) => days
            .iter()
            .map(|token| token.label())
            .collect::<Vec<_>>()
            .join(", "),
        Schedule::MonthDays(days) => {
            let mut sorted = days.clone();
            sorted.sort_unstable();
            sorted
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::WeekdayToken::*;

    #[test]
    fn test_daily() {
        assert_eq!(format_frequency(Some(&Habit::daily("h"))), "Daily");
    }

    #[test]
    fn test_weekly_uses_table_labels() {
        let habit = Habit::weekly("h", vec![Mon, Wed, Fri]);
        assert_eq!(format_frequency(Some(&habit)), "3×/week (Mon, Wed, Fri)");

        let habit = Habit::weekly("h", vec![Sun, Tue]);
        assert_eq!(format_frequency(Some(&habit)), "2×/week (Sun, Tue)");
    }

    #[test]
    fn test_monthly_sorted() {
        let habit = Habit::monthly("h", vec![15, 1]);
        assert_eq!(format_frequency(Some(&habit)), "2×/month (1, 15)");
    }

    #[test]
    fn test_empty_schedules() {
        assert_eq!(
            format_frequency(Some(&Habit::weekly("h", vec![]))),
            "Weekly (no schedule)"
        );
        let mut monthly = Habit::monthly("h", vec![]);
        monthly.schedule = None;
        assert_eq!(format_frequency(Some(&monthly)), "Monthly (no schedule)");
    }

    #[test]
    fn test_unknown_and_missing() {
        let mut habit = Habit::daily("h");
        habit.frequency = Frequency::Unknown("fortnightly".into());
        assert_eq!(format_frequency(Some(&habit)), "fortnightly");
        assert_eq!(format_frequency(None), "");
    }
}
