//! Habit definitions as supplied by the API layer.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::weekday::WeekdayToken;

/// Opaque habit identifier.
///
/// The backend hands out integer primary keys while some clients send
/// string ids, so both are accepted and compared as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HabitId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for HabitId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for HabitId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => HabitId(s),
            RawId::Int(n) => HabitId(n.to_string()),
        })
    }
}

/// Habit cadence.
///
/// A null or empty value on the wire means daily.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    /// Anything else the backend stored, kept verbatim for display
    Unknown(String),
}

impl Frequency {
    pub fn as_str(&self) -> &str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Unknown(raw) => raw.as_str(),
        }
    }
}

impl From<String> for Frequency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | "daily" => Frequency::Daily,
            "weekly" => Frequency::Weekly,
            "monthly" => Frequency::Monthly,
            _ => Frequency::Unknown(value),
        }
    }
}

impl From<Option<String>> for Frequency {
    fn from(value: Option<String>) -> Self {
        value.map_or(Frequency::Daily, Frequency::from)
    }
}

impl From<Frequency> for String {
    fn from(value: Frequency) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which days a weekly or monthly habit is due.
///
/// Weekly habits carry weekday tokens, monthly habits carry day-of-month
/// numbers. Month days outside `1..=31` are kept as sent and simply never
/// match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schedule {
    Weekdays(Vec<WeekdayToken>),
    MonthDays(Vec<i64>),
}

impl Schedule {
    pub fn is_empty(&self) -> bool {
        match self {
            Schedule::Weekdays(days) => days.is_empty(),
            Schedule::MonthDays(days) => days.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Schedule::Weekdays(days) => days.len(),
            Schedule::MonthDays(days) => days.len(),
        }
    }

    /// False for month-day schedules.
    pub fn contains_weekday(&self, token: WeekdayToken) -> bool {
        matches!(self, Schedule::Weekdays(days) if days.contains(&token))
    }

    /// False for weekday schedules.
    pub fn contains_month_day(&self, day: u32) -> bool {
        matches!(self, Schedule::MonthDays(days) if days.contains(&i64::from(day)))
    }
}

/// A recurring habit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub frequency: Frequency,
    #[serde(default)]
    pub schedule: Option<Schedule>,
}

impl Habit {
    pub fn daily(id: impl Into<HabitId>) -> Self {
        Self {
            id: id.into(),
            name: None,
            frequency: Frequency::Daily,
            schedule: None,
        }
    }

    pub fn weekly(id: impl Into<HabitId>, days: Vec<WeekdayToken>) -> Self {
        Self {
            id: id.into(),
            name: None,
            frequency: Frequency::Weekly,
            schedule: Some(Schedule::Weekdays(days)),
        }
    }

    pub fn monthly(id: impl Into<HabitId>, days: Vec<i64>) -> Self {
        Self {
            id: id.into(),
            name: None,
            frequency: Frequency::Monthly,
            schedule: Some(Schedule::MonthDays(days)),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// True when the schedule is absent or has no entries.
    pub fn has_empty_schedule(&self) -> bool {
        self.schedule.as_ref().map_or(true, Schedule::is_empty)
    }
}
