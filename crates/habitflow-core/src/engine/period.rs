//! Period windows for progress calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::dates::{days_between, month_end, month_start, week_start};
use crate::error::ValidationError;

/// Range a progress percentage is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Today,
    #[default]
    Week,
    Month,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Today => "today",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Period::Today),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            _ => Err(ValidationError::InvalidPeriod(s.to_string())),
        }
    }
}

/// Inclusive date range for a period, anchored on a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    /// Full window containing `today`: Monday..Sunday for a week, first..last
    /// day for a month, or the single day.
    pub fn for_period(period: Period, today: NaiveDate) -> Self {
        match period {
            Period::Today => Self {
                start: today,
                end: today,
            },
            Period::Week => {
                let start = week_start(today);
                Self {
                    start,
                    end: start + chrono::Duration::days(6),
                }
            }
            Period::Month => Self {
                start: month_start(today),
                end: month_end(today),
            },
        }
    }

    /// The window cut off at `today`; future days never count.
    pub fn clipped(self, today: NaiveDate) -> Self {
        Self {
            start: self.start,
            end: self.end.min(today),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        days_between(self.start, self.end)
    }

    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start).num_days() as usize + 1
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
