//! Canonical weekday table.
//!
//! Weekly schedules are stored as lowercase tokens (`mon` .. `sun`). The
//! numeric index follows the JavaScript `Date::getDay` convention used by
//! the web client: Monday is 1 through Saturday 6, and Sunday is 0 rather
//! than 7. Both schedule matching and frequency labels read this table.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// A weekday as it appears in a weekly habit schedule.
///
/// Serialized as the table key; parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WeekdayToken {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

/// One row of the weekday table.
#[derive(Debug, Clone, Copy)]
pub struct WeekdayEntry {
    pub token: WeekdayToken,
    /// Schedule token as stored on the wire
    pub key: &'static str,
    /// Day index, Sunday = 0
    pub index: u32,
    /// Short display label
    pub label: &'static str,
}

/// Rows are ordered Monday first; `WeekdayToken as usize` is the row.
pub const WEEKDAYS: [WeekdayEntry; 7] = [
    WeekdayEntry { token: WeekdayToken::Mon, key: "mon", index: 1, label: "Mon" },
    WeekdayEntry { token: WeekdayToken::Tue, key: "tue", index: 2, label: "Tue" },
    WeekdayEntry { token: WeekdayToken::Wed, key: "wed", index: 3, label: "Wed" },
    WeekdayEntry { token: WeekdayToken::Thu, key: "thu", index: 4, label: "Thu" },
    WeekdayEntry { token: WeekdayToken::Fri, key: "fri", index: 5, label: "Fri" },
    WeekdayEntry { token: WeekdayToken::Sat, key: "sat", index: 6, label: "Sat" },
    WeekdayEntry { token: WeekdayToken::Sun, key: "sun", index: 0, label: "Sun" },
];

impl WeekdayToken {
    /// All tokens, Monday first.
    pub const ALL: [WeekdayToken; 7] = {
        let mut all = [WeekdayToken::Mon; 7];
        let mut row = 0;
        while row < WEEKDAYS.len() {
            all[row] = WEEKDAYS[row].token;
            row += 1;
        }
        all
    };

    fn entry(self) -> &'static WeekdayEntry {
        &WEEKDAYS[self as usize]
    }

    /// Look up a token by its Sunday-zero index.
    pub fn from_index(index: u32) -> Option<Self> {
        WEEKDAYS.iter().find(|e| e.index == index).map(|e| e.token)
    }

    /// Token for the weekday of `date`.
    pub fn of(date: NaiveDate) -> Self {
        let index = date.weekday().num_days_from_sunday();
        // Table rows start on Monday, so Sunday (0) is the last row.
        WEEKDAYS[((index + 6) % 7) as usize].token
    }

    /// Sunday-zero day index.
    pub fn index(self) -> u32 {
        self.entry().index
    }

    /// Lowercase wire token.
    pub fn key(self) -> &'static str {
        self.entry().key
    }

    /// Short display label, e.g. `Mon`.
    pub fn label(self) -> &'static str {
        self.entry().label
    }
}

impl fmt::Display for WeekdayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WeekdayToken {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        WEEKDAYS
            .iter()
            .find(|e| e.key == needle)
            .map(|e| e.token)
            .ok_or_else(|| ValidationError::InvalidValue {
                field: "schedule".into(),
                message: format!("unknown weekday token '{s}'"),
            })
    }
}

impl Serialize for WeekdayToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for WeekdayToken {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
