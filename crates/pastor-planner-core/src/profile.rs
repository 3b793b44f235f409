//! User profile and weekday indexing.
//!
//! Weekdays are indexed 0-6 starting on Sunday. The same index is used for
//! the profile's rest day and for the columns of the weekly calendar.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Weekday names by index, Sunday first.
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Weekday index (0 = Sunday) of a calendar date.
pub fn weekday_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Name for a weekday index, `None` outside 0-6.
pub fn weekday_name(index: u8) -> Option<&'static str> {
    WEEKDAY_NAMES.get(index as usize).copied()
}

/// Parse a weekday given as an index (`"1"`) or a name (`"monday"`, `"mon"`).
pub fn parse_weekday(input: &str) -> Result<u8, ValidationError> {
    let trimmed = input.trim();
    if let Ok(index) = trimmed.parse::<i64>() {
        return check_rest_day(index);
    }
    if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::RestDayOutOfRange(i64::MAX));
    }

    let lower = trimmed.to_ascii_lowercase();
    WEEKDAY_NAMES
        .iter()
        .position(|name| {
            let name = name.to_ascii_lowercase();
            lower.len() >= 3 && name.starts_with(&lower)
        })
        .map(|i| i as u8)
        .ok_or_else(|| ValidationError::invalid("rest_day", format!("unknown weekday '{input}'")))
}

fn check_rest_day(index: impl Into<i64>) -> Result<u8, ValidationError> {
    let index = index.into();
    u8::try_from(index)
        .ok()
        .filter(|day| *day <= 6)
        .ok_or(ValidationError::RestDayOutOfRange(index))
}

/// The single user's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "ProfileRecord")]
pub struct UserProfile {
    pub name: String,
    rest_day: u8,
}

#[derive(Deserialize)]
struct ProfileRecord {
    name: String,
    rest_day: u8,
}

impl TryFrom<ProfileRecord> for UserProfile {
    type Error = ValidationError;

    fn try_from(record: ProfileRecord) -> Result<Self, Self::Error> {
        UserProfile::new(record.name, record.rest_day)
    }
}

impl UserProfile {
    /// Create a profile; `rest_day` must be in 0-6.
    pub fn new(name: impl Into<String>, rest_day: u8) -> Result<Self, ValidationError> {
        Ok(Self {
            name: name.into(),
            rest_day: check_rest_day(rest_day)?,
        })
    }

    pub fn rest_day(&self) -> u8 {
        self.rest_day
    }

    pub fn rest_day_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.rest_day as usize]
    }

    pub fn set_rest_day(&mut self, rest_day: u8) -> Result<(), ValidationError> {
        self.rest_day = check_rest_day(rest_day)?;
        Ok(())
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether `date` falls on the rest day.
    pub fn is_rest_day(&self, date: NaiveDate) -> bool {
        weekday_index(date) == self.rest_day
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Pastor".to_string(),
            rest_day: 1,
        }
    }
}
