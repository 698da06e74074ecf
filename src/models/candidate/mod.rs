// Candidate module
// A proposed meeting time slot, timed or all-day

use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::utils::date::{end_of_day, start_of_day};

/// Minimum duration of a timed candidate slot, in minutes.
pub const MIN_SLOT_MINUTES: i64 = 30;

/// A proposed time slot for the event.
///
/// Serialized into the shareable token with camelCase keys and RFC 3339
/// instants so tokens stay interchangeable with earlier builds. `isAllDay`
/// may be omitted in a token, which decodes as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub start_date: DateTime<Local>,
    pub end_date: DateTime<Local>,
    #[serde(default)]
    pub is_all_day: bool,
}

impl Candidate {
    /// Create a timed candidate slot with validation.
    pub fn new(
        id: impl Into<String>,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Self, String> {
        let candidate = Self {
            id: id.into(),
            start_date: start,
            end_date: end,
            is_all_day: false,
        };
        candidate.validate()?;
        Ok(candidate)
    }

    /// Create an all-day candidate spanning the whole of `day`
    /// (00:00:00.000 through 23:59:59.999).
    pub fn all_day(id: impl Into<String>, day: NaiveDate) -> Self {
        Self {
            id: id.into(),
            start_date: start_of_day(day),
            end_date: end_of_day(day),
            is_all_day: true,
        }
    }

    /// Validate the slot bounds.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Candidate id cannot be empty".to_string());
        }

        if self.end_date <= self.start_date {
            return Err("Candidate end time must be after start time".to_string());
        }

        // All-day slots are exempt from the minimum duration
        if !self.is_all_day && self.duration() < Duration::minutes(MIN_SLOT_MINUTES) {
            return Err(format!(
                "Candidate slots must span at least {} minutes",
                MIN_SLOT_MINUTES
            ));
        }

        Ok(())
    }

    /// Get the duration of the slot.
    pub fn duration(&self) -> Duration {
        self.end_date - self.start_date
    }

    /// The calendar day the slot starts on.
    pub fn day(&self) -> NaiveDate {
        self.start_date.date_naive()
    }

    /// True if this is an all-day slot on the given calendar day.
    pub fn is_all_day_on(&self, day: NaiveDate) -> bool {
        self.is_all_day && self.day() == day
    }
}
