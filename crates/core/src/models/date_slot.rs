use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One occupied calendar date within a booking, with its wall-clock start
/// time. All times are wall-clock in the single fixed UTC+05:30 offset the
/// system stores data in; a `DateSlot` itself carries no timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateSlot {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
}

impl DateSlot {
    /// Build a slot from a calendar date and a raw `HH:mm` time string.
    /// Seconds are dropped; an empty or malformed time means midnight.
    pub fn new(date: NaiveDate, raw_time: &str) -> Self {
        Self {
            date,
            start_time: crate::codec::sanitize_time(raw_time),
        }
    }

    pub fn at_midnight(date: NaiveDate) -> Self {
        Self {
            date,
            start_time: NaiveTime::MIN,
        }
    }

    /// The `HH:mm` label shown to users and embedded in tokens.
    pub fn time_label(&self) -> String {
        self.start_time.format("%H:%M").to_string()
    }
}
