use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pending reminder for one booked date slot, persisted in the local
/// reminder store until delivered or purged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    /// `"{booking_id}:{slot_token}"`; one reminder per booking slot.
    pub key: String,
    pub booking_id: Uuid,
    pub slot_token: String,
    pub booked_date: NaiveDate,
    pub remind_at: DateTime<Utc>,
    pub title: String,
    pub body: String,
}

pub fn reminder_key(booking_id: Uuid, slot_token: &str) -> String {
    format!("{booking_id}:{slot_token}")
}
