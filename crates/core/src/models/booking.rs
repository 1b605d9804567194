use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codec;
use crate::errors::{BookingError, BookingResult};
use crate::models::date_slot::DateSlot;

/// A persisted booking. `date_slots` holds the stored tokens verbatim
/// (possibly in a legacy shape) and is decoded on demand so that the
/// availability check can normalize rows migrated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub date_slots: Vec<String>,
    pub customer_name: String,
    pub phone_number: String,
    pub price: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn slots(&self) -> Vec<DateSlot> {
        self.date_slots.iter().map(|t| codec::decode(t)).collect()
    }
}

/// One selected date in a draft, with its optional `HH:mm` start time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftSlot {
    pub date: NaiveDate,
    pub time: Option<String>,
}

impl DraftSlot {
    pub fn to_slot(&self) -> DateSlot {
        DateSlot::new(self.date, self.time.as_deref().unwrap_or(""))
    }
}

/// Candidate field values for a booking, supplied by the form layer to
/// create/update. Validated locally before any store call is attempted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDraft {
    pub slots: Vec<DraftSlot>,
    pub customer_name: String,
    pub phone_number: String,
    pub price: f64,
    #[serde(default)]
    pub notes: String,
}

impl BookingDraft {
    pub fn validate(&self) -> BookingResult<()> {
        if self.slots.is_empty() {
            return Err(BookingError::Validation(
                "At least one date must be selected".to_string(),
            ));
        }
        if self.customer_name.trim().is_empty() {
            return Err(BookingError::Validation(
                "Customer name must not be empty".to_string(),
            ));
        }
        if !is_valid_phone(&self.phone_number) {
            return Err(BookingError::Validation(
                "Phone number must be a 10-digit mobile number".to_string(),
            ));
        }
        if self.price <= 0.0 {
            return Err(BookingError::Validation(
                "Price must be greater than zero".to_string(),
            ));
        }
        if !has_at_most_two_decimals(self.price) {
            return Err(BookingError::Validation(
                "Price must have at most two decimal places".to_string(),
            ));
        }
        Ok(())
    }

    pub fn to_slots(&self) -> Vec<DateSlot> {
        self.slots.iter().map(DraftSlot::to_slot).collect()
    }

    /// Canonical tokens for every slot in the draft.
    pub fn tokens(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|s| codec::encode(&s.to_slot()))
            .collect()
    }
}

/// 10-digit mobile number, first digit 6-9.
pub fn is_valid_phone(phone: &str) -> bool {
    let b = phone.as_bytes();
    b.len() == 10 && b.iter().all(|c| c.is_ascii_digit()) && (b'6'..=b'9').contains(&b[0])
}

fn has_at_most_two_decimals(price: f64) -> bool {
    let scaled = price * 100.0;
    (scaled - scaled.round()).abs() < 1e-6
}

/// One decoded slot as shown on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotView {
    pub date: NaiveDate,
    pub time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub slots: Vec<SlotView>,
    pub customer_name: String,
    pub phone_number: String,
    pub price: f64,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        let slots = booking
            .slots()
            .iter()
            .map(|s| SlotView {
                date: s.date,
                time: s.time_label(),
            })
            .collect();
        Self {
            id: booking.id,
            slots,
            customer_name: booking.customer_name,
            phone_number: booking.phone_number,
            price: booking.price,
            notes: booking.notes,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAvailabilityRequest {
    pub slots: Vec<DraftSlot>,
    pub exclude_booking_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckAvailabilityResponse {
    pub available: bool,
    pub conflicts: Vec<String>,
}
