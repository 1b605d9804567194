use datebook_core::models::{booking::Booking, date_slot::DateSlot};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderPayload {
    pub title: String,
    pub body: String,
}

/// Assemble the user-facing payload for one slot of a booking. The body
/// lists every booked date, marking the one this reminder concerns.
pub fn build_payload(booking: &Booking, target: &DateSlot) -> ReminderPayload {
    let title = format!(
        "Booking reminder: {} on {}",
        booking.customer_name,
        target.date.format("%d %b %Y")
    );

    let dates = booking
        .slots()
        .iter()
        .map(|slot| {
            if slot == target {
                format!("{} {} *", slot.date.format("%d %b"), slot.time_label())
            } else {
                format!("{} {}", slot.date.format("%d %b"), slot.time_label())
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    let mut body = format!(
        "{} is booked for {} (marked *). Price: Rs {:.2}.",
        booking.customer_name, dates, booking.price
    );
    if !booking.notes.trim().is_empty() {
        body.push_str(&format!(" Notes: {}", booking.notes.trim()));
    }

    ReminderPayload { title, body }
}
