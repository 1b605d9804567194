//! Booking collision detection.
//!
//! Slots are point-in-time keys, not intervals: a collision is exact string
//! equality between canonical tokens. Stored tokens are normalized (decoded
//! and re-encoded) before comparison so that legacy-format rows compare on
//! equal footing with newly proposed slots; the store may hold both shapes
//! at once after an in-place migration.

use std::collections::HashSet;

use uuid::Uuid;

use crate::codec;
use crate::models::{booking::Booking, date_slot::DateSlot};

/// True when none of the proposed slots collide with any existing booking.
/// `exclude_booking_id` skips a booking being edited against itself.
pub fn is_available(
    proposed: &[DateSlot],
    existing: &[Booking],
    exclude_booking_id: Option<Uuid>,
) -> bool {
    let proposed_tokens: HashSet<String> = proposed.iter().map(codec::encode).collect();
    !existing
        .iter()
        .filter(|b| Some(b.id) != exclude_booking_id)
        .flat_map(|b| b.date_slots.iter())
        .any(|raw| proposed_tokens.contains(&codec::normalize(raw)))
}

/// Reporting variant: every canonical token that collides, for diagnostics
/// and for conflict responses.
pub fn conflicting_tokens(
    proposed: &[DateSlot],
    existing: &[Booking],
    exclude_booking_id: Option<Uuid>,
) -> Vec<String> {
    let proposed_tokens: HashSet<String> = proposed.iter().map(codec::encode).collect();
    let mut conflicts = Vec::new();
    for booking in existing.iter().filter(|b| Some(b.id) != exclude_booking_id) {
        for raw in &booking.date_slots {
            let normalized = codec::normalize(raw);
            if proposed_tokens.contains(&normalized) && !conflicts.contains(&normalized) {
                conflicts.push(normalized);
            }
        }
    }
    conflicts
}
