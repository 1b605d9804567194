//! Consecutive-date selection state machine.
//!
//! Tracks the set of calendar dates a user is assembling into one booking
//! before the customer form is shown. Dates must form one contiguous run;
//! clicking a selected date toggles it off; clicking a date owned by an
//! existing booking opens that booking instead of mutating the selection.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::codec;
use crate::models::booking::Booking;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Date accepted into the selection.
    Added,
    /// Date was already selected and has been toggled off.
    Removed,
    /// Date belongs to this booking; the caller should open its detail view.
    OpenBooking(Uuid),
    /// Adding the date would break contiguity; selection left unchanged.
    RejectedNonContiguous,
}

/// In-progress date selection. Dates are kept sorted ascending; the empty
/// selection is the initial state and the state after `clear`.
#[derive(Debug, Clone, Default)]
pub struct DateSelection {
    dates: Vec<NaiveDate>,
}

impl DateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Reset to empty. Called when the enclosing form closes or submits.
    pub fn clear(&mut self) {
        self.dates.clear();
    }

    /// Handle a calendar click on `date`. `booked` maps already-booked dates
    /// to their owning booking, built from the current booking set.
    pub fn select(
        &mut self,
        date: NaiveDate,
        booked: &HashMap<NaiveDate, Uuid>,
    ) -> SelectionOutcome {
        if let Some(owner) = booked.get(&date) {
            return SelectionOutcome::OpenBooking(*owner);
        }
        if let Some(pos) = self.dates.iter().position(|d| *d == date) {
            // Toggle off. Contiguity is enforced at add time only; removing
            // an interior date leaves the remainder as-is.
            self.dates.remove(pos);
            return SelectionOutcome::Removed;
        }
        let mut candidate = self.dates.clone();
        candidate.push(date);
        candidate.sort();
        let contiguous = candidate
            .windows(2)
            .all(|pair| pair[1] - pair[0] == Duration::days(1));
        if !contiguous {
            return SelectionOutcome::RejectedNonContiguous;
        }
        self.dates = candidate;
        SelectionOutcome::Added
    }
}

/// Index of booked calendar dates to their owning booking id, for routing
/// clicks on booked dates. First booking wins when rows overlap (which the
/// availability check prevents for well-formed data).
pub fn booked_date_index(bookings: &[Booking]) -> HashMap<NaiveDate, Uuid> {
    let mut index = HashMap::new();
    for booking in bookings {
        for raw in &booking.date_slots {
            index.entry(codec::decode(raw).date).or_insert(booking.id);
        }
    }
    index
}
