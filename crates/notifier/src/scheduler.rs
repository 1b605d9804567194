//! Reminder timing, idempotent scheduling, and the periodic due-check.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use datebook_core::codec;
use datebook_core::models::booking::Booking;
use datebook_core::models::reminder::{Reminder, reminder_key};
use eyre::Result;
use tracing::{debug, info};

use crate::payload::build_payload;
use crate::sink::NotificationSink;
use crate::store::ReminderStore;

/// Reminders fire this many days before the booked date.
pub const REMINDER_LEAD_DAYS: i64 = 15;

/// Minutes the stored offset (+05:30) is ahead of UTC.
const OFFSET_MINUTES: i64 = 330;

/// The reminder instant for a booked date: local midnight 15 days earlier,
/// expressed in UTC. Date granularity only; the slot's own start time does
/// not participate.
pub fn reminder_time(booked_date: NaiveDate) -> DateTime<Utc> {
    let local_midnight =
        (booked_date - Duration::days(REMINDER_LEAD_DAYS)).and_time(NaiveTime::MIN);
    DateTime::from_naive_utc_and_offset(local_midnight - Duration::minutes(OFFSET_MINUTES), Utc)
}

/// The calendar date in the stored offset at instant `now`.
pub fn local_date(now: DateTime<Utc>) -> NaiveDate {
    (now.naive_utc() + Duration::minutes(OFFSET_MINUTES)).date()
}

/// Enqueue reminders for every slot of `booking`, one per booked date.
///
/// Idempotent: when reminders for this booking already exist the call is a
/// no-op unless `force` is set, which clears them first. A slot whose
/// reminder time has already passed at schedule time is skipped; the
/// due-check may still deliver for any booked date that has not passed.
/// Returns the number of reminders enqueued.
pub async fn schedule(
    store: &ReminderStore,
    sink: &dyn NotificationSink,
    booking: &Booking,
    now: DateTime<Utc>,
    force: bool,
) -> Result<usize> {
    if !sink.permission_granted() {
        debug!("Notification permission absent, skipping reminder scheduling");
        return Ok(0);
    }

    let existing = store.for_booking(booking.id).await?;
    if !existing.is_empty() {
        if !force {
            debug!("Reminders already pending for booking {}", booking.id);
            return Ok(0);
        }
        store.delete_for_booking(booking.id).await?;
    }

    let mut scheduled = 0;
    for raw in &booking.date_slots {
        let slot = codec::decode(raw);
        let remind_at = reminder_time(slot.date);
        if remind_at <= now {
            debug!("Reminder time for {} already passed, skipping", raw);
            continue;
        }
        let payload = build_payload(booking, &slot);
        let token = codec::normalize(raw);
        store
            .put(&Reminder {
                key: reminder_key(booking.id, &token),
                booking_id: booking.id,
                slot_token: token,
                booked_date: slot.date,
                remind_at,
                title: payload.title,
                body: payload.body,
            })
            .await?;
        scheduled += 1;
    }

    Ok(scheduled)
}

/// Result of one due-check sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DueCheckOutcome {
    pub delivered: usize,
    pub purged: usize,
}

/// Deliver every reminder whose time has passed while its booked date has
/// not, and purge without showing any reminder whose booked date is already
/// behind us. Deletions are collected during the scan and issued as one
/// batch afterwards.
pub async fn run_due_check(
    store: &ReminderStore,
    sink: &dyn NotificationSink,
    now: DateTime<Utc>,
) -> Result<DueCheckOutcome> {
    let today = local_date(now);
    let pending = store.all().await?;

    let mut outcome = DueCheckOutcome::default();
    let mut to_delete = Vec::new();
    for reminder in pending {
        if reminder.booked_date < today {
            to_delete.push(reminder.key);
            outcome.purged += 1;
            continue;
        }
        if reminder.remind_at <= now {
            if !sink.permission_granted() {
                // Leave it pending; it can still show once permission returns.
                continue;
            }
            sink.notify(&reminder.title, &reminder.body).await?;
            to_delete.push(reminder.key);
            outcome.delivered += 1;
        }
    }

    store.delete_keys(&to_delete).await?;
    if outcome.delivered > 0 || outcome.purged > 0 {
        info!(
            "Due check: delivered {}, purged {}",
            outcome.delivered, outcome.purged
        );
    }

    Ok(outcome)
}
