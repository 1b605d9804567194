//! Booking repository: the sole writer of booking rows.
//!
//! Create and update run the availability check before writing, so the
//! no-double-booking invariant is enforced here at the application level.
//! The check and the write are two round trips with no isolation between
//! them; a second client writing between them is not observed. Accepted for
//! single-tenant scale; a store-enforced uniqueness constraint on a derived
//! (date, time) column would close the race.

use chrono::Utc;
use datebook_core::availability;
use datebook_core::codec;
use datebook_core::errors::{BookingError, BookingResult};
use datebook_core::models::booking::{Booking, BookingDraft};
use datebook_core::models::date_slot::DateSlot;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::models::DbBooking;

fn store_err(err: sqlx::Error) -> BookingError {
    BookingError::StoreUnavailable(eyre::Report::new(err))
}

fn not_found(id: Uuid) -> BookingError {
    BookingError::NotFound(format!("Booking with ID {} not found", id))
}

/// All bookings, newest first.
pub async fn fetch_all(pool: &Pool<Postgres>) -> BookingResult<Vec<Booking>> {
    let rows = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, date_slots, customer_name, phone_number, price, notes, created_at, updated_at
        FROM bookings
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await
    .map_err(store_err)?;

    Ok(rows.into_iter().map(Booking::from).collect())
}

pub async fn fetch_by_id(pool: &Pool<Postgres>, id: Uuid) -> BookingResult<Booking> {
    let row = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, date_slots, customer_name, phone_number, price, notes, created_at, updated_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
    .map_err(store_err)?
    .ok_or_else(|| not_found(id))?;

    Ok(row.into())
}

/// Rows whose token array intersects any of `tokens`. Server-side pre-filter
/// for the conflict check; hits still go through client-side
/// normalization-and-compare before they count as collisions.
pub async fn fetch_overlapping(
    pool: &Pool<Postgres>,
    tokens: &[String],
) -> BookingResult<Vec<Booking>> {
    let rows = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, date_slots, customer_name, phone_number, price, notes, created_at, updated_at
        FROM bookings
        WHERE date_slots && $1
        "#,
    )
    .bind(tokens)
    .fetch_all(pool)
    .await
    .map_err(store_err)?;

    Ok(rows.into_iter().map(Booking::from).collect())
}

/// Every token shape a proposed slot could be stored under: the canonical
/// form plus the legacy shapes accepted on read. The overlap pre-filter is
/// exact-match, so the probe list must cover the shapes of migrated rows.
pub fn probe_tokens(slots: &[DateSlot]) -> Vec<String> {
    let mut probes = Vec::with_capacity(slots.len() * 4);
    for slot in slots {
        let date = slot.date.format("%Y-%m-%d").to_string();
        let time = slot.time_label();
        probes.push(codec::encode(slot));
        probes.push(date.clone());
        probes.push(format!("{date}T{time}:00"));
        probes.push(format!("{date}T{time}:00Z"));
    }
    probes
}

/// Create a booking after a passing availability check. On any collision the
/// whole create fails with `SlotConflict` and nothing is written.
pub async fn create(pool: &Pool<Postgres>, draft: &BookingDraft) -> BookingResult<Booking> {
    draft.validate()?;

    let slots = draft.to_slots();
    let candidates = fetch_overlapping(pool, &probe_tokens(&slots)).await?;
    let conflicts = availability::conflicting_tokens(&slots, &candidates, None);
    if !conflicts.is_empty() {
        return Err(BookingError::SlotConflict(conflicts));
    }

    let id = Uuid::new_v4();
    let now = Utc::now();
    let tokens = draft.tokens();

    tracing::debug!(
        "Creating booking: id={}, customer={}, slots={}",
        id,
        draft.customer_name,
        tokens.len()
    );

    let row = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, date_slots, customer_name, phone_number, price, notes, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
        RETURNING id, date_slots, customer_name, phone_number, price, notes, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&tokens)
    .bind(&draft.customer_name)
    .bind(&draft.phone_number)
    .bind(draft.price)
    .bind(&draft.notes)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(store_err)?;

    Ok(row.into())
}

/// Overwrite all mutable fields of a booking. The conflict check excludes
/// the booking itself so its own slots never collide with the edit.
pub async fn update(
    pool: &Pool<Postgres>,
    id: Uuid,
    draft: &BookingDraft,
) -> BookingResult<Booking> {
    draft.validate()?;

    let slots = draft.to_slots();
    let candidates = fetch_overlapping(pool, &probe_tokens(&slots)).await?;
    let conflicts = availability::conflicting_tokens(&slots, &candidates, Some(id));
    if !conflicts.is_empty() {
        return Err(BookingError::SlotConflict(conflicts));
    }

    let now = Utc::now();
    let tokens = draft.tokens();

    let row = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET date_slots = $2,
            customer_name = $3,
            phone_number = $4,
            price = $5,
            notes = $6,
            updated_at = $7
        WHERE id = $1
        RETURNING id, date_slots, customer_name, phone_number, price, notes, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(&tokens)
    .bind(&draft.customer_name)
    .bind(&draft.phone_number)
    .bind(draft.price)
    .bind(&draft.notes)
    .bind(now)
    .fetch_optional(pool)
    .await
    .map_err(store_err)?
    .ok_or_else(|| not_found(id))?;

    Ok(row.into())
}

/// Remove a booking row. The caller cascades removal of any reminders owned
/// by this booking id.
pub async fn delete(pool: &Pool<Postgres>, id: Uuid) -> BookingResult<()> {
    let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await
        .map_err(store_err)?;

    if result.rows_affected() == 0 {
        return Err(not_found(id));
    }

    Ok(())
}
