//! # Availability Handler
//!
//! Reporting variant of the booking conflict check, exposed so the calendar
//! client can validate a proposed date range before submitting the form.
//!
//! The check runs in two stages:
//!
//! 1. A server-side pre-filter fetches only rows whose stored token array
//!    intersects the shapes the proposed slots could be stored under
//! 2. The fetched candidates go through client-side
//!    normalization-and-compare, which puts legacy-format rows on equal
//!    footing with the proposed canonical tokens

use axum::{Json, extract::State};
use datebook_core::availability;
use datebook_core::models::booking::{CheckAvailabilityRequest, CheckAvailabilityResponse};
use datebook_core::models::date_slot::DateSlot;
use datebook_db::repositories::booking as booking_repo;
use std::sync::Arc;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn check_availability(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CheckAvailabilityRequest>,
) -> Result<Json<CheckAvailabilityResponse>, AppError> {
    let slots: Vec<DateSlot> = payload.slots.iter().map(|s| s.to_slot()).collect();

    let candidates = booking_repo::fetch_overlapping(
        &state.db_pool,
        &booking_repo::probe_tokens(&slots),
    )
    .await?;

    let conflicts =
        availability::conflicting_tokens(&slots, &candidates, payload.exclude_booking_id);

    Ok(Json(CheckAvailabilityResponse {
        available: conflicts.is_empty(),
        conflicts,
    }))
}
