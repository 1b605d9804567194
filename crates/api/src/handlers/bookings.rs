use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use datebook_core::models::booking::{BookingDraft, BookingResponse};
use datebook_notifier::scheduler;
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let bookings = datebook_db::repositories::booking::fetch_all(&state.db_pool).await?;

    Ok(Json(
        bookings.into_iter().map(BookingResponse::from).collect(),
    ))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = datebook_db::repositories::booking::fetch_by_id(&state.db_pool, id).await?;

    Ok(Json(booking.into()))
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<BookingDraft>,
) -> Result<(StatusCode, Json<BookingResponse>), AppError> {
    let booking = datebook_db::repositories::booking::create(&state.db_pool, &payload).await?;

    // Reminders are best-effort; the booking stands even if scheduling fails.
    if let Err(e) = scheduler::schedule(
        &state.reminders,
        state.sink.as_ref(),
        &booking,
        Utc::now(),
        false,
    )
    .await
    {
        warn!(
            "Failed to schedule reminders for booking {}: {}",
            booking.id, e
        );
    }

    Ok((StatusCode::CREATED, Json(booking.into())))
}

#[axum::debug_handler]
pub async fn update_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookingDraft>,
) -> Result<Json<BookingResponse>, AppError> {
    let booking = datebook_db::repositories::booking::update(&state.db_pool, id, &payload).await?;

    // Slots may have moved; rebuild this booking's reminders from scratch.
    if let Err(e) = scheduler::schedule(
        &state.reminders,
        state.sink.as_ref(),
        &booking,
        Utc::now(),
        true,
    )
    .await
    {
        warn!("Failed to reschedule reminders for booking {}: {}", id, e);
    }

    Ok(Json(booking.into()))
}

#[axum::debug_handler]
pub async fn delete_booking(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    datebook_db::repositories::booking::delete(&state.db_pool, id).await?;

    // Cascade: a deleted booking must not leave reminders behind.
    state.reminders.delete_for_booking(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
