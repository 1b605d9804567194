//! # Error Handling Middleware
//!
//! Maps the domain error taxonomy to HTTP status codes and JSON error
//! responses so every endpoint fails the same way. A rejected create/update
//! reaches the client as a plain error response; nothing on the server side
//! has changed state by then.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use datebook_core::errors::BookingError;
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain `BookingError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::SlotConflict(_) => StatusCode::CONFLICT,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        };

        // Conflict responses carry the colliding tokens for the caller
        let body = match &self.0 {
            BookingError::SlotConflict(conflicts) => Json(json!({
                "error": self.0.to_string(),
                "conflicts": conflicts,
            })),
            _ => Json(json!({ "error": self.0.to_string() })),
        };

        (status, body).into_response()
    }
}

/// Allows using `?` with functions that return `Result<T, BookingError>`.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Allows using `?` with fallible store plumbing that reports `eyre::Report`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::StoreUnavailable(err))
    }
}
