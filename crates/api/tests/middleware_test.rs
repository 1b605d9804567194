use axum::http::StatusCode;
use axum::response::IntoResponse;
use datebook_api::middleware::error_handling::AppError;
use datebook_core::errors::BookingError;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(
    BookingError::SlotConflict(vec!["2026-02-01T10:00:00+05:30".to_string()]),
    StatusCode::CONFLICT
)]
#[case(BookingError::NotFound("missing".to_string()), StatusCode::NOT_FOUND)]
#[case(BookingError::Validation("bad input".to_string()), StatusCode::BAD_REQUEST)]
#[case(
    BookingError::StoreUnavailable(eyre::eyre!("connection refused")),
    StatusCode::SERVICE_UNAVAILABLE
)]
fn maps_domain_errors_to_status_codes(
    #[case] err: BookingError,
    #[case] expected: StatusCode,
) {
    let response = AppError(err).into_response();

    assert_eq!(response.status(), expected);
}

#[tokio::test]
async fn conflict_response_lists_colliding_tokens() {
    let err = BookingError::SlotConflict(vec!["2026-02-01T10:00:00+05:30".to_string()]);

    let response = AppError(err).into_response();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(body["conflicts"][0], "2026-02-01T10:00:00+05:30");
    assert!(body["error"].as_str().unwrap().contains("Slot conflict"));
}

#[tokio::test]
async fn plain_errors_carry_only_a_message() {
    let err = BookingError::NotFound("Booking with ID 123 not found".to_string());

    let response = AppError(err).into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert!(body.get("conflicts").is_none());
    assert_eq!(
        body["error"],
        "Resource not found: Booking with ID 123 not found"
    );
}
