use datebook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let conflict = BookingError::SlotConflict(vec![
        "2026-02-01T10:00:00+05:30".to_string(),
        "2026-02-02T10:00:00+05:30".to_string(),
    ]);
    let not_found = BookingError::NotFound("Booking not found".to_string());
    let validation = BookingError::Validation("Invalid input".to_string());
    let store = BookingError::StoreUnavailable(eyre::eyre!("connection refused"));

    assert_eq!(
        conflict.to_string(),
        "Slot conflict: 2026-02-01T10:00:00+05:30, 2026-02-02T10:00:00+05:30"
    );
    assert_eq!(not_found.to_string(), "Resource not found: Booking not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert!(store.to_string().contains("Booking store unavailable:"));
}

#[test]
fn test_from_eyre_report() {
    let report = eyre::eyre!("connection refused");
    let err: BookingError = report.into();

    assert!(matches!(err, BookingError::StoreUnavailable(_)));
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("missing".to_string()));
    assert!(result.is_err());
}
