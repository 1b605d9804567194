use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Slot conflict: {}", .0.join(", "))]
    SlotConflict(Vec<String>),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Booking store unavailable: {0}")]
    StoreUnavailable(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
