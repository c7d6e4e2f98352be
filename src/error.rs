use thiserror::Error;

// Error kinds raised by the booking core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BookingError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Flight not found: {0}")]
    FlightNotFound(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Flight {0} cannot be booked any more")]
    NotBookable(String),

    #[error("Reservation not found: {0}")]
    ReservationNotFound(String),
}
