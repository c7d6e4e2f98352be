// In-memory flight booking: flights, reservations and the airline that enforces the booking rules

pub mod airline;
pub mod error;
pub mod flight;
pub mod menu;
pub mod reservation;
pub mod seed;

// Re-export key types for convenience
pub use airline::{Airline, AirlineConfig, ReservationNumbering};
pub use error::BookingError;
pub use flight::{Flight, FlightKind};
pub use menu::{Menu, OutputFormat};
pub use reservation::{parse_travel_date, Reservation};
pub use seed::seed_airline;
