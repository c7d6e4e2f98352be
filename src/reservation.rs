// Reservations are created by the airline and never change afterwards

use crate::error::BookingError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reservation {
    id: String,
    passenger_name: String,
    flight_number: String,
    travel_date: NaiveDate,
    price: f64,
}

impl Reservation {
    pub(crate) fn new(
        id: String,
        passenger_name: &str,
        flight_number: &str,
        travel_date: NaiveDate,
        price: f64,
    ) -> Self {
        Self {
            id,
            passenger_name: passenger_name.to_string(),
            flight_number: flight_number.to_string(),
            travel_date,
            price,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    // Number of the booked flight; resolve it through the airline for live flight data
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    pub fn travel_date(&self) -> NaiveDate {
        self.travel_date
    }

    // Final price of the flight at booking time
    pub fn price(&self) -> f64 {
        self.price
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {:.2}",
            self.id,
            self.passenger_name,
            self.flight_number,
            self.travel_date.format(DATE_FORMAT),
            self.price
        )
    }
}

// Stable sort, equal prices keep their booking order
pub fn sort_by_price(reservations: &mut [Reservation]) {
    reservations.sort_by(|a, b| a.price.total_cmp(&b.price));
}

// Parse an ISO calendar date (YYYY-MM-DD)
pub fn parse_travel_date(text: &str) -> Result<NaiveDate, BookingError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|e| {
        BookingError::InvalidDate(format!("'{}' is not a YYYY-MM-DD date ({})", text, e))
    })
}
