// Airline aggregate: owns flights and reservations and enforces the booking rules.
// Every operation validates before it mutates, so a failed call leaves the airline untouched.

use crate::error::BookingError;
use crate::flight::Flight;
use crate::reservation::{parse_travel_date, sort_by_price, Reservation};
use chrono::{Local, NaiveDate};
use std::fmt;

// How reservation identifiers are numbered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservationNumbering {
    // Live reservation count + 1. A number freed by a cancellation is handed out again,
    // which can duplicate an identifier that is still in use.
    CountBased,
    // Monotonic counter, numbers are never reused
    Sequential,
}

#[derive(Debug, Clone)]
pub struct AirlineConfig {
    pub id_prefix: String,
    pub id_width: usize,
    pub numbering: ReservationNumbering,
}

impl Default for AirlineConfig {
    fn default() -> Self {
        Self {
            id_prefix: "RSV".to_string(),
            id_width: 4,
            numbering: ReservationNumbering::CountBased,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Airline {
    name: String,
    config: AirlineConfig,
    flights: Vec<Flight>,
    reservations: Vec<Reservation>,
    issued: usize,
}

impl Airline {
    pub fn new(name: &str) -> Self {
        Self::with_config(name, AirlineConfig::default())
    }

    pub fn with_config(name: &str, config: AirlineConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
            flights: Vec::new(),
            reservations: Vec::new(),
            issued: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &AirlineConfig {
        &self.config
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    // Snapshot of the reservations, cheapest first
    pub fn reservations_by_price(&self) -> Vec<Reservation> {
        let mut sorted = self.reservations.clone();
        sort_by_price(&mut sorted);
        sorted
    }

    pub fn flight_count(&self) -> usize {
        self.flights.len()
    }

    pub fn reservation_count(&self) -> usize {
        self.reservations.len()
    }

    // Flight numbers are not checked for uniqueness here, the caller owns that
    pub fn add_flight(&mut self, flight: Flight) {
        self.flights.push(flight);
    }

    pub fn find_flight(&self, flight_number: &str) -> Result<&Flight, BookingError> {
        self.flights
            .iter()
            .find(|f| f.number() == flight_number)
            .ok_or_else(|| BookingError::FlightNotFound(flight_number.to_string()))
    }

    fn flight_mut(&mut self, flight_number: &str) -> Result<&mut Flight, BookingError> {
        self.flights
            .iter_mut()
            .find(|f| f.number() == flight_number)
            .ok_or_else(|| BookingError::FlightNotFound(flight_number.to_string()))
    }

    pub fn deactivate_flight(&mut self, flight_number: &str) -> Result<(), BookingError> {
        self.flight_mut(flight_number)?.deactivate();
        Ok(())
    }

    pub fn set_destination(
        &mut self,
        flight_number: &str,
        value: &str,
    ) -> Result<(), BookingError> {
        self.flight_mut(flight_number)?.set_destination(value)
    }

    // Only affects future bookings, existing reservations keep their price
    pub fn set_base_price(&mut self, flight_number: &str, value: f64) -> Result<(), BookingError> {
        self.flight_mut(flight_number)?.set_base_price(value)
    }

    // Capacity may not drop below the seats already reserved
    pub fn set_capacity(&mut self, flight_number: &str, value: i64) -> Result<(), BookingError> {
        let reserved = self.reservations_for(flight_number);
        if value < reserved as i64 {
            return Err(BookingError::Validation(format!(
                "capacity {} is below the {} seats reserved on {}",
                value, reserved, flight_number
            )));
        }
        self.flight_mut(flight_number)?.set_capacity(value)
    }

    // Live reservations held on a flight, recounted on every call
    pub fn reservations_for(&self, flight_number: &str) -> usize {
        self.reservations
            .iter()
            .filter(|r| r.flight_number() == flight_number)
            .count()
    }

    pub fn is_bookable(&self, flight: &Flight) -> bool {
        flight.is_active() && self.reservations_for(flight.number()) < flight.capacity() as usize
    }

    pub fn seats_left(&self, flight: &Flight) -> usize {
        (flight.capacity() as usize).saturating_sub(self.reservations_for(flight.number()))
    }

    // Book against today's local calendar date
    pub fn book(
        &mut self,
        passenger_name: &str,
        flight_number: &str,
        travel_date: NaiveDate,
    ) -> Result<Reservation, BookingError> {
        let today = Local::now().date_naive();
        self.book_on(passenger_name, flight_number, travel_date, today)
    }

    // Same as `book`, with the travel date still in YYYY-MM-DD text form
    pub fn book_str(
        &mut self,
        passenger_name: &str,
        flight_number: &str,
        travel_date: &str,
    ) -> Result<Reservation, BookingError> {
        let travel_date = parse_travel_date(travel_date)?;
        self.book(passenger_name, flight_number, travel_date)
    }

    pub fn book_on(
        &mut self,
        passenger_name: &str,
        flight_number: &str,
        travel_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Reservation, BookingError> {
        if travel_date < today {
            return Err(BookingError::InvalidDate(format!(
                "{} is in the past",
                travel_date
            )));
        }

        let flight = self.find_flight(flight_number)?;
        if !self.is_bookable(flight) {
            return Err(BookingError::NotBookable(flight_number.to_string()));
        }
        let price = flight.final_price();

        let reservation = Reservation::new(
            self.next_reservation_id(),
            passenger_name,
            flight_number,
            travel_date,
            price,
        );
        self.reservations.push(reservation.clone());
        self.issued += 1;

        Ok(reservation)
    }

    // Identifier match ignores case and surrounding whitespace
    pub fn find_reservation(&self, id: &str) -> Result<&Reservation, BookingError> {
        let id = id.trim();
        self.reservations
            .iter()
            .find(|r| r.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| BookingError::ReservationNotFound(id.to_string()))
    }

    pub fn cancel(&mut self, id: &str) -> Result<Reservation, BookingError> {
        let id = id.trim();
        let position = self
            .reservations
            .iter()
            .position(|r| r.id().eq_ignore_ascii_case(id))
            .ok_or_else(|| BookingError::ReservationNotFound(id.to_string()))?;

        Ok(self.reservations.remove(position))
    }

    fn next_reservation_id(&self) -> String {
        let number = match self.config.numbering {
            ReservationNumbering::CountBased => self.reservations.len() + 1,
            ReservationNumbering::Sequential => self.issued + 1,
        };
        format!(
            "{}-{:0width$}",
            self.config.id_prefix,
            number,
            width = self.config.id_width
        )
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} flights, {} reservations",
            self.name,
            self.flight_count(),
            self.reservation_count()
        )
    }
}
