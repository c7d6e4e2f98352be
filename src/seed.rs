// Sample airline used by the console application

use crate::airline::Airline;
use crate::error::BookingError;
use crate::flight::Flight;
use chrono::{Duration, NaiveDate};

pub const SAMPLE_AIRLINE_NAME: &str = "Magyar Air";

// Days between `today` and the first seeded reservation
pub const SEED_LEAD_DAYS: i64 = 14;

// Build the sample airline. MA100 and MA120 end up fully booked.
pub fn seed_airline(today: NaiveDate) -> Result<Airline, BookingError> {
    let mut airline = Airline::new(SAMPLE_AIRLINE_NAME);

    airline.add_flight(Flight::domestic("MA100", "Debrecen", 19990.0, 3)?);
    airline.add_flight(Flight::domestic("MA120", "Szeged", 14990.0, 2)?);
    airline.add_flight(Flight::international("MA700", "London", 39990.0, 4)?);

    let bookings = [
        ("Kiss Anna", "MA100"),
        ("Nagy Béla", "MA100"),
        ("Tóth Csaba", "MA100"),
        ("Szabó Dóra", "MA120"),
        ("Farkas Előd", "MA120"),
        ("Juhász Fanni", "MA700"),
    ];

    let first_day = today + Duration::days(SEED_LEAD_DAYS);
    for (offset, (passenger, flight_number)) in (0_i64..).zip(bookings) {
        airline.book_on(
            passenger,
            flight_number,
            first_day + Duration::days(offset),
            today,
        )?;
    }

    Ok(airline)
}
