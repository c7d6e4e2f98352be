// Flights offered by an airline and their category-specific pricing

use crate::error::BookingError;
use serde::Serialize;
use std::fmt;

// Domestic flights get a fixed discount, international ones a fixed surcharge
pub const DOMESTIC_DISCOUNT: f64 = 0.10;
pub const INTERNATIONAL_SURCHARGE: f64 = 0.25;

// Flight category, decides how the final price is derived from the base price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlightKind {
    Domestic,
    International,
}

impl FlightKind {
    pub fn price_multiplier(self) -> f64 {
        match self {
            FlightKind::Domestic => 1.0 - DOMESTIC_DISCOUNT,
            FlightKind::International => 1.0 + INTERNATIONAL_SURCHARGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Flight {
    number: String,
    kind: FlightKind,
    destination: String,
    base_price: f64,
    capacity: u32,
    active: bool,
}

impl Flight {
    // Create a flight, rejecting values that break the flight invariants
    pub fn new(
        kind: FlightKind,
        number: &str,
        destination: &str,
        base_price: f64,
        capacity: i64,
    ) -> Result<Self, BookingError> {
        if number.is_empty() {
            return Err(BookingError::Validation(
                "flight number must not be empty".to_string(),
            ));
        }

        Ok(Self {
            number: number.to_string(),
            kind,
            destination: validate_destination(destination)?,
            base_price: validate_base_price(base_price)?,
            capacity: validate_capacity(capacity)?,
            active: true,
        })
    }

    pub fn domestic(
        number: &str,
        destination: &str,
        base_price: f64,
        capacity: i64,
    ) -> Result<Self, BookingError> {
        Self::new(FlightKind::Domestic, number, destination, base_price, capacity)
    }

    pub fn international(
        number: &str,
        destination: &str,
        base_price: f64,
        capacity: i64,
    ) -> Result<Self, BookingError> {
        Self::new(
            FlightKind::International,
            number,
            destination,
            base_price,
            capacity,
        )
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn kind(&self) -> FlightKind {
        self.kind
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn base_price(&self) -> f64 {
        self.base_price
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // Price a passenger pays, rounded to 2 decimals
    pub fn final_price(&self) -> f64 {
        round_to_cents(self.base_price * self.kind.price_multiplier())
    }

    pub fn set_destination(&mut self, value: &str) -> Result<(), BookingError> {
        self.destination = validate_destination(value)?;
        Ok(())
    }

    pub fn set_base_price(&mut self, value: f64) -> Result<(), BookingError> {
        self.base_price = validate_base_price(value)?;
        Ok(())
    }

    pub fn set_capacity(&mut self, value: i64) -> Result<(), BookingError> {
        self.capacity = validate_capacity(value)?;
        Ok(())
    }

    // One-way: an inactive flight is never reactivated
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl fmt::Display for Flight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.active { "active" } else { "inactive" };
        write!(
            f,
            "{} -> {} | base price: {:.0} | seats: {} | {}",
            self.number, self.destination, self.base_price, self.capacity, status
        )
    }
}

// Rounds the exact binary value to 2 decimals, exact ties go to the even cent
pub fn round_to_cents(amount: f64) -> f64 {
    format!("{:.2}", amount).parse().unwrap_or(amount)
}

fn validate_destination(value: &str) -> Result<String, BookingError> {
    if value.is_empty() {
        return Err(BookingError::Validation(
            "destination must not be empty".to_string(),
        ));
    }
    Ok(value.to_string())
}

fn validate_base_price(value: f64) -> Result<f64, BookingError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BookingError::Validation(format!(
            "base price must be positive, got {}",
            value
        )));
    }
    Ok(value)
}

fn validate_capacity(value: i64) -> Result<u32, BookingError> {
    if value <= 0 {
        return Err(BookingError::Validation(format!(
            "capacity must be a positive integer, got {}",
            value
        )));
    }
    u32::try_from(value).map_err(|_| {
        BookingError::Validation(format!("capacity {} is out of range", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(FlightKind::Domestic, 100.0, 90.0; "#1 Domestic discount")]
    #[test_case(FlightKind::International, 100.0, 125.0; "#2 International surcharge")]
    #[test_case(FlightKind::Domestic, 19990.0, 17991.0; "#3 Domestic seed price")]
    #[test_case(FlightKind::International, 39990.0, 49987.5; "#4 International seed price")]
    #[test_case(FlightKind::Domestic, 10.05, 9.05; "#5 Domestic rounds to cents")]
    #[test_case(FlightKind::International, 0.99, 1.24; "#6 International rounds to cents")]
    #[test_case(FlightKind::International, 8.5, 10.62; "#7 Half cent tie rounds to even")]
    #[test_case(FlightKind::International, 2.5, 3.12; "#8 Half cent tie below ten")]
    #[test_case(FlightKind::International, 0.5, 0.62; "#9 Half cent tie below one")]
    #[test_case(FlightKind::International, 4.5, 5.62; "#10 Half cent tie with even cent")]
    #[test_case(FlightKind::Domestic, 0.15, 0.14; "#11 Domestic value just above a tie")]
    #[test_case(FlightKind::Domestic, 17.25, 15.53; "#12 Domestic value just above a tie")]
    fn test_final_price(kind: FlightKind, base_price: f64, expected: f64) {
        let flight = Flight::new(kind, "FL1", "Somewhere", base_price, 10).unwrap();
        assert_eq!(flight.final_price(), expected);
    }

    #[test_case(1, 0.13, 0.18; "#1 Tiny base price")]
    #[test_case(333, 42.81, 59.46; "#2 Hundreds")]
    #[test_case(1_999, 257.01, 356.96; "#3 Thousands")]
    #[test_case(12_345, 1587.21, 2204.46; "#4 Ten thousands")]
    #[test_case(99_999, 12857.01, 17856.96; "#5 Hundred thousands")]
    fn test_final_price_of_fractional_base(sevenths: u32, domestic: f64, international: f64) {
        let base = sevenths as f64 / 7.0;

        let flight = Flight::domestic("D1", "Pecs", base, 1).unwrap();
        assert_eq!(flight.final_price(), domestic);

        let flight = Flight::international("I1", "Vienna", base, 1).unwrap();
        assert_eq!(flight.final_price(), international);
    }

    #[test]
    fn test_round_to_cents_uses_exact_binary_value() {
        // 2.675 is stored slightly below the tie
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(0.125), 0.12);
        assert_eq!(round_to_cents(0.375), 0.38);
        assert_eq!(round_to_cents(90.00000000000001), 90.0);
    }

    #[test_case("", 100.0, 1; "#1 Empty destination")]
    #[test_case("Gyor", 0.0, 1; "#2 Zero price")]
    #[test_case("Gyor", -5.0, 1; "#3 Negative price")]
    #[test_case("Gyor", f64::NAN, 1; "#4 NaN price")]
    #[test_case("Gyor", 100.0, 0; "#5 Zero capacity")]
    #[test_case("Gyor", 100.0, -3; "#6 Negative capacity")]
    fn test_new_rejects_invalid_fields(destination: &str, base_price: f64, capacity: i64) {
        let result = Flight::domestic("MA1", destination, base_price, capacity);
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[test]
    fn test_new_rejects_empty_flight_number() {
        let result = Flight::international("", "Rome", 100.0, 1);
        assert!(matches!(result, Err(BookingError::Validation(_))));
    }

    #[test]
    fn test_setters_validate_and_keep_old_value_on_failure() {
        let mut flight = Flight::domestic("MA100", "Debrecen", 19990.0, 3).unwrap();

        assert!(flight.set_destination("").is_err());
        assert_eq!(flight.destination(), "Debrecen");
        flight.set_destination("Miskolc").unwrap();
        assert_eq!(flight.destination(), "Miskolc");

        assert!(flight.set_base_price(0.0).is_err());
        assert_eq!(flight.base_price(), 19990.0);
        flight.set_base_price(10000.0).unwrap();
        assert_eq!(flight.final_price(), 9000.0);

        assert!(flight.set_capacity(0).is_err());
        assert_eq!(flight.capacity(), 3);
        flight.set_capacity(5).unwrap();
        assert_eq!(flight.capacity(), 5);
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut flight = Flight::international("MA700", "London", 39990.0, 4).unwrap();
        assert!(flight.is_active());

        flight.deactivate();
        flight.deactivate();
        assert!(!flight.is_active());
    }

    #[test]
    fn test_display() {
        let mut flight = Flight::domestic("MA120", "Szeged", 14990.0, 2).unwrap();
        assert_eq!(flight.kind(), FlightKind::Domestic);
        assert_eq!(
            flight.to_string(),
            "MA120 -> Szeged | base price: 14990 | seats: 2 | active"
        );

        flight.deactivate();
        assert!(flight.to_string().ends_with("| inactive"));
    }
}
