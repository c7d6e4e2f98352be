// Console menu driving an airline. Reads choices line by line and reports
// booking errors to the user without leaving the loop.

use crate::airline::Airline;
use crate::error::BookingError;
use crate::flight::Flight;
use crate::reservation::{Reservation, DATE_FORMAT};
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

// How listings are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    // One JSON object per line
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[derive(Serialize)]
struct FlightListing<'a> {
    #[serde(flatten)]
    flight: &'a Flight,
    final_price: f64,
    seats_left: usize,
}

pub struct Menu<R, W> {
    airline: Airline,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(airline: Airline, input: R, output: W) -> Self {
        Self {
            airline,
            input,
            output,
            format: OutputFormat::default(),
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn airline(&self) -> &Airline {
        &self.airline
    }

    pub fn into_airline(self) -> Airline {
        self.airline
    }

    // Run until the user picks 0 or the input ends
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "{}", self.airline)?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };
            debug!(option = %choice, "menu option selected");

            let flow = match choice.as_str() {
                "1" => self.list_flights()?,
                "2" => self.book()?,
                "3" => self.cancel()?,
                "4" => self.list_reservations()?,
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Unknown option.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> anyhow::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "== Flight Booking ==")?;
        writeln!(self.output, "1) List flights")?;
        writeln!(self.output, "2) Book a ticket")?;
        writeln!(self.output, "3) Cancel a reservation")?;
        writeln!(self.output, "4) List reservations")?;
        writeln!(self.output, "0) Exit")?;
        Ok(())
    }

    // None when the input is exhausted
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn list_flights(&mut self) -> anyhow::Result<Flow> {
        if self.format == OutputFormat::Text {
            writeln!(self.output, "\nAvailable flights:")?;
        }

        for (idx, flight) in self.airline.flights().iter().enumerate() {
            match self.format {
                OutputFormat::Text => writeln!(
                    self.output,
                    "  {}. {} | final price: {:.2}",
                    idx + 1,
                    flight,
                    flight.final_price()
                )?,
                OutputFormat::Json => {
                    let listing = FlightListing {
                        flight,
                        final_price: flight.final_price(),
                        seats_left: self.airline.seats_left(flight),
                    };
                    writeln!(self.output, "{}", serde_json::to_string(&listing)?)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn list_reservations(&mut self) -> anyhow::Result<Flow> {
        let reservations = self.airline.reservations_by_price();

        match self.format {
            OutputFormat::Text => {
                if reservations.is_empty() {
                    writeln!(self.output, "\nNo reservations yet.")?;
                    return Ok(Flow::Continue);
                }
                writeln!(self.output, "\nReservations (by price):")?;
                for reservation in &reservations {
                    let line = self.reservation_line(reservation);
                    writeln!(self.output, "  {}", line)?;
                }
            }
            OutputFormat::Json => {
                for reservation in &reservations {
                    writeln!(self.output, "{}", serde_json::to_string(reservation)?)?;
                }
            }
        }
        Ok(Flow::Continue)
    }

    fn book(&mut self) -> anyhow::Result<Flow> {
        self.list_flights()?;

        let Some(flight_number) = self.prompt("Flight number (e.g. MA100): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(passenger) = self.prompt("Passenger name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(date) = self.prompt("Travel date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        let flight_number = flight_number.to_uppercase();
        match self.airline.book_str(&passenger, &flight_number, &date) {
            Ok(reservation) => {
                info!(id = reservation.id(), flight = %flight_number, "reservation booked");
                let line = self.reservation_line(&reservation);
                writeln!(self.output, "Booking successful! {}", line)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn cancel(&mut self) -> anyhow::Result<Flow> {
        self.list_reservations()?;

        let Some(id) = self.prompt("Reservation id (e.g. RSV-0003): ")? else {
            return Ok(Flow::Exit);
        };

        match self.airline.cancel(&id.to_uppercase()) {
            Ok(reservation) => {
                info!(id = reservation.id(), "reservation cancelled");
                self.print_cancelled(&reservation)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn print_cancelled(&mut self, reservation: &Reservation) -> anyhow::Result<()> {
        let line = self.reservation_line(reservation);
        writeln!(self.output, "Cancelled: {}", line)?;
        Ok(())
    }

    // Reservation with the destination of its flight resolved
    fn reservation_line(&self, reservation: &Reservation) -> String {
        match self.airline.find_flight(reservation.flight_number()) {
            Ok(flight) => format!(
                "{} | {} | {} -> {} | {} | {:.2}",
                reservation.id(),
                reservation.passenger_name(),
                flight.number(),
                flight.destination(),
                reservation.travel_date().format(DATE_FORMAT),
                reservation.price()
            ),
            Err(_) => reservation.to_string(),
        }
    }

    fn report(&mut self, error: &BookingError) -> anyhow::Result<()> {
        warn!(%error, "operation rejected");
        writeln!(self.output, "Error: {}", error)?;
        Ok(())
    }
}
