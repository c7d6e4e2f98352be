use chrono::Local;
use clap::Parser;
use flight_booking::{seed_airline, Airline, Menu, OutputFormat};
use std::io;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "flight-booking")]
#[command(about = "Book and cancel flight tickets from the terminal.")]
struct Args {
    /// Airline name, used together with --no-seed
    #[arg(long, default_value = "My Airline")]
    airline: String,

    /// Start with an empty airline instead of the sample data
    #[arg(long)]
    no_seed: bool,

    /// Print listings as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();

    debug!(?args, "starting");

    let airline = if args.no_seed {
        Airline::new(&args.airline)
    } else {
        seed_airline(Local::now().date_naive())?
    };
    info!(%airline, "airline ready");

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let stdin = io::stdin();
    let mut menu = Menu::new(airline, stdin.lock(), io::stdout()).with_format(format);
    menu.run()
}
