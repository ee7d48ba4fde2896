//! Bhandara Finder
//!
//! Command line entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use bhandara_finder::{
    config::Settings,
    handlers::commands::{handle_add, handle_nearby, AddOptions},
    models::Coordinates,
    services::{FixedLocationProvider, ServiceFactory},
    utils::logging,
};

#[derive(Parser)]
#[command(name = "bhandara")]
#[command(about = "Find and publish community bhandaras near you", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List bhandaras near the current position
    Nearby {
        /// Latitude to search around instead of the configured location
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude to search around instead of the configured location
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
    },

    /// Publish a new bhandara
    Add(AddArgs),
}

#[derive(Args)]
struct AddArgs {
    /// Title, e.g. "Community Langar"
    #[arg(long)]
    title: String,

    /// Location description, e.g. "Gurudwara Sahib"
    #[arg(long)]
    location: String,

    /// Your name or organization
    #[arg(long)]
    organizer: String,

    /// Date (YYYY-MM-DD), today by default
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Start time (HH:MM)
    #[arg(long, value_parser = parse_time)]
    start: Option<NaiveTime>,

    /// End time (HH:MM), one hour after the start by default
    #[arg(long, value_parser = parse_time)]
    end: Option<NaiveTime>,

    /// Food item; repeat for several
    #[arg(long = "food")]
    food: Vec<String>,

    /// Latitude entered manually
    #[arg(long, allow_hyphen_values = true, conflicts_with = "auto")]
    lat: Option<String>,

    /// Longitude entered manually
    #[arg(long, allow_hyphen_values = true, conflicts_with = "auto")]
    lon: Option<String>,

    /// Capture coordinates from the location provider
    #[arg(long)]
    auto: bool,
}

fn parse_time(value: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(value, "%H:%M")
}

impl From<AddArgs> for AddOptions {
    fn from(args: AddArgs) -> Self {
        Self {
            title: args.title,
            location: args.location,
            organizer: args.organizer,
            date: args.date,
            start: args.start,
            end: args.end,
            food_items: args.food,
            latitude: args.lat,
            longitude: args.lon,
            auto_location: args.auto,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut settings = match &cli.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::new()?,
    };
    if cli.verbose {
        settings.logging.level = "debug".to_string();
    }
    settings.validate()?;

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", bhandara_finder::info());

    let mut services = ServiceFactory::new(&settings)?;

    let result = match cli.command {
        Commands::Nearby { lat, lon } => {
            if let (Some(lat), Some(lon)) = (lat, lon) {
                let coords = Coordinates::new(lat, lon)?;
                services = services.with_location_provider(Arc::new(FixedLocationProvider::new(Some(coords))));
            }
            handle_nearby(&services).await
        }
        Commands::Add(args) => {
            handle_add(&services, args.into(), &settings.features).await
        }
    };

    match result {
        Ok(output) => {
            print!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!(error = %e, severity = %e.severity(), "Command failed");
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
    }
}
