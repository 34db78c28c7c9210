//! Command-line UTM zone lookup.
//!
//! Usage:
//!   utmzone latlon 47.6062 -122.3321
//!   utmzone srid 32632
//!   utmzone parse 32N
//!   utmzone --json to-srid 4C

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use thiserror::Error;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use utm_zone::{Zone, ZoneError};

#[derive(Parser, Debug)]
#[command(name = "utmzone")]
#[command(about = "Look up UTM grid zones", long_about = None)]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Zone containing a coordinate
    #[command(allow_negative_numbers = true)]
    Latlon {
        /// Latitude in degrees
        lat: f64,
        /// Longitude in degrees
        lon: f64,
    },

    /// Zone for an EPSG/SRID code
    #[command(allow_negative_numbers = true)]
    Srid {
        /// SRID code (32601-32660 or 32701-32760)
        code: i64,
    },

    /// Parse a zone designator such as 32N
    Parse {
        /// Zone number followed by a band letter
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// SRID code for a zone designator
    ToSrid {
        /// Zone number followed by a band letter
        #[arg(allow_hyphen_values = true)]
        text: String,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Zone(#[from] ZoneError),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// A zone together with its derived values.
#[derive(Debug, serde::Serialize)]
struct ZoneReport {
    zone: Zone,
    display: String,
    srid: i64,
    central_meridian: f64,
}

impl ZoneReport {
    fn new(zone: Zone) -> Self {
        Self {
            zone,
            display: zone.to_string(),
            srid: zone.srid(),
            central_meridian: zone.central_meridian(),
        }
    }

    fn render(&self, json: bool) -> Result<String, CliError> {
        if json {
            return Ok(serde_json::to_string_pretty(self)?);
        }
        Ok(format!(
            "Zone:             {}\nSRID:             EPSG:{}\nCentral meridian: {:.1}°",
            self.display, self.srid, self.central_meridian
        ))
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Command::Latlon { lat, lon } => {
            let zone = Zone::from_lat_lon(*lat, *lon);
            debug!(lat, lon, %zone, "resolved coordinate");
            ZoneReport::new(zone).render(cli.json)
        }
        Command::Srid { code } => {
            let zone = Zone::try_from(*code)?;
            debug!(code, %zone, "resolved SRID");
            ZoneReport::new(zone).render(cli.json)
        }
        Command::Parse { text } => {
            let zone: Zone = text.parse()?;
            debug!(text = %text, %zone, "parsed designator");
            ZoneReport::new(zone).render(cli.json)
        }
        Command::ToSrid { text } => {
            let zone: Zone = text.parse()?;
            let srid = zone.srid();
            if cli.json {
                return Ok(serde_json::to_string(&srid)?);
            }
            Ok(srid.to_string())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
