use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ecoroute_cli::output::OutputFormat;

mod commands;

use commands::compare::{handle_compare_command, CompareCommandArgs};
use commands::estimate::{handle_estimate_command, EstimateCommandArgs};
use commands::vehicles::{handle_list_vehicles, load_vehicle_catalog};

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare shortest and eco driving routes")]
struct Cli {
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// CSV file overriding the built-in vehicle profiles
    /// (falls back to ECOROUTE_VEHICLE_DATA).
    #[arg(long, global = true)]
    vehicle_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List vehicle kinds and their emission coefficients.
    Vehicles,
    /// Estimate fuel and CO2 for a single route.
    Estimate {
        /// Route distance in kilometres.
        #[arg(long)]
        distance_km: f64,
        /// Route duration in minutes.
        #[arg(long)]
        duration_min: f64,
        /// Route geometry as `lat,lon;lat,lon;...`.
        #[arg(long)]
        points: Option<String>,
        /// Vehicle kind (car, van, bike, ev); unknown values use car.
        #[arg(long, default_value = "car")]
        vehicle: String,
    },
    /// Score every candidate in a routing-service response and pick the
    /// shortest and eco routes.
    Compare {
        /// Path to the routing response JSON.
        #[arg(long)]
        routes: PathBuf,
        /// Vehicle kind (car, van, bike, ev); unknown values use car.
        #[arg(long, default_value = "car")]
        vehicle: String,
        /// Which route to prefer: `time` or `co2`.
        #[arg(long, default_value = "co2")]
        optimize: String,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let catalog = load_vehicle_catalog(cli.vehicle_data.as_deref())?;

    match cli.command {
        Command::Vehicles => handle_list_vehicles(&catalog, cli.format),
        Command::Estimate {
            distance_km,
            duration_min,
            points,
            vehicle,
        } => handle_estimate_command(
            &catalog,
            cli.format,
            &EstimateCommandArgs {
                distance_km,
                duration_min,
                points,
                vehicle,
            },
        ),
        Command::Compare {
            routes,
            vehicle,
            optimize,
        } => handle_compare_command(
            &catalog,
            cli.format,
            &routes,
            &CompareCommandArgs { vehicle, optimize },
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
