//! Vehicles command handler and vehicle table resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use ecoroute_lib::VehicleCatalog;

use ecoroute_cli::output::{render_vehicles, vehicle_rows, write_json, OutputFormat};
use ecoroute_cli::terminal::ColorPalette;

/// Environment variable naming a CSV file of vehicle profile overrides.
pub const VEHICLE_DATA_ENV: &str = "ECOROUTE_VEHICLE_DATA";

/// Handle the vehicles subcommand.
pub fn handle_list_vehicles(catalog: &VehicleCatalog, format: OutputFormat) -> Result<()> {
    let rows = vehicle_rows(catalog);
    match format {
        OutputFormat::Text => print!("{}", render_vehicles(&rows, &ColorPalette::detect())),
        OutputFormat::Json => write_json(&rows).context("failed to write JSON output")?,
    }
    Ok(())
}

/// Resolve the vehicle table.
///
/// Searches for override data in the following order:
/// 1. The `--vehicle-data` argument
/// 2. The `ECOROUTE_VEHICLE_DATA` environment variable
///
/// Falls back to the built-in table when neither is set.
pub fn load_vehicle_catalog(explicit: Option<&Path>) -> Result<VehicleCatalog> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(VEHICLE_DATA_ENV).map(PathBuf::from));

    match path {
        Some(path) => VehicleCatalog::from_path(&path)
            .with_context(|| format!("failed to load vehicle data from {}", path.display())),
        None => {
            debug!("using built-in vehicle profiles");
            Ok(VehicleCatalog::builtin().clone())
        }
    }
}
