//! Estimate command handler for scoring a single route.

use anyhow::{bail, Context, Result};

use ecoroute_lib::{estimate_route, GeoPoint, RouteInput, VehicleCatalog, VehicleKind};

use ecoroute_cli::output::{render_estimate, write_json, OutputFormat};

/// Arguments for the estimate command.
#[derive(Debug, Clone)]
pub struct EstimateCommandArgs {
    pub distance_km: f64,
    pub duration_min: f64,
    /// `lat,lon` pairs separated by `;`.
    pub points: Option<String>,
    pub vehicle: String,
}

/// Handle the estimate subcommand.
pub fn handle_estimate_command(
    catalog: &VehicleCatalog,
    format: OutputFormat,
    args: &EstimateCommandArgs,
) -> Result<()> {
    if !args.distance_km.is_finite() || args.distance_km < 0.0 {
        bail!("--distance-km must be a non-negative number");
    }
    if !args.duration_min.is_finite() || args.duration_min < 0.0 {
        bail!("--duration-min must be a non-negative number");
    }

    let points = match args.points.as_deref() {
        Some(raw) => parse_points(raw)?,
        None => Vec::new(),
    };
    let vehicle = VehicleKind::from_str_lossy(&args.vehicle);

    let input = RouteInput::new(args.distance_km, args.duration_min, points, vehicle);
    let estimate = estimate_route(&input, catalog);

    match format {
        OutputFormat::Text => print!("{}", render_estimate(vehicle, &estimate)),
        OutputFormat::Json => write_json(&estimate).context("failed to write JSON output")?,
    }
    Ok(())
}

/// Parse `lat,lon;lat,lon;...` into points. Empty segments are skipped.
pub fn parse_points(raw: &str) -> Result<Vec<GeoPoint>> {
    raw.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| -> Result<GeoPoint> {
            let (lat, lon) = pair
                .split_once(',')
                .with_context(|| format!("point '{pair}' must be written as lat,lon"))?;
            let lat: f64 = lat
                .trim()
                .parse()
                .with_context(|| format!("invalid latitude in '{pair}'"))?;
            let lon: f64 = lon
                .trim()
                .parse()
                .with_context(|| format!("invalid longitude in '{pair}'"))?;
            Ok(GeoPoint::new(lat, lon))
        })
        .collect()
}
