//! Compare command handler for scoring every candidate in a routing response.

use std::path::Path;

use anyhow::{Context, Result};

use ecoroute_cli::output::{render_comparison, write_json, ComparisonReport, OutputFormat};
use ecoroute_cli::terminal::ColorPalette;
use ecoroute_lib::provider::{StaticGeocoder, StaticRouteProvider};
use ecoroute_lib::{
    plan_routes, Location, OptimizationGoal, PlanRequest, RoutingResponse, VehicleCatalog,
    VehicleKind,
};

const ORIGIN: &str = "origin";
const DESTINATION: &str = "destination";

/// Arguments for the compare command.
#[derive(Debug, Clone)]
pub struct CompareCommandArgs {
    pub vehicle: String,
    pub optimize: String,
}

/// Handle the compare subcommand.
///
/// Reads a routing-service response from `routes_path`, scores each
/// candidate and reports the shortest, eco and preferred routes.
pub fn handle_compare_command(
    catalog: &VehicleCatalog,
    format: OutputFormat,
    routes_path: &Path,
    args: &CompareCommandArgs,
) -> Result<()> {
    let report = build_report(catalog, routes_path, args)?;

    match format {
        OutputFormat::Text => print!("{}", render_comparison(&report, &ColorPalette::detect())),
        OutputFormat::Json => write_json(&report).context("failed to write JSON output")?,
    }
    Ok(())
}

fn build_report(
    catalog: &VehicleCatalog,
    routes_path: &Path,
    args: &CompareCommandArgs,
) -> Result<ComparisonReport> {
    let response = RoutingResponse::from_path(routes_path).with_context(|| {
        format!(
            "failed to read routing response from {}",
            routes_path.display()
        )
    })?;

    // The response already holds the candidates, so the endpoints only label
    // the plan.
    let (origin, destination) = response.endpoints();
    let geocoder = StaticGeocoder::new()
        .with_location(ORIGIN, Location::new(origin, ORIGIN))
        .with_location(DESTINATION, Location::new(destination, DESTINATION));
    let provider = StaticRouteProvider::new(response);

    let request = PlanRequest::new(ORIGIN, DESTINATION)
        .with_vehicle(VehicleKind::from_str_lossy(&args.vehicle))
        .with_goal(OptimizationGoal::from_str_lossy(&args.optimize));
    let plan = plan_routes(&geocoder, &provider, catalog, &request)?;

    Ok(ComparisonReport::from_plan(&plan))
}
