//! Output formatting for vehicle tables, single estimates and comparisons.
//!
//! Text renderers return `String`s and the command handlers print them. JSON
//! output is written to stdout by [`write_json`].

use std::fmt::Write as _;
use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use ecoroute_lib::{
    OptimizationGoal, RouteEstimate, RoutePlan, VehicleCatalog, VehicleKind, VehicleProfile,
};

use crate::terminal::ColorPalette;

/// Output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// One row of the vehicle listing.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleRow {
    pub kind: VehicleKind,
    #[serde(flatten)]
    pub profile: VehicleProfile,
}

/// Flatten a catalog into serializable rows in table order.
pub fn vehicle_rows(catalog: &VehicleCatalog) -> Vec<VehicleRow> {
    catalog
        .entries()
        .map(|(kind, profile)| VehicleRow {
            kind,
            profile: *profile,
        })
        .collect()
}

/// Scored candidate without its geometry, as shown in comparison output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRow {
    pub idx: usize,
    #[serde(flatten)]
    pub estimate: RouteEstimate,
}

/// Serializable comparison report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub vehicle: VehicleKind,
    pub goal: OptimizationGoal,
    pub routes: Vec<CandidateRow>,
    pub shortest: usize,
    pub eco: usize,
    pub preferred: usize,
    pub co2_saved_percent: u32,
}

impl ComparisonReport {
    pub fn from_plan(plan: &RoutePlan) -> Self {
        Self {
            vehicle: plan.vehicle,
            goal: plan.goal,
            routes: plan
                .candidates
                .iter()
                .map(|c| CandidateRow {
                    idx: c.idx,
                    estimate: c.estimate,
                })
                .collect(),
            shortest: plan.shortest,
            eco: plan.eco,
            preferred: plan.preferred,
            co2_saved_percent: plan.co2_saved_percent,
        }
    }
}

/// Render the vehicle table.
pub fn render_vehicles(rows: &[VehicleRow], palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Available vehicles ({}):", rows.len());
    let _ = writeln!(
        out,
        "{}{:<6} {:>12} {:>12} {:>8} {:>8}{}",
        palette.white_bold,
        "Kind",
        "CO2/km (kg)",
        "Fuel/km (L)",
        "Weight",
        "kWh/km",
        palette.reset
    );
    for row in rows {
        let kwh = row
            .profile
            .electricity_kwh_per_km
            .map(|v| format!("{v:.2}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<6} {:>12.3} {:>12.3} {:>8.2} {:>8}",
            row.kind,
            row.profile.co2_per_km,
            row.profile.fuel_l_per_km,
            row.profile.weight_factor,
            kwh
        );
    }
    out
}

/// Render a single estimate.
pub fn render_estimate(vehicle: VehicleKind, estimate: &RouteEstimate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Vehicle: {vehicle}");
    let _ = writeln!(out, "Distance: {:.2} km", estimate.distance_km);
    let _ = writeln!(
        out,
        "Duration: {:.0} min ({:.2} h)",
        estimate.duration_min, estimate.time_hours
    );
    let _ = writeln!(out, "Fuel: {:.2} L", estimate.fuel_l);
    let _ = writeln!(out, "CO2: {:.2} kg", estimate.co2_kg);
    let _ = writeln!(out, "Turn penalty: {:.3}", estimate.turn_penalty_factor);
    out
}

/// Render the comparison table with shortest/eco/preferred tags.
pub fn render_comparison(report: &ComparisonReport, palette: &ColorPalette) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Compared {} route(s) for {} (optimizing for {}):",
        report.routes.len(),
        report.vehicle,
        report.goal
    );
    let _ = writeln!(
        out,
        "{}{:>3} {:>10} {:>8} {:>9} {:>9} {:>8}{}",
        palette.white_bold,
        "#",
        "Dist (km)",
        "Min",
        "Fuel (L)",
        "CO2 (kg)",
        "Penalty",
        palette.reset
    );

    for row in &report.routes {
        let e = &row.estimate;
        let mut tags = Vec::new();
        if row.idx == report.shortest {
            tags.push(format!("{}SHORTEST{}", palette.tag_shortest, palette.reset));
        }
        if row.idx == report.eco {
            tags.push(format!("{}ECO{}", palette.tag_eco, palette.reset));
        }
        if row.idx == report.preferred {
            tags.push(format!("{}PREFERRED{}", palette.tag_preferred, palette.reset));
        }
        let line = format!(
            "{:>3} {:>10.2} {:>8.0} {:>9.2} {:>9.2} {:>8.3}",
            row.idx, e.distance_km, e.duration_min, e.fuel_l, e.co2_kg, e.turn_penalty_factor
        );
        if tags.is_empty() {
            let _ = writeln!(out, "{line}");
        } else {
            let _ = writeln!(out, "{line}  {}", tags.join(" "));
        }
    }

    let _ = writeln!(
        out,
        "\n{}CO2 saved by eco route: {}%{}",
        palette.green, report.co2_saved_percent, palette.reset
    );
    out
}

/// Write `value` as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn write_json<T: Serialize>(value: &T) -> io::Result<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer_pretty(&mut stdout, value).map_err(io::Error::other)?;
    stdout.write_all(b"\n")?;
    Ok(())
}
