//! Per-route fuel, CO₂ and time estimation.
//!
//! The estimator is a pure function of its input: it performs no I/O, holds no
//! state and never fails. Degenerate geometry degrades to a neutral penalty.

use serde::{Deserialize, Serialize};

use crate::geometry::Polyline;
use crate::vehicle::{VehicleCatalog, VehicleKind};

/// One candidate route to be scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteInput {
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(default)]
    pub polyline: Polyline,
    #[serde(default)]
    pub vehicle: VehicleKind,
}

impl RouteInput {
    pub fn new(
        distance_km: f64,
        duration_min: f64,
        polyline: impl Into<Polyline>,
        vehicle: VehicleKind,
    ) -> Self {
        Self {
            distance_km,
            duration_min,
            polyline: polyline.into(),
            vehicle,
        }
    }
}

/// Derived figures for one route, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEstimate {
    /// Distance in kilometres, 2 decimals.
    pub distance_km: f64,
    /// Duration in whole minutes.
    pub duration_min: f64,
    /// Fuel in litres, 2 decimals.
    pub fuel_l: f64,
    /// CO₂ in kilograms, 2 decimals.
    pub co2_kg: f64,
    /// Turn-penalty multiplier, 3 decimals.
    pub turn_penalty_factor: f64,
    /// Duration in hours, 2 decimals.
    pub time_hours: f64,
}

/// Score a route against the given vehicle table.
///
/// ```
/// use ecoroute_lib::{estimate_route, GeoPoint, RouteInput, VehicleCatalog, VehicleKind};
///
/// let input = RouteInput::new(10.0, 15.0, Vec::<GeoPoint>::new(), VehicleKind::Car);
/// let estimate = estimate_route(&input, VehicleCatalog::builtin());
/// assert_eq!(estimate.fuel_l, 0.8);
/// assert_eq!(estimate.co2_kg, 1.92);
/// assert_eq!(estimate.time_hours, 0.25);
/// ```
pub fn estimate_route(input: &RouteInput, catalog: &VehicleCatalog) -> RouteEstimate {
    let profile = catalog.profile(input.vehicle);
    let turn_penalty_factor = input.polyline.turn_penalty_factor();

    let fuel_l =
        input.distance_km * profile.fuel_l_per_km * turn_penalty_factor * profile.weight_factor;
    let co2_kg =
        input.distance_km * profile.co2_per_km * turn_penalty_factor * profile.weight_factor;
    let time_hours = input.duration_min / 60.0;

    RouteEstimate {
        distance_km: round_to(input.distance_km, 2),
        duration_min: input.duration_min.round(),
        fuel_l: round_to(fuel_l, 2),
        co2_kg: round_to(co2_kg, 2),
        turn_penalty_factor: round_to(turn_penalty_factor, 3),
        time_hours: round_to(time_hours, 2),
    }
}

/// Round half away from zero at `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
