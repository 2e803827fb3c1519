//! End-to-end planning: resolve endpoints, fetch candidates, score and compare.
//!
//! # Example
//!
//! ```
//! use ecoroute_lib::provider::{
//!     Location, ProviderRoute, RouteGeometry, RoutingResponse, StaticGeocoder,
//!     StaticRouteProvider,
//! };
//! use ecoroute_lib::{plan_routes, PlanRequest, VehicleCatalog};
//!
//! let here = Location { lat: 0.0, lon: 0.0, display_name: "A".into() };
//! let geocoder = StaticGeocoder::new()
//!     .with_location("a", here.clone())
//!     .with_location("b", here);
//! let provider = StaticRouteProvider::new(RoutingResponse {
//!     code: "Ok".into(),
//!     routes: vec![ProviderRoute {
//!         distance_meters: 5_000.0,
//!         duration_seconds: 600.0,
//!         geometry: RouteGeometry::default(),
//!     }],
//! });
//!
//! let request = PlanRequest::new("a", "b");
//! let plan = plan_routes(&geocoder, &provider, VehicleCatalog::builtin(), &request)?;
//! assert_eq!(plan.candidates.len(), 1);
//! assert_eq!(plan.shortest, 0);
//! # Ok::<(), ecoroute_lib::Error>(())
//! ```

use serde::Serialize;
use tracing::{debug, info};

use crate::compare::{compare_estimates, OptimizationGoal, RouteComparison};
use crate::error::{Error, Result};
use crate::estimate::{estimate_route, RouteEstimate};
use crate::geometry::Polyline;
use crate::provider::{Geocoder, Location, ProviderRoute, RouteProvider};
use crate::vehicle::{VehicleCatalog, VehicleKind};

/// High-level planning request.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    pub from: String,
    pub to: String,
    pub vehicle: VehicleKind,
    pub goal: OptimizationGoal,
}

impl PlanRequest {
    /// Request with the default vehicle (`car`) and goal (`co2`).
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            vehicle: VehicleKind::default(),
            goal: OptimizationGoal::default(),
        }
    }

    pub fn with_vehicle(mut self, vehicle: VehicleKind) -> Self {
        self.vehicle = vehicle;
        self
    }

    pub fn with_goal(mut self, goal: OptimizationGoal) -> Self {
        self.goal = goal;
        self
    }
}

/// A scored candidate route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCandidate {
    /// Position in the provider's candidate list.
    pub idx: usize,
    pub estimate: RouteEstimate,
    /// Geometry in `(lat, lon)` order.
    pub polyline: Polyline,
}

/// Scored candidates plus the comparison summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub from: Location,
    pub to: Location,
    pub vehicle: VehicleKind,
    pub goal: OptimizationGoal,
    pub candidates: Vec<RouteCandidate>,
    pub shortest: usize,
    pub eco: usize,
    pub preferred: usize,
    pub co2_saved_percent: u32,
}

impl RoutePlan {
    pub fn shortest(&self) -> &RouteCandidate {
        &self.candidates[self.shortest]
    }

    pub fn eco(&self) -> &RouteCandidate {
        &self.candidates[self.eco]
    }

    pub fn preferred(&self) -> &RouteCandidate {
        &self.candidates[self.preferred]
    }
}

/// Score every provider route for `vehicle`, preserving input order.
pub fn estimate_candidates(
    routes: &[ProviderRoute],
    vehicle: VehicleKind,
    catalog: &VehicleCatalog,
) -> Vec<RouteCandidate> {
    routes
        .iter()
        .enumerate()
        .map(|(idx, route)| {
            let input = route.to_route_input(vehicle);
            let estimate = estimate_route(&input, catalog);
            debug!(
                idx,
                distance_km = estimate.distance_km,
                co2_kg = estimate.co2_kg,
                turn_penalty = estimate.turn_penalty_factor,
                "scored candidate"
            );
            RouteCandidate {
                idx,
                estimate,
                polyline: input.polyline,
            }
        })
        .collect()
}

/// Compare already-scored candidates.
pub fn compare_candidates(
    candidates: &[RouteCandidate],
    goal: OptimizationGoal,
) -> Result<RouteComparison> {
    let estimates: Vec<RouteEstimate> = candidates.iter().map(|c| c.estimate).collect();
    compare_estimates(&estimates, goal)
}

/// Run the full pipeline for one request.
///
/// # Errors
/// - [`Error::LocationNotFound`] if either endpoint cannot be resolved
/// - [`Error::RoutingUnavailable`] if the provider reports a failure
/// - [`Error::NoRoutes`] if the provider returns no candidates
pub fn plan_routes<G, P>(
    geocoder: &G,
    provider: &P,
    catalog: &VehicleCatalog,
    request: &PlanRequest,
) -> Result<RoutePlan>
where
    G: Geocoder + ?Sized,
    P: RouteProvider + ?Sized,
{
    let from = geocoder.geocode(&request.from)?;
    let to = geocoder.geocode(&request.to)?;

    let routes = provider.fetch_routes(&from, &to)?;
    if routes.is_empty() {
        return Err(Error::NoRoutes);
    }

    let candidates = estimate_candidates(&routes, request.vehicle, catalog);
    let comparison = compare_candidates(&candidates, request.goal)?;

    info!(
        from = %from.display_name,
        to = %to.display_name,
        vehicle = %request.vehicle,
        candidates = candidates.len(),
        shortest = comparison.shortest,
        eco = comparison.eco,
        co2_saved_percent = comparison.co2_saved_percent,
        "planned routes"
    );

    Ok(RoutePlan {
        from,
        to,
        vehicle: request.vehicle,
        goal: request.goal,
        candidates,
        shortest: comparison.shortest,
        eco: comparison.eco,
        preferred: comparison.preferred,
        co2_saved_percent: comparison.co2_saved_percent,
    })
}
