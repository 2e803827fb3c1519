//! EcoRoute library entry points.
//!
//! This crate scores alternative driving routes by distance, time, fuel and
//! CO₂, applying a geometric turn penalty derived from each route's polyline,
//! and picks the shortest and the lowest-emission candidate. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod compare;
pub mod error;
pub mod estimate;
pub mod geometry;
pub mod planning;
pub mod provider;
pub mod vehicle;

pub use compare::{co2_saved_percent, compare_estimates, OptimizationGoal, RouteComparison};
pub use error::{Error, Result};
pub use estimate::{estimate_route, round_to, RouteEstimate, RouteInput};
pub use geometry::{turn_penalty_factor, vertex_angle_degrees, GeoPoint, Polyline};
pub use planning::{
    compare_candidates, estimate_candidates, plan_routes, PlanRequest, RouteCandidate, RoutePlan,
};
pub use provider::{Geocoder, Location, ProviderRoute, RouteProvider, RoutingResponse};
pub use vehicle::{VehicleCatalog, VehicleKind, VehicleProfile};
