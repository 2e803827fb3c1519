//! Interfaces to the external address-resolution and routing services.
//!
//! Network clients are not part of this crate. The traits describe what the
//! planning pipeline consumes; the `Static*` implementations serve fixed data
//! for offline use and tests.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::estimate::RouteInput;
use crate::geometry::{GeoPoint, Polyline};
use crate::vehicle::VehicleKind;

/// Status code the routing service reports on success.
pub const ROUTING_OK: &str = "Ok";

/// A resolved address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub display_name: String,
}

impl Location {
    pub fn new(point: GeoPoint, display_name: impl Into<String>) -> Self {
        Self {
            lat: point.lat,
            lon: point.lon,
            display_name: display_name.into(),
        }
    }
}

/// Resolves free-text queries to a location.
pub trait Geocoder {
    /// Returns [`Error::LocationNotFound`] when nothing matches.
    fn geocode(&self, query: &str) -> Result<Location>;
}

/// Produces candidate routes between two locations.
pub trait RouteProvider {
    fn fetch_routes(&self, from: &Location, to: &Location) -> Result<Vec<ProviderRoute>>;
}

/// Route geometry as reported by the routing service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteGeometry {
    /// `[lon, lat]` pairs in traversal order.
    #[serde(default)]
    pub coordinates: Vec<[f64; 2]>,
}

/// One candidate route in the routing service's units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderRoute {
    #[serde(rename = "distance", default)]
    pub distance_meters: f64,
    #[serde(rename = "duration", default)]
    pub duration_seconds: f64,
    #[serde(default)]
    pub geometry: RouteGeometry,
}

impl ProviderRoute {
    /// Geometry reordered to `(lat, lon)`.
    pub fn polyline(&self) -> Polyline {
        self.geometry
            .coordinates
            .iter()
            .copied()
            .map(GeoPoint::from_lon_lat)
            .collect()
    }

    /// Convert to estimator input: metres to km, seconds to minutes.
    pub fn to_route_input(&self, vehicle: VehicleKind) -> RouteInput {
        RouteInput {
            distance_km: self.distance_meters / 1000.0,
            duration_min: self.duration_seconds / 60.0,
            polyline: self.polyline(),
            vehicle,
        }
    }
}

/// Top-level routing service response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingResponse {
    pub code: String,
    #[serde(default)]
    pub routes: Vec<ProviderRoute>,
}

impl RoutingResponse {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// First and last point of the first candidate's geometry.
    ///
    /// Missing geometry yields `(0, 0)` for the absent end.
    pub fn endpoints(&self) -> (GeoPoint, GeoPoint) {
        let coordinates = self
            .routes
            .first()
            .map(|route| route.geometry.coordinates.as_slice())
            .unwrap_or_default();
        let at = |pair: Option<&[f64; 2]>| {
            pair.copied()
                .map(GeoPoint::from_lon_lat)
                .unwrap_or(GeoPoint::new(0.0, 0.0))
        };
        (at(coordinates.first()), at(coordinates.last()))
    }

    /// Unwrap the candidate list, failing on a non-success status.
    ///
    /// An empty list is returned as-is; callers decide whether that is an
    /// error.
    pub fn into_routes(self) -> Result<Vec<ProviderRoute>> {
        if self.code != ROUTING_OK {
            return Err(Error::RoutingUnavailable { code: self.code });
        }
        debug!(candidates = self.routes.len(), "routing response accepted");
        Ok(self.routes)
    }
}

/// Geocoder over a fixed, case-insensitive name table.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    locations: HashMap<String, Location>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location(mut self, query: &str, location: Location) -> Self {
        self.locations.insert(normalize_query(query), location);
        self
    }
}

impl Geocoder for StaticGeocoder {
    fn geocode(&self, query: &str) -> Result<Location> {
        self.locations
            .get(&normalize_query(query))
            .cloned()
            .ok_or_else(|| Error::LocationNotFound {
                query: query.to_string(),
            })
    }
}

/// Route provider that replays a fixed routing response.
#[derive(Debug, Clone, Default)]
pub struct StaticRouteProvider {
    response: RoutingResponse,
}

impl StaticRouteProvider {
    pub fn new(response: RoutingResponse) -> Self {
        Self { response }
    }
}

impl RouteProvider for StaticRouteProvider {
    fn fetch_routes(&self, _from: &Location, _to: &Location) -> Result<Vec<ProviderRoute>> {
        self.response.clone().into_routes()
    }
}

fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_units_and_swaps_coordinate_order() {
        let route = ProviderRoute {
            distance_meters: 12_500.0,
            duration_seconds: 900.0,
            geometry: RouteGeometry {
                coordinates: vec![[13.4, 52.5], [13.5, 52.6]],
            },
        };
        let input = route.to_route_input(VehicleKind::Van);
        assert_eq!(input.distance_km, 12.5);
        assert_eq!(input.duration_min, 15.0);
        assert_eq!(input.vehicle, VehicleKind::Van);
        assert_eq!(input.polyline.points()[0], GeoPoint::new(52.5, 13.4));
    }

    #[test]
    fn missing_distance_and_duration_default_to_zero() {
        let json = r#"{"code":"Ok","routes":[{"geometry":{"coordinates":[]}}]}"#;
        let routes = RoutingResponse::from_reader(json.as_bytes())
            .expect("valid json")
            .into_routes()
            .expect("ok status");
        assert_eq!(routes[0].distance_meters, 0.0);
        assert_eq!(routes[0].duration_seconds, 0.0);
    }

    #[test]
    fn non_ok_status_is_routing_unavailable() {
        let response = RoutingResponse {
            code: "NoSegment".to_string(),
            routes: Vec::new(),
        };
        match response.into_routes() {
            Err(Error::RoutingUnavailable { code }) => assert_eq!(code, "NoSegment"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn endpoints_follow_first_route_geometry() {
        let response = RoutingResponse {
            code: ROUTING_OK.to_string(),
            routes: vec![ProviderRoute {
                geometry: RouteGeometry {
                    coordinates: vec![[13.4, 52.5], [13.45, 52.51], [13.5, 52.6]],
                },
                ..ProviderRoute::default()
            }],
        };
        let (origin, destination) = response.endpoints();
        assert_eq!(origin, GeoPoint::new(52.5, 13.4));
        assert_eq!(destination, GeoPoint::new(52.6, 13.5));

        let (origin, destination) = RoutingResponse::default().endpoints();
        assert_eq!(origin, GeoPoint::new(0.0, 0.0));
        assert_eq!(destination, origin);
    }

    #[test]
    fn static_geocoder_is_case_insensitive() {
        let geocoder = StaticGeocoder::new().with_location(
            "Berlin",
            Location {
                lat: 52.52,
                lon: 13.405,
                display_name: "Berlin, Germany".to_string(),
            },
        );
        assert_eq!(geocoder.geocode(" berlin ").expect("found").lat, 52.52);
        assert!(matches!(
            geocoder.geocode("Atlantis"),
            Err(Error::LocationNotFound { .. })
        ));
    }
}
