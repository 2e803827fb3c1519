//! Route geometry and the turn-penalty heuristic.
//!
//! The penalty is a coarse proxy for route windiness: every interior vertex of
//! a polyline is scored by the angle between `(b - a)` and `(b - c)`, where `b`
//! is the vertex and `a`/`c` its neighbours. With that convention a collinear
//! continuation measures 180° and a hairpin measures close to 0°.

use serde::{Deserialize, Serialize};

/// Starting value of the accumulated penalty.
pub const BASE_PENALTY: f64 = 1.0;
/// Upper clamp of the accumulated penalty.
pub const MAX_PENALTY: f64 = 1.6;
/// Angle (degrees) above which a vertex contributes [`MODERATE_TURN_PENALTY`].
pub const MODERATE_TURN_DEGREES: f64 = 40.0;
/// Angle (degrees) above which a vertex additionally contributes [`SHARP_TURN_PENALTY`].
pub const SHARP_TURN_DEGREES: f64 = 90.0;
pub const MODERATE_TURN_PENALTY: f64 = 0.01;
pub const SHARP_TURN_PENALTY: f64 = 0.02;

/// Geographic point in degrees. Ranges are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Build from a `[lon, lat]` pair as emitted by GeoJSON-style geometries.
    pub const fn from_lon_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lon: pair[0],
        }
    }
}

/// Ordered path from origin to destination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polyline {
    points: Vec<GeoPoint>,
}

impl Polyline {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Turn-penalty factor for this path. See [`turn_penalty_factor`].
    pub fn turn_penalty_factor(&self) -> f64 {
        turn_penalty_factor(&self.points)
    }
}

impl From<Vec<GeoPoint>> for Polyline {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<GeoPoint> for Polyline {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Angle in degrees at `b` between the vectors `(b - a)` and `(b - c)`.
///
/// Returns `0.0` when either segment has zero length. The cosine is clamped to
/// `[-1, 1]` before `acos`, so the result always lies in `[0, 180]` for finite
/// input.
pub fn vertex_angle_degrees(a: GeoPoint, b: GeoPoint, c: GeoPoint) -> f64 {
    let ab = (b.lat - a.lat, b.lon - a.lon);
    let cb = (b.lat - c.lat, b.lon - c.lon);

    let mag_a = ab.0.hypot(ab.1);
    let mag_c = cb.0.hypot(cb.1);
    if mag_a == 0.0 || mag_c == 0.0 {
        return 0.0;
    }

    let dot = ab.0 * cb.0 + ab.1 * cb.1;
    let cos = (dot / (mag_a * mag_c)).clamp(-1.0, 1.0);
    cos.acos() * (180.0 / std::f64::consts::PI)
}

/// Multiplicative fuel/CO₂ penalty for a path, clamped to `[1.0, 1.6]`.
///
/// Paths with fewer than three points have no interior vertex and score
/// exactly `1.0`.
pub fn turn_penalty_factor(points: &[GeoPoint]) -> f64 {
    if points.len() < 3 {
        return BASE_PENALTY;
    }

    let mut penalty = BASE_PENALTY;
    for w in points.windows(3) {
        let angle = vertex_angle_degrees(w[0], w[1], w[2]);
        if angle > MODERATE_TURN_DEGREES {
            penalty += MODERATE_TURN_PENALTY;
        }
        if angle > SHARP_TURN_DEGREES {
            penalty += SHARP_TURN_PENALTY;
        }
    }

    // NaN angles fail both thresholds, so the sum stays finite.
    penalty.clamp(BASE_PENALTY, MAX_PENALTY)
}
