#![allow(dead_code)]

use std::path::PathBuf;

use ecoroute_lib::GeoPoint;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .join(name)
}

pub fn p(lat: f64, lon: f64) -> GeoPoint {
    GeoPoint::new(lat, lon)
}

/// Collinear path with `len` points heading north-east.
pub fn straight_line(len: usize) -> Vec<GeoPoint> {
    (0..len).map(|i| p(i as f64, i as f64)).collect()
}

/// Zig-zag path whose interior angles are all exactly 90 degrees.
pub fn right_angle_staircase(len: usize) -> Vec<GeoPoint> {
    (0..len)
        .map(|i| p(((i + 1) / 2) as f64, (i / 2) as f64))
        .collect()
}
