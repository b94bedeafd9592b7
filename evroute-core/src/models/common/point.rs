#[cfg(test)]
#[path = "../../../tests/unit/models/common/point_test.rs"]
mod point_test;

use super::Distance;
use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.;

/// An approximate length of one degree of latitude in kilometers.
const KM_PER_DEGREE: f64 = 111.;

/// Represents a geographic point: latitude and longitude in degrees with an optional label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude, [-90, 90].
    pub lat: f64,
    /// Longitude, [-180, 180].
    pub lon: f64,
    /// An optional human readable label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Point {
    /// Creates a new point without label.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon, address: None }
    }

    /// Creates a new labeled point.
    pub fn with_address(lat: f64, lon: f64, address: &str) -> Self {
        Self { lat, lon, address: Some(address.to_string()) }
    }

    /// Returns great-circle distance to other point.
    pub fn distance_to(&self, other: &Point) -> Distance {
        haversine_distance(self, other)
    }

    /// Checks whether both points share coordinates within given tolerance (in degrees).
    pub fn is_same_location(&self, other: &Point, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() < tolerance && (self.lon - other.lon).abs() < tolerance
    }

    /// Returns coordinates in `[lon, lat]` order used by GeoJSON.
    pub fn as_lon_lat(&self) -> [f64; 2] {
        [self.lon, self.lat]
    }
}

/// Gets distance between two points using haversine formula.
pub fn haversine_distance(a: &Point, b: &Point) -> Distance {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let (lat1, lat2) = (a.lat.to_radians(), b.lat.to_radians());

    let h = (d_lat / 2.).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.).sin().powi(2);
    let c = 2. * h.sqrt().atan2((1. - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Gets an approximate distance from the point to the straight segment between `start` and `end`.
/// Coordinates are treated as planar, which is good enough to rank stations by their deviation
/// from the direct line.
pub fn distance_to_line(start: &Point, end: &Point, point: &Point) -> Distance {
    let (a, b) = (point.lat - start.lat, point.lon - start.lon);
    let (c, d) = (end.lat - start.lat, end.lon - start.lon);

    let length_sq = c * c + d * d;
    let param = if length_sq > 0. { (a * c + b * d) / length_sq } else { -1. };

    let (lat, lon) = match param {
        param if param < 0. => (start.lat, start.lon),
        param if param > 1. => (end.lat, end.lon),
        param => (start.lat + param * c, start.lon + param * d),
    };

    let (dx, dy) = (point.lat - lat, point.lon - lon);

    (dx * dx + dy * dy).sqrt() * KM_PER_DEGREE
}
