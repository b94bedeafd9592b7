#[cfg(test)]
#[path = "../../tests/unit/models/route_test.rs"]
mod route_test;

use crate::models::common::*;
use serde::Serialize;

/// Aggregated route statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteStats {
    /// Total distance in km.
    pub distance: Distance,
    /// Driving time in hours.
    pub time: Duration,
    /// Charging time in hours.
    pub charging_time: Duration,
    /// Driving and charging time in hours.
    pub total_time: Duration,
    /// Amount of charging stops.
    pub charging_stops: usize,
}

/// A road geometry of the route as GeoJSON `LineString`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Geometry {
    /// Geometry type, always `LineString`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Coordinates in `[lon, lat]` order.
    pub coordinates: Vec<[f64; 2]>,
}

impl Geometry {
    /// Creates a line string geometry.
    pub fn line_string(coordinates: Vec<[f64; 2]>) -> Self {
        Self { kind: "LineString".to_string(), coordinates }
    }
}

/// A leg between two consecutive route points.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    /// Leg start.
    pub from: Point,
    /// Leg end.
    pub to: Point,
    /// Leg distance in km.
    pub distance: Distance,
    /// Leg duration in hours.
    pub duration: Duration,
    /// True if leg is approximated by straight line.
    pub is_straight_line: bool,
}

/// A planned route: visited points, used charging stations and aggregated statistics.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Points in visiting order.
    pub points: Vec<Point>,
    /// Charging stations in visiting order.
    pub charging_stops: Vec<ChargingStation>,
    /// Aggregated statistics.
    pub stats: RouteStats,
    /// A warning or informational message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    /// Road geometry when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    /// Per segment breakdown when known.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub segments: Vec<RouteSegment>,
}

impl Route {
    /// Creates a route which visits given points without charging, statistics are calculated.
    pub fn new_direct(start: Point, end: Point) -> Self {
        let mut route = Self { points: vec![start, end], ..Self::default() };
        route.calculate_stats();

        route
    }

    /// Creates a two point route with the warning attached.
    pub fn new_warning(start: Point, end: Point, warning: String) -> Self {
        Self { warning: Some(warning), ..Self::new_direct(start, end) }
    }

    /// Adds a point to the end of the route.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Adds a charging stop. Its location is expected to be added as point separately.
    pub fn add_charging_stop(&mut self, station: ChargingStation) {
        self.charging_stops.push(station);
    }

    /// Sets total charging time.
    pub fn set_charging_time(&mut self, charging_time: Duration) {
        self.stats.charging_time = charging_time;
        self.stats.total_time = self.stats.time + charging_time;
    }

    /// Returns straight line distance along all route points.
    pub fn straight_distance(&self) -> Distance {
        self.points.windows(2).map(|pair| pair[0].distance_to(&pair[1])).sum()
    }

    /// Recalculates statistics using straight line distances and assumed average speed.
    /// Road geometry and segments become stale, so they are dropped.
    pub fn calculate_stats(&mut self) -> &RouteStats {
        let distance = self.straight_distance();

        self.geometry = None;
        self.segments.clear();
        self.apply_travel(distance, distance / ASSUMED_SPEED_KMH);

        &self.stats
    }

    /// Applies travel distance and duration obtained from elsewhere, e.g. from road routing.
    pub fn apply_travel(&mut self, distance: Distance, time: Duration) {
        self.stats.distance = distance;
        self.stats.time = time;
        self.stats.total_time = time + self.stats.charging_time;
        self.stats.charging_stops = self.charging_stops.len();
    }

    /// Returns a charging stop located at the given point, if any.
    pub fn charging_stop_at(&self, point: &Point) -> Option<&ChargingStation> {
        const LOCATION_TOLERANCE_DEG: f64 = 0.001;

        self.charging_stops.iter().find(|station| station.location.is_same_location(point, LOCATION_TOLERANCE_DEG))
    }
}
