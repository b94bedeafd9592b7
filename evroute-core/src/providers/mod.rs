//! Specifies contracts of external collaborators used by the planner and their pure-computation
//! implementations.
//!
//! Network backed implementations (e.g. OSRM routing or OpenChargeMap directory) are expected to
//! implement the same traits and to own their timeouts. The planner never trusts a provider: any
//! error or empty answer is substituted with a deterministic local approximation.

mod cache;
pub use self::cache::*;

mod catalog;
pub use self::catalog::*;

mod straight_line;
pub use self::straight_line::*;

use crate::models::common::{ChargingStation, Distance, Duration, Point};
use crate::utils::GenericResult;

/// A route information returned by a road routing provider.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteData {
    /// Distance in km.
    pub distance: Distance,
    /// Duration in hours.
    pub duration: Duration,
    /// Path geometry as `[lon, lat]` pairs.
    pub geometry: Vec<[f64; 2]>,
    /// True if data is approximated by straight lines.
    pub is_straight_line: bool,
}

/// Maps two or more coordinates to a real world distance, travel duration and path geometry.
pub trait RoadRoutingProvider: Send + Sync {
    /// Returns route from `start` to `end` through given `waypoints`.
    fn get_route(&self, start: &Point, end: &Point, waypoints: &[Point]) -> GenericResult<RouteData>;

    /// Returns road distance between two points.
    fn get_distance(&self, from: &Point, to: &Point) -> GenericResult<Distance> {
        self.get_route(from, to, &[]).map(|route| route.distance)
    }
}

/// Returns charging stations near a point or along a corridor.
pub trait StationDirectoryProvider: Send + Sync {
    /// Returns stations within radius around the point.
    fn stations_nearby(&self, point: &Point, radius: Distance) -> GenericResult<Vec<ChargingStation>>;

    /// Returns stations within a corridor between `start` and `end`.
    fn stations_along_route(
        &self,
        start: &Point,
        end: &Point,
        corridor_width: Distance,
    ) -> GenericResult<Vec<ChargingStation>>;
}
