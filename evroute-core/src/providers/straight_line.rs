#[cfg(test)]
#[path = "../../tests/unit/providers/straight_line_test.rs"]
mod straight_line_test;

use super::*;
use crate::models::common::ASSUMED_SPEED_KMH;
use std::iter::once;

/// A routing provider which approximates roads by great-circle lines.
pub struct StraightLineRouting {
    speed: f64,
    road_factor: f64,
}

impl StraightLineRouting {
    /// Creates a new instance of `StraightLineRouting` with custom average speed (km/h) and road
    /// factor: a multiplier applied to straight distances to imitate road curvature.
    pub fn new(speed: f64, road_factor: f64) -> Self {
        assert!(speed > 0.);
        assert!(road_factor >= 1.);

        Self { speed, road_factor }
    }
}

impl Default for StraightLineRouting {
    fn default() -> Self {
        Self::new(ASSUMED_SPEED_KMH, 1.)
    }
}

impl RoadRoutingProvider for StraightLineRouting {
    fn get_route(&self, start: &Point, end: &Point, waypoints: &[Point]) -> GenericResult<RouteData> {
        let route = get_straight_line_route(start, end, waypoints);
        let distance = route.distance * self.road_factor;

        Ok(RouteData { distance, duration: distance / self.speed, ..route })
    }
}

/// Builds route data using straight lines between points and assumed average speed.
pub fn get_straight_line_route(start: &Point, end: &Point, waypoints: &[Point]) -> RouteData {
    let points = once(start).chain(waypoints.iter()).chain(once(end)).collect::<Vec<_>>();
    let distance = points.windows(2).map(|pair| pair[0].distance_to(pair[1])).sum::<Distance>();

    RouteData {
        distance,
        duration: distance / ASSUMED_SPEED_KMH,
        geometry: points.iter().map(|point| point.as_lon_lat()).collect(),
        is_straight_line: true,
    }
}
