#[cfg(test)]
#[path = "../../tests/unit/planning/finalize_test.rs"]
mod finalize_test;

use crate::models::common::{Distance, Point};
use crate::models::{Geometry, Route, RouteSegment};
use crate::providers::{RoadRoutingProvider, get_straight_line_route};
use crate::utils::{Environment, parallel_collect};

/// Makes sure that the route ends at destination and calculates its statistics using road routing.
/// Every routing failure is substituted with straight line approximation.
pub fn finalize_route(
    route: &mut Route,
    end: &Point,
    routing: &dyn RoadRoutingProvider,
    destination_tolerance: Distance,
    environment: &Environment,
) {
    let is_end_missing = route.points.last().is_none_or(|last| last.distance_to(end) > destination_tolerance);

    if is_end_missing {
        (environment.logger)("destination is missing in the route, adding it");
        route.add_point(end.clone());
    }

    calculate_stats_with_routing(route, routing, environment);
}

/// Calculates route statistics, geometry and segments using road routing.
pub fn calculate_stats_with_routing(route: &mut Route, routing: &dyn RoadRoutingProvider, environment: &Environment) {
    let (start, end) = match route.points.as_slice() {
        [start, .., end] => (start.clone(), end.clone()),
        _ => {
            route.calculate_stats();
            return;
        }
    };

    let waypoints = &route.points[1..route.points.len() - 1];

    match routing.get_route(&start, &end, waypoints) {
        Ok(data) => {
            let segments = calculate_segments(route.points.as_slice(), routing, environment);

            route.apply_travel(data.distance, data.duration);
            route.geometry = Some(Geometry::line_string(data.geometry));
            route.segments = segments;
        }
        Err(err) => {
            (environment.logger)(&format!("road routing failed: '{err}', using straight lines"));
            route.calculate_stats();
        }
    }
}

/// Calculates every leg between consecutive points independently.
pub fn calculate_segments(
    points: &[Point],
    routing: &dyn RoadRoutingProvider,
    environment: &Environment,
) -> Vec<RouteSegment> {
    let legs = points.windows(2).map(|pair| (pair[0].clone(), pair[1].clone())).collect::<Vec<_>>();

    environment.create_thread_pool().execute(|| {
        parallel_collect(legs.as_slice(), |(from, to)| {
            let data = routing.get_route(from, to, &[]).unwrap_or_else(|_| get_straight_line_route(from, to, &[]));

            RouteSegment {
                from: from.clone(),
                to: to.clone(),
                distance: data.distance,
                duration: data.duration,
                is_straight_line: data.is_straight_line,
            }
        })
    })
}
