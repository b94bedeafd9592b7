use crate::helpers::create_test_environment;
use crate::helpers::models::*;
use crate::models::common::{Point, Vehicle};
use crate::planning::{PlanVerdict, RoutePlanner};
use crate::providers::{CachedRouting, StationCatalog, StraightLineRouting};
use std::sync::Arc;

fn create_builtin_planner() -> RoutePlanner {
    RoutePlanner::new(
        Arc::new(StraightLineRouting::default()),
        Arc::new(StationCatalog::builtin()),
        create_test_environment(),
    )
}

#[test]
fn can_plan_trip_to_the_same_place() {
    let planner = create_builtin_planner();

    let (route, verdict) = planner.plan_route_with_verdict(&kyiv(), &kyiv(), 50., &test_vehicle());

    assert_eq!(verdict, PlanVerdict::Direct);
    assert_eq!(route.points.len(), 2);
    assert_approx!(route.stats.distance, 0., 1E-6);
    assert_eq!(route.stats.charging_stops, 0);
    assert!(route.warning.is_none());
}

#[test]
fn can_plan_short_trip_without_charging() {
    let planner = create_builtin_planner();
    let end = Point::new(50.4501, 31.2284);

    let route = planner.plan_route(&kyiv(), &end, 100., &test_vehicle());

    assert_approx!(route.stats.distance, 50., 0.5);
    assert_eq!(route.points.len(), 2);
    assert_eq!(route.stats.charging_stops, 0);
    assert!(route.warning.is_none());
}

#[test]
fn can_plan_kyiv_lviv_trip() {
    let planner = create_builtin_planner();

    let (route, verdict) = planner.plan_route_with_verdict(&kyiv(), &lviv(), 80., &test_vehicle());

    assert_eq!(verdict, PlanVerdict::Success);
    assert!(route.stats.distance > 400. && route.stats.distance < 600.);
    assert!(route.stats.charging_stops > 0);
    assert_eq!(get_route_stop_ids(&route), vec!["TEST-005", "TEST-011"]);
    assert!(route.warning.is_none());
    assert_eq!(route.points.first(), Some(&kyiv()));
    assert_eq!(route.points.last(), Some(&lviv()));
}

#[test]
fn can_plan_kyiv_lviv_trip_with_bigger_battery() {
    let planner = create_builtin_planner();

    let route = planner.plan_route(&kyiv(), &lviv(), 100., &Vehicle::new(100., 0.18));

    assert!(route.warning.is_none());
    assert_eq!(route.stats.charging_stops, 0);
}

#[test]
fn can_produce_identical_distance_for_identical_inputs() {
    let plan = || {
        let routing = Arc::new(CachedRouting::new(StraightLineRouting::default()));
        RoutePlanner::new(routing, Arc::new(StationCatalog::builtin()), create_test_environment())
            .plan_route(&kyiv(), &lviv(), 80., &test_vehicle())
    };

    let first = plan();
    let second = plan();

    assert_eq!(first.stats.distance, second.stats.distance);
    assert_eq!(get_route_stop_ids(&first), get_route_stop_ids(&second));
}
