use crate::helpers::create_test_environment;
use crate::helpers::models::*;
use crate::models::common::Point;
use crate::planning::{PlanVerdict, RoutePlanner};
use crate::providers::{StationCatalog, StraightLineRouting};
use std::sync::Arc;

#[test]
fn can_report_long_trip_without_reachable_stations() {
    let planner = RoutePlanner::new(
        Arc::new(StraightLineRouting::default()),
        Arc::new(StationCatalog::builtin()),
        create_test_environment(),
    );
    let (paris, warsaw) = (Point::new(48.8566, 2.3522), Point::new(52.2297, 21.0122));

    let (route, verdict) = planner.plan_route_with_verdict(&paris, &warsaw, 10., &test_vehicle());

    assert_eq!(verdict, PlanVerdict::Infeasible);
    assert_eq!(route.points.len(), 2);
    assert!(route.charging_stops.is_empty());
    assert!(route.warning.as_deref().is_some_and(|warning| !warning.is_empty()));
    assert_approx!(route.stats.distance, 1366.5, 1.);
}

#[test]
fn can_report_low_battery_far_from_stations() {
    let planner = RoutePlanner::new(
        Arc::new(StraightLineRouting::default()),
        Arc::new(StationCatalog::builtin()),
        create_test_environment(),
    );
    // Odesa region to Kharkiv with almost empty battery
    let start = Point::new(46.30, 30.30);
    let end = Point::new(49.9935, 36.2304);

    let (route, verdict) = planner.plan_route_with_verdict(&start, &end, 5., &test_vehicle());

    assert_eq!(verdict, PlanVerdict::Infeasible);
    assert_eq!(route.points.len(), 2);
    assert!(route.warning.as_deref().is_some_and(|warning| warning.contains("Recommendations")));
}
