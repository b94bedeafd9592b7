use super::*;
use crate::helpers::models::*;
use crate::helpers::providers::{FailingStations, FixedStations};
use crate::models::common::Availability;
use crate::utils::create_silent_logger;

fn get_ids(stations: &[ChargingStation]) -> Vec<&str> {
    let mut ids = stations.iter().map(|station| station.id.as_str()).collect::<Vec<_>>();
    ids.sort();
    ids
}

#[test]
fn can_remove_duplicate_stations_keeping_powerful_ones() {
    let stations = vec![
        test_station("slow", Point::new(0., 0.), 50.),
        test_station("fast", Point::new(0., 0.02), 150.),
        test_station("far", Point::new(0., 1.), 22.),
        test_station("fast", Point::new(0., 2.), 150.),
    ];

    let result = remove_duplicate_stations(stations, 5.);

    assert_eq!(result.iter().map(|station| station.id.as_str()).collect::<Vec<_>>(), vec!["fast", "far"]);
}

parameterized_test! {can_calculate_corridor_limits, (direct, corridor, detour, deviation), {
    let config = PlannerConfig::default();

    assert_approx!(config.corridor_width(direct), corridor, 1E-9);
    assert_approx!(config.detour_limit(direct), detour, 1E-9);
    assert_approx!(config.line_deviation_limit(direct), deviation, 1E-9);
}}

can_calculate_corridor_limits! {
    case01_short: (300., 60., 90., 150.),
    case02_long: (1000., 100., 200., 250.),
}

#[test]
fn can_discover_usable_stations_within_detour() {
    let provider = FixedStations {
        along_route: vec![
            equator_station("on_line", 2.),
            test_station("detour", Point::new(5., 2.), 100.),
            equator_station("closed", 3.).with_availability(Availability::Unavailable),
            equator_station("private", 4.).with_availability(Availability::Private),
            equator_station("unknown", 5.).with_availability(Availability::Unknown),
        ],
        nearby: vec![],
    };
    let (fallback, config, logger) = (StationCatalog::default(), PlannerConfig::default(), create_silent_logger());
    let discovery = StationDiscovery::new(&provider, &fallback, &config, &logger);

    let stations = discovery.discover(&equator_point(0.), &equator_point(9.));

    assert_eq!(get_ids(&stations), vec!["on_line", "unknown"]);
}

#[test]
fn can_use_fallback_catalog_when_directory_fails() {
    let provider = FailingStations::default();
    let (config, logger) = (PlannerConfig::default(), create_silent_logger());
    let fallback = StationCatalog::new(equator_corridor_stations());
    let discovery = StationDiscovery::new(&provider, &fallback, &config, &logger);

    let stations = discovery.discover(&equator_point(0.), &equator_point(9.));

    assert_eq!(stations.len(), 5);
    assert_eq!(provider.calls(), 1);
}

#[test]
fn can_find_recovery_station() {
    let provider = FixedStations {
        along_route: vec![],
        nearby: vec![
            test_station("behind", Point::new(0., -0.2), 150.),
            test_station("ahead", Point::new(0.1, 0.2), 50.),
            test_station("too_far", Point::new(0., 0.4), 350.),
        ],
    };
    let (fallback, config, logger) = (StationCatalog::default(), PlannerConfig::default(), create_silent_logger());
    let discovery = StationDiscovery::new(&provider, &fallback, &config, &logger);
    let candidates = equator_corridor_stations();

    let (station, stations) = discovery
        .find_recovery_station(&equator_point(0.), &equator_point(9.), &candidates, &test_vehicle(), 10.)
        .expect("recovery station should be found");

    assert_eq!(station.id, "ahead");
    assert_eq!(stations.len(), 6);
    assert!(stations.iter().any(|station| station.id == "ahead"));
}

#[test]
fn can_return_no_recovery_station_when_nothing_is_reachable() {
    let provider = FixedStations { along_route: vec![], nearby: vec![test_station("far", Point::new(0., 0.4), 50.)] };
    let (fallback, config, logger) = (StationCatalog::default(), PlannerConfig::default(), create_silent_logger());
    let discovery = StationDiscovery::new(&provider, &fallback, &config, &logger);

    let result = discovery.find_recovery_station(&equator_point(0.), &equator_point(9.), &[], &test_vehicle(), 10.);

    assert!(result.is_none());
}

#[test]
fn can_calculate_detour() {
    assert_approx!(get_detour(&equator_point(0.), &equator_point(2.), &equator_point(1.)), 0., 1E-9);
    assert!(get_detour(&equator_point(0.), &equator_point(2.), &Point::new(1., 1.)) > 40.);
}
