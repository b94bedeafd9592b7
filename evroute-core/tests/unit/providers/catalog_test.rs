use super::*;
use crate::helpers::models::{kyiv, lviv};
use crate::models::common::Availability;

fn get_ids(stations: &[ChargingStation]) -> Vec<&str> {
    stations.iter().map(|station| station.id.as_str()).collect()
}

#[test]
fn can_create_builtin_catalog() {
    let catalog = StationCatalog::builtin();

    assert_eq!(catalog.stations().len(), 25);
    assert!(catalog.stations().iter().all(|station| station.is_available()));
    assert_eq!(catalog.stations()[0].id, "TEST-001");
    assert_eq!(catalog.stations()[24].id, "TEST-025");
}

#[test]
fn can_find_nearby_stations_sorted_by_distance() {
    let catalog = StationCatalog::builtin();

    let stations = catalog.stations_nearby(&kyiv(), 50.).unwrap();

    assert_eq!(get_ids(&stations), vec!["TEST-001", "TEST-002", "TEST-003"]);
}

#[test]
fn can_find_stations_along_route() {
    let catalog = StationCatalog::builtin();
    let (start, end) = (kyiv(), lviv());

    let stations = catalog.stations_along_route(&start, &end, 93.6).unwrap();
    let ids = get_ids(&stations);

    assert!(ids.contains(&"TEST-004"));
    assert!(ids.contains(&"TEST-005"));
    assert!(ids.contains(&"TEST-011"));
    assert!(!ids.contains(&"TEST-015"));
    assert!(!ids.contains(&"TEST-018"));
    stations.windows(2).for_each(|pair| {
        assert!(start.distance_to(&pair[0].location) <= start.distance_to(&pair[1].location));
    });
}

#[test]
fn can_return_nothing_far_away() {
    let catalog = StationCatalog::builtin();

    let stations =
        catalog.stations_along_route(&Point::new(48.8566, 2.3522), &Point::new(52.2297, 21.0122), 100.).unwrap();

    assert!(stations.is_empty());
}

#[test]
fn can_use_station_properties() {
    let station = ChargingStation::new("s", Point::new(0., 0.), 50.);

    assert_eq!(station.charging_time(50.), 1.);
    assert!(station.is_usable());
    assert!(station.clone().with_availability(Availability::Unknown).is_usable());
    assert!(!station.clone().with_availability(Availability::Unknown).is_available());
    assert!(!station.clone().with_availability(Availability::Private).is_usable());
    assert!(!station.with_availability(Availability::Unavailable).is_usable());
}
