use super::*;
use crate::helpers::STATION_CATALOG_PATH;
use std::fs::File;

#[test]
fn can_read_catalog_from_file() {
    let catalog = read_catalog(BufReader::new(File::open(STATION_CATALOG_PATH).expect("cannot open catalog")))
        .expect("cannot read catalog");

    let stations = catalog.stations();
    assert_eq!(stations.len(), 3);
    assert_eq!(stations[0].id, "WEST-001");
    assert_eq!(stations[0].availability, Availability::Available);
    assert_eq!(stations[2].availability, Availability::Unavailable);
}

#[test]
fn can_report_malformed_catalog() {
    let result = read_catalog(BufReader::new(r#"{"stations": [{"id": "x"}]}"#.as_bytes()));

    assert!(result.is_err_and(|err| err.starts_with("cannot deserialize station catalog")));
}

#[test]
fn can_create_listing_with_distances() {
    let stations = vec![ChargingStation::new("st1", Point::new(0., 1.), 50.)];

    let response = StationsResponse::new(stations.as_slice(), Some(&Point::new(0., 0.)));

    assert_eq!(response.count, 1);
    assert_eq!(response.stations[0].distance, Some(111.19));
}

#[test]
fn can_create_listing_without_distances() {
    let stations = StationCatalog::builtin().stations().to_vec();

    let response = StationsResponse::new(stations.as_slice(), None);
    let mut buffer = Vec::new();
    write_stations_json(&response, BufWriter::new(&mut buffer)).expect("cannot write stations");

    let json = String::from_utf8(buffer).expect("not utf8");
    assert_eq!(response.count, stations.len());
    assert!(response.stations.iter().all(|station| station.distance.is_none()));
    assert!(json.contains("\"powerKw\""));
    assert!(!json.contains("\"distance\""));
}
