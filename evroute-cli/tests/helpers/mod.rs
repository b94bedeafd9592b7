use crate::format::request::{PlanRequest, VehicleSpec};
use evroute_core::models::common::Point;

pub const KYIV_LVIV_REQUEST_PATH: &str = "data/kyiv-lviv.request.json";
pub const SHORT_TRIP_REQUEST_PATH: &str = "data/short-trip.request.json";
pub const INVALID_REQUEST_PATH: &str = "data/invalid.request.json";
pub const FULL_CONFIG_PATH: &str = "data/config.full.json";
pub const STATION_CATALOG_PATH: &str = "data/stations.catalog.json";

pub fn create_request(start: (f64, f64), end: (f64, f64), battery_level: f64) -> PlanRequest {
    PlanRequest {
        start_point: Point::new(start.0, start.1),
        end_point: Point::new(end.0, end.1),
        battery_level,
        vehicle: None,
    }
}

pub fn create_request_with_vehicle(battery_capacity: Option<f64>, consumption_per_km: Option<f64>) -> PlanRequest {
    PlanRequest {
        vehicle: Some(VehicleSpec { battery_capacity, consumption_per_km }),
        ..create_request((50.4501, 30.5234), (49.8397, 24.0297), 80.)
    }
}
