#[cfg(test)]
#[path = "../../tests/unit/providers/catalog_test.rs"]
mod catalog_test;

use super::*;
use crate::utils::compare_floats;

/// An in-memory station directory.
#[derive(Clone, Debug, Default)]
pub struct StationCatalog {
    stations: Vec<ChargingStation>,
}

impl StationCatalog {
    /// Creates a new instance of `StationCatalog`.
    pub fn new(stations: Vec<ChargingStation>) -> Self {
        Self { stations }
    }

    /// Creates a small built-in catalog of stations along main Ukrainian highways. It is used as
    /// a fallback when a station directory fails or returns nothing.
    pub fn builtin() -> Self {
        let station = |id: &str, lat: f64, lon: f64, address: &str, power: f64| {
            ChargingStation::new(id, Point::with_address(lat, lon, address), power)
        };

        Self::new(vec![
            station("TEST-001", 50.4501, 30.5234, "Kyiv, center", 150.),
            station("TEST-002", 50.4021, 30.3926, "Kyiv, Teremky", 100.),
            station("TEST-003", 50.3800, 30.0950, "Vasylkiv", 100.),
            station("TEST-004", 50.2547, 28.6587, "Zhytomyr", 150.),
            station("TEST-005", 50.0650, 27.6831, "Novohrad-Volynskyi", 100.),
            station("TEST-006", 50.2297, 26.2510, "Rivne", 150.),
            station("TEST-007", 49.8419, 24.0316, "Lviv", 150.),
            station("TEST-008", 49.8397, 30.1090, "Bila Tserkva", 100.),
            station("TEST-009", 49.2328, 28.4810, "Vinnytsia", 150.),
            station("TEST-010", 49.4216, 26.9971, "Khmelnytskyi", 100.),
            station("TEST-011", 49.5535, 25.5948, "Ternopil", 100.),
            station("TEST-012", 48.6900, 31.8900, "Uman", 100.),
            station("TEST-013", 47.9103, 33.3917, "Kropyvnytskyi", 100.),
            station("TEST-014", 46.9659, 32.0000, "Mykolaiv", 100.),
            station("TEST-015", 46.4825, 30.7233, "Odesa", 150.),
            station("TEST-016", 50.7472, 32.6686, "Pryluky", 75.),
            station("TEST-017", 50.2500, 34.4900, "Lubny", 75.),
            station("TEST-018", 49.9935, 36.2304, "Kharkiv", 150.),
            station("TEST-019", 49.5883, 34.5514, "Poltava", 100.),
            station("TEST-020", 48.4647, 35.0462, "Dnipro", 150.),
            station("TEST-021", 48.9226, 24.7111, "Ivano-Frankivsk", 100.),
            station("TEST-022", 48.6208, 22.2879, "Uzhhorod", 75.),
            station("TEST-023", 48.0100, 24.1350, "Kolomyia", 50.),
            station("TEST-024", 51.4982, 31.2893, "Chernihiv", 75.),
            station("TEST-025", 50.9077, 34.7981, "Sumy", 75.),
        ])
    }

    /// Returns all stations.
    pub fn stations(&self) -> &[ChargingStation] {
        self.stations.as_slice()
    }

    /// Returns stations within radius around the point sorted by distance from it.
    pub fn find_nearby(&self, point: &Point, radius: Distance) -> Vec<ChargingStation> {
        let stations = self.stations.iter().filter(|station| point.distance_to(&station.location) <= radius);

        sort_by_distance_from(point, stations.cloned().collect())
    }

    /// Returns stations which detour between `start` and `end` is less than corridor width,
    /// sorted by distance from start.
    pub fn find_along_route(&self, start: &Point, end: &Point, corridor_width: Distance) -> Vec<ChargingStation> {
        let direct = start.distance_to(end);
        let stations = self.stations.iter().filter(|station| {
            start.distance_to(&station.location) + station.location.distance_to(end) - direct < corridor_width
        });

        sort_by_distance_from(start, stations.cloned().collect())
    }
}

impl StationDirectoryProvider for StationCatalog {
    fn stations_nearby(&self, point: &Point, radius: Distance) -> GenericResult<Vec<ChargingStation>> {
        Ok(self.find_nearby(point, radius))
    }

    fn stations_along_route(
        &self,
        start: &Point,
        end: &Point,
        corridor_width: Distance,
    ) -> GenericResult<Vec<ChargingStation>> {
        Ok(self.find_along_route(start, end, corridor_width))
    }
}

fn sort_by_distance_from(point: &Point, mut stations: Vec<ChargingStation>) -> Vec<ChargingStation> {
    stations.sort_by(|a, b| compare_floats(point.distance_to(&a.location), point.distance_to(&b.location)));
    stations
}
