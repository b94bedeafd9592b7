//! Charging station catalog format.

#[cfg(test)]
#[path = "../../tests/unit/format/stations_test.rs"]
mod stations_test;

use evroute_core::models::common::{Availability, ChargingStation, Distance, Point, Power};
use evroute_core::providers::StationCatalog;
use serde::{Deserialize, Serialize};
use std::io::{BufReader, BufWriter, Read, Write};

/// A station catalog file.
#[derive(Clone, Debug, Deserialize)]
pub struct CatalogFile {
    /// Catalog stations.
    pub stations: Vec<ChargingStation>,
}

/// A station listing entry.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationInfo {
    /// Station id.
    pub id: String,
    /// Station location.
    pub location: Point,
    /// Power rating, kW.
    pub power_kw: Power,
    /// Availability state.
    pub availability: Availability,
    /// Distance from the search point, km.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<Distance>,
}

/// A station listing.
#[derive(Clone, Debug, Serialize)]
pub struct StationsResponse {
    /// Always true.
    pub success: bool,
    /// Amount of listed stations.
    pub count: usize,
    /// Listed stations.
    pub stations: Vec<StationInfo>,
}

impl StationsResponse {
    /// Creates a listing, distances are calculated when `origin` is specified.
    pub fn new(stations: &[ChargingStation], origin: Option<&Point>) -> Self {
        let stations = stations
            .iter()
            .map(|station| StationInfo {
                id: station.id.clone(),
                location: station.location.clone(),
                power_kw: station.power_kw,
                availability: station.availability,
                distance: origin.map(|origin| round_distance(origin.distance_to(&station.location))),
            })
            .collect::<Vec<_>>();

        Self { success: true, count: stations.len(), stations }
    }
}

/// Reads station catalog from json.
pub fn read_catalog<R: Read>(reader: BufReader<R>) -> Result<StationCatalog, String> {
    serde_json::from_reader::<_, CatalogFile>(reader)
        .map(|file| StationCatalog::new(file.stations))
        .map_err(|err| format!("cannot deserialize station catalog: '{err}'"))
}

/// Writes station listing as pretty json.
pub fn write_stations_json<W: Write>(response: &StationsResponse, writer: BufWriter<W>) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, response).map_err(|err| format!("cannot write stations: '{err}'"))
}

fn round_distance(distance: Distance) -> Distance {
    (distance * 100.).round() / 100.
}
