//! Planning request format.

#[cfg(test)]
#[path = "../../tests/unit/format/request_test.rs"]
mod request_test;

use super::FormatError;
use evroute_core::models::common::{Percent, Point, Vehicle};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Read};

/// Vehicle parameters of the request, missing ones are taken from the default vehicle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSpec {
    /// Battery capacity, kWh.
    pub battery_capacity: Option<f64>,
    /// Consumption, kWh per km.
    pub consumption_per_km: Option<f64>,
}

/// A request to plan a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Trip origin.
    pub start_point: Point,
    /// Trip destination.
    pub end_point: Point,
    /// Initial battery level, percent.
    pub battery_level: Percent,
    /// Vehicle parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<VehicleSpec>,
}

impl PlanRequest {
    /// Returns vehicle model for the request.
    pub fn vehicle(&self) -> Vehicle {
        let default = Vehicle::default();
        let spec = self.vehicle.clone().unwrap_or_default();

        Vehicle::new(
            spec.battery_capacity.unwrap_or(default.battery_capacity),
            spec.consumption_per_km.unwrap_or(default.consumption_per_km),
        )
    }
}

/// Deserializes planning request from json.
pub fn deserialize_request<R: Read>(reader: BufReader<R>) -> Result<PlanRequest, Vec<FormatError>> {
    serde_json::from_reader(reader).map_err(|err| {
        vec![FormatError::new(
            "E0000".to_string(),
            "cannot deserialize request".to_string(),
            format!("check input json: '{err}'"),
        )]
    })
}

/// Serializes planning request into json string.
pub fn serialize_request(request: &PlanRequest) -> Result<String, String> {
    serde_json::to_string_pretty(request).map_err(|err| format!("cannot serialize request: '{err}'"))
}
