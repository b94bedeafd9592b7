//! Planning response format: route json and its GeoJSON representation.

#[cfg(test)]
#[path = "../../tests/unit/format/solution_test.rs"]
mod solution_test;

use evroute_core::models::Route;
use evroute_core::planning::PlanVerdict;
use serde::Serialize;
use std::collections::HashMap;
use std::io::{BufWriter, Write};

const SUCCESS_MESSAGE: &str = "Route is built successfully";

/// A planning response.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResponse {
    /// False if the trip is not feasible.
    pub success: bool,
    /// Route classification.
    pub verdict: PlanVerdict,
    /// The planned route.
    pub route: Route,
    /// Planning time in milliseconds.
    pub execution_time: u64,
    /// Route warning or a success message.
    pub message: String,
    /// True if route has a warning.
    pub has_warning: bool,
}

impl PlanResponse {
    /// Creates a new instance of `PlanResponse`.
    pub fn new(route: Route, verdict: PlanVerdict, execution_time: u128) -> Self {
        let message = route.warning.clone().unwrap_or_else(|| SUCCESS_MESSAGE.to_string());

        Self {
            success: verdict != PlanVerdict::Infeasible,
            verdict,
            has_warning: route.warning.is_some(),
            route,
            execution_time: u64::try_from(execution_time).unwrap_or(u64::MAX),
            message,
        }
    }
}

/// Writes planning response as pretty json.
pub fn write_plan_json<W: Write>(response: &PlanResponse, writer: BufWriter<W>) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, response).map_err(|err| format!("cannot write route: '{err}'"))
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
struct Feature {
    properties: HashMap<String, String>,
    geometry: Geometry,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type")]
struct FeatureCollection {
    features: Vec<Feature>,
}

/// Writes route as GeoJSON feature collection: route line, trip ends and charging stops.
pub fn write_geo_json<W: Write>(route: &Route, writer: BufWriter<W>) -> Result<(), String> {
    serde_json::to_writer_pretty(writer, &create_geojson_route(route))
        .map_err(|err| format!("cannot write geojson: '{err}'"))
}

fn create_geojson_route(route: &Route) -> FeatureCollection {
    let coordinates = route
        .geometry
        .as_ref()
        .map(|geometry| geometry.coordinates.clone())
        .unwrap_or_else(|| route.points.iter().map(|point| point.as_lon_lat()).collect());

    let line = Feature {
        properties: slice_to_map(&[
            ("stroke", "#1f78b4"),
            ("stroke-width", "4"),
            ("distance", format!("{:.2}", route.stats.distance).as_str()),
            ("charging_stops", route.stats.charging_stops.to_string().as_str()),
        ]),
        geometry: Geometry::LineString { coordinates },
    };

    let ends = route.points.first().into_iter().zip(route.points.last()).flat_map(|(start, end)| {
        [("start", "car", start), ("end", "marker", end)].into_iter().map(|(kind, symbol, point)| Feature {
            properties: slice_to_map(&[
                ("marker-color", "#33a02c"),
                ("marker-size", "medium"),
                ("marker-symbol", symbol),
                ("kind", kind),
                ("name", point.address.as_deref().unwrap_or(kind)),
            ]),
            geometry: Geometry::Point { coordinates: point.as_lon_lat() },
        })
    });

    let stops = route.charging_stops.iter().enumerate().map(|(idx, station)| Feature {
        properties: slice_to_map(&[
            ("marker-color", "#e31a1c"),
            ("marker-size", "medium"),
            ("marker-symbol", "fuel"),
            ("kind", "charging"),
            ("stop_idx", idx.to_string().as_str()),
            ("id", station.id.as_str()),
            ("name", station.location.address.as_deref().unwrap_or(station.id.as_str())),
            ("power_kw", station.power_kw.to_string().as_str()),
        ]),
        geometry: Geometry::Point { coordinates: station.location.as_lon_lat() },
    });

    FeatureCollection { features: std::iter::once(line).chain(ends).chain(stops).collect() }
}

fn slice_to_map(vec: &[(&str, &str)]) -> HashMap<String, String> {
    vec.iter().map(|&(key, value)| (key.to_string(), value.to_string())).collect()
}
