//! A crate which exposes the route planner through JSON formats and a command line interface.
//!
//! It contains:
//! - `format`: planning request, route response, GeoJSON output and station catalog files
//! - `validation`: logical checks of the planning request with coded errors
//! - `config`: planner configuration file

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub use evroute_core as core;

pub mod config;
pub mod format;
pub mod validation;

use crate::format::FormatError;
use crate::format::request::{PlanRequest, deserialize_request};
use crate::format::solution::PlanResponse;
use crate::validation::ValidationContext;
use evroute_core::prelude::*;
use evroute_core::utils::Timer;
use std::io::{BufReader, Read};

/// Reads planning request and checks it for logical correctness.
pub fn read_plan_request<R: Read>(reader: BufReader<R>) -> Result<PlanRequest, Vec<FormatError>> {
    let request = deserialize_request(reader)?;

    ValidationContext::new(&request).validate()?;

    Ok(request)
}

/// Plans a route for the validated request.
pub fn plan_request(planner: &RoutePlanner, request: &PlanRequest) -> PlanResponse {
    let vehicle = request.vehicle();

    let timer = Timer::start();
    let (route, verdict) =
        planner.plan_route_with_verdict(&request.start_point, &request.end_point, request.battery_level, &vehicle);

    PlanResponse::new(route, verdict, timer.elapsed_millis())
}

/// Returns errors serialized as json string.
pub fn get_errors_serialized(errors: &[FormatError]) -> String {
    FormatError::format_many_to_json(errors)
}
