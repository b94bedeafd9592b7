//! This module provides functionality to validate planning request for logical correctness.

#[cfg(test)]
#[path = "../tests/unit/validation_test.rs"]
mod validation_test;

use crate::format::FormatError;
use crate::format::request::PlanRequest;
use evroute_core::models::common::Point;
use std::ops::RangeInclusive;

const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;
const BATTERY_LEVEL_RANGE: RangeInclusive<f64> = 0.0..=100.0;
const BATTERY_CAPACITY_RANGE: RangeInclusive<f64> = 10.0..=200.0;
const CONSUMPTION_RANGE: RangeInclusive<f64> = 0.05..=1.0;

/// Keeps the request to be validated.
pub struct ValidationContext<'a> {
    /// The request.
    pub request: &'a PlanRequest,
}

impl<'a> ValidationContext<'a> {
    /// Creates an instance of `ValidationContext`.
    pub fn new(request: &'a PlanRequest) -> Self {
        Self { request }
    }

    /// Validates request on set of rules.
    pub fn validate(&self) -> Result<(), Vec<FormatError>> {
        combine_error_results(&[
            check_e1000_start_point(self),
            check_e1001_end_point(self),
            check_e1002_battery_level(self),
            check_e1003_battery_capacity(self),
            check_e1004_consumption(self),
        ])
    }
}

fn is_valid_point(point: &Point) -> bool {
    LATITUDE_RANGE.contains(&point.lat) && LONGITUDE_RANGE.contains(&point.lon)
}

fn format_point(point: &Point) -> String {
    format!("lat={}, lon={}", point.lat, point.lon)
}

/// Checks that start point has valid coordinates.
fn check_e1000_start_point(ctx: &ValidationContext) -> Result<(), FormatError> {
    let point = &ctx.request.start_point;

    if is_valid_point(point) {
        Ok(())
    } else {
        Err(FormatError::new_with_details(
            "E1000".to_string(),
            "start point has invalid coordinates".to_string(),
            "use latitude in [-90, 90] and longitude in [-180, 180]".to_string(),
            format_point(point),
        ))
    }
}

/// Checks that end point has valid coordinates.
fn check_e1001_end_point(ctx: &ValidationContext) -> Result<(), FormatError> {
    let point = &ctx.request.end_point;

    if is_valid_point(point) {
        Ok(())
    } else {
        Err(FormatError::new_with_details(
            "E1001".to_string(),
            "end point has invalid coordinates".to_string(),
            "use latitude in [-90, 90] and longitude in [-180, 180]".to_string(),
            format_point(point),
        ))
    }
}

/// Checks that battery level is a percentage.
fn check_e1002_battery_level(ctx: &ValidationContext) -> Result<(), FormatError> {
    let level = ctx.request.battery_level;

    if BATTERY_LEVEL_RANGE.contains(&level) {
        Ok(())
    } else {
        Err(FormatError::new_with_details(
            "E1002".to_string(),
            "invalid battery level".to_string(),
            "use battery level in [0, 100] percent".to_string(),
            level.to_string(),
        ))
    }
}

/// Checks that vehicle battery capacity is realistic.
fn check_e1003_battery_capacity(ctx: &ValidationContext) -> Result<(), FormatError> {
    match ctx.request.vehicle.as_ref().and_then(|vehicle| vehicle.battery_capacity) {
        Some(capacity) if !BATTERY_CAPACITY_RANGE.contains(&capacity) => Err(FormatError::new_with_details(
            "E1003".to_string(),
            "invalid vehicle battery capacity".to_string(),
            "use battery capacity in [10, 200] kWh".to_string(),
            capacity.to_string(),
        )),
        _ => Ok(()),
    }
}

/// Checks that vehicle consumption is realistic.
fn check_e1004_consumption(ctx: &ValidationContext) -> Result<(), FormatError> {
    match ctx.request.vehicle.as_ref().and_then(|vehicle| vehicle.consumption_per_km) {
        Some(consumption) if !CONSUMPTION_RANGE.contains(&consumption) => Err(FormatError::new_with_details(
            "E1004".to_string(),
            "invalid vehicle consumption".to_string(),
            "use consumption in [0.05, 1] kWh/km".to_string(),
            consumption.to_string(),
        )),
        _ => Ok(()),
    }
}

/// Combines error results.
pub fn combine_error_results<T: Clone>(results: &[Result<(), T>]) -> Result<(), Vec<T>> {
    let errors = results.iter().cloned().flat_map(|result| result.err().into_iter()).collect::<Vec<T>>();

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
