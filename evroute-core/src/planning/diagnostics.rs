#[cfg(test)]
#[path = "../../tests/unit/planning/diagnostics_test.rs"]
mod diagnostics_test;

use super::ReachabilityAnalysis;
use crate::models::common::{ChargingStation, Distance, Energy, Percent, Point, Vehicle};
use std::fmt::Write;

/// A message used when no charging stations are found along the trip.
pub const NO_STATIONS_MESSAGE: &str =
    "No charging stations found along the route. Try another route or increase the initial battery level.";

/// Explains why the trip cannot be planned and what can be changed to make it feasible.
#[derive(Clone, Debug, PartialEq)]
pub struct InfeasibilityReport {
    /// Distance to the nearest station, km.
    pub nearest_distance: Distance,
    /// Battery level required to reach the nearest station, if achievable.
    pub required_battery: Option<Percent>,
    /// Current battery capacity, kWh.
    pub battery_capacity: Energy,
    /// Recommended battery capacity, kWh.
    pub recommended_capacity: Energy,
    /// Current consumption, kWh/km.
    pub consumption_per_km: Energy,
}

impl InfeasibilityReport {
    /// Creates a report from reachability analysis.
    pub fn new(analysis: &ReachabilityAnalysis, vehicle: &Vehicle, battery_level: Percent) -> Self {
        let nearest_distance = analysis.nearest_distance;

        let required_battery = Some(nearest_distance / vehicle.full_range() * 100.)
            .filter(|required| required.is_finite())
            .map(f64::ceil)
            .filter(|&required| required <= 100. && battery_level <= 95.);

        let recommended_capacity = if nearest_distance.is_finite() {
            (nearest_distance * vehicle.consumption_per_km * 1.2).ceil()
        } else {
            0.
        };
        let recommended_capacity = if recommended_capacity > vehicle.battery_capacity {
            recommended_capacity
        } else {
            vehicle.battery_capacity + 1.
        };

        Self {
            nearest_distance,
            required_battery,
            battery_capacity: vehicle.battery_capacity,
            recommended_capacity,
            consumption_per_km: vehicle.consumption_per_km,
        }
    }

    /// Returns a human readable message.
    pub fn to_message(&self) -> String {
        let mut message = String::from("Unable to build the route.\n\n");

        if self.nearest_distance.is_finite() {
            let _ = writeln!(
                message,
                "Problem: the nearest charging station is {:.0} km away, which exceeds the current range.\n",
                self.nearest_distance
            );
        } else {
            message.push_str("Problem: no charging station can be reached with the current range.\n\n");
        }

        message.push_str("Recommendations:\n\nIncrease the initial battery level:\n");
        if let Some(required) = self.required_battery {
            let _ = writeln!(message, "   - at least {required:.0}%");
        }
        message.push_str("   - recommended: 95-100%\n\n");

        let _ = write!(
            message,
            "Use a vehicle with a bigger battery:\n   - current capacity: {} kWh\n   - recommended: {}+ kWh\n   \
             - or reduce consumption (e.g. from {} to 0.18 kWh/km)\n\n",
            self.battery_capacity, self.recommended_capacity, self.consumption_per_km
        );

        message.push_str("Start the trip from another location, e.g. one with a charging station nearby.\n");

        message
    }
}

/// Returns a note which explains that the route starts with a recovery charging stop.
pub fn recovery_message(start: &Point, station: &ChargingStation, note: Option<&str>) -> String {
    let place = station.location.address.as_deref().unwrap_or(station.id.as_str());
    let distance = start.distance_to(&station.location);

    match note {
        Some(note) => {
            format!("The route includes a charging stop near the start:\n{place} ({distance:.1} km)\n\n{note}")
        }
        None => format!(
            "The initial charge is not enough for the direct route.\n\n\
             The route is built through a nearby station:\n{place} ({distance:.1} km from start)"
        ),
    }
}
