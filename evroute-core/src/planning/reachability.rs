#[cfg(test)]
#[path = "../../tests/unit/planning/reachability_test.rs"]
mod reachability_test;

use super::PlannerConfig;
use crate::models::common::{ChargingStation, Distance, Percent, Point, Vehicle};
use crate::utils::compare_floats;

/// Describes whether any candidate station can be reached with the current charge.
#[derive(Clone, Debug)]
pub struct ReachabilityAnalysis {
    /// True if at least one station is within reachable range.
    pub can_reach_first_station: bool,
    /// Reachable range with the current charge, km.
    pub current_range: Distance,
    /// Planned range after full charge, km.
    pub max_range_after_charge: Distance,
    /// The station closest to start.
    pub nearest_station: Option<ChargingStation>,
    /// Distance to the closest station, infinite when there are no stations.
    pub nearest_distance: Distance,
    /// The closest reachable station.
    pub first_reachable: Option<ChargingStation>,
}

/// Analyzes reachability of candidate stations from the start.
pub fn analyze_reachability(
    stations: &[ChargingStation],
    start: &Point,
    vehicle: &Vehicle,
    soc: Percent,
    config: &PlannerConfig,
) -> ReachabilityAnalysis {
    let current_range = vehicle.range(soc) * config.reachable_range_ratio;
    let max_range_after_charge = vehicle.full_range() * config.per_charge_range_ratio;

    let mut by_distance =
        stations.iter().map(|station| (start.distance_to(&station.location), station)).collect::<Vec<_>>();
    by_distance.sort_by(|(a, _), (b, _)| compare_floats(*a, *b));

    let nearest = by_distance.first();
    let first_reachable = by_distance.iter().find(|(distance, _)| *distance <= current_range);

    ReachabilityAnalysis {
        can_reach_first_station: first_reachable.is_some(),
        current_range,
        max_range_after_charge,
        nearest_station: nearest.map(|(_, station)| (*station).clone()),
        nearest_distance: nearest.map_or(Distance::INFINITY, |(distance, _)| *distance),
        first_reachable: first_reachable.map(|(_, station)| (*station).clone()),
    }
}
