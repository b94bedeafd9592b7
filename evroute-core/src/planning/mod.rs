//! The planning module orchestrates the whole pipeline: direct reachability check, station
//! discovery, reachability analysis with recovery search, greedy chain building, genetic
//! optimization, finalization with road routing and strict battery validation.

mod chain;
pub use self::chain::*;

mod diagnostics;
pub use self::diagnostics::*;

mod discovery;
pub use self::discovery::*;

mod finalize;
pub use self::finalize::*;

mod planner;
pub use self::planner::*;

mod reachability;
pub use self::reachability::*;

mod validation;
pub use self::validation::*;

use crate::models::common::{Distance, Percent};

/// Specifies thresholds used by the route planner.
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Share of the current range considered safe for a direct trip.
    pub safe_range_ratio: f64,
    /// Share of the current range within which a station is considered reachable.
    pub reachable_range_ratio: f64,
    /// Maximum corridor width, km.
    pub max_corridor_width: Distance,
    /// Corridor width as a share of straight distance.
    pub corridor_ratio: f64,
    /// Maximum station detour, km.
    pub max_detour: Distance,
    /// Maximum station detour as a share of straight distance.
    pub detour_ratio: f64,
    /// Stations closer than this distance are considered duplicates, km.
    pub duplicate_distance: Distance,
    /// Radius of recovery station search around start, km.
    pub recovery_radius: Distance,
    /// Charge assumed after the recovery station.
    pub recovery_soc: Percent,
    /// Share of the full range which is planned to be used between charging stops.
    pub per_charge_range_ratio: f64,
    /// Share of the range within which the next target is considered safely reachable.
    pub arrival_range_ratio: f64,
    /// Minimum distance between consecutive chain stations, km.
    pub min_stop_spacing: Distance,
    /// Allowed deviation of chain station from the straight line, km.
    pub max_line_deviation: Distance,
    /// Allowed deviation from the straight line as a share of straight distance.
    pub line_deviation_ratio: f64,
    /// Minimum charge which must remain on arrival.
    pub safety_floor: Percent,
    /// Arrival charge below which route is reported with a note.
    pub warning_floor: Percent,
    /// Charge level reached at every charging stop during validation.
    pub recharge_soc: Percent,
    /// Distance within which the route is considered to end at destination, km.
    pub destination_tolerance: Distance,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            safe_range_ratio: 0.85,
            reachable_range_ratio: 0.95,
            max_corridor_width: 100.,
            corridor_ratio: 0.2,
            max_detour: 200.,
            detour_ratio: 0.3,
            duplicate_distance: 5.,
            recovery_radius: 50.,
            recovery_soc: 95.,
            per_charge_range_ratio: 0.75,
            arrival_range_ratio: 0.9,
            min_stop_spacing: 50.,
            max_line_deviation: 150.,
            line_deviation_ratio: 0.25,
            safety_floor: 15.,
            warning_floor: 20.,
            recharge_soc: 95.,
            destination_tolerance: 1.,
        }
    }
}

impl PlannerConfig {
    /// Returns corridor width used to discover stations.
    pub fn corridor_width(&self, direct_distance: Distance) -> Distance {
        self.max_corridor_width.min(direct_distance * self.corridor_ratio)
    }

    /// Returns maximum allowed station detour.
    pub fn detour_limit(&self, direct_distance: Distance) -> Distance {
        self.max_detour.min(direct_distance * self.detour_ratio)
    }

    /// Returns maximum allowed deviation of chain station from the straight line.
    pub fn line_deviation_limit(&self, direct_distance: Distance) -> Distance {
        self.max_line_deviation.max(direct_distance * self.line_deviation_ratio)
    }
}
