#[cfg(test)]
#[path = "../../tests/unit/planning/validation_test.rs"]
mod validation_test;

use super::PlannerConfig;
use crate::models::Route;
use crate::models::common::{Percent, Vehicle};

/// A result of strict route validation.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteValidation {
    /// The route is safe.
    Valid {
        /// Charge on arrival.
        final_soc: Percent,
    },
    /// The route is feasible, but arrival charge is low.
    Warning {
        /// Charge on arrival.
        final_soc: Percent,
        /// Informational note.
        note: String,
    },
    /// The route is not feasible.
    Critical {
        /// A reason message.
        reason: String,
        /// Index of the failed segment, if the failure is bound to a segment.
        segment_index: Option<usize>,
    },
}

impl RouteValidation {
    /// Returns true if route is not feasible.
    pub fn is_critical(&self) -> bool {
        matches!(self, RouteValidation::Critical { .. })
    }

    /// Returns charge on arrival for a feasible route.
    pub fn final_soc(&self) -> Option<Percent> {
        match self {
            RouteValidation::Valid { final_soc } | RouteValidation::Warning { final_soc, .. } => Some(*final_soc),
            RouteValidation::Critical { .. } => None,
        }
    }
}

/// Simulates the trip along route points from `start_soc`. Every point which matches a charging stop
/// recharges the battery up to configured level. The charge must never drop below the safety floor
/// except on arrival to a charging stop.
pub fn validate_route_strict(
    route: &Route,
    vehicle: &Vehicle,
    start_soc: Percent,
    config: &PlannerConfig,
) -> RouteValidation {
    let mut soc = start_soc;

    for (index, pair) in route.points.windows(2).enumerate() {
        let segment = index + 1;
        let usage = vehicle.consumption_percent(pair[0].distance_to(&pair[1]));

        if soc < usage {
            return RouteValidation::Critical {
                reason: format!(
                    "Insufficient charge for segment {segment}: {usage:.1}% is required, {soc:.1}% is available."
                ),
                segment_index: Some(index),
            };
        }

        soc -= usage;

        let is_charging_stop = route.charging_stop_at(&pair[1]).is_some();

        if soc < config.safety_floor && !is_charging_stop {
            return RouteValidation::Critical {
                reason: format!("Charge drops to {soc:.1}% after segment {segment}."),
                segment_index: Some(index),
            };
        }

        if is_charging_stop {
            soc = config.recharge_soc;
        }
    }

    if soc < config.safety_floor {
        RouteValidation::Critical {
            reason: format!(
                "Arrival charge {soc:.1}% is below the safe minimum of {:.0}%. \
                 Add another charging stop or increase the initial charge.",
                config.safety_floor
            ),
            segment_index: None,
        }
    } else if soc < config.warning_floor {
        RouteValidation::Warning {
            final_soc: soc,
            note: format!("Low arrival charge: {soc:.1}%. Consider charging more on the last stop."),
        }
    } else {
        RouteValidation::Valid { final_soc: soc }
    }
}
