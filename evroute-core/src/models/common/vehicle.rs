#[cfg(test)]
#[path = "../../../tests/unit/models/common/vehicle_test.rs"]
mod vehicle_test;

use super::{Distance, Energy, Percent};
use serde::{Deserialize, Serialize};

/// An electric vehicle energy model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    /// Battery capacity in kWh, must be positive.
    pub battery_capacity: Energy,
    /// Energy consumption in kWh per km, must be positive.
    pub consumption_per_km: Energy,
}

impl Vehicle {
    /// Creates a new vehicle.
    pub fn new(battery_capacity: Energy, consumption_per_km: Energy) -> Self {
        Self { battery_capacity, consumption_per_km }
    }

    /// Returns driving range for given state of charge.
    pub fn range(&self, soc: Percent) -> Distance {
        soc / 100. * self.battery_capacity / self.consumption_per_km
    }

    /// Returns driving range with fully charged battery.
    pub fn full_range(&self) -> Distance {
        self.range(100.)
    }

    /// Returns energy required to drive given distance.
    pub fn charge_required(&self, distance: Distance) -> Energy {
        distance * self.consumption_per_km
    }

    /// Returns share of battery capacity required to drive given distance.
    pub fn consumption_percent(&self, distance: Distance) -> Percent {
        self.charge_required(distance) / self.battery_capacity * 100.
    }
}

impl Default for Vehicle {
    fn default() -> Self {
        Self::new(60., 0.2)
    }
}
