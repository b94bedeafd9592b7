use super::{Duration, Energy, Point, Power};
use serde::{Deserialize, Serialize};

/// Specifies availability state of a charging station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Station is operational and open to public.
    #[default]
    Available,
    /// Station is out of order.
    Unavailable,
    /// Station is not open to public.
    Private,
    /// Availability is not known.
    Unknown,
}

/// A charging station.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStation {
    /// A unique station id.
    pub id: String,
    /// Station location.
    pub location: Point,
    /// Power rating in kW.
    pub power_kw: Power,
    /// Availability state.
    #[serde(default)]
    pub availability: Availability,
}

impl ChargingStation {
    /// Creates a new available station.
    pub fn new(id: &str, location: Point, power_kw: Power) -> Self {
        Self { id: id.to_string(), location, power_kw, availability: Availability::Available }
    }

    /// Sets availability state.
    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Returns time needed to charge given amount of energy.
    pub fn charging_time(&self, energy: Energy) -> Duration {
        energy / self.power_kw
    }

    /// Returns true if station is known to be available.
    pub fn is_available(&self) -> bool {
        self.availability == Availability::Available
    }

    /// Returns true if station can be considered by planner: it is not known to be broken or private.
    pub fn is_usable(&self) -> bool {
        matches!(self.availability, Availability::Available | Availability::Unknown)
    }
}
