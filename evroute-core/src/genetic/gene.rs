use crate::models::common::{ChargingStation, Point};
use std::sync::Arc;

/// A single step of the candidate route.
#[derive(Clone, Debug)]
pub enum Gene {
    /// A trip start or end.
    Waypoint(Point),
    /// A stop at the charging station.
    ChargingStop(Arc<ChargingStation>),
}

impl Gene {
    /// Returns location of the gene.
    pub fn location(&self) -> &Point {
        match self {
            Gene::Waypoint(point) => point,
            Gene::ChargingStop(station) => &station.location,
        }
    }

    /// Returns charging station if gene is a charging stop.
    pub fn station(&self) -> Option<&Arc<ChargingStation>> {
        match self {
            Gene::Waypoint(_) => None,
            Gene::ChargingStop(station) => Some(station),
        }
    }

    /// Returns true if gene is a charging stop.
    pub fn is_charging_stop(&self) -> bool {
        matches!(self, Gene::ChargingStop(_))
    }
}
