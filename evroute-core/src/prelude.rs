//! This module reimports commonly used types.

pub use crate::models::common::{Availability, ChargingStation, Distance, Duration, Point, Vehicle};
pub use crate::models::{Route, RouteStats};

pub use crate::genetic::{GeneticConfig, GeneticEngine};

pub use crate::planning::{PlanVerdict, PlannerConfig, RoutePlanner};

pub use crate::providers::{RoadRoutingProvider, StationCatalog, StationDirectoryProvider, StraightLineRouting};

pub use crate::utils::{DefaultRandom, Environment, GenericError, GenericResult, InfoLogger, Random};
