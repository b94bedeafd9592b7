#[cfg(test)]
#[path = "../../tests/unit/planning/planner_test.rs"]
mod planner_test;

use super::*;
use crate::genetic::{Chromosome, GeneticConfig, GeneticEngine};
use crate::models::Route;
use crate::models::common::{ChargingStation, Percent, Point, Vehicle};
use crate::providers::{RoadRoutingProvider, StationCatalog, StationDirectoryProvider};
use crate::utils::{Environment, compare_floats};
use serde::Serialize;
use std::sync::Arc;

/// A final classification of the planned route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanVerdict {
    /// The destination is reachable without charging.
    Direct,
    /// The route with charging stops is safe.
    Success,
    /// The route is usable, but has an informational warning.
    SuccessWithWarning,
    /// The trip is not feasible: the route has two points and an actionable warning.
    Infeasible,
}

/// A terminal outcome of the planning: either final or early.
type PlanOutcome = (Route, PlanVerdict);

/// Plans routes with charging stops for electric vehicles.
pub struct RoutePlanner {
    routing: Arc<dyn RoadRoutingProvider>,
    stations: Arc<dyn StationDirectoryProvider>,
    fallback: StationCatalog,
    genetic: GeneticConfig,
    config: PlannerConfig,
    environment: Arc<Environment>,
}

/// Keeps the starting point of chain building: it is either trip start or a recovery station.
struct EffectiveStart {
    location: Point,
    soc: Percent,
    recovery: Option<ChargingStation>,
}

impl RoutePlanner {
    /// Creates a new instance of `RoutePlanner` with default configuration and built-in fallback catalog.
    pub fn new(
        routing: Arc<dyn RoadRoutingProvider>,
        stations: Arc<dyn StationDirectoryProvider>,
        environment: Arc<Environment>,
    ) -> Self {
        Self {
            routing,
            stations,
            fallback: StationCatalog::builtin(),
            genetic: GeneticConfig::default(),
            config: PlannerConfig::default(),
            environment,
        }
    }

    /// Sets genetic algorithm configuration.
    pub fn with_genetic_config(mut self, genetic: GeneticConfig) -> Self {
        self.genetic = genetic;
        self
    }

    /// Sets planner thresholds.
    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets a catalog used when station directory fails or returns nothing.
    pub fn with_fallback_catalog(mut self, fallback: StationCatalog) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns planner thresholds.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a route from `start` to `end` starting with `battery_level` percent of charge.
    /// Never fails: infeasible trips are reported as two point route with warning.
    pub fn plan_route(&self, start: &Point, end: &Point, battery_level: Percent, vehicle: &Vehicle) -> Route {
        self.plan_route_with_verdict(start, end, battery_level, vehicle).0
    }

    /// Plans a route and returns its classification alongside.
    pub fn plan_route_with_verdict(
        &self,
        start: &Point,
        end: &Point,
        battery_level: Percent,
        vehicle: &Vehicle,
    ) -> (Route, PlanVerdict) {
        match self.plan(start, end, battery_level, vehicle) {
            Ok(outcome) | Err(outcome) => outcome,
        }
    }

    fn plan(
        &self,
        start: &Point,
        end: &Point,
        battery_level: Percent,
        vehicle: &Vehicle,
    ) -> Result<PlanOutcome, PlanOutcome> {
        self.check_direct(start, end, battery_level, vehicle)?;

        let discovery = StationDiscovery::new(
            self.stations.as_ref(),
            &self.fallback,
            &self.config,
            &self.environment.logger,
        );

        let stations = discovery.discover(start, end);
        if stations.is_empty() {
            self.log("no stations found in the corridor");
            let route = Route::new_warning(start.clone(), end.clone(), NO_STATIONS_MESSAGE.to_string());
            return Err(infeasible(route));
        }

        let analysis = analyze_reachability(stations.as_slice(), start, vehicle, battery_level, &self.config);
        let (effective, stations) =
            self.resolve_start(&discovery, &analysis, stations, start, end, battery_level, vehicle)?;

        let chain =
            build_station_chain(stations.as_slice(), &effective.location, end, vehicle, effective.soc, &self.config);

        // destination is reachable, but not safely: let optimization decide whether to charge
        let is_end_reachable = effective.location.distance_to(end)
            <= vehicle.range(effective.soc) * self.config.arrival_range_ratio;

        let (candidates, fallback) = match (chain.is_empty(), is_end_reachable) {
            (true, true) => {
                let location = &effective.location;
                let mut ordered = stations.clone();
                ordered.sort_by(|a, b| {
                    compare_floats(location.distance_to(&a.location), location.distance_to(&b.location))
                });

                (stations, ordered)
            }
            (true, false) => {
                self.log("unable to build a chain of stations");
                return Err(self.detailed_infeasible(start, end, &analysis, battery_level, vehicle));
            }
            (false, _) => (chain.clone(), chain),
        };

        let candidates = with_recovery(candidates, effective.recovery.as_ref());
        let fallback = with_recovery(fallback, effective.recovery.as_ref());
        self.log(&format!("built a chain of {} stations", candidates.len()));

        let (route, validation) = self.optimize(start, end, candidates.as_slice(), fallback, battery_level, vehicle)?;

        Ok(self.complete(start, route, validation, effective.recovery.as_ref()))
    }

    fn check_direct(
        &self,
        start: &Point,
        end: &Point,
        battery_level: Percent,
        vehicle: &Vehicle,
    ) -> Result<(), PlanOutcome> {
        let straight_distance = start.distance_to(end);
        let safe_range = vehicle.range(battery_level) * self.config.safe_range_ratio;

        self.log(&format!("straight distance: {straight_distance:.2} km, safe range: {safe_range:.2} km"));

        if straight_distance > safe_range {
            return Ok(());
        }

        let road_distance = self.routing.get_distance(start, end).unwrap_or_else(|err| {
            self.log(&format!("road routing failed: '{err}', using straight distance"));
            straight_distance
        });

        if road_distance > safe_range {
            self.log(&format!("road distance {road_distance:.2} km exceeds safe range, charging is required"));
            return Ok(());
        }

        let mut route = Route::new_direct(start.clone(), end.clone());
        self.finalize(&mut route, end);

        Err((route, PlanVerdict::Direct))
    }

    #[allow(clippy::too_many_arguments)]
    fn resolve_start(
        &self,
        discovery: &StationDiscovery<'_>,
        analysis: &ReachabilityAnalysis,
        stations: Vec<ChargingStation>,
        start: &Point,
        end: &Point,
        battery_level: Percent,
        vehicle: &Vehicle,
    ) -> Result<(EffectiveStart, Vec<ChargingStation>), PlanOutcome> {
        if analysis.can_reach_first_station {
            return Ok((EffectiveStart { location: start.clone(), soc: battery_level, recovery: None }, stations));
        }

        self.log("no station on the route is reachable, searching near start");

        match discovery.find_recovery_station(start, end, stations.as_slice(), vehicle, battery_level) {
            Some((recovery, stations)) => {
                let location = recovery.location.clone();
                let effective = EffectiveStart { location, soc: self.config.recovery_soc, recovery: Some(recovery) };

                Ok((effective, stations))
            }
            None => Err(self.detailed_infeasible(start, end, analysis, battery_level, vehicle)),
        }
    }

    /// Runs genetic algorithm over candidates, validates its result and falls back to the ordered stops.
    fn optimize(
        &self,
        start: &Point,
        end: &Point,
        candidates: &[ChargingStation],
        fallback: Vec<ChargingStation>,
        battery_level: Percent,
        vehicle: &Vehicle,
    ) -> Result<(Route, RouteValidation), PlanOutcome> {
        let initial_route = Route::new_direct(start.clone(), end.clone());
        let engine = GeneticEngine::new(self.genetic.clone(), self.environment.clone());

        let mut route = engine.optimize(&initial_route, candidates, vehicle, battery_level);
        if route.points.len() < 2 {
            return Err(infeasible(Route::new_warning(
                start.clone(),
                end.clone(),
                "Internal error: optimized route has less than two points.".to_string(),
            )));
        }

        self.finalize(&mut route, end);

        let validation = validate_route_strict(&route, vehicle, battery_level, &self.config);
        let reason = match validation {
            RouteValidation::Critical { reason, .. } => reason,
            validation => return Ok((route, validation)),
        };

        self.log(&format!("optimized route failed validation: {reason}, trying station chain"));

        let stops = fallback.into_iter().map(Arc::new).collect();
        let mut chain_route =
            Chromosome::new(start.clone(), stops, end.clone()).to_route(self.genetic.energy_per_stop);
        self.finalize(&mut chain_route, end);

        match validate_route_strict(&chain_route, vehicle, battery_level, &self.config) {
            RouteValidation::Critical { .. } => {
                Err(infeasible(Route::new_warning(start.clone(), end.clone(), reason)))
            }
            validation => Ok((chain_route, validation)),
        }
    }

    /// Attaches informational warnings and classifies the feasible route.
    fn complete(
        &self,
        start: &Point,
        mut route: Route,
        validation: RouteValidation,
        recovery: Option<&ChargingStation>,
    ) -> PlanOutcome {
        let note = match &validation {
            RouteValidation::Warning { note, .. } => Some(note.as_str()),
            _ => None,
        };

        route.warning = match (recovery, note) {
            (Some(recovery), note) => Some(recovery_message(start, recovery, note)),
            (None, Some(note)) => Some(note.to_string()),
            (None, None) => None,
        };

        if let Some(final_soc) = validation.final_soc() {
            self.log(&format!(
                "route is built: {:.2} km, {} charging stops, arrival charge {final_soc:.1}%",
                route.stats.distance, route.stats.charging_stops
            ));
        }

        let verdict = if route.warning.is_some() { PlanVerdict::SuccessWithWarning } else { PlanVerdict::Success };

        (route, verdict)
    }

    fn finalize(&self, route: &mut Route, end: &Point) {
        finalize_route(route, end, self.routing.as_ref(), self.config.destination_tolerance, &self.environment);
    }

    fn detailed_infeasible(
        &self,
        start: &Point,
        end: &Point,
        analysis: &ReachabilityAnalysis,
        battery_level: Percent,
        vehicle: &Vehicle,
    ) -> PlanOutcome {
        let report = InfeasibilityReport::new(analysis, vehicle, battery_level);

        infeasible(Route::new_warning(start.clone(), end.clone(), report.to_message()))
    }

    fn log(&self, message: &str) {
        (self.environment.logger)(message)
    }
}

/// Puts the recovery station first unless it is already among stations.
fn with_recovery(mut stations: Vec<ChargingStation>, recovery: Option<&ChargingStation>) -> Vec<ChargingStation> {
    if let Some(recovery) = recovery {
        if !stations.iter().any(|station| station.id == recovery.id) {
            stations.insert(0, recovery.clone());
        }
    }

    stations
}

fn infeasible(route: Route) -> PlanOutcome {
    (route, PlanVerdict::Infeasible)
}
