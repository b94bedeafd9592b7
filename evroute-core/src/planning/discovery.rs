#[cfg(test)]
#[path = "../../tests/unit/planning/discovery_test.rs"]
mod discovery_test;

use super::PlannerConfig;
use crate::models::common::{ChargingStation, Distance, Percent, Point, Vehicle};
use crate::providers::{StationCatalog, StationDirectoryProvider};
use crate::utils::{InfoLogger, compare_floats_desc};
use rustc_hash::FxHashSet;

/// Finds charging stations for the trip using the station directory with a fallback catalog.
pub struct StationDiscovery<'a> {
    provider: &'a dyn StationDirectoryProvider,
    fallback: &'a StationCatalog,
    config: &'a PlannerConfig,
    logger: &'a InfoLogger,
}

impl<'a> StationDiscovery<'a> {
    /// Creates a new instance of `StationDiscovery`.
    pub fn new(
        provider: &'a dyn StationDirectoryProvider,
        fallback: &'a StationCatalog,
        config: &'a PlannerConfig,
        logger: &'a InfoLogger,
    ) -> Self {
        Self { provider, fallback, config, logger }
    }

    /// Returns usable stations within trip corridor with acceptable detour and without duplicates.
    pub fn discover(&self, start: &Point, end: &Point) -> Vec<ChargingStation> {
        let direct_distance = start.distance_to(end);
        let corridor_width = self.config.corridor_width(direct_distance);

        let stations = match self.provider.stations_along_route(start, end, corridor_width) {
            Ok(stations) if !stations.is_empty() => stations,
            Ok(_) => {
                (self.logger)("station directory returned no stations, using built-in catalog");
                self.fallback.find_along_route(start, end, corridor_width)
            }
            Err(err) => {
                (self.logger)(&format!("station directory failed: '{err}', using built-in catalog"));
                self.fallback.find_along_route(start, end, corridor_width)
            }
        };
        let total = stations.len();

        let detour_limit = self.config.detour_limit(direct_distance);
        let stations = stations
            .into_iter()
            .filter(|station| station.is_usable())
            .filter(|station| get_detour(start, end, &station.location) <= detour_limit)
            .collect::<Vec<_>>();

        let stations = remove_duplicate_stations(stations, self.config.duplicate_distance);

        (self.logger)(&format!(
            "discovered {} stations in {corridor_width:.0} km corridor, {} left after filtering",
            total,
            stations.len()
        ));

        stations
    }

    /// Searches for a reachable station near start which can be used to recharge before the trip.
    /// Returns the selected station and candidates extended with it.
    pub fn find_recovery_station(
        &self,
        start: &Point,
        end: &Point,
        candidates: &[ChargingStation],
        vehicle: &Vehicle,
        soc: Percent,
    ) -> Option<(ChargingStation, Vec<ChargingStation>)> {
        let radius = self.config.recovery_radius;
        let current_range = vehicle.range(soc) * self.config.reachable_range_ratio;

        let nearby = match self.provider.stations_nearby(start, radius) {
            Ok(stations) if !stations.is_empty() => stations,
            Ok(_) => self.fallback.find_nearby(start, radius),
            Err(err) => {
                (self.logger)(&format!("station directory failed: '{err}', using built-in catalog"));
                self.fallback.find_nearby(start, radius)
            }
        };

        let reachable = nearby
            .into_iter()
            .filter(|station| station.is_usable())
            .filter(|station| start.distance_to(&station.location) <= current_range)
            .collect::<Vec<_>>();

        let best = select_recovery_station(reachable.as_slice(), start, end, vehicle, self.config)?.clone();

        (self.logger)(&format!(
            "selected recovery station '{}' in {:.1} km from start",
            best.id,
            start.distance_to(&best.location)
        ));

        let combined = std::iter::once(best.clone()).chain(candidates.iter().cloned()).collect();

        Some((best, remove_duplicate_stations(combined, self.config.duplicate_distance)))
    }
}

/// Returns excess distance of going through the point over the straight distance.
pub fn get_detour(start: &Point, end: &Point, point: &Point) -> Distance {
    start.distance_to(point) + point.distance_to(end) - start.distance_to(end)
}

/// Removes stations with duplicate ids and stations closer than `min_distance` to a more powerful one.
/// Result is ordered by descending power.
pub fn remove_duplicate_stations(mut stations: Vec<ChargingStation>, min_distance: Distance) -> Vec<ChargingStation> {
    stations.sort_by(|a, b| compare_floats_desc(a.power_kw, b.power_kw));

    let mut processed = FxHashSet::default();

    stations.into_iter().fold(Vec::<ChargingStation>::new(), |mut result, station| {
        let is_duplicate =
            result.iter().any(|existing| existing.location.distance_to(&station.location) < min_distance);

        if processed.insert(station.id.clone()) && !is_duplicate {
            result.push(station);
        }

        result
    })
}

/// Selects a station near start which is close, makes progress to the destination, allows to reach
/// it after charging and has high power.
pub fn select_recovery_station<'a>(
    stations: &'a [ChargingStation],
    start: &Point,
    end: &Point,
    vehicle: &Vehicle,
    config: &PlannerConfig,
) -> Option<&'a ChargingStation> {
    let direct_distance = start.distance_to(end);
    let max_range_after_charge = vehicle.full_range() * config.per_charge_range_ratio;

    let score = |station: &ChargingStation| {
        let to_station = start.distance_to(&station.location);
        let to_end = station.location.distance_to(end);

        let closeness = 100. / (to_station + 1.);
        let progress = (direct_distance - to_end) * 2.;
        let reachability = if to_end <= max_range_after_charge { 100. } else { 0. };

        closeness + progress + reachability + station.power_kw / 2.
    };

    stations
        .iter()
        .map(|station| (score(station), station))
        .fold(None, |best, (score, station)| match best {
            Some((best_score, _)) if best_score >= score => best,
            _ => Some((score, station)),
        })
        .map(|(_, station)| station)
}
