#[cfg(test)]
#[path = "../../tests/unit/genetic/population_test.rs"]
mod population_test;

use super::{Chromosome, sort_by_distance_from};
use crate::models::common::{ChargingStation, Point, distance_to_line};
use crate::utils::{Random, compare_floats, compare_floats_desc, shuffle};
use std::sync::Arc;

/// Specifies a way to pick charging stops for an initial individual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedingStrategy {
    /// Uses all candidate stations.
    AllStations,
    /// Uses a subset of stations evenly spaced by distance from start.
    EvenlySpaced,
    /// Uses a subset of stations closest to the straight line between start and end.
    NearestToLine,
    /// Uses a subset of stations with the highest power.
    HighestPower,
    /// Uses a random subset of stations.
    Random,
}

impl SeedingStrategy {
    const ALL: [SeedingStrategy; 5] = [
        SeedingStrategy::AllStations,
        SeedingStrategy::EvenlySpaced,
        SeedingStrategy::NearestToLine,
        SeedingStrategy::HighestPower,
        SeedingStrategy::Random,
    ];

    /// Returns strategy for the individual with given index: strategies are rotated.
    pub fn for_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    /// Selects stations using the strategy. Returned stations are sorted by distance from start.
    pub fn select(
        &self,
        start: &Point,
        end: &Point,
        stations: &[Arc<ChargingStation>],
        random: &dyn Random,
    ) -> Vec<Arc<ChargingStation>> {
        if stations.is_empty() {
            return vec![];
        }

        let by_start = sort_by_distance_from(start, stations.to_vec());
        let subset_size = random.uniform_int(1, stations.len() as i32) as usize;

        let selected = match self {
            SeedingStrategy::AllStations => by_start,
            SeedingStrategy::EvenlySpaced => {
                let step = by_start.len() as f64 / subset_size as f64;
                (0..subset_size).map(|idx| by_start[(idx as f64 * step) as usize].clone()).collect()
            }
            SeedingStrategy::NearestToLine => {
                let mut stations = by_start;
                stations.sort_by(|a, b| {
                    compare_floats(distance_to_line(start, end, &a.location), distance_to_line(start, end, &b.location))
                });
                stations.into_iter().take(subset_size).collect()
            }
            SeedingStrategy::HighestPower => {
                let mut stations = by_start;
                stations.sort_by(|a, b| compare_floats_desc(a.power_kw, b.power_kw));
                stations.into_iter().take(subset_size).collect()
            }
            SeedingStrategy::Random => {
                let mut stations = by_start;
                shuffle(stations.as_mut_slice(), random);
                stations.into_iter().take(random.uniform_int(0, subset_size as i32) as usize).collect()
            }
        };

        sort_by_distance_from(start, selected)
    }
}

/// Creates an initial population where all individuals share start and end.
pub fn create_initial_population(
    start: &Point,
    end: &Point,
    stations: &[Arc<ChargingStation>],
    size: usize,
    random: &dyn Random,
) -> Vec<Chromosome> {
    (0..size)
        .map(|idx| {
            let stops = SeedingStrategy::for_index(idx).select(start, end, stations, random);
            Chromosome::new(start.clone(), stops, end.clone())
        })
        .collect()
}

/// Returns the fittest individual among randomly sampled ones. Population should not be empty.
pub fn tournament_select<'a>(
    population: &'a [Chromosome],
    tournament_size: usize,
    random: &dyn Random,
) -> &'a Chromosome {
    (0..tournament_size.max(1))
        .map(|_| &population[random.index(population.len())])
        .max_by(|a, b| compare_floats(a.fitness, b.fitness))
        .unwrap_or(&population[0])
}

/// Returns amount of elite individuals: small solutions are protected by larger elite.
pub fn elite_size(population_size: usize, best_stop_count: usize) -> usize {
    let ratio = match best_stop_count {
        0..=2 => 0.3,
        3 => 0.2,
        _ => 0.1,
    };

    ((population_size as f64 * ratio).floor() as usize).clamp(1, population_size.max(1))
}
