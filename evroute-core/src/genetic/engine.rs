#[cfg(test)]
#[path = "../../tests/unit/genetic/engine_test.rs"]
mod engine_test;

use super::*;
use crate::models::Route;
use crate::models::common::{ChargingStation, Energy, Percent, Vehicle};
use crate::utils::{Environment, Random, compare_floats_desc, parallel_foreach_mut};
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// Specifies genetic algorithm parameters.
#[derive(Clone, Debug)]
pub struct GeneticConfig {
    /// Amount of individuals in each generation.
    pub population_size: usize,
    /// Maximum amount of generations.
    pub generations: usize,
    /// Probability of mutation applied to a child.
    pub mutation_rate: f64,
    /// Amount of individuals sampled by tournament selection.
    pub tournament_size: usize,
    /// Amount of generations without improvement after which evolution stops.
    pub patience: usize,
    /// Energy assumed to be charged at every stop, kWh.
    pub energy_per_stop: Energy,
    /// Specifies how often progress is logged, zero disables logging.
    pub log_every: usize,
}

impl Default for GeneticConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 150,
            mutation_rate: 0.15,
            tournament_size: 5,
            patience: 40,
            energy_per_stop: 50.,
            log_every: 20,
        }
    }
}

/// Searches for the best selection and order of charging stops using genetic algorithm.
pub struct GeneticEngine {
    config: GeneticConfig,
    weights: FitnessWeights,
    environment: Arc<Environment>,
}

impl GeneticEngine {
    /// Creates a new instance of `GeneticEngine` with default fitness weights.
    pub fn new(config: GeneticConfig, environment: Arc<Environment>) -> Self {
        Self { config, weights: FitnessWeights::default(), environment }
    }

    /// Sets fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Returns config.
    pub fn config(&self) -> &GeneticConfig {
        &self.config
    }

    /// Optimizes charging stops for the trip between first and last point of initial route.
    pub fn optimize(
        &self,
        initial_route: &Route,
        stations: &[ChargingStation],
        vehicle: &Vehicle,
        start_soc: Percent,
    ) -> Route {
        self.optimize_with_metrics(initial_route, stations, vehicle, start_soc).0
    }

    /// Optimizes charging stops and returns evolution metrics alongside the route.
    pub fn optimize_with_metrics(
        &self,
        initial_route: &Route,
        stations: &[ChargingStation],
        vehicle: &Vehicle,
        start_soc: Percent,
    ) -> (Route, EvolutionMetrics) {
        let (start, end) = match (initial_route.points.first(), initial_route.points.last()) {
            (Some(start), Some(end)) if initial_route.points.len() >= 2 => (start.clone(), end.clone()),
            _ => return (initial_route.clone(), EvolutionMetrics::default()),
        };

        let stations = get_unique_stations(stations);
        if stations.is_empty() || self.config.generations == 0 {
            let route = Chromosome::new(start, vec![], end).to_route(self.config.energy_per_stop);
            return (route, EvolutionMetrics::default());
        }

        let random = self.environment.random.as_ref();
        let population_size = self.config.population_size.max(1);
        let mut telemetry = Telemetry::new(self.get_telemetry_mode());
        telemetry.on_initial(population_size, stations.len());

        let pool = self.environment.create_thread_pool();
        let mut population = create_initial_population(&start, &end, stations.as_slice(), population_size, random);
        let mut best: Option<Chromosome> = None;
        let mut stagnation = 0;
        let mut is_early_stopped = false;

        for generation in 0..self.config.generations {
            let weights = &self.weights;
            pool.execute(|| {
                parallel_foreach_mut(population.as_mut_slice(), |chromosome| {
                    evaluate_fitness(chromosome, start_soc, vehicle, weights);
                })
            });
            population.sort_by(|a, b| compare_floats_desc(a.fitness, b.fitness));

            let leader = &population[0];
            let is_improvement = best.as_ref().is_none_or(|best| leader.fitness > best.fitness);
            if is_improvement {
                best = Some(leader.clone());
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            let best_fitness = best.as_ref().map_or(leader.fitness, |best| best.fitness);
            telemetry.on_generation(generation, best_fitness, is_improvement);

            if stagnation >= self.config.patience {
                is_early_stopped = true;
                break;
            }

            if generation + 1 < self.config.generations {
                population = self.reproduce(population.as_slice(), random);
            }
        }

        let metrics = telemetry.on_result(is_early_stopped);
        let best = best.unwrap_or_else(|| Chromosome::new(start, vec![], end));

        (best.to_route(self.config.energy_per_stop), metrics)
    }

    /// Creates next generation from the sorted population.
    fn reproduce(&self, population: &[Chromosome], random: &dyn Random) -> Vec<Chromosome> {
        let population_size = self.config.population_size.max(1);
        let elite_size = elite_size(population_size, population[0].stop_count()).min(population.len());

        let mut offspring = population.iter().take(elite_size).cloned().collect::<Vec<_>>();

        while offspring.len() < population_size {
            let first = tournament_select(population, self.config.tournament_size, random);
            let second = tournament_select(population, self.config.tournament_size, random);

            let mut child = crossover(first, second, random);
            mutate(&mut child, self.config.mutation_rate, random);

            offspring.push(child);
        }

        offspring
    }

    fn get_telemetry_mode(&self) -> TelemetryMode {
        match self.config.log_every {
            0 => TelemetryMode::None,
            log_every => TelemetryMode::OnlyLogging { logger: self.environment.logger.clone(), log_every },
        }
    }
}

fn get_unique_stations(stations: &[ChargingStation]) -> Vec<Arc<ChargingStation>> {
    let mut ids = FxHashSet::default();

    stations.iter().filter(|station| ids.insert(station.id.as_str())).map(|station| Arc::new(station.clone())).collect()
}
