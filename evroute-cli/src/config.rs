//! Planner configuration.

#![allow(missing_docs)]

#[cfg(test)]
#[path = "../tests/unit/config_test.rs"]
mod config_test;

use evroute_core::genetic::GeneticConfig;
use evroute_core::planning::{PlannerConfig, RoutePlanner};
use evroute_core::providers::{CachedRouting, StationDirectoryProvider, StraightLineRouting};
use evroute_core::utils::{DefaultRandom, Environment, InfoLogger, create_silent_logger, get_cpus};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A planner configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Specifies genetic algorithm parameters.
    pub genetic: Option<GeneticSettings>,
    /// Specifies planner thresholds.
    pub planner: Option<PlannerSettings>,
    /// Specifies straight line routing parameters.
    pub routing: Option<RoutingConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies environment configuration.
    pub environment: Option<EnvironmentConfig>,
}

/// Genetic algorithm parameters, missing ones keep their defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneticSettings {
    /// Population size. Default is 50.
    pub population_size: Option<usize>,
    /// Max generations. Default is 150.
    pub generations: Option<usize>,
    /// Mutation probability. Default is 0.15.
    pub mutation_rate: Option<f64>,
    /// Tournament size. Default is 5.
    pub tournament_size: Option<usize>,
    /// Generations without improvement before stop. Default is 40.
    pub patience: Option<usize>,
    /// Energy charged at every stop, kWh. Default is 50.
    pub energy_per_stop: Option<f64>,
}

/// Planner thresholds, missing ones keep their defaults. Field meaning matches `PlannerConfig`.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannerSettings {
    pub safe_range_ratio: Option<f64>,
    pub reachable_range_ratio: Option<f64>,
    pub max_corridor_width: Option<f64>,
    pub corridor_ratio: Option<f64>,
    pub max_detour: Option<f64>,
    pub detour_ratio: Option<f64>,
    pub duplicate_distance: Option<f64>,
    pub recovery_radius: Option<f64>,
    pub recovery_soc: Option<f64>,
    pub per_charge_range_ratio: Option<f64>,
    pub arrival_range_ratio: Option<f64>,
    pub min_stop_spacing: Option<f64>,
    pub max_line_deviation: Option<f64>,
    pub line_deviation_ratio: Option<f64>,
    pub safety_floor: Option<f64>,
    pub warning_floor: Option<f64>,
    pub recharge_soc: Option<f64>,
    pub destination_tolerance: Option<f64>,
}

/// Straight line routing parameters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingConfig {
    /// Average speed, km/h. Default is 80.
    pub speed: Option<f64>,
    /// Multiplier applied to straight distances. Default is 1.
    pub road_factor: Option<f64>,
}

/// Telemetry configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TelemetryConfig {
    /// Logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// Logging configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled. Default is false.
    pub enabled: bool,
    /// Specifies how often best individual is logged. Default is 20 (generations).
    pub log_every: Option<usize>,
}

/// Environment configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvironmentConfig {
    /// A seed for repeatable random sequence. Default is random seed.
    pub seed: Option<u64>,
    /// Amount of threads. Default is number of cpus.
    pub parallelism: Option<usize>,
}

macro_rules! apply_settings {
    ($target:ident, $source:ident, $($field:ident),+) => {
        $(
            if let Some(value) = $source.$field {
                $target.$field = value;
            }
        )+
    };
}

impl Config {
    /// Returns true if logging is enabled.
    pub fn is_logging_enabled(&self) -> bool {
        self.logging().is_some_and(|logging| logging.enabled)
    }

    /// Enables logging keeping configured logging frequency.
    pub fn with_logging(mut self) -> Self {
        let log_every = self.logging().and_then(|logging| logging.log_every);
        self.telemetry = Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, log_every }) });
        self
    }

    /// Sets random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        let parallelism = self.environment.as_ref().and_then(|environment| environment.parallelism);
        self.environment = Some(EnvironmentConfig { seed: Some(seed), parallelism });
        self
    }

    fn logging(&self) -> Option<&LoggingConfig> {
        self.telemetry.as_ref().and_then(|telemetry| telemetry.logging.as_ref())
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> Result<Config, String> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'"))
}

/// Creates environment from config.
pub fn create_environment_from_config(config: &Config) -> Result<Arc<Environment>, String> {
    let environment = config.environment.clone().unwrap_or_default();

    let random = Arc::new(environment.seed.map_or_else(DefaultRandom::default, DefaultRandom::new_repeatable));
    let parallelism = match environment.parallelism {
        Some(0) => return Err("parallelism should be positive".to_string()),
        Some(parallelism) => parallelism,
        None => get_cpus(),
    };
    let logger: InfoLogger =
        if config.is_logging_enabled() { Arc::new(|msg: &str| println!("{msg}")) } else { create_silent_logger() };

    Ok(Arc::new(Environment::new(random, parallelism, logger)))
}

/// Creates genetic algorithm parameters from config.
pub fn create_genetic_config(config: &Config) -> Result<GeneticConfig, String> {
    let mut genetic = GeneticConfig::default();

    if let Some(settings) = config.genetic.clone() {
        apply_settings!(genetic, settings, population_size, generations, mutation_rate, tournament_size, patience);
        apply_settings!(genetic, settings, energy_per_stop);
    }

    genetic.log_every = if config.is_logging_enabled() {
        config.logging().and_then(|logging| logging.log_every).unwrap_or(genetic.log_every)
    } else {
        0
    };

    if genetic.population_size == 0 {
        return Err("population size should be positive".to_string());
    }

    if !(0. ..=1.).contains(&genetic.mutation_rate) {
        return Err(format!("mutation rate should be in [0, 1], got: '{}'", genetic.mutation_rate));
    }

    if genetic.tournament_size == 0 || genetic.patience == 0 {
        return Err("tournament size and patience should be positive".to_string());
    }

    if genetic.energy_per_stop <= 0. {
        return Err(format!("energy per stop should be positive, got: '{}'", genetic.energy_per_stop));
    }

    Ok(genetic)
}

/// Creates planner thresholds from config.
pub fn create_planner_config(config: &Config) -> Result<PlannerConfig, String> {
    let mut planner = PlannerConfig::default();

    if let Some(settings) = config.planner.clone() {
        apply_settings!(
            planner,
            settings,
            safe_range_ratio,
            reachable_range_ratio,
            max_corridor_width,
            corridor_ratio,
            max_detour,
            detour_ratio,
            duplicate_distance,
            recovery_radius,
            recovery_soc,
            per_charge_range_ratio,
            arrival_range_ratio,
            min_stop_spacing,
            max_line_deviation,
            line_deviation_ratio,
            safety_floor,
            warning_floor,
            recharge_soc,
            destination_tolerance
        );
    }

    let ratios = [
        ("safeRangeRatio", planner.safe_range_ratio),
        ("reachableRangeRatio", planner.reachable_range_ratio),
        ("perChargeRangeRatio", planner.per_charge_range_ratio),
        ("arrivalRangeRatio", planner.arrival_range_ratio),
    ];

    if let Some((name, value)) = ratios.iter().find(|(_, value)| !(*value > 0. && *value <= 1.)) {
        return Err(format!("'{name}' should be in (0, 1], got: '{value}'"));
    }

    if planner.safety_floor > planner.warning_floor {
        return Err("safety floor should not exceed warning floor".to_string());
    }

    Ok(planner)
}

/// Creates straight line routing from config.
pub fn create_routing_from_config(config: &Config) -> Result<StraightLineRouting, String> {
    let routing = config.routing.clone().unwrap_or_default();
    let default_speed = evroute_core::models::common::ASSUMED_SPEED_KMH;

    match (routing.speed.unwrap_or(default_speed), routing.road_factor.unwrap_or(1.)) {
        (speed, _) if speed <= 0. => Err(format!("routing speed should be positive, got: '{speed}'")),
        (_, road_factor) if road_factor < 1. => {
            Err(format!("road factor should not be less than 1, got: '{road_factor}'"))
        }
        (speed, road_factor) => Ok(StraightLineRouting::new(speed, road_factor)),
    }
}

/// Creates a route planner from config using given station directory.
pub fn create_planner_from_config(
    config: &Config,
    stations: Arc<dyn StationDirectoryProvider>,
) -> Result<RoutePlanner, String> {
    let environment = create_environment_from_config(config)?;
    let routing = Arc::new(CachedRouting::new(create_routing_from_config(config)?));

    Ok(RoutePlanner::new(routing, stations, environment)
        .with_genetic_config(create_genetic_config(config)?)
        .with_config(create_planner_config(config)?))
}

/// Reads config from reader and creates a route planner.
pub fn create_planner_from_config_file<R: Read>(
    reader: BufReader<R>,
    stations: Arc<dyn StationDirectoryProvider>,
) -> Result<RoutePlanner, String> {
    read_config(reader).and_then(|config| create_planner_from_config(&config, stations))
}
