//! A module which provides the logic to collect metrics about evolution and simple logging.

#[cfg(test)]
#[path = "../../tests/unit/genetic/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{InfoLogger, Timer};

/// Encapsulates different measurements regarding evolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EvolutionMetrics {
    /// Amount of evaluated generations.
    pub generations: usize,
    /// Best known fitness.
    pub best_fitness: f64,
    /// True if evolution was stopped because of no improvement.
    pub is_early_stopped: bool,
    /// Evolution duration in milliseconds.
    pub duration_ms: u128,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No logging at all.
    None,
    /// Logs progress.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often best individual is logged.
        log_every: usize,
    },
}

/// Provides way to collect metrics and write information into log.
pub struct Telemetry {
    mode: TelemetryMode,
    timer: Timer,
    metrics: EvolutionMetrics,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        let metrics = EvolutionMetrics { best_fitness: f64::NEG_INFINITY, ..Default::default() };

        Self { mode, timer: Timer::start(), metrics }
    }

    /// Reports evolution start.
    pub fn on_initial(&mut self, population_size: usize, stations: usize) {
        self.timer = Timer::start();
        self.log(&format!("[0s] evolution started: population size {population_size}, candidate stations {stations}"));
    }

    /// Reports evaluated generation.
    pub fn on_generation(&mut self, generation: usize, best_fitness: f64, is_improvement: bool) {
        self.metrics.generations = generation + 1;
        self.metrics.best_fitness = best_fitness;

        let should_log = match &self.mode {
            TelemetryMode::OnlyLogging { log_every, .. } => *log_every > 0 && generation % log_every == 0,
            TelemetryMode::None => false,
        };

        if should_log {
            let marker = if is_improvement { "*" } else { "" };
            self.log(&format!(
                "[{}s] generation {generation}: best fitness {best_fitness:.2}{marker}",
                self.timer.elapsed_secs_as_f64().round()
            ));
        }
    }

    /// Reports evolution end and returns collected metrics.
    pub fn on_result(mut self, is_early_stopped: bool) -> EvolutionMetrics {
        self.metrics.is_early_stopped = is_early_stopped;
        self.metrics.duration_ms = self.timer.elapsed_millis();

        self.log(&format!(
            "[{}s] evolution finished after {} generations{}: best fitness {:.2}",
            self.timer.elapsed_secs_as_f64().round(),
            self.metrics.generations,
            if is_early_stopped { " (no improvement)" } else { "" },
            self.metrics.best_fitness
        ));

        self.metrics
    }

    fn log(&self, message: &str) {
        if let TelemetryMode::OnlyLogging { logger, .. } = &self.mode {
            (logger)(message)
        }
    }
}
