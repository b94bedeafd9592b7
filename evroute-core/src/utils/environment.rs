use crate::utils::{DefaultRandom, Random, ThreadPool};
use std::sync::Arc;

/// A logger type which is called with various information regarding the work done by the planner.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// Amount of threads used to evaluate population.
    pub parallelism: usize,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, parallelism: usize, logger: InfoLogger) -> Self {
        Self { random, parallelism: parallelism.max(1), logger }
    }

    /// Creates an instance of `Environment` with repeatable random sequence and no logging.
    pub fn new_repeatable(seed: u64) -> Self {
        Self::new(Arc::new(DefaultRandom::new_repeatable(seed)), get_cpus(), create_silent_logger())
    }

    /// Creates a thread pool which respects configured parallelism. Falls back to the global pool
    /// when a dedicated one cannot be created.
    pub fn create_thread_pool(&self) -> ThreadPool {
        ThreadPool::new(self.parallelism).unwrap_or_else(|err| {
            (self.logger)(&format!("{err}, fallback to global pool"));
            ThreadPool::global()
        })
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), get_cpus(), Arc::new(|msg: &str| println!("{msg}")))
    }
}

/// Returns a logger which ignores all messages.
pub fn create_silent_logger() -> InfoLogger {
    Arc::new(|_: &str| {})
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
