

use crate::utils::{DefaultRandom, Environment, Random, create_silent_logger};
use std::sync::Arc;

pub const DEFAULT_SEED: u64 = 42;

pub fn create_test_environment() -> Arc<Environment> {
    create_test_environment_with_random(Arc::new(DefaultRandom::new_repeatable(DEFAULT_SEED)))
}

pub fn create_test_environment_with_random(random: Arc<dyn Random>) -> Arc<Environment> {
    Arc::new(Environment::new(random, 2, create_silent_logger()))
}

/// A random which returns predefined values in a loop, useful to drive operators deterministically.
pub struct FakeRandom {
    ints: Vec<i32>,
    reals: Vec<f64>,
    state: std::sync::Mutex<(usize, usize)>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<f64>) -> Self {
        Self { ints, reals, state: std::sync::Mutex::new((0, 0)) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        let mut state = self.state.lock().unwrap();
        let value = self.ints.get(state.0 % self.ints.len().max(1)).copied().unwrap_or(min);
        state.0 += 1;

        value.clamp(min, max)
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        let mut state = self.state.lock().unwrap();
        let value = self.reals.get(state.1 % self.reals.len().max(1)).copied().unwrap_or(min);
        state.1 += 1;

        value.clamp(min, max)
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.uniform_real(0., 1.) < probability
    }
}
