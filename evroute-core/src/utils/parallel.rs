#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use crate::utils::GenericResult;
use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: Option<RayonThreadPool>,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool` with given amount of threads.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map(|inner| Self { inner: Some(inner) })
            .map_err(|err| format!("cannot build a thread pool: {err}").into())
    }

    /// Creates a thread pool wrapper which runs operations on the global rayon pool.
    pub fn global() -> Self {
        Self { inner: None }
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        match &self.inner {
            Some(inner) => inner.install(op),
            None => op(),
        }
    }
}

/// Maps collection and collects results into vector in parallel.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Performs mutable foreach in parallel.
pub fn parallel_foreach_mut<T, F>(source: &mut [T], action: F)
where
    T: Send + Sync,
    F: Fn(&mut T) + Send + Sync,
{
    source.par_iter_mut().for_each(action)
}
