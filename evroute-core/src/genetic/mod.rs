//! The genetic module contains a genetic algorithm which searches for the best selection and order
//! of charging stops.
//!
//! A candidate route is encoded as [`Chromosome`]: a sequence of [`Gene`] which starts and ends
//! with a waypoint and has charging stops with distinct stations in between.

mod chromosome;
pub use self::chromosome::*;

mod engine;
pub use self::engine::*;

mod fitness;
pub use self::fitness::*;

mod gene;
pub use self::gene::Gene;

mod operators;
pub use self::operators::*;

mod population;
pub use self::population::*;

mod telemetry;
pub use self::telemetry::*;
