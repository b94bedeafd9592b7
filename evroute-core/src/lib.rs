//! Core crate contains the building blocks to plan ***electric vehicle journeys*** which may
//! require intermediate charging stops.
//!
//! The planning pipeline consists of:
//! - a deterministic greedy chain builder which proves that the journey is feasible at all
//! - a genetic algorithm which refines selection and order of charging stops
//! - a strict battery simulation which classifies the final route as feasible, feasible with
//!   warning, or infeasible
//!
//! External collaborators (road routing and charging station directory) are injected through
//! traits defined in [`providers`] module.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

#[cfg(test)]
#[path = "../tests/discovery/mod.rs"]
mod discovery;

pub mod genetic;
pub mod models;
pub mod planning;
pub mod prelude;
pub mod providers;
pub mod utils;
