//! A collection of models to represent a journey planning problem and its result.

pub mod common;

mod route;
pub use self::route::*;
