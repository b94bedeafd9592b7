//! Common models: geo primitives, vehicle energy model and charging stations.

mod point;
pub use self::point::*;

mod primitives;
pub use self::primitives::*;

mod station;
pub use self::station::*;

mod vehicle;
pub use self::vehicle::*;
