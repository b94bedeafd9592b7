/// Specifies distance in kilometers.
pub type Distance = f64;

/// Specifies duration in hours.
pub type Duration = f64;

/// Specifies amount of energy in kWh.
pub type Energy = f64;

/// Specifies power in kW.
pub type Power = f64;

/// Specifies state of charge or any other ratio in percents, [0, 100].
pub type Percent = f64;

/// An assumed average travel speed (km/h) used when no road routing data is available.
pub const ASSUMED_SPEED_KMH: f64 = 80.;
