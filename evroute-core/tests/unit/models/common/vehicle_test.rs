use super::*;

parameterized_test! {can_calculate_range, (capacity, consumption, soc, expected), {
    assert_approx!(Vehicle::new(capacity, consumption).range(soc), expected, 1E-9);
}}

can_calculate_range! {
    case01_full: (60., 0.2, 100., 300.),
    case02_partial: (60., 0.2, 80., 240.),
    case03_empty: (60., 0.2, 0., 0.),
    case04_big_battery: (100., 0.25, 50., 200.),
}

#[test]
fn can_calculate_energy_model() {
    let vehicle = Vehicle::default();

    assert_eq!(vehicle, Vehicle::new(60., 0.2));
    assert_approx!(vehicle.full_range(), 300., 1E-9);
    assert_approx!(vehicle.charge_required(150.), 30., 1E-9);
    assert_approx!(vehicle.consumption_percent(150.), 50., 1E-9);
    assert_approx!(vehicle.consumption_percent(0.), 0., 1E-9);
}

#[test]
fn can_deserialize_vehicle() {
    let vehicle: Vehicle = serde_json::from_str(r#"{"batteryCapacity":75,"consumptionPerKm":0.18}"#).unwrap();

    assert_eq!(vehicle, Vehicle::new(75., 0.18));
}
