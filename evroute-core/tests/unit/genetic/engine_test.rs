use super::*;
use crate::helpers::create_test_environment;
use crate::helpers::models::*;
use crate::models::common::Point;

fn create_engine(config: GeneticConfig) -> GeneticEngine {
    GeneticEngine::new(config, create_test_environment())
}

fn create_stations() -> Vec<ChargingStation> {
    vec![
        equator_station("a", 1.),
        equator_station("b", 2.),
        equator_station("c", 2.2),
        equator_station("d", 3.5),
        test_station("off", Point::new(1.5, 2.), 50.),
    ]
}

#[test]
fn can_return_direct_route_without_candidates() {
    let engine = create_engine(GeneticConfig::default());
    let initial = Route::new_direct(equator_point(0.), equator_point(1.));

    let (route, metrics) = engine.optimize_with_metrics(&initial, &[], &test_vehicle(), 100.);

    assert_eq!(route.points.len(), 2);
    assert!(route.charging_stops.is_empty());
    assert_eq!(metrics.generations, 0);
}

#[test]
fn can_return_initial_route_when_it_has_less_than_two_points() {
    let engine = create_engine(GeneticConfig::default());
    let mut initial = Route::default();
    initial.add_point(equator_point(0.));

    let route = engine.optimize(&initial, &create_stations(), &test_vehicle(), 100.);

    assert_eq!(route.points.len(), 1);
}

#[test]
fn can_find_feasible_stops() {
    let engine = create_engine(GeneticConfig::default());
    let (start, end) = (equator_point(0.), equator_point(4.5));
    let initial = Route::new_direct(start.clone(), end.clone());

    let (route, metrics) = engine.optimize_with_metrics(&initial, &create_stations(), &test_vehicle(), 100.);

    assert_eq!(route.points.first(), Some(&start));
    assert_eq!(route.points.last(), Some(&end));
    assert!(!route.charging_stops.is_empty());
    assert_eq!(route.points.len(), route.charging_stops.len() + 2);
    assert!(metrics.best_fitness > 0.);
    assert!(metrics.generations > 0 && metrics.generations <= 150);

    let vehicle = test_vehicle();
    let mut soc = 100.;
    route.points.windows(2).for_each(|pair| {
        soc -= vehicle.consumption_percent(pair[0].distance_to(&pair[1]));
        assert!(soc >= 0.);
        if route.charging_stop_at(&pair[1]).is_some() {
            soc = 100.;
        }
    });
}

#[test]
fn can_stop_early_without_improvement() {
    let config = GeneticConfig { generations: 500, patience: 10, ..GeneticConfig::default() };
    let engine = create_engine(config);
    let initial = Route::new_direct(equator_point(0.), equator_point(4.5));

    let (_, metrics) = engine.optimize_with_metrics(&initial, &create_stations(), &test_vehicle(), 100.);

    assert!(metrics.is_early_stopped);
    assert!(metrics.generations < 500);
}

#[test]
fn can_reproduce_result_with_the_same_seed() {
    let initial = Route::new_direct(equator_point(0.), equator_point(4.5));
    let optimize = || {
        create_engine(GeneticConfig::default()).optimize(&initial, &create_stations(), &test_vehicle(), 90.)
    };

    let first = optimize();
    let second = optimize();

    assert_eq!(get_route_stop_ids(&first), get_route_stop_ids(&second));
    assert_eq!(first.stats.distance, second.stats.distance);
}

#[test]
fn can_use_custom_fitness_weights() {
    let weights = FitnessWeights { stop_penalty: 1_000_000., ..FitnessWeights::default() };
    let engine = create_engine(GeneticConfig::default()).with_weights(weights);
    let initial = Route::new_direct(equator_point(0.), equator_point(4.5));

    let (_, metrics) = engine.optimize_with_metrics(&initial, &create_stations(), &test_vehicle(), 100.);

    assert!(metrics.best_fitness < 0.);
}
