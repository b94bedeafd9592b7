use super::*;
use crate::genetic::Chromosome;
use crate::helpers::models::*;

fn evaluate(chromosome: &mut Chromosome, start_soc: f64) -> FitnessEvaluation {
    evaluate_fitness(chromosome, start_soc, &test_vehicle(), &FitnessWeights::default())
}

#[test]
fn can_penalize_infeasible_chromosome() {
    // 3 degrees on equator is about 333 km while full range is 300 km
    let mut chromosome = create_chromosome(equator_point(0.), vec![], equator_point(3.));

    let evaluation = evaluate(&mut chromosome, 100.);

    assert!(!evaluation.is_valid);
    assert!(evaluation.score <= -100_000.);
    assert!(!chromosome.is_valid);
    assert_eq!(chromosome.fitness, evaluation.score);
}

#[test]
fn can_reward_safe_direct_trip() {
    let mut chromosome = create_chromosome(equator_point(0.), vec![], equator_point(1.));

    let evaluation = evaluate(&mut chromosome, 100.);

    assert!(evaluation.is_valid);
    assert!(evaluation.score > 20_000.);
}

#[test]
fn can_prefer_feasible_chromosome_with_stop() {
    let mut direct = create_chromosome(equator_point(0.), vec![], equator_point(4.));
    let mut with_stop = create_chromosome(equator_point(0.), vec![equator_station("a", 2.)], equator_point(4.));

    let direct = evaluate(&mut direct, 100.);
    let with_stop = evaluate(&mut with_stop, 100.);

    assert!(!direct.is_valid);
    assert!(with_stop.is_valid);
    assert!(with_stop.score > direct.score);
}

#[test]
fn can_repair_order_of_small_chromosome() {
    let mut chromosome = create_chromosome(
        equator_point(0.),
        vec![equator_station("b", 3.), equator_station("a", 1.5)],
        equator_point(4.5),
    );

    let evaluation = evaluate(&mut chromosome, 100.);

    assert!(evaluation.is_valid);
    assert_eq!(get_stop_ids(&chromosome), vec!["a", "b"]);
}

#[test]
fn can_penalize_backward_stops_in_big_chromosome() {
    let stations = |ids: &[(&str, f64)]| ids.iter().map(|(id, lon)| equator_station(id, *lon)).collect::<Vec<_>>();
    let mut ordered = create_chromosome(
        equator_point(0.),
        stations(&[("a", 1.), ("b", 2.), ("c", 3.), ("d", 4.)]),
        equator_point(5.),
    );
    let mut unordered = create_chromosome(
        equator_point(0.),
        stations(&[("a", 1.), ("c", 3.), ("b", 2.), ("d", 4.)]),
        equator_point(5.),
    );

    let ordered = evaluate(&mut ordered, 100.);
    let unordered = evaluate(&mut unordered, 100.);

    assert!(ordered.is_valid);
    assert!(ordered.score > unordered.score);
}

#[test]
fn can_use_custom_weights() {
    let weights = FitnessWeights { success_reward: 0., final_charge_reward: 0., ..FitnessWeights::default() };
    let mut chromosome = create_chromosome(equator_point(0.), vec![], equator_point(1.));

    let default = evaluate(&mut chromosome.clone(), 100.);
    let custom = evaluate_fitness(&mut chromosome, 100., &test_vehicle(), &weights);

    assert!(custom.score < default.score);
}
