#[cfg(test)]
#[path = "../../tests/unit/genetic/fitness_test.rs"]
mod fitness_test;

use super::Chromosome;
use crate::models::common::{Distance, Percent, Vehicle};

/// Specifies magnitudes of penalties and rewards used by fitness function.
#[derive(Clone, Debug)]
pub struct FitnessWeights {
    /// Penalty applied when vehicle cannot reach the next gene.
    pub infeasible_penalty: f64,
    /// Charge levels with penalty per missing percent: the lowest matching band is applied.
    pub low_charge_bands: Vec<(Percent, f64)>,
    /// Amount of charged percent with reward, checked in order.
    pub charge_amount_rewards: Vec<(Percent, f64)>,
    /// Charge amount below which charging stop is considered wasteful.
    pub wasteful_charge: Percent,
    /// Penalty for a wasteful charging stop.
    pub wasteful_charge_penalty: f64,
    /// Reward for a charging stop which is neither big nor wasteful.
    pub moderate_charge_reward: f64,
    /// Penalty per km of detour.
    pub detour_penalty: f64,
    /// Penalty per km of total distance.
    pub distance_penalty: f64,
    /// Penalty per charging stop.
    pub stop_penalty: f64,
    /// Minimum preferable gap between stations and penalty applied at zero gap.
    pub short_gap: (Distance, f64),
    /// Maximum preferable gap between stations and penalty per 100 km above it.
    pub long_gap: (Distance, f64),
    /// A range of comfortable gaps between stations and reward for each.
    pub comfortable_gap: ((Distance, Distance), f64),
    /// Penalty for each pair of stations visited backwards.
    pub backward_penalty: f64,
    /// A safety floor of charge.
    pub safety_floor: Percent,
    /// Reward for a safely finished route.
    pub success_reward: f64,
    /// Reward per percent of final charge.
    pub final_charge_reward: f64,
    /// Final charge levels with reward, checked in order.
    pub final_charge_bonuses: Vec<(Percent, f64)>,
    /// Ratio of direct to total distance with reward, checked in order.
    pub efficiency_bonuses: Vec<(f64, f64)>,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            infeasible_penalty: 100_000.,
            low_charge_bands: vec![(15., 5000.), (20., 1000.), (30., 300.)],
            charge_amount_rewards: vec![(40., 800.), (25., 400.)],
            wasteful_charge: 15.,
            wasteful_charge_penalty: 1000.,
            moderate_charge_reward: 100.,
            detour_penalty: 3.,
            distance_penalty: 2.,
            stop_penalty: 50.,
            short_gap: (50., 3000.),
            long_gap: (280., 2000.),
            comfortable_gap: ((80., 250.), 400.),
            backward_penalty: 2000.,
            safety_floor: 15.,
            success_reward: 20_000.,
            final_charge_reward: 40.,
            final_charge_bonuses: vec![(25., 3000.), (20., 1500.)],
            efficiency_bonuses: vec![(0.9, 5000.), (0.8, 2000.)],
        }
    }
}

/// A result of fitness evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct FitnessEvaluation {
    /// Fitness score, higher is better.
    pub score: f64,
    /// False if the vehicle cannot finish the route.
    pub is_valid: bool,
}

/// Evaluates chromosome fitness simulating the trip from `start_soc` with full recharge at every stop.
/// Small chromosomes get their stop order repaired first. The result is also stored in chromosome.
pub fn evaluate_fitness(
    chromosome: &mut Chromosome,
    start_soc: Percent,
    vehicle: &Vehicle,
    weights: &FitnessWeights,
) -> FitnessEvaluation {
    if (1..=3).contains(&chromosome.stop_count()) {
        chromosome.repair_order();
    }

    let evaluation = calculate_fitness(chromosome, start_soc, vehicle, weights);

    chromosome.fitness = evaluation.score;
    chromosome.is_valid = evaluation.is_valid;

    evaluation
}

fn calculate_fitness(
    chromosome: &Chromosome,
    start_soc: Percent,
    vehicle: &Vehicle,
    weights: &FitnessWeights,
) -> FitnessEvaluation {
    let genes = chromosome.genes();
    let direct_distance = chromosome.start().distance_to(chromosome.end());

    let mut score = 0.;
    let mut soc = start_soc;
    let mut total_distance = 0.;

    for pair in genes.windows(2) {
        let distance = pair[0].location().distance_to(pair[1].location());
        total_distance += distance;

        let usage = vehicle.consumption_percent(distance);
        if soc < usage {
            return FitnessEvaluation { score: score - weights.infeasible_penalty, is_valid: false };
        }

        soc -= usage;
        score -= low_charge_penalty(soc, weights);

        if pair[1].is_charging_stop() {
            score += charge_amount_score(100. - soc, weights);
            soc = 100.;
        }
    }

    let detour = total_distance - direct_distance;
    if detour > 0. {
        score -= detour * weights.detour_penalty;
    }

    score -= total_distance * weights.distance_penalty;
    score -= chromosome.stop_count() as f64 * weights.stop_penalty;
    score += station_gaps_score(chromosome, weights);
    score -= backward_stops(chromosome) as f64 * weights.backward_penalty;

    if soc >= weights.safety_floor {
        score += weights.success_reward + soc * weights.final_charge_reward;
        score += first_matching(&weights.final_charge_bonuses, |&threshold| soc >= threshold);

        let efficiency = if total_distance > 0. { direct_distance / total_distance } else { 1. };
        score += first_matching(&weights.efficiency_bonuses, |&threshold| efficiency > threshold);
    }

    FitnessEvaluation { score, is_valid: true }
}

fn low_charge_penalty(soc: Percent, weights: &FitnessWeights) -> f64 {
    weights
        .low_charge_bands
        .iter()
        .find(|(threshold, _)| soc < *threshold)
        .map(|(threshold, penalty)| penalty * (threshold - soc))
        .unwrap_or(0.)
}

fn charge_amount_score(charged: Percent, weights: &FitnessWeights) -> f64 {
    if let Some((_, reward)) = weights.charge_amount_rewards.iter().find(|(threshold, _)| charged > *threshold) {
        *reward
    } else if charged < weights.wasteful_charge {
        -weights.wasteful_charge_penalty
    } else {
        weights.moderate_charge_reward
    }
}

fn station_gaps_score(chromosome: &Chromosome, weights: &FitnessWeights) -> f64 {
    let (short_gap, short_penalty) = weights.short_gap;
    let (long_gap, long_penalty) = weights.long_gap;
    let ((min_comfortable, max_comfortable), comfortable_reward) = weights.comfortable_gap;

    let stops = chromosome.stops().collect::<Vec<_>>();

    stops
        .windows(2)
        .map(|pair| pair[0].location.distance_to(&pair[1].location))
        .map(|gap| {
            if gap < short_gap {
                -short_penalty * (short_gap - gap) / short_gap
            } else if gap > long_gap {
                -long_penalty * (gap - long_gap) / 100.
            } else if (min_comfortable..=max_comfortable).contains(&gap) {
                comfortable_reward
            } else {
                0.
            }
        })
        .sum()
}

fn backward_stops(chromosome: &Chromosome) -> usize {
    let start = chromosome.start();
    let distances = chromosome.stops().map(|station| start.distance_to(&station.location)).collect::<Vec<_>>();

    distances.windows(2).filter(|pair| pair[1] < pair[0]).count()
}

fn first_matching<T>(bonuses: &[(T, f64)], predicate: impl Fn(&T) -> bool) -> f64 {
    bonuses.iter().find(|(threshold, _)| predicate(threshold)).map(|(_, bonus)| *bonus).unwrap_or(0.)
}
