#[cfg(test)]
#[path = "../../tests/unit/genetic/operators_test.rs"]
mod operators_test;

use super::{Chromosome, sort_by_distance_from};
use crate::utils::{Random, shuffle};
use rustc_hash::FxHashSet;

/// Specifies a mutation type applied to charging stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MutationKind {
    /// Swaps two neighbour stops.
    SwapAdjacent,
    /// Removes one random stop.
    RemoveRandom,
    /// Sorts stops by distance from start.
    SortByDistance,
    /// Shuffles all stops.
    Shuffle,
}

impl MutationKind {
    /// Selects mutation kind for chromosome with given amount of stops.
    pub fn select(stop_count: usize, random: &dyn Random) -> Self {
        if stop_count <= 3 {
            return MutationKind::SwapAdjacent;
        }

        match random.uniform_real(0., 1.) {
            p if p < 0.35 => MutationKind::SwapAdjacent,
            p if p < 0.65 => MutationKind::RemoveRandom,
            p if p < 0.85 => MutationKind::SortByDistance,
            _ => MutationKind::Shuffle,
        }
    }
}

/// Mutates chromosome with given probability. Chromosomes with less than two stops are not changed.
/// Returns applied mutation kind, if any.
pub fn mutate(chromosome: &mut Chromosome, mutation_rate: f64, random: &dyn Random) -> Option<MutationKind> {
    let stop_count = chromosome.stop_count();
    if stop_count < 2 || !random.is_hit(mutation_rate) {
        return None;
    }

    let kind = MutationKind::select(stop_count, random);

    match kind {
        MutationKind::SwapAdjacent => {
            let index = random.index(stop_count - 1);
            chromosome.swap_stops(index, index + 1);
        }
        MutationKind::RemoveRandom => chromosome.remove_stop(random.index(stop_count)),
        MutationKind::SortByDistance => chromosome.sort_by_distance_from_start(),
        MutationKind::Shuffle => {
            let mut stops = chromosome.stops().cloned().collect::<Vec<_>>();
            shuffle(stops.as_mut_slice(), random);
            chromosome.replace_stops(stops);
        }
    }

    Some(kind)
}

/// Creates a child from two parents: start and end come from the first parent, stops are sampled
/// from the union of parents' stops and sorted by distance from start.
pub fn crossover(first: &Chromosome, second: &Chromosome, random: &dyn Random) -> Chromosome {
    let mut ids = FxHashSet::default();
    let mut stops = first
        .stops()
        .chain(second.stops())
        .filter(|station| ids.insert(station.id.as_str()))
        .cloned()
        .collect::<Vec<_>>();

    if stops.len() > 3 {
        let count = (stops.len() as f64 * random.uniform_real(0.6, 0.8)).floor() as usize;

        shuffle(stops.as_mut_slice(), random);
        stops.truncate(count.max(2));
    }

    first.with_stops(sort_by_distance_from(first.start(), stops))
}
