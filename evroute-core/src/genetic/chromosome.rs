#[cfg(test)]
#[path = "../../tests/unit/genetic/chromosome_test.rs"]
mod chromosome_test;

use super::Gene;
use crate::models::Route;
use crate::models::common::{ChargingStation, Energy, Point};
use crate::utils::compare_floats;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A candidate route: trip start, charging stops with distinct stations and trip end.
/// Fitness and validity describe the last evaluation only.
#[derive(Clone, Debug)]
pub struct Chromosome {
    genes: Vec<Gene>,
    /// Fitness score of the last evaluation.
    pub fitness: f64,
    /// False if the last evaluation found that the vehicle runs out of charge.
    pub is_valid: bool,
}

impl Chromosome {
    /// Creates a new chromosome. Stations with already used ids are skipped.
    pub fn new(start: Point, stops: Vec<Arc<ChargingStation>>, end: Point) -> Self {
        let mut ids = FxHashSet::default();
        let stops = stops.into_iter().filter(|station| ids.insert(station.id.clone())).map(Gene::ChargingStop);

        let genes = std::iter::once(Gene::Waypoint(start)).chain(stops).chain(std::iter::once(Gene::Waypoint(end)));

        Self { genes: genes.collect(), fitness: 0., is_valid: true }
    }

    /// Creates a new chromosome which keeps start and end of the current one, but has other stops.
    pub fn with_stops(&self, stops: Vec<Arc<ChargingStation>>) -> Self {
        Self::new(self.start().clone(), stops, self.end().clone())
    }

    /// Returns all genes.
    pub fn genes(&self) -> &[Gene] {
        self.genes.as_slice()
    }

    /// Returns trip start.
    pub fn start(&self) -> &Point {
        self.genes[0].location()
    }

    /// Returns trip end.
    pub fn end(&self) -> &Point {
        self.genes[self.genes.len() - 1].location()
    }

    /// Returns charging stops in visiting order.
    pub fn stops(&self) -> impl Iterator<Item = &Arc<ChargingStation>> + '_ {
        self.genes.iter().filter_map(|gene| gene.station())
    }

    /// Returns amount of charging stops.
    pub fn stop_count(&self) -> usize {
        self.genes.len() - 2
    }

    /// Replaces charging stops keeping start and end.
    pub(crate) fn replace_stops(&mut self, stops: Vec<Arc<ChargingStation>>) {
        let start = self.genes[0].clone();
        let end = self.genes[self.genes.len() - 1].clone();
        let stops = stops.into_iter().map(Gene::ChargingStop);

        self.genes = std::iter::once(start).chain(stops).chain(std::iter::once(end)).collect();
    }

    /// Swaps two charging stops using their stop indices.
    pub(crate) fn swap_stops(&mut self, first: usize, second: usize) {
        self.genes.swap(first + 1, second + 1);
    }

    /// Removes charging stop using its stop index.
    pub(crate) fn remove_stop(&mut self, index: usize) {
        self.genes.remove(index + 1);
    }

    /// Returns true if stops are visited in non-decreasing distance from start.
    pub fn is_ordered_from_start(&self) -> bool {
        let start = self.start();
        let distances = self.stops().map(|station| start.distance_to(&station.location)).collect::<Vec<_>>();

        distances.windows(2).all(|pair| pair[0] <= pair[1])
    }

    /// Sorts stops by distance from start unless they are already ordered.
    pub fn repair_order(&mut self) {
        if !self.is_ordered_from_start() {
            self.sort_by_distance_from_start();
        }
    }

    /// Sorts stops by distance from start.
    pub fn sort_by_distance_from_start(&mut self) {
        let stops = sort_by_distance_from(self.start(), self.stops().cloned().collect());
        self.replace_stops(stops);
    }

    /// Converts chromosome to the route assuming that given amount of energy is charged at every stop.
    pub fn to_route(&self, energy_per_stop: Energy) -> Route {
        let mut route = Route::default();

        self.genes.iter().for_each(|gene| {
            if let Some(station) = gene.station() {
                route.add_charging_stop(station.as_ref().clone());
            }
            route.add_point(gene.location().clone());
        });

        let charging_time = route.charging_stops.iter().map(|station| station.charging_time(energy_per_stop)).sum();
        route.set_charging_time(charging_time);
        route.calculate_stats();

        route
    }
}

/// Sorts stations by distance from given point.
pub fn sort_by_distance_from(point: &Point, mut stations: Vec<Arc<ChargingStation>>) -> Vec<Arc<ChargingStation>> {
    stations.sort_by(|a, b| compare_floats(point.distance_to(&a.location), point.distance_to(&b.location)));
    stations
}
