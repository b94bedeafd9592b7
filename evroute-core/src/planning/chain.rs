#[cfg(test)]
#[path = "../../tests/unit/planning/chain_test.rs"]
mod chain_test;

use super::PlannerConfig;
use crate::models::common::{ChargingStation, Distance, Percent, Point, Vehicle, distance_to_line};

/// Greedily builds a chain of charging stations which allows to reach the destination.
/// Returns an empty chain when no feasible chain is found.
pub fn build_station_chain(
    stations: &[ChargingStation],
    start: &Point,
    end: &Point,
    vehicle: &Vehicle,
    soc: Percent,
    config: &PlannerConfig,
) -> Vec<ChargingStation> {
    let per_charge_range = vehicle.full_range() * config.per_charge_range_ratio;
    let max_hop = vehicle.full_range() * config.arrival_range_ratio;
    let direct_distance = start.distance_to(end);

    if per_charge_range <= 0. {
        return vec![];
    }

    let estimated_stops = ((direct_distance / per_charge_range).ceil() as usize).max(1);
    let max_iterations = estimated_stops * 3;

    let context = ChainContext {
        stations,
        start,
        end,
        line_deviation_limit: config.line_deviation_limit(direct_distance),
        next_hop_range: per_charge_range * config.arrival_range_ratio,
        config,
    };

    let mut chain: Vec<&ChargingStation> = vec![];
    let mut current_position = start;
    let mut current_range = vehicle.range(soc);

    for _ in 0..max_iterations {
        let to_end = current_position.distance_to(end);

        if to_end <= current_range * config.arrival_range_ratio {
            break;
        }

        let reach_limit = (current_range * config.reachable_range_ratio).min(max_hop);

        match context.select_next(chain.as_slice(), current_position, reach_limit) {
            Some(station) => {
                chain.push(station);
                current_position = &station.location;
                current_range = per_charge_range;

                if chain.len() > estimated_stops + 3 {
                    break;
                }
            }
            None if chain.is_empty() || to_end > current_range => return vec![],
            None => break,
        }
    }

    match chain.last() {
        Some(last) if last.location.distance_to(end) <= context.next_hop_range => {
            chain.into_iter().cloned().collect()
        }
        _ => vec![],
    }
}

struct ChainContext<'a> {
    stations: &'a [ChargingStation],
    start: &'a Point,
    end: &'a Point,
    line_deviation_limit: Distance,
    next_hop_range: Distance,
    config: &'a PlannerConfig,
}

impl<'a> ChainContext<'a> {
    fn select_next(
        &self,
        chain: &[&ChargingStation],
        position: &Point,
        reach_limit: Distance,
    ) -> Option<&'a ChargingStation> {
        let to_end = position.distance_to(self.end);
        let is_used = |station: &ChargingStation| chain.iter().any(|used| used.id == station.id);

        self.stations
            .iter()
            .filter(|station| !is_used(station))
            .filter_map(|station| {
                let to_station = position.distance_to(&station.location);
                let station_to_end = station.location.distance_to(self.end);
                let progress = to_end - station_to_end;

                if to_station > reach_limit || progress <= 0. {
                    return None;
                }

                if !chain.is_empty() && to_station < self.config.min_stop_spacing {
                    return None;
                }

                let line_distance = distance_to_line(self.start, self.end, &station.location);
                if line_distance > self.line_deviation_limit {
                    return None;
                }

                let can_reach_end = station_to_end <= self.next_hop_range;
                let has_next_station = self.stations.iter().any(|next| {
                    next.id != station.id
                        && !is_used(next)
                        && station.location.distance_to(&next.location) <= self.next_hop_range
                        && next.location.distance_to(self.end) < station_to_end
                });

                if !can_reach_end && !has_next_station {
                    return None;
                }

                let score = progress * 3.
                    + 500. / (to_station + 1.)
                    + 1000. / (line_distance + 1.)
                    + (progress / to_station.max(f64::EPSILON)) * 200.
                    + station.power_kw / 2.;

                Some((score, station))
            })
            .fold(None, |best: Option<(f64, &'a ChargingStation)>, (score, station)| match best {
                Some((best_score, _)) if best_score >= score => best,
                _ => Some((score, station)),
            })
            .map(|(_, station)| station)
    }
}
