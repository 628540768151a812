//! Greedy cheapest-insertion reference solver.
//!
//! A deliberately simple solver that honors the encoded model's semantics:
//! cumulative capacity with zero slack, cumulative time with window bounds,
//! same-vehicle pickup-before-delivery pairing, and droppable disjunction
//! stops. It exists so the encoder and decoder can be exercised end-to-end;
//! production deployments plug in a stronger engine behind the same
//! [`RouteSolver`](super::RouteSolver) trait.

use std::time::Instant;

use tracing::debug;

use crate::encode::EncodedModel;
use crate::error::SolveError;

use super::{Assignment, RouteSolver, SearchConfig, SolveOutcome};

/// Cheapest-insertion construction over the encoded model.
///
/// Pairs are inserted first (both endpoints into one vehicle, pickup before
/// delivery, at the cheapest feasible positions); optional stops follow and
/// are dropped when their best insertion costs more than their penalty. The
/// wall-clock budget is checked between insertions; running out during the
/// mandatory phase yields [`SolveOutcome::NoSolution`].
pub struct GreedyInsertion;

/// Forward simulation of one route: service-start times and loads per visit.
struct Schedule {
    times: Vec<i64>,
    loads: Vec<i64>,
    start_time: i64,
    end_time: i64,
    cost: f64,
}

impl RouteSolver for GreedyInsertion {
    fn solve(
        &self,
        model: &EncodedModel,
        config: &SearchConfig,
    ) -> Result<SolveOutcome, SolveError> {
        let index = model.index();
        let num_stops = index.num_stops();

        for &(p, d) in model.pairs() {
            if p >= num_stops || d >= num_stops {
                return Err(SolveError::new(format!(
                    "pair ({p}, {d}) references a non-node position"
                )));
            }
        }
        for dj in model.disjunctions() {
            if dj.positions.iter().any(|&n| n >= num_stops) {
                return Err(SolveError::new("disjunction references a non-node position"));
            }
        }

        let started = Instant::now();
        let num_vehicles = index.num_vehicles();
        let mut routes: Vec<Vec<usize>> = vec![Vec::new(); num_vehicles];

        // Mandatory pickup/delivery pairs.
        for &(pickup, delivery) in model.pairs() {
            if started.elapsed() > config.time_limit {
                debug!("time budget exhausted during pair insertion");
                return Ok(SolveOutcome::NoSolution);
            }

            let mut best: Option<(usize, usize, usize, f64)> = None;
            for vehicle in 0..num_vehicles {
                let base_cost = match simulate(model, vehicle, &routes[vehicle]) {
                    Some(s) => s.cost,
                    None => continue,
                };
                let len = routes[vehicle].len();
                for i in 0..=len {
                    for j in i..=len {
                        let mut candidate = routes[vehicle].clone();
                        candidate.insert(i, pickup);
                        candidate.insert(j + 1, delivery);
                        if let Some(s) = simulate(model, vehicle, &candidate) {
                            let delta = s.cost - base_cost;
                            if best.map_or(true, |(_, _, _, b)| delta < b) {
                                best = Some((vehicle, i, j, delta));
                            }
                        }
                    }
                }
            }

            match best {
                Some((vehicle, i, j, _)) => {
                    routes[vehicle].insert(i, pickup);
                    routes[vehicle].insert(j + 1, delivery);
                }
                None => {
                    debug!(pickup, delivery, "no feasible insertion for pair");
                    return Ok(SolveOutcome::NoSolution);
                }
            }
        }

        // Optional stops: insert when cheaper than their penalty, else drop.
        let mut dropped_penalty = 0.0;
        for dj in model.disjunctions() {
            for &node in &dj.positions {
                if started.elapsed() > config.time_limit {
                    dropped_penalty += dj.penalty;
                    continue;
                }

                let mut best: Option<(usize, usize, f64)> = None;
                for vehicle in 0..num_vehicles {
                    let base_cost = match simulate(model, vehicle, &routes[vehicle]) {
                        Some(s) => s.cost,
                        None => continue,
                    };
                    for i in 0..=routes[vehicle].len() {
                        let mut candidate = routes[vehicle].clone();
                        candidate.insert(i, node);
                        if let Some(s) = simulate(model, vehicle, &candidate) {
                            let delta = s.cost - base_cost;
                            if best.map_or(true, |(_, _, b)| delta < b) {
                                best = Some((vehicle, i, delta));
                            }
                        }
                    }
                }

                match best {
                    Some((vehicle, i, delta)) if delta < dj.penalty => {
                        routes[vehicle].insert(i, node);
                    }
                    _ => {
                        debug!(node, "optional stop dropped");
                        dropped_penalty += dj.penalty;
                    }
                }
            }
        }

        Ok(SolveOutcome::Feasible(build_assignment(
            model,
            &routes,
            dropped_penalty,
        )))
    }
}

/// Simulates a route (node positions, endpoints implicit), returning its
/// schedule or `None` when any capacity, window, or horizon bound breaks.
fn simulate(model: &EncodedModel, vehicle: usize, nodes: &[usize]) -> Option<Schedule> {
    let index = model.index();
    let start = index.start_of(vehicle);
    let end = index.end_of(vehicle);
    let capacity = model.capacity().capacities[vehicle];
    let horizon = model.time().horizon;

    let mut time = 0i64;
    if let Some((open, close)) = model.time_bounds(start) {
        time = time.max(open);
        if time > close {
            return None;
        }
    }
    let start_time = time;

    let mut load = 0i64;
    let mut cost = 0.0;
    let mut times = Vec::with_capacity(nodes.len());
    let mut loads = Vec::with_capacity(nodes.len());
    let mut prev = start;

    for &node in nodes {
        time += model.transit_secs(prev, node);
        if let Some((open, close)) = model.time_bounds(node) {
            time = time.max(open);
            if time > close {
                return None;
            }
        }
        if time > horizon {
            return None;
        }

        load += model.demand(node);
        if load < 0 || load > capacity {
            return None;
        }

        cost += model.arc_cost(prev, node);
        times.push(time);
        loads.push(load);
        prev = node;
    }

    time += model.transit_secs(prev, end);
    if let Some((open, close)) = model.time_bounds(end) {
        time = time.max(open);
        if time > close {
            return None;
        }
    }
    if time > horizon {
        return None;
    }
    cost += model.arc_cost(prev, end);

    Some(Schedule {
        times,
        loads,
        start_time,
        end_time: time,
        cost,
    })
}

fn build_assignment(model: &EncodedModel, routes: &[Vec<usize>], dropped_penalty: f64) -> Assignment {
    let index = model.index();
    let n = index.num_positions();
    let mut next: Vec<usize> = (0..n).collect();
    let mut load = vec![0i64; n];
    let mut time_min = vec![0i64; n];
    let mut time_max = vec![0i64; n];
    let mut objective = dropped_penalty;

    for (vehicle, nodes) in routes.iter().enumerate() {
        let start = index.start_of(vehicle);
        let end = index.end_of(vehicle);
        let schedule =
            simulate(model, vehicle, nodes).expect("constructed route must be feasible");

        let mut prev = start;
        for &node in nodes {
            next[prev] = node;
            prev = node;
        }
        next[prev] = end;
        next[end] = end;

        time_min[start] = schedule.start_time;
        time_max[start] = schedule.start_time;
        for (k, &node) in nodes.iter().enumerate() {
            load[node] = schedule.loads[k];
            time_min[node] = schedule.times[k];
            time_max[node] = schedule.times[k];
        }
        load[end] = schedule.loads.last().copied().unwrap_or(0);
        time_min[end] = schedule.end_time;
        time_max[end] = schedule.end_time;

        objective += schedule.cost;
        if !nodes.is_empty() {
            objective += model.fixed_cost(vehicle);
        }
    }

    Assignment::from_parts(next, load, time_min, time_max, objective)
        .expect("assignment parts share one length")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::ModelEncoder;
    use crate::models::{Fleet, Order, Problem, Stop, TimeWindow};

    fn pdp_problem() -> Problem {
        let tw = TimeWindow::new(0, 86_400).expect("valid");
        let stops = vec![
            Stop::new(0, 0, 53.38, -1.47),
            Stop::new(1, 10, 53.39, -1.46).with_time_window(tw),
            Stop::new(2, -10, 53.40, -1.45).with_time_window(tw),
        ];
        let mut fleet = Fleet::homogeneous(2, 20, 10);
        fleet.set_depot(0);
        Problem::new(stops, vec![Order::new(1, 2, 10)], fleet)
    }

    fn solve(problem: &Problem) -> SolveOutcome {
        let model = ModelEncoder::new(problem).encode().expect("encodes");
        GreedyInsertion
            .solve(&model, &SearchConfig::default())
            .expect("model is well-formed")
    }

    #[test]
    fn test_pair_served_in_order() {
        let problem = pdp_problem();
        let assignment = match solve(&problem) {
            SolveOutcome::Feasible(a) => a,
            SolveOutcome::NoSolution => panic!("expected a solution"),
        };

        // Neither endpoint dropped, pickup time <= delivery time.
        assert!(!assignment.is_dropped(1));
        assert!(!assignment.is_dropped(2));
        assert!(assignment.time_bounds(1).0 <= assignment.time_bounds(2).0);
    }

    #[test]
    fn test_capacity_infeasible_pair_yields_no_solution() {
        let tw = TimeWindow::new(0, 86_400).expect("valid");
        let stops = vec![
            Stop::new(0, 0, 53.38, -1.47),
            Stop::new(1, 50, 53.39, -1.46).with_time_window(tw),
            Stop::new(2, -50, 53.40, -1.45).with_time_window(tw),
        ];
        let mut fleet = Fleet::homogeneous(1, 20, 0);
        fleet.set_depot(0);
        let problem = Problem::new(stops, vec![Order::new(1, 2, 50)], fleet);

        assert_eq!(solve(&problem), SolveOutcome::NoSolution);
    }

    #[test]
    fn test_zero_budget_yields_no_solution() {
        let problem = pdp_problem();
        let model = ModelEncoder::new(&problem).encode().expect("encodes");
        let config = SearchConfig {
            time_limit: std::time::Duration::ZERO,
            ..SearchConfig::default()
        };
        assert_eq!(
            GreedyInsertion.solve(&model, &config).expect("well-formed"),
            SolveOutcome::NoSolution
        );
    }

    #[test]
    fn test_cheap_optional_stop_is_served() {
        let tw = TimeWindow::new(0, 86_400).expect("valid");
        let stops = vec![
            Stop::new(0, 0, 53.38, -1.47),
            Stop::new(1, 5, 53.381, -1.471).with_time_window(tw),
        ];
        let mut fleet = Fleet::homogeneous(1, 20, 0);
        fleet.set_depot(0);
        let problem = Problem::new(stops, vec![], fleet);

        let assignment = match solve(&problem) {
            SolveOutcome::Feasible(a) => a,
            SolveOutcome::NoSolution => panic!("expected a solution"),
        };
        assert!(!assignment.is_dropped(1));
    }

    #[test]
    fn test_expensive_optional_stop_is_dropped() {
        let tw = TimeWindow::new(0, 86_400).expect("valid");
        let stops = vec![
            Stop::new(0, 0, 53.38, -1.47),
            // Antipodal-ish: serving costs far more than the penalty.
            Stop::new(1, 5, -40.0, 175.0).with_time_window(tw),
        ];
        let mut fleet = Fleet::homogeneous(1, 20, 0);
        fleet.set_depot(0);
        let problem = Problem::new(stops, vec![], fleet);

        let model = ModelEncoder::new(&problem)
            .with_config(crate::encode::EncoderConfig { drop_penalty: 100.0 })
            .encode()
            .expect("encodes");
        let assignment = match GreedyInsertion
            .solve(&model, &SearchConfig::default())
            .expect("well-formed")
        {
            SolveOutcome::Feasible(a) => a,
            SolveOutcome::NoSolution => panic!("expected a solution"),
        };
        assert!(assignment.is_dropped(1));
        // The penalty shows up in the objective.
        assert!(assignment.objective() >= 100.0);
    }

    #[test]
    fn test_malformed_pair_rejected() {
        let problem = pdp_problem();
        let mut model = ModelEncoder::new(&problem).encode().expect("encodes");
        // Point a pair at a start position: not a node, must be rejected.
        let start = model.index().start_of(0);
        model.pairs.push((start, start));
        assert!(GreedyInsertion
            .solve(&model, &SearchConfig::default())
            .is_err());
    }
}
