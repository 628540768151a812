//! The solution decoder.

use crate::encode::EncodedModel;
use crate::models::{Problem, Stop};
use crate::solve::Assignment;

/// One stop within a decoded route, with the cumulative dimension values the
/// solver settled on at that position. Reported as-is, for presentation, not
/// re-validated here.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    /// The visited stop.
    pub stop: Stop,
    /// External id of the stop, falling back to the index rendered as text
    /// when the problem was built without an id mapping.
    pub external_id: String,
    /// Cumulative load at this position.
    pub load: i64,
    /// Earliest cumulative time at this position.
    pub time_min: i64,
    /// Latest cumulative time at this position.
    pub time_max: i64,
}

/// An ordered route for one vehicle, start and end stops included.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRoute {
    /// Fleet index of the vehicle.
    pub vehicle: usize,
    /// External id of the vehicle.
    pub vehicle_id: String,
    /// Visited stops in order; always begins with the vehicle's configured
    /// start stop and ends with its end stop, even for an empty route.
    pub stops: Vec<RouteStop>,
}

impl DecodedRoute {
    /// Returns `true` if the route serves no stop (start directly to end).
    pub fn is_empty(&self) -> bool {
        self.stops.len() <= 2
    }
}

/// A stop excluded from all routes.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedStop {
    /// Dense stop index.
    pub index: usize,
    /// External id, with index fallback.
    pub external_id: String,
}

/// A fulfilled order attributed to the vehicle serving both its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignedOrder {
    /// External order id, with order-list-index fallback.
    pub order_id: String,
    /// External id of the pickup stop.
    pub pickup_id: String,
    /// External id of the delivery stop.
    pub delivery_id: String,
    /// External id of the assigned vehicle.
    pub vehicle_id: String,
}

/// Decodes a solver [`Assignment`] against the problem and model it was
/// produced for.
///
/// Only constructed for a feasible outcome; a solver reporting no solution
/// never reaches the decoder.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::{Fleet, Order, Problem, Stop, TimeWindow};
/// use pdp_routing::encode::ModelEncoder;
/// use pdp_routing::solve::{GreedyInsertion, RouteSolver, SearchConfig, SolveOutcome};
/// use pdp_routing::decode::SolutionDecoder;
///
/// let tw = TimeWindow::new(0, 86_400).unwrap();
/// let stops = vec![
///     Stop::new(0, 0, 53.38, -1.47),
///     Stop::new(1, 10, 53.39, -1.46).with_time_window(tw),
///     Stop::new(2, -10, 53.40, -1.45).with_time_window(tw),
/// ];
/// let mut fleet = Fleet::homogeneous(2, 20, 10);
/// fleet.set_depot(0);
/// let problem = Problem::new(stops, vec![Order::new(1, 2, 10)], fleet);
///
/// let model = ModelEncoder::new(&problem).encode().unwrap();
/// let outcome = GreedyInsertion.solve(&model, &SearchConfig::default()).unwrap();
/// let assignment = match outcome {
///     SolveOutcome::Feasible(a) => a,
///     SolveOutcome::NoSolution => unreachable!(),
/// };
///
/// let decoder = SolutionDecoder::new(&problem, &model, &assignment);
/// assert_eq!(decoder.routes().len(), 2);
/// assert_eq!(decoder.assigned_orders().len(), 1);
/// assert!(decoder.dropped().is_empty());
/// ```
pub struct SolutionDecoder<'a> {
    problem: &'a Problem,
    model: &'a EncodedModel,
    assignment: &'a Assignment,
}

impl<'a> SolutionDecoder<'a> {
    /// Creates a decoder over immutable snapshots of its inputs.
    pub fn new(problem: &'a Problem, model: &'a EncodedModel, assignment: &'a Assignment) -> Self {
        Self {
            problem,
            model,
            assignment,
        }
    }

    fn stop_id(&self, index: usize) -> String {
        self.problem
            .ids()
            .id_of(index)
            .map(str::to_string)
            .unwrap_or_else(|| index.to_string())
    }

    /// Stops not visited by any route: node positions whose next link points
    /// at themselves. Depot stops are bookkeeping, never reported.
    pub fn dropped(&self) -> Vec<DroppedStop> {
        let index = self.model.index();
        (0..index.num_stops())
            .filter(|&s| self.assignment.is_dropped(index.node_position(s)))
            .filter(|&s| !self.problem.is_depot(s))
            .map(|s| DroppedStop {
                index: s,
                external_id: self.stop_id(s),
            })
            .collect()
    }

    /// Walks every vehicle's route from its start position to its end
    /// position inclusive.
    pub fn routes(&self) -> Vec<DecodedRoute> {
        let index = self.model.index();
        self.problem
            .fleet()
            .vehicles()
            .iter()
            .map(|vehicle| {
                let mut stops = Vec::new();
                let end = index.end_of(vehicle.index());
                let mut position = index.start_of(vehicle.index());

                // Cycle guard: a well-formed assignment visits each position
                // at most once.
                for _ in 0..=index.num_positions() {
                    stops.push(self.route_stop(position));
                    if position == end {
                        break;
                    }
                    position = self.assignment.next(position);
                }

                DecodedRoute {
                    vehicle: vehicle.index(),
                    vehicle_id: vehicle.external_id().to_string(),
                    stops,
                }
            })
            .collect()
    }

    fn route_stop(&self, position: usize) -> RouteStop {
        let stop_index = self.model.index().stop_of(position);
        let (time_min, time_max) = self.assignment.time_bounds(position);
        RouteStop {
            stop: self.problem.stops()[stop_index].clone(),
            external_id: self.stop_id(stop_index),
            load: self.assignment.load(position),
            time_min,
            time_max,
        }
    }

    /// Orders whose pickup and delivery both appear in one vehicle's route,
    /// attributed to that vehicle.
    pub fn assigned_orders(&self) -> Vec<AssignedOrder> {
        let routes = self.routes();
        let mut assigned = Vec::new();

        for (i, order) in self.problem.orders().iter().enumerate() {
            let route = routes.iter().find(|r| {
                let indices: Vec<usize> = r.stops.iter().map(|s| s.stop.index()).collect();
                indices.contains(&order.pickup()) && indices.contains(&order.delivery())
            });
            if let Some(route) = route {
                assigned.push(AssignedOrder {
                    order_id: order
                        .external_id()
                        .map(str::to_string)
                        .unwrap_or_else(|| i.to_string()),
                    pickup_id: self.stop_id(order.pickup()),
                    delivery_id: self.stop_id(order.delivery()),
                    vehicle_id: route.vehicle_id.clone(),
                });
            }
        }
        assigned
    }

    /// The solver's objective value.
    pub fn objective(&self) -> f64 {
        self.assignment.objective()
    }
}
