//! Solution response payloads.

use serde::{Deserialize, Serialize};

use crate::decode::SolutionDecoder;

/// One visited point in a vehicle path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopPointDto {
    /// External node id.
    pub node_id: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Cumulative load at this point.
    pub load: i64,
    /// Earliest cumulative time, seconds.
    pub time_min: i64,
    /// Latest cumulative time, seconds.
    pub time_max: i64,
}

/// The ordered path of one vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePathDto {
    /// External vehicle id.
    pub vehicle_id: String,
    /// Visited points, depot endpoints included.
    pub route: Vec<StopPointDto>,
}

/// A fulfilled order and the vehicle that serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignedOrderDto {
    /// External order id.
    pub order_id: String,
    /// External id of the pickup node.
    pub pickup_node_id: String,
    /// External id of the delivery node.
    pub delivery_node_id: String,
    /// External id of the assigned vehicle.
    pub assigned_vehicle_id: String,
}

/// The caller-facing solution: per-vehicle paths, fulfilled orders, dropped
/// stops, and the objective value, all in external identifiers.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::{Fleet, Order, Problem, Stop, TimeWindow};
/// use pdp_routing::encode::ModelEncoder;
/// use pdp_routing::solve::{GreedyInsertion, RouteSolver, SearchConfig, SolveOutcome};
/// use pdp_routing::decode::SolutionDecoder;
/// use pdp_routing::api::SolutionSummary;
///
/// let tw = TimeWindow::new(0, 86_400).unwrap();
/// let stops = vec![
///     Stop::new(0, 0, 53.38, -1.47),
///     Stop::new(1, 10, 53.39, -1.46).with_time_window(tw),
///     Stop::new(2, -10, 53.40, -1.45).with_time_window(tw),
/// ];
/// let mut fleet = Fleet::homogeneous(1, 20, 10);
/// fleet.set_depot(0);
/// let problem = Problem::new(stops, vec![Order::new(1, 2, 10)], fleet);
///
/// let model = ModelEncoder::new(&problem).encode().unwrap();
/// let assignment = match GreedyInsertion.solve(&model, &SearchConfig::default()).unwrap() {
///     SolveOutcome::Feasible(a) => a,
///     SolveOutcome::NoSolution => unreachable!(),
/// };
/// let decoder = SolutionDecoder::new(&problem, &model, &assignment);
/// let summary = SolutionSummary::from_decoder(&decoder);
/// assert_eq!(summary.path.len(), 1);
/// assert_eq!(summary.assigned_orders.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolutionSummary {
    /// Per-vehicle paths.
    pub path: Vec<VehiclePathDto>,
    /// Orders fulfilled by the solution.
    pub assigned_orders: Vec<AssignedOrderDto>,
    /// External ids of dropped stops.
    pub dropped: Vec<String>,
    /// Solver objective value.
    pub objective: f64,
}

impl SolutionSummary {
    /// Builds the response from a decoder.
    pub fn from_decoder(decoder: &SolutionDecoder<'_>) -> Self {
        let path = decoder
            .routes()
            .into_iter()
            .map(|route| VehiclePathDto {
                vehicle_id: route.vehicle_id,
                route: route
                    .stops
                    .into_iter()
                    .map(|s| StopPointDto {
                        node_id: s.external_id,
                        lat: s.stop.lat(),
                        lon: s.stop.lon(),
                        load: s.load,
                        time_min: s.time_min,
                        time_max: s.time_max,
                    })
                    .collect(),
            })
            .collect();

        let assigned_orders = decoder
            .assigned_orders()
            .into_iter()
            .map(|a| AssignedOrderDto {
                order_id: a.order_id,
                pickup_node_id: a.pickup_id,
                delivery_node_id: a.delivery_id,
                assigned_vehicle_id: a.vehicle_id,
            })
            .collect();

        let dropped = decoder.dropped().into_iter().map(|d| d.external_id).collect();

        Self {
            path,
            assigned_orders,
            dropped,
            objective: decoder.objective(),
        }
    }
}
