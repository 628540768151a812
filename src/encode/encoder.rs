//! The routing model encoder.

use crate::error::EncodeError;
use crate::models::Problem;

use super::{CapacityDimension, Disjunction, EncodedModel, IndexManager, TimeDimension};

/// Default penalty for dropping an optional stop, in cost units.
///
/// A modeling convention, not a real-world rule; override it via
/// [`EncoderConfig`] when the instance's cost scale demands it.
pub const DEFAULT_DROP_PENALTY: f64 = 9_999_999.0;

/// Tunable encoding parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EncoderConfig {
    /// Penalty charged when an optional stop is dropped from all routes.
    pub drop_penalty: f64,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            drop_penalty: DEFAULT_DROP_PENALTY,
        }
    }
}

/// Encodes a [`Problem`] into the abstract constraint model.
///
/// The encoding is deterministic and total: the same unchanged problem always
/// produces a structurally identical [`EncodedModel`].
///
/// # Examples
///
/// ```
/// use pdp_routing::models::{Fleet, Order, Problem, Stop, TimeWindow};
/// use pdp_routing::encode::ModelEncoder;
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
/// assert_eq!(model.pairs(), &[(1, 2)]);
/// assert!(model.disjunctions().is_empty()); // every non-depot stop is paired
/// ```
pub struct ModelEncoder<'a> {
    problem: &'a Problem,
    config: EncoderConfig,
}

impl<'a> ModelEncoder<'a> {
    /// Creates an encoder with default configuration.
    pub fn new(problem: &'a Problem) -> Self {
        Self {
            problem,
            config: EncoderConfig::default(),
        }
    }

    /// Overrides the encoding configuration.
    pub fn with_config(mut self, config: EncoderConfig) -> Self {
        self.config = config;
        self
    }

    /// Builds the encoded model.
    ///
    /// # Errors
    ///
    /// [`EncodeError::TravelTimeUnavailable`] if the travel matrix does not
    /// cover the stop set: a contract violation that aborts construction,
    /// since the time dimension cannot be registered without it.
    pub fn encode(&self) -> Result<EncodedModel, EncodeError> {
        let problem = self.problem;
        let n = problem.num_stops();

        let matrix = problem.matrix().clone();
        if matrix.size() != n {
            return Err(EncodeError::TravelTimeUnavailable {
                expected: n,
                actual: matrix.size(),
            });
        }

        let fleet = problem.fleet();
        let starts = fleet.vehicles().iter().map(|v| v.start()).collect();
        let ends = fleet.vehicles().iter().map(|v| v.end()).collect();
        let index = IndexManager::new(n, starts, ends);

        let service_secs = (0..n).map(|s| problem.service_time(s)).collect();
        let fixed_costs = fleet
            .vehicles()
            .iter()
            .map(|v| v.fixed_cost() as f64)
            .collect();

        let capacity = CapacityDimension {
            capacities: fleet.vehicles().iter().map(|v| v.capacity()).collect(),
            demands: problem.stops().iter().map(|s| s.demand()).collect(),
        };

        let bounds = (0..index.num_positions())
            .map(|pos| {
                let stop = index.stop_of(pos);
                problem.stops()[stop]
                    .time_window()
                    .map(|tw| (tw.open(), tw.close()))
            })
            .collect();
        let time = TimeDimension {
            horizon: problem.horizon(),
            bounds,
        };

        let pairs = problem
            .orders()
            .iter()
            .map(|o| (index.node_position(o.pickup()), index.node_position(o.delivery())))
            .collect();

        let disjunctions = (0..n)
            .filter(|&s| !problem.is_depot(s))
            .filter(|&s| !problem.orders().iter().any(|o| o.involves(s)))
            .map(|s| Disjunction {
                positions: vec![index.node_position(s)],
                penalty: self.config.drop_penalty,
            })
            .collect();

        Ok(EncodedModel {
            index,
            matrix,
            service_secs,
            fixed_costs,
            capacity,
            time,
            pairs,
            disjunctions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fleet, Order, Stop, TimeWindow};

    fn problem() -> Problem {
        let tw = TimeWindow::new(1000, 50_000).expect("valid");
        let stops = vec![
            Stop::new(0, 0, 53.38, -1.47),
            Stop::new(1, 10, 53.39, -1.46).with_time_window(tw),
            Stop::new(2, -10, 53.40, -1.45).with_time_window(tw),
            Stop::new(3, 4, 53.41, -1.44).with_time_window(tw),
        ];
        let mut fleet = Fleet::homogeneous(2, 20, 10);
        fleet.set_depot(0);
        Problem::new(stops, vec![Order::new(1, 2, 10)], fleet)
    }

    #[test]
    fn test_dimensions() {
        let p = problem();
        let model = ModelEncoder::new(&p).encode().expect("encodes");

        assert_eq!(model.capacity().capacities, vec![20, 20]);
        assert_eq!(model.capacity().demands, vec![0, 10, -10, 4]);
        assert_eq!(model.time().horizon, p.horizon());
        // Node 1 carries its window; depot node 0 is unconstrained.
        assert_eq!(model.time_bounds(1), Some((1000, 50_000)));
        assert_eq!(model.time_bounds(0), None);
    }

    #[test]
    fn test_pairs_and_disjunctions() {
        let p = problem();
        let model = ModelEncoder::new(&p).encode().expect("encodes");

        assert_eq!(model.pairs(), &[(1, 2)]);
        // Stop 3 is the only optional stop: not a depot, not in an order.
        assert_eq!(model.disjunctions().len(), 1);
        assert_eq!(model.disjunctions()[0].positions, vec![3]);
        assert_eq!(model.disjunctions()[0].penalty, DEFAULT_DROP_PENALTY);
    }

    #[test]
    fn test_custom_penalty() {
        let p = problem();
        let model = ModelEncoder::new(&p)
            .with_config(EncoderConfig { drop_penalty: 500.0 })
            .encode()
            .expect("encodes");
        assert_eq!(model.disjunctions()[0].penalty, 500.0);
    }

    #[test]
    fn test_transit_zero_at_endpoints() {
        let p = problem();
        let model = ModelEncoder::new(&p).encode().expect("encodes");
        let start = model.index().start_of(0);
        let end = model.index().end_of(0);

        assert_eq!(model.transit_secs(start, 1), 0);
        assert_eq!(model.transit_secs(1, end), 0);
        // Between real nodes: service at departed stop plus travel.
        let expected = p.service_time(1) + p.matrix().time_secs(1, 2);
        assert_eq!(model.transit_secs(1, 2), expected);
    }

    #[test]
    fn test_arc_cost_is_distance() {
        let p = problem();
        let model = ModelEncoder::new(&p).encode().expect("encodes");
        assert_eq!(model.arc_cost(1, 2), p.matrix().distance_km(1, 2));
        // Start position resolves to the depot stop.
        let start = model.index().start_of(1);
        assert_eq!(model.arc_cost(start, 3), p.matrix().distance_km(0, 3));
    }

    #[test]
    fn test_encode_idempotent() {
        let p = problem();
        let a = ModelEncoder::new(&p).encode().expect("encodes");
        let b = ModelEncoder::new(&p).encode().expect("encodes");
        assert_eq!(a, b);
    }
}
