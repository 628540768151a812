//! The encoded constraint model consumed by a route solver.

use crate::distance::TravelMatrix;

use super::IndexManager;

/// The capacity dimension: a cumulative load tracked along every route with
/// zero slack, bounded below by zero and above by the vehicle's capacity.
#[derive(Debug, Clone, PartialEq)]
pub struct CapacityDimension {
    /// Upper bound per vehicle.
    pub capacities: Vec<i64>,
    /// Signed increment per stop (pickups positive, deliveries negative).
    pub demands: Vec<i64>,
}

/// The time dimension: a cumulative clock bounded by the horizon, with hard
/// per-position bounds taken from stop time windows.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeDimension {
    /// Global ceiling for every cumulative time variable, in seconds.
    pub horizon: i64,
    /// `(open, close)` bounds per routing position; `None` leaves the
    /// position unconstrained within `[0, horizon]`.
    pub bounds: Vec<Option<(i64, i64)>>,
}

/// A set of positions of which at most one must be visited, at the given
/// penalty if none is. The encoder only emits singletons: one optional stop
/// each, droppable for the penalty.
#[derive(Debug, Clone, PartialEq)]
pub struct Disjunction {
    /// Member positions.
    pub positions: Vec<usize>,
    /// Cost incurred if no member is visited.
    pub penalty: f64,
}

/// The abstract constraint model produced by the encoder.
///
/// Holds everything a [`RouteSolver`](crate::solve::RouteSolver) needs: the
/// position space, arc-cost and transit-time evaluators over it, the two
/// cumulative dimensions, pickup/delivery pairing constraints, and the
/// disjunctions marking optional stops. Structurally comparable, so encoding
/// the same unchanged problem twice yields equal models.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedModel {
    pub(crate) index: IndexManager,
    pub(crate) matrix: TravelMatrix,
    pub(crate) service_secs: Vec<i64>,
    pub(crate) fixed_costs: Vec<f64>,
    pub(crate) capacity: CapacityDimension,
    pub(crate) time: TimeDimension,
    pub(crate) pairs: Vec<(usize, usize)>,
    pub(crate) disjunctions: Vec<Disjunction>,
}

impl EncodedModel {
    /// The position space mapping.
    pub fn index(&self) -> &IndexManager {
        &self.index
    }

    /// Arc cost between two positions: the distance matrix value between the
    /// underlying stops, uniform over vehicles.
    pub fn arc_cost(&self, from: usize, to: usize) -> f64 {
        self.matrix
            .distance_km(self.index.stop_of(from), self.index.stop_of(to))
    }

    /// Fixed cost charged once if the given vehicle serves any stop.
    pub fn fixed_cost(&self, vehicle: usize) -> f64 {
        self.fixed_costs[vehicle]
    }

    /// Time-dimension increment for traversing `from -> to`: service time at
    /// the departed stop plus travel time, and zero whenever `from` is a
    /// vehicle start or `to` is a vehicle end (bookkeeping positions, not
    /// real stops).
    pub fn transit_secs(&self, from: usize, to: usize) -> i64 {
        if self.index.is_start(from) || self.index.is_end(to) {
            return 0;
        }
        let from_stop = self.index.stop_of(from);
        let to_stop = self.index.stop_of(to);
        self.service_secs[from_stop] + self.matrix.time_secs(from_stop, to_stop)
    }

    /// Capacity-dimension increment at a position: the underlying stop's
    /// signed demand.
    pub fn demand(&self, position: usize) -> i64 {
        self.capacity.demands[self.index.stop_of(position)]
    }

    /// The capacity dimension.
    pub fn capacity(&self) -> &CapacityDimension {
        &self.capacity
    }

    /// The time dimension.
    pub fn time(&self) -> &TimeDimension {
        &self.time
    }

    /// Time bounds at a position, if the underlying stop has a window.
    pub fn time_bounds(&self, position: usize) -> Option<(i64, i64)> {
        self.time.bounds[position]
    }

    /// Pickup/delivery pairs as `(pickup, delivery)` node positions. Each
    /// pair must be served by one vehicle with the pickup's cumulative time
    /// no later than the delivery's.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    /// Disjunctions over optional stops.
    pub fn disjunctions(&self) -> &[Disjunction] {
        &self.disjunctions
    }
}
