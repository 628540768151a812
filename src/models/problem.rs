//! The routing problem instance (entity model).

use std::sync::OnceLock;

use tracing::warn;

use crate::distance::{MatrixSource, TravelMatrix};
use crate::error::DataError;

use super::{Fleet, IdMap, Order, Stop, TimeWindow};

/// Default planning horizon in seconds (24 hours).
pub const DEFAULT_HORIZON: i64 = 24 * 3600;

/// Safety buffer added when recomputing the horizon from stop windows.
pub const HORIZON_BUFFER: i64 = 3600;

/// Default service time per unit of demand, in seconds.
pub const DEFAULT_SERVICE_TIME_PER_DEMAND: i64 = 60;

/// Role of a row in a pickup/delivery pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRole {
    /// The row is the pickup endpoint of its pair.
    Pickup,
    /// The row is the delivery endpoint of its pair.
    Delivery,
}

/// One row of tabular input, as read from a stops file.
///
/// Rows carrying a `pair` tag are grouped by the shared tag into
/// [`Order`]s; the pickup row's absolute demand becomes the order quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct StopRow {
    /// Caller-supplied stop identifier.
    pub id: String,
    /// Signed demand.
    pub demand: i64,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Optional `(open, close)` service window in seconds.
    pub time_window: Option<(i64, i64)>,
    /// Optional pair tag and role for pickup/delivery rows.
    pub pair: Option<(String, PairRole)>,
}

/// A complete PDPTW problem instance: stops, orders, fleet, horizon, and the
/// external-id mapping, plus a lazily computed distance/time matrix.
///
/// The matrix cache is written exactly once and read-only afterwards;
/// concurrent readers are safe.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::{Fleet, Order, Problem, Stop, TimeWindow};
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
/// assert_eq!(problem.num_stops(), 3);
/// assert!(problem.is_depot(0));
/// ```
#[derive(Debug, Clone)]
pub struct Problem {
    stops: Vec<Stop>,
    orders: Vec<Order>,
    fleet: Fleet,
    horizon: i64,
    service_time_per_demand: i64,
    ids: IdMap,
    matrix: OnceLock<TravelMatrix>,
}

impl Problem {
    /// Creates a problem instance; the horizon is recomputed from the stop
    /// windows so that no window is unsatisfiable by construction.
    pub fn new(stops: Vec<Stop>, orders: Vec<Order>, fleet: Fleet) -> Self {
        let horizon = recompute_horizon(&stops);
        Self {
            stops,
            orders,
            fleet,
            horizon,
            service_time_per_demand: DEFAULT_SERVICE_TIME_PER_DEMAND,
            ids: IdMap::new(),
            matrix: OnceLock::new(),
        }
    }

    /// Sets the service time charged per unit of demand.
    pub fn with_service_time_per_demand(mut self, secs: i64) -> Self {
        self.service_time_per_demand = secs;
        self
    }

    /// Attaches the external-id mapping retained for decoding.
    pub fn with_ids(mut self, ids: IdMap) -> Self {
        self.ids = ids;
        self
    }

    /// Builds a problem from tabular rows.
    ///
    /// Rows missing a valid time window fall back to the full-horizon window
    /// `[0, DEFAULT_HORIZON]`. The first row not involved in any pair becomes
    /// the depot for every vehicle; its demand and window are cleared.
    ///
    /// # Errors
    ///
    /// [`DataError::UnpairedRow`] if a pair tag lacks its counterpart role,
    /// and [`DataError::MissingDepot`] if every row belongs to a pair.
    pub fn from_rows(rows: Vec<StopRow>, mut fleet: Fleet) -> Result<Self, DataError> {
        let mut stops = Vec::with_capacity(rows.len());
        let mut ids = IdMap::new();
        let mut pickups: Vec<(String, usize)> = Vec::new();
        let mut deliveries: Vec<(String, usize)> = Vec::new();

        for (index, row) in rows.iter().enumerate() {
            let tw = row
                .time_window
                .and_then(|(o, c)| TimeWindow::new(o, c))
                .unwrap_or_else(|| {
                    TimeWindow::new(0, DEFAULT_HORIZON).expect("default window is valid")
                });
            stops.push(Stop::new(index, row.demand, row.lat, row.lon).with_time_window(tw));
            ids.insert(row.id.clone(), index);

            if let Some((tag, role)) = &row.pair {
                match role {
                    PairRole::Pickup => pickups.push((tag.clone(), index)),
                    PairRole::Delivery => deliveries.push((tag.clone(), index)),
                }
            }
        }

        let mut orders = Vec::new();
        for (tag, pickup) in &pickups {
            let delivery = deliveries
                .iter()
                .find(|(t, _)| t == tag)
                .map(|(_, d)| *d)
                .ok_or_else(|| DataError::UnpairedRow { tag: tag.clone() })?;
            let quantity = stops[*pickup].demand().abs();
            orders.push(Order::new(*pickup, delivery, quantity).with_external_id(tag.clone()));
        }
        for (tag, _) in &deliveries {
            if !pickups.iter().any(|(t, _)| t == tag) {
                return Err(DataError::UnpairedRow { tag: tag.clone() });
            }
        }

        let paired: Vec<usize> = orders
            .iter()
            .flat_map(|o| [o.pickup(), o.delivery()])
            .collect();
        let depot = (0..stops.len())
            .find(|i| !paired.contains(i))
            .ok_or(DataError::MissingDepot)?;

        stops[depot] = stops[depot].cleared_for_depot();
        fleet.set_depot(depot);

        Ok(Self::new(stops, orders, fleet).with_ids(ids))
    }

    /// All stops in dense index order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// The stop at the given index, if in range.
    pub fn stop(&self, index: usize) -> Option<&Stop> {
        self.stops.get(index)
    }

    /// All pickup/delivery orders.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The vehicle fleet.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Number of stops.
    pub fn num_stops(&self) -> usize {
        self.stops.len()
    }

    /// Planning horizon in seconds.
    pub fn horizon(&self) -> i64 {
        self.horizon
    }

    /// Service time charged per unit of demand, in seconds.
    pub fn service_time_per_demand(&self) -> i64 {
        self.service_time_per_demand
    }

    /// External-id mapping retained for decoding.
    pub fn ids(&self) -> &IdMap {
        &self.ids
    }

    /// Returns `true` if the stop is a configured start or end of any vehicle.
    pub fn is_depot(&self, index: usize) -> bool {
        self.fleet
            .vehicles()
            .iter()
            .any(|v| v.start() == index || v.end() == index)
    }

    /// Sum of all stop demands.
    pub fn total_demand(&self) -> i64 {
        self.stops.iter().map(|s| s.demand()).sum()
    }

    /// Service time at a stop: `|demand| * service_time_per_demand`.
    pub fn service_time(&self, stop: usize) -> i64 {
        self.stops
            .get(stop)
            .map(|s| s.demand().abs() * self.service_time_per_demand)
            .unwrap_or(0)
    }

    /// The distance/travel-time matrix, computed on first access from stop
    /// coordinates and the fleet speed, then cached for the lifetime of this
    /// instance.
    pub fn matrix(&self) -> &TravelMatrix {
        self.matrix
            .get_or_init(|| TravelMatrix::from_stops(&self.stops, self.fleet.speed_kmh()))
    }

    /// Fills the matrix cache from an external source before first use.
    ///
    /// On source failure the cache degrades to all-zero matrices rather than
    /// failing the encoding; the failure is logged. A no-op if the cache was
    /// already populated.
    pub fn prime_matrix(&self, source: &dyn MatrixSource) {
        let matrix = match source.fetch(&self.stops) {
            Ok(m) if m.size() == self.stops.len() => m,
            Ok(m) => {
                warn!(
                    expected = self.stops.len(),
                    actual = m.size(),
                    "external matrix has wrong size, falling back to zeros"
                );
                TravelMatrix::zeros(self.stops.len())
            }
            Err(e) => {
                warn!(error = %e, "external matrix source failed, falling back to zeros");
                TravelMatrix::zeros(self.stops.len())
            }
        };
        if self.matrix.set(matrix).is_err() {
            warn!("matrix cache already populated, external matrix ignored");
        }
    }
}

fn recompute_horizon(stops: &[Stop]) -> i64 {
    let max_close = stops
        .iter()
        .filter_map(|s| s.time_window().map(|tw| tw.close()))
        .max()
        .unwrap_or(DEFAULT_HORIZON);
    max_close + HORIZON_BUFFER
}
