//! Vehicle and fleet types.

/// A vehicle with capacity, fixed usage cost, and configured start/end stops.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::Vehicle;
///
/// let v = Vehicle::new(0, 20, 10, "van-1").with_depot(0);
/// assert_eq!(v.capacity(), 20);
/// assert_eq!(v.fixed_cost(), 10);
/// assert_eq!(v.start(), 0);
/// assert_eq!(v.end(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    index: usize,
    capacity: i64,
    fixed_cost: i64,
    external_id: String,
    start: usize,
    end: usize,
}

impl Vehicle {
    /// Creates a vehicle starting and ending at stop 0.
    pub fn new(index: usize, capacity: i64, fixed_cost: i64, external_id: impl Into<String>) -> Self {
        Self {
            index,
            capacity,
            fixed_cost,
            external_id: external_id.into(),
            start: 0,
            end: 0,
        }
    }

    /// Sets start and end to the same depot stop.
    pub fn with_depot(mut self, depot: usize) -> Self {
        self.start = depot;
        self.end = depot;
        self
    }

    /// Sets distinct start and end stops.
    pub fn with_start_end(mut self, start: usize, end: usize) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Position of this vehicle in the fleet array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Maximum load capacity.
    pub fn capacity(&self) -> i64 {
        self.capacity
    }

    /// Fixed cost charged once if the vehicle serves any stop.
    pub fn fixed_cost(&self) -> i64 {
        self.fixed_cost
    }

    /// Caller-supplied vehicle identifier.
    pub fn external_id(&self) -> &str {
        &self.external_id
    }

    /// Stop index where the route starts.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Stop index where the route ends.
    pub fn end(&self) -> usize {
        self.end
    }
}

/// The vehicle fleet, with one shared travel speed.
///
/// Capacity and fixed cost may differ per vehicle; speed may not.
#[derive(Debug, Clone, PartialEq)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    speed_kmh: f64,
}

/// Default fleet speed in km/h.
pub const DEFAULT_SPEED_KMH: f64 = 30.0;

impl Fleet {
    /// Creates a fleet with the default speed.
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles,
            speed_kmh: DEFAULT_SPEED_KMH,
        }
    }

    /// Sets the fleet-wide travel speed in km/h.
    pub fn with_speed_kmh(mut self, speed: f64) -> Self {
        self.speed_kmh = speed;
        self
    }

    /// Builds a homogeneous fleet of `count` identical vehicles.
    pub fn homogeneous(count: usize, capacity: i64, fixed_cost: i64) -> Self {
        let vehicles = (0..count)
            .map(|i| Vehicle::new(i, capacity, fixed_cost, format!("vehicle_{i}")))
            .collect();
        Self::new(vehicles)
    }

    /// The vehicles in fleet order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of vehicles.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns `true` if the fleet has no vehicles.
    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Fleet-wide travel speed in km/h.
    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    /// Sum of all vehicle capacities.
    pub fn total_capacity(&self) -> i64 {
        self.vehicles.iter().map(|v| v.capacity()).sum()
    }

    /// Assigns every vehicle the same start/end depot stop.
    pub fn set_depot(&mut self, depot: usize) {
        for v in &mut self.vehicles {
            v.start = depot;
            v.end = depot;
        }
    }

    /// Stop indices used as a start or end by any vehicle.
    pub fn depot_indices(&self) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .vehicles
            .iter()
            .flat_map(|v| [v.start(), v.end()])
            .collect();
        out.sort_unstable();
        out.dedup();
        out
    }
}
