//! Mapping between stop indices and routing positions.

/// Maps the dense stop array onto the solver's position space.
///
/// Positions `0..num_stops` are node positions, one per stop. Each vehicle
/// additionally owns a start position and an end position after the node
/// block, so a depot shared by several vehicles still gives every vehicle its
/// own route endpoints. Node identity survives the remapping: every position
/// resolves back to a stop index via [`stop_of`](IndexManager::stop_of).
///
/// # Examples
///
/// ```
/// use pdp_routing::encode::IndexManager;
///
/// // 3 stops, 2 vehicles both starting and ending at stop 0
/// let index = IndexManager::new(3, vec![0, 0], vec![0, 0]);
/// assert_eq!(index.num_positions(), 7);
/// assert_eq!(index.start_of(1), 5);
/// assert_eq!(index.stop_of(5), 0);
/// assert!(index.is_start(3));
/// assert!(index.is_end(6));
/// assert_eq!(index.vehicle_of(6), Some(1));
/// assert_eq!(index.vehicle_of(2), None);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IndexManager {
    num_stops: usize,
    starts: Vec<usize>,
    ends: Vec<usize>,
}

impl IndexManager {
    /// Creates a manager for `num_stops` stops and per-vehicle start/end stop
    /// indices (one entry per vehicle in each vector).
    pub fn new(num_stops: usize, starts: Vec<usize>, ends: Vec<usize>) -> Self {
        debug_assert_eq!(starts.len(), ends.len());
        Self {
            num_stops,
            starts,
            ends,
        }
    }

    /// Number of stops in the node block.
    pub fn num_stops(&self) -> usize {
        self.num_stops
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.starts.len()
    }

    /// Total number of routing positions (nodes + per-vehicle endpoints).
    pub fn num_positions(&self) -> usize {
        self.num_stops + 2 * self.starts.len()
    }

    /// Node position of a stop (the identity mapping into the node block).
    pub fn node_position(&self, stop: usize) -> usize {
        stop
    }

    /// Start position of the given vehicle.
    pub fn start_of(&self, vehicle: usize) -> usize {
        self.num_stops + 2 * vehicle
    }

    /// End position of the given vehicle.
    pub fn end_of(&self, vehicle: usize) -> usize {
        self.num_stops + 2 * vehicle + 1
    }

    /// Returns `true` for any vehicle's start position.
    pub fn is_start(&self, position: usize) -> bool {
        position >= self.num_stops && (position - self.num_stops) % 2 == 0
    }

    /// Returns `true` for any vehicle's end position.
    pub fn is_end(&self, position: usize) -> bool {
        position >= self.num_stops && (position - self.num_stops) % 2 == 1
    }

    /// The vehicle owning a start/end position, `None` for node positions.
    pub fn vehicle_of(&self, position: usize) -> Option<usize> {
        if position < self.num_stops {
            None
        } else {
            Some((position - self.num_stops) / 2)
        }
    }

    /// Resolves any position back to its underlying stop index.
    pub fn stop_of(&self, position: usize) -> usize {
        if position < self.num_stops {
            position
        } else {
            let vehicle = (position - self.num_stops) / 2;
            if self.is_start(position) {
                self.starts[vehicle]
            } else {
                self.ends[vehicle]
            }
        }
    }
}
