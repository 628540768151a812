//! The solver's raw assignment.

/// A solver-produced assignment over the encoded model's position space.
///
/// For every position it records the next position in sequence (a position
/// pointing at itself is unused/dropped) plus the cumulative dimension values
/// the solver settled on: a point load value and a `[min, max]` interval for
/// time. Produced once per solve call, then read-only; the decoder consumes
/// it entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    next: Vec<usize>,
    load: Vec<i64>,
    time_min: Vec<i64>,
    time_max: Vec<i64>,
    objective: f64,
}

impl Assignment {
    /// Assembles an assignment from its parts.
    ///
    /// Returns `None` unless all vectors share one length and every next link
    /// stays inside the position space.
    pub fn from_parts(
        next: Vec<usize>,
        load: Vec<i64>,
        time_min: Vec<i64>,
        time_max: Vec<i64>,
        objective: f64,
    ) -> Option<Self> {
        let n = next.len();
        if load.len() != n || time_min.len() != n || time_max.len() != n {
            return None;
        }
        if next.iter().any(|&p| p >= n) {
            return None;
        }
        Some(Self {
            next,
            load,
            time_min,
            time_max,
            objective,
        })
    }

    /// Number of positions covered.
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Returns `true` if the assignment covers no positions.
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// The next position visited after `position`.
    pub fn next(&self, position: usize) -> usize {
        self.next[position]
    }

    /// Returns `true` if the position is not part of any route.
    pub fn is_dropped(&self, position: usize) -> bool {
        self.next[position] == position
    }

    /// Cumulative load value at the position.
    pub fn load(&self, position: usize) -> i64 {
        self.load[position]
    }

    /// Cumulative time bounds `(min, max)` at the position.
    pub fn time_bounds(&self, position: usize) -> (i64, i64) {
        (self.time_min[position], self.time_max[position])
    }

    /// The solver's objective value for this assignment.
    pub fn objective(&self) -> f64 {
        self.objective
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_valid() {
        let a = Assignment::from_parts(vec![1, 0], vec![0, 5], vec![0, 10], vec![0, 20], 7.5)
            .expect("valid");
        assert_eq!(a.len(), 2);
        assert_eq!(a.next(0), 1);
        assert_eq!(a.load(1), 5);
        assert_eq!(a.time_bounds(1), (10, 20));
        assert_eq!(a.objective(), 7.5);
    }

    #[test]
    fn test_from_parts_length_mismatch() {
        assert!(Assignment::from_parts(vec![0, 1], vec![0], vec![0, 0], vec![0, 0], 0.0).is_none());
    }

    #[test]
    fn test_from_parts_link_out_of_range() {
        assert!(Assignment::from_parts(vec![2, 0], vec![0, 0], vec![0, 0], vec![0, 0], 0.0).is_none());
    }

    #[test]
    fn test_dropped() {
        let a = Assignment::from_parts(vec![0, 1], vec![0, 0], vec![0, 0], vec![0, 0], 0.0)
            .expect("valid");
        assert!(a.is_dropped(0));
        assert!(a.is_dropped(1));
    }
}
