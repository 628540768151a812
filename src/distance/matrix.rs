//! Dense distance and travel-time matrices.

use std::error::Error;
use std::fmt;

use crate::models::Stop;

use super::geo::haversine_km;

/// Paired `n×n` matrices: great-circle distance in km and derived travel time
/// in whole seconds, stored in row-major order.
///
/// Travel time is `distance / (speed/3600)`, rounded down.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::Stop;
/// use pdp_routing::distance::TravelMatrix;
///
/// let stops = vec![
///     Stop::new(0, 0, 53.38, -1.47),
///     Stop::new(1, 0, 53.48, -1.47),
/// ];
/// let m = TravelMatrix::from_stops(&stops, 40.0);
/// assert_eq!(m.size(), 2);
/// assert!(m.distance_km(0, 1) > 10.0);
/// assert_eq!(m.distance_km(0, 0), 0.0);
/// assert!(m.time_secs(0, 1) > 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TravelMatrix {
    distance_km: Vec<f64>,
    time_secs: Vec<i64>,
    size: usize,
}

impl TravelMatrix {
    /// Creates zero-filled matrices of the given size.
    ///
    /// This is the degraded fallback when an external source fails: ordering
    /// is preserved (everything is equidistant) but costs are meaningless.
    pub fn zeros(size: usize) -> Self {
        Self {
            distance_km: vec![0.0; size * size],
            time_secs: vec![0; size * size],
            size,
        }
    }

    /// Computes haversine distances between all stop pairs and derives travel
    /// times from the given fleet speed in km/h.
    pub fn from_stops(stops: &[Stop], speed_kmh: f64) -> Self {
        let n = stops.len();
        let mut m = Self::zeros(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = haversine_km(stops[i].lat(), stops[i].lon(), stops[j].lat(), stops[j].lon());
                let t = (d / (speed_kmh / 3600.0)) as i64;
                m.set(i, j, d, t);
                m.set(j, i, d, t);
            }
        }
        m
    }

    /// Builds matrices from explicit row-major data.
    ///
    /// Returns `None` if either vector's length is not `size * size`.
    pub fn from_data(size: usize, distance_km: Vec<f64>, time_secs: Vec<i64>) -> Option<Self> {
        if distance_km.len() != size * size || time_secs.len() != size * size {
            return None;
        }
        Some(Self {
            distance_km,
            time_secs,
            size,
        })
    }

    fn set(&mut self, from: usize, to: usize, d: f64, t: i64) {
        self.distance_km[from * self.size + to] = d;
        self.time_secs[from * self.size + to] = t;
    }

    /// Distance from `from` to `to` in km.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn distance_km(&self, from: usize, to: usize) -> f64 {
        self.distance_km[from * self.size + to]
    }

    /// Travel time from `from` to `to` in seconds.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn time_secs(&self, from: usize, to: usize) -> i64 {
        self.time_secs[from * self.size + to]
    }

    /// Number of locations covered.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the distance matrix is symmetric within tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.distance_km(i, j) - self.distance_km(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

/// Error returned by an external matrix source.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixSourceError {
    message: String,
}

impl MatrixSourceError {
    /// Creates a source error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MatrixSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix source error: {}", self.message)
    }
}

impl Error for MatrixSourceError {}

/// An external provider of real road distances and travel times, typically a
/// routing service reached over the network.
///
/// Failures are not fatal: [`Problem::prime_matrix`](crate::models::Problem::prime_matrix)
/// degrades to zero-filled matrices and logs the error.
pub trait MatrixSource {
    /// Fetches distance/time matrices covering the given stops, in stop order.
    fn fetch(&self, stops: &[Stop]) -> Result<TravelMatrix, MatrixSourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<Stop> {
        vec![
            Stop::new(0, 0, 53.38, -1.47),
            Stop::new(1, 0, 53.48, -1.47),
            Stop::new(2, 0, 53.38, -1.30),
        ]
    }

    #[test]
    fn test_from_stops_symmetric_zero_diagonal() {
        let m = TravelMatrix::from_stops(&stops(), 40.0);
        assert!(m.is_symmetric(1e-9));
        for i in 0..3 {
            assert_eq!(m.distance_km(i, i), 0.0);
            assert_eq!(m.time_secs(i, i), 0);
        }
    }

    #[test]
    fn test_time_derivation() {
        let m = TravelMatrix::from_stops(&stops(), 40.0);
        let d = m.distance_km(0, 1);
        let expected = (d / (40.0 / 3600.0)) as i64;
        assert_eq!(m.time_secs(0, 1), expected);
    }

    #[test]
    fn test_zeros() {
        let m = TravelMatrix::zeros(4);
        assert_eq!(m.size(), 4);
        assert_eq!(m.distance_km(1, 3), 0.0);
        assert_eq!(m.time_secs(3, 1), 0);
    }

    #[test]
    fn test_from_data_size_mismatch() {
        assert!(TravelMatrix::from_data(2, vec![0.0; 3], vec![0; 4]).is_none());
        assert!(TravelMatrix::from_data(2, vec![0.0; 4], vec![0; 4]).is_some());
    }
}
