//! Distance estimation.
//!
//! Haversine great-circle distances between stops and travel times derived
//! from the fleet speed, with an optional external matrix source that
//! degrades to zeros on failure.

mod geo;
mod matrix;

pub use geo::{haversine_km, EARTH_RADIUS_KM};
pub use matrix::{MatrixSource, MatrixSourceError, TravelMatrix};
