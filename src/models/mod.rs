//! Domain model types for pickup-and-delivery routing.
//!
//! Provides the entity model the encoder and decoder operate on: stops with
//! signed demands and time windows, pickup/delivery orders, a heterogeneous
//! fleet with one shared speed, and the problem instance that owns them
//! together with the external-id mapping and the cached travel matrix.

pub mod generate;

mod ids;
mod order;
mod problem;
mod stop;
mod vehicle;

pub use ids::IdMap;
pub use order::Order;
pub use problem::{
    PairRole, Problem, StopRow, DEFAULT_HORIZON, DEFAULT_SERVICE_TIME_PER_DEMAND, HORIZON_BUFFER,
};
pub use stop::{Stop, TimeWindow};
pub use vehicle::{Fleet, Vehicle, DEFAULT_SPEED_KMH};
