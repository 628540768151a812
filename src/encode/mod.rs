//! Routing model encoding.
//!
//! Turns the entity model into the abstract constraint model a route solver
//! consumes: an arc-cost evaluator over a remapped position space, a capacity
//! dimension, a time dimension with per-stop window bounds, pickup/delivery
//! pairing constraints, and disjunctions marking droppable stops.

mod encoder;
mod index;
mod model;

pub use encoder::{EncoderConfig, ModelEncoder, DEFAULT_DROP_PENALTY};
pub use index::IndexManager;
pub use model::{CapacityDimension, Disjunction, EncodedModel, TimeDimension};
