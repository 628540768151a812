//! Solution decoding.
//!
//! Walks a solver assignment back into consumable routes: ordered per-vehicle
//! stop sequences with cumulative load/time bounds, the dropped-stop list,
//! and fulfilled orders attributed to their vehicle, all translated back to
//! caller-supplied identifiers.

mod decoder;

pub use decoder::{AssignedOrder, DecodedRoute, DroppedStop, RouteStop, SolutionDecoder};
