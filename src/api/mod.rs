//! Request/response payloads.
//!
//! Serde DTOs mirroring the transport layer's JSON shapes (camelCase field
//! names, ids accepted as strings or integers), plus the conversion from a
//! request into the entity model and from a decoded solution into the
//! caller-facing summary. The transport itself (HTTP handler, CLI) lives
//! outside this crate.

mod request;
mod response;

pub use request::{NodeDto, NodeType, OptimizeRequest, OrderDto, RequestOptions, VehicleDto};
pub use response::{AssignedOrderDto, SolutionSummary, StopPointDto, VehiclePathDto};
