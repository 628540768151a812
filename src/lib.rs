//! # pdp-routing
//!
//! Pickup-and-delivery routing with time windows (PDPTW) over a heterogeneous
//! fleet: turns geographic stops, paired pickup/delivery orders, and vehicles
//! into an abstract constraint model, and turns a solver's raw assignment back
//! into validated per-vehicle routes.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Stop, Order, Vehicle, Fleet, Problem)
//! - [`distance`] — Haversine distance and travel time matrices
//! - [`validate`] — Static pickup/delivery consistency checks
//! - [`encode`] — Routing model encoder (dimensions, pairings, disjunctions)
//! - [`solve`] — Solver contract, assignment type, and a greedy reference solver
//! - [`decode`] — Solution decoder (routes, dropped stops, assigned orders)
//! - [`api`] — Request/response payloads and conversion into the domain model

pub mod api;
pub mod decode;
pub mod distance;
pub mod encode;
pub mod error;
pub mod models;
pub mod solve;
pub mod validate;
