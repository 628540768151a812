//! Static pickup/delivery consistency checks.
//!
//! Run before encoding to catch configuration problems that would otherwise
//! surface as inexplicable solver infeasibility.

mod pdp;

pub use pdp::{ensure_valid, validate_pdp, ValidationError};
