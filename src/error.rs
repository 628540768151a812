//! Error taxonomy.
//!
//! Three distinct failure families cross the crate's boundaries:
//!
//! - [`DataError`] — recoverable problems in caller-supplied data, returned
//!   as structured results and never panicking.
//! - [`EncodeError`] — programming-contract violations detected while
//!   building the constraint model; these abort encoding.
//! - [`SolveError`] — a malformed model handed to a solver. Note that a
//!   solver finding *no* solution is not an error at all; see
//!   [`crate::solve::SolveOutcome`].

use std::error::Error;
use std::fmt;

use crate::validate::ValidationError;

/// A recoverable problem in caller-supplied data.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// No stop is tagged as a depot.
    MissingDepot,
    /// An external identifier does not resolve to any known stop.
    UnknownNodeId(String),
    /// A pickup/delivery pair tag with a missing counterpart row.
    UnpairedRow {
        /// The shared pair tag.
        tag: String,
    },
    /// Static pickup/delivery validation failed.
    Validation(Vec<ValidationError>),
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::MissingDepot => write!(f, "no depot node in request"),
            DataError::UnknownNodeId(id) => write!(f, "unknown node id: {id}"),
            DataError::UnpairedRow { tag } => {
                write!(f, "pair tag {tag} has no matching counterpart row")
            }
            DataError::Validation(errors) => {
                write!(f, "pdp validation failed ({} problems)", errors.len())
            }
        }
    }
}

impl Error for DataError {}

/// A contract violation while encoding the routing model.
///
/// These are programmer errors, not data errors: encoding is aborted and the
/// caller gets no partially-built model.
#[derive(Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// The travel-time matrix is absent or does not match the stop count.
    TravelTimeUnavailable {
        /// Stops in the entity model.
        expected: usize,
        /// Size of the matrix actually present.
        actual: usize,
    },
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodeError::TravelTimeUnavailable { expected, actual } => write!(
                f,
                "cannot register time dimension: travel matrix is {actual}x{actual}, \
                 model has {expected} stops"
            ),
        }
    }
}

impl Error for EncodeError {}

/// A malformed model handed to a solver.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveError {
    message: String,
}

impl SolveError {
    /// Creates a solve error with the given description.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "solver rejected model: {}", self.message)
    }
}

impl Error for SolveError {}
