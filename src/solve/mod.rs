//! The route solver contract.
//!
//! The search engine is an external collaborator: this module defines only
//! what it consumes ([`EncodedModel`](crate::encode::EncodedModel) plus a
//! [`SearchConfig`]) and what it must return (a [`SolveOutcome`]). A greedy
//! cheapest-insertion reference implementation is provided for end-to-end use
//! and testing.

mod assignment;
mod config;
mod greedy;

pub use assignment::Assignment;
pub use config::{FirstSolutionStrategy, SearchConfig};
pub use greedy::GreedyInsertion;

use crate::encode::EncodedModel;
use crate::error::SolveError;

/// Terminal state of a solve call.
///
/// `NoSolution` is an expected outcome, distinct from a malformed-model
/// [`SolveError`], covering both proven infeasibility and an exhausted time
/// budget. It must not trigger an automatic retry.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    /// A feasible assignment satisfying the model's dimensions and pairings.
    Feasible(Assignment),
    /// No feasible assignment was found within the time budget.
    NoSolution,
}

/// A search engine consuming the encoded model.
///
/// Implementations must honor the cumulative-dimension and pairing semantics
/// the encoder registered, and return within the configured wall-clock
/// budget.
pub trait RouteSolver {
    /// Solves the encoded model under the given search configuration.
    ///
    /// # Errors
    ///
    /// [`SolveError`] only for a structurally malformed model; an absence of
    /// feasible routes is reported as `Ok(SolveOutcome::NoSolution)`.
    fn solve(
        &self,
        model: &EncodedModel,
        config: &SearchConfig,
    ) -> Result<SolveOutcome, SolveError>;
}
