//! Search configuration.

use std::time::Duration;

/// Strategy used to build the first solution before any improvement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstSolutionStrategy {
    /// Greedily extend routes along the cheapest outgoing arc.
    PathCheapestArc,
    /// Insert stops at their globally cheapest feasible position.
    ParallelCheapestInsertion,
    /// Clarke-Wright style savings.
    Savings,
}

/// Configuration handed to a [`RouteSolver`](crate::solve::RouteSolver).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use pdp_routing::solve::{FirstSolutionStrategy, SearchConfig};
///
/// let config = SearchConfig::default();
/// assert_eq!(config.first_solution_strategy, FirstSolutionStrategy::PathCheapestArc);
/// assert_eq!(config.time_limit, Duration::from_secs(10));
/// assert!(config.full_propagation);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// First-solution construction strategy.
    pub first_solution_strategy: FirstSolutionStrategy,
    /// Hard wall-clock budget for the whole solve call. Exceeding it yields
    /// the no-solution outcome; the call is never retried automatically.
    pub time_limit: Duration,
    /// Whether the solver should run full constraint propagation.
    pub full_propagation: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            first_solution_strategy: FirstSolutionStrategy::PathCheapestArc,
            time_limit: Duration::from_secs(10),
            full_propagation: true,
        }
    }
}
