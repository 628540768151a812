//! The PDP validator.

use std::fmt;

use crate::models::Problem;

/// One violation found by [`validate_pdp`]. Every variant names the order it
/// was found in so a caller can report all problems at once.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Pickup and delivery reference the same stop.
    SameEndpoints {
        /// Index of the order in the problem's order list.
        order: usize,
        /// The shared stop index.
        stop: usize,
    },
    /// An endpoint is a configured vehicle start or end.
    EndpointIsDepot {
        /// Index of the order.
        order: usize,
        /// The offending stop index.
        stop: usize,
        /// `true` if the endpoint is the pickup, `false` for the delivery.
        is_pickup: bool,
    },
    /// An endpoint index falls outside the dense stop range.
    EndpointOutOfRange {
        /// Index of the order.
        order: usize,
        /// The offending stop index.
        stop: usize,
        /// `true` if the endpoint is the pickup.
        is_pickup: bool,
    },
    /// An endpoint stop carries no time window.
    MissingTimeWindow {
        /// Index of the order.
        order: usize,
        /// The offending stop index.
        stop: usize,
        /// `true` if the endpoint is the pickup.
        is_pickup: bool,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn role(is_pickup: bool) -> &'static str {
            if is_pickup {
                "pickup"
            } else {
                "delivery"
            }
        }
        match self {
            ValidationError::SameEndpoints { order, stop } => {
                write!(f, "order {order}: pickup and delivery are the same stop ({stop})")
            }
            ValidationError::EndpointIsDepot {
                order,
                stop,
                is_pickup,
            } => write!(f, "order {order}: {} {stop} is a depot", role(*is_pickup)),
            ValidationError::EndpointOutOfRange {
                order,
                stop,
                is_pickup,
            } => write!(f, "order {order}: {} {stop} out of range", role(*is_pickup)),
            ValidationError::MissingTimeWindow {
                order,
                stop,
                is_pickup,
            } => write!(
                f,
                "order {order}: {} {stop} has no time window",
                role(*is_pickup)
            ),
        }
    }
}

/// Validates the pickup/delivery configuration of a problem.
///
/// Pure: inspects the problem without mutating it, and accumulates every
/// violation found rather than stopping at the first. A problem without any
/// orders is valid.
///
/// Returns `(ok, errors)` where `ok` is `true` exactly when `errors` is empty.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::{Fleet, Order, Problem, Stop, TimeWindow};
/// use pdp_routing::validate::validate_pdp;
///
/// let tw = TimeWindow::new(0, 86_400).unwrap();
/// let stops = vec![
///     Stop::new(0, 0, 0.0, 0.0),
///     Stop::new(1, 10, 0.1, 0.1).with_time_window(tw),
///     Stop::new(2, -10, 0.2, 0.2).with_time_window(tw),
/// ];
/// let mut fleet = Fleet::homogeneous(1, 20, 0);
/// fleet.set_depot(0);
/// let problem = Problem::new(stops, vec![Order::new(1, 2, 10)], fleet);
///
/// let (ok, errors) = validate_pdp(&problem);
/// assert!(ok);
/// assert!(errors.is_empty());
/// ```
pub fn validate_pdp(problem: &Problem) -> (bool, Vec<ValidationError>) {
    let mut errors = Vec::new();
    let n = problem.num_stops();
    let depots = problem.fleet().depot_indices();

    for (i, order) in problem.orders().iter().enumerate() {
        let endpoints = [(order.pickup(), true), (order.delivery(), false)];

        if order.pickup() == order.delivery() {
            errors.push(ValidationError::SameEndpoints {
                order: i,
                stop: order.pickup(),
            });
        }

        for (stop, is_pickup) in endpoints {
            if depots.contains(&stop) {
                errors.push(ValidationError::EndpointIsDepot {
                    order: i,
                    stop,
                    is_pickup,
                });
            }
            if stop >= n {
                errors.push(ValidationError::EndpointOutOfRange {
                    order: i,
                    stop,
                    is_pickup,
                });
                continue;
            }
            if problem.stops()[stop].time_window().is_none() {
                errors.push(ValidationError::MissingTimeWindow {
                    order: i,
                    stop,
                    is_pickup,
                });
            }
        }
    }

    (errors.is_empty(), errors)
}

/// Like [`validate_pdp`], packaged as a `Result` for callers that treat any
/// violation as a terminal data error.
pub fn ensure_valid(problem: &Problem) -> Result<(), crate::error::DataError> {
    let (ok, errors) = validate_pdp(problem);
    if ok {
        Ok(())
    } else {
        Err(crate::error::DataError::Validation(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Fleet, Order, Stop, TimeWindow};

    fn problem_with(orders: Vec<Order>) -> Problem {
        let tw = TimeWindow::new(0, 86_400).expect("valid");
        let stops = vec![
            Stop::new(0, 0, 0.0, 0.0),
            Stop::new(1, 10, 0.1, 0.1).with_time_window(tw),
            Stop::new(2, -10, 0.2, 0.2).with_time_window(tw),
            Stop::new(3, 0, 0.3, 0.3),
        ];
        let mut fleet = Fleet::homogeneous(2, 20, 0);
        fleet.set_depot(0);
        Problem::new(stops, orders, fleet)
    }

    #[test]
    fn test_valid_configuration() {
        let (ok, errors) = validate_pdp(&problem_with(vec![Order::new(1, 2, 10)]));
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_no_orders_is_valid() {
        let (ok, errors) = validate_pdp(&problem_with(vec![]));
        assert!(ok);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_same_endpoints_named() {
        let (ok, errors) = validate_pdp(&problem_with(vec![Order::new(1, 1, 10)]));
        assert!(!ok);
        assert!(errors.contains(&ValidationError::SameEndpoints { order: 0, stop: 1 }));
    }

    #[test]
    fn test_depot_endpoint() {
        let (ok, errors) = validate_pdp(&problem_with(vec![Order::new(0, 2, 10)]));
        assert!(!ok);
        assert!(errors.contains(&ValidationError::EndpointIsDepot {
            order: 0,
            stop: 0,
            is_pickup: true,
        }));
    }

    #[test]
    fn test_out_of_range() {
        let (ok, errors) = validate_pdp(&problem_with(vec![Order::new(1, 99, 10)]));
        assert!(!ok);
        assert!(errors.contains(&ValidationError::EndpointOutOfRange {
            order: 0,
            stop: 99,
            is_pickup: false,
        }));
    }

    #[test]
    fn test_missing_time_window() {
        // Stop 3 has no window.
        let (ok, errors) = validate_pdp(&problem_with(vec![Order::new(1, 3, 10)]));
        assert!(!ok);
        assert!(errors.contains(&ValidationError::MissingTimeWindow {
            order: 0,
            stop: 3,
            is_pickup: false,
        }));
    }

    #[test]
    fn test_accumulates_all_errors() {
        let orders = vec![Order::new(1, 1, 10), Order::new(0, 99, 5)];
        let (ok, errors) = validate_pdp(&problem_with(orders));
        assert!(!ok);
        assert!(errors.len() >= 3);
    }

    #[test]
    fn test_ensure_valid() {
        use crate::error::DataError;

        assert!(ensure_valid(&problem_with(vec![Order::new(1, 2, 10)])).is_ok());
        let err = ensure_valid(&problem_with(vec![Order::new(1, 1, 10)])).unwrap_err();
        assert!(matches!(err, DataError::Validation(ref v) if !v.is_empty()));
    }

    #[test]
    fn test_error_display_names_order() {
        let e = ValidationError::SameEndpoints { order: 4, stop: 7 };
        assert!(e.to_string().contains("order 4"));
    }
}
