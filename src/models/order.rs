//! Pickup-and-delivery order pairs.

/// A pickup/delivery pair of stops sharing one quantity.
///
/// Both fields reference [`Stop`](crate::models::Stop) indices in the dense
/// stop array. The quantity is carried by the pickup stop as positive demand
/// and by the delivery stop as negative demand of equal magnitude.
///
/// # Examples
///
/// ```
/// use pdp_routing::models::Order;
///
/// let o = Order::new(1, 2, 10);
/// assert_eq!(o.pickup(), 1);
/// assert_eq!(o.delivery(), 2);
/// assert_eq!(o.quantity(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pickup: usize,
    delivery: usize,
    quantity: i64,
    external_id: Option<String>,
}

impl Order {
    /// Creates an order between two stop indices.
    pub fn new(pickup: usize, delivery: usize, quantity: i64) -> Self {
        Self {
            pickup,
            delivery,
            quantity,
            external_id: None,
        }
    }

    /// Attaches the caller-supplied order identifier.
    pub fn with_external_id(mut self, id: impl Into<String>) -> Self {
        self.external_id = Some(id.into());
        self
    }

    /// Stop index of the pickup.
    pub fn pickup(&self) -> usize {
        self.pickup
    }

    /// Stop index of the delivery.
    pub fn delivery(&self) -> usize {
        self.delivery
    }

    /// Quantity moved from pickup to delivery.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Caller-supplied order identifier, if any.
    pub fn external_id(&self) -> Option<&str> {
        self.external_id.as_deref()
    }

    /// Returns `true` if the given stop index is one of this order's endpoints.
    pub fn involves(&self, stop: usize) -> bool {
        self.pickup == stop || self.delivery == stop
    }
}
