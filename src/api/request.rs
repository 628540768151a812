//! Optimization request payloads.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::DataError;
use crate::models::{Fleet, IdMap, Order, Problem, Stop, TimeWindow, Vehicle, DEFAULT_HORIZON};

/// Role of a node in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    /// A customer location.
    #[default]
    Client,
    /// The depot every vehicle starts from and returns to.
    Depot,
    /// A waypoint with no service.
    Intermediate,
}

/// A geographic node. Ids may arrive as strings or integers; both are kept
/// as strings internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDto {
    /// Caller-supplied node identifier.
    #[serde(deserialize_with = "string_or_int")]
    pub id: String,
    /// Display name, unused by the solver.
    #[serde(default)]
    pub name: Option<String>,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lon: f64,
    /// Node role.
    #[serde(rename = "type", default)]
    pub node_type: NodeType,
}

/// A pickup/delivery order between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    /// Caller-supplied order identifier.
    #[serde(deserialize_with = "string_or_int")]
    pub id: String,
    /// Node id of the pickup.
    #[serde(deserialize_with = "string_or_int")]
    pub pickup_node_id: String,
    /// Node id of the delivery.
    #[serde(deserialize_with = "string_or_int")]
    pub delivery_node_id: String,
    /// Quantity moved from pickup to delivery.
    pub quantity: i64,
    /// Earliest pickup service start, seconds.
    pub tw_open: i64,
    /// Latest pickup service start, seconds.
    pub tw_close: i64,
}

/// A vehicle in the request fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    /// Caller-supplied vehicle identifier.
    #[serde(deserialize_with = "string_or_int")]
    pub id: String,
    /// License plate, unused by the solver.
    #[serde(default)]
    pub plate: Option<String>,
    /// Maximum load capacity.
    pub capacity: i64,
    /// Fixed cost charged once if the vehicle is used.
    pub cost: i64,
}

/// Conversion knobs applied when turning a request into a [`Problem`].
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    /// Fleet-wide travel speed in km/h.
    pub speed_kmh: f64,
    /// Offset added to each order's window to form the delivery window,
    /// in seconds. A modeling convention with a configurable default, not a
    /// physical rule.
    pub delivery_offset_secs: i64,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            speed_kmh: crate::models::DEFAULT_SPEED_KMH,
            delivery_offset_secs: 3600,
        }
    }
}

/// A complete optimization request: nodes, orders, and vehicles.
///
/// # Examples
///
/// ```
/// use pdp_routing::api::OptimizeRequest;
///
/// let json = r#"{
///   "nodes": [
///     {"id": 1, "name": "hub", "lat": 53.38, "lon": -1.47, "type": "DEPOT"},
///     {"id": "a", "lat": 53.39, "lon": -1.46},
///     {"id": "b", "lat": 53.40, "lon": -1.45}
///   ],
///   "orders": [
///     {"id": "o1", "pickupNodeId": "a", "deliveryNodeId": "b",
///      "quantity": 10, "twOpen": 0, "twClose": 36000}
///   ],
///   "vehicles": [
///     {"id": "v1", "capacity": 20, "cost": 10}
///   ]
/// }"#;
/// let request: OptimizeRequest = serde_json::from_str(json).unwrap();
/// let problem = request.into_problem(&Default::default()).unwrap();
/// assert_eq!(problem.num_stops(), 3);
/// assert_eq!(problem.orders().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    /// Geographic nodes.
    pub nodes: Vec<NodeDto>,
    /// Pickup/delivery orders.
    pub orders: Vec<OrderDto>,
    /// Vehicle fleet.
    pub vehicles: Vec<VehicleDto>,
}

impl OptimizeRequest {
    /// Converts the request into an entity model.
    ///
    /// The depot is selected by its `DEPOT` type tag; every vehicle starts
    /// and ends there. The depot's demand and window are cleared unless the
    /// depot coincides with an order endpoint, in which case the clearing is
    /// skipped and logged. Pickup stops receive `+quantity` demand with the
    /// order's window; delivery stops receive `-quantity` with the window
    /// shifted by the configured offset.
    ///
    /// # Errors
    ///
    /// [`DataError::MissingDepot`] without a `DEPOT` node, and
    /// [`DataError::UnknownNodeId`] when an order references a node id absent
    /// from `nodes`.
    pub fn into_problem(&self, options: &RequestOptions) -> Result<Problem, DataError> {
        let mut ids = IdMap::new();
        let mut stops: Vec<Stop> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| {
                ids.insert(node.id.clone(), index);
                Stop::new(index, 0, node.lat, node.lon).with_time_window(
                    TimeWindow::new(0, DEFAULT_HORIZON).expect("default window is valid"),
                )
            })
            .collect();

        let depot = self
            .nodes
            .iter()
            .position(|n| n.node_type == NodeType::Depot)
            .ok_or(DataError::MissingDepot)?;

        let mut orders = Vec::with_capacity(self.orders.len());
        for dto in &self.orders {
            let pickup = ids
                .index_of(&dto.pickup_node_id)
                .ok_or_else(|| DataError::UnknownNodeId(dto.pickup_node_id.clone()))?;
            let delivery = ids
                .index_of(&dto.delivery_node_id)
                .ok_or_else(|| DataError::UnknownNodeId(dto.delivery_node_id.clone()))?;

            let window = TimeWindow::new(dto.tw_open, dto.tw_close)
                .unwrap_or_else(|| TimeWindow::new(0, DEFAULT_HORIZON).expect("valid"));
            stops[pickup] = stops[pickup]
                .with_demand(dto.quantity)
                .with_time_window(window);
            stops[delivery] = stops[delivery]
                .with_demand(-dto.quantity)
                .with_time_window(window.shifted(options.delivery_offset_secs));

            orders.push(Order::new(pickup, delivery, dto.quantity).with_external_id(dto.id.clone()));
        }

        if orders.iter().any(|o| o.involves(depot)) {
            // Clearing would erase an order endpoint's demand, so the depot
            // keeps its window and demand.
            warn!(depot, "depot coincides with an order endpoint, not cleared");
        } else {
            stops[depot] = stops[depot].cleared_for_depot();
        }

        let vehicles = self
            .vehicles
            .iter()
            .enumerate()
            .map(|(i, v)| Vehicle::new(i, v.capacity, v.cost, v.id.clone()).with_depot(depot))
            .collect();
        let fleet = Fleet::new(vehicles).with_speed_kmh(options.speed_kmh);

        Ok(Problem::new(stops, orders, fleet).with_ids(ids))
    }
}

/// Accepts `"42"` and `42` alike for id fields.
fn string_or_int<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Int(i) => i.to_string(),
        Raw::Str(s) => s,
    })
}
