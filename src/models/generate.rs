//! Synthetic instance generation for benchmarks and tests.

use rand::Rng;

use crate::distance::EARTH_RADIUS_KM;

use super::{Order, Stop, TimeWindow, DEFAULT_HORIZON};

/// Parameters for random stop generation.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Geographic center `(lat, lon)` of the generated box.
    pub center: (f64, f64),
    /// Half-width of the box around the center, in km.
    pub box_size_km: f64,
    /// Number of stops to generate.
    pub num_stops: usize,
    /// Demand range `[min, max)`; set `min == max` for zero demands.
    pub demand: (i64, i64),
    /// Window length range in hours `[min, max)`.
    pub window_hours: (i64, i64),
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            center: (53.381393, -1.474611),
            box_size_km: 10.0,
            num_stops: 100,
            demand: (0, 25),
            window_hours: (1, 5),
        }
    }
}

/// Generates random stops scattered around the configured center, each with a
/// random demand and a random time window inside the planning day.
pub fn random_stops<R: Rng>(config: &GenerateConfig, rng: &mut R) -> Vec<Stop> {
    let (clat, clon) = config.center;
    let circ = std::f64::consts::PI * EARTH_RADIUS_KM;
    let dlat = 180.0 * config.box_size_km / circ;
    let dlon = 180.0 * config.box_size_km / (circ * clat.to_radians().cos());

    (0..config.num_stops)
        .map(|index| {
            let lat = clat + rng.random_range(-dlat..dlat);
            let lon = clon + rng.random_range(-dlon..dlon);
            let demand = if config.demand.0 < config.demand.1 {
                rng.random_range(config.demand.0..config.demand.1)
            } else {
                0
            };

            let length = rng.random_range(config.window_hours.0 * 3600..config.window_hours.1 * 3600);
            let open = rng.random_range(0..(DEFAULT_HORIZON - length).max(1));
            let tw = TimeWindow::new(open, open + length).expect("generated window is valid");

            Stop::new(index, demand, lat, lon).with_time_window(tw)
        })
        .collect()
}

/// Injects `num_pairs` random pickup/delivery orders into the stop set.
///
/// Endpoints avoid the given depot indices and are never reused across pairs.
/// Paired stops get their demand overwritten (`+qty` / `-qty`) and wide
/// windows (delivery opening two hours after the pickup) so pairing is
/// satisfiable by construction. Returns the updated stops and the orders;
/// fewer than `num_pairs` orders are returned when the stop set runs out of
/// free endpoints.
pub fn inject_random_orders<R: Rng>(
    stops: Vec<Stop>,
    num_pairs: usize,
    quantity: (i64, i64),
    depots: &[usize],
    rng: &mut R,
) -> (Vec<Stop>, Vec<Order>) {
    let mut stops = stops;
    let mut orders = Vec::new();
    let mut used: Vec<usize> = depots.to_vec();
    let n = stops.len();

    let mut attempts = 0;
    while orders.len() < num_pairs && attempts < 500 {
        attempts += 1;
        let pickup = rng.random_range(0..n);
        let delivery = rng.random_range(0..n);
        if pickup == delivery || used.contains(&pickup) || used.contains(&delivery) {
            continue;
        }

        let qty = rng.random_range(quantity.0..=quantity.1);
        let wide = TimeWindow::new(0, DEFAULT_HORIZON).expect("valid");
        stops[pickup] = stops[pickup].with_demand(qty).with_time_window(wide);
        stops[delivery] = stops[delivery]
            .with_demand(-qty)
            .with_time_window(TimeWindow::new(2 * 3600, DEFAULT_HORIZON).expect("valid"));

        orders.push(Order::new(pickup, delivery, qty));
        used.push(pickup);
        used.push(delivery);
    }

    (stops, orders)
}
