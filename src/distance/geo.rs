//! Great-circle distance on the Earth's surface.

/// Earth radius used by the haversine formula, in km.
pub const EARTH_RADIUS_KM: f64 = 6367.0;

/// Haversine great-circle distance between two coordinates, in km.
///
/// # Examples
///
/// ```
/// use pdp_routing::distance::haversine_km;
///
/// let d = haversine_km(53.38, -1.47, 53.48, -1.47);
/// assert!(d > 10.0 && d < 12.0); // ~0.1° of latitude
/// assert_eq!(haversine_km(53.38, -1.47, 53.38, -1.47), 0.0);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}
