//! Great-circle distance on a mean-radius sphere.
//!
//! The haversine sum is the normative distance for trip statistics, with the
//! radius fixed at 6371 km. `geo`'s built-in haversine uses a slightly
//! different mean radius, so the formula is spelled out here.

use geo::geometry::Point;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two points in kilometers.
///
/// Points follow `geo`'s axis convention: x = longitude, y = latitude, both
/// in degrees.
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat1_rad = a.y().to_radians();
    let lat2_rad = b.y().to_radians();
    let delta_lat = (b.y() - a.y()).to_radians();
    let delta_lon = (b.x() - a.x()).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
