//! Driving profile.

use super::TravelProfile;

/// A leisurely road trip on secondary roads.
///
/// Around 70 km/h with little sensitivity to grade; the variance mostly
/// models traffic and stops for viewpoints.
#[derive(Debug, Clone)]
pub struct RoadTripProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for RoadTripProfile {
    fn default() -> Self {
        Self {
            base_speed: 19.4, // ~70 km/h
            variance: 0.20,
        }
    }
}

impl RoadTripProfile {
    /// A driver with the given cruising speed in km/h.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh / 3.6,
            ..Default::default()
        }
    }
}

impl TravelProfile for RoadTripProfile {
    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn grade_factor(&self, grade: f64) -> f64 {
        if grade > 0.0 {
            (1.0 - grade * 2.0).max(0.7)
        } else {
            (1.0 - grade * 0.5).min(1.1)
        }
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
