//! Cycling profile.

use super::TravelProfile;

/// A touring cyclist.
///
/// Base speed around 23 km/h, heavily penalized by climbs and rewarded by
/// descents.
#[derive(Debug, Clone)]
pub struct CyclistProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for CyclistProfile {
    fn default() -> Self {
        Self {
            base_speed: 6.5, // ~23 km/h
            variance: 0.10,
        }
    }
}

impl CyclistProfile {
    /// A cyclist with the given flat-ground speed in km/h.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh / 3.6,
            ..Default::default()
        }
    }
}

impl TravelProfile for CyclistProfile {
    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn grade_factor(&self, grade: f64) -> f64 {
        if grade > 0.0 {
            (1.0 - grade * 20.0).max(0.15)
        } else {
            (1.0 - grade * 10.0).min(2.0)
        }
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
