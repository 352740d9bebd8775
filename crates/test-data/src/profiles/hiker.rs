//! Hiking profile.

use super::TravelProfile;

/// A recreational hiker.
///
/// Base speed around 5.5 km/h on flat ground, markedly slower uphill and
/// only slightly faster downhill (rough ground limits the gain).
#[derive(Debug, Clone)]
pub struct HikerProfile {
    base_speed: f64,
    variance: f64,
}

impl Default for HikerProfile {
    fn default() -> Self {
        Self {
            base_speed: 1.5, // ~5.5 km/h
            variance: 0.12,
        }
    }
}

impl HikerProfile {
    /// A hiker with the given flat-ground speed in km/h.
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh / 3.6,
            ..Default::default()
        }
    }

    /// A loaded multi-day trekker, slower and less consistent.
    pub fn trekker() -> Self {
        Self {
            base_speed: 1.2,
            variance: 0.15,
        }
    }
}

impl TravelProfile for HikerProfile {
    fn base_speed_mps(&self) -> f64 {
        self.base_speed
    }

    fn grade_factor(&self, grade: f64) -> f64 {
        if grade > 0.0 {
            (1.0 - grade * 12.0).max(0.2)
        } else {
            (1.0 - grade * 5.0).min(1.3)
        }
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
