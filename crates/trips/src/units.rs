//! Unit-tagged wrappers for the quantities the pipeline moves around.
//!
//! The upstream data mixes meters-per-second sensor readings with
//! kilometers-per-hour display values; tagging the unit in the type makes
//! every conversion an explicit call site.

use serde::{Deserialize, Serialize};

/// A length in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// A length in kilometers.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

/// A speed in meters per second, as reported by GPS hardware.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersPerSecond(pub f64);

/// A speed in kilometers per hour, as shown to people.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilometersPerHour(pub f64);

impl Meters {
    pub fn to_kilometers(self) -> Kilometers {
        Kilometers(self.0 / 1000.0)
    }
}

impl Kilometers {
    pub fn to_meters(self) -> Meters {
        Meters(self.0 * 1000.0)
    }
}

impl MetersPerSecond {
    pub fn to_kmh(self) -> KilometersPerHour {
        KilometersPerHour(self.0 * 3.6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_conversion() {
        let walking = MetersPerSecond(1.5);
        assert!((walking.to_kmh().0 - 5.4).abs() < 1e-12);
    }

    #[test]
    fn test_length_conversion() {
        assert_eq!(Meters(1500.0).to_kilometers(), Kilometers(1.5));
        assert_eq!(Kilometers(1.5).to_meters(), Meters(1500.0));
    }
}
