//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Geographic bounding box defined by southwest and northeast corners.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum latitude (south)
    pub min_lat: f64,
    /// Minimum longitude (west)
    pub min_lon: f64,
    /// Maximum latitude (north)
    pub max_lat: f64,
    /// Maximum longitude (east)
    pub max_lon: f64,
}

impl BoundingBox {
    pub const fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        }
    }

    /// Returns a random point within the bounding box.
    pub fn random_point(&self, rng: &mut impl rand::Rng) -> (f64, f64) {
        let lat = rng.gen_range(self.min_lat..self.max_lat);
        let lon = rng.gen_range(self.min_lon..self.max_lon);
        (lat, lon)
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        lat >= self.min_lat && lat <= self.max_lat && lon >= self.min_lon && lon <= self.max_lon
    }
}

/// Pre-defined regions for generated journeys.
#[derive(Debug, Clone, Copy)]
pub struct Region;

impl Region {
    /// Upper Valais / Lepontine Alps - high valleys, big elevation swings.
    pub const ALPS: BoundingBox = BoundingBox::new(45.9, 7.6, 46.5, 8.6);

    /// Southern Tuscany - rolling hills and vineyard roads.
    pub const TUSCANY: BoundingBox = BoundingBox::new(42.9, 11.0, 43.4, 11.8);
}
