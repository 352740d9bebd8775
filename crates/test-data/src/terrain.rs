//! Perlin noise-based elevation generation.

use noise::{NoiseFn, Perlin};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Generates plausible elevation for any coordinate using layered Perlin
/// noise (fractal Brownian motion), so nearby points get coherent terrain.
#[derive(Debug, Clone)]
pub struct ElevationGenerator {
    perlin: Perlin,
    /// Base elevation in meters (the valley floor).
    base_elevation: f64,
    /// Amplitude of terrain variation around the base.
    height_scale: f64,
    /// Spatial frequency, controls the terrain "wavelength".
    frequency: f64,
    /// Number of noise octaves for fine detail.
    octaves: u32,
}

impl ElevationGenerator {
    /// Alpine terrain: high valleys, large relief.
    pub fn alps(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 1800.0,
            height_scale: 900.0,
            frequency: 0.00008,
            octaves: 5,
        }
    }

    /// Tuscan hills: gentle relief around a low base.
    pub fn tuscany(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 350.0,
            height_scale: 250.0,
            frequency: 0.0001,
            octaves: 4,
        }
    }

    /// Nearly flat coastal terrain.
    pub fn coastal(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
            base_elevation: 50.0,
            height_scale: 40.0,
            frequency: 0.0002,
            octaves: 2,
        }
    }

    pub fn with_base_elevation(mut self, elevation: f64) -> Self {
        self.base_elevation = elevation;
        self
    }

    pub fn with_height_scale(mut self, scale: f64) -> Self {
        self.height_scale = scale;
        self
    }

    /// Elevation at a coordinate, deterministic for a given seed.
    pub fn elevation_at(&self, lat: f64, lon: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.frequency;
        let mut max_amplitude = 0.0;

        for _ in 0..self.octaves {
            total += self.perlin.get([lat * frequency, lon * frequency]) * amplitude;
            max_amplitude += amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }

        self.base_elevation + (total / max_amplitude) * self.height_scale
    }

    /// Elevation with GPS-style measurement noise added. Real receivers are
    /// off by several meters vertically.
    pub fn jittered_elevation_at(
        &self,
        lat: f64,
        lon: f64,
        std_dev: f64,
        rng: &mut impl Rng,
    ) -> f64 {
        let normal = Normal::new(0.0, std_dev).unwrap();
        self.elevation_at(lat, lon) + normal.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_same_coordinate_same_elevation() {
        let terrain = ElevationGenerator::alps(42);
        assert_eq!(terrain.elevation_at(46.2, 8.1), terrain.elevation_at(46.2, 8.1));
    }

    #[test]
    fn test_elevation_stays_within_scale() {
        let terrain = ElevationGenerator::tuscany(42);
        let elevation = terrain.elevation_at(43.1, 11.4);
        assert!(elevation > 350.0 - 250.0);
        assert!(elevation < 350.0 + 250.0);
    }

    #[test]
    fn test_jitter_changes_readings() {
        let terrain = ElevationGenerator::coastal(42);
        let mut rng = StdRng::seed_from_u64(1);
        let a = terrain.jittered_elevation_at(43.1, 11.4, 5.0, &mut rng);
        let b = terrain.jittered_elevation_at(43.1, 11.4, 5.0, &mut rng);
        assert_ne!(a, b);
    }
}
