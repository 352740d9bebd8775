//! Procedural location track generation.
//!
//! Tracks are random walks with heading momentum: each step turns a little,
//! advances roughly one spacing unit, and picks up elevation from the
//! terrain generator. A travel profile converts grade into speed, and speed
//! into the time between samples.

use rand::Rng;
use rand_distr::{Distribution, Normal};
use std::f64::consts::{PI, TAU};

use trips::models::LocationSample;
use trips::units::{Meters, MetersPerSecond};

use crate::config::{BoundingBox, Region};
use crate::profiles::{self, TravelProfile};
use crate::terrain::ElevationGenerator;

/// Configuration for procedural track generation.
#[derive(Debug, Clone)]
pub struct TrackConfig {
    /// Target distance in meters.
    pub target_distance_m: f64,
    /// Starting point (lat, lon). If None, random within bounds.
    pub start_point: Option<(f64, f64)>,
    /// Geographic bounds for the track.
    pub bounds: BoundingBox,
    /// Approximate distance between samples in meters.
    pub point_spacing_m: f64,
    /// GPS position jitter standard deviation in meters.
    pub gps_jitter_m: f64,
    /// GPS elevation jitter standard deviation in meters.
    pub elevation_jitter_m: f64,
    /// Probability of a pause at any sample (0.0 - 1.0).
    pub pause_probability: f64,
    /// Pause duration range in seconds.
    pub pause_duration_s: (f64, f64),
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            target_distance_m: 5_000.0,
            start_point: None,
            bounds: Region::ALPS,
            point_spacing_m: 10.0,
            gps_jitter_m: 3.0,
            elevation_jitter_m: 5.0,
            pause_probability: 0.02,
            pause_duration_s: (30.0, 180.0),
        }
    }
}

/// Generates synthetic GPS tracks with realistic characteristics.
pub struct TrackGenerator {
    config: TrackConfig,
    elevation: ElevationGenerator,
}

impl TrackGenerator {
    /// A generator over the default (alpine) region.
    pub fn new(seed: u32) -> Self {
        Self {
            config: TrackConfig::default(),
            elevation: ElevationGenerator::alps(seed),
        }
    }

    /// A generator for a specific region, with terrain matched to it.
    pub fn for_region(bounds: BoundingBox, seed: u32) -> Self {
        let elevation = if bounds.center().0 > 45.0 {
            ElevationGenerator::alps(seed)
        } else {
            ElevationGenerator::tuscany(seed)
        };

        Self {
            config: TrackConfig {
                bounds,
                ..Default::default()
            },
            elevation,
        }
    }

    pub fn with_distance(mut self, meters: f64) -> Self {
        self.config.target_distance_m = meters;
        self
    }

    pub fn with_start(mut self, lat: f64, lon: f64) -> Self {
        self.config.start_point = Some((lat, lon));
        self
    }

    pub fn with_config(mut self, config: TrackConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_elevation(mut self, elevation: ElevationGenerator) -> Self {
        self.elevation = elevation;
        self
    }

    /// Generates a time-ordered track for one trip, starting at `start_ms`.
    pub fn generate(
        &self,
        trip_id: i64,
        start_ms: i64,
        profile: &dyn TravelProfile,
        rng: &mut impl Rng,
    ) -> Vec<LocationSample> {
        let (mut lat, mut lon) = self
            .config
            .start_point
            .unwrap_or_else(|| self.config.bounds.random_point(rng));

        let position_jitter = Normal::new(0.0, self.config.gps_jitter_m / 111_000.0).unwrap();

        let mut samples = Vec::new();
        let mut heading = rng.gen_range(0.0..TAU);
        let mut traveled = 0.0;
        let mut clock_ms = start_ms;
        let mut prev_elevation = self.elevation.elevation_at(lat, lon);

        let first_speed =
            profiles::speed_at_grade(profile, 0.0, profiles::sample_variance(profile, rng));
        samples.push(self.sample_at(
            trip_id, lat, lon, heading, first_speed, clock_ms, &position_jitter, rng,
        ));

        while traveled < self.config.target_distance_m {
            // Heading momentum: small turns, never a full about-face unless
            // the walk hits the bounding box.
            heading += rng.gen_range(-0.3..0.3);
            let step = self.config.point_spacing_m * rng.gen_range(0.8..1.2);

            let lat_delta = (step * heading.cos()) / 111_000.0;
            let lon_delta = (step * heading.sin()) / (111_000.0 * lat.to_radians().cos());
            let (next_lat, next_lon, next_heading) =
                self.bounce(lat + lat_delta, lon + lon_delta, heading);
            heading = next_heading;

            let elevation = self.elevation.elevation_at(next_lat, next_lon);
            let grade = (elevation - prev_elevation) / step;
            let variance = profiles::sample_variance(profile, rng);
            let speed = profiles::speed_at_grade(profile, grade, variance);

            let mut dwell_s = step / speed;
            if rng.r#gen::<f64>() < self.config.pause_probability {
                dwell_s +=
                    rng.gen_range(self.config.pause_duration_s.0..self.config.pause_duration_s.1);
            }
            clock_ms += (dwell_s * 1000.0) as i64;

            lat = next_lat;
            lon = next_lon;
            prev_elevation = elevation;
            traveled += step;

            samples.push(self.sample_at(
                trip_id, lat, lon, heading, speed, clock_ms, &position_jitter, rng,
            ));
        }

        samples
    }

    #[allow(clippy::too_many_arguments)]
    fn sample_at(
        &self,
        trip_id: i64,
        lat: f64,
        lon: f64,
        heading: f64,
        speed: f64,
        timestamp_ms: i64,
        position_jitter: &Normal<f64>,
        rng: &mut impl Rng,
    ) -> LocationSample {
        let altitude = self.elevation.jittered_elevation_at(
            lat,
            lon,
            self.config.elevation_jitter_m,
            rng,
        );
        LocationSample {
            trip_id,
            latitude: lat + position_jitter.sample(rng),
            longitude: lon + position_jitter.sample(rng),
            altitude: Meters(altitude),
            accuracy: Meters(rng.gen_range(3.0..15.0)),
            speed: MetersPerSecond(speed),
            bearing: heading.to_degrees().rem_euclid(360.0),
            timestamp_ms,
            temperature_c: None,
            humidity_pct: None,
            weather_condition: None,
        }
    }

    /// Keeps the walk inside the bounding box, reflecting the heading off
    /// whichever edge it crossed.
    fn bounce(&self, lat: f64, lon: f64, heading: f64) -> (f64, f64, f64) {
        let b = &self.config.bounds;
        let mut new_heading = heading;

        let lat = if lat < b.min_lat {
            new_heading = PI - heading;
            b.min_lat + (b.min_lat - lat).min(0.001)
        } else if lat > b.max_lat {
            new_heading = PI - heading;
            b.max_lat - (lat - b.max_lat).min(0.001)
        } else {
            lat
        };

        let lon = if lon < b.min_lon {
            new_heading = -heading;
            b.min_lon + (b.min_lon - lon).min(0.001)
        } else if lon > b.max_lon {
            new_heading = -heading;
            b.max_lon - (lon - b.max_lon).min(0.001)
        } else {
            lon
        };

        (lat, lon, new_heading)
    }
}
