//! Single-pass statistics over a location track.
//!
//! Each metric is an accumulator fed one sample at a time; [`aggregate`]
//! composes them into one linear pass. Degenerate inputs (empty or
//! single-sample tracks) yield zeroed statistics rather than errors.

use geo::geometry::Point;
use serde::Serialize;
use time::Duration;

use crate::geodesy;
use crate::models::{LocationSample, Trip};
use crate::units::{Kilometers, Meters, MetersPerSecond};

/// An incremental metric over a track.
pub trait TrackMetric {
    type Output;
    fn next_sample(&mut self, sample: &LocationSample);
    fn finish(&self) -> Self::Output;
}

/// Computed statistics for one trip's track.
///
/// Speed stays in meters per second here; consumers that display
/// kilometers per hour convert explicitly. Duration is deliberately absent —
/// it needs an anchor choice, so it lives in [`duration_since_trip_start`]
/// and [`duration_between_samples`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TripStatistics {
    pub total_distance: Kilometers,
    pub average_speed: MetersPerSecond,
    pub max_altitude: Meters,
    pub waypoint_count: usize,
}

/// Aggregates a time-ordered track in one pass.
pub fn aggregate(samples: &[LocationSample]) -> TripStatistics {
    let mut distance = DistanceMetric::default();
    let mut speed = SpeedMetric::default();
    let mut altitude = AltitudeMetric::default();

    for sample in samples {
        distance.next_sample(sample);
        speed.next_sample(sample);
        altitude.next_sample(sample);
    }

    TripStatistics {
        total_distance: distance.finish(),
        average_speed: speed.finish(),
        max_altitude: altitude.finish(),
        waypoint_count: samples.len(),
    }
}

/// Duration from the trip's recorded start to the caller's clock.
///
/// This is the anchor the trip report uses; a completed trip viewed later
/// keeps growing under it, which is why [`duration_between_samples`] exists
/// as the other option.
pub fn duration_since_trip_start(trip: &Trip, now_ms: i64) -> Duration {
    Duration::milliseconds(now_ms - trip.started_at_ms)
}

/// Duration between the first and last sample of a track. Zero for tracks
/// with fewer than two samples.
pub fn duration_between_samples(samples: &[LocationSample]) -> Duration {
    match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => Duration::milliseconds(last.timestamp_ms - first.timestamp_ms),
        _ => Duration::ZERO,
    }
}

/// Pairwise haversine sum over consecutive samples.
#[derive(Debug, Clone, Default)]
struct DistanceMetric {
    total_km: f64,
    last_point: Option<Point<f64>>,
}

impl TrackMetric for DistanceMetric {
    type Output = Kilometers;

    fn next_sample(&mut self, sample: &LocationSample) {
        let point = sample.point();
        if let Some(prev) = self.last_point {
            self.total_km += geodesy::haversine_km(prev, point);
        }
        self.last_point = Some(point);
    }

    fn finish(&self) -> Kilometers {
        Kilometers(self.total_km)
    }
}

/// Arithmetic mean of the reported speed field — not derived from
/// distance over time.
#[derive(Debug, Clone, Default)]
struct SpeedMetric {
    sum_mps: f64,
    count: usize,
}

impl TrackMetric for SpeedMetric {
    type Output = MetersPerSecond;

    fn next_sample(&mut self, sample: &LocationSample) {
        self.sum_mps += sample.speed.0;
        self.count += 1;
    }

    fn finish(&self) -> MetersPerSecond {
        if self.count == 0 {
            MetersPerSecond(0.0)
        } else {
            MetersPerSecond(self.sum_mps / self.count as f64)
        }
    }
}

/// Highest altitude seen; readings at or below zero count as 0, not as
/// missing samples.
#[derive(Debug, Clone, Default)]
struct AltitudeMetric {
    max_m: f64,
}

impl TrackMetric for AltitudeMetric {
    type Output = Meters;

    fn next_sample(&mut self, sample: &LocationSample) {
        if sample.altitude.0 > self.max_m {
            self.max_m = sample.altitude.0;
        }
    }

    fn finish(&self) -> Meters {
        Meters(self.max_m)
    }
}
