//! Track ingestion: the one validating stage of the pipeline.
//!
//! Downstream stages assume a time-ordered track for a single trip and do not
//! re-check it, so everything a caller could get wrong is rejected here.

use crate::errors::TripError;
use crate::models::{LocationSample, Trip};

/// A validated, time-ordered location track for one trip.
#[derive(Debug, Clone, Default)]
pub struct Track {
    samples: Vec<LocationSample>,
}

impl Track {
    /// Validates the samples against the trip, rejecting out-of-order input.
    ///
    /// Timestamps must be non-decreasing; callers holding unsorted data can
    /// use [`Track::from_unordered`] instead.
    pub fn from_samples(trip: &Trip, samples: Vec<LocationSample>) -> Result<Self, TripError> {
        if trip.id <= 0 {
            return Err(TripError::InvalidTripId(trip.id));
        }

        for (index, sample) in samples.iter().enumerate() {
            if sample.trip_id != trip.id {
                return Err(TripError::ForeignSample {
                    index,
                    expected: trip.id,
                    found: sample.trip_id,
                });
            }

            let lat_ok = sample.latitude.is_finite() && sample.latitude.abs() <= 90.0;
            let lon_ok = sample.longitude.is_finite() && sample.longitude.abs() <= 180.0;
            if !lat_ok || !lon_ok {
                return Err(TripError::InvalidCoordinate {
                    index,
                    latitude: sample.latitude,
                    longitude: sample.longitude,
                });
            }

            if index > 0 && sample.timestamp_ms < samples[index - 1].timestamp_ms {
                return Err(TripError::OutOfOrder { index });
            }
        }

        Ok(Self { samples })
    }

    /// Sorts the samples by timestamp, then validates.
    pub fn from_unordered(trip: &Trip, mut samples: Vec<LocationSample>) -> Result<Self, TripError> {
        samples.sort_by_key(|s| s.timestamp_ms);
        Self::from_samples(trip, samples)
    }

    pub fn samples(&self) -> &[LocationSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consumes the track, returning the ordered samples.
    pub fn into_samples(self) -> Vec<LocationSample> {
        self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{Meters, MetersPerSecond};

    fn trip() -> Trip {
        Trip {
            id: 7,
            name: "Alps Trek".into(),
            description: String::new(),
            started_at_ms: 1_000,
            ended_at_ms: None,
            is_active: true,
        }
    }

    fn sample(trip_id: i64, lat: f64, lon: f64, timestamp_ms: i64) -> LocationSample {
        LocationSample {
            trip_id,
            latitude: lat,
            longitude: lon,
            altitude: Meters(0.0),
            accuracy: Meters(5.0),
            speed: MetersPerSecond(1.0),
            bearing: 0.0,
            timestamp_ms,
            temperature_c: None,
            humidity_pct: None,
            weather_condition: None,
        }
    }

    #[test]
    fn test_accepts_ordered_samples() {
        let track = Track::from_samples(
            &trip(),
            vec![sample(7, 46.0, 8.0, 1_000), sample(7, 46.01, 8.01, 2_000)],
        )
        .unwrap();
        assert_eq!(track.len(), 2);
    }

    #[test]
    fn test_accepts_equal_timestamps() {
        let track = Track::from_samples(
            &trip(),
            vec![sample(7, 46.0, 8.0, 1_000), sample(7, 46.01, 8.01, 1_000)],
        );
        assert!(track.is_ok());
    }

    #[test]
    fn test_rejects_out_of_order() {
        let err = Track::from_samples(
            &trip(),
            vec![sample(7, 46.0, 8.0, 2_000), sample(7, 46.01, 8.01, 1_000)],
        )
        .unwrap_err();
        assert!(matches!(err, TripError::OutOfOrder { index: 1 }));
    }

    #[test]
    fn test_from_unordered_sorts_first() {
        let track = Track::from_unordered(
            &trip(),
            vec![sample(7, 46.01, 8.01, 2_000), sample(7, 46.0, 8.0, 1_000)],
        )
        .unwrap();
        assert_eq!(track.samples()[0].timestamp_ms, 1_000);
        assert_eq!(track.samples()[1].timestamp_ms, 2_000);
    }

    #[test]
    fn test_rejects_foreign_sample() {
        let err =
            Track::from_samples(&trip(), vec![sample(8, 46.0, 8.0, 1_000)]).unwrap_err();
        assert!(matches!(
            err,
            TripError::ForeignSample {
                index: 0,
                expected: 7,
                found: 8
            }
        ));
    }

    #[test]
    fn test_rejects_bad_coordinates() {
        let err =
            Track::from_samples(&trip(), vec![sample(7, 91.0, 8.0, 1_000)]).unwrap_err();
        assert!(matches!(err, TripError::InvalidCoordinate { index: 0, .. }));

        let err =
            Track::from_samples(&trip(), vec![sample(7, 46.0, f64::NAN, 1_000)]).unwrap_err();
        assert!(matches!(err, TripError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_rejects_non_positive_trip_id() {
        let mut bad = trip();
        bad.id = -1;
        let err = Track::from_samples(&bad, Vec::new()).unwrap_err();
        assert!(matches!(err, TripError::InvalidTripId(-1)));
    }

    #[test]
    fn test_empty_track_is_valid() {
        let track = Track::from_samples(&trip(), Vec::new()).unwrap();
        assert!(track.is_empty());
    }
}
