use geo::geometry::Point;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::units::{Meters, MetersPerSecond};

/// Current time as epoch milliseconds, the timestamp convention used by every
/// record in this crate.
pub fn now_epoch_ms() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// A single recorded journey. Owned by the storage layer; the pipeline only
/// ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Trip start, epoch milliseconds UTC.
    pub started_at_ms: i64,
    /// Set once the trip is completed.
    pub ended_at_ms: Option<i64>,
    pub is_active: bool,
}

impl Trip {
    pub fn new(id: i64, name: String, description: String) -> Self {
        Self {
            id,
            name,
            description,
            started_at_ms: now_epoch_ms(),
            ended_at_ms: None,
            is_active: true,
        }
    }
}

/// One timestamped geolocation reading belonging to a trip.
///
/// Altitude follows the upstream convention: values at or below zero mean
/// "unknown/ground" and are carried as-is rather than dropped. The weather
/// fields are filled in by the enrichment collaborator, never by the
/// pipeline itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationSample {
    pub trip_id: i64,
    /// Degrees, WGS84.
    pub latitude: f64,
    /// Degrees, WGS84.
    pub longitude: f64,
    pub altitude: Meters,
    /// Advisory GPS accuracy radius.
    pub accuracy: Meters,
    pub speed: MetersPerSecond,
    /// Course over ground in degrees.
    pub bearing: f64,
    /// Epoch milliseconds UTC.
    pub timestamp_ms: i64,
    #[serde(default)]
    pub temperature_c: Option<f64>,
    #[serde(default)]
    pub humidity_pct: Option<i32>,
    #[serde(default)]
    pub weather_condition: Option<String>,
}

impl LocationSample {
    /// The sample's position as a `geo` point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Whether the altitude reading carries real information.
    pub fn altitude_known(&self) -> bool {
        self.altitude.0 > 0.0
    }
}

/// A journaled note attached to a trip. Read only by the report exporter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub trip_id: i64,
    pub title: String,
    pub body: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub photo_ref: Option<String>,
    /// Epoch milliseconds UTC.
    pub timestamp_ms: i64,
}

/// A photo taken during a trip. The pipeline only reads its metadata; the
/// image file itself stays with the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripPhoto {
    pub trip_id: i64,
    pub file_path: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default)]
    pub caption: String,
    /// Epoch milliseconds UTC.
    pub timestamp_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trip_is_active() {
        let trip = Trip::new(1, "Alps Trek".into(), "A week on foot".into());
        assert!(trip.is_active);
        assert!(trip.ended_at_ms.is_none());
        assert!(trip.started_at_ms > 0);
    }

    #[test]
    fn test_sample_point_axes() {
        let sample = LocationSample {
            trip_id: 1,
            latitude: 46.0,
            longitude: 8.0,
            altitude: Meters(1000.0),
            accuracy: Meters(5.0),
            speed: MetersPerSecond(1.2),
            bearing: 90.0,
            timestamp_ms: 0,
            temperature_c: None,
            humidity_pct: None,
            weather_condition: None,
        };
        assert_eq!(sample.point().x(), 8.0);
        assert_eq!(sample.point().y(), 46.0);
        assert!(sample.altitude_known());
    }
}
