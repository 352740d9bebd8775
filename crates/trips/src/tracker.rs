//! Background location tracking.
//!
//! `TripTracker` polls a location source on a fixed interval, stamps and
//! optionally weather-enriches the fixes, and hands them to an injected
//! sink. Storage is a capability the caller passes in — the tracker never
//! reaches for a global handle.

use std::time::Duration;

use async_trait::async_trait;
use geo::geometry::Point;
use tracing::{debug, info};

use crate::geodesy;
use crate::models::{LocationSample, now_epoch_ms};
use crate::units::{Kilometers, Meters, MetersPerSecond};
use crate::weather::{WeatherProvider, enrich_sample};

/// One position fix from a location source.
#[derive(Debug, Clone)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: Meters,
    pub accuracy: Meters,
    pub speed: MetersPerSecond,
    pub bearing: f64,
}

/// Produces position fixes until exhausted.
///
/// A GPS-backed implementation never returns `None`; replayed or scripted
/// sources end the tracking loop by running dry.
#[async_trait]
pub trait LocationSource: Send {
    async fn next_fix(&mut self) -> Option<Fix>;
}

/// Receives stored samples. Implementations live with the caller; the
/// pipeline owns no storage.
#[async_trait]
pub trait SampleSink: Send + Sync {
    async fn store(&self, sample: LocationSample) -> anyhow::Result<()>;
}

#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Poll interval between fixes.
    pub sample_interval: Duration,
    /// Fixes that moved less than this from the last stored sample are
    /// dropped.
    pub min_move: Meters,
    /// Every Nth stored sample is enriched with weather, to stay under
    /// provider rate limits.
    pub weather_every: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            sample_interval: Duration::from_secs(5),
            min_move: Meters(10.0),
            weather_every: 20,
        }
    }
}

/// The tracking loop for one active trip.
pub struct TripTracker<S, K> {
    trip_id: i64,
    source: S,
    sink: K,
    weather: Option<Box<dyn WeatherProvider>>,
    config: TrackerConfig,
}

impl<S, K> TripTracker<S, K>
where
    S: LocationSource,
    K: SampleSink,
{
    pub fn new(trip_id: i64, source: S, sink: K) -> Self {
        Self {
            trip_id,
            source,
            sink,
            weather: None,
            config: TrackerConfig::default(),
        }
    }

    pub fn with_weather(mut self, provider: impl WeatherProvider + 'static) -> Self {
        self.weather = Some(Box::new(provider));
        self
    }

    pub fn with_config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    /// Runs until the source is exhausted. Returns the number of samples
    /// stored.
    pub async fn run(mut self) -> anyhow::Result<usize> {
        let mut interval = tokio::time::interval(self.config.sample_interval);
        let mut last_point: Option<Point<f64>> = None;
        let mut stored = 0usize;

        info!(trip_id = self.trip_id, "location tracking started");

        loop {
            interval.tick().await;

            let Some(fix) = self.source.next_fix().await else {
                break;
            };

            let point = Point::new(fix.longitude, fix.latitude);
            if let Some(prev) = last_point {
                let moved = Kilometers(geodesy::haversine_km(prev, point)).to_meters();
                if moved.0 < self.config.min_move.0 {
                    debug!(trip_id = self.trip_id, moved_m = moved.0, "fix dropped");
                    continue;
                }
            }

            let mut sample = LocationSample {
                trip_id: self.trip_id,
                latitude: fix.latitude,
                longitude: fix.longitude,
                altitude: fix.altitude,
                accuracy: fix.accuracy,
                speed: fix.speed,
                bearing: fix.bearing,
                timestamp_ms: now_epoch_ms(),
                temperature_c: None,
                humidity_pct: None,
                weather_condition: None,
            };

            if let Some(weather) = &self.weather
                && stored % self.config.weather_every.max(1) == 0
            {
                sample = enrich_sample(weather.as_ref(), sample).await;
            }

            self.sink.store(sample).await?;
            last_point = Some(point);
            stored += 1;
        }

        info!(trip_id = self.trip_id, stored, "location tracking stopped");
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::{WeatherError, WeatherObservation};
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    struct ScriptedSource {
        fixes: VecDeque<Fix>,
    }

    impl ScriptedSource {
        fn new(fixes: Vec<Fix>) -> Self {
            Self {
                fixes: fixes.into(),
            }
        }
    }

    #[async_trait]
    impl LocationSource for ScriptedSource {
        async fn next_fix(&mut self) -> Option<Fix> {
            self.fixes.pop_front()
        }
    }

    #[derive(Clone, Default)]
    struct MemorySink {
        samples: Arc<Mutex<Vec<LocationSample>>>,
    }

    #[async_trait]
    impl SampleSink for MemorySink {
        async fn store(&self, sample: LocationSample) -> anyhow::Result<()> {
            self.samples.lock().unwrap().push(sample);
            Ok(())
        }
    }

    struct ConstantWeather;

    #[async_trait]
    impl WeatherProvider for ConstantWeather {
        async fn current_weather(
            &self,
            latitude: f64,
            longitude: f64,
        ) -> Result<WeatherObservation, WeatherError> {
            Ok(WeatherObservation {
                latitude,
                longitude,
                temperature_c: 12.0,
                condition: "Clear".into(),
                humidity_pct: 50,
                wind_speed: MetersPerSecond(1.0),
                icon: "01d".into(),
                fetched_at_ms: now_epoch_ms(),
            })
        }
    }

    fn fix(latitude: f64, longitude: f64) -> Fix {
        Fix {
            latitude,
            longitude,
            altitude: Meters(1000.0),
            accuracy: Meters(5.0),
            speed: MetersPerSecond(1.5),
            bearing: 0.0,
        }
    }

    fn fast_config() -> TrackerConfig {
        TrackerConfig {
            sample_interval: Duration::from_millis(1),
            ..TrackerConfig::default()
        }
    }

    #[tokio::test]
    async fn test_stores_all_fixes_until_source_runs_dry() {
        let sink = MemorySink::default();
        // ~111 m of latitude between consecutive fixes.
        let source = ScriptedSource::new(vec![
            fix(46.0, 8.0),
            fix(46.001, 8.0),
            fix(46.002, 8.0),
        ]);

        let stored = TripTracker::new(9, source, sink.clone())
            .with_config(fast_config())
            .run()
            .await
            .unwrap();

        assert_eq!(stored, 3);
        let samples = sink.samples.lock().unwrap();
        assert_eq!(samples.len(), 3);
        assert!(samples.iter().all(|s| s.trip_id == 9));
        assert!(samples.windows(2).all(|w| w[0].timestamp_ms <= w[1].timestamp_ms));
    }

    #[tokio::test]
    async fn test_drops_fixes_below_minimum_movement() {
        let sink = MemorySink::default();
        // The middle fix is ~1 m from the first, well under the 10 m gate.
        let source = ScriptedSource::new(vec![
            fix(46.0, 8.0),
            fix(46.00001, 8.0),
            fix(46.001, 8.0),
        ]);

        let stored = TripTracker::new(9, source, sink.clone())
            .with_config(fast_config())
            .run()
            .await
            .unwrap();

        assert_eq!(stored, 2);
    }

    #[tokio::test]
    async fn test_enriches_every_nth_sample() {
        let sink = MemorySink::default();
        let source = ScriptedSource::new(
            (0..4).map(|i| fix(46.0 + 0.001 * i as f64, 8.0)).collect(),
        );

        let config = TrackerConfig {
            sample_interval: Duration::from_millis(1),
            weather_every: 2,
            ..TrackerConfig::default()
        };
        TripTracker::new(9, source, sink.clone())
            .with_weather(ConstantWeather)
            .with_config(config)
            .run()
            .await
            .unwrap();

        let samples = sink.samples.lock().unwrap();
        assert_eq!(samples.len(), 4);
        assert!(samples[0].weather_condition.is_some());
        assert!(samples[1].weather_condition.is_none());
        assert!(samples[2].weather_condition.is_some());
        assert!(samples[3].weather_condition.is_none());
    }
}
