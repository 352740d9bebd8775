//! End-to-end demo: generates a synthetic trip, replays it through the live
//! tracking loop with stubbed weather, then aggregates and writes the GPX
//! and report documents under `./out`.

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use test_data::prelude::*;
use trips::export::{export_gpx, export_report};
use trips::ingest::Track;
use trips::models::{LocationSample, now_epoch_ms};
use trips::stats::aggregate;
use trips::tracker::{Fix, LocationSource, SampleSink, TrackerConfig, TripTracker};
use trips::weather::WeatherCache;

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

/// Replays a generated track as if a GPS receiver were producing it.
struct ReplaySource {
    fixes: VecDeque<Fix>,
}

impl ReplaySource {
    fn from_samples(samples: &[LocationSample]) -> Self {
        let fixes = samples
            .iter()
            .map(|s| Fix {
                latitude: s.latitude,
                longitude: s.longitude,
                altitude: s.altitude,
                accuracy: s.accuracy,
                speed: s.speed,
                bearing: s.bearing,
            })
            .collect();
        Self { fixes }
    }
}

#[async_trait]
impl LocationSource for ReplaySource {
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let mut rng = StdRng::seed_from_u64(42);
    let started_at_ms = now_epoch_ms() - 6 * 3_600_000;

    let trip = TripGenerator::new().generate(1, started_at_ms, &mut rng);
    let profile = HikerProfile::default();
    let samples = TrackGenerator::for_region(Region::ALPS, 42)
        .with_distance(8_000.0)
        .generate(trip.id, trip.started_at_ms, &profile, &mut rng);
    info!(trip = %trip.name, samples = samples.len(), "generated trip");

    let media_gen = MediaGenerator::new();
    let photos = media_gen.photos(trip.id, &samples, 8, &mut rng);
    let diary = media_gen.diary_entries(trip.id, &samples, 3, &mut rng);

    // Replay the track through the tracking loop, enriched from the stub
    // provider behind the bounded cache.
    let source = ReplaySource::from_samples(&samples);
    let sink = MemorySink::default();
    let weather = WeatherCache::new(StubWeather::default()).with_capacity(16);
    let stored = TripTracker::new(trip.id, source, sink.clone())
        .with_weather(weather)
        .with_config(TrackerConfig {
            sample_interval: Duration::from_millis(2),
            ..TrackerConfig::default()
        })
        .run()
        .await?;
    let enriched = sink
        .samples
        .lock()
        .unwrap()
        .iter()
        .filter(|s| s.weather_condition.is_some())
        .count();
    info!(stored, enriched, "tracking replay finished");

    let track = Track::from_samples(&trip, samples)?;
    let stats = aggregate(track.samples());
    println!("{}", serde_json::to_string_pretty(&stats)?);

    let out_dir = PathBuf::from("out");
    fs::create_dir_all(&out_dir)?;
    let file_stem = format!("{}_{}", trip.name.replace(' ', "_"), now_epoch_ms());

    let gpx_document = export_gpx(Some(&trip), &track)?;
    let gpx_path = out_dir.join(format!("{file_stem}.gpx"));
    fs::write(&gpx_path, gpx_document)?;

    let report = export_report(Some(&trip), &track, &photos, &diary, now_epoch_ms())?;
    let report_path = out_dir.join(format!("{file_stem}.md"));
    fs::write(&report_path, &report)?;

    info!(
        gpx = %gpx_path.display(),
        report = %report_path.display(),
        "trip exported"
    );

    Ok(())
}
