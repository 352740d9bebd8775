//! Weather enrichment collaborator.
//!
//! Location samples can be enriched with current conditions from the
//! OpenWeatherMap current-weather endpoint. The provider is an explicit
//! collaborator passed to whoever orchestrates the pipeline; nothing here is
//! global. The cache wrapper is bounded on both capacity and age — stale
//! entries are never served and get swept on insert.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::models::{LocationSample, now_epoch_ms};
use crate::units::MetersPerSecond;

const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default number of cached observations.
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

/// Default observation lifetime: 10 minutes.
pub const DEFAULT_CACHE_TTL_MS: i64 = 600_000;

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("weather request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather provider unavailable: {0}")]
    Unavailable(String),
}

/// Current conditions at a coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub latitude: f64,
    pub longitude: f64,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: i32,
    pub wind_speed: MetersPerSecond,
    pub icon: String,
    /// When the observation was fetched, epoch milliseconds.
    pub fetched_at_ms: i64,
}

/// Source of current weather conditions.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, WeatherError>;
}

/// OpenWeatherMap client, metric units.
pub struct OpenWeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: OPENWEATHER_BASE_URL.to_string(),
            api_key: api_key.into(),
        }
    }

    /// Overrides the API endpoint, for tests and self-hosted proxies.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, WeatherError> {
        let response: CurrentWeatherResponse = self
            .http
            .get(format!("{}/weather", self.base_url))
            .query(&[("lat", latitude), ("lon", longitude)])
            .query(&[("appid", self.api_key.as_str()), ("units", "metric")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_observation(latitude, longitude))
    }
}

#[derive(Debug, Deserialize)]
struct CurrentWeatherResponse {
    main: MainConditions,
    #[serde(default)]
    weather: Vec<ConditionTag>,
    wind: Wind,
}

#[derive(Debug, Deserialize)]
struct MainConditions {
    temp: f64,
    humidity: i32,
}

#[derive(Debug, Deserialize)]
struct ConditionTag {
    main: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct Wind {
    speed: f64,
}

impl CurrentWeatherResponse {
    fn into_observation(self, latitude: f64, longitude: f64) -> WeatherObservation {
        let tag = self.weather.into_iter().next();
        let (condition, icon) = match tag {
            Some(tag) => (tag.main, tag.icon),
            None => ("Unknown".to_string(), "01d".to_string()),
        };
        WeatherObservation {
            latitude,
            longitude,
            temperature_c: self.main.temp,
            condition,
            humidity_pct: self.main.humidity,
            wind_speed: MetersPerSecond(self.wind.speed),
            icon,
            fetched_at_ms: now_epoch_ms(),
        }
    }
}

/// Bounded, expiring cache in front of any [`WeatherProvider`].
///
/// Keyed by exact coordinates. When full, the least-recently-used entry is
/// evicted; entries past their TTL are swept on insert and never served.
pub struct WeatherCache<P> {
    provider: P,
    capacity: usize,
    ttl_ms: i64,
    entries: Mutex<HashMap<(u64, u64), CacheEntry>>,
    ticks: AtomicU64,
}

struct CacheEntry {
    observation: WeatherObservation,
    last_used: u64,
}

impl<P> WeatherCache<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            capacity: DEFAULT_CACHE_CAPACITY,
            ttl_ms: DEFAULT_CACHE_TTL_MS,
            entries: Mutex::new(HashMap::new()),
            ticks: AtomicU64::new(0),
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn with_ttl_ms(mut self, ttl_ms: i64) -> Self {
        self.ttl_ms = ttl_ms;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lookup(&self, key: (u64, u64), now_ms: i64) -> Option<WeatherObservation> {
        let mut entries = self.entries.lock().unwrap();
        let entry = entries.get_mut(&key)?;
        if now_ms - entry.observation.fetched_at_ms >= self.ttl_ms {
            return None;
        }
        entry.last_used = self.ticks.fetch_add(1, Ordering::Relaxed);
        Some(entry.observation.clone())
    }

    fn insert(&self, key: (u64, u64), observation: WeatherObservation, now_ms: i64) {
        let mut entries = self.entries.lock().unwrap();
        entries.retain(|_, entry| now_ms - entry.observation.fetched_at_ms < self.ttl_ms);

        entries.insert(
            key,
            CacheEntry {
                observation,
                last_used: self.ticks.fetch_add(1, Ordering::Relaxed),
            },
        );

        while entries.len() > self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| *key);
            match oldest {
                Some(key) => entries.remove(&key),
                None => break,
            };
        }
    }
}

#[async_trait]
impl<P: WeatherProvider> WeatherProvider for WeatherCache<P> {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, WeatherError> {
        let key = (latitude.to_bits(), longitude.to_bits());
        let now_ms = now_epoch_ms();

        if let Some(observation) = self.lookup(key, now_ms) {
            return Ok(observation);
        }

        let observation = self.provider.current_weather(latitude, longitude).await?;
        self.insert(key, observation.clone(), now_ms);
        Ok(observation)
    }
}

/// Copies current conditions into the sample's enrichment fields.
///
/// A failing provider degrades to an unenriched sample rather than losing
/// the position fix.
pub async fn enrich_sample<P>(provider: &P, mut sample: LocationSample) -> LocationSample
where
    P: WeatherProvider + ?Sized,
{
    match provider
        .current_weather(sample.latitude, sample.longitude)
        .await
    {
        Ok(weather) => {
            sample.temperature_c = Some(weather.temperature_c);
            sample.humidity_pct = Some(weather.humidity_pct);
            sample.weather_condition = Some(weather.condition);
            sample
        }
        Err(e) => {
            warn!("weather enrichment failed: {e}");
            sample
        }
    }
}
