//! Deterministic weather provider for offline demos and tests.

use async_trait::async_trait;

use trips::models::now_epoch_ms;
use trips::units::MetersPerSecond;
use trips::weather::{WeatherError, WeatherObservation, WeatherProvider};

/// A weather provider that always answers with the same conditions.
///
/// Lets the tracking loop and cache be exercised without network access or
/// an API key.
#[derive(Debug, Clone)]
pub struct StubWeather {
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: i32,
    pub wind_speed_mps: f64,
}

impl Default for StubWeather {
    fn default() -> Self {
        Self {
            temperature_c: 18.0,
            condition: "Clear".into(),
            humidity_pct: 55,
            wind_speed_mps: 2.0,
        }
    }
}

#[async_trait]
impl WeatherProvider for StubWeather {
    async fn current_weather(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<WeatherObservation, WeatherError> {
        Ok(WeatherObservation {
            latitude,
            longitude,
            temperature_c: self.temperature_c,
            condition: self.condition.clone(),
            humidity_pct: self.humidity_pct,
            wind_speed: MetersPerSecond(self.wind_speed_mps),
            icon: "01d".into(),
            fetched_at_ms: now_epoch_ms(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trips::weather::enrich_sample;
    use trips::models::LocationSample;
    use trips::units::Meters;

    #[tokio::test]
    async fn test_stub_enriches_samples() {
        let sample = LocationSample {
            trip_id: 1,
            latitude: 46.0,
            longitude: 8.0,
            altitude: Meters(1500.0),
            accuracy: Meters(5.0),
            speed: MetersPerSecond(1.4),
            bearing: 0.0,
            timestamp_ms: 0,
            temperature_c: None,
            humidity_pct: None,
            weather_condition: None,
        };
        let enriched = enrich_sample(&StubWeather::default(), sample).await;
        assert_eq!(enriched.temperature_c, Some(18.0));
        assert_eq!(enriched.weather_condition.as_deref(), Some("Clear"));
    }
}
