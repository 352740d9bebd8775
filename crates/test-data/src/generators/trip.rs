//! Trip record generation.

use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::Rng;

use trips::models::Trip;

/// Configuration for trip name generation.
#[derive(Debug, Clone)]
pub struct TripNameConfig {
    pub prefixes: Vec<String>,
    pub region_suffixes: Vec<String>,
}

impl Default for TripNameConfig {
    fn default() -> Self {
        Self {
            prefixes: vec![
                "Alps Trek".into(),
                "Lakeside Wander".into(),
                "Coastal Ride".into(),
                "Vineyard Loop".into(),
                "Summit Attempt".into(),
                "City Escape".into(),
                "Valley Crossing".into(),
            ],
            region_suffixes: vec![
                "in the Dolomites".into(),
                "along the Riviera".into(),
                "through Tuscany".into(),
                "around the Lake".into(),
                "under the Matterhorn".into(),
            ],
        }
    }
}

/// Generates trip records with plausible names and descriptions.
pub struct TripGenerator {
    name_config: TripNameConfig,
}

impl TripGenerator {
    pub fn new() -> Self {
        Self {
            name_config: TripNameConfig::default(),
        }
    }

    pub fn with_names(mut self, name_config: TripNameConfig) -> Self {
        self.name_config = name_config;
        self
    }

    /// Generates a trip started at `started_at_ms`. Roughly a third of the
    /// generated trips come back already completed.
    pub fn generate(&self, id: i64, started_at_ms: i64, rng: &mut impl Rng) -> Trip {
        let prefix = &self.name_config.prefixes[rng.gen_range(0..self.name_config.prefixes.len())];
        let name = if rng.r#gen::<f64>() < 0.3 {
            let suffix = &self.name_config.region_suffixes
                [rng.gen_range(0..self.name_config.region_suffixes.len())];
            format!("{prefix} {suffix}")
        } else {
            prefix.clone()
        };

        let description: String = Sentence(6..14).fake_with_rng(rng);

        let completed = rng.r#gen::<f64>() < 0.35;
        let ended_at_ms = completed
            .then(|| started_at_ms + rng.gen_range(2..72) * 3_600_000);

        Trip {
            id,
            name,
            description,
            started_at_ms,
            ended_at_ms,
            is_active: !completed,
        }
    }
}

impl Default for TripGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_trip_is_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        let trip_gen = TripGenerator::new();

        for id in 1..50 {
            let trip = trip_gen.generate(id, 1_000_000, &mut rng);
            assert_eq!(trip.id, id);
            assert!(!trip.name.is_empty());
            assert!(!trip.description.is_empty());
            assert_eq!(trip.started_at_ms, 1_000_000);
            if let Some(ended) = trip.ended_at_ms {
                assert!(ended > trip.started_at_ms);
                assert!(!trip.is_active);
            }
        }
    }
}
