//! Test data generation for trip-journal.
//!
//! This crate produces realistic synthetic trips — GPS tracks with
//! noise-based terrain, travel-profile timing, photos, and diary entries —
//! to support the pipeline's tests and the offline demo binary.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let trip = TripGenerator::new().generate(1, start_ms, &mut rng);
//! let samples = TrackGenerator::for_region(Region::ALPS, 42)
//!     .with_distance(8_000.0)
//!     .generate(trip.id, trip.started_at_ms, &HikerProfile::default(), &mut rng);
//! ```

pub mod config;
pub mod generators;
pub mod profiles;
pub mod terrain;
pub mod weather_stub;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{BoundingBox, Region};
    pub use crate::generators::{MediaGenerator, TrackConfig, TrackGenerator, TripGenerator};
    pub use crate::profiles::{
        CyclistProfile, HikerProfile, RoadTripProfile, TravelProfile, sample_variance,
        speed_at_grade,
    };
    pub use crate::terrain::ElevationGenerator;
    pub use crate::weather_stub::StubWeather;
}
