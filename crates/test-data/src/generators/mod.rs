//! Entity generators for test data.
//!
//! - [`TrackGenerator`]: synthetic GPS tracks with terrain-aware timing
//! - [`TripGenerator`]: trip records with plausible names
//! - [`MediaGenerator`]: photos and diary entries placed along a track

pub mod media;
pub mod track;
pub mod trip;

pub use media::MediaGenerator;
pub use track::{TrackConfig, TrackGenerator};
pub use trip::{TripGenerator, TripNameConfig};
