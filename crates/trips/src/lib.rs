//! Trip telemetry aggregation and export.
//!
//! This crate turns a trip record and its ordered location track into
//! computed statistics and serialized documents. Data flows one way:
//! ingestion validates the track, the aggregator makes a single pass over it,
//! and the two exporters (GPX, report) render independently of each other.
//! Storage, transport, and UI stay with the caller — every entry point here
//! takes in-memory data and returns in-memory output.
//!
//! ```rust,ignore
//! use trips::prelude::*;
//!
//! let track = Track::from_samples(&trip, samples)?;
//! let stats = stats::aggregate(track.samples());
//! let gpx = export::export_gpx(Some(&trip), &track)?;
//! let report = export::export_report(Some(&trip), &track, &photos, &diary, now_epoch_ms())?;
//! ```

pub mod errors;
pub mod export;
pub mod format;
pub mod geodesy;
pub mod ingest;
pub mod models;
pub mod stats;
pub mod tracker;
pub mod units;
pub mod weather;

pub use errors::TripError;
pub use ingest::Track;
pub use models::{DiaryEntry, LocationSample, Trip, TripPhoto, now_epoch_ms};
pub use stats::{TripStatistics, aggregate};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::errors::TripError;
    pub use crate::export::{self, export_gpx, export_report};
    pub use crate::ingest::Track;
    pub use crate::models::{DiaryEntry, LocationSample, Trip, TripPhoto, now_epoch_ms};
    pub use crate::stats::{
        self, TripStatistics, aggregate, duration_between_samples, duration_since_trip_start,
    };
    pub use crate::units::{Kilometers, KilometersPerHour, Meters, MetersPerSecond};
}
