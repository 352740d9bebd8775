//! Document exporters.
//!
//! Both renderers are stateless and independent of each other; they consume
//! the trip record and its validated track and return an in-memory document.
//! Writing the result anywhere is the caller's job.

pub mod gpx;
pub mod report;

use bytes::Bytes;

use crate::errors::TripError;
use crate::ingest::Track;
use crate::models::{DiaryEntry, Trip, TripPhoto};

/// Renders the GPX document for a trip, failing with a typed error when the
/// caller holds no trip record.
pub fn export_gpx(trip: Option<&Trip>, track: &Track) -> Result<String, TripError> {
    let trip = trip.ok_or(TripError::MissingTrip)?;
    gpx::render_gpx(trip, track.samples())
}

/// Renders the trip report, failing with a typed error when the caller holds
/// no trip record. `now_ms` anchors the report's duration figure.
pub fn export_report(
    trip: Option<&Trip>,
    track: &Track,
    photos: &[TripPhoto],
    diary: &[DiaryEntry],
    now_ms: i64,
) -> Result<Bytes, TripError> {
    let trip = trip.ok_or(TripError::MissingTrip)?;
    report::render_report(trip, track.samples(), photos, diary, now_ms)
}
