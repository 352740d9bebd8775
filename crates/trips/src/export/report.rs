//! Trip report rendering.
//!
//! The report is a Markdown document; the sections and their order are the
//! contract, the markup is a rendering choice. Only text and metadata are
//! emitted — photo files are referenced by caption, never read.

use std::fmt::Write as _;

use bytes::Bytes;

use crate::errors::TripError;
use crate::format::report_timestamp;
use crate::models::{DiaryEntry, LocationSample, Trip, TripPhoto};
use crate::stats::{aggregate, duration_since_trip_start};

/// How many photo captions are listed before the rest collapse into a
/// "... and N more photos" line.
const PHOTO_PREVIEW_LIMIT: usize = 5;

/// Renders the trip report. Samples must already be in timestamp order;
/// `now_ms` anchors the duration figure, keeping the renderer a pure
/// function of its arguments.
pub fn render_report(
    trip: &Trip,
    samples: &[LocationSample],
    photos: &[TripPhoto],
    diary: &[DiaryEntry],
    now_ms: i64,
) -> Result<Bytes, TripError> {
    let stats = aggregate(samples);
    let mut doc = String::new();

    let _ = writeln!(doc, "# {}\n", trip.name);

    doc.push_str("## Trip Information\n\n");
    let _ = writeln!(doc, "- **Trip Name:** {}", trip.name);
    let _ = writeln!(doc, "- **Description:** {}", trip.description);
    let _ = writeln!(
        doc,
        "- **Start Date:** {}",
        report_timestamp(trip.started_at_ms)?
    );
    let _ = writeln!(
        doc,
        "- **Total Distance:** {:.2} km",
        stats.total_distance.0
    );
    let _ = writeln!(doc, "- **Total Waypoints:** {}", stats.waypoint_count);
    doc.push('\n');

    if !diary.is_empty() {
        doc.push_str("## Travel Diary\n\n");
        for entry in diary {
            let _ = writeln!(
                doc,
                "**{} - {}**\n",
                entry.title,
                report_timestamp(entry.timestamp_ms)?
            );
            let _ = writeln!(doc, "{}\n", entry.body);
        }
    }

    if !photos.is_empty() {
        doc.push_str("## Photos\n\n");
        let _ = writeln!(doc, "Total photos: {}\n", photos.len());
        for photo in photos.iter().take(PHOTO_PREVIEW_LIMIT) {
            let _ = writeln!(
                doc,
                "- {} - {}",
                photo.caption,
                report_timestamp(photo.timestamp_ms)?
            );
        }
        if photos.len() > PHOTO_PREVIEW_LIMIT {
            let _ = writeln!(
                doc,
                "\n... and {} more photos",
                photos.len() - PHOTO_PREVIEW_LIMIT
            );
        }
        doc.push('\n');
    }

    doc.push_str("## Statistics\n\n");
    doc.push_str("| Metric | Value |\n");
    doc.push_str("|--------|-------|\n");
    let hours = duration_since_trip_start(trip, now_ms).whole_hours();
    let _ = writeln!(doc, "| Total Duration | {hours} hours |");
    let _ = writeln!(
        doc,
        "| Highest Altitude | {} m |",
        stats.max_altitude.0 as i64
    );
    let _ = writeln!(
        doc,
        "| Average Speed | {:.2} km/h |",
        stats.average_speed.to_kmh().0
    );

    Ok(Bytes::from(doc))
}
