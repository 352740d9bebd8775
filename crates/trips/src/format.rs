//! Shared text formatting for the exporters: XML escaping and the two
//! timestamp shapes the documents use.

use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::errors::TripError;

/// `yyyy-MM-ddTHH:mm:ssZ`, always UTC. Used for GPX metadata and track
/// points.
const UTC_TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// `dd/MM/yyyy HH:mm`, used by the report exporter for dates shown to
/// people. Rendered in UTC so the output is deterministic.
const REPORT_TIMESTAMP: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year] [hour]:[minute]");

fn datetime_utc(epoch_ms: i64) -> Result<OffsetDateTime, TripError> {
    Ok(OffsetDateTime::from_unix_timestamp_nanos(
        epoch_ms as i128 * 1_000_000,
    )?)
}

/// Formats an epoch-millisecond timestamp as ISO-8601 UTC.
pub fn utc_timestamp(epoch_ms: i64) -> Result<String, TripError> {
    Ok(datetime_utc(epoch_ms)?.format(UTC_TIMESTAMP)?)
}

/// Formats an epoch-millisecond timestamp for the report exporter.
pub fn report_timestamp(epoch_ms: i64) -> Result<String, TripError> {
    Ok(datetime_utc(epoch_ms)?.format(REPORT_TIMESTAMP)?)
}

/// Escapes XML special characters.
///
/// The ampersand is replaced first so entities introduced by the later
/// substitutions are not escaped twice.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
