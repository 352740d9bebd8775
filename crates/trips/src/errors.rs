use thiserror::Error;

/// Errors surfaced by track ingestion and the exporters.
///
/// The computational stages themselves are total; everything here is either a
/// caller handing over bad input or a timestamp that cannot be represented.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("missing trip record")]
    MissingTrip,

    #[error("invalid trip id: {0}")]
    InvalidTripId(i64),

    #[error("sample {index} belongs to trip {found}, expected trip {expected}")]
    ForeignSample {
        index: usize,
        expected: i64,
        found: i64,
    },

    #[error("invalid coordinate at sample {index}: lat {latitude}, lon {longitude}")]
    InvalidCoordinate {
        index: usize,
        latitude: f64,
        longitude: f64,
    },

    #[error("samples are not in timestamp order at index {index}")]
    OutOfOrder { index: usize },

    #[error("timestamp out of range: {0}")]
    TimestampRange(#[from] time::error::ComponentRange),

    #[error("timestamp formatting failed: {0}")]
    TimestampFormat(#[from] time::error::Format),
}
