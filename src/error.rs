//! Error types for the polyline codec, coordinate parsing, viewport
//! configuration and route fetching.

use thiserror::Error;

/// The encoded polyline could not be decoded.
///
/// `offset` is the byte offset of the offending character, or of the first
/// character of the value that could not be completed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedEncodingError {
    #[error("polyline ends mid-value (value starts at byte {offset})")]
    Truncated { offset: usize },

    #[error("invalid polyline character {byte:#04x} at byte {offset}")]
    InvalidCharacter { offset: usize, byte: u8 },

    #[error("polyline value starting at byte {offset} does not fit in 32 bits")]
    Overflow { offset: usize },
}

impl MalformedEncodingError {
    /// Byte offset in the encoded string where decoding failed.
    pub fn offset(&self) -> usize {
        match *self {
            MalformedEncodingError::Truncated { offset }
            | MalformedEncodingError::InvalidCharacter { offset, .. }
            | MalformedEncodingError::Overflow { offset } => offset,
        }
    }
}

/// A path could not be represented in the polyline format.
///
/// `index` is the position of the offending point in the path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodingError {
    #[error("point {index} has a non-finite coordinate")]
    NonFinite { index: usize },

    #[error("point {index} does not fit the 32-bit fixed-point range")]
    OutOfRange { index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateParseError {
    #[error("expected \"lat,lng\", got {0:?}")]
    MissingComponent(String),

    #[error("invalid number {0:?}")]
    InvalidNumber(String),

    #[error("coordinate out of range: lat {lat}, lng {lng}")]
    OutOfRange { lat: f64, lng: f64 },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ViewportConfigError {
    #[error("zoom step table is empty")]
    Empty,

    #[error("zoom step thresholds must be strictly increasing ({previous} km then {next} km)")]
    ThresholdsNotIncreasing { previous: f64, next: f64 },

    #[error("zoom levels must strictly decrease with distance ({previous} then {next})")]
    ZoomNotDecreasing { previous: u8, next: u8 },
}

/// Failure to obtain a route geometry from a routing service.
#[derive(Error, Debug)]
pub enum RouteError {
    #[error("at least two waypoints are required, got {0}")]
    NotEnoughWaypoints(usize),

    #[error("routing request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("routing response is not valid JSON: {0}")]
    InvalidBody(#[from] serde_json::Error),

    #[error("routing service returned {code}: {message}")]
    Service { code: String, message: String },

    #[error("routing service returned no route")]
    NoRoute,

    #[error("route geometry is malformed: {0}")]
    Malformed(#[from] MalformedEncodingError),
}
