//! Encoded Polyline Algorithm Format codec and decoded route paths.
//!
//! Each coordinate is stored as the difference from the previous one, scaled
//! to a fixed-point integer (1e5 by default), ZigZag encoded and split into
//! 5-bit chunks, lowest first. Every chunk but the last carries the 0x20
//! continuation bit and all chunks are offset by 63 into printable ASCII.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PRECISION;
use crate::coordinate::Coordinate;
use crate::error::{EncodingError, MalformedEncodingError};
use crate::haversine::haversine_km;

const CHAR_OFFSET: u8 = 63;
const CONTINUATION_BIT: u32 = 0x20;
const CHUNK_MASK: u32 = 0x1f;
/// A 32-bit ZigZag value needs at most seven 5-bit chunks.
const MAX_CHUNKS: usize = 7;

/// An ordered route geometry as decoded coordinates.
///
/// Order runs from the start of the route to its end. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes a polyline string at the default precision of 5 digits.
    pub fn decode(encoded: &str) -> Result<Self, MalformedEncodingError> {
        decode(encoded)
    }

    /// Encodes the points at the default precision of 5 digits.
    pub fn encode(&self) -> Result<String, EncodingError> {
        encode(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true when the path has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the start of the path, if any.
    pub fn first(&self) -> Option<Coordinate> {
        self.points.first().copied()
    }

    /// Returns the end of the path, if any.
    pub fn last(&self) -> Option<Coordinate> {
        self.points.last().copied()
    }

    /// Appends another path, skipping its first point when it repeats our
    /// last one (consecutive route steps share their joint).
    pub fn extend_joined(&mut self, other: &Polyline) {
        let skip = match (self.last(), other.first()) {
            (Some(end), Some(start)) if end == start => 1,
            _ => 0,
        };
        self.points.extend(other.points.iter().skip(skip).copied());
    }

    /// Total length along the path in kilometers.
    pub fn length_km(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| haversine_km(pair[0], pair[1]))
            .sum()
    }

    /// Picks `count` points spread evenly by distance along the path.
    ///
    /// Each sample is the first vertex whose cumulative distance reaches the
    /// target, so samples are always existing vertices and the first and last
    /// samples are the path endpoints. Returns the whole path when `count < 2`
    /// or the path has zero length.
    pub fn sample_by_distance(&self, count: usize) -> Vec<Coordinate> {
        let mut cumulative = Vec::with_capacity(self.points.len());
        let mut total = 0.0;
        cumulative.push(0.0);
        for pair in self.points.windows(2) {
            total += haversine_km(pair[0], pair[1]);
            cumulative.push(total);
        }

        if count < 2 || total == 0.0 {
            return self.points.clone();
        }

        let last_index = cumulative.len() - 1;
        let mut index = 0;
        (0..count)
            .map(|i| {
                let target = i as f64 * total / (count - 1) as f64;
                while index < last_index && cumulative[index] < target {
                    index += 1;
                }
                self.points[index]
            })
            .collect()
    }
}

impl From<Vec<Coordinate>> for Polyline {
    fn from(points: Vec<Coordinate>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Coordinate> for Polyline {
    fn from_iter<I: IntoIterator<Item = Coordinate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Decodes a polyline string at the default precision of 5 digits.
pub fn decode(encoded: &str) -> Result<Polyline, MalformedEncodingError> {
    decode_with_precision(encoded, DEFAULT_PRECISION)
}

/// Decodes a polyline string whose values are scaled by `10^precision`.
///
/// The whole string must be consumed: a value cut short, or a latitude
/// without its longitude, is reported as [`MalformedEncodingError::Truncated`].
pub fn decode_with_precision(
    encoded: &str,
    precision: u32,
) -> Result<Polyline, MalformedEncodingError> {
    let factor = 10f64.powi(precision as i32);
    let bytes = encoded.as_bytes();
    let mut points = Vec::new();
    let mut offset = 0;
    let mut lat: i64 = 0;
    let mut lng: i64 = 0;

    while offset < bytes.len() {
        let point_start = offset;
        lat += i64::from(read_value(bytes, &mut offset)?);
        if offset >= bytes.len() {
            return Err(MalformedEncodingError::Truncated { offset: point_start });
        }
        lng += i64::from(read_value(bytes, &mut offset)?);

        points.push(Coordinate::new(lat as f64 / factor, lng as f64 / factor));
    }

    Ok(Polyline::new(points))
}

/// Reads one ZigZag value starting at `*offset` and advances past it.
fn read_value(bytes: &[u8], offset: &mut usize) -> Result<i32, MalformedEncodingError> {
    let start = *offset;
    let mut result: u64 = 0;
    let mut shift = 0;

    for chunk_index in 0.. {
        if chunk_index == MAX_CHUNKS {
            return Err(MalformedEncodingError::Overflow { offset: start });
        }
        let Some(&byte) = bytes.get(*offset) else {
            return Err(MalformedEncodingError::Truncated { offset: start });
        };
        let chunk = match byte.checked_sub(CHAR_OFFSET) {
            Some(chunk) if chunk < 64 => u32::from(chunk),
            _ => {
                return Err(MalformedEncodingError::InvalidCharacter {
                    offset: *offset,
                    byte,
                });
            }
        };
        *offset += 1;

        result |= u64::from(chunk & CHUNK_MASK) << shift;
        shift += 5;

        if chunk & CONTINUATION_BIT == 0 {
            break;
        }
    }

    let result =
        u32::try_from(result).map_err(|_| MalformedEncodingError::Overflow { offset: start })?;
    Ok(zigzag_decode(result))
}

/// `!(n >> 1)` on a 32-bit signed value when the sign bit is set.
///
/// The shift is logical on the unsigned value, so a value with bit 31 set
/// decodes to a large magnitude rather than sign-extending. Valid coordinates
/// never reach that bit.
fn zigzag_decode(value: u32) -> i32 {
    let magnitude = (value >> 1) as i32;
    if value & 1 == 1 { !magnitude } else { magnitude }
}

fn zigzag_encode(value: i32) -> u32 {
    let shifted = i64::from(value) << 1;
    (if value < 0 { !shifted } else { shifted }) as u32
}

/// Encodes a path at the default precision of 5 digits.
pub fn encode(path: &[Coordinate]) -> Result<String, EncodingError> {
    encode_with_precision(path, DEFAULT_PRECISION)
}

/// Encodes a path with values scaled by `10^precision`.
///
/// Coordinates are rounded to the nearest fixed-point step before the
/// deltas are taken, so rounding error does not accumulate along the path.
/// Scaled values and the deltas between them must fit in 32 bits, the range
/// [`decode_with_precision`] accepts; anything else, including NaN and
/// infinities, is an error rather than being clamped.
pub fn encode_with_precision(path: &[Coordinate], precision: u32) -> Result<String, EncodingError> {
    let factor = 10f64.powi(precision as i32);
    let mut encoded = String::with_capacity(path.len() * 8);
    let mut prev_lat: i32 = 0;
    let mut prev_lng: i32 = 0;

    for (index, coord) in path.iter().enumerate() {
        let lat = to_fixed(coord.lat, factor, index)?;
        let lng = to_fixed(coord.lng, factor, index)?;
        write_value(&mut encoded, delta(lat, prev_lat, index)?);
        write_value(&mut encoded, delta(lng, prev_lng, index)?);
        prev_lat = lat;
        prev_lng = lng;
    }

    Ok(encoded)
}

fn to_fixed(degrees: f64, factor: f64, index: usize) -> Result<i32, EncodingError> {
    if !degrees.is_finite() {
        return Err(EncodingError::NonFinite { index });
    }
    let scaled = (degrees * factor).round();
    if scaled < f64::from(i32::MIN) || scaled > f64::from(i32::MAX) || scaled.is_nan() {
        return Err(EncodingError::OutOfRange { index });
    }
    Ok(scaled as i32)
}

fn delta(current: i32, previous: i32, index: usize) -> Result<i32, EncodingError> {
    current
        .checked_sub(previous)
        .ok_or(EncodingError::OutOfRange { index })
}

fn write_value(out: &mut String, delta: i32) {
    let mut value = zigzag_encode(delta);
    while value >= CONTINUATION_BIT {
        let chunk = (value & CHUNK_MASK) as u8 | CONTINUATION_BIT as u8;
        out.push(char::from(chunk + CHAR_OFFSET));
        value >>= 5;
    }
    out.push(char::from(value as u8 + CHAR_OFFSET));
}
