//! Geographic coordinate value type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoordinateParseError;
use crate::haversine::haversine_km;

/// A latitude/longitude pair in degrees.
///
/// Valid values have `lat` in [-90, 90] and `lng` in [-180, 180]. [`Coordinate::new`]
/// does not check this; use [`Coordinate::checked`] when the input is untrusted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn checked(lat: f64, lng: f64) -> Result<Self, CoordinateParseError> {
        if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinateParseError::OutOfRange { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    /// Builds a coordinate from a GeoJSON position, which is `[lng, lat]`.
    pub fn from_lng_lat(position: [f64; 2]) -> Self {
        let [lng, lat] = position;
        Self { lat, lng }
    }

    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.lng, self.lat]
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        haversine_km(*self, *other)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// Parses `"lat,lng"`, the format itinerary items use for inline locations.
impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| CoordinateParseError::MissingComponent(s.to_string()))?;

        let parse = |part: &str| {
            let part = part.trim();
            part.parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| CoordinateParseError::InvalidNumber(part.to_string()))
        };

        Ok(Self::new(parse(lat)?, parse(lng)?))
    }
}
