//! Route payloads returned by routing backends.
//!
//! Two shapes are supported:
//! - a Directions-style route with an `overview_polyline` string and
//!   per-leg, per-step encoded polylines;
//! - an OSRM `route` response whose geometry is either an encoded polyline or
//!   a GeoJSON LineString of `[longitude, latitude]` positions.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::coordinate::Coordinate;
use crate::error::MalformedEncodingError;
use crate::polyline::{self, Polyline};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectionsRoute {
    pub overview_polyline: String,
    #[serde(default)]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteLeg {
    pub start_location: Coordinate,
    pub end_location: Coordinate,
    #[serde(default)]
    pub steps: Vec<RouteStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStep {
    pub polyline: String,
}

impl DirectionsRoute {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decodes the simplified whole-route geometry.
    pub fn overview_path(&self) -> Result<Polyline, MalformedEncodingError> {
        polyline::decode(&self.overview_polyline)
    }

    /// Decodes every leg into one path built from its steps, in leg order.
    pub fn leg_paths(&self) -> Result<Vec<Polyline>, MalformedEncodingError> {
        self.legs.par_iter().map(RouteLeg::path).collect()
    }
}

impl RouteLeg {
    /// Joins the decoded step polylines of this leg.
    pub fn path(&self) -> Result<Polyline, MalformedEncodingError> {
        let mut path = Polyline::default();
        for step in &self.steps {
            path.extend_joined(&polyline::decode(&step.polyline)?);
        }
        Ok(path)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OsrmRouteResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OsrmRoute {
    pub geometry: RouteGeometry,
    /// Meters.
    #[serde(default)]
    pub distance: f64,
    /// Seconds.
    #[serde(default)]
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RouteGeometry {
    Encoded(String),
    LineString { coordinates: Vec<[f64; 2]> },
}

impl RouteGeometry {
    /// Converts to a path. `precision` applies to encoded geometries only.
    pub fn to_polyline(&self, precision: u32) -> Result<Polyline, MalformedEncodingError> {
        match self {
            RouteGeometry::Encoded(encoded) => polyline::decode_with_precision(encoded, precision),
            RouteGeometry::LineString { coordinates } => Ok(coordinates
                .iter()
                .copied()
                .map(Coordinate::from_lng_lat)
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geojson_geometry_swaps_order() {
        let geometry: RouteGeometry =
            serde_json::from_str(r#"{"type":"LineString","coordinates":[[-88.2434,40.1164],[-87.6298,41.8781]]}"#)
                .unwrap();
        let path = geometry.to_polyline(5).unwrap();
        assert_eq!(
            path.points(),
            &[Coordinate::new(40.1164, -88.2434), Coordinate::new(41.8781, -87.6298)]
        );
    }

    #[test]
    fn test_encoded_geometry() {
        let geometry: RouteGeometry = serde_json::from_str(r#""_p~iF~ps|U""#).unwrap();
        assert_eq!(geometry, RouteGeometry::Encoded("_p~iF~ps|U".to_string()));
        let path = geometry.to_polyline(5).unwrap();
        assert_eq!(path.points(), &[Coordinate::new(38.5, -120.2)]);
    }

    #[test]
    fn test_leg_path_joins_steps() {
        let first = polyline::encode(&[Coordinate::new(1.0, 1.0), Coordinate::new(1.5, 1.5)]).unwrap();
        let second = polyline::encode(&[Coordinate::new(1.5, 1.5), Coordinate::new(2.0, 2.0)]).unwrap();
        let leg = RouteLeg {
            start_location: Coordinate::new(1.0, 1.0),
            end_location: Coordinate::new(2.0, 2.0),
            steps: vec![RouteStep { polyline: first }, RouteStep { polyline: second }],
        };
        let path = leg.path().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.first(), Some(leg.start_location));
        assert_eq!(path.last(), Some(leg.end_location));
    }

    #[test]
    fn test_leg_without_steps_is_empty() {
        let leg = RouteLeg {
            start_location: Coordinate::new(1.0, 1.0),
            end_location: Coordinate::new(2.0, 2.0),
            steps: Vec::new(),
        };
        assert!(leg.path().unwrap().is_empty());
    }
}
