//! Seams between the geometry utilities and external routing services.

use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;

/// Provides the drawn geometry of a route through a list of waypoints.
///
/// Waypoints are visited in the given order: start, intermediate stops, end.
/// Implementations only fetch or reconstruct geometry that a router has
/// computed; they never compute routes themselves.
pub trait RouteGeometryProvider {
    fn route_geometry(&self, waypoints: &[Coordinate]) -> Result<Polyline, RouteError>;
}
