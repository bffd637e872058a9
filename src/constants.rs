//! Default parameters for the map viewport heuristic and polyline format.

use crate::coordinate::Coordinate;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Decimal digits of precision used by the Google polyline format.
pub const DEFAULT_PRECISION: u32 = 5;

/// Precision of OSRM's `polyline6` geometries.
pub const OSRM_POLYLINE6_PRECISION: u32 = 6;

/// Map center used when no reference point is known (Champaign, IL).
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(40.1164, -88.2434);

/// Zoom used together with [`DEFAULT_CENTER`].
pub const DEFAULT_ZOOM: u8 = 10;

/// Zoom used when the viewport is framed on a single point.
pub const SINGLE_POINT_ZOOM: u8 = 13;

/// `(max_distance_km, zoom)` pairs, checked in order. A pair applies when
/// the distance between the two points is strictly below its threshold.
pub const ZOOM_STEPS: &[(f64, u8)] = &[(1.0, 15), (5.0, 13), (20.0, 11), (50.0, 9)];

/// Zoom used when the distance is beyond every threshold in [`ZOOM_STEPS`].
pub const FAR_ZOOM: u8 = 7;
