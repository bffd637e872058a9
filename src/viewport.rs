//! Map viewport heuristic: a center and a zoom level that comfortably frame
//! up to two reference points.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CENTER, DEFAULT_ZOOM, FAR_ZOOM, SINGLE_POINT_ZOOM, ZOOM_STEPS};
use crate::coordinate::Coordinate;
use crate::error::ViewportConfigError;
use crate::haversine::haversine_km;
use crate::polyline::Polyline;

/// Camera position for a map widget.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

/// One row of the distance-to-zoom table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomStep {
    /// Applies when the distance is strictly below this many kilometers.
    pub below_km: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportConfig {
    pub default_center: Coordinate,
    pub default_zoom: u8,
    pub single_point_zoom: u8,
    zoom_steps: Vec<ZoomStep>,
    far_zoom: u8,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            default_center: DEFAULT_CENTER,
            default_zoom: DEFAULT_ZOOM,
            single_point_zoom: SINGLE_POINT_ZOOM,
            zoom_steps: ZOOM_STEPS
                .iter()
                .map(|&(below_km, zoom)| ZoomStep { below_km, zoom })
                .collect(),
            far_zoom: FAR_ZOOM,
        }
    }
}

impl ViewportConfig {
    /// Replaces the distance-to-zoom table.
    ///
    /// Thresholds must be strictly increasing and zooms, including
    /// `far_zoom`, strictly decreasing, so a larger separation never yields a
    /// closer zoom.
    pub fn with_zoom_steps(
        mut self,
        steps: Vec<ZoomStep>,
        far_zoom: u8,
    ) -> Result<Self, ViewportConfigError> {
        if steps.is_empty() {
            return Err(ViewportConfigError::Empty);
        }
        for pair in steps.windows(2) {
            if !(pair[0].below_km < pair[1].below_km) {
                return Err(ViewportConfigError::ThresholdsNotIncreasing {
                    previous: pair[0].below_km,
                    next: pair[1].below_km,
                });
            }
            if pair[0].zoom <= pair[1].zoom {
                return Err(ViewportConfigError::ZoomNotDecreasing {
                    previous: pair[0].zoom,
                    next: pair[1].zoom,
                });
            }
        }
        if let Some(last) = steps.last() {
            if last.zoom <= far_zoom {
                return Err(ViewportConfigError::ZoomNotDecreasing {
                    previous: last.zoom,
                    next: far_zoom,
                });
            }
        }

        self.zoom_steps = steps;
        self.far_zoom = far_zoom;
        Ok(self)
    }

    pub fn zoom_steps(&self) -> &[ZoomStep] {
        &self.zoom_steps
    }

    pub fn far_zoom(&self) -> u8 {
        self.far_zoom
    }

    /// Zoom level for two points `distance_km` apart.
    pub fn zoom_for_distance(&self, distance_km: f64) -> u8 {
        self.zoom_steps
            .iter()
            .find(|step| distance_km < step.below_km)
            .map(|step| step.zoom)
            .unwrap_or(self.far_zoom)
    }

    /// Frames zero, one or two points.
    ///
    /// The center of two points is the plain average of their latitudes and
    /// longitudes. This is not the geodesic midpoint and is wrong for pairs
    /// that straddle the antimeridian.
    pub fn compute(&self, a: Option<Coordinate>, b: Option<Coordinate>) -> Viewport {
        match (a, b) {
            (None, None) => Viewport {
                center: self.default_center,
                zoom: self.default_zoom,
            },
            (Some(point), None) | (None, Some(point)) => Viewport {
                center: point,
                zoom: self.single_point_zoom,
            },
            (Some(a), Some(b)) => Viewport {
                center: Coordinate::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0),
                zoom: self.zoom_for_distance(haversine_km(a, b)),
            },
        }
    }

    /// Frames a route by its first and last points. A single-point route is
    /// framed like a single point.
    pub fn for_path(&self, path: &Polyline) -> Viewport {
        match path.len() {
            0 | 1 => self.compute(path.first(), None),
            _ => self.compute(path.first(), path.last()),
        }
    }
}

/// [`ViewportConfig::compute`] with the default configuration.
pub fn compute_viewport(a: Option<Coordinate>, b: Option<Coordinate>) -> Viewport {
    ViewportConfig::default().compute(a, b)
}
