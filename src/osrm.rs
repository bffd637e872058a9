//! OSRM HTTP adapter for route geometries.

use std::env;

use reqwest::StatusCode;

use crate::constants::{DEFAULT_PRECISION, OSRM_POLYLINE6_PRECISION};
use crate::coordinate::Coordinate;
use crate::error::RouteError;
use crate::polyline::Polyline;
use crate::route_data::OsrmRouteResponse;
use crate::traits::RouteGeometryProvider;

/// Geometry encoding requested from OSRM (`geometries=` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    Polyline,
    Polyline6,
    GeoJson,
}

impl GeometryFormat {
    fn query_value(self) -> &'static str {
        match self {
            GeometryFormat::Polyline => "polyline",
            GeometryFormat::Polyline6 => "polyline6",
            GeometryFormat::GeoJson => "geojson",
        }
    }

    fn precision(self) -> u32 {
        match self {
            GeometryFormat::Polyline6 => OSRM_POLYLINE6_PRECISION,
            GeometryFormat::Polyline | GeometryFormat::GeoJson => DEFAULT_PRECISION,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
    pub geometry: GeometryFormat,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
            geometry: GeometryFormat::Polyline,
        }
    }
}

impl OsrmConfig {
    /// Defaults overridden by `OSRM_BASE_URL`, `OSRM_PROFILE` and
    /// `OSRM_TIMEOUT_SECS` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from `lookup`, which maps a variable name to its value.
    /// An unparsable timeout falls back to the default.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("OSRM_BASE_URL").unwrap_or(defaults.base_url),
            profile: lookup("OSRM_PROFILE").unwrap_or(defaults.profile),
            timeout_secs: lookup("OSRM_TIMEOUT_SECS")
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
            geometry: defaults.geometry,
        }
    }

    fn route_url(&self, waypoints: &[Coordinate]) -> String {
        let coords = waypoints
            .iter()
            .map(|point| format!("{:.6},{:.6}", point.lng, point.lat))
            .collect::<Vec<_>>()
            .join(";");

        format!(
            "{}/route/v1/{}/{}?overview=full&geometries={}",
            self.base_url.trim_end_matches('/'),
            self.profile,
            coords,
            self.geometry.query_value()
        )
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &OsrmConfig {
        &self.config
    }
}

impl RouteGeometryProvider for OsrmClient {
    fn route_geometry(&self, waypoints: &[Coordinate]) -> Result<Polyline, RouteError> {
        if waypoints.len() < 2 {
            return Err(RouteError::NotEnoughWaypoints(waypoints.len()));
        }

        let url = self.config.route_url(waypoints);
        tracing::debug!(%url, waypoints = waypoints.len(), "requesting OSRM route");

        let response = self.client.get(url).send()?;
        let status = response.status();
        let text = response.text()?;

        into_polyline(parse_route_body(status, &text)?, self.config.geometry)
    }
}

/// OSRM reports routing failures (NoRoute, InvalidQuery) with a 400 status
/// and a JSON body, so the body is parsed before the status is considered.
fn parse_route_body(status: StatusCode, text: &str) -> Result<OsrmRouteResponse, RouteError> {
    match serde_json::from_str::<OsrmRouteResponse>(text) {
        Ok(body) => Ok(body),
        Err(err) if !status.is_success() => {
            tracing::warn!(%status, "OSRM returned an error without a route body");
            Err(RouteError::Service {
                code: status.as_u16().to_string(),
                message: err.to_string(),
            })
        }
        Err(err) => Err(err.into()),
    }
}

fn into_polyline(body: OsrmRouteResponse, format: GeometryFormat) -> Result<Polyline, RouteError> {
    if body.code != "Ok" {
        let message = body.message.unwrap_or_default();
        tracing::warn!(code = %body.code, %message, "OSRM route request failed");
        return Err(RouteError::Service {
            code: body.code,
            message,
        });
    }

    let Some(route) = body.routes.into_iter().next() else {
        tracing::warn!("OSRM returned Ok without any route");
        return Err(RouteError::NoRoute);
    };

    Ok(route.geometry.to_polyline(format.precision())?)
}
