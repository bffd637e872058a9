//! tripmap geometry utilities
//!
//! Encoded-polyline codec, haversine distance and the map viewport heuristic
//! used to draw trip routes, plus typed route payloads and an OSRM client for
//! fetching route geometry.

pub mod constants;
pub mod coordinate;
pub mod error;
pub mod haversine;
pub mod osrm;
pub mod polyline;
pub mod route_data;
pub mod traits;
pub mod viewport;

pub use coordinate::Coordinate;
pub use error::{EncodingError, MalformedEncodingError, RouteError};
pub use polyline::{Polyline, decode, encode};
pub use viewport::{Viewport, ViewportConfig, compute_viewport};
