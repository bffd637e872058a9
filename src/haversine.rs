//! Great-circle distance on a spherical Earth.
//!
//! Accurate to within about 0.5% of the ellipsoidal distance, which is
//! plenty for framing a map or measuring a drawn route.

use crate::constants::EARTH_RADIUS_KM;
use crate::coordinate::Coordinate;

/// Haversine distance between two points in kilometers.
pub fn haversine_km(from: Coordinate, to: Coordinate) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = Coordinate::new(36.1, -115.1);
        let dist = haversine_km(p, p);
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas (36.17, -115.14) to Los Angeles (34.05, -118.24)
        // Actual distance ~370 km
        let dist = haversine_km(Coordinate::new(36.17, -115.14), Coordinate::new(34.05, -118.24));
        assert!(dist > 350.0 && dist < 400.0, "LV to LA should be ~370km, got {}", dist);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Coordinate::new(40.1164, -88.2434);
        let b = Coordinate::new(41.8781, -87.6298);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_one_degree_of_latitude() {
        // 2 * pi * 6371 / 360
        let dist = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((dist - 111.195).abs() < 0.01, "got {}", dist);
    }

    #[test]
    fn test_antipodal_points() {
        let dist = haversine_km(Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!((dist - half_circumference).abs() < 1e-6);
    }
}
