//! Named real-world locations used as route fixtures.
//!
//! Coordinates are rounded to four decimals, well inside the polyline
//! format's 1e-5 resolution.

use tripmap::Coordinate;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lng)
    }
}

pub const CHAMPAIGN: Location = Location::new("Downtown Champaign", 40.1164, -88.2434);
pub const URBANA: Location = Location::new("Downtown Urbana", 40.1106, -88.2073);
pub const MAIN_QUAD: Location = Location::new("UIUC Main Quad", 40.1075, -88.2272);
pub const WILLARD_AIRPORT: Location = Location::new("Willard Airport", 40.0392, -88.2781);
pub const RANTOUL: Location = Location::new("Rantoul", 40.3084, -88.1559);
pub const CHICAGO: Location = Location::new("Chicago Loop", 41.8781, -87.6298);

// ============================================================================
// Trips
// ============================================================================

/// A short walk around campus.
pub const CAMPUS_TOUR: &[Location] = &[
    CHAMPAIGN,
    Location::new("Krannert Center", 40.1080, -88.2225),
    MAIN_QUAD,
    Location::new("Illini Union", 40.1092, -88.2272),
    URBANA,
];

/// A Midwest road trip with several stops.
pub const MIDWEST_TRIP: &[Location] = &[
    CHAMPAIGN,
    Location::new("Springfield", 39.7817, -89.6501),
    Location::new("St. Louis", 38.6270, -90.1994),
    Location::new("Indianapolis", 39.7684, -86.1581),
    CHICAGO,
];

/// Points in every hemisphere, including both sides of the antimeridian.
pub const WORLD_TOUR: &[Location] = &[
    Location::new("Saratoga", 37.2638, -122.0230),
    Location::new("Reykjavik", 64.1466, -21.9426),
    Location::new("Sydney", -33.8688, 151.2093),
    Location::new("Suva", -18.1248, 178.4501),
    Location::new("Apia", -13.8333, -171.7667),
    Location::new("Ushuaia", -54.8019, -68.3030),
    Location::new("North Pole", 90.0, 180.0),
    Location::new("South Pole", -90.0, -180.0),
];

pub fn path_of(locations: &[Location]) -> Vec<Coordinate> {
    locations.iter().map(Location::coords).collect()
}
