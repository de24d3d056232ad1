pub mod spherical;

pub use spherical::{bearing_for_vertex, destination};

/// Radius of the Earth in metres, as defined by WGS84.
pub const EARTH_RADIUS_METRES: f64 = 6_378_137.0;

/// One full turn in radians.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;

// Inclusive coordinate bounds in degrees.
pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Converts an angle in degrees to radians.
///
/// Computed as `(degrees * pi) / 180`, not [`f64::to_radians`]; vertex
/// output depends on this rounding.
#[must_use]
pub fn to_radians(degrees: f64) -> f64 {
    (degrees * std::f64::consts::PI) / 180.0
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn to_degrees(radians: f64) -> f64 {
    (radians * 180.0) / std::f64::consts::PI
}
