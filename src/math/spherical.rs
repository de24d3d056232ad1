use crate::geometry::{Coordinate, Vertex};

use super::{to_degrees, to_radians, EARTH_RADIUS_METRES, TWO_PI};

/// Computes the point reached by travelling `distance` metres from `center`
/// along the initial `bearing` (radians, 0 = due north) on a spherical Earth.
///
/// Returns `[longitude, latitude]` in degrees.
///
/// `φ2 = asin(sin φ1 · cos δ + cos φ1 · sin δ · cos θ)`
/// `λ2 = λ1 + atan2(sin θ · sin δ · cos φ1, cos δ − sin φ1 · sin φ2)`
/// where `δ = distance / R`.
#[must_use]
pub fn destination(center: Coordinate, distance: f64, bearing: f64) -> Vertex {
    let lat1 = to_radians(center.latitude());
    let lon1 = to_radians(center.longitude());

    let angular = distance / EARTH_RADIUS_METRES;

    let lat = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();

    let lon = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat.sin());

    [to_degrees(lon), to_degrees(lat)]
}

/// Bearing of vertex `index` out of `segments`, in radians.
///
/// Bearings decrease as the index grows, starting due north at index 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn bearing_for_vertex(index: usize, segments: usize) -> f64 {
    (TWO_PI * -(index as f64)) / segments as f64
}
