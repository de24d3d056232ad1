//! Input checks that gate circle generation.
//!
//! When a request has several invalid inputs, the radius is reported first,
//! then the segment count, then the center coordinate.

use crate::error::{Result, ValidationError};
use crate::geometry::Coordinate;
use crate::math::{
    EARTH_RADIUS_METRES, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE,
};

/// Fewest segments that still describe a non-degenerate polygon.
pub const MIN_SEGMENTS: usize = 3;

/// Checks a latitude/longitude pair, latitude first.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidLatitude`] or
/// [`ValidationError::InvalidLongitude`] for values outside their inclusive
/// ranges, including NaN.
pub fn validate_coordinate(latitude: f64, longitude: f64) -> Result<()> {
    if !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
        return Err(ValidationError::InvalidLatitude(latitude).into());
    }
    if !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
        return Err(ValidationError::InvalidLongitude(longitude).into());
    }
    Ok(())
}

/// Checks that `radius` (metres) is positive and no larger than the Earth.
///
/// # Errors
///
/// Returns [`ValidationError::RadiusExceedsEarth`] above
/// [`EARTH_RADIUS_METRES`], and [`ValidationError::NonPositiveRadius`] for
/// zero, negative or NaN radii.
pub fn validate_radius(radius: f64) -> Result<()> {
    if radius > EARTH_RADIUS_METRES {
        return Err(ValidationError::RadiusExceedsEarth(radius).into());
    }
    if radius.is_nan() || radius <= 0.0 {
        return Err(ValidationError::NonPositiveRadius(radius).into());
    }
    Ok(())
}

/// Checks that `segments` lies in `[MIN_SEGMENTS, max_segments]`.
///
/// The upper limit is checked first.
///
/// # Errors
///
/// Returns [`ValidationError::TooManySegments`] carrying `max_segments`, or
/// [`ValidationError::TooFewSegments`].
pub fn validate_segments(segments: usize, max_segments: usize) -> Result<()> {
    if segments > max_segments {
        return Err(ValidationError::TooManySegments {
            segments,
            limit: max_segments,
        }
        .into());
    }
    if segments < MIN_SEGMENTS {
        return Err(ValidationError::TooFewSegments(segments).into());
    }
    Ok(())
}

/// Validates a whole generation request: radius, then segments, then center.
///
/// # Errors
///
/// Returns the first failing check.
pub fn validate_request(
    center: &Coordinate,
    radius: f64,
    segments: usize,
    max_segments: usize,
) -> Result<()> {
    validate_radius(radius)?;
    validate_segments(segments, max_segments)?;
    center.validate()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::GeoError;

    fn validation(err: GeoError) -> ValidationError {
        match err {
            GeoError::Validation(e) => e,
            GeoError::Generation(e) => panic!("unexpected generation error: {e}"),
        }
    }

    #[test]
    fn segments_at_bounds_are_accepted() {
        assert!(validate_segments(3, 180).is_ok());
        assert!(validate_segments(180, 180).is_ok());
    }

    #[test]
    fn two_segments_are_too_few() {
        let err = validation(validate_segments(2, 180).unwrap_err());
        assert_eq!(err, ValidationError::TooFewSegments(2));
    }

    #[test]
    fn one_past_limit_is_too_many() {
        let err = validation(validate_segments(181, 180).unwrap_err());
        assert_eq!(
            err,
            ValidationError::TooManySegments {
                segments: 181,
                limit: 180
            }
        );
    }

    #[test]
    fn coordinate_boundaries_are_inclusive() {
        assert!(validate_coordinate(90.0, 180.0).is_ok());
        assert!(validate_coordinate(-90.0, -180.0).is_ok());
    }

    #[test]
    fn latitude_just_outside_is_rejected() {
        for lat in [90.000_000_1, -90.000_000_1] {
            let err = validation(validate_coordinate(lat, -25.343_43).unwrap_err());
            assert_eq!(err, ValidationError::InvalidLatitude(lat));
        }
    }

    #[test]
    fn longitude_just_outside_is_rejected() {
        for lon in [180.000_000_1, -180.000_000_1] {
            let err = validation(validate_coordinate(42.3333, lon).unwrap_err());
            assert_eq!(err, ValidationError::InvalidLongitude(lon));
        }
    }

    #[test]
    fn nan_components_are_rejected() {
        assert!(validate_coordinate(f64::NAN, 0.0).is_err());
        assert!(validate_coordinate(0.0, f64::NAN).is_err());
    }

    #[test]
    fn earth_radius_is_the_inclusive_limit() {
        assert!(validate_radius(EARTH_RADIUS_METRES).is_ok());
        assert!(validate_radius(EARTH_RADIUS_METRES - 1.0).is_ok());
        let err = validation(validate_radius(6_378_138.0).unwrap_err());
        assert_eq!(err, ValidationError::RadiusExceedsEarth(6_378_138.0));
    }

    // Non-positive radii are rejected here; the formula would otherwise
    // produce a collapsed or mirrored ring.
    #[test]
    fn non_positive_radius_is_rejected() {
        for radius in [0.0, -50.0] {
            let err = validation(validate_radius(radius).unwrap_err());
            assert_eq!(err, ValidationError::NonPositiveRadius(radius));
        }
        assert!(validate_radius(f64::NAN).is_err());
    }

    #[test]
    fn valid_request_passes() {
        let center = Coordinate::new(23.4567, -34.765_322).unwrap();
        assert!(validate_request(&center, 50.0, 10, 180).is_ok());
    }

    #[test]
    fn request_reports_each_invalid_input() {
        let valid = Coordinate::new(23.4567, -34.765_322).unwrap();
        let invalid = Coordinate::unchecked(-90.1234, 23.435_352);

        let err = validation(validate_request(&invalid, 50.0, 10, 180).unwrap_err());
        assert_eq!(err, ValidationError::InvalidLatitude(-90.1234));

        let err = validation(validate_request(&valid, 987_654_321.0, 10, 180).unwrap_err());
        assert_eq!(err, ValidationError::RadiusExceedsEarth(987_654_321.0));

        let err = validation(validate_request(&valid, 100.0, 2, 180).unwrap_err());
        assert_eq!(err, ValidationError::TooFewSegments(2));
    }

    #[test]
    fn request_precedence_is_radius_then_segments_then_center() {
        let invalid = Coordinate::unchecked(100.0, 200.0);

        let err = validation(validate_request(&invalid, 7_000_000.0, 1, 180).unwrap_err());
        assert_eq!(err, ValidationError::RadiusExceedsEarth(7_000_000.0));

        let err = validation(validate_request(&invalid, 50.0, 1, 180).unwrap_err());
        assert_eq!(err, ValidationError::TooFewSegments(1));

        let err = validation(validate_request(&invalid, 50.0, 10, 180).unwrap_err());
        assert_eq!(err, ValidationError::InvalidLatitude(100.0));
    }
}
