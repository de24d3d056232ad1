use crate::error::Result;
use crate::validation::validate_coordinate;

/// A geographic point in degrees.
///
/// Latitude lies in `[-90, 90]` and longitude in `[-180, 180]`, both
/// inclusive. [`Coordinate::new`] is the only public constructor, so every
/// coordinate outside this crate is in range.
///
/// ```compile_fail
/// let c = geocircle::Coordinate::unchecked(91.0, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidLatitude`] if the latitude is out of
    /// range, otherwise [`ValidationError::InvalidLongitude`] if the longitude is.
    ///
    /// [`ValidationError::InvalidLatitude`]: crate::error::ValidationError::InvalidLatitude
    /// [`ValidationError::InvalidLongitude`]: crate::error::ValidationError::InvalidLongitude
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let coordinate = Self::unchecked(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    /// Creates a coordinate without range checks.
    #[must_use]
    pub(crate) fn unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Checks that both components are in range.
    ///
    /// # Errors
    ///
    /// Returns the first failing component, latitude before longitude.
    pub fn validate(&self) -> Result<()> {
        validate_coordinate(self.latitude, self.longitude)
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
