use thiserror::Error;

/// Top-level error type for circle generation.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Errors raised when a request falls outside the accepted input domain.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("latitude has to be between -90 and 90, got {0}")]
    InvalidLatitude(f64),

    #[error("longitude has to be between -180 and 180, got {0}")]
    InvalidLongitude(f64),

    #[error("radius can not be greater than the radius of the Earth, 6378137 metres, got {0}")]
    RadiusExceedsEarth(f64),

    #[error("radius must be greater than zero, got {0}")]
    NonPositiveRadius(f64),

    #[error("too few segments, this should be set to 3 or more, got {0}")]
    TooFewSegments(usize),

    #[error("too many segments, this should be less than {limit}, got {segments}")]
    TooManySegments { segments: usize, limit: usize },
}

/// Errors raised while fanning out vertex computation.
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error("generation was cancelled")]
    Cancelled,
}

/// Convenience type alias for results using [`GeoError`].
pub type Result<T> = std::result::Result<T, GeoError>;
