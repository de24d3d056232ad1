mod coordinate;
mod shape;

pub use coordinate::Coordinate;
pub use shape::{Shape, ShapeKind};

/// A ring vertex stored as `[longitude, latitude]` in degrees.
pub type Vertex = [f64; 2];
