pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod validation;

pub use config::GeneratorConfig;
pub use error::{GenerationError, GeoError, Result, ValidationError};
pub use geometry::{Coordinate, Shape, ShapeKind, Vertex};
pub use operations::{
    circle_to_polygon, circle_to_polygon_with_default, CancelToken, CircleToPolygon,
};
