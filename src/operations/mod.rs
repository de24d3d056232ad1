mod cancel;
pub mod creation;

pub use cancel::CancelToken;
pub use creation::{circle_to_polygon, circle_to_polygon_with_default, CircleToPolygon};
