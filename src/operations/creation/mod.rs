mod circle_to_polygon;

pub use circle_to_polygon::{circle_to_polygon, circle_to_polygon_with_default, CircleToPolygon};
