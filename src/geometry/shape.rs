use std::fmt;

use super::Vertex;

/// Kind tag carried by a generated [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Polygon,
}

impl ShapeKind {
    /// Returns the external name of the kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Polygon => "Polygon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed ring of `[longitude, latitude]` vertices.
///
/// The first and last vertex are equal, so a ring built from `n` segments
/// holds `n + 1` vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ShapeKind,
    coordinates: Vec<Vertex>,
}

impl Shape {
    /// Closes `vertices` by appending a copy of the first one.
    pub(crate) fn closed_polygon(mut vertices: Vec<Vertex>) -> Self {
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
        Self {
            kind: ShapeKind::Polygon,
            coordinates: vertices,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Vertex] {
        &self.coordinates
    }

    /// Number of vertices, including the closing one.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Returns whether the first and last vertex coincide exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_closed(&self) -> bool {
        match (self.coordinates.first(), self.coordinates.last()) {
            (Some(first), Some(last)) => self.coordinates.len() > 1 && first == last,
            _ => false,
        }
    }

    #[must_use]
    pub fn into_coordinates(self) -> Vec<Vertex> {
        self.coordinates
    }
}
