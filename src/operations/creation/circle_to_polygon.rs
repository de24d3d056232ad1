use rayon::prelude::*;
use tracing::{debug, trace};

use crate::config::{default_config, GeneratorConfig};
use crate::error::{GenerationError, Result};
use crate::geometry::{Coordinate, Shape, Vertex};
use crate::math::{bearing_for_vertex, destination};
use crate::operations::CancelToken;
use crate::validation::validate_request;

/// Approximates a circle of `radius` metres around `center` with a closed
/// polygon of `segments` sides.
///
/// Vertex `i` lies at bearing `2*pi * -i / segments` from the center, so the
/// ring starts due north. At most `min(segments, concurrency_limit)` vertex
/// units run at once; the result does not depend on that bound.
pub struct CircleToPolygon {
    center: Coordinate,
    radius: f64,
    segments: usize,
    config: Option<GeneratorConfig>,
    cancel: Option<CancelToken>,
}

impl CircleToPolygon {
    /// Creates a new `CircleToPolygon` operation.
    ///
    /// Without [`with_config`](Self::with_config), the process-wide default
    /// configuration is read when the operation executes.
    #[must_use]
    pub fn new(center: Coordinate, radius: f64, segments: usize) -> Self {
        Self {
            center,
            radius,
            segments,
            config: None,
            cancel: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Attaches a token that stops generation when cancelled.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Executes the operation, returning the closed ring.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`](crate::error::ValidationError) for an
    /// out-of-range radius, segment count or center (checked in that order),
    /// or [`GenerationError::Cancelled`] if the token is cancelled before every
    /// vertex is computed. No shape is returned on error.
    pub fn execute(&self) -> Result<Shape> {
        let config = self.config.unwrap_or_else(default_config);
        validate_request(&self.center, self.radius, self.segments, config.max_segments)?;

        let cancel = self.cancel.as_ref();
        if cancel.is_some_and(CancelToken::is_cancelled) {
            return Err(GenerationError::Cancelled.into());
        }

        let workers = config.worker_bound(self.segments);
        debug!(
            segments = self.segments,
            radius = self.radius,
            workers,
            "generating circle polygon"
        );

        let (center, radius, segments) = (self.center, self.radius, self.segments);
        let vertices = compute_vertices(segments, workers, cancel, |index| {
            let vertex = destination(center, radius, bearing_for_vertex(index, segments));
            trace!(index, lon = vertex[0], lat = vertex[1], "vertex computed");
            vertex
        })?;

        let shape = Shape::closed_polygon(vertices);
        debug!(vertices = shape.vertex_count(), "circle polygon closed");
        Ok(shape)
    }
}

/// Generates a circle polygon with an explicit configuration.
///
/// # Errors
///
/// See [`CircleToPolygon::execute`].
pub fn circle_to_polygon(
    center: Coordinate,
    radius: f64,
    segments: usize,
    config: &GeneratorConfig,
) -> Result<Shape> {
    CircleToPolygon::new(center, radius, segments)
        .with_config(*config)
        .execute()
}

/// Generates a circle polygon with a snapshot of the process-wide default
/// configuration.
///
/// # Errors
///
/// See [`CircleToPolygon::execute`].
pub fn circle_to_polygon_with_default(
    center: Coordinate,
    radius: f64,
    segments: usize,
) -> Result<Shape> {
    CircleToPolygon::new(center, radius, segments).execute()
}

/// Fills one slot per vertex index and waits for all of them.
///
/// Slots are split into at most `workers` contiguous chunks, each filled by a
/// single unit on the global rayon pool, so no more than `workers` units run
/// at once. Each unit writes only its own chunk. A unit that sees the token
/// cancelled stops the fan-out.
fn compute_vertices<F>(
    segments: usize,
    workers: usize,
    cancel: Option<&CancelToken>,
    vertex: F,
) -> Result<Vec<Vertex>>
where
    F: Fn(usize) -> Vertex + Sync,
{
    let mut slots: Vec<Vertex> = vec![[0.0; 2]; segments];
    if segments == 0 {
        return Ok(slots);
    }

    let chunk_len = segments.div_ceil(workers.max(1));
    slots
        .par_chunks_mut(chunk_len)
        .enumerate()
        .try_for_each(|(chunk_index, chunk)| {
            let first = chunk_index * chunk_len;
            for (offset, slot) in chunk.iter_mut().enumerate() {
                if cancel.is_some_and(CancelToken::is_cancelled) {
                    return Err(GenerationError::Cancelled);
                }
                *slot = vertex(first + offset);
            }
            Ok(())
        })?;

    Ok(slots)
}
