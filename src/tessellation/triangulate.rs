use crate::error::{Result, TriangulationError};
use crate::geometry::Polygon2D;
use crate::math::polygon_2d::{strictly_inside_triangle_2d, turn_2d};
use crate::math::{Scalar, Vector2};

use super::VertexTriangle;

/// Caller-owned scratch space for [`Triangulate`].
///
/// One context can be reused across any number of polygons; it is reset at
/// the start of every run. Hold one per thread.
#[derive(Debug, Clone, Default)]
pub struct TriangulationContext {
    /// Original indices of the vertices still in the polygon, in order.
    remaining: Vec<usize>,
    /// Original indices of clipped ear tips, in clipping order.
    clipped: Vec<usize>,
}

impl TriangulationContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ear tips removed by the most recent run, in the order they were
    /// clipped.
    #[must_use]
    pub fn clipped_indices(&self) -> &[usize] {
        &self.clipped
    }

    fn reset(&mut self, vertex_count: usize) {
        self.remaining.clear();
        self.remaining.extend(0..vertex_count);
        self.clipped.clear();
    }

    fn clip(&mut self, logical: usize) {
        let original = self.remaining.remove(logical);
        self.clipped.push(original);
    }
}

/// Ear-clipping triangulation of a simple polygon.
pub struct Triangulate<'a, T> {
    polygon: Polygon2D<'a, T>,
}

impl<'a, T: Scalar> Triangulate<'a, T> {
    /// Creates a new `Triangulate` operation.
    #[must_use]
    pub fn new(polygon: Polygon2D<'a, T>) -> Self {
        Self { polygon }
    }

    /// Writes `triangle_count()` triangles into the front of `dest` and
    /// returns that count.
    ///
    /// Each scan starts at the first remaining vertex and takes the first
    /// ear found: a vertex whose turn matches the declared winding and whose
    /// triangle contains no other remaining vertex. After clipping it the
    /// scan restarts. Polygons with fewer than three vertices produce
    /// nothing.
    ///
    /// # Errors
    ///
    /// - `TriangulationError::BufferTooSmall` if `dest` cannot hold every
    ///   triangle; nothing is written.
    /// - `TriangulationError::NoEarFound` if the polygon is not simple or
    ///   its declared winding order is wrong. `dest` may be partially
    ///   written.
    pub fn execute(
        &self,
        context: &mut TriangulationContext,
        dest: &mut [VertexTriangle],
    ) -> Result<usize> {
        let required = self.polygon.triangle_count();
        if dest.len() < required {
            return Err(TriangulationError::BufferTooSmall {
                required,
                actual: dest.len(),
            }
            .into());
        }
        let vertices = self.polygon.vertices();
        if vertices.len() < 3 {
            return Ok(0);
        }

        let wanted = self.polygon.winding_order().turn_sign();
        context.reset(vertices.len());
        let mut written = 0;

        while context.remaining.len() > 3 {
            let Some((logical, triangle)) = find_ear(vertices, &context.remaining, wanted) else {
                tracing::debug!(
                    vertex_count = vertices.len(),
                    remaining = context.remaining.len(),
                    winding = ?self.polygon.winding_order(),
                    "triangulation found no ear"
                );
                return Err(TriangulationError::NoEarFound {
                    remaining: context.remaining.len(),
                }
                .into());
            };
            tracing::trace!(?triangle, "clipped ear");
            dest[written] = triangle;
            written += 1;
            context.clip(logical);
        }

        let [a, b, c] = [context.remaining[0], context.remaining[1], context.remaining[2]];
        dest[written] = if turn_2d(vertices[a], vertices[b], vertices[c]).signum_or_zero() == wanted {
            VertexTriangle::new(a, b, c)
        } else {
            VertexTriangle::new(c, b, a)
        };
        written += 1;

        Ok(written)
    }
}

/// First ear in scan order as `(logical centre, triangle)`.
fn find_ear<T: Scalar>(
    vertices: &[Vector2<T>],
    remaining: &[usize],
    wanted: i32,
) -> Option<(usize, VertexTriangle)> {
    let n = remaining.len();
    (0..n).find_map(|centre| {
        let prev = remaining[(centre + n - 1) % n];
        let next = remaining[(centre + 1) % n];
        let tip = remaining[centre];
        let (a, b, c) = (vertices[prev], vertices[tip], vertices[next]);

        if turn_2d(a, b, c).signum_or_zero() != wanted {
            return None;
        }
        let blocked = remaining.iter().any(|&other| {
            other != prev
                && other != tip
                && other != next
                && strictly_inside_triangle_2d(vertices[other], a, b, c)
        });
        (!blocked).then_some((centre, VertexTriangle::new(prev, tip, next)))
    })
}
