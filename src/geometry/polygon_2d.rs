use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{closest_point_on_segment_2d, point_to_segment_dist};
use crate::math::intersect_2d::point_in_polygon_2d;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Real, Scalar, Vector2};
use crate::tessellation::{Triangulate, TriangulationContext, VertexTriangle};

/// Cyclic direction in which a polygon's vertices are listed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WindingOrder {
    Clockwise,
    #[default]
    Anticlockwise,
}

impl WindingOrder {
    /// Sign a correctly wound turn produces: `-1` or `1`.
    #[must_use]
    pub fn turn_sign(self) -> i32 {
        match self {
            Self::Clockwise => -1,
            Self::Anticlockwise => 1,
        }
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::Clockwise => Self::Anticlockwise,
            Self::Anticlockwise => Self::Clockwise,
        }
    }
}

/// A simple polygon viewed over a borrowed vertex slice.
///
/// The winding order is declared by the caller, not derived; triangulation
/// fails if the declaration is wrong.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polygon2D<'a, T = f64> {
    vertices: &'a [Vector2<T>],
    winding: WindingOrder,
}

impl<'a, T: Scalar> Polygon2D<'a, T> {
    #[must_use]
    pub fn new(vertices: &'a [Vector2<T>], winding: WindingOrder) -> Self {
        Self { vertices, winding }
    }

    #[must_use]
    pub fn vertices(&self) -> &'a [Vector2<T>] {
        self.vertices
    }

    #[must_use]
    pub fn winding_order(&self) -> WindingOrder {
        self.winding
    }

    #[must_use]
    pub fn is_wound_clockwise(&self) -> bool {
        self.winding == WindingOrder::Clockwise
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// 0 for a point or nothing, 1 for a lone segment, otherwise one per
    /// vertex.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        match self.vertices.len() {
            0 | 1 => 0,
            2 => 1,
            n => n,
        }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.vertices.len().saturating_sub(2)
    }

    /// Arithmetic mean of the vertices; the zero vector when empty.
    #[must_use]
    pub fn centroid(&self) -> Vector2<T> {
        if self.vertices.is_empty() {
            return Vector2::zero();
        }
        let mut sum = Vector2::zero();
        for &v in self.vertices {
            sum += v;
        }
        sum / T::from_usize(self.vertices.len())
    }

    /// The edge from vertex `index` to the next one.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::IndexOutOfRange` if `index >= edge_count()`.
    pub fn edge(&self, index: usize) -> Result<(Vector2<T>, Vector2<T>)> {
        let len = self.edge_count();
        if index >= len {
            return Err(GeometryError::IndexOutOfRange { index, len }.into());
        }
        let n = self.vertices.len();
        Ok((self.vertices[index], self.vertices[(index + 1) % n]))
    }

    pub fn edges(&self) -> impl Iterator<Item = (Vector2<T>, Vector2<T>)> + 'a {
        let vertices = self.vertices;
        let n = vertices.len();
        (0..self.edge_count()).map(move |i| (vertices[i], vertices[(i + 1) % n]))
    }

    /// Triangulates into `dest` using a fresh scratch context.
    ///
    /// Returns the number of triangles written, which is always
    /// [`triangle_count`](Self::triangle_count).
    ///
    /// # Errors
    ///
    /// See [`Triangulate::execute`].
    pub fn triangulate(&self, dest: &mut [VertexTriangle]) -> Result<usize> {
        self.triangulate_with(&mut TriangulationContext::default(), dest)
    }

    /// Triangulates into `dest`, reusing `context` for scratch storage.
    ///
    /// # Errors
    ///
    /// See [`Triangulate::execute`].
    pub fn triangulate_with(
        &self,
        context: &mut TriangulationContext,
        dest: &mut [VertexTriangle],
    ) -> Result<usize> {
        Triangulate::new(*self).execute(context, dest)
    }
}

impl<T: Real> Polygon2D<'_, T> {
    /// Shoelace area; positive for anticlockwise vertex order.
    #[must_use]
    pub fn signed_area(&self) -> T {
        signed_area_2d(self.vertices)
    }

    /// Even-odd containment; points exactly on an edge may go either way.
    #[must_use]
    pub fn contains(&self, point: Vector2<T>) -> bool {
        point_in_polygon_2d(point, self.vertices)
    }

    /// `None` if the polygon has no edges.
    #[must_use]
    pub fn edge_closest_to(&self, point: Vector2<T>) -> Option<(Vector2<T>, Vector2<T>)> {
        self.closest_edge_and_point(point).map(|(edge, _)| edge)
    }

    /// Closest point on the boundary. `None` if the polygon has no edges.
    #[must_use]
    pub fn edge_point_closest_to(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        self.closest_edge_and_point(point).map(|(_, p)| p)
    }

    /// `point` itself when inside, otherwise the closest boundary point.
    #[must_use]
    pub fn point_closest_to(&self, point: Vector2<T>) -> Option<Vector2<T>> {
        if self.contains(point) {
            return Some(point);
        }
        self.edge_point_closest_to(point)
    }

    /// Zero when inside. `None` if the polygon has no edges.
    #[must_use]
    pub fn distance_from(&self, point: Vector2<T>) -> Option<T> {
        if self.contains(point) {
            return Some(T::ZERO);
        }
        self.edges()
            .map(|(a, b)| point_to_segment_dist(point, a, b))
            .reduce(Scalar::min_of)
    }

    #[must_use]
    pub fn equals_within(&self, other: &Polygon2D<'_, T>, tolerance: T) -> bool {
        self.winding == other.winding
            && self.vertices.len() == other.vertices.len()
            && self
                .vertices
                .iter()
                .zip(other.vertices)
                .all(|(a, b)| a.equals_within(*b, tolerance))
    }

    fn closest_edge_and_point(
        &self,
        point: Vector2<T>,
    ) -> Option<((Vector2<T>, Vector2<T>), Vector2<T>)> {
        let mut best: Option<((Vector2<T>, Vector2<T>), Vector2<T>, T)> = None;
        for (a, b) in self.edges() {
            let (closest, _) = closest_point_on_segment_2d(point, a, b);
            let dist_sq = closest.distance_squared_from(point);
            if best.as_ref().is_none_or(|&(_, _, d)| dist_sq < d) {
                best = Some(((a, b), closest, dist_sq));
            }
        }
        best.map(|(edge, closest, _)| (edge, closest))
    }
}
