mod triangulate;

pub use triangulate::{Triangulate, TriangulationContext};

/// A triangle given by three indices into a polygon's vertex slice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct VertexTriangle {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl VertexTriangle {
    #[must_use]
    pub const fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    #[must_use]
    pub fn indices(&self) -> [usize; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<(usize, usize, usize)> for VertexTriangle {
    fn from((a, b, c): (usize, usize, usize)) -> Self {
        Self::new(a, b, c)
    }
}
