use thiserror::Error;

/// Top-level error type for the geokern geometry kernel.
#[derive(Debug, Error)]
pub enum GeokernError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
}

/// Errors related to geometric construction and queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("index {index} is out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors raised by polygon triangulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TriangulationError {
    #[error("destination buffer holds {actual} triangles but {required} are required")]
    BufferTooSmall { required: usize, actual: usize },

    /// The polygon is non-simple, or its declared winding order is wrong.
    #[error("no ear found with {remaining} vertices remaining")]
    NoEarFound { remaining: usize },
}

/// Convenience type alias for results using [`GeokernError`].
pub type Result<T> = std::result::Result<T, GeokernError>;
