mod angle;
mod direction;
mod location;
mod scalar;
mod vect;
mod vector_2d;

pub mod distance_2d;
pub mod intersect_2d;
pub mod intersect_3d;
pub mod polygon_2d;

pub use angle::Angle;
pub use direction::Direction;
pub use location::Location;
pub use scalar::{Real, Scalar};
pub use vect::Vect;
pub use vector_2d::{Orientation, Vector2};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Cross-product magnitude below which two unit directions count as parallel.
pub const PARALLEL_TOLERANCE: f64 = 1e-9;

/// Allowed disagreement on the eliminated axis when solving line intersections.
pub const INTERSECTION_TOLERANCE: f64 = 1e-6;
