mod bounded_ray;
mod dimension_converter;
mod line;
mod line_like;
mod plane;
mod polygon_2d;
mod ray;

pub use bounded_ray::BoundedRay;
pub use dimension_converter::DimensionConverter;
pub use line::Line;
pub use line_like::{DistanceDomain, IntersectionDistances, LineLike};
pub use plane::{Plane, PlaneRelationship};
pub use polygon_2d::{Polygon2D, WindingOrder};
pub use ray::Ray;

use crate::math::Angle;

/// Distance within which a location counts as lying on a line-like.
pub const DEFAULT_LINE_THICKNESS: f64 = 0.01;

/// Angular slack for the approximate parallel and orthogonal tests (0.1°).
pub const DEFAULT_PARALLEL_ORTHOGONAL_TOLERANCE: Angle =
    Angle::from_radians(std::f64::consts::PI / 1800.0);
