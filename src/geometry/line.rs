use crate::error::{GeometryError, Result};
use crate::math::{Direction, Location};

use super::{DistanceDomain, LineLike, Plane, Ray};

/// An infinite line through a point.
///
/// The parametric form is: `P(t) = point + t * direction` for every real `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Location,
    direction: Direction,
}

impl Line {
    /// Creates a line through `point`. A [`Direction::NONE`] direction gives
    /// a degenerate line that never intersects anything.
    #[must_use]
    pub fn new(point: Location, direction: Direction) -> Self {
        Self { point, direction }
    }

    /// Creates the line through two points, directed from `a` to `b`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the points coincide.
    pub fn from_points(a: Location, b: Location) -> Result<Self> {
        let direction = (b - a).direction();
        if direction.is_none() {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::new(a, direction))
    }

    /// The anchor point used as distance zero.
    #[must_use]
    pub fn point_on_line(&self) -> Location {
        self.point
    }

    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.point, -self.direction)
    }

    /// The half of the line from the anchor onwards.
    #[must_use]
    pub fn to_ray(&self) -> Ray {
        Ray::new(self.point, self.direction)
    }
}

impl LineLike for Line {
    type Bounce = Ray;
    type SplitHead = Ray;
    type SplitTail = Ray;

    fn start_point(&self) -> Location {
        self.point
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn domain(&self) -> DistanceDomain {
        DistanceDomain::UNBOUNDED
    }

    fn with_start_and_direction(&self, start: Location, direction: Direction) -> Self {
        Self::new(start, direction)
    }

    fn bounced_off(&self, plane: &Plane) -> Option<Ray> {
        let hit = self.intersection_with_plane(plane)?;
        let reflected = plane.reflection_of(self.direction)?;
        Some(Ray::new(hit, reflected))
    }

    /// Two rays leaving the crossing point in opposite directions; the head
    /// points back along the line.
    fn split_by(&self, plane: &Plane) -> Option<(Ray, Ray)> {
        let hit = self.intersection_with_plane(plane)?;
        Some((Ray::new(hit, -self.direction), Ray::new(hit, self.direction)))
    }
}
