use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{Point3, Vect};
use crate::geometry::LineLike;

/// An absolute position in 3D space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location(Point3);

impl Default for Location {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Location {
    pub const ORIGIN: Self = Self(Point3::new(0.0, 0.0, 0.0));

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Point3::new(x, y, z))
    }

    #[must_use]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[must_use]
    pub fn as_point3(&self) -> &Point3 {
        &self.0
    }

    /// Displacement from the origin to this location.
    #[must_use]
    pub fn as_vect(&self) -> Vect {
        Vect::from(self.0.coords)
    }

    #[must_use]
    pub fn vect_to(&self, other: Self) -> Vect {
        other - *self
    }

    #[must_use]
    pub fn distance_from(&self, other: Self) -> f64 {
        nalgebra::distance(&self.0, &other.0)
    }

    #[must_use]
    pub fn distance_squared_from(&self, other: Self) -> f64 {
        nalgebra::distance_squared(&self.0, &other.0)
    }

    /// Unclamped linear interpolation between two locations.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, distance: f64) -> Self {
        start + (end - start) * distance
    }

    #[must_use]
    pub fn equals_within(&self, other: Self, tolerance: f64) -> bool {
        self.distance_squared_from(other) <= tolerance * tolerance
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }

    /// Point on `line` closest to this location; mirrors
    /// [`LineLike::point_closest_to_location`].
    #[must_use]
    pub fn closest_point_on<L: LineLike>(&self, line: &L) -> Self {
        line.point_closest_to_location(*self)
    }

    #[must_use]
    pub fn distance_from_line<L: LineLike>(&self, line: &L) -> f64 {
        line.distance_from_location(*self)
    }

    #[must_use]
    pub fn distance_squared_from_line<L: LineLike>(&self, line: &L) -> f64 {
        line.distance_squared_from_location(*self)
    }

    /// Whether this location lies on `line`, within its default thickness.
    #[must_use]
    pub fn is_on<L: LineLike>(&self, line: &L) -> bool {
        line.contains(*self)
    }
}

impl From<Point3> for Location {
    fn from(p: Point3) -> Self {
        Self(p)
    }
}

impl From<Location> for Point3 {
    fn from(l: Location) -> Self {
        l.0
    }
}

impl Add<Vect> for Location {
    type Output = Self;

    fn add(self, rhs: Vect) -> Self {
        Self(self.0 + rhs.as_vector3())
    }
}

impl AddAssign<Vect> for Location {
    fn add_assign(&mut self, rhs: Vect) {
        self.0 += rhs.as_vector3();
    }
}

impl Sub<Vect> for Location {
    type Output = Self;

    fn sub(self, rhs: Vect) -> Self {
        Self(self.0 - rhs.as_vector3())
    }
}

impl SubAssign<Vect> for Location {
    fn sub_assign(&mut self, rhs: Vect) {
        self.0 -= rhs.as_vector3();
    }
}

impl Sub for Location {
    type Output = Vect;

    fn sub(self, rhs: Self) -> Vect {
        Vect::from(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{BoundedRay, Line};
    use crate::math::{Direction, TOLERANCE};

    #[test]
    fn location_vect_arithmetic() {
        let a = Location::new(1.0, 2.0, 3.0);
        let b = Location::new(4.0, 6.0, 3.0);
        assert_eq!(b - a, Vect::new(3.0, 4.0, 0.0));
        assert_eq!(a + (b - a), b);
        assert!((a.distance_from(b) - 5.0).abs() < TOLERANCE);
        assert!((a.distance_squared_from(b) - 25.0).abs() < TOLERANCE);
    }

    #[test]
    fn interpolate_midpoint() {
        let m = Location::interpolate(Location::ORIGIN, Location::new(2.0, 0.0, -2.0), 0.5);
        assert!(m.equals_within(Location::new(1.0, 0.0, -1.0), TOLERANCE));
    }

    #[test]
    fn closest_point_on_line_likes() {
        let q = Location::new(2.0, 3.0, 0.0);
        let line = Line::new(Location::ORIGIN, Direction::LEFT);
        assert!(q.closest_point_on(&line).equals_within(Location::new(2.0, 0.0, 0.0), TOLERANCE));
        assert!((q.distance_from_line(&line) - 3.0).abs() < TOLERANCE);
        assert!((q.distance_squared_from_line(&line) - 9.0).abs() < TOLERANCE);
        assert!(!q.is_on(&line));
        assert!(Location::new(-4.0, 0.005, 0.0).is_on(&line));

        let segment = BoundedRay::new(Location::new(-1.0, 0.0, 0.0), Location::new(1.0, 0.0, 0.0));
        assert_eq!(q.closest_point_on(&segment), Location::new(1.0, 0.0, 0.0));
        assert!((q.distance_from_line(&segment) - 10.0_f64.sqrt()).abs() < TOLERANCE);
    }
}
