use crate::math::{Direction, Location};

use super::{BoundedRay, DistanceDomain, Line, LineLike, Plane};

/// A half-line from a start point.
///
/// The parametric form is: `P(t) = start + t * direction` for `t >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    start: Location,
    direction: Direction,
}

impl Ray {
    #[must_use]
    pub fn new(start: Location, direction: Direction) -> Self {
        Self { start, direction }
    }

    /// Same start, opposite direction.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.start, -self.direction)
    }

    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::new(self.start, self.direction)
    }

    /// The first `length` units of the ray.
    #[must_use]
    pub fn to_bounded_ray(&self, length: f64) -> BoundedRay {
        BoundedRay::from_start_and_vect(self.start, self.direction * length)
    }
}

impl LineLike for Ray {
    type Bounce = Ray;
    type SplitHead = BoundedRay;
    type SplitTail = Ray;

    fn start_point(&self) -> Location {
        self.start
    }

    fn direction(&self) -> Direction {
        self.direction
    }

    fn domain(&self) -> DistanceDomain {
        DistanceDomain::NON_NEGATIVE
    }

    fn with_start_and_direction(&self, start: Location, direction: Direction) -> Self {
        Self::new(start, direction)
    }

    fn bounced_off(&self, plane: &Plane) -> Option<Ray> {
        let hit = self.intersection_with_plane(plane)?;
        let reflected = plane.reflection_of(self.direction)?;
        Some(Ray::new(hit, reflected))
    }

    /// The segment up to the crossing point and the ray continuing past it.
    fn split_by(&self, plane: &Plane) -> Option<(BoundedRay, Ray)> {
        let hit = self.intersection_with_plane(plane)?;
        Some((BoundedRay::new(self.start, hit), Ray::new(hit, self.direction)))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::PlaneRelationship;
    use approx::assert_relative_eq;

    fn p(x: f64, y: f64, z: f64) -> Location {
        Location::new(x, y, z)
    }

    #[test]
    fn negative_distances_are_illegal() {
        let r = Ray::new(Location::ORIGIN, Direction::FORWARD);
        assert!(r.is_valid_distance(0.0));
        assert!(!r.is_valid_distance(-0.1));
        assert_eq!(r.location_at_distance(-1.0), None);
        assert_eq!(r.bounded_location_at_distance(-5.0), Location::ORIGIN);
        assert_eq!(r.length(), None);
    }

    #[test]
    fn intersection_requires_both_distances_legal() {
        let up = Ray::new(p(0.0, 10.0, 0.0), Direction::UP);
        let right = Ray::new(p(10.0, 0.0, 0.0), Direction::RIGHT);
        // the lines meet at the origin, which lies behind the upward ray
        assert!(up.unbounded_intersection_distance(&right).is_some());
        assert!(up.intersection_with(&right).is_none());

        let down = up.flipped();
        let hit = down.intersection_with(&right).unwrap();
        assert!(hit.equals_within(Location::ORIGIN, 1e-9));
        assert!(right.intersection_with(&down).unwrap().equals_within(hit, 1e-9));
    }

    #[test]
    fn ray_and_line_mix() {
        let ray = Ray::new(p(0.0, 10.0, 0.0), Direction::UP);
        let line = Line::new(p(10.0, 0.0, 0.0), Direction::RIGHT);
        assert!(ray.intersection_with(&line).is_none());
        assert!(line.intersection_with(&ray).is_none());
        assert!(ray.to_line().intersection_with(&line).is_some());
    }

    #[test]
    fn closest_point_is_clamped_to_start() {
        let r = Ray::new(Location::ORIGIN, Direction::LEFT);
        assert_eq!(r.point_closest_to_location(p(-5.0, 1.0, 0.0)), Location::ORIGIN);
        let other = Ray::new(p(-3.0, 4.0, 0.0), Direction::RIGHT);
        assert_relative_eq!(r.distance_from(&other), 5.0, epsilon = 1e-9);
        assert_relative_eq!(other.distance_from(&r), 5.0, epsilon = 1e-9);
    }

    #[test]
    fn plane_relationship_depends_on_heading() {
        let floor = Plane::new(Direction::UP, Location::ORIGIN).unwrap();
        let falling = Ray::new(p(0.0, 4.0, 0.0), Direction::DOWN);
        let rising = Ray::new(p(0.0, 4.0, 0.0), Direction::UP);
        assert_eq!(falling.relationship_to(&floor), PlaneRelationship::Intersecting);
        assert_eq!(rising.relationship_to(&floor), PlaneRelationship::InFront);
        assert_relative_eq!(rising.signed_distance_from_plane(&floor), 4.0);
        assert_relative_eq!(falling.signed_distance_from_plane(&floor), 0.0);
        assert_eq!(rising.point_closest_to_plane(&floor), p(0.0, 4.0, 0.0));
        assert!(falling.closest_point_on_plane(&floor).equals_within(Location::ORIGIN, 1e-9));
    }

    #[test]
    fn split_gives_segment_and_remaining_ray() {
        let floor = Plane::new(Direction::UP, Location::ORIGIN).unwrap();
        let falling = Ray::new(p(1.0, 4.0, 0.0), Direction::DOWN);
        let (head, tail) = falling.split_by(&floor).unwrap();
        assert_relative_eq!(head.length(), 4.0, epsilon = 1e-9);
        assert!(tail.start_point().equals_within(p(1.0, 0.0, 0.0), 1e-9));
        assert_eq!(tail.direction(), Direction::DOWN);
        assert!(falling.flipped().split_by(&floor).is_none());
        assert!(falling.flipped().bounced_off(&floor).is_none());

        let bounced = falling.bounced_off(&floor).unwrap();
        assert!(bounced.direction().equals_within(Direction::UP, crate::math::Angle::from_degrees(1e-3)));
    }

    #[test]
    fn to_bounded_ray_takes_prefix() {
        let r = Ray::new(p(1.0, 0.0, 0.0), Direction::FORWARD);
        let b = r.to_bounded_ray(3.0);
        assert!(b.end_point().equals_within(p(1.0, 0.0, 3.0), 1e-12));
    }
}
