use crate::math::{Direction, Location, Vect};

use super::{DistanceDomain, Line, LineLike, Plane, Ray};

/// A line segment from `start` to `end`.
///
/// Distances are measured in world units from `start`, so the legal range
/// is `[0, length]`. A zero-length segment has direction
/// [`Direction::NONE`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundedRay {
    start: Location,
    end: Location,
}

impl BoundedRay {
    #[must_use]
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub fn from_start_and_vect(start: Location, vect: Vect) -> Self {
        Self::new(start, start + vect)
    }

    #[must_use]
    pub fn end_point(&self) -> Location {
        self.end
    }

    #[must_use]
    pub fn middle_point(&self) -> Location {
        Location::interpolate(self.start, self.end, 0.5)
    }

    /// Displacement from start to end.
    #[must_use]
    pub fn vect(&self) -> Vect {
        self.end - self.start
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.vect().length()
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.vect().length_squared()
    }

    /// Same segment walked from the other end.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self::new(self.end, self.start)
    }

    #[must_use]
    pub fn to_line(&self) -> Line {
        Line::new(self.start, self.direction())
    }

    #[must_use]
    pub fn to_ray_from_start(&self) -> Ray {
        Ray::new(self.start, self.direction())
    }

    /// The ray continuing on past the end point.
    #[must_use]
    pub fn to_ray_from_end(&self) -> Ray {
        Ray::new(self.end, self.direction())
    }

    // ── resizing ──

    /// Scales the segment keeping `start` fixed.
    #[must_use]
    pub fn scaled_from_start(&self, factor: f64) -> Self {
        Self::from_start_and_vect(self.start, self.vect() * factor)
    }

    /// Scales the segment keeping its middle point fixed.
    #[must_use]
    pub fn scaled_from_middle(&self, factor: f64) -> Self {
        let middle = self.middle_point();
        let half = self.vect() * (factor * 0.5);
        Self::new(middle - half, middle + half)
    }

    /// Scales the segment keeping `end` fixed.
    #[must_use]
    pub fn scaled_from_end(&self, factor: f64) -> Self {
        Self::new(self.end - self.vect() * factor, self.end)
    }

    /// Moves `end` so the segment has the given length. A zero-length
    /// segment stays put.
    #[must_use]
    pub fn with_length(&self, length: f64) -> Self {
        Self::from_start_and_vect(self.start, self.direction() * length)
    }

    #[must_use]
    pub fn lengthened_by(&self, amount: f64) -> Self {
        self.with_length(self.length() + amount)
    }

    #[must_use]
    pub fn shortened_by(&self, amount: f64) -> Self {
        self.with_length(self.length() - amount)
    }

    #[must_use]
    pub fn with_max_length(&self, max: f64) -> Self {
        if self.length_squared() > max * max {
            self.with_length(max)
        } else {
            *self
        }
    }

    #[must_use]
    pub fn with_min_length(&self, min: f64) -> Self {
        if self.length_squared() < min * min {
            self.with_length(min)
        } else {
            *self
        }
    }
}

impl LineLike for BoundedRay {
    type Bounce = BoundedRay;
    type SplitHead = BoundedRay;
    type SplitTail = BoundedRay;

    fn start_point(&self) -> Location {
        self.start
    }

    fn direction(&self) -> Direction {
        self.vect().direction()
    }

    fn domain(&self) -> DistanceDomain {
        DistanceDomain::up_to(self.length())
    }

    /// Keeps the current length.
    fn with_start_and_direction(&self, start: Location, direction: Direction) -> Self {
        Self::from_start_and_vect(start, direction * self.length())
    }

    /// The remaining length after the crossing point, heading off the plane.
    fn bounced_off(&self, plane: &Plane) -> Option<BoundedRay> {
        let t = self.intersection_distance_with_plane(plane)?;
        let reflected = plane.reflection_of(self.direction())?;
        let hit = self.unbounded_location_at_distance(t);
        Some(Self::from_start_and_vect(hit, reflected * (self.length() - t)))
    }

    fn split_by(&self, plane: &Plane) -> Option<(BoundedRay, BoundedRay)> {
        let hit = self.intersection_with_plane(plane)?;
        Some((Self::new(self.start, hit), Self::new(hit, self.end)))
    }

    /// Both end points projected; never collapses to `None`.
    fn projected_on_to(&self, plane: &Plane) -> Option<Self> {
        Some(Self::new(
            plane.point_closest_to(self.start),
            plane.point_closest_to(self.end),
        ))
    }

    fn reflected_by(&self, plane: &Plane) -> Self {
        Self::new(
            plane.reflection_of_location(self.start),
            plane.reflection_of_location(self.end),
        )
    }
}
