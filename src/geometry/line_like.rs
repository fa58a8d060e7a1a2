use std::fmt::Debug;

use crate::math::intersect_3d::{line_line_intersect_3d, line_plane_intersect, LinePlaneRelation};
use crate::math::{Angle, Direction, Location, Vect, PARALLEL_TOLERANCE};

use super::{Plane, PlaneRelationship, DEFAULT_LINE_THICKNESS};

/// Range of distances along a line-like that lie on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceDomain {
    /// Smallest legal distance.
    pub min: f64,
    /// Largest legal distance.
    pub max: f64,
}

impl DistanceDomain {
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    pub const NON_NEGATIVE: Self = Self {
        min: 0.0,
        max: f64::INFINITY,
    };

    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[0, length]`.
    #[must_use]
    pub fn up_to(length: f64) -> Self {
        Self::new(0.0, length)
    }

    #[must_use]
    pub fn contains(&self, distance: f64) -> bool {
        distance >= self.min && distance <= self.max
    }

    #[must_use]
    pub fn clamp(&self, distance: f64) -> f64 {
        distance.max(self.min).min(self.max)
    }

    /// `Some(max - min)` when both ends are finite.
    #[must_use]
    pub fn length(&self) -> Option<f64> {
        (self.min.is_finite() && self.max.is_finite()).then_some(self.max - self.min)
    }
}

/// Distances along two line-likes at which they meet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionDistances {
    pub this_distance: f64,
    pub other_distance: f64,
}

impl IntersectionDistances {
    #[must_use]
    pub fn swapped(self) -> Self {
        Self {
            this_distance: self.other_distance,
            other_distance: self.this_distance,
        }
    }
}

/// Shared algebra of [`Line`](super::Line), [`Ray`](super::Ray) and
/// [`BoundedRay`](super::BoundedRay).
///
/// A line-like is `start_point + t * direction` for every `t` in its
/// [`domain`](Self::domain). Implementors supply the anchor, direction,
/// domain and the few operations whose result type differs per kind;
/// everything else is provided here and is generic over the other operand.
pub trait LineLike: Copy + Debug {
    /// Result of [`bounced_off`](Self::bounced_off).
    type Bounce: LineLike;
    /// Part before the plane in [`split_by`](Self::split_by).
    type SplitHead: LineLike;
    /// Part after the plane in [`split_by`](Self::split_by).
    type SplitTail: LineLike;

    fn start_point(&self) -> Location;

    fn direction(&self) -> Direction;

    fn domain(&self) -> DistanceDomain;

    /// Same kind and extent with a new anchor and direction.
    #[must_use]
    fn with_start_and_direction(&self, start: Location, direction: Direction) -> Self;

    /// Ricochet off `plane` from the crossing point, or `None` if this does
    /// not cross it.
    fn bounced_off(&self, plane: &Plane) -> Option<Self::Bounce>;

    /// The parts either side of `plane`, or `None` if this does not cross
    /// it.
    fn split_by(&self, plane: &Plane) -> Option<(Self::SplitHead, Self::SplitTail)>;

    // ── evaluation ──

    fn is_valid_distance(&self, distance: f64) -> bool {
        self.domain().contains(distance)
    }

    fn bind_distance(&self, distance: f64) -> f64 {
        self.domain().clamp(distance)
    }

    fn length(&self) -> Option<f64> {
        self.domain().length()
    }

    fn unbounded_location_at_distance(&self, distance: f64) -> Location {
        self.start_point() + self.direction() * distance
    }

    fn bounded_location_at_distance(&self, distance: f64) -> Location {
        self.unbounded_location_at_distance(self.bind_distance(distance))
    }

    fn location_at_distance(&self, distance: f64) -> Option<Location> {
        self.is_valid_distance(distance)
            .then(|| self.unbounded_location_at_distance(distance))
    }

    #[must_use]
    fn moved_by(&self, v: Vect) -> Self {
        self.with_start_and_direction(self.start_point() + v, self.direction())
    }

    // ── intersection ──

    /// Where the two infinite extensions meet, measured on both. `None` if
    /// they are parallel or skew.
    fn unbounded_intersection_distances<O: LineLike>(
        &self,
        other: &O,
    ) -> Option<IntersectionDistances> {
        line_line_intersect_3d(
            self.start_point(),
            self.direction(),
            other.start_point(),
            other.direction(),
        )
        .map(|(this_distance, other_distance)| IntersectionDistances {
            this_distance,
            other_distance,
        })
    }

    fn unbounded_intersection_distance<O: LineLike>(&self, other: &O) -> Option<f64> {
        self.unbounded_intersection_distances(other)
            .map(|d| d.this_distance)
    }

    /// Like [`unbounded_intersection_distances`](Self::unbounded_intersection_distances)
    /// but both distances must be legal for their own line-like.
    fn intersection_distances<O: LineLike>(&self, other: &O) -> Option<IntersectionDistances> {
        self.unbounded_intersection_distances(other).filter(|d| {
            self.is_valid_distance(d.this_distance) && other.is_valid_distance(d.other_distance)
        })
    }

    fn intersection_with<O: LineLike>(&self, other: &O) -> Option<Location> {
        self.intersection_distances(other)
            .map(|d| self.unbounded_location_at_distance(d.this_distance))
    }

    /// Midpoint of the closest approach if it is within `thickness`.
    fn intersection_within<O: LineLike>(&self, other: &O, thickness: f64) -> Option<Location> {
        let (a, b) = self.closest_distances_to(other);
        let on_self = self.unbounded_location_at_distance(a);
        let on_other = other.unbounded_location_at_distance(b);
        (on_self.distance_squared_from(on_other) <= thickness * thickness)
            .then(|| Location::interpolate(on_self, on_other, 0.5))
    }

    // ── angles ──

    fn angle_to<O: LineLike>(&self, other: &O) -> Angle {
        self.direction().angle_to(other.direction())
    }

    fn signed_angle_to<O: LineLike>(&self, other: &O, reference_normal: Direction) -> Angle {
        self.direction()
            .signed_angle_to(other.direction(), reference_normal)
    }

    fn angle_to_direction(&self, direction: Direction) -> Angle {
        self.direction().angle_to(direction)
    }

    /// Angle between the line-like and the plane surface.
    fn angle_to_plane(&self, plane: &Plane) -> Angle {
        plane.angle_to(self.direction())
    }

    // ── parallelism ──

    fn is_parallel_to<O: LineLike>(&self, other: &O) -> bool {
        self.direction().is_parallel_to(other.direction())
    }

    fn is_approximately_parallel_to<O: LineLike>(&self, other: &O, tolerance: Angle) -> bool {
        self.direction()
            .is_approximately_parallel_to(other.direction(), tolerance)
    }

    fn is_parallel_to_direction(&self, direction: Direction) -> bool {
        self.direction().is_parallel_to(direction)
    }

    fn is_approximately_parallel_to_direction(&self, direction: Direction, tolerance: Angle) -> bool {
        self.direction()
            .is_approximately_parallel_to(direction, tolerance)
    }

    fn is_parallel_to_plane(&self, plane: &Plane) -> bool {
        self.direction().is_orthogonal_to(plane.normal())
    }

    fn is_approximately_parallel_to_plane(&self, plane: &Plane, tolerance: Angle) -> bool {
        self.direction()
            .is_approximately_orthogonal_to(plane.normal(), tolerance)
    }

    /// Parallel and no more than two [`DEFAULT_LINE_THICKNESS`] apart.
    fn is_colinear_with<O: LineLike>(&self, other: &O) -> bool {
        self.is_colinear_within(other, DEFAULT_LINE_THICKNESS)
    }

    fn is_colinear_within<O: LineLike>(&self, other: &O, thickness: f64) -> bool {
        self.is_parallel_to(other) && self.distance_from(other) <= thickness * 2.0
    }

    fn is_approximately_colinear_with<O: LineLike>(
        &self,
        other: &O,
        thickness: f64,
        tolerance: Angle,
    ) -> bool {
        self.is_approximately_parallel_to(other, tolerance)
            && self.distance_from(other) <= thickness * 2.0
    }

    fn is_orthogonal_to<O: LineLike>(&self, other: &O) -> bool {
        self.direction().is_orthogonal_to(other.direction())
    }

    fn is_approximately_orthogonal_to<O: LineLike>(&self, other: &O, tolerance: Angle) -> bool {
        self.direction()
            .is_approximately_orthogonal_to(other.direction(), tolerance)
    }

    fn is_orthogonal_to_direction(&self, direction: Direction) -> bool {
        self.direction().is_orthogonal_to(direction)
    }

    fn is_approximately_orthogonal_to_direction(
        &self,
        direction: Direction,
        tolerance: Angle,
    ) -> bool {
        self.direction()
            .is_approximately_orthogonal_to(direction, tolerance)
    }

    fn is_orthogonal_to_plane(&self, plane: &Plane) -> bool {
        self.direction().is_parallel_to(plane.normal())
    }

    fn is_approximately_orthogonal_to_plane(&self, plane: &Plane, tolerance: Angle) -> bool {
        self.direction()
            .is_approximately_parallel_to(plane.normal(), tolerance)
    }

    // ── parallelization / orthogonalization ──

    /// Re-aimed along `direction` (or its reverse, whichever is closer).
    /// `None` if the current direction is orthogonal to it.
    #[must_use]
    fn parallelized_with_direction(&self, direction: Direction) -> Option<Self> {
        self.direction()
            .parallelized_with(direction)
            .map(|d| self.with_start_and_direction(self.start_point(), d))
    }

    #[must_use]
    fn fast_parallelized_with_direction(&self, direction: Direction) -> Self {
        self.with_start_and_direction(
            self.start_point(),
            self.direction().fast_parallelized_with(direction),
        )
    }

    /// Re-aimed perpendicular to `direction`. `None` if currently parallel
    /// to it.
    #[must_use]
    fn orthogonalized_against_direction(&self, direction: Direction) -> Option<Self> {
        self.direction()
            .orthogonalized_against(direction)
            .map(|d| self.with_start_and_direction(self.start_point(), d))
    }

    #[must_use]
    fn fast_orthogonalized_against_direction(&self, direction: Direction) -> Self {
        self.with_start_and_direction(
            self.start_point(),
            self.direction().fast_orthogonalized_against(direction),
        )
    }

    /// Re-aimed to run along `plane`. `None` if currently along the normal.
    #[must_use]
    fn parallelized_with_plane(&self, plane: &Plane) -> Option<Self> {
        plane
            .parallelization_of(self.direction())
            .map(|d| self.with_start_and_direction(self.start_point(), d))
    }

    #[must_use]
    fn fast_parallelized_with_plane(&self, plane: &Plane) -> Self {
        self.with_start_and_direction(
            self.start_point(),
            plane.fast_parallelization_of(self.direction()),
        )
    }

    /// Re-aimed along the plane normal. `None` if currently in the plane.
    #[must_use]
    fn orthogonalized_against_plane(&self, plane: &Plane) -> Option<Self> {
        plane
            .orthogonalization_of(self.direction())
            .map(|d| self.with_start_and_direction(self.start_point(), d))
    }

    #[must_use]
    fn fast_orthogonalized_against_plane(&self, plane: &Plane) -> Self {
        self.with_start_and_direction(
            self.start_point(),
            plane.fast_orthogonalization_of(self.direction()),
        )
    }

    // ── closest points ──

    /// Legal distances `(on self, on other)` of the closest approach.
    ///
    /// Minimises `|(p_a + s d_a) - (p_b + t d_b)|` over both domains by
    /// solving the unconstrained problem and then clamping `s`, `t`, `s` in
    /// turn. Parallel operands anchor the search at `s = 0`.
    fn closest_distances_to<O: LineLike>(&self, other: &O) -> (f64, f64) {
        let da = self.direction().to_vect();
        let db = other.direction().to_vect();
        let r = self.start_point() - other.start_point();
        let a = da.length_squared();
        let e = db.length_squared();
        let f = db.dot(r);

        if a == 0.0 && e == 0.0 {
            return (self.bind_distance(0.0), other.bind_distance(0.0));
        }
        if a == 0.0 {
            return (self.bind_distance(0.0), other.bind_distance(f / e));
        }
        let c = da.dot(r);
        if e == 0.0 {
            return (self.bind_distance(-c / a), other.bind_distance(0.0));
        }

        let b = da.dot(db);
        let denom = a * e - b * b;
        let s = if denom > PARALLEL_TOLERANCE {
            self.bind_distance((b * f - c * e) / denom)
        } else {
            self.bind_distance(0.0)
        };
        let t = other.bind_distance((b * s + f) / e);
        let s = self.bind_distance((b * t - c) / a);
        (s, t)
    }

    /// Point on `self` closest to `other`.
    fn point_closest_to<O: LineLike>(&self, other: &O) -> Location {
        let (s, _) = self.closest_distances_to(other);
        self.unbounded_location_at_distance(s)
    }

    /// Point on `other` closest to `self`.
    fn closest_point_on<O: LineLike>(&self, other: &O) -> Location {
        other.point_closest_to(self)
    }

    fn distance_squared_from<O: LineLike>(&self, other: &O) -> f64 {
        let (s, t) = self.closest_distances_to(other);
        self.unbounded_location_at_distance(s)
            .distance_squared_from(other.unbounded_location_at_distance(t))
    }

    fn distance_from<O: LineLike>(&self, other: &O) -> f64 {
        self.distance_squared_from(other).sqrt()
    }

    fn distance_at_point_closest_to(&self, location: Location) -> f64 {
        self.bind_distance((location - self.start_point()).dot(self.direction().to_vect()))
    }

    fn point_closest_to_location(&self, location: Location) -> Location {
        self.unbounded_location_at_distance(self.distance_at_point_closest_to(location))
    }

    fn distance_squared_from_location(&self, location: Location) -> f64 {
        self.point_closest_to_location(location)
            .distance_squared_from(location)
    }

    fn distance_from_location(&self, location: Location) -> f64 {
        self.distance_squared_from_location(location).sqrt()
    }

    /// Whether `location` is within [`DEFAULT_LINE_THICKNESS`] of the
    /// line-like.
    fn contains(&self, location: Location) -> bool {
        self.contains_within(location, DEFAULT_LINE_THICKNESS)
    }

    fn contains_within(&self, location: Location, thickness: f64) -> bool {
        self.distance_squared_from_location(location) <= thickness * thickness
    }

    // ── planes ──

    /// Distance along the infinite extension at which it crosses `plane`.
    fn unbounded_intersection_distance_with_plane(&self, plane: &Plane) -> Option<f64> {
        match line_plane_intersect(self.start_point(), self.direction(), plane) {
            LinePlaneRelation::Distance(t) => Some(t),
            LinePlaneRelation::Parallel | LinePlaneRelation::OnPlane => None,
        }
    }

    fn intersection_distance_with_plane(&self, plane: &Plane) -> Option<f64> {
        self.unbounded_intersection_distance_with_plane(plane)
            .filter(|&t| self.is_valid_distance(t))
    }

    fn intersection_with_plane(&self, plane: &Plane) -> Option<Location> {
        self.intersection_distance_with_plane(plane)
            .map(|t| self.unbounded_location_at_distance(t))
    }

    fn is_intersected_by_plane(&self, plane: &Plane) -> bool {
        self.intersection_distance_with_plane(plane).is_some()
    }

    /// Point on `self` closest to `plane`. The start point when parallel.
    fn point_closest_to_plane(&self, plane: &Plane) -> Location {
        match self.unbounded_intersection_distance_with_plane(plane) {
            Some(t) => self.bounded_location_at_distance(t),
            None => self.start_point(),
        }
    }

    /// Point on `plane` closest to `self`.
    fn closest_point_on_plane(&self, plane: &Plane) -> Location {
        plane.point_closest_to(self.point_closest_to_plane(plane))
    }

    /// Zero if crossing, otherwise the signed distance of the nearest point.
    fn signed_distance_from_plane(&self, plane: &Plane) -> f64 {
        if self.is_intersected_by_plane(plane) {
            return 0.0;
        }
        plane.signed_distance_from(self.point_closest_to_plane(plane))
    }

    fn distance_from_plane(&self, plane: &Plane) -> f64 {
        self.signed_distance_from_plane(plane).abs()
    }

    fn distance_squared_from_plane(&self, plane: &Plane) -> f64 {
        let d = self.signed_distance_from_plane(plane);
        d * d
    }

    fn relationship_to(&self, plane: &Plane) -> PlaneRelationship {
        let start = self.start_point();
        match line_plane_intersect(start, self.direction(), plane) {
            LinePlaneRelation::OnPlane => PlaneRelationship::Coplanar,
            LinePlaneRelation::Parallel => {
                if plane.faces_towards(start) {
                    PlaneRelationship::InFront
                } else {
                    PlaneRelationship::Behind
                }
            }
            LinePlaneRelation::Distance(t) if self.is_valid_distance(t) => {
                PlaneRelationship::Intersecting
            }
            LinePlaneRelation::Distance(t) => {
                if plane.faces_towards(self.bounded_location_at_distance(t)) {
                    PlaneRelationship::InFront
                } else {
                    PlaneRelationship::Behind
                }
            }
        }
    }

    /// Angle from the plane normal at the crossing point. `None` if the
    /// line-like does not cross `plane`.
    fn incident_angle_with(&self, plane: &Plane) -> Option<Angle> {
        if !self.is_intersected_by_plane(plane) {
            return None;
        }
        plane.incident_angle_with(self.direction())
    }

    fn fast_incident_angle_with(&self, plane: &Plane) -> Angle {
        plane.fast_incident_angle_with(self.direction())
    }

    /// Flattened on to `plane`. `None` when the direction is along the
    /// normal and the result would collapse to a point.
    #[must_use]
    fn projected_on_to(&self, plane: &Plane) -> Option<Self> {
        plane.parallelization_of(self.direction()).map(|d| {
            self.with_start_and_direction(plane.point_closest_to(self.start_point()), d)
        })
    }

    /// Mirror image through `plane`.
    #[must_use]
    fn reflected_by(&self, plane: &Plane) -> Self {
        self.with_start_and_direction(
            plane.reflection_of_location(self.start_point()),
            plane.fast_reflection_of(self.direction()),
        )
    }
}
