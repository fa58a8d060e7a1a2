use crate::error::{GeometryError, Result};
use crate::math::intersect_3d::{plane_plane_intersect, PlanePairRelation};
use crate::math::{Angle, Direction, Location, Vect, PARALLEL_TOLERANCE, TOLERANCE};

use super::{DimensionConverter, Line, LineLike};

/// Where an object sits relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneRelationship {
    /// Entirely on the side the normal points towards.
    InFront,
    /// Entirely on the side opposite the normal.
    Behind,
    /// Crosses or touches the plane at a single point.
    Intersecting,
    /// Lies in the plane.
    Coplanar,
}

/// An infinite plane in 3D space.
///
/// Stored as a unit normal and the point of the plane closest to the origin,
/// so two planes built from different points on the same surface compare
/// equal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Direction,
    point_closest_to_origin: Location,
}

impl Plane {
    /// Creates a plane through `point` facing `normal`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `normal` is [`Direction::NONE`].
    pub fn new(normal: Direction, point: Location) -> Result<Self> {
        if normal.is_none() {
            return Err(GeometryError::ZeroVector.into());
        }
        let offset = point.as_vect().dot(normal.to_vect());
        Ok(Self {
            normal,
            point_closest_to_origin: Location::ORIGIN + normal * offset,
        })
    }

    /// Creates a plane through `origin` from an unnormalised normal vector.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the normal is zero-length.
    pub fn from_normal(origin: Location, normal: Vect) -> Result<Self> {
        Self::new(normal.direction(), origin)
    }

    /// Creates the plane `normal · p = offset`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if `normal` is [`Direction::NONE`].
    pub fn from_normal_and_offset(normal: Direction, offset: f64) -> Result<Self> {
        Self::new(normal, Location::ORIGIN + normal * offset)
    }

    /// Creates the plane through three points, facing `(b - a) × (c - a)`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the points are colinear or
    /// coincident.
    pub fn from_triangle(a: Location, b: Location, c: Location) -> Result<Self> {
        let normal = (b - a).cross(c - a).direction();
        if normal.is_none() {
            tracing::debug!(?a, ?b, ?c, "cannot build plane from colinear points");
            return Err(GeometryError::Degenerate("plane points are colinear".into()).into());
        }
        Self::new(normal, a)
    }

    #[must_use]
    pub fn normal(&self) -> Direction {
        self.normal
    }

    #[must_use]
    pub fn point_closest_to_origin(&self) -> Location {
        self.point_closest_to_origin
    }

    /// Signed distance of the plane from the origin along its normal.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.point_closest_to_origin.as_vect().dot(self.normal.to_vect())
    }

    /// Same surface, opposite normal.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            point_closest_to_origin: self.point_closest_to_origin,
        }
    }

    #[must_use]
    pub fn moved_by(&self, v: Vect) -> Self {
        let offset = v.dot(self.normal.to_vect());
        Self {
            normal: self.normal,
            point_closest_to_origin: self.point_closest_to_origin + self.normal * offset,
        }
    }

    // ── locations ──

    /// Positive on the side the normal points towards.
    #[must_use]
    pub fn signed_distance_from(&self, location: Location) -> f64 {
        (location - self.point_closest_to_origin).dot(self.normal.to_vect())
    }

    #[must_use]
    pub fn distance_from(&self, location: Location) -> f64 {
        self.signed_distance_from(location).abs()
    }

    #[must_use]
    pub fn distance_squared_from(&self, location: Location) -> f64 {
        let d = self.signed_distance_from(location);
        d * d
    }

    /// Orthogonal projection of `location` on to the plane.
    #[must_use]
    pub fn point_closest_to(&self, location: Location) -> Location {
        location - self.normal * self.signed_distance_from(location)
    }

    /// Mirror image of `location` through the plane.
    #[must_use]
    pub fn reflection_of_location(&self, location: Location) -> Location {
        location - self.normal * (2.0 * self.signed_distance_from(location))
    }

    #[must_use]
    pub fn contains(&self, location: Location, thickness: f64) -> bool {
        self.distance_from(location) <= thickness
    }

    #[must_use]
    pub fn faces_towards(&self, location: Location) -> bool {
        self.signed_distance_from(location) > 0.0
    }

    #[must_use]
    pub fn faces_away_from(&self, location: Location) -> bool {
        self.signed_distance_from(location) < 0.0
    }

    #[must_use]
    pub fn relationship_to(&self, location: Location) -> PlaneRelationship {
        let d = self.signed_distance_from(location);
        if d > TOLERANCE {
            PlaneRelationship::InFront
        } else if d < -TOLERANCE {
            PlaneRelationship::Behind
        } else {
            PlaneRelationship::Coplanar
        }
    }

    // ── directions ──

    /// Angle between `direction` and the plane surface, in `[0°, 90°]`.
    /// Zero for [`Direction::NONE`].
    #[must_use]
    pub fn angle_to(&self, direction: Direction) -> Angle {
        Angle::from_sin(self.normal.dot(direction).abs())
    }

    /// Like [`angle_to`](Self::angle_to) but negative when `direction`
    /// points behind the plane.
    #[must_use]
    pub fn signed_angle_to(&self, direction: Direction) -> Angle {
        Angle::from_sin(self.normal.dot(direction))
    }

    /// Dihedral angle between two planes, in `[0°, 90°]`.
    #[must_use]
    pub fn angle_to_plane(&self, other: &Self) -> Angle {
        let angle = self.normal.angle_to(other.normal);
        if angle > Angle::QUARTER_CIRCLE {
            Angle::HALF_CIRCLE - angle
        } else {
            angle
        }
    }

    /// Angle between `direction` and the plane normal, folded into
    /// `[0°, 90°)`. `None` when the direction grazes the plane.
    #[must_use]
    pub fn incident_angle_with(&self, direction: Direction) -> Option<Angle> {
        let perpendicularity = self.normal.dot(direction).abs();
        if perpendicularity < PARALLEL_TOLERANCE {
            return None;
        }
        Some(Angle::from_cos(perpendicularity))
    }

    #[must_use]
    pub fn fast_incident_angle_with(&self, direction: Direction) -> Angle {
        Angle::from_cos(self.normal.dot(direction).abs())
    }

    /// `direction` bounced off the plane. `None` when it grazes the plane or
    /// is [`Direction::NONE`].
    #[must_use]
    pub fn reflection_of(&self, direction: Direction) -> Option<Direction> {
        if direction.is_none() || self.normal.dot(direction).abs() < PARALLEL_TOLERANCE {
            return None;
        }
        Some(self.fast_reflection_of(direction))
    }

    /// Unchecked [`reflection_of`](Self::reflection_of): `d - 2(n·d)n`.
    #[must_use]
    pub fn fast_reflection_of(&self, direction: Direction) -> Direction {
        (direction.to_vect() - self.normal * (2.0 * self.normal.dot(direction))).direction()
    }

    /// `direction` flattened into the plane. `None` when it is parallel to
    /// the normal.
    #[must_use]
    pub fn parallelization_of(&self, direction: Direction) -> Option<Direction> {
        direction.orthogonalized_against(self.normal)
    }

    #[must_use]
    pub fn fast_parallelization_of(&self, direction: Direction) -> Direction {
        direction.fast_orthogonalized_against(self.normal)
    }

    /// The normal or its reverse, whichever is closer to `direction`. `None`
    /// when `direction` lies in the plane.
    #[must_use]
    pub fn orthogonalization_of(&self, direction: Direction) -> Option<Direction> {
        direction.parallelized_with(self.normal)
    }

    #[must_use]
    pub fn fast_orthogonalization_of(&self, direction: Direction) -> Direction {
        direction.fast_parallelized_with(self.normal)
    }

    /// Component of `v` lying in the plane.
    #[must_use]
    pub fn projection_of_vect(&self, v: Vect) -> Vect {
        v.orthogonalized_against(self.normal)
    }

    // ── planes ──

    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal.is_parallel_to(other.normal)
    }

    /// The line where two planes meet, or `None` if they are parallel or
    /// coincident.
    #[must_use]
    pub fn intersection_with(&self, other: &Self) -> Option<Line> {
        match plane_plane_intersect(self, other) {
            PlanePairRelation::IntersectionLine(line) => Some(line),
            PlanePairRelation::Parallel { .. } | PlanePairRelation::Coincident => None,
        }
    }

    // ── line-likes (mirrors of the LineLike plane methods) ──

    #[must_use]
    pub fn signed_distance_from_line<L: LineLike>(&self, line: &L) -> f64 {
        line.signed_distance_from_plane(self)
    }

    #[must_use]
    pub fn distance_from_line<L: LineLike>(&self, line: &L) -> f64 {
        line.distance_from_plane(self)
    }

    #[must_use]
    pub fn distance_squared_from_line<L: LineLike>(&self, line: &L) -> f64 {
        line.distance_squared_from_plane(self)
    }

    /// Point on the plane closest to `line`.
    #[must_use]
    pub fn point_closest_to_line<L: LineLike>(&self, line: &L) -> Location {
        line.closest_point_on_plane(self)
    }

    /// Point on `line` closest to the plane.
    #[must_use]
    pub fn closest_point_on_line<L: LineLike>(&self, line: &L) -> Location {
        line.point_closest_to_plane(self)
    }

    #[must_use]
    pub fn intersection_with_line<L: LineLike>(&self, line: &L) -> Option<Location> {
        line.intersection_with_plane(self)
    }

    #[must_use]
    pub fn is_intersected_by<L: LineLike>(&self, line: &L) -> bool {
        line.is_intersected_by_plane(self)
    }

    #[must_use]
    pub fn relationship_to_line<L: LineLike>(&self, line: &L) -> PlaneRelationship {
        line.relationship_to(self)
    }

    #[must_use]
    pub fn incident_angle_with_line<L: LineLike>(&self, line: &L) -> Option<Angle> {
        line.incident_angle_with(self)
    }

    #[must_use]
    pub fn projection_of<L: LineLike>(&self, line: &L) -> Option<L> {
        line.projected_on_to(self)
    }

    #[must_use]
    pub fn reflection_of_line<L: LineLike>(&self, line: &L) -> L {
        line.reflected_by(self)
    }

    #[must_use]
    pub fn split<L: LineLike>(&self, line: &L) -> Option<(L::SplitHead, L::SplitTail)> {
        line.split_by(self)
    }

    // ── frames ──

    /// A converter whose origin is the point closest to the world origin and
    /// whose Z basis is the plane normal.
    #[must_use]
    pub fn create_dimension_converter(&self) -> DimensionConverter {
        let x_basis = self.normal.any_perpendicular();
        DimensionConverter::from_bases(
            x_basis,
            Direction::from_perpendicular(self.normal, x_basis),
            self.normal,
            self.point_closest_to_origin,
        )
    }

    /// A converter anchored at `origin` (projected on to the plane) whose X
    /// basis is `x_axis` flattened into the plane.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if `x_axis` is parallel to the
    /// normal or is [`Direction::NONE`].
    pub fn create_dimension_converter_at(
        &self,
        origin: Location,
        x_axis: Direction,
    ) -> Result<DimensionConverter> {
        let x_basis = self.parallelization_of(x_axis).ok_or_else(|| {
            GeometryError::Degenerate("x axis is perpendicular to the plane".into())
        })?;
        Ok(DimensionConverter::from_bases(
            x_basis,
            Direction::from_perpendicular(self.normal, x_basis),
            self.normal,
            self.point_closest_to(origin),
        ))
    }
}
