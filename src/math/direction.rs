use std::ops::{Mul, Neg};

use super::{Angle, Vect, Vector3, PARALLEL_TOLERANCE, TOLERANCE};

/// A unit-length 3D direction, or [`Direction::NONE`].
///
/// Every constructor normalises its input. Inputs that are zero-length or
/// not finite produce `NONE`, so a `Direction` never carries NaN.
///
/// Axis convention: `LEFT` is +X, `UP` is +Y and `FORWARD` is +Z.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Direction(Vector3);

impl Direction {
    pub const NONE: Self = Self(Vector3::new(0.0, 0.0, 0.0));
    pub const LEFT: Self = Self(Vector3::new(1.0, 0.0, 0.0));
    pub const RIGHT: Self = Self(Vector3::new(-1.0, 0.0, 0.0));
    pub const UP: Self = Self(Vector3::new(0.0, 1.0, 0.0));
    pub const DOWN: Self = Self(Vector3::new(0.0, -1.0, 0.0));
    pub const FORWARD: Self = Self(Vector3::new(0.0, 0.0, 1.0));
    pub const BACKWARD: Self = Self(Vector3::new(0.0, 0.0, -1.0));

    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::from_vector3(Vector3::new(x, y, z))
    }

    #[must_use]
    pub fn from_vector3(v: Vector3) -> Self {
        let len = v.norm();
        if len < TOLERANCE || !len.is_finite() {
            return Self::NONE;
        }
        Self(v / len)
    }

    /// The direction perpendicular to both inputs (`a × b`), or `NONE` if
    /// they are parallel.
    #[must_use]
    pub fn from_perpendicular(a: Self, b: Self) -> Self {
        Self::from_vector3(a.0.cross(&b.0))
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
    pub fn as_vector3(&self) -> &Vector3 {
        &self.0
    }

    #[must_use]
    pub fn to_vect(&self) -> Vect {
        Vect::from(self.0)
    }

    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0.x == 0.0 && self.0.y == 0.0 && self.0.z == 0.0
    }

    #[must_use]
    pub fn dot(&self, other: Self) -> f64 {
        self.0.dot(&other.0)
    }

    #[must_use]
    pub fn cross(&self, other: Self) -> Vect {
        Vect::from(self.0.cross(&other.0))
    }

    /// Unsigned angle in `[0°, 180°]`. Zero if either side is `NONE`.
    #[must_use]
    pub fn angle_to(&self, other: Self) -> Angle {
        if self.is_none() || other.is_none() {
            return Angle::ZERO;
        }
        Angle::from_cos(self.dot(other))
    }

    /// Signed angle from `self` to `other` about `reference_normal`.
    ///
    /// Positive when `(self × other) · reference_normal > 0`. When the
    /// rotation axis is perpendicular to `reference_normal` the sign is taken
    /// against a fixed perpendicular of the normal instead, so swapping the
    /// operands always negates the result. The one exception is 180°, where
    /// both orders return `+180°`.
    #[must_use]
    pub fn signed_angle_to(&self, other: Self, reference_normal: Self) -> Angle {
        let unsigned = self.angle_to(other);
        if unsigned.radians() >= Angle::HALF_CIRCLE.radians() - TOLERANCE {
            return Angle::HALF_CIRCLE;
        }
        let axis = self.cross(other);
        let perpendicular = reference_normal.any_perpendicular();
        let references = [
            reference_normal.to_vect(),
            perpendicular.to_vect(),
            reference_normal.cross(perpendicular),
            Self::LEFT.to_vect(),
            Self::UP.to_vect(),
            Self::FORWARD.to_vect(),
        ];
        let side = references
            .iter()
            .map(|r| axis.dot(*r))
            .find(|d| d.abs() > TOLERANCE)
            .unwrap_or(0.0);
        if side < 0.0 {
            -unsigned
        } else {
            unsigned
        }
    }

    #[must_use]
    pub fn is_parallel_to(&self, other: Self) -> bool {
        !self.is_none()
            && !other.is_none()
            && self.cross(other).length_squared() <= PARALLEL_TOLERANCE * PARALLEL_TOLERANCE
    }

    #[must_use]
    pub fn is_approximately_parallel_to(&self, other: Self, tolerance: Angle) -> bool {
        if self.is_none() || other.is_none() {
            return false;
        }
        let angle = self.angle_to(other);
        angle <= tolerance || angle >= Angle::HALF_CIRCLE - tolerance
    }

    #[must_use]
    pub fn is_orthogonal_to(&self, other: Self) -> bool {
        !self.is_none() && !other.is_none() && self.dot(other).abs() <= PARALLEL_TOLERANCE
    }

    #[must_use]
    pub fn is_approximately_orthogonal_to(&self, other: Self, tolerance: Angle) -> bool {
        if self.is_none() || other.is_none() {
            return false;
        }
        (self.angle_to(other) - Angle::QUARTER_CIRCLE).abs() <= tolerance
    }

    /// `target` or its reverse, whichever is closer to `self`. `None` when
    /// `self` is orthogonal to `target` or either side is `NONE`.
    #[must_use]
    pub fn parallelized_with(&self, target: Self) -> Option<Self> {
        if self.is_none() || target.is_none() || self.is_orthogonal_to(target) {
            return None;
        }
        Some(self.fast_parallelized_with(target))
    }

    /// Unchecked [`parallelized_with`](Self::parallelized_with); yields
    /// `NONE` on degenerate input.
    #[must_use]
    pub fn fast_parallelized_with(&self, target: Self) -> Self {
        let dot = self.dot(target);
        if dot > 0.0 {
            target
        } else if dot < 0.0 {
            -target
        } else {
            Self::NONE
        }
    }

    /// Component of `self` perpendicular to `other`, normalised. `None` when
    /// the two are parallel or either side is `NONE`.
    #[must_use]
    pub fn orthogonalized_against(&self, other: Self) -> Option<Self> {
        if self.is_none() || other.is_none() || self.is_parallel_to(other) {
            return None;
        }
        Some(self.fast_orthogonalized_against(other))
    }

    /// Unchecked [`orthogonalized_against`](Self::orthogonalized_against);
    /// yields `NONE` on degenerate input.
    #[must_use]
    pub fn fast_orthogonalized_against(&self, other: Self) -> Self {
        self.to_vect().orthogonalized_against(other).direction()
    }

    /// Some direction perpendicular to `self`; `NONE` stays `NONE`.
    #[must_use]
    pub fn any_perpendicular(&self) -> Self {
        let reference = if self.0.x.abs() < 0.9 {
            Self::LEFT
        } else {
            Self::UP
        };
        Self::from_perpendicular(*self, reference)
    }

    #[must_use]
    pub fn equals_within(&self, other: Self, tolerance: Angle) -> bool {
        if self.is_none() || other.is_none() {
            return self.is_none() && other.is_none();
        }
        self.angle_to(other) <= tolerance
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Direction {
    type Output = Vect;

    fn mul(self, rhs: f64) -> Vect {
        Vect::from(self.0 * rhs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn construction_normalises() {
        let d = Direction::new(0.0, 3.0, 4.0);
        assert_relative_eq!(d.y(), 0.6);
        assert_relative_eq!(d.z(), 0.8);
        assert_relative_eq!(d.as_vector3().norm(), 1.0);
    }

    #[test]
    fn degenerate_input_is_none() {
        assert!(Direction::new(0.0, 0.0, 0.0).is_none());
        assert!(Direction::new(f64::NAN, 1.0, 0.0).is_none());
        assert!(Direction::new(f64::INFINITY, 1.0, 0.0).is_none());
        assert!(Vect::ZERO.direction().is_none());
    }

    #[test]
    fn angle_with_none_is_zero() {
        assert_eq!(Direction::NONE.angle_to(Direction::UP), Angle::ZERO);
    }

    #[test]
    fn signed_angle_antisymmetric() {
        let a = Direction::LEFT;
        let b = Direction::UP;
        let n = Direction::FORWARD;
        assert_relative_eq!(a.signed_angle_to(b, n).degrees(), 90.0, epsilon = 1e-9);
        assert_relative_eq!(b.signed_angle_to(a, n).degrees(), -90.0, epsilon = 1e-9);
    }

    #[test]
    fn signed_angle_about_in_plane_normal_stays_antisymmetric() {
        // rotation axis FORWARD is perpendicular to the LEFT normal
        let n = Direction::LEFT;
        let ab = Direction::LEFT.signed_angle_to(Direction::UP, n);
        let ba = Direction::UP.signed_angle_to(Direction::LEFT, n);
        assert_relative_eq!(ab.abs().degrees(), 90.0, epsilon = 1e-9);
        assert_relative_eq!((ab + ba).radians(), 0.0, epsilon = 1e-12);

        let tilted = Direction::new(1.0, 1.0, 0.0);
        let ab = Direction::UP.signed_angle_to(tilted, Direction::UP);
        let ba = tilted.signed_angle_to(Direction::UP, Direction::UP);
        assert_relative_eq!(ab.abs().degrees(), 45.0, epsilon = 1e-9);
        assert_relative_eq!((ab + ba).radians(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn signed_angle_with_none_normal_stays_antisymmetric() {
        let ab = Direction::LEFT.signed_angle_to(Direction::UP, Direction::NONE);
        let ba = Direction::UP.signed_angle_to(Direction::LEFT, Direction::NONE);
        assert_relative_eq!((ab + ba).radians(), 0.0, epsilon = 1e-12);
        assert_relative_eq!(ab.abs().degrees(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn signed_angle_half_circle_agrees_both_ways() {
        let n = Direction::FORWARD;
        let ab = Direction::LEFT.signed_angle_to(Direction::RIGHT, n);
        let ba = Direction::RIGHT.signed_angle_to(Direction::LEFT, n);
        assert_eq!(ab, ba);
        assert_eq!(ab, Angle::HALF_CIRCLE);
    }

    #[test]
    fn parallel_and_orthogonal() {
        let d = Direction::new(1.0, 1.0, 1.0);
        assert!(d.is_parallel_to(-d));
        assert!(!d.is_parallel_to(Direction::UP));
        assert!(Direction::UP.is_orthogonal_to(Direction::LEFT));
        assert!(!Direction::NONE.is_parallel_to(Direction::NONE));
        let tilted = Direction::new(1.0, 0.001, 0.0);
        assert!(tilted.is_approximately_parallel_to(Direction::RIGHT, Angle::from_degrees(0.1)));
        assert!(tilted.is_approximately_orthogonal_to(Direction::FORWARD, Angle::from_degrees(0.1)));
    }

    #[test]
    fn parallelize_and_orthogonalize() {
        let d = Direction::new(1.0, -1.0, 0.0);
        let p = d.parallelized_with(Direction::RIGHT).unwrap();
        assert!(p.equals_within(Direction::LEFT, Angle::from_degrees(1e-3)));
        let o = d.orthogonalized_against(Direction::LEFT).unwrap();
        assert!(o.equals_within(Direction::DOWN, Angle::from_degrees(1e-3)));

        assert!(Direction::UP.parallelized_with(Direction::LEFT).is_none());
        assert!(Direction::UP.orthogonalized_against(Direction::DOWN).is_none());
        assert!(Direction::UP.fast_orthogonalized_against(Direction::DOWN).is_none());
    }

    #[test]
    fn any_perpendicular_is_perpendicular() {
        for d in [Direction::LEFT, Direction::UP, Direction::new(0.3, -0.2, 0.9)] {
            let p = d.any_perpendicular();
            assert!(!p.is_none());
            assert!(d.dot(p).abs() < TOLERANCE);
        }
    }
}
