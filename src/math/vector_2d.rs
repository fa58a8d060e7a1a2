use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::{Angle, Real, Scalar};

/// Rotational sense of a turn between two 2D vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Clockwise,
    Anticlockwise,
    Colinear,
}

impl Orientation {
    /// Classifies the sign of a 2D cross product.
    #[must_use]
    pub fn from_cross<T: Scalar>(cross: T) -> Self {
        match cross.signum_or_zero() {
            1 => Self::Anticlockwise,
            -1 => Self::Clockwise,
            _ => Self::Colinear,
        }
    }
}

/// A 2D vector over any [`Scalar`] component type, stored as a nalgebra
/// column vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2<T>(nalgebra::Vector2<T>);

impl<T: Scalar> Vector2<T> {
    #[must_use]
    pub fn new(x: T, y: T) -> Self {
        Self(nalgebra::Vector2::new(x, y))
    }

    #[must_use]
    pub fn zero() -> Self {
        Self(nalgebra::Vector2::zeros())
    }

    #[must_use]
    pub fn x(&self) -> T {
        self.0.x
    }

    #[must_use]
    pub fn y(&self) -> T {
        self.0.y
    }

    #[must_use]
    pub fn as_nalgebra(&self) -> &nalgebra::Vector2<T> {
        &self.0
    }

    #[must_use]
    pub fn dot(self, other: Self) -> T {
        self.0.dot(&other.0)
    }

    /// Z component of the 3D cross product; positive when `other` lies
    /// anticlockwise of `self`.
    ///
    /// Computed in `T`, so large integer components can overflow; see
    /// [`Self::cross_wide`].
    #[must_use]
    pub fn cross(self, other: Self) -> T {
        self.0.perp(&other.0)
    }

    /// Cross product computed in [`Scalar::Wide`], exact for any `i32` or
    /// `i64` components.
    #[must_use]
    pub fn cross_wide(self, other: Self) -> T::Wide {
        let a = self.0.map(Scalar::widen);
        let b = other.0.map(Scalar::widen);
        a.perp(&b)
    }

    #[must_use]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[must_use]
    pub fn distance_squared_from(self, other: Self) -> T {
        (self - other).length_squared()
    }

    #[must_use]
    pub fn component_mul(self, other: Self) -> Self {
        Self(self.0.component_mul(&other.0))
    }

    #[must_use]
    pub fn component_div(self, other: Self) -> Self {
        Self(self.0.component_div(&other.0))
    }

    #[must_use]
    pub fn absolute(self) -> Self {
        Self(self.0.map(Scalar::abs))
    }

    /// Per-component clamp into the box spanned by `min` and `max`.
    ///
    /// The corners may be given in any order.
    #[must_use]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        let lo = min.0.zip_map(&max.0, Scalar::min_of);
        let hi = min.0.zip_map(&max.0, Scalar::max_of);
        Self(self.0.zip_map(&lo, Scalar::max_of).zip_map(&hi, Scalar::min_of))
    }

    /// Sense of the turn from `self` to `other`. Exact for integer
    /// components of any magnitude.
    #[must_use]
    pub fn orientation_to(self, other: Self) -> Orientation {
        Orientation::from_cross(self.cross_wide(other))
    }

    /// Sense of the path `a -> b -> c`.
    #[must_use]
    pub fn orientation_of(a: Self, b: Self, c: Self) -> Orientation {
        (b - a).orientation_to(c - b)
    }

    /// Returns `None` if any component is exactly zero.
    #[must_use]
    pub fn reciprocal(self) -> Option<Self> {
        if self.0.iter().any(|c| *c == T::ZERO) {
            return None;
        }
        Some(Self(self.0.map(|c| T::ONE / c)))
    }
}

impl<T: Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Real> Vector2<T> {
    /// Vector of the given length pointing along `angle`, measured
    /// anticlockwise from +X.
    #[must_use]
    pub fn from_polar(angle: Angle, length: T) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(T::from_f64(cos) * length, T::from_f64(sin) * length)
    }

    #[must_use]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    #[must_use]
    pub fn distance_from(self, other: Self) -> T {
        (self - other).length()
    }

    /// Angle anticlockwise from +X in `[0°, 360°)`, or `None` for the zero
    /// vector.
    #[must_use]
    pub fn polar_angle(self) -> Option<Angle> {
        if self.0.x == T::ZERO && self.0.y == T::ZERO {
            return None;
        }
        Some(Angle::from_radians(self.0.y.atan2(self.0.x).to_f64()).normalized())
    }

    /// Unsigned angle in `[0°, 180°]`; zero if either vector has no length.
    #[must_use]
    pub fn angle_to(self, other: Self) -> Angle {
        let denom = (self.length() * other.length()).to_f64();
        if denom == 0.0 {
            return Angle::ZERO;
        }
        Angle::from_cos(self.dot(other).to_f64() / denom)
    }

    /// Rotates anticlockwise about the origin.
    #[must_use]
    pub fn rotated_by(self, angle: Angle) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (sin, cos) = (T::from_f64(sin), T::from_f64(cos));
        let rotation = nalgebra::Matrix2::new(cos, -sin, sin, cos);
        Self(rotation * self.0)
    }

    /// Rotates anticlockwise about `pivot`.
    #[must_use]
    pub fn rotated_around(self, pivot: Self, angle: Angle) -> Self {
        (self - pivot).rotated_by(angle) + pivot
    }

    /// Unclamped linear interpolation: `distance` of 0 gives `start`, 1 gives
    /// `end`.
    #[must_use]
    pub fn interpolate(start: Self, end: Self, distance: T) -> Self {
        start + (end - start) * distance
    }

    /// Same direction with a new length. The zero vector is treated as
    /// pointing along +X.
    #[must_use]
    pub fn with_length(self, length: T) -> Self {
        Self::from_polar(self.polar_angle().unwrap_or(Angle::ZERO), length)
    }

    #[must_use]
    pub fn lengthened_by(self, amount: T) -> Self {
        self.with_length(self.length() + amount)
    }

    #[must_use]
    pub fn shortened_by(self, amount: T) -> Self {
        self.with_length(self.length() - amount)
    }

    #[must_use]
    pub fn with_max_length(self, max: T) -> Self {
        if self.length_squared() > max * max {
            self.with_length(max)
        } else {
            self
        }
    }

    #[must_use]
    pub fn with_min_length(self, min: T) -> Self {
        if self.length_squared() < min * min {
            self.with_length(min)
        } else {
            self
        }
    }

    #[must_use]
    pub fn equals_within(self, other: Self, tolerance: T) -> bool {
        (self.0 - other.0).iter().all(|c| c.abs() <= tolerance)
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self(self.0 * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self(self.0 / rhs)
    }
}

impl<T: Scalar> From<(T, T)> for Vector2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<nalgebra::Vector2<T>> for Vector2<T> {
    fn from(v: nalgebra::Vector2<T>) -> Self {
        Self(v)
    }
}

impl<T: Scalar> From<Vector2<T>> for nalgebra::Vector2<T> {
    fn from(v: Vector2<T>) -> Self {
        v.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    // ── arithmetic ──

    #[test]
    fn integer_arithmetic() {
        let a = Vector2::new(3_i32, -4);
        let b = Vector2::new(1_i32, 2);
        assert_eq!(a + b, Vector2::new(4, -2));
        assert_eq!(a - b, Vector2::new(2, -6));
        assert_eq!(-a, Vector2::new(-3, 4));
        assert_eq!(a * 2, Vector2::new(6, -8));
        assert_eq!(a.component_mul(b), Vector2::new(3, -8));
        assert_eq!(a.dot(b), -5);
        assert_eq!(a.cross(b), 10);
        assert_eq!(a.length_squared(), 25);
    }

    #[test]
    fn float_division() {
        let a = v(3.0, -4.0);
        assert_eq!(a / 2.0, v(1.5, -2.0));
        assert_eq!(a.component_div(v(3.0, 2.0)), v(1.0, -2.0));
        assert_relative_eq!(a.length(), 5.0);
    }

    #[test]
    fn clamp_accepts_unordered_corners() {
        let c = v(5.0, -5.0).clamp(v(1.0, 1.0), v(-1.0, -1.0));
        assert_eq!(c, v(1.0, -1.0));
        assert_eq!(Vector2::new(3_i64, 0).clamp(Vector2::new(0, 1), Vector2::new(2, 4)), Vector2::new(2, 1));
    }

    #[test]
    fn reciprocal_rejects_zero_component() {
        assert_eq!(v(2.0, -4.0).reciprocal(), Some(v(0.5, -0.25)));
        assert_eq!(v(0.0, 4.0).reciprocal(), None);
        assert_eq!(Vector2::new(1_i32, 0).reciprocal(), None);
    }

    #[test]
    fn converts_to_and_from_nalgebra() {
        let n: nalgebra::Vector2<f64> = v(1.5, -2.0).into();
        assert_eq!(n, nalgebra::Vector2::new(1.5, -2.0));
        let back = Vector2::from(n * 2.0);
        assert_eq!((back.x(), back.y()), (3.0, -4.0));
        assert_eq!(back.as_nalgebra(), &nalgebra::Vector2::new(3.0, -4.0));
        assert_eq!(Vector2::<i32>::default(), Vector2::zero());
    }

    // ── orientation ──

    #[test]
    fn orientation_three_states() {
        assert_eq!(v(1.0, 0.0).orientation_to(v(0.0, 1.0)), Orientation::Anticlockwise);
        assert_eq!(v(1.0, 0.0).orientation_to(v(0.0, -1.0)), Orientation::Clockwise);
        assert_eq!(v(1.0, 0.0).orientation_to(v(-3.0, 0.0)), Orientation::Colinear);
        assert_eq!(
            Vector2::orientation_of(v(0.0, 0.0), v(1.0, 0.0), v(1.0, 1.0)),
            Orientation::Anticlockwise
        );
    }

    #[test]
    fn orientation_of_large_integer_vectors() {
        let a = Vector2::new(60_000_i32, 0);
        let b = Vector2::new(0_i32, 60_000);
        assert_eq!(a.cross_wide(b), 3_600_000_000_i64);
        assert_eq!(a.orientation_to(b), Orientation::Anticlockwise);
        assert_eq!(b.orientation_to(a), Orientation::Clockwise);
        let far = Vector2::new(i64::MAX, 1);
        assert_eq!(far.orientation_to(Vector2::new(i64::MAX, 2)), Orientation::Anticlockwise);
    }

    // ── angles ──

    #[test]
    fn polar_angle_of_zero_is_none() {
        assert_eq!(v(0.0, 0.0).polar_angle(), None);
        assert_relative_eq!(v(0.0, -2.0).polar_angle().unwrap().degrees(), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn angle_to_zero_vector_is_zero() {
        assert_eq!(v(0.0, 0.0).angle_to(v(1.0, 1.0)), Angle::ZERO);
        assert_relative_eq!(v(1.0, 0.0).angle_to(v(-1.0, 1.0)).degrees(), 135.0, epsilon = 1e-9);
    }

    #[test]
    fn rotation_about_pivot() {
        let r = v(2.0, 1.0).rotated_around(v(1.0, 1.0), Angle::QUARTER_CIRCLE);
        assert!(r.equals_within(v(1.0, 2.0), 1e-12));
        let r = v(1.0, 0.0).rotated_by(Angle::from_degrees(-90.0));
        assert!(r.equals_within(v(0.0, -1.0), 1e-12));
    }

    #[test]
    fn interpolate_is_unclamped() {
        let a = v(0.0, 0.0);
        let b = v(2.0, 4.0);
        assert_eq!(Vector2::interpolate(a, b, 0.5), v(1.0, 2.0));
        assert_eq!(Vector2::interpolate(a, b, 2.0), v(4.0, 8.0));
        assert_eq!(Vector2::interpolate(a, b, -1.0), v(-2.0, -4.0));
    }

    // ── length adjustment ──

    #[test]
    fn length_adjustment_family() {
        let a = v(3.0, 4.0);
        assert!(a.with_length(10.0).equals_within(v(6.0, 8.0), 1e-12));
        assert!(a.lengthened_by(5.0).equals_within(v(6.0, 8.0), 1e-12));
        assert!(a.shortened_by(2.5).equals_within(v(1.5, 2.0), 1e-12));
        assert!(a.with_max_length(1.0).equals_within(v(0.6, 0.8), 1e-12));
        assert_eq!(a.with_max_length(10.0), a);
        assert!(a.with_min_length(10.0).equals_within(v(6.0, 8.0), 1e-12));
        assert_eq!(a.with_min_length(1.0), a);
    }

    #[test]
    fn with_length_on_zero_vector_points_along_x() {
        assert!(v(0.0, 0.0).with_length(2.0).equals_within(v(2.0, 0.0), 1e-12));
    }

    #[test]
    fn single_precision_components() {
        let a = Vector2::new(3.0_f32, 4.0);
        assert!((a.length() - 5.0).abs() < 1e-6);
    }
}
