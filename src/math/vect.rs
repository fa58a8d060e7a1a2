use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use super::{Direction, Vector3};

/// A 3D displacement: a direction with a magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vect(Vector3);

impl Vect {
    pub const ZERO: Self = Self(Vector3::new(0.0, 0.0, 0.0));

    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Vector3::new(x, y, z))
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
    pub fn length(&self) -> f64 {
        self.0.norm()
    }

    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.0.norm_squared()
    }

    /// Unit direction, or [`Direction::NONE`] for the zero vector.
    #[must_use]
    pub fn direction(&self) -> Direction {
        Direction::from_vector3(self.0)
    }

    #[must_use]
    pub fn dot(&self, other: Self) -> f64 {
        self.0.dot(&other.0)
    }

    #[must_use]
    pub fn cross(&self, other: Self) -> Self {
        Self(self.0.cross(&other.0))
    }

    #[must_use]
    pub fn with_length(&self, length: f64) -> Self {
        self.direction() * length
    }

    /// Component along `direction`.
    #[must_use]
    pub fn projected_on_to(&self, direction: Direction) -> Self {
        let d = direction.to_vect();
        d * self.dot(d)
    }

    /// Component perpendicular to `direction`.
    #[must_use]
    pub fn orthogonalized_against(&self, direction: Direction) -> Self {
        *self - self.projected_on_to(direction)
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
}

impl From<Vector3> for Vect {
    fn from(v: Vector3) -> Self {
        Self(v)
    }
}

impl From<Vect> for Vector3 {
    fn from(v: Vect) -> Self {
        v.0
    }
}

impl Add for Vect {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Vect {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Vect {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Vect {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Vect {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Vect {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Div<f64> for Vect {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self(self.0 / rhs)
    }
}
