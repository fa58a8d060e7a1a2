use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A planar angle, stored in radians.
///
/// Angles are signed and unbounded; use [`Angle::normalized`] to wrap into
/// `[0°, 360°)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub const ZERO: Self = Self { radians: 0.0 };
    pub const QUARTER_CIRCLE: Self = Self { radians: PI / 2.0 };
    pub const HALF_CIRCLE: Self = Self { radians: PI };
    pub const FULL_CIRCLE: Self = Self { radians: TAU };

    #[must_use]
    pub const fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    #[must_use]
    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees.to_radians(),
        }
    }

    /// Angle whose cosine is `cos`, clamped into the valid domain first.
    #[must_use]
    pub fn from_cos(cos: f64) -> Self {
        Self::from_radians(cos.clamp(-1.0, 1.0).acos())
    }

    /// Angle whose sine is `sin`, clamped into the valid domain first.
    #[must_use]
    pub fn from_sin(sin: f64) -> Self {
        Self::from_radians(sin.clamp(-1.0, 1.0).asin())
    }

    #[must_use]
    pub fn radians(self) -> f64 {
        self.radians
    }

    #[must_use]
    pub fn degrees(self) -> f64 {
        self.radians.to_degrees()
    }

    #[must_use]
    pub fn sin_cos(self) -> (f64, f64) {
        self.radians.sin_cos()
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self::from_radians(self.radians.abs())
    }

    /// Wraps into `[0°, 360°)`.
    #[must_use]
    pub fn normalized(self) -> Self {
        let wrapped = self.radians.rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        if wrapped >= TAU {
            Self::ZERO
        } else {
            Self::from_radians(wrapped)
        }
    }

    /// Compares two angles modulo a full circle.
    #[must_use]
    pub fn equals_within(self, other: Self, tolerance: Self) -> bool {
        let diff = (self - other).normalized().radians;
        diff.min(TAU - diff) <= tolerance.radians.abs()
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self {
        Self::from_radians(-self.radians)
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from_radians(self.radians + rhs.radians)
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from_radians(self.radians - rhs.radians)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::from_radians(self.radians * rhs)
    }
}

impl Div<f64> for Angle {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::from_radians(self.radians / rhs)
    }
}
