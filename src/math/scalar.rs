use std::ops::Neg;

use nalgebra::{ClosedAddAssign, ClosedDivAssign, ClosedMulAssign, ClosedSubAssign};
use num_traits::{One, Zero};

/// Numeric component type usable in [`Vector2`](super::Vector2).
///
/// Implemented for `i32`, `i64`, `i128`, `f32` and `f64`. The bounds are the
/// ones nalgebra needs for dot and perp products plus componentwise
/// arithmetic on its static vectors.
pub trait Scalar:
    nalgebra::Scalar
    + Copy
    + Default
    + PartialOrd
    + Zero
    + One
    + ClosedAddAssign
    + ClosedSubAssign
    + ClosedMulAssign
    + ClosedDivAssign
    + Neg<Output = Self>
{
    /// Type wide enough to hold a product of two values without overflow.
    type Wide: Scalar;

    const ZERO: Self;
    const ONE: Self;

    #[must_use]
    fn abs(self) -> Self;

    #[must_use]
    fn widen(self) -> Self::Wide;

    /// Converts a vertex count or similar small integer into this type.
    #[must_use]
    fn from_usize(value: usize) -> Self;

    /// Returns `-1`, `0` or `1` according to the sign of the value.
    #[must_use]
    fn signum_or_zero(self) -> i32 {
        if self > Self::ZERO {
            1
        } else if self < Self::ZERO {
            -1
        } else {
            0
        }
    }

    #[must_use]
    fn min_of(self, other: Self) -> Self {
        if other < self {
            other
        } else {
            self
        }
    }

    #[must_use]
    fn max_of(self, other: Self) -> Self {
        if other > self {
            other
        } else {
            self
        }
    }
}

/// Floating-point scalar with the transcendental operations needed for
/// lengths and angles.
pub trait Real: Scalar {
    #[must_use]
    fn sqrt(self) -> Self;

    #[must_use]
    fn atan2(self, other: Self) -> Self;

    #[must_use]
    fn from_f64(value: f64) -> Self;

    #[must_use]
    fn to_f64(self) -> f64;

    #[must_use]
    fn is_finite(self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($t:ty => $wide:ty),*) => {$(
        impl Scalar for $t {
            type Wide = $wide;

            const ZERO: Self = 0;
            const ONE: Self = 1;

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn widen(self) -> $wide {
                <$wide>::from(self)
            }

            #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
            fn from_usize(value: usize) -> Self {
                value as $t
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty => $wide:ty),*) => {$(
        impl Scalar for $t {
            type Wide = $wide;

            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn widen(self) -> $wide {
                <$wide>::from(self)
            }

            #[allow(clippy::cast_precision_loss)]
            fn from_usize(value: usize) -> Self {
                value as $t
            }
        }

        impl Real for $t {
            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn atan2(self, other: Self) -> Self {
                <$t>::atan2(self, other)
            }

            #[allow(clippy::cast_possible_truncation)]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn to_f64(self) -> f64 {
                f64::from(self)
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }
        }
    )*};
}

impl_scalar_int!(i32 => i64, i64 => i128, i128 => i128);
impl_scalar_float!(f32 => f64, f64 => f64);
