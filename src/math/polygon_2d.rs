use super::{Real, Scalar, Vector2};

fn shoelace<T: Scalar, S: Scalar>(points: &[Vector2<T>], cross: impl Fn(Vector2<T>, Vector2<T>) -> S) -> S {
    let n = points.len();
    if n < 3 {
        return S::ZERO;
    }
    let mut sum = S::ZERO;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += cross(points[i], points[j]);
    }
    sum
}

/// Twice the signed area of a closed polygon (shoelace sum).
///
/// Positive for anticlockwise, negative for clockwise. Summed in
/// [`Scalar::Wide`], so exact for `i32` and `i64` components.
#[must_use]
pub fn doubled_signed_area_2d<T: Scalar>(points: &[Vector2<T>]) -> T::Wide {
    shoelace(points, Vector2::cross_wide)
}

/// Signed area of a closed polygon.
#[must_use]
pub fn signed_area_2d<T: Real>(points: &[Vector2<T>]) -> T {
    shoelace(points, Vector2::cross) / T::from_f64(2.0)
}

/// Signed turn of the path `a -> b -> c`; positive when it bends
/// anticlockwise. Computed in [`Scalar::Wide`].
#[must_use]
pub fn turn_2d<T: Scalar>(a: Vector2<T>, b: Vector2<T>, c: Vector2<T>) -> T::Wide {
    (b - a).cross_wide(c - b)
}

/// Whether `p` lies strictly inside triangle `abc` of either winding.
///
/// Points on an edge or a corner are outside.
#[must_use]
pub fn strictly_inside_triangle_2d<T: Scalar>(
    p: Vector2<T>,
    a: Vector2<T>,
    b: Vector2<T>,
    c: Vector2<T>,
) -> bool {
    let s0 = (b - a).cross_wide(p - a).signum_or_zero();
    let s1 = (c - b).cross_wide(p - b).signum_or_zero();
    let s2 = (a - c).cross_wide(p - c).signum_or_zero();
    s0 != 0 && s0 == s1 && s1 == s2
}
