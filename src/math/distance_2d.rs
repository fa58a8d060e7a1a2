use super::{Real, Vector2};

/// Closest point to `p` on the segment `a -> b`, with its clamped parameter
/// in `[0, 1]`.
#[must_use]
pub fn closest_point_on_segment_2d<T: Real>(
    p: Vector2<T>,
    a: Vector2<T>,
    b: Vector2<T>,
) -> (Vector2<T>, T) {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == T::ZERO {
        // Degenerate segment (zero length).
        return (a, T::ZERO);
    }
    let t = ((p - a).dot(ab) / len_sq).max_of(T::ZERO).min_of(T::ONE);
    (a + ab * t, t)
}

/// Minimum distance from `p` to the segment `a -> b`.
#[must_use]
pub fn point_to_segment_dist<T: Real>(p: Vector2<T>, a: Vector2<T>, b: Vector2<T>) -> T {
    closest_point_on_segment_2d(p, a, b).0.distance_from(p)
}
