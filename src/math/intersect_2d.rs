use super::{Real, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not
/// parallel.
#[must_use]
pub fn line_line_intersect_2d<T: Real>(
    p1: Vector2<T>,
    d1: Vector2<T>,
    p2: Vector2<T>,
    d2: Vector2<T>,
) -> Option<(T, T)> {
    let cross = d1.cross(d2);
    if cross == T::ZERO {
        return None;
    }
    let diff = p2 - p1;
    Some((diff.cross(d2) / cross, diff.cross(d1) / cross))
}

/// Whether the ray from `point` towards +X crosses edge `a -> b`.
///
/// Uses a half-open rule on the edge's Y span so a vertex shared by two
/// edges is counted once.
fn crosses_positive_x_ray<T: Real>(point: Vector2<T>, a: Vector2<T>, b: Vector2<T>) -> bool {
    if (a.y() > point.y()) == (b.y() > point.y()) {
        return false;
    }
    let Some((t, u)) = line_line_intersect_2d(
        point,
        Vector2::new(T::ONE, T::ZERO),
        a,
        b - a,
    ) else {
        return false;
    };
    t > T::ZERO && u >= T::ZERO && u <= T::ONE
}

/// Even-odd containment test of `point` against a closed vertex loop.
#[must_use]
pub fn point_in_polygon_2d<T: Real>(point: Vector2<T>, vertices: &[Vector2<T>]) -> bool {
    let n = vertices.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    for i in 0..n {
        if crosses_positive_x_ray(point, vertices[i], vertices[(i + 1) % n]) {
            inside = !inside;
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn v(x: f64, y: f64) -> Vector2<f64> {
        Vector2::new(x, y)
    }

    #[test]
    fn perpendicular_lines() {
        let (t, u) = line_line_intersect_2d(v(0.0, 0.0), v(1.0, 0.0), v(5.0, -5.0), v(0.0, 1.0))
            .unwrap_or_default();
        assert!((t - 5.0).abs() < TOLERANCE);
        assert!((u - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn parallel_lines() {
        assert!(line_line_intersect_2d(v(0.0, 0.0), v(1.0, 1.0), v(0.0, 1.0), v(2.0, 2.0)).is_none());
    }

    #[test]
    fn ray_crossing_rules() {
        assert!(crosses_positive_x_ray(v(0.0, 0.0), v(1.0, -1.0), v(1.0, 1.0)));
        assert!(!crosses_positive_x_ray(v(2.0, 0.0), v(1.0, -1.0), v(1.0, 1.0)));
        assert!(!crosses_positive_x_ray(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 1.0)));
    }

    #[test]
    fn concave_polygon_containment() {
        // U shape open at the top
        let u = [
            v(0.0, 0.0),
            v(3.0, 0.0),
            v(3.0, 3.0),
            v(2.0, 3.0),
            v(2.0, 1.0),
            v(1.0, 1.0),
            v(1.0, 3.0),
            v(0.0, 3.0),
        ];
        assert!(point_in_polygon_2d(v(0.5, 2.0), &u));
        assert!(point_in_polygon_2d(v(1.5, 0.5), &u));
        assert!(!point_in_polygon_2d(v(1.5, 2.0), &u));
        assert!(!point_in_polygon_2d(v(-1.0, 0.5), &u));
    }

    #[test]
    fn ray_through_vertex_counts_once() {
        let diamond = [v(0.0, -1.0), v(1.0, 0.0), v(0.0, 1.0), v(-1.0, 0.0)];
        assert!(point_in_polygon_2d(v(0.0, 0.0), &diamond));
    }
}
