use crate::geometry::{Line, Plane};

use super::{Direction, Location, Vector3, INTERSECTION_TOLERANCE, PARALLEL_TOLERANCE, TOLERANCE};

/// Relationship between two planes.
#[derive(Debug, Clone, Copy)]
pub enum PlanePairRelation {
    /// Planes intersect along a line.
    IntersectionLine(Line),
    /// Planes are parallel but not coincident.
    Parallel { distance: f64 },
    /// Planes are the same (coincident).
    Coincident,
}

/// Computes the intersection of two planes.
#[must_use]
pub fn plane_plane_intersect(a: &Plane, b: &Plane) -> PlanePairRelation {
    let na = a.normal();
    let nb = b.normal();

    let direction = Direction::from_perpendicular(na, nb);
    if direction.is_none() || na.is_parallel_to(nb) {
        let dist = b.signed_distance_from(a.point_closest_to_origin()).abs();
        return if dist < TOLERANCE {
            PlanePairRelation::Coincident
        } else {
            PlanePairRelation::Parallel { distance: dist }
        };
    }

    // p = oa + s * na + t * nb satisfies both plane equations when
    //   s + t * (na.nb) = 0
    //   s * (na.nb) + t = nb.(ob - oa)
    let oa = a.point_closest_to_origin();
    let d2 = -b.signed_distance_from(oa);
    let dot_nn = na.dot(nb);
    let denom = 1.0 - dot_nn * dot_nn;
    let s = -dot_nn * d2 / denom;
    let t = d2 / denom;
    let origin = oa + na * s + nb * t;

    PlanePairRelation::IntersectionLine(Line::new(origin, direction))
}

/// Relationship of an infinite line with a plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinePlaneRelation {
    /// The line crosses the plane `distance` units along its direction.
    Distance(f64),
    /// Line is parallel to the plane (does not intersect).
    Parallel,
    /// Line lies entirely on the plane.
    OnPlane,
}

/// Solves `anchor + t * direction` against a plane.
#[must_use]
pub fn line_plane_intersect(anchor: Location, direction: Direction, plane: &Plane) -> LinePlaneRelation {
    let denom = plane.normal().dot(direction);
    let numer = -plane.signed_distance_from(anchor);

    if denom.abs() < PARALLEL_TOLERANCE {
        if numer.abs() < TOLERANCE {
            LinePlaneRelation::OnPlane
        } else {
            LinePlaneRelation::Parallel
        }
    } else {
        LinePlaneRelation::Distance(numer / denom)
    }
}

/// Distances `(ta, tb)` along two infinite lines at which they meet.
///
/// The 3D system is reduced to 2D on the axis pair orthogonal to the
/// largest component of `da × db`; the eliminated axis is then checked so
/// skew lines are rejected. Returns `None` for parallel, coincident, skew
/// or degenerate input.
#[must_use]
pub fn line_line_intersect_3d(
    pa: Location,
    da: Direction,
    pb: Location,
    db: Direction,
) -> Option<(f64, f64)> {
    if da.is_none() || db.is_none() {
        return None;
    }
    let cross = da.cross(db);
    if cross.length() < PARALLEL_TOLERANCE {
        return None;
    }

    let c = cross.as_vector3();
    let k = c.iamax();
    // (i, j, k) cyclic so that c[k] = da[i] * db[j] - da[j] * db[i]
    let (i, j) = ((k + 1) % 3, (k + 2) % 3);

    let a = da.as_vector3();
    let b = db.as_vector3();
    let w = Vector3::from(pb - pa);

    let ta = (w[i] * b[j] - w[j] * b[i]) / c[k];
    let tb = (w[i] * a[j] - w[j] * a[i]) / c[k];

    let on_a = pa.as_point3()[k] + a[k] * ta;
    let on_b = pb.as_point3()[k] + b[k] * tb;
    let scale = on_a.abs().max(on_b.abs()).max(1.0);
    if (on_a - on_b).abs() > INTERSECTION_TOLERANCE * scale {
        return None;
    }
    Some((ta, tb))
}
