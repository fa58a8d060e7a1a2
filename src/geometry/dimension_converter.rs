use crate::math::{Direction, Location, Vect, Vector2};

/// Maps between 3D world space and the 2D frame of a plane.
///
/// 2D coordinates are the components along `x_basis` and `y_basis` relative
/// to `origin`; `z_basis` gives the depth used when lifting back to 3D.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionConverter {
    x_basis: Direction,
    y_basis: Direction,
    z_basis: Direction,
    origin: Location,
}

impl DimensionConverter {
    /// Bases are taken as given; callers supply an orthonormal set.
    #[must_use]
    pub fn from_bases(
        x_basis: Direction,
        y_basis: Direction,
        z_basis: Direction,
        origin: Location,
    ) -> Self {
        Self {
            x_basis,
            y_basis,
            z_basis,
            origin,
        }
    }

    #[must_use]
    pub fn x_basis(&self) -> Direction {
        self.x_basis
    }

    #[must_use]
    pub fn y_basis(&self) -> Direction {
        self.y_basis
    }

    #[must_use]
    pub fn z_basis(&self) -> Direction {
        self.z_basis
    }

    #[must_use]
    pub fn origin(&self) -> Location {
        self.origin
    }

    /// Flattens `location` into the frame, discarding depth.
    #[must_use]
    pub fn convert_location(&self, location: Location) -> Vector2<f64> {
        self.convert_vect(location - self.origin)
    }

    #[must_use]
    pub fn convert_vect(&self, v: Vect) -> Vector2<f64> {
        Vector2::new(v.dot(self.x_basis.to_vect()), v.dot(self.y_basis.to_vect()))
    }

    /// Flattened `direction`; the zero vector if it is along `z_basis`.
    #[must_use]
    pub fn convert_direction(&self, direction: Direction) -> Vector2<f64> {
        self.convert_vect(direction.to_vect())
    }

    /// Distance of `location` from the frame along `z_basis`.
    #[must_use]
    pub fn depth_of(&self, location: Location) -> f64 {
        (location - self.origin).dot(self.z_basis.to_vect())
    }

    /// Lifts a 2D point back on to the plane.
    #[must_use]
    pub fn convert_xy(&self, xy: Vector2<f64>) -> Location {
        self.convert_xy_with_depth(xy, 0.0)
    }

    #[must_use]
    pub fn convert_xy_with_depth(&self, xy: Vector2<f64>, depth: f64) -> Location {
        self.origin + self.x_basis * xy.x() + self.y_basis * xy.y() + self.z_basis * depth
    }
}
