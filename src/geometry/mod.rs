//! Planar geometry in homogeneous coordinates.

mod path;
mod point;

pub use path::Path;
pub use point::Point;

use crate::error::Result;
use crate::math::Matrix;

/// Geometry that can be moved by an offset.
pub trait Translatable {
    /// Translates by `(tx, ty)`.
    fn translate(&mut self, tx: f64, ty: f64) -> &mut Self;
}

/// Geometry that can be rotated about a pivot.
pub trait Rotatable {
    /// Rotates counter-clockwise by `angle` radians about `pivot`.
    fn rotate_about(&mut self, angle: f64, pivot: &Point) -> &mut Self;

    /// Rotates counter-clockwise by `angle` radians about the origin.
    fn rotate(&mut self, angle: f64) -> &mut Self {
        self.rotate_about(angle, &Point::origin())
    }
}

/// Geometry that can be scaled about a pivot.
pub trait Scalable {
    /// Scales by `(sx, sy)` about `pivot`.
    fn scale_about(&mut self, sx: f64, sy: f64, pivot: &Point) -> &mut Self;

    /// Scales by `(sx, sy)` about the origin.
    fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.scale_about(sx, sy, &Point::origin())
    }
}

/// Geometry that accepts any homogeneous 3x3 transform.
pub trait Transformable: Translatable + Rotatable + Scalable {
    /// Left-multiplies the geometry by `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::MatrixError::DimensionMismatch`] if `matrix` is not 3x3.
    fn transform(&mut self, matrix: &Matrix) -> Result<&mut Self>;
}

/// Types backed by a matrix representation.
pub trait MatrixRepresentable {
    /// Returns an owned copy of the backing matrix.
    fn matrix(&self) -> Matrix;
}
