use std::fmt;

use crate::error::{MatrixError, Result};
use crate::math::{ops, Matrix, Point2};
use crate::operations::transform::{pivoted, RotationMatrix, ScalingMatrix, TranslationMatrix};

use super::{MatrixRepresentable, Rotatable, Scalable, Transformable, Translatable};

/// A point in the plane stored as a homogeneous column vector `[x, y, h]`.
///
/// Cartesian coordinates are recovered on read as `x / h`, `y / h`.
/// Equality compares those Cartesian coordinates exactly.
#[derive(Debug, Clone)]
pub struct Point {
    matrix: Matrix,
}

impl Point {
    /// Creates a point at `(x, y)` with `h = 1`.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            matrix: homogeneous(x, y),
        }
    }

    /// The origin `(0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Cartesian x coordinate. Non-finite if `h` is zero.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.matrix.at(0, 0) / self.matrix.at(2, 0)
    }

    /// Cartesian y coordinate. Non-finite if `h` is zero.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.matrix.at(1, 0) / self.matrix.at(2, 0)
    }

    /// Moves the point to `(x, y)`, discarding the current vector.
    pub fn place(&mut self, x: f64, y: f64) -> &mut Self {
        self.matrix = homogeneous(x, y);
        self
    }

    /// Translates the point by `(tx, ty)`.
    pub fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        let t = TranslationMatrix::new(tx, ty);
        self.left_multiply(&t);
        self
    }

    /// Rotates the point counter-clockwise by `angle` radians about the origin.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        self.rotate_about(angle, &Self::origin())
    }

    /// Rotates the point counter-clockwise by `angle` radians about `pivot`.
    ///
    /// The pivot-relative transform is composed into one matrix and applied
    /// in a single multiplication.
    pub fn rotate_about(&mut self, angle: f64, pivot: &Point) -> &mut Self {
        let r = RotationMatrix::new(angle);
        let composed = pivoted(&r, pivot.x(), pivot.y());
        self.left_multiply(&composed);
        self
    }

    /// Scales the point by `(sx, sy)` about the origin.
    pub fn scale(&mut self, sx: f64, sy: f64) -> &mut Self {
        self.scale_about(sx, sy, &Self::origin())
    }

    /// Scales the point by `(sx, sy)` about `pivot`.
    pub fn scale_about(&mut self, sx: f64, sy: f64, pivot: &Point) -> &mut Self {
        let s = ScalingMatrix::new(sx, sy);
        let composed = pivoted(&s, pivot.x(), pivot.y());
        self.left_multiply(&composed);
        self
    }

    /// Left-multiplies the point by `matrix` and renormalizes so `h == 1`.
    ///
    /// A matrix that sends `h` to zero leaves the point with non-finite
    /// coordinates.
    ///
    /// ```
    /// use affinity::{Point, ScalingMatrix, TranslationMatrix};
    /// use affinity::math::ops;
    ///
    /// let m = ops::multiply(&TranslationMatrix::new(5.0, 10.0), &ScalingMatrix::new(3.0, 3.0)).unwrap();
    /// let mut p = Point::new(5.0, 10.0);
    /// p.transform(&m).unwrap();
    /// assert_eq!(p, Point::new(20.0, 40.0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DimensionMismatch`] unless `matrix` is 3x3; the
    /// point is left untouched.
    pub fn transform(&mut self, matrix: &Matrix) -> Result<&mut Self> {
        check_transform(matrix)?;
        self.apply_transform(matrix);
        Ok(self)
    }

    /// Converts to an nalgebra point.
    #[must_use]
    pub fn to_point2(&self) -> Point2 {
        Point2::new(self.x(), self.y())
    }

    /// Transform step for a matrix already validated by [`check_transform`].
    pub(crate) fn apply_transform(&mut self, matrix: &Matrix) {
        self.left_multiply(matrix);
        let h = self.matrix.at(2, 0);
        self.matrix = ops::scalar_multiply(&self.matrix, 1.0 / h);
        tracing::trace!(x = self.x(), y = self.y(), "point transformed");
    }

    fn left_multiply(&mut self, matrix: &Matrix) {
        self.matrix = ops::product(matrix, &self.matrix);
    }
}

/// Validates that `matrix` maps a homogeneous point to a homogeneous point.
pub(crate) fn check_transform(matrix: &Matrix) -> Result<()> {
    // A wrong width is the product's own failure; a wrong height would leave
    // a vector that is no longer `[x, y, h]`.
    let (operation, right) = match matrix.shape() {
        (3, 3) => return Ok(()),
        (_, 3) => ("point transform", (3, 3)),
        _ => ("multiplication", (3, 1)),
    };
    tracing::debug!(operation, shape = ?matrix.shape(), "rejecting point transform");
    Err(MatrixError::DimensionMismatch {
        operation,
        left: matrix.shape(),
        right,
    }
    .into())
}

fn homogeneous(x: f64, y: f64) -> Matrix {
    Matrix::new(3, 1, &[x, y, 1.0])
}

impl Default for Point {
    fn default() -> Self {
        Self::origin()
    }
}

impl PartialEq for Point {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x(), self.y())
    }
}

impl From<Point2> for Point {
    fn from(p: Point2) -> Self {
        Self::new(p.x, p.y)
    }
}

impl MatrixRepresentable for Point {
    fn matrix(&self) -> Matrix {
        self.matrix.clone()
    }
}

impl Translatable for Point {
    fn translate(&mut self, tx: f64, ty: f64) -> &mut Self {
        Point::translate(self, tx, ty)
    }
}

impl Rotatable for Point {
    fn rotate_about(&mut self, angle: f64, pivot: &Point) -> &mut Self {
        Point::rotate_about(self, angle, pivot)
    }
}

impl Scalable for Point {
    fn scale_about(&mut self, sx: f64, sy: f64, pivot: &Point) -> &mut Self {
        Point::scale_about(self, sx, sy, pivot)
    }
}

impl Transformable for Point {
    fn transform(&mut self, matrix: &Matrix) -> Result<&mut Self> {
        Point::transform(self, matrix)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;

    use super::*;
    use crate::error::AffinityError;

    fn coords(p: &Point) -> (f64, f64) {
        (p.x(), p.y())
    }

    #[test]
    fn stores_homogeneous_vector() {
        let p = Point::new(5.0, 10.0);
        let m = p.matrix();
        assert_eq!(m.shape(), (3, 1));
        assert_eq!(m.elements(), &[5.0, 10.0, 1.0]);
        assert_eq!(coords(&p), (5.0, 10.0));
    }

    #[test]
    fn matrix_is_a_defensive_copy() {
        let p = Point::new(1.0, 2.0);
        let mut m = p.matrix();
        m.set(0, 0, 99.0).unwrap();
        assert_eq!(p.x(), 1.0);
    }

    #[test]
    fn place_resets_coordinates() {
        let mut q = Point::new(10.0, 12.0);
        q.scale(3.0, 3.0).place(5.0, 6.0);
        assert_eq!(coords(&q), (5.0, 6.0));
        assert_eq!(q.matrix().elements(), &[5.0, 6.0, 1.0]);
    }

    #[test]
    fn translate_offsets() {
        let mut q = Point::new(10.0, 15.0);
        q.translate(3.0, 8.0);
        assert_eq!(coords(&q), (13.0, 23.0));
    }

    #[test]
    fn rotate_about_pivot() {
        let mut q = Point::new(8.0, 4.0);
        q.rotate_about(FRAC_PI_2, &Point::new(4.0, 4.0));
        assert_eq!(coords(&q), (4.0, 8.0));
    }

    #[test]
    fn rotate_about_origin_by_default() {
        let mut q = Point::new(1.0, 0.0);
        q.rotate(PI);
        assert_eq!(coords(&q), (-1.0, 0.0));
    }

    #[test]
    fn scale_about_pivot() {
        let mut q = Point::new(8.0, 6.0);
        q.scale_about(2.0, 2.0, &Point::new(4.0, 4.0));
        assert_eq!(coords(&q), (12.0, 8.0));
    }

    #[test]
    fn scale_about_origin_by_default() {
        let mut q = Point::new(2.0, -3.0);
        q.scale(0.5, 2.0);
        assert_eq!(coords(&q), (1.0, -6.0));
    }

    #[test]
    fn transform_with_composed_matrix() {
        let m = ops::multiply(
            &TranslationMatrix::new(5.0, 10.0),
            &ScalingMatrix::new(3.0, 3.0),
        )
        .unwrap();
        let mut q = Point::new(5.0, 10.0);
        q.transform(&m).unwrap();
        assert_eq!(coords(&q), (20.0, 40.0));
    }

    #[test]
    fn transform_normalizes_projective_row() {
        #[rustfmt::skip]
        let m = Matrix::new(3, 3, &[
            1.0, 0.0, 0.0,
            0.0, 1.0, 0.0,
            0.0, 0.0, 2.0,
        ]);
        let mut q = Point::new(4.0, 6.0);
        q.transform(&m).unwrap();
        assert_eq!(q.matrix().elements(), &[2.0, 3.0, 1.0]);
        assert_eq!(coords(&q), (2.0, 3.0));
    }

    #[test]
    fn transform_rejects_wrong_width() {
        let mut q = Point::new(1.0, 1.0);
        let err = q.transform(&Matrix::identity(2)).unwrap_err();
        assert!(matches!(
            err,
            AffinityError::Matrix(MatrixError::DimensionMismatch {
                operation: "multiplication",
                ..
            })
        ));
        assert_eq!(coords(&q), (1.0, 1.0));
    }

    #[test]
    fn transform_rejects_wrong_height() {
        let mut q = Point::new(1.0, 1.0);
        let err = q.transform(&Matrix::zeros(2, 3)).unwrap_err();
        assert!(matches!(
            err,
            AffinityError::Matrix(MatrixError::DimensionMismatch {
                operation: "point transform",
                ..
            })
        ));
        assert_eq!(q.matrix().elements(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn degenerate_transform_yields_non_finite() {
        let mut q = Point::new(1.0, 1.0);
        q.transform(&Matrix::zeros(3, 3)).unwrap();
        assert!(!q.x().is_finite());
        assert!(!q.y().is_finite());
    }

    #[test]
    fn self_equality_survives_transforms() {
        let mut q = Point::new(3.25, -1.5);
        assert_eq!(q, q.clone());
        q.translate(1.0, 2.0);
        assert_eq!(q, q.clone());
        q.rotate_about(0.7, &Point::new(-2.0, 5.0));
        assert_eq!(q, q.clone());
        q.scale(1.5, 0.25);
        assert_eq!(q, q.clone());
        assert!(q.x().is_finite() && q.y().is_finite());
    }

    #[test]
    fn equality_is_on_cartesian_coordinates() {
        let mut a = Point::new(2.0, 4.0);
        #[rustfmt::skip]
        let double_h = Matrix::new(3, 3, &[
            2.0, 0.0, 0.0,
            0.0, 2.0, 0.0,
            0.0, 0.0, 2.0,
        ]);
        a.transform(&double_h).unwrap();
        assert_eq!(a, Point::new(2.0, 4.0));
        assert_ne!(a, Point::new(2.0, 4.000_01));
    }

    #[test]
    fn display_uses_cartesian_coordinates() {
        assert_eq!(Point::new(4.0, 8.0).to_string(), "(4,8)");
        assert_eq!(Point::new(-1.5, 0.25).to_string(), "(-1.5,0.25)");
    }

    #[test]
    fn usable_through_trait_objects_of_capabilities() {
        fn spin<T: Transformable>(shape: &mut T) {
            shape.rotate(FRAC_PI_2).translate(1.0, 0.0);
        }
        let mut q = Point::new(1.0, 0.0);
        spin(&mut q);
        assert_eq!(coords(&q), (1.0, 1.0));
    }

    #[test]
    fn nalgebra_interop() {
        let q = Point::from(Point2::new(1.5, -2.5));
        let back = q.to_point2();
        assert_relative_eq!(back.x, 1.5);
        assert_relative_eq!(back.y, -2.5);
    }
}
