use crate::math::Matrix;

use super::impl_transform_matrix;

/// Axis-aligned scaling about the origin in homogeneous coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalingMatrix(Matrix);

impl ScalingMatrix {
    /// Creates a new scaling matrix `diag(sx, sy, 1)`.
    #[must_use]
    pub fn new(sx: f64, sy: f64) -> Self {
        #[rustfmt::skip]
        let elements = [
            sx,  0.0, 0.0,
            0.0, sy,  0.0,
            0.0, 0.0, 1.0,
        ];
        Self(Matrix::new(3, 3, &elements))
    }
}

impl_transform_matrix!(ScalingMatrix);
