use crate::math::Matrix;

use super::impl_transform_matrix;

/// Counter-clockwise rotation about the origin in homogeneous coordinates.
///
/// ```text
/// | cos -sin 0 |
/// | sin  cos 0 |
/// |  0    0  1 |
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RotationMatrix(Matrix);

impl RotationMatrix {
    /// Creates a new rotation matrix.
    ///
    /// * `angle` - Rotation angle in radians, positive is counter-clockwise.
    #[must_use]
    pub fn new(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        #[rustfmt::skip]
        let elements = [
            c,   -s,   0.0,
            s,    c,   0.0,
            0.0,  0.0, 1.0,
        ];
        Self(Matrix::new(3, 3, &elements))
    }
}

impl_transform_matrix!(RotationMatrix);
