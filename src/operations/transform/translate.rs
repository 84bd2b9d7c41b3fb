use crate::math::Matrix;

use super::impl_transform_matrix;

/// Translation by `(tx, ty)` in homogeneous coordinates.
///
/// ```text
/// | 1 0 tx |
/// | 0 1 ty |
/// | 0 0 1  |
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationMatrix(Matrix);

impl TranslationMatrix {
    /// Creates a new translation matrix.
    #[must_use]
    pub fn new(tx: f64, ty: f64) -> Self {
        #[rustfmt::skip]
        let elements = [
            1.0, 0.0, tx,
            0.0, 1.0, ty,
            0.0, 0.0, 1.0,
        ];
        Self(Matrix::new(3, 3, &elements))
    }
}

impl_transform_matrix!(TranslationMatrix);
