use crate::error::{MatrixError, Result};
use crate::math::{ops, Matrix};

use super::TranslationMatrix;

/// Composes matrices left to right into a single transform `M0 · M1 · … · Mn`.
///
/// The rightmost matrix is applied first when the result multiplies a column
/// vector. An empty slice yields the 3x3 identity.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if two neighbours cannot be
/// multiplied.
pub fn compose(matrices: &[&Matrix]) -> Result<Matrix> {
    let Some((first, rest)) = matrices.split_first() else {
        return Ok(Matrix::identity(3));
    };
    rest.iter()
        .try_fold((*first).clone(), |acc, m| ops::multiply(&acc, m))
}

/// Conjugates `op` by a translation so it acts about `(pivot_x, pivot_y)`.
///
/// Builds `T(pivot) · op · T(-pivot)`: move the pivot to the origin, apply
/// `op`, move back.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] unless `op` is 3x3.
pub fn about_pivot(op: &Matrix, pivot_x: f64, pivot_y: f64) -> Result<Matrix> {
    if op.shape() != (3, 3) {
        return Err(MatrixError::DimensionMismatch {
            operation: "pivot composition",
            left: op.shape(),
            right: (3, 3),
        }
        .into());
    }
    Ok(pivoted(op, pivot_x, pivot_y))
}

/// [`about_pivot`] for an operator already known to be 3x3.
pub(crate) fn pivoted(op: &Matrix, pivot_x: f64, pivot_y: f64) -> Matrix {
    let t_neg = TranslationMatrix::new(-pivot_x, -pivot_y);
    let t_pos = TranslationMatrix::new(pivot_x, pivot_y);
    ops::product(&ops::product(&t_pos, op), &t_neg)
}
