//! Arithmetic on pairs and singletons of [`Matrix`].
//!
//! Every binary operation validates shapes before building its result, so a
//! failing call never produces a partial matrix. Products and scalar
//! multiples are rounded to [`ROUNDING_DECIMALS`] digits.

use crate::error::{AffinityError, MatrixError, Result};

use super::{round_to, Matrix, ROUNDING_DECIMALS};

/// Element-wise sum of two equally shaped matrices.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    ensure_same_shape("addition", a, b)?;
    Ok(zip_with(a, b, |x, y| x + y))
}

/// Element-wise difference `a - b` of two equally shaped matrices.
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] if the shapes differ.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    ensure_same_shape("subtraction", a, b)?;
    Ok(zip_with(a, b, |x, y| x - y))
}

/// Multiplies every element by `scalar`, rounding each result.
#[must_use]
pub fn scalar_multiply(m: &Matrix, scalar: f64) -> Matrix {
    m.map(|v| round_to(v * scalar, ROUNDING_DECIMALS))
}

/// Matrix product `a · b`, each entry rounded.
///
/// ```
/// use affinity::Matrix;
/// use affinity::math::ops;
///
/// let a = Matrix::new(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// let b = Matrix::new(3, 2, &[1.0, 2.0, 1.0, 2.0, 1.0, 2.0]);
/// let c = ops::multiply(&a, &b).unwrap();
/// assert_eq!(c.elements(), &[6.0, 12.0, 15.0, 30.0]);
/// ```
///
/// # Errors
///
/// Returns [`MatrixError::DimensionMismatch`] unless `a.width() == b.height()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.width() != b.height() {
        return Err(mismatch("multiplication", a, b));
    }
    Ok(product(a, b))
}

/// Rounded product of two matrices already known to be compatible.
pub(crate) fn product(a: &Matrix, b: &Matrix) -> Matrix {
    debug_assert_eq!(a.width(), b.height());
    let (height, width, inner) = (a.height(), b.width(), a.width());
    let mut elements = Vec::with_capacity(height * width);
    for i in 0..height {
        for j in 0..width {
            let sum: f64 = (0..inner).map(|k| a.at(i, k) * b.at(k, j)).sum();
            elements.push(round_to(sum, ROUNDING_DECIMALS));
        }
    }
    Matrix::from_parts(height, width, elements)
}

fn zip_with(a: &Matrix, b: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
    let elements = a.iter().zip(b.iter()).map(|(x, y)| f(x, y)).collect();
    Matrix::from_parts(a.height(), a.width(), elements)
}

fn ensure_same_shape(operation: &'static str, a: &Matrix, b: &Matrix) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(mismatch(operation, a, b));
    }
    Ok(())
}

fn mismatch(operation: &'static str, a: &Matrix, b: &Matrix) -> AffinityError {
    tracing::debug!(
        operation,
        left = ?a.shape(),
        right = ?b.shape(),
        "rejecting incompatible matrices"
    );
    MatrixError::DimensionMismatch {
        operation,
        left: a.shape(),
        right: b.shape(),
    }
    .into()
}
