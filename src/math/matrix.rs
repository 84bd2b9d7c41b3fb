use std::iter::Copied;
use std::slice;

use crate::error::{Axis, MatrixError, Result};

use super::DMatrix;

/// A dense matrix of `f64` stored in row-major order.
///
/// The element buffer always holds exactly `height * width` values. Each
/// `Matrix` owns its storage; clones never alias the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    height: usize,
    width: usize,
    elements: Vec<f64>,
}

impl Matrix {
    /// Creates a `height x width` matrix from elements in row-major order.
    ///
    /// Missing elements are zero-filled and surplus elements are dropped, so
    /// the element count never has to match the dimensions.
    ///
    /// ```
    /// use affinity::Matrix;
    ///
    /// let m = Matrix::new(2, 3, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.elements(), &[1.0, 2.0, 3.0, 4.0, 0.0, 0.0]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`.
    #[must_use]
    pub fn new(height: usize, width: usize, elements: &[f64]) -> Self {
        let size = element_count(height, width);
        let mut buffer: Vec<f64> = elements.iter().copied().take(size).collect();
        buffer.resize(size, 0.0);
        Self {
            height,
            width,
            elements: buffer,
        }
    }

    /// Creates a `height x width` matrix filled with zeros.
    ///
    /// # Panics
    ///
    /// Panics if `height * width` overflows `usize`.
    #[must_use]
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            elements: vec![0.0; element_count(height, width)],
        }
    }

    /// Creates the `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.elements[i * n + i] = 1.0;
        }
        m
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of elements (`height * width`).
    #[must_use]
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    /// Returns `(height, width)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// All elements in row-major order.
    #[must_use]
    pub fn elements(&self) -> &[f64] {
        &self.elements
    }

    /// Returns the element at (`row`, `column`).
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if either index is outside
    /// the matrix.
    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        let n = self.flat_index(row, column)?;
        Ok(self.elements[n])
    }

    /// Writes `value` at (`row`, `column`) and returns the matrix for chaining.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if either index is outside
    /// the matrix.
    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<&mut Self> {
        let n = self.flat_index(row, column)?;
        self.elements[n] = value;
        Ok(self)
    }

    /// Returns an owned copy of row `index`.
    ///
    /// ```
    /// use affinity::Matrix;
    ///
    /// let m = Matrix::new(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `index >= height`.
    pub fn row(&self, index: usize) -> Result<Vec<f64>> {
        check_index(Axis::Row, index, self.height)?;
        let start = index * self.width;
        Ok(self.elements[start..start + self.width].to_vec())
    }

    /// Returns an owned copy of column `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] if `index >= width`.
    pub fn column(&self, index: usize) -> Result<Vec<f64>> {
        check_index(Axis::Column, index, self.width)?;
        Ok(self
            .elements
            .iter()
            .skip(index)
            .step_by(self.width)
            .copied()
            .collect())
    }

    /// Transposes the matrix in place and returns it for chaining.
    pub fn transpose(&mut self) -> &mut Self {
        let (height, width) = (self.height, self.width);
        let mut transposed = vec![0.0; self.elements.len()];
        for r in 0..height {
            for c in 0..width {
                transposed[c * height + r] = self.elements[r * width + c];
            }
        }
        self.elements = transposed;
        self.height = width;
        self.width = height;
        self
    }

    /// Iterates over all elements in row-major order.
    ///
    /// Every call starts from the first element.
    pub fn iter(&self) -> Copied<slice::Iter<'_, f64>> {
        self.elements.iter().copied()
    }

    /// Builds a matrix of the same shape by mapping every element.
    pub(crate) fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self {
            height: self.height,
            width: self.width,
            elements: self.elements.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Builds a matrix from a buffer already sized `height * width`.
    pub(crate) fn from_parts(height: usize, width: usize, elements: Vec<f64>) -> Self {
        debug_assert_eq!(elements.len(), height * width);
        Self {
            height,
            width,
            elements,
        }
    }

    /// Element at (`row`, `column`) without bounds reporting.
    #[inline]
    pub(crate) fn at(&self, row: usize, column: usize) -> f64 {
        self.elements[row * self.width + column]
    }

    fn flat_index(&self, row: usize, column: usize) -> Result<usize> {
        check_index(Axis::Row, row, self.height)?;
        check_index(Axis::Column, column, self.width)?;
        Ok(row * self.width + column)
    }
}

fn element_count(height: usize, width: usize) -> usize {
    match height.checked_mul(width) {
        Some(size) => size,
        None => panic!("matrix dimensions {height}x{width} overflow usize"),
    }
}

fn check_index(axis: Axis, index: usize, len: usize) -> Result<()> {
    if index >= len {
        tracing::debug!(%axis, index, len, "matrix index out of bounds");
        return Err(MatrixError::IndexOutOfBounds { axis, index, len }.into());
    }
    Ok(())
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = f64;
    type IntoIter = Copied<slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&Matrix> for DMatrix {
    fn from(m: &Matrix) -> Self {
        DMatrix::from_row_slice(m.height, m.width, &m.elements)
    }
}

impl From<&DMatrix> for Matrix {
    fn from(m: &DMatrix) -> Self {
        // nalgebra stores column-major; the transpose's storage is our row-major order.
        let elements = m.transpose().as_slice().to_vec();
        Self::from_parts(m.nrows(), m.ncols(), elements)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::AffinityError;

    fn m23() -> Matrix {
        Matrix::new(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])
    }

    #[test]
    fn dimensions_and_size() {
        let m = Matrix::new(2, 2, &[1.0, 2.0, 2.0, 1.0]);
        assert_eq!(m.height(), 2);
        assert_eq!(m.width(), 2);
        assert_eq!(m.size(), 4);
    }

    #[test]
    fn short_input_is_zero_padded() {
        let m = Matrix::new(3, 1, &[5.0]);
        assert_eq!(m.elements(), &[5.0, 0.0, 0.0]);
    }

    #[test]
    fn long_input_is_truncated() {
        let m = Matrix::new(1, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.elements(), &[1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "overflow usize")]
    fn overflowing_dimensions_panic() {
        let _ = Matrix::new(usize::MAX, 2, &[]);
    }

    #[test]
    #[should_panic(expected = "overflow usize")]
    fn overflowing_zeros_panic() {
        let _ = Matrix::zeros(2, usize::MAX);
    }

    #[test]
    fn get_reads_row_major() {
        let m = m23();
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(m.get(r, c).unwrap(), m.elements()[r * 3 + c]);
            }
        }
    }

    #[test]
    fn set_writes_and_chains() {
        let mut m = Matrix::new(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.get(1, 1).unwrap(), 4.0);
        m.set(0, 1, 5.0).unwrap().set(1, 0, 7.0).unwrap();
        assert_eq!(m.get(0, 1).unwrap(), 5.0);
        assert_eq!(m.get(1, 0).unwrap(), 7.0);
    }

    #[test]
    fn out_of_range_access_is_an_error() {
        let mut m = m23();
        let err = m.get(0, 3).unwrap_err();
        assert_eq!(
            err,
            AffinityError::Matrix(MatrixError::IndexOutOfBounds {
                axis: Axis::Column,
                index: 3,
                len: 3,
            })
        );
        assert!(m.get(2, 0).is_err());
        assert!(m.set(2, 0, 1.0).is_err());
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
        // a failed set leaves the matrix untouched
        assert_eq!(m, m23());
    }

    #[test]
    fn row_and_column_square() {
        let m = Matrix::new(2, 2, &[1.0, 2.0, 2.0, 1.0]);
        assert_eq!(m.row(1).unwrap(), vec![2.0, 1.0]);
        assert_eq!(m.column(0).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn row_and_column_rectangular() {
        let m = m23();
        assert_eq!(m.row(0).unwrap(), vec![1.0, 2.0, 3.0]);
        assert_eq!(m.row(1).unwrap(), vec![4.0, 5.0, 6.0]);
        assert_eq!(m.column(2).unwrap(), vec![3.0, 6.0]);
    }

    #[test]
    fn row_is_an_owned_copy() {
        let mut m = m23();
        let row = m.row(0).unwrap();
        m.set(0, 0, 9.0).unwrap();
        assert_eq!(row[0], 1.0);
    }

    #[test]
    fn transpose_column_vector() {
        let mut m = Matrix::new(2, 1, &[1.0, 2.0]);
        m.transpose();
        assert_eq!(m.height(), 1);
        assert_eq!(m.width(), 2);
        assert_eq!(m.row(0).unwrap(), vec![1.0, 2.0]);
        assert_eq!(m.column(0).unwrap(), vec![1.0]);
    }

    #[test]
    fn transpose_rectangular() {
        let mut m = m23();
        m.transpose();
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m.elements(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        assert_eq!(m.get(2, 1).unwrap(), 6.0);
    }

    #[test]
    fn double_transpose_restores() {
        let m = Matrix::new(3, 4, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0]);
        let mut t = m.clone();
        t.transpose().transpose();
        assert_eq!(t, m);
    }

    #[test]
    fn clone_does_not_alias() {
        let mut original = m23();
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy.set(0, 0, 100.0).unwrap();
        assert_eq!(original.get(0, 0).unwrap(), 1.0);

        original.set(1, 2, -1.0).unwrap();
        assert_eq!(copy.get(1, 2).unwrap(), 6.0);
    }

    #[test]
    fn iteration_restarts_each_time() {
        let m = m23();
        let first: Vec<f64> = m.iter().collect();
        let second: Vec<f64> = (&m).into_iter().collect();
        assert_eq!(first, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(first, second);
    }

    #[test]
    fn identity_has_unit_diagonal() {
        let m = Matrix::identity(3);
        assert_eq!(
            m.elements(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn nalgebra_round_trip_preserves_layout() {
        let m = m23();
        let d = DMatrix::from(&m);
        assert_eq!(d.nrows(), 2);
        assert_eq!(d.ncols(), 3);
        assert_eq!(d[(1, 0)], 4.0);
        assert_eq!(Matrix::from(&d), m);
    }
}
