use std::fmt;

use thiserror::Error;

/// Top-level error type for the affinity crate.
#[derive(Debug, Error, PartialEq)]
pub enum AffinityError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error(transparent)]
    Path(#[from] PathError),
}

/// Which matrix axis an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Column => f.write_str("column"),
        }
    }
}

/// Errors raised by matrix access and matrix arithmetic.
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("incompatible matrices for {operation}: {left:?} and {right:?}")]
    DimensionMismatch {
        operation: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("{axis} index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { axis: Axis, index: usize, len: usize },
}

/// Errors raised by point-sequence bookkeeping.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("point index {index} is out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Convenience type alias for results using [`AffinityError`].
pub type Result<T> = std::result::Result<T, AffinityError>;
