use crate::error::{MatrixError, Result};
use std::fmt;

/// A matrix shape: number of rows and number of columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub rows: usize,
    pub cols: usize,
}

impl Shape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Shape { rows, cols }
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Which matrix a shape error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    /// Left-hand input (m x n).
    A,
    /// Right-hand input (n x p).
    B,
    /// Output (m x p).
    C,
    /// A standalone matrix being constructed.
    Matrix,
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::A => write!(f, "A"),
            Operand::B => write!(f, "B"),
            Operand::C => write!(f, "C"),
            Operand::Matrix => write!(f, "matrix"),
        }
    }
}

/// How a rows-of-rows value disagrees with its expected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mismatch {
    RowCount { expected: usize, got: usize },
    RowLength { row: usize, expected: usize, got: usize },
    /// Declared width disagrees on a matrix with no rows to inspect.
    ColumnCount { expected: usize, got: usize },
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mismatch::RowCount { expected, got } => {
                write!(f, "has {} rows, expected {}", got, expected)
            }
            Mismatch::RowLength { row, expected, got } => {
                write!(f, "row {} has {} columns, expected {}", row, got, expected)
            }
            Mismatch::ColumnCount { expected, got } => {
                write!(f, "has {} columns, expected {}", got, expected)
            }
        }
    }
}

/// Checks that `rows` is exactly `expected.rows` rows of `expected.cols`
/// elements each.
///
/// The first disagreement found is reported: row count before row lengths,
/// rows scanned in order.
pub fn validate_operand<T>(operand: Operand, rows: &[Vec<T>], expected: Shape) -> Result<()> {
    let mismatch = if rows.len() != expected.rows {
        Some(Mismatch::RowCount {
            expected: expected.rows,
            got: rows.len(),
        })
    } else {
        rows.iter()
            .enumerate()
            .find(|(_, row)| row.len() != expected.cols)
            .map(|(i, row)| Mismatch::RowLength {
                row: i,
                expected: expected.cols,
                got: row.len(),
            })
    };

    match mismatch {
        None => Ok(()),
        Some(mismatch) => {
            tracing::debug!(%operand, %mismatch, expected = %expected, "rejecting operand");
            Err(MatrixError::ShapeMismatch { operand, mismatch })
        }
    }
}
