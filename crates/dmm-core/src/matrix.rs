use crate::cpu::CpuBackend;
use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::shape::{validate_operand, Mismatch, Operand, Shape};

/// An owned, rectangular integer matrix stored as rows of rows.
///
/// The column count is kept alongside the rows, so a matrix with zero rows
/// still knows how wide it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<T> {
    rows: Vec<Vec<T>>,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Build a matrix from rows, rejecting rows of unequal length.
    ///
    /// An empty `rows` gives a 0x0 matrix; use [`Matrix::zeros`] for `0 x p`.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        validate_operand(Operand::Matrix, &rows, Shape::new(rows.len(), cols))?;
        Ok(Matrix { rows, cols })
    }

    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows: vec![vec![T::ZERO; cols]; rows],
            cols,
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for (i, row) in m.rows.iter_mut().enumerate() {
            row[i] = T::ONE;
        }
        m
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows.len(), self.cols)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.rows.get(row)?.get(col).copied()
    }

    pub fn into_rows(self) -> Vec<Vec<T>> {
        self.rows
    }

    /// Multiply `self * rhs` into `out`, overwriting its contents.
    ///
    /// Inner dimensions must agree and `out` must already have shape
    /// `self.nrows() x rhs.ncols()`.
    pub fn multiply_into(&self, rhs: &Matrix<T>, out: &mut Matrix<T>) -> Result<()> {
        self.multiply_into_with(&CpuBackend::new(), rhs, out)
    }

    /// Same as [`Matrix::multiply_into`] with an explicit backend.
    pub fn multiply_into_with(
        &self,
        backend: &CpuBackend,
        rhs: &Matrix<T>,
        out: &mut Matrix<T>,
    ) -> Result<()> {
        let (m, n, p) = (self.nrows(), self.ncols(), rhs.ncols());
        backend.multiply(&self.rows, &rhs.rows, &mut out.rows, m, n, p)?;
        // With rows present the width was checked above; a 0-row output
        // carries it only in `cols`.
        if out.ncols() != p {
            let mismatch = Mismatch::ColumnCount {
                expected: p,
                got: out.ncols(),
            };
            tracing::debug!(operand = %Operand::C, %mismatch, "rejecting operand");
            return Err(MatrixError::ShapeMismatch {
                operand: Operand::C,
                mismatch,
            });
        }
        Ok(())
    }

    /// Allocate a zeroed `self.nrows() x rhs.ncols()` output and multiply
    /// into it.
    pub fn matmul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        let mut out = Matrix::zeros(self.nrows(), rhs.ncols());
        self.multiply_into(rhs, &mut out)?;
        Ok(out)
    }
}

impl<T: Element, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T> {
    fn from(rows: [[T; C]; R]) -> Self {
        Matrix {
            rows: rows.iter().map(|r| r.to_vec()).collect(),
            cols: C,
        }
    }
}
