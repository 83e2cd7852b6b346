use crate::element::Element;
use crate::error::{MatrixError, Result};
use crate::shape::{validate_operand, Operand, Shape};

/// What to do when an accumulated product does not fit the element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Two's-complement wraparound.
    #[default]
    Wrapping,
    /// Stop and report `MatrixError::Overflow`.
    Checked,
}

/// Pure-Rust CPU multiplier.
///
/// Implements `C = A * B` with the straightforward i, j, k triple loop over
/// rows-of-rows matrices. Every output cell is computed from scratch, so the
/// prior contents of C never leak into the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuBackend {
    overflow: Overflow,
}

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend {
            overflow: Overflow::Wrapping,
        }
    }

    pub fn with_overflow(overflow: Overflow) -> Self {
        CpuBackend { overflow }
    }

    pub fn overflow(&self) -> Overflow {
        self.overflow
    }

    pub fn name(&self) -> &str {
        match self.overflow {
            Overflow::Wrapping => "cpu-wrapping",
            Overflow::Checked => "cpu-checked",
        }
    }

    /// Matrix multiplication into a caller-sized output: C = A * B.
    ///
    /// - `a`: m rows of n elements
    /// - `b`: n rows of p elements
    /// - `c`: m rows of p elements, overwritten
    ///
    /// All three operands are validated before C is touched. Under
    /// `Overflow::Checked` an overflow error may leave C partially written.
    pub fn multiply<T: Element>(
        &self,
        a: &[Vec<T>],
        b: &[Vec<T>],
        c: &mut [Vec<T>],
        m: usize,
        n: usize,
        p: usize,
    ) -> Result<()> {
        validate_operand(Operand::A, a, Shape::new(m, n))?;
        validate_operand(Operand::B, b, Shape::new(n, p))?;
        validate_operand(Operand::C, c, Shape::new(m, p))?;

        tracing::trace!(m, n, p, backend = self.name(), dtype = T::NAME, "multiply");

        for (i, (a_row, c_row)) in a.iter().zip(c.iter_mut()).enumerate() {
            for (j, out) in c_row.iter_mut().enumerate() {
                *out = match self.overflow {
                    Overflow::Wrapping => dot_wrapping(a_row, b, j),
                    Overflow::Checked => dot_checked(a_row, b, j).ok_or_else(|| {
                        tracing::debug!(row = i, col = j, dtype = T::NAME, "overflow");
                        MatrixError::Overflow { row: i, col: j }
                    })?,
                };
            }
        }
        Ok(())
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Row `a_row` of A times column `j` of B.
fn dot_wrapping<T: Element>(a_row: &[T], b: &[Vec<T>], j: usize) -> T {
    a_row
        .iter()
        .zip(b)
        .fold(T::ZERO, |acc, (&x, b_row)| acc.wrapping_add(x.wrapping_mul(b_row[j])))
}

fn dot_checked<T: Element>(a_row: &[T], b: &[Vec<T>], j: usize) -> Option<T> {
    a_row.iter().zip(b).try_fold(T::ZERO, |acc, (&x, b_row)| {
        acc.checked_add(x.checked_mul(b_row[j])?)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Mismatch;

    fn backend() -> CpuBackend {
        CpuBackend::new()
    }

    #[test]
    fn test_default_is_wrapping() {
        assert_eq!(CpuBackend::default().overflow(), Overflow::Wrapping);
        assert_eq!(backend().name(), "cpu-wrapping");
        assert_eq!(
            CpuBackend::with_overflow(Overflow::Checked).name(),
            "cpu-checked"
        );
    }

    #[test]
    fn test_multiply_identity() {
        let a = vec![vec![1, 0], vec![0, 1]];
        let x = vec![vec![1, 2], vec![3, 4]];
        let mut c = vec![vec![0; 2]; 2];
        backend().multiply(&a, &x, &mut c, 2, 2, 2).unwrap();
        assert_eq!(c, vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_multiply_basic() {
        // [1,2;3,4] @ [5,6;7,8] = [19,22;43,50]
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![5, 6], vec![7, 8]];
        let mut c = vec![vec![0; 2]; 2];
        backend().multiply(&a, &b, &mut c, 2, 2, 2).unwrap();
        assert_eq!(c, vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn test_overwrites_output() {
        let a = vec![vec![2]];
        let b = vec![vec![3]];
        let mut c = vec![vec![100]];
        backend().multiply(&a, &b, &mut c, 1, 1, 1).unwrap();
        assert_eq!(c, vec![vec![6]]);
    }

    #[test]
    fn test_wrapping_overflow() {
        let a = vec![vec![i32::MAX]];
        let b = vec![vec![2]];
        let mut c = vec![vec![0]];
        backend().multiply(&a, &b, &mut c, 1, 1, 1).unwrap();
        assert_eq!(c, vec![vec![-2]]);
    }

    #[test]
    fn test_wrapping_in_accumulation() {
        // each product fits, the sum does not
        let a = vec![vec![i32::MAX, 1]];
        let b = vec![vec![1], vec![1]];
        let mut c = vec![vec![0]];
        backend().multiply(&a, &b, &mut c, 1, 2, 1).unwrap();
        assert_eq!(c, vec![vec![i32::MIN]]);
    }

    #[test]
    fn test_checked_overflow_reports_cell() {
        let a = vec![vec![1, 1], vec![i32::MAX, 1]];
        let b = vec![vec![1, 0], vec![0, 1]];
        let mut c = vec![vec![0; 2]; 2];
        let res = CpuBackend::with_overflow(Overflow::Checked)
            .multiply(&a, &b, &mut c, 2, 2, 2);
        assert_eq!(res, Ok(()));
        assert_eq!(c, vec![vec![1, 1], vec![i32::MAX, 1]]);

        let b = vec![vec![1, 1], vec![1, 1]];
        let err = CpuBackend::with_overflow(Overflow::Checked)
            .multiply(&a, &b, &mut c, 2, 2, 2)
            .unwrap_err();
        assert_eq!(err, MatrixError::Overflow { row: 1, col: 0 });
    }

    #[test]
    fn test_checked_matches_wrapping_without_overflow() {
        let a = vec![vec![1i64, -2, 3], vec![-4, 5, -6]];
        let b = vec![vec![7i64, -8], vec![9, 10], vec![-11, 12]];
        let mut wrapped = vec![vec![0; 2]; 2];
        let mut checked = vec![vec![0; 2]; 2];
        backend().multiply(&a, &b, &mut wrapped, 2, 3, 2).unwrap();
        CpuBackend::with_overflow(Overflow::Checked)
            .multiply(&a, &b, &mut checked, 2, 3, 2)
            .unwrap();
        assert_eq!(wrapped, checked);
        assert_eq!(wrapped, vec![vec![-44, 8], vec![83, 10]]);
    }

    #[test]
    fn test_unsigned_elements() {
        let a = vec![vec![1u8, 2], vec![3, 4]];
        let b = vec![vec![5u8, 6], vec![7, 8]];
        let mut c = vec![vec![0u8; 2]; 2];
        backend().multiply(&a, &b, &mut c, 2, 2, 2).unwrap();
        assert_eq!(c, vec![vec![19, 22], vec![43, 50]]);
    }

    #[test]
    fn test_shape_error_leaves_output_untouched() {
        let a = vec![vec![1, 2], vec![3, 4]];
        let b = vec![vec![1, 2], vec![3]];
        let mut c = vec![vec![9; 2]; 2];
        let err = backend().multiply(&a, &b, &mut c, 2, 2, 2).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                operand: Operand::B,
                mismatch: Mismatch::RowLength {
                    row: 1,
                    expected: 2,
                    got: 1
                },
            }
        );
        assert_eq!(c, vec![vec![9; 2]; 2]);
    }

    #[test]
    fn test_declared_dims_disagree_with_a() {
        let a = vec![vec![1, 2, 3]];
        let b = vec![vec![1], vec![2], vec![3]];
        let mut c = vec![vec![0]; 2];
        let err = backend().multiply(&a, &b, &mut c, 2, 3, 1).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeMismatch {
                operand: Operand::A,
                mismatch: Mismatch::RowCount {
                    expected: 2,
                    got: 1
                },
            }
        );
    }
}
