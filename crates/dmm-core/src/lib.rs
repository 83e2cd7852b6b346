//! `dmm-core` - Dense integer matrix multiplication with a checked shape contract.
//!
//! This crate provides:
//! - [`multiply`]: `C = A * B` into a caller-sized output, fixed-width wrapping arithmetic
//! - [`multiply_checked`]: the same, reporting overflow instead of wrapping
//! - A `CpuBackend` carrying the overflow policy
//! - A rectangular `Matrix` value type and `Shape` utilities
//!
//! ```
//! let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
//! let b = vec![vec![7, 8], vec![9, 10], vec![11, 12]];
//! let mut c = vec![vec![0; 2]; 2];
//!
//! dmm_core::multiply(&a, &b, &mut c, 2, 3, 2).unwrap();
//! assert_eq!(c, vec![vec![58, 64], vec![139, 154]]);
//! ```

pub mod cpu;
pub mod element;
pub mod error;
pub mod matrix;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use cpu::{CpuBackend, Overflow};
pub use element::Element;
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use shape::{validate_operand, Mismatch, Operand, Shape};

/// Matrix multiply: C = A * B, wrapping on overflow.
///
/// `a` is m x n, `b` is n x p, `c` is m x p and is overwritten. Returns
/// `MatrixError::ShapeMismatch` without touching `c` if any operand
/// disagrees with the declared dimensions.
pub fn multiply<T: Element>(
    a: &[Vec<T>],
    b: &[Vec<T>],
    c: &mut [Vec<T>],
    m: usize,
    n: usize,
    p: usize,
) -> Result<()> {
    CpuBackend::new().multiply(a, b, c, m, n, p)
}

/// Same as [`multiply`] but fails with `MatrixError::Overflow` instead of
/// wrapping. `c` may be partially written on overflow.
pub fn multiply_checked<T: Element>(
    a: &[Vec<T>],
    b: &[Vec<T>],
    c: &mut [Vec<T>],
    m: usize,
    n: usize,
    p: usize,
) -> Result<()> {
    CpuBackend::with_overflow(Overflow::Checked).multiply(a, b, c, m, n, p)
}
