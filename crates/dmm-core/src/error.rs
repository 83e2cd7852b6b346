use crate::shape::{Mismatch, Operand};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("shape mismatch in {operand}: {mismatch}")]
    ShapeMismatch { operand: Operand, mismatch: Mismatch },
    #[error("integer overflow while computing C[{row}][{col}]")]
    Overflow { row: usize, col: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
