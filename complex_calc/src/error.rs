//! Arithmetic error types
//!
//! This module provides the error kinds that complex-number operations
//! can report to their caller.

use thiserror::Error;

/// Arithmetic error type
///
/// Every failure is reported to the immediate caller; nothing is retried
/// or recovered inside the crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// Right-hand operand is neither a real scalar nor a complex number
    #[error("InvalidOperand: argument must be a number or a complex number, got {0}")]
    InvalidOperand(String),

    /// Multiplicative inverse of complex zero
    #[error("NonInvertible: complex zero has no multiplicative inverse")]
    NonInvertible,

    /// Operation name not recognised by the dynamic dispatcher
    #[error("UnknownOperation: no binary operation named {0}")]
    UnknownOperation(String),
}

impl ArithmeticError {
    /// Create an invalid operand error naming the rejected type
    pub fn invalid_operand<S: Into<String>>(type_name: S) -> Self {
        ArithmeticError::InvalidOperand(type_name.into())
    }

    /// Create an unknown operation error
    pub fn unknown_operation<S: Into<String>>(name: S) -> Self {
        ArithmeticError::UnknownOperation(name.into())
    }
}

/// Result type alias for complex arithmetic
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
