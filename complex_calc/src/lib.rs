//! Complex number value types
//!
//! This crate provides immutable complex numbers with a single operation
//! set shared by three representations. It includes:
//!
//! - `ComplexNumber` trait with the shared arithmetic
//! - `Rectangular`, `Trigonometric` and `Polar` representations
//! - `Operand` for typed right-hand operands
//! - `Value` and dynamic dispatch for untyped operands
//! - `ArithmeticError` for error handling

pub mod complex;
pub mod dispatch;
pub mod error;
pub mod format;
pub mod intrinsics;
pub mod operand;
pub mod ops;
pub mod polar;
pub mod rectangular;
pub mod trigonometric;
pub mod value;

/// Prelude module for convenient imports
///
/// # Example
/// ```
/// use complex_calc::prelude::*;
///
/// let z = Polar::from_polar(2.0, 0.0);
/// assert_eq!(z.to_polar_form(), z);
/// ```
pub mod prelude {
    pub use super::complex::{ComplexNumber, Representation};
    pub use super::dispatch::{dynamic_binop, dynamic_binop_by_name, BinOp};
    pub use super::error::{ArithmeticError, ArithmeticResult};
    pub use super::operand::Operand;
    pub use super::polar::Polar;
    pub use super::rectangular::Rectangular;
    pub use super::trigonometric::Trigonometric;
    pub use super::value::Value;
}

pub use prelude::*;
