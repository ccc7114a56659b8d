//! Dynamic dispatch of binary operations
//!
//! This module runs binary operations whose right-hand operand is an
//! untyped [`Value`]. The operand is validated once, then the typed
//! operation on [`ComplexNumber`] does the work, so results keep the
//! receiver's representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::complex::ComplexNumber;
use crate::error::{ArithmeticError, ArithmeticResult};
use crate::operand::Operand;
use crate::value::Value;

/// Binary operation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// All binary operations, in declaration order
    pub const ALL: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

    /// Get the operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Get the operation name
    pub fn name(&self) -> &'static str {
        match self {
            BinOp::Add => "add",
            BinOp::Sub => "subtract",
            BinOp::Mul => "multiply",
            BinOp::Div => "divide",
        }
    }

    /// Look up an operation by name or symbol
    pub fn from_name(name: &str) -> Option<BinOp> {
        BinOp::ALL
            .into_iter()
            .find(|op| op.name() == name || op.as_str() == name)
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BinOp {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> ArithmeticResult<Self> {
        BinOp::from_name(s).ok_or_else(|| ArithmeticError::unknown_operation(s))
    }
}

/// Apply a typed binary operation
pub fn apply_binop<C: ComplexNumber>(op: BinOp, lhs: &C, rhs: Operand) -> ArithmeticResult<C> {
    match op {
        BinOp::Add => Ok(lhs.add(rhs)),
        BinOp::Sub => Ok(lhs.subtract(rhs)),
        BinOp::Mul => Ok(lhs.multiply(rhs)),
        BinOp::Div => lhs.divide(rhs),
    }
}

/// Perform dynamic binary operation
///
/// Fails with [`ArithmeticError::InvalidOperand`] when `rhs` is neither a
/// number nor a complex number.
pub fn dynamic_binop<C: ComplexNumber>(op: BinOp, lhs: &C, rhs: &Value) -> ArithmeticResult<C> {
    log::trace!(
        "{}({}:::{}, {}:::{})",
        op.name(),
        lhs,
        C::REPRESENTATION,
        rhs,
        rhs.type_name()
    );
    let operand = Operand::try_from(rhs)?;
    apply_binop(op, lhs, operand)
}

/// Perform dynamic binary operation looked up by name
pub fn dynamic_binop_by_name<C: ComplexNumber>(
    name: &str,
    lhs: &C,
    rhs: &Value,
) -> ArithmeticResult<C> {
    let op: BinOp = name.parse()?;
    dynamic_binop(op, lhs, rhs)
}
