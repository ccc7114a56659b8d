//! Untyped boundary value
//!
//! This module provides the `Value` enum used when an operand arrives
//! without static type information, for example from deserialised JSON.
//! A `Value` is validated once, when it is converted into an [`Operand`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::complex::ComplexNumber;
use crate::error::{ArithmeticError, ArithmeticResult};
use crate::format::{write_complex, write_real};
use crate::operand::Operand;
use crate::polar::Polar;
use crate::rectangular::Rectangular;
use crate::trigonometric::Trigonometric;

/// Dynamically typed operand
///
/// Deserialises untagged: `3`, `2.5`, `{"real": 1, "imaginary": 2}`,
/// `true`, `"text"` and `null` map to their own variants; any other JSON
/// lands in [`Value::Other`]. A two-element number array `[re, im]` is
/// also read as a complex number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
    /// Complex number in rectangular parts
    Complex { real: f64, imaginary: f64 },
    /// Boolean
    Bool(bool),
    /// String
    Str(String),
    /// Nothing (JSON `null`)
    Nothing,
    /// Any other JSON value
    Other(serde_json::Value),
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int64",
            Value::Float(_) => "Float64",
            Value::Complex { .. } => "Complex",
            Value::Bool(_) => "Bool",
            Value::Str(_) => "String",
            Value::Nothing => "Nothing",
            Value::Other(serde_json::Value::Array(_)) => "Array",
            Value::Other(serde_json::Value::Object(_)) => "Object",
            Value::Other(_) => "Any",
        }
    }

    /// Try to extract as f64
    ///
    /// Integers beyond 2^53 round to the nearest representable f64.
    /// Strings are accepted when they hold a decimal number, optionally
    /// signed and in exponent notation, with surrounding whitespace
    /// ignored (`"5"`, `" 2.5"`, `"-1e3"`). `"inf"`, `"NaN"`, hex and
    /// empty strings are not numbers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::Str(s) => parse_numeric(s),
            _ => None,
        }
    }

    /// Validate this value as a binary operand
    pub fn to_operand(&self) -> ArithmeticResult<Operand> {
        Operand::try_from(self)
    }
}

impl TryFrom<&Value> for Operand {
    type Error = ArithmeticError;

    fn try_from(value: &Value) -> ArithmeticResult<Self> {
        if let Value::Complex { real, imaginary } = value {
            return Ok(Operand::complex(*real, *imaginary));
        }
        match value.as_f64() {
            Some(x) => Ok(Operand::Scalar(x)),
            None => {
                log::debug!("rejecting operand of type {}", value.type_name());
                Err(ArithmeticError::invalid_operand(value.type_name()))
            }
        }
    }
}

/// Parse a decimal numeric string; rejects words such as `inf` and `nan`
fn parse_numeric(s: &str) -> Option<f64> {
    let s = s.trim();
    let decimal_only = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_only || !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl TryFrom<Value> for Operand {
    type Error = ArithmeticError;

    fn try_from(value: Value) -> ArithmeticResult<Self> {
        Operand::try_from(&value)
    }
}

// ========== From implementations ==========

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Nothing
    }
}

impl From<Operand> for Value {
    fn from(op: Operand) -> Self {
        match op {
            Operand::Scalar(x) => Value::Float(x),
            Operand::Complex { real, imaginary } => Value::Complex { real, imaginary },
        }
    }
}

macro_rules! value_from_variant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(c: $ty) -> Self {
                    Value::Complex {
                        real: c.real(),
                        imaginary: c.imaginary(),
                    }
                }
            }
        )*
    };
}

value_from_variant!(Rectangular, Trigonometric, Polar);

// ========== Display implementation ==========

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write_real(f, *v),
            Value::Complex { real, imaginary } => write_complex(f, *real, *imaginary),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::Nothing => write!(f, "nothing"),
            Value::Other(v) => write!(f, "{}", v),
        }
    }
}
