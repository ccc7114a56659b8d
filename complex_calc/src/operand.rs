//! Right-hand operand of binary complex operations
//!
//! `Operand` is the statically typed form of "a real scalar or a complex
//! number". Any variant converts into it, so a receiver of one
//! representation accepts operands of every other.

use serde::{Deserialize, Serialize};

use crate::complex::ComplexNumber;
use crate::polar::Polar;
use crate::rectangular::Rectangular;
use crate::trigonometric::Trigonometric;

/// Real scalar or complex right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Operand {
    /// Real scalar
    Scalar(f64),
    /// Complex number in rectangular parts
    Complex { real: f64, imaginary: f64 },
}

impl Operand {
    /// Create a complex operand from its parts
    pub fn complex(real: f64, imaginary: f64) -> Self {
        Operand::Complex { real, imaginary }
    }

    /// Rectangular parts of this operand (a scalar has zero imaginary part)
    pub fn parts(&self) -> (f64, f64) {
        match *self {
            Operand::Scalar(x) => (x, 0.0),
            Operand::Complex { real, imaginary } => (real, imaginary),
        }
    }
}

// ========== From implementations ==========

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Operand::Scalar(v)
    }
}

impl From<f32> for Operand {
    fn from(v: f32) -> Self {
        Operand::Scalar(f64::from(v))
    }
}

impl From<i32> for Operand {
    fn from(v: i32) -> Self {
        Operand::Scalar(f64::from(v))
    }
}

/// Magnitudes beyond 2^53 round to the nearest representable f64
impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Operand::Scalar(v as f64)
    }
}

macro_rules! operand_from_variant {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                fn from(c: $ty) -> Self {
                    Operand::complex(c.real(), c.imaginary())
                }
            }

            impl From<&$ty> for Operand {
                fn from(c: &$ty) -> Self {
                    Operand::complex(c.real(), c.imaginary())
                }
            }
        )*
    };
}

operand_from_variant!(Rectangular, Trigonometric, Polar);
