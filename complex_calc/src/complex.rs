//! The shared complex-number contract
//!
//! [`ComplexNumber`] defines the whole operation set as provided methods.
//! A representation only supplies its factory and accessors; every
//! algorithm here builds its result with [`ComplexNumber::from_rectangular`],
//! so results always have the receiver's concrete type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ArithmeticError, ArithmeticResult};
use crate::intrinsics;
use crate::operand::Operand;
use crate::rectangular::Rectangular;

/// Construction-time classification of a complex value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Representation {
    /// Parts stored as given
    Rectangular,
    /// Parts canonicalised through a magnitude/argument round-trip
    Trigonometric,
    /// Parts stored as given, tagged as already being in polar form
    Polar,
}

impl Representation {
    /// Get the type name of the representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Representation::Rectangular => "Rectangular",
            Representation::Trigonometric => "Trigonometric",
            Representation::Polar => "Polar",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complex number value type
///
/// Implementors are immutable `Copy` values. All operations take `&self`
/// and return a fresh value built by `from_rectangular`.
///
/// # Example
/// ```
/// use complex_calc::prelude::*;
///
/// let a = Rectangular::new(3.0, 2.0);
/// let b = Rectangular::new(1.0, 4.0);
/// assert_eq!(a.multiply(b), Rectangular::new(-5.0, 14.0));
/// assert_eq!(a.to_string(), "3 + 2i");
/// ```
pub trait ComplexNumber: Copy + fmt::Debug + fmt::Display {
    /// Representation produced by this type's constructor
    const REPRESENTATION: Representation;

    /// Construct a value of this representation from rectangular parts.
    ///
    /// This is the factory every operation uses to build its result.
    fn from_rectangular(real: f64, imaginary: f64) -> Self;

    /// Real part
    fn real(&self) -> f64;

    /// Imaginary part
    fn imaginary(&self) -> f64;

    /// Construct from magnitude and angle (radians)
    fn from_polar(magnitude: f64, angle: f64) -> Self {
        let (real, imaginary) = intrinsics::polar_to_rectangular(magnitude, angle);
        Self::from_rectangular(real, imaginary)
    }

    /// Representation tag of this value
    fn representation(&self) -> Representation {
        Self::REPRESENTATION
    }

    // ========== Binary operations ==========

    /// Addition
    fn add<O: Into<Operand>>(&self, rhs: O) -> Self {
        let (real, imaginary) = match rhs.into() {
            Operand::Scalar(x) => (self.real() + x, self.imaginary()),
            Operand::Complex { real, imaginary } => {
                (self.real() + real, self.imaginary() + imaginary)
            }
        };
        Self::from_rectangular(real, imaginary)
    }

    /// Subtraction
    fn subtract<O: Into<Operand>>(&self, rhs: O) -> Self {
        let (real, imaginary) = match rhs.into() {
            Operand::Scalar(x) => (self.real() - x, self.imaginary()),
            Operand::Complex { real, imaginary } => {
                (self.real() - real, self.imaginary() - imaginary)
            }
        };
        Self::from_rectangular(real, imaginary)
    }

    /// Multiplication
    fn multiply<O: Into<Operand>>(&self, rhs: O) -> Self {
        let (real, imaginary) = match rhs.into() {
            Operand::Scalar(x) => (x * self.real(), x * self.imaginary()),
            Operand::Complex { real, imaginary } => (
                self.real() * real - self.imaginary() * imaginary,
                self.imaginary() * real + self.real() * imaginary,
            ),
        };
        Self::from_rectangular(real, imaginary)
    }

    /// Division
    ///
    /// A scalar divisor divides each part and follows IEEE semantics, so
    /// dividing by `0.0` yields infinities or NaN. A complex divisor is
    /// inverted first and fails with [`ArithmeticError::NonInvertible`]
    /// when it is zero.
    fn divide<O: Into<Operand>>(&self, rhs: O) -> ArithmeticResult<Self> {
        match rhs.into() {
            Operand::Scalar(x) => Ok(Self::from_rectangular(
                self.real() / x,
                self.imaginary() / x,
            )),
            Operand::Complex { real, imaginary } => {
                let inverse = Rectangular::new(real, imaginary).inverse()?;
                Ok(self.multiply(inverse))
            }
        }
    }

    // ========== Unary operations ==========

    /// Multiplicative inverse, `conjugate / magnitude^2`
    fn inverse(&self) -> ArithmeticResult<Self> {
        if self.is_zero() {
            log::debug!("refusing to invert {} zero", Self::REPRESENTATION);
            return Err(ArithmeticError::NonInvertible);
        }
        self.conjugate().divide(self.norm_sqr())
    }

    /// Complex conjugate
    fn conjugate(&self) -> Self {
        Self::from_rectangular(self.real(), -self.imaginary())
    }

    /// Additive inverse
    fn negate(&self) -> Self {
        Self::from_rectangular(-self.real(), -self.imaginary())
    }

    /// Euclidean norm
    fn magnitude(&self) -> f64 {
        intrinsics::magnitude(self.real(), self.imaginary())
    }

    /// Squared Euclidean norm
    fn norm_sqr(&self) -> f64 {
        intrinsics::norm_sqr(self.real(), self.imaginary())
    }

    /// Principal argument in `(-π, π]`
    fn argument(&self) -> f64 {
        intrinsics::argument(self.real(), self.imaginary())
    }

    /// `(magnitude, argument)` pair
    fn polar_coordinates(&self) -> (f64, f64) {
        intrinsics::rectangular_to_polar(self.real(), self.imaginary())
    }

    /// Re-derive this value through its polar coordinates
    fn to_polar_form(&self) -> Self {
        let (real, imaginary) = intrinsics::polar_round_trip(self.real(), self.imaginary());
        Self::from_rectangular(real, imaginary)
    }

    // ========== Predicates and conversion ==========

    /// Check if both parts are zero
    fn is_zero(&self) -> bool {
        intrinsics::is_zero(self.real(), self.imaginary())
    }

    /// Componentwise comparison within `tolerance`
    fn approx_eq<O: Into<Operand>>(&self, other: O, tolerance: f64) -> bool {
        let (real, imaginary) = other.into().parts();
        intrinsics::approx_eq(self.real(), real, tolerance)
            && intrinsics::approx_eq(self.imaginary(), imaginary, tolerance)
    }

    /// Rebuild this value as another representation
    fn convert<D: ComplexNumber>(&self) -> D {
        D::from_rectangular(self.real(), self.imaginary())
    }
}
