//! Operator overloads
//!
//! `+`, `-` and `*` accept any right-hand side that converts into an
//! [`Operand`] and delegate to [`ComplexNumber`]. Division stays a method
//! because it can fail.

use std::ops::{Add, Mul, Neg, Sub};

use crate::complex::ComplexNumber;
use crate::operand::Operand;
use crate::polar::Polar;
use crate::rectangular::Rectangular;
use crate::trigonometric::Trigonometric;

macro_rules! impl_complex_ops {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<O: Into<Operand>> Add<O> for $ty {
                type Output = $ty;

                fn add(self, rhs: O) -> $ty {
                    ComplexNumber::add(&self, rhs)
                }
            }

            impl<O: Into<Operand>> Sub<O> for $ty {
                type Output = $ty;

                fn sub(self, rhs: O) -> $ty {
                    ComplexNumber::subtract(&self, rhs)
                }
            }

            impl<O: Into<Operand>> Mul<O> for $ty {
                type Output = $ty;

                fn mul(self, rhs: O) -> $ty {
                    ComplexNumber::multiply(&self, rhs)
                }
            }

            impl Neg for $ty {
                type Output = $ty;

                fn neg(self) -> $ty {
                    ComplexNumber::negate(&self)
                }
            }
        )*
    };
}

impl_complex_ops!(Rectangular, Trigonometric, Polar);
