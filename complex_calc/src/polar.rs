//! Polar-tagged complex numbers
//!
//! A `Polar` value records that it already holds the rectangular image of
//! a magnitude/angle pair. It stores its parts without transform, and
//! [`ComplexNumber::to_polar_form`] returns it unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::complex::{ComplexNumber, Representation};
use crate::format::write_complex;

/// Complex number tagged as originating from polar coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Polar {
    real: f64,
    imaginary: f64,
}

impl Polar {
    /// Create a polar-tagged value from rectangular parts
    ///
    /// Use [`ComplexNumber::from_polar`] to build one from magnitude and angle.
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Polar { real, imaginary }
    }
}

impl ComplexNumber for Polar {
    const REPRESENTATION: Representation = Representation::Polar;

    #[inline]
    fn from_rectangular(real: f64, imaginary: f64) -> Self {
        Polar::new(real, imaginary)
    }

    #[inline]
    fn real(&self) -> f64 {
        self.real
    }

    #[inline]
    fn imaginary(&self) -> f64 {
        self.imaginary
    }

    /// Already canonical; returns `self`.
    fn to_polar_form(&self) -> Self {
        *self
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_complex(f, self.real, self.imaginary)
    }
}
