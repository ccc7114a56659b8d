//! Rectangular complex numbers
//!
//! The default representation: real and imaginary parts are stored
//! exactly as given.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::complex::{ComplexNumber, Representation};
use crate::format::write_complex;

/// Complex number stored as given `(real, imaginary)` parts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangular {
    real: f64,
    imaginary: f64,
}

impl Rectangular {
    /// Create a new rectangular complex number
    pub const fn new(real: f64, imaginary: f64) -> Self {
        Rectangular { real, imaginary }
    }
}

impl ComplexNumber for Rectangular {
    const REPRESENTATION: Representation = Representation::Rectangular;

    #[inline]
    fn from_rectangular(real: f64, imaginary: f64) -> Self {
        Rectangular::new(real, imaginary)
    }

    #[inline]
    fn real(&self) -> f64 {
        self.real
    }

    #[inline]
    fn imaginary(&self) -> f64 {
        self.imaginary
    }
}

impl fmt::Display for Rectangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_complex(f, self.real, self.imaginary)
    }
}
