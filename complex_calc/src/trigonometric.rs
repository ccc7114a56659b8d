//! Trigonometric complex numbers
//!
//! A `Trigonometric` value never stores its constructor inputs directly.
//! The inputs are read as a rectangular pair, converted to magnitude and
//! argument, and stored as `(r·cos θ, r·sin θ)`. The round-trip is the
//! identity up to rounding and is kept on purpose: every value of this
//! type, including every operation result and every deserialised value,
//! is in the same canonical form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::complex::{ComplexNumber, Representation};
use crate::format::write_complex;
use crate::intrinsics::polar_round_trip;
use crate::rectangular::Rectangular;

/// Complex number canonicalised through its polar coordinates
///
/// The default value is zero, which is already canonical.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Rectangular")]
pub struct Trigonometric {
    real: f64,
    imaginary: f64,
}

impl Trigonometric {
    /// Create a new trigonometric complex number from rectangular parts
    pub fn new(real: f64, imaginary: f64) -> Self {
        let (real, imaginary) = polar_round_trip(real, imaginary);
        Trigonometric { real, imaginary }
    }
}

impl From<Rectangular> for Trigonometric {
    fn from(c: Rectangular) -> Self {
        Trigonometric::new(c.real(), c.imaginary())
    }
}

impl ComplexNumber for Trigonometric {
    const REPRESENTATION: Representation = Representation::Trigonometric;

    #[inline]
    fn from_rectangular(real: f64, imaginary: f64) -> Self {
        Trigonometric::new(real, imaginary)
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

impl fmt::Display for Trigonometric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_complex(f, self.real, self.imaginary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intrinsics::{DEFAULT_TOLERANCE, POLAR_TOLERANCE};

    #[test]
    fn test_construction_canonicalises() {
        let (re, im) = polar_round_trip(3.0, 2.0);
        let c = Trigonometric::new(3.0, 2.0);
        assert_eq!((c.real(), c.imaginary()), (re, im));
        assert!(c.approx_eq(Rectangular::new(3.0, 2.0), DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_zero_stays_zero() {
        let c = Trigonometric::new(0.0, 0.0);
        assert!(c.is_zero());
        assert_eq!(c.to_string(), "0");
        assert_eq!(Trigonometric::default(), c);
    }

    #[test]
    fn test_to_polar_form_rederives() {
        let cases = [
            (5.0, 2.0, 5.3851648071, 0.3805063771),
            (-1.0, -1.0, 1.4142135624, -2.3561944902),
            (814.0, -54.0, 815.7891884550, -0.0662420059),
        ];
        for (re, im, r, theta) in cases {
            let expected = Rectangular::new(r * f64::cos(theta), r * f64::sin(theta));
            let polar = Trigonometric::new(re, im).to_polar_form();
            assert!(
                polar.approx_eq(expected, POLAR_TOLERANCE),
                "({re}, {im}) -> {polar:?}"
            );
        }
    }

    #[test]
    fn test_operation_results_are_canonical() {
        let a = Trigonometric::new(3.0, 2.0);
        let sum = a.add(Rectangular::new(4.0, -3.0));
        let (re, im) = polar_round_trip(a.real() + 4.0, a.imaginary() - 3.0);
        assert_eq!((sum.real(), sum.imaginary()), (re, im));
    }

    #[test]
    fn test_deserialize_goes_through_constructor() {
        let c: Trigonometric =
            serde_json::from_str(r#"{"real": 3.0, "imaginary": 2.0}"#).unwrap();
        assert_eq!(c, Trigonometric::new(3.0, 2.0));
    }
}
