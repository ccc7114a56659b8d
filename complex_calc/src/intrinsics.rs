//! Scalar math kernels shared by every complex representation
//!
//! The trait methods on [`ComplexNumber`](crate::complex::ComplexNumber)
//! are thin wrappers over these functions, so all variants compute
//! magnitude, argument and polar conversion the same way.

// ========== Constants ==========

/// Default tolerance for approximate component comparison
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Tolerance for comparing values that went through a polar round-trip
pub const POLAR_TOLERANCE: f64 = 1e-5;

/// Mathematical constant π
pub const PI: f64 = std::f64::consts::PI;

// ========== Magnitude and argument ==========

/// Squared Euclidean norm of `(real, imaginary)`
#[inline]
pub fn norm_sqr(real: f64, imaginary: f64) -> f64 {
    real * real + imaginary * imaginary
}

/// Euclidean norm of `(real, imaginary)`
///
/// Computed as `sqrt(real^2 + imaginary^2)` rather than `hypot`, so
/// results match the plain formula bit for bit.
#[inline]
pub fn magnitude(real: f64, imaginary: f64) -> f64 {
    norm_sqr(real, imaginary).sqrt()
}

/// Principal angle of `(real, imaginary)`, in `(-π, π]`
#[inline]
pub fn argument(real: f64, imaginary: f64) -> f64 {
    imaginary.atan2(real)
}

// ========== Coordinate conversion ==========

/// Convert `(magnitude, angle)` to `(real, imaginary)`
#[inline]
pub fn polar_to_rectangular(magnitude: f64, angle: f64) -> (f64, f64) {
    (magnitude * angle.cos(), magnitude * angle.sin())
}

/// Convert `(real, imaginary)` to `(magnitude, angle)`
#[inline]
pub fn rectangular_to_polar(real: f64, imaginary: f64) -> (f64, f64) {
    (magnitude(real, imaginary), argument(real, imaginary))
}

/// Re-derive a rectangular pair through its polar coordinates.
///
/// Numerically the identity up to rounding.
#[inline]
pub fn polar_round_trip(real: f64, imaginary: f64) -> (f64, f64) {
    let (r, theta) = rectangular_to_polar(real, imaginary);
    polar_to_rectangular(r, theta)
}

// ========== Predicates ==========

/// Check if both components are zero (`-0.0` counts as zero)
#[inline]
pub fn is_zero(real: f64, imaginary: f64) -> bool {
    real == 0.0 && imaginary == 0.0
}

/// Check if two scalars differ by at most `tolerance`
#[inline]
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        assert_eq!(magnitude(0.0, 0.0), 0.0);
        assert_eq!(magnitude(1.0, 2.0), 5.0_f64.sqrt());
        assert_eq!(magnitude(-2.0, -2.0), 8.0_f64.sqrt());
        assert_eq!(magnitude(-1.0, 0.0), 1.0);
    }

    #[test]
    fn test_argument_range() {
        assert_eq!(argument(1.0, 0.0), 0.0);
        assert!(approx_eq(argument(0.0, 1.0), PI / 2.0, DEFAULT_TOLERANCE));
        assert!(approx_eq(argument(-1.0, 0.0), PI, DEFAULT_TOLERANCE));
        assert!(approx_eq(argument(-1.0, -1.0), -3.0 * PI / 4.0, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_polar_conversion() {
        let (re, im) = polar_to_rectangular(2.0, PI / 2.0);
        assert!(approx_eq(re, 0.0, DEFAULT_TOLERANCE));
        assert!(approx_eq(im, 2.0, DEFAULT_TOLERANCE));

        let (r, theta) = rectangular_to_polar(5.0, 2.0);
        assert!(approx_eq(r, 5.3851648071, POLAR_TOLERANCE));
        assert!(approx_eq(theta, 0.3805063771, POLAR_TOLERANCE));
    }

    #[test]
    fn test_round_trip_is_identity() {
        let (re, im) = polar_round_trip(-5.0, -3.0);
        assert!(approx_eq(re, -5.0, DEFAULT_TOLERANCE));
        assert!(approx_eq(im, -3.0, DEFAULT_TOLERANCE));

        assert_eq!(polar_round_trip(0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_predicates() {
        assert!(is_zero(0.0, 0.0));
        assert!(is_zero(-0.0, 0.0));
        assert!(!is_zero(0.0, 1e-300));
        assert!(approx_eq(1.0, 1.0 + 1e-12, DEFAULT_TOLERANCE));
        assert!(!approx_eq(1.0, 1.1, DEFAULT_TOLERANCE));
    }
}
