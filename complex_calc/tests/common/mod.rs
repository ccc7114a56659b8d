//! Shared helpers for integration tests
// Not every test target uses every helper.
#![allow(dead_code)]

use complex_calc::ComplexNumber;

/// Tolerance of a default float equality assertion
pub const EPS: f64 = 1e-10;

/// Assert both parts of `c` are within `tolerance` of `(real, imaginary)`
pub fn assert_parts_close<C: ComplexNumber>(c: &C, real: f64, imaginary: f64, tolerance: f64) {
    assert!(
        (c.real() - real).abs() <= tolerance && (c.imaginary() - imaginary).abs() <= tolerance,
        "expected ({}, {}) within {}, got {:?}",
        real,
        imaginary,
        tolerance,
        c
    );
}

/// Assert both parts of `c` are exactly `(real, imaginary)`
pub fn assert_parts_eq<C: ComplexNumber>(c: &C, real: f64, imaginary: f64) {
    assert_eq!(
        (c.real(), c.imaginary()),
        (real, imaginary),
        "unexpected parts for {:?}",
        c
    );
}
