//! String rendering shared by every complex representation

use std::fmt::{self, Write};

/// Significant digits kept when rendering a component
pub const SIGNIFICANT_DIGITS: usize = 14;

/// Write a real number with at most [`SIGNIFICANT_DIGITS`] significant digits.
///
/// Trailing zeros are dropped, so rounding noise such as
/// `1.9999999999999996` renders as `2`. Magnitudes below `1e-4` or with
/// more integer digits than `SIGNIFICANT_DIGITS` use exponent form with
/// an explicit sign and at least one fractional digit (`1.0E+25`,
/// `1.2246467991474E-16`). Non-finite values render as `INF`, `-INF` and
/// `NAN`.
pub fn write_real<W: Write>(w: &mut W, x: f64) -> fmt::Result {
    if x.is_nan() {
        return w.write_str("NAN");
    }
    if x.is_infinite() {
        return w.write_str(if x > 0.0 { "INF" } else { "-INF" });
    }
    if x == 0.0 {
        return w.write_str(if x.is_sign_negative() { "-0" } else { "0" });
    }
    if x < 0.0 {
        w.write_char('-')?;
    }

    // d.ddddddddddddde<exp>, correctly rounded
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, x.abs());
    let (mantissa, exponent) = scientific.split_once('e').ok_or(fmt::Error)?;
    let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let digits = digits.trim_end_matches('0');

    // digits before the decimal point
    let point = exponent + 1;
    if point < -3 || point > SIGNIFICANT_DIGITS as i32 {
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let sign = if exponent < 0 { '-' } else { '+' };
        write!(w, "{}.{}E{}{}", lead, rest, sign, exponent.unsigned_abs())
    } else if point <= 0 {
        w.write_str("0.")?;
        for _ in point..0 {
            w.write_char('0')?;
        }
        w.write_str(digits)
    } else {
        let point = point as usize;
        if digits.len() <= point {
            w.write_str(digits)?;
            for _ in digits.len()..point {
                w.write_char('0')?;
            }
            Ok(())
        } else {
            write!(w, "{}.{}", &digits[..point], &digits[point..])
        }
    }
}

/// Render a real number to an owned string, see [`write_real`]
pub fn format_real(x: f64) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_real(&mut out, x);
    out
}

/// Write `(real, imaginary)` in the canonical complex notation.
///
/// | parts            | output       |
/// |------------------|--------------|
/// | both zero        | `0`          |
/// | real zero        | `{im}i`      |
/// | imaginary zero   | `{re}`       |
/// | imaginary > 0    | `{re} + {im}i` |
/// | imaginary < 0    | `{re} - {abs(im)}i` |
///
/// Components are written by [`write_real`].
pub fn write_complex(f: &mut fmt::Formatter<'_>, real: f64, imaginary: f64) -> fmt::Result {
    if real == 0.0 && imaginary == 0.0 {
        f.write_str("0")
    } else if real == 0.0 {
        write_real(f, imaginary)?;
        f.write_str("i")
    } else if imaginary == 0.0 {
        write_real(f, real)
    } else {
        write_real(f, real)?;
        f.write_str(if imaginary > 0.0 { " + " } else { " - " })?;
        write_real(f, imaginary.abs())?;
        f.write_str("i")
    }
}

/// Render `(real, imaginary)` to an owned string
pub fn render_complex(real: f64, imaginary: f64) -> String {
    struct Parts(f64, f64);

    impl fmt::Display for Parts {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_complex(f, self.0, self.1)
        }
    }

    Parts(real, imaginary).to_string()
}
