//! Exponentiation kernels, principal branch throughout.
//!
//! The general rule works in log-polar terms: for `a^b`,
//! `|result| = exp(b.re·ln|a| − b.im·arg(a))` and
//! `arg(result) = b.re·arg(a) + b.im·ln|a|`. Real-base and real-exponent
//! pairs get the cheaper specializations below; `ln` of a zero or
//! negative real base is left unguarded and produces −∞/NaN on purpose.

use crate::number::{ComplexValue, Polar, Rectangular};

pub(super) fn rect_rect(a: Rectangular, b: Rectangular) -> Rectangular {
    let ln_m = a.modulus().ln();
    let theta = a.phase();
    Polar::new(
        (b.real() * ln_m - b.imag() * theta).exp(),
        b.real() * theta + b.imag() * ln_m,
    )
    .to_rectangular()
}

pub(super) fn rect_polar(a: Rectangular, b: Polar) -> Rectangular {
    rect_rect(a, b.to_rectangular())
}

pub(super) fn polar_rect(a: Polar, b: Rectangular) -> Rectangular {
    rect_rect(a.to_rectangular(), b)
}

pub(super) fn polar_polar(a: Polar, b: Polar) -> Polar {
    rect_rect(a.to_rectangular(), b.to_rectangular()).to_polar()
}

/// Complex base, real exponent: de Moivre on the polar view.
pub(super) fn rect_real(a: Rectangular, b: f64) -> Rectangular {
    let z = a.to_polar();
    Polar::new(z.modulus().powf(b), z.phase() * b).to_rectangular()
}

/// Real base, complex exponent: `|result| = a^b.re`, `arg = b.im·ln(a)`.
pub(super) fn real_rect(a: f64, b: Rectangular) -> Rectangular {
    Polar::new(a.powf(b.real()), b.imag() * a.ln()).to_rectangular()
}

pub(super) fn polar_real(a: Polar, b: f64) -> Polar {
    Polar::new(a.modulus().powf(b), a.phase() * b)
}

pub(super) fn real_polar(a: f64, b: Polar) -> Polar {
    real_rect(a, b.to_rectangular()).to_polar()
}
