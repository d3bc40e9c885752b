//! Multiplication kernels.

use crate::number::{ComplexValue, Polar, Rectangular};

/// Standard complex product: `(ac − bd, ad + bc)`.
pub(super) fn rect_rect(a: Rectangular, b: Rectangular) -> Rectangular {
    Rectangular::new(
        a.real() * b.real() - a.imag() * b.imag(),
        a.real() * b.imag() + a.imag() * b.real(),
    )
}

pub(super) fn rect_polar(a: Rectangular, b: Polar) -> Rectangular {
    rect_rect(a, b.to_rectangular())
}

/// Moduli multiply and phases add; no conversion at all.
pub(super) fn polar_polar(a: Polar, b: Polar) -> Polar {
    Polar::new(a.modulus() * b.modulus(), a.phase() + b.phase())
}

pub(super) fn rect_real(a: Rectangular, b: f64) -> Rectangular {
    Rectangular::new(a.real() * b, a.imag() * b)
}

/// Scales the observed modulus (absolute value of the stored magnitude),
/// phase untouched.
pub(super) fn polar_real(a: Polar, b: f64) -> Polar {
    Polar::new(a.modulus() * b, a.phase())
}
