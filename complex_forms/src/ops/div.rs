//! Division kernels.
//!
//! Rectangular quotients take the polar round-trip — modulus quotient and
//! phase difference — instead of the conjugate formula. A zero divisor
//! modulus yields ∞ through ordinary float division; nothing guards it.

use crate::number::{ComplexValue, Polar, Rectangular};

pub(super) fn rect_rect(a: Rectangular, b: Rectangular) -> Rectangular {
    Polar::new(a.modulus() / b.modulus(), a.phase() - b.phase()).to_rectangular()
}

pub(super) fn rect_polar(a: Rectangular, b: Polar) -> Rectangular {
    rect_rect(a, b.to_rectangular())
}

pub(super) fn polar_rect(a: Polar, b: Rectangular) -> Rectangular {
    rect_rect(a.to_rectangular(), b)
}

/// Both operands polar: no round-trip.
pub(super) fn polar_polar(a: Polar, b: Polar) -> Polar {
    Polar::new(a.modulus() / b.modulus(), a.phase() - b.phase())
}

pub(super) fn rect_real(a: Rectangular, b: f64) -> Rectangular {
    rect_rect(a, Rectangular::new(b, 0.0))
}

pub(super) fn real_rect(a: f64, b: Rectangular) -> Rectangular {
    rect_rect(Rectangular::new(a, 0.0), b)
}

pub(super) fn polar_real(a: Polar, b: f64) -> Polar {
    Polar::new(a.modulus() / b, a.phase())
}

/// Real numerator over a polar divisor: reciprocal modulus, negated phase.
pub(super) fn real_polar(a: f64, b: Polar) -> Polar {
    Polar::new(a / b.modulus(), -b.phase())
}
