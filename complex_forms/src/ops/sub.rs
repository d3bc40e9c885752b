//! Subtraction kernels. Order-sensitive, so no pair commutes away.

use crate::number::{ComplexValue, Polar, Rectangular};

/// Componentwise difference.
pub(super) fn rect_rect(a: Rectangular, b: Rectangular) -> Rectangular {
    Rectangular::new(a.real() - b.real(), a.imag() - b.imag())
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

/// A real subtrahend only touches the real component.
pub(super) fn rect_real(a: Rectangular, b: f64) -> Rectangular {
    Rectangular::new(a.real() - b, a.imag())
}

pub(super) fn real_rect(a: f64, b: Rectangular) -> Rectangular {
    Rectangular::new(a - b.real(), -b.imag())
}

pub(super) fn polar_real(a: Polar, b: f64) -> Polar {
    rect_real(a.to_rectangular(), b).to_polar()
}

pub(super) fn real_polar(a: f64, b: Polar) -> Polar {
    real_rect(a, b.to_rectangular()).to_polar()
}
