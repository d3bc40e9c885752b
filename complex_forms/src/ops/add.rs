//! Addition kernels.

use crate::number::{ComplexValue, Polar, Rectangular};

/// Componentwise sum.
pub(super) fn rect_rect(a: Rectangular, b: Rectangular) -> Rectangular {
    Rectangular::new(a.real() + b.real(), a.imag() + b.imag())
}

pub(super) fn rect_polar(a: Rectangular, b: Polar) -> Rectangular {
    rect_rect(a, b.to_rectangular())
}

/// Both operands polar: sum through rectangular, result back in polar.
pub(super) fn polar_polar(a: Polar, b: Polar) -> Polar {
    rect_rect(a.to_rectangular(), b.to_rectangular()).to_polar()
}

pub(super) fn rect_real(a: Rectangular, b: f64) -> Rectangular {
    rect_rect(a, Rectangular::new(b, 0.0))
}

pub(super) fn polar_real(a: Polar, b: f64) -> Polar {
    rect_rect(a.to_rectangular(), Rectangular::new(b, 0.0)).to_polar()
}
