//! Human-readable rendering for both forms.
//!
//! Debug/log aid only: `"a + bi"` / `"a - bi"` for rectangular values,
//! `"me^θi"` (normalized reads) for polar ones. Not a parseable format
//! and not a stability contract.

use std::fmt;

use super::{ComplexValue, Number, Polar, Rectangular};

impl fmt::Display for Rectangular {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Fold the sign of a negative imaginary part into the separator.
        if self.imag() < 0.0 {
            write!(f, "{} - {}i", self.real(), -self.imag())
        } else {
            write!(f, "{} + {}i", self.real(), self.imag())
        }
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}e^{}i", self.modulus(), self.phase())
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Rectangular(z) => fmt::Display::fmt(z, f),
            Number::Polar(z) => fmt::Display::fmt(z, f),
            Number::Real(x) => fmt::Display::fmt(x, f),
        }
    }
}
