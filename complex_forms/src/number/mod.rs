//! The two concrete complex representations and the tagged variant that
//! joins them for dispatch.
//!
//! ```text
//! Number
//!  ├── Rectangular   (real, imaginary) — derives modulus/phase on demand
//!  ├── Polar         (magnitude, angle) — derives real/imaginary on demand
//!  └── Real          bare f64 scalar, promoted per operation
//! ```
//!
//! # Sub-modules
//!
//! - `rectangular`, `polar`: the concrete forms and their conversions
//! - `display`: human-readable rendering (a debugging aid, not a format)

mod display;
mod polar;
mod rectangular;

#[cfg(test)]
mod tests;

pub use polar::Polar;
pub use rectangular::Rectangular;

use serde::{Deserialize, Serialize};

/// Common contract of every complex value: both coordinate readings plus
/// conjugation, whatever form the value is stored in.
///
/// Each implementation computes all five operations from its own stored
/// fields; there is no shared default. Every operation is a total function
/// of floating-point inputs — NaN and infinity propagate per IEEE-754
/// instead of being rejected.
pub trait ComplexValue {
    /// Real component.
    fn real(&self) -> f64;
    /// Imaginary component.
    fn imag(&self) -> f64;
    /// Non-negative magnitude, `sqrt(real² + imag²)`.
    fn modulus(&self) -> f64;
    /// Angle in radians relative to the positive real axis, normalized
    /// into (−π, π].
    fn phase(&self) -> f64;
    /// Reflection across the real axis, in the receiver's own form.
    fn conjugate(&self) -> Self;
}

/// A complex operand in whichever form the caller holds it.
///
/// This is the dispatch currency of [`crate::ops`]: each arithmetic entry
/// point takes two `impl Into<Number>` operands and matches on the pair
/// of tags, standing in for an overload set over
/// {rectangular, polar, scalar}.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Number {
    Rectangular(Rectangular),
    Polar(Polar),
    /// A bare real scalar. Observationally identical to
    /// `Rectangular(x, 0.0)`; pairing it with a polar operand keeps the
    /// result polar.
    Real(f64),
}

impl ComplexValue for Number {
    fn real(&self) -> f64 {
        match self {
            Number::Rectangular(z) => z.real(),
            Number::Polar(z) => z.real(),
            Number::Real(x) => *x,
        }
    }

    fn imag(&self) -> f64 {
        match self {
            Number::Rectangular(z) => z.imag(),
            Number::Polar(z) => z.imag(),
            Number::Real(_) => 0.0,
        }
    }

    fn modulus(&self) -> f64 {
        match self {
            Number::Rectangular(z) => z.modulus(),
            Number::Polar(z) => z.modulus(),
            Number::Real(x) => x.abs(),
        }
    }

    fn phase(&self) -> f64 {
        match self {
            Number::Rectangular(z) => z.phase(),
            Number::Polar(z) => z.phase(),
            Number::Real(x) => Rectangular::new(*x, 0.0).phase(),
        }
    }

    fn conjugate(&self) -> Number {
        match self {
            Number::Rectangular(z) => Number::Rectangular(z.conjugate()),
            Number::Polar(z) => Number::Polar(z.conjugate()),
            Number::Real(x) => Number::Real(*x),
        }
    }
}

impl From<Rectangular> for Number {
    fn from(z: Rectangular) -> Number {
        Number::Rectangular(z)
    }
}

impl From<Polar> for Number {
    fn from(z: Polar) -> Number {
        Number::Polar(z)
    }
}

impl From<f64> for Number {
    fn from(x: f64) -> Number {
        Number::Real(x)
    }
}
