//! Arithmetic dispatch across representation pairs.
//!
//! Each operator is defined for every combination of rectangular, polar,
//! and bare-real operands. The entry points take `impl Into<Number>`,
//! match on the pair of variant tags, and route to a per-pair kernel. The
//! result representation is fixed by convention, not chosen by the
//! caller: rectangular, unless the polar form carries all the way through
//! (both operands polar, or a polar operand paired with a scalar).
//!
//! A bare scalar paired with another bare scalar is promoted to
//! `Rectangular(a, 0.0)` on the left, so every operator is total over
//! `Number × Number`.
//!
//! # Sub-modules
//!
//! - `add`, `sub`, `mul`, `div`, `pow`: the per-pair kernels, one
//!   operator per file

mod add;
mod div;
mod mul;
mod pow;
mod sub;

use crate::number::{Number, Rectangular};

/// `a + b`. Componentwise over rectangular components; two polar operands
/// round-trip through rectangular and come back polar.
pub fn add(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Rectangular(a), Number::Rectangular(b)) => add::rect_rect(a, b).into(),
        (Number::Rectangular(a), Number::Polar(b)) => add::rect_polar(a, b).into(),
        // Addition commutes.
        (Number::Polar(a), Number::Rectangular(b)) => add::rect_polar(b, a).into(),
        (Number::Polar(a), Number::Polar(b)) => add::polar_polar(a, b).into(),
        (Number::Rectangular(a), Number::Real(b)) => add::rect_real(a, b).into(),
        (Number::Real(a), Number::Rectangular(b)) => add::rect_real(b, a).into(),
        (Number::Polar(a), Number::Real(b)) => add::polar_real(a, b).into(),
        (Number::Real(a), Number::Polar(b)) => add::polar_real(b, a).into(),
        (Number::Real(a), Number::Real(b)) => add::rect_real(Rectangular::new(a, 0.0), b).into(),
    }
}

/// `a - b`. Order-sensitive; same representation convention as [`add`].
pub fn sub(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Rectangular(a), Number::Rectangular(b)) => sub::rect_rect(a, b).into(),
        (Number::Rectangular(a), Number::Polar(b)) => sub::rect_polar(a, b).into(),
        (Number::Polar(a), Number::Rectangular(b)) => sub::polar_rect(a, b).into(),
        (Number::Polar(a), Number::Polar(b)) => sub::polar_polar(a, b).into(),
        (Number::Rectangular(a), Number::Real(b)) => sub::rect_real(a, b).into(),
        (Number::Real(a), Number::Rectangular(b)) => sub::real_rect(a, b).into(),
        (Number::Polar(a), Number::Real(b)) => sub::polar_real(a, b).into(),
        (Number::Real(a), Number::Polar(b)) => sub::real_polar(a, b).into(),
        (Number::Real(a), Number::Real(b)) => sub::rect_real(Rectangular::new(a, 0.0), b).into(),
    }
}

/// `a × b`. Two polar operands multiply directly on modulus and phase —
/// the reason the polar form exists; every mixed pair goes rectangular.
pub fn mul(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Rectangular(a), Number::Rectangular(b)) => mul::rect_rect(a, b).into(),
        (Number::Rectangular(a), Number::Polar(b)) => mul::rect_polar(a, b).into(),
        // Multiplication commutes.
        (Number::Polar(a), Number::Rectangular(b)) => mul::rect_polar(b, a).into(),
        (Number::Polar(a), Number::Polar(b)) => mul::polar_polar(a, b).into(),
        (Number::Rectangular(a), Number::Real(b)) => mul::rect_real(a, b).into(),
        (Number::Real(a), Number::Rectangular(b)) => mul::rect_real(b, a).into(),
        (Number::Polar(a), Number::Real(b)) => mul::polar_real(a, b).into(),
        (Number::Real(a), Number::Polar(b)) => mul::polar_real(b, a).into(),
        (Number::Real(a), Number::Real(b)) => mul::rect_real(Rectangular::new(a, 0.0), b).into(),
    }
}

/// `a / b`. Rectangular quotients go through the polar round-trip
/// (modulus quotient, phase difference) rather than the conjugate
/// formula; two polar operands skip the round-trip entirely. Division by
/// a zero modulus yields ∞ per standard float division.
pub fn div(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Rectangular(a), Number::Rectangular(b)) => div::rect_rect(a, b).into(),
        (Number::Rectangular(a), Number::Polar(b)) => div::rect_polar(a, b).into(),
        (Number::Polar(a), Number::Rectangular(b)) => div::polar_rect(a, b).into(),
        (Number::Polar(a), Number::Polar(b)) => div::polar_polar(a, b).into(),
        (Number::Rectangular(a), Number::Real(b)) => div::rect_real(a, b).into(),
        (Number::Real(a), Number::Rectangular(b)) => div::real_rect(a, b).into(),
        (Number::Polar(a), Number::Real(b)) => div::polar_real(a, b).into(),
        (Number::Real(a), Number::Polar(b)) => div::real_polar(a, b).into(),
        (Number::Real(a), Number::Real(b)) => div::rect_real(Rectangular::new(a, 0.0), b).into(),
    }
}

/// `a ^ b`, principal branch. A base of exactly zero under a full complex
/// exponent degenerates to NaN + NaN·i through `ln(0) = −∞`; a negative
/// or zero real base under a complex exponent meets an unguarded `ln`.
/// Both are accepted float-level outcomes, not special cases.
pub fn pow(a: impl Into<Number>, b: impl Into<Number>) -> Number {
    match (a.into(), b.into()) {
        (Number::Rectangular(a), Number::Rectangular(b)) => pow::rect_rect(a, b).into(),
        (Number::Rectangular(a), Number::Polar(b)) => pow::rect_polar(a, b).into(),
        (Number::Polar(a), Number::Rectangular(b)) => pow::polar_rect(a, b).into(),
        (Number::Polar(a), Number::Polar(b)) => pow::polar_polar(a, b).into(),
        (Number::Rectangular(a), Number::Real(b)) => pow::rect_real(a, b).into(),
        (Number::Real(a), Number::Rectangular(b)) => pow::real_rect(a, b).into(),
        (Number::Polar(a), Number::Real(b)) => pow::polar_real(a, b).into(),
        (Number::Real(a), Number::Polar(b)) => pow::real_polar(a, b).into(),
        (Number::Real(a), Number::Real(b)) => pow::rect_real(Rectangular::new(a, 0.0), b).into(),
    }
}

macro_rules! impl_binary_op {
    ($op_trait:ident, $method:ident, $entry:ident) => {
        impl std::ops::$op_trait for Number {
            type Output = Number;
            fn $method(self, rhs: Number) -> Number {
                $entry(self, rhs)
            }
        }

        impl std::ops::$op_trait<f64> for Number {
            type Output = Number;
            fn $method(self, rhs: f64) -> Number {
                $entry(self, rhs)
            }
        }

        impl std::ops::$op_trait<Number> for f64 {
            type Output = Number;
            fn $method(self, rhs: Number) -> Number {
                $entry(self, rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add);
impl_binary_op!(Sub, sub, sub);
impl_binary_op!(Mul, mul, mul);
impl_binary_op!(Div, div, div);
