//! Complex-number arithmetic over two coexisting representations.
//!
//! A complex value lives in one of two concrete forms:
//!
//! - [`Rectangular`]: stored as (real, imaginary) components
//! - [`Polar`]: stored as (magnitude, angle), i.e. `m·e^(iθ)`
//!
//! Every binary operation (add, sub, mul, div, pow) is defined for every
//! combination of rectangular, polar, and bare real-scalar operands via
//! the [`Number`] tagged variant. The result representation follows a
//! fixed convention rather than caller request: rectangular, unless the
//! polar form carries through the whole computation (both operands polar,
//! or a polar operand paired with a scalar).
//!
//! Domain irregularities (zero modulus, logarithm of a non-positive real
//! base) are float values, not control flow: everything propagates as
//! IEEE-754 NaN/Inf and no operation returns `Result` or panics.

// Prevent accidental debug output in library code.
#![deny(clippy::print_stderr)]
#![deny(clippy::print_stdout)]

pub mod number;
pub mod ops;

pub use number::{ComplexValue, Number, Polar, Rectangular};
pub use ops::{add, div, mul, pow, sub};
