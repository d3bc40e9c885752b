//! Polar form: a complex value stored as magnitude and angle.

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

use super::{ComplexValue, Rectangular};

/// A complex value stored as `magnitude · e^(i·angle)`.
///
/// The stored fields are looser than the observed value: the magnitude
/// may be negative (the same point with its angle shifted by π, produced
/// by the divide and power shortcuts) and the angle may lie outside
/// (−π, π]. `modulus()` and `phase()` normalize on every read, as a pure
/// computation with no write-back; `real()` and `imag()` evaluate the
/// trig on the raw stored fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    magnitude: f64,
    angle: f64,
}

impl Polar {
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// Convert to rectangular form via the derived components.
    pub fn to_rectangular(&self) -> Rectangular {
        Rectangular::new(self.real(), self.imag())
    }
}

impl ComplexValue for Polar {
    /// `0.0` exactly when the angle is an odd multiple of π/2, where the
    /// cosine term would be pure floating noise; otherwise the signed
    /// stored magnitude times the cosine of the raw stored angle.
    fn real(&self) -> f64 {
        if self.angle.sin().abs() == 1.0 {
            0.0
        } else {
            self.magnitude * self.angle.cos()
        }
    }

    /// Symmetric to [`Self::real`]: `0.0` exactly when the angle is an
    /// even multiple of π/2.
    fn imag(&self) -> f64 {
        if self.angle.cos().abs() == 1.0 {
            0.0
        } else {
            self.magnitude * self.angle.sin()
        }
    }

    fn modulus(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Stored angle wrapped into (−π, π] by repeated ±2π steps, computed
    /// fresh on every read. A non-finite angle is returned unchanged —
    /// no number of 2π steps can land it in range.
    fn phase(&self) -> f64 {
        if !self.angle.is_finite() {
            return self.angle;
        }
        let mut theta = self.angle;
        while theta > PI {
            theta -= TAU;
        }
        while theta < -PI {
            theta += TAU;
        }
        theta
    }

    fn conjugate(&self) -> Polar {
        Polar::new(self.magnitude, -self.angle)
    }
}
