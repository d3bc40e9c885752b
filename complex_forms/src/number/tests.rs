use super::*;

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

fn assert_close(got: f64, want: f64) {
    assert!(
        (got - want).abs() < 1e-10,
        "expected {want}, got {got}"
    );
}

// ==================== Rectangular ====================

#[test]
fn test_rectangular_accessors_verbatim() {
    let z = Rectangular::new(3.0, 4.0);
    assert_eq!(z.real(), 3.0);
    assert_eq!(z.imag(), 4.0);
}

#[test]
fn test_rectangular_modulus() {
    // 3-4-5 triangle
    assert_eq!(Rectangular::new(3.0, 4.0).modulus(), 5.0);
    assert_eq!(Rectangular::new(0.0, 0.0).modulus(), 0.0);
}

#[test]
fn test_rectangular_phase_first_quadrant() {
    assert_eq!(Rectangular::new(1.0, 1.0).phase(), FRAC_PI_4);
    assert_eq!(Rectangular::new(1.0, 0.0).phase(), 0.0);
}

#[test]
fn test_rectangular_phase_imaginary_axis() {
    // real == 0 branches: ±π/2, and 0 at the origin
    assert_eq!(Rectangular::new(0.0, 5.0).phase(), FRAC_PI_2);
    assert_eq!(Rectangular::new(0.0, -5.0).phase(), -FRAC_PI_2);
    assert_eq!(Rectangular::new(0.0, 0.0).phase(), 0.0);
}

#[test]
fn test_rectangular_phase_left_half_plane() {
    // Quadrant correction shifts toward the sign of the imaginary part
    assert_close(Rectangular::new(-1.0, 1.0).phase(), 3.0 * FRAC_PI_4);
    assert_close(Rectangular::new(-1.0, -1.0).phase(), -3.0 * FRAC_PI_4);
}

#[test]
fn test_rectangular_phase_negative_real_axis() {
    // No shift when the imaginary part is exactly zero: a negative real
    // reports phase 0, not π. Pinned behavior.
    assert_eq!(Rectangular::new(-1.0, 0.0).phase(), 0.0);
}

#[test]
fn test_rectangular_conjugate() {
    let z = Rectangular::new(3.0, -4.0);
    assert_eq!(z.conjugate(), Rectangular::new(3.0, 4.0));
    assert_eq!(z.conjugate().conjugate(), z);
}

// ==================== Polar ====================

#[test]
fn test_polar_modulus_is_absolute() {
    // A negative stored magnitude is the same point with phase shifted
    // by π; the observed modulus is always non-negative.
    assert_eq!(Polar::new(-3.0, 0.0).modulus(), 3.0);
    assert_eq!(Polar::new(3.0, 0.0).modulus(), 3.0);
}

#[test]
fn test_polar_phase_in_range_passthrough() {
    assert_eq!(Polar::new(1.0, 0.5).phase(), 0.5);
    assert_eq!(Polar::new(1.0, -0.5).phase(), -0.5);
    assert_eq!(Polar::new(1.0, PI).phase(), PI);
}

#[test]
fn test_polar_phase_wraps_on_read() {
    assert_close(Polar::new(1.0, 5.0 * FRAC_PI_2).phase(), FRAC_PI_2);
    assert_close(Polar::new(1.0, -5.0 * FRAC_PI_2).phase(), -FRAC_PI_2);
    assert_eq!(Polar::new(1.0, TAU).phase(), 0.0);
}

#[test]
fn test_polar_phase_wrap_is_pure() {
    // Wrapping never writes back: the stored angle stays raw, so two
    // reads agree and the value stays bitwise equal to itself.
    let z = Polar::new(1.0, 5.0 * FRAC_PI_2);
    let first = z.phase();
    assert_eq!(z.phase(), first);
    assert_eq!(z, Polar::new(1.0, 5.0 * FRAC_PI_2));
}

#[test]
fn test_polar_phase_bounds() {
    for theta in [-10.0, -4.0, -1.0, 0.0, 2.0, 7.0, 40.0] {
        let p = Polar::new(1.0, theta).phase();
        assert!((-PI..=PI).contains(&p), "phase {p} out of range for {theta}");
    }
}

#[test]
fn test_polar_phase_nonfinite_angle() {
    assert!(Polar::new(1.0, f64::NAN).phase().is_nan());
    assert!(Polar::new(1.0, f64::INFINITY).phase().is_infinite());
}

#[test]
fn test_polar_exact_quadrant_zeroing() {
    // At odd multiples of π/2 the real part is exactly 0, not a tiny
    // floating error; the imaginary part is exactly ±modulus.
    let z = Polar::new(1.0, FRAC_PI_2);
    assert_eq!(z.real(), 0.0);
    assert_eq!(z.imag(), 1.0);

    let z = Polar::new(5.0, -FRAC_PI_2);
    assert_eq!(z.real(), 0.0);
    assert_eq!(z.imag(), -5.0);

    // Even multiples zero the imaginary part instead.
    let z = Polar::new(2.0, 0.0);
    assert_eq!(z.real(), 2.0);
    assert_eq!(z.imag(), 0.0);

    let z = Polar::new(1.0, PI);
    assert_eq!(z.real(), -1.0);
    assert_eq!(z.imag(), 0.0);
}

#[test]
fn test_polar_components_use_signed_magnitude() {
    let z = Polar::new(-2.0, 0.0);
    assert_eq!(z.real(), -2.0);
    assert_eq!(z.imag(), 0.0);
}

#[test]
fn test_polar_conjugate() {
    let z = Polar::new(2.0, 0.5);
    assert_eq!(z.conjugate(), Polar::new(2.0, -0.5));
    assert_eq!(z.conjugate().conjugate(), z);
}

// ==================== Conversions ====================

#[test]
fn test_rectangular_polar_round_trip() {
    let z = Rectangular::new(3.0, 4.0);
    let back = z.to_polar().to_rectangular();
    assert_close(back.real(), 3.0);
    assert_close(back.imag(), 4.0);
}

#[test]
fn test_polar_rectangular_round_trip() {
    let z = Polar::new(2.0, 0.5);
    let back = z.to_rectangular().to_polar();
    assert_close(back.modulus(), 2.0);
    assert_close(back.phase(), 0.5);
}

#[test]
fn test_to_polar_of_axis_points() {
    let z = Rectangular::new(0.0, -5.0).to_polar();
    assert_eq!(z.modulus(), 5.0);
    assert_eq!(z.phase(), -FRAC_PI_2);
}

// ==================== Number ====================

#[test]
fn test_number_real_variant_accessors() {
    let x = Number::Real(-3.0);
    assert_eq!(x.real(), -3.0);
    assert_eq!(x.imag(), 0.0);
    assert_eq!(x.modulus(), 3.0);
    // Same reading as Rectangular(-3.0, 0.0): phase 0 on the negative
    // real axis.
    assert_eq!(x.phase(), 0.0);
    assert_eq!(x.conjugate(), x);
}

#[test]
fn test_number_delegates_per_variant() {
    let z = Number::from(Rectangular::new(0.0, 5.0));
    assert_eq!(z.phase(), FRAC_PI_2);

    let z = Number::from(Polar::new(-3.0, 0.0));
    assert_eq!(z.modulus(), 3.0);
}

#[test]
fn test_number_conjugate_keeps_representation() {
    let z = Number::from(Polar::new(2.0, 0.5)).conjugate();
    assert!(matches!(z, Number::Polar(_)));

    let z = Number::from(Rectangular::new(1.0, 2.0)).conjugate();
    assert!(matches!(z, Number::Rectangular(_)));
}

#[test]
fn test_number_from_conversions() {
    assert!(matches!(Number::from(1.5), Number::Real(_)));
    assert!(matches!(
        Number::from(Rectangular::new(1.0, 2.0)),
        Number::Rectangular(_)
    ));
    assert!(matches!(
        Number::from(Polar::new(1.0, 2.0)),
        Number::Polar(_)
    ));
}
