// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Degree-based trigonometry and range normalisation.
//!
//! Every function here works in **degrees**: the direct functions convert
//! their argument to radians before calling the `f64` intrinsic, the inverse
//! functions convert their result back to degrees.
//!
//! Nothing is trapped: `acos(2.0)` is `NaN`, and that `NaN` is left to
//! propagate into whatever prayer time consumes it.

use std::f64::consts::PI;

#[inline]
fn deg_to_rad(d: f64) -> f64 {
    d * PI / 180.0
}

#[inline]
fn rad_to_deg(r: f64) -> f64 {
    r * 180.0 / PI
}

/// Sine of an angle in degrees.
#[inline]
pub fn sin(d: f64) -> f64 {
    deg_to_rad(d).sin()
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cos(d: f64) -> f64 {
    deg_to_rad(d).cos()
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tan(d: f64) -> f64 {
    deg_to_rad(d).tan()
}

/// Arcsine, in degrees.
#[inline]
pub fn asin(x: f64) -> f64 {
    rad_to_deg(x.asin())
}

/// Arccosine, in degrees. `NaN` outside `[-1, 1]`.
#[inline]
pub fn acos(x: f64) -> f64 {
    rad_to_deg(x.acos())
}

/// Four-quadrant arctangent of `y / x`, in degrees.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    rad_to_deg(y.atan2(x))
}

/// Arccotangent, in degrees.
#[inline]
pub fn acot(x: f64) -> f64 {
    rad_to_deg((1.0 / x).atan())
}

/// True modulo: `value mod modulus`, with a negative remainder shifted up by
/// one modulus.
#[inline]
pub fn fix(value: f64, modulus: f64) -> f64 {
    let r = value % modulus;
    if r < 0.0 {
        r + modulus
    } else {
        r
    }
}

/// Wraps an angle into `[0, 360)`.
#[inline]
pub fn fix_angle(degrees: f64) -> f64 {
    fix(degrees, 360.0)
}

/// Wraps an hour value into `[0, 24)`.
#[inline]
pub fn fix_hour(hours: f64) -> f64 {
    fix(hours, 24.0)
}

/// Forward distance in hours from `t1` to `t2`, wrapped into `[0, 24)`.
#[inline]
pub fn time_diff(t1: f64, t2: f64) -> f64 {
    fix_hour(t2 - t1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_direct_functions_take_degrees() {
        assert!((sin(90.0) - 1.0).abs() < EPS);
        assert!((sin(30.0) - 0.5).abs() < EPS);
        assert!((cos(60.0) - 0.5).abs() < EPS);
        assert!((cos(180.0) + 1.0).abs() < EPS);
        assert!((tan(45.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_inverse_functions_return_degrees() {
        assert!((asin(0.5) - 30.0).abs() < 1e-9);
        assert!((acos(0.5) - 60.0).abs() < 1e-9);
        assert!((atan2(1.0, 1.0) - 45.0).abs() < 1e-9);
        assert!((atan2(1.0, -1.0) - 135.0).abs() < 1e-9);
        assert!((acot(1.0) - 45.0).abs() < 1e-9);
        assert!((acot(3.0_f64.sqrt()) - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_acos_out_of_domain_is_nan() {
        assert!(acos(1.5).is_nan());
        assert!(acos(-1.000_001).is_nan());
        assert!(cos(f64::NAN).is_nan());
    }

    #[test]
    fn test_fix_range_and_periodicity() {
        for &x in &[-725.5, -360.0, -0.25, 0.0, 12.0, 359.9, 360.0, 1_000.125] {
            let r = fix(x, 360.0);
            assert!((0.0..360.0).contains(&r), "fix({x}, 360) = {r}");
            for k in -3..=3 {
                let shifted = fix(x + k as f64 * 360.0, 360.0);
                assert!((shifted - r).abs() < 1e-9, "k = {k}, x = {x}");
            }
        }
    }

    #[test]
    fn test_fix_negative_remainder_is_shifted() {
        assert_eq!(fix(-1.0, 24.0), 23.0);
        assert_eq!(fix_hour(-6.5), 17.5);
        assert_eq!(fix_angle(-90.0), 270.0);
        assert_eq!(fix_angle(450.0), 90.0);
        assert_eq!(fix_hour(48.0), 0.0);
    }

    #[test]
    fn test_time_diff() {
        for &t in &[-3.0, 0.0, 5.75, 23.99, 29.15] {
            assert_eq!(time_diff(t, t), 0.0);
        }
        assert_eq!(time_diff(22.0, 2.0), 4.0);
        assert_eq!(time_diff(2.0, 22.0), 20.0);
        for &(a, b) in &[(23.7, 10.6), (10.6, 23.7), (-4.0, 40.0), (1.0, 1.5)] {
            let d = time_diff(a, b);
            assert!((0.0..24.0).contains(&d));
        }
    }
}
