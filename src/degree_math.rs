//! Trigonometry in degrees and circular normalization helpers.
//!
//! Every function converts to radians at the boundary so callers can stay in
//! degrees. `NaN` flows through untouched: an inverse function fed an argument
//! outside its domain yields `NaN`, which the formatter later renders as the
//! invalid-time sentinel.
use crate::constants::{Degree, Hour};

pub fn dsin(d: Degree) -> f64 {
    d.to_radians().sin()
}

pub fn dcos(d: Degree) -> f64 {
    d.to_radians().cos()
}

pub fn dtan(d: Degree) -> f64 {
    d.to_radians().tan()
}

pub fn darcsin(x: f64) -> Degree {
    x.asin().to_degrees()
}

/// Inverse cosine in degrees, `NaN` when `|x| > 1`.
pub fn darccos(x: f64) -> Degree {
    x.acos().to_degrees()
}

pub fn darctan(x: f64) -> Degree {
    x.atan().to_degrees()
}

pub fn darccot(x: f64) -> Degree {
    (1.0 / x).atan().to_degrees()
}

pub fn darctan2(y: f64, x: f64) -> Degree {
    y.atan2(x).to_degrees()
}

/// Reduce `a` into `[0, modulus)`.
///
/// Arguments
/// ---------
/// * `a`: the value to normalize, any sign
/// * `modulus`: the period (360 for angles, 24 for hours)
///
/// Return
/// ------
/// * the normalized value, or `NaN` unchanged
pub fn fix(a: f64, modulus: f64) -> f64 {
    if a.is_nan() {
        return a;
    }
    let r = a - modulus * (a / modulus).floor();
    // rounding of tiny negative inputs can land exactly on the modulus
    if r < 0.0 {
        r + modulus
    } else if r >= modulus {
        r - modulus
    } else {
        r
    }
}

pub fn fixangle(angle: Degree) -> Degree {
    fix(angle, 360.0)
}

pub fn fixhour(hour: Hour) -> Hour {
    fix(hour, 24.0)
}

/// Circular distance going forward from `from` to `to`, in `[0, 24)` hours.
pub fn time_diff(from: Hour, to: Hour) -> Hour {
    fixhour(to - from)
}

#[cfg(test)]
mod degree_math_test {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    #[test]
    fn test_trigonometry_in_degrees() {
        assert_abs_diff_eq!(dsin(30.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dcos(60.0), 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(dtan(45.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(darcsin(0.5), 30.0, epsilon = 1e-10);
        assert_abs_diff_eq!(darccos(0.5), 60.0, epsilon = 1e-10);
        assert_abs_diff_eq!(darctan(1.0), 45.0, epsilon = 1e-10);
        assert_abs_diff_eq!(darccot(1.0), 45.0, epsilon = 1e-10);
        assert_abs_diff_eq!(darctan2(1.0, -1.0), 135.0, epsilon = 1e-10);
    }

    #[test]
    fn test_arccos_out_of_domain_is_nan() {
        assert!(darccos(1.2).is_nan());
        assert!(darccos(-1.0000001).is_nan());
    }

    #[test]
    fn test_fix() {
        assert_eq!(fix(370.0, 360.0), 10.0);
        assert_eq!(fix(-30.0, 360.0), 330.0);
        assert_eq!(fixhour(24.5), 0.5);
        assert_eq!(fixhour(-1.0), 23.0);
        assert_eq!(fixangle(720.0), 0.0);
        assert!(fix(f64::NAN, 24.0).is_nan());
        assert!(fix(-1e-18, 24.0) < 24.0);
    }

    #[test]
    fn test_time_diff_is_circular() {
        assert_eq!(time_diff(22.0, 2.0), 4.0);
        assert_eq!(time_diff(2.0, 22.0), 20.0);
        assert!(time_diff(f64::NAN, 2.0).is_nan());
    }

    proptest! {
        #[test]
        fn fix_is_idempotent_and_bounded(a in -1.0e6f64..1.0e6, m in prop::sample::select(vec![24.0f64, 360.0])) {
            let once = fix(a, m);
            prop_assert!((0.0..m).contains(&once));
            prop_assert_eq!(fix(once, m), once);
        }
    }
}
