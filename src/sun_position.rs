//! # Low-precision solar ephemeris
//!
//! Declination and equation of time of the sun for a given Julian day, following
//! the U.S. Naval Observatory approximation. Accuracy is about one arcminute
//! within two centuries of J2000.0, which is far below the one-minute
//! resolution of rendered prayer times.
//!
//! ## Steps
//!
//! 1. Mean anomaly `g` and mean longitude `q` grow linearly with `D = jd − J2000`.
//! 2. Ecliptic longitude `L = q + 1.915·sin g + 0.020·sin 2g`.
//! 3. Obliquity `e = 23.439 − 3.6e-7·D`.
//! 4. Right ascension from `atan2(cos e·sin L, cos L)`, expressed in hours.
//! 5. Equation of time `q/15 − RA`, declination `asin(sin e·sin L)`.
//!
//! Reference
//! ---------
//! * <http://aa.usno.navy.mil/faq/docs/SunApprox.php>
use crate::{
    constants::{Degree, Hour, JulianDay, DEGREES_PER_HOUR, J2000},
    degree_math::{darcsin, darctan2, dcos, dsin, fixangle, fixhour},
};

/// Solar coordinates needed by the prayer-time solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunPosition {
    /// Declination of the sun, in degrees
    pub declination: Degree,
    /// Mean minus apparent right ascension, in hours; only meaningful modulo 24
    pub equation_of_time: Hour,
}

/// Compute the declination and the equation of time of the sun.
///
/// Arguments
/// ---------
/// * `jd`: Julian day, fractional part included
///
/// Return
/// ------
/// * a [`SunPosition`]; no bounds checking is done on `jd`
pub fn sun_position(jd: JulianDay) -> SunPosition {
    let d = jd - J2000;
    let g = fixangle(357.529 + 0.985_600_28 * d);
    let q = fixangle(280.459 + 0.985_647_36 * d);
    let l = fixangle(q + 1.915 * dsin(g) + 0.020 * dsin(2.0 * g));

    let e = 23.439 - 0.000_000_36 * d;

    let ra = darctan2(dcos(e) * dsin(l), dcos(l)) / DEGREES_PER_HOUR;
    let equation_of_time = q / DEGREES_PER_HOUR - fixhour(ra);
    let declination = darcsin(dsin(e) * dsin(l));

    SunPosition {
        declination,
        equation_of_time,
    }
}
