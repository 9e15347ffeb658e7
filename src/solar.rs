// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Low-precision solar ephemeris.
//!
//! Mean longitude and mean anomaly are linear in days since J2000.0, the
//! equation of centre keeps its two leading terms, and the obliquity drifts
//! linearly. The result is good to well under an arcminute for present-day
//! dates: ample for civil prayer times, not for general astronomy.

use crate::julian::JulianDay;
use crate::trig::{asin, atan2, cos, fix_angle, fix_hour, sin};
use qtty::Degrees;

/// Sun position terms consumed by the event solver.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarPosition {
    /// Solar declination.
    pub declination: Degrees,
    /// Equation of time, in hours (apparent minus mean solar time).
    ///
    /// Around the March equinox the raw value can come out a whole day off
    /// (about ±24 h); callers only use it through `fix_hour(12 - eot)`.
    pub equation_of_time: f64,
}

impl SolarPosition {
    /// Evaluates the ephemeris at `jd`, which already carries any fractional
    /// time-of-day offset.
    pub fn at(jd: JulianDay) -> Self {
        let d = jd.days_since_j2000();

        // mean longitude, mean anomaly
        let q = fix_angle(280.46061837 + 0.98564736 * d);
        let g = fix_angle(357.528 + 0.98560028 * d);
        // ecliptic longitude, obliquity
        let l = fix_angle(q + 1.915 * sin(g) + 0.02 * sin(2.0 * g));
        let e = 23.439 - 0.00000036 * d;

        let declination = asin(sin(e) * sin(l));
        let right_ascension = atan2(cos(e) * sin(l), cos(l)) / 15.0;

        Self {
            declination: Degrees::new(declination),
            equation_of_time: q / 15.0 - fix_hour(right_ascension),
        }
    }
}
