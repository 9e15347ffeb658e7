// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Sun-event time solver.
//!
//! All solvers are one-shot: the solar position is evaluated once at the
//! seed time and the crossing is solved against that single position. The
//! seed therefore has to be a sensible guess for the event (05:00 for dawn,
//! 18:00 for dusk, ...). There is no refinement step.
//!
//! Times come back as hours of apparent solar time on the day of `jd`.

use crate::julian::JulianDay;
use crate::solar::SolarPosition;
use crate::trig::{acos, acot, cos, fix_hour, sin, tan};
use qtty::{Days, Degrees};

/// Earth mean radius in metres (IUGG R₁).
pub const EARTH_RADIUS_M: f64 = 6_371_008.771_4;

/// Apparent solar depression of the sun's upper limb at sunrise and sunset,
/// in degrees (refraction plus semi-diameter).
pub const HORIZON_DEPRESSION: f64 = 0.833;

/// Which side of solar noon an event falls on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Morning events: imsak, fajr, sunrise.
    BeforeNoon,
    /// Afternoon and evening events: asr, sunset, maghrib, isha.
    AfterNoon,
}

/// Local apparent noon in hours, with the equation of time evaluated at
/// `jd + time`.
pub fn mid_day(jd: JulianDay, time: Days) -> f64 {
    let eqt = SolarPosition::at(jd + time).equation_of_time;
    fix_hour(12.0 - eqt)
}

/// Hour at which the sun sits `angle` degrees below the horizon (negative
/// angles are above it) as seen from `latitude`, seeded at `jd + time`.
///
/// Returns `NaN` when the sun never reaches that angle on this day, as in
/// polar day or polar night.
pub fn sun_angle_time(
    jd: JulianDay,
    latitude: Degrees,
    angle: Degrees,
    time: Days,
    direction: Direction,
) -> f64 {
    let pos = SolarPosition::at(jd + time);
    let decl = pos.declination.value();
    let lat = latitude.value();

    let noon = fix_hour(12.0 - pos.equation_of_time);
    let cos_hour_angle = (-sin(angle.value()) - sin(decl) * sin(lat)) / (cos(decl) * cos(lat));
    let hour_angle = acos(cos_hour_angle) / 15.0;

    match direction {
        Direction::BeforeNoon => noon - hour_angle,
        Direction::AfterNoon => noon + hour_angle,
    }
}

/// Effective depression angle for sunrise and sunset seen from
/// `elevation_m` metres above sea level.
///
/// Adds the dip of the horizon, `acos(R / (R + h))`, to the standard
/// 0.833°, so a raised observer sees the sun rise earlier and set later.
pub fn rise_set_angle(elevation_m: f64) -> Degrees {
    let dip = acos(EARTH_RADIUS_M / (EARTH_RADIUS_M + elevation_m));
    Degrees::new(HORIZON_DEPRESSION + dip)
}

/// Angle (as consumed by [`sun_angle_time`]) at which an object's shadow
/// equals `factor` times its height plus its noon shadow.
///
/// The declination is taken at `jd + time`. The result is negative: Asr
/// always happens with the sun above the horizon.
pub fn asr_angle(jd: JulianDay, latitude: Degrees, factor: f64, time: Days) -> Degrees {
    let decl = SolarPosition::at(jd + time).declination.value();
    Degrees::new(-acot(factor + tan((latitude.value() - decl).abs())))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn washington() -> (JulianDay, Degrees) {
        // 2021-04-12 shifted to local apparent midnight at 77.04° W.
        let jd = JulianDay::from_ymd(2021, 4, 12) + Days::new(77.036529 / 360.0);
        (jd, Degrees::new(38.8976763))
    }

    #[test]
    fn test_mid_day() {
        let (jd, _) = washington();
        assert!((mid_day(jd, Days::new(0.5)) - 12.011312369043083).abs() < EPS);
    }

    #[test]
    fn test_sunrise_and_sunset() {
        let (jd, lat) = washington();
        let angle = rise_set_angle(18.0);
        let sunrise = sun_angle_time(jd, lat, angle, Days::new(0.25), Direction::BeforeNoon);
        let sunset = sun_angle_time(jd, lat, angle, Days::new(0.75), Direction::AfterNoon);
        assert!((sunrise - 5.446172426910074).abs() < EPS);
        assert!((sunset - 18.586627531662423).abs() < EPS);
    }

    #[test]
    fn test_direction_brackets_noon() {
        let (jd, lat) = washington();
        let noon = mid_day(jd, Days::new(0.5));
        let seed = Days::new(0.5);
        let morning = sun_angle_time(jd, lat, Degrees::new(18.0), seed, Direction::BeforeNoon);
        let evening = sun_angle_time(jd, lat, Degrees::new(18.0), seed, Direction::AfterNoon);
        assert!(morning < noon && noon < evening);
        // Same seed, same position: symmetric about noon.
        assert!(((noon - morning) - (evening - noon)).abs() < EPS);
    }

    #[test]
    fn test_rise_set_angle() {
        assert_eq!(rise_set_angle(0.0).value(), HORIZON_DEPRESSION);
        assert!((rise_set_angle(18.0).value() - 0.969197542074423).abs() < EPS);
        assert!((rise_set_angle(1000.0).value() - 1.8480913515160708).abs() < EPS);
    }

    #[test]
    fn test_rise_set_angle_grows_with_elevation() {
        let mut previous = rise_set_angle(0.0).value();
        for h in [10.0, 100.0, 1_000.0, 5_000.0] {
            let next = rise_set_angle(h).value();
            assert!(next > previous);
            previous = next;
        }
    }

    #[test]
    fn test_asr_angle() {
        let (jd, lat) = washington();
        let seed = Days::new(13.0 / 24.0);
        assert!((asr_angle(jd, lat, 1.0, seed).value() + 32.39779275798624).abs() < EPS);
        assert!((asr_angle(jd, lat, 2.0, seed).value() + 21.217035494529284).abs() < EPS);
    }

    #[test]
    fn test_hanafi_asr_is_later() {
        let (jd, lat) = washington();
        let seed = Days::new(13.0 / 24.0);
        let shafii = asr_angle(jd, lat, 1.0, seed);
        let hanafi = asr_angle(jd, lat, 2.0, seed);
        let standard = sun_angle_time(jd, lat, shafii, seed, Direction::AfterNoon);
        let hanafi = sun_angle_time(jd, lat, hanafi, seed, Direction::AfterNoon);
        assert!(hanafi > standard);
    }

    #[test]
    fn test_polar_day_yields_nan() {
        // Midsummer at 80° N: the sun never dips 18° (nor even to the horizon).
        let jd = JulianDay::from_ymd(2021, 6, 21);
        let lat = Degrees::new(80.0);
        let seed = Days::new(5.0 / 24.0);
        assert!(sun_angle_time(jd, lat, Degrees::new(18.0), seed, Direction::BeforeNoon).is_nan());
        assert!(sun_angle_time(jd, lat, rise_set_angle(0.0), seed, Direction::BeforeNoon).is_nan());
    }
}
