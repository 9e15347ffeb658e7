// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The prayer-time orchestrator.
//!
//! [`PrayerManager`] owns a complete [`CalculationMethod`] and an optional
//! [`HighLatitudeMethod`]. [`PrayerManager::get_times`] is a pure function of
//! those two settings and its arguments.
//!
//! # Pipeline
//!
//! 1. Julian day of the date, moved back by `longitude / 360` days so the
//!    day starts at local apparent midnight.
//! 2. Every marker is solved once from a fixed seed hour and has the
//!    longitude correction `longitude / 15` removed.
//! 3. With a high-latitude method set, imsak/fajr are bounded against
//!    sunrise and maghrib/isha against sunset.
//! 4. Minute-typed imsak, maghrib and isha replace their angle solutions,
//!    in that order (isha counts from the final maghrib).
//! 5. Midnight is half-way from sunset to sunrise (or to fajr).
//!
//! # Threads
//!
//! A manager is a small `Copy` value with no interior mutability. Setters
//! take `&mut self`, so a shared manager cannot be reconfigured while
//! another thread reads it; share it behind a lock if it must be mutated
//! concurrently, or give each thread its own copy.

use crate::coordinates::Coordinates;
use crate::events::{asr_angle, mid_day, rise_set_angle, sun_angle_time, Direction};
use crate::high_latitude::HighLatitudeMethod;
use crate::julian::JulianDay;
use crate::method::{CalculationMethod, MidnightMethod};
use crate::times::PrayerTimes;
use crate::trig::time_diff;
use chrono::Datelike;
use qtty::{Days, Degrees};
use Direction::{AfterNoon, BeforeNoon};

/// Seed hours for the one-shot solver.
const IMSAK_SEED: f64 = 5.0;
const FAJR_SEED: f64 = 5.0;
const SUNRISE_SEED: f64 = 6.0;
const DHUHR_SEED: f64 = 12.0;
const ASR_SEED: f64 = 13.0;
const SUNSET_SEED: f64 = 18.0;
const MAGHRIB_SEED: f64 = 18.0;
const ISHA_SEED: f64 = 18.0;

#[inline]
fn day_portion(hour: f64) -> Days {
    Days::new(hour / 24.0)
}

/// Computes prayer times under one calculation method.
///
/// ```
/// use chrono::NaiveDate;
/// use prayer_times::{get_calculation_method, Coordinates, PrayerManager};
///
/// let mwl = get_calculation_method("MWL", false).unwrap();
/// let manager = PrayerManager::new(mwl, None);
/// let date = NaiveDate::from_ymd_opt(2021, 4, 12).unwrap();
/// let here = Coordinates::new(38.8976763, -77.036529).with_altitude(18.0);
///
/// let times = manager.get_times(&date, here);
/// assert!(times.sunrise < times.dhuhr && times.dhuhr < times.sunset);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PrayerManager {
    method: CalculationMethod,
    high_latitude: Option<HighLatitudeMethod>,
}

impl PrayerManager {
    /// Builds a manager; a partial method is completed with its defaults.
    pub fn new(
        method: impl Into<CalculationMethod>,
        high_latitude: Option<HighLatitudeMethod>,
    ) -> Self {
        Self {
            method: method.into(),
            high_latitude,
        }
    }

    /// Replaces the method, completing it if it is partial.
    pub fn set_calculation_method(&mut self, method: impl Into<CalculationMethod>) {
        self.method = method.into();
    }

    /// Snapshot of the current, complete method.
    pub fn calculation_method(&self) -> CalculationMethod {
        self.method
    }

    pub fn high_latitude_method(&self) -> Option<HighLatitudeMethod> {
        self.high_latitude
    }

    pub fn set_high_latitude_method(&mut self, high_latitude: Option<HighLatitudeMethod>) {
        self.high_latitude = high_latitude;
    }

    /// Prayer times for the calendar date of `date` at `coordinates`.
    ///
    /// Only year, month and day are read from `date`. The result is not
    /// wrapped into a 24-hour range; see [`PrayerTimes`].
    pub fn get_times<D: Datelike>(&self, date: &D, coordinates: Coordinates) -> PrayerTimes {
        let method = &self.method;
        let latitude = coordinates.latitude;
        let longitude = coordinates.longitude.value();

        let jd = JulianDay::from_date(date) - Days::new(longitude / (15.0 * 24.0));
        let adjust = longitude / 15.0;

        let solve = |angle: Degrees, seed: f64, direction: Direction| {
            sun_angle_time(jd, latitude, angle, day_portion(seed), direction) - adjust
        };
        let horizon = rise_set_angle(coordinates.altitude);

        // Minute-typed markers are solved with their number read as an angle first.
        let imsak_angle = Degrees::new(method.imsak.value());
        let maghrib_angle = Degrees::new(method.maghrib.value());
        let isha_angle = Degrees::new(method.isha.value());

        let mut imsak = solve(imsak_angle, IMSAK_SEED, BeforeNoon);
        let mut fajr = solve(method.fajr, FAJR_SEED, BeforeNoon);
        let sunrise = solve(horizon, SUNRISE_SEED, BeforeNoon);
        let dhuhr = mid_day(jd, day_portion(DHUHR_SEED)) + method.dhuhr.value() / 60.0 - adjust;
        let asr = {
            let angle = asr_angle(jd, latitude, method.asr.factor(), day_portion(ASR_SEED));
            solve(angle, ASR_SEED, AfterNoon)
        };
        let sunset = solve(horizon, SUNSET_SEED, AfterNoon);
        let mut maghrib = solve(maghrib_angle, MAGHRIB_SEED, AfterNoon);
        let mut isha = solve(isha_angle, ISHA_SEED, AfterNoon);

        if let Some(rule) = self.high_latitude {
            let night = time_diff(sunset, sunrise);
            imsak = rule.adjust(imsak, sunrise, method.imsak.value(), night, BeforeNoon);
            fajr = rule.adjust(fajr, sunrise, method.fajr.value(), night, BeforeNoon);
            isha = rule.adjust(isha, sunset, method.isha.value(), night, AfterNoon);
            maghrib = rule.adjust(maghrib, sunset, method.maghrib.value(), night, AfterNoon);
        }

        // Minute offsets after the high-latitude pass: they read the clamped
        // fajr and the final sunset/maghrib.
        if let Some(hours) = method.imsak.offset_hours() {
            imsak = fajr - hours;
        }
        if let Some(hours) = method.maghrib.offset_hours() {
            maghrib = sunset + hours;
        }
        if let Some(hours) = method.isha.offset_hours() {
            isha = maghrib + hours;
        }

        let reference = match method.midnight {
            MidnightMethod::Standard => sunrise,
            MidnightMethod::Jafari => fajr,
        };
        let midnight = sunset + time_diff(sunset, reference) / 2.0;

        tracing::trace!(
            jd = jd.value(),
            adjust,
            high_latitude = ?self.high_latitude,
            "prayer times computed"
        );

        PrayerTimes {
            imsak,
            fajr,
            sunrise,
            dhuhr,
            asr,
            sunset,
            maghrib,
            isha,
            midnight,
        }
    }
}
