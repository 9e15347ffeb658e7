// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The computed day: nine markers in fractional hours.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the nine markers of a prayer day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Prayer {
    /// Start of the pre-dawn fast.
    Imsak,
    /// Dawn twilight.
    Fajr,
    /// Upper limb of the sun clears the horizon.
    Sunrise,
    /// Just after solar noon.
    Dhuhr,
    /// Afternoon, by shadow length.
    Asr,
    /// Upper limb of the sun drops below the horizon.
    Sunset,
    /// Evening prayer, at or after sunset.
    Maghrib,
    /// Night prayer, once dusk twilight ends.
    Isha,
    /// Middle of the night.
    Midnight,
}

impl Prayer {
    /// All markers in the order they occur.
    pub const ALL: [Prayer; 9] = [
        Self::Imsak,
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
        Self::Midnight,
    ];

    /// Lower-case name, also the serialized form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Imsak => "imsak",
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Sunset => "sunset",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
            Self::Midnight => "midnight",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Prayer times for one date and place.
///
/// Each field is an hour count: the observer's apparent solar time with the
/// longitude correction `longitude / 15` taken back out, so the day is
/// measured against the meridian the longitude implies (Greenwich for any
/// observer). Shifting to a civil zone is left to the caller.
/// Values are **not** wrapped into `[0, 24)`: isha or midnight past 24.0
/// fall on the next calendar day, and a negative value falls on the
/// previous one. A marker whose sun angle is never reached is `NaN`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerTimes {
    pub imsak: f64,
    pub fajr: f64,
    pub sunrise: f64,
    pub dhuhr: f64,
    pub asr: f64,
    pub sunset: f64,
    pub maghrib: f64,
    pub isha: f64,
    pub midnight: f64,
}

impl PrayerTimes {
    /// Value of a single marker.
    pub const fn get(&self, prayer: Prayer) -> f64 {
        match prayer {
            Prayer::Imsak => self.imsak,
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Midnight => self.midnight,
        }
    }

    /// `(marker, hours)` pairs in day order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, f64)> + '_ {
        Prayer::ALL.into_iter().map(move |p| (p, self.get(p)))
    }

    /// `true` when some marker could not be computed.
    pub fn has_nan(&self) -> bool {
        self.iter().any(|(_, t)| t.is_nan())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrayerTimes {
        PrayerTimes {
            imsak: 1.0,
            fajr: 2.0,
            sunrise: 3.0,
            dhuhr: 4.0,
            asr: 5.0,
            sunset: 6.0,
            maghrib: 7.0,
            isha: 8.0,
            midnight: 9.0,
        }
    }

    #[test]
    fn test_get_matches_fields() {
        let t = sample();
        assert_eq!(t.get(Prayer::Imsak), t.imsak);
        assert_eq!(t.get(Prayer::Asr), t.asr);
        assert_eq!(t.get(Prayer::Midnight), t.midnight);
    }

    #[test]
    fn test_iter_in_day_order() {
        let values: Vec<f64> = sample().iter().map(|(_, t)| t).collect();
        assert_eq!(values, (1..=9).map(f64::from).collect::<Vec<_>>());
        let names: Vec<&str> = sample().iter().map(|(p, _)| p.name()).collect();
        assert_eq!(names.first(), Some(&"imsak"));
        assert_eq!(names.last(), Some(&"midnight"));
    }

    #[test]
    fn test_has_nan() {
        let mut t = sample();
        assert!(!t.has_nan());
        t.isha = f64::NAN;
        assert!(t.has_nan());
    }

    #[test]
    fn test_prayer_order_and_display() {
        assert!(Prayer::Fajr < Prayer::Sunrise);
        assert!(Prayer::Isha < Prayer::Midnight);
        assert_eq!(Prayer::Maghrib.to_string(), "maghrib");
    }
}
