// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! High-latitude fallback for twilight markers.
//!
//! Far from the equator, around the summer solstice, the sun may stay
//! shallower than the fajr/isha depression all night, and the solver then
//! returns `NaN` or an absurd hour. These rules bound each twilight marker
//! to a share of the night measured from sunrise (imsak, fajr) or from
//! sunset (maghrib, isha).

use crate::error::Error;
use crate::events::Direction;
use crate::trig::time_diff;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How much of the night a twilight marker may lie away from its anchor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HighLatitudeMethod {
    /// Half the night.
    NightMiddle,
    /// `angle / 60` of the night.
    AngleBased,
    /// One seventh of the night.
    OneSeventh,
}

impl HighLatitudeMethod {
    /// Every rule, in declaration order.
    pub const ALL: [HighLatitudeMethod; 3] =
        [Self::NightMiddle, Self::AngleBased, Self::OneSeventh];

    /// Name accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::NightMiddle => "NightMiddle",
            Self::AngleBased => "AngleBased",
            Self::OneSeventh => "OneSeventh",
        }
    }

    /// Fraction of the night allotted to a marker of depression `angle`
    /// degrees.
    pub fn night_fraction(self, angle: f64) -> f64 {
        match self {
            Self::NightMiddle => 1.0 / 2.0,
            Self::AngleBased => angle / 60.0,
            Self::OneSeventh => 1.0 / 7.0,
        }
    }

    /// Night share in hours: [`night_fraction`](Self::night_fraction) times
    /// `night` hours.
    pub fn night_portion(self, angle: f64, night: f64) -> f64 {
        self.night_fraction(angle) * night
    }

    /// Re-clamps `time` against `anchor`.
    ///
    /// On the [`Direction::BeforeNoon`] side the distance is measured from
    /// `time` forward to `anchor` (sunrise); on the [`Direction::AfterNoon`]
    /// side from `anchor` (sunset) forward to `time`. When the allotted
    /// portion exceeds that distance, or `time` is `NaN`, the marker moves
    /// to `anchor ∓ portion`. Otherwise `time` is returned untouched.
    pub fn adjust(
        self,
        time: f64,
        anchor: f64,
        angle: f64,
        night: f64,
        direction: Direction,
    ) -> f64 {
        let portion = self.night_portion(angle, night);
        let diff = match direction {
            Direction::BeforeNoon => time_diff(time, anchor),
            Direction::AfterNoon => time_diff(anchor, time),
        };

        if time.is_nan() || portion > diff {
            let adjusted = match direction {
                Direction::BeforeNoon => anchor - portion,
                Direction::AfterNoon => anchor + portion,
            };
            tracing::trace!(
                method = self.name(),
                time,
                adjusted,
                portion,
                diff,
                "high-latitude clamp"
            );
            adjusted
        } else {
            time
        }
    }
}

impl fmt::Display for HighLatitudeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for HighLatitudeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::UnknownHighLatitudeMethod(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use HighLatitudeMethod::*;

    #[test]
    fn test_night_portion() {
        assert_eq!(NightMiddle.night_portion(18.0, 10.0), 5.0);
        assert_eq!(AngleBased.night_portion(18.0, 10.0), 3.0);
        assert_eq!(OneSeventh.night_portion(18.0, 14.0), 2.0);
    }

    #[test]
    fn test_unchanged_when_portion_within_diff() {
        // Fajr 1.5 h before a 06:00 sunrise; one seventh of a 7 h night is 1 h.
        let fajr = OneSeventh.adjust(4.5, 6.0, 18.0, 7.0, Direction::BeforeNoon);
        assert_eq!(fajr, 4.5);
        // Isha 2 h after a 20:00 sunset; 18/60 of a 6 h night is 1.8 h.
        let isha = AngleBased.adjust(22.0, 20.0, 18.0, 6.0, Direction::AfterNoon);
        assert_eq!(isha, 22.0);
    }

    #[test]
    fn test_unchanged_at_exact_boundary() {
        // portion == diff == 2 h on both sides.
        let fajr = OneSeventh.adjust(4.0, 6.0, 18.0, 14.0, Direction::BeforeNoon);
        let isha = OneSeventh.adjust(22.0, 20.0, 18.0, 14.0, Direction::AfterNoon);
        assert_eq!((fajr, isha), (4.0, 22.0));
    }

    #[test]
    fn test_replaced_when_portion_exceeds_diff() {
        // Half of a 6 h night (3 h) exceeds the 1.5 h gap: moved to 06:00 − 3 h.
        let fajr = NightMiddle.adjust(4.5, 6.0, 18.0, 6.0, Direction::BeforeNoon);
        assert_eq!(fajr, 3.0);
        // Evening side: 20:00 + 3 h.
        let isha = NightMiddle.adjust(21.0, 20.0, 17.0, 6.0, Direction::AfterNoon);
        assert_eq!(isha, 23.0);
    }

    #[test]
    fn test_diff_wraps_over_midnight() {
        // Isha at 01:00 (next day, unnormalised 25.0) after a 22:00 sunset: 3 h.
        let kept = OneSeventh.adjust(25.0, 22.0, 17.0, 7.0, Direction::AfterNoon);
        let moved = NightMiddle.adjust(25.0, 22.0, 17.0, 7.0, Direction::AfterNoon);
        assert_eq!((kept, moved), (25.0, 25.5));
    }

    #[test]
    fn test_nan_time_is_replaced() {
        let fajr = AngleBased.adjust(f64::NAN, 3.0, 18.0, 4.0, Direction::BeforeNoon);
        assert!((fajr - 1.8).abs() < 1e-12);
        let isha = OneSeventh.adjust(f64::NAN, 21.0, 17.0, 7.0, Direction::AfterNoon);
        assert_eq!(isha, 22.0);
    }

    #[test]
    fn test_parse_names() {
        for method in HighLatitudeMethod::ALL {
            assert_eq!(method.to_string().parse::<HighLatitudeMethod>(), Ok(method));
        }
        assert_eq!(
            "MiddleOfNight".parse::<HighLatitudeMethod>(),
            Err(Error::UnknownHighLatitudeMethod("MiddleOfNight".into()))
        );
    }
}
