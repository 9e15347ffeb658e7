// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian day numbers for calendar dates.
//!
//! [`JulianDay`] stores a single [`Days`] quantity with no time-scale
//! conversions: prayer-time work only needs a continuous day count from a
//! civil calendar date plus fractional offsets within that day.

use chrono::Datelike;
use qtty::Days;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A point on the Julian day axis.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch (JD 2 451 545.0), the origin of the solar ephemeris.
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Create from a raw scalar.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian day at the start of a proleptic Gregorian calendar date.
    ///
    /// Only year, month and day are read; any time-of-day component of
    /// `date` is ignored. January and February count as months 13 and 14 of
    /// the previous year. This is the short integer approximation
    /// `floor(365.2425 y + 30.6001 m) + d + 1721027.5`; it can land a day
    /// away from the astronomical value on some dates, which the solar
    /// ephemeris tolerates.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use prayer_times::JulianDay;
    ///
    /// let date = NaiveDate::from_ymd_opt(2021, 4, 12).unwrap();
    /// assert_eq!(JulianDay::from_date(&date).value(), 2_459_316.5);
    /// ```
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self::from_ymd(date.year(), date.month(), date.day())
    }

    /// Julian day from explicit year / month (1-12) / day components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Self {
        let (mut y, mut m) = (year as f64, month as f64);
        if month < 3 {
            y -= 1.0;
            m += 12.0;
        }
        Self::new((365.2425 * y + 30.6001 * m).floor() + day as f64 + 1_721_027.5)
    }

    /// The underlying quantity in days.
    #[inline]
    pub const fn quantity(&self) -> Days {
        self.quantity
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Days elapsed since [`JulianDay::J2000`].
    #[inline]
    pub fn days_since_j2000(&self) -> f64 {
        (*self - Self::J2000).value()
    }
}

impl std::fmt::Display for JulianDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Julian Day: {}", self.quantity)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl AddAssign<Days> for JulianDay {
    #[inline]
    fn add_assign(&mut self, rhs: Days) {
        self.quantity += rhs;
    }
}

impl Sub<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity - rhs)
    }
}

impl SubAssign<Days> for JulianDay {
    #[inline]
    fn sub_assign(&mut self, rhs: Days) {
        self.quantity -= rhs;
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}

impl From<Days> for JulianDay {
    #[inline]
    fn from(days: Days) -> Self {
        Self::from_days(days)
    }
}

impl From<JulianDay> for Days {
    #[inline]
    fn from(jd: JulianDay) -> Self {
        jd.quantity
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for JulianDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for JulianDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = f64::deserialize(deserializer)?;
        Ok(Self::new(v))
    }
}
