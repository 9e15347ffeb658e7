// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Islamic prayer times
//!
//! This crate computes the daily prayer markers for a calendar date and an
//! observer position under a named or custom calculation method.
//!
//! # Core types
//!
//! - [`PrayerManager`] — holds a method and an optional high-latitude rule,
//!   computes [`PrayerTimes`] with [`PrayerManager::get_times`].
//! - [`PartialCalculationMethod`] / [`CalculationMethod`] — per-prayer
//!   angles and offsets, before and after defaulting.
//! - [`CalculationType`] — a depression angle or a minute offset.
//! - [`Coordinates`] — latitude, longitude, altitude.
//! - [`HighLatitudeMethod`] — fallback for twilight at high latitudes.
//! - [`JulianDay`] — day count the solar ephemeris runs on.
//!
//! # Presets
//!
//! | Name | Authority |
//! |------|-----------|
//! | `MWL` | Muslim World League |
//! | `ISNA` | Islamic Society of North America |
//! | `Egypt` | Egyptian General Authority of Survey |
//! | `Makkah` | Umm al-Qura University |
//! | `Karachi` | University of Islamic Sciences, Karachi |
//! | `Tehran` | Institute of Geophysics, University of Tehran |
//! | `Jafari` | Shia Ithna Ashari |
//! | `MF` | Musulmans de France |
//!
//! Look them up with [`get_calculation_method`]; an unknown name gives `None`.
//!
//! # Output
//!
//! Every [`PrayerTimes`] field is a fractional hour with the longitude
//! correction applied but **no** civil time zone and **no** wrapping into
//! `[0, 24)`. Markers the sun never reaches on that date come out as `NaN`
//! unless a [`HighLatitudeMethod`] bounds them.
//!
//! ```
//! use chrono::NaiveDate;
//! use prayer_times::{Coordinates, HighLatitudeMethod, Method, PrayerManager};
//!
//! let manager = PrayerManager::new(Method::Mwl, Some(HighLatitudeMethod::AngleBased));
//! let date = NaiveDate::from_ymd_opt(2021, 6, 21).unwrap();
//! let oslo = Coordinates::new(59.9139, 10.7522);
//!
//! let times = manager.get_times(&date, oslo);
//! assert!(!times.fajr.is_nan());
//! ```

mod coordinates;
mod error;
pub mod events;
mod high_latitude;
mod julian;
mod manager;
mod method;
pub mod solar;
mod times;
pub mod trig;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use coordinates::Coordinates;
pub use error::Error;
pub use events::Direction;
pub use high_latitude::HighLatitudeMethod;
pub use julian::JulianDay;
pub use manager::PrayerManager;
pub use method::{
    create_calculation_method, get_calculation_method, AsrJuristic, CalculationMethod,
    CalculationType, Method, MidnightMethod, PartialCalculationMethod,
};
pub use solar::SolarPosition;
pub use times::{Prayer, PrayerTimes};
