// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation methods: per-prayer angles and offsets.
//!
//! A method comes in two shapes:
//!
//! - [`PartialCalculationMethod`] — what callers and presets write down:
//!   fajr and isha are required, everything else may be left out.
//! - [`CalculationMethod`] — the same record with every field filled in,
//!   produced by [`create_calculation_method`] (or `From`/`Into`).
//!
//! Defaults are applied field by field and nothing is validated, so an
//! absurd fajr angle is accepted as-is.
//!
//! # Presets
//!
//! | Name | Fajr | Isha | Other |
//! |------|------|------|-------|
//! | `MWL` | 18° | 17° | |
//! | `ISNA` | 15° | 15° | |
//! | `Egypt` | 19.5° | 17.5° | |
//! | `Makkah` | 18.5° | 90 min (120 min in Ramadan) | |
//! | `Karachi` | 18° | 18° | |
//! | `Tehran` | 17.7° | 14° | maghrib 4.5°, Jafari midnight |
//! | `Jafari` | 16° | 14° | maghrib 4°, Jafari midnight |
//! | `MF` | 12° | 12° | |

use crate::error::Error;
use qtty::{Degrees, Minutes};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Field types
// ═══════════════════════════════════════════════════════════════════════════

/// How a twilight-dependent marker is located.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CalculationType {
    /// Sun depression below the horizon, in degrees.
    Angle(Degrees),
    /// Fixed offset from the marker's anchor event.
    Minutes(Minutes),
}

impl CalculationType {
    /// Depression angle in degrees.
    pub const fn angle(degrees: f64) -> Self {
        Self::Angle(Degrees::new(degrees))
    }

    /// Offset in minutes.
    pub const fn minutes(minutes: f64) -> Self {
        Self::Minutes(Minutes::new(minutes))
    }

    /// The bare number, degrees or minutes depending on the tag.
    ///
    /// The solver evaluates every marker as an angle first, minute-typed ones
    /// included, and the high-latitude rule reads this number as its angle.
    pub const fn value(&self) -> f64 {
        match self {
            Self::Angle(d) => d.value(),
            Self::Minutes(m) => m.value(),
        }
    }

    /// `true` for [`CalculationType::Minutes`].
    pub const fn is_minutes(&self) -> bool {
        matches!(self, Self::Minutes(_))
    }

    /// Offset in hours, if this is a minute offset.
    pub fn offset_hours(&self) -> Option<f64> {
        match self {
            Self::Minutes(m) => Some(m.value() / 60.0),
            Self::Angle(_) => None,
        }
    }
}

/// Shadow-length factor defining Asr.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AsrJuristic {
    /// Shafi'i, Maliki, Hanbali: shadow equals object height (factor 1).
    #[default]
    Standard,
    /// Hanafi: shadow equals twice the object height (factor 2).
    Hanafi,
}

impl AsrJuristic {
    /// Multiplier on the object's height.
    pub const fn factor(self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

impl FromStr for AsrJuristic {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Hanafi" => Ok(Self::Hanafi),
            _ => Err(Error::UnknownAsrJuristic(s.to_owned())),
        }
    }
}

/// Reference event for midnight.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MidnightMethod {
    /// Midpoint between sunset and sunrise.
    #[default]
    Standard,
    /// Midpoint between sunset and fajr.
    Jafari,
}

impl FromStr for MidnightMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Jafari" => Ok(Self::Jafari),
            _ => Err(Error::UnknownMidnightMethod(s.to_owned())),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Partial / complete methods
// ═══════════════════════════════════════════════════════════════════════════

/// Imsak default: ten minutes before fajr.
pub const DEFAULT_IMSAK: CalculationType = CalculationType::minutes(10.0);
/// Maghrib default: at sunset.
pub const DEFAULT_MAGHRIB: CalculationType = CalculationType::minutes(0.0);
/// Dhuhr default: no offset after solar noon.
pub const DEFAULT_DHUHR: Minutes = Minutes::new(0.0);

/// A method as written by a caller or a preset; unset fields take defaults.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "RawPartial", into = "RawPartial")
)]
pub struct PartialCalculationMethod {
    pub fajr: Degrees,
    pub isha: CalculationType,
    pub imsak: Option<CalculationType>,
    pub dhuhr: Option<Minutes>,
    pub asr: Option<AsrJuristic>,
    pub maghrib: Option<CalculationType>,
    pub midnight: Option<MidnightMethod>,
}

impl PartialCalculationMethod {
    /// A method with only the two required fields set.
    pub const fn new(fajr: Degrees, isha: CalculationType) -> Self {
        Self {
            fajr,
            isha,
            imsak: None,
            dhuhr: None,
            asr: None,
            maghrib: None,
            midnight: None,
        }
    }

    /// Sets imsak; the default is ten minutes before fajr.
    pub const fn with_imsak(mut self, imsak: CalculationType) -> Self {
        self.imsak = Some(imsak);
        self
    }

    /// Sets the dhuhr offset after solar noon.
    pub const fn with_dhuhr(mut self, dhuhr: Minutes) -> Self {
        self.dhuhr = Some(dhuhr);
        self
    }

    /// Sets the asr shadow rule.
    pub const fn with_asr(mut self, asr: AsrJuristic) -> Self {
        self.asr = Some(asr);
        self
    }

    /// Sets maghrib; the default is at sunset.
    pub const fn with_maghrib(mut self, maghrib: CalculationType) -> Self {
        self.maghrib = Some(maghrib);
        self
    }

    /// Sets the midnight reference.
    pub const fn with_midnight(mut self, midnight: MidnightMethod) -> Self {
        self.midnight = Some(midnight);
        self
    }
}

/// A fully specified method; what [`PrayerManager`](crate::PrayerManager)
/// computes with.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "RawComplete", into = "RawComplete")
)]
pub struct CalculationMethod {
    pub fajr: Degrees,
    pub isha: CalculationType,
    pub imsak: CalculationType,
    pub dhuhr: Minutes,
    pub asr: AsrJuristic,
    pub maghrib: CalculationType,
    pub midnight: MidnightMethod,
}

/// Completes a partial method with the per-field defaults.
pub fn create_calculation_method(partial: PartialCalculationMethod) -> CalculationMethod {
    CalculationMethod {
        fajr: partial.fajr,
        isha: partial.isha,
        imsak: partial.imsak.unwrap_or(DEFAULT_IMSAK),
        dhuhr: partial.dhuhr.unwrap_or(DEFAULT_DHUHR),
        asr: partial.asr.unwrap_or_default(),
        maghrib: partial.maghrib.unwrap_or(DEFAULT_MAGHRIB),
        midnight: partial.midnight.unwrap_or_default(),
    }
}

impl From<PartialCalculationMethod> for CalculationMethod {
    #[inline]
    fn from(partial: PartialCalculationMethod) -> Self {
        create_calculation_method(partial)
    }
}

impl From<CalculationMethod> for PartialCalculationMethod {
    fn from(method: CalculationMethod) -> Self {
        Self {
            fajr: method.fajr,
            isha: method.isha,
            imsak: Some(method.imsak),
            dhuhr: Some(method.dhuhr),
            asr: Some(method.asr),
            maghrib: Some(method.maghrib),
            midnight: Some(method.midnight),
        }
    }
}

impl From<Method> for CalculationMethod {
    /// The preset outside Ramadan, completed.
    fn from(method: Method) -> Self {
        create_calculation_method(method.partial(false))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Presets
// ═══════════════════════════════════════════════════════════════════════════

/// The named presets.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Method {
    /// Muslim World League.
    #[cfg_attr(feature = "serde", serde(rename = "MWL"))]
    Mwl,
    /// Islamic Society of North America.
    #[cfg_attr(feature = "serde", serde(rename = "ISNA"))]
    Isna,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Umm al-Qura University, Makkah.
    Makkah,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Shia Ithna Ashari, Leva Institute, Qum.
    Jafari,
    /// Musulmans de France.
    #[cfg_attr(feature = "serde", serde(rename = "MF"))]
    Mf,
}

impl Method {
    /// Every preset, in table order.
    pub const ALL: [Method; 8] = [
        Self::Mwl,
        Self::Isna,
        Self::Egypt,
        Self::Makkah,
        Self::Karachi,
        Self::Tehran,
        Self::Jafari,
        Self::Mf,
    ];

    /// Table key of the preset.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mwl => "MWL",
            Self::Isna => "ISNA",
            Self::Egypt => "Egypt",
            Self::Makkah => "Makkah",
            Self::Karachi => "Karachi",
            Self::Tehran => "Tehran",
            Self::Jafari => "Jafari",
            Self::Mf => "MF",
        }
    }

    /// The preset's partial method. Only Makkah depends on `is_ramadan`.
    pub const fn partial(self, is_ramadan: bool) -> PartialCalculationMethod {
        use CalculationType as C;
        use PartialCalculationMethod as P;

        match self {
            Self::Mwl => P::new(Degrees::new(18.0), C::angle(17.0)),
            Self::Isna => P::new(Degrees::new(15.0), C::angle(15.0)),
            Self::Egypt => P::new(Degrees::new(19.5), C::angle(17.5)),
            Self::Makkah => {
                let isha = if is_ramadan { 120.0 } else { 90.0 };
                P::new(Degrees::new(18.5), C::minutes(isha))
            }
            Self::Karachi => P::new(Degrees::new(18.0), C::angle(18.0)),
            Self::Tehran => P::new(Degrees::new(17.7), C::angle(14.0))
                .with_maghrib(C::angle(4.5))
                .with_midnight(MidnightMethod::Jafari),
            Self::Jafari => P::new(Degrees::new(16.0), C::angle(14.0))
                .with_maghrib(C::angle(4.0))
                .with_midnight(MidnightMethod::Jafari),
            Self::Mf => P::new(Degrees::new(12.0), C::angle(12.0)),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| Error::UnknownMethod(s.to_owned()))
    }
}

/// Looks a preset up by its table name.
///
/// Returns `None` for a name that is not in the table. The result is still
/// partial; complete it with [`create_calculation_method`] or hand it to a
/// [`PrayerManager`](crate::PrayerManager), which completes it.
///
/// ```
/// use prayer_times::{get_calculation_method, CalculationType};
///
/// let makkah = get_calculation_method("Makkah", true).unwrap();
/// assert_eq!(makkah.isha, CalculationType::minutes(120.0));
/// assert!(get_calculation_method("NotAMethod", false).is_none());
/// ```
pub fn get_calculation_method(name: &str, is_ramadan: bool) -> Option<PartialCalculationMethod> {
    name.parse::<Method>()
        .ok()
        .map(|method| method.partial(is_ramadan))
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
impl Serialize for CalculationType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let kind = if self.is_minutes() { "minute" } else { "angle" };
        let mut s = serializer.serialize_struct("CalculationType", 2)?;
        s.serialize_field("type", kind)?;
        s.serialize_field("value", &self.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for CalculationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(rename_all = "lowercase")]
        enum Kind {
            Angle,
            Minute,
        }

        #[derive(Deserialize)]
        struct Raw {
            #[serde(rename = "type")]
            kind: Kind,
            value: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(match raw.kind {
            Kind::Angle => Self::angle(raw.value),
            Kind::Minute => Self::minutes(raw.value),
        })
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawPartial {
    fajr: f64,
    isha: CalculationType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    imsak: Option<CalculationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    dhuhr: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    asr: Option<AsrJuristic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maghrib: Option<CalculationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    midnight: Option<MidnightMethod>,
}

#[cfg(feature = "serde")]
impl From<RawPartial> for PartialCalculationMethod {
    fn from(raw: RawPartial) -> Self {
        Self {
            fajr: Degrees::new(raw.fajr),
            isha: raw.isha,
            imsak: raw.imsak,
            dhuhr: raw.dhuhr.map(Minutes::new),
            asr: raw.asr,
            maghrib: raw.maghrib,
            midnight: raw.midnight,
        }
    }
}

#[cfg(feature = "serde")]
impl From<PartialCalculationMethod> for RawPartial {
    fn from(m: PartialCalculationMethod) -> Self {
        Self {
            fajr: m.fajr.value(),
            isha: m.isha,
            imsak: m.imsak,
            dhuhr: m.dhuhr.map(|d| d.value()),
            asr: m.asr,
            maghrib: m.maghrib,
            midnight: m.midnight,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawComplete {
    fajr: f64,
    isha: CalculationType,
    imsak: CalculationType,
    dhuhr: f64,
    asr: AsrJuristic,
    maghrib: CalculationType,
    midnight: MidnightMethod,
}

#[cfg(feature = "serde")]
impl From<RawComplete> for CalculationMethod {
    fn from(raw: RawComplete) -> Self {
        Self {
            fajr: Degrees::new(raw.fajr),
            isha: raw.isha,
            imsak: raw.imsak,
            dhuhr: Minutes::new(raw.dhuhr),
            asr: raw.asr,
            maghrib: raw.maghrib,
            midnight: raw.midnight,
        }
    }
}

#[cfg(feature = "serde")]
impl From<CalculationMethod> for RawComplete {
    fn from(m: CalculationMethod) -> Self {
        Self {
            fajr: m.fajr.value(),
            isha: m.isha,
            imsak: m.imsak,
            dhuhr: m.dhuhr.value(),
            asr: m.asr,
            maghrib: m.maghrib,
            midnight: m.midnight,
        }
    }
}
