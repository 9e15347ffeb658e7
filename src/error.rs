// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Errors raised when parsing configuration names.
//!
//! The computation itself never fails: an unreachable sun angle shows up as
//! `NaN` in the affected field. Only turning a string into one of the
//! closed configuration enums can be rejected.

use thiserror::Error;

/// Unrecognised configuration name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Not one of the preset names (`MWL`, `ISNA`, `Egypt`, `Makkah`,
    /// `Karachi`, `Tehran`, `Jafari`, `MF`).
    #[error("unknown calculation method: {0:?}")]
    UnknownMethod(String),

    /// Not `NightMiddle`, `AngleBased` or `OneSeventh`.
    #[error("unknown high-latitude method: {0:?}")]
    UnknownHighLatitudeMethod(String),

    /// Not `Standard` or `Hanafi`.
    #[error("unknown asr juristic method: {0:?}")]
    UnknownAsrJuristic(String),

    /// Not `Standard` or `Jafari`.
    #[error("unknown midnight method: {0:?}")]
    UnknownMidnightMethod(String),
}
