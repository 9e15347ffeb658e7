// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Observer position.

use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

/// Geographic position of the observer.
///
/// No range checking is done; out-of-range values simply go through the
/// trigonometry (and may end up as `NaN` times).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    /// Latitude, positive north.
    pub latitude: Degrees,
    /// Longitude, positive east.
    pub longitude: Degrees,
    /// Height above sea level in metres.
    pub altitude: f64,
}

impl Coordinates {
    /// Sea-level position from latitude and longitude in degrees.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
            altitude: 0.0,
        }
    }

    /// Same position at `altitude` metres.
    pub const fn with_altitude(mut self, altitude: f64) -> Self {
        self.altitude = altitude;
        self
    }
}

#[cfg(feature = "serde")]
impl Serialize for Coordinates {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("Coordinates", 3)?;
        s.serialize_field("latitude", &self.latitude.value())?;
        s.serialize_field("longitude", &self.longitude.value())?;
        s.serialize_field("altitude", &self.altitude)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
            #[serde(default)]
            altitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Coordinates::new(raw.latitude, raw.longitude).with_altitude(raw.altitude))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_altitude_defaults_to_sea_level() {
        let c = Coordinates::new(21.4225, 39.8262);
        assert_eq!(c.latitude, Degrees::new(21.4225));
        assert_eq!(c.longitude, Degrees::new(39.8262));
        assert_eq!(c.altitude, 0.0);
        assert_eq!(c.with_altitude(277.0).altitude, 277.0);
    }
}
