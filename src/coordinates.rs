// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geographic observer position.

use crate::error::{Error, Result};
use qtty::Degrees;
use std::fmt;
use std::str::FromStr;

/// Geodetic latitude and longitude of an observer, east and north positive.
///
/// Constructed through [`Coordinates::new`] or parsed from a `"lat,lon"`
/// string; both reject values outside `[-90, 90]` × `[-180, 180]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Coordinates {
    latitude: Degrees,
    longitude: Degrees,
}

impl Coordinates {
    /// Validate and build a coordinate pair from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(Error::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(Error::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        })
    }

    /// Latitude, north positive.
    #[inline]
    pub const fn latitude(&self) -> Degrees {
        self.latitude
    }

    /// Longitude, east positive.
    #[inline]
    pub const fn longitude(&self) -> Degrees {
        self.longitude
    }

    /// Whether both components lie in their valid ranges.
    ///
    /// Always true for values built through the public constructors.
    #[inline]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude.value())
            && (-180.0..=180.0).contains(&self.longitude.value())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4},{:.4}",
            self.latitude.value(),
            self.longitude.value()
        )
    }
}

impl FromStr for Coordinates {
    type Err = Error;

    /// Parse `"lat,lon"`; whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedCoordinates(s.to_owned());
        let (lat, lon) = s.split_once(',').ok_or_else(malformed)?;
        let lat: f64 = lat.trim().parse().map_err(|_| malformed())?;
        let lon: f64 = lon.trim().parse().map_err(|_| malformed())?;
        if !lat.is_finite() || !lon.is_finite() {
            return Err(malformed());
        }
        Self::new(lat, lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_compact_pair() {
        let c: Coordinates = "21.4225,39.8262".parse().unwrap();
        assert_eq!(c.latitude(), Degrees::new(21.4225));
        assert_eq!(c.longitude(), Degrees::new(39.8262));
    }

    #[test]
    fn space_after_comma_parses_identically() {
        let a: Coordinates = "21.4225,39.8262".parse().unwrap();
        let b: Coordinates = "21.4225, 39.8262".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        assert!(matches!(
            "91,0".parse::<Coordinates>(),
            Err(Error::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            "-91,0".parse::<Coordinates>(),
            Err(Error::LatitudeOutOfRange(_))
        ));
        assert!(matches!(
            "0,181".parse::<Coordinates>(),
            Err(Error::LongitudeOutOfRange(_))
        ));
        assert!(matches!(
            "".parse::<Coordinates>(),
            Err(Error::MalformedCoordinates(_))
        ));
        assert!(matches!(
            "invalid".parse::<Coordinates>(),
            Err(Error::MalformedCoordinates(_))
        ));
        assert!("1,2,3".parse::<Coordinates>().is_err());
        assert!("NaN,0".parse::<Coordinates>().is_err());
    }

    #[test]
    fn boundaries_are_inclusive() {
        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn display_roundtrips_through_parse() {
        let c = Coordinates::new(48.8566, 2.3522).unwrap();
        let back: Coordinates = c.to_string().parse().unwrap();
        assert_eq!(back, c);
    }

    proptest! {
        #[test]
        fn valid_pairs_always_parse(lat in -90.0f64..=90.0, lon in -180.0f64..=180.0) {
            let parsed: Coordinates = format!("{lat},{lon}").parse().unwrap();
            prop_assert!(parsed.is_valid());
            prop_assert_eq!(parsed.latitude().value(), lat);
            prop_assert_eq!(parsed.longitude().value(), lon);
        }

        #[test]
        fn out_of_range_latitude_is_rejected(lat in 90.0001f64..1e6, lon in -180.0f64..=180.0) {
            prop_assert!(Coordinates::new(lat, lon).is_err());
            prop_assert!(Coordinates::new(-lat, lon).is_err());
        }
    }
}
