// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Low-precision solar position
//!
//! Equation of time and apparent declination of the Sun from the truncated
//! series published by NOAA's Global Monitoring Laboratory (after Meeus,
//! *Astronomical Algorithms*, ch. 25 and 28).
//!
//! The argument is the number of Julian centuries since J2000.0. Accuracy is
//! about 0.01° in declination and a few seconds in the equation of time for
//! dates within a few centuries of J2000, which is well below the one-minute
//! granularity of prayer times.
//!
//! ## References
//! * Meeus (1998), *Astronomical Algorithms*, 2nd ed., eqs. 25.2–25.8, 28.3
//! * NOAA GML Solar Calculator (spreadsheet formulation)

use crate::coordinates::Coordinates;
use crate::julian::JulianDay;
use chrono::{DateTime, Utc};
use qtty::{Centuries, Degrees, Minute, Minutes};

/// Equation of time and declination at one instant.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SolarCoordinates {
    /// Apparent solar time minus mean solar time.
    pub equation_of_time: Minutes,
    /// Apparent declination, north positive.
    pub declination: Degrees,
}

#[inline]
fn normalize(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Geometric mean longitude of the Sun (degrees).
#[inline]
fn mean_longitude(t: f64) -> f64 {
    normalize(280.466_46 + t * (36_000.769_83 + t * 0.000_303_2))
}

/// Mean anomaly of the Sun (degrees).
#[inline]
fn mean_anomaly(t: f64) -> f64 {
    normalize(357.529_11 + t * (35_999.050_29 - t * 0.000_153_7))
}

/// Eccentricity of Earth's orbit.
#[inline]
fn eccentricity(t: f64) -> f64 {
    0.016_708_634 - t * (0.000_042_037 + t * 0.000_000_126_7)
}

/// Longitude of the ascending node of the Moon's orbit, used for the
/// nutation and aberration corrections (degrees).
#[inline]
fn omega(t: f64) -> f64 {
    125.04 - 1_934.136 * t
}

#[inline]
fn equation_of_center(t: f64) -> f64 {
    let m = Degrees::new(mean_anomaly(t));
    let m2 = Degrees::new(2.0 * m.value());
    let m3 = Degrees::new(3.0 * m.value());
    m.sin() * (1.914_602 - t * (0.004_817 + t * 0.000_014))
        + m2.sin() * (0.019_993 - t * 0.000_101)
        + m3.sin() * 0.000_289
}

#[inline]
fn apparent_longitude(t: f64) -> f64 {
    let true_longitude = mean_longitude(t) + equation_of_center(t);
    true_longitude - 0.005_69 - 0.004_78 * Degrees::new(omega(t)).sin()
}

#[inline]
fn corrected_obliquity(t: f64) -> f64 {
    let seconds = 21.448 - t * (46.815 + t * (0.000_59 - t * 0.001_813));
    let mean = 23.0 + (26.0 + seconds / 60.0) / 60.0;
    mean + 0.002_56 * Degrees::new(omega(t)).cos()
}

/// Apparent declination of the Sun.
pub fn declination(t: Centuries) -> Degrees {
    let t = t.value();
    let epsilon = Degrees::new(corrected_obliquity(t));
    let lambda = Degrees::new(apparent_longitude(t));
    Degrees::new((epsilon.sin() * lambda.sin()).asin().to_degrees())
}

/// Equation of time (apparent minus mean solar time).
pub fn equation_of_time(t: Centuries) -> Minutes {
    let t = t.value();
    let y = Degrees::new(corrected_obliquity(t) / 2.0).tan().powi(2);
    let l0 = mean_longitude(t);
    let e = eccentricity(t);
    let m = Degrees::new(mean_anomaly(t));

    let sin_2l0 = Degrees::new(2.0 * l0).sin();
    let cos_2l0 = Degrees::new(2.0 * l0).cos();
    let sin_4l0 = Degrees::new(4.0 * l0).sin();
    let sin_2m = Degrees::new(2.0 * m.value()).sin();

    let radians = y * sin_2l0 - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * cos_2l0
        - 0.5 * y * y * sin_4l0
        - 1.25 * e * e * sin_2m;

    // 1° of hour angle = 4 minutes of time.
    Minutes::new(4.0 * radians.to_degrees())
}

/// Equation of time and declination for `t` Julian centuries since J2000.
pub fn solar_coordinates(t: Centuries) -> SolarCoordinates {
    SolarCoordinates {
        equation_of_time: equation_of_time(t),
        declination: declination(t),
    }
}

/// Geometric elevation of the Sun's centre above the horizon at `instant`.
///
/// No refraction correction is applied, so at the refraction-corrected
/// sunrise this returns ≈ −0.833°.
pub fn solar_elevation(coordinates: &Coordinates, instant: DateTime<Utc>) -> Degrees {
    let jd = JulianDay::from_utc(instant);
    let sun = solar_coordinates(jd.julian_centuries());

    let ut = (jd - JulianDay::from_date(instant.date_naive())).to::<Minute>();
    let true_solar_minutes =
        ut.value() + sun.equation_of_time.value() + 4.0 * coordinates.longitude().value();
    let hour_angle = Degrees::new(true_solar_minutes / 4.0 - 180.0);

    let lat = coordinates.latitude();
    let sin_elevation =
        lat.sin() * sun.declination.sin() + lat.cos() * sun.declination.cos() * hour_angle.cos();
    Degrees::new(sin_elevation.clamp(-1.0, 1.0).asin().to_degrees())
}
