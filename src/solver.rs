// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Hour-angle solver for solar events.
//!
//! All results are fractional UTC hours counted from 00:00 UTC of the civil
//! date passed in. Values may fall slightly outside `[0, 24)` for longitudes
//! far from Greenwich (e.g. Fajr in the far east lands on the previous UTC
//! day); callers add them to that date's UTC midnight rather than wrapping.
//!
//! Every event is solved in two passes: a first estimate with the Sun's
//! declination and equation of time evaluated at solar noon, then one
//! fixed-point correction with both re-evaluated at the first estimate.

use crate::coordinates::Coordinates;
use crate::julian::JulianDay;
use crate::solar::{solar_coordinates, SolarCoordinates};
use chrono::NaiveDate;
use qtty::{Centuries, Degrees, Hours};

/// Depression of the Sun's centre at sunrise and sunset: 34′ of refraction
/// plus 16′ of semidiameter.
pub const SUNRISE_DEPRESSION: Degrees = Degrees::new(0.833);

/// Depression of the Sun's centre at civil dawn and dusk.
pub const CIVIL_TWILIGHT_DEPRESSION: Degrees = Degrees::new(6.0);

/// Which side of solar noon an event is searched on.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Before solar noon (sunrise, Fajr).
    Morning,
    /// After solar noon (sunset, Asr, Maghrib, Isha).
    Evening,
}

impl Direction {
    /// `-1` before noon, `+1` after.
    #[inline]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Morning => -1.0,
            Self::Evening => 1.0,
        }
    }
}

#[inline]
fn centuries_at(date: NaiveDate, hours: Hours) -> Centuries {
    (JulianDay::from_date(date) + hours).julian_centuries()
}

/// UTC hour of apparent noon given the Sun's equation of time.
#[inline]
fn transit(sun: &SolarCoordinates, longitude: Degrees) -> Hours {
    Hours::new(12.0 - longitude.value() / 15.0 - sun.equation_of_time.value() / 60.0)
}

/// Hour angle at which the Sun's centre reaches `elevation`, or `None` when
/// it never does on this day (polar day/night, or a pole itself).
fn hour_angle(latitude: Degrees, declination: Degrees, elevation: Degrees) -> Option<Degrees> {
    let cos_h = (elevation.sin() - latitude.sin() * declination.sin())
        / (latitude.cos() * declination.cos());
    if !cos_h.is_finite() || !(-1.0..=1.0).contains(&cos_h) {
        return None;
    }
    Some(Degrees::new(cos_h.acos().to_degrees()))
}

/// Solar elevation of the Asr shadow condition: an object's shadow equals
/// `shadow_ratio` times its height plus its noon shadow.
#[inline]
pub fn asr_elevation(latitude: Degrees, declination: Degrees, shadow_ratio: f64) -> Degrees {
    let noon_shadow = Degrees::new((latitude - declination).value().abs()).tan();
    Degrees::new((1.0 / (shadow_ratio + noon_shadow)).atan().to_degrees())
}

/// UTC hour of local apparent noon (Sun on the meridian).
pub fn solar_noon(coordinates: &Coordinates, date: NaiveDate) -> Hours {
    let longitude = coordinates.longitude();
    let mean_noon = Hours::new(12.0 - longitude.value() / 15.0);
    let first = transit(&solar_coordinates(centuries_at(date, mean_noon)), longitude);
    transit(&solar_coordinates(centuries_at(date, first)), longitude)
}

fn solve_with<F>(
    coordinates: &Coordinates,
    date: NaiveDate,
    direction: Direction,
    elevation_for: F,
) -> Option<Hours>
where
    F: Fn(Degrees) -> Degrees,
{
    let latitude = coordinates.latitude();
    let longitude = coordinates.longitude();
    let sign = direction.sign();

    let noon = solar_noon(coordinates, date);
    let sun = solar_coordinates(centuries_at(date, noon));
    let h = hour_angle(latitude, sun.declination, elevation_for(sun.declination))?;
    let estimate = noon + Hours::new(sign * h.value() / 15.0);

    let sun = solar_coordinates(centuries_at(date, estimate));
    let h = hour_angle(latitude, sun.declination, elevation_for(sun.declination))?;
    Some(transit(&sun, longitude) + Hours::new(sign * h.value() / 15.0))
}

/// UTC hour at which the Sun's centre is `depression` below the horizon.
///
/// Returns `None` when the Sun never reaches that depression on `date`.
pub fn solve(
    coordinates: &Coordinates,
    date: NaiveDate,
    depression: Degrees,
    direction: Direction,
) -> Option<Hours> {
    let solved = solve_with(coordinates, date, direction, |_| -depression);
    log::trace!(
        "solve {depression} {direction:?} at {coordinates} on {date}: {:?}",
        solved.map(|h| h.value())
    );
    solved
}

/// UTC hour of Asr for the given shadow ratio (1 = Shafi, 2 = Hanafi).
///
/// Only `None` at latitudes where the Sun never climbs high enough.
pub fn solve_shadow(coordinates: &Coordinates, date: NaiveDate, shadow_ratio: f64) -> Option<Hours> {
    let latitude = coordinates.latitude();
    let solved = solve_with(coordinates, date, Direction::Evening, |declination| {
        asr_elevation(latitude, declination, shadow_ratio)
    });
    log::trace!(
        "solve_shadow ratio {shadow_ratio} at {coordinates} on {date}: {:?}",
        solved.map(|h| h.value())
    );
    solved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::utc_at;
    use crate::solar::solar_elevation;
    use approx::assert_abs_diff_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn greenwich_noon_tracks_equation_of_time() {
        let greenwich = Coordinates::new(51.4769, 0.0).unwrap();
        // Early November: the Sun transits ~16 min before 12:00.
        let noon = solar_noon(&greenwich, date(2024, 11, 3));
        assert_abs_diff_eq!(noon.value(), 12.0 - 16.4 / 60.0, epsilon = 0.01);
    }

    #[test]
    fn noon_shifts_four_minutes_per_degree_of_longitude() {
        let d = date(2024, 3, 20);
        let a = solar_noon(&Coordinates::new(10.0, 0.0).unwrap(), d);
        let b = solar_noon(&Coordinates::new(10.0, 15.0).unwrap(), d);
        assert_abs_diff_eq!((a - b).value(), 1.0, epsilon = 0.001);
    }

    #[test]
    fn sunrise_and_sunset_bracket_noon() {
        let paris = Coordinates::new(48.8566, 2.3522).unwrap();
        let d = date(2024, 3, 20);
        let rise = solve(&paris, d, SUNRISE_DEPRESSION, Direction::Morning).unwrap();
        let set = solve(&paris, d, SUNRISE_DEPRESSION, Direction::Evening).unwrap();
        let noon = solar_noon(&paris, d);
        assert!(rise < noon && noon < set);
        // Equinox day length is a little over 12 h because of refraction.
        assert_abs_diff_eq!((set - rise).value(), 12.2, epsilon = 0.1);
    }

    #[test]
    fn solved_instants_sit_at_the_requested_elevation() {
        let mecca = Coordinates::new(21.4225, 39.8262).unwrap();
        let d = date(2026, 1, 15);
        for (depression, direction) in [
            (18.5, Direction::Morning),
            (0.833, Direction::Morning),
            (0.833, Direction::Evening),
            (17.0, Direction::Evening),
        ] {
            let hours = solve(&mecca, d, Degrees::new(depression), direction).unwrap();
            let elevation = solar_elevation(&mecca, utc_at(d, hours));
            assert_abs_diff_eq!(elevation.value(), -depression, epsilon = 0.1);
        }
    }

    #[test]
    fn asr_elevation_matches_shadow_geometry() {
        let d = date(2026, 1, 15);
        let mecca = Coordinates::new(21.4225, 39.8262).unwrap();
        let hours = solve_shadow(&mecca, d, 1.0).unwrap();
        let at = utc_at(d, hours);
        let sun = solar_coordinates(JulianDay::from_utc(at).julian_centuries());
        let expected = asr_elevation(mecca.latitude(), sun.declination, 1.0);
        assert_abs_diff_eq!(
            solar_elevation(&mecca, at).value(),
            expected.value(),
            epsilon = 0.1
        );
    }

    #[test]
    fn equator_equinox_asr_is_three_hours_after_noon() {
        let origin = Coordinates::new(0.0, 0.0).unwrap();
        let d = date(2024, 3, 20);
        let asr = solve_shadow(&origin, d, 1.0).unwrap();
        assert_abs_diff_eq!((asr - solar_noon(&origin, d)).value(), 3.0, epsilon = 0.05);
    }

    #[test]
    fn hanafi_asr_is_later_than_shafi() {
        let cairo = Coordinates::new(30.0444, 31.2357).unwrap();
        let d = date(2024, 6, 1);
        let shafi = solve_shadow(&cairo, d, 1.0).unwrap();
        let hanafi = solve_shadow(&cairo, d, 2.0).unwrap();
        assert!(hanafi > shafi);
    }

    #[test]
    fn polar_day_and_night_are_unsolvable() {
        let tromso = Coordinates::new(69.6492, 18.9553).unwrap();
        let svalbard = Coordinates::new(78.2232, 15.6267).unwrap();
        assert!(solve(&tromso, date(2024, 6, 21), SUNRISE_DEPRESSION, Direction::Morning).is_none());
        assert!(solve(&svalbard, date(2025, 12, 21), SUNRISE_DEPRESSION, Direction::Evening).is_none());
    }

    #[test]
    fn twilight_unreachable_in_temperate_summer() {
        // At 55°N around the June solstice the Sun stays above -12°.
        let copenhagen = Coordinates::new(55.6761, 12.5683).unwrap();
        let d = date(2024, 6, 21);
        assert!(solve(&copenhagen, d, Degrees::new(18.0), Direction::Morning).is_none());
        assert!(solve(&copenhagen, d, SUNRISE_DEPRESSION, Direction::Morning).is_some());
    }

    #[test]
    fn poles_are_unsolvable() {
        let pole = Coordinates::new(90.0, 0.0).unwrap();
        assert!(solve(&pole, date(2024, 3, 25), Degrees::new(18.0), Direction::Morning).is_none());
    }

    #[test]
    fn direction_sign() {
        assert_eq!(Direction::Morning.sign(), -1.0);
        assert_eq!(Direction::Evening.sign(), 1.0);
    }
}
