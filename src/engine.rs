// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer-time engine.
//!
//! A pure function of `(coordinates, date, parameters[, corrections])`. The
//! pipeline for one day is:
//!
//! 1. sunrise and sunset (0.833°), falling back to civil twilight and then
//!    to solar noon ∓ 6 h when the Sun never crosses the horizon;
//! 2. Dhuhr one minute after solar noon;
//! 3. Asr from the madhab's shadow ratio, or midway between Dhuhr and sunset;
//! 4. Fajr and Isha from their angles, bounded by the high-latitude rule;
//! 5. Maghrib at sunset or at the method's Maghrib angle;
//! 6. method adjustments, then a one-minute minimum gap between consecutive
//!    prayers, then rounding;
//! 7. user corrections, added as-is.
//!
//! Nothing here fails: every unsolvable solar event has a fallback, logged at
//! `debug` level.

use crate::adjustments::PrayerAdjustments;
use crate::coordinates::Coordinates;
use crate::high_latitude;
use crate::julian::utc_at;
use crate::night::{minutes, Night};
use crate::parameters::{CalculationParameters, IshaRule};
use crate::prayer::{Prayer, PrayerSchedule};
use crate::solver::{
    solar_noon, solve, solve_shadow, Direction, CIVIL_TWILIGHT_DEPRESSION, SUNRISE_DEPRESSION,
};
use crate::sunnah::SunnahTimes;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use qtty::{Degrees, Hour, Hours, Minutes};

/// Shortest half-day accepted from a horizon crossing before falling back.
const MIN_HALF_DAY: Minutes = Minutes::new(15.0);

/// Half-day used when the Sun reaches neither the horizon nor civil twilight.
const POLAR_HALF_DAY: Hours = Hours::new(6.0);

/// Gap enforced between consecutive prayers.
#[inline]
fn min_gap() -> Duration {
    Duration::minutes(1)
}

/// Civil date after `date` (or `date` itself at the end of chrono's range).
#[inline]
fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Solar noon, sunrise and sunset for one date.
#[derive(Debug, Clone, Copy)]
struct SolarDay {
    noon: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl SolarDay {
    fn new(coordinates: &Coordinates, date: NaiveDate) -> Self {
        let noon = solar_noon(coordinates, date);
        let min_half_day = MIN_HALF_DAY.to::<Hour>();

        let crossings = |depression: Degrees| {
            let rise = solve(coordinates, date, depression, Direction::Morning)?;
            let set = solve(coordinates, date, depression, Direction::Evening)?;
            (noon - rise >= min_half_day && set - noon >= min_half_day).then_some((rise, set))
        };

        let (rise, set) = crossings(SUNRISE_DEPRESSION)
            .or_else(|| {
                log::debug!("no sunrise/sunset at {coordinates} on {date}, trying civil twilight");
                crossings(CIVIL_TWILIGHT_DEPRESSION)
            })
            .unwrap_or_else(|| {
                log::debug!("no civil twilight at {coordinates} on {date}, using noon ∓ {POLAR_HALF_DAY}");
                (noon - POLAR_HALF_DAY, noon + POLAR_HALF_DAY)
            });

        Self {
            noon: utc_at(date, noon),
            sunrise: utc_at(date, rise),
            sunset: utc_at(date, set),
        }
    }
}

/// Unadjusted instants in [`Prayer::DAILY`] order.
fn solar_times(
    coordinates: &Coordinates,
    date: NaiveDate,
    parameters: &CalculationParameters,
) -> [DateTime<Utc>; 6] {
    let today = SolarDay::new(coordinates, date);
    let tomorrow = SolarDay::new(coordinates, next_day(date));
    let night = Night::new(today.sunset, tomorrow.sunrise);
    let rule = parameters.high_latitude_rule;
    let solved = |angle: Degrees, direction: Direction| {
        solve(coordinates, date, angle, direction).map(|hours| utc_at(date, hours))
    };

    let dhuhr = today.noon + min_gap();

    let asr = solve_shadow(coordinates, date, parameters.madhab.shadow_ratio())
        .map(|hours| utc_at(date, hours))
        .filter(|&asr| asr > dhuhr + min_gap() && asr < today.sunset - min_gap())
        .unwrap_or_else(|| {
            log::debug!("Asr unsolvable at {coordinates} on {date}, placing it midway to sunset");
            dhuhr + (today.sunset - dhuhr) / 2
        });

    let fajr = high_latitude::resolve(
        rule,
        solved(parameters.fajr_angle, Direction::Morning),
        &night,
        today.sunrise,
        parameters.fajr_angle,
        Direction::Morning,
    )
    .min(today.sunrise - min_gap());

    let maghrib = match parameters.maghrib_angle {
        Some(angle) => solved(angle, Direction::Evening).unwrap_or(today.sunset),
        None => today.sunset,
    };

    let isha = match parameters.isha {
        IshaRule::Interval(interval) => maghrib + minutes(interval),
        IshaRule::Angle(angle) => high_latitude::resolve(
            rule,
            solved(angle, Direction::Evening),
            &night,
            today.sunset,
            angle,
            Direction::Evening,
        )
        .max(maghrib + min_gap()),
    };

    [fajr, today.sunrise, dhuhr, asr, maghrib, isha]
}

/// Push each instant to at least one minute after its predecessor.
fn enforce_order(times: &mut [DateTime<Utc>; 6]) {
    for i in 1..times.len() {
        let earliest = times[i - 1] + min_gap();
        if times[i] < earliest {
            log::debug!(
                "{} at {} precedes {}, moved to {earliest}",
                Prayer::DAILY[i],
                times[i],
                Prayer::DAILY[i - 1]
            );
            times[i] = earliest;
        }
    }
}

fn shift(times: &mut [DateTime<Utc>; 6], adjustments: &PrayerAdjustments) {
    for (time, prayer) in times.iter_mut().zip(Prayer::DAILY) {
        *time += adjustments.duration(prayer);
    }
}

/// Prayer times for `date` at `coordinates`.
///
/// `date` is the civil date at the location; the returned instants are UTC
/// and may fall on the neighbouring UTC date.
pub fn compute(
    coordinates: &Coordinates,
    date: NaiveDate,
    parameters: &CalculationParameters,
) -> PrayerSchedule {
    compute_with_corrections(coordinates, date, parameters, &PrayerAdjustments::NONE)
}

/// Like [`compute`], then shifts each prayer by the user's `corrections`.
///
/// Corrections are applied after rounding and never reordered, so
/// `compute_with_corrections(.., c).fajr == compute(..).fajr + c.fajr` exactly.
pub fn compute_with_corrections(
    coordinates: &Coordinates,
    date: NaiveDate,
    parameters: &CalculationParameters,
    corrections: &PrayerAdjustments,
) -> PrayerSchedule {
    debug_assert!(coordinates.is_valid(), "invalid coordinates {coordinates:?}");

    let mut times = solar_times(coordinates, date, parameters);
    shift(&mut times, &parameters.method_adjustments);
    enforce_order(&mut times);
    for time in times.iter_mut() {
        *time = parameters.rounding.apply(*time);
    }
    shift(&mut times, corrections);

    log::trace!("schedule at {coordinates} on {date}: {times:?}");
    PrayerSchedule::from_daily_times(times)
}

/// Sunnah instants for the night after `date` and the forenoon of `date`.
///
/// Derived from the corrected schedules of `date` and the next date, rounded
/// like the prayers, then shifted by the Tahajud and Dhuha corrections.
pub fn sunnah_times(
    coordinates: &Coordinates,
    date: NaiveDate,
    parameters: &CalculationParameters,
    corrections: &PrayerAdjustments,
) -> SunnahTimes {
    let today = compute_with_corrections(coordinates, date, parameters, corrections);
    sunnah_after(&today, coordinates, date, parameters, corrections)
}

/// Sunnah instants given the already corrected schedule of `date`.
fn sunnah_after(
    today: &PrayerSchedule,
    coordinates: &Coordinates,
    date: NaiveDate,
    parameters: &CalculationParameters,
    corrections: &PrayerAdjustments,
) -> SunnahTimes {
    let tomorrow = compute_with_corrections(coordinates, next_day(date), parameters, corrections);
    let mut sunnah = SunnahTimes::new(today, &tomorrow).rounded(parameters.rounding);
    sunnah.tahajud += corrections.duration(Prayer::Tahajud);
    sunnah.dhuha += corrections.duration(Prayer::Dhuha);
    sunnah
}

/// Like [`compute_with_corrections`], with Tahajud and Dhuha filled in.
pub fn compute_with_sunnah(
    coordinates: &Coordinates,
    date: NaiveDate,
    parameters: &CalculationParameters,
    corrections: &PrayerAdjustments,
) -> PrayerSchedule {
    let mut schedule = compute_with_corrections(coordinates, date, parameters, corrections);
    let sunnah = sunnah_after(&schedule, coordinates, date, parameters, corrections);
    schedule.tahajud = Some(sunnah.tahajud);
    schedule.dhuha = Some(sunnah.dhuha);
    schedule
}
