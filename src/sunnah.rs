// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Voluntary prayer times derived from two consecutive schedules.

use crate::night::Night;
use crate::parameters::Rounding;
use crate::prayer::PrayerSchedule;
use chrono::{DateTime, Duration, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Minutes after sunrise at which Dhuha begins.
pub const DHUHA_AFTER_SUNRISE: i64 = 20;

/// Sunnah instants for one night and the following forenoon.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunnahTimes {
    /// Two thirds of the way from Isha to the next day's Fajr.
    pub tahajud: DateTime<Utc>,
    /// Twenty minutes after sunrise.
    pub dhuha: DateTime<Utc>,
    /// Midpoint between Maghrib and the next Fajr.
    pub middle_of_night: DateTime<Utc>,
    /// Start of the last third between Maghrib and the next Fajr.
    pub last_third_of_night: DateTime<Utc>,
}

impl SunnahTimes {
    /// Derive from `today`'s schedule and the one for the following date.
    pub fn new(today: &PrayerSchedule, tomorrow: &PrayerSchedule) -> Self {
        let after_isha = Night::new(today.isha, tomorrow.fajr);
        let after_maghrib = Night::new(today.maghrib, tomorrow.fajr);
        Self {
            tahajud: after_isha.at_fraction(2.0 / 3.0),
            dhuha: today.sunrise + Duration::minutes(DHUHA_AFTER_SUNRISE),
            middle_of_night: after_maghrib.middle(),
            last_third_of_night: after_maghrib.last_third(),
        }
    }

    /// Copy with every instant rounded by `rounding`.
    pub fn rounded(self, rounding: Rounding) -> Self {
        Self {
            tahajud: rounding.apply(self.tahajud),
            dhuha: rounding.apply(self.dhuha),
            middle_of_night: rounding.apply(self.middle_of_night),
            last_third_of_night: rounding.apply(self.last_third_of_night),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day(d: u32, fajr: (u32, u32)) -> PrayerSchedule {
        let t = |h, m| Utc.with_ymd_and_hms(2024, 3, d, h, m, 0).unwrap();
        PrayerSchedule::from_daily_times([
            t(fajr.0, fajr.1),
            t(6, 0),
            t(12, 0),
            t(15, 30),
            t(18, 0),
            t(19, 30),
        ])
    }

    #[test]
    fn tahajud_is_two_thirds_from_isha_to_next_fajr() {
        let today = day(20, (4, 30));
        let tomorrow = day(21, (4, 30));
        let sunnah = SunnahTimes::new(&today, &tomorrow);
        // 19:30 -> 04:30 is nine hours; two thirds is six.
        assert_eq!(sunnah.tahajud, Utc.with_ymd_and_hms(2024, 3, 21, 1, 30, 0).unwrap());
        assert_eq!(sunnah.dhuha, Utc.with_ymd_and_hms(2024, 3, 20, 6, 20, 0).unwrap());
    }

    #[test]
    fn night_markers_run_from_maghrib() {
        let today = day(20, (4, 30));
        let tomorrow = day(21, (4, 0));
        let sunnah = SunnahTimes::new(&today, &tomorrow);
        // 18:00 -> 04:00 is ten hours.
        assert_eq!(sunnah.middle_of_night, Utc.with_ymd_and_hms(2024, 3, 20, 23, 0, 0).unwrap());
        assert_eq!(
            sunnah.last_third_of_night,
            Utc.with_ymd_and_hms(2024, 3, 21, 0, 40, 0).unwrap()
        );
    }

    #[test]
    fn rounding_applies_to_every_instant() {
        let today = day(20, (4, 30));
        let tomorrow = day(21, (4, 31));
        // 19:30 -> 04:31 is 541 min; two thirds lands on a fractional minute.
        let raw = SunnahTimes::new(&today, &tomorrow);
        let rounded = raw.rounded(Rounding::Up);
        assert!(rounded.tahajud >= raw.tahajud);
        assert_eq!(rounded.tahajud.timestamp() % 60, 0);
        assert_eq!(rounded.dhuha, raw.dhuha);
    }
}
