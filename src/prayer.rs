// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Prayer identifiers and the computed daily schedule.

use crate::error::{Error, Result};
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The instants a schedule can carry, in chronological order within a day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Prayer {
    Fajr,
    Sunrise,
    Dhuha,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Tahajud,
}

impl Prayer {
    /// Fajr through Isha.
    pub const DAILY: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    /// Every variant, in declaration order.
    pub const ALL: [Prayer; 8] = [
        Prayer::Fajr,
        Prayer::Sunrise,
        Prayer::Dhuha,
        Prayer::Dhuhr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
        Prayer::Tahajud,
    ];

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuha => "Dhuha",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Tahajud => "Tahajud",
        }
    }

    /// Whether this is one of the voluntary (sunnah) instants.
    pub const fn is_sunnah(self) -> bool {
        matches!(self, Self::Dhuha | Self::Tahajud)
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Prayer {
    type Err = Error;

    /// Case-insensitive English name.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Prayer::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownPrayer(s.to_owned()))
    }
}

/// One day's prayer times in UTC.
///
/// Tahajud (late in the following night) and Dhuha are only present on
/// schedules produced by [`compute_with_sunnah`](crate::compute_with_sunnah).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrayerSchedule {
    pub fajr: DateTime<Utc>,
    pub sunrise: DateTime<Utc>,
    pub dhuhr: DateTime<Utc>,
    pub asr: DateTime<Utc>,
    pub maghrib: DateTime<Utc>,
    pub isha: DateTime<Utc>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub tahajud: Option<DateTime<Utc>>,
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub dhuha: Option<DateTime<Utc>>,
}

impl PrayerSchedule {
    /// Instant of `prayer`, `None` for a sunnah time this schedule lacks.
    pub fn time(&self, prayer: Prayer) -> Option<DateTime<Utc>> {
        match prayer {
            Prayer::Fajr => Some(self.fajr),
            Prayer::Sunrise => Some(self.sunrise),
            Prayer::Dhuhr => Some(self.dhuhr),
            Prayer::Asr => Some(self.asr),
            Prayer::Maghrib => Some(self.maghrib),
            Prayer::Isha => Some(self.isha),
            Prayer::Tahajud => self.tahajud,
            Prayer::Dhuha => self.dhuha,
        }
    }

    /// Present instants in [`Prayer`] declaration order.
    ///
    /// Tahajud comes last even though it falls after midnight.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL
            .into_iter()
            .filter_map(|prayer| self.time(prayer).map(|time| (prayer, time)))
    }

    /// The same instants viewed in `tz`.
    pub fn with_timezone<'a, Tz: TimeZone + 'a>(
        &'a self,
        tz: &'a Tz,
    ) -> impl Iterator<Item = (Prayer, DateTime<Tz>)> + 'a {
        self.iter().map(move |(prayer, time)| (prayer, time.with_timezone(tz)))
    }

    /// First prayer of [`Prayer::DAILY`] strictly after `instant`.
    pub fn next_after(&self, instant: DateTime<Utc>) -> Option<(Prayer, DateTime<Utc>)> {
        self.daily().find(|&(_, time)| time > instant)
    }

    /// Last prayer of [`Prayer::DAILY`] at or before `instant`.
    pub fn current_at(&self, instant: DateTime<Utc>) -> Option<(Prayer, DateTime<Utc>)> {
        self.daily().take_while(|&(_, time)| time <= instant).last()
    }

    /// Whether Fajr < Sunrise < Dhuhr < Asr < Maghrib < Isha.
    pub fn is_ordered(&self) -> bool {
        let times = self.daily_times();
        times.windows(2).all(|pair| pair[0] < pair[1])
    }

    pub(crate) fn daily_times(&self) -> [DateTime<Utc>; 6] {
        [
            self.fajr,
            self.sunrise,
            self.dhuhr,
            self.asr,
            self.maghrib,
            self.isha,
        ]
    }

    pub(crate) fn from_daily_times(times: [DateTime<Utc>; 6]) -> Self {
        let [fajr, sunrise, dhuhr, asr, maghrib, isha] = times;
        Self {
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
            tahajud: None,
            dhuha: None,
        }
    }

    fn daily(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> {
        Prayer::DAILY.into_iter().zip(self.daily_times())
    }
}

impl fmt::Display for PrayerSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (prayer, time) in self.iter() {
            writeln!(f, "{:<8} {}", prayer, time.format("%Y-%m-%d %H:%M UTC"))?;
        }
        Ok(())
    }
}
