// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Signed per-prayer minute offsets.
//!
//! The same type carries both the adjustments a calculation method bakes in
//! (applied before ordering and rounding) and the user's own corrections
//! (applied last, after rounding).

use crate::prayer::Prayer;
use chrono::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whole-minute offsets, positive = later.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrayerAdjustments {
    pub fajr: i32,
    pub sunrise: i32,
    pub dhuhr: i32,
    pub asr: i32,
    pub maghrib: i32,
    pub isha: i32,
    pub tahajud: i32,
    pub dhuha: i32,
}

impl PrayerAdjustments {
    /// No offsets.
    pub const NONE: Self = Self::new(0, 0, 0, 0, 0, 0);

    /// Offsets for the six daily instants; the sunnah offsets start at zero.
    pub const fn new(fajr: i32, sunrise: i32, dhuhr: i32, asr: i32, maghrib: i32, isha: i32) -> Self {
        Self {
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
            tahajud: 0,
            dhuha: 0,
        }
    }

    /// Copy with the sunnah offsets replaced.
    pub const fn with_sunnah(mut self, tahajud: i32, dhuha: i32) -> Self {
        self.tahajud = tahajud;
        self.dhuha = dhuha;
        self
    }

    /// Copy with one prayer's offset replaced.
    pub fn with(mut self, prayer: Prayer, minutes: i32) -> Self {
        *self.slot(prayer) = minutes;
        self
    }

    /// Offset in minutes for `prayer`.
    pub const fn get(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
            Prayer::Tahajud => self.tahajud,
            Prayer::Dhuha => self.dhuha,
        }
    }

    /// Offset for `prayer` as a duration.
    #[inline]
    pub fn duration(&self, prayer: Prayer) -> Duration {
        Duration::minutes(i64::from(self.get(prayer)))
    }

    /// Whether every offset is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::NONE
    }

    fn slot(&mut self, prayer: Prayer) -> &mut i32 {
        match prayer {
            Prayer::Fajr => &mut self.fajr,
            Prayer::Sunrise => &mut self.sunrise,
            Prayer::Dhuhr => &mut self.dhuhr,
            Prayer::Asr => &mut self.asr,
            Prayer::Maghrib => &mut self.maghrib,
            Prayer::Isha => &mut self.isha,
            Prayer::Tahajud => &mut self.tahajud,
            Prayer::Dhuha => &mut self.dhuha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_leaves_sunnah_offsets_at_zero() {
        let adj = PrayerAdjustments::new(1, -2, 3, 4, 5, 6);
        assert_eq!(adj.get(Prayer::Sunrise), -2);
        assert_eq!(adj.get(Prayer::Tahajud), 0);
        assert_eq!(adj.get(Prayer::Dhuha), 0);
    }

    #[test]
    fn builders_replace_single_fields() {
        let adj = PrayerAdjustments::NONE
            .with(Prayer::Isha, 10)
            .with_sunnah(-5, 3);
        assert_eq!(adj.isha, 10);
        assert_eq!(adj.tahajud, -5);
        assert_eq!(adj.dhuha, 3);
        assert_eq!(adj.duration(Prayer::Isha), Duration::minutes(10));
        assert!(!adj.is_zero());
        assert!(PrayerAdjustments::default().is_zero());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_default_to_zero() {
        let adj: PrayerAdjustments = serde_json::from_str(r#"{"fajr": 2, "isha": -3}"#).unwrap();
        assert_eq!(adj, PrayerAdjustments::NONE.with(Prayer::Fajr, 2).with(Prayer::Isha, -3));
    }
}
