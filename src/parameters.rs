// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calculation parameters.
//!
//! [`CalculationParameters`] is a small `Copy` value. Catalog entries are
//! `const`, and variants are derived by copy-and-modify:
//!
//! ```
//! use miqat::{HighLatitudeRule, Madhab, MethodCatalog};
//!
//! let params = MethodCatalog::lookup("isna")
//!     .parameters
//!     .with_madhab(Madhab::Hanafi)
//!     .with_high_latitude_rule(HighLatitudeRule::SeventhOfNight);
//! assert_eq!(params.madhab, Madhab::Hanafi);
//! ```

use crate::adjustments::PrayerAdjustments;
use crate::high_latitude::HighLatitudeRule;
use chrono::{DateTime, Duration, DurationRound, Utc};
use qtty::{Degrees, Minutes};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// School of jurisprudence for the Asr shadow rule.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Madhab {
    /// Shadow equals object length plus noon shadow.
    #[default]
    Shafi,
    /// Shadow equals twice the object length plus noon shadow.
    Hanafi,
}

impl Madhab {
    /// Shadow-length multiplier used by the Asr solver.
    #[inline]
    pub const fn shadow_ratio(self) -> f64 {
        match self {
            Self::Shafi => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

/// How Isha is determined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IshaRule {
    /// Sun's centre at this depression after sunset.
    Angle(Degrees),
    /// Fixed interval after Maghrib.
    Interval(Minutes),
}

/// Rounding applied to every instant before user corrections.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rounding {
    /// Nearest whole minute; exactly 30 s rounds up.
    #[default]
    Nearest,
    /// Next whole minute unless already on one.
    Up,
    /// Keep millisecond resolution.
    None,
}

impl Rounding {
    /// Apply this policy to an instant.
    pub fn apply(self, instant: DateTime<Utc>) -> DateTime<Utc> {
        let minute = Duration::minutes(1);
        match self {
            Self::Nearest => instant.duration_round(minute).unwrap_or(instant),
            Self::Up => instant.duration_round_up(minute).unwrap_or(instant),
            Self::None => instant,
        }
    }
}

/// Everything besides location and date that determines a schedule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CalculationParameters {
    /// Sun's depression at Fajr.
    pub fajr_angle: Degrees,
    pub isha: IshaRule,
    /// Sun's depression at Maghrib; `None` means Maghrib = sunset.
    pub maghrib_angle: Option<Degrees>,
    pub madhab: Madhab,
    pub high_latitude_rule: HighLatitudeRule,
    /// Offsets that are part of the method, applied before rounding.
    pub method_adjustments: PrayerAdjustments,
    pub rounding: Rounding,
}

impl CalculationParameters {
    /// Angle-based Fajr and Isha with default madhab, rule and rounding.
    pub const fn new(fajr_angle: f64, isha_angle: f64) -> Self {
        Self {
            fajr_angle: Degrees::new(fajr_angle),
            isha: IshaRule::Angle(Degrees::new(isha_angle)),
            maghrib_angle: None,
            madhab: Madhab::Shafi,
            high_latitude_rule: HighLatitudeRule::MiddleOfNight,
            method_adjustments: PrayerAdjustments::NONE,
            rounding: Rounding::Nearest,
        }
    }

    /// Angle-based Fajr, Isha a fixed number of minutes after Maghrib.
    pub const fn with_isha_interval(fajr_angle: f64, isha_minutes: f64) -> Self {
        let mut params = Self::new(fajr_angle, 0.0);
        params.isha = IshaRule::Interval(Minutes::new(isha_minutes));
        params
    }

    pub const fn with_madhab(mut self, madhab: Madhab) -> Self {
        self.madhab = madhab;
        self
    }

    pub const fn with_high_latitude_rule(mut self, rule: HighLatitudeRule) -> Self {
        self.high_latitude_rule = rule;
        self
    }

    pub const fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    pub const fn with_maghrib_angle(mut self, angle: f64) -> Self {
        self.maghrib_angle = Some(Degrees::new(angle));
        self
    }

    pub const fn with_method_adjustments(mut self, adjustments: PrayerAdjustments) -> Self {
        self.method_adjustments = adjustments;
        self
    }

    /// The Isha depression, if Isha is angle-based.
    pub fn isha_angle(&self) -> Option<Degrees> {
        match self.isha {
            IshaRule::Angle(angle) => Some(angle),
            IshaRule::Interval(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, h, m, s).unwrap()
    }

    #[test]
    fn shadow_ratios() {
        assert_eq!(Madhab::Shafi.shadow_ratio(), 1.0);
        assert_eq!(Madhab::Hanafi.shadow_ratio(), 2.0);
    }

    #[test]
    fn nearest_rounding() {
        assert_eq!(Rounding::Nearest.apply(at(5, 12, 29)), at(5, 12, 0));
        assert_eq!(Rounding::Nearest.apply(at(5, 12, 30)), at(5, 13, 0));
        assert_eq!(Rounding::Nearest.apply(at(23, 59, 45)), Utc.with_ymd_and_hms(2026, 1, 16, 0, 0, 0).unwrap());
    }

    #[test]
    fn up_rounding() {
        assert_eq!(Rounding::Up.apply(at(5, 12, 1)), at(5, 13, 0));
        assert_eq!(Rounding::Up.apply(at(5, 12, 0)), at(5, 12, 0));
    }

    #[test]
    fn no_rounding_is_identity() {
        let t = at(5, 12, 17) + Duration::milliseconds(250);
        assert_eq!(Rounding::None.apply(t), t);
    }

    #[test]
    fn builders_copy_and_modify() {
        let base = CalculationParameters::new(18.0, 17.0);
        let hanafi = base.with_madhab(Madhab::Hanafi).with_rounding(Rounding::Up);
        assert_eq!(base.madhab, Madhab::Shafi);
        assert_eq!(hanafi.madhab, Madhab::Hanafi);
        assert_eq!(hanafi.rounding, Rounding::Up);
        assert_eq!(hanafi.fajr_angle, base.fajr_angle);
    }

    #[test]
    fn interval_isha_has_no_angle() {
        let params = CalculationParameters::with_isha_interval(18.5, 90.0);
        assert_eq!(params.isha, IshaRule::Interval(Minutes::new(90.0)));
        assert_eq!(params.isha_angle(), None);
        assert_eq!(
            CalculationParameters::new(18.0, 17.0).isha_angle(),
            Some(Degrees::new(17.0))
        );
    }
}
