// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Night-fraction fallbacks for Fajr and Isha at high latitudes.
//!
//! Above roughly 48° the Sun may never reach the Fajr or Isha depression in
//! summer, and well before that the twilight it does reach can stretch
//! across most of the night. Each rule caps the twilight at a fraction of the
//! night, measured from sunrise backwards (Fajr) or from sunset forwards
//! (Isha).

use crate::night::Night;
use crate::solver::Direction;
use chrono::{DateTime, Utc};
use qtty::Degrees;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How Fajr and Isha are placed when twilight is unreachable or too long.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HighLatitudeRule {
    /// Keep the solved time; only an unsolvable event is replaced, using the
    /// middle-of-night portion.
    None,
    /// Twilight lasts at most half the night.
    #[default]
    MiddleOfNight,
    /// Twilight lasts at most a seventh of the night.
    SeventhOfNight,
    /// Twilight lasts at most `angle / 60` of the night.
    TwilightAngle,
}

impl HighLatitudeRule {
    /// Fraction of the night allotted to the twilight of depression `angle`.
    pub fn night_portion(self, angle: Degrees) -> f64 {
        match self {
            Self::None | Self::MiddleOfNight => 0.5,
            Self::SeventhOfNight => 1.0 / 7.0,
            Self::TwilightAngle => angle.value() / 60.0,
        }
    }

    /// Whether solved times beyond the portion are also replaced.
    #[inline]
    pub const fn bounds_solved_times(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Fallback instant: `edge` moved by the rule's portion of `night`, earlier
/// for [`Direction::Morning`] (Fajr, `edge` = sunrise) and later for
/// [`Direction::Evening`] (Isha, `edge` = sunset).
pub fn fallback(
    rule: HighLatitudeRule,
    night: &Night,
    edge: DateTime<Utc>,
    angle: Degrees,
    direction: Direction,
) -> DateTime<Utc> {
    let portion = night.portion(rule.night_portion(angle));
    match direction {
        Direction::Morning => edge - portion,
        Direction::Evening => edge + portion,
    }
}

/// Final Fajr or Isha instant from the solver output.
///
/// An unsolved event always takes the fallback. A solved one takes it only
/// when the rule bounds solved times and the event lies beyond the fallback.
pub(crate) fn resolve(
    rule: HighLatitudeRule,
    solved: Option<DateTime<Utc>>,
    night: &Night,
    edge: DateTime<Utc>,
    angle: Degrees,
    direction: Direction,
) -> DateTime<Utc> {
    let bound = fallback(rule, night, edge, angle, direction);
    match solved {
        None => {
            log::debug!("{angle} {direction:?} twilight unreachable, {rule:?} fallback at {bound}");
            bound
        }
        Some(time) if rule.bounds_solved_times() && exceeds(time, bound, direction) => {
            log::debug!("{angle} {direction:?} twilight at {time} exceeds {rule:?} bound {bound}");
            bound
        }
        Some(time) => time,
    }
}

#[inline]
fn exceeds(time: DateTime<Utc>, bound: DateTime<Utc>, direction: Direction) -> bool {
    match direction {
        Direction::Morning => time < bound,
        Direction::Evening => time > bound,
    }
}
