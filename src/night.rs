// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The night as a UTC interval.
//!
//! [`Night`] is the span the high-latitude rules and the sunnah times divide
//! into fractions: sunset to the next sunrise for the former, Maghrib to the
//! next Fajr for the latter.

use chrono::{DateTime, Duration, Utc};
use qtty::{Minute, Minutes, Second, Seconds};
use std::fmt;

/// Scale a duration by `fraction`, keeping millisecond resolution.
#[inline]
pub(crate) fn scale(duration: Duration, fraction: f64) -> Duration {
    Duration::milliseconds((duration.num_milliseconds() as f64 * fraction).round() as i64)
}

/// Convert a signed quantity of minutes to a `chrono::Duration`.
#[inline]
pub(crate) fn minutes(value: Minutes) -> Duration {
    Duration::milliseconds((value.to::<Second>().value() * 1e3).round() as i64)
}

/// Interval from an evening instant to the following morning instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Night {
    /// Evening edge, sunset or Maghrib.
    pub start: DateTime<Utc>,
    /// Morning edge on the following day, sunrise or Fajr.
    pub end: DateTime<Utc>,
}

impl Night {
    /// Create a night from its evening `start` and morning `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Night { start, end }
    }

    /// Length of the night.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Length of the night in minutes.
    pub fn duration_minutes(&self) -> Minutes {
        Seconds::new(self.duration().num_milliseconds() as f64 / 1e3).to::<Minute>()
    }

    /// `fraction` of the night's length.
    pub fn portion(&self, fraction: f64) -> Duration {
        scale(self.duration(), fraction)
    }

    /// Instant `fraction` of the way from `start` to `end`.
    pub fn at_fraction(&self, fraction: f64) -> DateTime<Utc> {
        self.start + self.portion(fraction)
    }

    /// Midpoint of the night.
    pub fn middle(&self) -> DateTime<Utc> {
        self.at_fraction(0.5)
    }

    /// Start of the last third of the night.
    pub fn last_third(&self) -> DateTime<Utc> {
        self.at_fraction(2.0 / 3.0)
    }

    /// Whether `instant` falls in `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

impl fmt::Display for Night {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn night() -> Night {
        Night::new(
            Utc.with_ymd_and_hms(2024, 3, 20, 18, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 3, 21, 6, 0, 0).unwrap(),
        )
    }

    #[test]
    fn duration_spans_midnight() {
        assert_eq!(night().duration(), Duration::hours(12));
        approx::assert_abs_diff_eq!(night().duration_minutes().value(), 720.0, epsilon = 1e-9);
    }

    #[test]
    fn fractions_of_the_night() {
        let n = night();
        assert_eq!(n.middle(), Utc.with_ymd_and_hms(2024, 3, 21, 0, 0, 0).unwrap());
        assert_eq!(n.last_third(), Utc.with_ymd_and_hms(2024, 3, 21, 2, 0, 0).unwrap());
        assert_eq!(n.portion(1.0 / 7.0), Duration::milliseconds(6_171_429));
    }

    #[test]
    fn contains_is_half_open() {
        let n = night();
        assert!(n.contains(n.start));
        assert!(n.contains(n.middle()));
        assert!(!n.contains(n.end));
    }

    #[test]
    fn minutes_to_duration() {
        assert_eq!(minutes(Minutes::new(-7.0)), Duration::minutes(-7));
        assert_eq!(minutes(Minutes::new(1.5)), Duration::seconds(90));
    }

    #[test]
    fn display_joins_endpoints() {
        assert!(night().to_string().contains(" to "));
    }
}
