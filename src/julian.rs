// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Day on the Universal Time axis.
//!
//! [`JulianDay`] stores a single [`Days`] quantity counted from the Julian
//! Period epoch. The low-precision solar series used for prayer times take UT
//! directly as their argument (the ≈70 s ΔT offset shifts declination by far
//! less than the rounding granularity), so no TT correction is applied here.

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use qtty::*;
use std::ops::{Add, Sub};

/// JD of the Unix epoch (1970-01-01T00:00:00Z).
const UNIX_EPOCH_JD: Days = Days::new(2_440_587.5);

/// JD at 00:00 UT of 0001-01-01 (proleptic Gregorian) minus one day, so that
/// `num_days_from_ce() + CE_OFFSET` is the JD of that date's midnight.
const CE_OFFSET: Days = Days::new(1_721_424.5);

/// A point in time expressed as a (UT) Julian Day number.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JulianDay {
    quantity: Days,
}

impl JulianDay {
    /// J2000.0 epoch: 2000-01-01T12:00:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Create from a raw Julian Day number.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self {
            quantity: Days::new(value),
        }
    }

    /// Create from a [`Days`] quantity.
    #[inline]
    pub const fn from_days(days: Days) -> Self {
        Self { quantity: days }
    }

    /// Julian Day at 00:00 UT of a civil date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_days(Days::new(f64::from(date.num_days_from_ce())) + CE_OFFSET)
    }

    /// Julian Day of a UTC instant.
    pub fn from_utc(datetime: DateTime<Utc>) -> Self {
        let seconds = Seconds::new(datetime.timestamp_millis() as f64 / 1e3);
        Self::from_days(UNIX_EPOCH_JD + seconds.to::<Day>())
    }

    /// The underlying scalar value in days.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.quantity.value()
    }

    /// Julian centuries since J2000.0, the argument of the solar series.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new((self.quantity - Self::J2000.quantity).value() / Self::JULIAN_CENTURY.value())
    }
}

/// 00:00 UTC of a civil date.
#[inline]
pub(crate) fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// UTC instant `hours` after 00:00 UTC of `date`, to the millisecond.
///
/// `hours` may be negative or exceed 24; the result then lands on the
/// neighbouring UTC day.
#[inline]
pub(crate) fn utc_at(date: NaiveDate, hours: Hours) -> DateTime<Utc> {
    let millis = (hours.to::<Second>().value() * 1e3).round() as i64;
    midnight_utc(date) + chrono::Duration::milliseconds(millis)
}

impl Add<Days> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        Self::from_days(self.quantity + rhs)
    }
}

impl Add<Hours> for JulianDay {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Hours) -> Self::Output {
        self + rhs.to::<Day>()
    }
}

impl Sub for JulianDay {
    type Output = Days;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.quantity - rhs.quantity
    }
}
