// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # miqat
//!
//! Astronomical prayer times: given a location, a civil date and a
//! calculation method, compute Fajr, sunrise, Dhuhr, Asr, Maghrib and Isha
//! (and optionally the Tahajud and Dhuha sunnah times) as UTC instants.
//!
//! ```
//! use chrono::{FixedOffset, NaiveDate};
//! use miqat::{compute, Coordinates, MethodCatalog, Prayer};
//!
//! let mecca: Coordinates = "21.4225, 39.8262".parse()?;
//! let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
//! let method = MethodCatalog::lookup("umm_al_qura");
//!
//! let schedule = compute(&mecca, date, &method.parameters);
//! assert!(schedule.is_ordered());
//!
//! let riyadh = FixedOffset::east_opt(3 * 3600).unwrap();
//! for (prayer, time) in schedule.with_timezone(&riyadh) {
//!     println!("{prayer:<8} {}", time.format("%H:%M"));
//! }
//! # assert_eq!(schedule.time(Prayer::Fajr), Some(schedule.fajr));
//! # Ok::<(), miqat::Error>(())
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`julian`] | [`JulianDay`] on the UT axis |
//! | [`solar`] | equation of time and declination ([`solar_coordinates`]) |
//! | [`solver`] | solar noon and hour-angle event solving |
//! | [`high_latitude`] | [`HighLatitudeRule`] night-fraction fallbacks |
//! | [`parameters`] | [`CalculationParameters`], [`Madhab`], [`IshaRule`], [`Rounding`] |
//! | [`method`] | the [`MethodCatalog`] of named authorities |
//! | [`engine`] | [`compute`] and friends |
//!
//! # Features
//!
//! * `serde`: `Serialize`/`Deserialize` for schedules, adjustments and enums.
//! * `config` (default): TOML [`Settings`], implies `serde`.
//!
//! The library logs through the [`log`] facade and installs no logger.

mod adjustments;
#[cfg(feature = "config")]
mod config;
mod coordinates;
pub mod engine;
mod error;
pub mod high_latitude;
pub mod julian;
pub mod method;
mod night;
pub mod parameters;
mod prayer;
pub mod solar;
pub mod solver;
mod sunnah;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use adjustments::PrayerAdjustments;
#[cfg(feature = "config")]
pub use config::{Location, Settings};
pub use coordinates::Coordinates;
pub use engine::{compute, compute_with_corrections, compute_with_sunnah, sunnah_times};
pub use error::{Error, Result};
pub use high_latitude::HighLatitudeRule;
pub use julian::JulianDay;
pub use method::{Method, MethodCatalog};
pub use night::Night;
pub use parameters::{CalculationParameters, IshaRule, Madhab, Rounding};
pub use prayer::{Prayer, PrayerSchedule};
pub use solar::{solar_coordinates, solar_elevation, SolarCoordinates};
pub use solver::Direction;
pub use sunnah::SunnahTimes;
