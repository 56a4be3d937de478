// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! TOML settings.
//!
//! ```toml
//! method = "isna"
//! madhab = "hanafi"
//! high_latitude_rule = "seventh_of_night"
//! rounding = "up"
//! include_sunnah = true
//!
//! [location]
//! latitude = 43.6532
//! longitude = -79.3832
//!
//! [corrections]
//! fajr = 2
//! isha = -3
//! ```
//!
//! Only `[location]` is required. The method defaults to the first catalog
//! entry; `high_latitude_rule` and `rounding` default to the method's own.

use crate::adjustments::PrayerAdjustments;
use crate::coordinates::Coordinates;
use crate::engine::{compute_with_corrections, compute_with_sunnah};
use crate::error::Result;
use crate::high_latitude::HighLatitudeRule;
use crate::method::{Method, MethodCatalog};
use crate::parameters::{CalculationParameters, Madhab, Rounding};
use crate::prayer::PrayerSchedule;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Observer position in decimal degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

fn default_method() -> String {
    MethodCatalog::default_method().key.to_owned()
}

/// User settings: which method, which overrides, where, and which corrections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Catalog key or name.
    #[serde(default = "default_method")]
    pub method: String,
    #[serde(default)]
    pub madhab: Madhab,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high_latitude_rule: Option<HighLatitudeRule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounding: Option<Rounding>,
    /// Fill in Tahajud and Dhuha.
    #[serde(default)]
    pub include_sunnah: bool,
    pub location: Location,
    #[serde(default)]
    pub corrections: PrayerAdjustments,
}

impl Settings {
    /// Default settings for a location.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            method: default_method(),
            madhab: Madhab::default(),
            high_latitude_rule: None,
            rounding: None,
            include_sunnah: false,
            location: Location {
                latitude,
                longitude,
            },
            corrections: PrayerAdjustments::NONE,
        }
    }

    /// Parse settings from a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML settings file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading settings from {}", path.display());
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Catalog entry for [`method`](Self::method), or the default if unknown.
    pub fn method(&self) -> &'static Method {
        MethodCatalog::lookup(&self.method)
    }

    /// The method's parameters with this file's overrides applied.
    pub fn parameters(&self) -> CalculationParameters {
        let mut params = self.method().parameters.with_madhab(self.madhab);
        if let Some(rule) = self.high_latitude_rule {
            params = params.with_high_latitude_rule(rule);
        }
        if let Some(rounding) = self.rounding {
            params = params.with_rounding(rounding);
        }
        params
    }

    /// Validated coordinates of [`location`](Self::location).
    pub fn coordinates(&self) -> Result<Coordinates> {
        Coordinates::new(self.location.latitude, self.location.longitude)
    }

    /// Schedule for `date` with these settings.
    pub fn schedule_for(&self, date: NaiveDate) -> Result<PrayerSchedule> {
        let coordinates = self.coordinates()?;
        let params = self.parameters();
        Ok(if self.include_sunnah {
            compute_with_sunnah(&coordinates, date, &params, &self.corrections)
        } else {
            compute_with_corrections(&coordinates, date, &params, &self.corrections)
        })
    }
}
