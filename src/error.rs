// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for input validation and configuration loading.
//!
//! The calculation path itself never fails: unsolvable solar events are
//! recovered internally. Errors only arise at the edges, when raw user input
//! (coordinate strings, method or prayer names, configuration files) is turned
//! into typed values.

use thiserror::Error;

/// Result type for fallible `miqat` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building calculation inputs.
#[derive(Error, Debug)]
pub enum Error {
    /// Latitude outside `[-90, 90]` degrees.
    #[error("latitude {0}° is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    /// Longitude outside `[-180, 180]` degrees.
    #[error("longitude {0}° is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    /// A `"lat,lon"` string that could not be split or parsed.
    #[error("malformed coordinates: {0:?}")]
    MalformedCoordinates(String),

    /// No catalog entry with this key or name.
    #[error("unknown calculation method: {0:?}")]
    UnknownMethod(String),

    /// No prayer with this name.
    #[error("unknown prayer: {0:?}")]
    UnknownPrayer(String),

    /// Configuration file could not be read.
    #[cfg(feature = "config")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is not valid TOML or has unexpected fields.
    #[cfg(feature = "config")]
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
