// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Print one day's prayer times.
//!
//! ```text
//! cargo run --example schedule -- "21.4225,39.8262" umm_al_qura 2026-01-15 +03:00
//! ```
//!
//! Arguments: coordinates, method key or name, date (`YYYY-MM-DD`) and UTC
//! offset. Set `MIQAT_LOG=debug` to see fallback decisions.

use chrono::{FixedOffset, NaiveDate, Utc};
use miqat::{compute_with_sunnah, Coordinates, MethodCatalog, PrayerAdjustments};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::error::Error;
use std::str::FromStr;

fn init_logger() {
    let level = std::env::var("MIQAT_LOG")
        .ok()
        .and_then(|value| LevelFilter::from_str(&value).ok())
        .unwrap_or(LevelFilter::Warn);
    TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto)
        .unwrap_or_else(|e| eprintln!("Unable to initiate logger: {e}"));
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logger();
    let mut args = std::env::args().skip(1);

    let coordinates: Coordinates = args
        .next()
        .unwrap_or_else(|| "21.4225,39.8262".to_owned())
        .parse()?;
    let method = match args.next() {
        Some(name) => MethodCatalog::require(&name)?,
        None => MethodCatalog::default_method(),
    };
    let date = match args.next() {
        Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d")?,
        None => Utc::now().date_naive(),
    };
    let offset = match args.next() {
        Some(text) => FixedOffset::from_str(&text)?,
        None => FixedOffset::east_opt(0).ok_or("invalid offset")?,
    };

    let schedule = compute_with_sunnah(&coordinates, date, &method.parameters, &PrayerAdjustments::NONE);

    println!("{method} at {coordinates} on {date} (UTC{offset})");
    for (prayer, time) in schedule.with_timezone(&offset) {
        println!("  {prayer:<8} {}", time.format("%Y-%m-%d %H:%M"));
    }
    Ok(())
}
