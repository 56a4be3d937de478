// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Catalog of named calculation authorities.
//!
//! The table is a `static` slice in a fixed order; its first entry (Muslim
//! World League) is the default used whenever a name cannot be resolved.

use crate::adjustments::PrayerAdjustments;
use crate::error::{Error, Result};
use crate::high_latitude::HighLatitudeRule;
use crate::parameters::{CalculationParameters, Rounding};
use std::fmt;

/// A named, immutable set of calculation parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Method {
    /// Stable identifier, lowercase snake_case.
    pub key: &'static str,
    /// Name of the issuing authority.
    pub name: &'static str,
    pub parameters: CalculationParameters,
}

impl Method {
    const fn new(key: &'static str, name: &'static str, parameters: CalculationParameters) -> Self {
        Self {
            key,
            name,
            parameters,
        }
    }

    fn matches(&self, query: &str) -> bool {
        self.key.eq_ignore_ascii_case(query) || self.name.eq_ignore_ascii_case(query)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

type P = CalculationParameters;

static METHODS: [Method; 18] = [
    Method::new("mwl", "Muslim World League", P::new(18.0, 17.0)),
    Method::new(
        "egyptian",
        "Egyptian General Authority of Survey",
        P::new(19.5, 17.5),
    ),
    Method::new(
        "karachi",
        "University of Islamic Sciences, Karachi",
        P::new(18.0, 18.0),
    ),
    Method::new(
        "umm_al_qura",
        "Umm al-Qura University, Makkah",
        P::with_isha_interval(18.5, 90.0),
    ),
    Method::new(
        "dubai",
        "Dubai",
        P::new(18.2, 18.2).with_method_adjustments(PrayerAdjustments::new(0, -3, 3, 3, 3, 0)),
    ),
    Method::new(
        "moonsighting",
        "Moonsighting Committee Worldwide",
        P::new(18.0, 18.0)
            .with_method_adjustments(PrayerAdjustments::new(0, 0, 5, 0, 3, 0))
            .with_high_latitude_rule(HighLatitudeRule::SeventhOfNight),
    ),
    Method::new(
        "isna",
        "Islamic Society of North America",
        P::new(15.0, 15.0),
    ),
    Method::new("kuwait", "Kuwait", P::new(18.0, 17.5)),
    Method::new("qatar", "Qatar", P::with_isha_interval(18.0, 90.0)),
    Method::new(
        "singapore",
        "Majlis Ugama Islam Singapura",
        P::new(20.0, 18.0).with_rounding(Rounding::Up),
    ),
    Method::new(
        "tehran",
        "Institute of Geophysics, University of Tehran",
        P::new(17.7, 14.0).with_maghrib_angle(4.5),
    ),
    Method::new(
        "turkey",
        "Diyanet İşleri Başkanlığı, Turkey",
        P::new(18.0, 17.0).with_method_adjustments(PrayerAdjustments::new(0, -7, 5, 4, 7, 0)),
    ),
    Method::new(
        "uoif",
        "Union des Organisations Islamiques de France",
        P::new(12.0, 12.0),
    ),
    Method::new(
        "russia",
        "Spiritual Administration of Muslims of Russia",
        P::new(16.0, 15.0),
    ),
    Method::new(
        "jakim",
        "Jabatan Kemajuan Islam Malaysia (JAKIM)",
        P::new(20.0, 18.0),
    ),
    Method::new("gulf", "Gulf Region", P::with_isha_interval(19.5, 90.0)),
    Method::new(
        "jafari",
        "Shia Ithna Ashari, Leva Institute, Qum",
        P::new(16.0, 14.0).with_maghrib_angle(4.0),
    ),
    Method::new(
        "kemenag",
        "Kementerian Agama Republik Indonesia (KEMENAG)",
        P::new(20.0, 18.0),
    ),
];

/// Read-only access to the method table.
pub struct MethodCatalog;

impl MethodCatalog {
    /// Every method, in catalog order.
    #[inline]
    pub fn all_methods() -> &'static [Method] {
        &METHODS
    }

    /// The first catalog entry.
    #[inline]
    pub fn default_method() -> &'static Method {
        &METHODS[0]
    }

    /// Method whose key or name equals `name`, ignoring ASCII case.
    pub fn find(name: &str) -> Option<&'static Method> {
        let name = name.trim();
        METHODS.iter().find(|method| method.matches(name))
    }

    /// Like [`find`](Self::find), but an unknown name is an error.
    pub fn require(name: &str) -> Result<&'static Method> {
        Self::find(name).ok_or_else(|| Error::UnknownMethod(name.to_owned()))
    }

    /// Like [`find`](Self::find), falling back to the default method.
    pub fn lookup(name: &str) -> &'static Method {
        Self::find(name).unwrap_or_else(|| {
            let fallback = Self::default_method();
            log::warn!("unknown calculation method {name:?}, using {}", fallback.name);
            fallback
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{IshaRule, Madhab};
    use qtty::Minutes;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eighteen_methods_with_unique_keys() {
        let methods = MethodCatalog::all_methods();
        assert_eq!(methods.len(), 18);
        let keys: HashSet<_> = methods.iter().map(|m| m.key).collect();
        let names: HashSet<_> = methods.iter().map(|m| m.name).collect();
        assert_eq!(keys.len(), methods.len());
        assert_eq!(names.len(), methods.len());
    }

    #[test]
    fn default_is_muslim_world_league() {
        assert_eq!(MethodCatalog::default_method().key, "mwl");
        assert_eq!(MethodCatalog::default_method(), &MethodCatalog::all_methods()[0]);
    }

    #[test]
    fn find_matches_key_and_name_case_insensitively() {
        assert_eq!(MethodCatalog::find("ISNA").unwrap().key, "isna");
        assert_eq!(
            MethodCatalog::find("umm al-qura university, makkah").unwrap().key,
            "umm_al_qura"
        );
        assert!(MethodCatalog::find("nonexistent").is_none());
    }

    #[test]
    fn lookup_falls_back_to_default() {
        assert_eq!(MethodCatalog::lookup("nonexistent").key, "mwl");
        assert_eq!(MethodCatalog::lookup("egyptian").key, "egyptian");
    }

    #[test]
    fn require_reports_unknown_names() {
        assert!(matches!(
            MethodCatalog::require("nonexistent"),
            Err(Error::UnknownMethod(_))
        ));
        assert!(MethodCatalog::require("gulf").is_ok());
    }

    #[test]
    fn umm_al_qura_uses_ninety_minute_isha() {
        let params = MethodCatalog::lookup("umm_al_qura").parameters;
        assert_eq!(params.isha, IshaRule::Interval(Minutes::new(90.0)));
        assert_eq!(params.fajr_angle.value(), 18.5);
    }

    #[test]
    fn defaults_across_catalog() {
        for method in MethodCatalog::all_methods() {
            assert_eq!(method.parameters.madhab, Madhab::Shafi, "{}", method.key);
            assert!(method.parameters.fajr_angle.value() > 0.0);
        }
        assert_eq!(
            MethodCatalog::lookup("singapore").parameters.rounding,
            Rounding::Up
        );
        assert_eq!(
            MethodCatalog::lookup("moonsighting").parameters.high_latitude_rule,
            HighLatitudeRule::SeventhOfNight
        );
    }

    #[test]
    fn catalog_entries_are_shared_references() {
        let a = MethodCatalog::lookup("turkey");
        let b = MethodCatalog::lookup("Turkey");
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.parameters.method_adjustments.sunrise, -7);
    }
}
