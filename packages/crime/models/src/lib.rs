#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime category labels and severity band definitions.
//!
//! This crate defines the severity policy used across the CityX crime
//! tooling: every category label the city's dataset uses is assigned to
//! one of five ordinal severity bands. The banding is hand-curated
//! domain policy supplied with the dataset; it is looked up, never
//! derived from data.

pub mod classify;

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Severity band for a crime category, from 1 (minimal) to 5 (critical).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Band 1: non-criminal or minor occurrences
    Minimal = 1,
    /// Band 2: low-level offenses (vandalism, trespass)
    Low = 2,
    /// Band 3: moderate offenses (theft, fraud, narcotics)
    Moderate = 3,
    /// Band 4: serious offenses (robbery, burglary)
    High = 4,
    /// Band 5: most severe offenses (kidnapping, arson)
    Critical = 5,
}

impl Severity {
    /// Returns the numeric value of this severity band.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Creates a severity band from a numeric value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not in the range 1-5.
    pub const fn from_value(value: u8) -> Result<Self, InvalidSeverityError> {
        match value {
            1 => Ok(Self::Minimal),
            2 => Ok(Self::Low),
            3 => Ok(Self::Moderate),
            4 => Ok(Self::High),
            5 => Ok(Self::Critical),
            _ => Err(InvalidSeverityError { value }),
        }
    }
}

/// Error returned when attempting to create a [`Severity`] from an invalid
/// numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidSeverityError {
    /// The invalid severity value that was provided.
    pub value: u8,
}

impl std::fmt::Display for InvalidSeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid severity value {}: expected 1-5", self.value)
    }
}

impl std::error::Error for InvalidSeverityError {}

/// Returns the severity band for a category label, or `None` when the
/// policy table has no opinion on the label.
///
/// Lookup is exact-string-match only: no case folding, no trimming.
/// Callers must pass labels using the conventions the table was
/// authored with (upper case, `/`-joined compounds, e.g.
/// `"LARCENY/THEFT"`). An unknown label is not an error and never maps
/// to a default band; aggregation downstream must treat `None` as
/// missing, not as zero.
#[must_use]
pub fn severity_for_category(category: &str) -> Option<Severity> {
    match category {
        "NON-CRIMINAL" | "SUSPICIOUS OCCURRENCE" | "MISSING PERSON" | "RUNAWAY"
        | "RECOVERED VEHICLE" | "SUSPICIOUS OCC" => Some(Severity::Minimal),

        "WARRANTS" | "OTHER OFFENSES" | "VANDALISM" | "TRESPASS" | "DISORDERLY CONDUCT"
        | "BAD CHECKS" => Some(Severity::Low),

        "LARCENY/THEFT" | "VEHICLE THEFT" | "FORGERY/COUNTERFEITING" | "DRUG/NARCOTIC"
        | "STOLEN PROPERTY" | "FRAUD" | "BRIBERY" | "EMBEZZLEMENT" => Some(Severity::Moderate),

        "ROBBERY" | "WEAPON LAWS" | "BURGLARY" | "EXTORTION" => Some(Severity::High),

        "KIDNAPPING" | "ARSON" => Some(Severity::Critical),

        _ => None,
    }
}

/// Every category label the severity table has an opinion on, grouped
/// by band, lowest first.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "NON-CRIMINAL",
    "SUSPICIOUS OCCURRENCE",
    "MISSING PERSON",
    "RUNAWAY",
    "RECOVERED VEHICLE",
    "SUSPICIOUS OCC",
    "WARRANTS",
    "OTHER OFFENSES",
    "VANDALISM",
    "TRESPASS",
    "DISORDERLY CONDUCT",
    "BAD CHECKS",
    "LARCENY/THEFT",
    "VEHICLE THEFT",
    "FORGERY/COUNTERFEITING",
    "DRUG/NARCOTIC",
    "STOLEN PROPERTY",
    "FRAUD",
    "BRIBERY",
    "EMBEZZLEMENT",
    "ROBBERY",
    "WEAPON LAWS",
    "BURGLARY",
    "EXTORTION",
    "KIDNAPPING",
    "ARSON",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_lookup() {
        assert_eq!(severity_for_category("ARSON"), Some(Severity::Critical));
        assert_eq!(severity_for_category("ROBBERY"), Some(Severity::High));
        assert_eq!(
            severity_for_category("LARCENY/THEFT"),
            Some(Severity::Moderate)
        );
        assert_eq!(severity_for_category("WARRANTS"), Some(Severity::Low));
        assert_eq!(
            severity_for_category("NON-CRIMINAL"),
            Some(Severity::Minimal)
        );
    }

    #[test]
    fn unknown_category_has_no_band() {
        assert_eq!(severity_for_category("NOT-A-REAL-CATEGORY"), None);
    }

    #[test]
    fn lookup_is_exact_match() {
        // No normalization: casing and surrounding whitespace matter.
        assert_eq!(severity_for_category("arson"), None);
        assert_eq!(severity_for_category(" ARSON"), None);
        assert_eq!(severity_for_category("LARCENY THEFT"), None);
    }

    #[test]
    fn every_known_category_has_a_band() {
        for category in KNOWN_CATEGORIES {
            let severity = severity_for_category(category);
            assert!(severity.is_some(), "{category} missing from policy table");
        }
    }

    #[test]
    fn severity_from_value_roundtrip() {
        for v in 1..=5u8 {
            let severity = Severity::from_value(v).unwrap();
            assert_eq!(severity.value(), v);
        }
        assert!(Severity::from_value(0).is_err());
        assert!(Severity::from_value(6).is_err());
    }
}
