#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Batch loading of CityX crime data.
//!
//! Two loaders share this crate: [`reports`] walks a list of PDF
//! police reports and assembles parsed records into a table, and
//! [`incidents`] normalizes the city's crime-incident CSV export.
//!
//! Both loaders are best-effort over imperfect inputs: individual
//! bad documents or rows are reported and skipped, never fatal to the
//! batch.

pub mod incidents;
pub mod reports;

/// Errors that can occur during batch loading.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Data normalization error.
    #[error("Normalization error: {message}")]
    Normalization {
        /// Description of what went wrong.
        message: String,
    },
}
