#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! PDF police-report text extraction and field parsing.
//!
//! The city publishes individual incident reports as PDF files with a
//! loosely consistent labeled-section layout. This crate extracts the
//! raw text of a report ([`extract`]) and applies a fixed grammar of
//! named patterns to pull out structured fields ([`grammar`]).
//!
//! Extraction is best-effort: an unreadable document is reported and
//! degrades to an empty record rather than failing the batch it
//! belongs to.

pub mod extract;
pub mod grammar;

/// Errors specific to report processing.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// PDF text extraction failed.
    #[error("PDF extraction error: {0}")]
    Extraction(String),

    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
