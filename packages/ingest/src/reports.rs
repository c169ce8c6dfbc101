//! Batch loader for PDF police reports.
//!
//! Walks an ordered list of report paths, extracts and parses each
//! document, and assembles the records into a table. Loading is
//! best-effort: paths that do not exist are skipped with a diagnostic,
//! and documents that cannot be read yield records with every field
//! empty. Output order matches input order among the paths that exist.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use cityx_crime_models::{classify, severity_for_category};
use cityx_report::{extract, grammar};
use regex::Regex;

use crate::IngestError;

/// Record key for the derived source identifier.
pub const FILE_KEY: &str = "file";

/// Record key for the category predicted from the description.
pub const PREDICTED_CATEGORY_KEY: &str = "predicted_category";

/// Record key for the severity band of the predicted category.
pub const PREDICTED_SEVERITY_KEY: &str = "predicted_severity";

/// Trailing digits immediately before the `.pdf` extension.
static FILE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.pdf$").expect("valid regex"));

/// Derives a record identifier from a report path.
///
/// The identifier is the trailing digits of the filename (the part
/// immediately before the `.pdf` extension, e.g.
/// `police_crime_report_7.pdf` → `"7"`). Filenames without trailing
/// digits fall back to the full filename.
#[must_use]
pub fn source_identifier(path: &Path) -> String {
    let file_name = path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    );

    let number = FILE_NUMBER_RE
        .captures(&file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned());

    number.unwrap_or(file_name)
}

/// Loads a batch of report documents into a table of parsed records.
///
/// Each existing path produces exactly one record: the parsed fields
/// from [`grammar::parse_report`] plus a [`FILE_KEY`] entry holding the
/// derived identifier. Paths that do not exist are reported and
/// skipped; they produce no record and do not abort the batch. Records
/// appear in input order.
#[must_use]
pub fn load_reports(paths: &[PathBuf]) -> Vec<serde_json::Value> {
    let mut records = Vec::new();

    for path in paths {
        if !path.exists() {
            log::warn!("File not found: {}", path.display());
            continue;
        }

        let text = extract::extract_text(path);
        let mut record = grammar::parse_report(&text);
        if let Some(map) = record.as_object_mut() {
            map.insert(
                FILE_KEY.to_owned(),
                serde_json::Value::String(source_identifier(path)),
            );
        }
        records.push(record);
    }

    log::info!(
        "Loaded {} report(s) from {} path(s)",
        records.len(),
        paths.len()
    );

    records
}

/// Enumerates the `*.pdf` files in a directory, in lexicographic
/// filename order, producing the ordered input list for
/// [`load_reports`].
///
/// # Errors
///
/// Returns [`IngestError::Io`] if the directory cannot be read.
pub fn report_paths_in_dir(dir: &Path) -> Result<Vec<PathBuf>, IngestError> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
        })
        .collect();
    paths.sort();

    log::debug!("Found {} report PDF(s) in {}", paths.len(), dir.display());

    Ok(paths)
}

/// Attaches a predicted category and severity to each report record,
/// derived from its `detailed_description` field.
///
/// Every record gets both keys so the table keeps a uniform shape:
/// an unclassifiable description produces an empty-string category, and
/// a category the severity table has no opinion on produces a JSON
/// `null` severity, never a default number, so numeric aggregation
/// treats it as missing.
pub fn classify_reports(records: &mut [serde_json::Value]) {
    for record in records.iter_mut() {
        let Some(map) = record.as_object_mut() else {
            continue;
        };

        let description = map
            .get("detailed_description")
            .and_then(serde_json::Value::as_str)
            .unwrap_or("");

        let category = classify::classify_description(description);
        let severity = category.and_then(severity_for_category);

        map.insert(
            PREDICTED_CATEGORY_KEY.to_owned(),
            serde_json::Value::String(category.unwrap_or_default().to_owned()),
        );
        map.insert(
            PREDICTED_SEVERITY_KEY.to_owned(),
            severity.map_or(serde_json::Value::Null, |s| {
                serde_json::Value::from(u64::from(s.value()))
            }),
        );
    }
}
