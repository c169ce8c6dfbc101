//! Page-level text extraction from PDF report documents.
//!
//! Wraps [`pdf_extract`] to produce one string per document: the text
//! of each page in page order, each page terminated by a single
//! newline. Failure is handled at document granularity: if any page
//! of a document cannot be extracted, the whole document falls back to
//! the empty string.

use std::path::Path;

use crate::ReportError;

/// Extracts the full text of a PDF document, page by page.
///
/// Each page's text is terminated by a single newline, in page order.
///
/// # Errors
///
/// Returns [`ReportError::Extraction`] if the document cannot be
/// opened or parsed.
pub fn try_extract_text(path: &Path) -> Result<String, ReportError> {
    let pages = pdf_extract::extract_text_by_pages(path).map_err(|e| {
        ReportError::Extraction(format!(
            "failed to extract text from {}: {e}",
            path.display()
        ))
    })?;

    let mut text = String::new();
    for page in &pages {
        text.push_str(page);
        text.push('\n');
    }

    log::debug!(
        "Extracted {} characters from {} page(s) of {}",
        text.len(),
        pages.len(),
        path.display()
    );

    Ok(text)
}

/// Best-effort wrapper around [`try_extract_text`].
///
/// Unreadable or unparsable documents are reported with a diagnostic
/// and yield the empty string; the error never escapes this boundary.
/// Downstream parsing of an empty string produces a record with every
/// field empty, which keeps batch processing going.
#[must_use]
pub fn extract_text(path: &Path) -> String {
    match try_extract_text(path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Error reading file: {e}");
            String::new()
        }
    }
}
