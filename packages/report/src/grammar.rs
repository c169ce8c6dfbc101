//! Field extraction grammar for police report text.
//!
//! A fixed, ordered table of named patterns, each capturing exactly one
//! group, is applied to the full text of a report. Every rule searches
//! the text independently for its first match, so the order rules are
//! applied in never changes the result. Unmatched rules produce the
//! empty string, which keeps every record the same shape.
//!
//! Captured values are raw strings; dates and coordinates are not
//! validated or converted here.

use std::sync::LazyLock;

use regex::Regex;

/// A named extraction rule: one pattern with exactly one capture group.
#[derive(Debug)]
pub struct FieldRule {
    /// Record key the captured value is stored under.
    pub name: &'static str,
    /// Compiled pattern; capture group 1 is the field value.
    pub pattern: Regex,
}

/// Pattern for the `detailed_description` field: captures from the
/// `Detailed Description:` header up to the next line that begins a new
/// labeled section.
///
/// The `regex` crate has no lookahead, so the section boundary (`\n`
/// plus the first word character of the next line) is consumed by the
/// match instead of asserted. Only group 1 is kept, and every rule
/// searches the full text independently, so the consumed boundary
/// cannot shadow any other rule.
///
/// Known limitation: this is a line-boundary heuristic. A description
/// that spans multiple lines, blank lines, or indented continuations is
/// truncated at the first line that starts with a word character, and a
/// description with no following section does not match at all. Swap
/// this named rule for a real section parser if report layouts grow
/// multi-paragraph descriptions; the rest of the grammar is unaffected.
const DETAILED_DESCRIPTION_PATTERN: &str = r"Detailed Description:\s*([\s\S]+?)\n\s*\w";

/// The fixed rule table, compiled once at first use and never mutated.
static FIELD_RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    let rule = |name: &'static str, pattern: &str| FieldRule {
        name,
        pattern: Regex::new(pattern).expect("valid regex"),
    };

    vec![
        rule("report_number", r"Report Number:\s*([^\n]+)"),
        rule("date_time", r"Date & Time:\s*([^\n]+)"),
        rule("reporting_officer", r"Reporting Officer:\s*([^\n]+)"),
        rule("incident_location", r"Incident Location:\s*([^\n]+)"),
        rule("coordinates", r"Coordinates:\s*\(([^)]+)\)"),
        rule("detailed_description", DETAILED_DESCRIPTION_PATTERN),
        rule("police_district", r"Police District:\s*([^\n]+)"),
        rule("resolution", r"Resolution:\s*([^\n]+)"),
        rule("suspect_description", r"Suspect Description:\s*([^\n]+)"),
        rule("victim_information", r"Victim Information:\s*([^\n]+)"),
    ]
});

/// Returns the names of all field rules, in table order.
#[must_use]
pub fn field_names() -> Vec<&'static str> {
    FIELD_RULES.iter().map(|rule| rule.name).collect()
}

/// Parses report text into a record with one entry per field rule.
///
/// For each rule, the value is the first match's capture group with
/// surrounding whitespace trimmed, or the empty string when the rule
/// does not match. The key set of the returned object is identical for
/// every input: one key per rule, never more, never fewer.
#[must_use]
pub fn parse_report(text: &str) -> serde_json::Value {
    let mut map = serde_json::Map::new();

    for rule in FIELD_RULES.iter() {
        let value = rule
            .pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();
        map.insert(
            rule.name.to_owned(),
            serde_json::Value::String(value.to_owned()),
        );
    }

    serde_json::Value::Object(map)
}
