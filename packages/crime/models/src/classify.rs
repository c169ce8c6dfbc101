//! Keyword classification of free-text incident descriptions.
//!
//! Maps the narrative text of a police report to one of the category
//! labels the severity table knows. Matching is case-insensitive and
//! keyword-based; groups are tested in a fixed precedence order so that
//! more specific phrases win over their substrings (e.g. `"stolen
//! vehicle"` classifies as vehicle theft, not generic theft).

/// Attempts to classify a free-text incident description into a
/// category label from the severity policy vocabulary.
///
/// Returns `None` when no keyword group matches; callers decide how an
/// unclassified description is represented downstream.
#[must_use]
pub fn classify_description(description: &str) -> Option<&'static str> {
    let lower = description.to_lowercase();

    // ── Most severe bands first ──────────────────────────────────────
    if contains_any(&lower, &["kidnap", "abduct"]) {
        return Some("KIDNAPPING");
    }
    if contains_any(&lower, &["arson", "set fire", "set ablaze", "firebomb"]) {
        return Some("ARSON");
    }

    if contains_any(&lower, &["robbery", "robbed", "at gunpoint", "holdup", "hold-up"]) {
        return Some("ROBBERY");
    }
    if contains_any(&lower, &["extortion", "blackmail"]) {
        return Some("EXTORTION");
    }
    if contains_any(
        &lower,
        &["burglary", "break-in", "broke into", "breaking and entering", "forced entry"],
    ) {
        return Some("BURGLARY");
    }
    if contains_any(
        &lower,
        &["weapon", "firearm", "gun", "pistol", "rifle", "knife"],
    ) {
        return Some("WEAPON LAWS");
    }

    // ── Property and financial offenses ──────────────────────────────
    if contains_any(&lower, &["recovered vehicle"]) {
        return Some("RECOVERED VEHICLE");
    }
    if contains_any(
        &lower,
        &["vehicle theft", "stolen vehicle", "stolen car", "auto theft", "carjack"],
    ) {
        return Some("VEHICLE THEFT");
    }
    if contains_any(&lower, &["stolen property", "possession of stolen"]) {
        return Some("STOLEN PROPERTY");
    }
    if contains_any(&lower, &["forgery", "forged", "counterfeit"]) {
        return Some("FORGERY/COUNTERFEITING");
    }
    if contains_any(&lower, &["bad check", "bounced check"]) {
        return Some("BAD CHECKS");
    }
    if contains_any(&lower, &["bribe"]) {
        return Some("BRIBERY");
    }
    if contains_any(&lower, &["embezzle"]) {
        return Some("EMBEZZLEMENT");
    }
    if contains_any(&lower, &["fraud", "scam", "swindle", "deceptive practice"]) {
        return Some("FRAUD");
    }
    if contains_any(
        &lower,
        &["theft", "larceny", "shoplift", "pickpocket", "purse", "stole", "stolen"],
    ) {
        return Some("LARCENY/THEFT");
    }
    if contains_any(
        &lower,
        &["drug", "narcotic", "controlled substance", "cocaine", "heroin", "methamphetamine"],
    ) {
        return Some("DRUG/NARCOTIC");
    }
    if contains_any(&lower, &["vandal", "graffiti", "smashed window", "defaced"]) {
        return Some("VANDALISM");
    }

    // ── Public order and non-criminal ────────────────────────────────
    if contains_any(&lower, &["trespass"]) {
        return Some("TRESPASS");
    }
    if contains_any(
        &lower,
        &["disorderly", "disturbance", "public intoxication", "disturbing the peace"],
    ) {
        return Some("DISORDERLY CONDUCT");
    }
    if contains_any(&lower, &["warrant"]) {
        return Some("WARRANTS");
    }
    if contains_any(&lower, &["runaway"]) {
        return Some("RUNAWAY");
    }
    if contains_any(&lower, &["missing person", "missing"]) {
        return Some("MISSING PERSON");
    }
    if contains_any(&lower, &["suspicious"]) {
        return Some("SUSPICIOUS OCC");
    }
    if contains_any(&lower, &["non-criminal", "found property", "welfare check"]) {
        return Some("NON-CRIMINAL");
    }

    None
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity_for_category;

    #[test]
    fn classifies_common_narratives() {
        assert_eq!(
            classify_description("Victim was robbed at gunpoint near the plaza"),
            Some("ROBBERY")
        );
        assert_eq!(
            classify_description("Suspect broke into the residence through a rear window"),
            Some("BURGLARY")
        );
        assert_eq!(
            classify_description("Stolen vehicle recovered two blocks away"),
            Some("VEHICLE THEFT")
        );
        assert_eq!(
            classify_description("Wallet stolen from an unattended bag"),
            Some("LARCENY/THEFT")
        );
        assert_eq!(
            classify_description("Graffiti sprayed across the storefront"),
            Some("VANDALISM")
        );
        assert_eq!(
            classify_description("Possession of a controlled substance"),
            Some("DRUG/NARCOTIC")
        );
    }

    #[test]
    fn specific_phrases_win_over_substrings() {
        // "stolen vehicle" must not fall through to LARCENY/THEFT.
        assert_eq!(
            classify_description("Report of a stolen vehicle on 5th Ave"),
            Some("VEHICLE THEFT")
        );
        // "recovered vehicle" must not classify as a theft at all.
        assert_eq!(
            classify_description("Recovered vehicle returned to owner"),
            Some("RECOVERED VEHICLE")
        );
    }

    #[test]
    fn unmatched_description_is_none() {
        assert_eq!(classify_description("Quiet evening, nothing to report"), None);
        assert_eq!(classify_description(""), None);
    }

    #[test]
    fn every_label_is_in_the_severity_table() {
        // The classifier must only produce labels the policy table can band.
        let samples = [
            "kidnapping", "arson", "robbery", "extortion", "burglary", "weapon",
            "recovered vehicle", "vehicle theft", "stolen property", "forgery",
            "bad check", "bribe", "embezzled funds", "fraud", "theft", "drug",
            "vandalism", "trespass", "disorderly", "warrant", "runaway",
            "missing person", "suspicious", "found property",
        ];
        for sample in samples {
            let Some(label) = classify_description(sample) else {
                panic!("sample {sample:?} did not classify");
            };
            assert!(
                severity_for_category(label).is_some(),
                "classifier produced {label:?} which the severity table cannot band"
            );
        }
    }
}
