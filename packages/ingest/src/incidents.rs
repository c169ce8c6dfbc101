//! Incident CSV ingestion.
//!
//! Loads the city's crime-incident CSV export and normalizes each row
//! into an [`Incident`]. Normalization parses the occurrence
//! timestamp, derives calendar fields from it, corrects the export's
//! swapped coordinate columns, drops rows without usable coordinates,
//! and deduplicates exact repeats. Bad rows are counted and reported,
//! never fatal.

use std::collections::HashSet;
use std::path::Path;

use chrono::{Datelike as _, NaiveDateTime, Timelike as _, Weekday};
use cityx_crime_models::{Severity, severity_for_category};
use serde::{Deserialize, Serialize};

use crate::IngestError;

/// Timestamp format used by the `Dates` column of the export.
const DATES_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A crime incident normalized from the CSV export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// When the incident occurred.
    pub occurred_at: NaiveDateTime,
    /// Calendar year of `occurred_at`.
    pub year: i32,
    /// Calendar month of `occurred_at` (1-12).
    pub month: u32,
    /// Day of month of `occurred_at` (1-31).
    pub day: u32,
    /// Hour of day of `occurred_at` (0-23).
    pub hour: u32,
    /// Weekday name of `occurred_at` (e.g., "Monday").
    pub day_of_week: String,
    /// Source category label (e.g., "LARCENY/THEFT").
    pub category: String,
    /// Short free-text description of the incident.
    pub description: String,
    /// Police district the incident was assigned to.
    pub district: String,
    /// How the incident was resolved.
    pub resolution: String,
    /// Block-level address.
    pub address: String,
    /// Longitude (WGS84).
    pub longitude: f64,
    /// Latitude (WGS84).
    pub latitude: f64,
}

/// Options for incident ingestion.
#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    /// Optional cap on the number of normalized incidents.
    pub max_records: Option<u64>,
}

/// Loads and normalizes a crime-incident CSV export.
///
/// The export's `Latitude (Y)` and `Longitude (X)` columns ship with
/// swapped values; ingestion reads them swapped back so the normalized
/// coordinates are geographically correct. Rows with an unparseable
/// timestamp or without usable coordinates are skipped, and exact
/// duplicates are dropped (first occurrence wins). Output preserves
/// file order otherwise.
///
/// # Errors
///
/// Returns [`IngestError`] if the file cannot be opened, the CSV is
/// structurally unreadable, or a required column is missing from the
/// header row.
pub fn load_incidents(path: &Path, options: &IngestOptions) -> Result<Vec<Incident>, IngestError> {
    let file = std::fs::File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();
    if headers.is_empty() {
        return Err(IngestError::Normalization {
            message: "CSV file contains no header row".to_owned(),
        });
    }

    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let required = |name: &str| {
        column(name).ok_or_else(|| IngestError::Normalization {
            message: format!("missing required column '{name}'"),
        })
    };

    let dates_idx = required("dates")?;
    let category_idx = required("category")?;
    let descript_idx = required("descript")?;
    // Swapped in the export: the "Latitude (Y)" column holds longitude
    // values and "Longitude (X)" holds latitudes.
    let swapped_lng_idx = required("latitude (y)")?;
    let swapped_lat_idx = required("longitude (x)")?;

    let district_idx = column("pddistrict");
    let resolution_idx = column("resolution");
    let address_idx = column("address");

    let mut incidents: Vec<Incident> = Vec::new();
    let mut seen = HashSet::new();
    let mut bad_timestamps: u64 = 0;
    let mut bad_coordinates: u64 = 0;
    let mut duplicates: u64 = 0;

    for result in reader.records() {
        let row = result?;
        let field = |idx: usize| row.get(idx).unwrap_or("").trim();

        let Ok(occurred_at) = NaiveDateTime::parse_from_str(field(dates_idx), DATES_FORMAT) else {
            bad_timestamps += 1;
            continue;
        };

        let Some((latitude, longitude)) =
            parse_lat_lng(field(swapped_lat_idx), field(swapped_lng_idx))
        else {
            bad_coordinates += 1;
            continue;
        };

        let incident = Incident {
            occurred_at,
            year: occurred_at.year(),
            month: occurred_at.month(),
            day: occurred_at.day(),
            hour: occurred_at.hour(),
            day_of_week: day_name(occurred_at.weekday()).to_owned(),
            category: field(category_idx).to_owned(),
            description: field(descript_idx).to_owned(),
            district: district_idx.map_or_else(String::new, |idx| field(idx).to_owned()),
            resolution: resolution_idx.map_or_else(String::new, |idx| field(idx).to_owned()),
            address: address_idx.map_or_else(String::new, |idx| field(idx).to_owned()),
            longitude,
            latitude,
        };

        let key = (
            incident.occurred_at,
            incident.category.clone(),
            incident.description.clone(),
            incident.address.clone(),
            incident.longitude.to_bits(),
            incident.latitude.to_bits(),
        );
        if !seen.insert(key) {
            duplicates += 1;
            continue;
        }

        incidents.push(incident);

        if let Some(max) = options.max_records
            && incidents.len() as u64 >= max
        {
            log::info!("Reached max_records limit ({max}), stopping CSV parse");
            break;
        }
    }

    if bad_timestamps + bad_coordinates + duplicates > 0 {
        log::warn!(
            "Skipped rows while ingesting {}: {bad_timestamps} bad timestamp(s), \
             {bad_coordinates} bad coordinate(s), {duplicates} duplicate(s)",
            path.display()
        );
    }
    log::info!(
        "Normalized {} incident(s) from {}",
        incidents.len(),
        path.display()
    );

    Ok(incidents)
}

/// Parses lat/lng from string fields. Returns `None` if either is
/// missing, unparseable, or zero.
fn parse_lat_lng(lat: &str, lng: &str) -> Option<(f64, f64)> {
    let latitude = lat.parse::<f64>().ok()?;
    let longitude = lng.parse::<f64>().ok()?;
    if latitude == 0.0 || longitude == 0.0 {
        return None;
    }
    Some((latitude, longitude))
}

/// Full weekday name, matching the labels the dashboard's dataset uses.
const fn day_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Incident count for one category label, paired with the severity
/// table's opinion on that label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Source category label.
    pub category: String,
    /// Number of incidents with this label.
    pub count: u64,
    /// Severity band, or `None` when the policy table has no opinion.
    pub severity: Option<Severity>,
}

/// Aggregates incident counts per category label, most frequent first
/// (ties broken by label).
#[must_use]
pub fn category_counts(incidents: &[Incident]) -> Vec<CategoryCount> {
    let mut counts: std::collections::BTreeMap<&str, u64> = std::collections::BTreeMap::new();
    for incident in incidents {
        *counts.entry(incident.category.as_str()).or_default() += 1;
    }

    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_owned(),
            count,
            severity: severity_for_category(category),
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.category.cmp(&b.category)));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write as _;

    const HEADER: &str =
        "Dates,Category,Descript,DayOfWeek,PdDistrict,Resolution,Address,Longitude (X),Latitude (Y)\n";

    fn write_csv(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(HEADER.as_bytes()).unwrap();
        for row in rows {
            file.write_all(row.as_bytes()).unwrap();
            file.write_all(b"\n").unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn normalizes_a_row_and_unswaps_coordinates() {
        let file = write_csv(&[
            "2015-05-13 23:53:00,LARCENY/THEFT,GRAND THEFT FROM LOCKED AUTO,Wednesday,NORTHERN,NONE,LAGUNA ST / OAK ST,37.7745,-122.4258",
        ]);

        let incidents = load_incidents(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(incidents.len(), 1);
        let incident = &incidents[0];
        assert_eq!(incident.category, "LARCENY/THEFT");
        assert_eq!(incident.description, "GRAND THEFT FROM LOCKED AUTO");
        assert_eq!(incident.district, "NORTHERN");
        assert_eq!(incident.address, "LAGUNA ST / OAK ST");
        // The "Longitude (X)" column held the latitude and vice versa.
        assert!((incident.latitude - 37.7745).abs() < f64::EPSILON);
        assert!((incident.longitude - -122.4258).abs() < f64::EPSILON);
        assert_eq!(incident.year, 2015);
        assert_eq!(incident.month, 5);
        assert_eq!(incident.day, 13);
        assert_eq!(incident.hour, 23);
        assert_eq!(incident.day_of_week, "Wednesday");
    }

    #[test]
    fn skips_bad_timestamps_and_coordinates() {
        let file = write_csv(&[
            "not-a-date,ARSON,FIRE SET,Friday,PARK,NONE,1 MAIN ST,37.77,-122.42",
            "2015-05-13 10:00:00,ARSON,FIRE SET,Wednesday,PARK,NONE,1 MAIN ST,,",
            "2015-05-13 11:00:00,ARSON,FIRE SET,Wednesday,PARK,NONE,1 MAIN ST,0.0,0.0",
            "2015-05-13 12:00:00,ARSON,FIRE SET,Wednesday,PARK,NONE,1 MAIN ST,37.77,-122.42",
        ]);

        let incidents = load_incidents(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].hour, 12);
    }

    #[test]
    fn drops_exact_duplicates_keeping_first() {
        let row =
            "2015-05-13 23:53:00,VANDALISM,MALICIOUS MISCHIEF,Wednesday,PARK,NONE,2 OAK ST,37.77,-122.42";
        let other =
            "2015-05-14 01:00:00,VANDALISM,MALICIOUS MISCHIEF,Thursday,PARK,NONE,2 OAK ST,37.77,-122.42";
        let file = write_csv(&[row, row, other]);

        let incidents = load_incidents(file.path(), &IngestOptions::default()).unwrap();

        assert_eq!(incidents.len(), 2);
        assert_eq!(incidents[0].day, 13);
        assert_eq!(incidents[1].day, 14);
    }

    #[test]
    fn honors_max_records() {
        let file = write_csv(&[
            "2015-05-13 01:00:00,ARSON,FIRE SET,Wednesday,PARK,NONE,1 MAIN ST,37.77,-122.42",
            "2015-05-13 02:00:00,ARSON,FIRE SET,Wednesday,PARK,NONE,1 MAIN ST,37.78,-122.43",
            "2015-05-13 03:00:00,ARSON,FIRE SET,Wednesday,PARK,NONE,1 MAIN ST,37.79,-122.44",
        ]);

        let options = IngestOptions {
            max_records: Some(2),
        };
        let incidents = load_incidents(file.path(), &options).unwrap();

        assert_eq!(incidents.len(), 2);
    }

    #[test]
    fn missing_required_column_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"Dates,Category\n").unwrap();
        file.flush().unwrap();

        let result = load_incidents(file.path(), &IngestOptions::default());
        assert!(matches!(
            result,
            Err(IngestError::Normalization { .. })
        ));
    }

    #[test]
    fn counts_group_by_category_with_severity() {
        let file = write_csv(&[
            "2015-05-13 01:00:00,ARSON,FIRE SET,Wednesday,PARK,NONE,1 MAIN ST,37.77,-122.42",
            "2015-05-13 02:00:00,LARCENY/THEFT,PETTY THEFT,Wednesday,PARK,NONE,2 OAK ST,37.78,-122.43",
            "2015-05-13 03:00:00,LARCENY/THEFT,GRAND THEFT,Wednesday,PARK,NONE,3 OAK ST,37.79,-122.44",
            "2015-05-13 04:00:00,TREA,UNUSUAL,Wednesday,PARK,NONE,4 OAK ST,37.80,-122.45",
        ]);

        let incidents = load_incidents(file.path(), &IngestOptions::default()).unwrap();
        let counts = category_counts(&incidents);

        assert_eq!(counts[0].category, "LARCENY/THEFT");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[0].severity, Some(Severity::Moderate));

        assert_eq!(counts[1].category, "ARSON");
        assert_eq!(counts[1].severity, Some(Severity::Critical));

        // Labels outside the policy table carry no severity.
        assert_eq!(counts[2].category, "TREA");
        assert_eq!(counts[2].severity, None);
    }
}
