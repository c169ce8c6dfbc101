#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for the CityX crime data tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use cityx_crime_models::severity_for_category;
use cityx_ingest::incidents::{self, IngestOptions};
use cityx_ingest::reports;

#[derive(Parser)]
#[command(name = "cityx", about = "CityX crime report extraction tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, parse, and classify PDF police reports
    Reports {
        /// Directory of report PDFs, scanned in filename order
        /// (ignored when explicit PATHS are given)
        #[arg(long, default_value = "police_reports")]
        dir: PathBuf,
        /// Explicit report paths, processed in the given order
        paths: Vec<PathBuf>,
        /// Print full records as JSON instead of the summary table
        #[arg(long)]
        json: bool,
    },
    /// Summarize a crime-incident CSV export
    Incidents {
        /// Path to the CSV file
        csv: PathBuf,
        /// Maximum number of records to ingest
        #[arg(long)]
        limit: Option<u64>,
    },
    /// Look up the severity band for a category label
    Severity {
        /// Category label, exactly as authored (e.g., "LARCENY/THEFT")
        category: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Reports { dir, paths, json } => {
            let paths = if paths.is_empty() {
                reports::report_paths_in_dir(&dir)?
            } else {
                paths
            };
            if paths.is_empty() {
                log::warn!("No report PDFs found in {}", dir.display());
            }

            let mut records = reports::load_reports(&paths);
            reports::classify_reports(&mut records);

            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!(
                    "{:<8} {:<14} {:<24} {:<8} DESCRIPTION",
                    "FILE", "REPORT #", "CATEGORY", "SEVERITY"
                );
                println!("{}", "-".repeat(100));
                for record in &records {
                    let get = |key: &str| {
                        record
                            .get(key)
                            .and_then(serde_json::Value::as_str)
                            .unwrap_or("")
                    };
                    let severity = record
                        .get(reports::PREDICTED_SEVERITY_KEY)
                        .and_then(serde_json::Value::as_u64)
                        .map_or_else(|| "unknown".to_owned(), |s| s.to_string());
                    println!(
                        "{:<8} {:<14} {:<24} {:<8} {}",
                        get(reports::FILE_KEY),
                        get("report_number"),
                        get(reports::PREDICTED_CATEGORY_KEY),
                        severity,
                        get("detailed_description"),
                    );
                }
            }
        }
        Commands::Incidents { csv, limit } => {
            let options = IngestOptions { max_records: limit };
            let normalized = incidents::load_incidents(&csv, &options)?;

            println!("{:<28} {:>8} SEVERITY", "CATEGORY", "COUNT");
            println!("{}", "-".repeat(50));
            for row in incidents::category_counts(&normalized) {
                let severity = row
                    .severity
                    .map_or_else(|| "unknown".to_owned(), |s| s.value().to_string());
                println!("{:<28} {:>8} {severity}", row.category, row.count);
            }
            println!("{} incident(s) total", normalized.len());
        }
        Commands::Severity { category } => match severity_for_category(&category) {
            Some(severity) => println!("{category} -> {} ({severity})", severity.value()),
            None => println!("{category} -> unknown"),
        },
    }

    Ok(())
}
