// src/file/launch_records.rs
use super::FileHandler;
use crate::analysis::{LaunchRecord, LaunchTable, Outcome};
use crate::error::DashboardError;
use anyhow::{Result, Context};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_COLUMN: &str = "Payload Mass (kg)";
pub const CLASS_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_COLUMN,
    CLASS_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

#[derive(Debug, Deserialize)]
struct RawLaunchRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "class")]
    class: i64,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

impl RawLaunchRow {
    fn into_record(self, line: usize) -> Result<LaunchRecord, DashboardError> {
        let outcome = Outcome::from_class(self.class)
            .ok_or(DashboardError::InvalidOutcome { line, value: self.class })?;
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DashboardError::InvalidPayload { line, value: self.payload_mass_kg });
        }

        Ok(LaunchRecord {
            launch_site: self.launch_site,
            outcome,
            payload_mass_kg: self.payload_mass_kg,
            booster_version_category: self.booster_version_category,
        })
    }
}

/// Reads launch records from CSV with the column names of the published
/// SpaceX launch dataset. Columns other than the ones above are ignored.
#[derive(Debug)]
pub struct LaunchRecordsHandler;

impl LaunchRecordsHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn read_table<R: Read>(&self, input: R) -> Result<LaunchTable> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(input);

        let headers = reader.headers()
            .context("Failed to read CSV header")?
            .clone();
        let missing: Vec<String> = REQUIRED_COLUMNS.iter()
            .filter(|column| !headers.iter().any(|h| h == **column))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(DashboardError::MissingColumns(missing).into());
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<RawLaunchRow>().enumerate() {
            // Header is line 1
            let line = index + 2;
            let row = row.with_context(|| format!("Malformed launch record on line {}", line))?;
            records.push(row.into_record(line)?);
        }

        Ok(LaunchTable::new(records)?)
    }
}

impl FileHandler<LaunchTable> for LaunchRecordsHandler {
    fn load(&self, path: &Path) -> Result<LaunchTable> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open launch data file: {}", path.display()))?;
        self.read_table(file)
            .with_context(|| format!("Failed to load launch records from {}", path.display()))
    }
}
