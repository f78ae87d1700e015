// src/analysis/records.rs
use std::collections::BTreeSet;
use crate::error::DashboardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Value of the `class` column.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failure",
            Outcome::Success => "Success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub outcome: Outcome,
    pub payload_mass_kg: f64,
    pub booster_version_category: String,
}

/// Immutable launch records loaded at startup. Holds at least one record.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchTable {
    pub fn new(records: Vec<LaunchRecord>) -> Result<Self, DashboardError> {
        if records.is_empty() {
            return Err(DashboardError::EmptyTable);
        }

        let mut min_payload = f64::INFINITY;
        let mut max_payload = f64::NEG_INFINITY;
        for record in &records {
            min_payload = min_payload.min(record.payload_mass_kg);
            max_payload = max_payload.max(record.payload_mass_kg);
        }

        Ok(Self {
            records,
            min_payload,
            max_payload,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// Distinct launch sites, sorted by name.
    pub fn sites(&self) -> BTreeSet<&str> {
        self.records.iter().map(|r| r.launch_site.as_str()).collect()
    }

    pub fn site_count(&self, site: &str) -> usize {
        self.records.iter().filter(|r| r.launch_site == site).count()
    }
}

#[cfg(test)]
pub(crate) fn record(site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
    LaunchRecord {
        launch_site: site.to_string(),
        outcome: Outcome::from_class(class).unwrap(),
        payload_mass_kg: payload,
        booster_version_category: booster.to_string(),
    }
}
