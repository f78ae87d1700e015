// src/analysis/aggregates.rs
use std::collections::BTreeMap;
use crate::analysis::records::{LaunchTable, Outcome};

#[derive(Debug, Clone, PartialEq)]
pub struct SuccessAggregateRow {
    pub launch_site: String,
    pub outcome: Outcome,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRow {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

/// The loaded table plus the views derived from it. Built once at startup and
/// only read afterwards; both chart functions take it by reference.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    table: LaunchTable,
    success_aggregates: Vec<SuccessAggregateRow>,
    scatter_projection: Vec<ScatterRow>,
}

impl DashboardContext {
    pub fn new(table: LaunchTable) -> Self {
        let success_aggregates = aggregate_outcomes(&table);
        let scatter_projection = project_scatter(&table);
        Self {
            table,
            success_aggregates,
            scatter_projection,
        }
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn success_aggregates(&self) -> &[SuccessAggregateRow] {
        &self.success_aggregates
    }

    pub fn scatter_projection(&self) -> &[ScatterRow] {
        &self.scatter_projection
    }
}

/// Groups records by (site, outcome) and counts them. Only observed pairs get a
/// row; output is sorted by site, then failure before success.
pub fn aggregate_outcomes(table: &LaunchTable) -> Vec<SuccessAggregateRow> {
    let mut counts: BTreeMap<(&str, Outcome), usize> = BTreeMap::new();
    for record in table.records() {
        *counts.entry((record.launch_site.as_str(), record.outcome)).or_insert(0) += 1;
    }

    counts.into_iter()
        .map(|((site, outcome), count)| SuccessAggregateRow {
            launch_site: site.to_string(),
            outcome,
            count,
        })
        .collect()
}

pub fn project_scatter(table: &LaunchTable) -> Vec<ScatterRow> {
    table.records().iter()
        .map(|r| ScatterRow {
            launch_site: r.launch_site.clone(),
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect()
}
