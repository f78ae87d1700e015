// src/error.rs
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DashboardError {
    #[error("invalid site selection: '{0}'")]
    InvalidSelection(String),
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("line {line}: outcome class must be 0 or 1, got {value}")]
    InvalidOutcome { line: usize, value: i64 },
    #[error("line {line}: payload mass must be a non-negative number, got {value}")]
    InvalidPayload { line: usize, value: f64 },
    #[error("launch records table is empty")]
    EmptyTable,
}
