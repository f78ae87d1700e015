// src/analysis/mod.rs
pub mod records;
pub mod aggregates;
pub mod views;

// Re-export commonly used types
pub use records::{LaunchRecord, LaunchTable, Outcome};
pub use aggregates::DashboardContext;
pub use views::{
    PayloadRange,
    PieChart,
    PieSlice,
    ScatterChart,
    ScatterSeries,
    payload_correlation_view,
    success_rate_view,
};
