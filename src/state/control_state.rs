// src/state/control_state.rs
use crate::analysis::{LaunchTable, PayloadRange};
use crate::config::SiteSelection;

/// Current values of the two dashboard controls. Owned by the UI and copied
/// into each recomputation; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlState {
    /// `None` only while no valid site has been chosen yet.
    pub site: Option<SiteSelection>,
    pub payload_range: PayloadRange,
}

impl ControlState {
    /// Starts from the observed payload extremes, not the slider's display bounds.
    pub fn initial(table: &LaunchTable, site: Option<SiteSelection>) -> Self {
        Self {
            site,
            payload_range: PayloadRange::new(table.min_payload(), table.max_payload()),
        }
    }
}
