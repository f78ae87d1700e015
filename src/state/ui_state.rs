// src/state/ui_state.rs

/// Widget state that never reaches the chart functions.
#[derive(Debug, Default)]
pub struct UiState {
    pub site_search: String,
}
