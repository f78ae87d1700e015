// src/state/mod.rs
use crate::analysis::{
    DashboardContext,
    PieChart,
    ScatterChart,
    payload_correlation_view,
    success_rate_view,
};
use crate::config::{DashboardSettings, SiteSelection};
use crate::error::DashboardError;
use crate::{event, warn};

pub mod control_state;
pub mod ui_state;

pub use control_state::ControlState;
pub use ui_state::UiState;

// Core application state
#[derive(Debug)]
pub struct AppState {
    pub context: DashboardContext,
    pub settings: DashboardSettings,
    pub control: ControlState,
    pub ui: UiState,
    pub success_chart: Result<PieChart, DashboardError>,
    pub correlation_chart: Result<ScatterChart, DashboardError>,

    // Control values the current charts were built from
    rendered: ControlState,
}

impl AppState {
    pub fn new(context: DashboardContext, settings: DashboardSettings) -> Self {
        let site = match SiteSelection::from_code(&settings.initial_site) {
            Ok(site) => Some(site),
            Err(e) => {
                warn!("{}; waiting for a site to be picked", e);
                None
            }
        };
        let control = ControlState::initial(context.table(), site);

        let mut state = Self {
            context,
            settings,
            control,
            ui: UiState::default(),
            success_chart: Err(DashboardError::InvalidSelection(String::new())),
            correlation_chart: Err(DashboardError::InvalidSelection(String::new())),
            rendered: control,
        };
        state.recompute_success_rate();
        state.recompute_correlation();
        state
    }

    /// The dropdown value, or the rejected startup code when there is none.
    pub fn site_selection(&self) -> Result<SiteSelection, DashboardError> {
        self.control.site
            .ok_or_else(|| DashboardError::InvalidSelection(self.settings.initial_site.clone()))
    }

    fn recompute_success_rate(&mut self) {
        self.success_chart = self.site_selection()
            .map(|site| success_rate_view(&self.context, site));
    }

    fn recompute_correlation(&mut self) {
        let range = self.control.payload_range;
        self.correlation_chart = self.site_selection()
            .map(|site| payload_correlation_view(&self.context, site, range));
    }

    /// True when the controls moved since the charts were last built.
    pub fn is_stale(&self) -> bool {
        self.control != self.rendered
    }

    /// Rebuilds the charts whose inputs changed since the last call. The pie
    /// only depends on the site; the scatter on site and payload range.
    pub fn refresh(&mut self) {
        if !self.is_stale() {
            return;
        }

        if self.control.site != self.rendered.site {
            self.recompute_success_rate();
        }
        self.recompute_correlation();

        event!(
            "Controls changed to site={} range=[{}, {}]",
            self.control.site.map(|s| s.code()).unwrap_or("-"),
            self.control.payload_range.low,
            self.control.payload_range.high
        );

        self.rendered = self.control;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{LaunchTable, PayloadRange};
    use crate::analysis::records::record;
    use crate::config::LaunchSite;

    fn context() -> DashboardContext {
        DashboardContext::new(LaunchTable::new(vec![
            record("CCAFS LC-40", 300.0, 0, "v1.0"),
            record("CCAFS LC-40", 2500.0, 1, "FT"),
            record("KSC LC-39A", 5000.0, 1, "FT"),
            record("KSC LC-39A", 7000.0, 1, "B4"),
            record("VAFB SLC-4E", 9600.0, 0, "B5"),
        ]).unwrap())
    }

    #[test]
    fn test_initial_controls_use_observed_payload_bounds() {
        let state = AppState::new(context(), DashboardSettings::default());
        assert_eq!(state.control.site, Some(SiteSelection::All));
        assert_eq!(state.control.payload_range, PayloadRange::new(300.0, 9600.0));
        assert_ne!(state.control.payload_range.high, state.settings.payload_bounds[1]);

        let pie = state.success_chart.as_ref().unwrap();
        assert_eq!(pie.title, "All Sites Success Rate");
        // Extremes sit on the exclusive bounds
        assert_eq!(state.correlation_chart.as_ref().unwrap().point_count(), 3);
    }

    #[test]
    fn test_refresh_is_a_no_op_without_changes() {
        let mut state = AppState::new(context(), DashboardSettings::default());
        let pie_before = state.success_chart.clone();
        let scatter_before = state.correlation_chart.clone();

        assert!(!state.is_stale());
        state.refresh();
        assert_eq!(state.success_chart, pie_before);
        assert_eq!(state.correlation_chart, scatter_before);
    }

    #[test]
    fn test_range_change_only_rebuilds_scatter() {
        let mut state = AppState::new(context(), DashboardSettings::default());
        let pie_before = state.success_chart.clone();

        state.control.payload_range = PayloadRange::new(2000.0, 6000.0);
        assert!(state.is_stale());
        state.refresh();

        assert!(!state.is_stale());
        assert_eq!(state.success_chart, pie_before);
        assert_eq!(state.correlation_chart.as_ref().unwrap().point_count(), 2);
    }

    #[test]
    fn test_site_change_rebuilds_both() {
        let mut state = AppState::new(context(), DashboardSettings::default());
        state.control.site = Some(SiteSelection::Site(LaunchSite::Lc39a));
        state.refresh();
        assert!(!state.is_stale());

        let pie = state.success_chart.as_ref().unwrap();
        assert_eq!(pie.title, "KSC LC-39A Success Rate");
        assert_eq!(pie.value_of("Success"), Some(2));
        assert_eq!(pie.value_of("Failure"), Some(0));
        assert_eq!(
            state.correlation_chart.as_ref().unwrap().title,
            "Correlation between Payload Mass and Success for KSC LC-39A"
        );
    }

    #[test]
    fn test_invalid_startup_site_surfaces_in_both_panels() {
        let settings = DashboardSettings {
            initial_site: "CCSFS".to_string(),
            ..DashboardSettings::default()
        };
        let mut state = AppState::new(context(), settings);

        let expected = DashboardError::InvalidSelection("CCSFS".to_string());
        assert_eq!(state.success_chart, Err(expected.clone()));
        assert_eq!(state.correlation_chart, Err(expected));

        state.control.site = Some(SiteSelection::All);
        state.refresh();
        assert!(state.success_chart.is_ok());
        assert!(state.correlation_chart.is_ok());
    }

    #[test]
    fn test_range_outside_the_data_leaves_an_empty_scatter() {
        let mut state = AppState::new(context(), DashboardSettings::default());
        state.control.payload_range = PayloadRange::new(100.0, 200.0);
        state.refresh();

        let scatter = state.correlation_chart.as_ref().unwrap();
        assert_eq!(scatter.point_count(), 0);
        assert!(state.success_chart.is_ok());
    }
}
