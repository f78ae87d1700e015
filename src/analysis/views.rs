// src/analysis/views.rs
use crate::analysis::aggregates::{DashboardContext, ScatterRow};
use crate::analysis::records::Outcome;
use crate::config::SiteSelection;

pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
pub const OUTCOME_AXIS_LABEL: &str = "class";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Clamps both ends into `[0, max_payload]`. An inverted range stays
    /// inverted and selects nothing.
    pub fn normalized(self, max_payload: f64) -> Self {
        let max_payload = max_payload.max(0.0);
        Self {
            low: self.low.clamp(0.0, max_payload),
            high: self.high.clamp(0.0, max_payload),
        }
    }

    /// Both ends are excluded.
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        self.low < payload_mass_kg && payload_mass_kg < self.high
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn value_of(&self, label: &str) -> Option<usize> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub category: String,
    /// `[payload mass, class]` pairs
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

pub fn success_rate_title(site: SiteSelection) -> String {
    format!("{} Success Rate", site.label())
}

pub fn correlation_title(site: SiteSelection) -> String {
    format!("Correlation between Payload Mass and Success for {}", site.label())
}

/// Pie chart for the site dropdown. For every site: successes per launch
/// site, zero-success sites included. For one site: success and failure
/// counts, both always present.
pub fn success_rate_view(context: &DashboardContext, site: SiteSelection) -> PieChart {
    let aggregates = context.success_aggregates();

    let slices = match site {
        SiteSelection::All => context.table().sites().into_iter()
            .map(|name| PieSlice {
                label: name.to_string(),
                value: aggregates.iter()
                    .filter(|row| row.launch_site == name && row.outcome == Outcome::Success)
                    .map(|row| row.count)
                    .sum(),
            })
            .collect(),
        SiteSelection::Site(launch_site) => [Outcome::Success, Outcome::Failure].into_iter()
            .map(|outcome| PieSlice {
                label: outcome.label().to_string(),
                value: aggregates.iter()
                    .filter(|row| row.launch_site == launch_site.name() && row.outcome == outcome)
                    .map(|row| row.count)
                    .sum(),
            })
            .collect(),
    };

    PieChart {
        title: success_rate_title(site),
        slices,
    }
}

/// Scatter rows for `site` with payload strictly inside `range`.
pub fn selected_rows<'a>(
    context: &'a DashboardContext,
    site: SiteSelection,
    range: PayloadRange,
) -> impl Iterator<Item = &'a ScatterRow> + 'a {
    let range = range.normalized(context.table().max_payload());
    context.scatter_projection().iter()
        .filter(move |row| site.matches(&row.launch_site) && range.contains(row.payload_mass_kg))
}

pub fn payload_correlation_view(
    context: &DashboardContext,
    site: SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    // Series keep the order in which their booster category first appears
    let mut series: Vec<ScatterSeries> = Vec::new();
    for row in selected_rows(context, site, range) {
        let point = [row.payload_mass_kg, f64::from(row.outcome.class())];
        match series.iter_mut().find(|s| s.category == row.booster_version_category) {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                category: row.booster_version_category.clone(),
                points: vec![point],
            }),
        }
    }

    ScatterChart {
        title: correlation_title(site),
        x_label: PAYLOAD_AXIS_LABEL.to_string(),
        y_label: OUTCOME_AXIS_LABEL.to_string(),
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::records::{record, LaunchTable};
    use crate::config::LaunchSite;

    const LC40: &str = "CCAFS LC-40";
    const LC39A: &str = "KSC LC-39A";

    // LC-40 plays site A (3 successes, 1 failure), LC-39A site B (2 failures)
    fn scenario_context() -> DashboardContext {
        DashboardContext::new(LaunchTable::new(vec![
            record(LC40, 500.0, 1, "v1.0"),
            record(LC40, 501.0, 1, "v1.1"),
            record(LC40, 2000.0, 0, "v1.1"),
            record(LC40, 1500.0, 1, "FT"),
            record(LC39A, 1999.0, 0, "FT"),
            record(LC39A, 9600.0, 0, "B4"),
        ]).unwrap())
    }

    #[test]
    fn test_all_sites_counts_successes_only() {
        let chart = success_rate_view(&scenario_context(), SiteSelection::All);
        assert_eq!(chart.title, "All Sites Success Rate");
        assert_eq!(chart.slices, vec![
            PieSlice { label: LC40.into(), value: 3 },
            PieSlice { label: LC39A.into(), value: 0 },
        ]);
    }

    #[test]
    fn test_single_site_has_success_and_failure() {
        let context = scenario_context();

        let chart = success_rate_view(&context, SiteSelection::Site(LaunchSite::Lc40));
        assert_eq!(chart.title, "CCAFS LC-40 Success Rate");
        assert_eq!(chart.value_of("Success"), Some(3));
        assert_eq!(chart.value_of("Failure"), Some(1));

        let chart = success_rate_view(&context, SiteSelection::Site(LaunchSite::Lc39a));
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.value_of("Success"), Some(0));
        assert_eq!(chart.total(), context.table().site_count(LC39A));
    }

    #[test]
    fn test_site_without_records_yields_zero_slices() {
        let chart = success_rate_view(&scenario_context(), SiteSelection::Site(LaunchSite::Slc4e));
        assert_eq!(chart.slices.len(), 2);
        assert_eq!(chart.total(), 0);
    }

    #[test]
    fn test_payload_bounds_are_exclusive() {
        let context = scenario_context();
        let chart = payload_correlation_view(
            &context,
            SiteSelection::All,
            PayloadRange::new(500.0, 2000.0),
        );

        let payloads: Vec<f64> = chart.series.iter()
            .flat_map(|s| s.points.iter().map(|p| p[0]))
            .collect();
        assert!(payloads.contains(&501.0));
        assert!(payloads.contains(&1999.0));
        assert!(!payloads.contains(&500.0));
        assert!(!payloads.contains(&2000.0));
        assert_eq!(chart.point_count(), 3);
    }

    #[test]
    fn test_correlation_filters_by_site_and_groups_by_booster() {
        let context = scenario_context();
        let site = SiteSelection::Site(LaunchSite::Lc40);
        let range = PayloadRange::new(0.0, 9600.0);
        let chart = payload_correlation_view(&context, site, range);

        assert_eq!(chart.title, "Correlation between Payload Mass and Success for CCAFS LC-40");
        assert_eq!(chart.x_label, "Payload Mass (kg)");
        assert_eq!(chart.y_label, "class");
        let categories: Vec<&str> = chart.series.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(categories, vec!["v1.0", "v1.1", "FT"]);
        assert_eq!(chart.series[1].points, vec![[501.0, 1.0], [2000.0, 0.0]]);

        let expected = context.scatter_projection().iter()
            .filter(|r| r.launch_site == LC40 && r.payload_mass_kg > 0.0 && r.payload_mass_kg < 9600.0)
            .count();
        assert_eq!(chart.point_count(), expected);
    }

    #[test]
    fn test_all_sites_title() {
        let chart = payload_correlation_view(&scenario_context(), SiteSelection::All, PayloadRange::new(0.0, 1.0));
        assert_eq!(chart.title, "Correlation between Payload Mass and Success for All Sites");
        assert!(chart.series.is_empty());
    }

    #[test]
    fn test_range_is_clamped_to_observed_payloads() {
        assert_eq!(PayloadRange::new(-50.0, 10000.0).normalized(9600.0), PayloadRange::new(0.0, 9600.0));
        assert_eq!(PayloadRange::new(3000.0, 1000.0).normalized(9600.0), PayloadRange::new(3000.0, 1000.0));
        assert_eq!(PayloadRange::new(12000.0, 11000.0).normalized(9600.0), PayloadRange::new(9600.0, 9600.0));
    }

    #[test]
    fn test_inverted_range_selects_nothing() {
        let context = scenario_context();
        let chart = payload_correlation_view(&context, SiteSelection::All, PayloadRange::new(3000.0, 1000.0));
        assert_eq!(chart.point_count(), 0);
        assert!(chart.series.is_empty());

        let chart = payload_correlation_view(&context, SiteSelection::All, PayloadRange::new(1600.0, 400.0));
        assert_eq!(chart.point_count(), 0);
        assert_eq!(selected_rows(&context, SiteSelection::All, PayloadRange::new(400.0, 1600.0)).count(), 3);
    }
}
