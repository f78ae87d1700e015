// src/config/site.rs
use crate::error::DashboardError;

pub const ALL_SITES_CODE: &str = "ALL";
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Launch sites the selector offers. Each maps a short dropdown code to the
/// canonical name used in the `Launch Site` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaunchSite {
    Lc40,
    Slc40,
    Lc39a,
    Slc4e,
}

// (site, code, canonical name)
const SITE_TABLE: [(LaunchSite, &str, &str); 4] = [
    (LaunchSite::Lc40, "LC40", "CCAFS LC-40"),
    (LaunchSite::Slc40, "SLC40", "CCAFS SLC-40"),
    (LaunchSite::Lc39a, "LC39A", "KSC LC-39A"),
    (LaunchSite::Slc4e, "SLC4E", "VAFB SLC-4E"),
];

impl LaunchSite {
    pub fn all() -> impl Iterator<Item = LaunchSite> {
        SITE_TABLE.iter().map(|(site, _, _)| *site)
    }

    fn entry(self) -> &'static (LaunchSite, &'static str, &'static str) {
        // SITE_TABLE rows are in variant order
        &SITE_TABLE[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.entry().1
    }

    pub fn name(self) -> &'static str {
        self.entry().2
    }

    pub fn from_code(code: &str) -> Option<Self> {
        SITE_TABLE.iter()
            .find(|(_, c, _)| *c == code)
            .map(|(site, _, _)| *site)
    }
}

/// Value of the site dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    All,
    Site(LaunchSite),
}

impl SiteSelection {
    /// Every option in dropdown order.
    pub fn options() -> impl Iterator<Item = SiteSelection> {
        std::iter::once(SiteSelection::All).chain(LaunchSite::all().map(SiteSelection::Site))
    }

    pub fn from_code(code: &str) -> Result<Self, DashboardError> {
        if code == ALL_SITES_CODE {
            return Ok(SiteSelection::All);
        }
        LaunchSite::from_code(code)
            .map(SiteSelection::Site)
            .ok_or_else(|| DashboardError::InvalidSelection(code.to_string()))
    }

    pub fn code(self) -> &'static str {
        match self {
            SiteSelection::All => ALL_SITES_CODE,
            SiteSelection::Site(site) => site.code(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SiteSelection::All => ALL_SITES_LABEL,
            SiteSelection::Site(site) => site.name(),
        }
    }

    pub fn matches(self, launch_site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => site.name() == launch_site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_map_to_canonical_names() {
        assert_eq!(SiteSelection::from_code("LC40"), Ok(SiteSelection::Site(LaunchSite::Lc40)));
        assert_eq!(SiteSelection::from_code("SLC4E").map(|s| s.label()), Ok("VAFB SLC-4E"));
        assert_eq!(SiteSelection::from_code("LC39A").map(|s| s.label()), Ok("KSC LC-39A"));
        assert_eq!(SiteSelection::from_code("ALL"), Ok(SiteSelection::All));
    }

    #[test]
    fn test_codes_match_exactly() {
        for code in ["lc39a", " LC40 ", "all", "All", "SLC4E\n"] {
            assert_eq!(
                SiteSelection::from_code(code),
                Err(DashboardError::InvalidSelection(code.to_string()))
            );
        }
        assert_eq!(LaunchSite::from_code("slc40"), None);
    }

    #[test]
    fn test_unknown_code_is_invalid_selection() {
        assert_eq!(
            SiteSelection::from_code("CCSFS"),
            Err(DashboardError::InvalidSelection("CCSFS".to_string()))
        );
        assert!(SiteSelection::from_code("").is_err());
    }

    #[test]
    fn test_table_rows_follow_variant_order() {
        for (index, (site, _, _)) in SITE_TABLE.iter().enumerate() {
            assert_eq!(*site as usize, index);
        }
    }

    #[test]
    fn test_options_start_with_all_and_round_trip_codes() {
        let options: Vec<_> = SiteSelection::options().collect();
        assert_eq!(options.first(), Some(&SiteSelection::All));
        assert_eq!(options.len(), 1 + LaunchSite::all().count());
        for option in options {
            assert_eq!(SiteSelection::from_code(option.code()), Ok(option));
        }
    }

    #[test]
    fn test_matches_only_the_selected_site() {
        let site = SiteSelection::Site(LaunchSite::Slc40);
        assert!(site.matches("CCAFS SLC-40"));
        assert!(!site.matches("CCAFS LC-40"));
        assert!(SiteSelection::All.matches("anything"));
    }
}
