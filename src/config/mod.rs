// src/config/mod.rs
pub mod settings;
pub mod site;

// Re-export commonly used types
pub use settings::{DashboardSettings, load_settings};
pub use site::{LaunchSite, SiteSelection};
