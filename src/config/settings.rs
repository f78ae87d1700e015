// src/config/settings.rs
use serde::Deserialize;
use anyhow::{Result, Context, anyhow};
use std::path::{Path, PathBuf};
use std::fs;

pub const SETTINGS_FILE_NAME: &str = "dashboard.ron";
const SETTINGS_DIR_NAME: &str = "spacex-dash";

/// Startup settings read from `dashboard.ron`. Every field is optional in the
/// file; missing fields fall back to the defaults below.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashboardSettings {
    pub data_path: PathBuf,
    pub window_size: [f32; 2],
    pub initial_site: String,
    pub payload_bounds: [f64; 2],
    pub payload_step: f64,
    pub payload_marks: Vec<f64>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("spacex_launch_dash.csv"),
            window_size: [1100.0, 900.0],
            initial_site: "ALL".to_string(),
            payload_bounds: [0.0, 10000.0],
            payload_step: 1000.0,
            payload_marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0],
        }
    }
}

impl DashboardSettings {
    pub fn from_ron(content: &str) -> Result<Self> {
        let settings: DashboardSettings = ron::from_str(content)
            .context("Failed to parse dashboard settings")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        let [low, high] = self.payload_bounds;
        if !(low.is_finite() && high.is_finite()) || low < 0.0 || low >= high {
            return Err(anyhow!("Invalid payload bounds: [{}, {}]", low, high));
        }
        if !(self.payload_step.is_finite() && self.payload_step > 0.0) {
            return Err(anyhow!("Payload step must be positive, got {}", self.payload_step));
        }
        Ok(())
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SETTINGS_FILE_NAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME));
    }
    paths
}

pub fn load_settings_from(path: &Path) -> Result<DashboardSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;
    DashboardSettings::from_ron(&content)
        .with_context(|| format!("Invalid settings file: {}", path.display()))
}

/// Loads the first settings file found, or the defaults when there is none.
/// Also returns the path that was used.
pub fn load_settings() -> Result<(DashboardSettings, Option<PathBuf>)> {
    match candidate_paths().into_iter().find(|p| p.is_file()) {
        Some(path) => Ok((load_settings_from(&path)?, Some(path))),
        None => Ok((DashboardSettings::default(), None)),
    }
}
