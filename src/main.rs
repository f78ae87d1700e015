// src/main.rs
use eframe::egui;
use anyhow::{Result, anyhow};

mod analysis;
mod app;
mod config;
mod error;
mod file;
mod logger;
mod state;
mod ui;

use analysis::DashboardContext;
use app::DashboardApp;
use config::{load_settings, DashboardSettings};
use config::settings::SETTINGS_FILE_NAME;
use file::{FileHandler, LaunchRecordsHandler};
use state::AppState;

fn load_context(settings: &DashboardSettings) -> Result<DashboardContext> {
    let table = LaunchRecordsHandler::new().load(&settings.data_path)?;
    info!(
        "Loaded {} launch records from {} ({} sites, payload {} to {} kg)",
        table.len(),
        settings.data_path.display(),
        table.sites().len(),
        table.min_payload(),
        table.max_payload()
    );
    Ok(DashboardContext::new(table))
}

fn main() -> Result<()> {
    let (settings, source) = load_settings().inspect_err(|e| error!("{:#}", e))?;
    match &source {
        Some(path) => info!("Using settings from {}", path.display()),
        None => info!("No {} found, using default settings", SETTINGS_FILE_NAME),
    }

    let context = load_context(&settings).inspect_err(|e| error!("{:#}", e))?;
    let state = AppState::new(context, settings);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(state.settings.window_size)
            .with_title("SpaceX Launch Records Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "SpaceX Launch Records Dashboard",
        options,
        Box::new(move |_cc| Box::new(DashboardApp::new(state))),
    ).map_err(|e| anyhow!("Failed to run application: {}", e))
}
