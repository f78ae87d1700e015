// src/app.rs
use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, controls};

const HEADING_COLOR: egui::Color32 = egui::Color32::from_rgb(0x50, 0x3D, 0x36);

pub struct DashboardApp {
    state: AppState,
}

impl DashboardApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    fn show_menu(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close_menu();
                }
            });
        });
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Charts follow the controls as they were at the end of the last frame
        self.state.refresh();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_menu(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("SpaceX Launch Records Dashboard")
                            .size(40.0)
                            .color(HEADING_COLOR)
                    );
                });
                ui.add_space(12.0);

                controls::show_site_selector(ui, &mut self.state);
                ui.add_space(12.0);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    charts::show_success_chart(ui, &self.state.success_chart);
                });
                ui.add_space(12.0);

                controls::show_payload_range(ui, &mut self.state);
                ui.add_space(12.0);

                ui.group(|ui| {
                    ui.set_width(ui.available_width());
                    charts::show_correlation_chart(ui, &self.state.correlation_chart);
                });
            });
        });

        if self.state.is_stale() {
            ctx.request_repaint();
        }
    }
}
