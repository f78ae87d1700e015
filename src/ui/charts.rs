// src/ui/charts.rs
use eframe::egui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

use crate::analysis::{PieChart, ScatterChart};
use crate::error::DashboardError;

const PIE_SIZE: f32 = 300.0;
const SCATTER_HEIGHT: f32 = 340.0;

// Plotly's default qualitative palette
const PALETTE: [egui::Color32; 10] = [
    egui::Color32::from_rgb(0x63, 0x6E, 0xFA),
    egui::Color32::from_rgb(0xEF, 0x55, 0x3B),
    egui::Color32::from_rgb(0x00, 0xCC, 0x96),
    egui::Color32::from_rgb(0xAB, 0x63, 0xFA),
    egui::Color32::from_rgb(0xFF, 0xA1, 0x5A),
    egui::Color32::from_rgb(0x19, 0xD3, 0xF3),
    egui::Color32::from_rgb(0xFF, 0x66, 0x92),
    egui::Color32::from_rgb(0xB6, 0xE8, 0x80),
    egui::Color32::from_rgb(0xFF, 0x97, 0xFF),
    egui::Color32::from_rgb(0xFE, 0xCB, 0x52),
];

pub fn series_color(index: usize) -> egui::Color32 {
    PALETTE[index % PALETTE.len()]
}

/// Start and end angle of each slice, clockwise from twelve o'clock.
/// Zero-valued slices get an empty span.
pub fn pie_wedges(values: &[usize]) -> Vec<(f32, f32)> {
    let total: usize = values.iter().sum();
    let mut start = -FRAC_PI_2;
    values.iter()
        .map(|&value| {
            let span = if total == 0 { 0.0 } else { TAU * value as f32 / total as f32 };
            let wedge = (start, start + span);
            start += span;
            wedge
        })
        .collect()
}

fn draw_error(ui: &mut egui::Ui, error: &DashboardError) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.colored_label(egui::Color32::RED, format!("⚠ {}", error));
        ui.label("Pick a launch site to show this chart.");
    });
}

fn paint_wedge(painter: &egui::Painter, center: egui::Pos2, radius: f32, (start, end): (f32, f32), fill: egui::Color32) {
    // Each polygon covers at most a quarter turn so it stays convex
    let pieces = ((end - start) / FRAC_PI_4).ceil().max(1.0) as usize;
    let step = (end - start) / pieces as f32;
    for piece in 0..pieces {
        let a0 = start + step * piece as f32;
        let mut points = vec![center];
        for i in 0..=8 {
            let angle = a0 + step * i as f32 / 8.0;
            points.push(center + radius * egui::vec2(angle.cos(), angle.sin()));
        }
        painter.add(egui::Shape::convex_polygon(points, fill, egui::Stroke::NONE));
    }
    for angle in [start, end] {
        painter.line_segment(
            [center, center + radius * egui::vec2(angle.cos(), angle.sin())],
            egui::Stroke::new(1.5, egui::Color32::WHITE),
        );
    }
}

pub fn show_success_chart(ui: &mut egui::Ui, chart: &Result<PieChart, DashboardError>) {
    let chart = match chart {
        Ok(chart) => chart,
        Err(e) => return draw_error(ui, e),
    };

    ui.heading(&chart.title);
    ui.add_space(4.0);

    let total = chart.total();
    if total == 0 {
        ui.label("No launches recorded for this selection.");
        return;
    }

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(PIE_SIZE, PIE_SIZE), egui::Sense::hover());
        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            let center = rect.center();
            let radius = PIE_SIZE * 0.45;
            let values: Vec<usize> = chart.slices.iter().map(|s| s.value).collect();

            for (index, wedge) in pie_wedges(&values).into_iter().enumerate() {
                if values[index] == 0 {
                    continue;
                }
                paint_wedge(&painter, center, radius, wedge, series_color(index));

                let mid = (wedge.0 + wedge.1) / 2.0;
                let share = 100.0 * values[index] as f32 / total as f32;
                painter.text(
                    center + radius * 0.65 * egui::vec2(mid.cos(), mid.sin()),
                    egui::Align2::CENTER_CENTER,
                    format!("{:.1}%", share),
                    egui::FontId::proportional(13.0),
                    egui::Color32::WHITE,
                );
            }
        }

        ui.add_space(16.0);

        // Legend
        ui.vertical(|ui| {
            for (index, slice) in chart.slices.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (swatch, _) = ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, series_color(index));
                    ui.label(format!("{} ({})", slice.label, slice.value));
                });
            }
        });
    });
}

pub fn show_correlation_chart(ui: &mut egui::Ui, chart: &Result<ScatterChart, DashboardError>) {
    let chart = match chart {
        Ok(chart) => chart,
        Err(e) => return draw_error(ui, e),
    };

    ui.heading(&chart.title);
    ui.add_space(4.0);
    if chart.series.is_empty() {
        ui.label("No launches in the selected payload range.");
    }

    Plot::new("success_payload_scatter")
        .height(SCATTER_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (index, series) in chart.series.iter().enumerate() {
                plot_ui.points(
                    Points::new(PlotPoints::new(series.points.clone()))
                        .name(&series.category)
                        .color(series_color(index))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(4.0),
                );
            }
        });
}
