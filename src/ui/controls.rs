// src/ui/controls.rs
use eframe::egui;

use crate::analysis::PayloadRange;
use crate::config::SiteSelection;
use crate::state::AppState;

pub const SITE_PLACEHOLDER: &str = "Select a Launch Site here";

const RAIL_MARGIN: f32 = 12.0;
const HANDLE_RADIUS: f32 = 8.0;
const SLIDER_HEIGHT: f32 = 46.0;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Handle {
    Low,
    High,
}

/// Snaps `value` onto the `step` grid that starts at the lower bound.
pub fn quantize(value: f64, bounds: [f64; 2], step: f64) -> f64 {
    let [min, max] = bounds;
    let snapped = ((value - min) / step).round() * step + min;
    snapped.clamp(min, max)
}

/// Two-handle slider over a payload range, with tick marks and labels under
/// the rail. Handles snap to `step` while dragged and cannot cross.
pub struct PayloadRangeSlider<'a> {
    range: &'a mut PayloadRange,
    bounds: [f64; 2],
    step: f64,
    marks: &'a [f64],
}

impl<'a> PayloadRangeSlider<'a> {
    pub fn new(range: &'a mut PayloadRange, bounds: [f64; 2], step: f64, marks: &'a [f64]) -> Self {
        Self { range, bounds, step, marks }
    }
}

impl egui::Widget for PayloadRangeSlider<'_> {
    fn ui(self, ui: &mut egui::Ui) -> egui::Response {
        let range = self.range;
        let size = egui::vec2(ui.available_width(), SLIDER_HEIGHT);
        let (rect, mut response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        let rail_y = rect.top() + HANDLE_RADIUS + 2.0;
        let left = rect.left() + RAIL_MARGIN;
        let right = rect.right() - RAIL_MARGIN;
        let [min, max] = self.bounds;
        let to_x = |value: f64| egui::remap_clamp(value as f32, min as f32..=max as f32, left..=right);
        let to_value = |x: f32| f64::from(egui::remap_clamp(x, left..=right, min as f32..=max as f32));

        let active_id = response.id.with("active_handle");
        if let Some(pointer) = response.interact_pointer_pos() {
            let handle = match ui.memory(|mem| mem.data.get_temp::<Handle>(active_id)) {
                Some(handle) => handle,
                None => {
                    let low_distance = (pointer.x - to_x(range.low)).abs();
                    let high_distance = (pointer.x - to_x(range.high)).abs();
                    let nearest = if low_distance <= high_distance { Handle::Low } else { Handle::High };
                    ui.memory_mut(|mem| mem.data.insert_temp(active_id, nearest));
                    nearest
                }
            };

            let value = quantize(to_value(pointer.x), self.bounds, self.step);
            let before = *range;
            match handle {
                Handle::Low => range.low = value.min(range.high),
                Handle::High => range.high = value.max(range.low),
            }
            if *range != before {
                response.mark_changed();
            }
        }
        if response.drag_released() || response.clicked() {
            ui.memory_mut(|mem| mem.data.remove::<Handle>(active_id));
        }

        if ui.is_rect_visible(rect) {
            let visuals = ui.visuals();
            let painter = ui.painter();
            let rail = egui::Rect::from_min_max(egui::pos2(left, rail_y - 2.0), egui::pos2(right, rail_y + 2.0));
            painter.rect_filled(rail, 2.0, visuals.widgets.inactive.bg_fill);

            let low_x = to_x(range.low);
            let high_x = to_x(range.high);
            let selected = egui::Rect::from_min_max(egui::pos2(low_x, rail_y - 2.0), egui::pos2(high_x, rail_y + 2.0));
            painter.rect_filled(selected, 2.0, visuals.selection.bg_fill);

            for &mark in self.marks {
                let x = to_x(mark);
                painter.line_segment(
                    [egui::pos2(x, rail_y + 4.0), egui::pos2(x, rail_y + 8.0)],
                    visuals.widgets.noninteractive.fg_stroke,
                );
                painter.text(
                    egui::pos2(x, rail_y + 10.0),
                    egui::Align2::CENTER_TOP,
                    format!("{}", mark),
                    egui::FontId::proportional(11.0),
                    visuals.text_color(),
                );
            }

            for x in [low_x, high_x] {
                painter.circle(
                    egui::pos2(x, rail_y),
                    HANDLE_RADIUS,
                    visuals.widgets.active.bg_fill,
                    visuals.selection.stroke,
                );
            }
        }

        response
    }
}

pub fn show_site_selector(ui: &mut egui::Ui, state: &mut AppState) {
    let selected_text = state.control.site
        .map(|site| site.label())
        .unwrap_or(SITE_PLACEHOLDER);

    egui::ComboBox::from_id_source("site_selector")
        .selected_text(selected_text)
        .width(ui.available_width().min(360.0))
        .show_ui(ui, |ui| {
            ui.add(egui::TextEdit::singleline(&mut state.ui.site_search).hint_text("Search"));
            let query = state.ui.site_search.trim().to_lowercase();

            for option in SiteSelection::options() {
                let visible = query.is_empty()
                    || option.label().to_lowercase().contains(&query)
                    || option.code().to_lowercase().contains(&query);
                if visible {
                    ui.selectable_value(&mut state.control.site, Some(option), option.label());
                }
            }
        });

    match state.control.site {
        Some(site) => ui.label(format!("Selected: {} ({})", site.label(), site.code())),
        None => ui.weak("No launch site selected"),
    };
}

pub fn show_payload_range(ui: &mut egui::Ui, state: &mut AppState) {
    ui.label("Payload Range (Kg):");
    ui.add(PayloadRangeSlider::new(
        &mut state.control.payload_range,
        state.settings.payload_bounds,
        state.settings.payload_step,
        &state.settings.payload_marks,
    ));

    let effective = state.control.payload_range.normalized(state.context.table().max_payload());
    ui.label(format!(
        "Payload between {:.0} kg and {:.0} kg (both excluded)",
        effective.low,
        effective.high
    ));
}
