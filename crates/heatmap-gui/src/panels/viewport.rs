use heatmap_core::room::Point;
use heatmap_core::view::{centered_origin, display_to_source};
use tracing::debug;

use crate::app::HeatmapApp;

pub fn show(ctx: &egui::Context, app: &mut HeatmapApp) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.fill(egui::Color32::WHITE))
        .show(ctx, |ui| {
            let rect = ui.available_rect_before_wrap();

            let Some(base) = app.viewport.base.as_ref().map(|t| t.id()) else {
                show_placeholder(ui, app.ui_state.loading);
                return;
            };
            let Some([w, h]) = app.viewport.display_size else {
                return;
            };
            let display_size = egui::vec2(w as f32, h as f32);

            if app.viewport.needs_centering {
                let origin = centered_origin(
                    (rect.width() as f64, rect.height() as f64),
                    (w as u32, h as u32),
                );
                app.viewport.pan_offset = egui::vec2(origin.x as f32, origin.y as f32);
                app.viewport.needs_centering = false;
            }

            let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
            if response.dragged_by(egui::PointerButton::Primary) {
                app.viewport.pan_offset += response.drag_delta();
            }
            if response.double_clicked() {
                app.viewport.needs_centering = true;
            }

            let img_rect =
                egui::Rect::from_min_size(rect.min + app.viewport.pan_offset, display_size);
            let painter = ui.painter_at(rect);
            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

            painter.image(base, img_rect, uv, egui::Color32::WHITE);
            for overlay in &app.viewport.overlays {
                painter.image(overlay.id(), img_rect, uv, egui::Color32::WHITE);
            }

            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    report_source_point(app, pos - img_rect.min);
                }
            }
        });
}

/// Log the source-space coordinate under the pointer, for authoring room polygons.
fn report_source_point(app: &mut HeatmapApp, display: egui::Vec2) {
    let Some(ref scene) = app.scene else {
        return;
    };
    let point = display_to_source(Point::new(display.x as f64, display.y as f64), scene.scale());
    debug!(x = point.x, y = point.y, "Picked source point");
    app.ui_state
        .add_log(format!("Source point: {:.1}, {:.1}", point.x, point.y));
}

fn show_placeholder(ui: &mut egui::Ui, loading: bool) {
    let text = if loading {
        "Loading floor plan..."
    } else {
        "Open a floor plan and dataset to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
