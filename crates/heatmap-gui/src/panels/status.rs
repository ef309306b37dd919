use heatmap_core::scene::PlaybackState;

use crate::app::HeatmapApp;

pub fn show(ctx: &egui::Context, app: &mut HeatmapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area: fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            match app.scene {
                Some(ref scene) => {
                    ui.label(format!("Hour: {:02}:00", scene.hour()));
                    ui.separator();
                    ui.label(format!("Zoom: {:.0}%", scene.scale() * 100.0));
                    ui.separator();
                    let (w, h) = scene.geometry().display_size();
                    ui.label(format!("{w}x{h}"));
                    ui.separator();
                    ui.label(format!("Rooms: {}", scene.overlays().len()));
                    if scene.playback_state() == PlaybackState::Playing {
                        ui.separator();
                        ui.label("Playing");
                    }
                }
                None => {
                    ui.label("No floor plan loaded");
                }
            }
        });

        ui.add_space(2.0);
    });
}
