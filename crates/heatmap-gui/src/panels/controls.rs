use heatmap_core::consts::LAST_HOUR;
use heatmap_core::scene::{PlaybackState, SceneCommand};

use crate::app::HeatmapApp;

const BUTTON_SIZE: egui::Vec2 = egui::vec2(36.0, 36.0);
const SLIDER_WIDTH: f32 = 300.0;

/// Playback button, hour slider and zoom buttons.
pub fn show(ctx: &egui::Context, app: &mut HeatmapApp) {
    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.add_space(6.0);
        let enabled = app.scene.is_some();
        let playing = app
            .scene
            .as_ref()
            .is_some_and(|s| s.playback_state() == PlaybackState::Playing);

        ui.horizontal(|ui| {
            let play_label = if playing { "\u{23F8}" } else { "\u{25B6}" };
            if ui
                .add_enabled(enabled, egui::Button::new(play_label).min_size(BUTTON_SIZE))
                .on_hover_text(if playing { "Pause" } else { "Play" })
                .clicked()
            {
                app.ui_state.push(SceneCommand::TogglePlay);
            }

            ui.add_space(12.0);

            let mut hour = app.ui_state.hour_slider;
            ui.spacing_mut().slider_width = SLIDER_WIDTH;
            let slider = ui.add_enabled(
                enabled,
                egui::Slider::new(&mut hour, 0..=LAST_HOUR)
                    .text("Hour")
                    .custom_formatter(|v, _| format!("{:02}:00", v as u8)),
            );
            if slider.changed() {
                app.ui_state.hour_slider = hour;
                app.ui_state.push(SceneCommand::SetHour(hour));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(enabled, egui::Button::new("+").min_size(BUTTON_SIZE))
                    .clicked()
                {
                    app.ui_state.push(SceneCommand::ZoomIn);
                }
                if ui
                    .add_enabled(enabled, egui::Button::new("-").min_size(BUTTON_SIZE))
                    .clicked()
                {
                    app.ui_state.push(SceneCommand::ZoomOut);
                }
                if app.ui_state.loading {
                    ui.spinner();
                }
            });
        });
        ui.add_space(6.0);

        if enabled {
            handle_shortcuts(ctx, app);
        }
    });
}

fn handle_shortcuts(ctx: &egui::Context, app: &mut HeatmapApp) {
    // Leave keys to any focused text field.
    if ctx.memory(|m| m.focused().is_some()) {
        return;
    }
    let (zoom_in, zoom_out, toggle) = ctx.input(|i| {
        (
            i.key_pressed(egui::Key::Plus) || i.key_pressed(egui::Key::Equals),
            i.key_pressed(egui::Key::Minus),
            i.key_pressed(egui::Key::Space),
        )
    });
    if zoom_in {
        app.ui_state.push(SceneCommand::ZoomIn);
    }
    if zoom_out {
        app.ui_state.push(SceneCommand::ZoomOut);
    }
    if toggle {
        app.ui_state.push(SceneCommand::TogglePlay);
    }
}
