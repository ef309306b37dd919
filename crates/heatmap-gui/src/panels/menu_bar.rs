use std::path::Path;

use heatmap_core::config::ViewerConfig;

use crate::app::HeatmapApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut HeatmapApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Floor Plan...").clicked() {
                    ui.close();
                    pick_and_open(app, FileKind::FloorPlan);
                }

                if ui.button("Open Dataset...").clicked() {
                    ui.close();
                    pick_and_open(app, FileKind::Dataset);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

#[derive(Clone, Copy)]
enum FileKind {
    FloorPlan,
    Dataset,
}

/// Replace one input path in the current config and reopen the scene.
fn pick_and_open(app: &mut HeatmapApp, kind: FileKind) {
    let result_tx = app.result_tx.clone();
    let mut config = app.config.clone();
    std::thread::spawn(move || {
        let dialog = match kind {
            FileKind::FloorPlan => rfd::FileDialog::new()
                .add_filter("Images", &["png", "jpg", "jpeg", "bmp"])
                .add_filter("All files", &["*"]),
            FileKind::Dataset => rfd::FileDialog::new()
                .add_filter("JSON", &["json"])
                .add_filter("All files", &["*"]),
        };
        let Some(path) = dialog.pick_file() else {
            return;
        };
        match kind {
            FileKind::FloorPlan => config.image = path,
            FileKind::Dataset => config.dataset = path,
        }
        let _ = result_tx.send(WorkerResult::InputPicked { config });
    });
}

fn import_config(app: &mut HeatmapApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = match ViewerConfig::load(&path) {
            Ok(config) => WorkerResult::ConfigImported { config },
            Err(e) => WorkerResult::Error {
                message: format!("{}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(result);
    });
}

fn export_config(app: &mut HeatmapApp) {
    let config = app.config.clone();
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("heatmap.toml")
            .save_file()
        else {
            return;
        };
        if let Err(message) = write_config(&config, &path) {
            let _ = result_tx.send(WorkerResult::Error { message });
        }
    });
}

fn write_config(config: &ViewerConfig, path: &Path) -> Result<(), String> {
    let content = toml::to_string_pretty(config).map_err(|e| e.to_string())?;
    std::fs::write(path, content).map_err(|e| format!("{}: {e}", path.display()))
}
