use std::path::Path;
use std::sync::mpsc;
use std::time::Instant;

use anyhow::Context;
use heatmap_core::config::ViewerConfig;
use heatmap_core::scene::SceneController;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{UIState, ViewportState};
use crate::surface::TextureSurface;
use crate::worker;

/// Config picked up from the working directory at startup, if present.
const STARTUP_CONFIG: &str = "heatmap.toml";

pub struct HeatmapApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub scene: Option<SceneController>,
    pub config: ViewerConfig,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub show_about: bool,
}

impl HeatmapApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            scene: None,
            config: ViewerConfig::default(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            show_about: false,
        };

        match load_startup_config(Path::new(STARTUP_CONFIG)) {
            Ok(Some(config)) => {
                app.ui_state.add_log(format!("Loaded {STARTUP_CONFIG}"));
                app.config = config;
            }
            Ok(None) => {}
            Err(e) => app.ui_state.add_log(format!("ERROR: {e:#}")),
        }
        if app.config.image.exists() && app.config.dataset.exists() {
            app.open(app.config.clone());
        }
        app
    }

    /// Ask the worker to build a scene from `config`.
    pub fn open(&mut self, config: ViewerConfig) {
        self.ui_state.loading = true;
        self.send_command(WorkerCommand::Open { config });
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            self.handle_result(result, ctx);
        }
    }

    fn handle_result(&mut self, result: WorkerResult, ctx: &egui::Context) {
        match result {
            WorkerResult::SceneReady { scene, config } => {
                self.ui_state.loading = false;
                self.ui_state.add_log(format!(
                    "Opened: {} ({} records)",
                    config.image.display(),
                    scene.dataset().len()
                ));
                if let Some(mut old) = self.scene.take() {
                    old.stop();
                }
                self.viewport.reset();
                self.ui_state.pending.clear();
                scene.present(&mut TextureSurface::new(ctx, &mut self.viewport));
                self.scene = Some(*scene);
                self.config = config;
            }
            WorkerResult::ConfigImported { config } => {
                self.ui_state.add_log("Config imported".into());
                self.open(config);
            }
            WorkerResult::InputPicked { config } => self.open(config),
            WorkerResult::Error { message } => {
                self.ui_state.loading = false;
                self.ui_state.add_log(format!("ERROR: {message}"));
            }
        }
    }

    /// Apply queued commands, then let playback advance.
    fn step_scene(&mut self, ctx: &egui::Context) {
        let Some(scene) = self.scene.as_mut() else {
            self.ui_state.pending.clear();
            return;
        };
        let now = Instant::now();
        let mut surface = TextureSurface::new(ctx, &mut self.viewport);

        while let Some(command) = self.ui_state.pending.pop_front() {
            if let Err(e) = scene.apply(command, now, &mut surface) {
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
        if let Err(e) = scene.tick(now, &mut surface) {
            self.ui_state.add_log(format!("ERROR: playback stopped: {e}"));
        }

        if let Some(deadline) = scene.next_tick() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
        self.ui_state.hour_slider = scene.hour();
    }
}

impl eframe::App for HeatmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.step_scene(ctx);

        panels::menu_bar::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::status::show(ctx, self);
        panels::viewport::show(ctx, self);

        // Widgets queue commands; apply them within the same frame.
        if !self.ui_state.pending.is_empty() {
            ctx.request_repaint();
        }

        if self.show_about {
            egui::Window::new("About HeatMap")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("HeatMap");
                        ui.label("Room occupancy by hour");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

impl Drop for HeatmapApp {
    fn drop(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            scene.stop();
        }
    }
}

fn load_startup_config(path: &Path) -> anyhow::Result<Option<ViewerConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    let config = ViewerConfig::load(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    Ok(Some(config))
}
