use std::sync::mpsc;

use heatmap_core::config::ViewerConfig;
use heatmap_core::io::dataset::load_dataset;
use heatmap_core::scene::{SceneController, SceneOptions};
use tracing::{error, info};

use crate::messages::{WorkerCommand, WorkerResult};

/// Spawn the loader thread. Image decoding and the initial resample run here,
/// off the UI thread.
pub fn spawn_worker(
    result_tx: mpsc::Sender<WorkerResult>,
    ctx: egui::Context,
) -> mpsc::Sender<WorkerCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<WorkerCommand>();

    std::thread::spawn(move || {
        while let Ok(cmd) = cmd_rx.recv() {
            let result = match cmd {
                WorkerCommand::Open { config } => open_scene(config),
            };
            let _ = result_tx.send(result);
            ctx.request_repaint();
        }
    });

    cmd_tx
}

fn open_scene(config: ViewerConfig) -> WorkerResult {
    info!(
        image = %config.image.display(),
        dataset = %config.dataset.display(),
        "Opening scene"
    );
    let scene = load_dataset(&config.dataset).and_then(|dataset| {
        SceneController::open(&config.image, dataset, SceneOptions::from(&config))
    });
    match scene {
        Ok(scene) => WorkerResult::SceneReady {
            scene: Box::new(scene),
            config,
        },
        Err(e) => {
            error!("Failed to open scene: {e}");
            WorkerResult::Error {
                message: e.to_string(),
            }
        }
    }
}
