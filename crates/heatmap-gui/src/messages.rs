use heatmap_core::config::ViewerConfig;
use heatmap_core::scene::SceneController;

/// Commands sent from UI thread to worker thread.
pub enum WorkerCommand {
    /// Load the dataset and floor plan named by `config` and build a scene.
    Open { config: ViewerConfig },
}

/// Results sent from worker thread back to UI thread.
pub enum WorkerResult {
    SceneReady {
        scene: Box<SceneController>,
        config: ViewerConfig,
    },
    ConfigImported {
        config: ViewerConfig,
    },
    /// A file dialog replaced one input path; the scene should be reopened.
    InputPicked {
        config: ViewerConfig,
    },
    Error {
        message: String,
    },
}
