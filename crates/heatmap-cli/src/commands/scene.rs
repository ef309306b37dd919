use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use heatmap_core::config::ViewerConfig;
use heatmap_core::io::dataset::load_dataset;
use heatmap_core::scene::{SceneController, SceneOptions};
use tracing::info;

/// Scene inputs shared by `render` and `export`. Flags override the config file.
#[derive(Args)]
pub struct SceneArgs {
    /// Viewer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Floor-plan image
    #[arg(long)]
    pub image: Option<PathBuf>,

    /// Occupancy dataset (JSON)
    #[arg(long)]
    pub dataset: Option<PathBuf>,

    /// Bounding box width
    #[arg(long)]
    pub max_width: Option<u32>,

    /// Bounding box height
    #[arg(long)]
    pub max_height: Option<u32>,
}

impl SceneArgs {
    pub fn resolve_config(&self) -> Result<ViewerConfig> {
        let mut config = match self.config {
            Some(ref path) => ViewerConfig::load(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => ViewerConfig::default(),
        };
        if let Some(ref image) = self.image {
            config.image = image.clone();
        }
        if let Some(ref dataset) = self.dataset {
            config.dataset = dataset.clone();
        }
        if let Some(w) = self.max_width {
            config.max_width = w;
        }
        if let Some(h) = self.max_height {
            config.max_height = h;
        }
        Ok(config)
    }
}

/// Load the dataset and floor plan named by `config` and build a scene.
pub fn open_scene(config: &ViewerConfig) -> Result<SceneController> {
    let dataset = load_dataset(&config.dataset)
        .with_context(|| format!("Failed to load dataset {}", config.dataset.display()))?;
    info!(
        image = %config.image.display(),
        dataset = %config.dataset.display(),
        rooms = dataset.len(),
        "Opening scene"
    );
    SceneController::open(&config.image, dataset, SceneOptions::from(config))
        .with_context(|| format!("Failed to open floor plan {}", config.image.display()))
}
