use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use heatmap_core::compose::FrameCompositor;
use heatmap_core::io::image_io::save_png;
use heatmap_core::scene::SceneCommand;
use tracing::info;

use super::scene::{open_scene, SceneArgs};

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Hour to render (0-23)
    #[arg(long, default_value = "0")]
    pub hour: u8,

    /// Number of zoom-in steps to apply (each x1.2, capped at x3)
    #[arg(long, default_value = "0")]
    pub zoom_steps: u32,

    /// Output PNG path
    #[arg(short, long, default_value = "heatmap.png")]
    pub output: PathBuf,
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let config = args.scene.resolve_config()?;
    let mut scene = open_scene(&config)?;
    let mut compositor = FrameCompositor::new();
    let now = Instant::now();

    for _ in 0..args.zoom_steps {
        scene.apply(SceneCommand::ZoomIn, now, &mut compositor)?;
    }
    scene.apply(SceneCommand::SetHour(args.hour), now, &mut compositor)?;

    let frame = compositor
        .take_frame()
        .context("Scene produced no frame")?;
    save_png(&frame, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    info!(hour = scene.hour(), path = %args.output.display(), "Frame written");

    println!(
        "Hour {:02}: {} rooms, scale {:.3}, {}x{}",
        scene.hour(),
        scene.overlays().len(),
        scene.scale(),
        frame.width(),
        frame.height()
    );
    println!("Saved to {}", args.output.display());
    Ok(())
}
