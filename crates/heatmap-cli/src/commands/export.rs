use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use heatmap_core::compose::FrameCompositor;
use heatmap_core::consts::{HOURS_PER_DAY, LAST_HOUR};
use heatmap_core::io::image_io::save_png;
use heatmap_core::scene::{PlaybackEnd, SceneCommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use super::scene::{open_scene, SceneArgs};

#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub scene: SceneArgs,

    /// Number of zoom-in steps to apply (each x1.2, capped at x3)
    #[arg(long, default_value = "0")]
    pub zoom_steps: u32,

    /// Output directory (created if missing)
    #[arg(short, long, default_value = "frames")]
    pub output: PathBuf,
}

/// Play the whole day through the scene and save each redraw.
pub fn run(args: &ExportArgs) -> Result<()> {
    let mut config = args.scene.resolve_config()?;
    config.initial_hour = 0;
    config.playback.end = PlaybackEnd::Stop;

    let mut scene = open_scene(&config)?;
    std::fs::create_dir_all(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;

    let mut compositor = FrameCompositor::new();
    let start = Instant::now();
    for _ in 0..args.zoom_steps {
        scene.apply(SceneCommand::ZoomIn, start, &mut compositor)?;
    }
    scene.present(&mut compositor);

    let pb = ProgressBar::new(HOURS_PER_DAY as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Exporting [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    // Drive playback on a synthetic clock: one interval per hour.
    scene.apply(SceneCommand::TogglePlay, start, &mut compositor)?;
    let interval = std::time::Duration::from_millis(config.playback.interval_ms);
    let mut clock = start;
    loop {
        let hour = scene.hour();
        let frame = compositor.frame().context("Scene produced no frame")?;
        let path = args.output.join(format!("hour_{hour:02}.png"));
        save_png(frame, &path).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(
            hour,
            overlays = scene.overlays().len(),
            path = %path.display(),
            "Frame written"
        );
        pb.inc(1);

        if hour == LAST_HOUR {
            break;
        }
        clock += interval;
        if !scene.tick(clock, &mut compositor)? {
            break;
        }
    }
    scene.stop();
    pb.finish();

    println!("Saved {} frames to {}", pb.position(), args.output.display());
    Ok(())
}
