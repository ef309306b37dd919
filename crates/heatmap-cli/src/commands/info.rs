use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use heatmap_core::io::dataset::load_dataset;

use crate::summary::print_dataset_summary;

#[derive(Args)]
pub struct InfoArgs {
    /// Occupancy dataset (JSON)
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let dataset = load_dataset(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    print_dataset_summary(&args.file, &dataset);
    Ok(())
}
