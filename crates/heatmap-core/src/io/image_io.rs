use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{HeatmapError, Result};

/// Decode a floor-plan raster from disk into RGBA.
pub fn load_floor_plan(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)?.to_rgba8();
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(HeatmapError::InvalidDimensions { width, height });
    }
    info!(path = %path.display(), width, height, "Loaded floor plan");
    Ok(img)
}

/// Save an RGBA raster as PNG.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}
