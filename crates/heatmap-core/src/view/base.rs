use image::imageops::{self, FilterType};
use image::RgbaImage;
use tracing::debug;

use super::DisplayGeometry;

/// Resample the floor plan to the geometry's pre-rotation size and rotate it
/// 90° clockwise. The result is `display_width × display_height`.
pub fn render_base(source: &RgbaImage, geometry: &DisplayGeometry) -> RgbaImage {
    debug!(
        width = geometry.resize_width,
        height = geometry.resize_height,
        "Resampling floor plan"
    );
    let resized = imageops::resize(
        source,
        geometry.resize_width,
        geometry.resize_height,
        FilterType::Lanczos3,
    );
    imageops::rotate90(&resized)
}
