use image::imageops;
use image::RgbaImage;

use crate::overlay::OverlayLayer;
use crate::scene::{BaseDraw, OverlayDraw, PresentationSurface};

/// Alpha-composite overlays onto a copy of the base raster.
pub fn flatten(base: &RgbaImage, overlays: &[OverlayLayer]) -> RgbaImage {
    let mut frame = base.clone();
    for layer in overlays {
        imageops::overlay(&mut frame, &layer.image, 0, 0);
    }
    frame
}

/// Surface that flattens every redraw into a single raster.
#[derive(Debug, Default)]
pub struct FrameCompositor {
    frame: Option<RgbaImage>,
}

impl FrameCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent composited frame.
    pub fn frame(&self) -> Option<&RgbaImage> {
        self.frame.as_ref()
    }

    pub fn take_frame(&mut self) -> Option<RgbaImage> {
        self.frame.take()
    }
}

impl PresentationSurface for FrameCompositor {
    fn draw_base(&mut self, base: &BaseDraw<'_>) {
        self.frame = Some(base.image.clone());
    }

    fn discard_overlays(&mut self) {
        self.frame = None;
    }

    fn draw_overlay(&mut self, overlay: &OverlayDraw<'_>) {
        if let Some(frame) = self.frame.as_mut() {
            let (x, y) = overlay.anchor;
            imageops::overlay(frame, &overlay.layer.image, x as i64, y as i64);
        }
    }
}
