use heatmap_core::scene::{BaseDraw, OverlayDraw, PresentationSurface};

use crate::convert::rgba_to_color_image;
use crate::states::ViewportState;

/// Uploads scene redraws as egui textures held by the viewport.
pub struct TextureSurface<'a> {
    ctx: &'a egui::Context,
    viewport: &'a mut ViewportState,
}

impl<'a> TextureSurface<'a> {
    pub fn new(ctx: &'a egui::Context, viewport: &'a mut ViewportState) -> Self {
        Self { ctx, viewport }
    }
}

impl PresentationSurface for TextureSurface<'_> {
    fn draw_base(&mut self, base: &BaseDraw<'_>) {
        let size = [
            base.geometry.display_width as usize,
            base.geometry.display_height as usize,
        ];
        if base.rescaled || self.viewport.base.is_none() {
            let texture = self.ctx.load_texture(
                "floor_plan",
                rgba_to_color_image(base.image),
                egui::TextureOptions::LINEAR,
            );
            self.viewport.base = Some(texture);
        }
        self.viewport.display_size = Some(size);
    }

    fn discard_overlays(&mut self) {
        // Dropping the handles frees the GPU textures.
        self.viewport.overlays.clear();
    }

    fn draw_overlay(&mut self, overlay: &OverlayDraw<'_>) {
        let texture = self.ctx.load_texture(
            format!("room_{}", overlay.layer.room_index),
            rgba_to_color_image(&overlay.layer.image),
            egui::TextureOptions::NEAREST,
        );
        self.viewport.overlays.push(texture);
    }
}
