use image::RgbaImage;

use crate::overlay::OverlayLayer;
use crate::view::DisplayGeometry;

/// Clockwise rotation applied to the floor plan for presentation.
pub const BASE_ROTATION_DEGREES: u32 = 90;

/// Instruction to (re)draw the floor plan.
#[derive(Clone, Copy, Debug)]
pub struct BaseDraw<'a> {
    /// Already resampled and rotated; `display_width × display_height`.
    pub image: &'a RgbaImage,
    pub geometry: DisplayGeometry,
    pub rotation_degrees: u32,
    /// `true` when the raster changed since the previous base draw.
    pub rescaled: bool,
}

/// Instruction to draw one overlay layer.
#[derive(Clone, Copy, Debug)]
pub struct OverlayDraw<'a> {
    pub layer: &'a OverlayLayer,
    /// Display-space position of the layer's top-left corner.
    pub anchor: (u32, u32),
}

/// Receiver of redraws, e.g. a canvas widget or an off-screen compositor.
///
/// A redraw is always delivered as one `discard_overlays`, one `draw_base`,
/// then one `draw_overlay` per visible room. References are only valid for
/// the duration of the call; implementors that keep textures must key them by
/// redraw and release them in `discard_overlays`.
pub trait PresentationSurface {
    fn draw_base(&mut self, _base: &BaseDraw<'_>) {}

    /// Release everything drawn by the previous `draw_overlay` calls.
    fn discard_overlays(&mut self) {}

    fn draw_overlay(&mut self, _overlay: &OverlayDraw<'_>) {}
}

/// Surface that ignores every instruction. For headless use.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl PresentationSurface for NullSurface {}
