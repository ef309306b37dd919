/// Textures and pan state of the canvas.
///
/// Pan lives here rather than in the scene: zooming rebuilds the textures but
/// leaves `pan_offset` alone, like a scrolled canvas keeping its scroll
/// position.
pub struct ViewportState {
    pub base: Option<egui::TextureHandle>,
    /// One full-display texture per visible room, anchored at the origin.
    pub overlays: Vec<egui::TextureHandle>,
    /// Post-rotation display size of the current redraw.
    pub display_size: Option<[usize; 2]>,
    /// Offset of the display origin from the panel's top-left corner.
    pub pan_offset: egui::Vec2,
    /// Centre the image on the next paint (set after a scene is opened).
    pub needs_centering: bool,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            base: None,
            overlays: Vec::new(),
            display_size: None,
            pan_offset: egui::Vec2::ZERO,
            needs_centering: true,
        }
    }
}

impl ViewportState {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
