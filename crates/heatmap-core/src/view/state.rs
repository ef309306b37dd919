use crate::consts::{MAX_SCALE, MIN_SCALE, ZOOM_STEP};

/// Tolerance when comparing a power of [`ZOOM_STEP`] against [`MAX_SCALE`].
const SCALE_EPSILON: f64 = 1e-9;

/// User-controlled zoom.
///
/// Zoom is stored as a whole number of steps from [`MIN_SCALE`], so the
/// scale is always exactly `ZOOM_STEP^level` no matter how many times the
/// user zoomed in and out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    zoom_level: u32,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view zoomed in by `level` steps, saturating at the maximum.
    pub fn with_zoom_level(level: u32) -> Self {
        Self {
            zoom_level: level.min(Self::max_zoom_level()),
        }
    }

    /// Highest level whose scale stays within [`MAX_SCALE`].
    pub fn max_zoom_level() -> u32 {
        let mut level = 0;
        while MIN_SCALE * ZOOM_STEP.powi(level as i32 + 1) <= MAX_SCALE + SCALE_EPSILON {
            level += 1;
        }
        level
    }

    pub fn zoom_level(&self) -> u32 {
        self.zoom_level
    }

    pub fn scale(&self) -> f64 {
        MIN_SCALE * ZOOM_STEP.powi(self.zoom_level as i32)
    }

    /// Step the scale up by [`ZOOM_STEP`]. Returns `false` (and changes
    /// nothing) when the step would exceed [`MAX_SCALE`].
    pub fn zoom_in(&mut self) -> bool {
        if self.zoom_level >= Self::max_zoom_level() {
            return false;
        }
        self.zoom_level += 1;
        true
    }

    /// Step the scale down by [`ZOOM_STEP`]. Returns `false` at [`MIN_SCALE`].
    pub fn zoom_out(&mut self) -> bool {
        if self.zoom_level == 0 {
            return false;
        }
        self.zoom_level -= 1;
        true
    }
}
