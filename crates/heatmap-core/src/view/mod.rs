//! Source → display coordinate bookkeeping.
//!
//! The floor plan is fitted into a bounding box, multiplied by the view
//! scale, then rotated 90° clockwise for presentation. Room polygons are
//! only multiplied by the scale: they are drawn onto layers sized to the
//! post-rotation display, not onto the rotated raster, so they are never
//! rotated themselves.

mod base;
mod geometry;
mod state;

pub use base::render_base;
pub use geometry::{
    centered_origin, compute_geometry, display_to_source, transform_polygon, DisplayGeometry,
};
pub use state::ViewState;
