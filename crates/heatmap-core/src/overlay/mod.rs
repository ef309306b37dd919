mod raster;
mod renderer;

pub use raster::rasterize_polygon;
pub use renderer::{render_hour, OverlayLayer, OUTLINE_COLOR};
