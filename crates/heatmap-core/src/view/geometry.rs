use crate::consts::MAX_DISPLAY_DIMENSION;
use crate::error::{HeatmapError, Result};
use crate::room::Point;

/// Display size derived from the source image, bounding box and scale.
///
/// `resize_*` is the size the source is resampled to; `display_*` is the
/// size after the 90° rotation, i.e. the resize output with its axes swapped.
/// Overlay layers are allocated at `display_width × display_height`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayGeometry {
    pub resize_width: u32,
    pub resize_height: u32,
    pub display_width: u32,
    pub display_height: u32,
}

impl DisplayGeometry {
    pub fn display_size(&self) -> (u32, u32) {
        (self.display_width, self.display_height)
    }
}

/// Fit a `source_width × source_height` image into the bounding box, apply
/// `scale`, and account for the 90° presentation rotation.
///
/// The bounding axis with the larger slack (`bound - source`) decides the
/// fit: if the width slack is larger the height is fitted to
/// `bound_height`, otherwise the width is fitted to `bound_width`. The other
/// axis follows from the source aspect ratio. Both sides are scaled and then
/// truncated. A side that truncates to zero or exceeds
/// [`MAX_DISPLAY_DIMENSION`] is an error.
pub fn compute_geometry(
    source_width: u32,
    source_height: u32,
    bound_width: u32,
    bound_height: u32,
    scale: f64,
) -> Result<DisplayGeometry> {
    if source_width == 0 || source_height == 0 {
        return Err(HeatmapError::InvalidDimensions {
            width: source_width,
            height: source_height,
        });
    }
    if bound_width == 0 || bound_height == 0 {
        return Err(HeatmapError::InvalidDimensions {
            width: bound_width,
            height: bound_height,
        });
    }

    let aspect_ratio = source_width as f64 / source_height as f64;
    let width_slack = bound_width as i64 - source_width as i64;
    let height_slack = bound_height as i64 - source_height as i64;

    let (fit_width, fit_height) = if width_slack > height_slack {
        let h = bound_height as f64;
        (h * aspect_ratio, h)
    } else {
        let w = bound_width as f64;
        (w, w / aspect_ratio)
    };

    let resize_width = (fit_width * scale) as u32;
    let resize_height = (fit_height * scale) as u32;
    if resize_width == 0
        || resize_height == 0
        || resize_width > MAX_DISPLAY_DIMENSION
        || resize_height > MAX_DISPLAY_DIMENSION
    {
        return Err(HeatmapError::InvalidDimensions {
            width: resize_width,
            height: resize_height,
        });
    }

    Ok(DisplayGeometry {
        resize_width,
        resize_height,
        display_width: resize_height,
        display_height: resize_width,
    })
}

/// Map a source-space polygon into display space. Uniform scale only.
pub fn transform_polygon(polygon: &[Point], scale: f64) -> Vec<Point> {
    polygon
        .iter()
        .map(|p| Point::new(p.x * scale, p.y * scale))
        .collect()
}

/// Inverse of [`transform_polygon`] for a single display-space point.
pub fn display_to_source(point: Point, scale: f64) -> Point {
    Point::new(point.x / scale, point.y / scale)
}

/// Top-left position that centres an image of `image` size inside a
/// viewport of `viewport` size. Negative when the image is larger.
pub fn centered_origin(viewport: (f64, f64), image: (u32, u32)) -> Point {
    Point::new(
        (viewport.0 - image.0 as f64) / 2.0,
        (viewport.1 - image.1 as f64) / 2.0,
    )
}
