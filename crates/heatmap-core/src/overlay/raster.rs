use image::{Rgba, RgbaImage};
use vello_cpu::kurbo::{BezPath, Point as PathPoint, Rect, Stroke};
use vello_cpu::peniko::{Color, Fill};
use vello_cpu::{Pixmap, RenderContext};

use crate::error::{HeatmapError, Result};
use crate::room::Point;

/// Distance, in display pixels, the clip window extends past each image
/// edge. Wide enough that the outline and its anti-aliased fringe along the
/// clip boundary stay off-image.
const CLIP_MARGIN: f64 = 4.0;

/// Outline width in display pixels.
const OUTLINE_WIDTH: f64 = 1.0;

/// Rasterise a closed polygon into a transparent `width × height` image:
/// even-odd fill in `fill`, then a one-pixel outline in `outline`.
///
/// The polygon is clipped to the image (plus a small margin) before it is
/// handed to the renderer, so vertices arbitrarily far off-image cost
/// nothing extra. Fewer than three vertices draws nothing.
pub fn rasterize_polygon(
    width: u32,
    height: u32,
    polygon: &[Point],
    fill: Rgba<u8>,
    outline: Rgba<u8>,
) -> Result<RgbaImage> {
    let invalid = || HeatmapError::InvalidDimensions { width, height };
    let w: u16 = width.try_into().map_err(|_| invalid())?;
    let h: u16 = height.try_into().map_err(|_| invalid())?;
    if w == 0 || h == 0 {
        return Err(invalid());
    }

    let window = Rect::new(
        -CLIP_MARGIN,
        -CLIP_MARGIN,
        width as f64 + CLIP_MARGIN,
        height as f64 + CLIP_MARGIN,
    );
    let Some(path) = polygon_path(&clip_polygon(polygon, window)) else {
        return Ok(RgbaImage::new(width, height));
    };

    let mut ctx = RenderContext::new(w, h);
    ctx.set_fill_rule(Fill::EvenOdd);
    ctx.set_paint(to_color(fill));
    ctx.fill_path(&path);
    ctx.set_stroke(Stroke::new(OUTLINE_WIDTH));
    ctx.set_paint(to_color(outline));
    ctx.stroke_path(&path);
    ctx.flush();

    let mut pixmap = Pixmap::new(w, h);
    ctx.render_to_pixmap(&mut pixmap);

    let mut data = pixmap.data_as_u8_slice().to_vec();
    unpremultiply_rgba8_in_place(&mut data);
    RgbaImage::from_raw(width, height, data).ok_or_else(invalid)
}

/// Closed path through the polygon's vertices, or `None` for fewer than
/// three.
fn polygon_path(polygon: &[PathPoint]) -> Option<BezPath> {
    let (first, rest) = polygon.split_first()?;
    if rest.len() < 2 {
        return None;
    }
    let mut path = BezPath::new();
    path.move_to(*first);
    for &p in rest {
        path.line_to(p);
    }
    path.close_path();
    Some(path)
}

/// One side of the clip window, with the coordinate of its edge.
#[derive(Clone, Copy)]
enum Boundary {
    Left(f64),
    Right(f64),
    Top(f64),
    Bottom(f64),
}

impl Boundary {
    fn contains(self, p: PathPoint) -> bool {
        match self {
            Boundary::Left(x) => p.x >= x,
            Boundary::Right(x) => p.x <= x,
            Boundary::Top(y) => p.y >= y,
            Boundary::Bottom(y) => p.y <= y,
        }
    }

    /// Crossing of segment `a`-`b` with this edge. Only called when the
    /// endpoints lie on opposite sides, so the divisor is non-zero.
    fn intersect(self, a: PathPoint, b: PathPoint) -> PathPoint {
        match self {
            Boundary::Left(x) | Boundary::Right(x) => {
                let t = (x - a.x) / (b.x - a.x);
                PathPoint::new(x, a.y + t * (b.y - a.y))
            }
            Boundary::Top(y) | Boundary::Bottom(y) => {
                let t = (y - a.y) / (b.y - a.y);
                PathPoint::new(a.x + t * (b.x - a.x), y)
            }
        }
    }
}

/// Sutherland–Hodgman clip against an axis-aligned window.
///
/// Winding numbers are preserved for every point inside the window, so the
/// even-odd fill is unchanged there; the edges the clip adds run along the
/// window boundary.
fn clip_polygon(polygon: &[Point], window: Rect) -> Vec<PathPoint> {
    let mut current: Vec<PathPoint> = polygon.iter().map(|p| PathPoint::new(p.x, p.y)).collect();

    for boundary in [
        Boundary::Left(window.x0),
        Boundary::Right(window.x1),
        Boundary::Top(window.y0),
        Boundary::Bottom(window.y1),
    ] {
        if current.len() < 3 {
            return Vec::new();
        }
        let input = std::mem::take(&mut current);
        let mut prev = input[input.len() - 1];
        for &p in &input {
            match (boundary.contains(prev), boundary.contains(p)) {
                (true, true) => current.push(p),
                (true, false) => current.push(boundary.intersect(prev, p)),
                (false, true) => {
                    current.push(boundary.intersect(prev, p));
                    current.push(p);
                }
                (false, false) => {}
            }
            prev = p;
        }
    }
    current
}

fn to_color(c: Rgba<u8>) -> Color {
    let [r, g, b, a] = c.0;
    Color::from_rgba8(r, g, b, a)
}

/// The renderer produces premultiplied RGBA8; layers are stored straight.
fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u32;
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u32 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}
