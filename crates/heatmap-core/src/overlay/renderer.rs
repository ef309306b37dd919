use image::{Rgba, RgbaImage};
use rayon::prelude::*;
use tracing::debug;

use crate::color::occupancy_to_color;
use crate::consts::PARALLEL_ROOM_THRESHOLD;
use crate::error::Result;
use crate::room::{Point, RoomSnapshot};
use crate::view::{transform_polygon, DisplayGeometry};

use super::raster::rasterize_polygon;

/// Outline drawn around every room.
pub const OUTLINE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// One room's translucent overlay for the current hour.
///
/// `image` covers the whole display and is anchored at the display origin;
/// everything outside the room polygon is fully transparent.
#[derive(Clone, Debug)]
pub struct OverlayLayer {
    /// Position of the source record in the dataset.
    pub room_index: usize,
    pub color: Rgba<u8>,
    /// Polygon in display space.
    pub polygon: Vec<Point>,
    pub image: RgbaImage,
}

/// Build one overlay layer per room recorded at `hour`, in dataset order.
///
/// Rooms at other hours are skipped; an hour without rooms yields an empty
/// vector. Fails only if the display is too large to rasterise.
pub fn render_hour(
    rooms: &[RoomSnapshot],
    hour: u8,
    geometry: &DisplayGeometry,
    scale: f64,
) -> Result<Vec<OverlayLayer>> {
    let matching: Vec<(usize, &RoomSnapshot)> = rooms
        .iter()
        .enumerate()
        .filter(|(_, room)| room.hour == hour)
        .collect();

    debug!(hour, rooms = matching.len(), scale, "Rendering overlays");

    if matching.len() >= PARALLEL_ROOM_THRESHOLD {
        matching
            .par_iter()
            .map(|&(index, room)| render_layer(index, room, geometry, scale))
            .collect()
    } else {
        matching
            .iter()
            .map(|&(index, room)| render_layer(index, room, geometry, scale))
            .collect()
    }
}

fn render_layer(
    room_index: usize,
    room: &RoomSnapshot,
    geometry: &DisplayGeometry,
    scale: f64,
) -> Result<OverlayLayer> {
    let color = occupancy_to_color(room.occupancy);
    let polygon = transform_polygon(&room.polygon, scale);
    let image = rasterize_polygon(
        geometry.display_width,
        geometry.display_height,
        &polygon,
        color,
        OUTLINE_COLOR,
    )?;

    Ok(OverlayLayer {
        room_index,
        color,
        polygon,
        image,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::compute_geometry;

    fn room(hour: u8, occupancy: f64, offset: f64) -> RoomSnapshot {
        RoomSnapshot::new(
            hour,
            occupancy,
            vec![
                Point::new(offset, offset),
                Point::new(offset + 10.0, offset),
                Point::new(offset + 10.0, offset + 10.0),
                Point::new(offset, offset + 10.0),
            ],
        )
    }

    fn geometry() -> DisplayGeometry {
        compute_geometry(100, 50, 200, 80, 1.0).unwrap()
    }

    #[test]
    fn filters_by_hour_in_dataset_order() {
        let rooms = vec![room(1, 0.0, 0.0), room(2, 5.0, 0.0), room(1, 10.0, 20.0)];
        let layers = render_hour(&rooms, 1, &geometry(), 1.0).unwrap();
        let indices: Vec<usize> = layers.iter().map(|l| l.room_index).collect();
        assert_eq!(indices, vec![0, 2]);
        assert_eq!(layers[1].color, Rgba([255, 0, 0, 128]));
    }

    #[test]
    fn empty_hour_renders_nothing() {
        let rooms = vec![room(1, 0.0, 0.0)];
        assert!(render_hour(&rooms, 7, &geometry(), 1.0).unwrap().is_empty());
        assert!(render_hour(&[], 0, &geometry(), 1.0).unwrap().is_empty());
    }

    #[test]
    fn layer_covers_display_and_is_transparent_outside() {
        let g = geometry();
        let layers = render_hour(&[room(0, 0.0, 5.0)], 0, &g, 1.0).unwrap();
        let img = &layers[0].image;
        assert_eq!(img.dimensions(), g.display_size());
        let inside = img.get_pixel(10, 10).0;
        assert_eq!(inside[3], 128);
        assert!(inside[0] <= 2 && inside[1] >= 253, "{inside:?}");
        assert!(img.get_pixel(10, 5).0[3] > 128);
        assert_eq!(img.get_pixel(40, 100).0[3], 0);
    }

    #[test]
    fn polygon_follows_scale() {
        let g = compute_geometry(100, 50, 200, 80, 1.44).unwrap();
        let layers = render_hour(&[room(0, 3.0, 10.0)], 0, &g, 1.44).unwrap();
        let first = layers[0].polygon[0];
        assert!((first.x - 14.4).abs() < 1e-9 && (first.y - 14.4).abs() < 1e-9);
        assert_eq!(layers[0].image.dimensions(), g.display_size());
    }

    #[test]
    fn parallel_path_preserves_order() {
        let rooms: Vec<RoomSnapshot> = (0..PARALLEL_ROOM_THRESHOLD * 3)
            .map(|i| room((i % 2) as u8, i as f64, 0.0))
            .collect();
        let layers = render_hour(&rooms, 0, &geometry(), 1.0).unwrap();
        let indices: Vec<usize> = layers.iter().map(|l| l.room_index).collect();
        let expected: Vec<usize> = (0..rooms.len()).filter(|i| i % 2 == 0).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn far_vertex_does_not_stall_rendering() {
        let g = geometry();
        let far = RoomSnapshot::new(
            0,
            10.0,
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0e19, 0.0),
                Point::new(0.0, 10.0),
            ],
        );
        let layers = render_hour(&[far], 0, &g, 1.0).unwrap();
        assert_eq!(layers.len(), 1);
        assert!(layers[0].image.get_pixel(40, 5).0[3] >= 128);
        assert_eq!(layers[0].image.get_pixel(40, 100).0[3], 0);
    }
}
