#![allow(dead_code)]

use image::{Rgba, RgbaImage};

use heatmap_core::room::{Dataset, Point, RoomSnapshot};
use heatmap_core::scene::{
    BaseDraw, OverlayDraw, PresentationSurface, SceneController, SceneOptions,
};

/// Plain white floor plan, 100x50. With the 200x80 bounding box used below
/// this resizes to 160x80 and displays as 80x160.
pub fn floor_plan() -> RgbaImage {
    RgbaImage::from_pixel(100, 50, Rgba([255, 255, 255, 255]))
}

pub fn small_options() -> SceneOptions {
    SceneOptions {
        max_width: 200,
        max_height: 80,
        ..SceneOptions::default()
    }
}

pub fn square(hour: u8, occupancy: f64, x: f64, y: f64) -> RoomSnapshot {
    RoomSnapshot::new(
        hour,
        occupancy,
        vec![
            Point::new(x, y),
            Point::new(x + 10.0, y),
            Point::new(x + 10.0, y + 10.0),
            Point::new(x, y + 10.0),
        ],
    )
}

/// Three rooms, each recorded every hour with occupancy `hour % 12`, plus an
/// extra room that only exists at hour 5.
pub fn day_dataset() -> Dataset {
    let mut rooms = Vec::new();
    for hour in 0..24u8 {
        for (i, x) in [5.0, 25.0, 45.0].into_iter().enumerate() {
            rooms.push(square(hour, (hour % 12) as f64 + i as f64, x, 10.0));
        }
    }
    rooms.push(square(5, 9.0, 5.0, 60.0));
    Dataset::new(rooms).expect("valid dataset")
}

pub fn controller() -> SceneController {
    SceneController::new(floor_plan(), day_dataset(), small_options()).expect("scene")
}

#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    Base { size: (u32, u32), rescaled: bool },
    Discard,
    Overlay { room_index: usize },
}

/// Surface that logs every instruction and tracks which rooms are on screen.
#[derive(Default)]
pub struct RecordingSurface {
    pub events: Vec<Event>,
    pub visible: Vec<usize>,
}

impl RecordingSurface {
    pub fn base_draws(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Base { .. }))
            .count()
    }

    pub fn rescales(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Base { rescaled: true, .. }))
            .count()
    }
}

impl PresentationSurface for RecordingSurface {
    fn draw_base(&mut self, base: &BaseDraw<'_>) {
        self.events.push(Event::Base {
            size: base.image.dimensions(),
            rescaled: base.rescaled,
        });
    }

    fn discard_overlays(&mut self) {
        self.events.push(Event::Discard);
        self.visible.clear();
    }

    fn draw_overlay(&mut self, overlay: &OverlayDraw<'_>) {
        assert_eq!(overlay.anchor, (0, 0));
        self.events.push(Event::Overlay {
            room_index: overlay.layer.room_index,
        });
        self.visible.push(overlay.layer.room_index);
    }
}
