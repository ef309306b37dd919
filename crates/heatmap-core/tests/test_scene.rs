mod common;

use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use image::{Rgba, RgbaImage};

use heatmap_core::consts::MAX_SCALE;
use heatmap_core::error::HeatmapError;
use heatmap_core::room::{Dataset, Point, RoomSnapshot};
use heatmap_core::scene::{SceneCommand, SceneController, SceneOptions};

use common::{controller, day_dataset, floor_plan, small_options, Event, RecordingSurface};

fn expected_rooms(scene: &SceneController, hour: u8) -> Vec<usize> {
    scene.dataset().rooms_at(hour).map(|(i, _)| i).collect()
}

#[test]
fn initial_scene_shows_initial_hour() {
    let scene = controller();
    assert_eq!(scene.hour(), 0);
    assert_eq!(scene.scale(), 1.0);
    assert_eq!(scene.geometry().display_size(), (80, 160));
    assert_eq!(scene.base().dimensions(), (80, 160));
    let shown: Vec<usize> = scene.overlays().iter().map(|l| l.room_index).collect();
    assert_eq!(shown, vec![0, 1, 2]);
}

#[test]
fn present_emits_full_frame() {
    let scene = controller();
    let mut surface = RecordingSurface::default();
    scene.present(&mut surface);
    assert_eq!(
        surface.events,
        vec![
            Event::Discard,
            Event::Base {
                size: (80, 160),
                rescaled: true
            },
            Event::Overlay { room_index: 0 },
            Event::Overlay { room_index: 1 },
            Event::Overlay { room_index: 2 },
        ]
    );
}

#[test]
fn set_hour_replaces_every_overlay() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    scene.present(&mut surface);

    for hour in [5u8, 6, 5, 23, 0] {
        scene.set_hour(hour, &mut surface).unwrap();
        let expected = expected_rooms(&scene, hour);
        assert_eq!(surface.visible, expected, "hour {hour}");
        let shown: Vec<usize> = scene.overlays().iter().map(|l| l.room_index).collect();
        assert_eq!(shown, expected, "hour {hour}");
        assert!(scene
            .overlays()
            .iter()
            .all(|l| scene.dataset().rooms()[l.room_index].hour == hour));
    }
    assert_eq!(expected_rooms(&scene, 5).len(), 4);
}

#[test]
fn set_hour_does_not_rescale_base() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    scene.set_hour(3, &mut surface).unwrap();
    assert_eq!(surface.base_draws(), 1);
    assert_eq!(surface.rescales(), 0);
    assert_eq!(surface.events[0], Event::Discard);
}

#[test]
fn set_hour_out_of_range_is_rejected() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    let err = scene.set_hour(24, &mut surface).unwrap_err();
    assert!(matches!(err, HeatmapError::HourOutOfRange { hour: 24 }));
    assert_eq!(scene.hour(), 0);
    assert!(surface.events.is_empty());
}

#[test]
fn zoom_out_at_minimum_is_noop() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    assert!(!scene.zoom_out(&mut surface).unwrap());
    assert_eq!(scene.scale(), 1.0);
    assert!(surface.events.is_empty());
}

#[test]
fn zoom_rescales_base_and_overlays() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    assert!(scene.zoom_in(&mut surface).unwrap());
    assert_relative_eq!(scene.scale(), 1.2, epsilon = 1e-12);
    // 160 * 1.2 = 192, 80 * 1.2 = 96, swapped by the rotation
    assert_eq!(scene.geometry().display_size(), (96, 192));
    assert_eq!(scene.base().dimensions(), (96, 192));
    assert!(scene
        .overlays()
        .iter()
        .all(|l| l.image.dimensions() == (96, 192)));
    assert_relative_eq!(scene.overlays()[0].polygon[0].x, 6.0, epsilon = 1e-9);
    assert_eq!(surface.rescales(), 1);
}

#[test]
fn zoom_in_then_out_restores_scale_and_geometry() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    scene.zoom_in(&mut surface).unwrap();
    scene.zoom_in(&mut surface).unwrap();
    let scale = scene.scale();
    let geometry = *scene.geometry();

    for _ in 0..50 {
        scene.zoom_in(&mut surface).unwrap();
        scene.zoom_out(&mut surface).unwrap();
    }
    assert_eq!(scene.scale(), scale);
    assert_eq!(*scene.geometry(), geometry);
}

#[test]
fn repeated_zoom_in_never_exceeds_max() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    let mut redraws = 0;
    for _ in 0..20 {
        if scene.zoom_in(&mut surface).unwrap() {
            redraws += 1;
        }
        assert!(scene.scale() <= MAX_SCALE);
    }
    assert_eq!(redraws, 6);
    assert_relative_eq!(scene.scale(), 2.985984, epsilon = 1e-9);
    for _ in 0..20 {
        scene.zoom_out(&mut surface).unwrap();
    }
    assert_eq!(scene.scale(), 1.0);
}

#[test]
fn commands_dispatch() {
    let mut scene = controller();
    let mut surface = RecordingSurface::default();
    let now = Instant::now();
    scene.apply(SceneCommand::ZoomIn, now, &mut surface).unwrap();
    scene.apply(SceneCommand::SetHour(5), now, &mut surface).unwrap();
    assert_eq!(scene.hour(), 5);
    assert_eq!(scene.view().zoom_level(), 1);
    assert_eq!(surface.visible.len(), 4);
    assert!(scene
        .apply(SceneCommand::SetHour(30), now, &mut surface)
        .is_err());
    scene.apply(SceneCommand::ZoomOut, now, &mut surface).unwrap();
    assert_eq!(scene.scale(), 1.0);
}

#[test]
fn invalid_initial_hour_rejected() {
    let options = SceneOptions {
        initial_hour: 24,
        ..small_options()
    };
    let result = SceneController::new(floor_plan(), day_dataset(), options);
    assert!(matches!(result, Err(HeatmapError::HourOutOfRange { .. })));
}

#[test]
fn empty_hour_shows_no_overlays() {
    let dataset =
        heatmap_core::room::Dataset::new(vec![common::square(3, 1.0, 0.0, 0.0)]).unwrap();
    let mut scene = SceneController::new(floor_plan(), dataset, small_options()).unwrap();
    assert!(scene.overlays().is_empty());
    let mut surface = RecordingSurface::default();
    scene.set_hour(3, &mut surface).unwrap();
    assert_eq!(surface.visible, vec![0]);
    scene.set_hour(4, &mut surface).unwrap();
    assert!(surface.visible.is_empty());
    assert!(scene.overlays().is_empty());
}

#[test]
fn zoom_that_cannot_be_displayed_keeps_previous_scene() {
    // 1x1000 plan in a 60x60000 box: width fitted to 60, height to 60000.
    // One zoom step would need a 72000-pixel display.
    let plan = RgbaImage::from_pixel(1, 1000, Rgba([255, 255, 255, 255]));
    let dataset = Dataset::new(vec![common::square(3, 1.0, 0.0, 0.0)]).unwrap();
    let options = SceneOptions {
        max_width: 60,
        max_height: 60_000,
        ..SceneOptions::default()
    };
    let mut scene = SceneController::new(plan, dataset, options).unwrap();
    let geometry = *scene.geometry();
    assert_eq!(geometry.display_size(), (60_000, 60));

    let mut surface = RecordingSurface::default();
    let err = scene.zoom_in(&mut surface).unwrap_err();
    assert!(matches!(err, HeatmapError::InvalidDimensions { .. }));
    assert_eq!(scene.scale(), 1.0);
    assert_eq!(*scene.geometry(), geometry);
    assert_eq!(scene.base().dimensions(), (60_000, 60));
    assert!(surface.events.is_empty());
}

#[test]
fn far_off_display_vertex_renders_promptly() {
    let far = RoomSnapshot::new(
        0,
        5.0,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1.0e19, 0.0),
            Point::new(0.0, 10.0),
        ],
    );
    let dataset = Dataset::new(vec![far, common::square(1, 2.0, 5.0, 5.0)]).unwrap();

    let started = Instant::now();
    let mut scene = SceneController::new(floor_plan(), dataset, small_options()).unwrap();
    let mut surface = RecordingSurface::default();
    scene.zoom_in(&mut surface).unwrap();
    scene.set_hour(1, &mut surface).unwrap();
    scene.set_hour(0, &mut surface).unwrap();
    assert!(started.elapsed() < Duration::from_secs(5));

    assert_eq!(surface.visible, vec![0]);
    let layer = &scene.overlays()[0];
    assert_eq!(layer.image.dimensions(), scene.geometry().display_size());
    assert!(layer.image.get_pixel(50, 5).0[3] > 0);
}
