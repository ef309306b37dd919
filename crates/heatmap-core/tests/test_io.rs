mod common;

use std::io::Write;

use image::Rgba;

use heatmap_core::compose::{flatten, FrameCompositor};
use heatmap_core::error::HeatmapError;
use heatmap_core::io::dataset::load_dataset;
use heatmap_core::io::image_io::{load_floor_plan, save_png};
use heatmap_core::scene::SceneController;

use common::{day_dataset, floor_plan, small_options};

#[test]
fn floor_plan_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.png");
    save_png(&floor_plan(), &path).unwrap();

    let loaded = load_floor_plan(&path).unwrap();
    assert_eq!(loaded.dimensions(), (100, 50));
    assert_eq!(*loaded.get_pixel(10, 10), Rgba([255, 255, 255, 255]));
}

#[test]
fn missing_image_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = SceneController::open(&dir.path().join("nope.png"), day_dataset(), small_options());
    assert!(result.is_err());
}

#[test]
fn undecodable_image_is_reported() {
    let mut f = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
    f.write_all(b"not a png").unwrap();
    f.flush().unwrap();
    let err = load_floor_plan(f.path()).unwrap_err();
    assert!(matches!(err, HeatmapError::ImageError(_)));
}

#[test]
fn dataset_file_loads() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(
        br#"[
            {"hour": 0, "people": 0, "coords": [10, 10, 30, 10, 30, 30, 10, 30]},
            {"hour": 0, "people": 12, "coords": [[40, 10], [60, 10], [60, 30]]},
            {"hour": 1, "people": 4, "coords": [10, 10, 30, 10, 30, 30, 10, 30]}
        ]"#,
    )
    .unwrap();
    f.flush().unwrap();

    let ds = load_dataset(f.path()).unwrap();
    assert_eq!(ds.len(), 3);
    assert_eq!(ds.rooms_at(0).count(), 2);
}

#[test]
fn compositor_matches_flatten() {
    let mut scene = SceneController::new(floor_plan(), day_dataset(), small_options()).unwrap();
    let mut compositor = FrameCompositor::new();
    scene.set_hour(11, &mut compositor).unwrap();

    let frame = compositor.frame().expect("frame").clone();
    assert_eq!(frame, flatten(scene.base(), scene.overlays()));
    assert_eq!(frame.dimensions(), (80, 160));

    // Room 0 at hour 11 has 11 people: red over the white plan.
    let px = frame.get_pixel(10, 15).0;
    assert_eq!(px[0], 255);
    assert!(px[1] < 200 && px[2] < 200);

    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("hour11.png");
    save_png(&frame, &out).unwrap();
    assert!(out.exists());
}
