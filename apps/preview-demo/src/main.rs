//! Drives the preview strip through a typical picker session and prints the
//! geometry a renderer would receive.
//!
//! Run with `RUST_LOG=debug` to see every relayout.

use anyhow::{ensure, Context, Result};
use pickersheet_animation::AnimationSpec;
use pickersheet_layout::{
    FixedViewport, LayoutAttributes, LayoutMode, Point, PreviewLayoutConfig, PreviewLayoutEngine,
    Rect, Size,
};
use rustc_hash::FxHashSet;

const SHEET_WIDTH: f32 = 390.0;
const COMPACT_HEIGHT: f32 = 96.0;
const ENLARGED_HEIGHT: f32 = 220.0;
const FRAME_MILLIS: u64 = 50;

/// Width over height of each photo in the library.
const ASPECTS: &[f32] = &[1.0, 0.75, 1.5, 1.33, 0.56, 1.0, 1.78];

fn thumbnails(height: f32) -> Vec<Size> {
    ASPECTS
        .iter()
        .map(|aspect| Size::new(aspect * height, height))
        .collect()
}

fn print_strip(label: &str, tiles: &[LayoutAttributes]) {
    println!("-- {label}");
    for tile in tiles {
        println!(
            "  #{:<2} x={:>7.1} y={:>7.1} w={:>6.1} h={:>6.1} alpha={:.2} scale={:.2}",
            tile.index,
            tile.frame.x,
            tile.frame.y,
            tile.frame.width,
            tile.frame.height,
            tile.alpha,
            tile.scale
        );
    }
}

fn main() -> Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Picker sheet preview strip ===");

    let mut engine = PreviewLayoutEngine::new(PreviewLayoutConfig {
        line_spacing: 6.0,
        ..Default::default()
    });

    // Compact sheet: the camera tile is tucked away to the left.
    let compact = FixedViewport::new(Rect::new(0.0, 0.0, SHEET_WIDTH, COMPACT_HEIGHT));
    engine.relayout_with(&thumbnails(COMPACT_HEIGHT), &compact, LayoutMode::HidingFirstItem);
    print_strip("compact", engine.state().current_attributes());

    // User taps photo 3: center it and show its checkmark.
    let mut selection = FxHashSet::default();
    selection.insert(3);
    let offset = engine.scroll_target(Point::ZERO, Some(3), SHEET_WIDTH);
    engine.update_viewport(Rect::new(offset.x, 0.0, SHEET_WIDTH, COMPACT_HEIGHT));
    for (index, center) in engine.markers_for(&selection) {
        println!("marker for #{index} at ({:.1}, {:.1})", center.x, center.y);
    }
    ensure!(
        !engine.markers_for(&selection).is_empty(),
        "selected photo scrolled out of view"
    );

    // Enlarge: tiles grow and a new capture is inserted at the front.
    let mut enlarged = thumbnails(ENLARGED_HEIGHT);
    enlarged.insert(0, Size::new(ENLARGED_HEIGHT * 0.75, ENLARGED_HEIGHT));
    let enlarged_viewport = Rect::new(0.0, 0.0, SHEET_WIDTH, ENLARGED_HEIGHT);

    let spec = AnimationSpec::default();
    {
        let mut batch = engine.begin_transition();
        batch.insert([0]);
        let item_count = isize::try_from(enlarged.len()).context("photo count overflow")?;
        batch.relayout(
            item_count,
            |index| enlarged[index],
            enlarged_viewport,
            6.0,
            LayoutMode::Normal,
        )?;

        let transitions = batch.transitions();
        println!("animating {} tiles over {}ms", transitions.len(), spec.duration_millis);
        let mut elapsed = 0;
        while !spec.is_finished(elapsed) {
            let fraction = spec.linear_progress(elapsed);
            let frame: Vec<LayoutAttributes> = transitions
                .iter()
                .map(|transition| transition.sample(fraction, spec.easing))
                .collect();
            log::debug!("t={elapsed}ms {} tiles sampled", frame.len());
            elapsed += FRAME_MILLIS;
        }
        batch.commit();
    }
    print_strip("enlarged", engine.state().current_attributes());

    // Selection shifted by one after the insert.
    let recentered = engine.scroll_target(Point::ZERO, Some(4), SHEET_WIDTH);
    println!("recentered offset: ({:.1}, {:.1})", recentered.x, recentered.y);
    println!(
        "content extent: {:.1} x {:.1}",
        engine.content_extent().width,
        engine.content_extent().height
    );
    Ok(())
}
