//! Floating selection marker placement.
//!
//! The checkmark hugs the trailing visible edge of a tile while the strip
//! scrolls, and stays inside the tile's own frame. It only depends on the
//! tile frame and the visible part of it, so it is recomputed on every scroll
//! tick without a relayout.

use pickersheet_ui_graphics::{Point, Rect, Size};

use crate::attributes::LayoutAttributes;

/// Computes the marker center for a tile.
///
/// `visible_area` is the part of `frame` currently on screen, in the same
/// coordinate space as `frame`. The horizontal position follows the right edge
/// of the visible area, bounded to `[frame.min_x, frame.max_x]` first and then
/// kept at least half a marker plus `inset` away from the left edge. The
/// vertical position is anchored to the bottom of the frame.
pub fn marker_center_for(
    frame: Rect,
    visible_area: Rect,
    marker_size: Size,
    inset: f32,
) -> Point {
    let half_width = marker_size.width / 2.0;
    let y = frame.max_y() - marker_size.height / 2.0 - inset;

    let area_max_x = if visible_area.is_empty() {
        0.0
    } else {
        (visible_area.max_x() - frame.min_x()).clamp(0.0, frame.width.max(0.0))
    };

    let min_x = frame.min_x() + half_width + inset;
    let desired_x = frame.min_x() + area_max_x - half_width - inset;

    Point::new(min_x.max(desired_x), y)
}

/// Keeps marker centers in sync with the viewport between relayouts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectionMarkerTracker {
    marker_size: Size,
    inset: f32,
}

impl SelectionMarkerTracker {
    pub fn new(marker_size: Size, inset: f32) -> Self {
        Self { marker_size, inset }
    }

    pub fn marker_size(&self) -> Size {
        self.marker_size
    }

    pub fn inset(&self) -> f32 {
        self.inset
    }

    #[inline]
    pub fn marker_center_for(&self, frame: Rect, visible_area: Rect) -> Point {
        marker_center_for(frame, visible_area, self.marker_size, self.inset)
    }

    /// Re-derives `visible_area` and `marker_center` of `attributes` for a new
    /// viewport. The frame is left alone.
    pub fn track(&self, attributes: &mut LayoutAttributes, viewport: Rect) {
        attributes.visible_area = viewport
            .intersection(&attributes.frame)
            .unwrap_or(Rect::ZERO);
        attributes.marker_center =
            self.marker_center_for(attributes.frame, attributes.visible_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKER: Size = Size::new(22.0, 22.0);

    #[test]
    fn follows_visible_edge_of_partially_visible_tile() {
        let frame = Rect::new(0.0, 0.0, 100.0, 100.0);
        let visible = Rect::new(0.0, 0.0, 50.0, 100.0);
        assert_eq!(
            marker_center_for(frame, visible, MARKER, 8.0),
            Point::new(31.0, 81.0)
        );
    }

    #[test]
    fn sits_at_right_edge_when_fully_visible() {
        let frame = Rect::new(200.0, 0.0, 100.0, 100.0);
        let visible = frame;
        let center = marker_center_for(frame, visible, MARKER, 8.0);
        assert_eq!(center.x, frame.max_x() - 11.0 - 8.0);
    }

    #[test]
    fn clamps_to_left_edge_when_barely_visible() {
        let frame = Rect::new(200.0, 0.0, 100.0, 100.0);
        let visible = Rect::new(200.0, 0.0, 5.0, 100.0);
        let center = marker_center_for(frame, visible, MARKER, 8.0);
        assert_eq!(center.x, 200.0 + 11.0 + 8.0);
    }

    #[test]
    fn visible_area_left_of_frame_parks_marker_at_left() {
        let frame = Rect::new(200.0, 0.0, 100.0, 100.0);
        let visible = Rect::new(0.0, 0.0, 50.0, 100.0);
        assert_eq!(
            marker_center_for(frame, visible, MARKER, 8.0),
            Point::new(219.0, 81.0)
        );
    }

    #[test]
    fn visible_area_past_right_edge_stays_inside_frame() {
        let frame = Rect::new(200.0, 0.0, 100.0, 100.0);
        let visible = Rect::new(150.0, 0.0, 300.0, 100.0);
        let center = marker_center_for(frame, visible, MARKER, 8.0);
        assert_eq!(center, Point::new(281.0, 81.0));
        assert_eq!(center.x, marker_center_for(frame, frame, MARKER, 8.0).x);
    }

    #[test]
    fn empty_visible_area_parks_marker_at_left() {
        let frame = Rect::new(40.0, 0.0, 100.0, 60.0);
        let center = marker_center_for(frame, Rect::ZERO, MARKER, 4.0);
        assert_eq!(center, Point::new(40.0 + 11.0 + 4.0, 60.0 - 11.0 - 4.0));
    }

    #[test]
    fn tracker_updates_visible_area_and_marker() {
        let tracker = SelectionMarkerTracker::new(MARKER, 8.0);
        let mut attributes = LayoutAttributes::new(0, Rect::new(0.0, 0.0, 100.0, 100.0));

        tracker.track(&mut attributes, Rect::new(-50.0, 0.0, 100.0, 100.0));
        assert_eq!(attributes.visible_area, Rect::new(0.0, 0.0, 50.0, 100.0));
        assert_eq!(attributes.marker_center, Point::new(31.0, 81.0));

        tracker.track(&mut attributes, Rect::new(500.0, 0.0, 100.0, 100.0));
        assert!(attributes.visible_area.is_empty());
        assert_eq!(attributes.marker_center.x, 19.0);
    }
}
