//! Per-item geometry snapshot.

use pickersheet_ui_graphics::{Point, Rect};

/// Geometry and visual state of one tile for one layout pass.
///
/// A plain value: the engine hands out copies, so a retained snapshot never
/// aliases the live one. Equality is structural and is used to skip tiles
/// whose geometry did not change between passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutAttributes {
    /// Position of the tile in the strip.
    pub index: usize,
    /// Frame in content coordinates.
    pub frame: Rect,
    /// Opacity in [0, 1].
    pub alpha: f32,
    /// Uniform scale around the frame center. 1.0 is identity.
    pub scale: f32,
    /// Intersection of `frame` with the viewport. Empty when off screen.
    pub visible_area: Rect,
    /// Center of the floating selection marker.
    pub marker_center: Point,
}

impl LayoutAttributes {
    pub fn new(index: usize, frame: Rect) -> Self {
        Self {
            index,
            frame,
            alpha: 1.0,
            scale: 1.0,
            visible_area: Rect::ZERO,
            marker_center: Point::ZERO,
        }
    }

    /// True when some part of the tile lies inside the viewport.
    pub fn is_visible(&self) -> bool {
        !self.visible_area.is_empty()
    }

    /// True when the tile is drawn at all.
    pub fn is_hidden(&self) -> bool {
        self.alpha <= 0.0
    }
}
