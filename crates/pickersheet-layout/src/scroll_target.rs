//! Scroll target resolution for the preview strip.
//!
//! Turns "center this tile" into a content offset that stays inside the
//! scrollable region.

use pickersheet_ui_graphics::{Point, Size};

use crate::attributes::LayoutAttributes;

/// Resolves the content offset that centers a tile in the viewport.
///
/// The accepted range is `[-line_spacing, extent - (viewport - line_spacing)]`,
/// one inter-tile gap of overscroll on either side, matching the inset-aware
/// scroll region of the host.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollTargetResolver {
    top_inset: f32,
}

impl ScrollTargetResolver {
    /// Creates a resolver that pins the vertical offset to `-top_inset`.
    pub fn new(top_inset: f32) -> Self {
        Self { top_inset }
    }

    /// Returns the offset that centers `target_index`, or `proposed_offset`
    /// when there is no target.
    ///
    /// An index outside `attributes` is treated as no target: a stale
    /// selection left over from a removal must not break scrolling.
    pub fn resolve(
        &self,
        proposed_offset: Point,
        target_index: Option<usize>,
        attributes: &[LayoutAttributes],
        content_extent: Size,
        viewport_width: f32,
        line_spacing: f32,
    ) -> Point {
        let Some(item) = target_index.and_then(|index| attributes.get(index)) else {
            if let Some(index) = target_index {
                log::debug!(
                    "scroll target {index} outside {} items, keeping proposed offset",
                    attributes.len()
                );
            }
            return proposed_offset;
        };

        let frame = item.frame;
        let desired_x = frame.min_x() - (viewport_width - frame.width) / 2.0;
        let upper = content_extent.width - (viewport_width - line_spacing);
        let final_x = upper.min((-line_spacing).max(desired_x));

        Point::new(final_x, -self.top_inset)
    }
}
