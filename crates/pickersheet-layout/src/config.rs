//! Static configuration for the preview strip.

use pickersheet_ui_graphics::{EdgeInsets, Size};

/// Default gap between neighbouring tiles.
pub const DEFAULT_LINE_SPACING: f32 = 8.0;

/// Default diameter of the selection checkmark.
pub const DEFAULT_MARKER_SIZE: Size = Size::new(22.0, 22.0);

/// Default distance between the checkmark and the tile edges.
pub const DEFAULT_MARKER_INSET: f32 = 6.0;

/// Scale applied to tiles dropping in or out during a batch update.
pub const DEFAULT_TRANSITION_SCALE: f32 = 0.1;

/// Configuration for [`PreviewLayoutEngine`](crate::PreviewLayoutEngine).
///
/// Built with struct update syntax:
///
/// ```
/// use pickersheet_layout::PreviewLayoutConfig;
///
/// let config = PreviewLayoutConfig {
///     line_spacing: 4.0,
///     ..Default::default()
/// };
/// assert_eq!(config.marker_inset, 6.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PreviewLayoutConfig {
    /// Gap between neighbouring tiles.
    pub line_spacing: f32,
    /// Insets of the scroll region. Vertical insets shrink the tile height;
    /// the top inset pins the y of resolved scroll targets.
    pub content_inset: EdgeInsets,
    /// Size of the floating selection marker.
    pub marker_size: Size,
    /// Margin between the marker and the tile's bottom and side edges.
    pub marker_inset: f32,
    /// Scale of synthetic entry and exit snapshots.
    pub transition_scale: f32,
}

impl Default for PreviewLayoutConfig {
    fn default() -> Self {
        Self {
            line_spacing: DEFAULT_LINE_SPACING,
            content_inset: EdgeInsets::default(),
            marker_size: DEFAULT_MARKER_SIZE,
            marker_inset: DEFAULT_MARKER_INSET,
            transition_scale: DEFAULT_TRANSITION_SCALE,
        }
    }
}
