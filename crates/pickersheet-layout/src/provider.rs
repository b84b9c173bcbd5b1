//! Collaborator interfaces consumed by the layout engine.
//!
//! The engine never reaches into the hosting view for item counts or sizes.
//! Everything it needs for a pass arrives through these traits.

use pickersheet_ui_graphics::{EdgeInsets, Rect, Size};
use rustc_hash::FxHashSet;

/// Supplies item count and per-item content size for one relayout pass.
///
/// Implementations must be deterministic for the duration of a pass: the
/// count must not change while [`size_of`](Self::size_of) is being called.
pub trait SizeProvider {
    /// The total number of tiles in the strip.
    fn item_count(&self) -> usize;

    /// Content size of the tile at `index`.
    ///
    /// Negative or non-finite dimensions are clamped to zero by the engine.
    fn size_of(&self, index: usize) -> Size;
}

impl SizeProvider for [Size] {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn size_of(&self, index: usize) -> Size {
        self[index]
    }
}

impl SizeProvider for Vec<Size> {
    fn item_count(&self) -> usize {
        self.len()
    }

    fn size_of(&self, index: usize) -> Size {
        self[index]
    }
}

/// Adapts a count and a sizing closure into a [`SizeProvider`].
pub struct FnSizeProvider<F> {
    count: usize,
    size_fn: F,
}

impl<F> FnSizeProvider<F>
where
    F: Fn(usize) -> Size,
{
    pub fn new(count: usize, size_fn: F) -> Self {
        Self { count, size_fn }
    }
}

impl<F> SizeProvider for FnSizeProvider<F>
where
    F: Fn(usize) -> Size,
{
    fn item_count(&self) -> usize {
        self.count
    }

    fn size_of(&self, index: usize) -> Size {
        (self.size_fn)(index)
    }
}

/// The scroll container hosting the strip. Read at the start of each pass.
pub trait ViewportSource {
    /// The visible rectangle in content coordinates.
    fn current_viewport(&self) -> Rect;

    /// Insets of the scroll region, or `None` to use the engine's configured
    /// insets.
    fn content_inset(&self) -> Option<EdgeInsets> {
        None
    }
}

/// A viewport that does not move. Handy for headless hosts and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FixedViewport {
    pub viewport: Rect,
    pub inset: Option<EdgeInsets>,
}

impl FixedViewport {
    pub fn new(viewport: Rect) -> Self {
        Self {
            viewport,
            inset: None,
        }
    }

    pub fn with_inset(mut self, inset: EdgeInsets) -> Self {
        self.inset = Some(inset);
        self
    }
}

impl ViewportSource for FixedViewport {
    fn current_viewport(&self) -> Rect {
        self.viewport
    }

    fn content_inset(&self) -> Option<EdgeInsets> {
        self.inset
    }
}

/// Which tiles carry a selection marker.
///
/// The engine does not read selection while laying out; the rendering host
/// uses it to decide which marker centers to draw.
pub trait SelectionState {
    fn is_selected(&self, index: usize) -> bool;
}

impl SelectionState for FxHashSet<usize> {
    fn is_selected(&self, index: usize) -> bool {
        self.contains(&index)
    }
}

impl SelectionState for [usize] {
    fn is_selected(&self, index: usize) -> bool {
        self.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fn_provider_reports_count_and_sizes() {
        let provider = FnSizeProvider::new(3, |index| Size::new(10.0 * (index + 1) as f32, 5.0));
        assert_eq!(provider.item_count(), 3);
        assert_eq!(provider.size_of(2), Size::new(30.0, 5.0));
    }

    #[test]
    fn slice_provider_matches_slice() {
        let sizes = vec![Size::new(1.0, 1.0), Size::new(2.0, 2.0)];
        assert_eq!(sizes.item_count(), 2);
        assert_eq!(sizes.as_slice().size_of(1), Size::new(2.0, 2.0));
    }

    #[test]
    fn fixed_viewport_defers_insets_until_set() {
        let viewport = FixedViewport::new(Rect::new(0.0, 0.0, 300.0, 140.0));
        assert_eq!(viewport.content_inset(), None);

        let inset = EdgeInsets::vertical(10.0);
        assert_eq!(viewport.with_inset(inset).content_inset(), Some(inset));
    }

    #[test]
    fn hash_set_selection() {
        let mut selected = FxHashSet::default();
        selected.insert(4);
        assert!(selected.is_selected(4));
        assert!(!selected.is_selected(5));
    }
}
