//! Preview strip layout engine.
//!
//! Packs tiles left to right with a fixed gap, one pass at a time. Each pass
//! keeps the previous pass's attributes so hosts can animate between the two,
//! and synthesizes entry and exit snapshots for tiles marked as inserting or
//! removing in the current batch update.

use std::ops::Range;

use log::{debug, trace, warn};
use pickersheet_ui_graphics::{EdgeInsets, Point, Rect, Size};
use rustc_hash::FxHashSet;

use crate::attributes::LayoutAttributes;
use crate::config::PreviewLayoutConfig;
use crate::error::LayoutError;
use crate::marker::SelectionMarkerTracker;
use crate::provider::{SelectionState, SizeProvider, ViewportSource};
use crate::scroll_target::ScrollTargetResolver;

/// How the first tile is treated during a pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    #[default]
    Normal,
    /// The first tile is laid out one slot to the left of the origin and made
    /// transparent, so the strip starts with the second tile.
    HidingFirstItem,
}

/// Everything the engine remembers between passes.
///
/// Created once with the engine and mutated in place by every relayout.
#[derive(Clone, Debug, Default)]
pub struct LayoutState {
    current_attributes: Vec<LayoutAttributes>,
    previous_attributes: Vec<LayoutAttributes>,
    content_extent: Size,
    mode: LayoutMode,
    inserting_indices: FxHashSet<usize>,
    removal_indices: FxHashSet<usize>,
    viewport: Rect,
    line_spacing: f32,
    content_inset: EdgeInsets,
}

impl LayoutState {
    pub fn current_attributes(&self) -> &[LayoutAttributes] {
        &self.current_attributes
    }

    /// Attributes of the pass before the most recent one. Empty before the
    /// second pass.
    pub fn previous_attributes(&self) -> &[LayoutAttributes] {
        &self.previous_attributes
    }

    pub fn content_extent(&self) -> Size {
        self.content_extent
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn inserting_indices(&self) -> &FxHashSet<usize> {
        &self.inserting_indices
    }

    pub fn removal_indices(&self) -> &FxHashSet<usize> {
        &self.removal_indices
    }

    pub fn viewport(&self) -> Rect {
        self.viewport
    }

    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    pub fn content_inset(&self) -> EdgeInsets {
        self.content_inset
    }
}

/// Computes tile geometry for the horizontal preview strip.
///
/// Single-threaded: every mutation goes through `&mut self`, so a pass always
/// completes before anyone can query it.
#[derive(Clone, Debug)]
pub struct PreviewLayoutEngine {
    config: PreviewLayoutConfig,
    marker: SelectionMarkerTracker,
    state: LayoutState,
}

impl Default for PreviewLayoutEngine {
    fn default() -> Self {
        Self::new(PreviewLayoutConfig::default())
    }
}

impl PreviewLayoutEngine {
    pub fn new(config: PreviewLayoutConfig) -> Self {
        Self {
            marker: SelectionMarkerTracker::new(config.marker_size, config.marker_inset),
            state: LayoutState {
                line_spacing: config.line_spacing,
                content_inset: config.content_inset,
                ..LayoutState::default()
            },
            config,
        }
    }

    pub fn config(&self) -> &PreviewLayoutConfig {
        &self.config
    }

    pub fn state(&self) -> &LayoutState {
        &self.state
    }

    pub fn marker_tracker(&self) -> &SelectionMarkerTracker {
        &self.marker
    }

    /// Runs one pass against the host's collaborators.
    ///
    /// Reads the viewport and insets once, then lays out every tile the
    /// provider reports using the configured line spacing. Insets fall back to
    /// the configured ones when the source reports none.
    pub fn relayout_with<P, V>(
        &mut self,
        provider: &P,
        viewport_source: &V,
        mode: LayoutMode,
    ) where
        P: SizeProvider + ?Sized,
        V: ViewportSource + ?Sized,
    {
        let viewport = viewport_source.current_viewport();
        let content_inset = viewport_source
            .content_inset()
            .unwrap_or(self.config.content_inset);
        let line_spacing = self.config.line_spacing;
        self.layout_pass(
            provider.item_count(),
            |index| provider.size_of(index),
            viewport,
            content_inset,
            line_spacing,
            mode,
        );
    }

    /// Recomputes every tile's attributes.
    ///
    /// `size_of` is called exactly once per index, in ascending order. Negative
    /// or non-finite sizes are clamped to zero. Tile height is the viewport
    /// height minus the configured vertical content insets.
    ///
    /// The attributes of the pass being replaced become
    /// [`previous_attributes`](LayoutState::previous_attributes). Transition
    /// marks are left untouched.
    pub fn relayout<F>(
        &mut self,
        item_count: isize,
        size_of: F,
        viewport: Rect,
        line_spacing: f32,
        mode: LayoutMode,
    ) -> Result<(), LayoutError>
    where
        F: FnMut(usize) -> Size,
    {
        let item_count =
            usize::try_from(item_count).map_err(|_| LayoutError::InvalidArgument { item_count })?;
        let content_inset = self.config.content_inset;
        self.layout_pass(
            item_count,
            size_of,
            viewport,
            content_inset,
            line_spacing,
            mode,
        );
        Ok(())
    }

    fn layout_pass<F>(
        &mut self,
        item_count: usize,
        mut size_of: F,
        viewport: Rect,
        content_inset: EdgeInsets,
        line_spacing: f32,
        mode: LayoutMode,
    ) where
        F: FnMut(usize) -> Size,
    {
        let item_height = (viewport.height - content_inset.vertical_sum()).max(0.0);
        let hiding_first = mode == LayoutMode::HidingFirstItem;

        let mut attributes = Vec::with_capacity(item_count);
        let mut x = 0.0;
        for index in 0..item_count {
            let raw = size_of(index);
            if raw.is_degenerate() {
                warn!(
                    "PreviewLayout: item {} reported size {:?}, clamping to zero",
                    index, raw
                );
            }
            let size = raw.clamp_non_negative();

            if index == 0 && hiding_first {
                x = -(size.width + line_spacing);
            }

            let frame = Rect::new(x, 0.0, size.width, item_height);
            let visible_area = viewport.intersection(&frame).unwrap_or(Rect::ZERO);
            let alpha = if index == 0 && hiding_first { 0.0 } else { 1.0 };

            trace!("PreviewLayout: item {} frame {:?}", index, frame);

            attributes.push(LayoutAttributes {
                index,
                frame,
                alpha,
                scale: 1.0,
                visible_area,
                marker_center: self.marker.marker_center_for(frame, visible_area),
            });

            x += size.width + line_spacing;
        }

        let content_extent = Size::new((x - line_spacing).max(0.0), item_height);

        self.state.previous_attributes =
            std::mem::replace(&mut self.state.current_attributes, attributes);
        self.state.content_extent = content_extent;
        self.state.mode = mode;
        self.state.viewport = viewport;
        self.state.content_inset = content_inset;
        self.state.line_spacing = line_spacing;

        debug!(
            "PreviewLayout: relayout {} items ({:?}), extent {:?}, previous {}",
            item_count,
            mode,
            content_extent,
            self.state.previous_attributes.len()
        );
    }

    /// Moves the viewport without a relayout.
    ///
    /// Only `visible_area` and `marker_center` change. The size provider is not
    /// consulted and the previous snapshot is kept as is.
    pub fn update_viewport(&mut self, viewport: Rect) {
        self.state.viewport = viewport;
        for attributes in &mut self.state.current_attributes {
            self.marker.track(attributes, viewport);
        }
    }

    pub fn item_count(&self) -> usize {
        self.state.current_attributes.len()
    }

    pub fn attributes_for_item(&self, index: usize) -> Option<LayoutAttributes> {
        self.state.current_attributes.get(index).copied()
    }

    /// Tiles whose frame overlaps `rect`, in ascending index order.
    pub fn attributes_intersecting(&self, rect: Rect) -> Vec<LayoutAttributes> {
        self.state
            .current_attributes
            .iter()
            .filter(|attributes| attributes.frame.intersects(&rect))
            .copied()
            .collect()
    }

    pub fn content_extent(&self) -> Size {
        self.state.content_extent
    }

    /// Indices of tiles overlapping the current viewport.
    ///
    /// Frames ascend by `min_x`, so the range is found by binary search.
    /// Zero-width tiles inside the range have an empty visible area.
    pub fn visible_range(&self) -> Range<usize> {
        let attributes = &self.state.current_attributes;
        let viewport = self.state.viewport;
        let Some(first) = attributes.first() else {
            return 0..0;
        };
        let vertical_overlap = viewport.min_y() < first.frame.max_y()
            && first.frame.min_y() < viewport.max_y()
            && !viewport.is_empty();
        if !vertical_overlap {
            return 0..0;
        }

        let start = attributes.partition_point(|a| a.frame.max_x() <= viewport.min_x());
        let end = attributes.partition_point(|a| a.frame.min_x() < viewport.max_x());
        start..end.max(start)
    }

    /// Marker centers for selected tiles that are at least partly on screen.
    pub fn markers_for<S>(&self, selection: &S) -> Vec<(usize, Point)>
    where
        S: SelectionState + ?Sized,
    {
        self.visible_range()
            .filter(|&index| selection.is_selected(index))
            .filter_map(|index| self.state.current_attributes.get(index))
            .filter(|attributes| attributes.is_visible() && !attributes.is_hidden())
            .map(|attributes| (attributes.index, attributes.marker_center))
            .collect()
    }

    /// Starting snapshot for a tile that appears during a batch update.
    ///
    /// Tiles marked as inserting drop in from one viewport height above,
    /// transparent and shrunk. Other tiles start from where the previous pass
    /// left them, or from their current geometry if they are new.
    pub fn initial_attributes_for_appearing(&self, index: usize) -> Option<LayoutAttributes> {
        if self.state.inserting_indices.contains(&index) {
            return self
                .state
                .current_attributes
                .get(index)
                .map(|attributes| self.transition_snapshot(*attributes));
        }
        self.state
            .previous_attributes
            .get(index)
            .or_else(|| self.state.current_attributes.get(index))
            .copied()
    }

    /// Ending snapshot for a tile that disappears during a batch update.
    ///
    /// Tiles marked for removal leave upwards, transparent and shrunk. Other
    /// tiles stay where the current pass put them.
    pub fn final_attributes_for_disappearing(&self, index: usize) -> Option<LayoutAttributes> {
        let base = self
            .state
            .current_attributes
            .get(index)
            .or_else(|| self.state.previous_attributes.get(index))
            .copied()?;
        if self.state.removal_indices.contains(&index) {
            Some(self.transition_snapshot(base))
        } else {
            Some(base)
        }
    }

    fn transition_snapshot(&self, mut attributes: LayoutAttributes) -> LayoutAttributes {
        attributes.alpha = 0.0;
        attributes.scale = self.config.transition_scale;
        attributes.frame.y -= self.state.viewport.height;
        attributes
    }

    pub fn mark_inserting<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.state.inserting_indices.extend(indices);
    }

    pub fn mark_removing<I>(&mut self, indices: I)
    where
        I: IntoIterator<Item = usize>,
    {
        self.state.removal_indices.extend(indices);
    }

    /// Forgets all inserting and removing marks.
    ///
    /// Must run once the animated batch finishes or is abandoned.
    /// [`begin_transition`](Self::begin_transition) does this automatically.
    pub fn clear_transition_marks(&mut self) {
        self.state.inserting_indices.clear();
        self.state.removal_indices.clear();
    }

    pub fn has_transition_marks(&self) -> bool {
        !self.state.inserting_indices.is_empty() || !self.state.removal_indices.is_empty()
    }

    /// Content offset that centers `target_index`, using the current pass with
    /// its line spacing and top content inset.
    pub fn scroll_target(
        &self,
        proposed_offset: Point,
        target_index: Option<usize>,
        viewport_width: f32,
    ) -> Point {
        ScrollTargetResolver::new(self.state.content_inset.top).resolve(
            proposed_offset,
            target_index,
            &self.state.current_attributes,
            self.state.content_extent,
            viewport_width,
            self.state.line_spacing,
        )
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
