//! Animated batch updates.
//!
//! A batch update marks tiles as inserting or removing, runs a relayout, and
//! animates every tile from its starting snapshot to its final one. The marks
//! only make sense for the duration of that batch, so they live behind a guard
//! that clears them when the batch ends, even if the host abandons it halfway.

use std::ops::{Deref, DerefMut};

use pickersheet_animation::{Easing, Lerp};

use crate::attributes::LayoutAttributes;
use crate::engine::PreviewLayoutEngine;

/// Scoped ownership of the engine's transition marks.
///
/// Dereferences to the engine so the host can relayout and query through the
/// guard. Dropping the guard clears the marks.
pub struct TransitionBatch<'a> {
    engine: &'a mut PreviewLayoutEngine,
    committed: bool,
}

impl<'a> TransitionBatch<'a> {
    fn new(engine: &'a mut PreviewLayoutEngine) -> Self {
        if engine.has_transition_marks() {
            log::warn!("PreviewLayout: stale transition marks at batch start, clearing");
            engine.clear_transition_marks();
        }
        Self {
            engine,
            committed: false,
        }
    }

    pub fn insert<I>(&mut self, indices: I) -> &mut Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.engine.mark_inserting(indices);
        self
    }

    pub fn remove<I>(&mut self, indices: I) -> &mut Self
    where
        I: IntoIterator<Item = usize>,
    {
        self.engine.mark_removing(indices);
        self
    }

    /// Ends the batch after its animation completed.
    pub fn commit(mut self) {
        self.committed = true;
        log::debug!("PreviewLayout: transition batch committed");
    }
}

impl Deref for TransitionBatch<'_> {
    type Target = PreviewLayoutEngine;

    fn deref(&self) -> &Self::Target {
        &*self.engine
    }
}

impl DerefMut for TransitionBatch<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.engine
    }
}

impl Drop for TransitionBatch<'_> {
    fn drop(&mut self) {
        if !self.committed {
            log::debug!("PreviewLayout: transition batch abandoned");
        }
        self.engine.clear_transition_marks();
    }
}

/// One tile's animation between two snapshots.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttributeTransition {
    pub index: usize,
    pub from: LayoutAttributes,
    pub to: LayoutAttributes,
}

impl AttributeTransition {
    pub fn between(from: LayoutAttributes, to: LayoutAttributes) -> Self {
        Self {
            index: to.index,
            from,
            to,
        }
    }

    /// Nothing to animate.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }

    /// Attributes at `fraction` of the way through, after easing.
    ///
    /// Frame, visible area, marker, alpha and scale are interpolated. The
    /// fraction is clamped to [0, 1].
    pub fn sample(&self, fraction: f32, easing: Easing) -> LayoutAttributes {
        let t = easing.transform(fraction.clamp(0.0, 1.0));
        if t <= 0.0 {
            return self.from;
        }
        if t >= 1.0 {
            return self.to;
        }
        LayoutAttributes {
            index: self.index,
            frame: self.from.frame.lerp(&self.to.frame, t),
            alpha: self.from.alpha.lerp(&self.to.alpha, t).clamp(0.0, 1.0),
            scale: self.from.scale.lerp(&self.to.scale, t),
            visible_area: self.from.visible_area.lerp(&self.to.visible_area, t),
            marker_center: self.from.marker_center.lerp(&self.to.marker_center, t),
        }
    }
}

impl PreviewLayoutEngine {
    /// Opens a batch update. Marks set through the returned guard are cleared
    /// when it is committed or dropped.
    pub fn begin_transition(&mut self) -> TransitionBatch<'_> {
        TransitionBatch::new(self)
    }

    /// Appearing animations for every tile of the current pass, skipping
    /// tiles whose geometry did not change.
    pub fn transitions(&self) -> Vec<AttributeTransition> {
        self.state()
            .current_attributes()
            .iter()
            .filter_map(|current| {
                let from = self.initial_attributes_for_appearing(current.index)?;
                Some(AttributeTransition::between(from, *current))
            })
            .filter(|transition| !transition.is_noop())
            .collect()
    }

    /// Exit animations for tiles marked for removal, in ascending index order.
    ///
    /// Each starts where the previous pass left the tile.
    pub fn disappearing_transitions(&self) -> Vec<AttributeTransition> {
        let mut indices: Vec<usize> = self.state().removal_indices().iter().copied().collect();
        indices.sort_unstable();
        indices
            .into_iter()
            .filter_map(|index| {
                let to = self.final_attributes_for_disappearing(index)?;
                let from = self
                    .state()
                    .previous_attributes()
                    .get(index)
                    .copied()
                    .unwrap_or(to);
                Some(AttributeTransition::between(from, to))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/transition_tests.rs"]
mod tests;
