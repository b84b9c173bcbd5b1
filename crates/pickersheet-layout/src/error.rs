use thiserror::Error;

/// Failures reported by the layout engine.
///
/// Lookups for items outside the current range are not errors; they return
/// `None` because an item scrolling away mid-query is expected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("item count must be non-negative, got {item_count}")]
    InvalidArgument { item_count: isize },
}
