//! Layout engine for the picker sheet's horizontal preview strip.
//!
//! [`PreviewLayoutEngine`] packs variable-width tiles into a single scrollable
//! row, keeps the previous pass around for attribute animation, and answers the
//! geometry queries a rendering host needs. [`SelectionMarkerTracker`] and
//! [`ScrollTargetResolver`] run between passes without a full relayout.

mod attributes;
mod config;
mod engine;
mod error;
mod marker;
mod provider;
mod scroll_target;
mod transition;

pub use attributes::*;
pub use config::*;
pub use engine::*;
pub use error::*;
pub use marker::*;
pub use provider::*;
pub use scroll_target::*;
pub use transition::*;

pub use pickersheet_ui_graphics::{EdgeInsets, Point, Rect, Size};

pub mod prelude {
    pub use crate::attributes::LayoutAttributes;
    pub use crate::config::PreviewLayoutConfig;
    pub use crate::engine::{LayoutMode, PreviewLayoutEngine};
    pub use crate::error::LayoutError;
    pub use crate::provider::{SelectionState, SizeProvider, ViewportSource};
}
