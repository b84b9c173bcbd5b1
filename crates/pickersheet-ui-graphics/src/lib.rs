//! Pure geometry for the picker sheet
//!
//! This crate contains the point, size, rectangle and inset primitives shared by
//! the layout engine and its collaborators.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
