//! Easing curves and value interpolation for picker sheet transitions.

mod animation;

pub use animation::*;
