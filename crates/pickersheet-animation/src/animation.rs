//! Time-based interpolation with easing curves.
//!
//! The layout engine produces start and end attribute snapshots; this module
//! supplies the pieces a host needs to walk between them frame by frame.

use pickersheet_ui_graphics::{Point, Rect, Size};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for Point {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Point::new(self.x.lerp(&target.x, fraction), self.y.lerp(&target.y, fraction))
    }
}

impl Lerp for Size {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Size::new(
            self.width.lerp(&target.width, fraction),
            self.height.lerp(&target.height, fraction),
        )
    }
}

impl Lerp for Rect {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        Rect::from_origin_size(
            self.origin().lerp(&target.origin(), fraction),
            self.size().lerp(&target.size(), fraction),
        )
    }
}

/// Easing curves for sheet transitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Fast out, slow in. The default for tile re-flow.
    FastOutSlowIn,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        match self {
            Easing::Linear => fraction.clamp(0.0, 1.0),
            Easing::FastOutSlowIn => FAST_OUT_SLOW_IN.y_for_x(fraction),
        }
    }
}

const FAST_OUT_SLOW_IN: CubicBezier = CubicBezier::new(0.4, 0.0, 0.2, 1.0);

/// Unit cubic bezier from (0, 0) to (1, 1) with two control points.
///
/// Control point x values must lie in [0, 1], which keeps x(t) monotonic.
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    const SOLVE_STEPS: usize = 24;

    const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Bernstein form with fixed end points.
    fn component(p1: f32, p2: f32, t: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn y_for_x(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }
        let (mut low, mut high) = (0.0_f32, 1.0_f32);
        for _ in 0..Self::SOLVE_STEPS {
            let mid = (low + high) / 2.0;
            if Self::component(self.x1, self.x2, mid) < x {
                low = mid;
            } else {
                high = mid;
            }
        }
        Self::component(self.y1, self.y2, (low + high) / 2.0)
    }
}

/// Tween specification combining duration, easing and start delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSpec {
    /// Duration in milliseconds.
    pub duration_millis: u64,
    /// Easing function to apply.
    pub easing: Easing,
    /// Delay before starting animation in milliseconds.
    pub delay_millis: u64,
}

impl AnimationSpec {
    /// Create a tween animation with duration and easing.
    pub fn tween(duration_millis: u64, easing: Easing) -> Self {
        Self {
            duration_millis,
            easing,
            delay_millis: 0,
        }
    }

    /// Create a linear tween animation.
    pub fn linear(duration_millis: u64) -> Self {
        Self::tween(duration_millis, Easing::Linear)
    }

    /// Add a delay before the animation starts.
    pub fn with_delay(mut self, delay_millis: u64) -> Self {
        self.delay_millis = delay_millis;
        self
    }

    /// Linear progress in [0, 1] after `elapsed_millis`, honoring the delay.
    pub fn linear_progress(&self, elapsed_millis: u64) -> f32 {
        let active = elapsed_millis.saturating_sub(self.delay_millis);
        if self.duration_millis == 0 {
            return if elapsed_millis >= self.delay_millis {
                1.0
            } else {
                0.0
            };
        }
        (active as f32 / self.duration_millis as f32).clamp(0.0, 1.0)
    }

    /// Eased progress in [0, 1] after `elapsed_millis`.
    pub fn progress(&self, elapsed_millis: u64) -> f32 {
        self.easing.transform(self.linear_progress(elapsed_millis))
    }

    pub fn is_finished(&self, elapsed_millis: u64) -> bool {
        elapsed_millis >= self.delay_millis + self.duration_millis
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self::tween(300, Easing::FastOutSlowIn)
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
