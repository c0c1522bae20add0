//! Animation primitives for the floating card and the page view
//!
//! - `easing`, `timing`: pure curve and interpolation helpers
//! - `tween`, `spring`: single-value animators behind the `Animator` trait
//! - `card`: drives the card geometry from `CardTargets`
//! - `scroll`: smooth line scrolling of the page view

pub mod card;
pub mod easing;
pub mod scroll;
pub mod spring;
pub mod timing;
pub mod tween;

use std::time::Instant;

pub use card::{make_animator, AnimatedCard, CardAnimator};
pub use easing::{EasingType, EasingTypeExt};
pub use scroll::PageScroller;
pub use spring::Spring;
pub use tween::Tween;

/// A single animated value. Call `animate_to` once per frame with the
/// current target; the returned value is what should be drawn.
pub trait Animator: Send {
    fn animate_to(&mut self, target: f32, now: Instant) -> f32;
    fn value(&self) -> f32;
    fn is_animating(&self) -> bool;
    /// Jump to `value` and stop
    fn snap_to(&mut self, value: f32);
}
