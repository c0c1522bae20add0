//! Scroll-driven card transform engine
//!
//! The page view reports its scroll position; the controller folds it into a
//! single normalized `progress` scalar and derives every visual parameter of
//! the floating card from it.
//!
//! - `metrics` - fixed geometry constants and the measured content height
//! - `progress` - scroll offset to progress mapping
//! - `targets` - pure derivation of card, header and content targets
//! - `controller` - session state and event handlers

pub mod controller;
pub mod metrics;
pub mod progress;
pub mod targets;

pub use controller::{ImmersionController, LoadRequest, LoadState};
pub use metrics::CardMetrics;
pub use progress::{effective_scroll, progress};
pub use targets::{CardTargets, ContentTier, ProfileFade};
