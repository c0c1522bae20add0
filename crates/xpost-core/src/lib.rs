pub mod config;
pub mod content;
pub mod error;
pub mod immersion;
pub mod post;

pub use config::{AnimationConfig, AnimationStyle, AppConfig, EasingType};
pub use error::{Error, Result};
pub use immersion::{CardTargets, ContentTier, ImmersionController};
pub use post::Post;
