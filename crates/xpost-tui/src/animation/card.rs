use std::time::{Duration, Instant};

use xpost_core::immersion::CardTargets;
use xpost_core::{AnimationConfig, AnimationStyle};

use super::spring::Spring;
use super::tween::Tween;
use super::Animator;

/// Displayed floating-card geometry for one frame, in dp
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimatedCard {
    pub card_height: f32,
    pub card_offset_y: f32,
    pub corner_radius: f32,
    pub combined_height: f32,
}

impl AnimatedCard {
    fn from_targets(targets: &CardTargets) -> Self {
        Self {
            card_height: targets.card_height,
            card_offset_y: targets.card_offset_y,
            corner_radius: targets.corner_radius,
            combined_height: targets.combined_height,
        }
    }
}

/// Animates the card's geometric targets. Discrete values (tier, fades, button
/// visibility) are read from the targets directly.
pub struct CardAnimator {
    card_height: Box<dyn Animator>,
    card_offset_y: Box<dyn Animator>,
    corner_radius: Box<dyn Animator>,
    combined_height: Box<dyn Animator>,
}

impl CardAnimator {
    pub fn new(config: &AnimationConfig, initial: &CardTargets) -> Self {
        let start = AnimatedCard::from_targets(initial);
        Self {
            card_height: make_animator(config, start.card_height),
            card_offset_y: make_animator(config, start.card_offset_y),
            corner_radius: make_animator(config, start.corner_radius),
            combined_height: make_animator(config, start.combined_height),
        }
    }

    /// Advance toward `targets` and return the displayed geometry
    pub fn update(&mut self, targets: &CardTargets, now: Instant) -> AnimatedCard {
        AnimatedCard {
            card_height: self.card_height.animate_to(targets.card_height, now),
            card_offset_y: self.card_offset_y.animate_to(targets.card_offset_y, now),
            corner_radius: self.corner_radius.animate_to(targets.corner_radius, now),
            combined_height: self.combined_height.animate_to(targets.combined_height, now),
        }
    }

    /// Jump straight to `targets`, e.g. when a new post opens
    pub fn snap(&mut self, targets: &CardTargets) {
        let card = AnimatedCard::from_targets(targets);
        self.card_height.snap_to(card.card_height);
        self.card_offset_y.snap_to(card.card_offset_y);
        self.corner_radius.snap_to(card.corner_radius);
        self.combined_height.snap_to(card.combined_height);
    }

    pub fn current(&self) -> AnimatedCard {
        AnimatedCard {
            card_height: self.card_height.value(),
            card_offset_y: self.card_offset_y.value(),
            corner_radius: self.corner_radius.value(),
            combined_height: self.combined_height.value(),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.card_height.is_animating()
            || self.card_offset_y.is_animating()
            || self.corner_radius.is_animating()
            || self.combined_height.is_animating()
    }
}

/// Build the configured animator. With smoothing off, a zero-length tween snaps.
pub fn make_animator(config: &AnimationConfig, initial: f32) -> Box<dyn Animator> {
    if !config.smooth_enabled {
        return Box::new(Tween::new(initial, Duration::ZERO, config.easing));
    }
    match config.style {
        AnimationStyle::Tween => Box::new(Tween::new(
            initial,
            Duration::from_millis(config.animation_duration_ms),
            config.easing,
        )),
        AnimationStyle::Spring => Box::new(Spring::new(initial)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpost_core::immersion::CardMetrics;

    fn targets(progress: f32) -> CardTargets {
        CardTargets::derive(progress, &CardMetrics::default())
    }

    #[test]
    fn test_starts_at_initial_targets() {
        let animator = CardAnimator::new(&AnimationConfig::default(), &targets(0.0));
        let card = animator.current();
        assert_eq!(card.card_height, 346.0);
        assert_eq!(card.corner_radius, 24.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_tween_converges() {
        let config = AnimationConfig {
            animation_duration_ms: 200,
            ..Default::default()
        };
        let mut animator = CardAnimator::new(&config, &targets(0.0));
        let start = Instant::now();
        let collapsed = targets(1.0);

        let first = animator.update(&collapsed, start);
        assert_eq!(first.card_height, 346.0);
        assert!(animator.is_animating());

        let mid = animator.update(&collapsed, start + Duration::from_millis(100));
        assert!(mid.card_height < 346.0 && mid.card_height > 80.0);

        let done = animator.update(&collapsed, start + Duration::from_millis(200));
        assert_eq!(done.card_height, 80.0);
        assert_eq!(done.corner_radius, 8.0);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_disabled_smoothing_snaps() {
        let config = AnimationConfig {
            smooth_enabled: false,
            ..Default::default()
        };
        let mut animator = CardAnimator::new(&config, &targets(0.0));
        let card = animator.update(&targets(0.5), Instant::now());
        assert_eq!(card.card_height, 213.0);
    }

    #[test]
    fn test_spring_style_converges() {
        let config = AnimationConfig {
            style: AnimationStyle::Spring,
            ..Default::default()
        };
        let mut animator = CardAnimator::new(&config, &targets(0.0));
        let start = Instant::now();
        let mut card = animator.current();
        for i in 0..=150 {
            card = animator.update(&targets(1.0), start + Duration::from_millis(16 * i));
        }
        assert_eq!(card.card_height, 80.0);
    }

    #[test]
    fn test_snap() {
        let mut animator = CardAnimator::new(&AnimationConfig::default(), &targets(1.0));
        animator.update(&targets(0.0), Instant::now());
        animator.snap(&targets(0.0));
        assert_eq!(animator.current(), AnimatedCard::from_targets(&targets(0.0)));
        assert!(!animator.is_animating());
    }
}
