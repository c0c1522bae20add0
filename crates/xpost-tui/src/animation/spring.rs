use std::time::{Duration, Instant};

use super::Animator;

/// Critically damped for the default stiffness
const DEFAULT_STIFFNESS: f32 = 300.0;
const DEFAULT_DAMPING: f32 = 34.6;
/// Integration step
const STEP: f32 = 1.0 / 240.0;
/// Longest frame gap integrated at once
const MAX_FRAME_GAP: Duration = Duration::from_millis(100);
const REST_THRESHOLD: f32 = 0.01;

/// Damped spring following a moving target.
///
/// Unlike a tween, a retarget keeps the current velocity.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
    last_update: Option<Instant>,
}

impl Spring {
    pub fn new(initial: f32) -> Self {
        Self::with_params(initial, DEFAULT_STIFFNESS, DEFAULT_DAMPING)
    }

    pub fn with_params(initial: f32, stiffness: f32, damping: f32) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            stiffness,
            damping,
            last_update: None,
        }
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    fn at_rest(&self) -> bool {
        (self.target - self.position).abs() < REST_THRESHOLD && self.velocity.abs() < REST_THRESHOLD
    }

    fn step(&mut self, dt: f32) {
        let force = (self.target - self.position) * self.stiffness - self.velocity * self.damping;
        self.velocity += force * dt;
        self.position += self.velocity * dt;
    }
}

impl Animator for Spring {
    fn animate_to(&mut self, target: f32, now: Instant) -> f32 {
        self.target = target;

        let elapsed = match self.last_update {
            Some(last) => now.saturating_duration_since(last).min(MAX_FRAME_GAP),
            None => Duration::ZERO,
        };
        self.last_update = Some(now);

        let mut remaining = elapsed.as_secs_f32();
        while remaining > 0.0 {
            let dt = remaining.min(STEP);
            self.step(dt);
            remaining -= dt;
        }

        if self.at_rest() {
            self.position = self.target;
            self.velocity = 0.0;
        }

        self.position
    }

    fn value(&self) -> f32 {
        self.position
    }

    fn is_animating(&self) -> bool {
        !self.at_rest()
    }

    fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(spring: &mut Spring, target: f32, start: Instant, frames: u32) -> f32 {
        let mut value = spring.animate_to(target, start);
        for i in 1..=frames {
            value = spring.animate_to(target, start + Duration::from_millis(16 * i as u64));
        }
        value
    }

    #[test]
    fn test_settles_on_target() {
        let mut spring = Spring::new(346.0);
        let value = run(&mut spring, 80.0, Instant::now(), 120);
        assert_eq!(value, 80.0);
        assert!(!spring.is_animating());
    }

    #[test]
    fn test_moves_toward_target_without_overshoot() {
        let mut spring = Spring::new(0.0);
        let start = Instant::now();
        let mut prev = 0.0;
        for i in 0..=60 {
            let value = spring.animate_to(100.0, start + Duration::from_millis(16 * i));
            assert!(value >= prev - 1e-3);
            assert!(value <= 100.0 + 0.5);
            prev = value;
        }
    }

    #[test]
    fn test_first_update_does_not_move() {
        let mut spring = Spring::new(10.0);
        assert_eq!(spring.animate_to(50.0, Instant::now()), 10.0);
        assert!(spring.is_animating());
    }

    #[test]
    fn test_snap_to() {
        let mut spring = Spring::new(0.0);
        spring.animate_to(100.0, Instant::now());
        spring.snap_to(24.0);
        assert_eq!(spring.value(), 24.0);
        assert_eq!(spring.velocity(), 0.0);
        assert!(!spring.is_animating());
    }
}
