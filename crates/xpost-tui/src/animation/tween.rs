use std::time::{Duration, Instant};

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, lerp, progress_at};
use super::Animator;

/// Retarget when the new target differs by more than this
const RETARGET_EPSILON: f32 = 1e-4;

#[derive(Debug, Clone, Copy)]
struct Segment {
    start: Instant,
    from: f32,
    to: f32,
}

/// Duration-based eased animation of a single value.
///
/// A new target restarts the tween from the currently displayed value, so
/// interrupted animations never jump.
#[derive(Debug, Clone)]
pub struct Tween {
    value: f32,
    target: f32,
    duration: Duration,
    easing: EasingType,
    segment: Option<Segment>,
}

impl Tween {
    pub fn new(initial: f32, duration: Duration, easing: EasingType) -> Self {
        Self {
            value: initial,
            target: initial,
            duration,
            easing,
            segment: None,
        }
    }
}

impl Animator for Tween {
    fn animate_to(&mut self, target: f32, now: Instant) -> f32 {
        if (target - self.target).abs() > RETARGET_EPSILON {
            self.target = target;
            self.segment = Some(Segment {
                start: now,
                from: self.value,
                to: target,
            });
        }

        if let Some(segment) = self.segment {
            if is_complete_at(segment.start, self.duration, now) {
                self.value = segment.to;
                self.segment = None;
            } else {
                let t = progress_at(segment.start, self.duration, now);
                let eased = self.easing.apply(t);
                self.value = lerp(segment.from as f64, segment.to as f64, eased) as f32;
            }
        }

        self.value
    }

    fn value(&self) -> f32 {
        self.value
    }

    fn is_animating(&self) -> bool {
        self.segment.is_some()
    }

    fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.segment = None;
    }
}
