//! Time calculation utilities for animations.

use std::time::{Duration, Instant};

/// Animation progress (0.0 to 1.0) at `now`
#[inline]
pub fn progress_at(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

/// Whether an animation started at `start` has finished by `now`
#[inline]
pub fn is_complete_at(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for u16 values (scroll positions)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(346.0, 80.0, 1.0) - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(100, 0, 0.25), 75);
    }

    #[test]
    fn test_progress_at() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        assert_eq!(progress_at(start, duration, start), 0.0);
        assert!((progress_at(start, duration, start + Duration::from_millis(50)) - 0.25).abs() < 1e-9);
        assert_eq!(progress_at(start, duration, start + Duration::from_secs(1)), 1.0);
        assert_eq!(progress_at(start, Duration::ZERO, start), 1.0);
    }

    #[test]
    fn test_is_complete_at() {
        let start = Instant::now();
        let duration = Duration::from_millis(100);
        assert!(!is_complete_at(start, duration, start + Duration::from_millis(99)));
        assert!(is_complete_at(start, duration, start + Duration::from_millis(100)));
    }
}
