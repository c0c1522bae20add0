//! Smooth scrolling of the page view

use std::time::{Duration, Instant};

use xpost_core::AnimationConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, lerp_u16, progress_at};

#[derive(Debug, Clone)]
struct ActiveScroll {
    start: Instant,
    from: u16,
    to: u16,
}

/// Scroll position of the page view, in lines.
///
/// Call a scroll method on input, then `update()` every frame to advance the
/// animation. Deltas issued within one frame are batched.
#[derive(Debug, Clone)]
pub struct PageScroller {
    animation: Option<ActiveScroll>,
    smooth: bool,
    duration: Duration,
    easing: EasingType,
    step_lines: u16,
    current: u16,
    pending_delta: i32,
}

impl Default for PageScroller {
    fn default() -> Self {
        Self::new(&AnimationConfig::default())
    }
}

impl PageScroller {
    pub fn new(config: &AnimationConfig) -> Self {
        Self {
            animation: None,
            smooth: config.smooth_enabled && config.animation_duration_ms > 0,
            duration: Duration::from_millis(config.animation_duration_ms),
            easing: config.easing,
            step_lines: config.scroll_lines.max(1),
            current: 0,
            pending_delta: 0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the next frame will move the page
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0
    }

    /// Final position once the running animation ends
    pub fn target(&self) -> u16 {
        self.animation.as_ref().map(|a| a.to).unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> u16 {
        self.current
    }

    /// Jump without animation
    pub fn set(&mut self, line: u16) {
        self.animation = None;
        self.current = line;
        self.pending_delta = 0;
    }

    pub fn scroll_to(&mut self, target: u16, max_scroll: u16) {
        self.scroll_to_at(target, max_scroll, Instant::now());
    }

    fn scroll_to_at(&mut self, target: u16, max_scroll: u16, now: Instant) {
        let target = target.min(max_scroll);
        self.pending_delta = 0;

        if !self.smooth || target == self.current {
            self.current = target;
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveScroll {
            start: now,
            from: self.current,
            to: target,
        });
    }

    /// Positive scrolls down
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if !self.smooth {
            self.current = (self.current as i32 + delta).clamp(0, max_scroll as i32) as u16;
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    pub fn line_down(&mut self, max_scroll: u16) {
        let lines = if self.smooth { 1 } else { self.step_lines as i32 };
        self.scroll_by(lines, max_scroll);
    }

    pub fn line_up(&mut self, max_scroll: u16) {
        let lines = if self.smooth { 1 } else { self.step_lines as i32 };
        self.scroll_by(-lines, max_scroll);
    }

    pub fn half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by((viewport_height / 2).max(1) as i32, max_scroll);
    }

    pub fn half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-((viewport_height / 2).max(1) as i32), max_scroll);
    }

    pub fn page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height as i32, max_scroll);
    }

    pub fn page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height as i32), max_scroll);
    }

    /// Advance one frame and return the visible line
    pub fn update(&mut self, max_scroll: u16) -> u16 {
        self.update_at(max_scroll, Instant::now())
    }

    pub fn update_at(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.pending_delta != 0 {
            let target = (self.target() as i32 + self.pending_delta).clamp(0, max_scroll as i32) as u16;
            self.pending_delta = 0;

            if target != self.current {
                self.animation = Some(ActiveScroll {
                    start: now,
                    from: self.current,
                    to: target,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete_at(anim.start, self.duration, now) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress_at(anim.start, self.duration, now);
                self.current = lerp_u16(anim.from, anim.to, self.easing.apply(t)).min(max_scroll);
            }
        }

        // Content may have shrunk (resize) since the last frame
        self.current = self.current.min(max_scroll);
        self.current
    }

    pub fn reset(&mut self) {
        self.animation = None;
        self.current = 0;
        self.pending_delta = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smooth() -> PageScroller {
        PageScroller::new(&AnimationConfig {
            animation_duration_ms: 100,
            ..Default::default()
        })
    }

    fn instant() -> PageScroller {
        PageScroller::new(&AnimationConfig {
            smooth_enabled: false,
            scroll_lines: 3,
            ..Default::default()
        })
    }

    #[test]
    fn test_instant_scroll_when_disabled() {
        let mut scroller = instant();
        scroller.scroll_to(100, 200);
        assert_eq!(scroller.current(), 100);
        assert!(!scroller.is_animating());

        scroller.line_down(200);
        assert_eq!(scroller.current(), 103);
    }

    #[test]
    fn test_deltas_are_batched() {
        let mut scroller = smooth();
        scroller.scroll_by(10, 200);
        scroller.scroll_by(10, 200);
        scroller.scroll_by(10, 200);
        assert!(scroller.needs_update());

        scroller.update(200);
        assert_eq!(scroller.target(), 30);
    }

    #[test]
    fn test_animation_finishes_on_target() {
        let mut scroller = smooth();
        let start = Instant::now();
        scroller.scroll_by(40, 200);
        scroller.update_at(200, start);
        let mid = scroller.update_at(200, start + Duration::from_millis(50));
        assert!(mid > 0 && mid < 40);
        assert_eq!(scroller.update_at(200, start + Duration::from_millis(100)), 40);
        assert!(!scroller.needs_update());
    }

    #[test]
    fn test_clamped_to_max() {
        let mut scroller = smooth();
        scroller.set(50);
        scroller.scroll_to(300, 100);
        assert!(scroller.target() <= 100);

        scroller.set(80);
        assert_eq!(scroller.update(20), 20);
    }

    #[test]
    fn test_scroll_to_top_cancels_pending() {
        let mut scroller = smooth();
        scroller.set(30);
        scroller.scroll_by(5, 100);
        scroller.scroll_to(0, 100);
        assert_eq!(scroller.target(), 0);
    }
}
