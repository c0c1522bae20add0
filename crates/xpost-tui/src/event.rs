use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEventKind};

/// Lines scrolled per mouse wheel notch
const WHEEL_LINES: i32 = 3;

/// Polls crossterm for input with two rates: the idle tick and the faster
/// animation frame
pub struct EventHandler {
    tick_rate: Duration,
    frame_rate: Duration,
}

impl EventHandler {
    pub fn with_animation_fps(tick_rate_ms: u64, fps: u32) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            frame_rate: Duration::from_micros(1_000_000 / fps.clamp(1, 240) as u64),
        }
    }

    /// Wait up to one tick for the next event
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Wait up to one animation frame; used while something is moving
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.frame_rate)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(Some(AppEvent::Tick));
        }

        let event = match event::read()? {
            // Ignore release/repeat events some terminals send
            Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
            Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::ScrollDown => Some(AppEvent::Scroll(WHEEL_LINES)),
                MouseEventKind::ScrollUp => Some(AppEvent::Scroll(-WHEEL_LINES)),
                _ => None,
            },
            _ => None,
        };
        Ok(event)
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    /// Mouse wheel, in lines (positive = down)
    Scroll(i32),
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rate_from_fps() {
        let handler = EventHandler::with_animation_fps(100, 50);
        assert_eq!(handler.frame_rate, Duration::from_millis(20));
        assert_eq!(handler.tick_rate, Duration::from_millis(100));
    }

    #[test]
    fn test_fps_is_clamped() {
        let handler = EventHandler::with_animation_fps(0, 0);
        assert_eq!(handler.frame_rate, Duration::from_secs(1));
        assert_eq!(handler.tick_rate, Duration::from_millis(1));
    }
}
