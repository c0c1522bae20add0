//! Terminal rendition of the embedded web view

use std::time::Instant;

use xpost_core::content::{ContentEvent, ContentSubscription, Page, SessionId};
use xpost_core::AnimationConfig;

use crate::animation::PageScroller;

/// State of the page view: the loaded page, its rendered lines and the scroll
/// position. Owns the subscription of the current content session.
#[derive(Debug)]
pub struct PageView {
    page: Option<Page>,
    /// (width, lines) of the last render
    rendered: Option<(u16, Vec<String>)>,
    scroller: PageScroller,
    subscription: Option<ContentSubscription>,
    /// Last line reported to the controller
    reported_line: Option<u16>,
    width: u16,
    height: u16,
    /// Blank rows allowed past the last line
    bottom_inset: u16,
}

impl PageView {
    pub fn new(config: &AnimationConfig, bottom_inset: u16) -> Self {
        Self {
            page: None,
            rendered: None,
            scroller: PageScroller::new(config),
            subscription: None,
            reported_line: None,
            width: 0,
            height: 0,
            bottom_inset,
        }
    }

    /// Start showing a new session. Any previous subscription is dropped.
    pub fn attach(&mut self, subscription: ContentSubscription) {
        tracing::debug!("Page view attached to session {}", subscription.session().0);
        self.subscription = Some(subscription);
        self.page = None;
        self.rendered = None;
        self.scroller.reset();
        self.reported_line = None;
    }

    /// Unsubscribe and forget the page
    pub fn detach(&mut self) {
        self.subscription = None;
        self.page = None;
        self.rendered = None;
        self.scroller.reset();
        self.reported_line = None;
    }

    pub fn session(&self) -> Option<SessionId> {
        self.subscription.as_ref().map(|s| s.session())
    }

    pub fn drain_events(&mut self) -> Vec<(SessionId, ContentEvent)> {
        match self.subscription.as_mut() {
            Some(subscription) => subscription.drain(),
            None => Vec::new(),
        }
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = Some(page);
        self.rendered = None;
    }

    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Rendered lines for the current viewport width
    pub fn lines(&mut self) -> &[String] {
        let width = self.width;
        let stale = !matches!(&self.rendered, Some((w, _)) if *w == width);
        if stale {
            let lines = self
                .page
                .as_ref()
                .map(|page| page.render_lines(width))
                .unwrap_or_default();
            self.rendered = Some((width, lines));
        }
        self.rendered.as_ref().map(|(_, lines)| lines.as_slice()).unwrap_or(&[])
    }

    pub fn max_scroll(&mut self) -> u16 {
        let height = self.height;
        let inset = self.bottom_inset;
        let total = self.lines().len() + inset as usize;
        total.saturating_sub(height as usize).min(u16::MAX as usize) as u16
    }

    pub fn scroll(&self) -> u16 {
        self.scroller.current()
    }

    pub fn is_scrolling(&self) -> bool {
        self.scroller.needs_update()
    }

    pub fn line_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.line_down(max);
    }

    pub fn line_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.line_up(max);
    }

    pub fn half_page_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.half_page_down(self.height, max);
    }

    pub fn half_page_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.half_page_up(self.height, max);
    }

    pub fn page_down(&mut self) {
        let max = self.max_scroll();
        self.scroller.page_down(self.height, max);
    }

    pub fn page_up(&mut self) {
        let max = self.max_scroll();
        self.scroller.page_up(self.height, max);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = self.max_scroll();
        self.scroller.scroll_by(delta, max);
    }

    pub fn to_top(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_to(0, max);
    }

    pub fn to_bottom(&mut self) {
        let max = self.max_scroll();
        self.scroller.scroll_to(max, max);
    }

    /// Advance scrolling by one frame. Returns the new first visible line
    /// when it differs from the last one reported.
    pub fn update(&mut self, now: Instant) -> Option<u16> {
        let max = self.max_scroll();
        let line = self.scroller.update_at(max, now);
        if self.reported_line == Some(line) {
            return None;
        }
        self.reported_line = Some(line);
        Some(line)
    }
}
