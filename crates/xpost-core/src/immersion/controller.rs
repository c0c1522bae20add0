use crate::content::{ContentEvent, SessionId};
use crate::post::Post;

use super::metrics::CardMetrics;
use super::progress::progress;
use super::targets::CardTargets;

/// Load state of the current content session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No content session
    Idle,
    Loading,
    Finished,
    Failed(String),
}

/// Request for the content view to load `url` in a fresh session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub session: SessionId,
    pub url: String,
}

/// Owns the viewing session and derives the floating card's targets from it.
///
/// Every mutation re-derives `targets()` synchronously.
#[derive(Debug, Clone)]
pub struct ImmersionController {
    selected_post: Option<Post>,
    session: SessionId,
    raw_scroll_offset: f32,
    drag_offset: f32,
    loading_progress: u8,
    load_state: LoadState,
    metrics: CardMetrics,
    targets: CardTargets,
}

impl Default for ImmersionController {
    fn default() -> Self {
        Self::new()
    }
}

impl ImmersionController {
    pub fn new() -> Self {
        let metrics = CardMetrics::default();
        Self {
            selected_post: None,
            session: SessionId(0),
            raw_scroll_offset: 0.0,
            drag_offset: 0.0,
            loading_progress: 0,
            load_state: LoadState::Idle,
            metrics,
            targets: CardTargets::derive(0.0, &metrics),
        }
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_post.as_ref()
    }

    /// Whether the page viewer and floating card are showing
    pub fn is_viewing(&self) -> bool {
        self.selected_post.is_some()
    }

    /// Current content session id
    pub fn session(&self) -> SessionId {
        self.session
    }

    pub fn raw_scroll_offset(&self) -> f32 {
        self.raw_scroll_offset
    }

    pub fn drag_offset(&self) -> f32 {
        self.drag_offset
    }

    pub fn loading_progress(&self) -> u8 {
        self.loading_progress
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    pub fn metrics(&self) -> &CardMetrics {
        &self.metrics
    }

    pub fn progress(&self) -> f32 {
        self.targets.progress
    }

    /// Latest derived targets
    pub fn targets(&self) -> &CardTargets {
        &self.targets
    }

    /// Link tapped. Posts without a URL are inert.
    pub fn select_post(&mut self, post: &Post) -> Option<LoadRequest> {
        let url = post.url.clone()?;
        self.selected_post = Some(post.clone());
        tracing::debug!("Selected post {} -> {}", post.id, url);
        Some(self.open_session(url))
    }

    /// Close the viewer. Idempotent.
    pub fn close(&mut self) {
        if self.selected_post.take().is_some() {
            tracing::debug!("Closed viewer (session {})", self.session.0);
        }
        // Retire the session so late events from it are ignored
        self.session = self.session.next();
        self.raw_scroll_offset = 0.0;
        self.loading_progress = 0;
        self.load_state = LoadState::Idle;
        self.rederive();
    }

    /// Close and immediately reselect the same post, forcing a fresh load
    pub fn reload(&mut self) -> Option<LoadRequest> {
        let post = self.selected_post.clone()?;
        self.close();
        self.select_post(&post)
    }

    /// Retry after a load error in a fresh session
    pub fn retry(&mut self) -> Option<LoadRequest> {
        let url = self.selected_post.as_ref()?.url.clone()?;
        tracing::info!("Retrying {}", url);
        Some(self.open_session(url))
    }

    /// Scroll position reported by the content view, in dp
    pub fn on_scroll_report(&mut self, position: f32) {
        self.raw_scroll_offset = position;
        self.rederive();
    }

    /// Reserved for gesture support; additive with the scroll offset
    pub fn set_drag_offset(&mut self, offset: f32) {
        self.drag_offset = offset;
        self.rederive();
    }

    /// Off-screen measurement of the card's natural content height, in dp
    pub fn set_content_height(&mut self, height: f32) {
        let metrics = CardMetrics::measured(height);
        if metrics != self.metrics {
            self.metrics = metrics;
            self.rederive();
        }
    }

    /// Apply an event from the content view. Returns false when the event
    /// belongs to a stale session and was dropped.
    pub fn on_content_event(&mut self, session: SessionId, event: &ContentEvent) -> bool {
        if session != self.session || self.selected_post.is_none() {
            tracing::trace!("Dropping event from stale session {}", session.0);
            return false;
        }

        match event {
            ContentEvent::LoadStarted => {
                self.load_state = LoadState::Loading;
            }
            ContentEvent::ProgressChanged(percent) => {
                self.loading_progress = (*percent).min(100);
            }
            ContentEvent::LoadFinished(_) => {
                self.loading_progress = 100;
                self.load_state = LoadState::Finished;
            }
            ContentEvent::LoadError(message) => {
                self.load_state = LoadState::Failed(message.clone());
            }
            ContentEvent::ScrollChanged(y) => {
                self.on_scroll_report(*y);
            }
        }
        true
    }

    fn open_session(&mut self, url: String) -> LoadRequest {
        self.session = self.session.next();
        self.raw_scroll_offset = 0.0;
        self.loading_progress = 0;
        self.load_state = LoadState::Loading;
        self.rederive();
        LoadRequest {
            session: self.session,
            url,
        }
    }

    fn rederive(&mut self) {
        let progress = progress(self.raw_scroll_offset, self.drag_offset);
        self.targets = CardTargets::derive(progress, &self.metrics);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Page;
    use crate::immersion::ContentTier;
    use crate::post::sample_posts;

    fn linked_post() -> Post {
        sample_posts().remove(0)
    }

    fn unlinked_post() -> Post {
        Post {
            url: None,
            url_text: None,
            ..linked_post()
        }
    }

    #[test]
    fn test_select_post_without_url_is_noop() {
        let mut controller = ImmersionController::new();
        assert!(controller.select_post(&unlinked_post()).is_none());
        assert!(controller.selected_post().is_none());

        let post = linked_post();
        controller.select_post(&post);
        assert!(controller.select_post(&unlinked_post()).is_none());
        assert_eq!(controller.selected_post(), Some(&post));
    }

    #[test]
    fn test_select_opens_session_at_top() {
        let mut controller = ImmersionController::new();
        let request = controller.select_post(&linked_post()).unwrap();
        assert_eq!(request.url, "https://developer.android.com/jetpack/compose/releases");
        assert_eq!(request.session, controller.session());
        assert_eq!(controller.raw_scroll_offset(), 0.0);
        assert_eq!(controller.load_state(), &LoadState::Loading);
        assert!(controller.is_viewing());
    }

    #[test]
    fn test_scroll_report_drives_targets() {
        let mut controller = ImmersionController::new();
        controller.select_post(&linked_post());

        controller.on_scroll_report(300.0);
        assert_eq!(controller.progress(), 0.5);
        assert_eq!(controller.targets().card_height, 213.0);
        assert_eq!(controller.targets().tier, ContentTier::Partial);

        controller.on_scroll_report(900.0);
        assert_eq!(controller.progress(), 1.0);
        assert_eq!(controller.targets().card_height, 80.0);

        controller.on_scroll_report(-20.0);
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_reselect_resets_scroll_each_time() {
        let mut controller = ImmersionController::new();
        let post = linked_post();

        controller.select_post(&post);
        controller.on_scroll_report(250.0);
        let first = controller.select_post(&post).unwrap();
        assert_eq!(controller.raw_scroll_offset(), 0.0);

        controller.on_scroll_report(400.0);
        let second = controller.select_post(&post).unwrap();
        assert_eq!(controller.raw_scroll_offset(), 0.0);
        assert_ne!(first.session, second.session);
    }

    #[test]
    fn test_reload_resets_scroll_and_keeps_post() {
        let mut controller = ImmersionController::new();
        let post = linked_post();
        controller.select_post(&post);
        let before = controller.session();
        controller.on_scroll_report(500.0);

        let request = controller.reload().unwrap();
        assert_eq!(controller.selected_post(), Some(&post));
        assert_eq!(controller.raw_scroll_offset(), 0.0);
        assert!(request.session > before);
    }

    #[test]
    fn test_reload_without_selection() {
        let mut controller = ImmersionController::new();
        assert!(controller.reload().is_none());
        assert!(controller.retry().is_none());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut controller = ImmersionController::new();
        controller.select_post(&linked_post());
        controller.on_scroll_report(200.0);

        controller.close();
        assert!(controller.selected_post().is_none());
        assert_eq!(controller.raw_scroll_offset(), 0.0);
        assert_eq!(controller.load_state(), &LoadState::Idle);

        controller.close();
        assert!(controller.selected_post().is_none());
        assert_eq!(controller.progress(), 0.0);
    }

    #[test]
    fn test_stale_session_events_are_dropped() {
        let mut controller = ImmersionController::new();
        let post = linked_post();
        let old = controller.select_post(&post).unwrap().session;
        let current = controller.reload().unwrap().session;

        assert!(!controller.on_content_event(old, &ContentEvent::ScrollChanged(600.0)));
        assert!(!controller.on_content_event(old, &ContentEvent::LoadError("boom".into())));
        assert_eq!(controller.progress(), 0.0);
        assert_eq!(controller.load_state(), &LoadState::Loading);

        assert!(controller.on_content_event(current, &ContentEvent::ScrollChanged(600.0)));
        assert_eq!(controller.progress(), 1.0);
    }

    #[test]
    fn test_events_after_close_are_dropped() {
        let mut controller = ImmersionController::new();
        let session = controller.select_post(&linked_post()).unwrap().session;
        controller.close();
        assert!(!controller.on_content_event(session, &ContentEvent::LoadStarted));
        assert_eq!(controller.load_state(), &LoadState::Idle);
    }

    #[test]
    fn test_load_lifecycle() {
        let mut controller = ImmersionController::new();
        let session = controller.select_post(&linked_post()).unwrap().session;

        controller.on_content_event(session, &ContentEvent::LoadStarted);
        controller.on_content_event(session, &ContentEvent::ProgressChanged(250));
        assert_eq!(controller.loading_progress(), 100);
        controller.on_content_event(session, &ContentEvent::ProgressChanged(40));
        assert_eq!(controller.loading_progress(), 40);

        controller.on_content_event(session, &ContentEvent::LoadFinished(Page::new("u", "<p>x</p>")));
        assert_eq!(controller.load_state(), &LoadState::Finished);
        assert_eq!(controller.loading_progress(), 100);
    }

    #[test]
    fn test_retry_after_error() {
        let mut controller = ImmersionController::new();
        let session = controller.select_post(&linked_post()).unwrap().session;
        controller.on_content_event(session, &ContentEvent::ProgressChanged(60));
        controller.on_content_event(session, &ContentEvent::LoadError("timeout".into()));
        assert!(matches!(controller.load_state(), LoadState::Failed(_)));

        let request = controller.retry().unwrap();
        assert!(request.session > session);
        assert_eq!(controller.load_state(), &LoadState::Loading);
        assert_eq!(controller.loading_progress(), 0);
    }

    #[test]
    fn test_content_height_measurement() {
        let mut controller = ImmersionController::new();
        controller.set_content_height(250.0);
        assert_eq!(controller.targets().card_height, 250.0);
        controller.set_content_height(1000.0);
        assert_eq!(controller.targets().card_height, 346.0);
    }

    #[test]
    fn test_drag_offset_is_additive() {
        let mut controller = ImmersionController::new();
        controller.select_post(&linked_post());
        controller.on_scroll_report(100.0);
        controller.set_drag_offset(200.0);
        assert_eq!(controller.progress(), 0.5);
    }
}
