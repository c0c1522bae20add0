use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use ratatui::widgets::ListState;
use xpost_core::content::{subscribe, ContentEvent, ContentEventSink};
use xpost_core::immersion::{ContentTier, ImmersionController, LoadRequest, LoadState};
use xpost_core::post::PostId;
use xpost_core::{AppConfig, Post};

use crate::animation::{AnimatedCard, CardAnimator};
use crate::engagement::{Engagement, ToolbarAction};
use crate::input::Action;
use crate::layout::{measure_card_height, page_bottom_inset, Projection};
use crate::page_view::PageView;
use crate::theme::Theme;
use crate::themes::load_theme;

/// How long a status message stays visible
const STATUS_TIMEOUT: Duration = Duration::from_millis(2500);
/// Posts skipped by half-page moves in the feed
const FEED_HALF_PAGE: usize = 3;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// "More" menu over the page viewer
    MoreMenu { selected: usize },
    Help,
}

/// Entries of the "More" menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    OpenInBrowser,
    CloseViewer,
}

impl MenuItem {
    pub const ALL: [MenuItem; 2] = [MenuItem::OpenInBrowser, MenuItem::CloseViewer];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::OpenInBrowser => "Open in browser",
            MenuItem::CloseViewer => "Close",
        }
    }
}

/// Side effect the runtime performs after an action
#[derive(Debug)]
pub enum Effect {
    None,
    /// Spawn a page load reporting into `sink`
    Load { url: String, sink: ContentEventSink },
    OpenInBrowser(String),
}

#[derive(Debug, Clone)]
struct StatusMessage {
    text: String,
    shown_at: Instant,
}

/// Main application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub projection: Projection,
    pub posts: Vec<Post>,
    /// Highlighted post in the feed
    pub selected: usize,
    pub feed_state: ListState,
    pub controller: ImmersionController,
    pub page_view: PageView,
    /// Card geometry drawn this frame
    pub card: AnimatedCard,
    card_animator: CardAnimator,
    engagement: HashMap<PostId, Engagement>,
    pub mode: Mode,
    status: Option<StatusMessage>,
    pub should_quit: bool,
    pub pending_key: Option<char>,
    terminal_width: u16,
}

impl App {
    pub fn new(config: AppConfig, posts: Vec<Post>) -> Self {
        let theme = load_theme(&config.ui.theme);
        let projection = Projection::from_config(&config.ui);
        let controller = ImmersionController::new();
        let card_animator = CardAnimator::new(&config.animation, controller.targets());
        let card = card_animator.current();
        let page_view = PageView::new(&config.animation, page_bottom_inset(&projection));

        let mut feed_state = ListState::default();
        if !posts.is_empty() {
            feed_state.select(Some(0));
        }

        Self {
            config: Arc::new(config),
            theme,
            projection,
            posts,
            selected: 0,
            feed_state,
            controller,
            page_view,
            card,
            card_animator,
            engagement: HashMap::new(),
            mode: Mode::Normal,
            status: None,
            should_quit: false,
            pending_key: None,
            terminal_width: 80,
        }
    }

    pub fn is_viewing(&self) -> bool {
        self.controller.is_viewing()
    }

    pub fn highlighted_post(&self) -> Option<&Post> {
        self.posts.get(self.selected)
    }

    /// Counters for a post, starting from the defaults
    pub fn engagement(&self, id: PostId) -> Engagement {
        self.engagement.get(&id).copied().unwrap_or_default()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Terminal size changed; the page viewport excludes the status bar
    pub fn resize(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.page_view.set_viewport(width, height.saturating_sub(1));
        self.measure_card();
    }

    fn measure_card(&mut self) {
        if let Some(post) = self.controller.selected_post() {
            let height = measure_card_height(post, self.terminal_width, &self.projection);
            self.controller.set_content_height(height);
        }
    }

    // ---- feed ----

    fn select_index(&mut self, index: usize) {
        if self.posts.is_empty() {
            return;
        }
        self.selected = index.min(self.posts.len() - 1);
        self.feed_state.select(Some(self.selected));
    }

    pub fn move_down(&mut self) {
        self.select_index(self.selected.saturating_add(1));
    }

    pub fn move_up(&mut self) {
        self.select_index(self.selected.saturating_sub(1));
    }

    // ---- viewer lifecycle ----

    /// Tap on the highlighted post's link. Posts without a link are inert.
    pub fn open_link(&mut self) -> Effect {
        let Some(post) = self.highlighted_post().cloned() else {
            return Effect::None;
        };
        match self.controller.select_post(&post) {
            Some(request) => self.begin_session(request),
            None => {
                tracing::debug!("Post {} has no link", post.id);
                Effect::None
            }
        }
    }

    pub fn close_viewer(&mut self) {
        self.controller.close();
        self.page_view.detach();
        self.mode = Mode::Normal;
    }

    /// Reload button. After a load error this is the retry affordance.
    pub fn reload(&mut self) -> Effect {
        let request = match self.controller.load_state() {
            LoadState::Failed(_) => self.controller.retry(),
            _ => self.controller.reload(),
        };
        match request {
            Some(request) => self.begin_session(request),
            None => Effect::None,
        }
    }

    pub fn retry(&mut self) -> Effect {
        match self.controller.retry() {
            Some(request) => self.begin_session(request),
            None => Effect::None,
        }
    }

    fn begin_session(&mut self, request: LoadRequest) -> Effect {
        let (sink, subscription) = subscribe(request.session);
        self.page_view.attach(subscription);
        self.mode = Mode::Normal;
        self.measure_card();
        self.card_animator.snap(self.controller.targets());
        self.card = self.card_animator.current();
        Effect::Load {
            url: request.url,
            sink,
        }
    }

    /// "Show more" from the partial tier: back to the top of the page, which
    /// brings the full card back
    pub fn show_more(&mut self) {
        if self.is_viewing() && self.controller.targets().tier == ContentTier::Partial {
            self.page_view.to_top();
        }
    }

    pub fn toolbar(&mut self, action: ToolbarAction) {
        let id = match self.controller.selected_post() {
            Some(post) => post.id,
            None => match self.highlighted_post() {
                Some(post) => post.id,
                None => return,
            },
        };
        let message = self.engagement.entry(id).or_default().apply(action);
        if let Some(message) = message {
            self.set_status(message);
        }
    }

    // ---- per-frame work ----

    /// Apply queued loader events of the current session
    pub fn poll_content_events(&mut self) {
        for (session, event) in self.page_view.drain_events() {
            if !self.controller.on_content_event(session, &event) {
                continue;
            }
            match event {
                ContentEvent::LoadFinished(page) => self.page_view.set_page(page),
                ContentEvent::LoadError(message) => {
                    tracing::debug!("Page view showing error: {}", message);
                }
                _ => {}
            }
        }
    }

    /// Advance scrolling and the card animation to `now`
    pub fn update_frame(&mut self, now: Instant) {
        if self.is_viewing() {
            if let (Some(line), Some(session)) = (self.page_view.update(now), self.page_view.session()) {
                let y = self.projection.scroll_dp(line);
                self.controller
                    .on_content_event(session, &ContentEvent::ScrollChanged(y));
            }
            self.card = self.card_animator.update(self.controller.targets(), now);
        }

        if let Some(status) = &self.status {
            if now.saturating_duration_since(status.shown_at) >= STATUS_TIMEOUT {
                self.status = None;
            }
        }
    }

    /// Whether the next frame should come at animation rate
    pub fn needs_animation(&self) -> bool {
        self.is_viewing() && (self.page_view.is_scrolling() || self.card_animator.is_animating())
    }

    // ---- input ----

    pub fn scroll_wheel(&mut self, lines: i32) {
        if self.is_viewing() {
            self.page_view.scroll_by(lines);
        } else if lines > 0 {
            self.move_down();
        } else if lines < 0 {
            self.move_up();
        }
    }

    pub fn handle_action(&mut self, action: Action) -> Effect {
        if action != Action::PendingG {
            self.clear_pending_key();
        }

        match self.mode {
            Mode::MoreMenu { selected } => return self.handle_menu_action(action, selected),
            Mode::Help => {
                self.mode = Mode::Normal;
                return Effect::None;
            }
            Mode::Normal => {}
        }

        let viewing = self.is_viewing();
        match action {
            Action::Quit => self.should_quit = true,
            Action::PendingG => self.pending_key = Some('g'),
            Action::MoveDown if viewing => self.page_view.line_down(),
            Action::MoveUp if viewing => self.page_view.line_up(),
            Action::MoveDown => self.move_down(),
            Action::MoveUp => self.move_up(),
            Action::ScrollHalfPageDown if viewing => self.page_view.half_page_down(),
            Action::ScrollHalfPageUp if viewing => self.page_view.half_page_up(),
            Action::ScrollPageDown if viewing => self.page_view.page_down(),
            Action::ScrollPageUp if viewing => self.page_view.page_up(),
            Action::ScrollHalfPageDown | Action::ScrollPageDown => {
                self.select_index(self.selected.saturating_add(FEED_HALF_PAGE))
            }
            Action::ScrollHalfPageUp | Action::ScrollPageUp => {
                self.select_index(self.selected.saturating_sub(FEED_HALF_PAGE))
            }
            Action::JumpToTop if viewing => self.page_view.to_top(),
            Action::JumpToBottom if viewing => self.page_view.to_bottom(),
            Action::JumpToTop => self.select_index(0),
            Action::JumpToBottom => self.select_index(usize::MAX),
            Action::OpenLink if !viewing => return self.open_link(),
            Action::Close | Action::ExitMode if viewing => self.close_viewer(),
            Action::ExitMode => self.clear_status(),
            Action::Reload if viewing => return self.reload(),
            Action::More if viewing => self.mode = Mode::MoreMenu { selected: 0 },
            Action::ShowMore => self.show_more(),
            Action::Comment => self.toolbar(ToolbarAction::Comment),
            Action::Repost => self.toolbar(ToolbarAction::Repost),
            Action::Like => self.toolbar(ToolbarAction::Like),
            Action::Bookmark => self.toolbar(ToolbarAction::Bookmark),
            Action::Share => self.toolbar(ToolbarAction::Share),
            Action::Help => self.mode = Mode::Help,
            _ => {}
        }
        Effect::None
    }

    fn handle_menu_action(&mut self, action: Action, selected: usize) -> Effect {
        let count = MenuItem::ALL.len();
        match action {
            Action::MenuDown => self.mode = Mode::MoreMenu { selected: (selected + 1) % count },
            Action::MenuUp => {
                self.mode = Mode::MoreMenu {
                    selected: (selected + count - 1) % count,
                }
            }
            Action::Confirm => {
                self.mode = Mode::Normal;
                match MenuItem::ALL.get(selected) {
                    Some(MenuItem::OpenInBrowser) => {
                        if let Some(url) = self.controller.selected_post().and_then(|p| p.url.clone()) {
                            return Effect::OpenInBrowser(url);
                        }
                    }
                    Some(MenuItem::CloseViewer) => self.close_viewer(),
                    None => {}
                }
            }
            Action::ExitMode => self.mode = Mode::Normal,
            _ => {}
        }
        Effect::None
    }
}
