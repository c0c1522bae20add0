use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Mode};
use crate::layout::immersion_layout;
use crate::widgets::{
    ControlBarWidget, FeedListWidget, FloatingCardWidget, PageViewWidget, PopupWidget,
    StatusBarWidget,
};

/// Draw one frame: the feed, or the page viewer with its floating card
pub fn draw(frame: &mut Frame, app: &mut App) {
    let size = frame.area();

    // Main layout: content + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);
    let content = main_layout[0];

    if app.is_viewing() {
        app.page_view.set_viewport(content.width, content.height);
        PageViewWidget::render(frame, content, app);

        let layout = immersion_layout(content, &app.card, &app.projection);
        ControlBarWidget::render(frame, layout.header, app);
        FloatingCardWidget::render(frame, layout.card, app);
    } else {
        FeedListWidget::render(frame, content, app);
    }

    StatusBarWidget::render(frame, main_layout[1], app);

    match app.mode {
        Mode::MoreMenu { selected } => PopupWidget::render_more_menu(frame, selected, &app.theme),
        Mode::Help => PopupWidget::render_help(frame, &app.theme),
        Mode::Normal => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Action;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Instant;
    use xpost_core::post::sample_posts;
    use xpost_core::AppConfig;

    fn draw_to_string(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn app() -> App {
        let mut app = App::new(AppConfig::default(), sample_posts());
        app.resize(80, 40);
        app
    }

    #[test]
    fn test_feed_frame() {
        let mut app = app();
        let content = draw_to_string(&mut app);
        assert!(content.contains("Android Developers"));
        assert!(content.contains("FEED"));
    }

    #[test]
    fn test_viewer_frame_shows_card_and_chip() {
        let mut app = app();
        app.handle_action(Action::MoveDown);
        app.open_link();
        app.update_frame(Instant::now());

        let content = draw_to_string(&mut app);
        assert!(content.contains("Material Design"));
        assert!(content.contains("m3.material.io"));
        assert!(content.contains("PAGE"));
    }

    #[test]
    fn test_more_menu_overlay() {
        let mut app = app();
        app.open_link();
        app.handle_action(Action::More);
        let content = draw_to_string(&mut app);
        assert!(content.contains("Open in browser"));
    }

    #[test]
    fn test_help_overlay() {
        let mut app = app();
        app.handle_action(Action::Help);
        let content = draw_to_string(&mut app);
        assert!(content.contains("Help"));
    }
}
