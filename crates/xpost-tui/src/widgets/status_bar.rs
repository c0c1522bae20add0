use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use xpost_core::immersion::LoadState;

use crate::app::{App, Mode};
use crate::text::truncate_to_width;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let bar = Style::default().bg(theme.surface_variant);

        let left = match app.status_message() {
            Some(message) => format!(" {}", message),
            None => format!(" {}", Self::summary(app)),
        };

        let hint = match app.mode {
            Mode::Normal if app.is_viewing() => " j/k:scroll x:close r:reload m:more ?:help ",
            Mode::Normal => " j/k:move enter:open l:like q:quit ?:help ",
            Mode::MoreMenu { .. } => " j/k:select enter:confirm esc:cancel ",
            Mode::Help => " any key to close ",
        };

        let hint_width = hint.width();
        let left = truncate_to_width(&left, (area.width as usize).saturating_sub(hint_width));
        let padding = (area.width as usize).saturating_sub(left.width() + hint_width);

        let line = Line::from(vec![
            Span::styled(left, bar.fg(theme.on_surface)),
            Span::styled(" ".repeat(padding), bar),
            Span::styled(hint, bar.fg(theme.on_surface_variant)),
        ]);

        frame.render_widget(Paragraph::new(line).style(bar), area);
    }

    fn summary(app: &App) -> String {
        if !app.is_viewing() {
            return format!("FEED | {}/{} posts", app.selected + 1, app.posts.len());
        }

        let state = match app.controller.load_state() {
            LoadState::Idle => "idle".to_string(),
            LoadState::Loading => format!("loading {}%", app.controller.loading_progress()),
            LoadState::Finished => "loaded".to_string(),
            LoadState::Failed(_) => "error".to_string(),
        };
        format!(
            "PAGE | {} | immersion {:.0}%",
            state,
            app.controller.progress() * 100.0
        )
    }
}
