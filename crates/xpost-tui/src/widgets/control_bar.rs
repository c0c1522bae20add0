use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use xpost_core::post::strip_url_prefix;

use crate::app::App;
use crate::text::truncate_to_width;
use crate::theme::{blend, Theme};

/// Width of each round button, borders included
const BUTTON_WIDTH: u16 = 5;

/// Transparent bar above the card: close, reload, URL chip, more
pub struct ControlBarWidget;

impl ControlBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        if area.height == 0 || area.width < BUTTON_WIDTH * 3 {
            return;
        }
        let Some(post) = app.controller.selected_post() else {
            return;
        };

        let theme = &app.theme;
        let targets = app.controller.targets();

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Length(BUTTON_WIDTH),
                Constraint::Min(1),
                Constraint::Length(BUTTON_WIDTH),
            ])
            .split(area);

        // Hidden buttons leave their slots empty so the chip stays put
        if targets.side_buttons_visible() {
            let alpha = targets.header_side_alpha;
            render_button(frame, columns[0], "✕", alpha, theme);
            render_button(frame, columns[1], "↻", alpha, theme);
            render_button(frame, columns[3], "⋯", alpha, theme);
        }

        let url = post.url.as_deref().map(strip_url_prefix).unwrap_or_default();
        render_chip(frame, columns[2], &url, targets.header_center_scale, theme);
    }
}

fn render_button(frame: &mut Frame, area: Rect, glyph: &'static str, alpha: f32, theme: &Theme) {
    let fg = blend(theme.on_surface, theme.background, alpha);
    let bg = blend(theme.surface, theme.background, alpha);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(blend(theme.outline, theme.background, alpha)))
        .style(Style::default().bg(bg));
    let button = Paragraph::new(Span::styled(glyph, Style::default().fg(fg)))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(button, area);
}

/// The chip shrinks around its centre as the card collapses
fn render_chip(frame: &mut Frame, area: Rect, url: &str, scale: f32, theme: &Theme) {
    let chip = chip_rect(area, scale);
    if chip.width < 3 {
        return;
    }
    let text = truncate_to_width(url, chip.width.saturating_sub(4) as usize);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.outline))
        .style(Style::default().bg(theme.surface_variant));
    let paragraph = Paragraph::new(Span::styled(text, theme.text()))
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, chip);
}

pub fn chip_rect(area: Rect, scale: f32) -> Rect {
    let scale = if scale.is_finite() { scale.clamp(0.0, 1.0) } else { 1.0 };
    let width = ((area.width as f32) * scale).round() as u16;
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};
    use xpost_core::post::sample_posts;
    use xpost_core::AppConfig;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();
        terminal
            .draw(|frame| ControlBarWidget::render(frame, frame.area(), app))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_chip_shrinks_around_centre() {
        let area = Rect::new(10, 0, 40, 3);
        assert_eq!(chip_rect(area, 1.0), area);
        let chip = chip_rect(area, 0.8);
        assert_eq!(chip.width, 32);
        assert_eq!(chip.x, 14);
    }

    #[test]
    fn test_buttons_and_stripped_url() {
        let mut app = App::new(AppConfig::default(), sample_posts());
        app.move_down();
        app.open_link();
        let content = render(&app);
        assert!(content.contains("✕"));
        assert!(content.contains("m3.material.io"));
        assert!(!content.contains("https://"));
    }

    #[test]
    fn test_buttons_hidden_when_immersed() {
        let mut app = App::new(AppConfig::default(), sample_posts());
        app.open_link();
        app.controller.on_scroll_report(600.0);
        let content = render(&app);
        assert!(!content.contains("✕"));
        assert!(!content.contains("⋯"));
    }
}
