use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::MenuItem;
use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// The "More" menu of the control bar
    pub fn render_more_menu(frame: &mut Frame, selected: usize, theme: &Theme) {
        let area = frame.area();
        let width = 30u16.min(area.width.saturating_sub(2));
        let height = (MenuItem::ALL.len() as u16 + 2).min(area.height);
        let popup = centered_rect(width, height, area);

        let lines: Vec<Line> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == selected {
                    Line::from(Span::styled(
                        format!("▸ {}", item.label()),
                        Style::default()
                            .fg(theme.on_surface)
                            .bg(theme.surface_variant)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(format!("  {}", item.label()), theme.text()))
                }
            })
            .collect();

        let block = Block::default()
            .title(" More ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.primary))
            .style(Style::default().bg(theme.surface));

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }

    pub fn render_help(frame: &mut Frame, theme: &Theme) {
        let entries = [
            ("j / k", "Move / scroll"),
            ("<C-d> <C-u>", "Half page"),
            ("gg / G", "Top / bottom"),
            ("Enter", "Open post link"),
            ("x / Esc", "Close page"),
            ("r", "Reload / retry"),
            ("m", "More menu"),
            ("e", "Show more"),
            ("c p l b s", "Comment repost like bookmark share"),
            ("q", "Quit"),
        ];

        let area = frame.area();
        let width = 52u16.min(area.width.saturating_sub(2));
        let height = (entries.len() as u16 + 4).min(area.height);
        let popup = centered_rect(width, height, area);

        let mut lines: Vec<Line> = entries
            .iter()
            .map(|(keys, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("{:>12}  ", keys),
                        Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(*desc, theme.text()),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("any key to close", theme.muted())).alignment(Alignment::Center));

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.outline))
            .style(Style::default().bg(theme.surface));

        frame.render_widget(Clear, popup);
        frame.render_widget(Paragraph::new(lines).block(block), popup);
    }
}

/// Rect of `width` x `height` centred in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 20, 50, 10));
        assert_eq!(centered_rect(200, 10, area).width, 100);
    }
}
