use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, LineGauge, Paragraph, Wrap},
    Frame,
};

use xpost_core::immersion::LoadState;

use crate::app::App;

use super::popup::centered_rect;

/// The loaded page behind the floating card
pub struct PageViewWidget;

impl PageViewWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = app.theme.clone();
        frame.render_widget(Block::default().style(Style::default().bg(theme.background)), area);

        let scroll = app.page_view.scroll() as usize;
        let visible: Vec<Line> = app
            .page_view
            .lines()
            .iter()
            .skip(scroll)
            .take(area.height as usize)
            .map(|line| Line::from(Span::styled(line.clone(), theme.text())))
            .collect();
        let has_content = !visible.is_empty();
        frame.render_widget(Paragraph::new(visible), area);

        match app.controller.load_state() {
            LoadState::Loading => {
                let progress = app.controller.loading_progress();
                let gauge = LineGauge::default()
                    .filled_style(Style::default().fg(theme.primary))
                    .unfilled_style(Style::default().fg(theme.surface_variant))
                    .label(format!("{:>3}%", progress))
                    .ratio(f64::from(progress.min(100)) / 100.0);
                frame.render_widget(gauge, Rect { height: 1, ..area });

                if !has_content && area.height > 2 {
                    let hint = Paragraph::new(Span::styled("Loading…", theme.muted()))
                        .alignment(Alignment::Center);
                    frame.render_widget(hint, Rect { y: area.y + 2, height: 1, ..area });
                }
            }
            LoadState::Failed(message) => {
                let message = message.clone();
                render_error(frame, area, &message, &theme);
            }
            LoadState::Finished | LoadState::Idle => {}
        }
    }
}

/// Error panel with the retry affordance
fn render_error(frame: &mut Frame, area: Rect, message: &str, theme: &crate::theme::Theme) {
    let width = 56u16.min(area.width.saturating_sub(4));
    let height = 7u16.min(area.height);
    // Keep the panel above the card, in the upper part of the screen
    let popup = centered_rect(width, height, Rect { height: area.height / 2, ..area });

    let block = Block::default()
        .title(" Page failed to load ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error))
        .style(Style::default().bg(theme.surface));

    let text = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(theme.error))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[", theme.muted()),
            Span::styled("r", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::styled("] Retry   [", theme.muted()),
            Span::styled("Esc", Style::default().fg(theme.primary).add_modifier(Modifier::BOLD)),
            Span::styled("] Close", theme.muted()),
        ]),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}
