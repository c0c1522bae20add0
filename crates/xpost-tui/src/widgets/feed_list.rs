use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use xpost_core::Post;

use crate::app::App;
use crate::engagement::Engagement;
use crate::text::wrap_text_unicode;
use crate::theme::Theme;

use super::toolbar::toolbar_line;

pub struct FeedListWidget;

impl FeedListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        let theme = &app.theme;
        let block = Block::default()
            .title(Span::styled(" xpost ", theme.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.outline))
            .style(Style::default().bg(theme.background));

        let width = block.inner(area).width;
        let items: Vec<ListItem> = app
            .posts
            .iter()
            .map(|post| post_item(post, &app.engagement(post.id), theme, width))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(theme.surface_variant))
            .highlight_symbol("▌");

        frame.render_stateful_widget(list, area, &mut app.feed_state);
    }
}

/// One post card: profile row, text, link label, toolbar and a blank separator
fn post_item(post: &Post, engagement: &Engagement, theme: &Theme, width: u16) -> ListItem<'static> {
    // highlight symbol takes one column
    let width = width.saturating_sub(1);
    let mut lines = vec![Line::from(vec![
        Span::styled(post.user_name.clone(), theme.title()),
        Span::raw(" "),
        Span::styled(post.byline(), theme.muted()),
    ])];

    for line in wrap_text_unicode(&post.content, width.saturating_sub(1) as usize) {
        lines.push(Line::from(Span::styled(line, theme.text())));
    }

    if let Some(label) = post.link_label() {
        lines.push(Line::from(Span::styled(
            label,
            theme.link().add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(toolbar_line(engagement, theme, theme.background, width));
    lines.push(Line::from(""));

    ListItem::new(lines)
}
