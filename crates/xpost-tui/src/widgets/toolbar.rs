use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

use crate::engagement::{Engagement, ToolbarAction};
use crate::theme::{blend, Theme};

const BUTTONS: [ToolbarAction; 5] = [
    ToolbarAction::Comment,
    ToolbarAction::Repost,
    ToolbarAction::Like,
    ToolbarAction::Bookmark,
    ToolbarAction::Share,
];

/// Opacity of icons and counters
const TOOLBAR_ALPHA: f32 = 0.6;

fn icon(action: ToolbarAction, liked: bool) -> &'static str {
    match action {
        ToolbarAction::Comment => "✎",
        ToolbarAction::Repost => "⇄",
        ToolbarAction::Like if liked => "♥",
        ToolbarAction::Like => "♡",
        ToolbarAction::Bookmark => "⚑",
        ToolbarAction::Share => "↗",
    }
}

/// Comment / repost / like / bookmark / share spread evenly over `width`
/// columns, drawn on `bg`
pub fn toolbar_line(engagement: &Engagement, theme: &Theme, bg: Color, width: u16) -> Line<'static> {
    let muted = blend(theme.on_surface, bg, TOOLBAR_ALPHA);

    let groups: Vec<Vec<Span<'static>>> = BUTTONS
        .iter()
        .map(|&action| {
            let liked = action == ToolbarAction::Like && engagement.liked;
            let icon_color = if liked { theme.like } else { muted };
            let mut spans = vec![Span::styled(icon(action, liked), Style::default().fg(icon_color))];
            if let Some(count) = engagement.count(action) {
                spans.push(Span::styled(format!(" {}", count), Style::default().fg(muted)));
            }
            spans
        })
        .collect();

    let used: usize = groups
        .iter()
        .flat_map(|g| g.iter())
        .map(|span| span.content.width())
        .sum();

    // Space-around: equal gaps on both sides of every group
    let slots = groups.len() * 2;
    let free = (width as usize).saturating_sub(used);
    let gap = free / slots;
    let mut extra = free % slots;

    let mut spans = Vec::new();
    for group in groups {
        let left = gap + usize::from(extra > 0);
        extra = extra.saturating_sub(1);
        spans.push(Span::raw(" ".repeat(left)));
        spans.extend(group);
        spans.push(Span::raw(" ".repeat(gap)));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_default_counters() {
        let theme = Theme::default();
        let line = toolbar_line(&Engagement::default(), &theme, theme.surface, 60);
        let text = text(&line);
        assert!(text.contains("✎ 3"));
        assert!(text.contains("⇄ 1"));
        assert!(text.contains("♡ 12"));
        assert!(!text.contains("⚑ 0"));
        assert!(text.width() <= 60);
    }

    #[test]
    fn test_liked_heart_uses_like_color() {
        let theme = Theme::default();
        let engagement = Engagement {
            liked: true,
            likes: 13,
            ..Default::default()
        };
        let line = toolbar_line(&engagement, &theme, theme.surface, 60);
        let heart = line.spans.iter().find(|s| s.content == "♥").unwrap();
        assert_eq!(heart.style.fg, Some(theme.like));
    }

    #[test]
    fn test_narrow_width_does_not_panic() {
        let theme = Theme::default();
        let line = toolbar_line(&Engagement::default(), &theme, theme.surface, 3);
        assert!(!line.spans.is_empty());
    }
}
