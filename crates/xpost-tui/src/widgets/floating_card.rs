use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use xpost_core::immersion::{CardTargets, ContentTier, ProfileFade};
use xpost_core::Post;

use crate::app::App;
use crate::layout::CARD_INNER_PADDING;
use crate::text::{truncate_to_width, wrap_text_unicode};
use crate::theme::{blend, Theme};

use super::toolbar::toolbar_line;

/// Radius at or above which the card gets rounded corners
const ROUNDED_CORNER_RADIUS: f32 = 16.0;

/// Opaque lower surface of the floating card
pub struct FloatingCardWidget;

impl FloatingCardWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let Some(post) = app.controller.selected_post() else {
            return;
        };
        if area.height == 0 || area.width == 0 {
            return;
        }

        let theme = &app.theme;
        let targets = app.controller.targets();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type(app.card.corner_radius))
            .border_style(Style::default().fg(theme.outline))
            .style(Style::default().bg(theme.surface));
        let inner = block.inner(area);

        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        let inner = Rect {
            x: inner.x + CARD_INNER_PADDING,
            width: inner.width.saturating_sub(CARD_INNER_PADDING * 2),
            ..inner
        };
        if inner.height == 0 {
            return;
        }

        // Toolbar pinned to the bottom row; everything else fills from the top
        let toolbar_row = Rect {
            y: inner.bottom() - 1,
            height: 1,
            ..inner
        };
        let engagement = app.engagement(post.id);
        frame.render_widget(
            Paragraph::new(toolbar_line(&engagement, theme, theme.surface, inner.width)),
            toolbar_row,
        );

        let body = Rect {
            height: inner.height - 1,
            ..inner
        };
        let lines = card_body(post, targets, theme, body.width);
        frame.render_widget(Paragraph::new(lines), body);
    }
}

pub fn border_type(corner_radius: f32) -> BorderType {
    if corner_radius >= ROUNDED_CORNER_RADIUS {
        BorderType::Rounded
    } else {
        BorderType::Plain
    }
}

/// Profile row and tiered text, top-aligned
fn card_body(post: &Post, targets: &CardTargets, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if let Some(fade) = targets.profile_fade {
        lines.extend(profile_row(post, fade, theme, width));
        lines.push(Line::from(""));
    }

    match targets.tier {
        ContentTier::Full => {
            for line in wrap_text_unicode(&post.content, width as usize) {
                lines.push(Line::from(Span::styled(line, theme.text())));
            }
        }
        ContentTier::Partial => {
            let teaser = truncate_to_width(&post.first_sentence(), width as usize);
            lines.push(Line::from(Span::styled(teaser, theme.text())));
            lines.push(Line::from(vec![
                Span::styled("Show more", theme.link().add_modifier(Modifier::BOLD)),
                Span::styled(" (e)", theme.muted()),
            ]));
        }
        ContentTier::Collapsed => {}
    }

    lines
}

/// Avatar, name, follow button and byline. `fade` dims the colors toward the
/// surface and narrows the row.
fn profile_row(post: &Post, fade: ProfileFade, theme: &Theme, width: u16) -> Vec<Line<'static>> {
    let fg = blend(theme.on_surface, theme.surface, fade.alpha);
    let muted = blend(theme.on_surface_variant, theme.surface, fade.alpha);
    let primary = blend(theme.primary, theme.surface, fade.alpha);

    let row_width = ((width as f32) * fade.scale).floor() as usize;
    let follow = " Follow ";
    let name_width = row_width.saturating_sub(follow.width() + 3);

    let name = truncate_to_width(&post.user_name, name_width);
    let byline = truncate_to_width(&post.byline(), row_width.saturating_sub(2));

    vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(primary)),
            Span::styled(name, Style::default().fg(fg).add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(
                follow,
                Style::default()
                    .fg(theme.on_primary)
                    .bg(primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(byline, Style::default().fg(muted)),
        ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpost_core::immersion::CardMetrics;
    use xpost_core::post::sample_posts;

    fn text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn body(progress: f32) -> String {
        let post = &sample_posts()[0];
        let targets = CardTargets::derive(progress, &CardMetrics::default());
        text(&card_body(post, &targets, &Theme::default(), 70))
    }

    #[test]
    fn test_full_tier_shows_everything() {
        let body = body(0.0);
        assert!(body.contains("Android Developers"));
        assert!(body.contains("Explore the release notes"));
        assert!(!body.contains("Show more"));
    }

    #[test]
    fn test_partial_tier_shows_teaser() {
        let body = body(0.5);
        assert!(body.contains("Android Developers"));
        assert!(body.contains("Jetpack Compose 1..."));
        assert!(body.contains("Show more"));
        assert!(!body.contains("release notes"));
    }

    #[test]
    fn test_collapsed_tier_is_empty() {
        assert_eq!(body(0.95), "");
    }

    #[test]
    fn test_border_follows_corner_radius() {
        assert_eq!(border_type(24.0), BorderType::Rounded);
        assert_eq!(border_type(16.0), BorderType::Rounded);
        assert_eq!(border_type(8.0), BorderType::Plain);
    }

    #[test]
    fn test_profile_fades_toward_surface() {
        let theme = Theme::default();
        let post = &sample_posts()[0];
        let faded = profile_row(post, ProfileFade { alpha: 0.2, scale: 0.8 }, &theme, 60);
        let name = &faded[0].spans[1];
        assert_ne!(name.style.fg, Some(theme.on_surface));
    }
}
