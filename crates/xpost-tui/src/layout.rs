//! Projection of the card geometry (dp) onto terminal cells

use ratatui::layout::Rect;
use xpost_core::config::UiConfig;
use xpost_core::immersion::metrics::{CARD_PADDING, CONTROL_BAR_HEIGHT};
use xpost_core::Post;

use crate::animation::AnimatedCard;
use crate::text::wrap_text_unicode;

/// Rows used by the control bar (bordered buttons)
pub const HEADER_ROWS: u16 = 3;
/// Smallest card that still fits borders and the toolbar
pub const MIN_CARD_ROWS: u16 = 3;
/// Columns kept free on each side of the card
pub const CARD_MARGIN: u16 = 1;
/// Left/right padding inside the card border
pub const CARD_INNER_PADDING: u16 = 1;
/// Border (2) + profile (2) + gap + gap + toolbar
const CARD_CHROME_ROWS: usize = 7;

/// Converts between dp and terminal rows
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub dp_per_row: f32,
    pub scroll_dp_per_line: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&UiConfig::default())
    }
}

impl Projection {
    pub fn from_config(config: &UiConfig) -> Self {
        Self {
            dp_per_row: sanitize(config.dp_per_row, 16.0),
            scroll_dp_per_line: sanitize(config.scroll_dp_per_line, 20.0),
        }
    }

    /// Nearest whole row count for a dp length. Negative lengths map to 0.
    pub fn rows(&self, dp: f32) -> u16 {
        if !dp.is_finite() || dp <= 0.0 {
            return 0;
        }
        (dp / self.dp_per_row).round().min(u16::MAX as f32) as u16
    }

    pub fn dp(&self, rows: u16) -> f32 {
        rows as f32 * self.dp_per_row
    }

    /// Scroll position reported for the first visible page line
    pub fn scroll_dp(&self, line: u16) -> f32 {
        line as f32 * self.scroll_dp_per_line
    }
}

fn sanitize(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

/// Screen regions while a page is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImmersionLayout {
    /// The page view; the card overlays its lower part
    pub page: Rect,
    pub header: Rect,
    pub card: Rect,
}

/// Place the control bar and the card for one frame.
///
/// The card is anchored to the bottom edge. The header rests on the linearly
/// interpolated card top, so it can float above the card while the height
/// snaps to the toolbar-only size.
pub fn immersion_layout(area: Rect, card: &AnimatedCard, projection: &Projection) -> ImmersionLayout {
    let lift = projection.rows(-card.card_offset_y);
    let card_rows = projection
        .rows(card.card_height)
        .max(MIN_CARD_ROWS)
        .min(area.height.saturating_sub(lift));

    let inner_x = area.x + CARD_MARGIN.min(area.width / 2);
    let inner_width = area.width.saturating_sub(CARD_MARGIN * 2);

    let card_bottom = area.bottom().saturating_sub(lift);
    let card_rect = Rect {
        x: inner_x,
        y: card_bottom.saturating_sub(card_rows).max(area.y),
        width: inner_width,
        height: card_rows,
    };

    let linear_card = card.combined_height - CONTROL_BAR_HEIGHT - CARD_PADDING * 2.0;
    let header_bottom = card_bottom
        .saturating_sub(projection.rows(linear_card))
        .max(area.y);
    let header_top = header_bottom.saturating_sub(HEADER_ROWS).max(area.y);
    let header_rect = Rect {
        x: inner_x,
        y: header_top,
        width: inner_width,
        height: header_bottom - header_top,
    };

    ImmersionLayout {
        page: area,
        header: header_rect,
        card: card_rect,
    }
}

/// Natural rows of the fully expanded card for `post` at `width` columns
pub fn card_content_rows(post: &Post, width: u16) -> u16 {
    let text_width = width
        .saturating_sub(CARD_MARGIN * 2 + 2 + CARD_INNER_PADDING * 2)
        .max(1) as usize;
    let text_lines = wrap_text_unicode(&post.content, text_width).len();
    (CARD_CHROME_ROWS + text_lines).min(u16::MAX as usize) as u16
}

/// Off-screen measurement of the card's natural height, in dp
pub fn measure_card_height(post: &Post, width: u16, projection: &Projection) -> f32 {
    projection.dp(card_content_rows(post, width))
}

/// Rows the page needs below its last line so it can scroll clear of the
/// collapsed card
pub fn page_bottom_inset(projection: &Projection) -> u16 {
    projection.rows(xpost_core::immersion::metrics::TOOLBAR_ONLY_HEIGHT) + HEADER_ROWS
}

#[cfg(test)]
mod tests {
    use super::*;
    use xpost_core::immersion::{CardMetrics, CardTargets};
    use xpost_core::post::sample_posts;

    fn animated(progress: f32) -> AnimatedCard {
        let t = CardTargets::derive(progress, &CardMetrics::default());
        AnimatedCard {
            card_height: t.card_height,
            card_offset_y: t.card_offset_y,
            corner_radius: t.corner_radius,
            combined_height: t.combined_height,
        }
    }

    #[test]
    fn test_rows_rounding() {
        let p = Projection::default();
        assert_eq!(p.rows(80.0), 5);
        assert_eq!(p.rows(346.0), 22);
        assert_eq!(p.rows(-1.0), 0);
        assert_eq!(p.rows(f32::NAN), 0);
        assert_eq!(p.scroll_dp(30), 600.0);
    }

    #[test]
    fn test_invalid_projection_falls_back() {
        let p = Projection::from_config(&UiConfig {
            dp_per_row: 0.0,
            scroll_dp_per_line: f32::NAN,
            ..Default::default()
        });
        assert_eq!(p.dp_per_row, 16.0);
        assert_eq!(p.scroll_dp_per_line, 20.0);
    }

    #[test]
    fn test_expanded_layout() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = immersion_layout(area, &animated(0.0), &Projection::default());
        assert_eq!(layout.card.height, 22);
        assert_eq!(layout.card.bottom(), 40);
        assert_eq!(layout.header.bottom(), layout.card.y);
        assert_eq!(layout.header.height, HEADER_ROWS);
        assert_eq!(layout.card.x, 1);
        assert_eq!(layout.card.width, 78);
    }

    #[test]
    fn test_collapsed_layout() {
        let area = Rect::new(0, 0, 80, 40);
        let layout = immersion_layout(area, &animated(1.0), &Projection::default());
        assert_eq!(layout.card.height, 5);
        assert_eq!(layout.card.bottom(), 40);
        assert_eq!(layout.header.bottom(), layout.card.y);
    }

    #[test]
    fn test_layout_in_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 6);
        let layout = immersion_layout(area, &animated(0.0), &Projection::default());
        assert!(layout.card.height <= 6);
        assert!(layout.card.y >= area.y);
        assert!(layout.header.y >= area.y);
    }

    #[test]
    fn test_measure_card_height() {
        let post = &sample_posts()[1];
        // 82 chars at 74 text columns wraps to two lines
        assert_eq!(card_content_rows(post, 80), 9);
        assert_eq!(measure_card_height(post, 80, &Projection::default()), 144.0);

        // Narrower terminals need more lines
        assert!(card_content_rows(post, 30) > 9);
    }
}
