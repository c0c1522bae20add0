//! Geometry constants of the floating card, in density-independent pixels.

/// Scroll distance after which the card is fully collapsed
pub const MAX_SCROLL_FOR_MINIMIZE: f32 = 600.0;
/// Card height when fully immersed
pub const TOOLBAR_ONLY_HEIGHT: f32 = 80.0;
/// Upper bound for the measured content height
pub const STATIC_MAX_CARD_HEIGHT: f32 = 346.0;
/// Upward slide at full collapse. Kept tiny so the card stays put.
pub const MAX_SLIDE_UP: f32 = 1.0;
pub const CONTROL_BAR_HEIGHT: f32 = 56.0;
pub const CARD_PADDING: f32 = 8.0;
pub const MAX_CORNER_RADIUS: f32 = 24.0;
pub const MIN_CORNER_RADIUS: f32 = 8.0;

/// Progress at which the card height snaps to the toolbar-only floor
pub const HEIGHT_SNAP_PROGRESS: f32 = 0.95;
/// Side buttons are replaced by spacers at or below this alpha
pub const SIDE_BUTTON_MIN_ALPHA: f32 = 0.05;
pub const FULL_TIER_LIMIT: f32 = 0.2;
pub const COLLAPSED_TIER_START: f32 = 0.9;

/// Card height bounds for the current post
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMetrics {
    content_height: f32,
}

impl Default for CardMetrics {
    fn default() -> Self {
        Self {
            content_height: STATIC_MAX_CARD_HEIGHT,
        }
    }
}

impl CardMetrics {
    /// Build from an off-screen measurement of the card content
    pub fn measured(height: f32) -> Self {
        Self {
            content_height: clamp_content_height(height),
        }
    }

    /// Fully expanded card height
    #[inline]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    /// Card plus control bar and vertical padding, fully expanded
    #[inline]
    pub fn combined_max_height(&self) -> f32 {
        self.content_height + CONTROL_BAR_HEIGHT + CARD_PADDING * 2.0
    }

    /// Card plus control bar and vertical padding, fully immersed
    #[inline]
    pub fn combined_min_height(&self) -> f32 {
        TOOLBAR_ONLY_HEIGHT + CONTROL_BAR_HEIGHT + CARD_PADDING * 2.0
    }
}

/// Clamp a measured height to `[TOOLBAR_ONLY_HEIGHT, STATIC_MAX_CARD_HEIGHT]`
pub fn clamp_content_height(height: f32) -> f32 {
    if !height.is_finite() {
        return STATIC_MAX_CARD_HEIGHT;
    }
    height.clamp(TOOLBAR_ONLY_HEIGHT, STATIC_MAX_CARD_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_height_is_clamped() {
        assert_eq!(CardMetrics::measured(40.0).content_height(), 80.0);
        assert_eq!(CardMetrics::measured(500.0).content_height(), 346.0);
        assert_eq!(CardMetrics::measured(306.0).content_height(), 306.0);
        assert_eq!(CardMetrics::measured(f32::NAN).content_height(), 346.0);
    }

    #[test]
    fn test_combined_heights() {
        let metrics = CardMetrics::default();
        assert_eq!(metrics.combined_max_height(), 346.0 + 56.0 + 16.0);
        assert_eq!(metrics.combined_min_height(), 80.0 + 56.0 + 16.0);
    }
}
