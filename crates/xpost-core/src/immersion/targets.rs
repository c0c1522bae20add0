use super::metrics::{
    CardMetrics, CARD_PADDING, COLLAPSED_TIER_START, CONTROL_BAR_HEIGHT, FULL_TIER_LIMIT,
    HEIGHT_SNAP_PROGRESS, MAX_CORNER_RADIUS, MAX_SLIDE_UP, MIN_CORNER_RADIUS,
    SIDE_BUTTON_MIN_ALPHA, TOOLBAR_ONLY_HEIGHT,
};

/// How much of the post text the card shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTier {
    /// Full post text
    Full,
    /// One truncated line plus "Show more"
    Partial,
    /// Text hidden, toolbar only
    Collapsed,
}

impl ContentTier {
    pub fn from_progress(progress: f32) -> Self {
        if progress < FULL_TIER_LIMIT {
            ContentTier::Full
        } else if progress < COLLAPSED_TIER_START {
            ContentTier::Partial
        } else {
            ContentTier::Collapsed
        }
    }

    /// Whether the profile row is rendered
    pub fn shows_profile(&self) -> bool {
        !matches!(self, ContentTier::Collapsed)
    }
}

/// Fade and shrink applied to the profile row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfileFade {
    pub alpha: f32,
    pub scale: f32,
}

impl ProfileFade {
    pub const OPAQUE: ProfileFade = ProfileFade { alpha: 1.0, scale: 1.0 };

    fn for_progress(progress: f32) -> Self {
        Self {
            alpha: (1.0 - 2.0 * progress).clamp(0.2, 1.0),
            scale: (1.0 - 0.2 * progress).clamp(0.8, 1.0),
        }
    }
}

/// Every target value of the floating card for one progress value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTargets {
    pub progress: f32,
    /// Height of the opaque card surface
    pub card_height: f32,
    /// Vertical offset of the card (negative = up)
    pub card_offset_y: f32,
    pub corner_radius: f32,
    /// Opacity of the close/reload/more buttons
    pub header_side_alpha: f32,
    /// Scale of the centre URL chip
    pub header_center_scale: f32,
    pub tier: ContentTier,
    /// `None` when the profile row is hidden
    pub profile_fade: Option<ProfileFade>,
    /// Card, control bar and padding together
    pub combined_height: f32,
    /// Distance from the bottom of the card area to the card's top edge
    pub card_top_edge_from_bottom: f32,
    /// Vertical offset of the control bar relative to the bottom edge
    pub header_offset_y: f32,
}

impl CardTargets {
    /// Derive all targets. `progress` is clamped to `[0, 1]`.
    pub fn derive(progress: f32, metrics: &CardMetrics) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let content_height = metrics.content_height();

        let card_height = if progress >= HEIGHT_SNAP_PROGRESS {
            TOOLBAR_ONLY_HEIGHT
        } else {
            content_height - (content_height - TOOLBAR_ONLY_HEIGHT) * progress
        };

        let card_offset_y = -MAX_SLIDE_UP * progress;
        let corner_radius = (MAX_CORNER_RADIUS - 16.0 * progress)
            .clamp(MIN_CORNER_RADIUS, MAX_CORNER_RADIUS);

        let combined_max = metrics.combined_max_height();
        let combined_min = metrics.combined_min_height();
        let combined_height = combined_max - (combined_max - combined_min) * progress;

        let tier = ContentTier::from_progress(progress);
        let profile_fade = match tier {
            ContentTier::Full => Some(ProfileFade::OPAQUE),
            ContentTier::Partial => Some(ProfileFade::for_progress(progress)),
            ContentTier::Collapsed => None,
        };

        Self {
            progress,
            card_height,
            card_offset_y,
            corner_radius,
            header_side_alpha: 1.0 - progress,
            header_center_scale: 1.0 - 0.2 * progress,
            tier,
            profile_fade,
            combined_height,
            card_top_edge_from_bottom: card_height + CARD_PADDING * 2.0 + card_offset_y,
            header_offset_y: card_offset_y
                - (combined_height - CONTROL_BAR_HEIGHT - CARD_PADDING * 2.0),
        }
    }

    /// Whether close/reload/more are drawn (otherwise spacers hold their place).
    /// Hidden at alpha <= 0.05; `1.0 - 0.95` rounds just above 0.05 in f32.
    pub fn side_buttons_visible(&self) -> bool {
        self.header_side_alpha > SIDE_BUTTON_MIN_ALPHA + f32::EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn targets(progress: f32) -> CardTargets {
        CardTargets::derive(progress, &CardMetrics::default())
    }

    #[test]
    fn test_fully_expanded() {
        let t = targets(0.0);
        assert_eq!(t.card_height, 346.0);
        assert_eq!(t.corner_radius, 24.0);
        assert_eq!(t.header_side_alpha, 1.0);
        assert_eq!(t.header_center_scale, 1.0);
        assert_eq!(t.card_offset_y, 0.0);
        assert_eq!(t.tier, ContentTier::Full);
        assert_eq!(t.profile_fade, Some(ProfileFade::OPAQUE));
        assert!(t.side_buttons_visible());
    }

    #[test]
    fn test_fully_collapsed() {
        let t = targets(1.0);
        assert_eq!(t.card_height, 80.0);
        assert_eq!(t.corner_radius, 8.0);
        assert_eq!(t.header_side_alpha, 0.0);
        assert_eq!(t.card_offset_y, -1.0);
        assert_eq!(t.tier, ContentTier::Collapsed);
        assert!(t.profile_fade.is_none());
        assert!(!t.side_buttons_visible());
    }

    #[test]
    fn test_height_snaps_at_threshold() {
        assert_eq!(targets(0.95).card_height, 80.0);
        assert!(targets(0.94).card_height > 80.0);
    }

    #[test]
    fn test_midpoint_height() {
        assert_eq!(targets(0.5).card_height, 213.0);
    }

    #[test]
    fn test_measured_content_height_drives_max() {
        let t = CardTargets::derive(0.0, &CardMetrics::measured(306.0));
        assert_eq!(t.card_height, 306.0);
        assert_eq!(t.combined_height, 306.0 + 56.0 + 16.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ContentTier::from_progress(0.199), ContentTier::Full);
        assert_eq!(ContentTier::from_progress(0.2), ContentTier::Partial);
        assert_eq!(ContentTier::from_progress(0.899), ContentTier::Partial);
        assert_eq!(ContentTier::from_progress(0.9), ContentTier::Collapsed);
    }

    #[test]
    fn test_profile_fade_in_partial_tier() {
        let fade = targets(0.3).profile_fade.unwrap();
        assert!((fade.alpha - 0.4).abs() < 1e-6);
        assert!((fade.scale - 0.94).abs() < 1e-6);

        // alpha floor
        let fade = targets(0.8).profile_fade.unwrap();
        assert_eq!(fade.alpha, 0.2);
        assert!(fade.scale >= 0.8);
    }

    #[test]
    fn test_side_buttons_hide_near_full_immersion() {
        assert!(targets(0.9).side_buttons_visible());
        assert!(!targets(0.96).side_buttons_visible());
    }

    #[test]
    fn test_side_buttons_hidden_at_snap_scroll() {
        // 570 of 600 dp is progress 0.95, alpha 1 - 0.95
        let t = CardTargets::derive(
            crate::immersion::progress::progress(570.0, 0.0),
            &CardMetrics::default(),
        );
        assert_eq!(t.card_height, 80.0);
        assert!(!t.side_buttons_visible());
        assert!(targets(0.94).side_buttons_visible());
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        assert_eq!(targets(-1.0), targets(0.0));
        assert_eq!(targets(3.0), targets(1.0));
        assert_eq!(targets(f32::NAN), targets(0.0));
    }

    #[test]
    fn test_header_sits_on_linear_card_top() {
        let t = targets(0.0);
        assert_eq!(t.header_offset_y, -346.0);
        assert_eq!(t.card_top_edge_from_bottom, 346.0 + 16.0);

        let t = targets(1.0);
        assert_eq!(t.header_offset_y, -1.0 - 80.0);
    }

    #[test]
    fn test_corner_radius_stays_in_range() {
        for i in 0..=100 {
            let r = targets(i as f32 / 100.0).corner_radius;
            assert!((8.0..=24.0).contains(&r));
        }
    }
}
