use ratatui::style::{Color, Modifier, Style};

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen background behind the page view
    pub background: Color,
    /// Card, control bar buttons and popups
    pub surface: Color,
    /// URL chip and highlighted feed row
    pub surface_variant: Color,
    pub on_surface: Color,
    /// Bylines, counters, hints
    pub on_surface_variant: Color,
    pub outline: Color,
    /// Links and the follow button
    pub primary: Color,
    pub on_primary: Color,
    /// Filled heart and liked counter
    pub like: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::material_dark()
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.on_surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.on_surface_variant)
    }

    pub fn link(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::UNDERLINED)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.on_surface)
            .add_modifier(Modifier::BOLD)
    }

    /// `fg` at `alpha` opacity over `bg`
    pub fn fade(&self, fg: Color, bg: Color, alpha: f32) -> Color {
        blend(fg, bg, alpha)
    }
}

/// Composite `fg` over `bg`. Non-RGB colors cannot be mixed, so they switch
/// at half opacity.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = if alpha.is_finite() { alpha.clamp(0.0, 1.0) } else { 1.0 };
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| (b as f32 + (f as f32 - b as f32) * alpha).round() as u8;
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha >= 0.5 => fg,
        _ => bg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let fg = Color::Rgb(200, 100, 0);
        let bg = Color::Rgb(0, 0, 0);
        assert_eq!(blend(fg, bg, 1.0), fg);
        assert_eq!(blend(fg, bg, 0.0), bg);
        assert_eq!(blend(fg, bg, 0.5), Color::Rgb(100, 50, 0));
    }

    #[test]
    fn test_blend_clamps_alpha() {
        let fg = Color::Rgb(10, 10, 10);
        let bg = Color::Rgb(20, 20, 20);
        assert_eq!(blend(fg, bg, 2.0), fg);
        assert_eq!(blend(fg, bg, -1.0), bg);
    }

    #[test]
    fn test_blend_named_colors() {
        assert_eq!(blend(Color::Red, Color::Black, 0.8), Color::Red);
        assert_eq!(blend(Color::Red, Color::Black, 0.2), Color::Black);
    }
}
