//! Theme registry and loader

mod dracula;
mod material;
mod nord;

use ratatui::style::Color;
use xpost_core::config::{ThemeColorOverrides, ThemeConfig};

use crate::theme::Theme;

pub use material::{dark as material_dark, light as material_light};

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config. Unknown names fall back to dark.
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "dark" | "material-dark" => material::dark(),
        "light" | "material-light" => material::light(),
        "nord" => nord::default(),
        "dracula" => dracula::default(),
        other => {
            tracing::warn!("Unknown theme '{}', using dark", other);
            material::dark()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    let slots: [(&Option<String>, &mut Color); 6] = [
        (&overrides.background, &mut theme.background),
        (&overrides.surface, &mut theme.surface),
        (&overrides.on_surface, &mut theme.on_surface),
        (&overrides.primary, &mut theme.primary),
        (&overrides.like, &mut theme.like),
        (&overrides.error, &mut theme.error),
    ];

    for (hex, slot) in slots {
        if let Some(hex) = hex {
            match parse_hex_color(hex) {
                Some(color) => *slot = color,
                None => tracing::warn!("Ignoring invalid color override '{}'", hex),
            }
        }
    }

    theme
}

pub fn available_themes() -> Vec<&'static str> {
    vec!["dark", "light", "nord", "dracula"]
}
