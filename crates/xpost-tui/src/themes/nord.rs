//! Nord theme
//! https://www.nordtheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x2e, 0x34, 0x40), // nord0
        surface: Color::Rgb(0x3b, 0x42, 0x52),    // nord1
        surface_variant: Color::Rgb(0x43, 0x4c, 0x5e), // nord2
        on_surface: Color::Rgb(0xec, 0xef, 0xf4), // nord6
        on_surface_variant: Color::Rgb(0xd8, 0xde, 0xe9), // nord4
        outline: Color::Rgb(0x4c, 0x56, 0x6a),    // nord3
        primary: Color::Rgb(0x88, 0xc0, 0xd0),    // nord8
        on_primary: Color::Rgb(0x2e, 0x34, 0x40),
        like: Color::Rgb(0xe0, 0x24, 0x5e),
        error: Color::Rgb(0xbf, 0x61, 0x6a),      // nord11
    }
}
