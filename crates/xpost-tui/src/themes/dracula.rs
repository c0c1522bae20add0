//! Dracula theme
//! https://draculatheme.com/

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        background: Color::Rgb(0x28, 0x2a, 0x36),
        surface: Color::Rgb(0x21, 0x22, 0x2c),
        surface_variant: Color::Rgb(0x44, 0x47, 0x5a), // selection
        on_surface: Color::Rgb(0xf8, 0xf8, 0xf2),
        on_surface_variant: Color::Rgb(0x62, 0x72, 0xa4), // comment
        outline: Color::Rgb(0x5a, 0x5c, 0x6d),
        primary: Color::Rgb(0xbd, 0x93, 0xf9),
        on_primary: Color::Rgb(0x28, 0x2a, 0x36),
        like: Color::Rgb(0xe0, 0x24, 0x5e),
        error: Color::Rgb(0xff, 0x55, 0x55),
    }
}
