//! Material 3 baseline palettes

use ratatui::style::Color;
use crate::theme::Theme;

/// Shared across every palette
const LIKE: Color = Color::Rgb(0xe0, 0x24, 0x5e);

pub fn dark() -> Theme {
    Theme {
        background: Color::Rgb(0x14, 0x12, 0x18),
        surface: Color::Rgb(0x21, 0x1f, 0x26),
        surface_variant: Color::Rgb(0x49, 0x45, 0x4f),
        on_surface: Color::Rgb(0xe6, 0xe0, 0xe9),
        on_surface_variant: Color::Rgb(0xca, 0xc4, 0xd0),
        outline: Color::Rgb(0x93, 0x8f, 0x99),
        primary: Color::Rgb(0xd0, 0xbc, 0xff),
        on_primary: Color::Rgb(0x38, 0x1e, 0x72),
        like: LIKE,
        error: Color::Rgb(0xf2, 0xb8, 0xb5),
    }
}

pub fn light() -> Theme {
    Theme {
        background: Color::Rgb(0xfe, 0xf7, 0xff),
        surface: Color::Rgb(0xf3, 0xed, 0xf7),
        surface_variant: Color::Rgb(0xe7, 0xe0, 0xec),
        on_surface: Color::Rgb(0x1d, 0x1b, 0x20),
        on_surface_variant: Color::Rgb(0x49, 0x45, 0x4f),
        outline: Color::Rgb(0x79, 0x74, 0x7e),
        primary: Color::Rgb(0x65, 0x58, 0xa4),
        on_primary: Color::Rgb(0xff, 0xff, 0xff),
        like: LIKE,
        error: Color::Rgb(0xb3, 0x26, 0x1e),
    }
}
