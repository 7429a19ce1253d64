//! Theme configuration

use iced::{Color, Theme};

use crate::config::ThemeChoice;

/// Colors used by the custom widget styles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub surface: Color,
    pub surface_highlight: Color,
    pub border: Color,
    pub primary: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_placeholder: Color,
    pub selection: Color,
}

impl Palette {
    pub const DARK: Palette = Palette {
        background: Color::from_rgb(0.09, 0.09, 0.11),
        surface: Color::from_rgb(0.12, 0.12, 0.14),
        surface_highlight: Color::from_rgb(0.18, 0.18, 0.22),
        border: Color::from_rgb(0.25, 0.25, 0.28),
        primary: Color::from_rgb(0.4, 0.55, 1.0),
        text: Color::from_rgb(0.95, 0.95, 0.95),
        text_muted: Color::from_rgb(0.55, 0.55, 0.6),
        text_placeholder: Color::from_rgb(0.4, 0.4, 0.45),
        selection: Color::from_rgb(0.2, 0.25, 0.35),
    };

    pub const LIGHT: Palette = Palette {
        background: Color::from_rgb(0.96, 0.96, 0.97),
        surface: Color::WHITE,
        surface_highlight: Color::from_rgb(0.9, 0.91, 0.94),
        border: Color::from_rgb(0.82, 0.82, 0.85),
        primary: Color::from_rgb(0.2, 0.38, 0.9),
        text: Color::from_rgb(0.1, 0.1, 0.12),
        text_muted: Color::from_rgb(0.42, 0.42, 0.48),
        text_placeholder: Color::from_rgb(0.6, 0.6, 0.65),
        selection: Color::from_rgb(0.78, 0.84, 1.0),
    };

    pub fn for_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Self::DARK,
            ThemeChoice::Light => Self::LIGHT,
        }
    }
}

/// Built-in iced theme matching the palette.
pub fn iced_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
    }
}
