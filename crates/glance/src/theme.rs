//! Light/dark palettes for the dashboard

use glance_common::ThemeMode;
use ratatui::style::Color;

/// Resolved colors for the current theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub border: Color,
    pub accent: Color,
    pub healthy: Color,
    pub warning: Color,
    pub error: Color,
    pub user_msg: Color,
    pub assistant_msg: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub fn light() -> Self {
        Self {
            bg: Color::White,
            fg: Color::Black,
            muted: Color::DarkGray,
            border: Color::Gray,
            accent: Color::Blue,
            healthy: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            user_msg: Color::Blue,
            assistant_msg: Color::Green,
            highlight_bg: Color::LightBlue,
        }
    }

    pub fn dark() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            muted: Color::Gray,
            border: Color::DarkGray,
            accent: Color::Cyan,
            healthy: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            user_msg: Color::LightBlue,
            assistant_msg: Color::LightGreen,
            highlight_bg: Color::DarkGray,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}
