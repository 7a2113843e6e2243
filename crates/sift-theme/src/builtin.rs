//! Built-in base themes: the defaults a user theme is merged over.
//!
//! One for 16-color terminals, and a dark and a light variant for
//! 256-color terminals. Which one applies is the caller's decision
//! (usually driven by `TERM`); this module only provides them.

use serde::Deserialize;
use sift_term::color::Color;

use crate::theme::ColorTheme;

impl ColorTheme {
    /// Base theme for terminals limited to the basic ANSI colors.
    pub const DEFAULT_16: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        dark_bg: Color::BLACK,
        prompt: Color::BLUE,
        match_: Color::GREEN,
        current: Color::YELLOW,
        current_match: Color::GREEN,
        spinner: Color::GREEN,
        info: Color::WHITE,
        cursor: Color::RED,
        selected: Color::MAGENTA,
        header: Color::CYAN,
        border: Color::BLACK,
    };

    /// Base theme for 256-color terminals with a dark background.
    pub const DARK_256: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        dark_bg: Color::Indexed(236),
        prompt: Color::Indexed(110),
        match_: Color::Indexed(108),
        current: Color::Indexed(254),
        current_match: Color::Indexed(151),
        spinner: Color::Indexed(148),
        info: Color::Indexed(144),
        cursor: Color::Indexed(161),
        selected: Color::Indexed(168),
        header: Color::Indexed(109),
        border: Color::Indexed(59),
    };

    /// Base theme for 256-color terminals with a light background.
    pub const LIGHT_256: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        dark_bg: Color::Indexed(251),
        prompt: Color::Indexed(25),
        match_: Color::Indexed(66),
        current: Color::Indexed(237),
        current_match: Color::Indexed(23),
        spinner: Color::Indexed(65),
        info: Color::Indexed(101),
        cursor: Color::Indexed(161),
        selected: Color::Indexed(168),
        header: Color::Indexed(31),
        border: Color::Indexed(145),
    };
}

/// Which built-in base theme to merge over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseTheme {
    #[default]
    Default16,
    Dark256,
    Light256,
}

impl BaseTheme {
    /// The theme values.
    #[must_use]
    pub const fn theme(self) -> &'static ColorTheme {
        match self {
            Self::Default16 => &ColorTheme::DEFAULT_16,
            Self::Dark256 => &ColorTheme::DARK_256,
            Self::Light256 => &ColorTheme::LIGHT_256,
        }
    }

    /// Config name of this base theme.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default16 => "default16",
            Self::Dark256 => "dark256",
            Self::Light256 => "light256",
        }
    }

    /// Look up a base theme by config name. Also accepts `16`, `dark` and
    /// `light`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "default16" | "16" => Some(Self::Default16),
            "dark256" | "dark" => Some(Self::Dark256),
            "light256" | "light" => Some(Self::Light256),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
