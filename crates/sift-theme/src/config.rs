//! Theme configuration: which base theme, which overrides, and whether
//! colors are on at all.

use serde::Deserialize;

use crate::builtin::BaseTheme;
use crate::palette::Palette;
use crate::theme::ColorTheme;

/// User-facing theme settings. Every field is optional in config files.
///
/// ```toml
/// base = "dark256"
/// force_black = true
///
/// [colors]
/// hl = 108
/// pointer = "red"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Base theme to merge over. `None` leaves the choice to the caller.
    pub base: Option<BaseTheme>,
    /// Draw everything in the terminal's default colors.
    pub monochrome: bool,
    /// Pin the normal background to black.
    pub force_black: bool,
    /// Per-slot overrides.
    pub colors: ColorTheme,
}

impl ThemeConfig {
    /// The user theme to resolve with, or `None` when colors are off.
    #[must_use]
    pub const fn user_theme(&self) -> Option<&ColorTheme> {
        if self.monochrome {
            None
        } else {
            Some(&self.colors)
        }
    }

    /// The configured base theme, falling back to the 16-color one.
    #[must_use]
    pub fn base_theme(&self) -> BaseTheme {
        self.base.unwrap_or_default()
    }

    /// Fill in the base theme if the config did not name one.
    #[must_use]
    pub fn with_default_base(mut self, base: BaseTheme) -> Self {
        self.base = self.base.or(Some(base));
        self
    }

    /// Resolve the session palette from these settings.
    #[must_use]
    pub fn palette(&self) -> Palette {
        Palette::resolve(self.user_theme(), self.base_theme().theme(), self.force_black)
    }
}
