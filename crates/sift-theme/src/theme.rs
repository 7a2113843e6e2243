//! Color themes: role-to-color assignments, possibly partial.
//!
//! A user theme usually sets only a few slots; the rest stay
//! [`Color::Undefined`] and are filled from a base theme by
//! [`ColorTheme::merged`]. An explicit [`Color::Default`] is a real
//! choice and survives merging.

use serde::Deserialize;
use sift_term::color::Color;

/// Thirteen color slots that feed the twelve palette entries.
///
/// In config files each slot also answers to its short name: `hl`
/// (match), `fg+` (current), `hl+` (current match), `bg+` (dark bg),
/// `pointer` (cursor), `marker` (selected).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorTheme {
    /// Normal text.
    pub fg: Color,
    /// Normal background.
    pub bg: Color,
    /// Background behind the current line, cursor and selection marker.
    #[serde(alias = "bg+", alias = "dark-bg")]
    pub dark_bg: Color,
    pub prompt: Color,
    #[serde(rename = "match", alias = "hl")]
    pub match_: Color,
    #[serde(alias = "fg+")]
    pub current: Color,
    #[serde(alias = "hl+", alias = "current-match")]
    pub current_match: Color,
    pub spinner: Color,
    pub info: Color,
    #[serde(alias = "pointer")]
    pub cursor: Color,
    #[serde(alias = "marker")]
    pub selected: Color,
    pub header: Color,
    pub border: Color,
}

impl ColorTheme {
    /// A theme with every slot undefined: merging it changes nothing.
    #[must_use]
    pub const fn empty() -> Self {
        let u = Color::Undefined;
        Self {
            fg: u,
            bg: u,
            dark_bg: u,
            prompt: u,
            match_: u,
            current: u,
            current_match: u,
            spinner: u,
            info: u,
            cursor: u,
            selected: u,
            header: u,
            border: u,
        }
    }

    /// Fill every undefined slot of `self` from `base`.
    #[must_use]
    pub const fn or(self, base: &Self) -> Self {
        Self {
            fg: self.fg.or(base.fg),
            bg: self.bg.or(base.bg),
            dark_bg: self.dark_bg.or(base.dark_bg),
            prompt: self.prompt.or(base.prompt),
            match_: self.match_.or(base.match_),
            current: self.current.or(base.current),
            current_match: self.current_match.or(base.current_match),
            spinner: self.spinner.or(base.spinner),
            info: self.info.or(base.info),
            cursor: self.cursor.or(base.cursor),
            selected: self.selected.or(base.selected),
            header: self.header.or(base.header),
            border: self.border.or(base.border),
        }
    }

    /// The theme a session actually draws with.
    ///
    /// With `force_black`, the user's background becomes black before the
    /// merge, overriding both the user value and the base.
    #[must_use]
    pub const fn merged(user: &Self, base: &Self, force_black: bool) -> Self {
        let mut theme = *user;
        if force_black {
            theme.bg = Color::BLACK;
        }
        theme.or(base)
    }

    /// Whether every slot is undefined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// All slots with their config names, in declaration order.
    #[must_use]
    pub const fn slots(&self) -> [(&'static str, Color); 13] {
        [
            ("fg", self.fg),
            ("bg", self.bg),
            ("dark_bg", self.dark_bg),
            ("prompt", self.prompt),
            ("match", self.match_),
            ("current", self.current),
            ("current_match", self.current_match),
            ("spinner", self.spinner),
            ("info", self.info),
            ("cursor", self.cursor),
            ("selected", self.selected),
            ("header", self.header),
            ("border", self.border),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
