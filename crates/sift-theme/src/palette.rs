//! Palette resolution: from themes to the pairs every draw call uses.
//!
//! A [`Palette`] is built once per session, when the renderer starts, and
//! never changes afterwards. It is a plain value: the renderer owns it and
//! hands windows a shared handle, so there is no global to initialize and
//! every reader sees a fully built table.
//!
//! # Slot table
//!
//! Which theme slot feeds which entry, and over which background, is
//! fixed. Highlighted rows (current line, cursor, selection) sit on
//! `dark_bg`; everything else on `bg`:
//!
//! ```text
//! Default       default        / default
//! Normal        fg             / bg
//! Prompt        prompt         / bg
//! Match         match          / bg
//! Current       current        / dark_bg
//! CurrentMatch  current_match  / dark_bg
//! Spinner       spinner        / bg
//! Info          info           / bg
//! Cursor        cursor         / dark_bg
//! Selected      selected       / dark_bg
//! Header        header         / bg
//! Border        border         / bg
//! ```

use log::debug;
use sift_term::color::{Color, ColorPair};

use crate::role::{ColorRole, ROLE_COUNT};
use crate::theme::ColorTheme;

/// Resolved role → pair table for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pairs: [ColorPair; ROLE_COUNT],
}

impl Palette {
    /// Resolve the session palette.
    ///
    /// - `user == None` means colors are off: every role draws in the
    ///   terminal's default colors. Role indices are still recorded.
    /// - Otherwise each slot of `user` that is undefined is taken from
    ///   `base`, with `force_black` pinning the background to black first.
    ///
    /// Pure: the same inputs always give the same palette.
    #[must_use]
    pub fn resolve(user: Option<&ColorTheme>, base: &ColorTheme, force_black: bool) -> Self {
        let Some(user) = user else {
            debug!("palette: colors disabled, using terminal defaults");
            return Self::monochrome();
        };

        let theme = ColorTheme::merged(user, base, force_black);
        debug!("palette: resolved theme {theme:?} (force_black={force_black})");
        Self::from_theme(&theme)
    }

    /// Every role on the terminal's default colors.
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            pairs: ColorRole::ALL
                .map(|role| ColorPair::indexed(Color::Default, Color::Default, role.index())),
        }
    }

    /// Build the entries from a fully merged theme using the slot table.
    #[must_use]
    pub fn from_theme(t: &ColorTheme) -> Self {
        Self {
            pairs: ColorRole::ALL.map(|role| {
                let (fg, bg) = match role {
                    ColorRole::Default | ColorRole::User => (Color::Default, Color::Default),
                    ColorRole::Normal => (t.fg, t.bg),
                    ColorRole::Prompt => (t.prompt, t.bg),
                    ColorRole::Match => (t.match_, t.bg),
                    ColorRole::Current => (t.current, t.dark_bg),
                    ColorRole::CurrentMatch => (t.current_match, t.dark_bg),
                    ColorRole::Spinner => (t.spinner, t.bg),
                    ColorRole::Info => (t.info, t.bg),
                    ColorRole::Cursor => (t.cursor, t.dark_bg),
                    ColorRole::Selected => (t.selected, t.dark_bg),
                    ColorRole::Header => (t.header, t.bg),
                    ColorRole::Border => (t.border, t.bg),
                };
                ColorPair::indexed(fg, bg, role.index())
            }),
        }
    }

    /// The pair for `role`. `User` has no slot and gets the default pair.
    #[inline]
    #[must_use]
    pub fn pair(&self, role: ColorRole) -> ColorPair {
        self.pairs
            .get(usize::from(role.index()))
            .copied()
            .unwrap_or(self.pairs[0])
    }

    /// The pair at a raw slot index. Out-of-range indices get the default
    /// pair rather than failing: drawing code must not crash on a bad index.
    #[must_use]
    pub fn lookup(&self, index: i32) -> ColorPair {
        self.pair(ColorRole::from_index(index))
    }

    /// `(role, pair)` for every slot, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ColorRole, ColorPair)> + '_ {
        ColorRole::ALL.iter().map(|&role| (role, self.pair(role)))
    }

    /// Whether any entry needs the 24-bit output path.
    #[must_use]
    pub fn uses_true_color(&self) -> bool {
        self.pairs.iter().any(|p| p.is_true_color())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::monochrome()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
