// SPDX-License-Identifier: MIT
//
// Cell: one character position on screen.
//
// Every position a window draws to ends up as a Cell: a character, a
// foreground and background color, and text attributes. Backends keep
// grids of these and turn them into escape sequences (or, for the
// headless backend, into assertions).
//
// Wide characters (CJK, some emoji) occupy two columns. The first cell
// holds the character; the second is a continuation cell (`ch == '\0'`)
// that carries the same colors so the background fills correctly.

use crate::color::Color;

// ─── Text Attributes ─────────────────────────────────────────────────────────

bitflags::bitflags! {
    /// Text attributes as a compact bitfield.
    ///
    /// Each flag maps to one SGR parameter. Combine with bitwise OR:
    ///
    /// ```
    /// use sift_term::cell::Attr;
    ///
    /// let style = Attr::BOLD | Attr::UNDERLINE;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(!style.contains(Attr::REVERSE));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1: increased intensity.
        const BOLD      = 1 << 0;
        /// SGR 2: decreased intensity.
        const DIM       = 1 << 1;
        /// SGR 3: italic.
        const ITALIC    = 1 << 2;
        /// SGR 4: underline.
        const UNDERLINE = 1 << 3;
        /// SGR 5: blink.
        const BLINK     = 1 << 4;
        /// SGR 7: swap foreground and background.
        const REVERSE   = 1 << 5;
    }
}

// ─── Cell ────────────────────────────────────────────────────────────────────

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character to display. `'\0'` marks a continuation cell.
    pub ch: char,
    /// Foreground color. Never `Undefined` once painted.
    pub fg: Color,
    /// Background color. Never `Undefined` once painted.
    pub bg: Color,
    /// Text attributes.
    pub attrs: Attr,
}

const CONTINUATION: char = '\0';

impl Cell {
    /// A blank cell: space, terminal default colors, no attributes.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: Color::Default,
        bg: Color::Default,
        attrs: Attr::empty(),
    };

    /// A cell with full styling. `Undefined` colors are stored as `Default`.
    #[inline]
    #[must_use]
    pub const fn styled(ch: char, fg: Color, bg: Color, attrs: Attr) -> Self {
        Self {
            ch,
            fg: fg.resolved(),
            bg: bg.resolved(),
            attrs,
        }
    }

    /// The second column of a wide character.
    #[inline]
    #[must_use]
    pub const fn continuation(fg: Color, bg: Color, attrs: Attr) -> Self {
        Self::styled(CONTINUATION, fg, bg, attrs)
    }

    /// Whether this cell only extends the wide character to its left.
    #[inline]
    #[must_use]
    pub const fn is_continuation(self) -> bool {
        self.ch == CONTINUATION
    }

    /// Whether this cell is indistinguishable from [`Cell::EMPTY`].
    #[inline]
    #[must_use]
    pub fn is_blank(self) -> bool {
        self == Self::EMPTY
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attr_flags_are_distinct() {
        let all = [
            Attr::BOLD,
            Attr::DIM,
            Attr::ITALIC,
            Attr::UNDERLINE,
            Attr::BLINK,
            Attr::REVERSE,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert!(!a.intersects(*b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn default_cell_is_blank() {
        assert!(Cell::default().is_blank());
        assert_eq!(Cell::default(), Cell::EMPTY);
    }

    #[test]
    fn styled_resolves_undefined_colors() {
        let cell = Cell::styled('x', Color::Undefined, Color::Undefined, Attr::empty());
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
    }

    #[test]
    fn styled_cell_is_not_blank() {
        assert!(!Cell::styled(' ', Color::Default, Color::Default, Attr::REVERSE).is_blank());
        assert!(!Cell::styled('a', Color::Default, Color::Default, Attr::empty()).is_blank());
    }

    #[test]
    fn continuation_cells() {
        let cont = Cell::continuation(Color::RED, Color::BLUE, Attr::BOLD);
        assert!(cont.is_continuation());
        assert_eq!(cont.bg, Color::BLUE);
        assert!(!Cell::EMPTY.is_continuation());
    }
}
