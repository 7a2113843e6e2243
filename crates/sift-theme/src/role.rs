//! Semantic color roles: what a piece of text *is*, not what color it has.
//!
//! Windows draw with a role ("this is the prompt", "this is a match") and
//! the session palette decides the colors. The numeric order is fixed:
//! palette slots and stored pair indices rely on it.

use sift_term::color::PairIndex;

/// A rendering purpose with a slot in the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ColorRole {
    /// Terminal default colors.
    Default = 0,
    /// Ordinary list text.
    Normal = 1,
    /// The query prompt.
    Prompt = 2,
    /// Matched characters.
    Match = 3,
    /// The line under the cursor.
    Current = 4,
    /// Matched characters on the line under the cursor.
    CurrentMatch = 5,
    /// Progress spinner.
    Spinner = 6,
    /// Match counters and other status text.
    Info = 7,
    /// The cursor pointer.
    Cursor = 8,
    /// Multi-select marker.
    Selected = 9,
    /// Header lines.
    Header = 10,
    /// Window borders.
    Border = 11,
    /// Marker for pairs that were built ad hoc. Has no palette slot.
    User = 12,
}

/// Number of palette slots (every role except [`ColorRole::User`]).
pub const ROLE_COUNT: usize = 12;

impl ColorRole {
    /// Every role that has a palette slot, in slot order.
    pub const ALL: [Self; ROLE_COUNT] = [
        Self::Default,
        Self::Normal,
        Self::Prompt,
        Self::Match,
        Self::Current,
        Self::CurrentMatch,
        Self::Spinner,
        Self::Info,
        Self::Cursor,
        Self::Selected,
        Self::Header,
        Self::Border,
    ];

    /// Palette slot / pair index of this role.
    #[inline]
    #[must_use]
    pub const fn index(self) -> PairIndex {
        self as PairIndex
    }

    /// The role with slot `index`. Anything out of range, including the
    /// `User` marker, falls back to [`ColorRole::Default`] so a malformed
    /// index can never reach past the palette.
    #[must_use]
    pub fn from_index(index: i32) -> Self {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(Self::Default)
    }

    /// Short lowercase name, as used in config files and previews.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Normal => "normal",
            Self::Prompt => "prompt",
            Self::Match => "match",
            Self::Current => "current",
            Self::CurrentMatch => "current-match",
            Self::Spinner => "spinner",
            Self::Info => "info",
            Self::Cursor => "cursor",
            Self::Selected => "selected",
            Self::Header => "header",
            Self::Border => "border",
            Self::User => "user",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_slot_order() {
        for (i, role) in ColorRole::ALL.iter().enumerate() {
            assert_eq!(usize::from(role.index()), i);
        }
    }

    #[test]
    fn user_has_no_slot() {
        assert_eq!(usize::from(ColorRole::User.index()), ROLE_COUNT);
        assert!(!ColorRole::ALL.contains(&ColorRole::User));
    }

    #[test]
    fn from_index_fails_soft() {
        assert_eq!(ColorRole::from_index(4), ColorRole::Current);
        assert_eq!(ColorRole::from_index(12), ColorRole::Default);
        assert_eq!(ColorRole::from_index(-1), ColorRole::Default);
        assert_eq!(ColorRole::from_index(i32::MAX), ColorRole::Default);
    }
}
