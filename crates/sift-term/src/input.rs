// SPDX-License-Identifier: MIT
//
// Input event model.
//
// The decoder that turns raw terminal bytes into events lives with the
// concrete backend. What it produces, and what the application's main
// loop consumes, is defined here: a closed set of logical actions, each
// with a distinct, ordered numeric code.
//
// # Action codes
//
// ```text
//   0        Rune
//   1..=26   Ctrl-A .. Ctrl-Z   (9 is Tab: Ctrl-I and Tab are one key)
//   27       Esc
//   28..=31  Invalid, Resize, Mouse, DoubleClick
//   32..=44  BackTab, Backspace, Delete, PageUp, PageDown,
//            Up, Down, Left, Right, Home, End, ShiftLeft, ShiftRight
//   45..=56  F1 .. F12
//   57..=60  Alt-Enter, Alt-Space, Alt-/, Alt-Backspace
//   61..     Alt-0 + (c - '0') for c in [0-9a-z]
// ```
//
// Key bindings are stored by code, so the numbering is part of the
// contract: reordering variants would silently remap user bindings.

// ─── Codes ───────────────────────────────────────────────────────────────────

/// Numeric action codes. See the module docs for the layout.
pub mod code {
    pub const RUNE: u16 = 0;
    pub const CTRL_A: u16 = 1;
    pub const TAB: u16 = 9;
    pub const CTRL_M: u16 = 13;
    pub const CTRL_Z: u16 = 26;
    pub const ESC: u16 = 27;
    pub const INVALID: u16 = 28;
    pub const RESIZE: u16 = 29;
    pub const MOUSE: u16 = 30;
    pub const DOUBLE_CLICK: u16 = 31;
    pub const BACK_TAB: u16 = 32;
    pub const BACKSPACE: u16 = 33;
    pub const DELETE: u16 = 34;
    pub const PAGE_UP: u16 = 35;
    pub const PAGE_DOWN: u16 = 36;
    pub const UP: u16 = 37;
    pub const DOWN: u16 = 38;
    pub const LEFT: u16 = 39;
    pub const RIGHT: u16 = 40;
    pub const HOME: u16 = 41;
    pub const END: u16 = 42;
    pub const SHIFT_LEFT: u16 = 43;
    pub const SHIFT_RIGHT: u16 = 44;
    pub const F1: u16 = 45;
    pub const F12: u16 = 56;
    pub const ALT_ENTER: u16 = 57;
    pub const ALT_SPACE: u16 = 58;
    pub const ALT_SLASH: u16 = 59;
    pub const ALT_BACKSPACE: u16 = 60;
    pub const ALT_0: u16 = 61;
    pub const ALT_9: u16 = ALT_0 + 9;
    /// `ALT_0 + ('a' - '0')`.
    pub const ALT_A: u16 = ALT_0 + 49;
    /// `ALT_A + ('z' - 'a')`.
    pub const ALT_Z: u16 = ALT_A + 25;
}

// ─── Keys ────────────────────────────────────────────────────────────────────

/// Every non-character action.
///
/// Prefer the checked constructors ([`Key::ctrl`], [`Key::alt`],
/// [`Key::function`]); a variant built with an out-of-range payload
/// reports [`code::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Ctrl plus a lowercase letter, other than `i` (that is [`Key::Tab`]).
    Ctrl(char),
    Tab,
    BackTab,
    Esc,
    Backspace,
    Delete,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    ShiftLeft,
    ShiftRight,
    /// F1 through F12.
    F(u8),
    AltEnter,
    AltSpace,
    AltSlash,
    AltBackspace,
    /// Alt plus an ASCII digit or lowercase letter.
    Alt(char),
}

/// Fixed-code keys in code order, starting at [`code::BACK_TAB`].
const NAMED: [Key; 13] = [
    Key::BackTab,
    Key::Backspace,
    Key::Delete,
    Key::PageUp,
    Key::PageDown,
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Home,
    Key::End,
    Key::ShiftLeft,
    Key::ShiftRight,
];

impl Key {
    /// Ctrl + `letter`. Ctrl-I is Tab. `None` for anything but `a..=z`.
    #[must_use]
    pub fn ctrl(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'i' => Some(Self::Tab),
            c @ 'a'..='z' => Some(Self::Ctrl(c)),
            _ => None,
        }
    }

    /// Alt + `c` for an ASCII digit or lowercase letter.
    #[must_use]
    pub const fn alt(c: char) -> Option<Self> {
        match c {
            '0'..='9' | 'a'..='z' => Some(Self::Alt(c)),
            _ => None,
        }
    }

    /// Function key `n` (1–12).
    #[must_use]
    pub const fn function(n: u8) -> Option<Self> {
        match n {
            1..=12 => Some(Self::F(n)),
            _ => None,
        }
    }

    /// The action code of this key.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::Ctrl(c @ 'a'..='z') if c != 'i' => code::CTRL_A + ascii_offset(c, 'a'),
            Self::Tab => code::TAB,
            Self::Esc => code::ESC,
            Self::F(n @ 1..=12) => code::F1 + u16::from(n) - 1,
            Self::AltEnter => code::ALT_ENTER,
            Self::AltSpace => code::ALT_SPACE,
            Self::AltSlash => code::ALT_SLASH,
            Self::AltBackspace => code::ALT_BACKSPACE,
            Self::Alt(c @ ('0'..='9' | 'a'..='z')) => code::ALT_0 + ascii_offset(c, '0'),
            Self::Ctrl(_) | Self::F(_) | Self::Alt(_) => code::INVALID,
            named => NAMED
                .iter()
                .position(|k| *k == named)
                .and_then(|i| u16::try_from(i).ok())
                .map_or(code::INVALID, |i| code::BACK_TAB + i),
        }
    }

    /// The key with action code `code`, if that code names a key.
    ///
    /// Rune, Invalid, Resize, Mouse and DoubleClick are events, not keys,
    /// and return `None`.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        let from_offset = |base: u8, offset: u16| {
            u8::try_from(offset)
                .ok()
                .and_then(|o| base.checked_add(o))
                .map(char::from)
        };
        match code {
            code::TAB => Some(Self::Tab),
            code::CTRL_A..=code::CTRL_Z => from_offset(b'a', code - code::CTRL_A).map(Self::Ctrl),
            code::ESC => Some(Self::Esc),
            code::BACK_TAB..=code::SHIFT_RIGHT => NAMED.get(usize::from(code - code::BACK_TAB)).copied(),
            code::F1..=code::F12 => u8::try_from(code - code::F1 + 1).ok().map(Self::F),
            code::ALT_ENTER => Some(Self::AltEnter),
            code::ALT_SPACE => Some(Self::AltSpace),
            code::ALT_SLASH => Some(Self::AltSlash),
            code::ALT_BACKSPACE => Some(Self::AltBackspace),
            code::ALT_0..=code::ALT_9 | code::ALT_A..=code::ALT_Z => {
                from_offset(b'0', code - code::ALT_0).map(Self::Alt)
            }
            _ => None,
        }
    }
}

/// `c - base` for ASCII characters known to be at or above `base`.
fn ascii_offset(c: char, base: char) -> u16 {
    u16::try_from(u32::from(c) - u32::from(base)).unwrap_or(u16::MAX)
}

// ─── Mouse ───────────────────────────────────────────────────────────────────

/// A mouse action at a screen position.
///
/// Produced once per input poll and handed to the main loop; nothing
/// keeps these around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseEvent {
    /// 0-indexed screen row.
    pub row: u16,
    /// 0-indexed screen column.
    pub col: u16,
    /// Wheel movement: positive is up, negative is down, 0 for clicks.
    pub scroll: i32,
    /// Left button pressed (as opposed to released or wheel).
    pub down: bool,
    /// Second press of a double-click. Set by the renderer, never by the
    /// decoder.
    pub double: bool,
    /// A modifier key (Shift, Alt or Ctrl) was held.
    pub modifier: bool,
}

impl MouseEvent {
    /// Left button press.
    #[must_use]
    pub const fn press(row: u16, col: u16) -> Self {
        Self {
            row,
            col,
            scroll: 0,
            down: true,
            double: false,
            modifier: false,
        }
    }

    /// Button release.
    #[must_use]
    pub const fn release(row: u16, col: u16) -> Self {
        Self {
            down: false,
            ..Self::press(row, col)
        }
    }

    /// Wheel movement by `delta` notches.
    #[must_use]
    pub const fn wheel(row: u16, col: u16, delta: i32) -> Self {
        Self {
            scroll: delta,
            ..Self::release(row, col)
        }
    }

    /// Whether this is a click (press) rather than a release or wheel.
    #[inline]
    #[must_use]
    pub const fn is_press(&self) -> bool {
        self.down && self.scroll == 0
    }
}

// ─── Event ───────────────────────────────────────────────────────────────────

/// One logical input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A printable character.
    Rune(char),
    /// A control, navigation, function or Alt key.
    Key(Key),
    /// A mouse click, release or wheel movement.
    Mouse(MouseEvent),
    /// The terminal changed size.
    Resize,
    /// Undecodable input, or the input source went away.
    Invalid,
}

impl Event {
    /// The action code. A mouse event flagged as the second half of a
    /// double-click reports [`code::DOUBLE_CLICK`].
    #[must_use]
    pub fn code(&self) -> u16 {
        match self {
            Self::Rune(_) => code::RUNE,
            Self::Key(key) => key.code(),
            Self::Mouse(m) if m.double => code::DOUBLE_CLICK,
            Self::Mouse(_) => code::MOUSE,
            Self::Resize => code::RESIZE,
            Self::Invalid => code::INVALID,
        }
    }

    /// The mouse payload, if any.
    #[must_use]
    pub const fn mouse(&self) -> Option<&MouseEvent> {
        match self {
            Self::Mouse(m) => Some(m),
            _ => None,
        }
    }
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Self::Key(key)
    }
}

impl From<MouseEvent> for Event {
    fn from(mouse: MouseEvent) -> Self {
        Self::Mouse(mouse)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
