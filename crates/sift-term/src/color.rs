// SPDX-License-Identifier: MIT
//
// sift-term color model: the four kinds of color a terminal understands.
//
// A color is either not assigned at all, the terminal's own default, an
// index into the 256-color palette (the first eight entries are the basic
// ANSI colors), or a 24-bit RGB value. `Undefined` and `Default` look alike
// at draw time but mean very different things while themes are merged:
// `Undefined` says "inherit from the base theme", `Default` says "use the
// terminal's color, on purpose".
//
// Older configuration formats encode colors as signed integers (-2, -1,
// palette index, or an RGB value tagged with bit 24). `Color::from_code`
// and `Color::code` convert to and from that encoding so integer values in
// config files keep working.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

// ─── Color ───────────────────────────────────────────────────────────────────

/// A terminal color value.
///
/// # Examples
///
/// ```
/// use sift_term::color::Color;
///
/// let red: Color = "red".parse().unwrap();
/// assert_eq!(red, Color::Indexed(1));
///
/// let teal: Color = "#008080".parse().unwrap();
/// assert!(teal.is_true_color());
/// assert!(!Color::Default.is_true_color());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No color assigned. Inherits from whatever is underneath during
    /// theme merging; drawn as [`Color::Default`].
    #[default]
    Undefined,
    /// The terminal's default foreground or background.
    Default,
    /// ANSI 256-color palette index. 0–7 are the basic colors.
    Indexed(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

/// Integer code for [`Color::Undefined`].
pub const CODE_UNDEFINED: i32 = -2;
/// Integer code for [`Color::Default`].
pub const CODE_DEFAULT: i32 = -1;
/// Tag bit marking an integer code as packed RGB.
const RGB_TAG: i32 = 1 << 24;

impl Color {
    pub const BLACK: Self = Self::Indexed(0);
    pub const RED: Self = Self::Indexed(1);
    pub const GREEN: Self = Self::Indexed(2);
    pub const YELLOW: Self = Self::Indexed(3);
    pub const BLUE: Self = Self::Indexed(4);
    pub const MAGENTA: Self = Self::Indexed(5);
    pub const CYAN: Self = Self::Indexed(6);
    pub const WHITE: Self = Self::Indexed(7);

    /// Whether this is a 24-bit color.
    ///
    /// Output code uses this to pick the `38;2;r;g;b` path over the
    /// indexed one. `Default` and `Undefined` are never true color.
    #[inline]
    #[must_use]
    pub const fn is_true_color(self) -> bool {
        matches!(self, Self::Rgb(..))
    }

    /// Whether no color has been assigned.
    #[inline]
    #[must_use]
    pub const fn is_undefined(self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// `self`, unless it is `Undefined`, in which case `fallback`.
    ///
    /// This is the whole of theme merging: an explicit `Default` is kept.
    #[inline]
    #[must_use]
    pub const fn or(self, fallback: Self) -> Self {
        match self {
            Self::Undefined => fallback,
            other => other,
        }
    }

    /// The color as it should reach a cell: `Undefined` becomes `Default`.
    #[inline]
    #[must_use]
    pub const fn resolved(self) -> Self {
        self.or(Self::Default)
    }

    /// Decode the legacy integer encoding.
    ///
    /// Anything that is not -2, -1, 0–255, or a positive RGB-tagged value
    /// decodes to `Undefined`.
    #[must_use]
    pub fn from_code(code: i32) -> Self {
        match code {
            CODE_UNDEFINED => Self::Undefined,
            CODE_DEFAULT => Self::Default,
            c if c > 0 && c & RGB_TAG != 0 => {
                let [_, r, g, b] = c.to_be_bytes();
                Self::Rgb(r, g, b)
            }
            c => u8::try_from(c).map_or(Self::Undefined, Self::Indexed),
        }
    }

    /// Encode as the legacy integer form. Inverse of [`Color::from_code`].
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Undefined => CODE_UNDEFINED,
            Self::Default => CODE_DEFAULT,
            Self::Indexed(idx) => i32::from(idx),
            Self::Rgb(r, g, b) => RGB_TAG | i32::from_be_bytes([0, r, g, b]),
        }
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Default => write!(f, "default"),
            Self::Indexed(idx) => write!(f, "ansi({idx})"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed(idx) => write!(f, "{idx}"),
            other => fmt::Debug::fmt(other, f),
        }
    }
}

// ─── Parsing ─────────────────────────────────────────────────────────────────

/// Error returned when a color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {input:?}: expected a name, 0-255, -1, or #rrggbb")]
pub struct ParseColorError {
    input: String,
}

impl ParseColorError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }
}

const BASIC_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();

        match lower.as_str() {
            "undefined" => return Ok(Self::Undefined),
            "default" | "-1" => return Ok(Self::Default),
            _ => {}
        }

        if let Some(idx) = BASIC_NAMES.iter().position(|name| *name == lower) {
            // Eight names, always fits.
            #[allow(clippy::cast_possible_truncation)]
            return Ok(Self::Indexed(idx as u8));
        }

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_rgb_hex(hex).ok_or_else(|| ParseColorError::new(trimmed));
        }

        lower
            .parse::<u8>()
            .map(Self::Indexed)
            .map_err(|_| ParseColorError::new(trimmed))
    }
}

/// Parse `rrggbb` (no `#`).
fn parse_rgb_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Config files may spell a color as a string or as a legacy integer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Code(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawColor::deserialize(deserializer)? {
            RawColor::Text(text) => text.parse().map_err(serde::de::Error::custom),
            RawColor::Code(code) => i32::try_from(code)
                .ok()
                .map(Self::from_code)
                .filter(|color| !color.is_undefined() || code == i64::from(CODE_UNDEFINED))
                .ok_or_else(|| {
                    serde::de::Error::custom(ParseColorError::new(&code.to_string()))
                }),
        }
    }
}

// ─── ColorPair ───────────────────────────────────────────────────────────────

/// Index of a pair in the session palette.
///
/// Kept as a plain number here so this crate stays independent of the
/// theme layer; `sift_theme::ColorRole` gives the names. [`USER_PAIR`]
/// marks a pair built ad hoc rather than looked up.
pub type PairIndex = u8;

/// Index carried by pairs that were not taken from the palette.
pub const USER_PAIR: PairIndex = 12;

/// A foreground/background pair plus the palette slot it came from.
///
/// Two pairs are equal when they draw the same: the slot index is lookup
/// metadata and is ignored by `==` and `Hash`.
#[derive(Debug, Clone, Copy)]
pub struct ColorPair {
    fg: Color,
    bg: Color,
    index: PairIndex,
}

impl ColorPair {
    /// An ad-hoc pair, not tied to a palette slot.
    #[inline]
    #[must_use]
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self {
            fg,
            bg,
            index: USER_PAIR,
        }
    }

    /// A pair belonging to palette slot `index`.
    #[inline]
    #[must_use]
    pub const fn indexed(fg: Color, bg: Color, index: PairIndex) -> Self {
        Self { fg, bg, index }
    }

    #[inline]
    #[must_use]
    pub const fn fg(self) -> Color {
        self.fg
    }

    #[inline]
    #[must_use]
    pub const fn bg(self) -> Color {
        self.bg
    }

    /// Palette slot this pair was resolved for.
    #[inline]
    #[must_use]
    pub const fn index(self) -> PairIndex {
        self.index
    }

    /// Whether either side needs the 24-bit output path.
    #[inline]
    #[must_use]
    pub const fn is_true_color(self) -> bool {
        self.fg.is_true_color() || self.bg.is_true_color()
    }

    /// Stable cache key derived from the colors only.
    #[must_use]
    pub fn key(self) -> u64 {
        let fg = u32::from_be_bytes(self.fg.code().to_be_bytes());
        let bg = u32::from_be_bytes(self.bg.code().to_be_bytes());
        (u64::from(fg) << 32) | u64::from(bg)
    }
}

impl PartialEq for ColorPair {
    fn eq(&self, other: &Self) -> bool {
        self.fg == other.fg && self.bg == other.bg
    }
}

impl Eq for ColorPair {}

impl std::hash::Hash for ColorPair {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.fg.hash(state);
        self.bg.hash(state);
    }
}

impl Default for ColorPair {
    fn default() -> Self {
        Self::indexed(Color::Default, Color::Default, 0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
