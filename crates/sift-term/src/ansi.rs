// SPDX-License-Identifier: MIT
//
// SGR (Select Graphic Rendition) encoding for colors and attributes.
//
// Pure functions writing to any `impl Write`. `Rgb` colors take the
// `38;2` / `48;2` path, indexed colors take the compact 8/16-color codes
// or `38;5` / `48;5`.
// Cursor movement, screen modes and the rest of the terminal driver live
// with the concrete backend, not here.

use std::io::{self, Write};

use crate::cell::Attr;
use crate::color::Color;

/// Reset all SGR attributes (SGR 0).
#[inline]
pub fn reset(w: &mut impl Write) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// Set the foreground color. `Undefined` writes nothing.
pub fn fg(w: &mut impl Write, color: Color) -> io::Result<()> {
    match color {
        Color::Undefined => Ok(()),
        Color::Default => w.write_all(b"\x1b[39m"),
        Color::Indexed(idx) if idx < 8 => write!(w, "\x1b[{}m", 30 + u16::from(idx)),
        Color::Indexed(idx) if idx < 16 => write!(w, "\x1b[{}m", 82 + u16::from(idx)),
        Color::Indexed(idx) => write!(w, "\x1b[38;5;{idx}m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[38;2;{r};{g};{b}m"),
    }
}

/// Set the background color. Same strategy as [`fg`] with BG codes
/// (40–47, 100–107, `48;5;N`, `48;2;R;G;B`).
pub fn bg(w: &mut impl Write, color: Color) -> io::Result<()> {
    match color {
        Color::Undefined => Ok(()),
        Color::Default => w.write_all(b"\x1b[49m"),
        Color::Indexed(idx) if idx < 8 => write!(w, "\x1b[{}m", 40 + u16::from(idx)),
        Color::Indexed(idx) if idx < 16 => write!(w, "\x1b[{}m", 92 + u16::from(idx)),
        Color::Indexed(idx) => write!(w, "\x1b[48;5;{idx}m"),
        Color::Rgb(r, g, b) => write!(w, "\x1b[48;2;{r};{g};{b}m"),
    }
}

// ─── Attributes ──────────────────────────────────────────────────────────────

/// Emit every set attribute as one CSI sequence, e.g. `\x1b[1;4m`.
/// Writes nothing for an empty set.
pub fn attrs(w: &mut impl Write, attr: Attr) -> io::Result<()> {
    const CODES: [(Attr, &str); 6] = [
        (Attr::BOLD, "1"),
        (Attr::DIM, "2"),
        (Attr::ITALIC, "3"),
        (Attr::UNDERLINE, "4"),
        (Attr::BLINK, "5"),
        (Attr::REVERSE, "7"),
    ];

    if attr.is_empty() {
        return Ok(());
    }
    let params: Vec<&str> = CODES
        .iter()
        .filter(|(flag, _)| attr.contains(*flag))
        .map(|(_, code)| *code)
        .collect();
    write!(w, "\x1b[{}m", params.join(";"))
}

// ─── Tests ───────────────────────────────────────────────────────────────────
