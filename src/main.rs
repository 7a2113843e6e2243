// SPDX-License-Identifier: MIT
//
// sift-palette: preview the colors sift will draw with.
//
// Loads renderer options (from the file given as the only argument, or
// defaults), picks a base theme from TERM when the file does not name
// one, resolves the session palette and prints one swatch per role:
//
//   prompt         fg=110      bg=default
//   current        fg=254      bg=236      reverse
//   ...
//
// Each swatch is drawn with the role's own colors and attributes, so the
// output is exactly what a finder session on this terminal looks like.
// Set RUST_LOG=debug to see how the palette was resolved.

use std::env;
use std::io::{self, Write};
use std::process;

use log::info;
use sift_render::RendererOptions;
use sift_term::ansi;
use sift_term::cell::Attr;
use sift_theme::{attributes_for, BaseTheme, Palette};

/// Base theme for a terminal, judged by its `TERM` value.
fn base_for_term(term: Option<&str>) -> BaseTheme {
    if term.is_some_and(|t| t.contains("256")) {
        BaseTheme::Dark256
    } else {
        BaseTheme::Default16
    }
}

/// Lowercase attribute names joined by spaces, e.g. `underline reverse`.
fn attr_names(attr: Attr) -> String {
    attr.iter_names()
        .map(|(name, _)| name.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_swatches(w: &mut impl Write, palette: &Palette) -> io::Result<()> {
    for (role, pair) in palette.iter() {
        let attrs = attributes_for(role, Attr::empty());

        ansi::fg(w, pair.fg())?;
        ansi::bg(w, pair.bg())?;
        ansi::attrs(w, attrs)?;
        write!(w, " {:<13} ", role.name())?;
        ansi::reset(w)?;

        let line = format!(
            "  fg={:<8} bg={:<8} {}",
            pair.fg().to_string(),
            pair.bg().to_string(),
            attr_names(attrs)
        );
        writeln!(w, "{}", line.trim_end())?;
    }
    w.flush()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = match env::args_os().nth(1) {
        Some(path) => RendererOptions::load(&path).unwrap_or_else(|e| {
            eprintln!("sift-palette: {e}");
            process::exit(1);
        }),
        None => RendererOptions::default(),
    };

    let term = env::var("TERM").ok();
    let theme = options
        .theme
        .with_default_base(base_for_term(term.as_deref()));
    let palette = theme.palette();
    info!(
        "TERM={} base={} monochrome={} true_color={}",
        term.as_deref().unwrap_or("unset"),
        theme.base_theme().name(),
        theme.monochrome,
        palette.uses_true_color()
    );
    if let Err(e) = write_swatches(&mut io::stdout().lock(), &palette) {
        eprintln!("sift-palette: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sift_theme::ThemeConfig;

    #[test]
    fn term_selects_base() {
        assert_eq!(base_for_term(Some("xterm-256color")), BaseTheme::Dark256);
        assert_eq!(base_for_term(Some("screen-256color")), BaseTheme::Dark256);
        assert_eq!(base_for_term(Some("xterm")), BaseTheme::Default16);
        assert_eq!(base_for_term(Some("dumb")), BaseTheme::Default16);
        assert_eq!(base_for_term(None), BaseTheme::Default16);
    }

    #[test]
    fn configured_base_wins_over_term() {
        let theme = ThemeConfig {
            base: Some(BaseTheme::Light256),
            ..ThemeConfig::default()
        }
        .with_default_base(base_for_term(Some("xterm-256color")));
        assert_eq!(theme.base_theme(), BaseTheme::Light256);
    }

    #[test]
    fn attr_names_lowercase() {
        assert_eq!(attr_names(Attr::empty()), "");
        assert_eq!(attr_names(Attr::UNDERLINE | Attr::REVERSE), "underline reverse");
    }

    #[test]
    fn swatches_one_line_per_role() {
        let mut out = Vec::new();
        write_swatches(&mut out, &Palette::monochrome()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert!(lines[0].contains(" default "));
        assert!(lines[4].contains("current"));
        assert!(lines[4].ends_with("fg=default  bg=default  reverse"));
        assert!(lines[1].ends_with("fg=default  bg=default"));
    }

    #[test]
    fn swatches_use_role_colors() {
        let palette = ThemeConfig {
            base: Some(BaseTheme::Dark256),
            ..ThemeConfig::default()
        }
        .palette();
        let mut out = Vec::new();
        write_swatches(&mut out, &palette).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\x1b[38;5;110m"));
        assert!(text.contains("fg=110      bg=default"));
    }
}
