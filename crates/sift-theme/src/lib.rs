//! # sift-theme: semantic colors for the sift finder
//!
//! Turns "what is this text" into "which colors and attributes draw it".
//! Callers never pick colors directly: they name a [`ColorRole`] and the
//! session [`Palette`] answers.
//!
//! # Architecture
//!
//! ```text
//! ThemeConfig (toml) ─┬─ colors: ColorTheme (partial, user)
//!                     └─ base:   BaseTheme  (built-in, complete)
//!     │
//!     ▼
//! theme.rs:   merge user over base (undefined slots inherit)
//!     │
//!     ▼
//! palette.rs: fixed slot table → one ColorPair per role
//!     │
//!     ▼
//! style.rs:   role → extra attributes (reverse, underline)
//! ```
//!
//! Resolution is pure and total: no input makes it fail, and any
//! out-of-range role index resolves to the default pair.
//!
//! # Usage
//!
//! ```
//! use sift_theme::{BaseTheme, ColorRole, ColorTheme, Palette};
//!
//! let palette = Palette::resolve(Some(&ColorTheme::empty()), BaseTheme::Dark256.theme(), false);
//! let prompt = palette.pair(ColorRole::Prompt);
//! assert!(!prompt.is_true_color());
//! ```

pub mod builtin;
pub mod config;
pub mod palette;
pub mod role;
pub mod style;
pub mod theme;

pub use builtin::BaseTheme;
pub use config::ThemeConfig;
pub use palette::Palette;
pub use role::ColorRole;
pub use style::attributes_for;
pub use theme::ColorTheme;
