//! Per-role text attributes.
//!
//! Colors alone do not carry every distinction: on a monochrome terminal
//! the current line and matches must still stand out. Each role adds a
//! fixed set of attributes on top of whatever the caller asked for.

use sift_term::cell::Attr;

use crate::role::ColorRole;

/// Attributes to draw `role` with, given the caller's `base` attributes.
///
/// Only ever adds attributes; `base` is always a subset of the result.
#[must_use]
pub const fn attributes_for(role: ColorRole, base: Attr) -> Attr {
    base.union(role_attributes(role))
}

/// The attributes `role` contributes on its own.
#[must_use]
pub const fn role_attributes(role: ColorRole) -> Attr {
    match role {
        ColorRole::Current => Attr::REVERSE,
        ColorRole::Match => Attr::UNDERLINE,
        ColorRole::CurrentMatch => Attr::UNDERLINE.union(Attr::REVERSE),
        _ => Attr::empty(),
    }
}
