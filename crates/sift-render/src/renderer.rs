//! The renderer and window contract.
//!
//! The application draws through these two traits and never learns which
//! backend it has. A backend is picked once, at construction, and brings
//! its own window type with it.
//!
//! Coordinates are 0-indexed `(row, col)`. Window cursor positions are
//! relative to the window's content area (inside the border, if any).

use std::rc::Rc;

use sift_term::cell::Attr;
use sift_term::color::{Color, ColorPair};
use sift_term::input::Event;
use sift_theme::{ColorRole, Palette};

use crate::error::RenderError;

/// Terminal dimensions in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub cols: u16,
    pub rows: u16,
}

impl Size {
    #[inline]
    #[must_use]
    pub const fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    /// Whether either dimension is zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.cols == 0 || self.rows == 0
    }
}

/// A screen the application draws on.
pub trait Renderer {
    type Window: Window;

    /// Resolve the palette and get ready to draw. Calling it again
    /// re-resolves the palette; windows see the new one immediately.
    fn init(&mut self) -> Result<(), RenderError>;

    /// Stop drawing, e.g. while a subprocess owns the terminal.
    fn pause(&mut self, clear: bool);

    /// Start drawing again. Returns `true` when the caller must redraw.
    fn resume(&mut self) -> bool;

    /// Blank the whole screen.
    fn clear(&mut self);

    /// Make everything drawn so far visible.
    fn refresh(&mut self);

    /// Make only the given windows' areas visible.
    fn refresh_windows(&mut self, windows: &[&Self::Window]);

    /// Give the terminal back. The renderer cannot be re-initialized.
    fn close(&mut self);

    /// Block until the next input event.
    fn next_event(&mut self) -> Event;

    fn max_columns(&self) -> u16;

    fn max_rows(&self) -> u16;

    /// Whether writing past the last column moves to the next line.
    fn does_auto_wrap(&self) -> bool;

    /// Open a window. A bordered window draws a box and insets its
    /// content by one cell on every side.
    fn new_window(&mut self, top: u16, left: u16, width: u16, height: u16, border: bool)
        -> Self::Window;

    /// The session palette.
    fn palette(&self) -> Rc<Palette>;
}

/// A rectangular drawing area on a [`Renderer`]'s screen.
pub trait Window {
    fn top(&self) -> u16;

    fn left(&self) -> u16;

    fn width(&self) -> u16;

    fn height(&self) -> u16;

    /// Cursor column within the content area.
    fn cursor_column(&self) -> u16;

    /// Whether the screen position lies inside the window, border included.
    fn encloses(&self, row: u16, col: u16) -> bool {
        row >= self.top()
            && u32::from(row) < u32::from(self.top()) + u32::from(self.height())
            && col >= self.left()
            && u32::from(col) < u32::from(self.left()) + u32::from(self.width())
    }

    fn move_to(&mut self, row: u16, col: u16);

    /// Move, then clear from the cursor to the end of the row.
    fn move_and_clear(&mut self, row: u16, col: u16);

    /// Write plain text in the normal role.
    fn print(&mut self, text: &str) {
        self.print_with_role(ColorRole::Normal, Attr::empty(), text);
    }

    /// Write text in a role's colors, plus the attributes the role adds.
    fn print_with_role(&mut self, role: ColorRole, attr: Attr, text: &str);

    /// Write text in explicit colors.
    fn print_with_pair(&mut self, pair: ColorPair, attr: Attr, text: &str);

    /// Write text, wrapping at the content width and honoring `\n`.
    /// Returns `false` once the text no longer fits.
    fn fill(&mut self, text: &str) -> bool;

    /// [`Window::fill`] with explicit colors.
    fn fill_with_colors(&mut self, fg: Color, bg: Color, attr: Attr, text: &str) -> bool;

    /// Clear the rest of the current row and every row below it.
    fn finish_fill(&mut self);

    /// Blank the content area and home the cursor.
    fn erase(&mut self);

    /// Make this window's area visible.
    fn refresh(&mut self);

    /// Stop drawing. Every later call on this window does nothing.
    fn close(&mut self);
}
