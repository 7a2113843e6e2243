// SPDX-License-Identifier: MIT
//
// FrameBuffer: the 2D cell grid windows paint into.
//
// Flat `Vec<Cell>` in row-major order. Paint operations take a `Rect` to
// clip against so a window can never draw outside its own area, and they
// keep wide characters consistent: overwriting half of a wide character
// blanks the other half instead of leaving an orphan.

use unicode_width::UnicodeWidthChar;

use crate::cell::{Attr, Cell};
use crate::color::Color;

// ─── Rect ────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle in screen cells.
///
/// ```
/// use sift_term::buffer::Rect;
///
/// let r = Rect::new(2, 10, 5, 3);
/// assert!(r.contains(2, 10));
/// assert!(r.contains(4, 14));
/// assert!(!r.contains(5, 10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub top: u16,
    pub left: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[inline]
    #[must_use]
    pub const fn new(top: u16, left: u16, width: u16, height: u16) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Row just below the rectangle.
    #[inline]
    #[must_use]
    pub const fn bottom(self) -> u16 {
        self.top.saturating_add(self.height)
    }

    /// Column just right of the rectangle.
    #[inline]
    #[must_use]
    pub const fn right(self) -> u16 {
        self.left.saturating_add(self.width)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether `(row, col)` lies inside.
    #[inline]
    #[must_use]
    pub const fn contains(self, row: u16, col: u16) -> bool {
        row >= self.top && row < self.bottom() && col >= self.left && col < self.right()
    }

    /// Shrink by `n` cells on every side.
    #[must_use]
    pub const fn inset(self, n: u16) -> Self {
        Self {
            top: self.top.saturating_add(n),
            left: self.left.saturating_add(n),
            width: self.width.saturating_sub(n.saturating_mul(2)),
            height: self.height.saturating_sub(n.saturating_mul(2)),
        }
    }

    /// Overlapping area, or `None` when the rectangles are disjoint.
    #[must_use]
    pub fn intersect(self, other: Self) -> Option<Self> {
        let top = self.top.max(other.top);
        let left = self.left.max(other.left);
        let bottom = self.bottom().min(other.bottom());
        let right = self.right().min(other.right());
        (top < bottom && left < right).then(|| Self::new(top, left, right - left, bottom - top))
    }
}

// ─── FrameBuffer ─────────────────────────────────────────────────────────────

/// A grid of cells.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    /// A buffer of blank cells.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; usize::from(width) * usize::from(height)],
        }
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The whole buffer as a rectangle.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    #[inline]
    const fn index(&self, row: u16, col: u16) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Cell at `(row, col)`, or `None` if out of bounds.
    #[must_use]
    pub fn get(&self, row: u16, col: u16) -> Option<&Cell> {
        self.bounds()
            .contains(row, col)
            .then(|| &self.cells[self.index(row, col)])
    }

    /// Bounds-checked raw write. Returns `false` when out of bounds.
    pub fn set(&mut self, row: u16, col: u16, cell: Cell) -> bool {
        if !self.bounds().contains(row, col) {
            return false;
        }
        let idx = self.index(row, col);
        self.cells[idx] = cell;
        true
    }

    /// The visible text of a row, continuation cells skipped.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = self.index(row, 0);
        self.cells[start..start + usize::from(self.width)]
            .iter()
            .filter(|c| !c.is_continuation())
            .map(|c| c.ch)
            .collect()
    }

    /// Blank every cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Change dimensions. Content is discarded.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::EMPTY);
    }

    /// Fill a rectangle (clipped to the buffer) with one cell value.
    pub fn fill_rect(&mut self, rect: Rect, cell: Cell) {
        let Some(area) = rect.intersect(self.bounds()) else {
            return;
        };
        for row in area.top..area.bottom() {
            self.break_wide_char_at(row, area.left);
            self.break_wide_char_at(row, area.right() - 1);
            let start = self.index(row, area.left);
            self.cells[start..start + usize::from(area.width)].fill(cell);
        }
    }

    /// Copy a rectangle of cells from `src` into the same place here.
    pub fn copy_rect_from(&mut self, src: &Self, rect: Rect) {
        let Some(area) = rect
            .intersect(self.bounds())
            .and_then(|r| r.intersect(src.bounds()))
        else {
            return;
        };
        for row in area.top..area.bottom() {
            for col in area.left..area.right() {
                let idx = self.index(row, col);
                self.cells[idx] = src.cells[src.index(row, col)];
            }
        }
    }

    /// If `(row, col)` is half of a wide character, blank the other half.
    fn break_wide_char_at(&mut self, row: u16, col: u16) {
        let idx = self.index(row, col);
        if self.cells[idx].is_continuation() && col > 0 {
            let prev = self.index(row, col - 1);
            self.cells[prev].ch = ' ';
        }
        if col + 1 < self.width {
            let next = self.index(row, col + 1);
            if self.cells[next].is_continuation() {
                self.cells[next] = Cell::EMPTY;
            }
        }
    }

    /// Paint `text` on one row starting at `col`, never crossing `clip`.
    ///
    /// Stops at the right edge of `clip`. A wide character that would be
    /// cut in half is replaced by a space. Zero-width characters are
    /// skipped. Returns the number of columns consumed.
    pub fn paint_text(
        &mut self,
        row: u16,
        col: u16,
        text: &str,
        fg: Color,
        bg: Color,
        attrs: Attr,
        clip: Rect,
    ) -> u16 {
        let Some(clip) = clip.intersect(self.bounds()) else {
            return 0;
        };
        if row < clip.top || row >= clip.bottom() || col < clip.left {
            return 0;
        }

        let mut x = col;
        for ch in text.chars() {
            if x >= clip.right() {
                break;
            }
            let w = char_width(ch);
            if w == 0 {
                continue;
            }
            if w == 2 && x + 1 >= clip.right() {
                self.put(row, x, Cell::styled(' ', fg, bg, attrs));
                x += 1;
                break;
            }
            self.put(row, x, Cell::styled(ch, fg, bg, attrs));
            if w == 2 {
                self.put(row, x + 1, Cell::continuation(fg, bg, attrs));
            }
            // char width is 1 or 2 here.
            #[allow(clippy::cast_possible_truncation)]
            let step = w as u16;
            x = x.saturating_add(step);
        }
        x - col
    }

    fn put(&mut self, row: u16, col: u16, cell: Cell) {
        self.break_wide_char_at(row, col);
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }
}

impl std::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FrameBuffer({}x{})", self.width, self.height)
    }
}

// ─── Text Width ──────────────────────────────────────────────────────────────

/// Display width of a character in terminal columns (0, 1, or 2).
///
/// ```
/// use sift_term::buffer::char_width;
///
/// assert_eq!(char_width('a'), 1);
/// assert_eq!(char_width('中'), 2);
/// assert_eq!(char_width('\n'), 0);
/// ```
#[inline]
#[must_use]
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

/// Display width of a string in terminal columns.
#[must_use]
pub fn string_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
