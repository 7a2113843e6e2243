//! In-memory backend.
//!
//! Draws into a back buffer and publishes to a front buffer on refresh,
//! exactly like a terminal backend would, but never touches a tty. The
//! front buffer is what a user would see; tests read it back through
//! [`HeadlessRenderer::cell_at`] and [`HeadlessRenderer::row_text`].
//!
//! Windows share the screen with their renderer through an
//! `Rc<RefCell<_>>`, so everything here stays on the UI thread. Input
//! arrives on a channel and may come from any thread.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

use log::{debug, warn};
use sift_term::buffer::{string_width, FrameBuffer, Rect};
use sift_term::cell::{Attr, Cell};
use sift_term::click::DoubleClickDetector;
use sift_term::color::{Color, ColorPair};
use sift_term::input::Event;
use sift_theme::{attributes_for, ColorRole, Palette};
use unicode_width::UnicodeWidthChar;

use crate::error::RenderError;
use crate::options::RendererOptions;
use crate::renderer::{Renderer, Size, Window};

// ─── Shared Screen ───────────────────────────────────────────────────────────

struct Screen {
    back: FrameBuffer,
    front: FrameBuffer,
    palette: Rc<Palette>,
    paused: bool,
}

impl Screen {
    fn new(size: Size) -> Self {
        Self {
            back: FrameBuffer::new(size.cols, size.rows),
            front: FrameBuffer::new(size.cols, size.rows),
            palette: Rc::new(Palette::monochrome()),
            paused: false,
        }
    }

    /// Copy `rect` of the back buffer to the front buffer.
    fn publish(&mut self, rect: Rect) {
        if self.paused {
            return;
        }
        let Self { back, front, .. } = self;
        front.copy_rect_from(back, rect);
    }
}

type SharedScreen = Rc<RefCell<Screen>>;

// ─── Size Handle ─────────────────────────────────────────────────────────────

/// Current terminal size, writable from the thread that detects resizes.
///
/// The renderer reads it when it delivers an [`Event::Resize`].
#[derive(Debug, Clone, Default)]
pub struct SizeHandle(Arc<Mutex<Size>>);

impl SizeHandle {
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self(Arc::new(Mutex::new(size)))
    }

    pub fn set(&self, size: Size) {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = size;
    }

    #[must_use]
    pub fn get(&self) -> Size {
        *self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

// ─── Renderer ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Running,
    Closed,
}

/// A renderer backed by two in-memory frame buffers.
pub struct HeadlessRenderer {
    options: RendererOptions,
    screen: SharedScreen,
    events: Receiver<Event>,
    size: SizeHandle,
    clicks: DoubleClickDetector,
    lifecycle: Lifecycle,
}

impl HeadlessRenderer {
    /// A renderer of `size`, reading input from `events`.
    #[must_use]
    pub fn new(options: RendererOptions, size: Size, events: Receiver<Event>) -> Self {
        Self {
            options,
            screen: Rc::new(RefCell::new(Screen::new(size))),
            events,
            size: SizeHandle::new(size),
            clicks: DoubleClickDetector::new(),
            lifecycle: Lifecycle::Created,
        }
    }

    /// Handle for the resize detector. Set the new size, then send
    /// [`Event::Resize`].
    #[must_use]
    pub fn size_handle(&self) -> SizeHandle {
        self.size.clone()
    }

    /// Resize immediately. Screen content is discarded.
    pub fn set_size(&mut self, size: Size) {
        self.size.set(size);
        self.apply_size();
    }

    fn apply_size(&self) {
        let size = self.size.get();
        let mut screen = self.screen.borrow_mut();
        if screen.back.width() == size.cols && screen.back.height() == size.rows {
            return;
        }
        debug!(
            "headless: resize {}x{} -> {}x{}",
            screen.back.width(),
            screen.back.height(),
            size.cols,
            size.rows
        );
        screen.back.resize(size.cols, size.rows);
        screen.front.resize(size.cols, size.rows);
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.screen.borrow().paused
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.lifecycle == Lifecycle::Closed
    }

    /// A copy of what is currently visible.
    #[must_use]
    pub fn snapshot(&self) -> FrameBuffer {
        self.screen.borrow().front.clone()
    }

    /// Visible cell at a screen position.
    #[must_use]
    pub fn cell_at(&self, row: u16, col: u16) -> Option<Cell> {
        self.screen.borrow().front.get(row, col).copied()
    }

    /// Visible text of a screen row.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        self.screen.borrow().front.row_text(row)
    }
}

impl Renderer for HeadlessRenderer {
    type Window = HeadlessWindow;

    fn init(&mut self) -> Result<(), RenderError> {
        if self.lifecycle == Lifecycle::Closed {
            return Err(RenderError::Closed);
        }
        self.apply_size();
        let size = self.size.get();
        if size.is_empty() {
            return Err(RenderError::EmptyScreen {
                cols: size.cols,
                rows: size.rows,
            });
        }

        let palette = self.options.theme.palette();
        self.screen.borrow_mut().palette = Rc::new(palette);
        self.lifecycle = Lifecycle::Running;
        debug!(
            "headless: init {}x{} base={} mouse={}",
            size.cols,
            size.rows,
            self.options.theme.base_theme().name(),
            self.options.mouse
        );
        Ok(())
    }

    fn pause(&mut self, clear: bool) {
        let mut screen = self.screen.borrow_mut();
        screen.paused = true;
        if clear {
            screen.back.clear();
            screen.front.clear();
        }
        debug!("headless: paused (clear={clear})");
    }

    fn resume(&mut self) -> bool {
        self.screen.borrow_mut().paused = false;
        debug!("headless: resumed");
        true
    }

    fn clear(&mut self) {
        self.screen.borrow_mut().back.clear();
    }

    fn refresh(&mut self) {
        let mut screen = self.screen.borrow_mut();
        let bounds = screen.back.bounds();
        screen.publish(bounds);
    }

    fn refresh_windows(&mut self, windows: &[&Self::Window]) {
        let mut screen = self.screen.borrow_mut();
        for window in windows.iter().filter(|w| !w.closed) {
            screen.publish(window.outer);
        }
    }

    fn close(&mut self) {
        self.lifecycle = Lifecycle::Closed;
        debug!("headless: closed");
    }

    fn next_event(&mut self) -> Event {
        loop {
            let Ok(event) = self.events.recv() else {
                warn!("headless: event source disconnected");
                return Event::Invalid;
            };

            match event {
                Event::Mouse(_) if !self.options.mouse => {
                    debug!("headless: mouse disabled, dropping {event:?}");
                }
                Event::Mouse(mut mouse) if mouse.is_press() => {
                    mouse.double = self.clicks.observe(Instant::now(), mouse.row);
                    return Event::Mouse(mouse);
                }
                Event::Resize => {
                    self.apply_size();
                    return Event::Resize;
                }
                other => return other,
            }
        }
    }

    fn max_columns(&self) -> u16 {
        self.screen.borrow().back.width()
    }

    fn max_rows(&self) -> u16 {
        self.screen.borrow().back.height()
    }

    fn does_auto_wrap(&self) -> bool {
        false
    }

    fn new_window(
        &mut self,
        top: u16,
        left: u16,
        width: u16,
        height: u16,
        border: bool,
    ) -> Self::Window {
        HeadlessWindow::open(
            Rc::clone(&self.screen),
            Rect::new(top, left, width, height),
            border,
        )
    }

    fn palette(&self) -> Rc<Palette> {
        Rc::clone(&self.screen.borrow().palette)
    }
}

// ─── Window ──────────────────────────────────────────────────────────────────

/// A window on a [`HeadlessRenderer`].
pub struct HeadlessWindow {
    screen: SharedScreen,
    outer: Rect,
    content: Rect,
    border: bool,
    row: u16,
    col: u16,
    closed: bool,
}

impl HeadlessWindow {
    fn open(screen: SharedScreen, outer: Rect, border: bool) -> Self {
        let window = Self {
            screen,
            outer,
            content: if border { outer.inset(1) } else { outer },
            border,
            row: 0,
            col: 0,
            closed: false,
        };
        window.draw_border();
        window
    }

    /// Cursor row within the content area.
    #[must_use]
    pub const fn cursor_row(&self) -> u16 {
        self.row
    }

    /// The area text is drawn in.
    #[must_use]
    pub const fn content(&self) -> Rect {
        self.content
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Draw the box in the current palette's border colors.
    fn draw_border(&self) {
        let r = self.outer;
        if !self.border || r.width < 2 || r.height < 2 {
            return;
        }
        let mut screen = self.screen.borrow_mut();
        let pair = screen.palette.pair(ColorRole::Border);
        let attrs = attributes_for(ColorRole::Border, Attr::empty());
        let cell = |ch| Cell::styled(ch, pair.fg(), pair.bg(), attrs);

        let (bottom, right) = (r.bottom() - 1, r.right() - 1);
        for col in r.left.saturating_add(1)..right {
            screen.back.set(r.top, col, cell('─'));
            screen.back.set(bottom, col, cell('─'));
        }
        for row in r.top.saturating_add(1)..bottom {
            screen.back.set(row, r.left, cell('│'));
            screen.back.set(row, right, cell('│'));
        }
        screen.back.set(r.top, r.left, cell('┌'));
        screen.back.set(r.top, right, cell('┐'));
        screen.back.set(bottom, r.left, cell('└'));
        screen.back.set(bottom, right, cell('┘'));
    }

    /// `false` (and a debug line) when the window is closed.
    fn live(&self, op: &str) -> bool {
        if self.closed {
            debug!("headless: {op} on closed window {:?}", self.outer);
        }
        !self.closed
    }

    /// A blank cell in the window's normal colors.
    fn blank(&self) -> Cell {
        let pair = self.screen.borrow().palette.pair(ColorRole::Normal);
        Cell::styled(' ', pair.fg(), pair.bg(), Attr::empty())
    }

    /// Blank from `(row, col)` to the end of that content row.
    fn clear_row_from(&self, row: u16, col: u16) {
        if row >= self.content.height || col >= self.content.width {
            return;
        }
        let blank = self.blank();
        let rect = Rect::new(
            self.content.top.saturating_add(row),
            self.content.left.saturating_add(col),
            self.content.width - col,
            1,
        );
        self.screen.borrow_mut().back.fill_rect(rect, blank);
    }

    /// Paint `text` at the cursor on one row, clipped to the content area.
    fn paint(&self, fg: Color, bg: Color, attrs: Attr, text: &str) {
        if self.row >= self.content.height || self.col >= self.content.width {
            return;
        }
        self.screen.borrow_mut().back.paint_text(
            self.content.top.saturating_add(self.row),
            self.content.left.saturating_add(self.col),
            text,
            fg,
            bg,
            attrs,
            self.content,
        );
    }

    fn print_colored(&mut self, fg: Color, bg: Color, attrs: Attr, text: &str) {
        self.paint(fg, bg, attrs, text);
        let width = string_width(text);
        self.col = self
            .col
            .saturating_add(u16::try_from(width).unwrap_or(u16::MAX));
    }

    fn fill_colored(&mut self, fg: Color, bg: Color, attrs: Attr, text: &str) -> bool {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            if ch == '\n' {
                self.row = self.row.saturating_add(1);
                self.col = 0;
                continue;
            }
            let w = u16::try_from(ch.width().unwrap_or(0)).unwrap_or(0);
            if w == 0 {
                continue;
            }
            if self.col.saturating_add(w) > self.content.width {
                self.row = self.row.saturating_add(1);
                self.col = 0;
            }
            if self.row >= self.content.height {
                return false;
            }
            self.paint(fg, bg, attrs, ch.encode_utf8(&mut buf));
            self.col = self.col.saturating_add(w);
        }
        true
    }
}

impl Window for HeadlessWindow {
    fn top(&self) -> u16 {
        self.outer.top
    }

    fn left(&self) -> u16 {
        self.outer.left
    }

    fn width(&self) -> u16 {
        self.outer.width
    }

    fn height(&self) -> u16 {
        self.outer.height
    }

    fn cursor_column(&self) -> u16 {
        self.col
    }

    fn encloses(&self, row: u16, col: u16) -> bool {
        self.outer.contains(row, col)
    }

    fn move_to(&mut self, row: u16, col: u16) {
        if !self.live("move_to") {
            return;
        }
        self.row = row;
        self.col = col;
    }

    fn move_and_clear(&mut self, row: u16, col: u16) {
        if !self.live("move_and_clear") {
            return;
        }
        self.row = row;
        self.col = col;
        self.clear_row_from(row, col);
    }

    fn print_with_role(&mut self, role: ColorRole, attr: Attr, text: &str) {
        if !self.live("print") {
            return;
        }
        let pair = self.screen.borrow().palette.pair(role);
        self.print_colored(pair.fg(), pair.bg(), attributes_for(role, attr), text);
    }

    fn print_with_pair(&mut self, pair: ColorPair, attr: Attr, text: &str) {
        if !self.live("print") {
            return;
        }
        self.print_colored(pair.fg(), pair.bg(), attr, text);
    }

    fn fill(&mut self, text: &str) -> bool {
        if !self.live("fill") {
            return false;
        }
        let pair = self.screen.borrow().palette.pair(ColorRole::Normal);
        self.fill_colored(pair.fg(), pair.bg(), Attr::empty(), text)
    }

    fn fill_with_colors(&mut self, fg: Color, bg: Color, attr: Attr, text: &str) -> bool {
        if !self.live("fill") {
            return false;
        }
        self.fill_colored(fg, bg, attr, text)
    }

    fn finish_fill(&mut self) {
        if !self.live("finish_fill") {
            return;
        }
        self.clear_row_from(self.row, self.col);
        let below = self.row.saturating_add(1);
        if below < self.content.height {
            let rect = Rect::new(
                self.content.top.saturating_add(below),
                self.content.left,
                self.content.width,
                self.content.height - below,
            );
            let blank = self.blank();
            self.screen.borrow_mut().back.fill_rect(rect, blank);
        }
    }

    fn erase(&mut self) {
        if !self.live("erase") {
            return;
        }
        let blank = self.blank();
        self.screen.borrow_mut().back.fill_rect(self.content, blank);
        self.draw_border();
        self.row = 0;
        self.col = 0;
    }

    fn refresh(&mut self) {
        if !self.live("refresh") {
            return;
        }
        self.screen.borrow_mut().publish(self.outer);
    }

    fn close(&mut self) {
        if !self.closed {
            debug!("headless: window {:?} closed", self.outer);
        }
        self.closed = true;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sift_term::input::{Key, MouseEvent};
    use sift_theme::{BaseTheme, ColorTheme, ThemeConfig};
    use std::sync::mpsc::{self, Sender};

    fn renderer_with(options: RendererOptions, cols: u16, rows: u16) -> (HeadlessRenderer, Sender<Event>) {
        let (tx, rx) = mpsc::channel();
        let mut renderer = HeadlessRenderer::new(options, Size::new(cols, rows), rx);
        renderer.init().unwrap();
        (renderer, tx)
    }

    fn dark_options() -> RendererOptions {
        RendererOptions {
            theme: ThemeConfig {
                base: Some(BaseTheme::Dark256),
                ..ThemeConfig::default()
            },
            mouse: true,
        }
    }

    fn renderer(cols: u16, rows: u16) -> (HeadlessRenderer, Sender<Event>) {
        renderer_with(dark_options(), cols, rows)
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    #[test_log::test]
    fn init_rejects_empty_screen() {
        let (_tx, rx) = mpsc::channel();
        let mut r = HeadlessRenderer::new(RendererOptions::default(), Size::new(0, 10), rx);
        assert_eq!(r.init(), Err(RenderError::EmptyScreen { cols: 0, rows: 10 }));
    }

    #[test_log::test]
    fn init_after_close_fails() {
        let (mut r, _tx) = renderer(10, 5);
        r.close();
        assert!(r.is_closed());
        assert_eq!(r.init(), Err(RenderError::Closed));
    }

    #[test_log::test]
    fn init_resolves_palette() {
        let (r, _tx) = renderer(10, 5);
        let palette = r.palette();
        assert_eq!(palette.pair(ColorRole::Prompt).fg(), Color::Indexed(110));
        assert_eq!(r.max_columns(), 10);
        assert_eq!(r.max_rows(), 5);
        assert!(!r.does_auto_wrap());
    }

    #[test_log::test]
    fn reinit_is_last_write_wins() {
        let (mut r, _tx) = renderer(20, 4);
        let mut w = r.new_window(0, 0, 20, 4, false);
        r.options.theme.monochrome = true;
        r.init().unwrap();

        w.print_with_role(ColorRole::Prompt, Attr::empty(), ">");
        r.refresh();
        let cell = r.cell_at(0, 0).unwrap();
        assert_eq!((cell.fg, cell.bg), (Color::Default, Color::Default));
        assert_eq!(*r.palette(), Palette::monochrome());
    }

    // ── Printing ─────────────────────────────────────────────────────────

    #[test_log::test]
    fn print_uses_normal_role_and_advances_cursor() {
        let (mut r, _tx) = renderer(10, 3);
        let mut w = r.new_window(1, 2, 8, 2, false);
        w.print("ab");
        w.print("中");
        assert_eq!(w.cursor_column(), 4);
        r.refresh();

        assert_eq!(r.row_text(1), "  ab中    ");
        let cell = r.cell_at(1, 2).unwrap();
        let normal = r.palette().pair(ColorRole::Normal);
        assert_eq!((cell.fg, cell.bg, cell.attrs), (normal.fg(), normal.bg(), Attr::empty()));
    }

    #[test_log::test]
    fn print_clips_at_content_width() {
        let (mut r, _tx) = renderer(10, 2);
        let mut w = r.new_window(0, 0, 4, 1, false);
        w.print("abcdefg");
        r.refresh();
        assert_eq!(r.row_text(0), "abcd      ");
        assert_eq!(w.cursor_column(), 7);
    }

    #[test_log::test]
    fn print_with_role_current_is_reversed() {
        let (mut r, _tx) = renderer(10, 2);
        let mut w = r.new_window(0, 0, 10, 2, false);
        w.print_with_role(ColorRole::Current, Attr::BOLD, "x");
        w.print_with_role(ColorRole::CurrentMatch, Attr::empty(), "y");
        r.refresh();

        let x = r.cell_at(0, 0).unwrap();
        assert_eq!(x.attrs, Attr::BOLD | Attr::REVERSE);
        assert_eq!(x.fg, Color::Indexed(254));
        assert_eq!(x.bg, Color::Indexed(236));
        assert_eq!(r.cell_at(0, 1).unwrap().attrs, Attr::UNDERLINE | Attr::REVERSE);
    }

    #[test_log::test]
    fn monochrome_current_line_is_reverse_on_defaults() {
        let options = RendererOptions {
            theme: ThemeConfig {
                monochrome: true,
                ..ThemeConfig::default()
            },
            mouse: false,
        };
        let (mut r, _tx) = renderer_with(options, 10, 1);
        let mut w = r.new_window(0, 0, 10, 1, false);
        w.print_with_role(ColorRole::Current, Attr::empty(), "item");
        r.refresh();

        let cell = r.cell_at(0, 0).unwrap();
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
        assert_eq!(cell.attrs, Attr::REVERSE);
    }

    #[test_log::test]
    fn undefined_pair_colors_draw_as_default() {
        let (mut r, _tx) = renderer(10, 1);
        let mut w = r.new_window(0, 0, 10, 1, false);
        w.print_with_pair(ColorPair::new(Color::Undefined, Color::RED), Attr::empty(), "z");
        r.refresh();
        let cell = r.cell_at(0, 0).unwrap();
        assert_eq!((cell.fg, cell.bg), (Color::Default, Color::RED));
    }

    // ── Borders ──────────────────────────────────────────────────────────

    #[test_log::test]
    fn bordered_window_insets_content() {
        let (mut r, _tx) = renderer(8, 4);
        let mut w = r.new_window(0, 0, 6, 4, true);
        assert_eq!(w.content(), Rect::new(1, 1, 4, 2));
        w.print("hello");
        r.refresh();

        assert_eq!(r.row_text(0), "┌────┐  ");
        assert_eq!(r.row_text(1), "│hell│  ");
        assert_eq!(r.row_text(3), "└────┘  ");
        let corner = r.cell_at(0, 0).unwrap();
        assert_eq!(corner.fg, Color::Indexed(59));

        // Outer rectangle, border included.
        assert!(w.encloses(0, 0));
        assert!(w.encloses(3, 5));
        assert!(!w.encloses(4, 0));
        assert!(!w.encloses(0, 6));
    }

    #[test_log::test]
    fn erase_redraws_border_in_current_palette() {
        let (mut r, _tx) = renderer(6, 3);
        let mut w = r.new_window(0, 0, 6, 3, true);
        r.refresh();
        assert_eq!(r.cell_at(0, 0).unwrap().fg, Color::Indexed(59));

        r.options.theme.monochrome = true;
        r.init().unwrap();
        w.erase();
        w.print("x");
        r.refresh();

        assert_eq!(r.row_text(0), "┌────┐");
        assert_eq!(r.cell_at(0, 0).unwrap().fg, Color::Default);
        assert_eq!(r.cell_at(1, 5).unwrap().fg, Color::Default);
        assert_eq!(r.cell_at(1, 1).unwrap().fg, Color::Default);
    }

    #[test_log::test]
    fn window_opened_before_init_gets_themed_border_on_erase() {
        let (_tx, rx) = mpsc::channel();
        let mut r = HeadlessRenderer::new(dark_options(), Size::new(4, 3), rx);
        let mut w = r.new_window(0, 0, 4, 3, true);
        r.init().unwrap();
        w.erase();
        r.refresh();
        assert_eq!(r.cell_at(2, 3).unwrap().fg, Color::Indexed(59));
    }

    #[test_log::test]
    fn window_near_coordinate_limit_does_not_overflow() {
        let (mut r, _tx) = renderer(10, 5);
        let mut w = r.new_window(65_000, 0, 10, 1_000, false);
        w.move_to(900, 0);
        w.finish_fill();
        w.print("far away");
        assert!(w.fill("x"));
        w.erase();

        let mut boxed = r.new_window(u16::MAX, u16::MAX, 5, 5, true);
        boxed.erase();
        boxed.finish_fill();
        r.refresh();
        assert_eq!(r.row_text(0), "          ");
    }

    // ── Fill ─────────────────────────────────────────────────────────────

    #[test_log::test]
    fn fill_wraps_and_honors_newlines() {
        let (mut r, _tx) = renderer(4, 3);
        let mut w = r.new_window(0, 0, 4, 3, false);
        assert!(w.fill("abcdef\nxy"));
        r.refresh();
        assert_eq!(r.row_text(0), "abcd");
        assert_eq!(r.row_text(1), "ef  ");
        assert_eq!(r.row_text(2), "xy  ");
    }

    #[test_log::test]
    fn fill_reports_overflow() {
        let (mut r, _tx) = renderer(3, 2);
        let mut w = r.new_window(0, 0, 3, 2, false);
        assert!(!w.fill("abcdefgh"));
        r.refresh();
        assert_eq!(r.row_text(0), "abc");
        assert_eq!(r.row_text(1), "def");
    }

    #[test_log::test]
    fn fill_wraps_wide_char_whole() {
        let (mut r, _tx) = renderer(3, 2);
        let mut w = r.new_window(0, 0, 3, 2, false);
        assert!(w.fill("ab中"));
        r.refresh();
        assert_eq!(r.row_text(0), "ab ");
        assert_eq!(r.row_text(1), "中 ");
    }

    #[test_log::test]
    fn fill_with_colors_applies_colors() {
        let (mut r, _tx) = renderer(5, 1);
        let mut w = r.new_window(0, 0, 5, 1, false);
        assert!(w.fill_with_colors(Color::GREEN, Color::BLACK, Attr::BOLD, "ok"));
        r.refresh();
        let cell = r.cell_at(0, 1).unwrap();
        assert_eq!((cell.fg, cell.bg, cell.attrs), (Color::GREEN, Color::BLACK, Attr::BOLD));
    }

    #[test_log::test]
    fn finish_fill_clears_rest() {
        let (mut r, _tx) = renderer(4, 3);
        let mut w = r.new_window(0, 0, 4, 3, false);
        w.fill("aaaabbbbcccc");
        w.move_to(0, 2);
        w.finish_fill();
        r.refresh();
        assert_eq!(r.row_text(0), "aa  ");
        assert_eq!(r.row_text(1), "    ");
        assert_eq!(r.row_text(2), "    ");
    }

    #[test_log::test]
    fn move_and_clear_clears_row_tail() {
        let (mut r, _tx) = renderer(5, 2);
        let mut w = r.new_window(0, 0, 5, 2, false);
        w.fill("1234567890");
        w.move_and_clear(1, 1);
        r.refresh();
        assert_eq!(r.row_text(0), "12345");
        assert_eq!(r.row_text(1), "6    ");
        assert_eq!(w.cursor_column(), 1);
    }

    #[test_log::test]
    fn erase_blanks_content_only() {
        let (mut r, _tx) = renderer(5, 3);
        let mut w = r.new_window(0, 0, 5, 3, true);
        w.print("abc");
        w.erase();
        r.refresh();
        assert_eq!(r.row_text(1), "│   │");
        assert_eq!(w.cursor_column(), 0);
        assert_eq!(w.cursor_row(), 0);
    }

    // ── Closed windows ───────────────────────────────────────────────────

    #[test_log::test]
    fn closed_window_ignores_everything() {
        let (mut r, _tx) = renderer(5, 2);
        let mut w = r.new_window(0, 0, 5, 2, false);
        w.close();
        assert!(w.is_closed());
        w.print("abc");
        assert!(!w.fill("abc"));
        w.move_to(1, 1);
        w.erase();
        w.refresh();
        r.refresh();
        assert_eq!(r.row_text(0), "     ");
        assert_eq!(w.cursor_column(), 0);
    }

    // ── Refresh and pause ────────────────────────────────────────────────

    #[test_log::test]
    fn nothing_visible_before_refresh() {
        let (mut r, _tx) = renderer(5, 1);
        let mut w = r.new_window(0, 0, 5, 1, false);
        w.print("hi");
        assert_eq!(r.row_text(0), "     ");
        r.refresh();
        assert_eq!(r.row_text(0), "hi   ");
    }

    #[test_log::test]
    fn window_refresh_publishes_own_rect_only() {
        let (mut r, _tx) = renderer(6, 1);
        let mut left = r.new_window(0, 0, 3, 1, false);
        let mut right = r.new_window(0, 3, 3, 1, false);
        left.print("abc");
        right.print("def");
        left.refresh();
        assert_eq!(r.row_text(0), "abc   ");

        r.refresh_windows(&[&right]);
        assert_eq!(r.row_text(0), "abcdef");
    }

    #[test_log::test]
    fn paused_refresh_does_nothing() {
        let (mut r, _tx) = renderer(4, 1);
        let mut w = r.new_window(0, 0, 4, 1, false);
        r.pause(false);
        assert!(r.is_paused());
        w.print("x");
        r.refresh();
        w.refresh();
        assert_eq!(r.row_text(0), "    ");

        assert!(r.resume());
        r.refresh();
        assert_eq!(r.row_text(0), "x   ");
    }

    #[test_log::test]
    fn pause_with_clear_blanks_screen() {
        let (mut r, _tx) = renderer(4, 1);
        let mut w = r.new_window(0, 0, 4, 1, false);
        w.print("abcd");
        r.refresh();
        r.pause(true);
        r.resume();
        r.refresh();
        assert_eq!(r.row_text(0), "    ");
    }

    #[test_log::test]
    fn clear_blanks_back_buffer() {
        let (mut r, _tx) = renderer(4, 1);
        let mut w = r.new_window(0, 0, 4, 1, false);
        w.print("abcd");
        r.clear();
        r.refresh();
        assert_eq!(r.row_text(0), "    ");
    }

    // ── Events ───────────────────────────────────────────────────────────

    #[test_log::test]
    fn events_pass_through() {
        let (mut r, tx) = renderer(4, 1);
        tx.send(Event::Rune('q')).unwrap();
        tx.send(Key::Esc.into()).unwrap();
        assert_eq!(r.next_event(), Event::Rune('q'));
        assert_eq!(r.next_event(), Event::Key(Key::Esc));
    }

    #[test_log::test]
    fn disconnected_source_is_invalid() {
        let (mut r, tx) = renderer(4, 1);
        drop(tx);
        assert_eq!(r.next_event(), Event::Invalid);
    }

    #[test_log::test]
    fn second_press_on_same_row_is_double() {
        let (mut r, tx) = renderer(10, 10);
        tx.send(MouseEvent::press(3, 1).into()).unwrap();
        tx.send(MouseEvent::press(3, 4).into()).unwrap();
        tx.send(MouseEvent::press(3, 4).into()).unwrap();

        let first = r.next_event();
        let second = r.next_event();
        let third = r.next_event();
        assert!(!first.mouse().unwrap().double);
        assert!(second.mouse().unwrap().double);
        assert_eq!(second.code(), sift_term::input::code::DOUBLE_CLICK);
        // State is cleared after a double-click.
        assert!(!third.mouse().unwrap().double);
    }

    #[test_log::test]
    fn press_on_other_row_is_single() {
        let (mut r, tx) = renderer(10, 10);
        tx.send(MouseEvent::press(3, 1).into()).unwrap();
        tx.send(MouseEvent::press(4, 1).into()).unwrap();
        r.next_event();
        assert!(!r.next_event().mouse().unwrap().double);
    }

    #[test_log::test]
    fn releases_and_wheel_do_not_count() {
        let (mut r, tx) = renderer(10, 10);
        tx.send(MouseEvent::release(2, 0).into()).unwrap();
        tx.send(MouseEvent::wheel(2, 0, 1).into()).unwrap();
        tx.send(MouseEvent::press(2, 0).into()).unwrap();
        r.next_event();
        r.next_event();
        assert!(!r.next_event().mouse().unwrap().double);
    }

    #[test_log::test]
    fn mouse_dropped_when_disabled() {
        let options = RendererOptions {
            mouse: false,
            ..dark_options()
        };
        let (mut r, tx) = renderer_with(options, 10, 10);
        tx.send(MouseEvent::press(1, 1).into()).unwrap();
        tx.send(Event::Rune('a')).unwrap();
        assert_eq!(r.next_event(), Event::Rune('a'));
    }

    #[test_log::test]
    fn resize_rereads_size() {
        let (mut r, tx) = renderer(10, 10);
        let handle = r.size_handle();
        handle.set(Size::new(30, 12));
        tx.send(Event::Resize).unwrap();

        assert_eq!(r.next_event(), Event::Resize);
        assert_eq!((r.max_columns(), r.max_rows()), (30, 12));
        assert_eq!(r.snapshot().width(), 30);
    }

    #[test_log::test]
    fn set_size_resizes_now() {
        let (mut r, _tx) = renderer(10, 10);
        r.set_size(Size::new(3, 2));
        assert_eq!((r.max_columns(), r.max_rows()), (3, 2));
    }

    #[test]
    fn palette_handle_is_shared() {
        let (r, _tx) = renderer(4, 1);
        assert!(Rc::ptr_eq(&r.palette(), &r.palette()));
        assert_eq!(*r.palette(), Palette::from_theme(&ColorTheme::DARK_256));
    }
}
