// SPDX-License-Identifier: MIT
//
// Double-click detection.
//
// Terminals report presses, not double-clicks, so the renderer synthesizes
// them: a press on the same row as the previous press, less than
// `DOUBLE_CLICK_WINDOW` later, is the second half of a double-click.
// Matching clears the reference point, so clicks pair up: the third click
// of a quick triple starts a new pair rather than completing another one.
//
// The detector is owned by the renderer and fed from `next_event` on the
// UI thread only. Callers pass the timestamp in so tests can use exact
// times instead of sleeping.

use std::time::{Duration, Instant};

/// Maximum gap between the two presses of a double-click.
pub const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

/// The previous unmatched press.
#[derive(Debug, Clone, Copy)]
struct Press {
    at: Instant,
    row: u16,
}

/// Pairs mouse presses into double-clicks.
///
/// ```
/// use std::time::{Duration, Instant};
/// use sift_term::click::DoubleClickDetector;
///
/// let t0 = Instant::now();
/// let mut clicks = DoubleClickDetector::new();
/// assert!(!clicks.observe(t0, 5));
/// assert!(clicks.observe(t0 + Duration::from_millis(300), 5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DoubleClickDetector {
    last: Option<Press>,
}

impl DoubleClickDetector {
    /// A detector with no reference press: the first click never matches.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Record a press at `row` and report whether it completes a
    /// double-click.
    ///
    /// A clock that went backwards counts as no time elapsed.
    pub fn observe(&mut self, at: Instant, row: u16) -> bool {
        let is_double = self.last.is_some_and(|prev| {
            prev.row == row && at.saturating_duration_since(prev.at) < DOUBLE_CLICK_WINDOW
        });

        self.last = if is_double {
            None
        } else {
            Some(Press { at, row })
        };
        is_double
    }

    /// Forget the reference press.
    pub fn reset(&mut self) {
        self.last = None;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
