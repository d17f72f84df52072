//! Cursor/page/choice arithmetic for scrollable lists.
//!
//! [`ListState`] is shared by the list widget and the drop-down dialog.
//! Scrolling is single-step with wraparound at both ends: a ring-buffer
//! style scroll that advances the page offset one row at a time rather
//! than jump-scrolling. The governing invariant, preserved by every
//! operation, is
//!
//! ```text
//! choice == page_offset + cursor
//! 0 <= cursor < min(window_size, len)
//! 0 <= page_offset <= max(0, len - window_size)
//! ```

use crate::backend::Attr;
use crate::draw::Frame;
use crate::error::Result;
use crate::markup::CctMessage;

// ---------------------------------------------------------------------------
// ListState
// ---------------------------------------------------------------------------

/// Options plus the scroll bookkeeping over them.
#[derive(Debug, Clone)]
pub struct ListState {
    options: Vec<CctMessage>,
    window_size: usize,
    cursor: usize,
    choice: usize,
    page_offset: usize,
}

impl ListState {
    /// Create a state showing at most `window_size` options at a time.
    pub fn new(options: Vec<CctMessage>, window_size: usize) -> Self {
        Self {
            options,
            window_size,
            cursor: 0,
            choice: 0,
            page_offset: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn options(&self) -> &[CctMessage] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Row of the highlight within the visible window.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Absolute index of the selected option.
    pub fn choice(&self) -> usize {
        self.choice
    }

    /// Index of the first visible option.
    pub fn page_offset(&self) -> usize {
        self.page_offset
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    // ── Mutation ─────────────────────────────────────────────────────

    /// Replace the options.
    ///
    /// Shrinking the list resets cursor, choice, and page offset to zero
    /// rather than clamping, so no stale out-of-range index survives.
    pub fn set_options(&mut self, options: Vec<CctMessage>) {
        if self.options.len() > options.len() {
            self.cursor = 0;
            self.choice = 0;
            self.page_offset = 0;
        }
        self.options = options;
    }

    /// Append one option. Counters are unaffected.
    pub fn add_option(&mut self, option: CctMessage) {
        self.options.push(option);
    }

    /// Move the selection down one row, wrapping past the end.
    ///
    /// When the options overflow the window and the cursor runs off its
    /// last row, the cursor stays put and the page advances instead; when
    /// the choice passes the final option, everything wraps to zero.
    pub fn scroll_down(&mut self) {
        if self.options.is_empty() {
            return;
        }
        self.choice += 1;
        self.cursor += 1;
        if self.options.len() > self.window_size {
            if self.cursor >= self.window_size {
                self.cursor -= 1;
                self.page_offset += 1;
                if self.choice == self.options.len() {
                    self.choice = 0;
                    self.cursor = 0;
                    self.page_offset = 0;
                }
            }
        } else if self.cursor >= self.options.len() {
            self.cursor = 0;
            self.choice = 0;
        }
    }

    /// Move the selection up one row, wrapping past the start.
    pub fn scroll_up(&mut self) {
        if self.options.is_empty() {
            return;
        }
        if self.cursor == 0 {
            if self.options.len() > self.window_size {
                if self.page_offset == 0 {
                    // Wrap from the very top to the very bottom.
                    self.cursor = self.window_size - 1;
                    self.choice = self.options.len() - 1;
                    self.page_offset = self.options.len() - self.window_size;
                } else {
                    self.page_offset -= 1;
                    self.choice -= 1;
                }
            } else {
                self.cursor = self.options.len() - 1;
                self.choice = self.cursor;
            }
        } else {
            self.cursor -= 1;
            self.choice -= 1;
        }
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Draw the visible window of options at (y, x), one per row.
    ///
    /// The cursor row is highlighted only when `focused` is set.
    pub fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()> {
        let visible = self.window_size.min(self.options.len());
        for i in 0..visible {
            let attr = if i == self.cursor && focused {
                Attr::REVERSE
            } else {
                Attr::NORMAL
            };
            self.options[i + self.page_offset].draw(frame, y + i as i32, x, attr)?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SurfaceId, TestBackend};
    use crate::markup::{Colors, PairCache};

    fn messages(n: usize, backend: &mut TestBackend) -> Vec<CctMessage> {
        let mut cache = PairCache::new();
        let mut colors = Colors::new(&mut cache, backend);
        (0..n).map(|i| colors.parse(&format!("item{i}")).unwrap()).collect()
    }

    fn state(len: usize, window: usize) -> ListState {
        let mut backend = TestBackend::new(24, 80);
        ListState::new(messages(len, &mut backend), window)
    }

    fn assert_invariants(s: &ListState) {
        assert_eq!(s.choice(), s.page_offset() + s.cursor());
        if !s.is_empty() {
            assert!(s.cursor() < s.window_size().min(s.len()));
            assert!(s.page_offset() <= s.len().saturating_sub(s.window_size()));
        }
    }

    // ── scroll_down ──────────────────────────────────────────────────

    #[test]
    fn down_moves_cursor_within_window() {
        let mut s = state(5, 3);
        s.scroll_down();
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (1, 1, 0));
        assert_invariants(&s);
    }

    #[test]
    fn down_pages_once_cursor_hits_window_edge() {
        let mut s = state(5, 3);
        s.scroll_down();
        s.scroll_down();
        // Cursor is on the last visible row; the next step pages.
        s.scroll_down();
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (2, 3, 1));
        assert_invariants(&s);
    }

    #[test]
    fn full_cycle_returns_to_zero_when_paged() {
        let mut s = state(10, 3);
        for _ in 0..10 {
            s.scroll_down();
            assert_invariants(&s);
        }
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 0, 0));
    }

    #[test]
    fn full_cycle_returns_to_zero_when_unpaged() {
        let mut s = state(3, 5);
        for _ in 0..3 {
            s.scroll_down();
            assert_invariants(&s);
        }
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 0, 0));
    }

    #[test]
    fn exact_fit_wraps_without_paging() {
        let mut s = state(3, 3);
        for _ in 0..3 {
            s.scroll_down();
        }
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 0, 0));
    }

    // ── scroll_up ────────────────────────────────────────────────────

    #[test]
    fn up_from_top_wraps_to_last_page() {
        let mut s = state(10, 3);
        s.scroll_up();
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (2, 9, 7));
        assert_invariants(&s);
    }

    #[test]
    fn up_from_top_wraps_unpaged() {
        let mut s = state(3, 5);
        s.scroll_up();
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (2, 2, 0));
        assert_invariants(&s);
    }

    #[test]
    fn up_decrements_page_when_already_paged() {
        let mut s = state(10, 3);
        for _ in 0..4 {
            s.scroll_down(); // choice 4, cursor 2, page 2
        }
        s.scroll_up();
        s.scroll_up();
        s.scroll_up(); // cursor pinned at 0, page walks back
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 1, 1));
        assert_invariants(&s);
    }

    #[test]
    fn up_then_down_round_trips() {
        let mut s = state(10, 4);
        s.scroll_up();
        s.scroll_down();
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 0, 0));
    }

    #[test]
    fn full_cycle_up_returns_to_zero() {
        let mut s = state(10, 3);
        for _ in 0..10 {
            s.scroll_up();
            assert_invariants(&s);
        }
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 0, 0));
    }

    #[test]
    fn scrolling_an_empty_state_is_a_noop() {
        let mut s = state(0, 3);
        s.scroll_down();
        s.scroll_up();
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 0, 0));
    }

    // ── set_options / add_option ─────────────────────────────────────

    #[test]
    fn shrinking_resets_all_counters() {
        let mut backend = TestBackend::new(24, 80);
        let mut s = state(10, 3);
        for _ in 0..5 {
            s.scroll_down();
        }
        s.set_options(messages(4, &mut backend));
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (0, 0, 0));
        assert_eq!(s.len(), 4);
    }

    #[test]
    fn growing_keeps_counters() {
        let mut backend = TestBackend::new(24, 80);
        let mut s = state(4, 3);
        s.scroll_down();
        s.set_options(messages(8, &mut backend));
        assert_eq!((s.cursor(), s.choice(), s.page_offset()), (1, 1, 0));
    }

    #[test]
    fn add_option_appends() {
        let mut backend = TestBackend::new(24, 80);
        let mut s = state(2, 3);
        s.add_option(messages(1, &mut backend).pop().unwrap());
        assert_eq!(s.len(), 3);
    }

    // ── draw ─────────────────────────────────────────────────────────

    #[test]
    fn draw_shows_the_current_page() {
        let mut backend = TestBackend::new(5, 20);
        let mut s = ListState::new(messages(6, &mut backend), 3);
        for _ in 0..3 {
            s.scroll_down(); // page 1, rows item1..item3
        }
        let mut frame = Frame::new(&mut backend, SurfaceId::ROOT);
        s.draw(&mut frame, 0, 0, false).unwrap();
        assert_eq!(backend.contents(), "item1\nitem2\nitem3\n\n");
    }

    #[test]
    fn cursor_row_highlighted_only_when_focused() {
        let mut backend = TestBackend::new(4, 20);
        let mut s = ListState::new(messages(3, &mut backend), 3);
        s.scroll_down();

        let mut frame = Frame::new(&mut backend, SurfaceId::ROOT);
        s.draw(&mut frame, 0, 0, true).unwrap();
        assert!(!backend.cell(0, 0).attr.reverse);
        assert!(backend.cell(1, 0).attr.reverse);

        let mut frame = Frame::new(&mut backend, SurfaceId::ROOT);
        s.draw(&mut frame, 0, 0, false).unwrap();
        assert!(!backend.cell(1, 0).attr.reverse);
    }
}
