//! Cursor-addressable text buffer for line editing.
//!
//! [`LineState`] backs the line-edit widget and the string-entry dialog.
//! The buffer is bounded by a maximum length and guarded by a fixed
//! allow-list character filter; keystrokes that fail either check are
//! silently dropped: a deliberate UX filter, not an error.

use crate::backend::Attr;
use crate::draw::Frame;
use crate::error::{Error, Result};

/// Characters the filter lets through: ASCII letters, digits, space, and
/// a small symbol set.
fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, ' ' | '=' | '"')
}

// ---------------------------------------------------------------------------
// LineState
// ---------------------------------------------------------------------------

/// Editable line content with a cursor, capped at `max_len` characters.
///
/// The cursor is an index in `0..=content.len()`; every operation keeps
/// it in that range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineState {
    content: String,
    cursor: usize,
    max_len: usize,
}

impl LineState {
    /// Create a state with initial text and a capacity bound.
    ///
    /// Fails with [`Error::TooLong`] if the initial text already exceeds
    /// the bound.
    pub fn new(text: impl Into<String>, max_len: usize) -> Result<Self> {
        let content = text.into();
        if content.len() > max_len {
            return Err(Error::TooLong { text: content, max: max_len });
        }
        Ok(Self { content, cursor: 0, max_len })
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    // ── Editing ──────────────────────────────────────────────────────

    /// Insert a character at the cursor and advance it.
    ///
    /// Dropped without effect when the buffer is full or the character
    /// fails the allow-list filter.
    pub fn add_char(&mut self, ch: char) {
        if self.content.len() < self.max_len && is_allowed(ch) {
            self.content.insert(self.cursor, ch);
            self.move_cursor_right();
        }
    }

    /// Remove the character before the cursor (backspace). No-op at 0.
    pub fn delete_selected(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.content.remove(self.cursor - 1);
        self.move_cursor_left();
    }

    /// Move the cursor one cell left, clamping at the start.
    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one cell right, clamping at the content end.
    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.content.len() {
            self.cursor += 1;
        }
    }

    /// Replace the content and put the cursor at its end.
    ///
    /// Fails with [`Error::TooLong`] when `text` exceeds the bound; the
    /// state is left unchanged in that case.
    pub fn set_text(&mut self, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.len() > self.max_len {
            return Err(Error::TooLong { text, max: self.max_len });
        }
        self.cursor = text.len();
        self.content = text;
        Ok(())
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Draw at (y, x): a full-width `_` placeholder row, overprinted with
    /// the content. When focused and the cursor cell is within the
    /// capacity, the single cell at the cursor is highlighted.
    pub fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool, attr: Attr) -> Result<()> {
        let blank = "_".repeat(self.max_len);
        frame.print(y, x, &blank, attr)?;
        frame.print(y, x, &self.content, attr)?;
        if focused && self.cursor < self.max_len {
            let under = self.content[self.cursor..].chars().next().unwrap_or(' ');
            frame.put(y, x + self.cursor as i32, under, attr.reversed())?;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
