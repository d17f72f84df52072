//! Line-edit widget: a bounded, filtered text field.

use std::any::Any;

use crate::backend::{Attr, PairId};
use crate::draw::Frame;
use crate::error::Result;
use crate::event::Key;
use crate::markup::Colors;
use crate::widget::{LineState, Widget};

/// A [`LineState`] drawn in a text color pair.
///
/// Left/Right move the cursor, Backspace deletes, and every other
/// character key runs through the state's allow-list filter.
pub struct LineEdit {
    state: LineState,
    text_color: PairId,
}

impl LineEdit {
    /// Create a line edit with initial text and a capacity bound.
    pub fn new(
        colors: &mut Colors<'_>,
        text: &str,
        max_len: usize,
        text_color: &str,
    ) -> Result<Self> {
        Ok(Self {
            state: LineState::new(text, max_len)?,
            text_color: colors.resolve(text_color)?,
        })
    }

    /// The entered text.
    pub fn text(&self) -> &str {
        self.state.content()
    }

    /// Replace the text, cursor to the end. Fails with `TooLong` past the
    /// capacity bound.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        self.state.set_text(text)
    }

    /// The underlying edit state.
    pub fn state(&self) -> &LineState {
        &self.state
    }
}

impl Widget for LineEdit {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()> {
        self.state.draw(frame, y, x, focused, Attr::pair(self.text_color))
    }

    fn handle_key(&mut self, key: Key) -> Result<()> {
        match key {
            Key::Left => self.state.move_cursor_left(),
            Key::Right => self.state.move_cursor_right(),
            Key::Backspace => self.state.delete_selected(),
            Key::Char(ch) => self.state.add_char(ch),
            _ => {}
        }
        Ok(())
    }

    fn height(&self) -> i32 {
        1
    }

    fn width(&self) -> i32 {
        self.state.max_len() as i32
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
