//! Label widget: a one-line color-markup text.

use std::any::Any;

use crate::backend::Attr;
use crate::draw::Frame;
use crate::error::Result;
use crate::markup::{CctMessage, Colors};
use crate::widget::Widget;

/// A static line of CCT text. Ignores every key.
pub struct Label {
    text: CctMessage,
}

impl Label {
    /// Create a label from markup text.
    pub fn new(colors: &mut Colors<'_>, text: &str) -> Result<Self> {
        Ok(Self { text: colors.parse(text)? })
    }

    /// Replace the text with new markup.
    pub fn set_text(&mut self, colors: &mut Colors<'_>, text: &str) -> Result<()> {
        self.text = colors.parse(text)?;
        Ok(())
    }

    /// Replace the text with an already-parsed message.
    pub fn set_message(&mut self, text: CctMessage) {
        self.text = text;
    }

    /// The label's text, markup stripped.
    pub fn text(&self) -> String {
        self.text.plain()
    }
}

impl Widget for Label {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()> {
        let attr = if focused { Attr::REVERSE } else { Attr::NORMAL };
        self.text.draw(frame, y, x, attr)
    }

    fn height(&self) -> i32 {
        1
    }

    fn width(&self) -> i32 {
        self.text.len() as i32
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
