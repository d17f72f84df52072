//! Button widget: a clickable line of text.

use std::any::Any;

use crate::backend::Attr;
use crate::draw::Frame;
use crate::error::Result;
use crate::event::Key;
use crate::markup::{CctMessage, Colors};
use crate::widget::Widget;

/// Callback invoked when a button activates.
pub type ClickFn = Box<dyn FnMut() -> Result<()>>;

/// A focusable, activatable label.
///
/// Activates on its configured click key or on a forwarded pointer click
/// ([`Key::Click`]); renders reverse-video while focused.
pub struct Button {
    text: CctMessage,
    click: ClickFn,
    click_key: Key,
}

impl Button {
    /// Create a button from markup text with an activation callback.
    pub fn new(
        colors: &mut Colors<'_>,
        text: &str,
        click_key: Key,
        click: impl FnMut() -> Result<()> + 'static,
    ) -> Result<Self> {
        Ok(Self {
            text: colors.parse(text)?,
            click: Box::new(click),
            click_key,
        })
    }

    /// Replace the label with new markup.
    pub fn set_text(&mut self, colors: &mut Colors<'_>, text: &str) -> Result<()> {
        self.text = colors.parse(text)?;
        Ok(())
    }

    /// Replace the label with an already-parsed message.
    pub fn set_message(&mut self, text: CctMessage) {
        self.text = text;
    }

    /// The button label, markup stripped.
    pub fn text(&self) -> String {
        self.text.plain()
    }
}

impl Widget for Button {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()> {
        let attr = if focused { Attr::REVERSE } else { Attr::NORMAL };
        self.text.draw(frame, y, x, attr)
    }

    fn handle_key(&mut self, key: Key) -> Result<()> {
        if key == self.click_key || key == Key::Click {
            return (self.click)();
        }
        Ok(())
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
