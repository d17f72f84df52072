//! List widget: a bordered, scrollable option list.

use std::any::Any;

use crate::backend::{Attr, PairId};
use crate::draw::{self, Frame};
use crate::error::{Error, Result};
use crate::event::Key;
use crate::markup::{reverse_spec, CctMessage, Colors};
use crate::widget::{ListState, Widget};

/// Callback invoked when a list option activates; receives the absolute
/// choice index and the cursor row within the window.
pub type OptionClickFn = Box<dyn FnMut(usize, usize) -> Result<()>>;

/// A [`ListState`] wrapped in a box border with a side scrollbar.
///
/// Up/Down stay reserved for focus traversal, so the list scrolls on its
/// own keys (`<` and `>` by default) and activates on Enter.
pub struct List {
    state: ListState,
    border: PairId,
    thumb: PairId,
    max_width: i32,
    click: OptionClickFn,
    scroll_up_key: Key,
    scroll_down_key: Key,
    click_key: Key,
}

impl std::fmt::Debug for List {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("List")
            .field("state", &self.state)
            .field("border", &self.border)
            .field("thumb", &self.thumb)
            .field("max_width", &self.max_width)
            .field("click", &"<closure>")
            .field("scroll_up_key", &self.scroll_up_key)
            .field("scroll_down_key", &self.scroll_down_key)
            .field("click_key", &self.click_key)
            .finish()
    }
}

impl List {
    /// Create a list from markup options showing `window_size` rows.
    ///
    /// Fails with [`Error::EmptyOptions`] when `options` is empty.
    pub fn new(
        colors: &mut Colors<'_>,
        options: &[impl AsRef<str>],
        window_size: usize,
        border: &str,
        click: impl FnMut(usize, usize) -> Result<()> + 'static,
    ) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyOptions("list"));
        }
        let messages = colors.parse_all(options)?;
        let max_width = messages.iter().map(CctMessage::len).max().unwrap_or(0) as i32;
        Ok(Self {
            state: ListState::new(messages, window_size),
            border: colors.resolve(border)?,
            thumb: colors.resolve(&reverse_spec(border))?,
            max_width,
            click: Box::new(click),
            scroll_up_key: Key::Char('<'),
            scroll_down_key: Key::Char('>'),
            click_key: Key::Enter,
        })
    }

    /// The scroll bookkeeping (choice, cursor, page offset).
    pub fn state(&self) -> &ListState {
        &self.state
    }

    /// Replace the options; a shorter list resets the scroll state.
    pub fn set_options(&mut self, options: Vec<CctMessage>) {
        self.max_width = options.iter().map(CctMessage::len).max().unwrap_or(0) as i32;
        self.state.set_options(options);
    }

    /// Append one option.
    pub fn add_option(&mut self, option: CctMessage) {
        self.max_width = self.max_width.max(option.len() as i32);
        self.state.add_option(option);
    }

    /// Override the scroll keys (defaults `<` and `>`).
    pub fn set_scroll_keys(&mut self, up: Key, down: Key) {
        self.scroll_up_key = up;
        self.scroll_down_key = down;
    }

    /// Override the activation key (default Enter).
    pub fn set_click_key(&mut self, key: Key) {
        self.click_key = key;
    }

    /// Scrollbar, drawn only when the options overflow the window.
    fn draw_scroller(&self, frame: &mut Frame<'_>, y: i32, x: i32) -> Result<()> {
        let total = self.state.len();
        let window = self.state.window_size();
        if total <= window {
            return Ok(());
        }
        let height = self.height();
        let width = self.width();
        let page = self.state.page_offset();
        let bar_x = x + width - 2;

        // Arrows only where further scrolling is possible.
        if page != 0 {
            frame.put(y + 1, bar_x, draw::UARROW, Attr::NORMAL)?;
        }
        if page != total - window {
            frame.put(y + height - 2, bar_x, draw::DARROW, Attr::NORMAL)?;
        }

        let track = height - 4;
        for i in 0..track {
            frame.put(y + 2 + i, bar_x, draw::VLINE, Attr::NORMAL)?;
        }

        let thumb_height = (window as i32 * track) / total as i32 + 1;
        let thumb_offset = (page as i32 * track) / total as i32;
        for i in 0..thumb_height {
            frame.put(y + 2 + i + thumb_offset, bar_x, ' ', Attr::pair(self.thumb))?;
        }
        Ok(())
    }
}

impl Widget for List {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()> {
        draw::draw_box(frame, y, x, self.height(), self.width(), Attr::pair(self.border))?;
        self.draw_scroller(frame, y, x)?;
        self.state.draw(frame, y + 1, x + 1, focused)
    }

    fn handle_key(&mut self, key: Key) -> Result<()> {
        if key == self.scroll_down_key {
            self.state.scroll_down();
        } else if key == self.scroll_up_key {
            self.state.scroll_up();
        } else if key == self.click_key && !self.state.is_empty() {
            return (self.click)(self.state.choice(), self.state.cursor());
        }
        Ok(())
    }

    fn height(&self) -> i32 {
        self.state.window_size() as i32 + 2
    }

    fn width(&self) -> i32 {
        self.max_width + 4
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
