//! Word-choice widget: pick one word from a cycling set.

use std::any::Any;

use crate::backend::{Attr, PairId};
use crate::draw::Frame;
use crate::error::Result;
use crate::event::Key;
use crate::markup::{CctMessage, Colors};
use crate::widget::{CycleState, Widget};

/// Horizontal placement of an option between the arrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// `< option >`: Right cycles forward, Left cycles back.
///
/// The slot between the arrows is sized to the widest option; shorter
/// options are placed according to the alignment. The whole row is
/// redrawn every frame.
#[derive(Debug)]
pub struct WordChoice {
    state: CycleState,
    alignment: Alignment,
    arrow_color: PairId,
    inc_key: Key,
    dec_key: Key,
}

impl WordChoice {
    /// Create a word choice from markup options.
    ///
    /// Fails with `EmptyOptions` when `options` is empty.
    pub fn new(
        colors: &mut Colors<'_>,
        options: &[impl AsRef<str>],
        alignment: Alignment,
        arrow_color: &str,
    ) -> Result<Self> {
        Ok(Self {
            state: CycleState::new(colors.parse_all(options)?)?,
            alignment,
            arrow_color: colors.resolve(arrow_color)?,
            inc_key: Key::Right,
            dec_key: Key::Left,
        })
    }

    /// The currently selected option.
    pub fn selected(&self) -> &CctMessage {
        self.state.selected()
    }

    /// Index of the currently selected option.
    pub fn choice(&self) -> usize {
        self.state.index()
    }

    /// Jump back to the first option.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}

impl Widget for WordChoice {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()> {
        let max_len = self.state.max_len() as i32;
        let mut arrows = Attr::pair(self.arrow_color);
        if focused {
            arrows = arrows.reversed();
        }
        frame.put(y, x, '<', arrows)?;
        frame.put(y, x + max_len + 1, '>', arrows)?;

        // Blank the slot, then place the option by alignment.
        frame.print(y, x + 1, &" ".repeat(max_len as usize), Attr::NORMAL)?;
        let option = self.state.selected();
        let spare = max_len - option.len() as i32;
        let offset = match self.alignment {
            Alignment::Left => 0,
            Alignment::Center => spare / 2,
            Alignment::Right => spare,
        };
        option.draw(frame, y, x + 1 + offset, Attr::NORMAL)
    }

    fn handle_key(&mut self, key: Key) -> Result<()> {
        if key == self.inc_key {
            self.state.focus_next();
        } else if key == self.dec_key {
            self.state.focus_prev();
        }
        Ok(())
    }

    fn height(&self) -> i32 {
        1
    }

    /// Widest option plus the two arrow cells.
    fn width(&self) -> i32 {
        self.state.max_len() as i32 + 2
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
