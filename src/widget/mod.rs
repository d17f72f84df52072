//! Widget capability trait and shared widget state.
//!
//! The [`Widget`] trait is the core abstraction for all UI elements: draw
//! into a frame, react to a key, report a bounding size. It is
//! object-safe so a window can own a heterogeneous `SlotMap<WidgetId,
//! Box<dyn Widget>>`; `as_any`/`as_any_mut` allow callers to reach a
//! concrete widget behind its id.
//!
//! The submodules hold the state machines several widgets share:
//! [`focus`] (ring traversal), [`list_state`] (cursor/page/choice
//! arithmetic), [`line_state`] (bounded text buffer), and [`cycle_state`]
//! (wrapping index).

pub mod cycle_state;
pub mod focus;
pub mod line_state;
pub mod list_state;

pub use cycle_state::CycleState;
pub use focus::{Dispatch, FocusLink, FocusRing};
pub use line_state::LineState;
pub use list_state::ListState;

use std::any::Any;

use slotmap::new_key_type;

use crate::draw::Frame;
use crate::error::Result;
use crate::event::Key;

new_key_type! {
    /// Stable identifier for a widget within its window. Copy, lightweight.
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// Widget trait
// ---------------------------------------------------------------------------

/// Core trait implemented by every widget.
///
/// Widgets hold no position of their own: the owning window passes (y, x)
/// into [`draw`](Widget::draw) from its focus-link table, so state flows
/// strictly top-down and widgets never point back at their container.
pub trait Widget {
    /// Draw at (y, x) on the frame. `focused` selects the highlight
    /// rendering where the widget has one.
    fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()>;

    /// React to a key forwarded by the window's focus dispatch.
    ///
    /// Defaults to ignoring the key; display-only widgets keep this.
    fn handle_key(&mut self, key: Key) -> Result<()> {
        let _ = key;
        Ok(())
    }

    /// Height of the bounding box in cells.
    fn height(&self) -> i32;

    /// Width of the bounding box in cells.
    fn width(&self) -> i32;

    /// Downcast support for reaching the concrete widget behind an id.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{Attr, SurfaceId, TestBackend};

    struct Probe {
        text: String,
        last_key: Option<Key>,
    }

    impl Probe {
        fn new(text: &str) -> Self {
            Self { text: text.to_owned(), last_key: None }
        }
    }

    impl Widget for Probe {
        fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, focused: bool) -> Result<()> {
            let attr = if focused { Attr::REVERSE } else { Attr::NORMAL };
            frame.print(y, x, &self.text, attr)
        }

        fn handle_key(&mut self, key: Key) -> Result<()> {
            self.last_key = Some(key);
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

    #[test]
    fn widget_is_object_safe() {
        let mut backend = TestBackend::new(2, 10);
        let widget: Box<dyn Widget> = Box::new(Probe::new("hey"));
        let mut frame = Frame::new(&mut backend, SurfaceId::ROOT);
        widget.draw(&mut frame, 0, 0, false).unwrap();
        assert_eq!(backend.contents(), "hey\n");
        assert_eq!(widget.width(), 3);
        assert_eq!(widget.height(), 1);
    }

    #[test]
    fn focused_draw_uses_reverse() {
        let mut backend = TestBackend::new(1, 10);
        let widget = Probe::new("x");
        let mut frame = Frame::new(&mut backend, SurfaceId::ROOT);
        widget.draw(&mut frame, 0, 0, true).unwrap();
        assert!(backend.cell(0, 0).attr.reverse);
    }

    #[test]
    fn downcast_reaches_concrete_type() {
        let mut widget: Box<dyn Widget> = Box::new(Probe::new("p"));
        widget.handle_key(Key::Enter).unwrap();
        let probe = widget.as_any().downcast_ref::<Probe>().unwrap();
        assert_eq!(probe.last_key, Some(Key::Enter));

        let probe = widget.as_any_mut().downcast_mut::<Probe>().unwrap();
        probe.text.push('!');
        assert_eq!(widget.width(), 2);
    }

    #[test]
    fn widget_ids_are_distinct() {
        let mut arena: slotmap::SlotMap<WidgetId, ()> = slotmap::SlotMap::with_key();
        let a = arena.insert(());
        let b = arena.insert(());
        assert_ne!(a, b);
    }
}
