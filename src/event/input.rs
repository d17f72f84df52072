//! Input event types wrapping crossterm for decoupling.
//!
//! Defines [`Key`] and [`InputEvent`]. Crossterm events are converted via
//! `from_crossterm` helpers so the rest of the toolkit never depends on
//! crossterm directly. The event model is deliberately small: the core
//! blocks for exactly one key press or pointer click per cycle.

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, decoupled from crossterm.
///
/// [`Key::Click`] is a synthetic code: it never arrives from the terminal
/// directly, but is forwarded to a widget when a pointer click lands on it
/// while it is already focused ("activate via click").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Synthetic pointer-activation code (see type docs).
    Click,
}

impl Key {
    /// Convert a crossterm key code.
    ///
    /// Returns `None` for key codes the toolkit does not handle; the
    /// backend skips those events rather than mis-reporting them.
    pub fn from_crossterm(code: crossterm::event::KeyCode) -> Option<Key> {
        use crossterm::event::KeyCode;
        let key = match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Esc => Key::Escape,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => return None,
        };
        Some(key)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event, as reported by a backend's blocking read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press.
    Key(Key),
    /// A left-button pointer click at screen coordinates (row, column).
    Click { y: i32, x: i32 },
    /// The terminal was resized.
    Resize { height: i32, width: i32 },
}

impl InputEvent {
    /// Convert a crossterm event.
    ///
    /// Returns `None` for events outside the toolkit's model (key
    /// releases, mouse movement, non-left buttons, focus/paste events).
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<InputEvent> {
        use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
        match event {
            Event::Key(ke) if ke.kind != KeyEventKind::Release => {
                Key::from_crossterm(ke.code).map(InputEvent::Key)
            }
            Event::Mouse(me) => match me.kind {
                MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                    y: i32::from(me.row),
                    x: i32::from(me.column),
                }),
                _ => None,
            },
            Event::Resize(width, height) => Some(InputEvent::Resize {
                height: i32::from(height),
                width: i32::from(width),
            }),
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
