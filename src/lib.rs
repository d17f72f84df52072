//! # cellui
//!
//! A character-cell terminal UI toolkit: widgets (labels, buttons, lists,
//! line editors, word-choice pickers, progress bars, pie charts) inside a
//! bordered window, keyboard/mouse focus between them, and modal dialogs
//! (message boxes, drop-downs, string prompts).
//!
//! ## Core Systems
//!
//! - **[`markup`]** — `${fg-bg}` color-markup engine: logos lexer, colored
//!   runs, lazily allocated pair handles behind an explicit cache
//! - **[`widget`]** — Widget trait plus the shared state machines: focus
//!   ring, list cursor/page/choice arithmetic, line editing, word cycling
//! - **[`widgets`]** — The built-in widget catalog
//! - **[`window`]** — Window controller: widget arena, blocking render
//!   loop, key/pointer dispatch, background update channel
//! - **[`dialogs`]** — Synchronous modal sub-loops over transient surfaces
//! - **[`backend`]** — The terminal capability trait, its crossterm driver,
//!   and an in-memory test backend
//! - **[`event`]** — Input events decoupled from the terminal library
//! - **[`draw`]** — Frame handle and box-drawing helpers
//!
//! ## Example
//!
//! ```no_run
//! use cellui::backend::CrosstermBackend;
//! use cellui::event::Key;
//! use cellui::widgets::{Button, Label};
//! use cellui::window::Window;
//!
//! fn main() -> cellui::Result<()> {
//!     let mut win = Window::new(CrosstermBackend::new()?, "${cyan}Demo")?;
//!     let label = Label::new(&mut win.colors(), "${green}Hello, terminal!")?;
//!     win.add(label, 0, 0);
//!     let button = Button::new(&mut win.colors(), "[ Quit ]", Key::Enter, || Ok(()))?;
//!     let button = win.add(button, 2, 0);
//!     win.link(&[button]);
//!     win.focus(button)?;
//!     win.run()
//! }
//! ```

// Foundation
pub mod error;

// Core systems
pub mod backend;
pub mod draw;
pub mod event;
pub mod markup;

// Widget system
pub mod widget;
pub mod widgets;

// Application
pub mod dialogs;
pub mod window;

pub use error::{Error, Result};
