//! Drawing surface handle and box-drawing helpers.
//!
//! [`Frame`] pairs a backend with one surface so widgets can draw without
//! knowing which surface they are on or which backend is behind it. The
//! free functions cover the shared chrome: full-surface borders and
//! stand-alone boxes.

use crate::backend::{Attr, Backend, SurfaceId};
use crate::error::Result;

// ---------------------------------------------------------------------------
// Box-drawing glyphs
// ---------------------------------------------------------------------------

pub const ULCORNER: char = '┌';
pub const URCORNER: char = '┐';
pub const LLCORNER: char = '└';
pub const LRCORNER: char = '┘';
pub const HLINE: char = '─';
pub const VLINE: char = '│';
pub const LTEE: char = '├';
pub const RTEE: char = '┤';
pub const UARROW: char = '↑';
pub const DARROW: char = '↓';
pub const BLOCK: char = '█';

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A borrowed view of one surface for the duration of a draw pass.
pub struct Frame<'a> {
    backend: &'a mut dyn Backend,
    surface: SurfaceId,
}

impl<'a> Frame<'a> {
    pub fn new(backend: &'a mut dyn Backend, surface: SurfaceId) -> Self {
        Self { backend, surface }
    }

    /// Print `text` at (y, x), surface-relative.
    pub fn print(&mut self, y: i32, x: i32, text: &str, attr: Attr) -> Result<()> {
        self.backend.print(self.surface, y, x, text, attr)
    }

    /// Put a single glyph at (y, x).
    pub fn put(&mut self, y: i32, x: i32, ch: char, attr: Attr) -> Result<()> {
        let mut buf = [0u8; 4];
        self.backend.print(self.surface, y, x, ch.encode_utf8(&mut buf), attr)
    }

    /// The surface size as (height, width).
    pub fn size(&self) -> (i32, i32) {
        self.backend.size(self.surface)
    }
}

// ---------------------------------------------------------------------------
// Shared chrome
// ---------------------------------------------------------------------------

/// Draw a box outline at (y, x) with the given size.
pub fn draw_box(frame: &mut Frame<'_>, y: i32, x: i32, height: i32, width: i32, attr: Attr) -> Result<()> {
    frame.put(y, x, ULCORNER, attr)?;
    frame.put(y + height - 1, x, LLCORNER, attr)?;
    frame.put(y, x + width - 1, URCORNER, attr)?;
    frame.put(y + height - 1, x + width - 1, LRCORNER, attr)?;
    for i in 1..height - 1 {
        frame.put(y + i, x, VLINE, attr)?;
        frame.put(y + i, x + width - 1, VLINE, attr)?;
    }
    for i in 1..width - 1 {
        frame.put(y, x + i, HLINE, attr)?;
        frame.put(y + height - 1, x + i, HLINE, attr)?;
    }
    Ok(())
}

/// Draw a border around the whole surface.
pub fn draw_borders(frame: &mut Frame<'_>, attr: Attr) -> Result<()> {
    let (height, width) = frame.size();
    draw_box(frame, 0, 0, height, width, attr)
}

// ===========================================================================
// Tests
// ===========================================================================
