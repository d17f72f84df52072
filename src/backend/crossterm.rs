//! Crossterm terminal backend.
//!
//! Wraps a buffered stdout writer and implements the [`Backend`]
//! capability surface over crossterm: raw mode + alternate screen for the
//! lifetime of the backend, `queue!`-batched writes flushed on
//! [`present`](Backend::present), and a blocking `event::read()` loop
//! that filters the terminal's event stream down to the toolkit's model.
//!
//! Surfaces are tracked as screen rectangles; printing translates by the
//! surface origin. Pair registration records the palette combination in a
//! process-local table: the terminal itself has no pair concept, so the
//! handle is simply an index into that table.

use std::io::{self, BufWriter, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use super::{Attr, Backend, PairId, Rect, SurfaceId};
use crate::error::Result;
use crate::event::InputEvent;
use crate::markup::color::PaletteColor;

/// Convert a palette index to a crossterm color.
///
/// `NORMAL` (−1) maps to the terminal default; everything else addresses
/// the 256-color palette directly.
fn to_color(color: PaletteColor) -> Color {
    if color == PaletteColor::NORMAL {
        Color::Reset
    } else {
        Color::AnsiValue(color.0 as u8)
    }
}

// ---------------------------------------------------------------------------
// CrosstermBackend
// ---------------------------------------------------------------------------

/// The real terminal driver.
///
/// Construction enters raw mode, the alternate screen, and mouse capture;
/// dropping the backend restores the terminal even when the owning loop
/// exits through an error.
pub struct CrosstermBackend {
    writer: BufWriter<Stdout>,
    surfaces: Vec<Option<Rect>>,
    pairs: Vec<(Color, Color)>,
}

impl CrosstermBackend {
    /// Take over the terminal.
    pub fn new() -> Result<Self> {
        let mut writer = BufWriter::new(io::stdout());
        terminal::enable_raw_mode()?;
        execute!(writer, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        let (width, height) = terminal::size()?;
        Ok(Self {
            writer,
            surfaces: vec![Some(Rect::new(0, 0, i32::from(height), i32::from(width)))],
            pairs: Vec::new(),
        })
    }

    fn rect(&self, surface: SurfaceId) -> Option<Rect> {
        self.surfaces.get(surface.0 as usize).copied().flatten()
    }

    fn queue_attr(&mut self, attr: Attr) -> io::Result<()> {
        if let Some(PairId(id)) = attr.pair {
            if let Some(&(fg, bg)) = self.pairs.get(id.saturating_sub(1) as usize) {
                queue!(self.writer, SetForegroundColor(fg), SetBackgroundColor(bg))?;
            }
        }
        if attr.reverse {
            queue!(self.writer, SetAttribute(Attribute::Reverse))?;
        }
        Ok(())
    }
}

impl Backend for CrosstermBackend {
    fn register_pair(&mut self, fg: PaletteColor, bg: PaletteColor) -> Result<PairId> {
        self.pairs.push((to_color(fg), to_color(bg)));
        Ok(PairId(self.pairs.len() as u16))
    }

    fn create_surface(&mut self, y: i32, x: i32, height: i32, width: i32) -> Result<SurfaceId> {
        let id = SurfaceId(self.surfaces.len() as u32);
        self.surfaces.push(Some(Rect::new(y, x, height, width)));
        Ok(id)
    }

    fn drop_surface(&mut self, surface: SurfaceId) -> Result<()> {
        if surface != SurfaceId::ROOT {
            if let Some(slot) = self.surfaces.get_mut(surface.0 as usize) {
                *slot = None;
            }
        }
        Ok(())
    }

    fn erase(&mut self, surface: SurfaceId) -> Result<()> {
        let Some(rect) = self.rect(surface) else { return Ok(()) };
        if surface == SurfaceId::ROOT {
            queue!(self.writer, Clear(ClearType::All))?;
            return Ok(());
        }
        let blank = " ".repeat(rect.width.max(0) as usize);
        for row in 0..rect.height {
            queue!(
                self.writer,
                cursor::MoveTo(rect.x as u16, (rect.y + row) as u16),
                Print(&blank)
            )?;
        }
        Ok(())
    }

    fn print(&mut self, surface: SurfaceId, y: i32, x: i32, text: &str, attr: Attr) -> Result<()> {
        let Some(rect) = self.rect(surface) else { return Ok(()) };
        let gy = rect.y + y;
        let gx = rect.x + x;
        if gy < 0 || gx < 0 {
            return Ok(());
        }
        queue!(self.writer, cursor::MoveTo(gx as u16, gy as u16))?;
        self.queue_attr(attr)?;
        queue!(self.writer, Print(text), ResetColor)?;
        if attr.reverse {
            queue!(self.writer, SetAttribute(Attribute::NoReverse))?;
        }
        Ok(())
    }

    fn present(&mut self, _surface: SurfaceId) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn size(&self, surface: SurfaceId) -> (i32, i32) {
        match self.rect(surface) {
            Some(rect) => (rect.height, rect.width),
            None => (0, 0),
        }
    }

    fn next_event(&mut self) -> Result<InputEvent> {
        loop {
            let raw = event::read()?;
            if let Some(converted) = InputEvent::from_crossterm(raw) {
                if let InputEvent::Resize { height, width } = converted {
                    self.surfaces[0] = Some(Rect::new(0, 0, height, width));
                }
                return Ok(converted);
            }
        }
    }

    fn beep(&mut self) {
        // BEL; best-effort, like the rest of the bell story on terminals.
        let _ = queue!(self.writer, Print('\u{7}'));
        let _ = self.writer.flush();
    }

    fn flash(&mut self) {
        // Crossterm exposes no visual bell; fall back to the audible one.
        self.beep();
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = execute!(self.writer, DisableMouseCapture, LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
    }
}

// ===========================================================================
// Tests
// ===========================================================================
