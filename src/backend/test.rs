//! In-memory backend for headless tests.
//!
//! [`TestBackend`] keeps a character grid the size of the screen, records
//! every pair registration, and feeds back a scripted queue of input
//! events. Sub-surfaces composite onto the same grid, translated by their
//! origin, exactly as dialog windows overlay the screen. Use
//! [`contents`](TestBackend::contents) for snapshot-style assertions.

use std::collections::VecDeque;

use super::{Attr, Backend, PairId, Rect, SurfaceId};
use crate::error::Result;
use crate::event::{InputEvent, Key};
use crate::markup::color::PaletteColor;

// ---------------------------------------------------------------------------
// TestCell
// ---------------------------------------------------------------------------

/// One cell of the test grid: the glyph and the attribute it was printed
/// with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCell {
    pub ch: char,
    pub attr: Attr,
}

impl Default for TestCell {
    fn default() -> Self {
        Self { ch: ' ', attr: Attr::NORMAL }
    }
}

// ---------------------------------------------------------------------------
// TestBackend
// ---------------------------------------------------------------------------

/// A scriptable, renderless terminal.
///
/// When the event queue runs dry, [`next_event`](Backend::next_event)
/// reports the Escape key so that window and dialog loops always
/// terminate in tests.
#[derive(Debug)]
pub struct TestBackend {
    height: i32,
    width: i32,
    cells: Vec<Vec<TestCell>>,
    surfaces: Vec<Option<Rect>>,
    pairs: Vec<(PaletteColor, PaletteColor)>,
    events: VecDeque<InputEvent>,
    presented: u32,
    beeps: u32,
    flashes: u32,
}

impl TestBackend {
    /// Create a backend with a blank grid of the given size.
    pub fn new(height: i32, width: i32) -> Self {
        Self {
            height,
            width,
            cells: vec![vec![TestCell::default(); width.max(0) as usize]; height.max(0) as usize],
            surfaces: vec![Some(Rect::new(0, 0, height, width))],
            pairs: Vec::new(),
            events: VecDeque::new(),
            presented: 0,
            beeps: 0,
            flashes: 0,
        }
    }

    // ── Scripting ────────────────────────────────────────────────────

    /// Queue an input event.
    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    /// Queue a key press.
    pub fn push_key(&mut self, key: Key) {
        self.push_event(InputEvent::Key(key));
    }

    /// Queue one key press per character of `text`.
    pub fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_key(Key::Char(ch));
        }
    }

    /// Queue a left click at (y, x).
    pub fn push_click(&mut self, y: i32, x: i32) {
        self.push_event(InputEvent::Click { y, x });
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// The grid as text: one line per row, trailing spaces trimmed.
    pub fn contents(&self) -> String {
        self.cells
            .iter()
            .map(|row| {
                let line: String = row.iter().map(|cell| cell.ch).collect();
                line.trim_end().to_owned()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// The cell at screen coordinates (y, x).
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn cell(&self, y: i32, x: i32) -> TestCell {
        self.cells[y as usize][x as usize]
    }

    /// Every pair registration in allocation order.
    pub fn registered_pairs(&self) -> &[(PaletteColor, PaletteColor)] {
        &self.pairs
    }

    /// How many times a surface was presented.
    pub fn presented(&self) -> u32 {
        self.presented
    }

    /// How many times the bell rang.
    pub fn beeps(&self) -> u32 {
        self.beeps
    }

    /// How many times the screen flashed.
    pub fn flashes(&self) -> u32 {
        self.flashes
    }

    fn rect(&self, surface: SurfaceId) -> Option<Rect> {
        self.surfaces.get(surface.0 as usize).copied().flatten()
    }
}

impl Backend for TestBackend {
    fn register_pair(&mut self, fg: PaletteColor, bg: PaletteColor) -> Result<PairId> {
        self.pairs.push((fg, bg));
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
        for y in rect.y..rect.y + rect.height {
            for x in rect.x..rect.x + rect.width {
                if (0..self.height).contains(&y) && (0..self.width).contains(&x) {
                    self.cells[y as usize][x as usize] = TestCell::default();
                }
            }
        }
        Ok(())
    }

    fn print(&mut self, surface: SurfaceId, y: i32, x: i32, text: &str, attr: Attr) -> Result<()> {
        let Some(rect) = self.rect(surface) else { return Ok(()) };
        let gy = rect.y + y;
        for (i, ch) in text.chars().enumerate() {
            let gx = rect.x + x + i as i32;
            if (0..self.height).contains(&gy) && (0..self.width).contains(&gx) {
                self.cells[gy as usize][gx as usize] = TestCell { ch, attr };
            }
        }
        Ok(())
    }

    fn present(&mut self, _surface: SurfaceId) -> Result<()> {
        self.presented += 1;
        Ok(())
    }

    fn size(&self, surface: SurfaceId) -> (i32, i32) {
        match self.rect(surface) {
            Some(rect) => (rect.height, rect.width),
            None => (0, 0),
        }
    }

    fn next_event(&mut self) -> Result<InputEvent> {
        Ok(self
            .events
            .pop_front()
            .unwrap_or(InputEvent::Key(Key::Escape)))
    }

    fn beep(&mut self) {
        self.beeps += 1;
    }

    fn flash(&mut self) {
        self.flashes += 1;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_blank() {
        let backend = TestBackend::new(2, 4);
        assert_eq!(backend.contents(), "\n");
        assert_eq!(backend.size(SurfaceId::ROOT), (2, 4));
    }

    #[test]
    fn print_writes_cells() {
        let mut backend = TestBackend::new(2, 10);
        backend.print(SurfaceId::ROOT, 0, 3, "abc", Attr::NORMAL).unwrap();
        assert_eq!(backend.contents(), "   abc\n");
        assert_eq!(backend.cell(0, 3).ch, 'a');
    }

    #[test]
    fn print_clips_at_grid_edges() {
        let mut backend = TestBackend::new(1, 4);
        backend.print(SurfaceId::ROOT, 0, 2, "abcdef", Attr::NORMAL).unwrap();
        assert_eq!(backend.contents(), "  ab");
        // Off-grid rows are dropped entirely.
        backend.print(SurfaceId::ROOT, 5, 0, "x", Attr::NORMAL).unwrap();
        assert_eq!(backend.contents(), "  ab");
    }

    #[test]
    fn sub_surface_translates_origin() {
        let mut backend = TestBackend::new(4, 10);
        let sub = backend.create_surface(1, 2, 2, 5).unwrap();
        backend.print(sub, 0, 0, "hi", Attr::NORMAL).unwrap();
        assert_eq!(backend.cell(1, 2).ch, 'h');
        assert_eq!(backend.cell(1, 3).ch, 'i');
        assert_eq!(backend.size(sub), (2, 5));
    }

    #[test]
    fn erase_blanks_only_the_surface() {
        let mut backend = TestBackend::new(3, 6);
        backend.print(SurfaceId::ROOT, 0, 0, "aaaaaa", Attr::NORMAL).unwrap();
        backend.print(SurfaceId::ROOT, 1, 0, "bbbbbb", Attr::NORMAL).unwrap();
        let sub = backend.create_surface(1, 1, 1, 3).unwrap();
        backend.erase(sub).unwrap();
        assert_eq!(backend.contents(), "aaaaaa\nb   bb\n");
    }

    #[test]
    fn dropped_surface_ignores_draws() {
        let mut backend = TestBackend::new(2, 6);
        let sub = backend.create_surface(0, 0, 1, 3).unwrap();
        backend.drop_surface(sub).unwrap();
        backend.print(sub, 0, 0, "x", Attr::NORMAL).unwrap();
        assert_eq!(backend.contents(), "\n");
        assert_eq!(backend.size(sub), (0, 0));
    }

    #[test]
    fn root_surface_cannot_be_dropped() {
        let mut backend = TestBackend::new(2, 6);
        backend.drop_surface(SurfaceId::ROOT).unwrap();
        backend.print(SurfaceId::ROOT, 0, 0, "x", Attr::NORMAL).unwrap();
        assert_eq!(backend.cell(0, 0).ch, 'x');
    }

    #[test]
    fn pair_handles_count_from_one() {
        let mut backend = TestBackend::new(1, 1);
        let a = backend.register_pair(PaletteColor::RED, PaletteColor::NORMAL).unwrap();
        let b = backend.register_pair(PaletteColor::BLUE, PaletteColor::BLACK).unwrap();
        assert_eq!(a, PairId(1));
        assert_eq!(b, PairId(2));
    }

    #[test]
    fn scripted_events_then_escape() {
        let mut backend = TestBackend::new(1, 1);
        backend.push_key(Key::Enter);
        backend.push_click(3, 4);
        assert_eq!(backend.next_event().unwrap(), InputEvent::Key(Key::Enter));
        assert_eq!(backend.next_event().unwrap(), InputEvent::Click { y: 3, x: 4 });
        // Queue exhausted: escape forever.
        assert_eq!(backend.next_event().unwrap(), InputEvent::Key(Key::Escape));
        assert_eq!(backend.next_event().unwrap(), InputEvent::Key(Key::Escape));
    }

    #[test]
    fn push_text_queues_char_keys() {
        let mut backend = TestBackend::new(1, 1);
        backend.push_text("ab");
        assert_eq!(backend.next_event().unwrap(), InputEvent::Key(Key::Char('a')));
        assert_eq!(backend.next_event().unwrap(), InputEvent::Key(Key::Char('b')));
    }

    #[test]
    fn beep_and_flash_are_counted() {
        let mut backend = TestBackend::new(1, 1);
        backend.beep();
        backend.flash();
        backend.flash();
        assert_eq!(backend.beeps(), 1);
        assert_eq!(backend.flashes(), 2);
    }
}
