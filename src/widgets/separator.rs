//! Separator widget: a horizontal rule across the window.

use std::any::Any;

use crate::backend::{Attr, PairId};
use crate::draw::{self, Frame};
use crate::error::Result;
use crate::markup::Colors;
use crate::widget::Widget;

/// A full-width horizontal line with tee glyphs joining the window
/// border. The width is determined by the surface, not the widget; the
/// x position it is given is ignored.
pub struct Separator {
    border: PairId,
}

impl Separator {
    /// Create a separator drawn in the given border color pair.
    pub fn new(colors: &mut Colors<'_>, border: &str) -> Result<Self> {
        Ok(Self { border: colors.resolve(border)? })
    }
}

impl Widget for Separator {
    fn draw(&self, frame: &mut Frame<'_>, y: i32, _x: i32, _focused: bool) -> Result<()> {
        let (_, width) = frame.size();
        let attr = Attr::pair(self.border);
        frame.put(y, 0, draw::LTEE, attr)?;
        for x in 1..width - 1 {
            frame.put(y, x, draw::HLINE, attr)?;
        }
        frame.put(y, width - 1, draw::RTEE, attr)
    }

    fn height(&self) -> i32 {
        1
    }

    /// The surface decides the real width; separators are not meant to be
    /// hit-tested or focused.
    fn width(&self) -> i32 {
        0
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{SurfaceId, TestBackend};
    use crate::markup::PairCache;

    #[test]
    fn spans_the_surface_with_tee_ends() {
        let mut cache = PairCache::new();
        let mut backend = TestBackend::new(3, 6);
        let sep = Separator::new(&mut Colors::new(&mut cache, &mut backend), "normal").unwrap();
        let mut frame = Frame::new(&mut backend, SurfaceId::ROOT);
        sep.draw(&mut frame, 1, 0, false).unwrap();
        assert_eq!(backend.contents(), "\n├────┤\n");
    }

    #[test]
    fn uses_the_border_pair() {
        let mut cache = PairCache::new();
        let mut backend = TestBackend::new(2, 5);
        let sep = Separator::new(&mut Colors::new(&mut cache, &mut backend), "blue-black").unwrap();
        let mut frame = Frame::new(&mut backend, SurfaceId::ROOT);
        sep.draw(&mut frame, 0, 0, false).unwrap();
        assert_eq!(backend.cell(0, 0).attr.pair, Some(PairId(1)));
    }
}
