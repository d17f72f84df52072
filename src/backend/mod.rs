//! Terminal capability interface and its implementations.
//!
//! The core never talks to a terminal library directly; everything it
//! needs is the small, object-safe [`Backend`] trait: register a color
//! pair and get a stable handle, create/erase/present rectangular
//! surfaces, move-and-print with an attribute, and block for the next
//! input event. [`CrosstermBackend`] is the real driver;
//! [`TestBackend`] is an in-memory grid for headless tests.

pub mod crossterm;
pub mod test;

pub use self::crossterm::CrosstermBackend;
pub use self::test::TestBackend;

use crate::error::Result;
use crate::event::InputEvent;
use crate::markup::color::PaletteColor;

// ---------------------------------------------------------------------------
// Handles
// ---------------------------------------------------------------------------

/// Opaque handle for a registered foreground/background color pair.
///
/// Handles are a scarce, monotonically increasing, non-reusable resource:
/// the first registration gets `PairId(1)`, the next `PairId(2)`, and so
/// on for the life of the process. Pair 0 is reserved for the terminal
/// default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairId(pub u16);

/// Handle for a drawing surface (the root window or a dialog sub-window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(pub u32);

impl SurfaceId {
    /// The primary full-screen surface, present from backend creation.
    pub const ROOT: SurfaceId = SurfaceId(0);
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A surface's placement on the screen, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub y: i32,
    pub x: i32,
    pub height: i32,
    pub width: i32,
}

impl Rect {
    pub fn new(y: i32, x: i32, height: i32, width: i32) -> Self {
        Self { y, x, height, width }
    }
}

// ---------------------------------------------------------------------------
// Attr
// ---------------------------------------------------------------------------

/// Display attribute for a single print call: an optional color pair plus
/// a reverse-video flag (used for focus highlights).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Attr {
    pub pair: Option<PairId>,
    pub reverse: bool,
}

impl Attr {
    /// No color pair, no highlight.
    pub const NORMAL: Attr = Attr { pair: None, reverse: false };

    /// Reverse-video with the default colors.
    pub const REVERSE: Attr = Attr { pair: None, reverse: true };

    /// An attribute carrying only a color pair.
    pub fn pair(pair: PairId) -> Attr {
        Attr { pair: Some(pair), reverse: false }
    }

    /// Replace the color pair, keeping the highlight flag.
    pub fn with_pair(self, pair: PairId) -> Attr {
        Attr { pair: Some(pair), ..self }
    }

    /// Turn on reverse-video, keeping the color pair.
    pub fn reversed(self) -> Attr {
        Attr { reverse: true, ..self }
    }
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

/// The fixed capability surface the toolkit requires from a terminal.
///
/// Implementations own all terminal state; the core holds a backend by
/// value (or `&mut dyn Backend` in the render path) and is the single
/// writer. Surface coordinates passed to [`erase`](Backend::erase),
/// [`print`](Backend::print) and friends are relative to the surface's
/// own origin.
pub trait Backend {
    /// Register a foreground/background pair, returning its stable handle.
    ///
    /// Callers are expected to deduplicate: the pair cache in
    /// [`markup::pairs`](crate::markup::pairs) is the sole caller and
    /// guarantees each distinct combination is registered at most once.
    fn register_pair(&mut self, fg: PaletteColor, bg: PaletteColor) -> Result<PairId>;

    /// Create a sub-surface at (y, x) on the screen with the given size.
    fn create_surface(&mut self, y: i32, x: i32, height: i32, width: i32) -> Result<SurfaceId>;

    /// Destroy a sub-surface. Cells it covered are NOT restored; the
    /// parent redraws its own region afterwards. Dropping the root
    /// surface is a programming error and is ignored.
    fn drop_surface(&mut self, surface: SurfaceId) -> Result<()>;

    /// Blank every cell of a surface.
    fn erase(&mut self, surface: SurfaceId) -> Result<()>;

    /// Print `text` at (y, x) within the surface, with the attribute
    /// applied for the duration of this call only.
    fn print(&mut self, surface: SurfaceId, y: i32, x: i32, text: &str, attr: Attr) -> Result<()>;

    /// Make all queued drawing on a surface visible.
    fn present(&mut self, surface: SurfaceId) -> Result<()>;

    /// The size of a surface as (height, width).
    fn size(&self, surface: SurfaceId) -> (i32, i32);

    /// Block until the next key press or pointer click.
    fn next_event(&mut self) -> Result<InputEvent>;

    /// Sound the terminal bell.
    fn beep(&mut self);

    /// Flash the screen, where the terminal supports it.
    fn flash(&mut self);
}

// ===========================================================================
// Tests
// ===========================================================================
