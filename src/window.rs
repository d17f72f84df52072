//! Window controller: widget collection, render loop, event dispatch.
//!
//! A [`Window`] owns the backend, the pair cache, the widget arena, and
//! the focus ring. Its lifecycle is Stopped → Running → Stopped:
//! [`run`](Window::run) enters the blocking loop (drain updates → draw →
//! block for input → dispatch) until [`exit`](Window::exit) is called,
//! explicitly from a callback or implicitly by the reserved Escape key.
//!
//! The loop is strictly synchronous: drawing never overlaps a handler,
//! and blocking for input is the only suspension point. Background
//! producers talk to the window exclusively through the update channel
//! (see [`Updater`]); their updates become visible at the top of the
//! next cycle.

use std::sync::mpsc;

use slotmap::SlotMap;

use crate::backend::{Attr, Backend, PairId, SurfaceId};
use crate::draw::{self, Frame};
use crate::error::Result;
use crate::event::{InputEvent, Key, Updater, ValueUpdate};
use crate::markup::{CctMessage, Colors, PairCache};
use crate::widget::{Dispatch, FocusLink, FocusRing, Widget, WidgetId};
use crate::widgets::{Button, Label, ProgressBar};

/// Widgets are positioned inside the window border.
const Y_OFFSET: i32 = 1;
const X_OFFSET: i32 = 1;

// ---------------------------------------------------------------------------
// Window
// ---------------------------------------------------------------------------

/// A bordered, titled top-level window full of widgets.
pub struct Window<B: Backend> {
    pub(crate) backend: B,
    pub(crate) pairs: PairCache,
    widgets: SlotMap<WidgetId, Box<dyn Widget>>,
    focus: FocusRing,
    title: CctMessage,
    border: PairId,
    running: bool,
    updates: mpsc::Receiver<ValueUpdate>,
    update_tx: mpsc::Sender<ValueUpdate>,
}

impl<B: Backend> Window<B> {
    /// Create a window with a markup title and a default border.
    pub fn new(mut backend: B, title: &str) -> Result<Self> {
        let mut pairs = PairCache::new();
        let (title, border) = {
            let mut colors = Colors::new(&mut pairs, &mut backend);
            (colors.parse(title)?, colors.resolve("normal")?)
        };
        let (update_tx, updates) = mpsc::channel();
        Ok(Self {
            backend,
            pairs,
            widgets: SlotMap::with_key(),
            focus: FocusRing::new(),
            title,
            border,
            running: false,
            updates,
            update_tx,
        })
    }

    // ── Configuration ────────────────────────────────────────────────

    /// A markup resolution context over this window's cache and backend.
    pub fn colors(&mut self) -> Colors<'_> {
        Colors::new(&mut self.pairs, &mut self.backend)
    }

    /// Replace the window title.
    pub fn set_title(&mut self, title: &str) -> Result<()> {
        self.title = self.colors().parse(title)?;
        Ok(())
    }

    /// Change the border color pair.
    pub fn set_border_color(&mut self, spec: &str) -> Result<()> {
        self.border = self.colors().resolve(spec)?;
        Ok(())
    }

    // ── Widgets ──────────────────────────────────────────────────────

    /// Add a widget at (y, x), offset inside the border. Returns the id
    /// used for focus, updates, and downcast access.
    pub fn add(&mut self, widget: impl Widget + 'static, y: i32, x: i32) -> WidgetId {
        let id = self.widgets.insert(Box::new(widget));
        self.focus.insert(id, y + Y_OFFSET, x + X_OFFSET);
        id
    }

    /// Link widgets into a focus ring in call order. Last call wins.
    pub fn link(&mut self, ids: &[WidgetId]) {
        self.focus.link(ids);
    }

    /// Focus a widget; fails with `NotAMember` for a foreign id.
    pub fn focus(&mut self, id: WidgetId) -> Result<()> {
        self.focus.focus(id)
    }

    /// The focused widget, if any.
    pub fn focused(&self) -> Option<WidgetId> {
        self.focus.focused()
    }

    /// A widget's focus link (position, visibility, traversal keys).
    pub fn link_of(&self, id: WidgetId) -> Option<&FocusLink> {
        self.focus.get(id)
    }

    /// Mutable access to a widget's focus link.
    pub fn link_mut(&mut self, id: WidgetId) -> Option<&mut FocusLink> {
        self.focus.get_mut(id)
    }

    /// Downcast a widget by id.
    pub fn widget<W: Widget + 'static>(&self, id: WidgetId) -> Option<&W> {
        self.widgets.get(id)?.as_any().downcast_ref::<W>()
    }

    /// Mutably downcast a widget by id.
    pub fn widget_mut<W: Widget + 'static>(&mut self, id: WidgetId) -> Option<&mut W> {
        self.widgets.get_mut(id)?.as_any_mut().downcast_mut::<W>()
    }

    // ── Lifecycle ────────────────────────────────────────────────────

    /// A sender half for background producers.
    pub fn updater(&self) -> Updater {
        Updater::new(self.update_tx.clone())
    }

    /// Whether the loop is running.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the loop after the current dispatch returns.
    pub fn exit(&mut self) {
        self.running = false;
    }

    /// The window size as (height, width).
    pub fn size(&self) -> (i32, i32) {
        self.backend.size(SurfaceId::ROOT)
    }

    /// The backend, for inspection (snapshots in tests, mostly).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable backend access (scripting events in tests, mostly).
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Sound the terminal bell.
    pub fn beep(&mut self) {
        self.backend.beep();
    }

    /// Flash the screen.
    pub fn flash(&mut self) {
        self.backend.flash();
    }

    /// Run the blocking event loop until [`exit`](Window::exit).
    pub fn run(&mut self) -> Result<()> {
        self.running = true;
        while self.running {
            self.apply_updates()?;
            self.draw()?;
            let event = self.backend.next_event()?;
            self.handle_event(event)?;
        }
        Ok(())
    }

    // ── One cycle ────────────────────────────────────────────────────

    /// Drain the producer channel and apply each update by widget id.
    fn apply_updates(&mut self) -> Result<()> {
        while let Ok(update) = self.updates.try_recv() {
            match update {
                ValueUpdate::Progress(id, value) => {
                    if let Some(bar) = self.widget_mut::<ProgressBar>(id) {
                        bar.set(value);
                    }
                }
                ValueUpdate::Text(id, text) => {
                    let message =
                        Colors::new(&mut self.pairs, &mut self.backend).parse(&text)?;
                    if let Some(widget) = self.widgets.get_mut(id) {
                        if let Some(label) = widget.as_any_mut().downcast_mut::<Label>() {
                            label.set_message(message);
                        } else if let Some(button) = widget.as_any_mut().downcast_mut::<Button>() {
                            button.set_message(message);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Erase and redraw the whole widget set, then present.
    pub fn draw(&mut self) -> Result<()> {
        self.backend.erase(SurfaceId::ROOT)?;
        {
            let mut frame = Frame::new(&mut self.backend, SurfaceId::ROOT);
            draw::draw_borders(&mut frame, Attr::pair(self.border))?;
            self.title.draw(&mut frame, 0, 1, Attr::NORMAL)?;
            for &id in self.focus.order() {
                let Some(link) = self.focus.get(id) else { continue };
                if !link.visible {
                    continue;
                }
                self.widgets[id].draw(&mut frame, link.y, link.x, link.focused)?;
            }
        }
        self.backend.present(SurfaceId::ROOT)
    }

    /// Dispatch one input event.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        match event {
            InputEvent::Key(Key::Escape) => self.exit(),
            InputEvent::Key(key) => {
                if let Dispatch::Forward(id) = self.focus.dispatch(key) {
                    if let Some(widget) = self.widgets.get_mut(id) {
                        widget.handle_key(key)?;
                    }
                }
            }
            InputEvent::Click { y, x } => {
                let target = self.focus.hit_test(y, x, |id| {
                    let widget = &self.widgets[id];
                    (widget.height(), widget.width())
                });
                if let Some(id) = target {
                    if self.focus.get(id).is_some_and(|link| link.focused) {
                        // Clicking the focused widget activates it.
                        if let Some(widget) = self.widgets.get_mut(id) {
                            widget.handle_key(Key::Click)?;
                        }
                    } else {
                        self.focus.focus(id)?;
                    }
                }
            }
            // The next cycle redraws at the new size.
            InputEvent::Resize { .. } => {}
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
