//! Value updates from background producers.
//!
//! A widget's state must never be mutated from another thread while the
//! window's loop is drawing. Background producers (a counter advancing a
//! progress bar, a job reporting status text) instead send a typed
//! [`ValueUpdate`] through an [`Updater`]; the window drains the channel at
//! the top of each render cycle and applies the updates itself. The latest
//! value wins: updates queued between two cycles are applied in order and
//! only the final state is drawn.

use std::sync::mpsc;

use crate::widget::WidgetId;

// ---------------------------------------------------------------------------
// ValueUpdate
// ---------------------------------------------------------------------------

/// A state change addressed to a widget by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueUpdate {
    /// Set a progress bar's current value.
    Progress(WidgetId, i32),
    /// Replace a label's or button's markup text.
    Text(WidgetId, String),
}

// ---------------------------------------------------------------------------
// Updater
// ---------------------------------------------------------------------------

/// Cloneable sending half of a window's update channel.
///
/// Obtained from [`Window::updater`](crate::window::Window::updater) and
/// safe to move to another thread. Sends are fire-and-forget: once the
/// window is gone, updates are silently discarded.
#[derive(Debug, Clone)]
pub struct Updater {
    tx: mpsc::Sender<ValueUpdate>,
}

impl Updater {
    pub(crate) fn new(tx: mpsc::Sender<ValueUpdate>) -> Self {
        Self { tx }
    }

    /// Queue a progress-bar value for the widget with the given id.
    pub fn set_progress(&self, id: WidgetId, value: i32) {
        let _ = self.tx.send(ValueUpdate::Progress(id, value));
    }

    /// Queue replacement markup text for the widget with the given id.
    pub fn set_text(&self, id: WidgetId, text: impl Into<String>) {
        let _ = self.tx.send(ValueUpdate::Text(id, text.into()));
    }
}

// ===========================================================================
// Tests
// ===========================================================================
