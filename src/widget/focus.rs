//! Focus ring: traversal order, focus state, hit-testing.
//!
//! Widgets are linked into a circular next/prev relation that is
//! independent of their visual layout. The ring is stored as an
//! index-based adjacency table keyed by [`WidgetId`] inside the owning
//! window: plain identifiers, not references, so there are no cyclic
//! ownership pointers between siblings.

use slotmap::SecondaryMap;

use super::WidgetId;
use crate::error::{Error, Result};
use crate::event::Key;

// ---------------------------------------------------------------------------
// FocusLink
// ---------------------------------------------------------------------------

/// Per-widget focus record: position, visibility, focus flag, and the
/// ring adjacency with the keys that traverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusLink {
    /// Screen row of the widget's top-left cell.
    pub y: i32,
    /// Screen column of the widget's top-left cell.
    pub x: i32,
    /// Hidden widgets are skipped when drawing (not when hit-testing).
    pub visible: bool,
    /// At most one link in a ring has this set.
    pub focused: bool,
    /// Ring successor, if the widget has been linked.
    pub next: Option<WidgetId>,
    /// Ring predecessor, if the widget has been linked.
    pub prev: Option<WidgetId>,
    /// Key that moves focus to `next`.
    pub next_key: Key,
    /// Key that moves focus to `prev`.
    pub prev_key: Key,
}

impl FocusLink {
    /// A fresh link at (y, x) with the default Down/Up traversal keys.
    pub fn new(y: i32, x: i32) -> Self {
        Self {
            y,
            x,
            visible: true,
            focused: false,
            next: None,
            prev: None,
            next_key: Key::Down,
            prev_key: Key::Up,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Outcome of routing one key through the ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Focus hopped to this widget; the key is consumed.
    Moved(WidgetId),
    /// The key should be forwarded to this (focused) widget's handler.
    Forward(WidgetId),
    /// Nothing focused, or a traversal key with nowhere to go.
    Idle,
}

// ---------------------------------------------------------------------------
// FocusRing
// ---------------------------------------------------------------------------

/// The focus table for one window: links in registration order.
#[derive(Debug, Default)]
pub struct FocusRing {
    links: SecondaryMap<WidgetId, FocusLink>,
    order: Vec<WidgetId>,
}

impl FocusRing {
    /// Create an empty ring.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a widget at (y, x). Registration order is also the
    /// hit-test order.
    pub fn insert(&mut self, id: WidgetId, y: i32, x: i32) {
        self.links.insert(id, FocusLink::new(y, x));
        self.order.push(id);
    }

    /// Whether the widget is part of this ring's window.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.links.contains_key(id)
    }

    /// The registered widgets in registration order.
    pub fn order(&self) -> &[WidgetId] {
        &self.order
    }

    /// This widget's link record.
    pub fn get(&self, id: WidgetId) -> Option<&FocusLink> {
        self.links.get(id)
    }

    /// Mutable access to a link record (to override traversal keys,
    /// visibility, or position).
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut FocusLink> {
        self.links.get_mut(id)
    }

    /// Establish a circular next/prev relation over `ids` in call order.
    ///
    /// Calling with zero ids is a no-op; a single id forms a ring of one.
    /// Calling again with overlapping ids overwrites the prior links:
    /// last call wins, there is no merging.
    pub fn link(&mut self, ids: &[WidgetId]) {
        let Some((&first, rest)) = ids.split_first() else { return };
        let last = *rest.last().unwrap_or(&first);

        for (i, &id) in ids.iter().enumerate() {
            let next = ids.get(i + 1).copied().unwrap_or(first);
            let prev = if i == 0 { last } else { ids[i - 1] };
            if let Some(link) = self.links.get_mut(id) {
                link.next = Some(next);
                link.prev = Some(prev);
            }
        }
    }

    /// Unfocus every widget, then focus `target`.
    ///
    /// Fails with [`Error::NotAMember`] when `target` was never
    /// registered, leaving the previous focus intact.
    pub fn focus(&mut self, target: WidgetId) -> Result<()> {
        if !self.links.contains_key(target) {
            return Err(Error::NotAMember);
        }
        for (_, link) in self.links.iter_mut() {
            link.focused = false;
        }
        self.links[target].focused = true;
        Ok(())
    }

    /// The currently focused widget, if any.
    pub fn focused(&self) -> Option<WidgetId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.links.get(id).is_some_and(|link| link.focused))
    }

    /// Route one key press: traversal keys hop the ring by exactly one
    /// link, everything else is forwarded to the focused widget.
    pub fn dispatch(&mut self, key: Key) -> Dispatch {
        let Some(id) = self.focused() else { return Dispatch::Idle };
        let link = &self.links[id];

        let hop = if key == link.next_key {
            Some(link.next)
        } else if key == link.prev_key {
            Some(link.prev)
        } else {
            None
        };

        match hop {
            Some(Some(target)) => {
                self.links[id].focused = false;
                if let Some(link) = self.links.get_mut(target) {
                    link.focused = true;
                }
                Dispatch::Moved(target)
            }
            // Traversal key but the widget was never linked.
            Some(None) => Dispatch::Idle,
            None => Dispatch::Forward(id),
        }
    }

    /// The first widget (in registration order) whose bounding box
    /// contains (y, x). `size_of` supplies each widget's (height, width).
    ///
    /// Both far edges are inclusive, so the hit regions of adjacent
    /// widgets may overlap by one cell; the first match wins.
    pub fn hit_test<F>(&self, y: i32, x: i32, size_of: F) -> Option<WidgetId>
    where
        F: Fn(WidgetId) -> (i32, i32),
    {
        self.order.iter().copied().find(|&id| {
            let link = &self.links[id];
            let (height, width) = size_of(id);
            y >= link.y && y <= link.y + height && x >= link.x && x <= link.x + width
        })
    }
}

// ===========================================================================
// Tests
// ===========================================================================
