//! Color-pair cache and resolution context.
//!
//! Pair handles are a non-reusable resource: the backend hands them out in
//! allocation order and never takes them back. [`PairCache`] guarantees
//! each distinct `fg-bg` combination is registered at most once for the
//! process lifetime. The cache is an explicit object owned by the window
//! (there is no global state), and the `&mut` discipline of [`Colors`]
//! makes it single-writer by construction.

use std::collections::HashMap;

use crate::backend::{Backend, PairId};
use crate::error::{Error, Result};
use crate::markup::color;
use crate::markup::message::CctMessage;

// ---------------------------------------------------------------------------
// PairCache
// ---------------------------------------------------------------------------

/// Maps normalized `fg-bg` keys to their allocated pair handles.
#[derive(Debug, Default)]
pub struct PairCache {
    pairs: HashMap<String, PairId>,
}

impl PairCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self { pairs: HashMap::new() }
    }

    /// Number of distinct pairs allocated so far.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair has been allocated yet.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Resolve a color pair spec (`fg` or `fg-bg`) to its handle.
    ///
    /// A bare `fg` is equivalent to `fg-normal`. On a cache miss the pair
    /// is registered with the backend and memoized; repeated calls with
    /// the same normalized spec always return the same handle. This is
    /// the sole allocation path for pair handles.
    pub fn resolve(&mut self, backend: &mut dyn Backend, spec: &str) -> Result<PairId> {
        if spec.is_empty() {
            return Err(Error::InvalidColorPairFormat(spec.to_owned()));
        }
        let key = if spec.contains('-') {
            spec.to_owned()
        } else {
            format!("{spec}-normal")
        };
        if let Some(&pair) = self.pairs.get(&key) {
            return Ok(pair);
        }

        let mut parts = key.splitn(3, '-');
        let (fg_name, bg_name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(fg), Some(bg), None) => (fg, bg),
            _ => return Err(Error::InvalidColorPairFormat(spec.to_owned())),
        };
        let fg = color::lookup(fg_name).ok_or_else(|| Error::UnknownColor {
            color: fg_name.to_owned(),
            pair: spec.to_owned(),
        })?;
        let bg = color::lookup(bg_name).ok_or_else(|| Error::UnknownColor {
            color: bg_name.to_owned(),
            pair: spec.to_owned(),
        })?;

        let pair = backend.register_pair(fg, bg)?;
        self.pairs.insert(key, pair);
        Ok(pair)
    }
}

/// Swap the sides of a color pair spec: `fg-bg` becomes `bg-fg`, a bare
/// `fg` becomes `normal-fg`. Used to paint the scrollbar thumb in the
/// inverse of the border colors.
pub fn reverse_spec(spec: &str) -> String {
    match spec.split_once('-') {
        Some((fg, bg)) => format!("{bg}-{fg}"),
        None => format!("normal-{spec}"),
    }
}

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

/// Borrowed resolution context: the pair cache plus the backend that
/// registers pairs. Handed out by the window for the duration of one
/// parse or resolve call.
pub struct Colors<'a> {
    cache: &'a mut PairCache,
    backend: &'a mut dyn Backend,
}

impl<'a> Colors<'a> {
    pub fn new(cache: &'a mut PairCache, backend: &'a mut dyn Backend) -> Self {
        Self { cache, backend }
    }

    /// Resolve a color pair spec to its handle. See [`PairCache::resolve`].
    pub fn resolve(&mut self, spec: &str) -> Result<PairId> {
        self.cache.resolve(self.backend, spec)
    }

    /// Parse one markup string into a [`CctMessage`].
    pub fn parse(&mut self, text: &str) -> Result<CctMessage> {
        CctMessage::parse(text, self)
    }

    /// Parse a batch of markup lines.
    pub fn parse_all(&mut self, lines: &[impl AsRef<str>]) -> Result<Vec<CctMessage>> {
        lines.iter().map(|line| self.parse(line.as_ref())).collect()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
