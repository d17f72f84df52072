//! Wrapping index over a fixed set of options.
//!
//! [`CycleState`] backs the word-choice widget: a non-empty option list
//! and an index that cycles modulo the option count in both directions.
//! It wraps, never clamps.

use crate::error::{Error, Result};
use crate::markup::CctMessage;

// ---------------------------------------------------------------------------
// CycleState
// ---------------------------------------------------------------------------

/// Non-empty options plus the selected index.
#[derive(Debug, Clone)]
pub struct CycleState {
    options: Vec<CctMessage>,
    index: usize,
    max_len: usize,
}

impl CycleState {
    /// Create a state over the given options.
    ///
    /// Fails with [`Error::EmptyOptions`] when there is nothing to cycle
    /// through.
    pub fn new(options: Vec<CctMessage>) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::EmptyOptions("word choice"));
        }
        let max_len = options.iter().map(CctMessage::len).max().unwrap_or(0);
        Ok(Self { options, index: 0, max_len })
    }

    pub fn options(&self) -> &[CctMessage] {
        &self.options
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// The currently selected option.
    pub fn selected(&self) -> &CctMessage {
        &self.options[self.index]
    }

    /// Visible length of the widest option.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Advance the index, wrapping past the last option.
    pub fn focus_next(&mut self) {
        self.index = (self.index + 1) % self.options.len();
    }

    /// Retreat the index, wrapping past the first option.
    pub fn focus_prev(&mut self) {
        self.index = match self.index {
            0 => self.options.len() - 1,
            i => i - 1,
        };
    }

    /// Jump back to the first option.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::TestBackend;
    use crate::markup::{Colors, PairCache};

    fn state(names: &[&str]) -> Result<CycleState> {
        let mut cache = PairCache::new();
        let mut backend = TestBackend::new(4, 40);
        let mut colors = Colors::new(&mut cache, &mut backend);
        CycleState::new(colors.parse_all(names)?)
    }

    #[test]
    fn empty_options_fail() {
        let err = state(&[]).unwrap_err();
        assert!(matches!(err, Error::EmptyOptions(_)));
    }

    #[test]
    fn starts_at_the_first_option() {
        let s = state(&["yes", "no"]).unwrap();
        assert_eq!(s.index(), 0);
        assert_eq!(s.selected().plain(), "yes");
    }

    #[test]
    fn next_wraps_forward() {
        let mut s = state(&["a", "b", "c"]).unwrap();
        s.focus_next();
        s.focus_next();
        assert_eq!(s.index(), 2);
        s.focus_next();
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn prev_wraps_backward() {
        let mut s = state(&["a", "b", "c"]).unwrap();
        s.focus_prev();
        assert_eq!(s.index(), 2);
        s.focus_prev();
        assert_eq!(s.index(), 1);
    }

    #[test]
    fn full_cycle_in_either_direction_returns_home() {
        let mut s = state(&["a", "b", "c", "d"]).unwrap();
        for _ in 0..4 {
            s.focus_next();
        }
        assert_eq!(s.index(), 0);
        for _ in 0..4 {
            s.focus_prev();
        }
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn single_option_cycles_onto_itself() {
        let mut s = state(&["only"]).unwrap();
        s.focus_next();
        assert_eq!(s.index(), 0);
        s.focus_prev();
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut s = state(&["a", "b", "c"]).unwrap();
        s.focus_next();
        s.reset();
        assert_eq!(s.index(), 0);
    }

    #[test]
    fn max_len_tracks_the_widest_option() {
        let s = state(&["no", "maybe", "yes"]).unwrap();
        assert_eq!(s.max_len(), 5);
    }

    #[test]
    fn max_len_ignores_markup() {
        let s = state(&["${red}ab", "x"]).unwrap();
        assert_eq!(s.max_len(), 2);
    }
}
