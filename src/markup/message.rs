//! Color-coded text messages.
//!
//! A [`CctMessage`] is one logical line of text parsed from the `${fg-bg}`
//! markup grammar into colored runs. Stripped of directives, the runs
//! always concatenate back to the visible text; a message with no leading
//! directive is implicitly prefixed with `${normal}`.

use crate::backend::{Attr, PairId};
use crate::draw::Frame;
use crate::error::Result;
use crate::markup::pairs::Colors;
use crate::markup::tokenizer::{self, Token};

// ---------------------------------------------------------------------------
// CctMessage
// ---------------------------------------------------------------------------

/// An ordered sequence of (text segment, pair handle) runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CctMessage {
    runs: Vec<(String, PairId)>,
}

impl CctMessage {
    /// Parse a markup string, resolving every directive through `colors`.
    ///
    /// Each `${spec}` directive opens a run extending to the next
    /// directive or the end of the string. Unresolvable directives fail
    /// the whole parse with `UnknownColor` or `InvalidColorPairFormat`;
    /// there is no graceful degradation.
    pub fn parse(text: &str, colors: &mut Colors<'_>) -> Result<CctMessage> {
        let tokens = tokenizer::tokenize(text);
        let mut runs: Vec<(String, PairId)> = Vec::new();

        // A message that does not open with a directive starts in the
        // default colors.
        if !matches!(tokens.first(), Some((Token::Directive, _))) {
            runs.push((String::new(), colors.resolve("normal")?));
        }

        for (token, slice) in tokens {
            match token {
                Token::Directive => {
                    let pair = colors.resolve(tokenizer::directive_spec(slice))?;
                    runs.push((String::new(), pair));
                }
                Token::Text | Token::Dollar => {
                    // There is always a current run: either the implicit
                    // normal prefix or a preceding directive.
                    runs.last_mut().expect("run open").0.push_str(slice);
                }
            }
        }

        Ok(CctMessage { runs })
    }

    /// Visible length: the sum of segment lengths, markup stripped.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.runs.iter().map(|(text, _)| text.len()).sum()
    }

    /// The visible text with all directives stripped.
    pub fn plain(&self) -> String {
        self.runs.iter().map(|(text, _)| text.as_str()).collect()
    }

    /// Iterate the (segment, pair) runs in order.
    pub fn segments(&self) -> impl Iterator<Item = (&str, PairId)> {
        self.runs.iter().map(|(text, pair)| (text.as_str(), *pair))
    }

    /// Draw the runs left-to-right starting at (y, x).
    ///
    /// Each segment is printed at a column offset equal to the lengths of
    /// the segments before it, with its own pair plus whatever extra
    /// attribute the caller supplies (focus highlight, typically). The
    /// combination applies only for that segment's print call.
    pub fn draw(&self, frame: &mut Frame<'_>, y: i32, x: i32, attr: Attr) -> Result<()> {
        let mut x = x;
        for (text, pair) in self.segments() {
            frame.print(y, x, text, attr.with_pair(pair))?;
            x += text.len() as i32;
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
