//! logos-based lexer for the `${fg-bg}` markup mini-language.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (a full `${red-black}` beats a bare `$`)
//! 2. For equal length matches, earlier-defined variants win
//!
//! A `$` that does not open a well-formed `${...}` directive lexes as
//! [`Token::Dollar`] and is treated as literal text by the parser, so the
//! stripped segments always concatenate back to the visible input.

use logos::Logos;

/// Markup token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A color directive: `${red}`, `${red-black}`, `${245-normal}`.
    ///
    /// The spec between the braces is validated later, during pair
    /// resolution; the lexer only recognizes the delimiters.
    #[regex(r"\$\{[^}]*\}")]
    Directive,

    /// A run of literal text (anything up to the next `$`).
    #[regex(r"[^$]+")]
    Text,

    /// A stray `$` that does not open a directive.
    #[token("$")]
    Dollar,
}

/// Tokenize a markup string into `(Token, &str)` slices over the input.
pub fn tokenize(input: &str) -> Vec<(Token, &str)> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, &input[span])))
        .collect()
}

/// Strip the `${` and `}` delimiters from a directive slice.
pub fn directive_spec(slice: &str) -> &str {
    &slice[2..slice.len() - 1]
}

// ===========================================================================
// Tests
// ===========================================================================
