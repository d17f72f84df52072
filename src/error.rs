//! Crate-wide error taxonomy.
//!
//! Every fallible operation in cellui returns [`Result`]. All errors are
//! local and synchronous: they are handed back to the immediate caller and
//! never retried internally. The one deliberate exception is line-edit
//! input filtering, where disallowed keystrokes are silently dropped as a
//! UX decision, not reported as errors.

use std::io;

/// Errors produced by the toolkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A markup directive named a color that is not in the palette.
    #[error("unknown color `{color}` in color pair `{pair}`")]
    UnknownColor { color: String, pair: String },

    /// A color pair spec was not of the form `fg` or `fg-bg`.
    #[error("`{0}` is not a valid color pair")]
    InvalidColorPairFormat(String),

    /// Text exceeds a widget's declared capacity.
    #[error("text `{text}` exceeds the maximum length {max}")]
    TooLong { text: String, max: usize },

    /// A message box was given more choices than it can lay out.
    #[error("{0:?} can't be the choices of a message box (limit is 3)")]
    TooManyChoices(Vec<String>),

    /// A list or word-choice widget was constructed with zero options.
    #[error("can't create a {0} with no options")]
    EmptyOptions(&'static str),

    /// A focus operation targeted a widget that is not part of the window.
    #[error("widget is not a member of this window")]
    NotAMember,

    /// A pie chart was given an explicit color list of the wrong length.
    #[error("a pie chart needs one color per value ({values} values, {colors} colors)")]
    ColorCountMismatch { values: usize, colors: usize },

    /// A terminal backend operation failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
