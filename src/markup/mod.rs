//! Color-markup text engine.
//!
//! Parses `${fg-bg}` inline color directives into colored runs
//! ([`CctMessage`]), resolving each directive to a terminal color-pair
//! handle through the explicit [`PairCache`] context. The grammar is the
//! one stable textual format the toolkit defines:
//!
//! - an unprefixed string defaults to `${normal}`;
//! - a directive applies until the next directive or end of string;
//! - color names are case-sensitive tokens from a closed palette, plus
//!   any integer `0`–`255`, plus `normal` for the terminal default;
//! - `${fg}` with no background is equivalent to `${fg-normal}`.

pub mod color;
pub mod message;
pub mod pairs;
pub mod tokenizer;

pub use color::PaletteColor;
pub use message::CctMessage;
pub use pairs::{reverse_spec, Colors, PairCache};
