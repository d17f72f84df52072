//! Input events and the background update channel.

pub mod input;
pub mod update;

pub use input::{InputEvent, Key};
pub use update::{Updater, ValueUpdate};
