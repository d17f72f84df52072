//! The fixed color palette behind markup directives.
//!
//! Color names are case-sensitive tokens from a closed set: the basic
//! eight terminal colors, a few extended-palette aliases, any integer
//! `0`–`255`, and `normal` for the terminal default.

// ---------------------------------------------------------------------------
// PaletteColor
// ---------------------------------------------------------------------------

/// A resolved palette index, as handed to the backend's pair registration.
///
/// Values `0..=255` address the terminal palette; [`PaletteColor::NORMAL`]
/// (encoded as `-1`) means "the terminal's default color".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaletteColor(pub i16);

impl PaletteColor {
    /// The terminal default, written `normal` in markup.
    pub const NORMAL: PaletteColor = PaletteColor(-1);

    pub const BLACK: PaletteColor = PaletteColor(0);
    pub const RED: PaletteColor = PaletteColor(1);
    pub const GREEN: PaletteColor = PaletteColor(2);
    pub const YELLOW: PaletteColor = PaletteColor(3);
    pub const BLUE: PaletteColor = PaletteColor(4);
    pub const MAGENTA: PaletteColor = PaletteColor(5);
    pub const CYAN: PaletteColor = PaletteColor(6);
    pub const WHITE: PaletteColor = PaletteColor(7);
}

/// Resolve a color name to a palette index.
///
/// Names are case-sensitive. Numeric names cover the extended palette
/// (`0`–`255`). Returns `None` for anything outside the closed set;
/// callers turn that into an `UnknownColor` error with directive context.
pub fn lookup(name: &str) -> Option<PaletteColor> {
    let color = match name {
        "normal" => PaletteColor::NORMAL,
        "black" => PaletteColor::BLACK,
        "red" => PaletteColor::RED,
        "green" => PaletteColor::GREEN,
        "yellow" => PaletteColor::YELLOW,
        "blue" => PaletteColor::BLUE,
        "magenta" => PaletteColor::MAGENTA,
        "cyan" => PaletteColor::CYAN,
        "white" => PaletteColor::WHITE,
        // extended-palette aliases
        "gray" => PaletteColor(245),
        "pink" => PaletteColor(219),
        "orange" => PaletteColor(202),
        _ => return name.parse::<u8>().ok().map(|n| PaletteColor(i16::from(n))),
    };
    Some(color)
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_names_resolve() {
        assert_eq!(lookup("black"), Some(PaletteColor::BLACK));
        assert_eq!(lookup("red"), Some(PaletteColor::RED));
        assert_eq!(lookup("green"), Some(PaletteColor::GREEN));
        assert_eq!(lookup("yellow"), Some(PaletteColor::YELLOW));
        assert_eq!(lookup("blue"), Some(PaletteColor::BLUE));
        assert_eq!(lookup("magenta"), Some(PaletteColor::MAGENTA));
        assert_eq!(lookup("cyan"), Some(PaletteColor::CYAN));
        assert_eq!(lookup("white"), Some(PaletteColor::WHITE));
    }

    #[test]
    fn normal_is_terminal_default() {
        assert_eq!(lookup("normal"), Some(PaletteColor(-1)));
    }

    #[test]
    fn extended_aliases_resolve() {
        assert_eq!(lookup("gray"), Some(PaletteColor(245)));
        assert_eq!(lookup("pink"), Some(PaletteColor(219)));
        assert_eq!(lookup("orange"), Some(PaletteColor(202)));
    }

    #[test]
    fn numeric_names_cover_the_extended_range() {
        assert_eq!(lookup("0"), Some(PaletteColor(0)));
        assert_eq!(lookup("137"), Some(PaletteColor(137)));
        assert_eq!(lookup("255"), Some(PaletteColor(255)));
    }

    #[test]
    fn out_of_range_numbers_fail() {
        assert_eq!(lookup("256"), None);
        assert_eq!(lookup("-1"), None);
        assert_eq!(lookup("9999"), None);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(lookup("Red"), None);
        assert_eq!(lookup("RED"), None);
        assert_eq!(lookup("Normal"), None);
    }

    #[test]
    fn unknown_names_fail() {
        assert_eq!(lookup("vermilion"), None);
        assert_eq!(lookup(""), None);
    }
}
