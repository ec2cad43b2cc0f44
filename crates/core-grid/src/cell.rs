//! Display cells: glyph plus foreground/background color.

/// Sixteen console colors plus the terminal's own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Reset,
    Black,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    Grey,
    DarkGrey,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayCell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
}

impl DisplayCell {
    pub const BLANK: DisplayCell = DisplayCell {
        glyph: ' ',
        fg: Color::Reset,
        bg: Color::Reset,
    };

    pub fn new(glyph: char) -> Self {
        Self {
            glyph,
            ..Self::BLANK
        }
    }

    /// True when both colors are the terminal defaults; such cells are never
    /// re-colored by a flush.
    #[inline]
    pub fn has_default_colors(&self) -> bool {
        self.fg == Color::Reset && self.bg == Color::Reset
    }
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self::BLANK
    }
}
