//! Border style tables: one 16-entry glyph table per style, indexed by the
//! 4-bit connection mask (`LEFT=1, RIGHT=2, UP=4, DOWN=8`).

use crate::tile::Dir;
use crate::GridError;

/// Visual border styles. The selector encoding is `bit0 = rounded corners`,
/// `bit1 = double edges`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    SingleSharp,
    SingleRound,
    DoubleSharp,
    DoubleRound,
}

#[rustfmt::skip]
const SINGLE_SHARP: [char; 16] = [
    ' ', '╴', '╶', '─',
    '╵', '┘', '└', '┴',
    '╷', '┐', '┌', '┬',
    '│', '┤', '├', '┼',
];

#[rustfmt::skip]
const SINGLE_ROUND: [char; 16] = [
    ' ', '╴', '╶', '─',
    '╵', '╯', '╰', '┴',
    '╷', '╮', '╭', '┬',
    '│', '┤', '├', '┼',
];

#[rustfmt::skip]
const DOUBLE_SHARP: [char; 16] = [
    ' ', '╴', '╶', '═',
    '╵', '╝', '╚', '╩',
    '╷', '╗', '╔', '╦',
    '║', '╣', '╠', '╬',
];

#[rustfmt::skip]
const DOUBLE_ROUND: [char; 16] = [
    ' ', '╴', '╶', '═',
    '╵', '╯', '╰', '╩',
    '╷', '╮', '╭', '╦',
    '║', '╣', '╠', '╬',
];

impl BorderStyle {
    pub const ALL: [BorderStyle; 4] = [
        BorderStyle::SingleSharp,
        BorderStyle::SingleRound,
        BorderStyle::DoubleSharp,
        BorderStyle::DoubleRound,
    ];

    /// Decode a two-bit style selector.
    pub fn from_selector(selector: u8) -> Result<Self, GridError> {
        match selector {
            0b00 => Ok(Self::SingleSharp),
            0b01 => Ok(Self::SingleRound),
            0b10 => Ok(Self::DoubleSharp),
            0b11 => Ok(Self::DoubleRound),
            other => Err(GridError::UnsupportedStyle(other)),
        }
    }

    pub fn selector(self) -> u8 {
        match self {
            Self::SingleSharp => 0b00,
            Self::SingleRound => 0b01,
            Self::DoubleSharp => 0b10,
            Self::DoubleRound => 0b11,
        }
    }

    pub fn table(self) -> &'static [char; 16] {
        match self {
            Self::SingleSharp => &SINGLE_SHARP,
            Self::SingleRound => &SINGLE_ROUND,
            Self::DoubleSharp => &DOUBLE_SHARP,
            Self::DoubleRound => &DOUBLE_ROUND,
        }
    }

    /// Glyph for a connection mask. `Dir` never carries bits above the low
    /// nibble, so every mask has an entry.
    #[inline]
    pub fn glyph(self, mask: Dir) -> char {
        self.table()[usize::from(mask.bits())]
    }
}
