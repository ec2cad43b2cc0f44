//! Direction-flag tiles.
//!
//! A `Tile` is one byte: the low nibble holds the four connection flags, the
//! high nibble is reserved and survives every direction edit untouched.

use bitflags::bitflags;

bitflags! {
    /// Border connection flags. A set bit means the line in this cell extends
    /// toward that neighbor.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Dir: u8 {
        const LEFT  = 0b0001;
        const RIGHT = 0b0010;
        const UP    = 0b0100;
        const DOWN  = 0b1000;
    }
}

impl Dir {
    /// Shorthand for masks written as literals in tile layouts.
    #[inline]
    pub const fn mask(bits: u8) -> Self {
        Self::from_bits_truncate(bits)
    }

    pub const HORIZONTAL: Self = Self::LEFT.union(Self::RIGHT);
    pub const VERTICAL: Self = Self::UP.union(Self::DOWN);
}

const DIR_BITS: u8 = 0b0000_1111;
const RESERVED_BITS: u8 = 0b1111_0000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    bits: u8,
}

impl Tile {
    pub const EMPTY: Tile = Tile { bits: 0 };

    pub const fn new(dirs: Dir) -> Self {
        Self { bits: dirs.bits() }
    }

    #[inline]
    pub fn directions(&self) -> Dir {
        Dir::from_bits_truncate(self.bits & DIR_BITS)
    }

    /// Replace the direction nibble, keeping reserved bits.
    #[inline]
    pub fn set_directions(&mut self, dirs: Dir) {
        self.bits = (self.bits & RESERVED_BITS) | dirs.bits();
    }

    #[inline]
    pub fn add(&mut self, dirs: Dir) {
        self.bits |= dirs.bits();
    }

    #[inline]
    pub fn has(&self, dirs: Dir) -> bool {
        self.directions().contains(dirs)
    }

    #[inline]
    pub fn reserved(&self) -> u8 {
        (self.bits & RESERVED_BITS) >> 4
    }

    #[inline]
    pub fn set_reserved(&mut self, nibble: u8) {
        self.bits = (self.bits & DIR_BITS) | ((nibble & 0x0F) << 4);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_directions_preserves_reserved_nibble() {
        let mut t = Tile::new(Dir::LEFT);
        t.set_reserved(0b1010);
        t.set_directions(Dir::UP | Dir::DOWN);
        assert_eq!(t.directions(), Dir::VERTICAL);
        assert_eq!(t.reserved(), 0b1010);
    }

    #[test]
    fn add_ors_flags() {
        let mut t = Tile::new(Dir::RIGHT);
        t.add(Dir::DOWN);
        assert!(t.has(Dir::RIGHT | Dir::DOWN));
        assert!(!t.has(Dir::LEFT));
    }
}
