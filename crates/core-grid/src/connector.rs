//! Tile Connector: propagate adjacency bits from already-drawn neighbors.
//!
//! Invariants:
//! * One forward sweep, row-major over the target region. A tile visited
//!   before its neighbor changes never sees that later change; border
//!   junction output depends on this order.
//! * Neighbor lookups are bounded by the enclosing surface, not the region,
//!   so tiles just outside a region still contribute connecting bits.
//! * Only tiles inside the region are modified.

use crate::tile::{Dir, Tile};

/// Region in surface coordinates. Callers clip it to the surface first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

pub fn connect(tiles: &mut [Tile], surface_width: usize, surface_height: usize, region: Region) {
    debug_assert_eq!(tiles.len(), surface_width * surface_height);
    for row in region.y..region.y + region.height {
        for col in region.x..region.x + region.width {
            let pos = col + row * surface_width;
            let mut add = Dir::empty();
            if col > 0 && tiles[pos - 1].has(Dir::RIGHT) {
                add |= Dir::LEFT;
            }
            if col + 1 < surface_width && tiles[pos + 1].has(Dir::LEFT) {
                add |= Dir::RIGHT;
            }
            if row > 0 && tiles[pos - surface_width].has(Dir::DOWN) {
                add |= Dir::UP;
            }
            if row + 1 < surface_height && tiles[pos + surface_width].has(Dir::UP) {
                add |= Dir::DOWN;
            }
            tiles[pos].add(add);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(w: usize, h: usize) -> Vec<Tile> {
        vec![Tile::EMPTY; w * h]
    }

    #[test]
    fn neighbor_outside_region_contributes() {
        let mut tiles = surface(3, 1);
        tiles[0] = Tile::new(Dir::RIGHT);
        connect(&mut tiles, 3, 1, Region { x: 1, y: 0, width: 1, height: 1 });
        assert_eq!(tiles[1].directions(), Dir::LEFT);
        assert_eq!(tiles[0].directions(), Dir::RIGHT, "outside tiles stay untouched");
        assert_eq!(tiles[2].directions(), Dir::empty());
    }

    #[test]
    fn second_sweep_changes_nothing() {
        let mut tiles = surface(4, 3);
        tiles[1] = Tile::new(Dir::RIGHT | Dir::DOWN);
        tiles[2] = Tile::new(Dir::HORIZONTAL);
        tiles[5] = Tile::new(Dir::VERTICAL);
        tiles[10] = Tile::new(Dir::UP | Dir::LEFT);
        let region = Region { x: 0, y: 0, width: 4, height: 3 };
        connect(&mut tiles, 4, 3, region);
        let once = tiles.clone();
        connect(&mut tiles, 4, 3, region);
        assert_eq!(tiles, once);
        assert_eq!(tiles[0].directions(), Dir::empty(), "(1,0) never points left");
        assert_eq!(tiles[3].directions(), Dir::LEFT);
        assert_eq!(tiles[6].directions(), Dir::DOWN);
        assert_eq!(tiles[9].directions(), Dir::UP | Dir::RIGHT);
    }

    #[test]
    fn surface_edges_are_not_wrapped() {
        let mut tiles = surface(2, 2);
        // (1,0) points right off the surface; (0,1) must not see it as its left neighbor.
        tiles[1] = Tile::new(Dir::RIGHT);
        connect(&mut tiles, 2, 2, Region { x: 0, y: 1, width: 1, height: 1 });
        assert_eq!(tiles[2].directions(), Dir::empty());
    }

    #[test]
    fn vertical_bits_propagate_both_ways() {
        let mut tiles = surface(1, 3);
        tiles[0] = Tile::new(Dir::DOWN);
        tiles[2] = Tile::new(Dir::UP);
        connect(&mut tiles, 1, 3, Region { x: 0, y: 1, width: 1, height: 1 });
        assert_eq!(tiles[1].directions(), Dir::VERTICAL);
    }
}
