//! Property tests for region drawing.

use core_grid::{BorderStyle, CellGrid, Dir};
use proptest::prelude::*;

fn masks(max: usize) -> impl Strategy<Value = Vec<Dir>> {
    prop::collection::vec((0u8..16).prop_map(Dir::mask), 0..=max)
}

proptest! {
    // Same raw flags drawn twice leave the same glyphs and tiles.
    #[test]
    fn draw_region_is_idempotent(
        x in -3i32..10, y in -3i32..8,
        w in 1i32..8, h in 1i32..6,
        style in 0u8..4,
        raw in masks(48),
    ) {
        let style = BorderStyle::from_selector(style).unwrap();
        let raw: Vec<Dir> = raw.into_iter().take((w * h) as usize).collect();
        let mut g = CellGrid::new(12, 9);
        g.draw_region(&raw, style, x, y, w, h).unwrap();
        let first: Vec<String> = (0..9).map(|r| g.row_text(r)).collect();
        g.draw_region(&raw, style, x, y, w, h).unwrap();
        let second: Vec<String> = (0..9).map(|r| g.row_text(r)).collect();
        prop_assert_eq!(first, second);
    }

    // Drawing never touches cells outside the region.
    #[test]
    fn draw_region_stays_inside(
        x in 0i32..6, y in 0i32..4, w in 1i32..6, h in 1i32..5, raw in masks(30),
    ) {
        let raw: Vec<Dir> = raw.into_iter().take((w * h) as usize).collect();
        let mut g = CellGrid::new(12, 9);
        for gy in 0..9 {
            for gx in 0..12 {
                g.set_glyph(gx, gy, '.');
            }
        }
        g.draw_region(&raw, BorderStyle::SingleSharp, x, y, w, h).unwrap();
        for gy in 0..9i32 {
            for gx in 0..12i32 {
                let inside = gx >= x && gx < x + w && gy >= y && gy < y + h;
                if !inside {
                    prop_assert_eq!(g.cell(gx, gy).map(|c| c.glyph), Some('.'));
                }
            }
        }
    }
}
