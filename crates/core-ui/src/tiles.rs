//! Procedural border layouts, emitted row-major as raw direction flags for
//! `CellGrid::draw_region`. Layouts may be shorter than their region (a
//! closed window tab header covers two of its three rows).

use core_grid::Dir;

const RD: Dir = Dir::mask(0b1010);
const LD: Dir = Dir::mask(0b1001);
const RU: Dir = Dir::mask(0b0110);
const LU: Dir = Dir::mask(0b0101);
const H: Dir = Dir::HORIZONTAL;
const V: Dir = Dir::VERTICAL;
const NONE: Dir = Dir::empty();

/// `first`, `fill` repeated, `last`, totalling `width` (at least 2).
fn row(out: &mut Vec<Dir>, width: usize, first: Dir, fill: Dir, last: Dir) {
    out.push(first);
    out.extend(std::iter::repeat_n(fill, width.saturating_sub(2)));
    out.push(last);
}

/// Closed rectangle: corners, horizontal top and bottom edges, vertical
/// sides, empty interior.
pub fn frame(width: usize, height: usize) -> Vec<Dir> {
    let mut out = Vec::with_capacity(width * height);
    for r in 0..height {
        if r == 0 {
            row(&mut out, width, RD, H, LD);
        } else if r + 1 == height {
            row(&mut out, width, RU, H, LU);
        } else {
            row(&mut out, width, V, NONE, V);
        }
    }
    out
}

/// Item list frame: like [`frame`], with the top edge opened between the
/// columns `width - 21` and `width - 8`, each end turning upward.
pub fn item_list_frame(width: usize, height: usize) -> Vec<Dir> {
    let mut out = frame(width, height);
    for col in 1..width.saturating_sub(1) {
        let from_right = width - col;
        out[col] = match from_right {
            8 => RU,
            9..=20 => NONE,
            21 => LU,
            _ => H,
        };
    }
    out
}

/// Header of a window tab. Closed: top edge and sides (two rows). Selected:
/// a third row on the window's top edge opens the header into the window.
pub fn window_tab(width: usize, selected: bool) -> Vec<Dir> {
    let mut out = Vec::with_capacity(width * 3);
    row(&mut out, width, RD, H, LD);
    row(&mut out, width, V, NONE, V);
    if selected {
        row(&mut out, width, LU, NONE, RU);
    }
    out
}

/// Header of a side tab (settings or item list), `height` rows. The last
/// column sits on the list's left edge: open toward the list when
/// `selected`, closed otherwise. The first tab drops its upward junction,
/// the last tab its downward one.
pub fn side_tab(width: usize, height: usize, selected: bool, at_top: bool, at_bottom: bool) -> Vec<Dir> {
    let (mut top_end, mid_end, mut bottom_end) = if selected {
        (LU, NONE, LD)
    } else {
        (LD, V, LU)
    };
    if at_top {
        top_end &= Dir::mask(0b1011);
    }
    if at_bottom {
        bottom_end &= Dir::mask(0b0111);
    }
    let mut out = Vec::with_capacity(width * height);
    for r in 0..height {
        if r == 0 {
            row(&mut out, width, RD, H, top_end);
        } else if r + 1 == height {
            row(&mut out, width, RU, H, bottom_end);
        } else {
            row(&mut out, width, V, NONE, mid_end);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_corners() {
        let f = frame(4, 3);
        assert_eq!(f.len(), 12);
        assert_eq!((f[0], f[3], f[8], f[11]), (RD, LD, RU, LU));
        assert_eq!((f[4], f[5], f[7]), (V, NONE, V));
    }

    #[test]
    fn item_list_gap() {
        let w = 26;
        let f = item_list_frame(w, 3);
        assert_eq!(f[w - 21], LU);
        assert!(f[w - 20..=w - 9].iter().all(|d| d.is_empty()));
        assert_eq!(f[w - 8], RU);
        assert_eq!(f[w - 7], H);
        assert_eq!(f[w - 22], H);
        assert_eq!(f[0], RD);
        assert_eq!(f[w - 1], LD);
    }

    #[test]
    fn window_tab_rows() {
        assert_eq!(window_tab(5, false).len(), 10);
        let open = window_tab(5, true);
        assert_eq!(open.len(), 15);
        assert_eq!((open[10], open[11], open[14]), (LU, NONE, RU));
    }

    #[test]
    fn side_tab_end_column() {
        let w = 4;
        let sel = side_tab(w, 5, true, false, false);
        assert_eq!(sel[w - 1], LU);
        assert_eq!(sel[2 * w - 1], NONE);
        assert_eq!(sel[5 * w - 1], LD);
        let top = side_tab(w, 3, false, true, false);
        assert_eq!(top[w - 1], Dir::LEFT | Dir::DOWN);
        let sel_top = side_tab(w, 3, true, true, true);
        assert_eq!(sel_top[w - 1], Dir::LEFT);
        assert_eq!(sel_top[3 * w - 1], Dir::LEFT);
    }
}
