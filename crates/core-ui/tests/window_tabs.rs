//! Window tab switching: resizing around the center and header layout.

use core_grid::{BorderStyle, CellGrid};
use core_ui::{Anchor, NodeId, Placement, Rect, Size, TextAlign, TextPolicy, Ui};
use pretty_assertions::assert_eq;

struct Fixture {
    ui: Ui,
    window: NodeId,
    main: NodeId,
    backpack: NodeId,
    main_body: NodeId,
    backpack_body: NodeId,
}

fn fixture() -> Fixture {
    let mut ui = Ui::new(120, 40);
    let root = ui.root();
    let window = ui
        .add_window(root, BorderStyle::SingleSharp, Size::new(58, 11), 14, Placement::new(Anchor::TopCenter, 0, 10))
        .unwrap();
    let main = ui.add_tab(window, "Main", Size::new(58, 11)).unwrap();
    let main_body = ui
        .add_label(main, "main body", 10, TextAlign::Left, TextPolicy::Fixed, Placement::at(Anchor::Center))
        .unwrap();
    let backpack = ui.add_tab(window, "Backpack", Size::new(70, 17)).unwrap();
    let backpack_body = ui
        .add_label(backpack, "pack body", 10, TextAlign::Left, TextPolicy::Fixed, Placement::at(Anchor::Center))
        .unwrap();
    ui.init_tabs(window).unwrap();
    Fixture {
        ui,
        window,
        main,
        backpack,
        main_body,
        backpack_body,
    }
}

#[test]
fn initial_selection_restores_first_tab_size() {
    let f = fixture();
    assert_eq!(f.ui.rect(f.window), Some(Rect::new(31, 10, 58, 11)));
    assert_eq!(f.ui.rect(f.main), Some(Rect::new(46, 8, 14, 3)));
    assert_eq!(f.ui.rect(f.backpack), Some(Rect::new(60, 8, 14, 3)));
    assert!(f.ui.is_enabled(f.main_body));
    assert!(!f.ui.is_enabled(f.backpack_body));
}

#[test]
fn switching_tabs_resizes_around_the_same_center() {
    let mut f = fixture();
    let before = f.ui.rect(f.window).unwrap();
    f.ui.next_tab(f.window).unwrap();
    let after = f.ui.rect(f.window).unwrap();

    assert_eq!(after, Rect::new(25, 7, 70, 17));
    assert_eq!(before.x + before.width / 2, after.x + after.width / 2);
    assert_eq!(before.y + before.height / 2, after.y + after.height / 2);

    // Headers stay centered over the new width and move up with the top edge.
    assert_eq!(f.ui.rect(f.main), Some(Rect::new(46, 5, 14, 3)));
    assert_eq!(f.ui.rect(f.backpack), Some(Rect::new(60, 5, 14, 3)));
    let title = f.ui.children(f.backpack)[0];
    assert_eq!(f.ui.rect(title), Some(Rect::new(61, 6, 12, 1)));

    assert!(!f.ui.is_enabled(f.main_body));
    assert!(f.ui.is_enabled(f.backpack_body));

    f.ui.prev_tab(f.window).unwrap();
    assert_eq!(f.ui.rect(f.window), Some(before));
}

#[test]
fn selected_header_opens_into_the_window() {
    let mut f = fixture();
    f.ui.next_tab(f.window).unwrap();
    let mut grid = CellGrid::new(120, 40);
    f.ui.compose(&mut grid).unwrap();
    let span = |y: u16, from: usize, to: usize| -> String {
        grid.row_text(y).chars().skip(from).take(to - from + 1).collect()
    };
    assert_eq!(span(5, 46, 73), "┌────────────┐┌────────────┐");
    assert_eq!(span(6, 46, 73), "│    Main    ││  Backpack  │");
    assert_eq!(span(7, 45, 74), "─┴────────────┴┘            └─");
    assert_eq!(span(15, 55, 63), "pack body");
}
