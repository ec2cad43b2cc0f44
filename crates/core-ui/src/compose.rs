//! Compositing pass.

use core_grid::{BorderStyle, CellGrid, Color};
use tracing::trace;

use crate::UiError;
use crate::geom::Rect;
use crate::node::{ItemListState, LabelState, NodeId, NodeKind, Scrollable};
use crate::text::{TextPolicy, char_len, truncate, wrap};
use crate::tiles;
use crate::tree::Ui;

const ARROW_UP: char = '▲';
const ARROW_DOWN: char = '▼';
const EQUIPPED: char = '*';

impl Ui {
    /// Draw the whole enabled tree into `grid`. The caller clears the grid
    /// beforehand.
    pub fn compose(&self, grid: &mut CellGrid) -> Result<(), UiError> {
        self.fill(self.root(), grid)
    }

    /// Draw one node and its subtree: negative-z children, own tiles,
    /// non-negative-z children, then own text. Disabled nodes draw nothing.
    pub fn fill(&self, id: NodeId, grid: &mut CellGrid) -> Result<(), UiError> {
        let node = self.get(id)?;
        if !node.enabled {
            return Ok(());
        }
        if node.kind.is_container() {
            let mut order: Vec<(i32, NodeId)> = node
                .children
                .iter()
                .filter_map(|c| self.nodes.get(*c).map(|n| (n.z, *c)))
                .collect();
            order.sort_by_key(|(z, _)| *z);
            for (_, child) in order.iter().filter(|(z, _)| *z < 0) {
                self.fill(*child, grid)?;
            }
            self.draw_tiles(id, grid)?;
            for (_, child) in order.iter().filter(|(z, _)| *z >= 0) {
                self.fill(*child, grid)?;
            }
        }
        self.draw_text(id, grid)
    }

    /// Border style a tab header borrows from its strip container.
    fn owner_style(&self, id: NodeId) -> Result<BorderStyle, UiError> {
        let node = self.get(id)?;
        let owner = node.parent.ok_or(UiError::MissingParent(node.kind.name()))?;
        let owner = self.get(owner)?;
        owner.kind.border_style().ok_or(UiError::WrongNodeKind {
            expected: "tab strip",
            found: owner.kind.name(),
        })
    }

    /// (is first, is last) among the owner's children.
    fn strip_ends(&self, id: NodeId) -> (bool, bool) {
        let siblings = self
            .get(id)
            .ok()
            .and_then(|n| n.parent)
            .map(|p| self.children(p))
            .unwrap_or(&[]);
        (
            siblings.first() == Some(&id),
            siblings.last() == Some(&id),
        )
    }

    fn draw_tiles(&self, id: NodeId, grid: &mut CellGrid) -> Result<(), UiError> {
        let node = self.get(id)?;
        let r = node.rect;
        let (w, h) = (r.width.max(0) as usize, r.height.max(0) as usize);
        let (raw, style) = match &node.kind {
            NodeKind::Root | NodeKind::Label(_) | NodeKind::Image(_) => return Ok(()),
            NodeKind::Box(f) | NodeKind::Button(f) | NodeKind::SelectionBox(f) => {
                (tiles::frame(w, h), f.style)
            }
            NodeKind::Window(s) | NodeKind::SettingsList(s) => (tiles::frame(w, h), s.style),
            NodeKind::ItemList(l) => (tiles::item_list_frame(w, h), l.style),
            NodeKind::Tab { tab, .. } => (tiles::window_tab(w, tab.selected), self.owner_style(id)?),
            NodeKind::SettingsTab { tab } | NodeKind::ItemTab { tab } => {
                let (first, last) = self.strip_ends(id);
                (
                    tiles::side_tab(w, h, tab.selected, first, last),
                    self.owner_style(id)?,
                )
            }
        };
        grid.draw_region(&raw, style, r.x, r.y, r.width, r.height)?;
        Ok(())
    }

    fn draw_text(&self, id: NodeId, grid: &mut CellGrid) -> Result<(), UiError> {
        let node = self.get(id)?;
        match &node.kind {
            NodeKind::Label(label) => {
                let frame = match node.layout_parent {
                    Some(lp) => self.get(lp)?.rect,
                    None => node.rect,
                };
                draw_label(grid, node.rect, frame, label);
            }
            NodeKind::Image(image) => {
                for (dy, row) in image.rows().iter().enumerate() {
                    for (dx, ch) in row.iter().enumerate() {
                        grid.set_glyph(node.rect.x + dx as i32, node.rect.y + dy as i32, *ch);
                    }
                }
            }
            NodeKind::ItemList(list) => draw_item_rows(grid, node.rect, list),
            _ => {}
        }
        Ok(())
    }
}

fn put(grid: &mut CellGrid, x: i32, y: i32, ch: char, inverted: bool) {
    grid.set_glyph(x, y, ch);
    if inverted {
        grid.set_foreground(x, y, Color::Black);
        grid.set_background(x, y, Color::White);
    }
}

/// Single-line labels write only columns strictly inside `frame`'s side
/// borders; wrapped labels continue downward one row per line.
fn draw_label(grid: &mut CellGrid, rect: Rect, frame: Rect, label: &LabelState) {
    let width = rect.width.max(0) as usize;
    if label.policy == TextPolicy::Wrap {
        for (i, line) in wrap(&label.text, width).iter().enumerate() {
            let x = rect.x + label.align.offset(char_len(line) as i32, rect.width);
            for (j, ch) in line.chars().enumerate() {
                put(grid, x + j as i32, rect.y + i as i32, ch, label.selected);
            }
        }
        return;
    }
    let text = if label.policy == TextPolicy::Truncate {
        truncate(&label.text, width)
    } else {
        label.text.clone()
    };
    let x = rect.x + label.align.offset(char_len(&text) as i32, rect.width);
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as i32;
        if cx > frame.x && cx < frame.x + frame.width - 1 {
            put(grid, cx, rect.y, ch, label.selected);
        }
    }
}

/// One row per visible item: ` sprite name`, then for marked rows padding
/// and a marker in the last content column. The cursor row is inverted.
fn draw_item_rows(grid: &mut CellGrid, rect: Rect, list: &ItemListState) {
    let visible = (rect.height - 2).max(0) as usize;
    let name_width = (rect.width - 8).max(0) as usize;
    let marker_col = (rect.width - 4).max(0) as usize;
    let start = list.offset();
    for (i, row) in list.rows.iter().enumerate().skip(start).take(visible) {
        let mut text = format!(" {} {}", row.item.sprite, truncate(&row.item.name, name_width));
        let marker = if i == start && list.hidden_above() {
            Some(ARROW_UP)
        } else if i + 1 == start + visible && list.hidden_below(visible) {
            Some(ARROW_DOWN)
        } else if row.equipped {
            Some(EQUIPPED)
        } else {
            None
        };
        if let Some(m) = marker {
            let len = char_len(&text);
            text.extend(std::iter::repeat_n(' ', marker_col.saturating_sub(len)));
            text.push(m);
        }
        let y = rect.y + 1 + (i - start) as i32;
        let inverted = i == list.cursor();
        for (j, ch) in text.chars().enumerate() {
            put(grid, rect.x + 1 + j as i32, y, ch, inverted);
        }
    }
    trace!(target: "ui.items", rows = list.rows.len(), offset = start, cursor = list.cursor(), "rows_drawn");
}
