//! Tab strips: header geometry, selection and window resizing.
//!
//! A strip container (window, settings list, item list) owns only tab nodes.
//! Header rectangles are derived from the strip's rect and the tab's index,
//! so they are recomputed (`reload_tabs`) whenever a tab is added or the
//! strip is resized. Selecting a tab enables every child except its title;
//! selecting a primary `Tab` also resizes its window to the tab's target
//! size around the window's current center.

use tracing::{debug, info};

use crate::UiError;
use crate::align::{Anchor, Placement, TextAlign};
use crate::geom::{Point, Rect, Size};
use crate::node::{NodeId, NodeKind, Selectable, TabState, TabStrip};
use crate::text::TextPolicy;
use crate::tree::{NewNode, Position, Ui, validate_size};
use crate::widgets::FRAME_MIN;

/// Where a tab's title sits inside its header.
fn title_placement(kind: &NodeKind) -> Placement {
    match kind {
        NodeKind::ItemTab { .. } => Placement::new(Anchor::CenterLeft, 2, 0),
        _ => Placement::at(Anchor::Center),
    }
}

fn title_align(kind: &NodeKind) -> TextAlign {
    match kind {
        NodeKind::ItemTab { .. } => TextAlign::Left,
        _ => TextAlign::Center,
    }
}

impl Ui {
    /// Primary tab on a window. The window takes `target` as its size while
    /// the tab is selected; children of the tab are laid out against the
    /// window at that size.
    pub fn add_tab(&mut self, window: NodeId, title: &str, target: Size) -> Result<NodeId, UiError> {
        let node = self.get(window)?;
        if !matches!(node.kind, NodeKind::Window(_)) {
            return Err(UiError::WrongChildKind {
                owner: node.kind.name(),
                child: "tab",
            });
        }
        let lp = node
            .layout_parent
            .ok_or(UiError::MissingParent(node.kind.name()))?;
        validate_size(&node.kind, target, FRAME_MIN, self.get(lp)?.rect.size())?;
        let kind = NodeKind::Tab {
            tab: TabState::default(),
            target,
        };
        self.add_strip_tab(window, title, kind, Some(target))
    }

    /// Side tab on a settings list.
    pub fn add_settings_tab(&mut self, list: NodeId, title: &str) -> Result<NodeId, UiError> {
        let kind = NodeKind::SettingsTab {
            tab: TabState::default(),
        };
        self.add_strip_tab(list, title, kind, None)
    }

    /// Category tab on an item list; selected when its index matches the
    /// list's current category.
    pub fn add_item_tab(&mut self, list: NodeId, title: &str) -> Result<NodeId, UiError> {
        let node = self.get(list)?;
        let selected = match &node.kind {
            NodeKind::ItemList(l) => l.category == node.children.len(),
            _ => false,
        };
        let kind = NodeKind::ItemTab {
            tab: TabState {
                selected,
                title: None,
            },
        };
        self.add_strip_tab(list, title, kind, None)
    }

    fn add_strip_tab(
        &mut self,
        strip: NodeId,
        title: &str,
        kind: NodeKind,
        target: Option<Size>,
    ) -> Result<NodeId, UiError> {
        let owner = self.get(strip)?;
        let tab_size = owner.kind.strip_tab_size().ok_or(UiError::WrongChildKind {
            owner: owner.kind.name(),
            child: kind.name(),
        })?;
        let before = owner.rect;
        let id = self.insert(NewNode {
            owner: strip,
            size: tab_size,
            min: FRAME_MIN,
            z: 0,
            position: Position::Fixed(Point::default()),
            kind,
        })?;
        if let Err(e) = self.finish_tab(strip, id, title, target) {
            self.destroy(id)?;
            self.get_mut(strip)?.rect = before;
            self.reload_tabs(strip)?;
            return Err(e);
        }
        debug!(target: "ui.tabs", title, index = self.children(strip).len() - 1, "tab_added");
        Ok(id)
    }

    fn finish_tab(
        &mut self,
        strip: NodeId,
        tab: NodeId,
        title: &str,
        target: Option<Size>,
    ) -> Result<(), UiError> {
        match target {
            Some(size) => self.resize_window(strip, size)?,
            None => self.reload_tabs(strip)?,
        }
        let node = self.get(tab)?;
        let width = node.rect.width - 2;
        let placement = title_placement(&node.kind);
        let align = title_align(&node.kind);
        let label = self.add_label(tab, title, width, align, TextPolicy::Truncate, placement)?;
        if let Some(state) = self.get_mut(tab)?.kind.tab_state_mut() {
            state.title = Some(label);
        }
        Ok(())
    }

    /// Recompute every header rectangle of a strip and re-anchor titles.
    pub(crate) fn reload_tabs(&mut self, strip: NodeId) -> Result<(), UiError> {
        let node = self.get(strip)?;
        let r = node.rect;
        let tab_size = node.kind.strip_tab_size().ok_or(UiError::WrongNodeKind {
            expected: "tab strip",
            found: node.kind.name(),
        })?;
        let horizontal = matches!(node.kind, NodeKind::Window(_));
        let tabs = node.children.clone();
        let count = tabs.len() as i32;
        for (i, tab) in tabs.iter().enumerate() {
            let i = i as i32;
            let pos = if horizontal {
                Point::new(
                    r.x + (r.width / 2 - count * tab_size.width / 2) + i * tab_size.width,
                    r.y - 2,
                )
            } else {
                Point::new(
                    r.x - (tab_size.width - 1),
                    r.y + i * tab_size.height - i,
                )
            };
            let node = self.get_mut(*tab)?;
            node.rect = Rect::from_parts(pos, tab_size);
            let placement = title_placement(&node.kind);
            if let Some(title) = node.kind.tab_state().and_then(|t| t.title) {
                self.move_node(title, placement.anchor, placement.padding)?;
            }
        }
        Ok(())
    }

    /// Resize a window or settings list to `size`, keeping its center
    /// (integer halves of the growth move the origin), then reload headers.
    pub fn resize_window(&mut self, strip: NodeId, size: Size) -> Result<(), UiError> {
        let node = self.get(strip)?;
        if !matches!(node.kind, NodeKind::Window(_) | NodeKind::SettingsList(_)) {
            return Err(UiError::WrongNodeKind {
                expected: "window",
                found: node.kind.name(),
            });
        }
        if let Some(lp) = node.layout_parent {
            validate_size(&node.kind, size, node.min, self.get(lp)?.rect.size())?;
        }
        let old = node.rect;
        let node = self.get_mut(strip)?;
        node.rect = Rect::new(
            old.x - (size.width - old.width) / 2,
            old.y - (size.height - old.height) / 2,
            size.width,
            size.height,
        );
        let new = node.rect;
        if old != new {
            info!(
                target: "ui.tabs",
                from_width = old.width,
                from_height = old.height,
                width = new.width,
                height = new.height,
                x = new.x,
                y = new.y,
                "window_resized"
            );
        }
        self.reload_tabs(strip)
    }

    /// Set a tab's selection flag and toggle every non-title child with it.
    /// Selecting a primary tab resizes its window.
    pub fn select_tab(&mut self, tab: NodeId, on: bool) -> Result<(), UiError> {
        let node = self.get_mut(tab)?;
        let found = node.kind.name();
        let state = node.kind.tab_state_mut().ok_or(UiError::WrongNodeKind {
            expected: "tab",
            found,
        })?;
        state.set_selected(on);
        let title = state.title;
        let target = match node.kind {
            NodeKind::Tab { target, .. } => Some(target),
            _ => None,
        };
        let owner = node.parent;
        let children = node.children.clone();
        for child in children.into_iter().filter(|c| Some(*c) != title) {
            self.get_mut(child)?.enabled = on;
        }
        if on {
            if let (Some(size), Some(window)) = (target, owner) {
                self.resize_window(window, size)?;
            }
        }
        Ok(())
    }

    pub fn is_tab_selected(&self, tab: NodeId) -> bool {
        self.nodes
            .get(tab)
            .and_then(|n| n.kind.tab_state())
            .is_some_and(|t| t.is_selected())
    }

    fn strip_mut(&mut self, id: NodeId) -> Result<&mut TabStrip, UiError> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::Window(s) | NodeKind::SettingsList(s) => Ok(s),
            other => Err(UiError::WrongNodeKind {
                expected: "window",
                found: other.name(),
            }),
        }
    }

    /// Currently selected tab of a window or settings list.
    pub fn selected_tab(&self, strip: NodeId) -> Option<NodeId> {
        let node = self.nodes.get(strip)?;
        match &node.kind {
            NodeKind::Window(s) | NodeKind::SettingsList(s) => node.children.get(s.selected).copied(),
            _ => None,
        }
    }

    /// Select the strip's current tab and deselect every other one.
    pub fn init_tabs(&mut self, strip: NodeId) -> Result<(), UiError> {
        let current = self.strip_mut(strip)?.selected;
        let tabs = self.children(strip).to_vec();
        for (i, tab) in tabs.into_iter().enumerate() {
            self.select_tab(tab, i == current)?;
        }
        Ok(())
    }

    pub fn next_tab(&mut self, strip: NodeId) -> Result<(), UiError> {
        self.step_tab(strip, true)
    }

    pub fn prev_tab(&mut self, strip: NodeId) -> Result<(), UiError> {
        self.step_tab(strip, false)
    }

    /// Move the selection one tab along the strip, clamping at both ends.
    fn step_tab(&mut self, strip: NodeId, forward: bool) -> Result<(), UiError> {
        let current = self.strip_mut(strip)?.selected;
        let tabs = self.children(strip).to_vec();
        if tabs.is_empty() {
            return Ok(());
        }
        let next = if forward {
            (current + 1).min(tabs.len() - 1)
        } else {
            current.saturating_sub(1)
        };
        if let Some(tab) = tabs.get(current) {
            self.select_tab(*tab, false)?;
        }
        self.strip_mut(strip)?.selected = next;
        self.select_tab(tabs[next], true)?;
        debug!(target: "ui.tabs", from = current, to = next, "tab_selected");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grid::BorderStyle;
    use pretty_assertions::assert_eq;

    fn window(ui: &mut Ui) -> NodeId {
        let root = ui.root();
        ui.add_window(
            root,
            BorderStyle::SingleSharp,
            Size::new(40, 10),
            10,
            Placement::new(Anchor::TopCenter, 0, 5),
        )
        .unwrap()
    }

    #[test]
    fn headers_center_above_window() {
        let mut ui = Ui::new(100, 30);
        let w = window(&mut ui);
        let a = ui.add_tab(w, "A", Size::new(40, 10)).unwrap();
        let b = ui.add_tab(w, "B", Size::new(40, 10)).unwrap();
        let win = ui.rect(w).unwrap();
        assert_eq!(win, Rect::new(30, 5, 40, 10));
        assert_eq!(ui.rect(a), Some(Rect::new(40, 3, 10, 3)));
        assert_eq!(ui.rect(b), Some(Rect::new(50, 3, 10, 3)));
        // Title centered inside the header.
        let title = ui.children(a)[0];
        assert_eq!(ui.rect(title), Some(Rect::new(41, 4, 8, 1)));
    }

    #[test]
    fn selection_toggles_children_but_not_title() {
        let mut ui = Ui::new(100, 30);
        let w = window(&mut ui);
        let a = ui.add_tab(w, "A", Size::new(40, 10)).unwrap();
        let b = ui.add_tab(w, "B", Size::new(40, 10)).unwrap();
        let body = ui
            .add_label(b, "body", 6, TextAlign::Left, TextPolicy::Truncate, Placement::at(Anchor::Center))
            .unwrap();
        assert!(!ui.is_enabled(body), "children of an unselected tab start disabled");
        ui.init_tabs(w).unwrap();
        assert!(ui.is_tab_selected(a));
        assert!(!ui.is_tab_selected(b));
        ui.next_tab(w).unwrap();
        assert!(ui.is_enabled(body));
        assert!(ui.is_enabled(ui.children(a)[0]), "titles stay enabled");
        assert_eq!(ui.selected_tab(w), Some(b));
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let mut ui = Ui::new(100, 30);
        let w = window(&mut ui);
        let a = ui.add_tab(w, "A", Size::new(40, 10)).unwrap();
        let b = ui.add_tab(w, "B", Size::new(40, 10)).unwrap();
        ui.init_tabs(w).unwrap();
        ui.prev_tab(w).unwrap();
        assert_eq!(ui.selected_tab(w), Some(a));
        ui.next_tab(w).unwrap();
        ui.next_tab(w).unwrap();
        ui.next_tab(w).unwrap();
        assert_eq!(ui.selected_tab(w), Some(b));
        assert!(ui.is_tab_selected(b));
        assert!(!ui.is_tab_selected(a));
    }

    #[test]
    fn side_tabs_stack_with_shared_borders() {
        let mut ui = Ui::new(100, 30);
        let root = ui.root();
        let list = ui
            .add_settings_list(root, BorderStyle::SingleSharp, Size::new(30, 15), Size::new(12, 5), Placement::new(Anchor::TopLeft, 20, 2))
            .unwrap();
        let g = ui.add_settings_tab(list, "General").unwrap();
        let v = ui.add_settings_tab(list, "Video").unwrap();
        assert_eq!(ui.rect(g), Some(Rect::new(9, 2, 12, 5)));
        assert_eq!(ui.rect(v), Some(Rect::new(9, 6, 12, 5)));
    }

    #[test]
    fn oversized_target_is_rejected_without_a_new_tab() {
        let mut ui = Ui::new(100, 30);
        let w = window(&mut ui);
        let err = ui.add_tab(w, "Huge", Size::new(120, 10)).unwrap_err();
        assert!(matches!(err, UiError::Oversized { .. }));
        assert!(ui.children(w).is_empty());
        assert_eq!(ui.rect(w), Some(Rect::new(30, 5, 40, 10)));
    }

    #[test]
    fn only_tabs_join_a_window() {
        let mut ui = Ui::new(100, 30);
        let w = window(&mut ui);
        let err = ui
            .add_box(w, BorderStyle::SingleSharp, Size::new(5, 5), Placement::at(Anchor::Center))
            .unwrap_err();
        assert!(matches!(err, UiError::WrongChildKind { .. }));
        let root = ui.root();
        assert!(ui.add_settings_tab(root, "x").is_err());
    }
}
