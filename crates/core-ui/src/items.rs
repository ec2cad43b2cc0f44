//! Item list: an inventory projection with category tabs, a scrolled
//! cursor and a detail panel beside the list.
//!
//! The projection (`rows`) is rebuilt from the inventory collaborator on
//! every category change and after every equip toggle. The detail panel is
//! a box owned by the list's owner and replaced wholesale whenever the
//! selection moves.

use core_grid::BorderStyle;
use core_inventory::{Inventory, Item, ItemCategory};
use tracing::{debug, info, warn};

use crate::UiError;
use crate::align::{Anchor, Placement, TextAlign};
use crate::assets::AssetStore;
use crate::format::format_value;
use crate::geom::Size;
use crate::node::{ItemListState, ItemRow, NodeId, NodeKind, Scrollable};
use crate::text::{TextPolicy, wrap};
use crate::tree::{NewNode, Position, Ui};
use crate::widgets::FRAME_MIN;

const NAME_WIDTH: i32 = 17;
const VALUE_WIDTH: i32 = 5;
const DESCRIPTION_WIDTH: i32 = 23;
const STAT_WIDTH: i32 = 25;
const DESCRIPTION_TOP: i32 = 7;
const STATS_TOP: i32 = 9;

/// Category, cursor and scroll offset of an item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListPosition {
    pub category: usize,
    pub item: usize,
    pub scroll: usize,
}

fn stat_lines(item: &Item) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(v) = item.damage {
        lines.push(format!("- Damage: {v}"));
    }
    if let Some(v) = item.attack {
        lines.push(format!("- Attack + {v}"));
    }
    if let Some(v) = item.defence {
        lines.push(format!("- Defence + {v}"));
    }
    if let Some(v) = item.speed {
        lines.push(format!("- Speed + {v}"));
    }
    if let Some(v) = item.sustenance {
        lines.push(format!("- Sustenance + {v}"));
    }
    lines
}

fn project(inv: &dyn Inventory, category: usize) -> Vec<ItemRow> {
    let Some(category) = ItemCategory::ALL.get(category) else {
        return Vec::new();
    };
    inv.items_in(*category)
        .into_iter()
        .map(|item| ItemRow {
            item: item.clone(),
            equipped: inv.is_equipped(item.id),
        })
        .collect()
}

impl Ui {
    /// Scrollable item list. Category tabs are added afterwards with
    /// `add_item_tab`, one per `ItemCategory` in order.
    #[allow(clippy::too_many_arguments)]
    pub fn add_item_list(
        &mut self,
        owner: NodeId,
        style: BorderStyle,
        size: Size,
        tab_size: Size,
        placement: Placement,
        inv: &dyn Inventory,
        assets: &AssetStore,
    ) -> Result<NodeId, UiError> {
        let state = ItemListState {
            style,
            tab_size,
            category: 0,
            item: 0,
            scroll: 0,
            rows: project(inv, 0),
            panel: None,
        };
        let id = self.insert(NewNode {
            owner,
            size,
            min: FRAME_MIN,
            z: placement.z,
            position: Position::Anchored {
                anchor: placement.anchor,
                padding: placement.padding,
            },
            kind: NodeKind::ItemList(state),
        })?;
        if let Err(e) = self.rebuild_panel(id, assets) {
            self.destroy(id)?;
            return Err(e);
        }
        Ok(id)
    }

    fn item_list(&self, id: NodeId) -> Result<&ItemListState, UiError> {
        match &self.get(id)?.kind {
            NodeKind::ItemList(l) => Ok(l),
            other => Err(UiError::WrongNodeKind {
                expected: "item list",
                found: other.name(),
            }),
        }
    }

    fn item_list_mut(&mut self, id: NodeId) -> Result<&mut ItemListState, UiError> {
        match &mut self.get_mut(id)?.kind {
            NodeKind::ItemList(l) => Ok(l),
            other => Err(UiError::WrongNodeKind {
                expected: "item list",
                found: other.name(),
            }),
        }
    }

    /// Rows inside the frame.
    fn visible_rows(&self, list: NodeId) -> Result<usize, UiError> {
        Ok((self.get(list)?.rect.height - 2).max(0) as usize)
    }

    pub fn list_position(&self, list: NodeId) -> Option<ListPosition> {
        self.item_list(list).ok().map(|l| ListPosition {
            category: l.category,
            item: l.item,
            scroll: l.scroll,
        })
    }

    pub fn selected_item(&self, list: NodeId) -> Option<&Item> {
        let l = self.item_list(list).ok()?;
        l.rows.get(l.item).map(|r| &r.item)
    }

    /// Current detail panel box.
    pub fn item_panel(&self, list: NodeId) -> Option<NodeId> {
        self.item_list(list).ok().and_then(|l| l.panel)
    }

    pub fn next_item(&mut self, list: NodeId, assets: &AssetStore) -> Result<(), UiError> {
        self.navigate(list, assets, |ui| {
            let visible = ui.visible_rows(list)?;
            ui.item_list_mut(list)?.step_down(visible);
            Ok(())
        })
    }

    pub fn prev_item(&mut self, list: NodeId, assets: &AssetStore) -> Result<(), UiError> {
        self.navigate(list, assets, |ui| {
            ui.item_list_mut(list)?.step_up();
            Ok(())
        })
    }

    pub fn next_category(
        &mut self,
        list: NodeId,
        inv: &dyn Inventory,
        assets: &AssetStore,
    ) -> Result<(), UiError> {
        self.navigate(list, assets, |ui| ui.step_category(list, true, inv))
    }

    pub fn prev_category(
        &mut self,
        list: NodeId,
        inv: &dyn Inventory,
        assets: &AssetStore,
    ) -> Result<(), UiError> {
        self.navigate(list, assets, |ui| ui.step_category(list, false, inv))
    }

    /// Apply a cursor move, then rebuild the panel. When the rebuild fails
    /// the position, rows and tab selection are restored.
    fn navigate(
        &mut self,
        list: NodeId,
        assets: &AssetStore,
        step: impl FnOnce(&mut Self) -> Result<(), UiError>,
    ) -> Result<(), UiError> {
        let before = self.item_list(list)?;
        let (category, item, scroll) = (before.category, before.item, before.scroll);
        let rows = before.rows.clone();
        let Err(e) = step(self).and_then(|()| self.rebuild_panel(list, assets)) else {
            return Ok(());
        };
        let state = self.item_list_mut(list)?;
        state.category = category;
        state.item = item;
        state.scroll = scroll;
        state.rows = rows;
        let tabs = self.children(list).to_vec();
        for (i, tab) in tabs.into_iter().enumerate() {
            self.select_tab(tab, i == category)?;
        }
        warn!(target: "ui.items", error = %e, category, item, "navigation_rolled_back");
        Err(e)
    }

    /// Move one category along the tabs, clamping at both ends. Cursor and
    /// scroll reset only when the category actually changes.
    fn step_category(&mut self, list: NodeId, forward: bool, inv: &dyn Inventory) -> Result<(), UiError> {
        let tabs = self.children(list).to_vec();
        let count = if tabs.is_empty() {
            ItemCategory::ALL.len()
        } else {
            tabs.len().min(ItemCategory::ALL.len())
        };
        let state = self.item_list_mut(list)?;
        let current = state.category;
        let next = if forward {
            (current + 1).min(count - 1)
        } else {
            current.saturating_sub(1)
        };
        if next != current {
            state.category = next;
            state.item = 0;
            state.scroll = 0;
        }
        if let Some(tab) = tabs.get(current) {
            self.select_tab(*tab, false)?;
        }
        if let Some(tab) = tabs.get(next) {
            self.select_tab(*tab, true)?;
        }
        debug!(target: "ui.items", from = current, to = next, "category_selected");
        self.refresh_items(list, inv)
    }

    /// Rebuild the projection for the current category, keeping the cursor
    /// inside the new row count.
    pub fn refresh_items(&mut self, list: NodeId, inv: &dyn Inventory) -> Result<(), UiError> {
        let state = self.item_list_mut(list)?;
        state.rows = project(inv, state.category);
        state.item = state.item.min(state.rows.len().saturating_sub(1));
        state.scroll = state.scroll.min(state.item);
        debug!(target: "ui.items", category = state.category, rows = state.rows.len(), "items_reloaded");
        Ok(())
    }

    /// Equip the selected item, or dequip it when already equipped. Returns
    /// the new equipped state, or `None` when the list is empty.
    pub fn toggle_equip(
        &mut self,
        list: NodeId,
        inv: &mut dyn Inventory,
    ) -> Result<Option<bool>, UiError> {
        let Some(id) = self.selected_item(list).map(|i| i.id) else {
            return Ok(None);
        };
        let equipped = if inv.is_equipped(id) {
            let slot = inv.dequip(id)?;
            info!(target: "ui.items", id = id.0, ?slot, "item_dequipped");
            false
        } else {
            let slot = inv.equip(id)?;
            info!(target: "ui.items", id = id.0, ?slot, "item_equipped");
            true
        };
        self.refresh_items(list, &*inv)?;
        Ok(Some(equipped))
    }

    /// Replace the detail panel with one describing the selected row. The
    /// old panel stays in place when the new one cannot be built.
    fn rebuild_panel(&mut self, list: NodeId, assets: &AssetStore) -> Result<(), UiError> {
        let node = self.get(list)?;
        let owner = node.parent.ok_or(UiError::MissingParent("item list"))?;
        let lp = node
            .layout_parent
            .ok_or(UiError::MissingParent("item list"))?;
        let width = node.rect.width;
        let state = self.item_list(list)?;
        let (style, tab_width, old) = (state.style, state.tab_size.width, state.panel);
        let item = state.rows.get(state.item).map(|r| r.item.clone());
        let frame = self.get(lp)?.rect;

        let size = Size::new(frame.width - (width + tab_width - 2), frame.height);
        let panel = self.add_box(owner, style, size, Placement::at(Anchor::CenterRight))?;
        if let Some(item) = item {
            if let Err(e) = self.fill_panel(panel, &item, assets) {
                self.destroy(panel)?;
                return Err(e);
            }
        }
        if let Some(old) = old.filter(|p| self.contains(*p)) {
            self.destroy(old)?;
        }
        self.item_list_mut(list)?.panel = Some(panel);
        Ok(())
    }

    fn fill_panel(&mut self, panel: NodeId, item: &Item, assets: &AssetStore) -> Result<(), UiError> {
        // Last interior row above the weight line.
        let last_row = self.get(panel)?.rect.height - 3;
        self.add_label(
            panel,
            &item.name,
            NAME_WIDTH,
            TextAlign::Center,
            TextPolicy::Truncate,
            Placement::new(Anchor::TopCenter, 0, 1),
        )?;
        self.add_label(
            panel,
            &format!("{}☼", format_value(item.value)),
            VALUE_WIDTH,
            TextAlign::Right,
            TextPolicy::Truncate,
            Placement::new(Anchor::TopRight, 2, 1),
        )?;
        self.add_image(panel, assets.load(&item.image), Placement::new(Anchor::TopCenter, 0, 3))?;

        let mut description = wrap(&item.description, DESCRIPTION_WIDTH as usize);
        description.truncate((last_row - DESCRIPTION_TOP + 1).max(0) as usize);
        self.add_label(
            panel,
            &description.join(" "),
            DESCRIPTION_WIDTH,
            TextAlign::Center,
            TextPolicy::Wrap,
            Placement::new(Anchor::TopCenter, 0, DESCRIPTION_TOP),
        )?;

        let stats = stat_lines(item);
        let first = STATS_TOP + description.len().saturating_sub(1) as i32;
        let room = (last_row - first + 1).max(0) as usize;
        if stats.len() > room {
            debug!(target: "ui.items", id = item.id.0, shown = room, total = stats.len(), "panel_stats_clipped");
        }
        for (row, text) in (first..).zip(stats.into_iter().take(room)) {
            self.add_label(
                panel,
                &text,
                STAT_WIDTH,
                TextAlign::Left,
                TextPolicy::Truncate,
                Placement::new(Anchor::TopLeft, 1, row),
            )?;
        }
        self.add_label(
            panel,
            &format!("{}҂", item.weight),
            VALUE_WIDTH,
            TextAlign::Right,
            TextPolicy::Truncate,
            Placement::new(Anchor::BottomRight, 2, 1),
        )?;
        Ok(())
    }
}
