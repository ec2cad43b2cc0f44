//! Arena nodes and their tagged kinds.
//!
//! Every element is a `Node` in the `Ui` arena. Behavior is selected by the
//! `NodeKind` tag; per-kind state lives in the variant payload.
//!
//! Two parent links are kept:
//! * `parent` is the owner whose `children` list holds this node. Destroying
//!   the owner destroys the node.
//! * `layout_parent` is the node this one is measured and placed against.
//!   It equals `parent` except for non-title children of a tab, which are
//!   laid out inside the tab's strip container (window or list).

use core_grid::BorderStyle;
use core_inventory::Item;
use slotmap::new_key_type;

use crate::assets::ImageData;
use crate::align::TextAlign;
use crate::geom::{Rect, Size};
use crate::text::TextPolicy;

new_key_type! { pub struct NodeId; }

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) rect: Rect,
    pub(crate) min: Size,
    pub(crate) z: i32,
    pub(crate) enabled: bool,
    pub(crate) parent: Option<NodeId>,
    pub(crate) layout_parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) kind: NodeKind,
}

impl Node {
    pub fn rect(&self) -> Rect {
        self.rect
    }
    pub fn min_size(&self) -> Size {
        self.min
    }
    pub fn z(&self) -> i32 {
        self.z
    }
    pub fn enabled(&self) -> bool {
        self.enabled
    }
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
    pub fn layout_parent(&self) -> Option<NodeId> {
        self.layout_parent
    }
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }
}

/// A bordered frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub style: BorderStyle,
}

/// Frame that owns an ordered strip of tabs and a current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabStrip {
    pub style: BorderStyle,
    /// Header size of every tab. Window tabs are always 3 rows tall.
    pub tab_size: Size,
    pub selected: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabState {
    pub selected: bool,
    /// Title label; present once the tab is fully built. Title labels are
    /// laid out inside the tab itself and never toggled by selection.
    pub title: Option<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelState {
    pub text: String,
    pub align: TextAlign,
    pub policy: TextPolicy,
    pub selected: bool,
}

/// One projected inventory row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub item: Item,
    pub equipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemListState {
    pub style: BorderStyle,
    pub tab_size: Size,
    pub category: usize,
    pub item: usize,
    pub scroll: usize,
    pub rows: Vec<ItemRow>,
    /// Detail panel box, rebuilt on every selection change.
    pub panel: Option<NodeId>,
}

#[derive(Debug, Clone)]
pub enum NodeKind {
    Root,
    Box(Frame),
    Button(Frame),
    SelectionBox(Frame),
    Window(TabStrip),
    SettingsList(TabStrip),
    ItemList(ItemListState),
    /// Primary tab; selecting it resizes the owning window to `target`.
    Tab { tab: TabState, target: Size },
    SettingsTab { tab: TabState },
    ItemTab { tab: TabState },
    Label(LabelState),
    Image(ImageData),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Box(_) => "box",
            NodeKind::Button(_) => "button",
            NodeKind::SelectionBox(_) => "selection_box",
            NodeKind::Window(_) => "window",
            NodeKind::SettingsList(_) => "settings_list",
            NodeKind::ItemList(_) => "item_list",
            NodeKind::Tab { .. } => "tab",
            NodeKind::SettingsTab { .. } => "settings_tab",
            NodeKind::ItemTab { .. } => "item_tab",
            NodeKind::Label(_) => "label",
            NodeKind::Image(_) => "image",
        }
    }

    pub fn is_container(&self) -> bool {
        !matches!(self, NodeKind::Label(_) | NodeKind::Image(_))
    }

    pub fn is_tab(&self) -> bool {
        self.tab_state().is_some()
    }

    /// Kinds that may not match their layout parent's size on either axis.
    pub(crate) fn must_not_cover_parent(&self) -> bool {
        matches!(
            self,
            NodeKind::Button(_) | NodeKind::SelectionBox(_) | NodeKind::Label(_) | NodeKind::Image(_)
        )
    }

    /// Whether an owner of this kind accepts a child of `child` kind.
    pub(crate) fn accepts(&self, child: &NodeKind) -> bool {
        match (self, child) {
            (NodeKind::Window(_), NodeKind::Tab { .. }) => true,
            (NodeKind::SettingsList(_), NodeKind::SettingsTab { .. }) => true,
            (NodeKind::ItemList(_), NodeKind::ItemTab { .. }) => true,
            (NodeKind::Window(_) | NodeKind::SettingsList(_) | NodeKind::ItemList(_), _) => false,
            (_, NodeKind::Tab { .. } | NodeKind::SettingsTab { .. } | NodeKind::ItemTab { .. }) => false,
            (owner, _) => owner.is_container(),
        }
    }

    pub fn border_style(&self) -> Option<BorderStyle> {
        match self {
            NodeKind::Box(f) | NodeKind::Button(f) | NodeKind::SelectionBox(f) => Some(f.style),
            NodeKind::Window(s) | NodeKind::SettingsList(s) => Some(s.style),
            NodeKind::ItemList(l) => Some(l.style),
            _ => None,
        }
    }

    pub fn tab_state(&self) -> Option<&TabState> {
        match self {
            NodeKind::Tab { tab, .. } | NodeKind::SettingsTab { tab } | NodeKind::ItemTab { tab } => {
                Some(tab)
            }
            _ => None,
        }
    }

    pub(crate) fn tab_state_mut(&mut self) -> Option<&mut TabState> {
        match self {
            NodeKind::Tab { tab, .. } | NodeKind::SettingsTab { tab } | NodeKind::ItemTab { tab } => {
                Some(tab)
            }
            _ => None,
        }
    }

    /// Header size for tabs owned by a strip of this kind.
    pub(crate) fn strip_tab_size(&self) -> Option<Size> {
        match self {
            NodeKind::Window(s) | NodeKind::SettingsList(s) => Some(s.tab_size),
            NodeKind::ItemList(l) => Some(l.tab_size),
            _ => None,
        }
    }
}

/// Anything with an on/off selection flag.
pub trait Selectable {
    fn is_selected(&self) -> bool;
    fn set_selected(&mut self, on: bool);
}

impl Selectable for TabState {
    fn is_selected(&self) -> bool {
        self.selected
    }
    fn set_selected(&mut self, on: bool) {
        self.selected = on;
    }
}

impl Selectable for LabelState {
    fn is_selected(&self) -> bool {
        self.selected
    }
    fn set_selected(&mut self, on: bool) {
        self.selected = on;
    }
}

/// A cursor over rows viewed through a fixed-height scroll window.
///
/// Invariant kept by the movers: `offset <= cursor < offset + visible`.
pub trait Scrollable {
    fn cursor(&self) -> usize;
    fn offset(&self) -> usize;
    fn row_count(&self) -> usize;

    /// Advance the cursor by one (clamped), scrolling by at most one row.
    fn step_down(&mut self, visible: usize);
    /// Retreat the cursor by one (clamped), scrolling by at most one row.
    fn step_up(&mut self);

    /// True when rows above the window are hidden.
    fn hidden_above(&self) -> bool {
        self.offset() > 0
    }

    /// True when rows below a `visible`-row window are hidden.
    fn hidden_below(&self, visible: usize) -> bool {
        self.offset() + visible < self.row_count()
    }
}

impl Scrollable for ItemListState {
    fn cursor(&self) -> usize {
        self.item
    }
    fn offset(&self) -> usize {
        self.scroll
    }
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn step_down(&mut self, visible: usize) {
        self.item = (self.item + 1).min(self.rows.len().saturating_sub(1));
        if self.item >= visible + self.scroll {
            self.scroll += 1;
        }
    }

    fn step_up(&mut self) {
        self.item = self.item.saturating_sub(1);
        if self.item < self.scroll {
            self.scroll -= 1;
        }
    }
}
