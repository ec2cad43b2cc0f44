//! The element arena: insertion with up-front validation, destruction,
//! movement and plain accessors.

use slotmap::SlotMap;
use tracing::debug;

use crate::UiError;
use crate::align::{Anchor, resolve_position};
use crate::geom::{Point, Rect, Size};
use crate::node::{Node, NodeId, NodeKind};

pub struct Ui {
    pub(crate) nodes: SlotMap<NodeId, Node>,
    root: NodeId,
}

/// How a new node's position is obtained.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Position {
    Anchored { anchor: Anchor, padding: Size },
    /// Computed by the caller (tab headers).
    Fixed(Point),
}

pub(crate) struct NewNode {
    pub owner: NodeId,
    pub size: Size,
    pub min: Size,
    pub z: i32,
    pub position: Position,
    pub kind: NodeKind,
}

/// Size rules shared by every construction path.
pub(crate) fn validate_size(
    kind: &NodeKind,
    size: Size,
    min: Size,
    parent: Size,
) -> Result<(), UiError> {
    if size.width > parent.width || size.height > parent.height {
        return Err(UiError::Oversized {
            kind: kind.name(),
            size,
            parent,
        });
    }
    if size.width < min.width || size.height < min.height {
        return Err(UiError::Undersized {
            kind: kind.name(),
            size,
            min,
        });
    }
    if kind.must_not_cover_parent()
        && (size.width == parent.width || size.height == parent.height)
    {
        return Err(UiError::CoversParent {
            kind: kind.name(),
            size,
            parent,
        });
    }
    Ok(())
}

impl Ui {
    /// A tree holding only the root, sized to the display surface.
    pub fn new(width: u16, height: u16) -> Self {
        let size = Size::new(width as i32, height as i32);
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Node {
            rect: Rect::from_parts(Point::default(), size),
            min: size,
            z: 0,
            enabled: true,
            parent: None,
            layout_parent: None,
            children: Vec::new(),
            kind: NodeKind::Root,
        });
        Self { nodes, root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id).map(|n| n.rect)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map_or(&[], |n| n.children.as_slice())
    }

    pub fn is_enabled(&self, id: NodeId) -> bool {
        self.nodes.get(id).is_some_and(|n| n.enabled)
    }

    pub fn set_enabled(&mut self, id: NodeId, on: bool) -> Result<(), UiError> {
        self.get_mut(id)?.enabled = on;
        Ok(())
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&Node, UiError> {
        self.nodes.get(id).ok_or(UiError::UnknownNode)
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, UiError> {
        self.nodes.get_mut(id).ok_or(UiError::UnknownNode)
    }

    /// Node a new child of `owner` is measured against: the owner itself,
    /// or the owner's strip container when the owner is an already titled
    /// tab.
    pub(crate) fn layout_parent_for(&self, owner: NodeId) -> Result<NodeId, UiError> {
        let node = self.get(owner)?;
        match node.kind.tab_state() {
            Some(tab) if tab.title.is_some() => node
                .parent
                .ok_or(UiError::MissingParent(node.kind.name())),
            _ => Ok(owner),
        }
    }

    pub(crate) fn insert(&mut self, new: NewNode) -> Result<NodeId, UiError> {
        let owner = self.get(new.owner)?;
        if !owner.kind.accepts(&new.kind) {
            return Err(UiError::WrongChildKind {
                owner: owner.kind.name(),
                child: new.kind.name(),
            });
        }
        let enabled = match owner.kind.tab_state() {
            Some(tab) if tab.title.is_some() => tab.selected,
            _ => true,
        };
        let layout_parent = self.layout_parent_for(new.owner)?;
        let parent_rect = self.get(layout_parent)?.rect;
        validate_size(&new.kind, new.size, new.min, parent_rect.size())?;
        let pos = match new.position {
            Position::Anchored { anchor, padding } => {
                resolve_position(parent_rect, new.size, anchor, padding)?
            }
            Position::Fixed(p) => p,
        };

        let kind_name = new.kind.name();
        let id = self.nodes.insert(Node {
            rect: Rect::from_parts(pos, new.size),
            min: new.min,
            z: new.z,
            enabled,
            parent: Some(new.owner),
            layout_parent: Some(layout_parent),
            children: Vec::new(),
            kind: new.kind,
        });
        self.get_mut(new.owner)?.children.push(id);
        debug!(
            target: "ui.tree",
            kind = kind_name,
            x = pos.x,
            y = pos.y,
            width = new.size.width,
            height = new.size.height,
            z = new.z,
            "node_inserted"
        );
        Ok(id)
    }

    /// Re-anchor a node inside its layout parent.
    pub fn move_node(&mut self, id: NodeId, anchor: Anchor, padding: Size) -> Result<(), UiError> {
        let node = self.get(id)?;
        let lp = node
            .layout_parent
            .ok_or(UiError::MissingParent(node.kind.name()))?;
        let size = node.rect.size();
        let parent_rect = self.get(lp)?.rect;
        let pos = resolve_position(parent_rect, size, anchor, padding)?;
        self.set_position(id, pos)
    }

    pub(crate) fn set_position(&mut self, id: NodeId, pos: Point) -> Result<(), UiError> {
        let node = self.get_mut(id)?;
        node.rect.x = pos.x;
        node.rect.y = pos.y;
        Ok(())
    }

    /// Unlink a node from its owner, then destroy a snapshot of its children
    /// depth first before releasing the node itself.
    pub fn destroy(&mut self, id: NodeId) -> Result<(), UiError> {
        if id == self.root {
            return Err(UiError::RootDestroy);
        }
        let parent = self.get(id)?.parent;
        if let Some(owner) = parent.and_then(|p| self.nodes.get_mut(p)) {
            owner.children.retain(|c| *c != id);
            if let Some(tab) = owner.kind.tab_state_mut() {
                if tab.title == Some(id) {
                    tab.title = None;
                }
            }
        }
        let removed = self.destroy_subtree(id);
        debug!(target: "ui.tree", removed, "node_destroyed");
        Ok(())
    }

    fn destroy_subtree(&mut self, id: NodeId) -> usize {
        let children = self
            .nodes
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        let mut removed = 0;
        for child in children {
            removed += self.destroy_subtree(child);
        }
        if self.nodes.remove(id).is_some() {
            removed += 1;
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::Placement;
    use core_grid::BorderStyle;

    #[test]
    fn oversized_child_is_rejected_without_insertion() {
        let mut ui = Ui::new(20, 10);
        let root = ui.root();
        let err = ui
            .add_box(root, BorderStyle::SingleSharp, Size::new(21, 5), Placement::at(Anchor::TopLeft))
            .unwrap_err();
        assert!(matches!(err, UiError::Oversized { .. }));
        assert_eq!(err.kind(), crate::ErrorKind::Range);
        assert!(ui.children(root).is_empty());
        assert_eq!(ui.len(), 1);
    }

    #[test]
    fn undersized_box_is_rejected() {
        let mut ui = Ui::new(20, 10);
        let root = ui.root();
        let err = ui
            .add_box(root, BorderStyle::SingleSharp, Size::new(2, 5), Placement::at(Anchor::TopLeft))
            .unwrap_err();
        assert!(matches!(err, UiError::Undersized { .. }));
    }

    #[test]
    fn destroy_removes_whole_subtree() {
        let mut ui = Ui::new(40, 20);
        let root = ui.root();
        let outer = ui
            .add_box(root, BorderStyle::SingleSharp, Size::new(30, 15), Placement::at(Anchor::Center))
            .unwrap();
        let inner = ui
            .add_box(outer, BorderStyle::SingleSharp, Size::new(10, 5), Placement::at(Anchor::Center))
            .unwrap();
        let leaf = ui
            .add_label(inner, "hi", 4, Default::default(), Default::default(), Placement::at(Anchor::Center))
            .unwrap();
        assert_eq!(ui.len(), 4);
        ui.destroy(outer).unwrap();
        assert_eq!(ui.len(), 1);
        assert!(!ui.contains(inner));
        assert!(!ui.contains(leaf));
        assert!(ui.children(root).is_empty());
        assert_eq!(ui.destroy(outer), Err(UiError::UnknownNode));
        assert_eq!(ui.destroy(root), Err(UiError::RootDestroy));
    }

    #[test]
    fn move_node_reanchors_inside_layout_parent() {
        let mut ui = Ui::new(40, 20);
        let root = ui.root();
        let b = ui
            .add_box(root, BorderStyle::SingleSharp, Size::new(10, 4), Placement::at(Anchor::TopLeft))
            .unwrap();
        ui.move_node(b, Anchor::BottomRight, Size::new(1, 2)).unwrap();
        assert_eq!(ui.rect(b), Some(Rect::new(29, 14, 10, 4)));
    }
}
