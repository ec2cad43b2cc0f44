//! Retained-mode element tree composed into a `CellGrid`.
//!
//! Elements live in an arena (`Ui`) addressed by stable `NodeId`s. Each
//! frame the caller clears the grid, runs one compositing pass from the root
//! (`Ui::compose`), then flushes the grid to a display sink. Data flows top
//! down through positions and sizes; nodes communicate upward only by
//! writing into the shared grid.
//!
//! Compositing order per enabled node:
//! 1. Containers stable-sort their children by z-layer.
//! 2. Children with a negative z-layer draw first.
//! 3. The container's own frame tiles draw (`draw_tiles`).
//! 4. Children with a non-negative z-layer draw.
//! 5. The node's own text draws (`draw_text`), for leaves and containers alike.
//!
//! Construction invariants (checked before anything is inserted, so a failed
//! build leaves the tree untouched):
//! - size never exceeds the layout parent's size and never falls below the
//!   kind's minimum;
//! - buttons, selection boxes, labels and images never match the layout
//!   parent's size on either axis;
//! - padding is non-negative and within `parent - own` on each axis;
//! - tab strips (window, settings list, item list) own only their tab kind.
//!
//! Modules:
//! - `tree`: arena, insertion, destruction, movement.
//! - `widgets`: builders for every element kind.
//! - `compose`: the compositing pass and per-kind text drawing.
//! - `tiles`: procedural border layouts.
//! - `tabs`: tab selection, window resizing, header geometry.
//! - `items`: item list projection, navigation and detail panel.
//! - `align` / `text` / `format` / `assets`: placement math, label text
//!   policies, number formatting and image loading.

pub mod align;
pub mod assets;
pub mod compose;
pub mod format;
pub mod geom;
pub mod items;
pub mod node;
pub mod tabs;
pub mod text;
pub mod tiles;
pub mod tree;
pub mod widgets;

pub use align::{Anchor, Placement, TextAlign, resolve_position};
pub use assets::{AssetStore, ImageData};
pub use format::{format_money, format_value, health_bar};
pub use geom::{Point, Rect, Size};
pub use items::ListPosition;
pub use node::{NodeId, NodeKind, Scrollable, Selectable};
pub use text::{TextPolicy, truncate, wrap};
pub use tree::Ui;

use core_grid::GridError;
use core_inventory::InventoryError;

/// Coarse classification of construction and operation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid tree relationship or wrong node kind for an operation.
    Structural,
    /// A size, padding or text length outside its permitted range.
    Range,
    /// Refused by the inventory collaborator.
    Collaborator,
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum UiError {
    #[error("{kind} size {size:?} exceeds its parent's {parent:?}")]
    Oversized {
        kind: &'static str,
        size: Size,
        parent: Size,
    },
    #[error("{kind} size {size:?} is below its minimum {min:?}")]
    Undersized {
        kind: &'static str,
        size: Size,
        min: Size,
    },
    #[error("{kind} size {size:?} may not match its parent's {parent:?} on either axis")]
    CoversParent {
        kind: &'static str,
        size: Size,
        parent: Size,
    },
    #[error("padding {padding:?} is negative")]
    NegativePadding { padding: Size },
    #[error("padding {padding:?} exceeds the free space {free:?}")]
    PaddingOutOfBounds { padding: Size, free: Size },
    #[error("text of {len} chars does not fit a fixed label of width {width}")]
    TextTooLong { len: usize, width: i32 },
    #[error("{0} has no parent to be laid out against")]
    MissingParent(&'static str),
    #[error("unknown node")]
    UnknownNode,
    #[error("a {owner} cannot own a {child}")]
    WrongChildKind {
        owner: &'static str,
        child: &'static str,
    },
    #[error("expected a {expected}, found a {found}")]
    WrongNodeKind {
        expected: &'static str,
        found: &'static str,
    },
    #[error("the root node cannot be destroyed")]
    RootDestroy,
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Inventory(#[from] InventoryError),
}

impl UiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UiError::Oversized { .. }
            | UiError::Undersized { .. }
            | UiError::CoversParent { .. }
            | UiError::NegativePadding { .. }
            | UiError::PaddingOutOfBounds { .. }
            | UiError::TextTooLong { .. } => ErrorKind::Range,
            UiError::MissingParent(_)
            | UiError::UnknownNode
            | UiError::WrongChildKind { .. }
            | UiError::WrongNodeKind { .. }
            | UiError::RootDestroy
            | UiError::Grid(_) => ErrorKind::Structural,
            UiError::Inventory(_) => ErrorKind::Collaborator,
        }
    }
}
