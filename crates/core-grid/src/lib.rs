//! Cell grid, tile connector and border style tables.
//!
//! The grid is the single shared surface every element draws into during a
//! compositing pass. Borders are described as direction-flag tiles
//! (`Dir`), connected against already-drawn neighbors, then resolved to
//! box-drawing glyphs through a `BorderStyle` table.
//!
//! Invariants:
//! - Addressing is `x + y * width`; the surface is never resized.
//! - `CellGrid::clear` restores the default `Tile` and `DisplayCell` everywhere.
//! - `CellGrid::flush` is read-only with respect to grid state.
//! - Each of the 16 masks has exactly one glyph per style (64 mappings).

pub mod cell;
pub mod connector;
pub mod grid;
pub mod sink;
pub mod style;
pub mod tile;

pub use cell::{Color, DisplayCell};
pub use connector::Region;
pub use grid::CellGrid;
pub use sink::{CaptureSink, DisplaySink, SinkCommand};
pub use style::BorderStyle;
pub use tile::{Dir, Tile};

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("unsupported border style selector {0}")]
    UnsupportedStyle(u8),
    #[error("{provided} raw tiles do not fit a region of {area} cells")]
    FlagOverflow { provided: usize, area: usize },
    #[error("region has negative dimensions {width}x{height}")]
    NegativeRegion { width: i32, height: i32 },
}
