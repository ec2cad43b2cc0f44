//! `CellGrid`: the shared drawing surface.
//!
//! Two parallel row-major arrays (`x + y * width`) of `Tile` and
//! `DisplayCell`, allocated once and never resized. All point edits take
//! signed coordinates; writes that land off the surface are dropped so
//! elements hanging over an edge clip instead of failing.

use tracing::trace;

use crate::GridError;
use crate::cell::{Color, DisplayCell};
use crate::connector::{Region, connect};
use crate::sink::DisplaySink;
use crate::style::BorderStyle;
use crate::tile::{Dir, Tile};

#[derive(Debug, Clone)]
pub struct CellGrid {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
    cells: Vec<DisplayCell>,
}

impl CellGrid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            tiles: vec![Tile::EMPTY; len],
            cells: vec![DisplayCell::BLANK; len],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every tile to empty and every cell to a default-colored space.
    pub fn clear(&mut self) {
        self.tiles.fill(Tile::EMPTY);
        self.cells.fill(DisplayCell::BLANK);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && y >= 0 && (x as u32) < self.width as u32 && (y as u32) < self.height as u32 {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub fn tile(&self, x: i32, y: i32) -> Option<Tile> {
        self.index(x, y).map(|i| self.tiles[i])
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<DisplayCell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Replace the direction flags of one tile.
    pub fn set_tile_flags(&mut self, mask: Dir, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i].set_directions(mask);
        }
    }

    /// OR direction flags into one tile.
    pub fn add_tile_flags(&mut self, mask: Dir, x: i32, y: i32) {
        if let Some(i) = self.index(x, y) {
            self.tiles[i].add(mask);
        }
    }

    pub fn set_glyph(&mut self, x: i32, y: i32, glyph: char) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].glyph = glyph;
        }
    }

    pub fn set_foreground(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].fg = color;
        }
    }

    pub fn set_background(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].bg = color;
        }
    }

    /// Glyphs of one row as a string (tests and snapshots).
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = y as usize * self.width as usize;
        self.cells[start..start + self.width as usize]
            .iter()
            .map(|c| c.glyph)
            .collect()
    }

    /// Write `raw` flags into the `w x h` region at (x, y), connect the
    /// region against its neighbors, then resolve every tile of the region to
    /// a glyph through `style`.
    ///
    /// `raw` may be shorter than the region: only the provided entries are
    /// written (row-major), the remaining tiles keep their current flags but
    /// are still connected and resolved. The region is clipped to the surface.
    pub fn draw_region(
        &mut self,
        raw: &[Dir],
        style: BorderStyle,
        x: i32,
        y: i32,
        w: i32,
        h: i32,
    ) -> Result<(), GridError> {
        if w < 0 || h < 0 {
            return Err(GridError::NegativeRegion { width: w, height: h });
        }
        let area = w as usize * h as usize;
        if raw.len() > area {
            return Err(GridError::FlagOverflow {
                provided: raw.len(),
                area,
            });
        }
        for (i, mask) in raw.iter().enumerate() {
            let i = i as i32;
            self.set_tile_flags(*mask, x + i % w, y + i / w);
        }

        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i32);
        let y1 = (y + h).min(self.height as i32);
        if x1 <= x0 || y1 <= y0 {
            return Ok(());
        }
        let region = Region {
            x: x0 as usize,
            y: y0 as usize,
            width: (x1 - x0) as usize,
            height: (y1 - y0) as usize,
        };
        connect(
            &mut self.tiles,
            self.width as usize,
            self.height as usize,
            region,
        );
        let sw = self.width as usize;
        for row in region.y..region.y + region.height {
            for col in region.x..region.x + region.width {
                let pos = col + row * sw;
                self.cells[pos].glyph = style.glyph(self.tiles[pos].directions());
            }
        }
        Ok(())
    }

    /// Emit the whole surface: one bulk glyph write from the origin with
    /// default colors, then a recolor pass over cells whose colors differ
    /// from the default pair. Never mutates the grid.
    pub fn flush(&self, sink: &mut dyn DisplaySink) -> anyhow::Result<()> {
        let w = self.width as usize;
        let rows: Vec<String> = self
            .cells
            .chunks(w.max(1))
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect();
        sink.move_to(0, 0)?;
        sink.reset_colors()?;
        sink.write_frame(&rows)?;

        let mut recolored = 0usize;
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.has_default_colors() {
                continue;
            }
            sink.move_to((i % w) as u16, (i / w) as u16)?;
            sink.set_colors(cell.fg, cell.bg)?;
            sink.write_glyph(cell.glyph)?;
            recolored += 1;
        }
        if recolored > 0 {
            sink.reset_colors()?;
        }
        sink.flush()?;
        trace!(target: "grid.flush", width = self.width, height = self.height, recolored, "frame_flushed");
        Ok(())
    }
}
