//! `DisplaySink` over any `Write`, queueing crossterm commands until
//! `flush`.

use std::io::Write;

use anyhow::Result;
use core_grid::{Color, DisplaySink};
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};

pub struct CrosstermSink<W: Write> {
    out: W,
}

impl<W: Write> CrosstermSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn get_mut(&mut self) -> &mut W {
        &mut self.out
    }
}

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Reset => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::DarkRed => style::Color::DarkRed,
        Color::DarkGreen => style::Color::DarkGreen,
        Color::DarkYellow => style::Color::DarkYellow,
        Color::DarkBlue => style::Color::DarkBlue,
        Color::DarkMagenta => style::Color::DarkMagenta,
        Color::DarkCyan => style::Color::DarkCyan,
        Color::Grey => style::Color::Grey,
        Color::DarkGrey => style::Color::DarkGrey,
        Color::Red => style::Color::Red,
        Color::Green => style::Color::Green,
        Color::Yellow => style::Color::Yellow,
        Color::Blue => style::Color::Blue,
        Color::Magenta => style::Color::Magenta,
        Color::Cyan => style::Color::Cyan,
        Color::White => style::Color::White,
    }
}

impl<W: Write> DisplaySink for CrosstermSink<W> {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        Ok(())
    }

    fn reset_colors(&mut self) -> Result<()> {
        queue!(self.out, ResetColor)?;
        Ok(())
    }

    /// Rows are placed explicitly so a full-width row never depends on the
    /// terminal's autowrap behavior.
    fn write_frame(&mut self, rows: &[String]) -> Result<()> {
        for (y, row) in rows.iter().enumerate() {
            queue!(self.out, MoveTo(0, y as u16), Print(row))?;
        }
        Ok(())
    }

    fn set_colors(&mut self, fg: Color, bg: Color) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(to_crossterm(fg)),
            SetBackgroundColor(to_crossterm(bg))
        )?;
        Ok(())
    }

    fn write_glyph(&mut self, glyph: char) -> Result<()> {
        queue!(self.out, Print(glyph))?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_grid::CellGrid;
    use pretty_assertions::assert_eq;

    fn output(grid: &CellGrid) -> String {
        let mut sink = CrosstermSink::new(Vec::new());
        grid.flush(&mut sink).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn rows_are_placed_and_printed_in_order() {
        let mut grid = CellGrid::new(3, 2);
        grid.set_glyph(0, 0, '┌');
        grid.set_glyph(2, 1, '┘');
        let out = output(&grid);
        let first = out.find("┌  ").unwrap();
        let second = out.find("  ┘").unwrap();
        assert!(first < second);
        assert!(out.contains("\x1b[2;1H"), "second row is positioned explicitly");
    }

    #[test]
    fn only_recolored_cells_emit_color_sequences() {
        let mut grid = CellGrid::new(4, 1);
        let plain = output(&grid);
        assert!(!plain.contains("\x1b[38;5;"));

        grid.set_glyph(1, 0, 'x');
        grid.set_foreground(1, 0, Color::Black);
        grid.set_background(1, 0, Color::White);
        let out = output(&grid);
        assert!(out.contains("\x1b[1;2H"));
        assert!(out.ends_with("x\x1b[0m"), "{out:?}");
    }

    #[test]
    fn color_names_map_one_to_one() {
        assert_eq!(to_crossterm(Color::Reset), style::Color::Reset);
        assert_eq!(to_crossterm(Color::DarkGrey), style::Color::DarkGrey);
        assert_eq!(to_crossterm(Color::White), style::Color::White);
    }
}
