//! Display sink abstraction.
//!
//! The grid only ever writes through this trait; it never queries terminal
//! state mid-frame. Positions are absolute with a (0,0) origin and commands
//! are applied in order, with nothing visible until `flush`.

use anyhow::Result;

use crate::cell::Color;

pub trait DisplaySink {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()>;
    fn reset_colors(&mut self) -> Result<()>;
    /// Bulk write of every row, starting at the current position.
    fn write_frame(&mut self, rows: &[String]) -> Result<()>;
    fn set_colors(&mut self, fg: Color, bg: Color) -> Result<()>;
    fn write_glyph(&mut self, glyph: char) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCommand {
    MoveTo(u16, u16),
    ResetColors,
    Frame(Vec<String>),
    Colors(Color, Color),
    Glyph(char),
    Flush,
}

/// Records every command; used in tests in place of a terminal.
#[derive(Debug, Default)]
pub struct CaptureSink {
    pub commands: Vec<SinkCommand>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows of the most recent bulk write.
    pub fn last_frame(&self) -> Option<&[String]> {
        self.commands.iter().rev().find_map(|c| match c {
            SinkCommand::Frame(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }

    pub fn recolor_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, SinkCommand::Colors(..)))
            .count()
    }
}

impl DisplaySink for CaptureSink {
    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.commands.push(SinkCommand::MoveTo(x, y));
        Ok(())
    }
    fn reset_colors(&mut self) -> Result<()> {
        self.commands.push(SinkCommand::ResetColors);
        Ok(())
    }
    fn write_frame(&mut self, rows: &[String]) -> Result<()> {
        self.commands.push(SinkCommand::Frame(rows.to_vec()));
        Ok(())
    }
    fn set_colors(&mut self, fg: Color, bg: Color) -> Result<()> {
        self.commands.push(SinkCommand::Colors(fg, bg));
        Ok(())
    }
    fn write_glyph(&mut self, glyph: char) -> Result<()> {
        self.commands.push(SinkCommand::Glyph(glyph));
        Ok(())
    }
    fn flush(&mut self) -> Result<()> {
        self.commands.push(SinkCommand::Flush);
        Ok(())
    }
}
