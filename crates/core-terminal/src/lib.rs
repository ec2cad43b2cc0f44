//! Terminal session that the cell grid is flushed into.
//!
//! A `TerminalSession` switches the output to the alternate screen with the
//! cursor hidden, optionally in raw mode, and hands out the `CrosstermSink`
//! frames are written through. Closing or dropping the session restores the
//! terminal, so an early `?` or an unwind still leaves the shell usable.

use std::io::{Stdout, Write, stdout};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    queue,
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
        disable_raw_mode, enable_raw_mode,
    },
};
use tracing::{info, warn};

pub mod sink;
pub use sink::CrosstermSink;

/// Terminal dimensions as (columns, rows).
pub fn terminal_size() -> Result<(u16, u16)> {
    Ok(terminal::size()?)
}

pub struct TerminalSession<W: Write> {
    sink: CrosstermSink<W>,
    raw_mode: bool,
    open: bool,
}

impl TerminalSession<Stdout> {
    /// Raw mode plus the alternate screen on stdout.
    pub fn open(title: &str) -> Result<Self> {
        Self::start(stdout(), title, true)
    }
}

impl<W: Write> TerminalSession<W> {
    /// Alternate screen on `out` with line discipline left alone. Used when
    /// the output is not the controlling terminal.
    pub fn open_cooked(out: W, title: &str) -> Result<Self> {
        Self::start(out, title, false)
    }

    fn start(mut out: W, title: &str, raw_mode: bool) -> Result<Self> {
        if raw_mode {
            enable_raw_mode()?;
        }
        let entered = queue!(
            out,
            SetTitle(title),
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All)
        )
        .and_then(|()| out.flush());
        if let Err(e) = entered {
            if raw_mode {
                let _ = disable_raw_mode();
            }
            return Err(e.into());
        }
        info!(target: "terminal", raw_mode, "session_opened");
        Ok(Self {
            sink: CrosstermSink::new(out),
            raw_mode,
            open: true,
        })
    }

    pub fn sink_mut(&mut self) -> &mut CrosstermSink<W> {
        &mut self.sink
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Leave the alternate screen and restore the line discipline. A second
    /// call does nothing.
    pub fn close(&mut self) -> Result<()> {
        if !self.open {
            return Ok(());
        }
        self.open = false;
        let out = self.sink.get_mut();
        let left = queue!(out, LeaveAlternateScreen, Show).and_then(|()| out.flush());
        if self.raw_mode {
            disable_raw_mode()?;
        }
        left?;
        info!(target: "terminal", "session_closed");
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!(target: "terminal", error = %e, "session_restore_failed");
        }
    }
}
