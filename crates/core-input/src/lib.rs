//! Blocking key input mapped to navigation symbols.

mod keys;
pub use keys::NavKey;

use std::collections::VecDeque;

use anyhow::Result;
use crossterm::event::{self, Event as CEvent};
use tracing::trace;

use keys::map_key_event;

/// Source of one navigation symbol per frame.
pub trait InputSource {
    /// Block until the next mapped key press. `None` means the source is
    /// exhausted and the loop should end.
    fn next_key(&mut self) -> Result<Option<NavKey>>;
}

/// Reads the terminal through `crossterm::event::read`.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

#[inline]
pub(crate) fn log_key(key: NavKey) {
    trace!(target: "input", ?key, "key_mapped");
}

impl InputSource for CrosstermInput {
    fn next_key(&mut self) -> Result<Option<NavKey>> {
        loop {
            if let CEvent::Key(k) = event::read()? {
                if let Some(key) = map_key_event(&k) {
                    log_key(key);
                    return Ok(Some(key));
                }
            }
        }
    }
}

/// Replays a fixed key sequence; used by tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    keys: VecDeque<NavKey>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = NavKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_key(&mut self) -> Result<Option<NavKey>> {
        let key = self.keys.pop_front();
        if let Some(key) = key {
            log_key(key);
        }
        Ok(key)
    }
}
