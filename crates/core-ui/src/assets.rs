//! Image assets: rectangular character grids loaded from text files.
//!
//! A missing, unreadable or empty file resolves to the configured fallback
//! image, and failing that to a built-in `[?]`. Load failures are logged and
//! never reach the caller.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

const BUILTIN_FALLBACK: &str = "[?]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl ImageData {
    /// Build from text lines; ragged rows are padded with spaces to the
    /// widest row.
    pub fn from_text(text: &str) -> Self {
        let mut rows: Vec<Vec<char>> = text
            .lines()
            .map(|l| l.trim_end_matches('\r').chars().collect())
            .collect();
        while rows.last().is_some_and(|r| r.is_empty()) {
            rows.pop();
        }
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Self { rows, width }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<char>] {
        &self.rows
    }

    pub fn builtin_fallback() -> Self {
        Self::from_text(BUILTIN_FALLBACK)
    }
}

#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
    fallback: String,
}

impl AssetStore {
    pub fn new(root: impl Into<PathBuf>, fallback: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            fallback: fallback.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, name: &str) -> Option<ImageData> {
        if name.is_empty() {
            return None;
        }
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(text) => {
                let image = ImageData::from_text(&text);
                if image.is_empty() {
                    warn!(target: "assets", path = %path.display(), "image_empty");
                    None
                } else {
                    Some(image)
                }
            }
            Err(e) => {
                warn!(target: "assets", path = %path.display(), error = %e, "image_unreadable");
                None
            }
        }
    }

    /// Load `name` relative to the asset root, falling back as described in
    /// the module docs.
    pub fn load(&self, name: &str) -> ImageData {
        if let Some(image) = self.read(name) {
            debug!(target: "assets", name, width = image.width(), height = image.height(), "image_loaded");
            return image;
        }
        self.read(&self.fallback)
            .unwrap_or_else(ImageData::builtin_fallback)
    }
}
