//! Configuration loading and parsing.
//!
//! Parses `cellui.toml` (or an override path provided by the binary). Three
//! sections, all optional:
//! * `[display] width/height`: the target surface the UI is laid out for.
//! * `[assets] root/fallback`: image asset directory and the image used
//!   when a named one cannot be read.
//! * `[log] filter`: tracing filter used when `RUST_LOG` is unset.
//!
//! Unknown fields are ignored and any read or parse failure yields the
//! defaults. The display size is clamped to the real terminal size by
//! `Config::apply_terminal`; the parsed values are retained so a later
//! resize can re-clamp.

use anyhow::Result;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const FILE_NAME: &str = "cellui.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_width")]
    pub width: u16,
    #[serde(default = "DisplayConfig::default_height")]
    pub height: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
        }
    }
}

impl DisplayConfig {
    const fn default_width() -> u16 {
        126
    }
    const fn default_height() -> u16 {
        33
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AssetsConfig {
    #[serde(default = "AssetsConfig::default_root")]
    pub root: PathBuf,
    #[serde(default = "AssetsConfig::default_fallback")]
    pub fallback: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: Self::default_root(),
            fallback: Self::default_fallback(),
        }
    }
}

impl AssetsConfig {
    fn default_root() -> PathBuf {
        PathBuf::from("assets")
    }
    fn default_fallback() -> String {
        "ImageNotFound.txt".to_string()
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

impl LogConfig {
    fn default_filter() -> String {
        "info".to_string()
    }
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub raw: Option<String>, // file contents as read (optional)
    pub file: ConfigFile,    // parsed (or default) data
    pub effective_width: u16,
    pub effective_height: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(None, ConfigFile::default())
    }
}

/// Best-effort config path: working directory first, then the platform
/// config dir (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("cellui").join(FILE_NAME);
    }
    PathBuf::from(FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        info!(target: "config", path = %path.display(), "config_missing_defaults");
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "config_loaded");
            Ok(Config::from_file(Some(content), file))
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "config_parse_failed");
            Ok(Config::default())
        }
    }
}

impl Config {
    fn from_file(raw: Option<String>, file: ConfigFile) -> Self {
        let (effective_width, effective_height) = (file.display.width, file.display.height);
        Self {
            raw,
            file,
            effective_width,
            effective_height,
        }
    }

    /// Clamp the configured display size to the terminal's `cols x rows`.
    /// Returns the effective (possibly clamped) size.
    pub fn apply_terminal(&mut self, cols: u16, rows: u16) -> (u16, u16) {
        let DisplayConfig { width, height } = self.file.display;
        let clamped = (width.min(cols), height.min(rows));
        if clamped != (width, height) {
            info!(
                target: "config",
                width,
                height,
                cols,
                rows,
                effective_width = clamped.0,
                effective_height = clamped.1,
                "display_size_clamped"
            );
        }
        (self.effective_width, self.effective_height) = clamped;
        clamped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl Write for LockedWriter<'_> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), text).unwrap();
        tmp
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert_eq!((cfg.effective_width, cfg.effective_height), (126, 33));
        assert_eq!(cfg.file.assets.root, PathBuf::from("assets"));
        assert_eq!(cfg.file.assets.fallback, "ImageNotFound.txt");
        assert_eq!(cfg.file.log.filter, "info");
        assert!(cfg.raw.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let tmp = write_config(
            "[display]\nwidth = 100\nheight = 30\n[assets]\nroot = \"art\"\nfallback = \"none.txt\"\n[log]\nfilter = \"debug\"\n",
        );
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.display, DisplayConfig { width: 100, height: 30 });
        assert_eq!(cfg.file.assets.root, PathBuf::from("art"));
        assert_eq!(cfg.file.assets.fallback, "none.txt");
        assert_eq!(cfg.file.log.filter, "debug");
        assert!(cfg.raw.is_some());
    }

    #[test]
    fn partial_sections_and_unknown_fields_keep_defaults() {
        let tmp = write_config("[display]\nwidth = 90\nshadow = true\n[extra]\nx = 1\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.display, DisplayConfig { width: 90, height: 33 });
        assert_eq!(cfg.file.assets, AssetsConfig::default());
    }

    #[test]
    fn parse_error_falls_back_to_defaults() {
        let tmp = write_config("[display\nwidth = ");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file, ConfigFile::default());
        assert!(cfg.raw.is_none());
    }

    #[test]
    fn clamps_each_axis_to_the_terminal() {
        let mut cfg = Config::default();
        assert_eq!(cfg.apply_terminal(200, 50), (126, 33));
        assert_eq!(cfg.apply_terminal(80, 50), (80, 33));
        assert_eq!(cfg.apply_terminal(300, 10), (126, 10));
        assert_eq!((cfg.effective_width, cfg.effective_height), (126, 10));
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let mut cfg = Config::default();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        with_default(subscriber, || {
            cfg.apply_terminal(100, 20);
        });

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("display_size_clamped"));
        assert_eq!((cfg.effective_width, cfg.effective_height), (100, 20));
    }
}
