//! cellui entrypoint: terminal demo of the element tree.
use anyhow::{Context, Result};
use clap::Parser;
use core_config::load_from;
use core_grid::{CellGrid, DisplaySink};
use core_input::{CrosstermInput, InputSource};
use core_terminal::{TerminalSession, terminal_size};
use core_ui::AssetStore;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

mod demo;
mod screen;

use demo::Player;
use screen::{Flow, Screen};

const LOG_FILE: &str = "cellui.log";

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "cellui", version, about = "Character-cell UI demo")]
struct Args {
    /// Configuration file path (overrides discovery of `cellui.toml`).
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Image asset directory (overrides `[assets] root`).
    #[arg(long = "assets")]
    pub assets: Option<PathBuf>,
}

fn configure_logging(filter: &str) -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE);
    if log_path.exists() {
        let _ = std::fs::remove_file(&log_path);
    }

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));
    match tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; dropping the guard shuts the writer down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

/// Clear, composite, flush, then block for one key; repeat until the input
/// asks to exit or runs dry.
fn run_loop(
    screen: &mut Screen,
    player: &mut Player,
    assets: &AssetStore,
    grid: &mut CellGrid,
    sink: &mut dyn DisplaySink,
    input: &mut dyn InputSource,
) -> Result<u64> {
    let mut frames = 0u64;
    loop {
        screen.refresh(player, assets)?;
        grid.clear();
        screen.ui.compose(grid)?;
        grid.flush(sink)?;
        frames += 1;

        let Some(key) = input.next_key()? else {
            debug!(target: "runtime", frames, "input_exhausted");
            return Ok(frames);
        };
        if screen.handle(key, player, assets)? == Flow::Exit {
            info!(target: "runtime", frames, "exit_requested");
            return Ok(frames);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    // Loaded before logging so the file's filter applies.
    let mut config = load_from(args.config.clone())?;
    let _log_guard = configure_logging(&config.file.log.filter);
    install_panic_hook();
    info!(
        target: "runtime",
        config_override = args.config.is_some(),
        assets_override = args.assets.is_some(),
        "startup"
    );

    let assets_root = args.assets.unwrap_or_else(|| config.file.assets.root.clone());
    let assets = AssetStore::new(assets_root, config.file.assets.fallback.clone());
    let mut player = Player::demo()?;

    let (cols, rows) = terminal_size()?;
    let (width, height) = config.apply_terminal(cols, rows);

    let mut screen = Screen::build(width, height, &player, &assets)
        .with_context(|| format!("demo screen does not fit a {width}x{height} surface"))?;
    let mut grid = CellGrid::new(width, height);

    let mut session = TerminalSession::open("cellui")?;
    let mut input = CrosstermInput::new();
    let frames = run_loop(
        &mut screen,
        &mut player,
        &assets,
        &mut grid,
        session.sink_mut(),
        &mut input,
    )?;
    session.close()?;
    info!(target: "runtime", frames, "shutdown");
    Ok(())
}
