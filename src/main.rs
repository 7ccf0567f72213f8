use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::GameConfig;
use grid_snake::game::{GameState, GameStatus};
use grid_snake::input::{GameInput, poll_input};
use grid_snake::score::BestScore;
use grid_snake::terminal_runtime::{TerminalView, install_panic_hook};
use grid_snake::view::View;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(version, about = "Grid Snake in the terminal")]
struct Cli {
    /// Cells per side of the square board.
    #[arg(long = "tile-count")]
    tile_count: Option<u16>,

    /// Seed for a reproducible food sequence.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file; flags given here take precedence.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable power-up spawning.
    #[arg(long = "no-power-ups")]
    no_power_ups: bool,

    /// Write logs to this file.
    #[arg(long = "log-file")]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = cli.log_file.as_deref() {
        init_logging(path)?;
    }

    let config = resolve_config(&cli)?;
    let best = match BestScore::load() {
        Ok(best) => best,
        Err(error) => {
            eprintln!("Warning: could not load best score: {error}");
            warn!(%error, "best score unavailable, starting from zero");
            BestScore::empty()
        }
    };

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(config, seed),
        None => GameState::new(config),
    };

    install_panic_hook();
    let mut view = TerminalView::enter()?;
    run(&mut view, state, best)
}

fn resolve_config(cli: &Cli) -> io::Result<GameConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };

    if let Some(tile_count) = cli.tile_count {
        config.tile_count = tile_count;
    }
    if cli.no_power_ups {
        config.power_ups = false;
    }

    config.validate()?;
    info!(?config, "configuration resolved");
    Ok(config)
}

fn run<V: View>(view: &mut V, mut state: GameState, mut best: BestScore) -> io::Result<()> {
    let mut last_tick = Instant::now();
    let mut last_status = state.status;
    // Best score as it stood before the current game ended.
    let mut shown_best = best.value();

    loop {
        view.render(&state, shown_best)?;

        let timeout = state.tick_interval().saturating_sub(last_tick.elapsed());
        if let Some(input) = poll_input(timeout)? {
            if input == GameInput::Quit {
                break;
            }
            state.apply_input(input);
        }

        if last_tick.elapsed() >= state.tick_interval() {
            state.tick();
            last_tick = Instant::now();
        }

        if state.status != last_status {
            if state.status == GameStatus::Ended {
                match best.submit(state.score) {
                    Ok(true) => info!(score = state.score, "new best score saved"),
                    Ok(false) => {}
                    Err(error) => warn!(%error, "failed to save best score"),
                }
            } else {
                shown_best = best.value();
            }
            last_status = state.status;
        }
    }

    Ok(())
}

fn init_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grid_snake=info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
