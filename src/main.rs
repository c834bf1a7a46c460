//! Terminal Snake runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_snake::term`.
//! The game advances at a fixed tick rate; input is polled between ticks.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use crossterm::event::{self, Event};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_snake::core::{GameConfig, GameSnapshot, GameState, Variant};
use tui_snake::input::{handle_key_event, is_key_press, should_quit};
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::types::{GameAction, COLS, ROWS, TICK_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    /// Apples only
    Classic,
    /// Apples plus the occasional power item
    PowerUp,
}

impl From<VariantArg> for Variant {
    fn from(v: VariantArg) -> Self {
        match v {
            VariantArg::Classic => Variant::Classic,
            VariantArg::PowerUp => Variant::PowerUp,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "tui-snake")]
#[command(about = "Classic snake in the terminal", long_about = None)]
struct Cli {
    /// Board height in cells
    #[arg(long, env = "SNAKE_ROWS", default_value_t = ROWS)]
    rows: u16,

    /// Board width in cells
    #[arg(long, env = "SNAKE_COLS", default_value_t = COLS)]
    cols: u16,

    /// Rule set
    #[arg(long, env = "SNAKE_VARIANT", value_enum, default_value_t = VariantArg::PowerUp)]
    variant: VariantArg,

    /// RNG seed (random when omitted)
    #[arg(long, env = "SNAKE_SEED")]
    seed: Option<u32>,

    /// Write logs to this file; logging is off otherwise
    #[arg(long, env = "SNAKE_LOG_PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = GameConfig::new(cli.rows, cli.cols)
        .context("invalid board size")?
        .with_variant(cli.variant.into())
        .with_seed(seed);

    info!(
        rows = config.rows(),
        cols = config.cols(),
        variant = config.variant().as_str(),
        seed,
        "session started"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to `path` only; stdout belongs to the game.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tui_snake=info,tui_snake_core=debug".into()),
        )
        .try_init()
        .context("failed to install log subscriber")?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let mut game = GameState::new(config);
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_key_press(&key) => {
                    if should_quit(key) {
                        break;
                    }
                    if let Some(action) = handle_key_event(key) {
                        // Only a restart gets past the game-over screen.
                        if !game.game_over() || action == GameAction::Restart {
                            let taken = game.apply_action(action);
                            debug!(action = action.as_str(), taken, "input");
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            if !game.game_over() {
                game.update();
            }
        }
    }

    info!(
        episode = game.episode_id(),
        length = game.display_length(),
        high_score = game.high_score(),
        "session ended"
    );
    Ok(())
}
