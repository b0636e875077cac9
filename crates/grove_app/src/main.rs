//! # grove_app
//!
//! Runs one of the two games on the grove ECS.
//!
//! ## Startup Sequence
//!
//! 1. Load the [`GameConfig`] (JSON file, then command-line overrides).
//! 2. Populate a fresh registry with the scenario for the chosen mode.
//! 3. Build the schedule and enter the tick loop until the game halts or the
//!    tick limit is reached.

mod render;
mod scenario;
mod scheduler;
mod tick;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use grove_system::{GameConfig, GameMode, TracingSink};
use grove_world::Registry;
use tracing::info;
use tracing_subscriber::EnvFilter;

use render::JsonLinesRenderer;
use tick::TickLoop;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Players walking through trees, one step per turn.
    Trample,
    /// Enemy ships chasing the player in a scrolling field.
    Scroller,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Trample => GameMode::Trample,
            Mode::Scroller => GameMode::Scroller,
        }
    }
}

#[derive(Parser)]
#[command(name = "grove_app", about = "Tick-driven ECS games: trample and scroller")]
struct Args {
    /// JSON config file; missing fields take their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Game to run (overrides the config file)
    #[arg(short, long, value_enum)]
    mode: Option<Mode>,

    /// Stop after this many ticks, 0 for no limit
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Delay between ticks in milliseconds for the chosen mode
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Write every frame as a line of JSON to this file
    #[arg(long)]
    frames: Option<PathBuf>,
}

impl Args {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if let Some(max_ticks) = self.max_ticks {
            config.max_ticks = max_ticks;
        }
        if let Some(interval) = self.interval_ms {
            match config.mode {
                GameMode::Trample => config.tick_interval_ms = interval,
                GameMode::Scroller => config.frame_interval_ms = interval,
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("grove_app=info".parse()?)
                .add_directive("grove::log=info".parse()?),
        )
        .init();

    let args = Args::parse();
    let config = args.game_config()?;
    info!(mode = ?config.mode, interval_ms = config.interval_ms(), "grove starting");

    let mut registry = Registry::new();
    scenario::populate(&mut registry, &config);

    let mut tick_loop = TickLoop::new(config, registry, TracingSink);
    if let Some(path) = &args.frames {
        let file = File::create(path)
            .with_context(|| format!("creating frame file {}", path.display()))?;
        info!(path = %path.display(), "writing frames");
        tick_loop = tick_loop.with_renderer(JsonLinesRenderer::new(BufWriter::new(file)));
    }

    let ticks = tick_loop.run().await;

    info!(ticks, halted = tick_loop.is_halted(), "grove shut down");
    Ok(())
}
