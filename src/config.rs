//! Command-line configuration and logger setup.

use std::{path::PathBuf, time::Duration};

use clap::Parser;
use color_eyre::eyre::Result;
use log::{info, LevelFilter};
use rand::{rngs::StdRng, SeedableRng as _};

use crate::{
    file_loader,
    labyrinth::{MazeGrid, FILE_HEIGHT, FILE_WIDTH},
};

/// Shortest delay between two animation ticks, in milliseconds.
pub const MIN_DELAY_MS: u64 = 50;

/// Longest delay between two animation ticks, in milliseconds.
pub const MAX_DELAY_MS: u64 = 500;

/// Amount by which the delay changes on each key press in the terminal UI, in milliseconds.
pub const DELAY_STEP_MS: u64 = 50;

/// Command-line options.
#[derive(Clone, Debug, Parser, PartialEq, Eq)]
#[command(version, about)]
pub struct Cli {
    /// Rows of a generated maze
    #[arg(long, default_value_t = FILE_HEIGHT)]
    pub height: usize,
    /// Columns of a generated maze
    #[arg(long, default_value_t = FILE_WIDTH)]
    pub width: usize,
    /// Load the maze from a 10x19 text file instead of generating one
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Seed for reproducible maze generation
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Milliseconds between two animation ticks
    #[arg(
        short,
        long,
        default_value_t = 100,
        value_parser = clap::value_parser!(u64).range(MIN_DELAY_MS..=MAX_DELAY_MS)
    )]
    pub delay: u64,
    /// Print a BFS/DFS report to standard output instead of opening the terminal UI
    #[arg(long)]
    pub summary: bool,
}

impl Cli {
    /// Random source for maze generation: seeded when `--seed` was given, from OS entropy
    /// otherwise.
    pub fn rng(&self) -> StdRng {
        self.seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
    }

    /// Loads the maze named by `--file` or generates one of the requested size.
    ///
    /// # Errors
    ///
    /// Returns an error when the maze file cannot be read or is malformed.
    pub fn build_maze(&self, rng: &mut StdRng) -> Result<MazeGrid> {
        if let Some(path) = &self.file {
            let maze = file_loader::load_path(path)?;
            info!("loaded maze from {}", path.display());
            return Ok(maze);
        }

        Ok(MazeGrid::generate(self.height, self.width, rng))
    }

    /// Delay between two animation ticks.
    pub const fn tick_delay(&self) -> Duration {
        Duration::from_millis(self.delay)
    }
}

/// Initialises the global logger.
///
/// Only warnings and errors are shown by default; `RUST_LOG` overrides the level, for example
/// `RUST_LOG=labyrinsolve=debug`.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}
