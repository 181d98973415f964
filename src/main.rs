//! This crate contains the source code for the binary of the maze solver labyrinsolve.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]
#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use std::io;

use clap::Parser as _;
use color_eyre::{eyre::Result, install};
use labyrinsolve::{
    config::{init_logging, Cli},
    report, App, Solver,
};

fn main() -> Result<()> {
    install()?;
    init_logging();

    let cli = Cli::parse();
    let mut rng = cli.rng();
    let mut maze = cli.build_maze(&mut rng)?;

    if cli.summary {
        return report::write_summary(&mut io::stdout().lock(), &mut maze, &mut Solver::new());
    }

    let mut terminal = ratatui::init();
    let result = App::new(maze, rng, cli.tick_delay()).run(&mut terminal);
    ratatui::restore();

    result
}
