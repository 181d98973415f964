//! Maze generation and BFS/DFS solving with a terminal front-end.
//!
//! The library carves rectangular mazes with a randomized Prim's algorithm
//! ([`MazeGrid::generate`]), loads fixed-format maze files ([`file_loader`]) and solves them with
//! breadth-first or depth-first search ([`Solver`]). Searches can run in one shot or one frontier
//! pop at a time, which is what the Ratatui front-end ([`App`]) animates.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod config;
pub mod file_loader;
pub mod generator;
pub mod labyrinth;
pub mod pathfinding;
pub mod report;
pub mod types;

mod animation;
mod app;
mod events;
mod ui;

pub use app::App;
pub use labyrinth::MazeGrid;
pub use pathfinding::Solver;
