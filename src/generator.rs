//! Randomized Prim maze generation.
//!
//! Generation starts from a grid made entirely of walls, opens the entry cell at `(1, 1)` and then
//! repeatedly draws a random wall from the [`Frontier`]. A wall is carved only when it touches
//! exactly one corridor cell, which keeps the carved region a tree: every pair of corridor cells
//! is joined by exactly one path.

use log::debug;
use rand::{seq::SliceRandom as _, Rng};

use crate::{
    labyrinth::MazeGrid,
    types::{Cell, Position},
};

/// Fixed coordinates of the maze entry.
pub const START: Position = Position::new(1, 1);

/// Unordered set of wall cells adjacent to the carved region.
///
/// Walls are kept in a plain vector and removed by swapping the chosen element with the last
/// one, so drawing a random wall is constant time. The same wall may be queued more than once;
/// duplicates are simply rejected by the carve test when drawn again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frontier {
    /// Queued wall positions in no particular order.
    walls: Vec<Position>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub const fn new() -> Self {
        Self { walls: Vec::new() }
    }

    /// Queues a wall position.
    pub fn push(&mut self, position: Position) {
        self.walls.push(position);
    }

    /// Removes and returns a uniformly chosen wall, or `None` once the frontier is empty.
    pub fn pop_random<Source>(&mut self, rng: &mut Source) -> Option<Position>
    where
        Source: Rng + ?Sized,
    {
        if self.walls.is_empty() {
            return None;
        }

        let index = rng.gen_range(0..self.walls.len());
        Some(self.walls.swap_remove(index))
    }

    /// Number of queued walls, duplicates included.
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether no wall is left to draw.
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Queues every in-bounds wall neighbour of `position`.
    fn push_wall_neighbors(&mut self, grid: &MazeGrid, position: Position) {
        for neighbor in position.neighbors() {
            if grid.cell(neighbor) == Some(Cell::Wall) {
                self.push(neighbor);
            }
        }
    }
}

/// Whether a wall may be carved: exactly one of its orthogonal neighbours is already a corridor.
///
/// A wall touching two or more corridors would join separate branches and create a loop.
fn is_perforable(grid: &MazeGrid, position: Position) -> bool {
    position
        .neighbors()
        .filter(|&neighbor| grid.cell(neighbor) == Some(Cell::Open))
        .count()
        == 1
}

/// Picks a random corridor cell other than the entry and turns it into the exit.
///
/// When nothing was carved the exit falls back to `(height - 2, width - 2)`, whatever that cell
/// holds.
fn place_exit<Source>(grid: &mut MazeGrid, rng: &mut Source)
where
    Source: Rng + ?Sized,
{
    let start = grid.start();
    let candidates: Vec<Position> = (0..grid.height())
        .flat_map(|row| (0..grid.width()).map(move |col| Position::new(row, col)))
        .filter(|&position| position != start && grid.cell(position) == Some(Cell::Open))
        .collect();

    let exit = if let Some(&exit) = candidates.choose(rng) {
        exit
    } else {
        let fallback = Position::new(
            grid.height().saturating_sub(2),
            grid.width().saturating_sub(2),
        );
        debug!("no corridor carved, placing the exit at {fallback}");
        fallback
    };

    grid.set_end(exit);
}

/// Generates a `height` by `width` maze with randomized Prim.
///
/// See [`MazeGrid::generate`] for the public entry point.
pub(crate) fn generate<Source>(height: usize, width: usize, rng: &mut Source) -> MazeGrid
where
    Source: Rng + ?Sized,
{
    let mut grid = MazeGrid::filled(height, width, Cell::Wall);
    let mut frontier = Frontier::new();

    grid.set(START, Cell::Open);
    frontier.push_wall_neighbors(&grid, START);

    let mut carved = 1_usize;
    while let Some(wall) = frontier.pop_random(rng) {
        if is_perforable(&grid, wall) {
            grid.set(wall, Cell::Open);
            frontier.push_wall_neighbors(&grid, wall);
            carved += 1;
        }
    }

    grid.set_start(START);
    place_exit(&mut grid, rng);

    debug!(
        "generated {height}x{width} maze: {carved} corridor cells, exit at {}",
        grid.end()
    );

    grid
}
