//! Maze grid storage, accessors and path annotation.
//!
//! This module contains the [`MazeGrid`] type, which owns the cells of a rectangular maze together
//! with the coordinates of its entry and exit. Grids are either carved by the
//! [`generator`](crate::generator) or read from the fixed-format text handled by the
//! [`file_loader`](crate::file_loader); after that the only mutation left to callers is adding and
//! clearing path annotations.

use std::{fmt, str::FromStr};

use rand::Rng;

use crate::{
    file_loader::{self, LoadError},
    generator,
    types::{Cell, Position},
};

/// Number of rows every maze file must contain.
pub const FILE_HEIGHT: usize = 10;

/// Number of characters every row of a maze file must contain.
pub const FILE_WIDTH: usize = 19;

/// Rectangular maze made of [`Cell`] symbols with one entry and one exit.
///
/// Cells are stored row-major in a single vector, so the cell at `(row, col)` lives at index
/// `row * width + col`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    /// Row-major cell storage.
    ///
    /// This field holds the `width * height` cells of the maze, one row after the other. Path
    /// annotations live here too, as [`Cell::Marked`] overlays of corridor cells.
    cells: Vec<Cell>,
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Coordinates of the entry cell.
    ///
    /// This field holds the position where every search starts. Generated mazes always have it at
    /// [`START`](crate::generator::START); loaded mazes have it wherever the `S` was read.
    start: Position,
    /// Coordinates of the exit cell.
    end: Position,
}

impl MazeGrid {
    /// Builds a grid where every cell holds the same symbol. Entry and exit both sit at the
    /// origin until the caller places them.
    pub(crate) fn filled(height: usize, width: usize, cell: Cell) -> Self {
        Self {
            cells: vec![cell; height * width],
            width,
            height,
            start: Position::default(),
            end: Position::default(),
        }
    }

    /// Assembles a grid from already validated row-major cells.
    pub(crate) const fn from_parts(
        height: usize,
        width: usize,
        cells: Vec<Cell>,
        start: Position,
        end: Position,
    ) -> Self {
        Self {
            cells,
            width,
            height,
            start,
            end,
        }
    }

    /// Carves a new random maze of the given size using randomized Prim.
    ///
    /// The entry is always placed at `(1, 1)` and the exit on a random corridor cell. Sizes below
    /// three in either dimension are not rejected; they produce a trivial or fully walled grid.
    pub fn generate<Source>(height: usize, width: usize, rng: &mut Source) -> Self
    where
        Source: Rng + ?Sized,
    {
        generator::generate(height, width, rng)
    }

    /// Carves a new random maze using the thread-local random number generator.
    pub fn random(height: usize, width: usize) -> Self {
        Self::generate(height, width, &mut rand::thread_rng())
    }

    /// Number of columns in the grid.
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows in the grid.
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Coordinates of the entry cell.
    pub const fn start(&self) -> Position {
        self.start
    }

    /// Coordinates of the exit cell.
    pub const fn end(&self) -> Position {
        self.end
    }

    /// Whether the position lies inside the grid.
    pub const fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.col < self.width
    }

    /// Linear index of a position, or `None` when it falls outside the grid.
    pub const fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row * self.width + position.col)
        } else {
            None
        }
    }

    /// Symbol at the given position, or `None` when it falls outside the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index))
            .copied()
    }

    /// Whether a search may step onto the given position.
    pub fn is_passable(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_passable)
    }

    /// Read-only row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Overwrites a single cell. Positions outside the grid are ignored.
    pub(crate) fn set(&mut self, position: Position, cell: Cell) {
        if let Some(slot) = self
            .index(position)
            .and_then(|index| self.cells.get_mut(index))
        {
            *slot = cell;
        }
    }

    /// Places the entry cell, recording its coordinates.
    pub(crate) fn set_start(&mut self, position: Position) {
        self.start = position;
        self.set(position, Cell::Start);
    }

    /// Places the exit cell, recording its coordinates.
    pub(crate) fn set_end(&mut self, position: Position) {
        self.end = position;
        self.set(position, Cell::End);
    }

    /// Marks every corridor cell of `path` with [`Cell::Marked`].
    ///
    /// Entry, exit and wall cells are left untouched, so clearing the annotations afterwards
    /// restores the grid exactly. A path that crosses a wall, which no search of this crate
    /// produces, therefore leaves the wall as it is.
    pub fn annotate(&mut self, path: &[Position]) {
        for &position in path {
            if let Some(slot) = self
                .index(position)
                .and_then(|index| self.cells.get_mut(index))
            {
                if matches!(slot, Cell::Open) {
                    *slot = Cell::Marked;
                }
            }
        }
    }

    /// Turns every [`Cell::Marked`] cell back into [`Cell::Open`].
    pub fn clear_annotations(&mut self) {
        for cell in &mut self.cells {
            if *cell == Cell::Marked {
                *cell = Cell::Open;
            }
        }
    }

    /// Renders the grid in the unpadded maze file format.
    ///
    /// Annotations are rendered as plain corridor cells so the output reloads into the
    /// un-annotated grid.
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity(self.cells.len() + self.height);
        for row in self.rows() {
            for &cell in row {
                let cell = if cell == Cell::Marked { Cell::Open } else { cell };
                text.push(cell.symbol());
            }
            text.push('\n');
        }

        text
    }
}

/// Human-readable view with one space after every cell, annotations shown as `+`.
impl fmt::Display for MazeGrid {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(formatter, "{cell} ")?;
            }
            writeln!(formatter)?;
        }

        Ok(())
    }
}

impl FromStr for MazeGrid {
    type Err = LoadError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        file_loader::parse_maze(input)
    }
}
