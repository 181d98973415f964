//! Type definitions shared by the maze, the solver and the terminal front-end.

use std::fmt;

/// Orthogonal neighbour offsets as `(row, col)` deltas, in the order up, down, left, right.
///
/// Both the generator and the solver walk neighbours in this order, which is what makes the
/// exploration order of a search reproducible for a given maze.
pub const DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Symbol stored in a single maze cell.
///
/// The textual form of each variant is the one used by the fixed-format maze files and by the
/// console renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable cell, written as `#`.
    Wall,
    /// Carved corridor cell, written as a space.
    Open,
    /// The single entry cell, written as `S`.
    Start,
    /// The single exit cell, written as `E`.
    End,
    /// Corridor cell annotated as part of a path, written as `+`.
    ///
    /// This variant only ever overlays an [`Cell::Open`] cell and is removed again by
    /// [`MazeGrid::clear_annotations`](crate::labyrinth::MazeGrid::clear_annotations).
    Marked,
}

impl Cell {
    /// Returns the character used for this cell in the maze text format.
    pub const fn symbol(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => ' ',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Marked => '+',
        }
    }

    /// Parses a maze text character back into a cell, if it belongs to the alphabet.
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Self::Wall),
            ' ' => Some(Self::Open),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            '+' => Some(Self::Marked),
            _ => None,
        }
    }

    /// Whether a search may step onto this cell. Everything except a wall is passable.
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.symbol())
    }
}

/// A `(row, col)` coordinate into a maze grid.
///
/// A position carries no bounds of its own; validity is always checked against the grid it is
/// used with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Zero-based row index, growing downwards.
    pub row: usize,
    /// Zero-based column index, growing to the right.
    pub col: usize,
}

impl Position {
    /// Builds a position from its row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves the position by a `(row, col)` delta, returning `None` when either coordinate would
    /// underflow or overflow.
    pub const fn offset(self, delta: (isize, isize)) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(delta.0) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(delta.1) else {
            return None;
        };

        Some(Self { row, col })
    }

    /// Returns the orthogonal neighbours of this position in [`DIRECTIONS`] order.
    ///
    /// Neighbours that would have a negative coordinate are skipped; the upper bounds are left to
    /// the caller, which knows the grid dimensions.
    pub fn neighbors(self) -> impl Iterator<Item = Self> {
        DIRECTIONS
            .into_iter()
            .filter_map(move |delta| self.offset(delta))
    }

    /// Grid distance to another position ignoring walls.
    pub const fn manhattan(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.row, self.col)
    }
}

/// Graph traversal used to solve a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Breadth-first search, backed by a FIFO frontier. Always finds a shortest path.
    Bfs,
    /// Depth-first search, backed by a LIFO frontier.
    Dfs,
}

impl Algorithm {
    /// Both algorithms, in the order the console summary reports them.
    pub const ALL: [Self; 2] = [Self::Bfs, Self::Dfs];

    /// Short upper-case label of the algorithm.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Tag attached to every cell reported by an incremental search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepMode {
    /// The cell was taken off the frontier and processed.
    Exploring,
    /// The cell belongs to the final start-to-end path.
    OnPath,
}

/// Enumeration of available application screens.
///
/// This enumeration holds information about the current screen of the terminal front-end. It is
/// used to determine which screen to render and what actions to take based on user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    /// Main menu screen with the currently highlighted entry.
    MainMenu(MenuItem),
    /// Maze view where BFS and DFS runs are animated.
    InGame,
}

/// Main menu navigation options.
///
/// This enumeration holds the different items in the main menu, in the order they are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MenuItem {
    /// "Solve" menu option, which opens the maze view.
    Solve,
    /// "New maze" menu option, which regenerates the current maze.
    NewMaze,
    /// "Quit" menu option.
    Quit,
}

impl MenuItem {
    /// Every menu entry in drawing order.
    pub(crate) const ALL: [Self; 3] = [Self::Solve, Self::NewMaze, Self::Quit];

    /// Returns the label drawn for the menu entry.
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Self::Solve => "Solve",
            Self::NewMaze => "New maze",
            Self::Quit => "Quit",
        }
    }

    /// Returns the entry below this one, staying on the last entry.
    pub(crate) const fn next(self) -> Self {
        match self {
            Self::Solve => Self::NewMaze,
            Self::NewMaze | Self::Quit => Self::Quit,
        }
    }

    /// Returns the entry above this one, staying on the first entry.
    pub(crate) const fn previous(self) -> Self {
        match self {
            Self::Solve | Self::NewMaze => Self::Solve,
            Self::Quit => Self::NewMaze,
        }
    }
}
