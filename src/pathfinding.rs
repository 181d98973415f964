//! Breadth-first and depth-first maze solving.
//!
//! This module contains the resumable [`Search`], which performs one frontier pop per call to
//! [`Search::step`], and the [`Solver`], which runs searches to completion or tick by tick and
//! keeps the statistics of the latest run of each [`Algorithm`]. Both traversals share the same
//! code and differ only in which end of the frontier they pop from, so for a given maze the
//! incremental and the one-shot runs explore cells in exactly the same order.

use std::{
    collections::VecDeque,
    fmt,
    time::{Duration, Instant},
};

use log::{debug, info};

use crate::{
    labyrinth::MazeGrid,
    types::{Algorithm, Position, StepMode},
};

/// Receiver of the cells reported by an incremental search.
///
/// Renderers implement this to draw the exploration as it happens; the default
/// [`on_success`](SolveObserver::on_success) does nothing and exists for side effects such as a
/// sound cue.
pub trait SolveObserver {
    /// Called once for every processed cell and, on success, once for every path cell.
    fn on_cell(&mut self, position: Position, mode: StepMode);

    /// Called after the path cells of a successful search have been reported.
    fn on_success(&mut self, _path: &[Position]) {}
}

/// Observer that ignores every notification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Silent;

impl SolveObserver for Silent {
    fn on_cell(&mut self, _position: Position, _mode: StepMode) {}
}

/// Counters collected by one run of an algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Wall-clock time between the start of the run and its end.
    pub elapsed: Duration,
    /// Number of cells taken off the frontier.
    pub steps: usize,
    /// Number of cells discovered, the entry included.
    pub explored: usize,
}

/// Outcome of a single [`Search::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// A cell was processed and the search can go on.
    Explored(Position),
    /// The exit was taken off the frontier; holds the path from entry to exit inclusive.
    Found(Vec<Position>),
    /// The frontier ran dry without reaching the exit.
    Exhausted,
}

/// State of one BFS or DFS run over a maze.
///
/// The search does not borrow the maze; every [`step`](Self::step) takes it again. Callers must
/// not annotate or clear the maze while a search over it is in progress.
#[derive(Clone, Debug)]
pub struct Search {
    /// Frontier discipline.
    algorithm: Algorithm,
    /// Pending cells. BFS pops from the front, DFS from the back.
    frontier: VecDeque<Position>,
    /// Visited flags, indexed like the maze cells.
    visited: Vec<bool>,
    /// Discovery back-pointers, indexed like the maze cells. The entry has none.
    predecessors: Vec<Option<Position>>,
    /// Counters of this run.
    stats: Stats,
    /// Moment the run was created.
    started: Instant,
    /// Whether the run already reached the exit or ran dry.
    done: bool,
}

impl Search {
    /// Prepares a run starting from the maze entry.
    pub fn new(maze: &MazeGrid, algorithm: Algorithm) -> Self {
        let size = maze.cells().len();
        let mut search = Self {
            algorithm,
            frontier: VecDeque::new(),
            visited: vec![false; size],
            predecessors: vec![None; size],
            stats: Stats::default(),
            started: Instant::now(),
            done: false,
        };

        let start = maze.start();
        if let Some(index) = maze.index(start) {
            search.visit(index);
            search.frontier.push_back(start);
            search.stats.explored = 1;
        }

        search
    }

    /// Algorithm driving this run.
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Counters collected so far. `elapsed` is only filled in once the run is over.
    pub const fn stats(&self) -> Stats {
        self.stats
    }

    /// Whether the run already found the exit or exhausted the maze.
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Pops one cell from the frontier and processes it.
    ///
    /// The popped cell is reported to the observer as [`StepMode::Exploring`]. If it is the exit,
    /// every path cell is then reported as [`StepMode::OnPath`], followed by
    /// [`SolveObserver::on_success`]. Otherwise its unvisited passable neighbours are pushed in
    /// up, down, left, right order. Once the run is over every further call returns
    /// [`Step::Exhausted`] without touching the counters.
    pub fn step<Observer>(&mut self, maze: &MazeGrid, observer: &mut Observer) -> Step
    where
        Observer: SolveObserver + ?Sized,
    {
        if self.done {
            return Step::Exhausted;
        }

        let popped = match self.algorithm {
            Algorithm::Bfs => self.frontier.pop_front(),
            Algorithm::Dfs => self.frontier.pop_back(),
        };
        let Some(current) = popped else {
            self.finish();
            debug!("{} exhausted the maze after {} steps", self.algorithm, self.stats.steps);
            return Step::Exhausted;
        };

        self.stats.steps += 1;
        observer.on_cell(current, StepMode::Exploring);

        if current == maze.end() {
            self.finish();
            let path = self.reconstruct_path(maze, current);
            for &position in &path {
                observer.on_cell(position, StepMode::OnPath);
            }
            observer.on_success(&path);
            return Step::Found(path);
        }

        for neighbor in current.neighbors() {
            let Some(index) = maze.index(neighbor) else {
                continue;
            };
            if self.visited.get(index) == Some(&false) && maze.is_passable(neighbor) {
                self.visit(index);
                if let Some(slot) = self.predecessors.get_mut(index) {
                    *slot = Some(current);
                }
                self.frontier.push_back(neighbor);
                self.stats.explored += 1;
            }
        }

        Step::Explored(current)
    }

    /// Runs the search until it finds the exit or runs dry, returning the path or an empty one.
    pub fn run_to_end<Observer>(
        &mut self,
        maze: &MazeGrid,
        observer: &mut Observer,
    ) -> Vec<Position>
    where
        Observer: SolveObserver + ?Sized,
    {
        loop {
            match self.step(maze, observer) {
                Step::Explored(_) => {}
                Step::Found(path) => return path,
                Step::Exhausted => return Vec::new(),
            }
        }
    }

    /// Flags a cell as visited.
    fn visit(&mut self, index: usize) {
        if let Some(flag) = self.visited.get_mut(index) {
            *flag = true;
        }
    }

    /// Marks the run as over and freezes its elapsed time.
    fn finish(&mut self) {
        self.done = true;
        self.stats.elapsed = self.started.elapsed();
    }

    /// Walks the back-pointers from `end` to the entry and returns the path entry first.
    fn reconstruct_path(&self, maze: &MazeGrid, end: Position) -> Vec<Position> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(previous) = maze
            .index(current)
            .and_then(|index| self.predecessors.get(index).copied().flatten())
        {
            path.push(previous);
            current = previous;
        }
        path.reverse();

        path
    }
}

/// Outcome of a single [`Solver::tick`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// No incremental run is in progress.
    Idle,
    /// The active run processed one cell and is still going.
    Running,
    /// The active run reached the exit; holds the path.
    Found(Vec<Position>),
    /// The active run explored everything reachable without finding the exit.
    Exhausted,
}

/// BFS and DFS solver keeping the statistics of the latest run of each algorithm.
///
/// The solver owns no maze. One-shot runs go through [`solve`](Self::solve); incremental runs are
/// started with [`start`](Self::start) and advanced by an external timer through
/// [`tick`](Self::tick). Only one incremental run is active at a time.
#[derive(Debug, Default)]
pub struct Solver {
    /// Statistics of the latest finished BFS run.
    ///
    /// This field holds the figures of the last breadth-first run that found the exit or
    /// exhausted the maze. Runs still in progress or cancelled never end up here, so the
    /// comparison only ever sees complete timings.
    bfs: Option<Stats>,
    /// Statistics of the latest finished DFS run.
    dfs: Option<Stats>,
    /// Incremental run in progress.
    ///
    /// This field holds the search advanced by [`tick`](Self::tick). It carries its own live
    /// counters until it ends and is dropped as soon as it does.
    active: Option<Search>,
}

impl Solver {
    /// Creates a solver with no recorded statistics.
    pub const fn new() -> Self {
        Self {
            bfs: None,
            dfs: None,
            active: None,
        }
    }

    /// Solves the maze in one go and records the run statistics.
    ///
    /// Returns the path from entry to exit inclusive, or an empty vector when the exit cannot be
    /// reached.
    pub fn solve(&mut self, maze: &MazeGrid, algorithm: Algorithm) -> Vec<Position> {
        let mut search = Search::new(maze, algorithm);
        let path = search.run_to_end(maze, &mut Silent);
        self.record(algorithm, search.stats());
        log_outcome(algorithm, &path, search.stats());

        path
    }

    /// Solves the maze with breadth-first search.
    pub fn solve_bfs(&mut self, maze: &MazeGrid) -> Vec<Position> {
        self.solve(maze, Algorithm::Bfs)
    }

    /// Solves the maze with depth-first search.
    pub fn solve_dfs(&mut self, maze: &MazeGrid) -> Vec<Position> {
        self.solve(maze, Algorithm::Dfs)
    }

    /// Starts an incremental run, replacing any run still in progress.
    ///
    /// The recorded statistics of `algorithm` are only replaced once the run ends; until then the
    /// live counters are available through [`active_stats`](Self::active_stats).
    pub fn start(&mut self, maze: &MazeGrid, algorithm: Algorithm) {
        self.active = Some(Search::new(maze, algorithm));
    }

    /// Advances the incremental run by exactly one frontier pop.
    pub fn tick<Observer>(&mut self, maze: &MazeGrid, observer: &mut Observer) -> Tick
    where
        Observer: SolveObserver + ?Sized,
    {
        let Some(search) = self.active.as_mut() else {
            return Tick::Idle;
        };

        let step = search.step(maze, observer);
        let algorithm = search.algorithm();
        let stats = search.stats();

        match step {
            Step::Explored(_) => Tick::Running,
            Step::Found(path) => {
                self.active = None;
                self.record(algorithm, stats);
                log_outcome(algorithm, &path, stats);
                Tick::Found(path)
            }
            Step::Exhausted => {
                self.active = None;
                self.record(algorithm, stats);
                log_outcome(algorithm, &[], stats);
                Tick::Exhausted
            }
        }
    }

    /// Drops the incremental run in progress, if any.
    ///
    /// The unfinished run leaves no trace: the recorded statistics, and so the comparison, are
    /// those of the last finished runs.
    pub fn cancel(&mut self) {
        self.active = None;
    }

    /// Algorithm of the incremental run in progress.
    pub fn running(&self) -> Option<Algorithm> {
        self.active.as_ref().map(Search::algorithm)
    }

    /// Live counters of the incremental run in progress. `elapsed` stays zero until it ends.
    pub fn active_stats(&self) -> Option<Stats> {
        self.active.as_ref().map(Search::stats)
    }

    /// Statistics of the latest finished run of `algorithm`, if one ever finished.
    pub const fn stats(&self, algorithm: Algorithm) -> Option<Stats> {
        match algorithm {
            Algorithm::Bfs => self.bfs,
            Algorithm::Dfs => self.dfs,
        }
    }

    /// Compares the elapsed times of the latest finished BFS and DFS runs.
    pub fn comparison(&self) -> Comparison {
        Comparison::new(
            self.bfs.map(|stats| stats.elapsed),
            self.dfs.map(|stats| stats.elapsed),
        )
    }

    /// Forgets every recorded statistic and any run in progress.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Stores the statistics of a run.
    fn record(&mut self, algorithm: Algorithm, stats: Stats) {
        match algorithm {
            Algorithm::Bfs => self.bfs = Some(stats),
            Algorithm::Dfs => self.dfs = Some(stats),
        }
    }
}

/// Logs the end of a run.
fn log_outcome(algorithm: Algorithm, path: &[Position], stats: Stats) {
    if path.is_empty() {
        info!("{algorithm} found no path ({} steps)", stats.steps);
    } else {
        info!(
            "{algorithm} found a {}-cell path in {:?} ({} steps, {} cells explored)",
            path.len(),
            stats.elapsed,
            stats.steps,
            stats.explored
        );
    }
}

/// Timing comparison between the latest BFS and DFS runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// Neither algorithm ran yet.
    NotRun,
    /// Only BFS ran.
    OnlyBfs(Duration),
    /// Only DFS ran.
    OnlyDfs(Duration),
    /// Both ran and BFS took less time.
    BfsFaster {
        /// BFS elapsed time.
        bfs: Duration,
        /// DFS elapsed time.
        dfs: Duration,
    },
    /// Both ran and DFS took less time.
    DfsFaster {
        /// BFS elapsed time.
        bfs: Duration,
        /// DFS elapsed time.
        dfs: Duration,
    },
    /// Both ran and took the same time.
    Equal(Duration),
}

impl Comparison {
    /// Builds the comparison from the optional elapsed times of each algorithm.
    pub fn new(bfs: Option<Duration>, dfs: Option<Duration>) -> Self {
        match (bfs, dfs) {
            (None, None) => Self::NotRun,
            (Some(bfs), None) => Self::OnlyBfs(bfs),
            (None, Some(dfs)) => Self::OnlyDfs(dfs),
            (Some(bfs), Some(dfs)) if bfs < dfs => Self::BfsFaster { bfs, dfs },
            (Some(bfs), Some(dfs)) if dfs < bfs => Self::DfsFaster { bfs, dfs },
            (Some(bfs), Some(_)) => Self::Equal(bfs),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRun => formatter.write_str("no algorithm ran yet"),
            Self::OnlyBfs(bfs) => write!(formatter, "BFS {bfs:.3?} (DFS not run)"),
            Self::OnlyDfs(dfs) => write!(formatter, "DFS {dfs:.3?} (BFS not run)"),
            Self::BfsFaster { bfs, dfs } => {
                write!(formatter, "BFS is faster ({bfs:.3?} vs {dfs:.3?})")
            }
            Self::DfsFaster { bfs, dfs } => {
                write!(formatter, "DFS is faster ({dfs:.3?} vs {bfs:.3?})")
            }
            Self::Equal(elapsed) => write!(formatter, "BFS and DFS are equal ({elapsed:.3?})"),
        }
    }
}
