//! Timer-driven animation of incremental solver runs.
//!
//! This module contains the state the terminal front-end keeps while a BFS or DFS run is being
//! animated: the delay between two ticks, the cells explored so far and the final path once it
//! is known. The animation collects cells by observing the solver, so it never touches the maze.

use std::time::{Duration, Instant};

use crate::{
    config::{DELAY_STEP_MS, MAX_DELAY_MS, MIN_DELAY_MS},
    labyrinth::MazeGrid,
    pathfinding::{SolveObserver, Solver},
    types::{Algorithm, Position, StepMode},
};

/// Animation state manager for solver visualization.
///
/// This structure paces the ticks of the solver's incremental run and keeps the cells reported
/// so far so the UI can redraw them on every frame.
#[derive(Debug)]
pub(crate) struct AnimationManager {
    /// Delay between two solver ticks.
    ///
    /// This field holds the pace of the animation. It is changed in fixed steps from the keyboard
    /// and always stays within the bounds accepted on the command line.
    pub(crate) delay: Duration,
    /// Timestamp of the last solver tick.
    pub(crate) last_update_time: Instant,
    /// Algorithm of the latest animated run, kept after the run ends so its result stays drawn.
    pub(crate) algorithm: Option<Algorithm>,
    /// Cells taken off the frontier so far, in processing order.
    pub(crate) explored: Vec<Position>,
    /// Final path of the latest run, empty until the exit is reached.
    pub(crate) path: Vec<Position>,
    /// Set when a run succeeds and cleared once the success cue was played.
    pub(crate) chime: bool,
}

impl AnimationManager {
    /// Creates an idle animation ticking every `delay`.
    pub(crate) fn new(delay: Duration) -> Self {
        Self {
            delay,
            last_update_time: Instant::now(),
            algorithm: None,
            explored: Vec::new(),
            path: Vec::new(),
            chime: false,
        }
    }

    /// Starts animating a fresh run of `algorithm`, dropping whatever was drawn before.
    pub(crate) fn start(&mut self, solver: &mut Solver, maze: &MazeGrid, algorithm: Algorithm) {
        self.clear();
        self.algorithm = Some(algorithm);
        solver.start(maze, algorithm);
    }

    /// Forgets every drawn cell. The tick delay is kept.
    pub(crate) fn clear(&mut self) {
        self.algorithm = None;
        self.explored.clear();
        self.path.clear();
        self.chime = false;
        self.last_update_time = Instant::now();
    }

    /// Ticks the solver once if enough time has passed since the previous tick.
    pub(crate) fn update(&mut self, solver: &mut Solver, maze: &MazeGrid) {
        if solver.running().is_none() || self.last_update_time.elapsed() < self.delay {
            return;
        }

        self.last_update_time = Instant::now();
        let _ = solver.tick(maze, self);
    }

    /// Shortens the tick delay by one step.
    pub(crate) fn speed_up(&mut self) {
        let millis = self.delay_millis().saturating_sub(DELAY_STEP_MS);
        self.delay = Duration::from_millis(millis.max(MIN_DELAY_MS));
    }

    /// Lengthens the tick delay by one step.
    pub(crate) fn slow_down(&mut self) {
        let millis = self.delay_millis().saturating_add(DELAY_STEP_MS);
        self.delay = Duration::from_millis(millis.min(MAX_DELAY_MS));
    }

    /// Tick delay in whole milliseconds.
    pub(crate) fn delay_millis(&self) -> u64 {
        u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns whether a success cue is pending and clears it.
    pub(crate) fn take_chime(&mut self) -> bool {
        std::mem::take(&mut self.chime)
    }
}

impl SolveObserver for AnimationManager {
    fn on_cell(&mut self, position: Position, mode: StepMode) {
        match mode {
            StepMode::Exploring => self.explored.push(position),
            StepMode::OnPath => self.path.push(position),
        }
    }

    fn on_success(&mut self, _path: &[Position]) {
        self.chime = true;
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng as _};

    use super::*;

    /// Drives the animation until the solver has no active run left.
    fn run_to_completion(animation: &mut AnimationManager, solver: &mut Solver, maze: &MazeGrid) {
        while solver.running().is_some() {
            animation.update(solver, maze);
        }
    }

    #[test]
    fn test_animation_collects_the_same_path_as_a_direct_solve() {
        let maze = MazeGrid::generate(10, 19, &mut StdRng::seed_from_u64(31));
        let expected = Solver::new().solve(&maze, Algorithm::Bfs);

        let mut solver = Solver::new();
        let mut animation = AnimationManager::new(Duration::ZERO);
        animation.start(&mut solver, &maze, Algorithm::Bfs);
        run_to_completion(&mut animation, &mut solver, &maze);

        assert_eq!(animation.path, expected, "the animated path is the solved path");
        assert_eq!(animation.explored.last(), Some(&maze.end()), "the exit is explored last");
        assert_eq!(
            animation.explored.len(),
            solver.stats(Algorithm::Bfs).map(|stats| stats.steps).unwrap_or_default(),
            "one explored cell per step"
        );
        assert!(animation.take_chime(), "success requests a cue");
        assert!(!animation.take_chime(), "the cue is played once");
    }

    #[test]
    fn test_update_waits_for_the_delay() {
        let maze = MazeGrid::generate(10, 19, &mut StdRng::seed_from_u64(32));
        let mut solver = Solver::new();
        let mut animation = AnimationManager::new(Duration::from_secs(3600));

        animation.start(&mut solver, &maze, Algorithm::Dfs);
        animation.update(&mut solver, &maze);

        assert!(animation.explored.is_empty(), "no tick before the delay elapsed");
        assert_eq!(solver.running(), Some(Algorithm::Dfs));
    }

    #[test]
    fn test_update_without_a_run_is_a_no_op() {
        let maze = MazeGrid::generate(10, 19, &mut StdRng::seed_from_u64(33));
        let mut solver = Solver::new();
        let mut animation = AnimationManager::new(Duration::ZERO);

        animation.update(&mut solver, &maze);

        assert!(animation.explored.is_empty());
        assert_eq!(solver.stats(Algorithm::Bfs), None);
    }

    #[test]
    fn test_delay_stays_within_bounds() {
        let mut animation = AnimationManager::new(Duration::from_millis(100));

        animation.speed_up();
        assert_eq!(animation.delay_millis(), 50);
        animation.speed_up();
        assert_eq!(animation.delay_millis(), MIN_DELAY_MS, "never faster than the minimum");

        for _ in 0..20 {
            animation.slow_down();
        }
        assert_eq!(animation.delay_millis(), MAX_DELAY_MS, "never slower than the maximum");
    }

    #[test]
    fn test_restart_clears_previous_cells() {
        let maze = MazeGrid::generate(10, 19, &mut StdRng::seed_from_u64(34));
        let mut solver = Solver::new();
        let mut animation = AnimationManager::new(Duration::ZERO);

        animation.start(&mut solver, &maze, Algorithm::Bfs);
        run_to_completion(&mut animation, &mut solver, &maze);
        animation.start(&mut solver, &maze, Algorithm::Dfs);

        assert_eq!(animation.algorithm, Some(Algorithm::Dfs));
        assert!(animation.explored.is_empty(), "explored cells are dropped");
        assert!(animation.path.is_empty(), "the previous path is dropped");
    }
}
