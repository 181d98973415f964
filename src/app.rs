//! Core application state and main loop of the terminal front-end.

use std::time::Duration;

use color_eyre::eyre::Result;
use log::debug;
use rand::rngs::StdRng;
use ratatui::DefaultTerminal;

use crate::{
    animation::AnimationManager,
    events,
    labyrinth::MazeGrid,
    pathfinding::Solver,
    types::{MenuItem, Screen},
    ui,
};

/// Application state container for the maze solver front-end.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the maze and Crossterm events will help writing to.
#[derive(Debug)]
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit but it starts off `false`.
    pub(crate) exit: bool,
    /// Current screen being displayed to the user.
    pub(crate) screen: Screen,
    /// Maze being displayed and solved.
    pub(crate) maze: MazeGrid,
    /// Solver holding the latest statistics of each algorithm and the animated run, if any.
    pub(crate) solver: Solver,
    /// Animation manager pacing the solver and keeping the cells to draw.
    pub(crate) animation_manager: AnimationManager,
    /// Random source used when a new maze is requested.
    pub(crate) rng: StdRng,
}

impl App {
    /// Creates the application around an initial maze.
    ///
    /// New mazes requested from the UI keep the dimensions of `maze` and are carved from `rng`.
    pub fn new(maze: MazeGrid, rng: StdRng, delay: Duration) -> Self {
        Self {
            exit: false,
            screen: Screen::MainMenu(MenuItem::Solve),
            maze,
            solver: Solver::new(),
            animation_manager: AnimationManager::new(delay),
            rng,
        }
    }

    /// Runs the main loop of the application.
    ///
    /// This function handles user input and updates the application state. The loop continues until
    /// the exit condition is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        Ok(())
    }

    /// Replaces the maze with a freshly generated one of the same size.
    ///
    /// Any animated run is dropped together with the statistics gathered on the previous maze.
    pub(crate) fn regenerate(&mut self) {
        self.maze = MazeGrid::generate(self.maze.height(), self.maze.width(), &mut self.rng);
        self.solver.reset();
        self.animation_manager.clear();
        debug!("regenerated a {}x{} maze", self.maze.width(), self.maze.height());
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::types::Algorithm;

    #[test]
    fn test_new_app_starts_on_the_menu() {
        let mut rng = StdRng::seed_from_u64(5);
        let maze = MazeGrid::generate(10, 19, &mut rng);
        let app = App::new(maze.clone(), rng, Duration::from_millis(100));

        assert!(!app.exit, "app should not start in exit state");
        assert_eq!(app.screen, Screen::MainMenu(MenuItem::Solve));
        assert_eq!(app.maze, maze);
        assert_eq!(app.solver.running(), None);
        assert_eq!(app.animation_manager.delay_millis(), 100);
    }

    #[test]
    fn test_regenerate_keeps_size_and_drops_statistics() {
        let mut rng = StdRng::seed_from_u64(6);
        let maze = MazeGrid::generate(15, 25, &mut rng);
        let mut app = App::new(maze, rng, Duration::ZERO);
        let _ = app.solver.solve(&app.maze, Algorithm::Bfs);
        app.animation_manager.start(&mut app.solver, &app.maze, Algorithm::Dfs);

        app.regenerate();

        assert_eq!((app.maze.height(), app.maze.width()), (15, 25));
        assert_eq!(app.solver.stats(Algorithm::Bfs), None, "old statistics are dropped");
        assert_eq!(app.solver.running(), None, "the animated run is dropped");
        assert_eq!(app.animation_manager.algorithm, None);
    }
}
