//! User interface rendering functions for all application screens.

use std::rc::Rc;

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{
        canvas::{Canvas, Points},
        Block, BorderType, Borders, Clear, Paragraph,
    },
    Frame,
};

use crate::{
    labyrinth::MazeGrid,
    pathfinding::Solver,
    types::{Algorithm, Cell, MenuItem, Position, Screen},
    App,
};

/// Height of the statistics panel below the maze, borders included.
const STATS_HEIGHT: u16 = 6;

/// Width of the menu block, wide enough for its key hints.
const MENU_WIDTH: u16 = 34;

/// Updates the application UI based on the persistent state.
///
/// This function renders different screens based on the current state stored in the [`App`]
/// structure, dispatching to the appropriate rendering function for each screen type.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    match app.screen {
        Screen::MainMenu(item) => main_menu(frame, item),
        Screen::InGame => in_game(app, frame)?,
    }

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
pub(crate) fn clear(frame: &mut Frame) {
    frame.render_widget(Clear, frame.area());
}

/// Renders a centered, bordered menu block and returns one row per entry inside it.
///
/// The block is sized to its entries plus the two border rows, so every entry gets a row as long
/// as the terminal is tall enough to hold the block at all.
#[expect(
    clippy::indexing_slicing,
    reason = "The collection is created in-place with few, known elements; there is no risk of bad indexing."
)]
pub(crate) fn init_menu(frame: &mut Frame, title: &str, entries: u16) -> Rc<[Rect]> {
    let space = Layout::vertical([Constraint::Length(entries.saturating_add(2))])
        .flex(Flex::Center)
        .split(frame.area())[0];
    let layout = Layout::horizontal([Constraint::Length(MENU_WIDTH)])
        .flex(Flex::Center)
        .split(space)[0];

    let block = Block::bordered()
        .title(title)
        .title_bottom("(j) down / (k) up / (l) select")
        .title_alignment(Alignment::Center)
        .style(Color::Green)
        .border_type(BorderType::Rounded);

    let inner_space = block.inner(layout);

    frame.render_widget(block, layout);

    Layout::vertical(vec![Constraint::Length(1); entries.into()]).split(inner_space)
}

/// Renders the main menu with the highlighted entry shown in reverse colours.
pub(crate) fn main_menu(frame: &mut Frame, item: MenuItem) {
    clear(frame);

    let entries = u16::try_from(MenuItem::ALL.len()).unwrap_or(u16::MAX);
    let inner_layout = init_menu(frame, "Main Menu", entries);

    let content_style = Style::default().fg(Color::Green);
    let active_content_style = Style::default().fg(Color::White).bg(Color::Green);

    for (entry, area) in MenuItem::ALL.into_iter().zip(inner_layout.iter()) {
        let style = if entry == item {
            active_content_style
        } else {
            content_style
        };
        frame.render_widget(Line::styled(entry.label(), style).centered(), *area);
    }
}

/// Converts maze coordinates into canvas coordinates centered on the origin.
///
/// Rows map to `y = (rows - 1) / 2 - row`, so the first row is drawn at the top, and columns map
/// to `x = col - (cols - 1) / 2`.
///
/// # Errors
///
/// This function fails when a coordinate or a grid dimension does not fit in a `u16`.
pub(crate) fn to_canvas_coords(
    positions: &[Position],
    maze: &MazeGrid,
) -> Result<Vec<(f64, f64)>> {
    let rows_n = f64::from(u16::try_from(maze.height())?);
    let cols_n = f64::from(u16::try_from(maze.width())?);

    positions
        .iter()
        .map(|position| {
            let screen_y = (rows_n - 1.) / 2. - f64::from(u16::try_from(position.row)?);
            let screen_x = f64::from(u16::try_from(position.col)?) - (cols_n - 1.) / 2.;

            Ok((screen_x, screen_y))
        })
        .collect()
}

/// Collects the coordinates of every cell holding `cell`.
fn positions_of(maze: &MazeGrid, cell: Cell) -> Vec<Position> {
    maze.rows()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(move |&(_, &other)| other == cell)
                .map(move |(col, _)| Position::new(row, col))
        })
        .collect()
}

/// Builds the statistics line of one algorithm.
fn stats_line(solver: &Solver, algorithm: Algorithm) -> Line<'static> {
    let live = solver
        .active_stats()
        .filter(|_| solver.running() == Some(algorithm));
    let text = match (live, solver.stats(algorithm)) {
        (Some(stats), _) => format!(
            "{algorithm}  running...  steps: {}  cells: {}",
            stats.steps, stats.explored
        ),
        (None, Some(stats)) => format!(
            "{algorithm}  time: {:.3?}  steps: {}  cells: {}",
            stats.elapsed, stats.steps, stats.explored
        ),
        (None, None) => format!("{algorithm}  -"),
    };

    Line::raw(text)
}

/// Renders the maze, the animated exploration and the statistics panel.
///
/// # Errors
///
/// This function may return errors from layout lookups or coordinate conversion operations.
pub(crate) fn in_game(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let maze = &app.maze;
    let animation = &app.animation_manager;
    let maze_rows = u16::try_from(maze.height())?;
    let maze_columns = u16::try_from(maze.width())?;

    let overall_layout = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(STATS_HEIGHT),
        Constraint::Length(1),
    ])
    .split(frame.area());

    let maze_content_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get maze content area from layout")?;
    let stats_area = *overall_layout
        .get(1)
        .ok_or_eyre("failed to get statistics area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let maze_area = Layout::vertical([
        Constraint::Min(1),
        Constraint::Length(maze_rows),
        Constraint::Min(1),
    ])
    .split(maze_content_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze area from layout")?;
    let space = Layout::horizontal([
        Constraint::Min(1),
        Constraint::Length(maze_columns),
        Constraint::Min(1),
    ])
    .split(maze_area)
    .get(1)
    .copied()
    .ok_or_eyre("failed to get maze space from horizontal layout")?;

    // Later layers overwrite earlier ones on the same terminal cell.
    let layers = [
        (to_canvas_coords(&positions_of(maze, Cell::Wall), maze)?, Color::Green),
        (to_canvas_coords(&animation.explored, maze)?, Color::DarkGray),
        (to_canvas_coords(&animation.path, maze)?, Color::Red),
        (to_canvas_coords(&[maze.start()], maze)?, Color::Cyan),
        (to_canvas_coords(&[maze.end()], maze)?, Color::Magenta),
    ];

    let canvas = Canvas::default()
        .x_bounds([
            (-rounded_div::i32(space.width.into(), 2)).into(),
            (rounded_div::i32(space.width.into(), 2)).into(),
        ])
        .y_bounds([
            (-rounded_div::i32(space.height.into(), 2)).into(),
            (rounded_div::i32(space.height.into(), 2)).into(),
        ])
        .marker(Marker::Dot)
        .paint(|ctx| {
            for (coords, color) in &layers {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });

    frame.render_widget(canvas, space);

    let solver = &app.solver;
    let lines = vec![
        stats_line(solver, Algorithm::Bfs),
        stats_line(solver, Algorithm::Dfs),
        Line::raw(format!("Comparison: {}", solver.comparison())),
        Line::raw(format!("Delay: {} ms", animation.delay_millis())),
    ];
    let stats = Paragraph::new(lines).block(
        Block::bordered()
            .title("Statistics")
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green))
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(stats, stats_area);

    let tooltip = Block::default()
        .title("(b) BFS / (d) DFS / (n) new maze / (+/-) speed / (h) menu / (q) quit")
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .borders(Borders::NONE);
    frame.render_widget(tooltip, tooltip_area);

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::{rngs::StdRng, SeedableRng as _};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    /// Creates a test app around a seeded maze.
    fn create_test_app() -> App {
        let mut rng = StdRng::seed_from_u64(21);
        let maze = MazeGrid::generate(10, 19, &mut rng);
        App::new(maze, rng, Duration::ZERO)
    }

    /// Creates a test terminal with known dimensions for UI testing.
    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).expect("failed to create test terminal")
    }

    /// Concatenates every symbol currently in the test terminal's buffer.
    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_draw_main_menu() {
        let app = create_test_app();
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing main menu should succeed");
        let text = screen_text(&terminal);
        assert!(text.contains("Main Menu"), "menu title is drawn");
        for entry in MenuItem::ALL {
            assert!(text.contains(entry.label()), "menu entry {entry:?} is drawn");
        }
    }

    #[test]
    fn test_draw_in_game_during_a_run() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        app.animation_manager
            .start(&mut app.solver, &app.maze, Algorithm::Dfs);
        app.animation_manager.update(&mut app.solver, &app.maze);

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering a running animation should succeed");
        let text = screen_text(&terminal);
        assert!(text.contains("DFS  running...  steps: 1"), "live counters are shown");
        assert!(
            text.contains("no algorithm ran yet"),
            "an unfinished run stays out of the comparison"
        );
    }

    #[test]
    fn test_draw_in_game_before_any_run() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;

        let result = terminal.draw(|frame| {
            draw(&app, frame).expect("drawing should succeed in test");
        });

        assert!(result.is_ok(), "drawing in-game screen should succeed");
        let text = screen_text(&terminal);
        assert!(text.contains("Statistics"), "stats panel is drawn");
        assert!(text.contains("no algorithm ran yet"), "comparison starts empty");
    }

    #[test]
    fn test_draw_in_game_after_a_run() {
        let mut app = create_test_app();
        let mut terminal = create_test_terminal();
        app.screen = Screen::InGame;
        let _ = app.solver.solve(&app.maze, Algorithm::Bfs);

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("in-game should render successfully");
        });

        assert!(result.is_ok(), "rendering in-game after a run should succeed");
        assert!(
            screen_text(&terminal).contains("DFS not run"),
            "comparison mentions the missing run"
        );
    }

    #[test]
    fn test_draw_in_game_on_a_tiny_terminal() {
        let mut app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).expect("terminal");
        app.screen = Screen::InGame;

        let result = terminal.draw(|frame| {
            in_game(&app, frame).expect("a clipped maze still renders");
        });

        assert!(result.is_ok(), "a small terminal only clips the drawing");
    }

    #[test]
    fn test_clear_function() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            clear(frame);
        });

        assert!(result.is_ok(), "clearing screen should succeed");
    }

    #[test]
    fn test_init_menu_rows() {
        let mut terminal = create_test_terminal();

        let result = terminal.draw(|frame| {
            let layout = init_menu(frame, "Main Menu", 3);
            assert_eq!(layout.len(), 3, "main menu should have 3 items");
            for (row, area) in layout.iter().enumerate() {
                assert_eq!(area.height, 1, "entry {row} gets a full row");
            }
            assert!(
                layout.windows(2).all(|pair| pair.first().map(|area| area.y)
                    < pair.last().map(|area| area.y)),
                "entries are stacked top to bottom"
            );
        });

        assert!(result.is_ok(), "initializing main menu should succeed");
    }

    #[test]
    fn test_canvas_coordinates_are_centered() {
        let maze = MazeGrid::generate(3, 5, &mut StdRng::seed_from_u64(1));
        let coords = to_canvas_coords(
            &[Position::new(0, 0), Position::new(1, 2), Position::new(2, 4)],
            &maze,
        )
        .expect("small coordinates convert");

        assert_eq!(coords, vec![(-2., 1.), (0., 0.), (2., -1.)]);
    }

    #[test]
    fn test_positions_of_walls() {
        let maze: MazeGrid = "\
###################
#S                #
################# #
################# #
################# #
################# #
################# #
################# #
#################E#
###################"
            .parse()
            .expect("fixture is valid");

        assert_eq!(positions_of(&maze, Cell::Start), vec![Position::new(1, 1)]);
        assert_eq!(positions_of(&maze, Cell::End), vec![Position::new(8, 17)]);
        assert_eq!(positions_of(&maze, Cell::Open).len(), 22);
    }
}
