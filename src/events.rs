//! Event handling functions for user input and application state updates.

use std::{
    io::{self, Write as _},
    time::Duration,
};

use color_eyre::eyre::Result;
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyCode};

use crate::{
    types::{Algorithm, MenuItem, Screen},
    App,
};

/// Longest time to wait for a key press before the animation is advanced.
const POLL_TIMEOUT: Duration = Duration::from_millis(10);

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches them to the appropriate handler
/// functions based on the key pressed. It uses a timeout to avoid blocking the animation.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(POLL_TIMEOUT)? {
        if let Event::Key(key) = event::read()? {
            handle_key(app, key.code);
        }
    }

    if matches!(app.screen, Screen::InGame) {
        app.animation_manager.update(&mut app.solver, &app.maze);
        if app.animation_manager.take_chime() {
            ring_bell()?;
        }
    }

    Ok(())
}

/// Dispatches a single key press.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') => app.exit = true,
        KeyCode::Char('j') => handle_j_events(app),
        KeyCode::Char('k') => handle_k_events(app),
        KeyCode::Char('l') => handle_l_events(app),
        KeyCode::Char('h') => handle_h_events(app),
        KeyCode::Char('b') => start_run(app, Algorithm::Bfs),
        KeyCode::Char('d') => start_run(app, Algorithm::Dfs),
        KeyCode::Char('n') if app.screen == Screen::InGame => app.regenerate(),
        KeyCode::Char('+') => app.animation_manager.speed_up(),
        KeyCode::Char('-') => app.animation_manager.slow_down(),
        _ => {}
    }
}

/// Handles 'j' key press events, moving the menu cursor down.
pub(crate) fn handle_j_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.next());
    }
}

/// Handles 'k' key press events, moving the menu cursor up.
pub(crate) fn handle_k_events(app: &mut App) {
    if let Screen::MainMenu(item) = app.screen {
        app.screen = Screen::MainMenu(item.previous());
    }
}

/// Handles 'l' key press events for selection.
///
/// Selecting "New maze" regenerates the maze and stays on the menu.
pub(crate) fn handle_l_events(app: &mut App) {
    match app.screen {
        Screen::MainMenu(MenuItem::Solve) => app.screen = Screen::InGame,
        Screen::MainMenu(MenuItem::NewMaze) => app.regenerate(),
        Screen::MainMenu(MenuItem::Quit) => app.exit = true,
        Screen::InGame => {}
    }
}

/// Handles 'h' key press events, returning from the maze view to the main menu.
///
/// The animated run, if any, is dropped. Statistics of finished runs are kept.
pub(crate) fn handle_h_events(app: &mut App) {
    if app.screen == Screen::InGame {
        app.solver.cancel();
        app.animation_manager.clear();
        app.screen = Screen::MainMenu(MenuItem::Solve);
    }
}

/// Starts animating `algorithm` when the maze view is shown.
fn start_run(app: &mut App, algorithm: Algorithm) {
    if app.screen == Screen::InGame {
        debug!("animating {algorithm}");
        app.animation_manager
            .start(&mut app.solver, &app.maze, algorithm);
    }
}

/// Plays the terminal bell as the success cue.
fn ring_bell() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}
