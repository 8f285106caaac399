use std::io;
use std::thread;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use cellsnake::config::{GRID_HEIGHT, GRID_WIDTH, GridSize, THEME_CLASSIC, TICK_INTERVAL_MS};
use cellsnake::game::{GameError, GameState};
use cellsnake::input::{GameInput, InputHandler};
use cellsnake::renderer;
use cellsnake::terminal_runtime::TerminalSession;

/// Classic terminal Snake on a decaying-cell board.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {}

/// Top-level failures, surfaced after terminal restoration.
#[derive(Debug, Error)]
enum AppError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("could not set up the board: {0}")]
    Game(#[from] GameError),
}

fn main() -> Result<(), AppError> {
    let _cli = Cli::parse();

    let mut session = TerminalSession::enter()?;
    let result = run(&mut session);
    drop(session);
    result
}

/// Runs one game to completion: poll input, tick, render, delay.
fn run(session: &mut TerminalSession) -> Result<(), AppError> {
    let mut input = InputHandler::new();
    let mut state = GameState::new(GridSize {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
    })?;
    let theme = &THEME_CLASSIC;
    let tick_interval = Duration::from_millis(TICK_INTERVAL_MS);

    session
        .terminal_mut()
        .draw(|frame| renderer::render(frame, &state, theme))?;

    while state.is_running() {
        while let Some(event) = input.poll_input()? {
            match event {
                GameInput::Direction(direction) => state.set_direction(direction),
                GameInput::Quit => return Ok(()),
            }
        }

        state.tick();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &state, theme))?;
        thread::sleep(tick_interval);
    }

    // The last frame already shows the game-over overlay; hold it until the
    // player acknowledges with a key.
    input.wait_for_key()?;
    Ok(())
}
