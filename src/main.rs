use std::process::ExitCode;
use std::time::{Duration, Instant};

use arcade_snake::config::{self, GRID_BOUNDS};
use arcade_snake::error::AppError;
use arcade_snake::game::GameState;
use arcade_snake::game_loop::{GameLoop, LoopPhase};
use arcade_snake::input::{self, GameInput};
use arcade_snake::renderer::{Renderer, TerminalRenderer};
use arcade_snake::terminal_runtime::install_panic_hook;
use clap::Parser;

/// Rows used by the HUD line below the playing field.
const HUD_HEIGHT: u16 = 1;

/// How long one input poll blocks; keeps the loop responsive between ticks.
const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(about = "Classic grid snake with a per-meal speed ramp")]
struct Cli {
    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme (classic, neon).
    #[arg(long, default_value = "classic")]
    theme: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("arcade-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let theme = config::theme_by_name(&cli.theme)
        .ok_or_else(|| AppError::UnknownTheme(cli.theme.clone()))?;

    ensure_terminal_fits()?;
    install_panic_hook();

    let state = match cli.seed {
        Some(seed) => GameState::new_with_seed(GRID_BOUNDS, seed),
        None => GameState::new(GRID_BOUNDS),
    };
    let mut game = GameLoop::new(state);
    let mut renderer = TerminalRenderer::new(theme)?;

    event_loop(&mut game, &mut renderer)
}

/// Draw / poll-input / pump, until quit.
fn event_loop<R: Renderer>(game: &mut GameLoop, renderer: &mut R) -> Result<(), AppError> {
    loop {
        renderer.draw(&game.state().snapshot(), game.phase())?;

        if let Some(event) = input::poll_input(INPUT_POLL_TIMEOUT)? {
            match event {
                GameInput::Quit => break,
                GameInput::Confirm => match game.phase() {
                    LoopPhase::NotStarted => game.start(Instant::now()),
                    LoopPhase::GameOver => game.restart(Instant::now()),
                    LoopPhase::Running => {}
                },
                GameInput::Direction(direction) => game.steer(direction),
            }
        }

        game.pump(Instant::now());
    }

    Ok(())
}

/// Refuses to start when the terminal cannot fit the field plus chrome.
fn ensure_terminal_fits() -> Result<(), AppError> {
    let needed_width = GRID_BOUNDS.width + 2;
    let needed_height = GRID_BOUNDS.height + 2 + HUD_HEIGHT;
    let (actual_width, actual_height) = crossterm::terminal::size()?;

    if actual_width < needed_width || actual_height < needed_height {
        return Err(AppError::TerminalTooSmall {
            needed_width,
            needed_height,
            actual_width,
            actual_height,
        });
    }

    Ok(())
}
