use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{self, GRID_SIZE};
use grid_snake::error::AppError;
use grid_snake::game::Game;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::terminal_runtime::TerminalSession;

/// How long each loop iteration waits for input; doubles as frame pacing.
const FRAME_POLL_INTERVAL: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
#[command(version, about = "Classic grid snake for the terminal")]
struct Cli {
    /// Color theme for the board (classic, ocean, neon).
    #[arg(long, default_value = "classic")]
    theme: String,

    /// Seed for food placement, for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let theme = config::theme_by_name(&cli.theme)
        .ok_or_else(|| AppError::UnknownTheme(cli.theme.clone()))?;

    let mut game = match cli.seed {
        Some(seed) => Game::new_with_seed(GRID_SIZE, seed),
        None => Game::new(GRID_SIZE),
    };
    let input = InputHandler::new(FRAME_POLL_INTERVAL);

    let mut session = TerminalSession::enter().map_err(AppError::TerminalSetup)?;

    loop {
        let snapshot = game.snapshot();
        session
            .terminal_mut()
            .draw(|frame| renderer::render(frame, &snapshot, theme))
            .map_err(AppError::DrawFrame)?;

        if let Some(event) = input.poll_input().map_err(AppError::PollInput)? {
            match event {
                GameInput::Quit => break,
                GameInput::Start => game.start(Instant::now()),
                GameInput::TogglePause => game.toggle_pause(Instant::now()),
                GameInput::Steer(direction) => game.steer(direction),
            }
        }

        game.poll(Instant::now());
    }

    Ok(())
}
