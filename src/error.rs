use std::io;

use thiserror::Error;

/// Failures surfaced by the terminal host.
///
/// Core game operations cannot fail; everything here comes from the terminal
/// boundary or the command line.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unknown theme {0:?} (expected one of: classic, ocean, neon)")]
    UnknownTheme(String),
    #[error("failed to prepare terminal: {0}")]
    TerminalSetup(#[source] io::Error),
    #[error("failed to draw frame: {0}")]
    DrawFrame(#[source] io::Error),
    #[error("failed to poll input: {0}")]
    PollInput(#[source] io::Error),
}
