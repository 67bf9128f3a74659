use std::io;

use thiserror::Error;

/// Fatal startup and terminal-surface errors.
///
/// Game outcomes (collisions, game over) are ordinary values and never appear
/// here.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(
        "terminal too small: the game needs {needed_width}x{needed_height} cells, \
         got {actual_width}x{actual_height}"
    )]
    TerminalTooSmall {
        needed_width: u16,
        needed_height: u16,
        actual_width: u16,
        actual_height: u16,
    },

    #[error("unknown theme {0:?}; available: classic, neon")]
    UnknownTheme(String),
}
