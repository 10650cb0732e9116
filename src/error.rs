use std::io;
use thiserror::Error;

/// Failures that end a session early
#[derive(Debug, Error)]
pub(crate) enum RunError {
    #[error("failed to read input from terminal")]
    Input(#[source] io::Error),
    #[error("failed to draw to terminal")]
    Draw(#[source] io::Error),
}
