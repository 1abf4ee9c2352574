//! Error types for changelist modules using thiserror.

use thiserror::Error;

/// Errors from running `git log`.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("git not found on PATH. Install git and make sure it is executable.")]
    NotInstalled,

    #[error("Failed to run git: {0}")]
    SpawnFailed(#[source] std::io::Error),
}

/// Errors from the shared text buffer (system clipboard).
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("Clipboard is not available: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Errors while collecting the run options.
#[derive(Error, Debug)]
pub enum InputError {
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Failed to write prompt: {0}")]
    Io(#[from] std::io::Error),
}
