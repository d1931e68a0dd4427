//! Failures of the terminal front end.

use std::io;
use std::path::PathBuf;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Host-level failure: the terminal or a file, never an evaluation error.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("line editor: {0}")]
    Readline(#[from] ReadlineError),

    #[error("cannot read {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
