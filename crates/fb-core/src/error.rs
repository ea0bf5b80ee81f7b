//! Application error types.

use std::io;

use thiserror::Error;

use crate::cli::ArgError;

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Usage(#[from] ArgError),

    /// Standard output could not be written or flushed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl RunError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Usage(_) => 2,
            RunError::Output(_) => 1,
        }
    }
}
