//! Driver errors.
//!
//! Scanning itself never fails; everything here is about the world around
//! it: bad arguments, unreadable inputs, closed output streams.

use std::io;
use std::path::PathBuf;

/// Error produced by a driver command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Bad command line. Reported together with the usage text.
    #[error("{0}")]
    Usage(String),

    /// The input file (or stdin, shown as `-`) could not be read.
    #[error("cannot read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing tokens to the output stream failed.
    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Read { .. } | CliError::Write(_) => 1,
        }
    }
}
