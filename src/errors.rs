// src/errors.rs

//! Crate-wide error types.
//!
//! The `Display` of [`RunnerError::InstanceFailed`] and
//! [`RunnerError::Spawn`] is exactly the operator-facing error line: `main`
//! prints it to stderr verbatim before exiting with status 1.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    /// A child process exited with a non-zero status. Fatal for the whole
    /// run; no retry.
    #[error("Error on CPU {slot}: {stderr}")]
    InstanceFailed {
        slot: usize,
        code: i32,
        stderr: String,
    },

    /// The command could not be launched at all (e.g. binary not found).
    /// Treated the same as an instance failure.
    #[error("Error on CPU {slot}: {source}")]
    Spawn {
        slot: usize,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RunnerError>;
