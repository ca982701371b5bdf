//! Error taxonomy for loading, validating, simulating and reporting.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors produced by the simulator.
#[derive(Error, Debug)]
pub enum SimError {
    /// A process definition line could not be parsed.
    ///
    /// The loader recovers from this locally by skipping the line.
    #[error("line {line}: {reason}")]
    InputParse {
        /// 1-based line number in the source.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// No processes were supplied.
    #[error("no processes to schedule or report on")]
    EmptyInput,

    /// Round Robin quantum must be a positive integer.
    #[error("time quantum must be positive, got {0}")]
    InvalidQuantum(i64),

    /// The process set failed structural validation.
    #[error("invalid process set: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// A process reached the reporter without a finish time.
    #[error("process {pid} has not finished")]
    Unfinished {
        /// Offending process id.
        pid: i64,
    },

    /// I/O failure while reading input or configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed configuration document.
    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
