//! Process definition loader.
//!
//! Reads line-oriented text where each non-blank line holds three
//! whitespace-separated integers: `pid arrival_time burst_time`.
//!
//! Ingestion is best-effort. A line is skipped (and reported as
//! [`SimError::InputParse`]) when it has the wrong number of fields, a
//! non-integer field, a negative arrival, a non-positive burst, an
//! arrival plus burst beyond `i64::MAX`, or a pid already seen earlier in
//! the input.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Result, SimError};
use crate::models::Process;
use crate::validation::validate_process;

/// Loader behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderOptions {
    /// Discard the first line unconditionally, treating it as a header.
    pub skip_header: bool,
}

impl LoaderOptions {
    /// Options that discard a header line.
    pub fn with_header() -> Self {
        Self { skip_header: true }
    }
}

/// Processes parsed from a source plus the lines that were skipped.
#[derive(Debug, Default)]
pub struct ParsedInput {
    /// Accepted processes in source order.
    pub processes: Vec<Process>,
    /// One [`SimError::InputParse`] per skipped line.
    pub skipped: Vec<SimError>,
}

/// Parses a single line.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Process>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let parse_err = |reason: String| SimError::InputParse {
        line: line_no,
        reason,
    };

    let fields: Vec<&str> = trimmed.split_whitespace().collect();
    if fields.len() != 3 {
        return Err(parse_err(format!("expected 3 fields, found {}", fields.len())));
    }

    let mut values = [0i64; 3];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| parse_err(format!("'{field}' is not an integer")))?;
    }

    let process = Process::new(values[0], values[1], values[2]);
    if let Err(errors) = validate_process(&process) {
        let reason = errors
            .into_iter()
            .map(|e| e.message)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(parse_err(reason));
    }
    Ok(Some(process))
}

/// Parses process definitions, collecting skipped lines.
pub fn parse_with_diagnostics(text: &str, options: LoaderOptions) -> ParsedInput {
    let mut parsed = ParsedInput::default();
    let mut seen = HashSet::new();
    let skip = usize::from(options.skip_header);

    for (idx, line) in text.lines().enumerate().skip(skip) {
        let line_no = idx + 1;
        match parse_line(line_no, line) {
            Ok(Some(process)) if !seen.insert(process.pid) => {
                let err = SimError::InputParse {
                    line: line_no,
                    reason: format!("duplicate pid {}", process.pid),
                };
                warn!(%err, "skipping process line");
                parsed.skipped.push(err);
            }
            Ok(Some(process)) => parsed.processes.push(process),
            Ok(None) => {}
            Err(err) => {
                warn!(%err, "skipping process line");
                parsed.skipped.push(err);
            }
        }
    }

    debug!(
        accepted = parsed.processes.len(),
        skipped = parsed.skipped.len(),
        "parsed process definitions"
    );
    parsed
}

/// Parses process definitions, silently dropping malformed lines.
pub fn parse_processes(text: &str, options: LoaderOptions) -> Vec<Process> {
    parse_with_diagnostics(text, options).processes
}

/// Reads and parses a process file.
///
/// # Errors
/// [`SimError::Io`] if the file cannot be read. Malformed lines are not errors.
pub fn load_processes(path: impl AsRef<Path>, options: LoaderOptions) -> Result<Vec<Process>> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_processes(&text, options))
}
