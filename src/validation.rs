//! Input validation for process sets.
//!
//! Checks structural integrity of processes before scheduling. Detects:
//! - Duplicate pids
//! - Negative arrival times
//! - Non-positive burst times
//! - Sets whose latest possible finish time exceeds `i64::MAX`
//!
//! A non-positive burst would never be dispatched by Round Robin, so
//! these checks are what guarantees every simulation terminates.

use crate::models::Process;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process arrives before t=0.
    NegativeArrival,
    /// A process requires no CPU time (or negative time).
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit in simulated time.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a single process definition.
pub fn validate_process(process: &Process) -> ValidationResult {
    let mut errors = Vec::new();
    check_process(process, &mut errors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. No duplicate pids
/// 2. All arrival times ≥ 0
/// 3. All burst times > 0
/// 4. `max(arrival_time) + sum(burst_time)` fits in `i64`
///
/// Check 4 bounds every clock value a work-conserving single-CPU schedule
/// can reach, so engines never overflow on a validated set.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate pid: {}", p.pid),
            ));
        }
        check_process(p, &mut errors);
    }

    if errors.is_empty() && time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst exceeds the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `max(arrival_time) + sum(burst_time)`, or `None` on overflow.
pub fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

fn check_process(p: &Process, errors: &mut Vec<ValidationError>) {
    if p.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!("Process {} arrives at {}", p.pid, p.arrival_time),
        ));
    }
    if p.burst_time <= 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!("Process {} has burst {}", p.pid, p.burst_time),
        ));
    }
    if p.arrival_time.checked_add(p.burst_time).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            format!("Process {} cannot finish within the time range", p.pid),
        ));
    }
}
