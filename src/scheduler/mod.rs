//! CPU scheduling engines.
//!
//! Provides the [`CpuScheduler`] trait and two single-CPU disciplines:
//!
//! - [`RoundRobinScheduler`]: fixed time quantum, preemption at slice
//!   boundaries only.
//! - [`ShortestRemainingTimeScheduler`]: preemptive SRTF at unit-time
//!   granularity.
//!
//! Every engine mutates the timing fields of the processes it is handed
//! and returns a [`Timeline`] of the slices it granted.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

#[cfg(test)]
mod properties;
mod round_robin;
mod srt;

pub use round_robin::RoundRobinScheduler;
pub use srt::ShortestRemainingTimeScheduler;

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

use crate::error::{Result, SimError};
use crate::models::{Process, Timeline};
use crate::validation::validate_processes;

/// Round Robin quantum used when none is configured.
pub const DEFAULT_TIME_QUANTUM: i64 = 4;

/// A single-CPU scheduling discipline.
pub trait CpuScheduler: Send + Sync + Debug {
    /// Short algorithm name (e.g., "RR", "SRT").
    fn name(&self) -> &'static str;

    /// Simulates the discipline over `processes`.
    ///
    /// Any previous simulation state on the processes is discarded first.
    /// On return every process has a `finish_time` and derived metrics.
    fn schedule(&self, processes: &mut [Process]) -> Result<Timeline>;
}

/// Which discipline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerKind {
    /// Round Robin with the given quantum.
    RoundRobin {
        /// Maximum contiguous slice per dispatch.
        time_quantum: i64,
    },
    /// Preemptive shortest remaining time first.
    ShortestRemainingTime,
}

/// How Round Robin picks the next process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadyQueuePolicy {
    /// Repeated passes over the process list in input order.
    ///
    /// A process that has not yet arrived but precedes ready processes
    /// in the list makes the clock jump forward to its arrival.
    #[default]
    ListOrder,
    /// True FIFO ready queue ordered by arrival.
    ///
    /// Processes arriving during a slice are queued ahead of the
    /// preempted process. An empty queue idles until the next arrival.
    Fifo,
}

impl SchedulerKind {
    /// Round Robin with the given quantum.
    pub fn round_robin(time_quantum: i64) -> Self {
        Self::RoundRobin { time_quantum }
    }

    /// Short algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::RoundRobin { .. } => "RR",
            Self::ShortestRemainingTime => "SRT",
        }
    }

    /// Builds the scheduler this kind describes.
    ///
    /// `policy` only affects Round Robin.
    pub fn build(&self, policy: ReadyQueuePolicy) -> Result<Box<dyn CpuScheduler>> {
        match *self {
            Self::RoundRobin { time_quantum } => Ok(Box::new(
                RoundRobinScheduler::new(time_quantum)?.with_policy(policy),
            )),
            Self::ShortestRemainingTime => Ok(Box::new(ShortestRemainingTimeScheduler::new())),
        }
    }
}

impl Default for SchedulerKind {
    fn default() -> Self {
        Self::round_robin(DEFAULT_TIME_QUANTUM)
    }
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { time_quantum } => write!(f, "RR (quantum {time_quantum})"),
            Self::ShortestRemainingTime => f.write_str("SRT"),
        }
    }
}

/// Validates the process set and clears prior simulation state.
fn prepare(processes: &mut [Process]) -> Result<()> {
    validate_processes(processes).map_err(SimError::Validation)?;
    processes.iter_mut().for_each(Process::reset);
    Ok(())
}
