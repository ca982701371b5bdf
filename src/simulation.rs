//! Simulation facade.
//!
//! Runs a configured scheduler over a private copy of the input and
//! bundles the finished processes, trace and report. Two runs over the
//! same input never share `Process` values.

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::models::{Process, Timeline};
use crate::report::Report;
use crate::scheduler::SchedulerKind;

/// Everything one simulation run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationOutcome {
    /// Processes with timing fields filled in, in input order.
    pub processes: Vec<Process>,
    /// Slices granted, in dispatch order.
    pub timeline: Timeline,
    /// Table, metrics and Gantt bars.
    pub report: Report,
}

/// A configured simulation.
///
/// # Example
///
/// ```
/// use u_cpusched::config::SimulationConfig;
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::SchedulerKind;
/// use u_cpusched::simulation::Simulation;
///
/// let processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 3), Process::new(3, 2, 1)];
/// let config = SimulationConfig::new().with_algorithm(SchedulerKind::ShortestRemainingTime);
///
/// let outcome = Simulation::new(config).run(&processes).unwrap();
/// assert_eq!(outcome.processes[2].finish_time, Some(3));
/// // The caller's processes are untouched
/// assert_eq!(processes[2].finish_time, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Simulation {
    config: SimulationConfig,
}

impl Simulation {
    /// Creates a simulation with the given configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates the configured scheduler over a copy of `processes`.
    ///
    /// # Errors
    /// - [`SimError::EmptyInput`] if `processes` is empty.
    /// - [`SimError::InvalidQuantum`] for a Round Robin quantum ≤ 0.
    /// - [`SimError::Validation`] for duplicate pids, invalid times, or a
    ///   set whose schedule would run past `i64::MAX`.
    pub fn run(&self, processes: &[Process]) -> Result<SimulationOutcome> {
        if processes.is_empty() {
            return Err(SimError::EmptyInput);
        }
        self.config.validate()?;

        let scheduler = self.config.algorithm.build(self.config.ready_queue)?;
        let mut owned = processes.to_vec();
        let timeline = scheduler.schedule(&mut owned)?;
        let report = Report::build(self.config.algorithm, &owned, self.config.utilization)?;

        Ok(SimulationOutcome {
            processes: owned,
            timeline,
            report,
        })
    }
}

/// Runs Round Robin and Shortest Remaining Time on independent copies.
///
/// Returns `(rr, srt)`.
pub fn compare(
    processes: &[Process],
    time_quantum: i64,
    config: SimulationConfig,
) -> Result<(SimulationOutcome, SimulationOutcome)> {
    let rr = Simulation::new(config.with_algorithm(SchedulerKind::round_robin(time_quantum)))
        .run(processes)?;
    let srt = Simulation::new(config.with_algorithm(SchedulerKind::ShortestRemainingTime))
        .run(processes)?;
    Ok((rr, srt))
}
