//! Aggregate simulation metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total CPU time | Sum of burst times |
//! | CPU utilization | Total CPU time / horizon × 100 |
//! | Avg waiting time | Mean of `turnaround - burst` |
//! | Avg turnaround time | Mean of `finish - arrival` |
//!
//! The utilization horizon is the finish time of the last process in
//! input order by default. That equals the makespan only when input
//! order matches completion order; [`UtilizationBasis::MaxFinish`] uses
//! the true makespan instead.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::models::Process;

/// Which finish time divides total CPU time for utilization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationBasis {
    /// Finish time of the last process in input order.
    #[default]
    LastInList,
    /// Latest finish time across all processes.
    MaxFinish,
}

/// Aggregate statistics over a finished process set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Number of processes.
    pub process_count: usize,
    /// Sum of burst times.
    pub total_cpu_time: i64,
    /// Denominator used for utilization.
    pub horizon: i64,
    /// CPU utilization in percent.
    pub cpu_utilization: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
}

impl SimulationMetrics {
    /// Computes metrics from finished processes.
    ///
    /// # Errors
    /// - [`SimError::EmptyInput`] if `processes` is empty.
    /// - [`SimError::Unfinished`] if any process lacks a finish time.
    pub fn calculate(processes: &[Process], basis: UtilizationBasis) -> Result<Self> {
        let Some(last) = processes.last() else {
            return Err(SimError::EmptyInput);
        };

        let mut total_cpu_time: i64 = 0;
        // Per-process times can each approach i64::MAX
        let mut total_waiting = 0.0;
        let mut total_turnaround = 0.0;
        let mut max_finish: i64 = 0;

        for p in processes {
            let finish = p.finish_time.ok_or(SimError::Unfinished { pid: p.pid })?;
            max_finish = max_finish.max(finish);
            total_cpu_time = total_cpu_time.saturating_add(p.burst_time);
            total_waiting += p.waiting_time as f64;
            total_turnaround += p.turnaround_time as f64;
        }

        let horizon = match basis {
            UtilizationBasis::LastInList => last.finish_time.unwrap_or(0),
            UtilizationBasis::MaxFinish => max_finish,
        };

        let cpu_utilization = if horizon <= 0 {
            0.0
        } else {
            total_cpu_time as f64 / horizon as f64 * 100.0
        };

        let count = processes.len() as f64;
        Ok(Self {
            process_count: processes.len(),
            total_cpu_time,
            horizon,
            cpu_utilization,
            avg_waiting_time: total_waiting / count,
            avg_turnaround_time: total_turnaround / count,
        })
    }
}
