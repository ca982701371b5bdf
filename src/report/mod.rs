//! Simulation results reporting.
//!
//! Turns a finished process set into a [`Report`]: a per-process table,
//! [`SimulationMetrics`], and Gantt bar triples for a chart renderer.
//! One routine serves every scheduler; the [`SchedulerKind`] only labels
//! the output.
//!
//! # Output
//!
//! ```text
//! Process ID   Finish Time  Waiting Time  Turnaround Time
//! 1                      9             4                9
//!
//! CPU Utilization: 100.00%
//! Average Waiting Time: 4.00
//! Average Turnaround Time: 9.00
//! ```

mod gantt;
mod metrics;

pub use gantt::render_gantt;
pub use metrics::{SimulationMetrics, UtilizationBasis};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Result, SimError};
use crate::models::Process;
use crate::scheduler::SchedulerKind;

/// One table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Process id.
    pub pid: i64,
    /// Completion time.
    pub finish_time: i64,
    /// Time spent ready but not running.
    pub waiting_time: i64,
    /// Time from arrival to completion.
    pub turnaround_time: i64,
}

/// Input for a horizontal-bar timeline renderer.
///
/// Spans `[start_time, start_time + burst_time]` as reported by the
/// process fields, so for preempted processes it is an approximation;
/// use the [`Timeline`](crate::models::Timeline) for exact slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttBar {
    /// Process id, labelled `P<pid>`.
    pub pid: i64,
    /// Bar start.
    pub start_time: i64,
    /// Bar length.
    pub burst_time: i64,
}

impl GanttBar {
    /// Bar label.
    pub fn label(&self) -> String {
        format!("P{}", self.pid)
    }
}

/// Results of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Scheduler that produced the results.
    pub algorithm: SchedulerKind,
    /// Per-process rows in input order.
    pub rows: Vec<ReportRow>,
    /// Aggregate statistics.
    pub metrics: SimulationMetrics,
    /// Gantt bars in completion order.
    pub bars: Vec<GanttBar>,
}

impl Report {
    /// Builds a report from finished processes.
    ///
    /// Does not modify the processes, so building twice yields equal reports.
    ///
    /// # Errors
    /// - [`SimError::EmptyInput`] if `processes` is empty.
    /// - [`SimError::Unfinished`] if any process lacks a finish time.
    pub fn build(
        algorithm: SchedulerKind,
        processes: &[Process],
        basis: UtilizationBasis,
    ) -> Result<Self> {
        let metrics = SimulationMetrics::calculate(processes, basis)?;

        let rows = processes
            .iter()
            .map(|p| {
                Ok(ReportRow {
                    pid: p.pid,
                    finish_time: p.finish_time.ok_or(SimError::Unfinished { pid: p.pid })?,
                    waiting_time: p.waiting_time,
                    turnaround_time: p.turnaround_time,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let mut completed: Vec<&Process> = processes.iter().collect();
        completed.sort_by_key(|p| p.finish_time);
        let bars = completed
            .into_iter()
            .map(|p| GanttBar {
                pid: p.pid,
                start_time: p.start_time,
                burst_time: p.burst_time,
            })
            .collect();

        Ok(Self {
            algorithm,
            rows,
            metrics,
            bars,
        })
    }

    /// Renders the fixed-column per-process table.
    pub fn render_table(&self) -> String {
        let mut out = format!(
            "{:<13}{:>12}{:>14}{:>17}\n",
            "Process ID", "Finish Time", "Waiting Time", "Turnaround Time"
        );
        for row in &self.rows {
            out.push_str(&format!(
                "{:<13}{:>12}{:>14}{:>17}\n",
                row.pid, row.finish_time, row.waiting_time, row.turnaround_time
            ));
        }
        out
    }

    /// Renders the three aggregate metric lines.
    pub fn render_metrics(&self) -> String {
        format!(
            "CPU Utilization: {:.2}%\nAverage Waiting Time: {:.2}\nAverage Turnaround Time: {:.2}\n",
            self.metrics.cpu_utilization,
            self.metrics.avg_waiting_time,
            self.metrics.avg_turnaround_time
        )
    }

    /// Serializes the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Scheduling Results:", self.algorithm)?;
        f.write_str(&self.render_table())?;
        writeln!(f)?;
        f.write_str(&self.render_metrics())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished(pid: i64, arrival: i64, burst: i64, start: i64, finish: i64) -> Process {
        let mut p = Process::new(pid, arrival, burst);
        p.start_time = start;
        p.complete(finish);
        p
    }

    fn sample() -> Vec<Process> {
        vec![
            finished(1, 0, 5, 8, 9),
            finished(2, 1, 3, 7, 8),
            finished(3, 2, 1, 4, 5),
        ]
    }

    fn build(processes: &[Process]) -> Report {
        Report::build(
            SchedulerKind::round_robin(2),
            processes,
            UtilizationBasis::MaxFinish,
        )
        .unwrap()
    }

    #[test]
    fn test_rows_in_input_order() {
        let report = build(&sample());
        let pids: Vec<i64> = report.rows.iter().map(|r| r.pid).collect();
        assert_eq!(pids, vec![1, 2, 3]);
        assert_eq!(
            report.rows[1],
            ReportRow {
                pid: 2,
                finish_time: 8,
                waiting_time: 4,
                turnaround_time: 7
            }
        );
    }

    #[test]
    fn test_bars_in_completion_order() {
        let report = build(&sample());
        let bars: Vec<(i64, i64, i64)> = report
            .bars
            .iter()
            .map(|b| (b.pid, b.start_time, b.burst_time))
            .collect();
        assert_eq!(bars, vec![(3, 4, 1), (2, 7, 3), (1, 8, 5)]);
        assert_eq!(report.bars[0].label(), "P3");
    }

    #[test]
    fn test_render_table() {
        let table = build(&sample()).render_table();
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Process ID"));
        assert_eq!(
            lines[1].split_whitespace().collect::<Vec<_>>(),
            vec!["1", "9", "4", "9"]
        );
        // Fixed columns: every row has the header's width
        assert!(lines.iter().all(|l| l.len() == lines[0].len()));
    }

    #[test]
    fn test_render_metrics_two_decimals() {
        let text = build(&sample()).render_metrics();
        assert_eq!(
            text,
            "CPU Utilization: 100.00%\nAverage Waiting Time: 3.33\nAverage Turnaround Time: 6.33\n"
        );
    }

    #[test]
    fn test_display() {
        let text = build(&sample()).to_string();
        assert!(text.starts_with("RR (quantum 2) Scheduling Results:\nProcess ID"));
        assert!(text.contains("\n\nCPU Utilization: "));
    }

    #[test]
    fn test_report_is_idempotent() {
        let processes = sample();
        let a = build(&processes);
        let b = build(&processes);
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_json_roundtrip() {
        let report = build(&sample());
        let json = report.to_json().unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.algorithm, report.algorithm);
        assert_eq!(parsed.rows, report.rows);
        assert_eq!(parsed.bars, report.bars);
        assert!((parsed.metrics.avg_waiting_time - report.metrics.avg_waiting_time).abs() < 1e-10);
    }

    #[test]
    fn test_empty_input() {
        let err = Report::build(
            SchedulerKind::ShortestRemainingTime,
            &[],
            UtilizationBasis::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SimError::EmptyInput));
    }
}
