//! Execution timeline (trace) model.
//!
//! A timeline is the chronological record of every CPU slice granted
//! during a simulation. It replaces reliance on the overwritten
//! `Process::start_time` field when an exact Gantt trace is needed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chronological sequence of execution slices on a single CPU.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Slices in dispatch order. Non-overlapping, non-decreasing starts.
    pub slices: Vec<ExecutionSlice>,
}

/// A contiguous interval during which one process held the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSlice {
    /// Process that executed.
    pub pid: i64,
    /// Slice start time.
    pub start: i64,
    /// Slice length (> 0).
    pub duration: i64,
}

impl ExecutionSlice {
    /// Creates a new slice.
    pub fn new(pid: i64, start: i64, duration: i64) -> Self {
        Self {
            pid,
            start,
            duration,
        }
    }

    /// Exclusive end time.
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.duration
    }
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a slice.
    ///
    /// Zero-length slices are dropped. A slice that continues the previous
    /// slice of the same process without a gap is merged into it, so unit
    /// ticks of one process collapse into a single interval.
    pub fn record(&mut self, pid: i64, start: i64, duration: i64) {
        if duration <= 0 {
            return;
        }
        if let Some(last) = self.slices.last_mut() {
            if last.pid == pid && last.end() == start {
                last.duration += duration;
                return;
            }
        }
        self.slices.push(ExecutionSlice::new(pid, start, duration));
    }

    /// Number of slices.
    pub fn slice_count(&self) -> usize {
        self.slices.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    /// End of the last slice, or 0 for an empty timeline.
    pub fn makespan(&self) -> i64 {
        self.slices.iter().map(ExecutionSlice::end).max().unwrap_or(0)
    }

    /// Total time the CPU spent executing.
    pub fn busy_time(&self) -> i64 {
        self.slices.iter().map(|s| s.duration).sum()
    }

    /// Time within `[0, makespan)` during which the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        self.makespan() - self.busy_time()
    }

    /// All slices belonging to `pid`, in order.
    pub fn slices_for(&self, pid: i64) -> Vec<&ExecutionSlice> {
        self.slices.iter().filter(|s| s.pid == pid).collect()
    }

    /// Total execution time granted to `pid`.
    pub fn executed_time(&self, pid: i64) -> i64 {
        self.slices_for(pid).iter().map(|s| s.duration).sum()
    }

    /// Time at which `pid` first ran.
    pub fn first_start(&self, pid: i64) -> Option<i64> {
        self.slices.iter().find(|s| s.pid == pid).map(|s| s.start)
    }

    /// Executed time per pid.
    pub fn executed_by_pid(&self) -> HashMap<i64, i64> {
        let mut totals: HashMap<i64, i64> = HashMap::new();
        for s in &self.slices {
            *totals.entry(s.pid).or_insert(0) += s.duration;
        }
        totals
    }

    /// Number of times the CPU switched from one process to another.
    pub fn context_switches(&self) -> usize {
        self.slices
            .windows(2)
            .filter(|w| w[0].pid != w[1].pid)
            .count()
    }

    /// The process executing during unit `[time, time + 1)`, if any.
    pub fn running_at(&self, time: i64) -> Option<i64> {
        self.slices
            .iter()
            .find(|s| s.start <= time && time < s.end())
            .map(|s| s.pid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timeline() -> Timeline {
        let mut t = Timeline::new();
        t.record(1, 0, 2);
        t.record(2, 2, 2);
        t.record(1, 6, 3); // idle 4..6
        t
    }

    #[test]
    fn test_makespan_busy_idle() {
        let t = sample_timeline();
        assert_eq!(t.makespan(), 9);
        assert_eq!(t.busy_time(), 7);
        assert_eq!(t.idle_time(), 2);
    }

    #[test]
    fn test_record_merges_contiguous_same_pid() {
        let mut t = Timeline::new();
        t.record(3, 0, 1);
        t.record(3, 1, 1);
        t.record(3, 2, 1);
        assert_eq!(t.slice_count(), 1);
        assert_eq!(t.slices[0], ExecutionSlice::new(3, 0, 3));
    }

    #[test]
    fn test_record_keeps_gap_separate() {
        let mut t = Timeline::new();
        t.record(3, 0, 1);
        t.record(3, 2, 1);
        assert_eq!(t.slice_count(), 2);
    }

    #[test]
    fn test_record_ignores_empty_slice() {
        let mut t = Timeline::new();
        t.record(1, 0, 0);
        assert!(t.is_empty());
    }

    #[test]
    fn test_per_pid_queries() {
        let t = sample_timeline();
        assert_eq!(t.slices_for(1).len(), 2);
        assert_eq!(t.executed_time(1), 5);
        assert_eq!(t.first_start(2), Some(2));
        assert_eq!(t.first_start(99), None);
        assert_eq!(t.executed_by_pid()[&2], 2);
    }

    #[test]
    fn test_context_switches() {
        let t = sample_timeline();
        assert_eq!(t.context_switches(), 2);
        assert_eq!(Timeline::new().context_switches(), 0);
    }

    #[test]
    fn test_running_at() {
        let t = sample_timeline();
        assert_eq!(t.running_at(0), Some(1));
        assert_eq!(t.running_at(3), Some(2));
        assert_eq!(t.running_at(4), None);
        assert_eq!(t.running_at(8), Some(1));
        assert_eq!(t.running_at(9), None);
    }

    #[test]
    fn test_empty_timeline() {
        let t = Timeline::new();
        assert_eq!(t.makespan(), 0);
        assert_eq!(t.idle_time(), 0);
    }
}
