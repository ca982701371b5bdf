//! Process model.
//!
//! A process is one schedulable unit of CPU work with a static arrival
//! time and a fixed burst length. Schedulers mutate its timing fields in
//! place as simulated time advances.
//!
//! # Time Representation
//! All times are integer simulated time units relative to t=0.

use serde::{Deserialize, Serialize};

/// A schedulable process.
///
/// `arrival_time` and `burst_time` are fixed for the lifetime of the
/// process. The remaining fields are owned by whichever scheduler runs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier, unique within a process set.
    pub pid: i64,
    /// Time at which the process becomes eligible to run.
    pub arrival_time: i64,
    /// Total CPU time required.
    pub burst_time: i64,
    /// CPU time still owed. Always within `0..=burst_time`.
    pub remaining_time: i64,
    /// Most recent dispatch time.
    ///
    /// Round Robin overwrites this on every slice, so after simulation it
    /// holds the start of the final slice. Shortest Remaining Time leaves
    /// it at 0; use [`Timeline`](super::Timeline) for exact slice starts.
    pub start_time: i64,
    /// Completion time. `None` until `remaining_time` reaches 0.
    pub finish_time: Option<i64>,
    /// `turnaround_time - burst_time`, derived at completion.
    pub waiting_time: i64,
    /// `finish_time - arrival_time`, derived at completion.
    pub turnaround_time: i64,
}

impl Process {
    /// Creates a fresh, unscheduled process.
    pub fn new(pid: i64, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            pid,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            start_time: 0,
            finish_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    /// Whether the process has completed.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finish_time.is_some()
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn is_ready_at(&self, time: i64) -> bool {
        self.arrival_time <= time
    }

    /// Executes the process for up to `amount` units starting at `now`.
    ///
    /// Returns the units actually consumed, which is `amount` clamped to
    /// the remaining work. Completes the process if nothing remains.
    pub fn run_for(&mut self, now: i64, amount: i64) -> i64 {
        let used = amount.min(self.remaining_time);
        self.remaining_time -= used;
        if self.remaining_time == 0 {
            self.complete(now + used);
        }
        used
    }

    /// Marks the process finished at `finish_time` and derives its metrics.
    pub fn complete(&mut self, finish_time: i64) {
        self.remaining_time = 0;
        self.finish_time = Some(finish_time);
        self.turnaround_time = finish_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.burst_time;
    }

    /// Clears all simulation state, keeping identity, arrival and burst.
    pub fn reset(&mut self) {
        *self = Self::new(self.pid, self.arrival_time, self.burst_time);
    }
}
