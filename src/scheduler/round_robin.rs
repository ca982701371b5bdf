//! Round Robin scheduler.
//!
//! # Algorithm (list order)
//!
//! 1. Walk the unfinished processes in input order.
//! 2. Advance the clock to the process's arrival if it has not arrived.
//! 3. Grant `min(quantum, remaining)`; a remainder equal to the quantum
//!    completes the process in this slice.
//! 4. A preempted process stays in place and the walk moves on; a finished
//!    process is removed and the walk restarts from the front.
//!
//! # Algorithm (FIFO)
//!
//! Classic circular ready queue: processes are admitted in arrival order,
//! arrivals during a slice are queued ahead of the preempted process, and
//! an empty queue idles the CPU until the next arrival.
//!
//! # Complexity
//! List order: O(n * S) where S = number of slices. FIFO: O(n log n + S).

use std::collections::VecDeque;
use std::iter::Peekable;
use std::vec::IntoIter;

use tracing::{debug, info};

use super::{prepare, CpuScheduler, ReadyQueuePolicy};
use crate::error::{Result, SimError};
use crate::models::{Process, Timeline};

/// Round Robin with a fixed time quantum.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, RoundRobinScheduler};
///
/// let mut processes = vec![Process::new(1, 0, 3), Process::new(2, 0, 2)];
/// let scheduler = RoundRobinScheduler::new(2).unwrap();
/// let timeline = scheduler.schedule(&mut processes).unwrap();
///
/// assert_eq!(processes[0].finish_time, Some(5));
/// assert_eq!(processes[1].finish_time, Some(4));
/// assert_eq!(timeline.busy_time(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct RoundRobinScheduler {
    time_quantum: i64,
    policy: ReadyQueuePolicy,
}

impl RoundRobinScheduler {
    /// Creates a list-order Round Robin scheduler.
    ///
    /// # Errors
    /// [`SimError::InvalidQuantum`] if `time_quantum <= 0`.
    pub fn new(time_quantum: i64) -> Result<Self> {
        if time_quantum <= 0 {
            return Err(SimError::InvalidQuantum(time_quantum));
        }
        Ok(Self {
            time_quantum,
            policy: ReadyQueuePolicy::ListOrder,
        })
    }

    /// Sets the ready-queue policy.
    pub fn with_policy(mut self, policy: ReadyQueuePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The configured quantum.
    pub fn time_quantum(&self) -> i64 {
        self.time_quantum
    }

    /// The configured ready-queue policy.
    pub fn policy(&self) -> ReadyQueuePolicy {
        self.policy
    }

    /// Runs `process` at `clock` for one slice.
    ///
    /// Returns the clock after the slice.
    fn dispatch(&self, process: &mut Process, clock: i64, timeline: &mut Timeline) -> i64 {
        process.start_time = clock;
        let used = process.run_for(clock, self.time_quantum);
        timeline.record(process.pid, clock, used);
        debug!(
            pid = process.pid,
            start = clock,
            ran = used,
            remaining = process.remaining_time,
            "rr slice"
        );
        clock + used
    }

    fn run_list_order(&self, processes: &mut [Process], timeline: &mut Timeline) {
        let mut unfinished: Vec<usize> = (0..processes.len()).collect();
        let mut clock = 0;

        while !unfinished.is_empty() {
            let mut pos = 0;
            while pos < unfinished.len() {
                let process = &mut processes[unfinished[pos]];
                clock = clock.max(process.arrival_time);
                clock = self.dispatch(process, clock, timeline);

                if process.is_finished() {
                    unfinished.remove(pos);
                    break;
                }
                pos += 1;
            }
        }
    }

    fn run_fifo(&self, processes: &mut [Process], timeline: &mut Timeline) {
        let mut by_arrival: Vec<usize> = (0..processes.len()).collect();
        by_arrival.sort_by_key(|&i| processes[i].arrival_time);
        let mut pending = by_arrival.into_iter().peekable();
        let mut ready: VecDeque<usize> = VecDeque::new();
        let mut clock = 0;

        loop {
            admit(processes, &mut pending, &mut ready, clock);

            let Some(idx) = ready.pop_front() else {
                match pending.peek() {
                    Some(&next) => {
                        clock = clock.max(processes[next].arrival_time);
                        continue;
                    }
                    None => break,
                }
            };

            clock = self.dispatch(&mut processes[idx], clock, timeline);

            // Arrivals during the slice go ahead of the preempted process
            admit(processes, &mut pending, &mut ready, clock);
            if !processes[idx].is_finished() {
                ready.push_back(idx);
            }
        }
    }
}

fn admit(
    processes: &[Process],
    pending: &mut Peekable<IntoIter<usize>>,
    ready: &mut VecDeque<usize>,
    clock: i64,
) {
    while let Some(idx) = pending.next_if(|&i| processes[i].is_ready_at(clock)) {
        ready.push_back(idx);
    }
}

impl CpuScheduler for RoundRobinScheduler {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, processes: &mut [Process]) -> Result<Timeline> {
        prepare(processes)?;
        info!(
            algorithm = self.name(),
            quantum = self.time_quantum,
            policy = ?self.policy,
            processes = processes.len(),
            "simulation started"
        );

        let mut timeline = Timeline::new();
        match self.policy {
            ReadyQueuePolicy::ListOrder => self.run_list_order(processes, &mut timeline),
            ReadyQueuePolicy::Fifo => self.run_fifo(processes, &mut timeline),
        }

        info!(
            algorithm = self.name(),
            makespan = timeline.makespan(),
            slices = timeline.slice_count(),
            "simulation finished"
        );
        Ok(timeline)
    }
}
