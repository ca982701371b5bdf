//! Shortest Remaining Time (preemptive SJF) scheduler.
//!
//! # Algorithm
//!
//! At every unit of simulated time:
//! 1. Collect unfinished processes with `arrival_time <= now`.
//! 2. If none, the CPU idles.
//! 3. Otherwise run the one with the least remaining work for one unit.
//!    Ties go to the earliest process in input order.
//!
//! Once all processes finish, `remaining_time` is restored to `burst_time`
//! on every process. `start_time` is not tracked; the [`Timeline`] holds
//! the exact slices.
//!
//! # Complexity
//! O(n * T) where T = makespan.

use tracing::{debug, info};

use super::{prepare, CpuScheduler};
use crate::error::Result;
use crate::models::{Process, Timeline};

/// Preemptive shortest-remaining-time-first scheduler.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::{CpuScheduler, ShortestRemainingTimeScheduler};
///
/// let mut processes = vec![Process::new(1, 0, 5), Process::new(2, 1, 1)];
/// ShortestRemainingTimeScheduler::new()
///     .schedule(&mut processes)
///     .unwrap();
///
/// // P2 preempts P1 as soon as it arrives
/// assert_eq!(processes[1].finish_time, Some(2));
/// assert_eq!(processes[0].finish_time, Some(6));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShortestRemainingTimeScheduler;

impl ShortestRemainingTimeScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl CpuScheduler for ShortestRemainingTimeScheduler {
    fn name(&self) -> &'static str {
        "SRT"
    }

    fn schedule(&self, processes: &mut [Process]) -> Result<Timeline> {
        prepare(processes)?;
        info!(
            algorithm = self.name(),
            processes = processes.len(),
            "simulation started"
        );

        let mut timeline = Timeline::new();
        let mut unfinished: Vec<usize> = (0..processes.len()).collect();
        let mut clock = 0;

        while !unfinished.is_empty() {
            let selected = unfinished
                .iter()
                .enumerate()
                .filter(|&(_, &i)| processes[i].is_ready_at(clock))
                .min_by_key(|&(_, &i)| processes[i].remaining_time)
                .map(|(pos, &i)| (pos, i));

            let Some((pos, idx)) = selected else {
                // Idle: skip straight to the next arrival
                let next_arrival = unfinished
                    .iter()
                    .map(|&i| processes[i].arrival_time)
                    .min()
                    .unwrap_or_else(|| clock + 1);
                debug!(from = clock, to = next_arrival, "cpu idle");
                clock = next_arrival;
                continue;
            };

            let process = &mut processes[idx];
            process.run_for(clock, 1);
            timeline.record(process.pid, clock, 1);
            clock += 1;

            if process.is_finished() {
                debug!(pid = process.pid, finish = clock, "srt completion");
                unfinished.remove(pos);
            }
        }

        for process in processes.iter_mut() {
            process.remaining_time = process.burst_time;
        }

        info!(
            algorithm = self.name(),
            makespan = timeline.makespan(),
            context_switches = timeline.context_switches(),
            "simulation finished"
        );
        Ok(timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use crate::models::ExecutionSlice;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ]
    }

    fn run(processes: &mut [Process]) -> Timeline {
        ShortestRemainingTimeScheduler::new()
            .schedule(processes)
            .unwrap()
    }

    #[test]
    fn test_sample() {
        let mut processes = sample();
        let timeline = run(&mut processes);

        let finishes: Vec<Option<i64>> = processes.iter().map(|p| p.finish_time).collect();
        assert_eq!(finishes, vec![Some(9), Some(5), Some(3)]);
        let waits: Vec<i64> = processes.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![4, 1, 0]);
        // P3 finishes one unit after it arrives
        assert_eq!(processes[2].turnaround_time, 1);

        assert_eq!(
            timeline.slices,
            vec![
                ExecutionSlice::new(1, 0, 1),
                ExecutionSlice::new(2, 1, 1),
                ExecutionSlice::new(3, 2, 1),
                ExecutionSlice::new(2, 3, 2),
                ExecutionSlice::new(1, 5, 4),
            ]
        );
    }

    #[test]
    fn test_remaining_restored_and_start_untracked() {
        let mut processes = sample();
        run(&mut processes);
        for p in &processes {
            assert_eq!(p.remaining_time, p.burst_time);
            assert_eq!(p.start_time, 0);
        }
    }

    #[test]
    fn test_idle_until_first_arrival() {
        let mut processes = vec![Process::new(1, 5, 2)];
        let timeline = run(&mut processes);
        assert_eq!(processes[0].finish_time, Some(7));
        assert_eq!(processes[0].waiting_time, 0);
        assert_eq!(timeline.first_start(1), Some(5));
        assert_eq!(timeline.idle_time(), 5);
    }

    #[test]
    fn test_idle_gap_between_processes() {
        let mut processes = vec![Process::new(1, 0, 1), Process::new(2, 4, 1)];
        let timeline = run(&mut processes);
        assert_eq!(processes[1].finish_time, Some(5));
        assert_eq!(timeline.idle_time(), 3);
    }

    #[test]
    fn test_tie_goes_to_list_order() {
        // At t=1 both have 3 units left; P1 keeps the CPU
        let mut processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
        run(&mut processes);
        assert_eq!(processes[0].finish_time, Some(4));
        assert_eq!(processes[1].finish_time, Some(7));

        let mut reversed = vec![Process::new(2, 1, 3), Process::new(1, 0, 4)];
        run(&mut reversed);
        // P1 is alone at t=0, then P2 wins the tie at t=1
        assert_eq!(reversed[0].finish_time, Some(4));
        assert_eq!(reversed[1].finish_time, Some(7));
    }

    #[test]
    fn test_work_conservation() {
        let mut processes = sample();
        let timeline = run(&mut processes);
        assert_eq!(timeline.busy_time(), 9);
        for p in &processes {
            assert_eq!(timeline.executed_time(p.pid), p.burst_time);
        }
    }

    #[test]
    fn test_empty_input() {
        let timeline = ShortestRemainingTimeScheduler::new()
            .schedule(&mut [])
            .unwrap();
        assert!(timeline.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_pid() {
        let mut processes = vec![Process::new(1, 0, 2), Process::new(1, 0, 2)];
        let err = ShortestRemainingTimeScheduler::new()
            .schedule(&mut processes)
            .unwrap_err();
        assert!(matches!(err, SimError::Validation(_)));
    }
}
