//! Random workload generation.

use rand::Rng;

use super::Process;

/// Parameters for a synthetic process set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkloadSpec {
    /// Number of processes.
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Burst times are drawn from `1..=max_burst`.
    pub max_burst: i64,
}

impl WorkloadSpec {
    /// Creates a workload spec.
    pub fn new(count: usize, max_arrival: i64, max_burst: i64) -> Self {
        Self {
            count,
            max_arrival: max_arrival.max(0),
            max_burst: max_burst.max(1),
        }
    }

    /// Generates processes with pids `1..=count`, in pid order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        (1..=self.count)
            .map(|pid| {
                let arrival = rng.random_range(0..=self.max_arrival);
                let burst = rng.random_range(1..=self.max_burst);
                Process::new(pid as i64, arrival, burst)
            })
            .collect()
    }

    /// Like [`generate`](Self::generate), sorted by arrival time (stable by pid).
    pub fn generate_sorted<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let mut processes = self.generate(rng);
        processes.sort_by_key(|p| p.arrival_time);
        processes
    }
}
