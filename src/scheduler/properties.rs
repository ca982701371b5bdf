//! Property tests shared by all scheduling engines.

use std::collections::HashMap;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{CpuScheduler, ReadyQueuePolicy, RoundRobinScheduler, ShortestRemainingTimeScheduler};
use crate::models::{Process, Timeline, WorkloadSpec};
use crate::report::{Report, UtilizationBasis};
use crate::scheduler::SchedulerKind;

fn process_set() -> impl Strategy<Value = Vec<Process>> {
    (1usize..12, any::<u64>()).prop_map(|(count, seed)| {
        WorkloadSpec::new(count, 19, 9).generate(&mut StdRng::seed_from_u64(seed))
    })
}

fn schedulers(quantum: i64) -> Vec<Box<dyn CpuScheduler>> {
    vec![
        Box::new(RoundRobinScheduler::new(quantum).unwrap()),
        Box::new(
            RoundRobinScheduler::new(quantum)
                .unwrap()
                .with_policy(ReadyQueuePolicy::Fifo),
        ),
        Box::new(ShortestRemainingTimeScheduler::new()),
    ]
}

fn assert_consistent(processes: &[Process], timeline: &Timeline) {
    let total_burst: i64 = processes.iter().map(|p| p.burst_time).sum();
    assert_eq!(timeline.busy_time(), total_burst);

    for p in processes {
        let finish = p.finish_time.expect("every process finishes");
        assert_eq!(p.turnaround_time, finish - p.arrival_time);
        assert_eq!(p.waiting_time, p.turnaround_time - p.burst_time);
        assert!(p.waiting_time >= 0);
        assert_eq!(timeline.executed_time(p.pid), p.burst_time);
        assert!(timeline
            .slices_for(p.pid)
            .iter()
            .all(|s| s.start >= p.arrival_time && s.end() <= finish));
    }

    // Single CPU: slices never overlap
    assert!(timeline
        .slices
        .windows(2)
        .all(|w| w[0].end() <= w[1].start));
}

proptest! {
    #[test]
    fn prop_timing_identities_and_work_conservation(
        processes in process_set(),
        quantum in 1i64..6,
    ) {
        for scheduler in schedulers(quantum) {
            let mut run = processes.clone();
            let timeline = scheduler.schedule(&mut run).unwrap();
            assert_consistent(&run, &timeline);
        }
    }

    #[test]
    fn prop_large_quantum_is_fcfs(processes in process_set()) {
        let mut sorted = processes;
        sorted.sort_by_key(|p| p.arrival_time);
        let quantum = sorted.iter().map(|p| p.burst_time).max().unwrap_or(1);

        let mut clock = 0;
        let expected: Vec<i64> = sorted
            .iter()
            .map(|p| {
                clock = clock.max(p.arrival_time) + p.burst_time;
                clock
            })
            .collect();

        for policy in [ReadyQueuePolicy::ListOrder, ReadyQueuePolicy::Fifo] {
            let mut run = sorted.clone();
            RoundRobinScheduler::new(quantum)
                .unwrap()
                .with_policy(policy)
                .schedule(&mut run)
                .unwrap();
            let finishes: Vec<i64> = run.iter().filter_map(|p| p.finish_time).collect();
            prop_assert_eq!(&finishes, &expected);
        }
    }

    #[test]
    fn prop_srt_runs_minimum_remaining(processes in process_set()) {
        let mut run = processes.clone();
        let timeline = ShortestRemainingTimeScheduler::new()
            .schedule(&mut run)
            .unwrap();

        let mut remaining: HashMap<i64, i64> =
            processes.iter().map(|p| (p.pid, p.burst_time)).collect();
        for t in 0..timeline.makespan() {
            let ready: Vec<i64> = processes
                .iter()
                .filter(|p| p.arrival_time <= t && remaining[&p.pid] > 0)
                .map(|p| remaining[&p.pid])
                .collect();
            match timeline.running_at(t) {
                Some(pid) => {
                    let least = ready.iter().copied().min();
                    prop_assert_eq!(Some(remaining[&pid]), least);
                    *remaining.get_mut(&pid).unwrap() -= 1;
                }
                None => prop_assert!(ready.is_empty()),
            }
        }
    }

    #[test]
    fn prop_report_is_idempotent(processes in process_set(), quantum in 1i64..6) {
        let mut run = processes;
        RoundRobinScheduler::new(quantum).unwrap().schedule(&mut run).unwrap();
        let kind = SchedulerKind::round_robin(quantum);
        let first = Report::build(kind, &run, UtilizationBasis::LastInList).unwrap();
        let second = Report::build(kind, &run, UtilizationBasis::LastInList).unwrap();
        prop_assert_eq!(first.to_string(), second.to_string());
    }
}
