//! Built-in dispatch policies.
//!
//! # Categories
//!
//! - **Non-preemptive**: FCFS, SJF
//! - **Preemptive**: SRTF (1-unit ticks), RR (fixed quantum)
//!
//! # Tie-breaking
//! Input order is the universal tie-break: SJF uses a stable sort and SRTF
//! picks the lowest original index among equal remaining times.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{DispatchPolicy, SimulationContext};
use crate::error::ScheduleError;

// ======================== Non-preemptive ========================

/// First-Come-First-Served.
///
/// Runs each task to completion in input order.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn dispatch(&self, ctx: &mut SimulationContext<'_>) {
        for index in 0..ctx.len() {
            let burst = ctx.task(index).remaining;
            ctx.grant(index, burst);
        }
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}

/// Shortest Job First.
///
/// Reorders tasks by ascending burst, then runs them FCFS. The sort is
/// stable, so equal bursts keep input order.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn dispatch(&self, ctx: &mut SimulationContext<'_>) {
        ctx.sort_tasks_by_key(|t| t.burst);
        Fcfs.dispatch(ctx);
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

// ======================== Preemptive ========================

/// Shortest Remaining Time First.
///
/// Re-decides every time unit: the task with the least remaining time
/// runs for one unit, ties going to the lowest input index.
///
/// A min-heap keyed by `(remaining, index)` replaces the per-tick linear
/// scan; the selected task is always the scan's first minimum.
#[derive(Debug, Clone, Copy)]
pub struct Srtf;

impl DispatchPolicy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn dispatch(&self, ctx: &mut SimulationContext<'_>) {
        let mut ready: BinaryHeap<Reverse<(i64, usize)>> = ctx
            .tasks()
            .iter()
            .enumerate()
            .filter(|(_, t)| !t.is_complete())
            .map(|(index, t)| Reverse((t.remaining, index)))
            .collect();

        // All tasks are ready at t=0, so the heap only empties on completion
        // and the clock never idles.
        while let Some(Reverse((remaining, index))) = ready.pop() {
            let tick = remaining.min(1);
            if !ctx.grant(index, tick) {
                ready.push(Reverse((remaining - tick, index)));
            }
        }
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }

    fn is_preemptive(&self) -> bool {
        true
    }
}

/// Round-Robin.
///
/// Cycles through tasks in input order, granting each unfinished task
/// `min(remaining, quantum)` per pass until all are done.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round-Robin policy. The quantum must be positive.
    pub fn new(quantum: i64) -> Result<Self, ScheduleError> {
        if quantum <= 0 {
            return Err(ScheduleError::InvalidQuantum(quantum));
        }
        Ok(Self { quantum })
    }

    /// Time slice per dispatch.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl DispatchPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn dispatch(&self, ctx: &mut SimulationContext<'_>) {
        let mut unfinished = ctx.tasks().iter().filter(|t| !t.is_complete()).count();

        while unfinished > 0 {
            for index in 0..ctx.len() {
                let task = ctx.task(index);
                if task.is_complete() {
                    continue;
                }
                let slice = task.remaining.min(self.quantum);
                if ctx.grant(index, slice) {
                    unfinished -= 1;
                }
            }
        }
    }

    fn description(&self) -> &'static str {
        "Round-Robin"
    }

    fn is_preemptive(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::EventLog;
    use crate::models::Task;

    fn make_tasks(bursts: &[(&str, i64)]) -> Vec<Task> {
        bursts
            .iter()
            .enumerate()
            .map(|(i, &(name, burst))| Task::new(i as u32, name, burst))
            .collect()
    }

    fn run(policy: &dyn DispatchPolicy, bursts: &[(&str, i64)]) -> (Vec<Task>, i64, EventLog) {
        let mut log = EventLog::new();
        let mut ctx = SimulationContext::new(make_tasks(bursts), &mut log);
        policy.dispatch(&mut ctx);
        let (tasks, clock) = ctx.into_parts();
        (tasks, clock, log)
    }

    fn field(tasks: &[Task], f: impl Fn(&Task) -> Option<i64>) -> Vec<i64> {
        tasks.iter().map(|t| f(t).unwrap()).collect()
    }

    fn slices(log: &EventLog) -> Vec<(&str, i64, i64)> {
        log.events()
            .iter()
            .map(|e| (e.task_name.as_str(), e.start, e.length))
            .collect()
    }

    #[test]
    fn test_fcfs() {
        let (tasks, clock, log) = run(&Fcfs, &[("A", 5), ("B", 3), ("C", 8)]);
        assert_eq!(field(&tasks, |t| t.waiting), vec![0, 5, 8]);
        assert_eq!(field(&tasks, |t| t.turnaround), vec![5, 8, 16]);
        assert_eq!(field(&tasks, |t| t.response), vec![0, 5, 8]);
        assert_eq!(clock, 16);
        assert_eq!(slices(&log), vec![("A", 0, 5), ("B", 5, 3), ("C", 8, 8)]);
    }

    #[test]
    fn test_sjf_reorders() {
        let (tasks, clock, _) = run(&Sjf, &[("A", 5), ("B", 3), ("C", 8)]);
        let order: Vec<_> = tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["B", "A", "C"]);
        assert_eq!(field(&tasks, |t| t.waiting), vec![0, 3, 8]);
        assert_eq!(field(&tasks, |t| t.turnaround), vec![3, 8, 16]);
        assert_eq!(clock, 16);
    }

    #[test]
    fn test_sjf_stable_on_ties() {
        // An in-place swap sort would move A2 ahead of A1 here.
        let (tasks, _, _) = run(&Sjf, &[("A1", 5), ("A2", 5), ("S", 3)]);
        let order: Vec<_> = tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(order, vec!["S", "A1", "A2"]);
        assert_eq!(tasks[1].id, 0);
        assert_eq!(tasks[2].id, 1);
    }

    #[test]
    fn test_srtf_shorter_first() {
        let (tasks, clock, log) = run(&Srtf, &[("A", 5), ("B", 3)]);
        assert_eq!(tasks[1].response, Some(0));
        assert_eq!(tasks[1].turnaround, Some(3));
        assert_eq!(tasks[1].waiting, Some(0));
        assert_eq!(tasks[0].response, Some(3));
        assert_eq!(tasks[0].turnaround, Some(8));
        assert_eq!(tasks[0].waiting, Some(3));
        assert_eq!(clock, 8);
        assert_eq!(log.len(), 8);
        assert!(log.events().iter().all(|e| e.length == 1));
        assert_eq!(log.completion_order(), &[1, 0]);
    }

    #[test]
    fn test_srtf_tie_goes_to_lowest_index() {
        let (tasks, _, log) = run(&Srtf, &[("X", 2), ("Y", 2), ("Z", 2)]);
        let order: Vec<_> = log.events().iter().map(|e| e.task_id).collect();
        assert_eq!(order, vec![0, 0, 1, 1, 2, 2]);
        assert_eq!(field(&tasks, |t| t.turnaround), vec![2, 4, 6]);
    }

    #[test]
    fn test_srtf_zero_burst_runs_first() {
        let (tasks, clock, log) = run(&Srtf, &[("A", 2), ("Z", 0)]);
        assert_eq!(slices(&log)[0], ("Z", 0, 0));
        assert_eq!(tasks[1].turnaround, Some(0));
        assert_eq!(tasks[0].response, Some(0));
        assert_eq!(clock, 2);
    }

    #[test]
    fn test_rr_quantum_four() {
        let rr = RoundRobin::new(4).unwrap();
        let (tasks, clock, log) = run(&rr, &[("X", 5), ("Y", 2)]);
        assert_eq!(slices(&log), vec![("X", 0, 4), ("Y", 4, 2), ("X", 6, 1)]);

        assert_eq!(tasks[1].turnaround, Some(6));
        assert_eq!(tasks[1].waiting, Some(4));
        assert_eq!(tasks[1].response, Some(4));
        assert_eq!(tasks[0].turnaround, Some(7));
        assert_eq!(tasks[0].waiting, Some(2));
        assert_eq!(tasks[0].response, Some(0));
        assert_eq!(clock, 7);
    }

    #[test]
    fn test_rr_exact_multiple_no_empty_slice() {
        let rr = RoundRobin::new(3).unwrap();
        let (tasks, clock, log) = run(&rr, &[("A", 6), ("B", 3)]);
        assert_eq!(slices(&log), vec![("A", 0, 3), ("B", 3, 3), ("A", 6, 3)]);
        assert_eq!(tasks[0].turnaround, Some(9));
        assert_eq!(clock, 9);
    }

    #[test]
    fn test_rr_large_quantum_matches_fcfs() {
        let bursts = [("A", 5), ("B", 3), ("C", 8)];
        let rr = RoundRobin::new(100).unwrap();
        let (rr_tasks, _, _) = run(&rr, &bursts);
        let (fcfs_tasks, _, _) = run(&Fcfs, &bursts);
        assert_eq!(rr_tasks, fcfs_tasks);
    }

    #[test]
    fn test_rr_invalid_quantum() {
        assert_eq!(RoundRobin::new(0).unwrap_err(), ScheduleError::InvalidQuantum(0));
        assert!(RoundRobin::new(-1).is_err());
        assert_eq!(RoundRobin::new(2).unwrap().quantum(), 2);
    }

    #[test]
    fn test_policy_metadata() {
        assert_eq!(Fcfs.name(), "FCFS");
        assert_eq!(Sjf.description(), "Shortest Job First");
        assert!(!Sjf.is_preemptive());
        assert!(Srtf.is_preemptive());
        assert!(RoundRobin::new(1).unwrap().is_preemptive());
    }
}
